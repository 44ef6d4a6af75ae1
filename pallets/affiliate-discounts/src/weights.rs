#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use polkadot_sdk::frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

pub trait WeightInfo {
	fn verify_project() -> Weight;
	fn revoke_project() -> Weight;
	fn create_offer() -> Weight;
	fn fund_offer() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
	fn verify_project() -> Weight {
		Weight::from_parts(15_000_000, 1500)
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn revoke_project() -> Weight {
		Weight::from_parts(15_000_000, 1500)
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn create_offer() -> Weight {
		Weight::from_parts(40_000_000, 3000)
			.saturating_add(T::DbWeight::get().reads(3))
			.saturating_add(T::DbWeight::get().writes(2))
	}
	fn fund_offer() -> Weight {
		Weight::from_parts(45_000_000, 3000)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(2))
	}
}

impl WeightInfo for () {
	fn verify_project() -> Weight {
		Weight::from_parts(15_000_000, 1500)
	}
	fn revoke_project() -> Weight {
		Weight::from_parts(15_000_000, 1500)
	}
	fn create_offer() -> Weight {
		Weight::from_parts(40_000_000, 3000)
	}
	fn fund_offer() -> Weight {
		Weight::from_parts(45_000_000, 3000)
	}
}
