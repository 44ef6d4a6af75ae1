#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use polkadot_sdk::frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

pub trait WeightInfo {
	fn swap() -> Weight;
	fn add_liquidity_with_discount_pool() -> Weight;
	fn propose_action() -> Weight;
	fn execute_action() -> Weight;
	fn pause() -> Weight;
	fn unpause() -> Weight;
	fn blacklist_asset() -> Weight;
	fn unblacklist_asset() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
	fn swap() -> Weight {
		Weight::from_parts(180_000_000, 12000)
			.saturating_add(T::DbWeight::get().reads(16))
			.saturating_add(T::DbWeight::get().writes(12))
	}
	fn add_liquidity_with_discount_pool() -> Weight {
		Weight::from_parts(120_000_000, 8000)
			.saturating_add(T::DbWeight::get().reads(10))
			.saturating_add(T::DbWeight::get().writes(8))
	}
	fn propose_action() -> Weight {
		Weight::from_parts(20_000_000, 2000)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn execute_action() -> Weight {
		Weight::from_parts(35_000_000, 3000)
			.saturating_add(T::DbWeight::get().reads(3))
			.saturating_add(T::DbWeight::get().writes(3))
	}
	fn pause() -> Weight {
		Weight::from_parts(12_000_000, 1000)
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn unpause() -> Weight {
		Weight::from_parts(12_000_000, 1000)
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn blacklist_asset() -> Weight {
		Weight::from_parts(14_000_000, 1000)
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn unblacklist_asset() -> Weight {
		Weight::from_parts(14_000_000, 1000)
			.saturating_add(T::DbWeight::get().writes(1))
	}
}

impl WeightInfo for () {
	fn swap() -> Weight {
		Weight::from_parts(180_000_000, 12000)
	}
	fn add_liquidity_with_discount_pool() -> Weight {
		Weight::from_parts(120_000_000, 8000)
	}
	fn propose_action() -> Weight {
		Weight::from_parts(20_000_000, 2000)
	}
	fn execute_action() -> Weight {
		Weight::from_parts(35_000_000, 3000)
	}
	fn pause() -> Weight {
		Weight::from_parts(12_000_000, 1000)
	}
	fn unpause() -> Weight {
		Weight::from_parts(12_000_000, 1000)
	}
	fn blacklist_asset() -> Weight {
		Weight::from_parts(14_000_000, 1000)
	}
	fn unblacklist_asset() -> Weight {
		Weight::from_parts(14_000_000, 1000)
	}
}
