#![cfg(feature = "runtime-benchmarks")]

use super::*;
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_support::traits::Currency;
use polkadot_sdk::frame_system::RawOrigin;

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn register() {
    let caller: T::AccountId = whitelisted_caller();
    let fee = T::RegistrationFee::get();
    T::Currency::make_free_balance_be(&caller, fee.saturating_mul(10));

    #[extrinsic_call]
    register(RawOrigin::Signed(caller.clone()), None);

    assert!(AccountByOwner::<T>::contains_key(&caller));
  }

  #[benchmark]
  fn add_badge() {
    let name = b"Benchmark Badge".to_vec();
    let description = b"Awarded for benchmark throughput".to_vec();

    #[extrinsic_call]
    add_badge(
      RawOrigin::Root,
      name,
      description,
      1_000,
      primitives::BadgeCategory::SwapVolume,
      10,
    );

    assert!(NextBadgeId::<T>::get() > 0);
  }

  impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
