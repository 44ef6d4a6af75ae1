#![cfg(feature = "runtime-benchmarks")]

use super::*;
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_support::traits::{Currency, Get};
use polkadot_sdk::frame_system::RawOrigin;
use primitives::{AssetKind, DiscountKind, PoolParams};

#[benchmarks(
  where T: pallet_loyalty_registry::Config
)]
mod benches {
  use super::*;

  #[benchmark]
  fn create_pool() {
    let caller: T::AccountId = whitelisted_caller();
    let fee = <T as pallet_loyalty_registry::Config>::RegistrationFee::get();
    <T as pallet_loyalty_registry::Config>::Currency::make_free_balance_be(
      &caller,
      fee.saturating_mul(1_000),
    );
    pallet_loyalty_registry::Pallet::<T>::register(RawOrigin::Signed(caller.clone()).into(), None)
      .unwrap();

    // Native-side reserve so funding works through the registry currency
    let pool_params = PoolParams {
      asset_a: AssetKind::Native,
      asset_b: AssetKind::Local(2),
      reserve_a: 1_000,
      reserve_b: 0,
      discount: DiscountKind::Fixed(10),
      min_trade: 0,
      duration: 100u32.into(),
      reserve_backed: true,
      allowed_buy_tokens: None,
    };

    #[extrinsic_call]
    create_pool(RawOrigin::Signed(caller), pool_params);

    assert!(NextPoolId::<T>::get() > 0);
  }

  impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
