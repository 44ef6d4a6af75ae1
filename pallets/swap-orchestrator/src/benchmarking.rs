#![cfg(feature = "runtime-benchmarks")]

use super::*;
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_system::RawOrigin;
use primitives::AssetKind;

#[benchmarks]
mod benches {
  use super::*;
  use frame::deps::sp_runtime::traits::Saturating;
  use primitives::AssetOps;

  #[benchmark]
  fn swap() {
    let trader: T::AccountId = whitelisted_caller();
    let (asset_in, asset_out) = T::BenchmarkHelper::setup_market(&trader);
    let treasury: T::AccountId = account("treasury", 0, 0);
    Treasury::<T>::put(&treasury);
    let deadline = frame_system::Pallet::<T>::block_number().saturating_add(1000u32.into());
    let swap_params = SwapParams {
      asset_in,
      asset_out,
      amount_in: 10_000,
      min_amount_out: 0,
      pool_ids: Default::default(),
      offer_id: None,
      deadline,
    };
    let out_before = T::Assets::balance(asset_out, &trader);

    #[extrinsic_call]
    swap(RawOrigin::Signed(trader.clone()), swap_params);

    assert!(T::Assets::balance(asset_out, &trader) > out_before);
    assert!(!InFlight::<T>::get());
  }

  #[benchmark]
  fn add_liquidity_with_discount_pool() {
    let who: T::AccountId = whitelisted_caller();
    let (asset_a, asset_b) = T::BenchmarkHelper::setup_market(&who);
    let liquidity_params = LiquidityParams {
      asset_a,
      asset_b,
      amount_a_desired: 10_000,
      amount_b_desired: 10_000,
      amount_a_min: 0,
      amount_b_min: 0,
      pool: None,
    };
    let a_before = T::Assets::balance(asset_a, &who);

    #[extrinsic_call]
    add_liquidity_with_discount_pool(RawOrigin::Signed(who.clone()), liquidity_params);

    assert!(T::Assets::balance(asset_a, &who) < a_before);
    assert!(!InFlight::<T>::get());
  }

  #[benchmark]
  fn propose_action() {
    let action = AdminAction::SetSwapFee(Permill::from_percent(1));
    let fingerprint = frame::hashing::blake2_256(&action.encode());

    #[extrinsic_call]
    propose_action(RawOrigin::Root, action);

    assert!(PendingActions::<T>::contains_key(fingerprint));
  }

  #[benchmark]
  fn execute_action() {
    let action = AdminAction::SetSwapFee(Permill::from_percent(1));
    Pallet::<T>::propose_action(RawOrigin::Root.into(), action.clone()).unwrap();
    let eligible =
      frame_system::Pallet::<T>::block_number().saturating_add(T::TimelockDelay::get());
    frame_system::Pallet::<T>::set_block_number(eligible);

    #[extrinsic_call]
    execute_action(RawOrigin::Root, action);

    assert_eq!(SwapFee::<T>::get(), Permill::from_percent(1));
  }

  #[benchmark]
  fn pause() {
    #[extrinsic_call]
    pause(RawOrigin::Root);

    assert!(Paused::<T>::get());
  }

  #[benchmark]
  fn unpause() {
    Pallet::<T>::pause(RawOrigin::Root.into()).unwrap();

    #[extrinsic_call]
    unpause(RawOrigin::Root);

    assert!(!Paused::<T>::get());
  }

  #[benchmark]
  fn blacklist_asset() {
    #[extrinsic_call]
    blacklist_asset(RawOrigin::Root, AssetKind::Local(1));

    assert!(BlacklistedAssets::<T>::contains_key(AssetKind::Local(1)));
  }

  #[benchmark]
  fn unblacklist_asset() {
    Pallet::<T>::blacklist_asset(RawOrigin::Root.into(), AssetKind::Local(1)).unwrap();

    #[extrinsic_call]
    unblacklist_asset(RawOrigin::Root, AssetKind::Local(1));

    assert!(!BlacklistedAssets::<T>::contains_key(AssetKind::Local(1)));
  }

  impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
