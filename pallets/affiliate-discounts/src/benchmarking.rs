#![cfg(feature = "runtime-benchmarks")]

use super::*;
use frame::deps::sp_runtime::Permill;
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_support::traits::{Currency, Get};
use polkadot_sdk::frame_system::RawOrigin;
use primitives::AssetKind;

#[benchmarks(
  where T: pallet_loyalty_registry::Config
)]
mod benches {
  use super::*;

  fn registered_affiliate<T: Config + pallet_loyalty_registry::Config>() -> T::AccountId {
    let caller: T::AccountId = whitelisted_caller();
    let fee = <T as pallet_loyalty_registry::Config>::RegistrationFee::get();
    <T as pallet_loyalty_registry::Config>::Currency::make_free_balance_be(
      &caller,
      fee.saturating_mul(1_000),
    );
    pallet_loyalty_registry::Pallet::<T>::register(RawOrigin::Signed(caller.clone()).into(), None)
      .unwrap();
    caller
  }

  #[benchmark]
  fn verify_project() {
    let project: T::AccountId = account("project", 0, 0);

    #[extrinsic_call]
    verify_project(RawOrigin::Root, project.clone());

    assert!(VerifiedProjects::<T>::get(&project));
  }

  #[benchmark]
  fn revoke_project() {
    let project: T::AccountId = account("project", 0, 0);
    Pallet::<T>::verify_project(RawOrigin::Root.into(), project.clone()).unwrap();

    #[extrinsic_call]
    revoke_project(RawOrigin::Root, project.clone());

    assert!(!VerifiedProjects::<T>::get(&project));
  }

  #[benchmark]
  fn create_offer() {
    let affiliate = registered_affiliate::<T>();
    let project: T::AccountId = account("project", 0, 0);
    Pallet::<T>::verify_project(RawOrigin::Root.into(), project.clone()).unwrap();

    #[extrinsic_call]
    create_offer(
      RawOrigin::Signed(affiliate),
      project,
      AssetKind::Local(1),
      Permill::from_percent(10),
      Permill::from_percent(20),
      100u32.into(),
    );

    assert!(NextOfferId::<T>::get() > 0);
  }

  #[benchmark]
  fn fund_offer() {
    let affiliate = registered_affiliate::<T>();
    let project: T::AccountId = account("project", 0, 0);
    let fee = <T as pallet_loyalty_registry::Config>::RegistrationFee::get();
    <T as pallet_loyalty_registry::Config>::Currency::make_free_balance_be(
      &project,
      fee.saturating_mul(1_000),
    );
    Pallet::<T>::verify_project(RawOrigin::Root.into(), project.clone()).unwrap();
    Pallet::<T>::create_offer(
      RawOrigin::Signed(affiliate).into(),
      project.clone(),
      AssetKind::Native,
      Permill::from_percent(10),
      Permill::from_percent(20),
      100u32.into(),
    )
    .unwrap();

    #[extrinsic_call]
    fund_offer(RawOrigin::Signed(project), 1, 1_000u128);

    assert!(Offers::<T>::get(1).map(|offer| offer.active).unwrap_or(false));
  }

  impl_benchmark_test_suite!(Pallet, crate::mock::new_test_ext(), crate::mock::Test);
}
