extern crate alloc;

use crate as pallet_affiliate_discounts;
use alloc::collections::BTreeMap;
use core::cell::{Cell, RefCell};
use polkadot_sdk::frame_support::{
  PalletId, construct_runtime, derive_impl,
  traits::{ConstU32, ConstU64, ConstU128, Currency, Get},
};
use polkadot_sdk::frame_system::{self, EnsureRoot};
use polkadot_sdk::sp_runtime::{
  BuildStorage, DispatchError, DispatchResult, TokenError,
  testing::H256,
  traits::{BlakeTwo256, IdentityLookup},
};
use primitives::ecosystem::params;
use primitives::{AssetKind, AssetOps, ExecutionGuard};

type Block = frame_system::mocking::MockBlock<Test>;
pub type AccountId = u64;
pub type Balance = u128;

pub const AFFILIATE: AccountId = 1;
pub const PROJECT: AccountId = 2;
pub const TRADER: AccountId = 3;
pub const TREASURY: AccountId = 999;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    Balances: polkadot_sdk::pallet_balances,
    LoyaltyRegistry: pallet_loyalty_registry,
    AffiliateDiscounts: pallet_affiliate_discounts,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = AccountId;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Hash = H256;
  type Hashing = BlakeTwo256;
  type AccountData = polkadot_sdk::pallet_balances::AccountData<Balance>;
}

impl polkadot_sdk::pallet_balances::Config for Test {
  type MaxLocks = ();
  type MaxReserves = ();
  type ReserveIdentifier = [u8; 8];
  type Balance = Balance;
  type DustRemoval = ();
  type RuntimeEvent = RuntimeEvent;
  type ExistentialDeposit = ConstU128<1>;
  type AccountStore = System;
  type WeightInfo = ();
  type FreezeIdentifier = ();
  type MaxFreezes = ();
  type RuntimeHoldReason = ();
  type RuntimeFreezeReason = ();
  type DoneSlashHandler = ();
}

thread_local! {
  static HALTED: Cell<bool> = Cell::new(false);
}

/// Flip the mock circuit breaker consulted by the `Guard` slots.
pub fn set_halted(halted: bool) {
  HALTED.with(|flag| flag.set(halted));
}

pub struct MockGuard;

impl ExecutionGuard for MockGuard {
  fn enter() -> DispatchResult {
    if HALTED.with(|flag| flag.get()) {
      return Err(DispatchError::Other("TradingHalted"));
    }
    Ok(())
  }

  fn exit() {}
}

impl pallet_loyalty_registry::Config for Test {
  type Currency = Balances;
  type AdminOrigin = EnsureRoot<AccountId>;
  type Guard = MockGuard;
  type TreasuryAccount = ConstU64<TREASURY>;
  type RegistrationFee = ConstU128<{ params::REGISTRATION_FEE }>;
  type EpochDuration = ConstU64<{ params::EPOCH_BLOCKS as u64 }>;
  type DayDuration = ConstU64<{ params::DAY_BLOCKS as u64 }>;
  type MinSwapInterval = ConstU64<{ params::MIN_SWAP_INTERVAL_BLOCKS as u64 }>;
  type MaxEpochVolume = ConstU128<{ params::MAX_EPOCH_VOLUME }>;
  type MaxReferralsPerDay = ConstU32<{ params::MAX_REFERRALS_PER_DAY }>;
  type WeightInfo = ();
}

thread_local! {
  static ASSET_BALANCES: RefCell<BTreeMap<(AccountId, AssetKind), Balance>> =
    RefCell::new(BTreeMap::new());
}

pub fn reset_mock_assets() {
  ASSET_BALANCES.with(|balances| balances.borrow_mut().clear());
}

pub fn set_asset_balance(who: AccountId, asset: AssetKind, amount: Balance) {
  ASSET_BALANCES.with(|balances| {
    balances.borrow_mut().insert((who, asset), amount);
  });
}

pub fn asset_balance(who: AccountId, asset: AssetKind) -> Balance {
  MockAssets::balance(asset, &who)
}

pub struct MockAssets;

impl AssetOps<AccountId> for MockAssets {
  fn transfer(asset: AssetKind, from: &AccountId, to: &AccountId, amount: Balance) -> DispatchResult {
    match asset {
      AssetKind::Native => <Balances as Currency<AccountId>>::transfer(
        from,
        to,
        amount,
        polkadot_sdk::frame_support::traits::ExistenceRequirement::AllowDeath,
      ),
      _ => ASSET_BALANCES.with(|balances| {
        let mut map = balances.borrow_mut();
        let src = map.get(&(*from, asset)).copied().unwrap_or(0);
        if src < amount {
          return Err(DispatchError::Token(TokenError::FundsUnavailable));
        }
        map.insert((*from, asset), src - amount);
        let dst = map.get(&(*to, asset)).copied().unwrap_or(0);
        map.insert((*to, asset), dst + amount);
        Ok(())
      }),
    }
  }

  fn balance(asset: AssetKind, who: &AccountId) -> Balance {
    match asset {
      AssetKind::Native => <Balances as Currency<AccountId>>::free_balance(who),
      _ => ASSET_BALANCES.with(|balances| balances.borrow().get(&(*who, asset)).copied().unwrap_or(0)),
    }
  }
}

pub struct OffersPalletId;
impl Get<PalletId> for OffersPalletId {
  fn get() -> PalletId {
    PalletId(*primitives::pallet_ids::AFFILIATE_DISCOUNTS_PALLET_ID)
  }
}

impl pallet_affiliate_discounts::Config for Test {
  type Assets = MockAssets;
  type Loyalty = LoyaltyRegistry;
  type Guard = MockGuard;
  type AdminOrigin = EnsureRoot<AccountId>;
  type PalletId = OffersPalletId;
  type TreasuryAccount = ConstU64<TREASURY>;
  type MaxOfferDuration = ConstU64<{ params::MAX_OFFER_DURATION_BLOCKS as u64 }>;
  type WeightInfo = ();
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  pallet_loyalty_registry::GenesisConfig::<Test>::default()
    .assimilate_storage(&mut t)
    .unwrap();

  let mut ext: polkadot_sdk::sp_io::TestExternalities = t.into();
  ext.execute_with(|| {
    System::set_block_number(1);
    reset_mock_assets();
    set_halted(false);
    for account in [AFFILIATE, PROJECT, TRADER] {
      let _ = Balances::deposit_creating(&account, 10_000 * params::PRECISION);
    }
  });
  ext
}

pub fn register(who: AccountId) {
  polkadot_sdk::frame_support::assert_ok!(LoyaltyRegistry::register(
    RuntimeOrigin::signed(who),
    None
  ));
}
