extern crate alloc;

use crate as pallet_loyalty_registry;
use core::cell::Cell;
use polkadot_sdk::frame_support::{
  construct_runtime, derive_impl,
  traits::{ConstU32, ConstU64, ConstU128, Currency},
};
use polkadot_sdk::frame_system::{self, EnsureRoot};
use polkadot_sdk::sp_runtime::{
  BuildStorage, DispatchError, DispatchResult,
  testing::H256,
  traits::{BlakeTwo256, IdentityLookup},
};
use primitives::ExecutionGuard;
use primitives::ecosystem::params;

type Block = frame_system::mocking::MockBlock<Test>;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    Balances: polkadot_sdk::pallet_balances,
    LoyaltyRegistry: pallet_loyalty_registry,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = u64;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Hash = H256;
  type Hashing = BlakeTwo256;
  type AccountData = polkadot_sdk::pallet_balances::AccountData<u128>;
}

impl polkadot_sdk::pallet_balances::Config for Test {
  type MaxLocks = ();
  type MaxReserves = ();
  type ReserveIdentifier = [u8; 8];
  type Balance = u128;
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

/// Treasury destination for registration fees
pub const TREASURY: u64 = 999;

thread_local! {
  static HALTED: Cell<bool> = Cell::new(false);
}

/// Flip the mock circuit breaker consulted by the `Guard` slot.
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
  type AdminOrigin = EnsureRoot<u64>;
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
    set_halted(false);
    // Pre-fund enough accounts for the referral-limit scenarios
    for account in 1..=20u64 {
      let _ = Balances::deposit_creating(&account, 10_000 * params::PRECISION);
    }
  });
  ext
}
