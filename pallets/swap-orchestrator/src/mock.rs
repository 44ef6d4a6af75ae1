extern crate alloc;

use crate as pallet_swap_orchestrator;
use alloc::collections::BTreeMap;
use core::cell::RefCell;
use polkadot_sdk::frame_support::{
  PalletId, construct_runtime, derive_impl,
  traits::{ConstU32, ConstU64, ConstU128, Currency, Get},
};
use polkadot_sdk::frame_system::{self, EnsureRoot};
use polkadot_sdk::sp_runtime::{
  BuildStorage, DispatchError, DispatchResult, Permill, TokenError,
  testing::H256,
  traits::{BlakeTwo256, IdentityLookup},
};
use primitives::ecosystem::params;
use primitives::{AssetKind, AssetOps, DexAdapter};

type Block = frame_system::mocking::MockBlock<Test>;
pub type AccountId = u64;
pub type Balance = u128;

pub const ALICE: AccountId = 1;
pub const BOB: AccountId = 2;
pub const PROJECT: AccountId = 3;
pub const TREASURY: AccountId = 999;
/// Counterparty account backing the mock exchange
pub const DEX: AccountId = u64::MAX;

construct_runtime!(
  pub struct Test {
    System: frame_system,
    Balances: polkadot_sdk::pallet_balances,
    LoyaltyRegistry: pallet_loyalty_registry,
    DiscountPools: pallet_discount_pools,
    AffiliateDiscounts: pallet_affiliate_discounts,
    SwapOrchestrator: pallet_swap_orchestrator,
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

/// The orchestrator's circuit breakers cover every engine entry point.
pub type OrchestratorGuard = pallet_swap_orchestrator::Guard<Test>;

impl pallet_loyalty_registry::Config for Test {
  type Currency = Balances;
  type AdminOrigin = EnsureRoot<AccountId>;
  type Guard = OrchestratorGuard;
  type TreasuryAccount = ConstU64<TREASURY>;
  type RegistrationFee = ConstU128<{ params::REGISTRATION_FEE }>;
  type EpochDuration = ConstU64<{ params::EPOCH_BLOCKS as u64 }>;
  type DayDuration = ConstU64<{ params::DAY_BLOCKS as u64 }>;
  type MinSwapInterval = ConstU64<{ params::MIN_SWAP_INTERVAL_BLOCKS as u64 }>;
  type MaxEpochVolume = ConstU128<{ params::MAX_EPOCH_VOLUME }>;
  type MaxReferralsPerDay = ConstU32<{ params::MAX_REFERRALS_PER_DAY }>;
  type WeightInfo = ();
}

pub struct PoolsPalletId;
impl Get<PalletId> for PoolsPalletId {
  fn get() -> PalletId {
    PalletId(*primitives::pallet_ids::DISCOUNT_POOLS_PALLET_ID)
  }
}

impl pallet_discount_pools::Config for Test {
  type Assets = MockAssets;
  type Loyalty = LoyaltyRegistry;
  type Guard = OrchestratorGuard;
  type PalletId = PoolsPalletId;
  type ClaimCooldown = ConstU64<{ params::CLAIM_COOLDOWN_BLOCKS as u64 }>;
  type MaxPoolDuration = ConstU64<{ params::MAX_POOL_DURATION_BLOCKS as u64 }>;
  type MaxPoolsPerPair = ConstU32<8>;
  type WeightInfo = ();
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
  type Guard = OrchestratorGuard;
  type AdminOrigin = EnsureRoot<AccountId>;
  type PalletId = OffersPalletId;
  type TreasuryAccount = ConstU64<TREASURY>;
  type MaxOfferDuration = ConstU64<{ params::MAX_OFFER_DURATION_BLOCKS as u64 }>;
  type WeightInfo = ();
}

pub struct OrchestratorPalletId;
impl Get<PalletId> for OrchestratorPalletId {
  fn get() -> PalletId {
    PalletId(*primitives::pallet_ids::SWAP_ORCHESTRATOR_PALLET_ID)
  }
}

pub struct DefaultFee;
impl Get<Permill> for DefaultFee {
  fn get() -> Permill {
    params::DEFAULT_SWAP_FEE
  }
}

impl pallet_swap_orchestrator::Config for Test {
  type Dex = MockDex;
  type Assets = MockAssets;
  type Pools = DiscountPools;
  type Offers = AffiliateDiscounts;
  type Loyalty = LoyaltyRegistry;
  type AdminOrigin = EnsureRoot<AccountId>;
  type PalletId = OrchestratorPalletId;
  type DefaultSwapFee = DefaultFee;
  type TimelockDelay = ConstU64<{ params::TIMELOCK_DELAY_BLOCKS as u64 }>;
  type WeightInfo = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = MockBenchmarkHelper;
}

#[cfg(feature = "runtime-benchmarks")]
pub struct MockBenchmarkHelper;

#[cfg(feature = "runtime-benchmarks")]
impl pallet_swap_orchestrator::BenchmarkHelper<AccountId> for MockBenchmarkHelper {
  fn setup_market(trader: &AccountId) -> (AssetKind, AssetKind) {
    let (asset_a, asset_b) = (AssetKind::Local(1), AssetKind::Local(2));
    set_dex_reserves(asset_a, asset_b, 1_000_000, 1_000_000);
    set_asset_balance(*trader, asset_a, 1_000_000);
    set_asset_balance(*trader, asset_b, 1_000_000);
    (asset_a, asset_b)
  }
}

thread_local! {
  static ASSET_BALANCES: RefCell<BTreeMap<(AccountId, AssetKind), Balance>> =
    RefCell::new(BTreeMap::new());

  static DEX_RESERVES: RefCell<BTreeMap<(AssetKind, AssetKind), (Balance, Balance)>> =
    RefCell::new(BTreeMap::new());
}

pub fn reset_mock_adapters() {
  ASSET_BALANCES.with(|balances| balances.borrow_mut().clear());
  DEX_RESERVES.with(|reserves| reserves.borrow_mut().clear());
}

pub fn set_asset_balance(who: AccountId, asset: AssetKind, amount: Balance) {
  ASSET_BALANCES.with(|balances| {
    balances.borrow_mut().insert((who, asset), amount);
  });
}

pub fn asset_balance(who: AccountId, asset: AssetKind) -> Balance {
  MockAssets::balance(asset, &who)
}

/// Seed a constant-product pair and back it with DEX-side token balances.
pub fn set_dex_reserves(asset_a: AssetKind, asset_b: AssetKind, reserve_a: Balance, reserve_b: Balance) {
  let (key, value) = if asset_a <= asset_b {
    ((asset_a, asset_b), (reserve_a, reserve_b))
  } else {
    ((asset_b, asset_a), (reserve_b, reserve_a))
  };
  DEX_RESERVES.with(|reserves| {
    reserves.borrow_mut().insert(key, value);
  });
  set_asset_balance(DEX, asset_a, reserve_a);
  set_asset_balance(DEX, asset_b, reserve_b);
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

pub struct MockDex;

impl MockDex {
  fn reserves(asset_in: AssetKind, asset_out: AssetKind) -> Option<(Balance, Balance)> {
    let key = if asset_in <= asset_out {
      (asset_in, asset_out)
    } else {
      (asset_out, asset_in)
    };
    DEX_RESERVES.with(|reserves| {
      let map = reserves.borrow();
      let (reserve_a, reserve_b) = map.get(&key).copied()?;
      if asset_in <= asset_out {
        Some((reserve_a, reserve_b))
      } else {
        Some((reserve_b, reserve_a))
      }
    })
  }

  fn update_reserves(asset_in: AssetKind, asset_out: AssetKind, reserve_in: Balance, reserve_out: Balance) {
    let (key, value) = if asset_in <= asset_out {
      ((asset_in, asset_out), (reserve_in, reserve_out))
    } else {
      ((asset_out, asset_in), (reserve_out, reserve_in))
    };
    DEX_RESERVES.with(|reserves| {
      reserves.borrow_mut().insert(key, value);
    });
  }
}

impl DexAdapter<AccountId> for MockDex {
  fn quote(path: &[AssetKind], amount_in: Balance) -> Option<Balance> {
    let [asset_in, asset_out] = path else {
      return None;
    };
    let (reserve_in, reserve_out) = Self::reserves(*asset_in, *asset_out)?;
    Some(amount_in.saturating_mul(reserve_out) / reserve_in.saturating_add(amount_in))
  }

  fn swap_exact_in(
    who: &AccountId,
    path: alloc::vec::Vec<AssetKind>,
    amount_in: Balance,
    amount_out_min: Balance,
    recipient: &AccountId,
  ) -> Result<Balance, DispatchError> {
    let [asset_in, asset_out] = path[..] else {
      return Err(DispatchError::Other("UnsupportedPath"));
    };
    let (reserve_in, reserve_out) =
      Self::reserves(asset_in, asset_out).ok_or(DispatchError::Other("NoPool"))?;
    let amount_out = amount_in.saturating_mul(reserve_out) / reserve_in.saturating_add(amount_in);
    if amount_out < amount_out_min {
      return Err(DispatchError::Other("SlippageExceeded"));
    }
    MockAssets::transfer(asset_in, who, &DEX, amount_in)?;
    MockAssets::transfer(asset_out, &DEX, recipient, amount_out)?;
    Self::update_reserves(
      asset_in,
      asset_out,
      reserve_in + amount_in,
      reserve_out - amount_out,
    );
    Ok(amount_out)
  }

  fn add_liquidity(
    who: &AccountId,
    asset_a: AssetKind,
    asset_b: AssetKind,
    amount_a_desired: Balance,
    amount_b_desired: Balance,
    _amount_a_min: Balance,
    _amount_b_min: Balance,
    _recipient: &AccountId,
  ) -> Result<(Balance, Balance, Balance), DispatchError> {
    MockAssets::transfer(asset_a, who, &DEX, amount_a_desired)?;
    MockAssets::transfer(asset_b, who, &DEX, amount_b_desired)?;
    let (reserve_a, reserve_b) = Self::reserves(asset_a, asset_b).unwrap_or((0, 0));
    Self::update_reserves(
      asset_a,
      asset_b,
      reserve_a + amount_a_desired,
      reserve_b + amount_b_desired,
    );
    let lp_minted = integer_sqrt(amount_a_desired.saturating_mul(amount_b_desired));
    Ok((amount_a_desired, amount_b_desired, lp_minted))
  }
}

fn integer_sqrt(n: u128) -> u128 {
  if n == 0 {
    return 0;
  }
  let mut x = n;
  let mut y = x.div_ceil(2);
  while y < x {
    x = y;
    y = (x + n / x) / 2;
  }
  x
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  let mut t = frame_system::GenesisConfig::<Test>::default()
    .build_storage()
    .unwrap();

  pallet_loyalty_registry::GenesisConfig::<Test>::default()
    .assimilate_storage(&mut t)
    .unwrap();

  pallet_swap_orchestrator::GenesisConfig::<Test> {
    treasury: Some(TREASURY),
  }
  .assimilate_storage(&mut t)
  .unwrap();

  let mut ext: polkadot_sdk::sp_io::TestExternalities = t.into();
  ext.execute_with(|| {
    System::set_block_number(1);
    reset_mock_adapters();
    for account in [ALICE, BOB, PROJECT] {
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
