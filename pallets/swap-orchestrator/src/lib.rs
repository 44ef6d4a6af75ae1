//! Swap Orchestrator Pallet
//!
//! Entry point for loyalty-augmented swaps. Wraps an external constant-product
//! exchange behind the `DexAdapter` trait and composes the two discount engines,
//! the loyalty bonuses, and the anti-gaming guard into a single atomic call.
//!
//! Base conversion always settles at exchange terms; every discount is paid on top
//! from escrowed funds, capped globally relative to the realized output.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

pub mod types;
pub use types::{AssetKind, *};

#[cfg(test)]
pub mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

use frame::prelude::*;
use polkadot_sdk::sp_runtime::Permill;

/// Provisions exchange state for benchmark runs: a quotable pair with funded
/// reserves plus trader balances on both sides of it.
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId> {
  fn setup_market(trader: &AccountId) -> (AssetKind, AssetKind);
}

#[frame::pallet]
pub mod pallet {
  use super::*;
  use alloc::vec;
  use alloc::vec::Vec;
  use frame::deps::sp_runtime::traits::{AccountIdConversion, Saturating, Zero};
  use pallet_affiliate_discounts::AffiliateDiscounts;
  use pallet_discount_pools::PoolDiscounts;
  use pallet_loyalty_registry::{LoyaltyInspect, LoyaltyMutate};
  use polkadot_sdk::frame_support::PalletId;
  use primitives::ecosystem::params;
  use primitives::{AssetOps, Balance, DexAdapter, ExecutionGuard, OfferId, PoolId};

  #[pallet::config]
  pub trait Config: frame_system::Config {
    /// External constant-product exchange
    type Dex: DexAdapter<Self::AccountId>;

    /// Token transfer primitive (platform fee, bonus payouts, emergency withdraw)
    type Assets: AssetOps<Self::AccountId>;

    /// Discount pool engine
    type Pools: PoolDiscounts<Self::AccountId, BlockNumberFor<Self>>;

    /// Affiliate discount engine
    type Offers: AffiliateDiscounts<Self::AccountId>;

    /// Loyalty registry (guard, tier/streak reads, metric accrual)
    type Loyalty: LoyaltyMutate<Self::AccountId>;

    /// Origin allowed to pause, blacklist, and drive the timelock
    type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

    /// Pallet id deriving the orchestrator account (emergency withdraw custody)
    type PalletId: Get<PalletId>;

    /// Platform fee applied until governance overrides it
    #[pallet::constant]
    type DefaultSwapFee: Get<Permill>;

    /// Mandatory delay between proposing and executing an admin action
    #[pallet::constant]
    type TimelockDelay: Get<BlockNumberFor<Self>>;

    /// Weight information
    type WeightInfo: WeightInfo;

    /// Exchange state setup for benchmark runs
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: BenchmarkHelper<Self::AccountId>;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  #[pallet::storage]
  pub type SwapFee<T: Config> = StorageValue<_, Permill, ValueQuery, T::DefaultSwapFee>;

  /// Destination for platform fees and the source of bonus payouts.
  #[pallet::storage]
  pub type Treasury<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

  #[pallet::storage]
  pub type Paused<T: Config> = StorageValue<_, bool, ValueQuery>;

  #[pallet::storage]
  pub type BlacklistedAssets<T: Config> = StorageMap<_, Blake2_128Concat, AssetKind, (), OptionQuery>;

  /// Timelocked admin actions: fingerprint to first eligible block. Single use.
  #[pallet::storage]
  pub type PendingActions<T: Config> =
    StorageMap<_, Blake2_128Concat, [u8; 32], BlockNumberFor<T>, OptionQuery>;

  /// Reentrancy marker; set for the duration of one guarded dispatch.
  #[pallet::storage]
  pub type InFlight<T: Config> = StorageValue<_, bool, ValueQuery>;

  /// System-wide `ExecutionGuard` backed by this pallet's circuit breakers.
  ///
  /// The engine pallets wire this into their `Guard` slot so the pause flag and
  /// the reentrancy marker cover their mutating entry points too.
  pub struct Guard<T>(core::marker::PhantomData<T>);

  impl<T: Config> ExecutionGuard for Guard<T> {
    fn enter() -> DispatchResult {
      ensure!(!Paused::<T>::get(), Error::<T>::TradingHalted);
      ensure!(!InFlight::<T>::get(), Error::<T>::ReentrantCall);
      InFlight::<T>::put(true);
      Ok(())
    }

    fn exit() {
      InFlight::<T>::kill();
    }
  }

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// A swap completed
    SwapExecuted {
      trader: T::AccountId,
      asset_in: AssetKind,
      asset_out: AssetKind,
      amount_in: Balance,
      amount_out: Balance,
      fee: Balance,
      total_discount: Balance,
    },
    /// The global cap trimmed the combined discount
    DiscountCapped {
      trader: T::AccountId,
      requested: Balance,
      disbursed: Balance,
    },
    /// Liquidity was provisioned through the orchestrator
    LiquidityAdded {
      who: T::AccountId,
      asset_a: AssetKind,
      asset_b: AssetKind,
      amount_a: Balance,
      amount_b: Balance,
      lp_minted: Balance,
      pool: Option<PoolId>,
    },
    /// An admin action entered the timelock
    ActionProposed {
      fingerprint: [u8; 32],
      eligible_at: BlockNumberFor<T>,
    },
    /// A timelocked admin action was executed
    ActionExecuted { fingerprint: [u8; 32] },
    /// Trading halted
    TradingPaused,
    /// Trading resumed
    TradingUnpaused,
    /// An asset was barred from swaps
    AssetBlacklisted { asset: AssetKind },
    /// An asset was readmitted
    AssetUnblacklisted { asset: AssetKind },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// Trading is halted
    TradingHalted,
    /// A swap is already executing in this call stack
    ReentrantCall,
    /// Input and output tokens are identical
    SameAsset,
    /// The input amount is zero
    ZeroAmount,
    /// One of the tokens is blacklisted
    AssetBlacklisted,
    /// The deadline block has passed
    DeadlinePassed,
    /// The exchange cannot quote this pair
    NoRoute,
    /// No treasury account configured
    TreasuryNotSet,
    /// No pending action under this fingerprint
    ActionNotFound,
    /// The timelock delay has not elapsed
    TimelockNotElapsed,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Execute a loyalty-augmented swap.
    ///
    /// Pipeline: validate, anti-gaming guard, discount quoting against the expected
    /// output, platform fee and base swap, capped disbursal, metric accrual. Any
    /// failure reverts the whole call including already-reserved discounts.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::swap())]
    pub fn swap(origin: OriginFor<T>, swap_params: SwapParams<BlockNumberFor<T>>) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Guard::<T>::enter()?;
      let result = Self::do_swap(&who, swap_params);
      Guard::<T>::exit();
      result
    }

    /// Provision liquidity on the exchange, accruing loyalty metrics and optionally
    /// creating a discount pool for the pair in the same call.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::add_liquidity_with_discount_pool())]
    pub fn add_liquidity_with_discount_pool(
      origin: OriginFor<T>,
      liquidity_params: LiquidityParams<BlockNumberFor<T>>,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      Guard::<T>::enter()?;
      let result = Self::do_add_liquidity(&who, liquidity_params);
      Guard::<T>::exit();
      result
    }

    /// Stage an admin action behind the timelock.
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::propose_action())]
    pub fn propose_action(origin: OriginFor<T>, action: AdminAction<T::AccountId>) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;
      let fingerprint = frame::hashing::blake2_256(&action.encode());
      let eligible_at =
        frame_system::Pallet::<T>::block_number().saturating_add(T::TimelockDelay::get());
      PendingActions::<T>::insert(fingerprint, eligible_at);
      Self::deposit_event(Event::ActionProposed {
        fingerprint,
        eligible_at,
      });
      Ok(())
    }

    /// Execute a previously proposed action. Bound to the exact proposed
    /// parameters, eligible once, consumed on success.
    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::execute_action())]
    pub fn execute_action(origin: OriginFor<T>, action: AdminAction<T::AccountId>) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;
      let fingerprint = frame::hashing::blake2_256(&action.encode());
      let eligible_at = PendingActions::<T>::get(fingerprint).ok_or(Error::<T>::ActionNotFound)?;
      ensure!(
        frame_system::Pallet::<T>::block_number() >= eligible_at,
        Error::<T>::TimelockNotElapsed
      );
      PendingActions::<T>::remove(fingerprint);

      match action {
        AdminAction::SetSwapFee(fee) => SwapFee::<T>::put(fee),
        AdminAction::SetTreasury(account) => Treasury::<T>::put(account),
        AdminAction::EmergencyWithdraw { asset, amount, to } => {
          T::Assets::transfer(asset, &Self::account_id(), &to, amount)?;
        }
      }

      Self::deposit_event(Event::ActionExecuted { fingerprint });
      Ok(())
    }

    /// Halt swaps and liquidity provisioning.
    #[pallet::call_index(4)]
    #[pallet::weight(T::WeightInfo::pause())]
    pub fn pause(origin: OriginFor<T>) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;
      Paused::<T>::put(true);
      Self::deposit_event(Event::TradingPaused);
      Ok(())
    }

    /// Resume trading.
    #[pallet::call_index(5)]
    #[pallet::weight(T::WeightInfo::unpause())]
    pub fn unpause(origin: OriginFor<T>) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;
      Paused::<T>::put(false);
      Self::deposit_event(Event::TradingUnpaused);
      Ok(())
    }

    /// Bar an asset from appearing on either side of a swap.
    #[pallet::call_index(6)]
    #[pallet::weight(T::WeightInfo::blacklist_asset())]
    pub fn blacklist_asset(origin: OriginFor<T>, asset: AssetKind) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;
      BlacklistedAssets::<T>::insert(asset, ());
      Self::deposit_event(Event::AssetBlacklisted { asset });
      Ok(())
    }

    /// Readmit an asset.
    #[pallet::call_index(7)]
    #[pallet::weight(T::WeightInfo::unblacklist_asset())]
    pub fn unblacklist_asset(origin: OriginFor<T>, asset: AssetKind) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;
      BlacklistedAssets::<T>::remove(asset);
      Self::deposit_event(Event::AssetUnblacklisted { asset });
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    fn treasury() -> Result<T::AccountId, Error<T>> {
      Treasury::<T>::get().ok_or(Error::<T>::TreasuryNotSet)
    }

    /// Tier bonus rate: 10 bps per tier level.
    fn tier_rate(tier: u8) -> Permill {
      Permill::from_parts(
        params::TIER_BONUS_PER_LEVEL
          .deconstruct()
          .saturating_mul(tier as u32),
      )
    }

    /// Streak bonus rate: 5 bps per counted day, capped.
    fn streak_rate(streak: u32) -> Permill {
      let parts = (params::STREAK_BONUS_PER_DAY.deconstruct() as u64)
        .saturating_mul(streak as u64)
        .min(params::MAX_STREAK_BONUS.deconstruct() as u64);
      Permill::from_parts(parts as u32)
    }

    fn do_add_liquidity(
      who: &T::AccountId,
      liquidity_params: LiquidityParams<BlockNumberFor<T>>,
    ) -> DispatchResult {
      let (amount_a, amount_b, lp_minted) = T::Dex::add_liquidity(
        who,
        liquidity_params.asset_a,
        liquidity_params.asset_b,
        liquidity_params.amount_a_desired,
        liquidity_params.amount_b_desired,
        liquidity_params.amount_a_min,
        liquidity_params.amount_b_min,
        who,
      )?;
      T::Loyalty::note_liquidity(who, amount_a.saturating_add(amount_b))?;

      let pool = match liquidity_params.pool {
        Some(pool_params) => Some(T::Pools::create_pool(who, pool_params)?),
        None => None,
      };

      Self::deposit_event(Event::LiquidityAdded {
        who: who.clone(),
        asset_a: liquidity_params.asset_a,
        asset_b: liquidity_params.asset_b,
        amount_a,
        amount_b,
        lp_minted,
        pool,
      });
      Ok(())
    }

    fn do_swap(who: &T::AccountId, swap_params: SwapParams<BlockNumberFor<T>>) -> DispatchResult {
      let SwapParams {
        asset_in,
        asset_out,
        amount_in,
        min_amount_out,
        pool_ids,
        offer_id,
        deadline,
      } = swap_params;

      ensure!(asset_in != asset_out, Error::<T>::SameAsset);
      ensure!(!amount_in.is_zero(), Error::<T>::ZeroAmount);
      ensure!(
        !BlacklistedAssets::<T>::contains_key(asset_in)
          && !BlacklistedAssets::<T>::contains_key(asset_out),
        Error::<T>::AssetBlacklisted
      );
      let now = frame_system::Pallet::<T>::block_number();
      ensure!(now <= deadline, Error::<T>::DeadlinePassed);

      T::Loyalty::ensure_swap_allowed(who, amount_in)?;

      // Every discount base uses the expected output, never the realized one
      let expected_out =
        T::Dex::quote(&[asset_in, asset_out], amount_in).ok_or(Error::<T>::NoRoute)?;

      let mut pool_reservations: Vec<(PoolId, Balance)> = Vec::new();
      for pool_id in pool_ids.iter() {
        let reserved =
          T::Pools::quote_and_reserve(*pool_id, who, asset_in, asset_out, amount_in, expected_out);
        if !reserved.is_zero() {
          pool_reservations.push((*pool_id, reserved));
        }
      }

      let affiliate_portion = match offer_id {
        Some(id) => T::Offers::quote_and_settle(id, who, asset_in, amount_in)?,
        None => 0,
      };

      let tier_bonus = Self::tier_rate(T::Loyalty::tier_of(who)) * expected_out;
      let streak_bonus = Self::streak_rate(T::Loyalty::streak_of(who)) * expected_out;

      // Platform fee comes off the input before the base conversion
      let fee = SwapFee::<T>::get() * amount_in;
      if !fee.is_zero() {
        T::Assets::transfer(asset_in, who, &Self::treasury()?, fee)?;
      }
      let amount_out = T::Dex::swap_exact_in(
        who,
        vec![asset_in, asset_out],
        amount_in.saturating_sub(fee),
        min_amount_out,
        who,
      )?;

      // Greedy capped disbursal: pools in listed order, then affiliate, then bonuses
      let cap = params::GLOBAL_DISCOUNT_CAP * amount_out;
      let requested = pool_reservations
        .iter()
        .map(|(_, amount)| *amount)
        .sum::<Balance>()
        .saturating_add(affiliate_portion)
        .saturating_add(tier_bonus)
        .saturating_add(streak_bonus);
      let mut budget = cap;
      let mut disbursed: Balance = 0;

      for (_, reserved) in &pool_reservations {
        let take = (*reserved).min(budget);
        if take.is_zero() {
          break;
        }
        T::Pools::pay_out(asset_out, who, take)?;
        budget = budget.saturating_sub(take);
        disbursed = disbursed.saturating_add(take);
      }

      let affiliate_take = affiliate_portion.min(budget);
      if !affiliate_take.is_zero() {
        // Settled above, so the offer (and its token) exist
        let token = match offer_id.and_then(T::Offers::offer_asset) {
          Some(token) => token,
          None => asset_in,
        };
        T::Offers::pay_out(token, who, affiliate_take)?;
        budget = budget.saturating_sub(affiliate_take);
        disbursed = disbursed.saturating_add(affiliate_take);
      }

      for bonus in [tier_bonus, streak_bonus] {
        let take = bonus.min(budget);
        if !take.is_zero() {
          T::Assets::transfer(asset_out, &Self::treasury()?, who, take)?;
          budget = budget.saturating_sub(take);
          disbursed = disbursed.saturating_add(take);
        }
      }

      if requested > cap {
        Self::deposit_event(Event::DiscountCapped {
          trader: who.clone(),
          requested,
          disbursed,
        });
      }

      T::Loyalty::record_activity(who, amount_in)?;

      Self::deposit_event(Event::SwapExecuted {
        trader: who.clone(),
        asset_in,
        asset_out,
        amount_in,
        amount_out,
        fee,
        total_discount: disbursed,
      });
      Ok(())
    }

    /// Read-only discount preview; reserves nothing and caps against the expected
    /// output since no realized output exists yet.
    pub fn estimate_discount(
      who: &T::AccountId,
      asset_in: AssetKind,
      asset_out: AssetKind,
      amount_in: Balance,
      pool_ids: &[PoolId],
      offer_id: Option<OfferId>,
    ) -> DiscountEstimate {
      let Some(expected_out) = T::Dex::quote(&[asset_in, asset_out], amount_in) else {
        return DiscountEstimate::default();
      };

      let pools = pool_ids
        .iter()
        .map(|id| T::Pools::preview(*id, who, asset_in, asset_out, amount_in, expected_out))
        .sum::<Balance>();
      let affiliate = offer_id
        .map(|id| T::Offers::preview(id, asset_in, amount_in))
        .unwrap_or(0);
      let tier_bonus = Self::tier_rate(T::Loyalty::tier_of(who)) * expected_out;
      let streak_bonus = Self::streak_rate(T::Loyalty::streak_of(who)) * expected_out;

      let cap = params::GLOBAL_DISCOUNT_CAP * expected_out;
      let total = pools
        .saturating_add(affiliate)
        .saturating_add(tier_bonus)
        .saturating_add(streak_bonus)
        .min(cap);

      DiscountEstimate {
        pools,
        affiliate,
        tier_bonus,
        streak_bonus,
        total,
      }
    }
  }

  #[pallet::genesis_config]
  pub struct GenesisConfig<T: Config> {
    pub treasury: Option<T::AccountId>,
  }

  impl<T: Config> Default for GenesisConfig<T> {
    fn default() -> Self {
      Self { treasury: None }
    }
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      if let Some(treasury) = &self.treasury {
        Treasury::<T>::put(treasury);
      }
    }
  }
}
