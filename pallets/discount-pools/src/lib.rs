//! Discount Pool Engine Pallet
//!
//! Project-funded discount pools keyed by a normalized token pair. Creators escrow
//! reserves into the pallet account; the swap orchestrator asks each listed pool for
//! a quote-and-reserve during a swap and instructs payout once the base swap landed.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

#[cfg(test)]
pub mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

use frame::deps::sp_runtime::{DispatchError, DispatchResult};
use primitives::{AssetKind, Balance, PoolId, PoolParams};

/// Pool-side discount surface consumed by the swap orchestrator.
///
/// `quote_and_reserve` mutates (reserve decrement, cooldown stamp); `preview` is its
/// read-only twin for discount estimation. A non-qualifying trade quotes 0 rather
/// than erring so one dead pool never aborts a swap.
pub trait PoolDiscounts<AccountId, BlockNumber> {
  fn create_pool(
    creator: &AccountId,
    params: PoolParams<BlockNumber>,
  ) -> Result<PoolId, DispatchError>;

  /// Quote the pool's discount for this trade and reserve it. At most one
  /// invocation per pool per swap.
  fn quote_and_reserve(
    pool_id: PoolId,
    trader: &AccountId,
    asset_in: AssetKind,
    asset_out: AssetKind,
    amount_in: Balance,
    expected_out: Balance,
  ) -> Balance;

  /// Read-only preview of `quote_and_reserve`.
  fn preview(
    pool_id: PoolId,
    trader: &AccountId,
    asset_in: AssetKind,
    asset_out: AssetKind,
    amount_in: Balance,
    expected_out: Balance,
  ) -> Balance;

  /// Pay a reserved discount out of the pool custody account.
  fn pay_out(asset: AssetKind, to: &AccountId, amount: Balance) -> DispatchResult;
}

impl<AccountId, BlockNumber> PoolDiscounts<AccountId, BlockNumber> for () {
  fn create_pool(_: &AccountId, _: PoolParams<BlockNumber>) -> Result<PoolId, DispatchError> {
    Err(DispatchError::Other("PoolDiscounts not configured"))
  }

  fn quote_and_reserve(
    _: PoolId,
    _: &AccountId,
    _: AssetKind,
    _: AssetKind,
    _: Balance,
    _: Balance,
  ) -> Balance {
    0
  }

  fn preview(
    _: PoolId,
    _: &AccountId,
    _: AssetKind,
    _: AssetKind,
    _: Balance,
    _: Balance,
  ) -> Balance {
    0
  }

  fn pay_out(_: AssetKind, _: &AccountId, _: Balance) -> DispatchResult {
    Ok(())
  }
}

#[frame::pallet]
pub mod pallet {
  use super::*;
  use alloc::vec::Vec;
  use frame::deps::sp_runtime::traits::{AccountIdConversion, Saturating, Zero};
  use frame::prelude::*;
  use pallet_loyalty_registry::{LoyaltyInspect, LoyaltyMutate};
  use polkadot_sdk::frame_support::PalletId;
  use primitives::ecosystem::params;
  use primitives::{AssetOps, DiscountKind, ExecutionGuard, MaxAllowedBuyTokens, normalize_pair};

  #[pallet::config]
  pub trait Config: frame_system::Config {
    /// Token transfer primitive; moves reserves in and discounts out
    type Assets: AssetOps<Self::AccountId>;

    /// Loyalty registry hooks (creation gating and creator metrics)
    type Loyalty: LoyaltyMutate<Self::AccountId>;

    /// System-wide circuit breaker consulted before pool creation
    type Guard: ExecutionGuard;

    /// Pallet id deriving the reserve custody account
    type PalletId: Get<PalletId>;

    /// Minimum blocks between two claims from the same pool by the same account
    #[pallet::constant]
    type ClaimCooldown: Get<BlockNumberFor<Self>>;

    /// Longest lifetime a pool may be created with
    #[pallet::constant]
    type MaxPoolDuration: Get<BlockNumberFor<Self>>;

    /// Index bound per normalized pair
    #[pallet::constant]
    type MaxPoolsPerPair: Get<u32>;

    /// Weight information
    type WeightInfo: WeightInfo;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  /// A funded discount pool. The pair is stored normalized; `reserve_a`/`reserve_b`
  /// follow that ordering, not the creator's argument order.
  #[derive(Clone, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
  pub struct DiscountPool<AccountId, BlockNumber> {
    pub creator: AccountId,
    pub asset_a: AssetKind,
    pub asset_b: AssetKind,
    pub reserve_a: Balance,
    pub reserve_b: Balance,
    pub discount: DiscountKind,
    /// Trades below this input amount quote zero
    pub min_trade: Balance,
    /// Fixed at creation from the combined initial reserves; never recomputed
    pub per_trade_cap: Balance,
    /// Cumulative qualifying input volume
    pub volume: Balance,
    pub expires_at: BlockNumber,
    pub active: bool,
    /// When false the internal reserve ledger does not clamp quotes
    pub reserve_backed: bool,
    pub allowed_buy_tokens: Option<BoundedVec<AssetKind, MaxAllowedBuyTokens>>,
  }

  /// Per-(pool, trader) claim bookkeeping.
  #[derive(Clone, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
  pub struct ClaimRecord<BlockNumber> {
    pub last_claim: BlockNumber,
    pub total_claimed: Balance,
  }

  #[pallet::storage]
  pub type NextPoolId<T: Config> = StorageValue<_, PoolId, ValueQuery>;

  #[pallet::storage]
  pub type Pools<T: Config> =
    StorageMap<_, Blake2_128Concat, PoolId, DiscountPool<T::AccountId, BlockNumberFor<T>>>;

  /// Derived lookup index, keyed by the normalized pair.
  #[pallet::storage]
  pub type PoolsByPair<T: Config> = StorageMap<
    _,
    Blake2_128Concat,
    (AssetKind, AssetKind),
    BoundedVec<PoolId, T::MaxPoolsPerPair>,
    ValueQuery,
  >;

  #[pallet::storage]
  pub type Claims<T: Config> = StorageDoubleMap<
    _,
    Blake2_128Concat,
    PoolId,
    Blake2_128Concat,
    T::AccountId,
    ClaimRecord<BlockNumberFor<T>>,
    OptionQuery,
  >;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// A pool was created and its reserves escrowed
    PoolCreated {
      pool: PoolId,
      creator: T::AccountId,
      asset_a: AssetKind,
      asset_b: AssetKind,
    },
    /// A discount was quoted and reserved for a trader
    DiscountReserved {
      pool: PoolId,
      trader: T::AccountId,
      amount: Balance,
    },
    /// The pool stopped quoting permanently (expiry or exhausted reserves)
    PoolDeactivated { pool: PoolId },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// Pool creation requires a loyalty account
    NoLoyaltyAccount,
    /// Both pool tokens are the same asset
    IdenticalAssets,
    /// Percentage discount exceeds the configured ceiling
    DiscountTooHigh,
    /// The discount evaluates to zero for every trade
    ZeroDiscount,
    /// Neither reserve is funded
    EmptyReserves,
    /// Pool lifetime must be non-zero
    ZeroDuration,
    /// Pool lifetime exceeds the ceiling
    DurationTooLong,
    /// Buy-only allow-set is empty, names a token outside the pair, or covers both sides
    InvalidAllowSet,
    /// The pair index is full
    TooManyPoolsForPair,
    /// Creator cannot fund the declared reserves
    InsufficientBalance,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Create a discount pool, escrowing both declared reserves.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::create_pool())]
    pub fn create_pool(
      origin: OriginFor<T>,
      pool_params: PoolParams<BlockNumberFor<T>>,
    ) -> DispatchResult {
      let who = ensure_signed(origin)?;
      T::Guard::enter()?;
      let result = Self::do_create_pool(&who, pool_params).map(|_| ());
      T::Guard::exit();
      result
    }
  }

  impl<T: Config> Pallet<T> {
    /// Reserve custody account; all pool funds sit here.
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    /// Pools currently able to quote for a pair, in index order.
    pub fn active_pools_for(asset_a: AssetKind, asset_b: AssetKind) -> Vec<PoolId> {
      let pair = normalize_pair(asset_a, asset_b);
      let now = frame_system::Pallet::<T>::block_number();
      PoolsByPair::<T>::get(pair)
        .into_iter()
        .filter(|id| Pools::<T>::get(id).is_some_and(|pool| pool.active && now < pool.expires_at))
        .collect()
    }

    fn do_create_pool(
      creator: &T::AccountId,
      pool_params: PoolParams<BlockNumberFor<T>>,
    ) -> Result<PoolId, DispatchError> {
      ensure!(
        T::Loyalty::account_of(creator).is_some(),
        Error::<T>::NoLoyaltyAccount
      );
      ensure!(
        pool_params.asset_a != pool_params.asset_b,
        Error::<T>::IdenticalAssets
      );
      match pool_params.discount {
        DiscountKind::InputPercent(pct) | DiscountKind::OutputPercent(pct) => {
          ensure!(!pct.is_zero(), Error::<T>::ZeroDiscount);
          ensure!(pct <= params::MAX_POOL_DISCOUNT, Error::<T>::DiscountTooHigh);
        }
        DiscountKind::Fixed(amount) => ensure!(!amount.is_zero(), Error::<T>::ZeroDiscount),
      }
      let combined = pool_params.reserve_a.saturating_add(pool_params.reserve_b);
      ensure!(!combined.is_zero(), Error::<T>::EmptyReserves);
      ensure!(!pool_params.duration.is_zero(), Error::<T>::ZeroDuration);
      ensure!(
        pool_params.duration <= T::MaxPoolDuration::get(),
        Error::<T>::DurationTooLong
      );
      if let Some(allowed) = &pool_params.allowed_buy_tokens {
        ensure!(!allowed.is_empty(), Error::<T>::InvalidAllowSet);
        for token in allowed.iter() {
          ensure!(
            *token == pool_params.asset_a || *token == pool_params.asset_b,
            Error::<T>::InvalidAllowSet
          );
        }
        // Covering both sides would disqualify every direction
        ensure!(
          !(allowed.contains(&pool_params.asset_a) && allowed.contains(&pool_params.asset_b)),
          Error::<T>::InvalidAllowSet
        );
      }

      // Both escrow transfers must land or neither; check funding up front
      ensure!(
        T::Assets::balance(pool_params.asset_a, creator) >= pool_params.reserve_a,
        Error::<T>::InsufficientBalance
      );
      ensure!(
        T::Assets::balance(pool_params.asset_b, creator) >= pool_params.reserve_b,
        Error::<T>::InsufficientBalance
      );

      let pool_id = NextPoolId::<T>::get().saturating_add(1);
      let pair = normalize_pair(pool_params.asset_a, pool_params.asset_b);
      PoolsByPair::<T>::try_mutate(pair, |list| {
        list
          .try_push(pool_id)
          .map_err(|_| Error::<T>::TooManyPoolsForPair)
      })?;
      NextPoolId::<T>::put(pool_id);

      let custody = Self::account_id();
      if !pool_params.reserve_a.is_zero() {
        T::Assets::transfer(
          pool_params.asset_a,
          creator,
          &custody,
          pool_params.reserve_a,
        )?;
      }
      if !pool_params.reserve_b.is_zero() {
        T::Assets::transfer(
          pool_params.asset_b,
          creator,
          &custody,
          pool_params.reserve_b,
        )?;
      }

      // Reserves re-expressed in normalized pair order
      let (reserve_a, reserve_b) = if pair.0 == pool_params.asset_a {
        (pool_params.reserve_a, pool_params.reserve_b)
      } else {
        (pool_params.reserve_b, pool_params.reserve_a)
      };

      let now = frame_system::Pallet::<T>::block_number();
      let pool = DiscountPool {
        creator: creator.clone(),
        asset_a: pair.0,
        asset_b: pair.1,
        reserve_a,
        reserve_b,
        discount: pool_params.discount,
        min_trade: pool_params.min_trade,
        per_trade_cap: combined / params::PER_TRADE_CAP_DIVISOR,
        volume: 0,
        expires_at: now.saturating_add(pool_params.duration),
        active: true,
        reserve_backed: pool_params.reserve_backed,
        allowed_buy_tokens: pool_params.allowed_buy_tokens,
      };
      Pools::<T>::insert(pool_id, pool);

      T::Loyalty::note_pool_created(creator)?;

      Self::deposit_event(Event::PoolCreated {
        pool: pool_id,
        creator: creator.clone(),
        asset_a: pair.0,
        asset_b: pair.1,
      });
      Ok(pool_id)
    }

    /// Quote without side effects. Returns 0 for every non-qualifying trade.
    fn compute_quote(
      pool: &DiscountPool<T::AccountId, BlockNumberFor<T>>,
      claim: Option<&ClaimRecord<BlockNumberFor<T>>>,
      now: BlockNumberFor<T>,
      asset_in: AssetKind,
      asset_out: AssetKind,
      amount_in: Balance,
      expected_out: Balance,
    ) -> Balance {
      if !pool.active || now >= pool.expires_at || asset_in == asset_out {
        return 0;
      }
      if normalize_pair(asset_in, asset_out) != (pool.asset_a, pool.asset_b) {
        return 0;
      }
      if amount_in < pool.min_trade {
        return 0;
      }
      if let Some(allowed) = &pool.allowed_buy_tokens {
        // Buy-only: the sold token must be allowed and the bought one must not
        if !allowed.contains(&asset_in) || allowed.contains(&asset_out) {
          return 0;
        }
      }
      if let Some(record) = claim {
        if now < record.last_claim.saturating_add(T::ClaimCooldown::get()) {
          return 0;
        }
      }

      let raw = match pool.discount {
        DiscountKind::InputPercent(pct) => pct * amount_in,
        DiscountKind::OutputPercent(pct) => pct * expected_out,
        DiscountKind::Fixed(amount) => amount,
      };
      let mut amount = raw.min(pool.per_trade_cap);
      if pool.reserve_backed {
        let out_reserve = if asset_out == pool.asset_a {
          pool.reserve_a
        } else {
          pool.reserve_b
        };
        amount = amount.min(out_reserve);
      }
      amount
    }
  }

  impl<T: Config> PoolDiscounts<T::AccountId, BlockNumberFor<T>> for Pallet<T> {
    fn create_pool(
      creator: &T::AccountId,
      pool_params: PoolParams<BlockNumberFor<T>>,
    ) -> Result<PoolId, DispatchError> {
      Self::do_create_pool(creator, pool_params)
    }

    fn quote_and_reserve(
      pool_id: PoolId,
      trader: &T::AccountId,
      asset_in: AssetKind,
      asset_out: AssetKind,
      amount_in: Balance,
      expected_out: Balance,
    ) -> Balance {
      let Some(mut pool) = Pools::<T>::get(pool_id) else {
        return 0;
      };
      let now = frame_system::Pallet::<T>::block_number();

      // Lazy expiry: the first touch past the deadline retires the pool
      if pool.active && now >= pool.expires_at {
        pool.active = false;
        Pools::<T>::insert(pool_id, pool);
        Self::deposit_event(Event::PoolDeactivated { pool: pool_id });
        return 0;
      }

      let claim = Claims::<T>::get(pool_id, trader);
      let amount = Self::compute_quote(
        &pool,
        claim.as_ref(),
        now,
        asset_in,
        asset_out,
        amount_in,
        expected_out,
      );
      if amount.is_zero() {
        return 0;
      }

      if pool.reserve_backed {
        if asset_out == pool.asset_a {
          pool.reserve_a = pool.reserve_a.saturating_sub(amount);
        } else {
          pool.reserve_b = pool.reserve_b.saturating_sub(amount);
        }
        if pool.reserve_a.is_zero() && pool.reserve_b.is_zero() {
          pool.active = false;
          Self::deposit_event(Event::PoolDeactivated { pool: pool_id });
        }
      }
      pool.volume = pool.volume.saturating_add(amount_in);

      let total_claimed = claim
        .map(|record| record.total_claimed)
        .unwrap_or(0)
        .saturating_add(amount);
      Claims::<T>::insert(
        pool_id,
        trader,
        ClaimRecord {
          last_claim: now,
          total_claimed,
        },
      );
      Pools::<T>::insert(pool_id, pool);

      Self::deposit_event(Event::DiscountReserved {
        pool: pool_id,
        trader: trader.clone(),
        amount,
      });
      amount
    }

    fn preview(
      pool_id: PoolId,
      trader: &T::AccountId,
      asset_in: AssetKind,
      asset_out: AssetKind,
      amount_in: Balance,
      expected_out: Balance,
    ) -> Balance {
      let Some(pool) = Pools::<T>::get(pool_id) else {
        return 0;
      };
      let now = frame_system::Pallet::<T>::block_number();
      let claim = Claims::<T>::get(pool_id, trader);
      Self::compute_quote(
        &pool,
        claim.as_ref(),
        now,
        asset_in,
        asset_out,
        amount_in,
        expected_out,
      )
    }

    fn pay_out(asset: AssetKind, to: &T::AccountId, amount: Balance) -> DispatchResult {
      T::Assets::transfer(asset, &Self::account_id(), to, amount)
    }
  }
}
