//! Loyalty Account Registry Pallet
//!
//! One record per participant: cumulative volume, discount tier, badges, activity
//! streak, and the per-epoch counters consulted by the anti-gaming guard.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

#[cfg(test)]
pub mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;
pub use weights::WeightInfo;

use frame::prelude::*;
use primitives::{AccountRef, Balance, BadgeCategory, BadgeId, ExecutionGuard};

/// Read-only loyalty queries consumed by the discount engines.
pub trait LoyaltyInspect<AccountId> {
  /// Loyalty account id for an owner, if registered
  fn account_of(owner: &AccountId) -> Option<AccountRef>;

  /// Current discount tier (0 when unregistered)
  fn tier_of(owner: &AccountId) -> u8;

  /// Current consecutive-day activity streak (0 when unregistered)
  fn streak_of(owner: &AccountId) -> u32;
}

/// Loyalty mutations reserved for the swap orchestrator and the discount engines.
pub trait LoyaltyMutate<AccountId>: LoyaltyInspect<AccountId> {
  /// Anti-gaming pre-check for a swap: global rate limit plus the per-epoch volume
  /// ceiling. Unregistered traders pass (they earn no loyalty discount either).
  fn ensure_swap_allowed(owner: &AccountId, volume: Balance) -> DispatchResult;

  /// Post-swap metric accrual: volume, swap count, streak, tier, badge checks.
  fn record_activity(owner: &AccountId, volume: Balance) -> DispatchResult;

  /// Accrue liquidity provided through the orchestrator.
  fn note_liquidity(owner: &AccountId, amount: Balance) -> DispatchResult;

  /// Count a discount pool created by this owner.
  fn note_pool_created(owner: &AccountId) -> DispatchResult;

  /// Credit commission earnings from an affiliate offer.
  fn credit_affiliate_earnings(owner: &AccountId, amount: Balance) -> DispatchResult;
}

impl<AccountId> LoyaltyInspect<AccountId> for () {
  fn account_of(_: &AccountId) -> Option<AccountRef> {
    None
  }
  fn tier_of(_: &AccountId) -> u8 {
    0
  }
  fn streak_of(_: &AccountId) -> u32 {
    0
  }
}

impl<AccountId> LoyaltyMutate<AccountId> for () {
  fn ensure_swap_allowed(_: &AccountId, _: Balance) -> DispatchResult {
    Ok(())
  }
  fn record_activity(_: &AccountId, _: Balance) -> DispatchResult {
    Ok(())
  }
  fn note_liquidity(_: &AccountId, _: Balance) -> DispatchResult {
    Ok(())
  }
  fn note_pool_created(_: &AccountId) -> DispatchResult {
    Ok(())
  }
  fn credit_affiliate_earnings(_: &AccountId, _: Balance) -> DispatchResult {
    Ok(())
  }
}

#[frame::pallet]
pub mod pallet {
  use super::*;
  use alloc::vec::Vec;
  use frame::deps::{
    frame_support::traits::{Currency, ExistenceRequirement},
    sp_runtime::traits::{Saturating, Zero},
  };
  use primitives::ecosystem::params;

  #[pallet::config]
  pub trait Config: frame_system::Config {
    /// Native currency interface used to collect the one-time registration fee
    type Currency: Currency<Self::AccountId, Balance = Balance>;

    /// Origin allowed to extend the badge catalog
    type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

    /// System-wide circuit breaker consulted before registration
    type Guard: ExecutionGuard;

    /// Destination for registration fees
    #[pallet::constant]
    type TreasuryAccount: Get<Self::AccountId>;

    /// One-time fee charged at registration
    #[pallet::constant]
    type RegistrationFee: Get<Balance>;

    /// Length of the volume-ceiling epoch, in blocks
    #[pallet::constant]
    type EpochDuration: Get<BlockNumberFor<Self>>;

    /// Length of one rolling day, in blocks (streaks, referral windows)
    #[pallet::constant]
    type DayDuration: Get<BlockNumberFor<Self>>;

    /// Minimum blocks between two swaps by the same account
    #[pallet::constant]
    type MinSwapInterval: Get<BlockNumberFor<Self>>;

    /// Per-account counted volume ceiling within one epoch
    #[pallet::constant]
    type MaxEpochVolume: Get<Balance>;

    /// Maximum sponsored registrations per referrer per rolling day
    #[pallet::constant]
    type MaxReferralsPerDay: Get<u32>;

    /// Weight information
    type WeightInfo: WeightInfo;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  /// Per-participant loyalty record. Created once, never deleted.
  #[derive(Clone, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
  pub struct LoyaltyAccount<AccountId, BlockNumber> {
    pub id: AccountRef,
    pub owner: AccountId,
    pub referrer: Option<AccountRef>,
    /// Cumulative traded volume (input side), drives the tier
    pub total_volume: Balance,
    /// Discount tier derived from total volume; never decreases
    pub tier: u8,
    pub badge_count: u32,
    pub liquidity_provided: Balance,
    pub pools_created: u32,
    pub swap_count: u32,
    pub social_points: u32,
    pub referral_count: u32,
    pub affiliate_earnings: Balance,
    pub last_activity: BlockNumber,
    /// Consecutive-day activity counter
    pub streak_days: u32,
    /// Volume counted inside the current epoch window
    pub epoch_volume: Balance,
    pub epoch_start: BlockNumber,
    /// Last block a swap was admitted for this account (global rate limit)
    pub last_swap: BlockNumber,
  }

  /// Static achievement definition. Catalog entries are append-only.
  #[derive(Clone, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
  pub struct Badge {
    pub name: BoundedVec<u8, ConstU32<64>>,
    pub description: BoundedVec<u8, ConstU32<128>>,
    /// Metric threshold in the unit of the category
    pub threshold: u128,
    pub category: BadgeCategory,
    /// Social points credited on award
    pub points: u32,
    pub active: bool,
  }

  #[pallet::storage]
  pub type NextAccountId<T: Config> = StorageValue<_, AccountRef, ValueQuery>;

  #[pallet::storage]
  pub type Accounts<T: Config> =
    StorageMap<_, Blake2_128Concat, AccountRef, LoyaltyAccount<T::AccountId, BlockNumberFor<T>>>;

  /// Owner-to-account index; together with the `owner` field this enforces the
  /// 1:1 relation in both directions.
  #[pallet::storage]
  pub type AccountByOwner<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, AccountRef>;

  #[pallet::storage]
  pub type NextBadgeId<T: Config> = StorageValue<_, BadgeId, ValueQuery>;

  #[pallet::storage]
  pub type Badges<T: Config> = StorageMap<_, Blake2_128Concat, BadgeId, Badge>;

  /// Award block per (account, badge); presence means awarded.
  #[pallet::storage]
  pub type AccountBadges<T: Config> = StorageDoubleMap<
    _,
    Blake2_128Concat,
    AccountRef,
    Blake2_128Concat,
    BadgeId,
    BlockNumberFor<T>,
    OptionQuery,
  >;

  /// Rolling-day referral window per referrer: (window start, count). Reset lazily
  /// when the day boundary has been crossed at the next attempt.
  #[pallet::storage]
  pub type ReferralWindows<T: Config> =
    StorageMap<_, Blake2_128Concat, AccountRef, (BlockNumberFor<T>, u32), ValueQuery>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// A loyalty account was created
    AccountRegistered {
      account: AccountRef,
      owner: T::AccountId,
      referrer: Option<AccountRef>,
    },
    /// A referral was accepted within the referrer's daily allowance
    ReferralAccepted {
      referrer: AccountRef,
      referee: AccountRef,
    },
    /// The account crossed a tier breakpoint (upgrades only, never emitted downward)
    TierUpgraded { account: AccountRef, tier: u8 },
    /// A badge threshold was met
    BadgeAwarded {
      account: AccountRef,
      badge: BadgeId,
      points: u32,
    },
    /// The catalog was extended
    BadgeAdded { badge: BadgeId },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// The owner already holds a loyalty account
    AccountAlreadyRegistered,
    /// No loyalty account for this owner
    AccountNotFound,
    /// The designated referrer holds no loyalty account
    ReferrerNotFound,
    /// An owner cannot refer themselves
    SelfReferral,
    /// The referrer exhausted today's referral allowance
    ReferralLimitExceeded,
    /// A swap was admitted for this account too recently
    SwapRateLimited,
    /// The addition would exceed the per-epoch volume ceiling
    EpochVolumeExceeded,
    /// Badge name or description exceeds the catalog bounds
    BadgeLabelTooLong,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Register a loyalty account for the caller.
    ///
    /// Charges the one-time registration fee to the treasury (the transfer failing
    /// aborts the whole registration), optionally processes a referral within the
    /// referrer's daily allowance, and awards the early-adopter badge to ids inside
    /// the first cohort.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::register())]
    pub fn register(origin: OriginFor<T>, referrer: Option<T::AccountId>) -> DispatchResult {
      let who = ensure_signed(origin)?;
      T::Guard::enter()?;
      let result = Self::do_register(&who, referrer);
      T::Guard::exit();
      result
    }

    /// Extend the badge catalog (governance only). Existing entries are immutable.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::add_badge())]
    pub fn add_badge(
      origin: OriginFor<T>,
      name: Vec<u8>,
      description: Vec<u8>,
      threshold: u128,
      category: BadgeCategory,
      points: u32,
    ) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;

      let badge = Badge {
        name: name.try_into().map_err(|_| Error::<T>::BadgeLabelTooLong)?,
        description: description
          .try_into()
          .map_err(|_| Error::<T>::BadgeLabelTooLong)?,
        threshold,
        category,
        points,
        active: true,
      };

      let badge_id = NextBadgeId::<T>::get().saturating_add(1);
      NextBadgeId::<T>::put(badge_id);
      Badges::<T>::insert(badge_id, badge);

      Self::deposit_event(Event::BadgeAdded { badge: badge_id });
      Ok(())
    }
  }

  impl<T: Config> Pallet<T> {
    fn do_register(who: &T::AccountId, referrer: Option<T::AccountId>) -> DispatchResult {
      ensure!(
        !AccountByOwner::<T>::contains_key(who),
        Error::<T>::AccountAlreadyRegistered
      );

      // Resolve the referrer before charging anything
      let referrer_id = match referrer {
        Some(ref sponsor) => {
          ensure!(sponsor != who, Error::<T>::SelfReferral);
          Some(AccountByOwner::<T>::get(sponsor).ok_or(Error::<T>::ReferrerNotFound)?)
        }
        None => None,
      };

      T::Currency::transfer(
        who,
        &T::TreasuryAccount::get(),
        T::RegistrationFee::get(),
        ExistenceRequirement::KeepAlive,
      )?;

      let id = NextAccountId::<T>::get().saturating_add(1);
      NextAccountId::<T>::put(id);

      let now = frame_system::Pallet::<T>::block_number();
      let mut account = LoyaltyAccount {
        id,
        owner: who.clone(),
        referrer: referrer_id,
        total_volume: 0,
        tier: 0,
        badge_count: 0,
        liquidity_provided: 0,
        pools_created: 0,
        swap_count: 0,
        social_points: 0,
        referral_count: 0,
        affiliate_earnings: 0,
        last_activity: Zero::zero(),
        streak_days: 0,
        epoch_volume: 0,
        epoch_start: now,
        last_swap: Zero::zero(),
      };

      if let Some(sponsor_id) = referrer_id {
        Self::process_referral(sponsor_id, id, now)?;
      }

      // The catalog decides the cohort cutoff; `value <= threshold` for this category
      Self::check_badges(&mut account, BadgeCategory::EarlyAdopter, id as u128, now);

      AccountByOwner::<T>::insert(who, id);
      Accounts::<T>::insert(id, account);

      Self::deposit_event(Event::AccountRegistered {
        account: id,
        owner: who.clone(),
        referrer: referrer_id,
      });
      Ok(())
    }

    /// Pure five-tier step function over cumulative volume.
    pub fn tier_for_volume(volume: Balance) -> u8 {
      params::TIER_THRESHOLDS
        .iter()
        .filter(|threshold| volume >= **threshold)
        .count() as u8
    }

    /// Full loyalty record for an owner.
    pub fn profile(owner: &T::AccountId) -> Option<LoyaltyAccount<T::AccountId, BlockNumberFor<T>>> {
      AccountByOwner::<T>::get(owner).and_then(Accounts::<T>::get)
    }

    /// Badge ids awarded to an owner.
    pub fn user_badges(owner: &T::AccountId) -> Vec<BadgeId> {
      match AccountByOwner::<T>::get(owner) {
        Some(id) => AccountBadges::<T>::iter_prefix(id).map(|(badge, _)| badge).collect(),
        None => Vec::new(),
      }
    }

    /// Consume one slot of the referrer's rolling-day allowance and credit them.
    fn process_referral(
      sponsor_id: AccountRef,
      referee_id: AccountRef,
      now: BlockNumberFor<T>,
    ) -> DispatchResult {
      let (start, count) = ReferralWindows::<T>::get(sponsor_id);
      let (start, count) = if now >= start.saturating_add(T::DayDuration::get()) {
        (now, 0)
      } else {
        (start, count)
      };
      ensure!(
        count < T::MaxReferralsPerDay::get(),
        Error::<T>::ReferralLimitExceeded
      );
      ReferralWindows::<T>::insert(sponsor_id, (start, count.saturating_add(1)));

      let mut sponsor = Accounts::<T>::get(sponsor_id).ok_or(Error::<T>::AccountNotFound)?;
      sponsor.referral_count = sponsor.referral_count.saturating_add(1);
      sponsor.social_points = sponsor
        .social_points
        .saturating_add(params::REFERRAL_SOCIAL_POINTS);
      let referral_count = sponsor.referral_count as u128;
      Self::check_badges(&mut sponsor, BadgeCategory::Referrals, referral_count, now);
      Accounts::<T>::insert(sponsor_id, sponsor);

      Self::deposit_event(Event::ReferralAccepted {
        referrer: sponsor_id,
        referee: referee_id,
      });
      Ok(())
    }

    /// Award every active catalog entry of `category` whose threshold `value` meets.
    /// Early-adopter thresholds are cohort cutoffs and compare downward.
    fn check_badges(
      account: &mut LoyaltyAccount<T::AccountId, BlockNumberFor<T>>,
      category: BadgeCategory,
      value: u128,
      now: BlockNumberFor<T>,
    ) {
      for (badge_id, badge) in Badges::<T>::iter() {
        if !badge.active || badge.category != category {
          continue;
        }
        let met = match category {
          BadgeCategory::EarlyAdopter => value <= badge.threshold,
          _ => value >= badge.threshold,
        };
        if !met || AccountBadges::<T>::contains_key(account.id, badge_id) {
          continue;
        }
        AccountBadges::<T>::insert(account.id, badge_id, now);
        account.badge_count = account.badge_count.saturating_add(1);
        account.social_points = account.social_points.saturating_add(badge.points);
        Self::deposit_event(Event::BadgeAwarded {
          account: account.id,
          badge: badge_id,
          points: badge.points,
        });
      }
    }

    /// Roll the epoch window if and only if the boundary has been crossed.
    fn roll_epoch(
      account: &mut LoyaltyAccount<T::AccountId, BlockNumberFor<T>>,
      now: BlockNumberFor<T>,
    ) {
      if now >= account.epoch_start.saturating_add(T::EpochDuration::get()) {
        account.epoch_volume = 0;
        account.epoch_start = now;
      }
    }
  }

  impl<T: Config> LoyaltyInspect<T::AccountId> for Pallet<T> {
    fn account_of(owner: &T::AccountId) -> Option<AccountRef> {
      AccountByOwner::<T>::get(owner)
    }

    fn tier_of(owner: &T::AccountId) -> u8 {
      Self::profile(owner).map(|account| account.tier).unwrap_or(0)
    }

    fn streak_of(owner: &T::AccountId) -> u32 {
      Self::profile(owner)
        .map(|account| account.streak_days)
        .unwrap_or(0)
    }
  }

  impl<T: Config> LoyaltyMutate<T::AccountId> for Pallet<T> {
    fn ensure_swap_allowed(owner: &T::AccountId, volume: Balance) -> DispatchResult {
      let Some(id) = AccountByOwner::<T>::get(owner) else {
        // Accountless traders earn nothing and are bounded by the platform fee alone
        return Ok(());
      };
      let mut account = Accounts::<T>::get(id).ok_or(Error::<T>::AccountNotFound)?;
      let now = frame_system::Pallet::<T>::block_number();

      ensure!(
        account.swap_count == 0
          || now >= account.last_swap.saturating_add(T::MinSwapInterval::get()),
        Error::<T>::SwapRateLimited
      );

      // Honor a pending lazy rollover without performing it here; the counter itself
      // moves in record_activity so a failed swap leaves it untouched.
      let counted = if now >= account.epoch_start.saturating_add(T::EpochDuration::get()) {
        0
      } else {
        account.epoch_volume
      };
      ensure!(
        counted.saturating_add(volume) <= T::MaxEpochVolume::get(),
        Error::<T>::EpochVolumeExceeded
      );

      account.last_swap = now;
      Accounts::<T>::insert(id, account);
      Ok(())
    }

    fn record_activity(owner: &T::AccountId, volume: Balance) -> DispatchResult {
      let Some(id) = AccountByOwner::<T>::get(owner) else {
        return Ok(());
      };
      let mut account = Accounts::<T>::get(id).ok_or(Error::<T>::AccountNotFound)?;
      let now = frame_system::Pallet::<T>::block_number();

      Self::roll_epoch(&mut account, now);
      account.epoch_volume = account.epoch_volume.saturating_add(volume);
      account.total_volume = account.total_volume.saturating_add(volume);
      account.swap_count = account.swap_count.saturating_add(1);

      // `last_activity` anchors the last counted streak day; it only moves when a
      // day is counted or the streak restarts, so intra-day churn cannot farm the
      // counter.
      let day = T::DayDuration::get();
      let elapsed = now.saturating_sub(account.last_activity);
      if account.streak_days == 0 {
        account.streak_days = 1;
        account.last_activity = now;
      } else if elapsed < day {
        // Same day as the anchor, streak unchanged
      } else if elapsed < day.saturating_add(day) {
        account.streak_days = account.streak_days.saturating_add(1);
        account.last_activity = now;
      } else {
        account.streak_days = 1;
        account.last_activity = now;
      }

      let tier = Self::tier_for_volume(account.total_volume);
      if tier > account.tier {
        account.tier = tier;
        Self::deposit_event(Event::TierUpgraded { account: id, tier });
      }

      let swap_count = account.swap_count as u128;
      Self::check_badges(&mut account, BadgeCategory::SwapCount, swap_count, now);
      let total_volume = account.total_volume;
      Self::check_badges(&mut account, BadgeCategory::SwapVolume, total_volume, now);
      let streak_days = account.streak_days as u128;
      Self::check_badges(&mut account, BadgeCategory::Streak, streak_days, now);

      Accounts::<T>::insert(id, account);
      Ok(())
    }

    fn note_liquidity(owner: &T::AccountId, amount: Balance) -> DispatchResult {
      let Some(id) = AccountByOwner::<T>::get(owner) else {
        return Ok(());
      };
      let mut account = Accounts::<T>::get(id).ok_or(Error::<T>::AccountNotFound)?;
      let now = frame_system::Pallet::<T>::block_number();
      account.liquidity_provided = account.liquidity_provided.saturating_add(amount);
      let liquidity_provided = account.liquidity_provided;
      Self::check_badges(&mut account, BadgeCategory::Liquidity, liquidity_provided, now);
      Accounts::<T>::insert(id, account);
      Ok(())
    }

    fn note_pool_created(owner: &T::AccountId) -> DispatchResult {
      let Some(id) = AccountByOwner::<T>::get(owner) else {
        return Ok(());
      };
      let mut account = Accounts::<T>::get(id).ok_or(Error::<T>::AccountNotFound)?;
      let now = frame_system::Pallet::<T>::block_number();
      account.pools_created = account.pools_created.saturating_add(1);
      let pools_created = account.pools_created as u128;
      Self::check_badges(&mut account, BadgeCategory::PoolsCreated, pools_created, now);
      Accounts::<T>::insert(id, account);
      Ok(())
    }

    fn credit_affiliate_earnings(owner: &T::AccountId, amount: Balance) -> DispatchResult {
      let Some(id) = AccountByOwner::<T>::get(owner) else {
        return Ok(());
      };
      Accounts::<T>::mutate(id, |maybe| {
        if let Some(account) = maybe {
          account.affiliate_earnings = account.affiliate_earnings.saturating_add(amount);
        }
      });
      Ok(())
    }
  }

  /// Genesis configuration: the seeded badge catalog.
  #[pallet::genesis_config]
  pub struct GenesisConfig<T: Config> {
    /// (name, description, threshold, category, points)
    pub badges: Vec<(Vec<u8>, Vec<u8>, u128, BadgeCategory, u32)>,
    pub _marker: core::marker::PhantomData<T>,
  }

  impl<T: Config> Default for GenesisConfig<T> {
    fn default() -> Self {
      Self {
        badges: default_badge_catalog(),
        _marker: Default::default(),
      }
    }
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      for (name, description, threshold, category, points) in &self.badges {
        let badge = Badge {
          name: name.clone().try_into().expect("badge name exceeds bound"),
          description: description
            .clone()
            .try_into()
            .expect("badge description exceeds bound"),
          threshold: *threshold,
          category: *category,
          points: *points,
          active: true,
        };
        let badge_id = NextBadgeId::<T>::get().saturating_add(1);
        NextBadgeId::<T>::put(badge_id);
        Badges::<T>::insert(badge_id, badge);
      }
    }
  }

  /// The catalog every deployment starts from.
  pub fn default_badge_catalog() -> Vec<(Vec<u8>, Vec<u8>, u128, BadgeCategory, u32)> {
    use alloc::vec;
    let p = params::PRECISION;
    vec![
      (
        b"First Swap".to_vec(),
        b"Completed a first swap".to_vec(),
        1,
        BadgeCategory::SwapCount,
        10,
      ),
      (
        b"Swap Regular".to_vec(),
        b"Completed 10 swaps".to_vec(),
        10,
        BadgeCategory::SwapCount,
        25,
      ),
      (
        b"Swap Veteran".to_vec(),
        b"Completed 100 swaps".to_vec(),
        100,
        BadgeCategory::SwapCount,
        100,
      ),
      (
        b"Volume Bronze".to_vec(),
        b"Traded 1,000 in volume".to_vec(),
        1_000 * p,
        BadgeCategory::SwapVolume,
        25,
      ),
      (
        b"Volume Silver".to_vec(),
        b"Traded 10,000 in volume".to_vec(),
        10_000 * p,
        BadgeCategory::SwapVolume,
        50,
      ),
      (
        b"Volume Gold".to_vec(),
        b"Traded 100,000 in volume".to_vec(),
        100_000 * p,
        BadgeCategory::SwapVolume,
        100,
      ),
      (
        b"Week Streak".to_vec(),
        b"Active 7 consecutive days".to_vec(),
        7,
        BadgeCategory::Streak,
        25,
      ),
      (
        b"Month Streak".to_vec(),
        b"Active 30 consecutive days".to_vec(),
        30,
        BadgeCategory::Streak,
        100,
      ),
      (
        b"Liquidity Provider".to_vec(),
        b"Provided 1,000 in liquidity".to_vec(),
        1_000 * p,
        BadgeCategory::Liquidity,
        50,
      ),
      (
        b"Pool Creator".to_vec(),
        b"Created a discount pool".to_vec(),
        1,
        BadgeCategory::PoolsCreated,
        25,
      ),
      (
        b"Connector".to_vec(),
        b"Sponsored 5 registrations".to_vec(),
        5,
        BadgeCategory::Referrals,
        50,
      ),
      (
        b"Early Adopter".to_vec(),
        b"Among the first 1,000 accounts".to_vec(),
        params::EARLY_ADOPTER_COHORT as u128,
        BadgeCategory::EarlyAdopter,
        50,
      ),
    ]
  }
}
