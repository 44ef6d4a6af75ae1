//! Ecosystem Constants for the Loyalty DEX workspace
//!
//! This module centralizes all system-level constants: pallet IDs for deriving
//! pallet-owned custody accounts, and the economic parameters of the loyalty layer.
//!
//! These constants are the single source of truth for the discount economics and are
//! re-used across all pallet configurations via the primitives crate.

/// Balance type alias for consistency across the workspace
pub type Balance = u128;

/// Loyalty account identifier (sequentially assigned at registration)
pub type AccountRef = u64;

/// Discount pool identifier
pub type PoolId = u64;

/// Affiliate offer identifier
pub type OfferId = u64;

/// Badge identifier in the achievement catalog
pub type BadgeId = u32;

/// Pallet identifiers for deriving pallet-owned accounts.
///
/// These IDs are used by Polkadot SDK's `PalletId::into_account_truncating()`
/// to deterministically generate custody accounts for reserves and offer funds.
pub mod pallet_ids {
  /// Discount Pool Engine pallet ID (holds all pool reserves)
  pub const DISCOUNT_POOLS_PALLET_ID: &[u8; 8] = b"dscpools";

  /// Affiliate Discount Engine pallet ID (holds all offer funds)
  pub const AFFILIATE_DISCOUNTS_PALLET_ID: &[u8; 8] = b"affdisct";

  /// Swap Orchestrator pallet ID
  pub const SWAP_ORCHESTRATOR_PALLET_ID: &[u8; 8] = b"swaporch";
}

/// Economic parameters of the loyalty layer.
///
/// These parameters are global across all pallets and bound every discount payout
/// regardless of how many sources contribute to a single swap.
pub mod params {
  use super::Balance;
  use polkadot_sdk::sp_arithmetic::Permill;

  /// Precision scalar for all balance-denominated constants (10^12).
  pub const PRECISION: Balance = 1_000_000_000_000;

  /// One-time fee charged at loyalty account registration (1.0 native).
  pub const REGISTRATION_FEE: Balance = PRECISION;

  /// Account ids within this cohort earn the early-adopter badge at registration.
  pub const EARLY_ADOPTER_COHORT: super::AccountRef = 1_000;

  /// Cumulative-volume breakpoints for the five discount tiers.
  ///
  /// Tier is the number of breakpoints at or below the account's cumulative volume;
  /// an account below the first breakpoint sits at tier 0. The table is strictly
  /// increasing, which makes the tier function monotonic by construction.
  pub const TIER_THRESHOLDS: [Balance; 5] = [
    10_000 * PRECISION,
    50_000 * PRECISION,
    200_000 * PRECISION,
    500_000 * PRECISION,
    1_000_000 * PRECISION,
  ];

  /// Bonus discount per tier level (10 bps per tier).
  pub const TIER_BONUS_PER_LEVEL: Permill = Permill::from_parts(1_000);

  /// Bonus discount per consecutive activity day (5 bps per day).
  pub const STREAK_BONUS_PER_DAY: Permill = Permill::from_parts(500);

  /// Ceiling on the total streak bonus (1%), i.e. 20 counted days.
  pub const MAX_STREAK_BONUS: Permill = Permill::from_percent(1);

  /// Maximum discount percentage a pool creator may configure (20%).
  pub const MAX_POOL_DISCOUNT: Permill = Permill::from_percent(20);

  /// Global ceiling on the combined discount relative to realized output (50%).
  pub const GLOBAL_DISCOUNT_CAP: Permill = Permill::from_percent(50);

  /// Hard ceiling on the affiliate commission percentage (25%).
  pub const MAX_AFFILIATE_COMMISSION: Permill = Permill::from_percent(25);

  /// Platform's share of every affiliate commission (20%).
  pub const PLATFORM_COMMISSION_SHARE: Permill = Permill::from_percent(20);

  /// Default platform fee on swap input (0.3%).
  pub const DEFAULT_SWAP_FEE: Permill = Permill::from_parts(3_000);

  /// Per-trade discount ceiling divisor: cap = combined reserves at creation / 100.
  ///
  /// Pinned to the reserves supplied at creation; it does not float with depletion.
  pub const PER_TRADE_CAP_DIVISOR: Balance = 100;

  /// Maximum new registrations a referrer may sponsor per rolling day.
  pub const MAX_REFERRALS_PER_DAY: u32 = 10;

  /// Social points credited to the referrer per accepted referral.
  pub const REFERRAL_SOCIAL_POINTS: u32 = 10;

  /// Maximum discount pools consulted by a single swap.
  pub const MAX_DISCOUNT_SOURCES: u32 = 4;

  /// Blocks per rolling day (~6s blocks).
  pub const DAY_BLOCKS: u32 = 14_400;

  /// Epoch length for the per-account volume ceiling (one day).
  pub const EPOCH_BLOCKS: u32 = DAY_BLOCKS;

  /// Per-account counted volume ceiling within one epoch.
  pub const MAX_EPOCH_VOLUME: Balance = 100_000 * PRECISION;

  /// Minimum blocks between two claims from the same pool by the same account.
  pub const CLAIM_COOLDOWN_BLOCKS: u32 = 100;

  /// Minimum blocks between two swaps by the same account.
  pub const MIN_SWAP_INTERVAL_BLOCKS: u32 = 2;

  /// Mandatory delay between proposing and executing a sensitive admin change.
  pub const TIMELOCK_DELAY_BLOCKS: u32 = 2 * DAY_BLOCKS;

  /// Longest lifetime a discount pool may be created with (90 days).
  pub const MAX_POOL_DURATION_BLOCKS: u32 = 90 * DAY_BLOCKS;

  /// Longest lifetime an affiliate offer may be created with (90 days).
  pub const MAX_OFFER_DURATION_BLOCKS: u32 = 90 * DAY_BLOCKS;
}
