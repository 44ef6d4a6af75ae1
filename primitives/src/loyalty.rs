//! Shared vocabulary of the loyalty layer.
//!
//! These types cross pallet boundaries (badge catalog seeding, pool creation through
//! the orchestrator), so they live here rather than in any single pallet.

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use polkadot_sdk::sp_arithmetic::Permill;
use polkadot_sdk::sp_runtime::{BoundedVec, traits::ConstU32};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::assets::AssetKind;
use crate::ecosystem::Balance;

/// Category a badge threshold is measured against.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  MaxEncodedLen,
  PartialEq,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub enum BadgeCategory {
  /// Threshold compared against the account's swap count
  SwapCount,
  /// Threshold compared against cumulative traded volume
  SwapVolume,
  /// Threshold compared against the consecutive-day activity streak
  Streak,
  /// Threshold compared against cumulative liquidity provided
  Liquidity,
  /// Threshold compared against the number of discount pools created
  PoolsCreated,
  /// Threshold compared against the number of sponsored registrations
  Referrals,
  /// Awarded when the account id falls at or below the threshold
  EarlyAdopter,
}

/// How a discount pool computes its raw discount for a matching trade.
///
/// A tagged variant evaluated in one dispatch site; percentages use `Permill`
/// (1 bp = 100 parts).
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  MaxEncodedLen,
  PartialEq,
  TypeInfo,
)]
pub enum DiscountKind {
  /// Percentage of the trade's input amount
  InputPercent(Permill),
  /// Percentage of the trade's expected output amount
  OutputPercent(Permill),
  /// Fixed amount per qualifying trade
  Fixed(Balance),
}

/// Upper bound on the buy-only allow-set of a discount pool.
pub type MaxAllowedBuyTokens = ConstU32<4>;

/// Creation parameters for a discount pool.
#[derive(
  Clone, Debug, Decode, DecodeWithMemTracking, Encode, Eq, MaxEncodedLen, PartialEq, TypeInfo,
)]
pub struct PoolParams<BlockNumber> {
  pub asset_a: AssetKind,
  pub asset_b: AssetKind,
  pub reserve_a: Balance,
  pub reserve_b: Balance,
  pub discount: DiscountKind,
  /// Trades below this input amount earn nothing from the pool
  pub min_trade: Balance,
  /// Pool lifetime from creation, in blocks
  pub duration: BlockNumber,
  /// When true, quotes are clamped to the internal reserve ledger and the pool
  /// deactivates once both reserves are exhausted
  pub reserve_backed: bool,
  /// When present, only trades converting from one of these tokens into the paired
  /// asset qualify
  pub allowed_buy_tokens: Option<BoundedVec<AssetKind, MaxAllowedBuyTokens>>,
}
