use polkadot_sdk::frame_support::pallet_prelude::*;
use polkadot_sdk::sp_runtime::Permill;
use primitives::ecosystem::params;
use primitives::{Balance, OfferId, PoolId, PoolParams};

// Re-export AssetKind from primitives as the single source of truth
pub use primitives::AssetKind;

/// Caller-supplied swap instruction.
#[derive(
  Clone, Encode, Decode, DecodeWithMemTracking, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub struct SwapParams<BlockNumber> {
  pub asset_in: AssetKind,
  pub asset_out: AssetKind,
  pub amount_in: Balance,
  /// Slippage floor forwarded to the exchange
  pub min_amount_out: Balance,
  /// Discount pools to consult, consumed in this order when the global cap binds
  pub pool_ids: BoundedVec<PoolId, ConstU32<{ params::MAX_DISCOUNT_SOURCES }>>,
  /// At most one affiliate offer per swap
  pub offer_id: Option<OfferId>,
  /// Last block (inclusive) the swap may execute in
  pub deadline: BlockNumber,
}

/// Caller-supplied liquidity instruction, optionally creating a discount pool for
/// the pair in the same call.
#[derive(
  Clone, Encode, Decode, DecodeWithMemTracking, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub struct LiquidityParams<BlockNumber> {
  pub asset_a: AssetKind,
  pub asset_b: AssetKind,
  pub amount_a_desired: Balance,
  pub amount_b_desired: Balance,
  pub amount_a_min: Balance,
  pub amount_b_min: Balance,
  pub pool: Option<PoolParams<BlockNumber>>,
}

/// Sensitive admin changes, executable only through the two-step timelock.
///
/// The pending-action fingerprint is the blake2-256 of the SCALE encoding, so
/// execution is bound to the exact proposed parameters.
#[derive(
  Clone, Encode, Decode, DecodeWithMemTracking, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen,
)]
pub enum AdminAction<AccountId> {
  SetSwapFee(Permill),
  SetTreasury(AccountId),
  EmergencyWithdraw {
    asset: AssetKind,
    amount: Balance,
    to: AccountId,
  },
}

/// Read-only discount preview, before and after the global cap.
#[derive(Clone, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, Default)]
pub struct DiscountEstimate {
  pub pools: Balance,
  pub affiliate: Balance,
  pub tier_bonus: Balance,
  pub streak_bonus: Balance,
  /// Component sum after applying the global cap to the expected output
  pub total: Balance,
}
