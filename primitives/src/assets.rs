use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// This enum serves as the single source of truth for asset identifiers across all
/// pallets, enabling type-safe interactions between the swap orchestrator, the
/// discount engines, and the external exchange adapter.
///
/// - `Native`: The system's native token (managed by pallet-balances).
/// - `Local(u32)`: Local assets (managed by pallet-assets).
/// - `Foreign(u32)`: Bridged assets (managed by pallet-assets in a reserved namespace).
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Default,
  Encode,
  Eq,
  MaxEncodedLen,
  Ord,
  PartialEq,
  PartialOrd,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub enum AssetKind {
  /// Native token managed by pallet-balances
  #[default]
  Native,
  /// Local asset managed by pallet-assets
  Local(u32),
  /// Foreign asset managed by pallet-assets via bridge mapping
  Foreign(u32),
}

impl From<u32> for AssetKind {
  fn from(asset_id: u32) -> Self {
    AssetKind::Local(asset_id)
  }
}

/// Helper trait to inspect AssetKind properties
pub trait AssetInspector {
  fn is_native(&self) -> bool;
  fn local_id(&self) -> Option<u32>;
}

impl AssetInspector for AssetKind {
  fn is_native(&self) -> bool {
    matches!(self, AssetKind::Native)
  }

  fn local_id(&self) -> Option<u32> {
    match self {
      AssetKind::Local(id) | AssetKind::Foreign(id) => Some(*id),
      _ => None,
    }
  }
}

/// A token pair normalized to a canonical (low, high) ordering.
///
/// Discount pools are keyed by an unordered pair; every lookup index derives its key
/// through this function so that (A, B) and (B, A) resolve to the same entry.
pub fn normalize_pair(a: AssetKind, b: AssetKind) -> (AssetKind, AssetKind) {
  if a <= b { (a, b) } else { (b, a) }
}
