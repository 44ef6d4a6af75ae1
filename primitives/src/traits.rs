//! Adapter traits for the external collaborators of the loyalty layer.
//!
//! These traits abstract everything the core does not own: the token transfer
//! primitive, the constant-product exchange primitive, and the shared execution
//! guard. Pallets stay fully generic over them; runtimes (and pallet mocks)
//! supply the implementations.

use crate::assets::AssetKind;
use crate::ecosystem::Balance;
use polkadot_sdk::sp_runtime::{DispatchError, DispatchResult};

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

/// Token transfer primitive with all-or-nothing semantics.
///
/// A failed transfer must leave both balances untouched; the engines rely on this to
/// keep their ledgers consistent with custody-account balances.
pub trait AssetOps<AccountId> {
  fn transfer(
    asset: AssetKind,
    from: &AccountId,
    to: &AccountId,
    amount: Balance,
  ) -> DispatchResult;

  fn balance(asset: AssetKind, who: &AccountId) -> Balance;
}

/// No-op `AssetOps` for configurations where asset movement is not exercised.
impl<AccountId> AssetOps<AccountId> for () {
  fn transfer(_: AssetKind, _: &AccountId, _: &AccountId, _: Balance) -> DispatchResult {
    Ok(())
  }

  fn balance(_: AssetKind, _: &AccountId) -> Balance {
    0
  }
}

/// Circuit breaker and reentrancy latch shared by every user-facing entry point.
///
/// `enter` runs at the top of each mutating dispatch: it fails while trading is
/// halted or while another guarded call is already on the stack, and marks the
/// stack busy on success. `exit` releases the marker and runs on every return
/// path of the guarded body.
pub trait ExecutionGuard {
  fn enter() -> DispatchResult;

  fn exit();
}

/// Pass-through guard for configurations without a circuit breaker.
impl ExecutionGuard for () {
  fn enter() -> DispatchResult {
    Ok(())
  }

  fn exit() {}
}

/// Constant-product exchange primitive (reserve-based pairs plus a router).
///
/// The loyalty core never touches reserve math; it quotes the expected output for
/// discount bases, executes the base conversion with caller-supplied slippage
/// protection, and provisions liquidity on behalf of account holders.
pub trait DexAdapter<AccountId> {
  /// Read-only quote along `path` (used as the discount base, never the realized out).
  fn quote(path: &[AssetKind], amount_in: Balance) -> Option<Balance>;

  /// Swap an exact input amount, sending output to `recipient`.
  fn swap_exact_in(
    who: &AccountId,
    path: Vec<AssetKind>,
    amount_in: Balance,
    amount_out_min: Balance,
    recipient: &AccountId,
  ) -> Result<Balance, DispatchError>;

  /// Add liquidity for a pair; returns the amounts consumed and LP minted.
  fn add_liquidity(
    who: &AccountId,
    asset_a: AssetKind,
    asset_b: AssetKind,
    amount_a_desired: Balance,
    amount_b_desired: Balance,
    amount_a_min: Balance,
    amount_b_min: Balance,
    recipient: &AccountId,
  ) -> Result<(Balance, Balance, Balance), DispatchError>;
}

/// No-op `DexAdapter` for configurations where the exchange is not used.
impl<AccountId> DexAdapter<AccountId> for () {
  fn quote(_: &[AssetKind], _: Balance) -> Option<Balance> {
    None
  }

  fn swap_exact_in(
    _: &AccountId,
    _: Vec<AssetKind>,
    _: Balance,
    _: Balance,
    _: &AccountId,
  ) -> Result<Balance, DispatchError> {
    Err(DispatchError::Other("DexAdapter not configured"))
  }

  fn add_liquidity(
    _: &AccountId,
    _: AssetKind,
    _: AssetKind,
    _: Balance,
    _: Balance,
    _: Balance,
    _: Balance,
    _: &AccountId,
  ) -> Result<(Balance, Balance, Balance), DispatchError> {
    Err(DispatchError::Other("DexAdapter not configured"))
  }
}
