//! Affiliate Discount Engine Pallet
//!
//! Sponsor-funded affiliate offers: a verified project funds a budget in its token,
//! an affiliate earns a commission carved out of every settled discount, and traders
//! receive the rest. Offers deactivate permanently once drained or expired.

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
use primitives::{AssetKind, Balance, OfferId};

/// Offer-side discount surface consumed by the swap orchestrator.
///
/// `quote_and_settle` is fallible: commission transfers happen inside it and a
/// failed transfer must abort the enclosing swap. Non-qualifying trades settle
/// `Ok(0)` so a dead offer id never aborts anything.
pub trait AffiliateDiscounts<AccountId> {
  /// Settle the offer against this trade. Clamps to the remaining budget, pays the
  /// commission immediately, and returns the trader-facing portion.
  fn quote_and_settle(
    offer_id: OfferId,
    trader: &AccountId,
    asset_in: AssetKind,
    amount_in: Balance,
  ) -> Result<Balance, DispatchError>;

  /// Read-only preview of the trader-facing portion.
  fn preview(offer_id: OfferId, asset_in: AssetKind, amount_in: Balance) -> Balance;

  /// Token the offer pays out in, if the offer exists.
  fn offer_asset(offer_id: OfferId) -> Option<AssetKind>;

  /// Pay a settled trader portion out of the offer custody account.
  fn pay_out(asset: AssetKind, to: &AccountId, amount: Balance) -> DispatchResult;
}

impl<AccountId> AffiliateDiscounts<AccountId> for () {
  fn quote_and_settle(
    _: OfferId,
    _: &AccountId,
    _: AssetKind,
    _: Balance,
  ) -> Result<Balance, DispatchError> {
    Ok(0)
  }

  fn preview(_: OfferId, _: AssetKind, _: Balance) -> Balance {
    0
  }

  fn offer_asset(_: OfferId) -> Option<AssetKind> {
    None
  }

  fn pay_out(_: AssetKind, _: &AccountId, _: Balance) -> DispatchResult {
    Ok(())
  }
}

#[frame::pallet]
pub mod pallet {
  use super::*;
  use frame::deps::sp_runtime::Permill;
  use frame::deps::sp_runtime::traits::{AccountIdConversion, Saturating, Zero};
  use frame::prelude::*;
  use pallet_loyalty_registry::LoyaltyMutate;
  use polkadot_sdk::frame_support::PalletId;
  use primitives::ecosystem::params;
  use pallet_loyalty_registry::LoyaltyInspect;
  use primitives::{AssetOps, ExecutionGuard};

  #[pallet::config]
  pub trait Config: frame_system::Config {
    /// Token transfer primitive; moves offer funding in and payouts out
    type Assets: AssetOps<Self::AccountId>;

    /// Loyalty registry hooks (creation gating and affiliate earnings)
    type Loyalty: LoyaltyMutate<Self::AccountId>;

    /// System-wide circuit breaker consulted before offer creation and funding
    type Guard: ExecutionGuard;

    /// Origin allowed to manage the verified-project registry
    type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

    /// Pallet id deriving the offer custody account
    type PalletId: Get<PalletId>;

    /// Destination for the platform's share of every commission
    #[pallet::constant]
    type TreasuryAccount: Get<Self::AccountId>;

    /// Longest lifetime an offer may be created with
    #[pallet::constant]
    type MaxOfferDuration: Get<BlockNumberFor<Self>>;

    /// Weight information
    type WeightInfo: WeightInfo;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(_);

  /// A sponsor-funded affiliate offer. The verification flag is a snapshot taken at
  /// creation; revoking the project later does not retire existing offers.
  #[derive(Clone, Encode, Decode, Eq, PartialEq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
  pub struct AffiliateDiscount<AccountId, BlockNumber> {
    pub affiliate: AccountId,
    /// Sponsor; the only account allowed to fund
    pub project: AccountId,
    pub token: AssetKind,
    pub discount_pct: Permill,
    pub commission_pct: Permill,
    /// Cumulative funding pulled into custody
    pub funded: Balance,
    /// Unspent budget; `funded - remaining` equals the sum of settled discounts
    pub remaining: Balance,
    pub expires_at: BlockNumber,
    pub active: bool,
    pub verified: bool,
  }

  #[pallet::storage]
  pub type NextOfferId<T: Config> = StorageValue<_, OfferId, ValueQuery>;

  #[pallet::storage]
  pub type Offers<T: Config> =
    StorageMap<_, Blake2_128Concat, OfferId, AffiliateDiscount<T::AccountId, BlockNumberFor<T>>>;

  /// Governance-managed registry of projects allowed to sponsor offers.
  #[pallet::storage]
  pub type VerifiedProjects<T: Config> =
    StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// A project entered the verified registry
    ProjectVerified { project: T::AccountId },
    /// A project left the verified registry
    ProjectRevoked { project: T::AccountId },
    /// An offer was created (inactive until funded)
    OfferCreated {
      offer: OfferId,
      affiliate: T::AccountId,
      project: T::AccountId,
      token: AssetKind,
    },
    /// The sponsor added budget
    OfferFunded { offer: OfferId, amount: Balance },
    /// A discount was settled against the offer
    DiscountSettled {
      offer: OfferId,
      trader: T::AccountId,
      discount: Balance,
      commission: Balance,
    },
    /// The offer stopped settling permanently (drained or expired)
    OfferDeactivated { offer: OfferId },
  }

  #[pallet::error]
  pub enum Error<T> {
    /// Offer creation requires a loyalty account
    NoLoyaltyAccount,
    /// The sponsor is not in the verified registry
    ProjectNotVerified,
    /// Commission percentage exceeds the ceiling
    CommissionTooHigh,
    /// The discount percentage is zero
    ZeroDiscount,
    /// Offer lifetime must be non-zero
    ZeroDuration,
    /// Offer lifetime exceeds the ceiling
    DurationTooLong,
    /// No offer under this id
    OfferNotFound,
    /// Only the sponsoring project may fund
    NotOfferSponsor,
    /// The offer is past its expiry
    OfferExpired,
    /// Funding amount must be non-zero
    ZeroFunding,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Admit a project into the verified registry.
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::verify_project())]
    pub fn verify_project(origin: OriginFor<T>, project: T::AccountId) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;
      VerifiedProjects::<T>::insert(&project, true);
      Self::deposit_event(Event::ProjectVerified { project });
      Ok(())
    }

    /// Remove a project from the registry. Existing offers keep their snapshot.
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::revoke_project())]
    pub fn revoke_project(origin: OriginFor<T>, project: T::AccountId) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;
      VerifiedProjects::<T>::remove(&project);
      Self::deposit_event(Event::ProjectRevoked { project });
      Ok(())
    }

    /// Create an offer for a verified project. Starts inactive with zero budget.
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::create_offer())]
    pub fn create_offer(
      origin: OriginFor<T>,
      project: T::AccountId,
      token: AssetKind,
      discount_pct: Permill,
      commission_pct: Permill,
      duration: BlockNumberFor<T>,
    ) -> DispatchResult {
      let affiliate = ensure_signed(origin)?;
      T::Guard::enter()?;
      let result =
        Self::do_create_offer(&affiliate, project, token, discount_pct, commission_pct, duration);
      T::Guard::exit();
      result
    }

    /// Add budget to an offer. Sponsor-only; activates the offer.
    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::fund_offer())]
    pub fn fund_offer(origin: OriginFor<T>, offer_id: OfferId, amount: Balance) -> DispatchResult {
      let who = ensure_signed(origin)?;
      T::Guard::enter()?;
      let result = Self::do_fund_offer(&who, offer_id, amount);
      T::Guard::exit();
      result
    }
  }

  impl<T: Config> Pallet<T> {
    fn do_create_offer(
      affiliate: &T::AccountId,
      project: T::AccountId,
      token: AssetKind,
      discount_pct: Permill,
      commission_pct: Permill,
      duration: BlockNumberFor<T>,
    ) -> DispatchResult {
      ensure!(
        T::Loyalty::account_of(affiliate).is_some(),
        Error::<T>::NoLoyaltyAccount
      );
      ensure!(
        VerifiedProjects::<T>::get(&project),
        Error::<T>::ProjectNotVerified
      );
      ensure!(!discount_pct.is_zero(), Error::<T>::ZeroDiscount);
      ensure!(
        commission_pct <= params::MAX_AFFILIATE_COMMISSION,
        Error::<T>::CommissionTooHigh
      );
      ensure!(!duration.is_zero(), Error::<T>::ZeroDuration);
      ensure!(
        duration <= T::MaxOfferDuration::get(),
        Error::<T>::DurationTooLong
      );

      let offer_id = NextOfferId::<T>::get().saturating_add(1);
      NextOfferId::<T>::put(offer_id);

      let now = frame_system::Pallet::<T>::block_number();
      Offers::<T>::insert(
        offer_id,
        AffiliateDiscount {
          affiliate: affiliate.clone(),
          project: project.clone(),
          token,
          discount_pct,
          commission_pct,
          funded: 0,
          remaining: 0,
          expires_at: now.saturating_add(duration),
          active: false,
          verified: true,
        },
      );

      Self::deposit_event(Event::OfferCreated {
        offer: offer_id,
        affiliate: affiliate.clone(),
        project,
        token,
      });
      Ok(())
    }

    fn do_fund_offer(who: &T::AccountId, offer_id: OfferId, amount: Balance) -> DispatchResult {
      ensure!(!amount.is_zero(), Error::<T>::ZeroFunding);

      Offers::<T>::try_mutate(offer_id, |maybe| -> DispatchResult {
        let offer = maybe.as_mut().ok_or(Error::<T>::OfferNotFound)?;
        ensure!(&offer.project == who, Error::<T>::NotOfferSponsor);
        let now = frame_system::Pallet::<T>::block_number();
        ensure!(now < offer.expires_at, Error::<T>::OfferExpired);

        T::Assets::transfer(offer.token, who, &Self::account_id(), amount)?;
        offer.funded = offer.funded.saturating_add(amount);
        offer.remaining = offer.remaining.saturating_add(amount);
        offer.active = true;
        Ok(())
      })?;

      Self::deposit_event(Event::OfferFunded {
        offer: offer_id,
        amount,
      });
      Ok(())
    }

    /// Offer custody account; all budgets sit here.
    pub fn account_id() -> T::AccountId {
      T::PalletId::get().into_account_truncating()
    }

    /// Raw discount for a trade before the commission carve-out, clamped to the
    /// remaining budget. Zero for every non-qualifying trade.
    fn compute_discount(
      offer: &AffiliateDiscount<T::AccountId, BlockNumberFor<T>>,
      now: BlockNumberFor<T>,
      asset_in: AssetKind,
      amount_in: Balance,
    ) -> Balance {
      if !offer.active || !offer.verified || now >= offer.expires_at {
        return 0;
      }
      if asset_in != offer.token {
        return 0;
      }
      (offer.discount_pct * amount_in).min(offer.remaining)
    }
  }

  impl<T: Config> AffiliateDiscounts<T::AccountId> for Pallet<T> {
    fn quote_and_settle(
      offer_id: OfferId,
      trader: &T::AccountId,
      asset_in: AssetKind,
      amount_in: Balance,
    ) -> Result<Balance, DispatchError> {
      let Some(mut offer) = Offers::<T>::get(offer_id) else {
        return Ok(0);
      };
      let now = frame_system::Pallet::<T>::block_number();

      if offer.active && now >= offer.expires_at {
        offer.active = false;
        Offers::<T>::insert(offer_id, offer);
        Self::deposit_event(Event::OfferDeactivated { offer: offer_id });
        return Ok(0);
      }

      let discount = Self::compute_discount(&offer, now, asset_in, amount_in);
      if discount.is_zero() {
        return Ok(0);
      }

      // Commission is carved out of the discount, then split with the platform
      let commission = offer.commission_pct * discount;
      let platform_cut = params::PLATFORM_COMMISSION_SHARE * commission;
      let affiliate_cut = commission.saturating_sub(platform_cut);

      let custody = Self::account_id();
      if !platform_cut.is_zero() {
        T::Assets::transfer(offer.token, &custody, &T::TreasuryAccount::get(), platform_cut)?;
      }
      if !affiliate_cut.is_zero() {
        T::Assets::transfer(offer.token, &custody, &offer.affiliate, affiliate_cut)?;
      }
      T::Loyalty::credit_affiliate_earnings(&offer.affiliate, affiliate_cut)?;

      offer.remaining = offer.remaining.saturating_sub(discount);
      if offer.remaining.is_zero() {
        offer.active = false;
        Self::deposit_event(Event::OfferDeactivated { offer: offer_id });
      }
      Offers::<T>::insert(offer_id, &offer);

      Self::deposit_event(Event::DiscountSettled {
        offer: offer_id,
        trader: trader.clone(),
        discount,
        commission,
      });
      Ok(discount.saturating_sub(commission))
    }

    fn preview(offer_id: OfferId, asset_in: AssetKind, amount_in: Balance) -> Balance {
      let Some(offer) = Offers::<T>::get(offer_id) else {
        return 0;
      };
      let now = frame_system::Pallet::<T>::block_number();
      let discount = Self::compute_discount(&offer, now, asset_in, amount_in);
      discount.saturating_sub(offer.commission_pct * discount)
    }

    fn offer_asset(offer_id: OfferId) -> Option<AssetKind> {
      Offers::<T>::get(offer_id).map(|offer| offer.token)
    }

    fn pay_out(asset: AssetKind, to: &T::AccountId, amount: Balance) -> DispatchResult {
      T::Assets::transfer(asset, &Self::account_id(), to, amount)
    }
  }
}
