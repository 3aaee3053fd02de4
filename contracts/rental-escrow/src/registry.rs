use soroban_sdk::{Address, Env};

use rental_lib::{
    validation::{validate_max_days, validate_price},
    AssetRegistry, ContractError, Listing, ListingStatus,
};

use crate::repository::EscrowRepository;

/// Owns the asset-id → listing mapping and its occupancy state.
///
/// Identity and approval checks are delegated to the injected asset
/// registry; storage goes through `EscrowRepository`. Authorization is
/// left to the entry points.
pub struct ListingRegistry<R: AssetRegistry> {
    env: Env,
    repo: EscrowRepository,
    assets: R,
}

impl<R: AssetRegistry> ListingRegistry<R> {
    pub fn new(env: &Env, assets: R) -> Self {
        Self {
            env: env.clone(),
            repo: EscrowRepository::new(env),
            assets,
        }
    }

    pub fn assets(&self) -> &R {
        &self.assets
    }

    // ------------------------------------------------------------------
    // Owner operations
    // ------------------------------------------------------------------

    /// Publish rental terms for `asset_id`.
    ///
    /// # Rules
    /// * `owner` must own the asset and have approved this contract as
    ///   operator in the asset registry.
    /// * The asset must not already be listed or rented.
    pub fn list_car(
        &self,
        asset_id: u64,
        owner: &Address,
        hourly_price: i128,
        max_days: u32,
        advance_time: u64,
    ) -> Result<Listing, ContractError> {
        if let Some(existing) = self.repo.load_listing(asset_id) {
            if existing.is_rented() {
                return Err(ContractError::ListingInRentedState);
            }
            return Err(ContractError::AlreadyListed);
        }
        validate_price(hourly_price)?;
        validate_max_days(max_days)?;
        self.require_owner(asset_id, owner)?;
        if !self
            .assets
            .is_approved(asset_id, &self.env.current_contract_address())
        {
            return Err(ContractError::NotApproved);
        }

        let listing = Listing {
            hourly_price,
            max_days,
            advance_time,
            status: ListingStatus::Listed,
        };
        self.repo.save_listing(asset_id, &listing);
        Ok(listing)
    }

    /// Overwrite the numeric terms of a listing that is not rented.
    pub fn update_listing(
        &self,
        asset_id: u64,
        owner: &Address,
        hourly_price: i128,
        max_days: u32,
        advance_time: u64,
    ) -> Result<Listing, ContractError> {
        let mut listing = self.load(asset_id)?;
        if listing.is_rented() {
            return Err(ContractError::ListingInRentedState);
        }
        validate_price(hourly_price)?;
        validate_max_days(max_days)?;
        self.require_owner(asset_id, owner)?;

        listing.hourly_price = hourly_price;
        listing.max_days = max_days;
        listing.advance_time = advance_time;
        self.repo.save_listing(asset_id, &listing);
        Ok(listing)
    }

    /// Withdraw a listing that is not rented. The entry is removed, so
    /// reads return `Listing::absent()` afterwards.
    pub fn cancel_listing(&self, asset_id: u64, owner: &Address) -> Result<(), ContractError> {
        let listing = self.load(asset_id)?;
        if listing.is_rented() {
            return Err(ContractError::ListingInRentedState);
        }
        self.require_owner(asset_id, owner)?;

        self.repo.remove_listing(asset_id);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Reads and occupancy transitions (used by the ledger)
    // ------------------------------------------------------------------

    pub fn get_listing(&self, asset_id: u64) -> Listing {
        self.repo
            .load_listing(asset_id)
            .unwrap_or_else(Listing::absent)
    }

    pub fn load(&self, asset_id: u64) -> Result<Listing, ContractError> {
        self.repo
            .load_listing(asset_id)
            .ok_or(ContractError::ListingNotFound)
    }

    pub fn set_status(&self, asset_id: u64, mut listing: Listing, status: ListingStatus) {
        listing.status = status;
        self.repo.save_listing(asset_id, &listing);
    }

    pub fn require_owner(&self, asset_id: u64, caller: &Address) -> Result<(), ContractError> {
        if &self.assets.owner_of(asset_id) != caller {
            return Err(ContractError::NotOwner);
        }
        Ok(())
    }
}
