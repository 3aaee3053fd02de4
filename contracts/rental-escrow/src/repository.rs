use soroban_sdk::{Address, Env, IntoVal, Val, Vec};

use rental_lib::{ActiveRental, FineRecord, Listing, RECORD_BUMP_AMOUNT, RECORD_LIFETIME_THRESHOLD};

use crate::storage::DataKey;

/// Handles all persistent-storage interactions for listings, rentals, fines
/// and balances.
///
/// `ListingRegistry` and `RentalLedger` never touch `env.storage()`
/// directly; every record write goes through here and bumps its TTL.
pub struct EscrowRepository {
    env: Env,
}

impl EscrowRepository {
    pub fn new(env: &Env) -> Self {
        Self { env: env.clone() }
    }

    fn set<V: IntoVal<Env, Val>>(&self, key: &DataKey, value: &V) {
        let storage = self.env.storage().persistent();
        storage.set(key, value);
        storage.extend_ttl(key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
    }

    // ------------------------------------------------------------------
    // Listings
    // ------------------------------------------------------------------

    pub fn load_listing(&self, asset_id: u64) -> Option<Listing> {
        self.env.storage().persistent().get(&DataKey::Listing(asset_id))
    }

    pub fn save_listing(&self, asset_id: u64, listing: &Listing) {
        self.set(&DataKey::Listing(asset_id), listing);
    }

    pub fn remove_listing(&self, asset_id: u64) {
        self.env.storage().persistent().remove(&DataKey::Listing(asset_id));
    }

    // ------------------------------------------------------------------
    // Active rentals and their per-party indices
    // ------------------------------------------------------------------

    pub fn load_rental(&self, asset_id: u64) -> Option<ActiveRental> {
        self.env.storage().persistent().get(&DataKey::Rental(asset_id))
    }

    pub fn save_rental(&self, asset_id: u64, rental: &ActiveRental) {
        self.set(&DataKey::Rental(asset_id), rental);
    }

    /// Drop the rental and take the asset out of both parties' indices.
    pub fn remove_rental(&self, asset_id: u64, rental: &ActiveRental) {
        self.env.storage().persistent().remove(&DataKey::Rental(asset_id));
        self.unindex(&DataKey::OwnerRental(rental.owner.clone()), asset_id);
        self.unindex(&DataKey::BorrowerRental(rental.borrower.clone()), asset_id);
    }

    pub fn index_rental(&self, asset_id: u64, rental: &ActiveRental) {
        self.push_index(&DataKey::OwnerRental(rental.owner.clone()), asset_id);
        self.push_index(&DataKey::BorrowerRental(rental.borrower.clone()), asset_id);
    }

    /// Assets rented out by `owner`, oldest first.
    pub fn owner_rentals(&self, owner: &Address) -> Vec<u64> {
        self.index(&DataKey::OwnerRental(owner.clone()))
    }

    /// Assets rented by `borrower`, oldest first.
    pub fn borrower_rentals(&self, borrower: &Address) -> Vec<u64> {
        self.index(&DataKey::BorrowerRental(borrower.clone()))
    }

    fn index(&self, key: &DataKey) -> Vec<u64> {
        self.env
            .storage()
            .persistent()
            .get(key)
            .unwrap_or_else(|| Vec::new(&self.env))
    }

    fn push_index(&self, key: &DataKey, asset_id: u64) {
        let mut assets = self.index(key);
        if assets.first_index_of(asset_id).is_none() {
            assets.push_back(asset_id);
        }
        self.set(key, &assets);
    }

    fn unindex(&self, key: &DataKey, asset_id: u64) {
        let mut assets = self.index(key);
        if let Some(position) = assets.first_index_of(asset_id) {
            assets.remove(position);
        }
        if assets.is_empty() {
            self.env.storage().persistent().remove(key);
        } else {
            self.set(key, &assets);
        }
    }

    // ------------------------------------------------------------------
    // Fines
    // ------------------------------------------------------------------

    pub fn load_fine(&self, asset_id: u64, borrower: &Address) -> Option<FineRecord> {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Fine(asset_id, borrower.clone()))
    }

    pub fn save_fine(&self, asset_id: u64, borrower: &Address, record: &FineRecord) {
        self.set(&DataKey::Fine(asset_id, borrower.clone()), record);
    }

    // ------------------------------------------------------------------
    // Balances
    // ------------------------------------------------------------------

    pub fn balance(&self, party: &Address) -> i128 {
        self.env
            .storage()
            .persistent()
            .get(&DataKey::Balance(party.clone()))
            .unwrap_or(0)
    }

    pub fn save_balance(&self, party: &Address, amount: i128) {
        let key = DataKey::Balance(party.clone());
        if amount == 0 {
            self.env.storage().persistent().remove(&key);
        } else {
            self.set(&key, &amount);
        }
    }
}
