//! Interface to the external asset registry: the token contract that owns
//! asset ownership and temporary-user delegation.

use soroban_sdk::{contractclient, Address, Env};

/// Entry points the escrow expects from an asset registry contract.
#[contractclient(name = "AssetRegistryClient")]
pub trait AssetRegistryInterface {
    /// Current owner of `asset_id`.
    fn owner_of(env: Env, asset_id: u64) -> Address;

    /// Delegated user of `asset_id`, `None` once the delegation expired.
    fn user_of(env: Env, asset_id: u64) -> Option<Address>;

    /// Timestamp at which the current delegation ends (0 if none).
    fn user_expires(env: Env, asset_id: u64) -> u64;

    /// Whether `operator` may act on `asset_id` for its owner.
    fn is_approved(env: Env, asset_id: u64, operator: Address) -> bool;

    /// Delegate usage of `asset_id` to `user` until `expires`.
    /// `operator` must be the owner or approved.
    fn set_user(env: Env, operator: Address, asset_id: u64, user: Address, expires: u64);
}

/// The registry capabilities the escrow managers depend on.
///
/// Implemented for the generated `AssetRegistryClient`; tests substitute an
/// in-memory fake.
pub trait AssetRegistry {
    fn owner_of(&self, asset_id: u64) -> Address;
    fn user_of(&self, asset_id: u64) -> Option<Address>;
    fn is_approved(&self, asset_id: u64, operator: &Address) -> bool;
    fn set_user(&self, operator: &Address, asset_id: u64, user: &Address, expires: u64);
}

impl AssetRegistry for AssetRegistryClient<'_> {
    fn owner_of(&self, asset_id: u64) -> Address {
        AssetRegistryClient::owner_of(self, &asset_id)
    }

    fn user_of(&self, asset_id: u64) -> Option<Address> {
        AssetRegistryClient::user_of(self, &asset_id)
    }

    fn is_approved(&self, asset_id: u64, operator: &Address) -> bool {
        AssetRegistryClient::is_approved(self, &asset_id, operator)
    }

    fn set_user(&self, operator: &Address, asset_id: u64, user: &Address, expires: u64) {
        AssetRegistryClient::set_user(self, operator, &asset_id, user, &expires)
    }
}
