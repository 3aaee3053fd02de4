#![cfg(any(test, feature = "testutils"))]

use soroban_sdk::{contract, contractimpl, contracttype, Address, Env};

use rental_lib::AssetRegistryInterface;

#[contracttype]
#[derive(Clone)]
enum MockKey {
    Counter,
    Owner(u64),
    Approved(u64),
    User(u64),
}

#[contracttype]
#[derive(Clone)]
struct UserInfo {
    user: Address,
    expires: u64,
}

/// Minimal asset registry with per-asset operator approval and
/// expiring temporary users.
#[contract]
pub struct MockAssetRegistry;

#[contractimpl]
impl MockAssetRegistry {
    pub fn mint(env: Env, owner: Address) -> u64 {
        let asset_id: u64 = env
            .storage()
            .instance()
            .get(&MockKey::Counter)
            .unwrap_or(0u64)
            + 1;
        env.storage().instance().set(&MockKey::Counter, &asset_id);
        env.storage().instance().set(&MockKey::Owner(asset_id), &owner);
        asset_id
    }

    pub fn approve(env: Env, owner: Address, asset_id: u64, operator: Address) {
        owner.require_auth();
        if Self::owner_of(env.clone(), asset_id) != owner {
            panic!("not the asset owner");
        }
        env.storage()
            .instance()
            .set(&MockKey::Approved(asset_id), &operator);
    }

    pub fn revoke(env: Env, owner: Address, asset_id: u64) {
        owner.require_auth();
        if Self::owner_of(env.clone(), asset_id) != owner {
            panic!("not the asset owner");
        }
        env.storage().instance().remove(&MockKey::Approved(asset_id));
    }

    /// Ownership transfer clears approval and any delegated user.
    pub fn transfer(env: Env, from: Address, to: Address, asset_id: u64) {
        from.require_auth();
        if Self::owner_of(env.clone(), asset_id) != from {
            panic!("not the asset owner");
        }
        env.storage().instance().set(&MockKey::Owner(asset_id), &to);
        env.storage().instance().remove(&MockKey::Approved(asset_id));
        env.storage().instance().remove(&MockKey::User(asset_id));
    }
}

#[contractimpl]
impl AssetRegistryInterface for MockAssetRegistry {
    fn owner_of(env: Env, asset_id: u64) -> Address {
        env.storage()
            .instance()
            .get(&MockKey::Owner(asset_id))
            .unwrap_or_else(|| panic!("asset not minted"))
    }

    fn user_of(env: Env, asset_id: u64) -> Option<Address> {
        let info: UserInfo = env.storage().instance().get(&MockKey::User(asset_id))?;
        if info.expires >= env.ledger().timestamp() {
            Some(info.user)
        } else {
            None
        }
    }

    fn user_expires(env: Env, asset_id: u64) -> u64 {
        env.storage()
            .instance()
            .get::<_, UserInfo>(&MockKey::User(asset_id))
            .map(|info| info.expires)
            .unwrap_or(0)
    }

    fn is_approved(env: Env, asset_id: u64, operator: Address) -> bool {
        env.storage()
            .instance()
            .get::<_, Address>(&MockKey::Approved(asset_id))
            .map_or(false, |approved| approved == operator)
    }

    fn set_user(env: Env, operator: Address, asset_id: u64, user: Address, expires: u64) {
        operator.require_auth();
        let owner = Self::owner_of(env.clone(), asset_id);
        if operator != owner && !Self::is_approved(env.clone(), asset_id, operator) {
            panic!("operator not approved");
        }
        env.storage()
            .instance()
            .set(&MockKey::User(asset_id), &UserInfo { user, expires });
    }
}
