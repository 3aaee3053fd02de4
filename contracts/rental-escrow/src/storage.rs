use soroban_sdk::{contracttype, Address, Env};

use rental_lib::{
    ContractError, EscrowConfig, FineRate, WithdrawPolicy, ADMIN_KEY, FINE_RATE_KEY,
    INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, REGISTRY_KEY, TOKEN_KEY, WITHDRAW_KEY,
};

/// Persistent storage keys for rental records.
#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    /// Listing terms for an asset.
    Listing(u64),
    /// Active rental for an asset.
    Rental(u64),
    /// Assets the owner currently has rented out.
    OwnerRental(Address),
    /// Assets the borrower currently rents.
    BorrowerRental(Address),
    /// Fine record for `(asset_id, borrower)`.
    Fine(u64, Address),
    /// Withdrawable balance of a party.
    Balance(Address),
}

/* ---------------- INSTANCE ---------------- */

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/* ---------------- ADMIN ---------------- */

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&ADMIN_KEY)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&ADMIN_KEY, admin);
}

pub fn get_admin(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&ADMIN_KEY)
        .ok_or(ContractError::NotInitialized)
}

/// `caller` must be the stored admin. Authorization is the caller's job.
pub fn check_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
    if &get_admin(env)? != caller {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

/* ---------------- ASSET REGISTRY ---------------- */

pub fn set_asset_registry(env: &Env, registry: &Address) {
    env.storage().instance().set(&REGISTRY_KEY, registry);
}

pub fn get_asset_registry(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&REGISTRY_KEY)
        .ok_or(ContractError::NotInitialized)
}

/* ---------------- PAYMENT TOKEN ---------------- */

pub fn set_payment_token(env: &Env, token: &Address) {
    env.storage().instance().set(&TOKEN_KEY, token);
}

pub fn get_payment_token(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&TOKEN_KEY)
        .ok_or(ContractError::NotInitialized)
}

/* ---------------- FINES / WITHDRAWALS ---------------- */

pub fn set_fine_rate(env: &Env, rate: &FineRate) {
    env.storage().instance().set(&FINE_RATE_KEY, rate);
}

pub fn get_fine_rate(env: &Env) -> FineRate {
    env.storage()
        .instance()
        .get(&FINE_RATE_KEY)
        .unwrap_or(FineRate::ListingPrice)
}

pub fn set_withdraw_policy(env: &Env, policy: WithdrawPolicy) {
    env.storage().instance().set(&WITHDRAW_KEY, &policy);
}

pub fn get_withdraw_policy(env: &Env) -> WithdrawPolicy {
    env.storage()
        .instance()
        .get(&WITHDRAW_KEY)
        .unwrap_or(WithdrawPolicy::NoOp)
}

/* ---------------- CONFIG ---------------- */

pub fn load_config(env: &Env) -> Result<EscrowConfig, ContractError> {
    Ok(EscrowConfig {
        admin: get_admin(env)?,
        asset_registry: get_asset_registry(env)?,
        payment_token: get_payment_token(env)?,
        fine_rate: get_fine_rate(env),
        withdraw_policy: get_withdraw_policy(env),
    })
}
