#![no_std]
/*!
# Rental Escrow

Time-bound rental of assets held in an external registry. An owner lists an
asset, a borrower pays to receive temporary usage rights, both parties turn
the asset back in, and overdue time is charged as a fine.

## Architecture

```text
RentalEscrow (entry points, events)
    └── RentalLedger        ← rentals, fines, balances
            ├── ListingRegistry ← listing terms, occupancy state
            └── EscrowRepository ← persistent storage I/O
AssetRegistry (trait) ← ownership / approval / set_user, injected
```

## Storage keys

| Key | Tier | Description |
|---|---|---|
| `Listing(asset_id)` | Persistent | `Listing` terms and status |
| `Rental(asset_id)` | Persistent | `ActiveRental` while rented |
| `OwnerRental(owner)` / `BorrowerRental(borrower)` | Persistent | `Vec<u64>` of active rentals |
| `Fine(asset_id, borrower)` | Persistent | `FineRecord` |
| `Balance(party)` | Persistent | Withdrawable `i128` |
| `admin`, `registry`, `pay_token`, `fine_rate`, `withdraw` | Instance | Configuration |
*/

mod events;
mod ledger;
mod registry;
mod repository;
mod storage;
pub mod testutils;

#[cfg(test)]
mod test_fines;
#[cfg(test)]
mod test_props;

use soroban_sdk::{contract, contractimpl, Address, Env};

use rental_lib::{
    validation::validate_fine_rate, ActiveRental, AssetRegistryClient, ContractError,
    EscrowConfig, FineRate, Listing, TurnInOutcome, WithdrawPolicy,
};

pub use ledger::RentalLedger;
pub use registry::ListingRegistry;

#[contract]
pub struct RentalEscrow;

/// Build the ledger against the configured registry.
fn ledger(env: &Env) -> Result<RentalLedger<AssetRegistryClient<'_>>, ContractError> {
    let config = storage::load_config(env)?;
    storage::bump_instance(env);
    let assets = AssetRegistryClient::new(env, &config.asset_registry);
    Ok(RentalLedger::new(env, assets, config))
}

#[contractimpl]
impl RentalEscrow {
    // ---------------- CONFIGURATION ----------------

    /// One-time setup: admin, asset registry, payment token and fine rate.
    pub fn initialize(
        env: Env,
        admin: Address,
        asset_registry: Address,
        payment_token: Address,
        fine_rate: FineRate,
    ) -> Result<(), ContractError> {
        if storage::has_admin(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();
        validate_fine_rate(&fine_rate)?;

        storage::set_admin(&env, &admin);
        storage::set_asset_registry(&env, &asset_registry);
        storage::set_payment_token(&env, &payment_token);
        storage::set_fine_rate(&env, &fine_rate);
        storage::set_withdraw_policy(&env, WithdrawPolicy::NoOp);
        storage::bump_instance(&env);

        events::initialized(&env, &storage::load_config(&env)?);
        Ok(())
    }

    pub fn set_admin(env: Env, admin: Address, new_admin: Address) -> Result<(), ContractError> {
        admin.require_auth();
        storage::check_admin(&env, &admin)?;

        storage::set_admin(&env, &new_admin);
        events::admin_changed(&env, &admin, &new_admin);
        Ok(())
    }

    pub fn set_fine_rate(env: Env, admin: Address, rate: FineRate) -> Result<(), ContractError> {
        admin.require_auth();
        storage::check_admin(&env, &admin)?;
        validate_fine_rate(&rate)?;

        storage::set_fine_rate(&env, &rate);
        events::config_updated(&env, &storage::load_config(&env)?);
        Ok(())
    }

    pub fn set_withdraw_policy(
        env: Env,
        admin: Address,
        policy: WithdrawPolicy,
    ) -> Result<(), ContractError> {
        admin.require_auth();
        storage::check_admin(&env, &admin)?;

        storage::set_withdraw_policy(&env, policy);
        events::config_updated(&env, &storage::load_config(&env)?);
        Ok(())
    }

    pub fn get_config(env: Env) -> Result<EscrowConfig, ContractError> {
        storage::load_config(&env)
    }

    // ---------------- LISTINGS ----------------

    /// List an owned, escrow-approved asset for rent.
    pub fn list_car(
        env: Env,
        asset_id: u64,
        owner: Address,
        hourly_price: i128,
        max_days: u32,
        advance_time: u64,
    ) -> Result<(), ContractError> {
        owner.require_auth();
        let ledger = ledger(&env)?;
        let listing =
            ledger
                .listings()
                .list_car(asset_id, &owner, hourly_price, max_days, advance_time)?;
        events::car_listed(&env, asset_id, &owner, &listing);
        Ok(())
    }

    pub fn update_listing(
        env: Env,
        asset_id: u64,
        owner: Address,
        hourly_price: i128,
        max_days: u32,
        advance_time: u64,
    ) -> Result<(), ContractError> {
        owner.require_auth();
        let ledger = ledger(&env)?;
        let listing = ledger.listings().update_listing(
            asset_id,
            &owner,
            hourly_price,
            max_days,
            advance_time,
        )?;
        events::listing_updated(&env, asset_id, &listing);
        Ok(())
    }

    pub fn cancel_listing(env: Env, asset_id: u64, owner: Address) -> Result<(), ContractError> {
        owner.require_auth();
        ledger(&env)?.listings().cancel_listing(asset_id, &owner)?;
        events::listing_cancelled(&env, asset_id, &owner);
        Ok(())
    }

    /// Listing terms; all-zero when the asset is not listed.
    pub fn get_listing(env: Env, asset_id: u64) -> Result<Listing, ContractError> {
        Ok(ledger(&env)?.listings().get_listing(asset_id))
    }

    // ---------------- RENTALS ----------------

    /// Rent `asset_id` until `expiry`; `payment` is escrowed for the owner.
    pub fn rent_car(
        env: Env,
        asset_id: u64,
        renter: Address,
        expiry: u64,
        payment: i128,
    ) -> Result<ActiveRental, ContractError> {
        renter.require_auth();
        let now = env.ledger().timestamp();
        let rental = ledger(&env)?.rent_car(asset_id, &renter, expiry, payment, now)?;
        events::car_rented(&env, asset_id, &rental, payment);
        Ok(rental)
    }

    pub fn turn_in_by_owner(
        env: Env,
        asset_id: u64,
        owner: Address,
    ) -> Result<TurnInOutcome, ContractError> {
        owner.require_auth();
        let now = env.ledger().timestamp();
        let outcome = ledger(&env)?.turn_in_by_owner(asset_id, &owner, now)?;
        events::turned_in(&env, asset_id, &owner, &outcome);
        Ok(outcome)
    }

    pub fn turn_in_by_borrower(
        env: Env,
        asset_id: u64,
        borrower: Address,
    ) -> Result<TurnInOutcome, ContractError> {
        borrower.require_auth();
        let now = env.ledger().timestamp();
        let outcome = ledger(&env)?.turn_in_by_borrower(asset_id, &borrower, now)?;
        events::turned_in(&env, asset_id, &borrower, &outcome);
        Ok(outcome)
    }

    /// Settle the caller's outstanding fine for `asset_id`.
    pub fn pay_fee(env: Env, asset_id: u64, borrower: Address) -> Result<i128, ContractError> {
        borrower.require_auth();
        let amount = ledger(&env)?.pay_fee(asset_id, &borrower)?;
        events::fee_paid(&env, asset_id, &borrower, amount);
        Ok(amount)
    }

    /// Pay out the caller's whole balance.
    pub fn withdraw(env: Env, party: Address) -> Result<i128, ContractError> {
        party.require_auth();
        let amount = ledger(&env)?.withdraw(&party)?;
        if amount > 0 {
            events::withdrawn(&env, &party, amount);
        }
        Ok(amount)
    }

    // ---------------- QUERIES ----------------

    pub fn view_balance(env: Env, party: Address) -> Result<i128, ContractError> {
        Ok(ledger(&env)?.view_balance(&party))
    }

    /// Unpaid fine of `party` for `asset_id`.
    pub fn get_fine_listings(env: Env, asset_id: u64, party: Address) -> Result<i128, ContractError> {
        Ok(ledger(&env)?.fine_of(asset_id, &party))
    }

    /// Expiry of the owner's most recent active rental, 0 when nothing is rented.
    pub fn get_rental_listings(env: Env, owner: Address) -> Result<u64, ContractError> {
        Ok(ledger(&env)?
            .rental_of_owner(&owner)
            .map_or(0, |rental| rental.expiry))
    }

    pub fn get_rental(env: Env, asset_id: u64) -> Result<Option<ActiveRental>, ContractError> {
        Ok(ledger(&env)?.rental(asset_id))
    }

    /// Whether `owner` has turned in their current rental.
    pub fn get_owner_status(env: Env, owner: Address) -> Result<bool, ContractError> {
        Ok(ledger(&env)?
            .rental_of_owner(&owner)
            .map_or(false, |rental| rental.owner_turned_in))
    }

    /// Whether `borrower` has turned in their current rental.
    pub fn get_borrower_status(env: Env, borrower: Address) -> Result<bool, ContractError> {
        Ok(ledger(&env)?
            .rental_of_borrower(&borrower)
            .map_or(false, |rental| rental.borrower_turned_in))
    }
}
