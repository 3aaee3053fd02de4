use soroban_sdk::{token, Address, Env, Vec};

use rental_lib::{
    validation::{overdue_fine, rental_deadline, validate_amount},
    ActiveRental, AssetRegistry, ContractError, EscrowConfig, FineRate, FineRecord, ListingStatus,
    TurnInOutcome, WithdrawPolicy,
};

use crate::{registry::ListingRegistry, repository::EscrowRepository};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Party {
    Owner,
    Borrower,
}

/// Encapsulates the rental lifecycle, fine accrual and the escrowed
/// balances.
///
/// Every time-sensitive operation takes `now` from its caller so one entry
/// point sees one timestamp. All preconditions are checked before the first
/// write. Callers have already been authorized by the entry point.
pub struct RentalLedger<R: AssetRegistry> {
    env: Env,
    repo: EscrowRepository,
    listings: ListingRegistry<R>,
    config: EscrowConfig,
}

impl<R: AssetRegistry> RentalLedger<R> {
    pub fn new(env: &Env, assets: R, config: EscrowConfig) -> Self {
        Self {
            env: env.clone(),
            repo: EscrowRepository::new(env),
            listings: ListingRegistry::new(env, assets),
            config,
        }
    }

    pub fn listings(&self) -> &ListingRegistry<R> {
        &self.listings
    }

    fn token(&self) -> token::Client<'_> {
        token::Client::new(&self.env, &self.config.payment_token)
    }

    fn credit(&self, party: &Address, amount: i128) -> Result<i128, ContractError> {
        self.repo
            .balance(party)
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)
    }

    // ------------------------------------------------------------------
    // Renting
    // ------------------------------------------------------------------

    /// Rent `asset_id` until `expiry`, paying `payment` into the owner's
    /// balance.
    ///
    /// # Errors
    /// | Condition | Error |
    /// |---|---|
    /// | No listing | `ListingNotFound` |
    /// | Listing is rented | `AlreadyRented` |
    /// | `payment < 0` | `InvalidAmount` |
    /// | `expiry <= now` | `InvalidExpiry` |
    /// | `expiry > now + max_days` | `ExcessiveDuration` |
    /// | Escrow not approved for the asset | `NotApproved` |
    /// | Renter owns the asset | `NotBorrower` |
    /// | Renter owes a fine on the asset to a previous owner | `UnpaidFine` |
    pub fn rent_car(
        &self,
        asset_id: u64,
        renter: &Address,
        expiry: u64,
        payment: i128,
        now: u64,
    ) -> Result<ActiveRental, ContractError> {
        let listing = self.listings.load(asset_id)?;
        if listing.is_rented() {
            return Err(ContractError::AlreadyRented);
        }
        validate_amount(payment)?;
        if expiry <= now {
            return Err(ContractError::InvalidExpiry);
        }
        if expiry > rental_deadline(now, listing.max_days)? {
            return Err(ContractError::ExcessiveDuration);
        }

        let escrow = self.env.current_contract_address();
        let assets = self.listings.assets();
        if !assets.is_approved(asset_id, &escrow) {
            return Err(ContractError::NotApproved);
        }
        let owner = assets.owner_of(asset_id);
        if &owner == renter {
            return Err(ContractError::NotBorrower);
        }
        // An unpaid fine keeps its payee; a new owner cannot inherit it.
        if let Some(record) = self.repo.load_fine(asset_id, renter) {
            if record.amount > 0 && record.owner != owner {
                return Err(ContractError::UnpaidFine);
            }
        }
        let owner_balance = self.credit(&owner, payment)?;

        let rental = ActiveRental {
            owner: owner.clone(),
            borrower: renter.clone(),
            expiry,
            owner_turned_in: false,
            borrower_turned_in: false,
        };
        self.listings
            .set_status(asset_id, listing, ListingStatus::Rented);
        self.repo.save_rental(asset_id, &rental);
        self.repo.index_rental(asset_id, &rental);

        assets.set_user(&escrow, asset_id, renter, expiry);
        if payment > 0 {
            self.token().transfer(renter, &escrow, &payment);
        }
        self.repo.save_balance(&owner, owner_balance);

        Ok(rental)
    }

    // ------------------------------------------------------------------
    // Turn-in and fines
    // ------------------------------------------------------------------

    /// Owner acknowledges the rental has ended. Owner identity is the
    /// asset registry's current owner.
    pub fn turn_in_by_owner(
        &self,
        asset_id: u64,
        owner: &Address,
        now: u64,
    ) -> Result<TurnInOutcome, ContractError> {
        self.turn_in(asset_id, owner, Party::Owner, now)
    }

    /// Borrower acknowledges the rental has ended. Borrower identity is the
    /// renter recorded at rent time, which survives the registry's
    /// delegation lapsing at expiry.
    pub fn turn_in_by_borrower(
        &self,
        asset_id: u64,
        borrower: &Address,
        now: u64,
    ) -> Result<TurnInOutcome, ContractError> {
        self.turn_in(asset_id, borrower, Party::Borrower, now)
    }

    fn turn_in(
        &self,
        asset_id: u64,
        caller: &Address,
        party: Party,
        now: u64,
    ) -> Result<TurnInOutcome, ContractError> {
        let mut rental = self
            .repo
            .load_rental(asset_id)
            .ok_or(ContractError::NoActiveRental)?;

        match party {
            Party::Owner => {
                self.listings.require_owner(asset_id, caller)?;
                if rental.owner_turned_in {
                    return Err(ContractError::AlreadyTurnedIn);
                }
            }
            Party::Borrower => {
                if &rental.borrower != caller {
                    return Err(ContractError::NotBorrower);
                }
                if rental.borrower_turned_in {
                    return Err(ContractError::AlreadyTurnedIn);
                }
            }
        }

        let listing = self.listings.load(asset_id)?;

        // The first turn-in of a rental assesses the fine.
        let mut fine = 0;
        let mut record = None;
        if rental.untouched() {
            let rate = match &self.config.fine_rate {
                FineRate::ListingPrice => listing.hourly_price,
                FineRate::PerSecond(amount) => *amount,
            };
            fine = overdue_fine(now, rental.expiry, rate)?;

            let outstanding = self
                .repo
                .load_fine(asset_id, &rental.borrower)
                .map(|r| r.amount)
                .unwrap_or(0);
            record = Some(FineRecord {
                owner: rental.owner.clone(),
                amount: outstanding
                    .checked_add(fine)
                    .ok_or(ContractError::ArithmeticOverflow)?,
            });
        }

        match party {
            Party::Owner => rental.owner_turned_in = true,
            Party::Borrower => rental.borrower_turned_in = true,
        }

        if let Some(record) = record {
            self.repo.save_fine(asset_id, &rental.borrower, &record);
        }

        let settled = rental.is_settled();
        if settled {
            self.repo.remove_rental(asset_id, &rental);
            self.listings
                .set_status(asset_id, listing, ListingStatus::Listed);
        } else {
            self.repo.save_rental(asset_id, &rental);
        }

        Ok(TurnInOutcome { fine, settled })
    }

    /// Pay the outstanding fine for `asset_id` into the owner's balance.
    /// Returns the amount paid.
    pub fn pay_fee(&self, asset_id: u64, borrower: &Address) -> Result<i128, ContractError> {
        let mut record = self
            .repo
            .load_fine(asset_id, borrower)
            .ok_or(ContractError::NotBorrower)?;
        if record.amount == 0 {
            return Err(ContractError::NoFineOwed);
        }
        let amount = record.amount;
        let owner_balance = self.credit(&record.owner, amount)?;

        self.token()
            .transfer(borrower, &self.env.current_contract_address(), &amount);
        self.repo.save_balance(&record.owner, owner_balance);
        record.amount = 0;
        self.repo.save_fine(asset_id, borrower, &record);

        Ok(amount)
    }

    // ------------------------------------------------------------------
    // Balances
    // ------------------------------------------------------------------

    /// Pay out the whole balance of `party`. Returns the amount sent.
    pub fn withdraw(&self, party: &Address) -> Result<i128, ContractError> {
        let amount = self.repo.balance(party);
        if amount == 0 {
            return match self.config.withdraw_policy {
                WithdrawPolicy::NoOp => Ok(0),
                WithdrawPolicy::Reject => Err(ContractError::ZeroBalance),
            };
        }

        self.repo.save_balance(party, 0);
        self.token()
            .transfer(&self.env.current_contract_address(), party, &amount);
        Ok(amount)
    }

    // ------------------------------------------------------------------
    // Read-only queries
    // ------------------------------------------------------------------

    pub fn view_balance(&self, party: &Address) -> i128 {
        self.repo.balance(party)
    }

    pub fn fine_of(&self, asset_id: u64, party: &Address) -> i128 {
        self.repo
            .load_fine(asset_id, party)
            .map(|r| r.amount)
            .unwrap_or(0)
    }

    pub fn rental(&self, asset_id: u64) -> Option<ActiveRental> {
        self.repo.load_rental(asset_id)
    }

    /// The owner's most recent rental still active, if any.
    pub fn rental_of_owner(&self, owner: &Address) -> Option<ActiveRental> {
        self.latest_rental(self.repo.owner_rentals(owner))
    }

    /// The borrower's most recent rental still active, if any.
    pub fn rental_of_borrower(&self, borrower: &Address) -> Option<ActiveRental> {
        self.latest_rental(self.repo.borrower_rentals(borrower))
    }

    fn latest_rental(&self, assets: Vec<u64>) -> Option<ActiveRental> {
        self.repo.load_rental(assets.last()?)
    }
}
