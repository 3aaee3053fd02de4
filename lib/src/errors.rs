use soroban_sdk::contracterror;

/// Errors shared by the rental escrow contracts.
///
/// Codes are part of the contract interface; append new variants, never
/// renumber existing ones.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    /// Hourly price (or flat fine rate) is zero or negative.
    InvalidPrice = 4,
    /// The escrow is not an approved operator for the asset.
    NotApproved = 5,
    NotOwner = 6,
    NotBorrower = 7,
    AlreadyRented = 8,
    /// Requested expiry is past the listing's `max_days` window.
    ExcessiveDuration = 9,
    AlreadyTurnedIn = 10,
    NoFineOwed = 11,
    ZeroBalance = 12,
    /// Update, cancel or re-list attempted while the asset is rented.
    ListingInRentedState = 13,
    ListingNotFound = 14,
    AlreadyListed = 15,
    NoActiveRental = 16,
    InvalidExpiry = 17,
    InvalidAmount = 18,
    ArithmeticOverflow = 19,
    /// Renter still owes a fine on the asset to one of its previous owners.
    UnpaidFine = 20,
}
