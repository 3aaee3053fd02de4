use soroban_sdk::{contracttype, Address};

/// Occupancy state of a listed asset.
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ListingStatus {
    /// Available for rental.
    Listed = 0,
    /// Currently occupied by a borrower.
    Rented = 1,
}

/// Owner-published rental terms for one asset.
///
/// Stored under `DataKey::Listing(asset_id)`. A listing with every numeric
/// field at zero and status `Listed` is indistinguishable from no listing.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Listing {
    /// Price in the payment token's smallest unit. Also the per-second
    /// overdue rate under `FineRate::ListingPrice`.
    pub hourly_price: i128,
    pub max_days: u32,
    /// Notice window in seconds, kept as the owner set it.
    pub advance_time: u64,
    pub status: ListingStatus,
}

impl Listing {
    pub fn absent() -> Self {
        Self {
            hourly_price: 0,
            max_days: 0,
            advance_time: 0,
            status: ListingStatus::Listed,
        }
    }

    pub fn is_absent(&self) -> bool {
        *self == Self::absent()
    }

    pub fn is_rented(&self) -> bool {
        self.status == ListingStatus::Rented
    }
}

/// The record of an asset currently occupied by a borrower.
///
/// Stored under `DataKey::Rental(asset_id)`; exists only while the listing
/// is `Rented`.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveRental {
    /// Owner at rent time; credited with the rent payment.
    pub owner: Address,
    pub borrower: Address,
    /// Timestamp at which authorized usage ends.
    pub expiry: u64,
    pub owner_turned_in: bool,
    pub borrower_turned_in: bool,
}

impl ActiveRental {
    /// Neither party has turned in yet.
    pub fn untouched(&self) -> bool {
        !self.owner_turned_in && !self.borrower_turned_in
    }

    pub fn is_settled(&self) -> bool {
        self.owner_turned_in && self.borrower_turned_in
    }
}

/// Unpaid overdue fee owed by a borrower for one asset.
///
/// Stored under `DataKey::Fine(asset_id, borrower)`.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FineRecord {
    /// Party credited when the fine is paid.
    pub owner: Address,
    pub amount: i128,
}

/// Which rate turns overdue seconds into a fine.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FineRate {
    /// Listing `hourly_price` charged per overdue second.
    ListingPrice,
    /// Flat amount charged per overdue second, whatever the listing price.
    PerSecond(i128),
}

/// What `withdraw` does when the caller has nothing to withdraw.
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum WithdrawPolicy {
    /// Return zero and leave state untouched.
    NoOp = 0,
    /// Fail with `ZeroBalance`.
    Reject = 1,
}

/// Contract configuration, assembled from instance storage.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EscrowConfig {
    pub admin: Address,
    pub asset_registry: Address,
    pub payment_token: Address,
    pub fine_rate: FineRate,
    pub withdraw_policy: WithdrawPolicy,
}

/// Result of a single turn-in call.
#[contracttype]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnInOutcome {
    /// Fine assessed by this call; zero unless it was the first turn-in.
    pub fine: i128,
    /// Both parties have turned in and the asset is listed again.
    pub settled: bool,
}
