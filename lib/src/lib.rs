#![no_std]
pub mod errors;
pub mod registry;
pub mod storage_keys;
pub mod types;
pub mod validation;

pub use errors::ContractError;
pub use registry::{AssetRegistry, AssetRegistryClient, AssetRegistryInterface};
pub use storage_keys::*;
pub use types::*;

pub const SECONDS_PER_DAY: u64 = 86_400;
pub const MAX_RENTAL_DAYS: u32 = 36_500; // ~100 years

// TTLs in ledgers; a ledger closes roughly every 5 seconds.
pub const DAY_IN_LEDGERS: u32 = 17_280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub const RECORD_BUMP_AMOUNT: u32 = 60 * DAY_IN_LEDGERS;
pub const RECORD_LIFETIME_THRESHOLD: u32 = 30 * DAY_IN_LEDGERS;
