use soroban_sdk::{symbol_short, Symbol};

pub const ADMIN_KEY: Symbol = symbol_short!("admin");
pub const REGISTRY_KEY: Symbol = symbol_short!("registry");
pub const TOKEN_KEY: Symbol = symbol_short!("pay_token");
pub const FINE_RATE_KEY: Symbol = symbol_short!("fine_rate");
pub const WITHDRAW_KEY: Symbol = symbol_short!("withdraw");
