use crate::{errors::ContractError, FineRate, MAX_RENTAL_DAYS, SECONDS_PER_DAY};

pub fn validate_price(price: i128) -> Result<(), ContractError> {
    if price <= 0 {
        return Err(ContractError::InvalidPrice);
    }
    Ok(())
}

pub fn validate_max_days(max_days: u32) -> Result<(), ContractError> {
    if max_days > MAX_RENTAL_DAYS {
        return Err(ContractError::ExcessiveDuration);
    }
    Ok(())
}

pub fn validate_amount(amount: i128) -> Result<(), ContractError> {
    if amount < 0 {
        return Err(ContractError::InvalidAmount);
    }
    Ok(())
}

pub fn validate_fine_rate(rate: &FineRate) -> Result<(), ContractError> {
    match rate {
        FineRate::ListingPrice => Ok(()),
        FineRate::PerSecond(amount) => validate_price(*amount),
    }
}

/// Latest expiry a rental may request: `now + max_days` in seconds.
pub fn rental_deadline(now: u64, max_days: u32) -> Result<u64, ContractError> {
    (max_days as u64)
        .checked_mul(SECONDS_PER_DAY)
        .and_then(|window| now.checked_add(window))
        .ok_or(ContractError::ArithmeticOverflow)
}

/// Overdue fee for a turn-in at `now`: `max(0, now - expiry) * rate`.
///
/// The rate is applied per second, including when it is the listing's
/// hourly price.
pub fn overdue_fine(now: u64, expiry: u64, rate: i128) -> Result<i128, ContractError> {
    let overdue = now.saturating_sub(expiry);
    (overdue as i128)
        .checked_mul(rate)
        .ok_or(ContractError::ArithmeticOverflow)
}
