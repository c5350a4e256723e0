//! Interest projection

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate};
use crate::error::SavingsError;

/// Projected balance after a holding period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestProjection {
    pub future_value: Money,
    pub interest_earned: Money,
}

/// Projects `current` savings six months ahead at `annual_rate`
///
/// Half a year of interest is credited once, so the projection is
/// `current * annual_rate / 2`.
///
/// # Errors
///
/// Returns `InvalidAmount` if the balance or the rate is negative, and
/// `Money` if the projected value overflows.
pub fn project_six_months(current: Money, annual_rate: Rate) -> Result<InterestProjection, SavingsError> {
    if current.is_negative() {
        return Err(SavingsError::invalid_amount(format!(
            "cannot project a negative balance of {current}"
        )));
    }
    if annual_rate.is_negative() {
        return Err(SavingsError::invalid_amount(format!(
            "annual rate {annual_rate} is negative"
        )));
    }

    let interest = current.multiply(annual_rate.as_decimal() / Decimal::TWO)?;
    Ok(InterestProjection {
        future_value: current.checked_add(&interest)?,
        interest_earned: interest,
    })
}
