use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of minor units (paise, cents) per major unit for the two-decimal
/// currencies this system deals in.
pub const MINOR_UNITS_PER_MAJOR: i64 = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("amount is not a finite number")]
    NotFinite,
    #[error("amount must be strictly positive")]
    NotPositive,
    #[error("amount exceeds representable range")]
    OutOfRange,
}

/// A monetary amount in integer minor units plus its ISO 4217 currency code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Money {
    pub minor_units: i64,
    pub currency: String,
}

impl Money {
    /// Build from a major-unit amount as it arrives on the wire (e.g. `500`
    /// rupees becomes `50000` paise). Rejects non-finite, non-positive and
    /// out-of-range inputs; sub-minor-unit precision rounds half away from
    /// zero.
    pub fn from_major(amount: f64, currency: &str) -> Result<Self, MoneyError> {
        let minor_units = to_minor_units(amount)?;
        Ok(Self {
            minor_units,
            currency: currency.to_string(),
        })
    }
}

/// Convert a major-unit amount to integer minor units, rounding half away
/// from zero. Amounts that round to zero or below are rejected so a payable
/// order can never be created for nothing.
pub fn to_minor_units(amount: f64) -> Result<i64, MoneyError> {
    if !amount.is_finite() {
        return Err(MoneyError::NotFinite);
    }
    if amount <= 0.0 {
        return Err(MoneyError::NotPositive);
    }
    let scaled = amount * MINOR_UNITS_PER_MAJOR as f64;
    if scaled > i64::MAX as f64 {
        return Err(MoneyError::OutOfRange);
    }
    let minor = scaled.round() as i64;
    if minor <= 0 {
        return Err(MoneyError::NotPositive);
    }
    Ok(minor)
}

/// Render minor units as a major-unit display string, e.g. `50000` -> "500.00".
pub fn format_major(minor_units: i64) -> String {
    let sign = if minor_units < 0 { "-" } else { "" };
    let abs = minor_units.unsigned_abs();
    format!(
        "{}{}.{:02}",
        sign,
        abs / MINOR_UNITS_PER_MAJOR as u64,
        abs % MINOR_UNITS_PER_MAJOR as u64
    )
}
