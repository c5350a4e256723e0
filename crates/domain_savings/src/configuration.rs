//! Savings configuration
//!
//! The user picks a savings percentage between 1% and 15% and the product
//! carries a bonus (interest) rate. Out-of-range values are rejected with
//! [`SavingsError::InvalidConfiguration`], never clamped.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Currency, Rate};
use crate::error::SavingsError;

/// Lowest savings percentage a user may choose
pub const MIN_SAVINGS_PERCENTAGE: Decimal = dec!(1);

/// Highest savings percentage a user may choose
pub const MAX_SAVINGS_PERCENTAGE: Decimal = dec!(15);

/// A savings percentage within the allowed range
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct SavingsPercentage(Decimal);

impl SavingsPercentage {
    pub fn new(percentage: Decimal) -> Result<Self, SavingsError> {
        if percentage < MIN_SAVINGS_PERCENTAGE || percentage > MAX_SAVINGS_PERCENTAGE {
            return Err(SavingsError::configuration(
                "savings_percentage",
                format!(
                    "{percentage}% is outside {MIN_SAVINGS_PERCENTAGE}%..={MAX_SAVINGS_PERCENTAGE}%"
                ),
            ));
        }
        Ok(Self(percentage))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Amount set aside from a transaction under the percentage rule
    ///
    /// Only incoming (positive) amounts are saved from.
    pub fn savings_for(&self, amount: Decimal) -> Decimal {
        if amount > Decimal::ZERO {
            amount * (self.0 / dec!(100))
        } else {
            Decimal::ZERO
        }
    }
}

impl TryFrom<Decimal> for SavingsPercentage {
    type Error = SavingsError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SavingsPercentage> for Decimal {
    fn from(value: SavingsPercentage) -> Self {
        value.0
    }
}

/// Validated configuration consumed by aggregation and the ledger
///
/// Deserialization runs the same checks as [`SavingsConfiguration::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ConfigurationFields")]
pub struct SavingsConfiguration {
    pub savings_percentage: SavingsPercentage,
    /// Bonus rate applied to savings for the expected return
    pub bonus_rate: Rate,
    /// Currency reported when no transaction supplies one
    pub default_currency: Currency,
}

impl SavingsConfiguration {
    /// Builds a configuration from percentages as entered by the user
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the savings percentage is outside
    /// 1..=15 or the bonus rate is negative.
    pub fn new(savings_percentage: Decimal, bonus_rate_percentage: Decimal) -> Result<Self, SavingsError> {
        let savings_percentage = SavingsPercentage::new(savings_percentage)?;
        let bonus_rate = checked_bonus_rate(Rate::from_percentage(bonus_rate_percentage))?;
        Ok(Self {
            savings_percentage,
            bonus_rate,
            default_currency: Currency::BGN,
        })
    }

    pub fn with_default_currency(mut self, currency: Currency) -> Self {
        self.default_currency = currency;
        self
    }
}

fn checked_bonus_rate(rate: Rate) -> Result<Rate, SavingsError> {
    if rate.is_negative() {
        return Err(SavingsError::configuration(
            "bonus_rate",
            format!("{rate} must not be negative"),
        ));
    }
    Ok(rate)
}

/// Wire shape of [`SavingsConfiguration`] before validation
#[derive(Deserialize)]
struct ConfigurationFields {
    savings_percentage: SavingsPercentage,
    bonus_rate: Rate,
    default_currency: Currency,
}

impl TryFrom<ConfigurationFields> for SavingsConfiguration {
    type Error = SavingsError;

    fn try_from(fields: ConfigurationFields) -> Result<Self, Self::Error> {
        Ok(Self {
            savings_percentage: fields.savings_percentage,
            bonus_rate: checked_bonus_rate(fields.bonus_rate)?,
            default_currency: fields.default_currency,
        })
    }
}

/// Unvalidated settings as loaded from the environment
///
/// Read from `SMARTSAVE_SAVINGS_PERCENTAGE`, `SMARTSAVE_BONUS_RATE` and
/// `SMARTSAVE_DEFAULT_CURRENCY`.
#[derive(Debug, Clone, Deserialize)]
pub struct SavingsSettings {
    pub savings_percentage: Decimal,
    pub bonus_rate: Decimal,
    pub default_currency: String,
}

impl Default for SavingsSettings {
    fn default() -> Self {
        Self {
            savings_percentage: dec!(3),
            bonus_rate: dec!(2),
            default_currency: Currency::BGN.to_string(),
        }
    }
}

impl SavingsSettings {
    /// Loads settings from `SMARTSAVE_*` environment variables, falling back
    /// to the defaults for anything unset
    pub fn from_env() -> Result<Self, SavingsError> {
        Self::load(
            config::Config::builder()
                .add_source(config::Environment::with_prefix("SMARTSAVE")),
        )
    }

    /// Loads settings from an arbitrary source stack layered over the defaults
    pub fn load(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, SavingsError> {
        let defaults = Self::default();
        let settings = builder
            .set_default("savings_percentage", defaults.savings_percentage.to_string())?
            .set_default("bonus_rate", defaults.bonus_rate.to_string())?
            .set_default("default_currency", defaults.default_currency)?
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// Validates the settings into a [`SavingsConfiguration`]
    pub fn into_configuration(self) -> Result<SavingsConfiguration, SavingsError> {
        let currency = Currency::new(&self.default_currency)
            .map_err(|e| SavingsError::configuration("default_currency", e.to_string()))?;
        Ok(SavingsConfiguration::new(self.savings_percentage, self.bonus_rate)?
            .with_default_currency(currency))
    }
}
