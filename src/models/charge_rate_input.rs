//! The complete input bundle for one charge-rate calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::validation::ensure_non_negative;
use super::{BillableOptions, CostConfig, WorkConfig};
use crate::error::EngineResult;

/// Everything the composer needs for one apprentice.
///
/// `margin` falls back to `cost.default_margin` when absent.
///
/// # Example
///
/// ```
/// use charge_rate_engine::models::ChargeRateInput;
/// use rust_decimal::Decimal;
///
/// let input = ChargeRateInput::with_defaults(Decimal::new(2950, 2));
/// assert_eq!(input.effective_margin(), Decimal::new(15, 2));
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeRateInput {
    /// Base hourly pay rate supplied by the rate source.
    pub pay_rate: Decimal,
    /// Employer cost assumptions.
    pub cost: CostConfig,
    /// Annual work pattern.
    pub work: WorkConfig,
    /// Billing-inclusion policy.
    pub billable: BillableOptions,
    /// Margin override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<Decimal>,
}

impl ChargeRateInput {
    /// Builds an input using the factory defaults for every configuration.
    pub fn with_defaults(pay_rate: Decimal) -> Self {
        Self {
            pay_rate,
            cost: CostConfig::default(),
            work: WorkConfig::default(),
            billable: BillableOptions::default(),
            margin: None,
        }
    }

    /// The margin applied to cost per hour.
    pub fn effective_margin(&self) -> Decimal {
        self.margin.unwrap_or(self.cost.default_margin)
    }

    /// Validates the pay rate, margin override and both configurations.
    pub fn validate(&self) -> EngineResult<()> {
        ensure_non_negative("pay_rate", self.pay_rate)?;
        if let Some(margin) = self.margin {
            ensure_non_negative("margin", margin)?;
        }
        self.cost.validate()?;
        self.work.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_margin_override_takes_precedence() {
        let input = ChargeRateInput {
            margin: Some(dec("0.25")),
            ..ChargeRateInput::with_defaults(dec("29.50"))
        };
        assert_eq!(input.effective_margin(), dec("0.25"));
    }

    #[test]
    fn test_negative_pay_rate_is_invalid() {
        let input = ChargeRateInput::with_defaults(dec("-1"));
        assert!(matches!(
            input.validate(),
            Err(EngineError::InvalidConfiguration { field, .. }) if field == "pay_rate"
        ));
    }

    #[test]
    fn test_negative_margin_override_is_invalid() {
        let input = ChargeRateInput {
            margin: Some(dec("-0.1")),
            ..ChargeRateInput::with_defaults(dec("29.50"))
        };
        assert!(matches!(
            input.validate(),
            Err(EngineError::InvalidConfiguration { field, .. }) if field == "margin"
        ));
    }

    #[test]
    fn test_invalid_work_config_is_reported() {
        let mut input = ChargeRateInput::with_defaults(dec("29.50"));
        input.work.weeks_per_year = Decimal::ZERO;
        assert!(matches!(
            input.validate(),
            Err(EngineError::InvalidConfiguration { field, .. }) if field == "work.weeks_per_year"
        ));
    }

    #[test]
    fn test_zero_pay_rate_is_valid() {
        assert!(ChargeRateInput::with_defaults(Decimal::ZERO).validate().is_ok());
    }
}
