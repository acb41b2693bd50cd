//! Employer-side cost assumptions.
//!
//! [`CostConfig`] holds the statutory and overhead rates that turn a base
//! wage into a fully loaded employment cost, plus the default margin used
//! when a caller does not supply one.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::validation::{ensure_non_negative, ensure_rate};
use crate::error::EngineResult;

/// Statutory and operational cost assumptions for an apprentice.
///
/// Rates are fractions (0.115 is 11.5%). `study_cost` and `ppe_cost` are
/// fixed annual dollar amounts.
///
/// # Example
///
/// ```
/// use charge_rate_engine::models::CostConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let cost = CostConfig::default();
/// assert_eq!(cost.super_rate, Decimal::from_str("0.115").unwrap());
/// assert_eq!(cost.adverse_weather_days, 5);
/// assert!(cost.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostConfig {
    /// Superannuation guarantee rate.
    pub super_rate: Decimal,
    /// Workers' compensation premium rate.
    pub wc_rate: Decimal,
    /// State payroll tax rate.
    pub payroll_tax_rate: Decimal,
    /// Annual leave loading rate.
    pub leave_loading: Decimal,
    /// Annual off-the-job training cost.
    pub study_cost: Decimal,
    /// Annual personal protective equipment cost.
    pub ppe_cost: Decimal,
    /// Administration overhead rate.
    pub admin_rate: Decimal,
    /// Margin applied when the caller supplies none.
    pub default_margin: Decimal,
    /// Working days lost to adverse weather each year.
    pub adverse_weather_days: u32,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            super_rate: Decimal::new(115, 3),
            wc_rate: Decimal::new(47, 3),
            payroll_tax_rate: Decimal::new(485, 4),
            leave_loading: Decimal::new(175, 3),
            study_cost: Decimal::new(850, 0),
            ppe_cost: Decimal::new(300, 0),
            admin_rate: Decimal::new(17, 2),
            default_margin: Decimal::new(15, 2),
            adverse_weather_days: 5,
        }
    }
}

impl CostConfig {
    /// Checks every field against its permitted range.
    ///
    /// Returns the first `InvalidConfiguration` found, naming the field as
    /// `cost.<field>`.
    pub fn validate(&self) -> EngineResult<()> {
        ensure_rate("cost.super_rate", self.super_rate)?;
        ensure_rate("cost.wc_rate", self.wc_rate)?;
        ensure_rate("cost.payroll_tax_rate", self.payroll_tax_rate)?;
        ensure_rate("cost.leave_loading", self.leave_loading)?;
        ensure_rate("cost.admin_rate", self.admin_rate)?;
        ensure_non_negative("cost.study_cost", self.study_cost)?;
        ensure_non_negative("cost.ppe_cost", self.ppe_cost)?;
        ensure_non_negative("cost.default_margin", self.default_margin)?;
        Ok(())
    }
}

/// A partially specified [`CostConfig`], as found in rate templates and
/// request bodies.
///
/// Absent fields are filled from a base configuration by [`apply_to`].
///
/// [`apply_to`]: CostConfigOverrides::apply_to
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CostConfigOverrides {
    /// Overrides [`CostConfig::super_rate`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub super_rate: Option<Decimal>,
    /// Overrides [`CostConfig::wc_rate`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wc_rate: Option<Decimal>,
    /// Overrides [`CostConfig::payroll_tax_rate`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payroll_tax_rate: Option<Decimal>,
    /// Overrides [`CostConfig::leave_loading`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leave_loading: Option<Decimal>,
    /// Overrides [`CostConfig::study_cost`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub study_cost: Option<Decimal>,
    /// Overrides [`CostConfig::ppe_cost`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ppe_cost: Option<Decimal>,
    /// Overrides [`CostConfig::admin_rate`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_rate: Option<Decimal>,
    /// Overrides [`CostConfig::default_margin`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_margin: Option<Decimal>,
    /// Overrides [`CostConfig::adverse_weather_days`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adverse_weather_days: Option<u32>,
}

impl CostConfigOverrides {
    /// Returns `base` with every present override applied.
    pub fn apply_to(&self, base: &CostConfig) -> CostConfig {
        CostConfig {
            super_rate: self.super_rate.unwrap_or(base.super_rate),
            wc_rate: self.wc_rate.unwrap_or(base.wc_rate),
            payroll_tax_rate: self.payroll_tax_rate.unwrap_or(base.payroll_tax_rate),
            leave_loading: self.leave_loading.unwrap_or(base.leave_loading),
            study_cost: self.study_cost.unwrap_or(base.study_cost),
            ppe_cost: self.ppe_cost.unwrap_or(base.ppe_cost),
            admin_rate: self.admin_rate.unwrap_or(base.admin_rate),
            default_margin: self.default_margin.unwrap_or(base.default_margin),
            adverse_weather_days: self
                .adverse_weather_days
                .unwrap_or(base.adverse_weather_days),
        }
    }
}
