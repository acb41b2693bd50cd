//! Employer on-cost calculation.
//!
//! This module derives superannuation, workers' compensation, payroll tax,
//! leave loading and admin overhead from the base wage, and passes the fixed
//! annual study and PPE costs through unchanged.

use rust_decimal::Decimal;

use crate::models::{CostConfig, OnCosts};

/// Maximum hours per year that attract leave loading.
///
/// Four weeks of annual leave at a 38-hour week. This is a fixed cap and is
/// not derived from the apprentice's work pattern.
pub const LEAVE_LOADING_HOURS_CAP: Decimal = Decimal::from_parts(152, 0, 0, false, 0);

/// Returns the hours leave loading applies to: `min(total_hours, 152)`.
pub fn leave_loading_hours(total_hours: Decimal) -> Decimal {
    total_hours.min(LEAVE_LOADING_HOURS_CAP)
}

/// Calculates the employer's on-costs for a year.
///
/// - `superannuation`, `workers_comp`, `payroll_tax` and `admin_cost` are
///   `pay_rate × total_hours × rate`.
/// - `leave_loading` is `pay_rate × min(total_hours, 152) × leave_loading`.
/// - `study_cost` and `ppe_cost` come straight from `cost`.
///
/// No rounding is applied.
///
/// # Examples
///
/// ```
/// use charge_rate_engine::calculation::calculate_on_costs;
/// use charge_rate_engine::models::CostConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let oncosts = calculate_on_costs(
///     Decimal::from_str("29.50").unwrap(),
///     Decimal::from(1976),
///     &CostConfig::default(),
/// );
/// assert_eq!(oncosts.superannuation, Decimal::from_str("6703.58").unwrap());
/// assert_eq!(oncosts.leave_loading, Decimal::from_str("784.70").unwrap());
/// ```
pub fn calculate_on_costs(pay_rate: Decimal, total_hours: Decimal, cost: &CostConfig) -> OnCosts {
    let base_wage = pay_rate * total_hours;

    OnCosts {
        superannuation: base_wage * cost.super_rate,
        workers_comp: base_wage * cost.wc_rate,
        payroll_tax: base_wage * cost.payroll_tax_rate,
        leave_loading: pay_rate * leave_loading_hours(total_hours) * cost.leave_loading,
        study_cost: cost.study_cost,
        ppe_cost: cost.ppe_cost,
        admin_cost: base_wage * cost.admin_rate,
    }
}
