//! Charge-rate composition.
//!
//! This module ties the hours and on-cost calculations together into a
//! [`CalculationResult`]: total hours, billable hours, base wage, on-costs,
//! total cost, cost per billable hour and the final charge rate.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{BillableOptions, CalculationResult, ChargeRateInput, CostConfig, WorkConfig};

use super::hours::{billable_hours, total_annual_hours};
use super::on_costs::calculate_on_costs;

/// Calculates the hourly charge rate for an apprentice.
///
/// All inputs are validated before any derivation runs. `margin` defaults
/// to `cost.default_margin` when `None`.
///
/// # Errors
///
/// - `InvalidConfiguration` if any input is out of range.
/// - `NonPositiveBillableHours` if unbilled time consumes the working year.
/// - `ArithmeticOverflow` if a figure exceeds the decimal range.
///
/// No partial result is ever returned.
///
/// # Examples
///
/// ```
/// use charge_rate_engine::calculation::calculate_charge_rate;
/// use charge_rate_engine::models::{BillableOptions, CostConfig, WorkConfig};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_charge_rate(
///     Decimal::from_str("29.50").unwrap(),
///     &WorkConfig::default(),
///     &CostConfig::default(),
///     &BillableOptions::default(),
///     None,
/// )
/// .unwrap();
///
/// assert_eq!(result.billable_hours, Decimal::from(1444));
/// assert_eq!(result.charge_rate.round_dp(2), Decimal::from_str("65.63").unwrap());
/// ```
pub fn calculate_charge_rate(
    pay_rate: Decimal,
    work: &WorkConfig,
    cost: &CostConfig,
    options: &BillableOptions,
    margin: Option<Decimal>,
) -> EngineResult<CalculationResult> {
    let input = ChargeRateInput {
        pay_rate,
        cost: cost.clone(),
        work: work.clone(),
        billable: *options,
        margin,
    };
    calculate(&input)
}

/// Calculates the charge rate for a bundled [`ChargeRateInput`].
pub fn calculate(input: &ChargeRateInput) -> EngineResult<CalculationResult> {
    input.validate()?;

    let work = &input.work;
    let cost = &input.cost;
    let pay_rate = input.pay_rate;
    let margin = input.effective_margin();

    let total_hours = total_annual_hours(work)?;
    let billable = billable_hours(work, cost, &input.billable)?;

    let base_wage = pay_rate
        .checked_mul(total_hours)
        .ok_or_else(|| EngineError::overflow("base_wage"))?;
    let oncosts = calculate_on_costs(pay_rate, total_hours, cost);

    let total_oncosts = oncosts
        .components()
        .iter()
        .try_fold(Decimal::ZERO, |sum, (_, amount)| sum.checked_add(*amount))
        .ok_or_else(|| EngineError::overflow("total_oncosts"))?;
    let total_cost = base_wage
        .checked_add(total_oncosts)
        .ok_or_else(|| EngineError::overflow("total_cost"))?;
    let cost_per_hour = total_cost
        .checked_div(billable)
        .ok_or_else(|| EngineError::overflow("cost_per_hour"))?;
    let charge_rate = Decimal::ONE
        .checked_add(margin)
        .and_then(|multiplier| cost_per_hour.checked_mul(multiplier))
        .ok_or_else(|| EngineError::overflow("charge_rate"))?;

    debug!(
        pay_rate = %pay_rate,
        total_hours = %total_hours,
        billable_hours = %billable,
        total_cost = %total_cost,
        charge_rate = %charge_rate,
        "Charge rate calculated"
    );

    Ok(CalculationResult {
        pay_rate,
        total_hours,
        billable_hours: billable,
        base_wage,
        oncosts,
        total_cost,
        cost_per_hour,
        charge_rate,
    })
}
