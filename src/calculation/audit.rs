//! Audit trail generation for charge-rate calculations.
//!
//! A charge rate has to be justified to the host employer, so every figure
//! in a [`CalculationResult`] is paired here with the formula and inputs that
//! produced it.

use rust_decimal::Decimal;
use serde_json::json;

use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, CalculationResult, ChargeRateInput, UnbilledCategory,
};

use super::charge_rate::calculate;
use super::hours::{UnbilledTime, unbilled_time};
use super::on_costs::{LEAVE_LOADING_HOURS_CAP, leave_loading_hours};

/// Warning code raised when the margin exceeds 100%.
pub const HIGH_MARGIN_WARNING: &str = "HIGH_MARGIN";

/// Warning code raised when the pay rate is zero.
pub const ZERO_PAY_RATE_WARNING: &str = "ZERO_PAY_RATE";

/// A calculation result together with the trace explaining it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditedCalculation {
    /// The calculated figures.
    pub result: CalculationResult,
    /// The derivation steps and warnings.
    pub audit_trace: AuditTrace,
}

/// Calculates the charge rate and explains every step of the derivation.
///
/// # Examples
///
/// ```
/// use charge_rate_engine::calculation::calculate_with_audit;
/// use charge_rate_engine::models::ChargeRateInput;
/// use rust_decimal::Decimal;
///
/// let audited = calculate_with_audit(&ChargeRateInput::with_defaults(Decimal::new(2950, 2))).unwrap();
/// assert_eq!(audited.audit_trace.steps.first().unwrap().rule_id, "total_hours");
/// assert_eq!(audited.audit_trace.steps.last().unwrap().rule_id, "charge_rate");
/// ```
pub fn calculate_with_audit(input: &ChargeRateInput) -> EngineResult<AuditedCalculation> {
    let result = calculate(input)?;
    let unbilled = unbilled_time(&input.work, &input.cost, &input.billable)?;
    let audit_trace = build_audit_trace(input, &result, &unbilled);
    Ok(AuditedCalculation {
        result,
        audit_trace,
    })
}

/// Builds the audit trace for a result produced from `input`.
pub fn build_audit_trace(
    input: &ChargeRateInput,
    result: &CalculationResult,
    unbilled: &UnbilledTime,
) -> AuditTrace {
    let work = &input.work;
    let cost = &input.cost;
    let oncosts = &result.oncosts;
    let margin = input.effective_margin();

    let mut steps = Vec::new();
    let mut push = |rule_id: &str,
                    rule_name: &str,
                    formula: &str,
                    input: serde_json::Value,
                    output: serde_json::Value,
                    reasoning: String| {
        let step_number = steps.len() as u32 + 1;
        steps.push(AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: rule_name.to_string(),
            formula: formula.to_string(),
            input,
            output,
            reasoning,
        });
    };

    push(
        "total_hours",
        "Total Annual Hours",
        "hours_per_day × days_per_week × weeks_per_year",
        json!({
            "hours_per_day": work.hours_per_day.to_string(),
            "days_per_week": work.days_per_week.to_string(),
            "weeks_per_year": work.weeks_per_year.to_string()
        }),
        json!({ "total_hours": result.total_hours.to_string() }),
        format!(
            "{} × {} × {} = {}",
            work.hours_per_day.normalize(),
            work.days_per_week.normalize(),
            work.weeks_per_year.normalize(),
            result.total_hours.normalize()
        ),
    );

    push(
        "unbilled_time",
        "Unbilled Time",
        "unbilled_days / days_per_week + training_weeks",
        json!({
            "billable_options": input.billable,
            "annual_leave_days": work.annual_leave_days.to_string(),
            "public_holidays": work.public_holidays.to_string(),
            "sick_leave_days": work.sick_leave_days.to_string(),
            "adverse_weather_days": cost.adverse_weather_days,
            "training_weeks": work.training_weeks.to_string()
        }),
        json!({
            "unbilled_days": unbilled.unbilled_days.to_string(),
            "training_weeks": unbilled.training_weeks.to_string(),
            "unbilled_weeks": unbilled.unbilled_weeks.to_string(),
            "excluded": unbilled.excluded
        }),
        unbilled_reasoning(unbilled, work.days_per_week),
    );

    push(
        "billable_hours",
        "Billable Hours",
        "hours_per_day × days_per_week × (weeks_per_year - unbilled_weeks)",
        json!({
            "weekly_hours": work.weekly_hours().to_string(),
            "weeks_per_year": work.weeks_per_year.to_string(),
            "unbilled_weeks": unbilled.unbilled_weeks.to_string()
        }),
        json!({ "billable_hours": result.billable_hours.to_string() }),
        format!(
            "{} × ({} - {}) = {}",
            work.weekly_hours().normalize(),
            work.weeks_per_year.normalize(),
            unbilled.unbilled_weeks.normalize(),
            result.billable_hours.normalize()
        ),
    );

    push(
        "base_wage",
        "Base Wage",
        "pay_rate × total_hours",
        json!({
            "pay_rate": result.pay_rate.to_string(),
            "total_hours": result.total_hours.to_string()
        }),
        json!({ "base_wage": result.base_wage.to_string() }),
        format!(
            "${} × {} = ${}",
            result.pay_rate.normalize(),
            result.total_hours.normalize(),
            result.base_wage.normalize()
        ),
    );

    push(
        "wage_oncosts",
        "Wage-Based On-Costs",
        "base_wage × rate",
        json!({
            "base_wage": result.base_wage.to_string(),
            "super_rate": cost.super_rate.to_string(),
            "wc_rate": cost.wc_rate.to_string(),
            "payroll_tax_rate": cost.payroll_tax_rate.to_string(),
            "admin_rate": cost.admin_rate.to_string()
        }),
        json!({
            "superannuation": oncosts.superannuation.to_string(),
            "workers_comp": oncosts.workers_comp.to_string(),
            "payroll_tax": oncosts.payroll_tax.to_string(),
            "admin_cost": oncosts.admin_cost.to_string()
        }),
        [
            ("Superannuation", cost.super_rate, oncosts.superannuation),
            ("Workers' comp", cost.wc_rate, oncosts.workers_comp),
            ("Payroll tax", cost.payroll_tax_rate, oncosts.payroll_tax),
            ("Admin", cost.admin_rate, oncosts.admin_cost),
        ]
        .iter()
        .map(|(label, rate, amount)| {
            format!(
                "{}: ${} × {} = ${}",
                label,
                result.base_wage.normalize(),
                rate.normalize(),
                amount.normalize()
            )
        })
        .collect::<Vec<_>>()
        .join("; "),
    );

    let loaded_hours = leave_loading_hours(result.total_hours);
    push(
        "leave_loading",
        "Leave Loading",
        "pay_rate × min(total_hours, 152) × leave_loading",
        json!({
            "pay_rate": result.pay_rate.to_string(),
            "total_hours": result.total_hours.to_string(),
            "hours_cap": LEAVE_LOADING_HOURS_CAP.to_string(),
            "leave_loading": cost.leave_loading.to_string()
        }),
        json!({
            "loaded_hours": loaded_hours.to_string(),
            "leave_loading": oncosts.leave_loading.to_string(),
            "capped": result.total_hours > LEAVE_LOADING_HOURS_CAP
        }),
        format!(
            "${} × {} hours × {} = ${}",
            result.pay_rate.normalize(),
            loaded_hours.normalize(),
            cost.leave_loading.normalize(),
            oncosts.leave_loading.normalize()
        ),
    );

    push(
        "fixed_costs",
        "Fixed Annual Costs",
        "study_cost + ppe_cost",
        json!({
            "study_cost": cost.study_cost.to_string(),
            "ppe_cost": cost.ppe_cost.to_string()
        }),
        json!({
            "study_cost": oncosts.study_cost.to_string(),
            "ppe_cost": oncosts.ppe_cost.to_string()
        }),
        format!(
            "Study ${} and PPE ${} passed through unchanged",
            oncosts.study_cost.normalize(),
            oncosts.ppe_cost.normalize()
        ),
    );

    push(
        "total_cost",
        "Total Employment Cost",
        "base_wage + sum(oncosts)",
        json!({
            "base_wage": result.base_wage.to_string(),
            "total_oncosts": result.total_oncosts().to_string()
        }),
        json!({ "total_cost": result.total_cost.to_string() }),
        format!(
            "${} + ${} = ${}",
            result.base_wage.normalize(),
            result.total_oncosts().normalize(),
            result.total_cost.normalize()
        ),
    );

    push(
        "cost_per_hour",
        "Cost Per Billable Hour",
        "total_cost / billable_hours",
        json!({
            "total_cost": result.total_cost.to_string(),
            "billable_hours": result.billable_hours.to_string()
        }),
        json!({ "cost_per_hour": result.cost_per_hour.to_string() }),
        format!(
            "${} / {} = ${}",
            result.total_cost.normalize(),
            result.billable_hours.normalize(),
            result.cost_per_hour.round_dp(4).normalize()
        ),
    );

    let margin_source = if input.margin.is_some() {
        "override"
    } else {
        "default"
    };
    push(
        "charge_rate",
        "Charge Rate",
        "cost_per_hour × (1 + margin)",
        json!({
            "cost_per_hour": result.cost_per_hour.to_string(),
            "margin": margin.to_string(),
            "margin_source": margin_source
        }),
        json!({ "charge_rate": result.charge_rate.to_string() }),
        format!(
            "${} × {} = ${}",
            result.cost_per_hour.round_dp(4).normalize(),
            (Decimal::ONE + margin).normalize(),
            result.charge_rate.round_dp(4).normalize()
        ),
    );

    AuditTrace {
        steps,
        warnings: collect_warnings(input),
    }
}

fn unbilled_reasoning(unbilled: &UnbilledTime, days_per_week: Decimal) -> String {
    if unbilled.excluded.is_empty() {
        return "All absence categories are billed; no unbilled time".to_string();
    }
    let names: Vec<&str> = unbilled
        .excluded
        .iter()
        .map(UnbilledCategory::as_str)
        .collect();
    format!(
        "Excluded from billing: {}. {} days / {} + {} training weeks = {} weeks",
        names.join(", "),
        unbilled.unbilled_days.normalize(),
        days_per_week.normalize(),
        unbilled.training_weeks.normalize(),
        unbilled.unbilled_weeks.round_dp(4).normalize()
    )
}

fn collect_warnings(input: &ChargeRateInput) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();
    let margin = input.effective_margin();

    if margin > Decimal::ONE {
        warnings.push(AuditWarning {
            code: HIGH_MARGIN_WARNING.to_string(),
            message: match margin.checked_mul(Decimal::ONE_HUNDRED) {
                Some(percent) => {
                    format!("Margin of {}% exceeds 100% of cost", percent.normalize())
                }
                None => format!("Margin of {} exceeds 100% of cost", margin.normalize()),
            },
            severity: "medium".to_string(),
        });
    }
    if input.pay_rate.is_zero() {
        warnings.push(AuditWarning {
            code: ZERO_PAY_RATE_WARNING.to_string(),
            message: "Pay rate is zero; only fixed costs are recovered".to_string(),
            severity: "low".to_string(),
        });
    }

    warnings
}
