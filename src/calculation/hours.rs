//! Annual and billable hours derivation.
//!
//! Billable hours are the denominator over which the year's employment cost
//! is spread. A category excluded from billable time (its
//! [`BillableOptions`] flag is `false`) is subtracted from the working year,
//! so its cost is recovered through a higher rate on the hours that remain.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{BillableOptions, CostConfig, UnbilledCategory, WorkConfig};

/// Unbilled time implied by a work pattern and billing policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnbilledTime {
    /// Day-denominated absences that are not billed.
    pub unbilled_days: Decimal,
    /// Training weeks that are not billed.
    pub training_weeks: Decimal,
    /// `unbilled_days / days_per_week + training_weeks`.
    pub unbilled_weeks: Decimal,
    /// Excluded categories that contribute a non-zero amount of time.
    pub excluded: Vec<UnbilledCategory>,
}

/// Returns `hours_per_day × days_per_week × weeks_per_year`.
///
/// # Errors
///
/// Returns `ArithmeticOverflow` if the product exceeds the decimal range.
///
/// # Examples
///
/// ```
/// use charge_rate_engine::calculation::total_annual_hours;
/// use charge_rate_engine::models::WorkConfig;
/// use rust_decimal::Decimal;
///
/// let hours = total_annual_hours(&WorkConfig::default()).unwrap();
/// assert_eq!(hours, Decimal::new(1976, 0));
/// ```
pub fn total_annual_hours(work: &WorkConfig) -> EngineResult<Decimal> {
    work.hours_per_day
        .checked_mul(work.days_per_week)
        .and_then(|weekly| weekly.checked_mul(work.weeks_per_year))
        .ok_or_else(|| EngineError::overflow("total_hours"))
}

/// Day count recorded for a day-denominated category, `None` for training.
fn day_count(
    category: UnbilledCategory,
    work: &WorkConfig,
    cost: &CostConfig,
) -> Option<Decimal> {
    match category {
        UnbilledCategory::AnnualLeave => Some(work.annual_leave_days),
        UnbilledCategory::PublicHolidays => Some(work.public_holidays),
        UnbilledCategory::SickLeave => Some(work.sick_leave_days),
        UnbilledCategory::AdverseWeather => Some(Decimal::from(cost.adverse_weather_days)),
        UnbilledCategory::TrainingTime => None,
    }
}

/// Totals the time excluded from billing.
///
/// Annual leave, public holidays, sick leave and adverse-weather days are
/// summed when their flag is `false` and converted to weeks through
/// `days_per_week`. Training weeks are added directly when
/// `include_training_time` is `false`.
///
/// # Errors
///
/// Returns `InvalidConfiguration` if `days_per_week` is zero, and
/// `ArithmeticOverflow` if the unbilled totals exceed the decimal range.
pub fn unbilled_time(
    work: &WorkConfig,
    cost: &CostConfig,
    options: &BillableOptions,
) -> EngineResult<UnbilledTime> {
    let mut unbilled_days = Decimal::ZERO;
    let mut training_weeks = Decimal::ZERO;
    let mut excluded = Vec::new();

    for category in UnbilledCategory::ALL {
        if options.includes(category) {
            continue;
        }
        let amount = match day_count(category, work, cost) {
            Some(days) => {
                unbilled_days = unbilled_days
                    .checked_add(days)
                    .ok_or_else(|| EngineError::overflow("unbilled_days"))?;
                days
            }
            None => {
                training_weeks = work.training_weeks;
                training_weeks
            }
        };
        if !amount.is_zero() {
            excluded.push(category);
        }
    }

    if work.days_per_week.is_zero() {
        return Err(EngineError::invalid("work.days_per_week", "must be greater than 0"));
    }
    let unbilled_weeks = unbilled_days
        .checked_div(work.days_per_week)
        .and_then(|day_weeks| day_weeks.checked_add(training_weeks))
        .ok_or_else(|| EngineError::overflow("unbilled_weeks"))?;

    Ok(UnbilledTime {
        unbilled_days,
        training_weeks,
        unbilled_weeks,
        excluded,
    })
}

/// Derives the hours per year over which costs are recovered.
///
/// `billable_weeks = weeks_per_year - unbilled_weeks`, and the result is
/// `hours_per_day × days_per_week × billable_weeks`.
///
/// # Errors
///
/// Returns `NonPositiveBillableHours` when the unbilled time consumes the
/// whole working year, `InvalidConfiguration` if `days_per_week` is zero,
/// and `ArithmeticOverflow` if any intermediate leaves the decimal range.
///
/// # Examples
///
/// ```
/// use charge_rate_engine::calculation::billable_hours;
/// use charge_rate_engine::models::{BillableOptions, CostConfig, WorkConfig};
/// use rust_decimal::Decimal;
///
/// let hours = billable_hours(
///     &WorkConfig::default(),
///     &CostConfig::default(),
///     &BillableOptions::default(),
/// )
/// .unwrap();
/// assert_eq!(hours, Decimal::new(1444, 0));
/// ```
pub fn billable_hours(
    work: &WorkConfig,
    cost: &CostConfig,
    options: &BillableOptions,
) -> EngineResult<Decimal> {
    let unbilled = unbilled_time(work, cost, options)?;
    let hours = work
        .weeks_per_year
        .checked_sub(unbilled.unbilled_weeks)
        .and_then(|billable_weeks| {
            work.hours_per_day
                .checked_mul(work.days_per_week)?
                .checked_mul(billable_weeks)
        })
        .ok_or_else(|| EngineError::overflow("billable_hours"))?;

    if hours <= Decimal::ZERO {
        return Err(EngineError::NonPositiveBillableHours {
            billable_hours: hours,
            unbilled_weeks: unbilled.unbilled_weeks,
            weeks_per_year: work.weeks_per_year,
            excluded: unbilled
                .excluded
                .iter()
                .map(|category| category.as_str().to_string())
                .collect(),
        });
    }

    Ok(hours)
}
