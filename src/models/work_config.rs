//! The apprentice's nominal annual work pattern.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::validation::{ensure_non_negative, ensure_positive_up_to};
use crate::error::EngineResult;

/// Upper bound for `hours_per_day`.
pub const MAX_HOURS_PER_DAY: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Upper bound for `days_per_week`.
pub const MAX_DAYS_PER_WEEK: Decimal = Decimal::from_parts(7, 0, 0, false, 0);

/// Upper bound for `weeks_per_year`.
pub const MAX_WEEKS_PER_YEAR: Decimal = Decimal::from_parts(52, 0, 0, false, 0);

/// The rostered work pattern used to derive annual and billable hours.
///
/// `annual_leave_days`, `public_holidays` and `sick_leave_days` are counted
/// in days; `training_weeks` is counted in weeks.
///
/// # Example
///
/// ```
/// use charge_rate_engine::models::WorkConfig;
/// use rust_decimal::Decimal;
///
/// let work = WorkConfig::default();
/// assert_eq!(work.weeks_per_year, Decimal::new(52, 0));
/// assert_eq!(work.weekly_hours(), Decimal::new(38, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkConfig {
    /// Rostered hours per working day.
    pub hours_per_day: Decimal,
    /// Working days per week.
    pub days_per_week: Decimal,
    /// Working weeks per year.
    pub weeks_per_year: Decimal,
    /// Annual leave entitlement in days.
    pub annual_leave_days: Decimal,
    /// Public holidays falling on working days.
    pub public_holidays: Decimal,
    /// Personal/sick leave entitlement in days.
    pub sick_leave_days: Decimal,
    /// Off-the-job training block in weeks.
    pub training_weeks: Decimal,
}

impl Default for WorkConfig {
    fn default() -> Self {
        Self {
            hours_per_day: Decimal::new(76, 1),
            days_per_week: Decimal::new(5, 0),
            weeks_per_year: Decimal::new(52, 0),
            annual_leave_days: Decimal::new(20, 0),
            public_holidays: Decimal::new(10, 0),
            sick_leave_days: Decimal::new(10, 0),
            training_weeks: Decimal::new(5, 0),
        }
    }
}

impl WorkConfig {
    /// Checks every field against its permitted range.
    pub fn validate(&self) -> EngineResult<()> {
        ensure_positive_up_to("work.hours_per_day", self.hours_per_day, MAX_HOURS_PER_DAY)?;
        ensure_positive_up_to("work.days_per_week", self.days_per_week, MAX_DAYS_PER_WEEK)?;
        ensure_positive_up_to("work.weeks_per_year", self.weeks_per_year, MAX_WEEKS_PER_YEAR)?;
        ensure_non_negative("work.annual_leave_days", self.annual_leave_days)?;
        ensure_non_negative("work.public_holidays", self.public_holidays)?;
        ensure_non_negative("work.sick_leave_days", self.sick_leave_days)?;
        ensure_non_negative("work.training_weeks", self.training_weeks)?;
        Ok(())
    }

    /// Rostered hours in one working week.
    pub fn weekly_hours(&self) -> Decimal {
        self.hours_per_day * self.days_per_week
    }
}

/// A partially specified [`WorkConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkConfigOverrides {
    /// Overrides [`WorkConfig::hours_per_day`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours_per_day: Option<Decimal>,
    /// Overrides [`WorkConfig::days_per_week`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_per_week: Option<Decimal>,
    /// Overrides [`WorkConfig::weeks_per_year`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weeks_per_year: Option<Decimal>,
    /// Overrides [`WorkConfig::annual_leave_days`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_leave_days: Option<Decimal>,
    /// Overrides [`WorkConfig::public_holidays`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_holidays: Option<Decimal>,
    /// Overrides [`WorkConfig::sick_leave_days`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sick_leave_days: Option<Decimal>,
    /// Overrides [`WorkConfig::training_weeks`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_weeks: Option<Decimal>,
}

impl WorkConfigOverrides {
    /// Returns `base` with every present override applied.
    pub fn apply_to(&self, base: &WorkConfig) -> WorkConfig {
        WorkConfig {
            hours_per_day: self.hours_per_day.unwrap_or(base.hours_per_day),
            days_per_week: self.days_per_week.unwrap_or(base.days_per_week),
            weeks_per_year: self.weeks_per_year.unwrap_or(base.weeks_per_year),
            annual_leave_days: self.annual_leave_days.unwrap_or(base.annual_leave_days),
            public_holidays: self.public_holidays.unwrap_or(base.public_holidays),
            sick_leave_days: self.sick_leave_days.unwrap_or(base.sick_leave_days),
            training_weeks: self.training_weeks.unwrap_or(base.training_weeks),
        }
    }
}
