//! Billing-inclusion policy for non-working time.
//!
//! Each flag answers one question: is this category of absence spread across
//! billable hours (`true`), or is its time unbilled and its cost recovered
//! through a higher rate on the remaining hours (`false`)?

use serde::{Deserialize, Serialize};

/// Which categories of non-working time count as billable.
///
/// All flags default to `false`. No combination is disallowed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct BillableOptions {
    /// Bill annual leave days.
    pub include_annual_leave: bool,
    /// Bill public holidays.
    pub include_public_holidays: bool,
    /// Bill sick leave days.
    pub include_sick_leave: bool,
    /// Bill off-the-job training weeks.
    pub include_training_time: bool,
    /// Bill days lost to adverse weather.
    pub include_adverse_weather: bool,
}

impl BillableOptions {
    /// Options with every category billed.
    pub fn all_included() -> Self {
        Self {
            include_annual_leave: true,
            include_public_holidays: true,
            include_sick_leave: true,
            include_training_time: true,
            include_adverse_weather: true,
        }
    }

    /// Returns whether the given category is billed.
    pub fn includes(&self, category: UnbilledCategory) -> bool {
        match category {
            UnbilledCategory::AnnualLeave => self.include_annual_leave,
            UnbilledCategory::PublicHolidays => self.include_public_holidays,
            UnbilledCategory::SickLeave => self.include_sick_leave,
            UnbilledCategory::TrainingTime => self.include_training_time,
            UnbilledCategory::AdverseWeather => self.include_adverse_weather,
        }
    }

    /// Returns a copy with the flag for `category` set to `included`.
    pub fn with(mut self, category: UnbilledCategory, included: bool) -> Self {
        match category {
            UnbilledCategory::AnnualLeave => self.include_annual_leave = included,
            UnbilledCategory::PublicHolidays => self.include_public_holidays = included,
            UnbilledCategory::SickLeave => self.include_sick_leave = included,
            UnbilledCategory::TrainingTime => self.include_training_time = included,
            UnbilledCategory::AdverseWeather => self.include_adverse_weather = included,
        }
        self
    }

    /// The categories whose time is excluded from billable hours, in a
    /// fixed order.
    pub fn excluded(&self) -> Vec<UnbilledCategory> {
        UnbilledCategory::ALL
            .into_iter()
            .filter(|category| !self.includes(*category))
            .collect()
    }
}

/// A category of non-working time governed by [`BillableOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnbilledCategory {
    /// Annual leave, counted in days.
    AnnualLeave,
    /// Public holidays, counted in days.
    PublicHolidays,
    /// Sick leave, counted in days.
    SickLeave,
    /// Off-the-job training, counted in weeks.
    TrainingTime,
    /// Adverse weather, counted in days.
    AdverseWeather,
}

impl UnbilledCategory {
    /// Every category, in reporting order.
    pub const ALL: [UnbilledCategory; 5] = [
        UnbilledCategory::AnnualLeave,
        UnbilledCategory::PublicHolidays,
        UnbilledCategory::SickLeave,
        UnbilledCategory::TrainingTime,
        UnbilledCategory::AdverseWeather,
    ];

    /// The snake_case identifier used in errors and audit output.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnbilledCategory::AnnualLeave => "annual_leave",
            UnbilledCategory::PublicHolidays => "public_holidays",
            UnbilledCategory::SickLeave => "sick_leave",
            UnbilledCategory::TrainingTime => "training_time",
            UnbilledCategory::AdverseWeather => "adverse_weather",
        }
    }
}
