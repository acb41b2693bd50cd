//! Core data models for the Charge-Rate Cost Engine.
//!
//! This module contains the configuration inputs, the calculation result and
//! the audit structures used throughout the engine.

mod billable_options;
mod calculation_result;
mod charge_rate_input;
mod cost_config;
mod validation;
mod work_config;

pub use billable_options::{BillableOptions, UnbilledCategory};
pub use calculation_result::{AuditStep, AuditTrace, AuditWarning, CalculationResult, OnCosts};
pub use charge_rate_input::ChargeRateInput;
pub use cost_config::{CostConfig, CostConfigOverrides};
pub use work_config::{
    MAX_DAYS_PER_WEEK, MAX_HOURS_PER_DAY, MAX_WEEKS_PER_YEAR, WorkConfig, WorkConfigOverrides,
};
