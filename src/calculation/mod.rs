//! Calculation logic for the Charge-Rate Cost Engine.
//!
//! This module contains the hours calculator (total and billable hours), the
//! on-cost calculator, the charge-rate composer, audit trace generation and
//! batch calculation. Control flows one way: hours, then on-costs, then the
//! composer.

mod audit;
mod batch;
mod charge_rate;
mod hours;
mod on_costs;

pub use audit::{
    AuditedCalculation, HIGH_MARGIN_WARNING, ZERO_PAY_RATE_WARNING, build_audit_trace,
    calculate_with_audit,
};
pub use batch::{BatchItem, BatchOutcome, calculate_batch};
pub use charge_rate::{calculate, calculate_charge_rate};
pub use hours::{UnbilledTime, billable_hours, total_annual_hours, unbilled_time};
pub use on_costs::{LEAVE_LOADING_HOURS_CAP, calculate_on_costs, leave_loading_hours};
