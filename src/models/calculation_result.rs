//! Calculation result models for the Charge-Rate Cost Engine.
//!
//! This module contains the [`CalculationResult`] type, its [`OnCosts`]
//! breakdown, and the audit structures used to explain a derivation to a
//! client.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The employer's additional costs on top of the base wage, per year.
///
/// Always fully populated; every amount is non-negative for valid input.
///
/// # Example
///
/// ```
/// use charge_rate_engine::models::OnCosts;
/// use rust_decimal::Decimal;
///
/// let oncosts = OnCosts {
///     superannuation: Decimal::new(100, 0),
///     workers_comp: Decimal::new(40, 0),
///     payroll_tax: Decimal::new(45, 0),
///     leave_loading: Decimal::new(10, 0),
///     study_cost: Decimal::new(850, 0),
///     ppe_cost: Decimal::new(300, 0),
///     admin_cost: Decimal::new(150, 0),
/// };
/// assert_eq!(oncosts.total(), Decimal::new(1495, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnCosts {
    /// Superannuation guarantee contribution.
    pub superannuation: Decimal,
    /// Workers' compensation premium.
    pub workers_comp: Decimal,
    /// Payroll tax.
    pub payroll_tax: Decimal,
    /// Annual leave loading, capped at 152 hours.
    pub leave_loading: Decimal,
    /// Fixed annual training cost.
    pub study_cost: Decimal,
    /// Fixed annual PPE cost.
    pub ppe_cost: Decimal,
    /// Administration overhead.
    pub admin_cost: Decimal,
}

impl OnCosts {
    /// Each on-cost paired with its field name, in declaration order.
    pub fn components(&self) -> [(&'static str, Decimal); 7] {
        [
            ("superannuation", self.superannuation),
            ("workers_comp", self.workers_comp),
            ("payroll_tax", self.payroll_tax),
            ("leave_loading", self.leave_loading),
            ("study_cost", self.study_cost),
            ("ppe_cost", self.ppe_cost),
            ("admin_cost", self.admin_cost),
        ]
    }

    /// Sum of all on-costs.
    pub fn total(&self) -> Decimal {
        self.components().iter().map(|(_, amount)| *amount).sum()
    }
}

/// The engine's single output: the charge rate and every figure behind it.
///
/// Values are full precision. Rounding for display (for example
/// `round_dp(2)`) is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// The apprentice's base hourly pay rate.
    pub pay_rate: Decimal,
    /// Total rostered hours per year.
    pub total_hours: Decimal,
    /// Hours per year over which costs are recovered.
    pub billable_hours: Decimal,
    /// `pay_rate × total_hours`.
    pub base_wage: Decimal,
    /// Employer on-costs.
    pub oncosts: OnCosts,
    /// `base_wage + oncosts.total()`.
    pub total_cost: Decimal,
    /// `total_cost / billable_hours`.
    pub cost_per_hour: Decimal,
    /// `cost_per_hour × (1 + margin)`.
    pub charge_rate: Decimal,
}

impl CalculationResult {
    /// Sum of all on-costs.
    pub fn total_oncosts(&self) -> Decimal {
        self.oncosts.total()
    }
}

/// A single step in the audit trace recording one derivation.
///
/// Each step captures the input, output, and reasoning for a formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the derivation.
    pub rule_id: String,
    /// The human-readable name of the derivation.
    pub rule_name: String,
    /// The formula applied, in symbolic form.
    pub formula: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the figures.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag figures a client may question without invalidating the
/// result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use charge_rate_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of derivation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}
