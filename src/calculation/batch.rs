//! Batch charge-rate calculation across many apprentices.
//!
//! Each item is calculated independently; a failure is recorded against its
//! apprentice and never stops the rest of the batch.

use tracing::{info, warn};

use crate::error::EngineResult;
use crate::models::{CalculationResult, ChargeRateInput};

use super::charge_rate::calculate;

/// One apprentice's inputs within a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchItem {
    /// Identifier used to report the outcome.
    pub apprentice_id: String,
    /// The calculation inputs.
    pub input: ChargeRateInput,
}

/// The outcome of one batch item.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchOutcome {
    /// Identifier copied from the [`BatchItem`].
    pub apprentice_id: String,
    /// The result, or the error that apprentice's inputs produced.
    pub outcome: EngineResult<CalculationResult>,
}

impl BatchOutcome {
    /// Returns true if the calculation succeeded.
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Calculates every item, preserving input order.
///
/// # Examples
///
/// ```
/// use charge_rate_engine::calculation::{BatchItem, calculate_batch};
/// use charge_rate_engine::models::ChargeRateInput;
/// use rust_decimal::Decimal;
///
/// let items = vec![
///     BatchItem {
///         apprentice_id: "app_001".to_string(),
///         input: ChargeRateInput::with_defaults(Decimal::new(2950, 2)),
///     },
///     BatchItem {
///         apprentice_id: "app_002".to_string(),
///         input: ChargeRateInput::with_defaults(Decimal::new(-1, 0)),
///     },
/// ];
///
/// let outcomes = calculate_batch(&items);
/// assert!(outcomes[0].is_ok());
/// assert!(!outcomes[1].is_ok());
/// ```
pub fn calculate_batch(items: &[BatchItem]) -> Vec<BatchOutcome> {
    let outcomes: Vec<BatchOutcome> = items
        .iter()
        .map(|item| {
            let outcome = calculate(&item.input);
            if let Err(err) = &outcome {
                warn!(
                    apprentice_id = %item.apprentice_id,
                    error = %err,
                    "Charge rate calculation failed"
                );
            }
            BatchOutcome {
                apprentice_id: item.apprentice_id.clone(),
                outcome,
            }
        })
        .collect();

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    info!(
        items = items.len(),
        succeeded = items.len() - failed,
        failed,
        "Batch calculation completed"
    );

    outcomes
}
