//! Range checks shared by the configuration types.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Checks that a fractional rate lies within `[0, 1]`.
pub(crate) fn ensure_rate(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(EngineError::invalid(
            field,
            format!("must be between 0 and 1, got {}", value),
        ));
    }
    Ok(())
}

/// Checks that a count or amount is not negative.
pub(crate) fn ensure_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(EngineError::invalid(
            field,
            format!("must not be negative, got {}", value),
        ));
    }
    Ok(())
}

/// Checks that a value lies within `(0, max]`.
pub(crate) fn ensure_positive_up_to(field: &str, value: Decimal, max: Decimal) -> EngineResult<()> {
    if value <= Decimal::ZERO || value > max {
        return Err(EngineError::invalid(
            field,
            format!("must be greater than 0 and at most {}, got {}", max, value),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_rate_bounds_are_inclusive() {
        assert!(ensure_rate("r", dec("0")).is_ok());
        assert!(ensure_rate("r", dec("1")).is_ok());
        assert!(ensure_rate("r", dec("0.115")).is_ok());
        assert!(ensure_rate("r", dec("-0.01")).is_err());
        assert!(ensure_rate("r", dec("1.01")).is_err());
    }

    #[test]
    fn test_negative_zero_is_accepted() {
        let negative_zero = -Decimal::ZERO;
        assert!(ensure_non_negative("n", negative_zero).is_ok());
        assert!(ensure_non_negative("n", dec("-0.5")).is_err());
    }

    #[test]
    fn test_positive_up_to_rejects_zero_and_excess() {
        assert!(ensure_positive_up_to("d", dec("0"), dec("7")).is_err());
        assert!(ensure_positive_up_to("d", dec("7"), dec("7")).is_ok());
        assert!(ensure_positive_up_to("d", dec("7.5"), dec("7")).is_err());
    }

    #[test]
    fn test_error_names_field() {
        match ensure_rate("cost.admin_rate", dec("2")) {
            Err(EngineError::InvalidConfiguration { field, message }) => {
                assert_eq!(field, "cost.admin_rate");
                assert!(message.contains("got 2"));
            }
            other => panic!("Expected InvalidConfiguration, got {:?}", other),
        }
    }
}
