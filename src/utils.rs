//! Utility functions for the engine

use crate::error::{EngineError, Result};
use bigdecimal::{BigDecimal, ToPrimitive, Zero};
use uuid::Uuid;

/// Generate a new unique entity ID
pub fn generate_id() -> Uuid {
    Uuid::new_v4()
}

/// Build an exact decimal from an integer mantissa and a decimal scale,
/// e.g. `decimal(115, 2)` is 1.15
pub fn decimal(units: i64, scale: i64) -> BigDecimal {
    BigDecimal::new(units.into(), scale)
}

/// Arithmetic mean of a list of decimals, `None` when the list is empty
pub fn mean(values: &[BigDecimal]) -> Option<BigDecimal> {
    if values.is_empty() {
        return None;
    }

    let sum = values
        .iter()
        .fold(BigDecimal::zero(), |acc, value| acc + value);
    Some(sum / BigDecimal::from(values.len() as u64))
}

/// Round a decimal to the given number of decimal places
pub fn round_to(value: &BigDecimal, places: i64) -> BigDecimal {
    value.round(places)
}

/// Convert a decimal to f64 for sampling
pub fn to_f64(value: &BigDecimal) -> Result<f64> {
    value
        .to_f64()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            EngineError::InternalError {
                message: format!("Decimal {} is not representable as f64", value),
            }
            .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_generate_unique_ids() {
        let id1 = generate_id();
        let id2 = generate_id();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_decimal_construction() {
        assert_eq!(decimal(115, 2), BigDecimal::from_str("1.15").unwrap());
        assert_eq!(decimal(1, -3), BigDecimal::from(1000));
        assert_eq!(decimal(70, 0), BigDecimal::from(70));
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_eq!(
            mean(&[BigDecimal::from(70), BigDecimal::from(80)]),
            Some(BigDecimal::from(75))
        );
        assert_eq!(
            mean(&[decimal(805, 1), BigDecimal::from(70), BigDecimal::from(70)]),
            Some(decimal(735, 1))
        );
    }

    #[test]
    fn test_round_to() {
        let value = BigDecimal::from(215) / BigDecimal::from(3);
        assert_eq!(round_to(&value, 2), decimal(7167, 2));
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(to_f64(&decimal(175, 2)).unwrap(), 1.75);
    }
}
