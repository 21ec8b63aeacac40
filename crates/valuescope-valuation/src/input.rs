//! Input field descriptions shared by the valuation methods.

use crate::error::{Result, ValuationError};
use serde::Serialize;
use std::fmt;

/// What an input value measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldUnit {
    /// An amount of money
    Currency,
    /// A rate entered as a percentage (`5` means 5%)
    Percent,
    /// A plain multiple such as a P/E ratio
    Ratio,
}

/// Lower bound accepted for an input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Bound {
    /// `value >= min`
    AtLeast(f64),
    /// `value > min`
    GreaterThan(f64),
    /// Any finite value
    Any,
}

impl Bound {
    /// Whether the value satisfies the bound.
    pub fn admits(&self, value: f64) -> bool {
        match *self {
            Self::AtLeast(min) => value >= min,
            Self::GreaterThan(min) => value > min,
            Self::Any => true,
        }
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtLeast(min) => write!(f, "at least {min}"),
            Self::GreaterThan(min) => write!(f, "greater than {min}"),
            Self::Any => f.write_str("any number"),
        }
    }
}

/// One named scalar input of a valuation method.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InputField {
    /// Key used to set the field (e.g. `growth_rate`).
    pub key: &'static str,
    /// Prompt shown to the user.
    pub label: &'static str,
    /// Unit of the value.
    pub unit: FieldUnit,
    /// Lower bound.
    pub bound: Bound,
    /// Value used until the user sets one.
    pub default: f64,
    /// Suggested increment.
    pub step: f64,
}

impl InputField {
    /// Validate a value against the field's bound.
    ///
    /// # Errors
    /// `ValuationError::InvalidInput` for non-finite values or values outside
    /// the bound.
    pub fn check(&self, value: f64) -> Result<f64> {
        if !value.is_finite() {
            return Err(ValuationError::invalid(format!(
                "{} must be a finite number",
                self.label.trim_end_matches(':')
            )));
        }
        if !self.bound.admits(value) {
            return Err(ValuationError::invalid(format!(
                "{} must be {}",
                self.label.trim_end_matches(':'),
                self.bound
            )));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const RATE: InputField = InputField {
        key: "required_rate",
        label: "Required rate of return (%):",
        unit: FieldUnit::Percent,
        bound: Bound::GreaterThan(0.0),
        default: 0.1,
        step: 0.1,
    };

    #[rstest]
    #[case(Bound::AtLeast(0.0), 0.0, true)]
    #[case(Bound::AtLeast(0.0), -0.01, false)]
    #[case(Bound::GreaterThan(0.0), 0.0, false)]
    #[case(Bound::GreaterThan(0.0), 0.1, true)]
    #[case(Bound::Any, -5.0, true)]
    fn test_bound_admits(#[case] bound: Bound, #[case] value: f64, #[case] expected: bool) {
        assert_eq!(bound.admits(value), expected);
    }

    #[test]
    fn test_check_rejects_out_of_bound() {
        let err = RATE.check(0.0).unwrap_err();
        assert_eq!(
            err,
            ValuationError::InvalidInput(
                "Required rate of return (%) must be greater than 0".to_string()
            )
        );
    }

    #[test]
    fn test_check_rejects_nan() {
        assert!(RATE.check(f64::NAN).is_err());
        assert!(RATE.check(f64::INFINITY).is_err());
        assert_eq!(RATE.check(8.5).unwrap(), 8.5);
    }
}
