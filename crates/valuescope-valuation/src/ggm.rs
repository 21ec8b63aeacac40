//! Gordon Growth Model.
//!
//! Values a share as the next dividend capitalized at the spread between the
//! required return and the perpetual dividend growth rate.

use crate::error::{Result, ValuationError};
use crate::input::{Bound, FieldUnit, InputField};
use crate::method::{Valuation, ValuationMethod, validate_fields};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// `dividend / (required_rate - growth_rate)`, rates as fractions.
///
/// # Errors
/// `ValuationError::InvalidInput` unless `required_rate > growth_rate`.
///
/// # Examples
///
/// ```
/// use valuescope_valuation::gordon_growth;
///
/// let value = gordon_growth(10.0, 0.05, 0.10).unwrap();
/// assert!((value - 200.0).abs() < 1e-9);
/// assert!(gordon_growth(10.0, 0.05, 0.05).is_err());
/// ```
pub fn gordon_growth(dividend: f64, growth_rate: f64, required_rate: f64) -> Result<f64> {
    match required_rate.partial_cmp(&growth_rate) {
        Some(Ordering::Greater) => Ok(dividend / (required_rate - growth_rate)),
        _ => Err(ValuationError::invalid(
            "required return must exceed growth rate",
        )),
    }
}

/// Gordon Growth Model inputs as entered; rates are percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GgmInputs {
    /// Expected dividend next year
    pub dividend: f64,
    /// Dividend growth rate (%)
    pub growth_rate: f64,
    /// Required rate of return (%)
    pub required_rate: f64,
}

impl GgmInputs {
    /// Input fields, in prompt order.
    pub const FIELDS: [InputField; 3] = [
        InputField {
            key: "dividend",
            label: "Expected dividend next year:",
            unit: FieldUnit::Currency,
            bound: Bound::AtLeast(0.0),
            default: 0.0,
            step: 0.1,
        },
        InputField {
            key: "growth_rate",
            label: "Dividend growth rate (%):",
            unit: FieldUnit::Percent,
            bound: Bound::AtLeast(0.0),
            default: 0.0,
            step: 0.1,
        },
        InputField {
            key: "required_rate",
            label: "Required rate of return (%):",
            unit: FieldUnit::Percent,
            bound: Bound::GreaterThan(0.0),
            default: 0.1,
            step: 0.1,
        },
    ];

    /// Create inputs; rates are percentages.
    pub const fn new(dividend: f64, growth_rate: f64, required_rate: f64) -> Self {
        Self {
            dividend,
            growth_rate,
            required_rate,
        }
    }

    pub(crate) fn field_value(&self, key: &str) -> Option<f64> {
        match key {
            "dividend" => Some(self.dividend),
            "growth_rate" => Some(self.growth_rate),
            "required_rate" => Some(self.required_rate),
            _ => None,
        }
    }

    pub(crate) fn slot(&mut self, key: &str) -> Option<&mut f64> {
        match key {
            "dividend" => Some(&mut self.dividend),
            "growth_rate" => Some(&mut self.growth_rate),
            "required_rate" => Some(&mut self.required_rate),
            _ => None,
        }
    }
}

impl Default for GgmInputs {
    fn default() -> Self {
        let [dividend, growth, required] = Self::FIELDS;
        Self::new(dividend.default, growth.default, required.default)
    }
}

impl Valuation for GgmInputs {
    fn method(&self) -> ValuationMethod {
        ValuationMethod::GordonGrowth
    }

    fn validate(&self) -> Result<()> {
        validate_fields(self.method(), |key| self.field_value(key))
    }

    fn value(&self) -> Result<f64> {
        gordon_growth(
            self.dividend,
            self.growth_rate / 100.0,
            self.required_rate / 100.0,
        )
    }
}
