//! Price/earnings to growth ratio.

use crate::error::{Result, ValuationError};
use crate::input::{Bound, FieldUnit, InputField};
use crate::method::{Valuation, ValuationMethod, validate_fields};
use serde::{Deserialize, Serialize};

/// `pe_ratio / growth_rate_percent`. The growth rate is a raw percentage
/// (`10` for 10%), not a fraction.
///
/// # Errors
/// `ValuationError::InvalidInput` when the growth rate is zero.
pub fn peg_ratio(pe_ratio: f64, growth_rate_percent: f64) -> Result<f64> {
    if growth_rate_percent == 0.0 {
        return Err(ValuationError::invalid("growth rate cannot be zero"));
    }
    Ok(pe_ratio / growth_rate_percent)
}

/// PEG inputs as entered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PegInputs {
    /// Price/earnings ratio
    pub pe_ratio: f64,
    /// Earnings growth rate (%)
    pub growth_rate: f64,
}

impl PegInputs {
    /// Input fields, in prompt order.
    pub const FIELDS: [InputField; 2] = [
        InputField {
            key: "pe_ratio",
            label: "P/E Ratio:",
            unit: FieldUnit::Ratio,
            bound: Bound::AtLeast(0.0),
            default: 0.0,
            step: 0.1,
        },
        InputField {
            key: "growth_rate",
            label: "Growth rate (%):",
            unit: FieldUnit::Percent,
            bound: Bound::AtLeast(0.0),
            default: 0.0,
            step: 0.1,
        },
    ];

    /// Create inputs; the growth rate is a percentage.
    pub const fn new(pe_ratio: f64, growth_rate: f64) -> Self {
        Self {
            pe_ratio,
            growth_rate,
        }
    }

    pub(crate) fn field_value(&self, key: &str) -> Option<f64> {
        match key {
            "pe_ratio" => Some(self.pe_ratio),
            "growth_rate" => Some(self.growth_rate),
            _ => None,
        }
    }

    pub(crate) fn slot(&mut self, key: &str) -> Option<&mut f64> {
        match key {
            "pe_ratio" => Some(&mut self.pe_ratio),
            "growth_rate" => Some(&mut self.growth_rate),
            _ => None,
        }
    }
}

impl Default for PegInputs {
    fn default() -> Self {
        let [pe, growth] = Self::FIELDS;
        Self::new(pe.default, growth.default)
    }
}

impl Valuation for PegInputs {
    fn method(&self) -> ValuationMethod {
        ValuationMethod::PegRatio
    }

    fn validate(&self) -> Result<()> {
        validate_fields(self.method(), |key| self.field_value(key))
    }

    fn value(&self) -> Result<f64> {
        peg_ratio(self.pe_ratio, self.growth_rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_peg() {
        assert_abs_diff_eq!(peg_ratio(15.0, 10.0).unwrap(), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_growth_rejected() {
        let err = peg_ratio(15.0, 0.0).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: growth rate cannot be zero");
    }

    #[test]
    fn test_growth_is_not_a_fraction() {
        let result = PegInputs::new(15.0, 10.0).evaluate().unwrap();
        assert_abs_diff_eq!(result.value, 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_default_inputs_fail_on_zero_growth() {
        assert!(matches!(
            PegInputs::default().evaluate(),
            Err(ValuationError::InvalidInput(_))
        ));
    }
}
