//! Valuation methods and their inputs.

use crate::dcf::DcfInputs;
use crate::error::{Result, ValuationError};
use crate::ggm::GgmInputs;
use crate::input::InputField;
use crate::peg::PegInputs;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The supported valuation methods. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValuationMethod {
    /// Gordon Growth Model
    GordonGrowth,
    /// Five-year discounted cash flow
    DiscountedCashFlow,
    /// Price/earnings to growth
    PegRatio,
}

impl ValuationMethod {
    /// All methods, in menu order.
    pub const fn all() -> [Self; 3] {
        [Self::GordonGrowth, Self::DiscountedCashFlow, Self::PegRatio]
    }

    /// Full display name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::GordonGrowth => "Gordon Growth Model (GGM)",
            Self::DiscountedCashFlow => "Discounted Cash Flow (DCF)",
            Self::PegRatio => "PEG Ratio",
        }
    }

    /// Short name.
    pub const fn short_name(&self) -> &'static str {
        match self {
            Self::GordonGrowth => "GGM",
            Self::DiscountedCashFlow => "DCF",
            Self::PegRatio => "PEG",
        }
    }

    /// Label placed before a computed value.
    pub const fn result_label(&self) -> &'static str {
        match self {
            Self::GordonGrowth => "GGM Valuation",
            Self::DiscountedCashFlow => "DCF Valuation",
            Self::PegRatio => "PEG Ratio",
        }
    }

    /// Whether the result is an amount of money rather than a ratio.
    pub const fn is_currency(&self) -> bool {
        !matches!(self, Self::PegRatio)
    }

    /// Input fields of the method, in prompt order.
    pub const fn fields(&self) -> &'static [InputField] {
        match self {
            Self::GordonGrowth => &GgmInputs::FIELDS,
            Self::DiscountedCashFlow => &DcfInputs::FIELDS,
            Self::PegRatio => &PegInputs::FIELDS,
        }
    }

    /// Look up one input field by key.
    pub fn field(&self, key: &str) -> Option<&'static InputField> {
        self.fields().iter().find(|f| f.key == key)
    }
}

impl fmt::Display for ValuationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ValuationMethod {
    type Err = ValuationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ggm" | "gordon" | "gordon-growth" => Ok(Self::GordonGrowth),
            "dcf" | "discounted-cash-flow" => Ok(Self::DiscountedCashFlow),
            "peg" | "peg-ratio" => Ok(Self::PegRatio),
            _ => Err(ValuationError::UnknownMethod(s.to_string())),
        }
    }
}

/// A computed valuation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValuationResult {
    /// Method that produced the value.
    pub method: ValuationMethod,
    /// Currency amount (GGM, DCF) or ratio (PEG).
    pub value: f64,
}

/// Common interface of the per-method input sets.
pub trait Valuation {
    /// Method these inputs belong to.
    fn method(&self) -> ValuationMethod;

    /// Check every input against its field bound.
    fn validate(&self) -> Result<()>;

    /// Evaluate the formula. Percent inputs are converted as the formula requires.
    fn value(&self) -> Result<f64>;

    /// Validate, then evaluate.
    fn evaluate(&self) -> Result<ValuationResult> {
        self.validate()?;
        Ok(ValuationResult {
            method: self.method(),
            value: self.value()?,
        })
    }
}

/// Inputs of whichever method is active.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ValuationInput {
    /// Gordon Growth Model inputs
    Ggm(GgmInputs),
    /// Discounted cash flow inputs
    Dcf(DcfInputs),
    /// PEG ratio inputs
    Peg(PegInputs),
}

impl ValuationInput {
    /// Inputs of a method, every field at its default.
    pub fn with_defaults(method: ValuationMethod) -> Self {
        match method {
            ValuationMethod::GordonGrowth => Self::Ggm(GgmInputs::default()),
            ValuationMethod::DiscountedCashFlow => Self::Dcf(DcfInputs::default()),
            ValuationMethod::PegRatio => Self::Peg(PegInputs::default()),
        }
    }

    /// Set one field by key. The value is stored as entered; bounds are
    /// checked when the valuation is evaluated.
    ///
    /// # Errors
    /// `ValuationError::UnknownField` if the method has no such field.
    pub fn set(&mut self, key: &str, value: f64) -> Result<()> {
        let method = self.method();
        let slot = match self {
            Self::Ggm(inputs) => inputs.slot(key),
            Self::Dcf(inputs) => inputs.slot(key),
            Self::Peg(inputs) => inputs.slot(key),
        };
        let slot = slot.ok_or_else(|| ValuationError::UnknownField {
            method: method.short_name(),
            field: key.to_string(),
        })?;
        *slot = value;
        Ok(())
    }

    /// Current value of one field.
    pub fn get(&self, key: &str) -> Option<f64> {
        match self {
            Self::Ggm(inputs) => inputs.field_value(key),
            Self::Dcf(inputs) => inputs.field_value(key),
            Self::Peg(inputs) => inputs.field_value(key),
        }
    }

    fn as_valuation(&self) -> &dyn Valuation {
        match self {
            Self::Ggm(inputs) => inputs as &dyn Valuation,
            Self::Dcf(inputs) => inputs,
            Self::Peg(inputs) => inputs,
        }
    }
}

impl Valuation for ValuationInput {
    fn method(&self) -> ValuationMethod {
        self.as_valuation().method()
    }

    fn validate(&self) -> Result<()> {
        self.as_valuation().validate()
    }

    fn value(&self) -> Result<f64> {
        self.as_valuation().value()
    }
}

/// Check every field of a method against the values returned by `lookup`.
pub(crate) fn validate_fields(
    method: ValuationMethod,
    lookup: impl Fn(&str) -> Option<f64>,
) -> Result<()> {
    for field in method.fields() {
        if let Some(value) = lookup(field.key) {
            field.check(value)?;
        }
    }
    Ok(())
}
