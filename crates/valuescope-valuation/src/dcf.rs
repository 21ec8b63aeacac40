//! Discounted cash flow over a fixed five-year horizon, without terminal value.

use crate::error::Result;
use crate::input::{Bound, FieldUnit, InputField};
use crate::method::{Valuation, ValuationMethod, validate_fields};
use serde::{Deserialize, Serialize};

/// Number of explicitly projected years.
pub const DCF_HORIZON_YEARS: u32 = 5;

/// One projected year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectedCashFlow {
    /// Year offset, starting at 1.
    pub year: u32,
    /// `fcf0 * (1 + g)^year`
    pub future_cash_flow: f64,
    /// `future_cash_flow / (1 + r)^year`
    pub present_value: f64,
}

/// Project free cash flow for each year of the horizon. Rates are fractions.
pub fn project_cash_flows(
    recent_fcf: f64,
    growth_rate: f64,
    discount_rate: f64,
) -> Vec<ProjectedCashFlow> {
    (1..=DCF_HORIZON_YEARS)
        .map(|year| {
            let t = year as i32;
            let future_cash_flow = recent_fcf * (1.0 + growth_rate).powi(t);
            ProjectedCashFlow {
                year,
                future_cash_flow,
                present_value: future_cash_flow / (1.0 + discount_rate).powi(t),
            }
        })
        .collect()
}

/// Sum of the present values of the projected cash flows.
///
/// `growth_rate` and `discount_rate` are independent; no ordering between them
/// is required.
///
/// # Examples
///
/// ```
/// use valuescope_valuation::discounted_cash_flow;
///
/// let value = discounted_cash_flow(1000.0, 0.10, 0.10);
/// assert!((value - 5000.0).abs() < 1e-9);
/// ```
pub fn discounted_cash_flow(recent_fcf: f64, growth_rate: f64, discount_rate: f64) -> f64 {
    project_cash_flows(recent_fcf, growth_rate, discount_rate)
        .iter()
        .map(|p| p.present_value)
        .sum()
}

/// DCF inputs as entered; rates are percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DcfInputs {
    /// Most recent free cash flow
    pub recent_fcf: f64,
    /// Free cash flow growth rate (%)
    pub growth_rate: f64,
    /// Discount rate (%)
    pub discount_rate: f64,
}

impl DcfInputs {
    /// Input fields, in prompt order.
    pub const FIELDS: [InputField; 3] = [
        InputField {
            key: "recent_fcf",
            label: "Most recent free cash flow:",
            unit: FieldUnit::Currency,
            bound: Bound::AtLeast(0.0),
            default: 0.0,
            step: 1000.0,
        },
        InputField {
            key: "growth_rate",
            label: "Free cash flow growth rate (%):",
            unit: FieldUnit::Percent,
            bound: Bound::AtLeast(0.0),
            default: 0.0,
            step: 0.1,
        },
        InputField {
            key: "discount_rate",
            label: "Discount rate (%):",
            unit: FieldUnit::Percent,
            bound: Bound::AtLeast(0.0),
            default: 0.0,
            step: 0.1,
        },
    ];

    /// Create inputs; rates are percentages.
    pub const fn new(recent_fcf: f64, growth_rate: f64, discount_rate: f64) -> Self {
        Self {
            recent_fcf,
            growth_rate,
            discount_rate,
        }
    }

    /// Year-by-year projection for these inputs.
    pub fn projection(&self) -> Vec<ProjectedCashFlow> {
        project_cash_flows(
            self.recent_fcf,
            self.growth_rate / 100.0,
            self.discount_rate / 100.0,
        )
    }

    pub(crate) fn field_value(&self, key: &str) -> Option<f64> {
        match key {
            "recent_fcf" => Some(self.recent_fcf),
            "growth_rate" => Some(self.growth_rate),
            "discount_rate" => Some(self.discount_rate),
            _ => None,
        }
    }

    pub(crate) fn slot(&mut self, key: &str) -> Option<&mut f64> {
        match key {
            "recent_fcf" => Some(&mut self.recent_fcf),
            "growth_rate" => Some(&mut self.growth_rate),
            "discount_rate" => Some(&mut self.discount_rate),
            _ => None,
        }
    }
}

impl Default for DcfInputs {
    fn default() -> Self {
        let [fcf, growth, discount] = Self::FIELDS;
        Self::new(fcf.default, growth.default, discount.default)
    }
}

impl Valuation for DcfInputs {
    fn method(&self) -> ValuationMethod {
        ValuationMethod::DiscountedCashFlow
    }

    fn validate(&self) -> Result<()> {
        validate_fields(self.method(), |key| self.field_value(key))
    }

    fn value(&self) -> Result<f64> {
        Ok(discounted_cash_flow(
            self.recent_fcf,
            self.growth_rate / 100.0,
            self.discount_rate / 100.0,
        ))
    }
}
