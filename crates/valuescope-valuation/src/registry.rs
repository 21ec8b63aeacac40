//! Method Registry
//!
//! Central registry of the valuation methods, for menus and lookup by name.

use crate::input::InputField;
use crate::method::ValuationMethod;

/// Method metadata
#[derive(Debug, Clone)]
pub struct MethodInfo {
    /// The method
    pub method: ValuationMethod,
    /// Display name
    pub name: &'static str,
    /// Brief description of what the method values
    pub description: &'static str,
    /// Formula, as shown to the user
    pub formula: &'static str,
    /// Input fields
    pub fields: &'static [InputField],
}

/// Get all available method info, in menu order
pub fn available_methods() -> Vec<MethodInfo> {
    ValuationMethod::all()
        .into_iter()
        .map(|method| {
            let (description, formula) = match method {
                ValuationMethod::GordonGrowth => (
                    "Value of a share from a dividend growing at a constant rate forever",
                    "D1 / (r - g)",
                ),
                ValuationMethod::DiscountedCashFlow => (
                    "Present value of five years of growing free cash flow, no terminal value",
                    "sum over t=1..5 of FCF0 * (1 + g)^t / (1 + r)^t",
                ),
                ValuationMethod::PegRatio => (
                    "P/E ratio relative to the earnings growth rate in percent",
                    "P/E / g(%)",
                ),
            };
            MethodInfo {
                method,
                name: method.name(),
                description,
                formula,
                fields: method.fields(),
            }
        })
        .collect()
}

/// Get method info by short or full name
pub fn get_method_info(name: &str) -> Option<MethodInfo> {
    available_methods().into_iter().find(|info| {
        info.name.eq_ignore_ascii_case(name) || info.method.short_name().eq_ignore_ascii_case(name)
    })
}
