//! Number and result formatting.

use valuescope_valuation::ValuationResult;

/// Two decimals with `,` thousands separators (`1234567.891` → `1,234,567.89`).
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{sign}{grouped}.{frac_part}")
}

/// Two decimals, no grouping.
pub fn format_ratio(value: f64) -> String {
    format!("{value:.2}")
}

/// One-line result, e.g. `GGM Valuation: PKR 200.00` or `PEG Ratio: 1.50`.
pub fn format_valuation(result: &ValuationResult, currency: &str) -> String {
    let label = result.method.result_label();
    if result.method.is_currency() {
        format!("{label}: {currency} {}", format_amount(result.value))
    } else {
        format!("{label}: {}", format_ratio(result.value))
    }
}
