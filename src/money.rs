//! Locale-aware money parsing and formatting for price inputs.
//!
//! Amounts use Colombian peso conventions: `.` groups thousands and `,`
//! separates decimals, so `1.234.567,89` reads as 1234567.89.

use serde::Serialize;

/// Decimal places kept for price filters.
pub const PRICE_DECIMALS: u32 = 0;

const GROUP_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';

/// Outcome of normalizing a typed money value.
#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoneyInput {
    /// Parsed, rounded and non-negative amount; `None` when unparseable.
    pub numeric_value: Option<f64>,
    /// Canonical rendering, or the raw input when parsing failed.
    pub display_value: String,
}

/// Parses a locale formatted amount.
///
/// Thousands separators and any non-numeric decoration (currency symbols,
/// spaces) are stripped and the decimal comma becomes a decimal point.
/// Returns `None` for empty or unparseable text.
pub fn parse_currency(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }

    let sanitized: String = trimmed
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == DECIMAL_SEPARATOR || *c == '-')
        .map(|c| if c == DECIMAL_SEPARATOR { '.' } else { c })
        .collect();

    if sanitized.is_empty() {
        return None;
    }

    sanitized.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Renders an amount with thousands grouping and a fixed number of decimals.
pub fn format(value: f64, decimals: u32) -> String {
    if !value.is_finite() {
        return String::new();
    }

    let rendered = format!("{:.*}", decimals as usize, value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (rendered.as_str(), None),
    };

    let mut out = String::with_capacity(rendered.len() + rendered.len() / 3 + 1);
    if value < 0.0 && rendered.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    let digits = int_part.len();
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (digits - idx) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    if let Some(frac_part) = frac_part {
        out.push(DECIMAL_SEPARATOR);
        out.push_str(frac_part);
    }
    out
}

fn round_non_negative(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    if rounded > 0.0 { rounded } else { 0.0 }
}

/// Normalizes a money input while the user types.
///
/// Valid input is clamped at zero, rounded and re-rendered. Invalid input is
/// echoed back untouched so keystrokes are never lost.
pub fn normalize_input(raw: &str, decimals: u32) -> MoneyInput {
    match parse_currency(raw) {
        Some(parsed) => {
            let normalized = round_non_negative(parsed, decimals);
            MoneyInput {
                numeric_value: Some(normalized),
                display_value: format(normalized, decimals),
            }
        }
        None => MoneyInput {
            numeric_value: None,
            display_value: raw.to_string(),
        },
    }
}

/// Parses a price filter into whole currency units.
pub fn parse_price(text: &str) -> Option<u64> {
    let parsed = parse_currency(text)?;
    let normalized = round_non_negative(parsed, PRICE_DECIMALS);
    // `as` saturates for amounts beyond u64 range.
    normalized.is_finite().then_some(normalized as u64)
}

/// Re-renders a price field the way the filter form shows it.
pub fn normalize_price_input(raw: &str) -> String {
    normalize_input(raw, PRICE_DECIMALS).display_value
}
