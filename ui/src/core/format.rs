//! Formatting helpers for presenting metrics.

/// Integer with thousands separators, e.g. `12,345`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_percent(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "—".into();
    }
    format!("{value:.decimals$}%")
}

pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "—".into();
    }
    format!("{value:.decimals$}")
}

pub fn format_seconds(value: u32) -> String {
    format!("{value}s")
}

/// Percentage of `part` in `whole`, 0 when `whole` is zero.
pub fn ratio_percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Round to one decimal place, as KPI rates are displayed and stored.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
