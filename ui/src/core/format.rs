//! Formatting helpers for tooltip and label text.

pub fn format_members(value: Option<u64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "—".to_string(),
    }
}

pub fn format_score(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.2}"),
        _ => "—".to_string(),
    }
}

pub fn format_text(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "—".to_string(),
    }
}

pub fn format_year(value: Option<i32>) -> String {
    value.map(|y| y.to_string()).unwrap_or_else(|| "—".to_string())
}

/// Compact number for SVG attributes.
pub fn svg_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    }
}
