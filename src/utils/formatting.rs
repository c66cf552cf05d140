//! Formatting utilities used for CLI outputs.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Human-readable day count, e.g. "1 day" / "14 days".
pub fn days_readable(days: i64) -> String {
    if days == 1 || days == -1 {
        format!("{} day", days)
    } else {
        format!("{} days", days)
    }
}

/// Returns a label and an ANSI color for a flow intensity code.
/// Used in list output and tests.
pub fn describe_flow(code: &str) -> (String, &'static str) {
    match code.to_uppercase().as_str() {
        "L" => ("light".into(), "\x1b[36m"),
        "M" => ("medium".into(), "\x1b[33m"),
        "H" => ("heavy".into(), "\x1b[31m"),
        other => (other.to_string(), "\x1b[0m"),
    }
}
