//! Format - Formatting Utilities

use chrono::{DateTime, Local};

/// Format a unit price for table display (two decimal places)
pub fn format_price(price: f64) -> String {
    format!("{:.2}", price)
}

/// Format a local datetime for the notice panel
pub fn format_time(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S").to_string()
}

/// Truncate a string to at most `max_len` characters with ellipsis.
/// Counts characters, not bytes, so the cut never splits a code point.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let mut out: String = s.chars().take(max_len - 3).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1.12), "1.12");
        assert_eq!(format_price(3.2), "3.20");
        assert_eq!(format_price(0.0), "0.00");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer product name", 10), "a longe...");
    }

    #[test]
    fn test_truncate_multibyte_never_splits_chars() {
        let memo = "é".repeat(150);
        assert_eq!(truncate(&memo, 200), memo);

        let long_memo = format!("Order shipped: {}", "é".repeat(300));
        let cut = truncate(&long_memo, 200);
        assert_eq!(cut.chars().count(), 200);
        assert!(cut.ends_with("..."));

        assert_eq!(truncate("日本語のメモ", 3), "日本語");
    }
}
