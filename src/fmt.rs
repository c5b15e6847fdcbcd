//! Shared formatting utilities for console output

use console::Emoji;

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Sparkles emoji for completion/success
pub const SPARKLES: Emoji = Emoji("✨", "*");

/// Info emoji for informational messages
pub const INFO: Emoji = Emoji("ℹ️", "i");

/// Chart emoji for metrics/statistics
pub const CHART: Emoji = Emoji("📊", "~");

/// Bulb emoji for recommendations
pub const BULB: Emoji = Emoji("💡", "*");

/// Fork and knife emoji for food suggestions
pub const FOOD: Emoji = Emoji("🍽️", "-");

/// Trend emoji for progress over time
pub const TREND: Emoji = Emoji("📈", "~");

/// Target emoji for goals
pub const TARGET: Emoji = Emoji("🎯", ">");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️", "!");

/// Fixed-width text progress bar
///
/// # Examples
///
/// ```
/// use relevel::fmt::progress_bar;
///
/// assert_eq!(progress_bar(50, 10), "[#####-----]");
/// assert_eq!(progress_bar(100, 4), "[####]");
/// ```
pub fn progress_bar(percent: u8, width: usize) -> String {
    let filled = (usize::from(percent.min(100)) * width + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Format a measurement without trailing zeros
///
/// # Examples
///
/// ```
/// use relevel::fmt::format_value;
///
/// assert_eq!(format_value(200.0), "200");
/// assert_eq!(format_value(1.75), "1.75");
/// ```
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let text = format!("{:.2}", value);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar_various_values() {
        assert_eq!(progress_bar(0, 10), "[----------]");
        assert_eq!(progress_bar(75, 4), "[###-]");
        assert_eq!(progress_bar(67, 10), "[#######---]");
        assert_eq!(progress_bar(255, 5), "[#####]");
    }

    #[test]
    fn test_format_value_various_values() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(30.0), "30");
        assert_eq!(format_value(8.5), "8.5");
        assert_eq!(format_value(1.234), "1.23");
    }
}
