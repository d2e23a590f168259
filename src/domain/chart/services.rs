use serde::Serialize;

/// Tooltip rule attached to a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TooltipFormat {
    /// `"{label}: ${value} ({share}%)"`
    AllocationShare,
    /// `"Value: ${value}"`
    CurrencyValue,
    /// `"Return: {value}%"`
    PercentReturn,
}

/// Y-axis tick rule attached to a chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TickFormat {
    /// Chart has no value axis (pie)
    None,
    Currency,
    Percent,
}

/// `Math.round`: halves go towards positive infinity
pub fn js_round(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Number to string the way a browser prints it
pub fn js_number_to_string(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// `-0.0` prints as `-0.00`; browsers print `0.00`
fn positive_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// Largest magnitude `toFixed` prints in positional notation
const TO_FIXED_LIMIT: f64 = 1e21;

/// `Number.prototype.toFixed`: exact-value rounding with ties away from zero.
/// `{:.N}` agrees except on exact binary ties, which it rounds to even.
pub fn js_to_fixed(value: f64, digits: usize) -> String {
    let value = positive_zero(value);
    if !value.is_finite() || value.abs() >= TO_FIXED_LIMIT {
        return js_number_to_string(value);
    }

    // A tie at `digits` places is exactly an odd multiple of 2^-(digits+1)
    let halves = value.abs() * 2f64.powi(digits as i32 + 1);
    let scaled = value.abs() * 10f64.powi(digits as i32);
    let is_tie = halves.fract() == 0.0 && halves % 2.0 == 1.0 && scaled < 2f64.powi(52);
    if !is_tie {
        return format!("{:.*}", digits, value);
    }

    let rounded = (scaled + 0.5).floor() as u64;
    let mut text = format!("{:0width$}", rounded, width = digits + 1);
    if digits > 0 {
        text.insert(text.len() - digits, '.');
    }
    if value < 0.0 {
        text.insert(0, '-');
    }
    text
}

/// `"$12.30"`
pub fn format_currency(value: f64) -> String {
    format!("${}", js_to_fixed(value, 2))
}

/// Integer share of `total`, 0 when the total is zero or not finite
pub fn share_percentage(value: f64, total: f64) -> i64 {
    if total == 0.0 || !total.is_finite() {
        return 0;
    }
    let share = js_round((value / total) * 100.0);
    if share.is_finite() { share as i64 } else { 0 }
}

/// Stateless formatting rules for chart tooltips and ticks
pub struct ChartFormattingService;

impl ChartFormattingService {
    pub fn allocation_tooltip(label: &str, value: f64, total: f64) -> String {
        format!(
            "{}: {} ({}%)",
            label,
            format_currency(value),
            share_percentage(value, total)
        )
    }

    pub fn performance_tooltip(value: f64) -> String {
        format!("Value: {}", format_currency(value))
    }

    pub fn returns_tooltip(value: f64) -> String {
        format!("Return: {}%", js_to_fixed(value, 2))
    }

    pub fn tick_label(format: TickFormat, value: f64) -> Option<String> {
        match format {
            TickFormat::None => None,
            TickFormat::Currency => Some(format_currency(value)),
            TickFormat::Percent => Some(format!("{}%", js_number_to_string(value))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn js_round_halves_go_up() {
        assert_eq!(js_round(2.5), 3.0);
        assert_eq!(js_round(-2.5), -2.0);
        assert_eq!(js_round(33.333), 33.0);
    }

    #[test]
    fn to_fixed_rounds_exact_ties_away_from_zero() {
        assert_eq!(js_to_fixed(0.125, 2), "0.13");
        assert_eq!(js_to_fixed(-0.125, 2), "-0.13");
        assert_eq!(js_to_fixed(1.125, 2), "1.13");
        assert_eq!(js_to_fixed(2.5, 0), "3");
        assert_eq!(js_to_fixed(0.5, 0), "1");
    }

    #[test]
    fn to_fixed_keeps_exact_rounding_off_ties() {
        // 1.005 is stored just below the midpoint
        assert_eq!(js_to_fixed(1.005, 2), "1.00");
        assert_eq!(js_to_fixed(12.3, 2), "12.30");
        assert_eq!(js_to_fixed(-0.0, 2), "0.00");
        assert_eq!(js_to_fixed(-0.001, 2), "-0.00");
        assert_eq!(js_to_fixed(f64::NAN, 2), "NaN");
        assert_eq!(js_to_fixed(f64::NEG_INFINITY, 2), "-Infinity");
    }

    #[test]
    fn zero_total_share_is_zero() {
        assert_eq!(share_percentage(0.0, 0.0), 0);
        assert_eq!(ChartFormattingService::allocation_tooltip("AAPL", 0.0, 0.0), "AAPL: $0.00 (0%)");
    }

    #[test]
    fn percent_ticks_print_like_js() {
        assert_eq!(ChartFormattingService::tick_label(TickFormat::Percent, 5.0).as_deref(), Some("5%"));
        assert_eq!(ChartFormattingService::tick_label(TickFormat::Percent, -2.5).as_deref(), Some("-2.5%"));
        assert_eq!(ChartFormattingService::tick_label(TickFormat::Percent, -0.0).as_deref(), Some("0%"));
        assert_eq!(ChartFormattingService::tick_label(TickFormat::None, 1.0), None);
    }
}
