//! Operand parsing, result rounding and result stringification.

use lazy_static::lazy_static;
use regex::Regex;

/// Results are rounded to 10 decimal places.
const SCALE: f64 = 1e10;

/// 2^52: from here on every f64 is an integer, so a scaled value has no
/// fractional part left to round.
const MAX_FRACTIONAL_SCALED: f64 = 4_503_599_627_370_496.0;

lazy_static! {
    /// Longest numeric prefix of an operand string: optional sign, then
    /// `Infinity` or a decimal with an optional exponent.
    static ref NUMERIC_PREFIX: Regex = Regex::new(
        r"^\s*([+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?))"
    ).unwrap();
}

/// Parse an operand leniently.
///
/// Only the leading numeric part is read (`"12abc"` is 12, `"1."` is 1).
/// Returns `None` for empty or non-numeric input such as `"Error"`.
pub fn parse_operand(operand: &str) -> Option<f64> {
    let prefix = NUMERIC_PREFIX.captures(operand)?.get(1)?.as_str();
    prefix.parse::<f64>().ok()
}

/// Round a result to 10 decimal places.
///
/// A machine-epsilon nudge is added before scaling, and ties round towards
/// positive infinity. Negative zero comes back as zero; non-finite values
/// are returned untouched.
pub fn round_result(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let scaled = (value + f64::EPSILON) * SCALE;
    if !scaled.is_finite() || scaled.abs() >= MAX_FRACTIONAL_SCALED {
        return value;
    }

    // `scaled - floor` is exact; `scaled + 0.5` is not once ulp reaches 0.5.
    let floor = scaled.floor();
    let whole = if scaled - floor >= 0.5 { floor + 1.0 } else { floor };
    let rounded = whole / SCALE;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Format a result as an operand string.
///
/// Shortest round-trip decimal, switching to exponent notation (`1e+21`,
/// `1e-7`) outside `[1e-6, 1e21)`. Non-finite values become `Infinity`,
/// `-Infinity` or `NaN`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let formatted = format!("{:e}", value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{}e+{}", mantissa, exponent)
            }
            _ => formatted,
        };
    }

    format!("{}", value)
}
