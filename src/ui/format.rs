//! Operand formatting for the display.

/// Format an operand string for display.
///
/// Plain decimals get their integer digits grouped in threes with `,` when
/// `group_digits` is set, and leading zeros collapsed. The fractional part is
/// kept verbatim, including a trailing `.` while the user is still typing.
/// Anything else (`Error`, `Infinity`, exponent forms) is shown unchanged.
pub fn format_operand(operand: &str, group_digits: bool) -> String {
    let (sign, unsigned) = match operand.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", operand),
    };

    let (int_part, dec_part) = match unsigned.split_once('.') {
        Some((int_part, dec_part)) => (int_part, Some(dec_part)),
        None => (unsigned, None),
    };

    let is_plain = int_part.chars().all(|c| c.is_ascii_digit())
        && dec_part.is_none_or(|d| d.chars().all(|c| c.is_ascii_digit()))
        && !(int_part.is_empty() && dec_part.is_none());
    if !is_plain {
        return operand.to_string();
    }

    let int_display = if int_part.is_empty() {
        String::new()
    } else {
        let trimmed = int_part.trim_start_matches('0');
        let digits = if trimmed.is_empty() { "0" } else { trimmed };
        if group_digits {
            group_thousands(digits)
        } else {
            digits.to_string()
        }
    };

    match dec_part {
        Some(dec_part) => format!("{}{}.{}", sign, int_display, dec_part),
        None => format!("{}{}", sign, int_display),
    }
}

/// Insert `,` between every group of three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}
