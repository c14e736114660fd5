//! Number parsing and display formatting.
//!
//! Display values carry at most [`SIGNIFICANT_DIGITS`] significant digits.
//! Magnitudes that cannot be shown that way in plain decimal notation fall
//! back to scientific notation (`1.5e15`), which still parses back.

use super::error::MathError;

/// Significant digits kept when formatting a result.
pub const SIGNIFICANT_DIGITS: usize = 12;

/// Smallest decimal exponent still rendered in plain notation.
const MIN_PLAIN_EXPONENT: i32 = -11;

/// Parse a display value. Returns `None` for the error sentinel, partial
/// input such as `"-"`, and non-finite values.
pub fn parse(text: &str) -> Option<f64> {
    let value: f64 = text.parse().ok()?;
    value.is_finite().then_some(value)
}

/// Format a number for the display.
///
/// Trailing zeros after the decimal point are trimmed and integers render
/// without a point. Non-finite values cannot be displayed and report
/// [`MathError::Overflow`].
pub fn format_number(value: f64) -> Result<String, MathError> {
    if !value.is_finite() {
        return Err(MathError::Overflow);
    }
    if value == 0.0 {
        return Ok("0".to_string());
    }

    // The exponent after rounding to the digit budget, so 999999999999.7
    // is treated as 1e12
    let scientific = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return Err(MathError::Overflow);
    };
    let exponent: i32 = exponent.parse().map_err(|_| MathError::Overflow)?;
    if exponent >= SIGNIFICANT_DIGITS as i32 || exponent < MIN_PLAIN_EXPONENT {
        return Ok(format!("{}e{}", trim_fraction(mantissa), exponent));
    }

    let decimals = (SIGNIFICANT_DIGITS as i32 - 1 - exponent).max(0) as usize;
    let formatted = format!("{:.*}", decimals, value);
    let trimmed = trim_fraction(&formatted);

    // Rounding can leave a bare negative zero behind
    if trimmed == "-0" {
        Ok("0".to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Insert thousand separators into the integer part of a display value.
///
/// Anything after the integer part (fraction, exponent) is kept as is, and
/// values without a leading integer part (the error sentinel) are returned
/// unchanged.
pub fn group_thousands(text: &str) -> String {
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text),
    };

    let split = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let (int_part, rest) = unsigned.split_at(split);
    if int_part.is_empty() {
        return text.to_string();
    }

    let mut reversed = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            reversed.push(',');
        }
        reversed.push(c);
    }
    let grouped: String = reversed.chars().rev().collect();

    format!("{}{}{}", sign, grouped, rest)
}
