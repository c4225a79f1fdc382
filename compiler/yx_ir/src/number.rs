//! General number formatting.
//!
//! `%g` style with six significant digits:
//! - fixed notation when the decimal exponent is in `[-4, 6)`
//! - scientific notation otherwise, with a signed exponent of at least
//!   two digits (`1e+20`, `1.5e-07`)
//! - trailing fractional zeros and a dangling `.` removed

/// Digits after the point in the normalized mantissa (six significant).
const MANTISSA_DIGITS: usize = 5;

/// First decimal exponent that switches to scientific notation.
const MAX_FIXED_EXPONENT: i32 = 6;

/// Smallest decimal exponent still printed in fixed notation.
const MIN_FIXED_EXPONENT: i32 = -4;

/// Format `value` the way the `display` builtin writes it.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_owned();
    }

    // Rounding to six significant digits first fixes the exponent, so
    // 999999.5 is classified as 1e+06 rather than 999999.
    let scientific = format!("{:.*e}", MANTISSA_DIGITS, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if (MIN_FIXED_EXPONENT..MAX_FIXED_EXPONENT).contains(&exponent) {
        let precision = usize::try_from(MAX_FIXED_EXPONENT - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.precision$}")).to_owned()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}
