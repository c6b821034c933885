//! Canonical formatting of numeric tokens.
//!
//! WKT strings are frequently compared byte for byte, so every float is written with exactly 15
//! significant digits (rounded half away from zero on the exact binary value) and then stripped
//! of trailing zeros. Values whose decimal exponent falls outside `-6..15` use exponential
//! notation, e.g. `1.23456789012346e+20`.

/// Number of significant digits written for every float.
const SIGNIFICANT_DIGITS: usize = 15;

/// Enough fractional digits to hold the exact decimal expansion of any `f64`.
const EXACT_DIGITS: usize = 800;

/// Format a float as a WKT numeric token.
pub(crate) fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let (digits, exponent) = significant_digits(value.abs());
    let mut out = String::with_capacity(SIGNIFICANT_DIGITS + 8);
    if value.is_sign_negative() {
        out.push('-');
    }

    if !(-6..SIGNIFICANT_DIGITS as i32).contains(&exponent) {
        out.push_str(&digits[..1]);
        out.push('.');
        out.push_str(&digits[1..]);
        out.push('e');
        out.push(if exponent < 0 { '-' } else { '+' });
        out.push_str(&exponent.unsigned_abs().to_string());
        return out;
    }

    if exponent < 0 {
        out.push_str("0.");
        for _ in 0..(-exponent - 1) {
            out.push('0');
        }
        out.push_str(&digits);
    } else {
        let int_len = exponent as usize + 1;
        out.push_str(&digits[..int_len]);
        if int_len < digits.len() {
            out.push('.');
            out.push_str(&digits[int_len..]);
        }
    }
    strip_trailing_zeros(&mut out);
    out
}

/// Format a number the way it would be printed without any precision requested.
///
/// Used for tokens that are copied rather than canonicalized, like frame epochs. The shortest
/// round-trip digits are written positionally for decimal exponents in `-6..21` and in
/// exponential notation otherwise, e.g. `1e+21` or `1.5e-7`.
pub(crate) fn format_shortest(value: f64) -> String {
    if !value.is_finite() {
        return format_float(value);
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let shortest = format!("{value:e}");
    let (mantissa, exponent) = shortest.split_once('e').unwrap_or((shortest.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if (-6..21).contains(&exponent) {
        return value.to_string();
    }
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{mantissa}e{sign}{}", exponent.unsigned_abs())
}

/// Return the first 15 significant digits of a positive finite `value` and the decimal exponent
/// of the first digit.
fn significant_digits(value: f64) -> (String, i32) {
    // The exact expansion is at most 767 significant digits, so no rounding happens here.
    let exact = format!("{:.*e}", EXACT_DIGITS, value);
    let (mantissa, exponent) = exact.split_once('e').unwrap_or((exact.as_str(), "0"));
    let mut exponent: i32 = exponent.parse().unwrap_or(0);

    let mut digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .take(SIGNIFICANT_DIGITS + 1)
        .collect();
    let round_up = digits.get(SIGNIFICANT_DIGITS).is_some_and(|d| *d >= b'5');
    digits.truncate(SIGNIFICANT_DIGITS);

    if round_up {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
            digits.truncate(SIGNIFICANT_DIGITS);
            exponent += 1;
        }
    }

    let digits = digits.into_iter().map(char::from).collect();
    (digits, exponent)
}

/// Drop zeros after the decimal point, and the point itself when nothing remains after it.
fn strip_trailing_zeros(token: &mut String) {
    if !token.contains('.') {
        return;
    }
    let trimmed = token.trim_end_matches('0').len();
    token.truncate(trimmed);
    if token.ends_with('.') {
        token.pop();
    }
}
