//! Number formatting with browser semantics.
//!
//! `to_fixed` and `to_exponential` reproduce `Number.prototype.toFixed` and
//! `Number.prototype.toExponential`: the rounding decision is taken on the
//! exact decimal expansion of the binary value and halfway cases go away
//! from zero. Rust's own `{:.N}` rounds halfway cases to even, which prints
//! `0.12` for `0.125` where the pages showed `0.13`.

// Enough digits to spell out any finite f64 exactly.
const EXACT_PRECISION: usize = 1100;

pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() || value.abs() >= 1e21 {
        return to_js_string(value);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let exact = format!("{:.*}", EXACT_PRECISION, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(digits))
        .collect();
    let round_up = frac_part.as_bytes().get(digits).is_some_and(|d| *d >= b'5');
    if round_up {
        increment_digits(&mut kept);
    }

    let split = kept.len() - digits;
    let int_digits = String::from_utf8_lossy(&kept[..split]);
    if digits == 0 {
        format!("{}{}", sign, int_digits)
    } else {
        let frac_digits = String::from_utf8_lossy(&kept[split..]);
        format!("{}{}.{}", sign, int_digits, frac_digits)
    }
}

pub fn to_exponential(value: f64, fraction_digits: usize) -> String {
    if !value.is_finite() {
        return to_js_string(value);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    if value == 0.0 {
        return format!("{}e+0", pad_mantissa(b"0", fraction_digits));
    }

    let exact = format!("{:.*e}", EXACT_PRECISION, value.abs());
    let (mantissa, exponent) = exact.split_once('e').unwrap_or((exact.as_str(), "0"));
    let mut exponent: i32 = exponent.parse().unwrap_or(0);
    let significant: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();

    let keep = fraction_digits + 1;
    let mut kept: Vec<u8> = significant.iter().copied().take(keep).collect();
    kept.resize(keep, b'0');
    if significant.get(keep).is_some_and(|d| *d >= b'5') {
        increment_digits(&mut kept);
        if kept.len() > keep {
            kept.truncate(keep);
            exponent += 1;
        }
    }

    let exponent_sign = if exponent < 0 { '-' } else { '+' };
    format!(
        "{}{}e{}{}",
        sign,
        pad_mantissa(&kept, fraction_digits),
        exponent_sign,
        exponent.abs()
    )
}

/// `String(value)` for the numbers the pages print back after a round trip
/// through a fixed-point string.
pub fn to_js_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let shortest = format!("{:e}", value);
        return match shortest.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => shortest,
        };
    }
    format!("{}", value)
}

fn pad_mantissa(digits: &[u8], fraction_digits: usize) -> String {
    let mut out = String::with_capacity(fraction_digits + 2);
    out.push(char::from(digits.first().copied().unwrap_or(b'0')));
    if fraction_digits > 0 {
        out.push('.');
        for i in 1..=fraction_digits {
            out.push(char::from(digits.get(i).copied().unwrap_or(b'0')));
        }
    }
    out
}

/// Adds one unit in the last place of an ASCII digit string, growing it on
/// carry out of the leading digit.
fn increment_digits(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}
