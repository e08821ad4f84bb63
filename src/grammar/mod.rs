//! Pure validators for numeric literals.
//!
//! Validation and materialisation are split so classification can answer
//! without producing a value.

mod float;
mod int;

pub(crate) use self::float::{scan_float, FloatLiteral};
pub(crate) use self::int::scan_int;

/// Whitespace stripped from both ends of numeric text.
#[inline(always)]
pub(crate) const fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c')
}

/// Trims leading and trailing whitespace.
pub(crate) fn trim(text: &str) -> &str {
    text.trim_matches(|c: char| u8::try_from(c).map_or(false, is_space))
}

/// Splits an optional leading sign, returning `true` if negative.
#[inline]
pub(crate) fn split_sign(literal: &[u8]) -> (bool, &[u8]) {
    match literal.split_first() {
        Some((b'-', rest)) => (true, rest),
        Some((b'+', rest)) => (false, rest),
        _ => (false, literal),
    }
}

/// Validates a run of digits in `radix`, optionally separated by single `_`.
///
/// A separator may lead only if `leading_separator` is set, and may never
/// trail. At least one digit is required.
pub(crate) fn digits_valid(
    digits: &[u8],
    radix: u32,
    separators: bool,
    leading_separator: bool,
) -> bool {
    let mut seen_digit = false;
    let mut last_separator = false;
    for &b in digits {
        if b == b'_' {
            if !separators || last_separator || !(seen_digit || leading_separator) {
                return false;
            }
            last_separator = true;
        } else if char::from(b).is_digit(radix) {
            seen_digit = true;
            last_separator = false;
        } else {
            return false;
        }
    }
    seen_digit && !last_separator
}
