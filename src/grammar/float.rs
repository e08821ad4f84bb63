use alloc::string::String;

use crate::util::fast;

use super::{digits_valid, split_sign};

/// A validated float literal.
#[derive(Debug, Clone, Copy, PartialEq)]
#[allow(variant_size_differences)]
pub(crate) enum FloatLiteral<'a> {
    /// A finite literal (its value may still overflow to infinity).
    Number(&'a str),
    Nan { negative: bool },
    Infinity { negative: bool },
}

impl<'a> FloatLiteral<'a> {
    /// The nearest `f64` to the literal.
    pub(crate) fn value(&self) -> Option<f64> {
        match *self {
            Self::Number(literal) => parse_number(literal),
            Self::Nan { negative } => Some(if negative { -f64::NAN } else { f64::NAN }),
            Self::Infinity { negative } => Some(if negative {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            }),
        }
    }
}

/// Scans a trimmed float literal.
///
/// Accepts an optionally signed decimal mantissa with an optional fraction and
/// exponent, or one of the case-insensitive tokens `nan`, `inf` and
/// `infinity`. Whether those tokens are acceptable is left to the caller.
pub(crate) fn scan_float(literal: &str, separators: bool) -> Option<FloatLiteral<'_>> {
    let (negative, rest) = split_sign(literal.as_bytes());
    if let Some(special) = scan_special(rest, negative) {
        return Some(special);
    }
    let (mantissa, exponent) = match rest.iter().position(|&b| b == b'e' || b == b'E') {
        Some(index) => (&rest[..index], Some(&rest[index + 1..])),
        None => (rest, None),
    };
    let mantissa_valid = match mantissa.iter().position(|&b| b == b'.') {
        Some(index) => {
            let (whole, fraction) = (&mantissa[..index], &mantissa[index + 1..]);
            match (whole.is_empty(), fraction.is_empty()) {
                (true, true) => false,
                (true, false) => digits_valid(fraction, 10, separators, false),
                (false, true) => digits_valid(whole, 10, separators, false),
                (false, false) => {
                    digits_valid(whole, 10, separators, false)
                        && digits_valid(fraction, 10, separators, false)
                }
            }
        }
        None => digits_valid(mantissa, 10, separators, false),
    };
    let exponent_valid = exponent.map_or(true, |exponent| {
        let (_, digits) = split_sign(exponent);
        digits_valid(digits, 10, separators, false)
    });
    if mantissa_valid && exponent_valid {
        Some(FloatLiteral::Number(literal))
    } else {
        None
    }
}

fn scan_special(rest: &[u8], negative: bool) -> Option<FloatLiteral<'static>> {
    if rest.eq_ignore_ascii_case(b"nan") {
        Some(FloatLiteral::Nan { negative })
    } else if rest.eq_ignore_ascii_case(b"inf") || rest.eq_ignore_ascii_case(b"infinity") {
        Some(FloatLiteral::Infinity { negative })
    } else {
        None
    }
}

fn parse_number(literal: &str) -> Option<f64> {
    if fast::has_separator(literal) {
        let stripped: String = literal.chars().filter(|&c| c != '_').collect();
        stripped.parse().ok()
    } else {
        literal.parse().ok()
    }
}
