use super::{digits_valid, split_sign};

/// A validated integer literal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct IntLiteral<'a> {
    negative: bool,
    radix: u32,
    /// Digits without sign or prefix, possibly with separators.
    digits: &'a [u8],
}

impl<'a> IntLiteral<'a> {
    /// The value of the literal, or `None` if it does not fit an `i64`.
    pub(crate) fn value(&self) -> Option<i64> {
        let radix = u64::from(self.radix);
        let mut magnitude: u64 = 0;
        for &b in self.digits {
            if let Some(digit) = char::from(b).to_digit(self.radix) {
                magnitude = magnitude
                    .checked_mul(radix)?
                    .checked_add(u64::from(digit))?;
            }
        }
        if self.negative {
            if magnitude == i64::MIN.unsigned_abs() {
                Some(i64::MIN)
            } else {
                i64::try_from(magnitude).ok().map(|v| -v)
            }
        } else {
            i64::try_from(magnitude).ok()
        }
    }
}

/// Scans a trimmed integer literal.
///
/// `base` must be `0` or within `2..=36`. Base `0` detects the radix from a
/// `0x`, `0o` or `0b` prefix and otherwise reads a decimal literal that may
/// not have leading zeros unless it is zero. Bases 2, 8 and 16 accept their
/// matching prefix. A single separator may follow a prefix.
pub(crate) fn scan_int(literal: &str, base: u32, separators: bool) -> Option<IntLiteral<'_>> {
    let (negative, rest) = split_sign(literal.as_bytes());
    let (radix, digits, prefixed) = match (base, split_prefix(rest)) {
        (0, Some((radix, digits))) => (radix, digits, true),
        (0, None) => {
            if !decimal_zeros_valid(rest) {
                return None;
            }
            (10, rest, false)
        }
        (base, Some((radix, digits))) if base == radix => (radix, digits, true),
        (base, _) => (base, rest, false),
    };
    if digits_valid(digits, radix, separators, prefixed) {
        Some(IntLiteral {
            negative,
            radix,
            digits,
        })
    } else {
        None
    }
}

fn split_prefix(literal: &[u8]) -> Option<(u32, &[u8])> {
    match literal {
        [b'0', b'x' | b'X', rest @ ..] => Some((16, rest)),
        [b'0', b'o' | b'O', rest @ ..] => Some((8, rest)),
        [b'0', b'b' | b'B', rest @ ..] => Some((2, rest)),
        _ => None,
    }
}

/// A base `0` decimal literal with a leading zero must be all zeros.
fn decimal_zeros_valid(digits: &[u8]) -> bool {
    match digits.first() {
        Some(b'0') => digits.iter().all(|&b| b == b'0' || b == b'_'),
        _ => true,
    }
}
