use crate::fmt;

/// Every `f64` at or beyond this magnitude is integral.
const EXACT_INT_BOUND: f64 = 4_503_599_627_370_496.0; // 2^52

/// `i64::MIN` as a float (exact).
const I64_START: f64 = -9_223_372_036_854_775_808.0;
/// `i64::MAX + 1` as a float (exact).
const I64_END: f64 = 9_223_372_036_854_775_808.0;

/// The numeric kind requested from [`convert()`] or asked of [`classify()`].
///
/// [`convert()`]: crate::convert()
/// [`classify()`]: crate::classify()
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Kind {
    /// An integer, parsed with the integer grammar only.
    Int,
    /// A float. Integer literals are valid floats.
    Float,
    /// An integer if the input is a clean integer, otherwise a float.
    Real,
    /// An integer, or a float with an integral value that fits an integer.
    ///
    /// Always produces [`Number::Int`].
    IntLike,
}

impl Kind {
    /// Returns `true` if a successful conversion always yields an integer.
    pub const fn yields_int(self) -> bool {
        matches!(self, Self::Int | Self::IntLike)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Real => "real",
            Self::IntLike => "intlike",
        })
    }
}

/// A canonical numeric result.
///
/// The variant is the kind of the result: a `Number` is never both.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Number {
    /// A native integer.
    Int(i64),
    /// A native float.
    Float(f64),
}

impl Number {
    /// Returns `true` if the number is an integer.
    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    /// Returns `true` if the number is a float.
    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    /// Returns the integer value, if the number is an integer.
    pub const fn as_int(&self) -> Option<i64> {
        match *self {
            Self::Int(v) => Some(v),
            Self::Float(_) => None,
        }
    }

    /// Returns the float value, if the number is a float.
    pub const fn as_float(&self) -> Option<f64> {
        match *self {
            Self::Int(_) => None,
            Self::Float(v) => Some(v),
        }
    }

    /// Returns the value as a float, widening integers.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    /// Returns `true` if both numbers are the same kind with bit-identical
    /// values.
    ///
    /// Unlike `==`, two NaNs with the same bits are identical.
    pub fn is_identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::Int(0)
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => fmt::Display::fmt(v, f),
            Self::Float(v) => write_float(*v, f),
        }
    }
}

/// Writes a float the way a numeric literal reads: `nan`, `inf`, `-inf`, or a
/// value that always carries a fraction or exponent.
pub(crate) fn write_float<W>(value: f64, w: &mut W) -> fmt::Result
where
    W: fmt::Write + ?Sized,
{
    if value.is_nan() {
        w.write_str("nan")
    } else if value.is_infinite() {
        w.write_str(if value.is_sign_negative() { "-inf" } else { "inf" })
    } else {
        write!(w, "{:?}", value)
    }
}

/// Returns `true` if the float is finite with a zero fractional part.
///
/// # Example
///
/// ```
/// assert!(fastnumbers::is_intlike(3.0));
/// assert!(fastnumbers::is_intlike(-0.0));
/// assert!(fastnumbers::is_intlike(1e300));
/// assert!(!fastnumbers::is_intlike(3.5));
/// assert!(!fastnumbers::is_intlike(f64::NAN));
/// assert!(!fastnumbers::is_intlike(f64::INFINITY));
/// ```
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::float_cmp)]
pub fn is_intlike(value: f64) -> bool {
    if !value.is_finite() {
        return false;
    }
    if value >= EXACT_INT_BOUND || value <= -EXACT_INT_BOUND {
        return true;
    }
    // In range of `i64` here, so the cast is exact for integral values.
    (value as i64) as f64 == value
}

/// Narrows a float to an integer without truncation.
///
/// Returns `None` unless the float [is intlike](is_intlike) and within the
/// range of `i64`.
///
/// # Example
///
/// ```
/// assert_eq!(fastnumbers::float_to_int(3.0), Some(3));
/// assert_eq!(fastnumbers::float_to_int(-9.223372036854775808e18), Some(i64::MIN));
/// assert_eq!(fastnumbers::float_to_int(9.223372036854775808e18), None);
/// assert_eq!(fastnumbers::float_to_int(3.5), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
pub fn float_to_int(value: f64) -> Option<i64> {
    if is_intlike(value) && value >= I64_START && value < I64_END {
        Some(value as i64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_intlike_small_values() {
        assert!(is_intlike(0.0));
        assert!(is_intlike(-7.0));
        assert!(!is_intlike(0.5));
        assert!(!is_intlike(-7.25));
        assert!(!is_intlike(f64::MIN_POSITIVE));
    }

    #[test]
    fn test_is_intlike_around_exact_bound() {
        assert!(is_intlike(EXACT_INT_BOUND));
        assert!(is_intlike(EXACT_INT_BOUND - 1.0));
        assert!(!is_intlike(EXACT_INT_BOUND - 0.5));
        assert!(is_intlike(f64::MAX));
        assert!(is_intlike(f64::MIN));
    }

    #[test]
    fn test_float_to_int_range() {
        assert_eq!(float_to_int(I64_START), Some(i64::MIN));
        assert_eq!(float_to_int(I64_END), None);
        assert_eq!(float_to_int(-I64_END * 2.0), None);
        assert_eq!(float_to_int(f64::NEG_INFINITY), None);
        assert_eq!(float_to_int(-0.0), Some(0));
    }

    #[test]
    fn test_number_is_identical() {
        assert!(Number::Float(f64::NAN).is_identical(&Number::Float(f64::NAN)));
        assert!(!Number::Float(0.0).is_identical(&Number::Float(-0.0)));
        assert!(!Number::Int(1).is_identical(&Number::Float(1.0)));
    }

    #[test]
    fn test_number_display() {
        use alloc::string::ToString;

        assert_eq!(Number::Int(-3).to_string(), "-3");
        assert_eq!(Number::Float(3.0).to_string(), "3.0");
        assert_eq!(Number::Float(f64::NAN).to_string(), "nan");
        assert_eq!(Number::Float(f64::NEG_INFINITY).to_string(), "-inf");
    }
}
