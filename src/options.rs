use crate::number::Number;

/// What to do when input is invalid for the requested kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OnInvalid {
    /// Return the failure as an error.
    Raise,
    /// Return the configured default value instead.
    ReturnDefault,
}

impl Default for OnInvalid {
    fn default() -> Self {
        Self::Raise
    }
}

/// Immutable configuration for a single classification or conversion.
///
/// `Options` is `Copy` and is only ever read by this crate, so one value may
/// be shared freely across threads and calls.
///
/// | Field                    | Default
/// | ------------------------ | -------
/// | `on_invalid`             | [`OnInvalid::Raise`]
/// | `default_value`          | `Number::Int(0)`
/// | `allow_underscores`      | `false`
/// | `coerce_integral_floats` | `false`
/// | `allow_nan`              | `true`
/// | `allow_infinity`         | `true`
/// | `explicit_base`          | `None` (base 10)
///
/// # Example
///
/// ```
/// use fastnumbers::{Kind, Number, OnInvalid, Options};
///
/// const STRICT: Options = Options::new()
///     .with_nan(false)
///     .with_infinity(false);
///
/// assert!(!fastnumbers::classify("inf", Kind::Float, &STRICT));
/// assert!(fastnumbers::classify("inf", Kind::Float, &Options::new()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Options {
    on_invalid: OnInvalid,
    default_value: Number,
    allow_underscores: bool,
    coerce_integral_floats: bool,
    allow_nan: bool,
    allow_infinity: bool,
    explicit_base: Option<u32>,
}

impl Options {
    /// Create the default `Options`.
    pub const fn new() -> Self {
        Self {
            on_invalid: OnInvalid::Raise,
            default_value: Number::Int(0),
            allow_underscores: false,
            coerce_integral_floats: false,
            allow_nan: true,
            allow_infinity: true,
            explicit_base: None,
        }
    }

    /// Returns `Options` that substitute `value` for invalid input.
    ///
    /// Shorthand for setting both `on_invalid` and `default_value`.
    pub const fn returning(value: Number) -> Self {
        Self::new()
            .with_on_invalid(OnInvalid::ReturnDefault)
            .with_default_value(value)
    }

    /// Set what happens on invalid input.
    #[must_use]
    pub const fn with_on_invalid(mut self, value: OnInvalid) -> Self {
        self.on_invalid = value;
        self
    }

    /// Set the value returned on invalid input when
    /// [`OnInvalid::ReturnDefault`] is selected.
    #[must_use]
    pub const fn with_default_value(mut self, value: Number) -> Self {
        self.default_value = value;
        self
    }

    /// Set whether `_` digit separators are accepted within numeric text.
    #[must_use]
    pub const fn with_underscores(mut self, value: bool) -> Self {
        self.allow_underscores = value;
        self
    }

    /// Set whether integral floats become integers for [`Kind::Real`].
    ///
    /// [`Kind::Real`]: crate::Kind::Real
    #[must_use]
    pub const fn with_coerce_integral_floats(mut self, value: bool) -> Self {
        self.coerce_integral_floats = value;
        self
    }

    /// Set whether `nan` is accepted when parsing text.
    #[must_use]
    pub const fn with_nan(mut self, value: bool) -> Self {
        self.allow_nan = value;
        self
    }

    /// Set whether `inf` and `infinity` are accepted when parsing text.
    #[must_use]
    pub const fn with_infinity(mut self, value: bool) -> Self {
        self.allow_infinity = value;
        self
    }

    /// Set the base used to parse integer text.
    ///
    /// `0` detects the base from a `0x`, `0o` or `0b` prefix. Legal bases are
    /// `0` and `2..=36`; anything else fails as an illegal base when used.
    #[must_use]
    pub const fn with_base(mut self, base: u32) -> Self {
        self.explicit_base = Some(base);
        self
    }

    /// Clear any explicit base, parsing integer text in base 10.
    #[must_use]
    pub const fn without_base(mut self) -> Self {
        self.explicit_base = None;
        self
    }

    /// What happens on invalid input.
    #[inline]
    pub const fn on_invalid(&self) -> OnInvalid {
        self.on_invalid
    }

    /// Returns `true` if invalid input is returned as an error.
    #[inline]
    pub const fn should_raise(&self) -> bool {
        matches!(self.on_invalid, OnInvalid::Raise)
    }

    /// The value substituted for invalid input.
    #[inline]
    pub const fn default_value(&self) -> Number {
        self.default_value
    }

    /// Whether `_` digit separators are accepted.
    #[inline]
    pub const fn allow_underscores(&self) -> bool {
        self.allow_underscores
    }

    /// Whether integral floats become integers for [`Kind::Real`].
    ///
    /// [`Kind::Real`]: crate::Kind::Real
    #[inline]
    pub const fn coerce_integral_floats(&self) -> bool {
        self.coerce_integral_floats
    }

    /// Whether `nan` is accepted when parsing text.
    #[inline]
    pub const fn allow_nan(&self) -> bool {
        self.allow_nan
    }

    /// Whether `inf` and `infinity` are accepted when parsing text.
    #[inline]
    pub const fn allow_infinity(&self) -> bool {
        self.allow_infinity
    }

    /// The explicit integer base, if any.
    #[inline]
    pub const fn explicit_base(&self) -> Option<u32> {
        self.explicit_base
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns `true` if `base` may be used to parse integer text.
#[inline]
pub(crate) const fn is_legal_base(base: u32) -> bool {
    base == 0 || (base >= 2 && base <= 36)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_default_matches_new() {
        assert_eq!(Options::default(), Options::new());
    }

    #[test]
    fn test_options_builder_is_independent() {
        let options = Options::new().with_default_value(Number::Float(1.5));
        assert_eq!(options.on_invalid(), OnInvalid::Raise);
        assert_eq!(options.default_value(), Number::Float(1.5));

        let options = options.with_on_invalid(OnInvalid::ReturnDefault);
        assert!(!options.should_raise());
        assert_eq!(options.default_value(), Number::Float(1.5));
    }

    #[test]
    fn test_options_returning() {
        let options = Options::returning(Number::Int(7));
        assert_eq!(options.on_invalid(), OnInvalid::ReturnDefault);
        assert_eq!(options.default_value(), Number::Int(7));
    }

    #[test]
    fn test_options_base() {
        assert_eq!(Options::new().explicit_base(), None);
        assert_eq!(Options::new().with_base(16).explicit_base(), Some(16));
        assert_eq!(Options::new().with_base(16).without_base().explicit_base(), None);
    }

    #[test]
    fn test_is_legal_base() {
        assert!(is_legal_base(0));
        assert!(!is_legal_base(1));
        assert!(is_legal_base(2));
        assert!(is_legal_base(36));
        assert!(!is_legal_base(37));
    }
}
