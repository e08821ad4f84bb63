use crate::fmt;
use crate::input::Input;
use crate::number::Kind;

use super::{FailureKind, Invalid, ToFailureKind};

const NON_TEXT_WITH_BASE: &str =
    "conversion from non-text input with an explicit base is not allowed";
const BASE_OUT_OF_RANGE: &str = "int() base must be >= 2 and <= 36, or 0";
const BASE_WITH_NON_INT: &str = "an explicit base is only allowed for integer conversion";

/// A failed conversion with all the details around what went wrong.
///
/// The message follows the wording of the standard `int()` and `float()`
/// parse errors and quotes the original input, truncated to 200 characters.
///
/// # Example
///
/// ```
/// use fastnumbers::{Failure, FailureKind, Kind, Options, ToFailureKind};
///
/// let error = fastnumbers::convert::<_, Failure>(" 1.5x ", Kind::Float, &Options::new())
///     .unwrap_err();
///
/// assert_eq!(error.failure_kind(), FailureKind::InvalidFloat);
/// assert_eq!(error.input(), fastnumbers::input(" 1.5x "));
/// assert_eq!(error.to_string(), "could not convert string to float: ' 1.5x '");
/// ```
#[derive(Clone, Copy, PartialEq)]
#[must_use = "error must be handled"]
pub struct Failure<'i> {
    kind: FailureKind,
    input: Input<'i>,
    target: Kind,
    base: Option<u32>,
}

impl<'i> Failure<'i> {
    pub(crate) fn new(kind: FailureKind, input: Input<'i>, target: Kind, base: Option<u32>) -> Self {
        Self {
            kind,
            input,
            target,
            base,
        }
    }

    /// The kind of failure.
    #[inline(always)]
    #[must_use]
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// The original input, untrimmed.
    #[inline(always)]
    #[must_use]
    pub fn input(&self) -> Input<'i> {
        self.input
    }

    /// The kind that was requested.
    #[inline(always)]
    #[must_use]
    pub fn target(&self) -> Kind {
        self.target
    }

    /// The explicit base in effect, if any.
    #[inline(always)]
    #[must_use]
    pub fn base(&self) -> Option<u32> {
        self.base
    }

    /// Drops the details, keeping only the kind.
    pub fn to_invalid(&self) -> Invalid {
        Invalid::new(self.kind)
    }
}

impl<'i> ToFailureKind for Failure<'i> {
    fn failure_kind(&self) -> FailureKind {
        self.kind
    }
}

impl<'i> fmt::Debug for Failure<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Failure")
            .field("kind", &self.kind)
            .field("input", &self.input)
            .field("target", &self.target)
            .field("base", &self.base)
            .finish()
    }
}

impl<'i> fmt::Display for Failure<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FailureKind::InvalidInt => match self.input {
                Input::Float(value) => {
                    f.write_str("cannot convert float ")?;
                    if value.is_nan() {
                        f.write_str("NaN")?;
                    } else if value.is_infinite() {
                        f.write_str("infinity")?;
                    } else {
                        fmt::Display::fmt(&self.input.display(), f)?;
                    }
                    f.write_str(" to integer")
                }
                Input::Text(_) | Input::Int(_) => {
                    write!(
                        f,
                        "invalid literal for int() with base {}: ",
                        self.base.unwrap_or(10)
                    )?;
                    fmt::Display::fmt(&self.input.display(), f)
                }
            },
            FailureKind::InvalidFloat => {
                f.write_str("could not convert string to float: ")?;
                fmt::Display::fmt(&self.input.display(), f)
            }
            FailureKind::IllegalBase => f.write_str(match (self.input, self.target) {
                (Input::Int(_) | Input::Float(_), _) => NON_TEXT_WITH_BASE,
                (Input::Text(_), Kind::Int) => BASE_OUT_OF_RANGE,
                (Input::Text(_), _) => BASE_WITH_NON_INT,
            }),
        }
    }
}

#[cfg(feature = "std")]
impl<'i> std::error::Error for Failure<'i> {}
