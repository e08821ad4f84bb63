use crate::fmt;

use super::{Failure, FailureKind, ToFailureKind};

/// `Invalid` contains no details about what happened, other than the
/// [`FailureKind`].
///
/// This is the most performant and simplistic catch-all error. It borrows
/// nothing from the input, so it is `'static` and can be boxed or handed to
/// error reporting crates.
///
/// # Example
///
/// ```
/// use fastnumbers::{Invalid, Kind, Options};
///
/// let error = fastnumbers::convert::<_, Invalid>("12abc", Kind::Int, &Options::new())
///     .unwrap_err();
///
/// assert_eq!(error.to_string(), "invalid input: invalid int");
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[must_use = "error must be handled"]
pub struct Invalid {
    kind: FailureKind,
}

impl Invalid {
    pub(crate) const fn new(kind: FailureKind) -> Self {
        Self { kind }
    }
}

impl fmt::Display for Invalid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid input: ")?;
        f.write_str(self.kind.description())
    }
}

impl ToFailureKind for Invalid {
    fn failure_kind(&self) -> FailureKind {
        self.kind
    }
}

impl<'i> From<Failure<'i>> for Invalid {
    #[inline(always)]
    fn from(failure: Failure<'i>) -> Self {
        Self::new(failure.kind())
    }
}

impl From<FailureKind> for Invalid {
    fn from(kind: FailureKind) -> Self {
        Self::new(kind)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Invalid {}
