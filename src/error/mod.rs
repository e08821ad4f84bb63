//! Error support.
//!
//! Conversions are generic over the error they return, bound by [`Error`]. Two
//! errors ship with the crate:
//!
//! - [`Failure`] carries everything about what went wrong, including the
//!   offending input, and formats the familiar `int()`/`float()` diagnostics.
//! - [`Invalid`] carries only the [`FailureKind`]. It borrows nothing, so it
//!   converts into boxed and dynamic errors such as `anyhow::Error`.
//!
//! Implement `From<Failure<'i>>` and [`ToFailureKind`] to bring your own.
//!
//! # Example
//!
//! ```
//! use fastnumbers::{FailureKind, Invalid, Kind, Options, ToFailureKind};
//!
//! let options = Options::new().with_base(0);
//! let error = fastnumbers::convert::<_, Invalid>(3.5, Kind::Int, &options).unwrap_err();
//!
//! assert_eq!(error.failure_kind(), FailureKind::IllegalBase);
//! assert_eq!(error.to_string(), "invalid input: illegal base");
//! ```

mod failure;
mod invalid;

pub use self::failure::Failure;
pub use self::invalid::Invalid;

use crate::fmt;

/// The kind of failure produced by a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FailureKind {
    /// The input does not satisfy the integer grammar, does not fit an
    /// integer, or is a float that cannot be narrowed without truncation.
    InvalidInt,
    /// The input does not satisfy the float grammar, or is a `nan`/`inf`
    /// token that was not allowed.
    InvalidFloat,
    /// An explicit base was supplied where one is not permitted.
    IllegalBase,
}

impl FailureKind {
    /// A short lowercase description of the failure.
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInt => "invalid int",
            Self::InvalidFloat => "invalid float",
            Self::IllegalBase => "illegal base",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Implemented for errors that expose their [`FailureKind`].
pub trait ToFailureKind {
    /// The kind of failure.
    fn failure_kind(&self) -> FailureKind;
}

impl<T> ToFailureKind for &T
where
    T: ToFailureKind + ?Sized,
{
    fn failure_kind(&self) -> FailureKind {
        (**self).failure_kind()
    }
}

/// Auto-trait for [`ToFailureKind`] and `From<Failure>`.
pub trait Error<'i>: From<Failure<'i>> + ToFailureKind {}

impl<'i, T> Error<'i> for T where T: From<Failure<'i>> + ToFailureKind {}
