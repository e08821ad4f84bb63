//! Safely classify and coerce untrusted input into integers and floats.
//!
//! # Basic usage
//!
//! ```rust
//! use fastnumbers::{Failure, Kind, Number, Options};
//!
//! let options = Options::new();
//!
//! let number = fastnumbers::convert::<_, Failure>(" 42 ", Kind::Int, &options);
//! assert_eq!(number, Ok(Number::Int(42)));
//!
//! assert!(fastnumbers::classify("1e3", Kind::Float, &options));
//! assert!(!fastnumbers::classify("1e3", Kind::Int, &options));
//! ```
//!
//! # Raising or falling back
//!
//! What happens to invalid input is chosen by [`Options`], per call.
//!
//! ```rust
//! use fastnumbers::{Failure, FailureKind, Kind, Number, OnInvalid, Options, ToFailureKind};
//!
//! let raise = Options::new();
//! let error = fastnumbers::convert::<_, Failure>("abc", Kind::Int, &raise).unwrap_err();
//!
//! assert_eq!(error.failure_kind(), FailureKind::InvalidInt);
//! assert_eq!(error.to_string(), "invalid literal for int() with base 10: 'abc'");
//!
//! let fallback = Options::new()
//!     .with_on_invalid(OnInvalid::ReturnDefault)
//!     .with_default_value(Number::Int(-1));
//!
//! assert_eq!(
//!     fastnumbers::convert::<_, Failure>("abc", Kind::Int, &fallback),
//!     Ok(Number::Int(-1)),
//! );
//! ```
//!
//! # Guarantees
//!
//! - Zero panics.
//! - Zero heap-allocations, except when removing digit separators from a float
//!   literal.
//! - Every call is a pure function of its input, kind and options.
//!
//! # Features
//!
//! | Feature | Default | Description
//! | ------- | ------- | -----------
//! | `std`   | yes     | `std::error::Error` support.
//! | `simd`  | yes     | Accelerated digit separator scanning via `memchr`.
//! | `serde` | no      | `Serialize`/`Deserialize` for options and results.
//! | `log`   | no      | Trace events from the converter.
//!
//! # Safety
//!
//! **No instances of `unsafe` are permitted.**

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(
    unsafe_code,
    // For derived implementations.
    unused_qualifications,
    unused_extern_crates,
    clippy::pedantic
)]
#![forbid(
    anonymous_parameters,
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]
#![warn(missing_docs, unused_results, variant_size_differences)]
#![allow(
    clippy::inline_always,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]

extern crate alloc;

#[macro_use]
mod macros;

mod classify;
mod convert;
mod fmt;
mod grammar;
mod number;
mod options;
mod policy;
mod util;

pub mod error;
pub mod input;

pub use self::classify::classify;
pub use self::convert::convert;
pub use self::error::{Error, Failure, FailureKind, Invalid, ToFailureKind};
pub use self::input::{input, Input, InputDisplay, IntoInput};
pub use self::number::{float_to_int, is_intlike, Kind, Number};
pub use self::options::{OnInvalid, Options};
pub use self::policy::{resolve, Policy};
