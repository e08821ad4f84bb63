//! Input support.
//!
//! An [`Input`] is either text to be parsed or a number that is already
//! native. Anything implementing [`IntoInput`] can be handed to
//! [`classify()`](crate::classify()) and [`convert()`](crate::convert())
//! directly.

mod display;

pub use self::display::InputDisplay;

use alloc::string::String;

use crate::fmt;
use crate::number::Number;

/// Creates a new [`Input`].
///
/// It is recommended to use this directly from the crate as
/// `fastnumbers::input()`, not as an import via `use` as shown below, as you
/// lose the discoverability.
///
/// ```
/// use fastnumbers::input; // bad
///
/// fastnumbers::input("12"); // do this instead
/// ```
pub fn input<'i, I>(input: I) -> Input<'i>
where
    I: IntoInput<'i>,
{
    input.into_input()
}

/// A value to classify or convert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input<'i> {
    /// Numeric text, in its original form.
    Text(&'i str),
    /// A native integer.
    Int(i64),
    /// A native float.
    Float(f64),
}

impl<'i> Input<'i> {
    /// Returns `true` if the input is text.
    #[inline(always)]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Returns the text, if the input is text.
    #[inline(always)]
    pub const fn as_text(&self) -> Option<&'i str> {
        match *self {
            Self::Text(text) => Some(text),
            Self::Int(_) | Self::Float(_) => None,
        }
    }

    /// Returns an [`InputDisplay`] for formatting.
    pub fn display(&self) -> InputDisplay<'i> {
        InputDisplay::new(*self)
    }
}

impl<'i> fmt::Display for Input<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&InputDisplay::from_formatter(*self, f), f)
    }
}

///////////////////////////////////////////////////////////////////////////////
// Entry

/// Implemented for values that can be classified or converted.
pub trait IntoInput<'i> {
    /// Converts the value into an [`Input`].
    fn into_input(self) -> Input<'i>;
}

impl<'i> IntoInput<'i> for Input<'i> {
    #[inline(always)]
    fn into_input(self) -> Input<'i> {
        self
    }
}

impl<'i> IntoInput<'i> for &'i str {
    #[inline(always)]
    fn into_input(self) -> Input<'i> {
        Input::Text(self)
    }
}

impl<'i> IntoInput<'i> for &'i String {
    #[inline(always)]
    fn into_input(self) -> Input<'i> {
        Input::Text(self.as_str())
    }
}

impl<'i> IntoInput<'i> for Number {
    #[inline(always)]
    fn into_input(self) -> Input<'i> {
        match self {
            Number::Int(v) => Input::Int(v),
            Number::Float(v) => Input::Float(v),
        }
    }
}

impl_into_input!(Int, i64, i8, i16, i32, i64, u8, u16, u32);
impl_into_input!(Float, f64, f32, f64);
