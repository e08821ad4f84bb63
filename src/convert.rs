use crate::error::{Error, Failure, FailureKind};
use crate::grammar::{self, FloatLiteral};
use crate::input::{Input, IntoInput};
use crate::number::{float_to_int, Kind, Number};
use crate::options::{is_legal_base, Options};
use crate::policy::Policy;

/// Convert input into a [`Number`] of the requested [`Kind`].
///
/// Text is trimmed of ASCII whitespace and parsed with the grammar for `kind`.
/// Native numbers are passed through, widened, or narrowed without
/// truncation. Any failure is resolved by the [`Policy`] the `options` select.
///
/// | `kind`          | text                        | `Int` input | `Float` input
/// | --------------- | --------------------------- | ----------- | -------------
/// | [`Kind::Int`]     | integer grammar             | identity    | integral values only
/// | [`Kind::Float`]   | float grammar               | widened     | identity
/// | [`Kind::Real`]    | integer, else float grammar | identity    | identity
/// | [`Kind::IntLike`] | integer or integral float   | identity    | integral values only
///
/// # Errors
///
/// Returns `E` if the input is invalid for `kind` and the options select
/// [`OnInvalid::Raise`](crate::OnInvalid::Raise).
///
/// # Example
///
/// ```
/// use fastnumbers::{Failure, Kind, Number, Options};
///
/// let options = Options::new().with_base(0);
/// assert_eq!(
///     fastnumbers::convert::<_, Failure>("0x1A", Kind::Int, &options),
///     Ok(Number::Int(26)),
/// );
///
/// assert_eq!(
///     fastnumbers::convert::<_, Failure>(3.0, Kind::Int, &Options::new()),
///     Ok(Number::Int(3)),
/// );
/// assert!(fastnumbers::convert::<_, Failure>(3.5, Kind::Int, &Options::new()).is_err());
/// ```
pub fn convert<'i, I, E>(input: I, kind: Kind, options: &Options) -> Result<Number, E>
where
    I: IntoInput<'i>,
    E: Error<'i>,
{
    let input = input.into_input();
    let policy = Policy::new(options);
    trace!("converting {:?} to {}", input, kind);
    coerce(input, kind, options).or_else(|failure| {
        policy.resolve(Failure::new(
            failure,
            input,
            kind,
            options.explicit_base(),
        ))
    })
}

fn coerce(input: Input<'_>, kind: Kind, options: &Options) -> Result<Number, FailureKind> {
    let base = check_base(input, kind, options)?;
    match input {
        Input::Text(text) => text_to_number(grammar::trim(text), kind, base, options),
        Input::Int(value) => Ok(int_to_number(value, kind)),
        Input::Float(value) => float_to_number(value, kind, options),
    }
}

/// Returns the base to parse integer text with.
///
/// An explicit base is only legal with text input, [`Kind::Int`] and a base of
/// `0` or `2..=36`.
pub(crate) fn check_base(input: Input<'_>, kind: Kind, options: &Options) -> Result<u32, FailureKind> {
    match options.explicit_base() {
        None => Ok(10),
        Some(base) if input.is_text() && kind == Kind::Int && is_legal_base(base) => Ok(base),
        Some(_) => Err(FailureKind::IllegalBase),
    }
}

fn text_to_number(
    literal: &str,
    kind: Kind,
    base: u32,
    options: &Options,
) -> Result<Number, FailureKind> {
    let separators = options.allow_underscores();
    match kind {
        Kind::Int => text_to_int(literal, base, separators)
            .map(Number::Int)
            .ok_or(FailureKind::InvalidInt),
        Kind::Float => text_to_float(literal, options)
            .map(Number::Float)
            .ok_or(FailureKind::InvalidFloat),
        Kind::Real => match text_to_int(literal, 10, separators) {
            Some(value) => Ok(Number::Int(value)),
            None => text_to_float(literal, options)
                .map(|value| coerce_float(value, options))
                .ok_or(FailureKind::InvalidFloat),
        },
        Kind::IntLike => text_to_int(literal, 10, separators)
            .or_else(|| text_to_float(literal, options).and_then(float_to_int))
            .map(Number::Int)
            .ok_or(FailureKind::InvalidInt),
    }
}

/// Parses a trimmed integer literal that fits an `i64`.
pub(crate) fn text_to_int(literal: &str, base: u32, separators: bool) -> Option<i64> {
    grammar::scan_int(literal, base, separators).and_then(|literal| literal.value())
}

/// Scans a trimmed float literal, rejecting the special tokens the options do
/// not allow.
pub(crate) fn float_literal<'a>(literal: &'a str, options: &Options) -> Option<FloatLiteral<'a>> {
    match grammar::scan_float(literal, options.allow_underscores())? {
        FloatLiteral::Nan { .. } if !options.allow_nan() => None,
        FloatLiteral::Infinity { .. } if !options.allow_infinity() => None,
        literal => Some(literal),
    }
}

/// Parses a trimmed float literal.
pub(crate) fn text_to_float(literal: &str, options: &Options) -> Option<f64> {
    float_literal(literal, options)?.value()
}

fn coerce_float(value: f64, options: &Options) -> Number {
    match float_to_int(value) {
        Some(value) if options.coerce_integral_floats() => Number::Int(value),
        _ => Number::Float(value),
    }
}

fn int_to_number(value: i64, kind: Kind) -> Number {
    match kind {
        Kind::Float => Number::Float(Number::Int(value).to_f64()),
        Kind::Int | Kind::Real | Kind::IntLike => Number::Int(value),
    }
}

fn float_to_number(value: f64, kind: Kind, options: &Options) -> Result<Number, FailureKind> {
    match kind {
        Kind::Float => Ok(Number::Float(value)),
        Kind::Real => Ok(coerce_float(value, options)),
        Kind::Int | Kind::IntLike => float_to_int(value)
            .map(Number::Int)
            .ok_or(FailureKind::InvalidInt),
    }
}
