use crate::convert::{check_base, float_literal, text_to_float, text_to_int};
use crate::grammar;
use crate::input::{Input, IntoInput};
use crate::number::{float_to_int, Kind};
use crate::options::Options;

/// Returns `true` if the input can be interpreted as `kind` under `options`.
///
/// Text is validated with the same grammar [`convert()`](crate::convert())
/// uses, without producing a value where it can be avoided. Native numbers
/// match when their own kind does:
///
/// - an `Int` input matches everything but [`Kind::Float`];
/// - a `Float` input matches [`Kind::Float`] and [`Kind::Real`], and matches
///   [`Kind::IntLike`] if it is integral and fits an integer. With
///   `coerce_integral_floats` set the same rule applies to [`Kind::Int`].
///
/// Classification never fails and ignores `on_invalid`: an illegal base simply
/// does not match.
///
/// # Example
///
/// ```
/// use fastnumbers::{Kind, Options};
///
/// let options = Options::new();
///
/// assert!(fastnumbers::classify("-12", Kind::Int, &options));
/// assert!(fastnumbers::classify("-12", Kind::Float, &options));
/// assert!(!fastnumbers::classify("1_000", Kind::Int, &options));
/// assert!(fastnumbers::classify("1_000", Kind::Int, &options.with_underscores(true)));
/// assert!(fastnumbers::classify("4.0", Kind::IntLike, &options));
/// assert!(!fastnumbers::classify(4.0, Kind::Int, &options));
/// ```
pub fn classify<'i, I>(input: I, kind: Kind, options: &Options) -> bool
where
    I: IntoInput<'i>,
{
    let input = input.into_input();
    let base = match check_base(input, kind, options) {
        Ok(base) => base,
        Err(_) => return false,
    };
    match input {
        Input::Text(text) => text_matches(grammar::trim(text), kind, base, options),
        Input::Int(_) => kind != Kind::Float,
        Input::Float(value) => match kind {
            Kind::Float | Kind::Real => true,
            Kind::IntLike => float_to_int(value).is_some(),
            Kind::Int => options.coerce_integral_floats() && float_to_int(value).is_some(),
        },
    }
}

fn text_matches(literal: &str, kind: Kind, base: u32, options: &Options) -> bool {
    let separators = options.allow_underscores();
    match kind {
        Kind::Int => text_to_int(literal, base, separators).is_some(),
        Kind::Float => float_literal(literal, options).is_some(),
        Kind::Real => {
            text_to_int(literal, 10, separators).is_some()
                || float_literal(literal, options).is_some()
        }
        Kind::IntLike => {
            text_to_int(literal, 10, separators).is_some()
                || text_to_float(literal, options)
                    .and_then(float_to_int)
                    .is_some()
        }
    }
}
