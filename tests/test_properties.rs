//! Property tests for conversion and classification.
//!
//! Reproduce a failure with `PROPTEST_SEED=<seed> cargo test --test test_properties`.

#[macro_use]
mod common;

use common::*;
use proptest::prelude::*;

fn kind() -> impl Strategy<Value = Kind> {
    prop_oneof![
        Just(Kind::Int),
        Just(Kind::Float),
        Just(Kind::Real),
        Just(Kind::IntLike),
    ]
}

fn options() -> impl Strategy<Value = Options> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        prop_oneof![Just(None), Just(Some(0)), (2u32..=36).prop_map(Some)],
    )
        .prop_map(|(underscores, coerce, nan, infinity, base)| {
            let options = Options::new()
                .with_underscores(underscores)
                .with_coerce_integral_floats(coerce)
                .with_nan(nan)
                .with_infinity(infinity);
            match base {
                Some(base) => options.with_base(base),
                None => options,
            }
        })
}

fn convert_text<'i>(text: &'i str, kind: Kind, options: &Options) -> Result<Number, Failure<'i>> {
    fastnumbers::convert(text, kind, options)
}

fn numeric_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ \t]{0,2}[+-]?[0-9_]{1,6}(\\.[0-9_]{0,4})?([eE][+-]?[0-9]{1,3})?[ \n]{0,2}",
        "[+-]?0[xXoObB][0-9a-fA-F_]{1,6}",
        "[+-]?(nan|NaN|inf|Infinity|infinit)",
        "\\PC{0,8}",
    ]
}

///////////////////////////////////////////////////////////////////////////////
// Integers

proptest! {
    #[test]
    fn test_convert_int_text_round_trip(value in any::<i64>()) {
        let text = value.to_string();
        prop_assert_eq!(convert!(text.as_str(), Int), Ok(Number::Int(value)));
    }

    #[test]
    fn test_convert_int_text_round_trip_in_base(value in any::<i64>(), base in 2u32..=36) {
        let digits = to_radix(value, base);
        let options = Options::new().with_base(base);
        prop_assert_eq!(
            convert!(digits.as_str(), Int, options),
            Ok(Number::Int(value))
        );
    }

    #[test]
    fn test_convert_native_int_float_widening(value in any::<i32>()) {
        prop_assert_eq!(convert!(value, Float), Ok(Number::Float(f64::from(value))));
        prop_assert_eq!(convert!(value, Real), Ok(Number::Int(i64::from(value))));
    }
}

fn to_radix(value: i64, base: u32) -> String {
    let mut magnitude = value.unsigned_abs();
    let mut digits = Vec::new();
    loop {
        let digit = (magnitude % u64::from(base)) as u32;
        digits.push(std::char::from_digit(digit, base).unwrap());
        magnitude /= u64::from(base);
        if magnitude == 0 {
            break;
        }
    }
    if value < 0 {
        digits.push('-');
    }
    digits.iter().rev().collect()
}

///////////////////////////////////////////////////////////////////////////////
// Floats

proptest! {
    #[test]
    fn test_convert_float_text_round_trip(value in any::<f64>()) {
        let text = format!("{:?}", value);
        let result = convert!(text.as_str(), Float);
        if value.is_nan() {
            prop_assert!(result.unwrap().to_f64().is_nan());
        } else {
            prop_assert_eq!(result, Ok(Number::Float(value)));
        }
    }

    #[test]
    fn test_native_float_intlike(value in any::<f64>()) {
        let narrowed = convert!(value, IntLike).ok();
        prop_assert_eq!(narrowed.is_some(), classify!(value, IntLike));
        if let Some(Number::Int(int)) = narrowed {
            prop_assert!(is_intlike(value));
            prop_assert_eq!(int as f64, value);
        }
    }

    #[test]
    fn test_is_intlike_matches_fraction(value in -1.0e15f64..1.0e15) {
        prop_assert_eq!(is_intlike(value), value.fract() == 0.0);
    }
}

///////////////////////////////////////////////////////////////////////////////
// Classify and convert agree

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn test_classify_agrees_with_convert(
        text in numeric_text(),
        kind in kind(),
        options in options(),
    ) {
        let converted = convert_text(&text, kind, &options);
        prop_assert_eq!(
            classify(&text, kind, &options),
            converted.is_ok(),
            "{:?} as {}: {:?}",
            text,
            kind,
            converted
        );
    }

    #[test]
    fn test_convert_is_deterministic(
        text in numeric_text(),
        kind in kind(),
        options in options(),
    ) {
        let first = convert_text(&text, kind, &options);
        let second = convert_text(&text, kind, &options);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert!(a.is_identical(&b)),
            (Err(a), Err(b)) => prop_assert_eq!(a, b),
            (a, b) => prop_assert!(false, "{:?} != {:?}", a, b),
        }
    }

    #[test]
    fn test_return_default_never_fails(
        text in numeric_text(),
        kind in kind(),
        options in options(),
    ) {
        let options = options
            .with_on_invalid(OnInvalid::ReturnDefault)
            .with_default_value(Number::Int(-7));
        let converted = convert_text(&text, kind, &options);
        let matches = classify(&text, kind, &options);
        match converted {
            Ok(Number::Int(-7)) => {}
            Ok(_) => prop_assert!(matches),
            Err(error) => prop_assert!(false, "unexpected error: {}", error),
        }
    }

    #[test]
    fn test_int_results_for_int_kinds(
        text in numeric_text(),
        kind in kind(),
        options in options(),
    ) {
        if let Ok(number) = convert_text(&text, kind, &options) {
            if kind.yields_int() {
                prop_assert!(number.is_int());
            }
            if kind == Kind::Float {
                prop_assert!(number.is_float());
            }
        }
    }
}
