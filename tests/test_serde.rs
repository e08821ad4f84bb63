#[macro_use]
mod common;

use common::*;

const LENIENT: Options = Options::returning(Number::Float(-1.0))
    .with_underscores(true)
    .with_coerce_integral_floats(true)
    .with_base(0);

///////////////////////////////////////////////////////////////////////////////
// Options

#[test]
fn test_options_serialize() {
    let json = serde_json::to_string(&LENIENT).unwrap();
    assert_str_eq!(
        json,
        concat!(
            r#"{"on_invalid":"return_default","default_value":-1.0,"#,
            r#""allow_underscores":true,"coerce_integral_floats":true,"#,
            r#""allow_nan":true,"allow_infinity":true,"explicit_base":0}"#
        )
    );
}

#[test]
fn test_options_deserialize_partial() {
    let options: Options = serde_json::from_str(indoc! {r#"
        {
            "on_invalid": "return_default",
            "default_value": 7,
            "allow_nan": false
        }
    "#})
    .unwrap();
    assert_eq!(options, Options::returning(Number::Int(7)).with_nan(false));
}

#[test]
fn test_options_deserialize_empty() {
    let options: Options = serde_json::from_str("{}").unwrap();
    assert_eq!(options, Options::new());
}

#[test]
fn test_options_deserialize_unknown_field() {
    let result = serde_json::from_str::<Options>(r#"{"allow_hex": true}"#);
    assert!(result.is_err());
}

#[test]
fn test_options_round_trip() {
    let json = serde_json::to_string(&LENIENT).unwrap();
    let options: Options = serde_json::from_str(&json).unwrap();
    assert_eq!(options, LENIENT);
}

#[test]
fn test_options_deserialized_in_use() {
    let options: Options =
        serde_json::from_str(r#"{"allow_underscores": true, "explicit_base": 16}"#).unwrap();
    assert_eq!(convert_ok!("ff_ff", Int, options), Number::Int(0xffff));
}

///////////////////////////////////////////////////////////////////////////////
// Values

#[test]
fn test_number_untagged() {
    assert_eq!(serde_json::to_string(&Number::Int(3)).unwrap(), "3");
    assert_eq!(serde_json::to_string(&Number::Float(3.0)).unwrap(), "3.0");
    assert_eq!(serde_json::from_str::<Number>("3").unwrap(), Number::Int(3));
    assert_eq!(
        serde_json::from_str::<Number>("3.5").unwrap(),
        Number::Float(3.5)
    );
}

#[test]
fn test_kind_serialize() {
    assert_eq!(serde_json::to_string(&Kind::IntLike).unwrap(), r#""int_like""#);
    assert_eq!(serde_json::from_str::<Kind>(r#""real""#).unwrap(), Kind::Real);
}

#[test]
fn test_on_invalid_serialize() {
    assert_eq!(
        serde_json::to_string(&OnInvalid::ReturnDefault).unwrap(),
        r#""return_default""#
    );
    assert_eq!(
        serde_json::from_str::<OnInvalid>(r#""raise""#).unwrap(),
        OnInvalid::Raise
    );
}

#[test]
fn test_failure_kind_serialize() {
    let kind = convert_err!("x", Float).kind();
    assert_eq!(serde_json::to_string(&kind).unwrap(), r#""invalid_float""#);
    assert_eq!(
        serde_json::from_str::<FailureKind>(r#""illegal_base""#).unwrap(),
        FailureKind::IllegalBase
    );
}
