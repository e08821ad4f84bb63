#![allow(unused_macros, unused_imports)]

pub use fastnumbers::*;
pub use indoc::indoc;
pub use paste::paste;

macro_rules! assert_str_eq {
    ($actual:expr, $expected:expr) => {{
        let actual = &$actual[..];
        let expected = &$expected[..];
        if actual != expected {
            panic!(
                indoc! {"
                string not expected value:
                ============================EXPECTED==========================
                {}
                =============================ACTUAL===========================
                {}
                ==============================DIFF============================
                {}
                ==============================================================
            "},
                expected,
                actual,
                colored_diff::PrettyDifference { expected, actual },
            );
        }
    }};
}

macro_rules! convert {
    ($input:expr, $kind:ident) => {
        convert!($input, $kind, Options::new())
    };
    ($input:expr, $kind:ident, $options:expr) => {
        fastnumbers::convert::<_, Failure>($input, Kind::$kind, &$options)
    };
}

macro_rules! convert_ok {
    ($input:expr, $kind:ident) => {
        convert!($input, $kind).unwrap()
    };
    ($input:expr, $kind:ident, $options:expr) => {
        convert!($input, $kind, $options).unwrap()
    };
}

macro_rules! convert_err {
    ($input:expr, $kind:ident) => {
        convert!($input, $kind).unwrap_err()
    };
    ($input:expr, $kind:ident, $options:expr) => {
        convert!($input, $kind, $options).unwrap_err()
    };
}

macro_rules! classify {
    ($input:expr, $kind:ident) => {
        classify!($input, $kind, Options::new())
    };
    ($input:expr, $kind:ident, $options:expr) => {
        fastnumbers::classify($input, Kind::$kind, &$options)
    };
}
