#![no_main]

use fastnumbers::{Failure, Kind, Number, Options};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|ints_and_floats: (i64, f64)| {
    let (int, float) = ints_and_floats;
    let options = Options::new();

    assert_eq!(
        fastnumbers::convert::<_, Failure>(int, Kind::Real, &options),
        Ok(Number::Int(int))
    );
    match fastnumbers::convert::<_, Failure>(float, Kind::IntLike, &options) {
        Ok(Number::Int(narrowed)) => assert_eq!(narrowed as f64, float),
        Ok(Number::Float(_)) => unreachable!(),
        Err(failure) => {
            assert!(!fastnumbers::is_intlike(float) || float.abs() >= 9.2e18);
            let _ = failure.to_string();
        }
    }
});
