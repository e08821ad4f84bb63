#![no_main]

use fastnumbers::{Failure, Kind, Options};
use libfuzzer_sys::fuzz_target;

const KINDS: [Kind; 4] = [Kind::Int, Kind::Float, Kind::Real, Kind::IntLike];

fuzz_target!(|data_and_flags: (&str, u8, u8)| {
    let (text, flags, base) = data_and_flags;
    let mut options = Options::new()
        .with_underscores(flags & 1 != 0)
        .with_coerce_integral_floats(flags & 2 != 0)
        .with_nan(flags & 4 != 0)
        .with_infinity(flags & 8 != 0);
    if flags & 16 != 0 {
        options = options.with_base(u32::from(base));
    }

    for &kind in &KINDS {
        let converted = fastnumbers::convert::<_, Failure>(text, kind, &options);
        assert_eq!(fastnumbers::classify(text, kind, &options), converted.is_ok());
        if let Err(failure) = converted {
            let _ = failure.to_string();
        }
    }
});
