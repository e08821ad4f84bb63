#![no_main]

use libfuzzer_sys::fuzz_target;
use std::fmt::{self, Write};

fuzz_target!(|data_and_width: (&str, usize)| {
    let (data, width) = data_and_width;
    let input = fastnumbers::input(data);

    write!(DummyWrite, "{}", input.display().full()).unwrap();
    write!(DummyWrite, "{}", input.display().head(width)).unwrap();
    write!(DummyWrite, "{:.1$}", input, width).unwrap();

    let mut count = CountWrite(0);
    write!(count, "{}", input.display().head(width)).unwrap();
    assert!(count.0 <= width);
});

struct DummyWrite;

impl fmt::Write for DummyWrite {
    fn write_str(&mut self, _: &str) -> fmt::Result {
        Ok(())
    }
}

struct CountWrite(usize);

impl fmt::Write for CountWrite {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.chars().count();
        Ok(())
    }
}
