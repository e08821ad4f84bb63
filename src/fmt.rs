pub(crate) use core::fmt::{Debug, Display, Formatter, Result, Write};

/// Writes at most `remaining` chars to the inner writer and silently drops the
/// rest.
pub(crate) struct Truncate<'a, W: ?Sized> {
    w: &'a mut W,
    remaining: usize,
}

impl<'a, W> Truncate<'a, W>
where
    W: Write + ?Sized,
{
    pub(crate) fn new(w: &'a mut W, max: usize) -> Self {
        Self { w, remaining: max }
    }
}

impl<'a, W> Write for Truncate<'a, W>
where
    W: Write + ?Sized,
{
    fn write_str(&mut self, s: &str) -> Result {
        for c in s.chars() {
            self.write_char(c)?;
        }
        Ok(())
    }

    fn write_char(&mut self, c: char) -> Result {
        if self.remaining == 0 {
            return Ok(());
        }
        self.remaining -= 1;
        self.w.write_char(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[test]
    fn test_truncate_stops_at_max() {
        let mut out = String::new();
        write!(Truncate::new(&mut out, 3), "hello").unwrap();
        assert_eq!(out, "hel");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        let mut out = String::new();
        write!(Truncate::new(&mut out, 2), "♥♥♥").unwrap();
        assert_eq!(out, "♥♥");
    }
}
