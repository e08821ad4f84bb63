use crate::fmt::{self, Write};
use crate::number::write_float;

use super::Input;

const DEFAULT_MAX: usize = 200;

/// Provides configurable [`Input`] formatting.
///
/// Text is written as a quoted literal with quotes, backslashes and
/// non-printable characters escaped. Native numbers are written as numeric literals. The
/// output is limited to `200` characters by default.
///
/// # Format string options
///
/// | Option    | `"it's"`    | `1.5`   |
/// | --------- | ----------- | ------- |
/// | `"{}"`    | `"it's"`    | `1.5`   |
/// | `"{:.3}"` | `"it`       | `1.5`   |
///
/// # Example
///
/// ```
/// let formatted = fastnumbers::input("12\n").display().to_string();
/// assert_eq!(formatted, r"'12\n'");
///
/// let formatted = fastnumbers::input("123456").display().head(4).to_string();
/// assert_eq!(formatted, "'123");
/// ```
#[derive(Clone, Copy)]
#[must_use]
pub struct InputDisplay<'i> {
    input: Input<'i>,
    max: usize,
}

impl<'i> InputDisplay<'i> {
    /// Create a new `InputDisplay` given [`Input`].
    pub const fn new(input: Input<'i>) -> Self {
        Self {
            input,
            max: DEFAULT_MAX,
        }
    }

    /// Derive an `InputDisplay` from a [`fmt::Formatter`] with defaults.
    ///
    /// Precision (eg. `{:.2}`) formatting sets the character limit.
    pub fn from_formatter(input: Input<'i>, f: &fmt::Formatter<'_>) -> Self {
        let format = Self::new(input);
        match f.precision() {
            Some(max) => format.head(max),
            None => format,
        }
    }

    /// Limit the output to `max` characters.
    pub const fn head(mut self, max: usize) -> Self {
        self.max = max;
        self
    }

    /// Do not limit the output.
    pub const fn full(mut self) -> Self {
        self.max = usize::MAX;
        self
    }

    /// Writes the input to a [`Write`].
    ///
    /// # Errors
    ///
    /// Returns a [`fmt::Error`] if failed to write to the writer.
    pub fn write<W>(&self, w: &mut W) -> fmt::Result
    where
        W: Write + ?Sized,
    {
        let w = &mut fmt::Truncate::new(w, self.max);
        match self.input {
            Input::Text(text) => write_text(text, w),
            Input::Int(v) => write!(w, "{}", v),
            Input::Float(v) => write_float(v, w),
        }
    }
}

impl<'i> fmt::Debug for InputDisplay<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InputDisplay")
            .field("input", &self.input)
            .field("max", &self.max)
            .finish()
    }
}

impl<'i> fmt::Display for InputDisplay<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f)
    }
}

fn write_text<W>(text: &str, w: &mut W) -> fmt::Result
where
    W: Write + ?Sized,
{
    let quote = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };
    w.write_char(quote)?;
    for c in text.chars() {
        match c {
            '\\' => w.write_str(r"\\")?,
            '\t' => w.write_str(r"\t")?,
            '\n' => w.write_str(r"\n")?,
            '\r' => w.write_str(r"\r")?,
            c if c == quote => {
                w.write_char('\\')?;
                w.write_char(c)?;
            }
            c if !is_printable(c) => write_escaped(c, w)?,
            c => w.write_char(c)?,
        }
    }
    w.write_char(quote)
}

/// Control, format, private-use and separator characters are not printable.
/// Space is the only printable whitespace.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !(c.is_control() || c.is_whitespace() || is_format(c) || is_private_use(c))
}

fn is_format(c: char) -> bool {
    matches!(
        c,
        '\u{ad}'
            | '\u{600}'..='\u{605}'
            | '\u{61c}'
            | '\u{6dd}'
            | '\u{70f}'
            | '\u{890}'..='\u{891}'
            | '\u{8e2}'
            | '\u{180e}'
            | '\u{200b}'..='\u{200f}'
            | '\u{202a}'..='\u{202e}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206f}'
            | '\u{feff}'
            | '\u{fff9}'..='\u{fffb}'
            | '\u{110bd}'
            | '\u{110cd}'
            | '\u{13430}'..='\u{1343f}'
            | '\u{1bca0}'..='\u{1bca3}'
            | '\u{1d173}'..='\u{1d17a}'
            | '\u{e0001}'
            | '\u{e0020}'..='\u{e007f}'
    )
}

fn is_private_use(c: char) -> bool {
    matches!(
        c,
        '\u{e000}'..='\u{f8ff}' | '\u{f0000}'..='\u{ffffd}' | '\u{100000}'..='\u{10fffd}'
    )
}

fn write_escaped<W>(c: char, w: &mut W) -> fmt::Result
where
    W: Write + ?Sized,
{
    let code = u32::from(c);
    if code <= 0xff {
        write!(w, "\\x{:02x}", code)
    } else if code <= 0xffff {
        write!(w, "\\u{:04x}", code)
    } else {
        write!(w, "\\U{:08x}", code)
    }
}
