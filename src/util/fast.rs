#[cfg(feature = "memchr")]
#[inline(always)]
pub(crate) fn find_u8_match(needle: u8, haystack: &[u8]) -> Option<usize> {
    memchr::memchr(needle, haystack)
}

#[cfg(not(feature = "memchr"))]
pub(crate) fn find_u8_match(needle: u8, haystack: &[u8]) -> Option<usize> {
    haystack.iter().copied().position(|b| b == needle)
}

/// Returns `true` if the literal contains a digit separator.
#[inline(always)]
pub(crate) fn has_separator(literal: &str) -> bool {
    find_u8_match(b'_', literal.as_bytes()).is_some()
}
