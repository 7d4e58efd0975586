//! UTF-8 rune decoding with replacement.
//!
//! Malformed input (overlong encodings, surrogates, values above U+10FFFF,
//! stray continuation bytes, truncated sequences) decodes to U+FFFD with a
//! width of one byte, so a scanner always makes progress and resynchronizes
//! on the next byte.

/// Bytes below this value are single-byte runes (ASCII).
pub(crate) const RUNE_SELF: u8 = 0x80;

/// Longest UTF-8 encoding of a scalar value.
pub(crate) const MAX_RUNE_WIDTH: usize = 4;

/// Decode the first rune of `bytes`.
///
/// Returns the scalar and the number of bytes it occupies. Malformed input
/// yields `(U+FFFD, 1)`; empty input yields `(U+FFFD, 0)`.
pub fn decode_rune(bytes: &[u8]) -> (char, usize) {
    let head = &bytes[..bytes.len().min(MAX_RUNE_WIDTH)];
    // A later sequence in `head` may be truncated; only the first rune matters.
    let valid = match std::str::from_utf8(head) {
        Ok(s) => s,
        Err(e) => std::str::from_utf8(&head[..e.valid_up_to()]).unwrap_or_default(),
    };
    match valid.chars().next() {
        Some(ch) => (ch, ch.len_utf8()),
        None if bytes.is_empty() => (char::REPLACEMENT_CHARACTER, 0),
        None => (char::REPLACEMENT_CHARACTER, 1),
    }
}

#[cfg(test)]
mod tests;
