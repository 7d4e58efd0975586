use super::*;
use pretty_assertions::assert_eq;

// === Valid Sequences ===

#[test]
fn decodes_each_width() {
    assert_eq!(decode_rune(b"a"), ('a', 1));
    assert_eq!(decode_rune("é".as_bytes()), ('é', 2));
    assert_eq!(decode_rune("世界".as_bytes()), ('世', 3));
    assert_eq!(decode_rune("\u{1F600}".as_bytes()), ('\u{1F600}', 4));
}

#[test]
fn truncated_trailing_rune_does_not_affect_first() {
    // "é" followed by the first two bytes of "世".
    assert_eq!(decode_rune(&[0xC3, 0xA9, 0xE4, 0xB8]), ('é', 2));
}

#[test]
fn literal_replacement_character_is_three_bytes() {
    assert_eq!(decode_rune("\u{FFFD}".as_bytes()), ('\u{FFFD}', 3));
}

// === Malformed Sequences ===

#[test]
fn empty_input_has_zero_width() {
    assert_eq!(decode_rune(&[]), (char::REPLACEMENT_CHARACTER, 0));
}

#[test]
fn malformed_input_is_replacement_of_width_one() {
    let cases: [&[u8]; 7] = [
        &[0x80],                   // stray continuation
        &[0xC0, 0x80],             // overlong NUL
        &[0xE0, 0x80, 0x80],       // overlong
        &[0xED, 0xA0, 0x80],       // surrogate U+D800
        &[0xF4, 0x90, 0x80, 0x80], // above U+10FFFF
        &[0xE4, 0xB8],             // truncated
        &[0xFF],
    ];
    for bytes in cases {
        assert_eq!(
            decode_rune(bytes),
            (char::REPLACEMENT_CHARACTER, 1),
            "input {bytes:02X?}"
        );
    }
}

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_decode {
    use super::super::decode_rune;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn agrees_with_str_chars(s in "\\PC{1,16}") {
            let first = s.chars().next().unwrap_or_default();
            prop_assert_eq!(decode_rune(s.as_bytes()), (first, first.len_utf8()));
        }

        #[test]
        fn width_is_always_one_to_four(bytes in proptest::collection::vec(any::<u8>(), 1..16)) {
            let (_, width) = decode_rune(&bytes);
            prop_assert!((1..=4).contains(&width));
            prop_assert!(width <= bytes.len());
        }
    }
}
