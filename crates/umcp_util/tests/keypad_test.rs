//! Tests for keycap digit emoji.

use umcp_util::{KEYPAD_SUFFIX, KEYPAD_UTF8, make_keypad, parse_keypad};

#[test]
fn test_round_trip_all_digits() {
    for n in 0..=9 {
        let emoji = make_keypad(n).unwrap();
        assert_eq!(parse_keypad(&emoji), Some(n as u8));
    }
}

#[test]
fn test_make_keypad_rejects_out_of_range() {
    for n in [-1, 10, 11, 100, i64::MIN, i64::MAX] {
        assert_eq!(make_keypad(n), None, "{} should not encode", n);
    }
}

#[test]
fn test_make_keypad_bytes_are_exact() {
    let emoji = make_keypad(5).unwrap();
    assert_eq!(
        emoji.as_bytes(),
        &[b'5', 0xEF, 0xB8, 0x8F, 0xE2, 0x83, 0xA3][..]
    );
}

#[test]
fn test_parse_keypad_rejects_malformed() {
    assert_eq!(parse_keypad(""), None);
    assert_eq!(parse_keypad("5"), None);
    assert_eq!(parse_keypad("5X"), None);
    assert_eq!(parse_keypad(&format!("a{}", KEYPAD_SUFFIX)), None);
    assert_eq!(parse_keypad("5\u{fe0f}"), None);
    assert_eq!(parse_keypad("5\u{20e3}"), None);
    assert_eq!(parse_keypad(&format!("55{}", KEYPAD_SUFFIX)), None);
    assert_eq!(parse_keypad(&format!("5{} ", KEYPAD_SUFFIX)), None);
}

#[test]
fn test_parse_keypad_accepts_exact_form() {
    assert_eq!(parse_keypad(&format!("5{}", KEYPAD_SUFFIX)), Some(5));
    assert_eq!(parse_keypad(&format!("0{}", KEYPAD_SUFFIX)), Some(0));
}

#[test]
fn test_parsed_value_reencodes_identically() {
    let mut bytes = vec![b'8'];
    bytes.extend_from_slice(KEYPAD_UTF8);
    let input = String::from_utf8(bytes).unwrap();

    let digit = parse_keypad(&input).unwrap();
    assert_eq!(make_keypad(i64::from(digit)).unwrap(), input);
}
