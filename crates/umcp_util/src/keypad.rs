//! Keycap digit emoji (0️⃣ through 9️⃣).
//!
//! A keycap digit is the ASCII digit followed by VARIATION SELECTOR-16
//! (U+FE0F) and COMBINING ENCLOSING KEYCAP (U+20E3).

/// UTF-8 bytes that follow the digit in a keycap emoji.
pub const KEYPAD_UTF8: &[u8] = b"\xef\xb8\x8f\xe2\x83\xa3";

/// [`KEYPAD_UTF8`] as a string.
pub const KEYPAD_SUFFIX: &str = "\u{fe0f}\u{20e3}";

/// Keycap emoji for `num`, or `None` unless `0 <= num <= 9`.
///
/// # Example
///
/// ```
/// use umcp_util::make_keypad;
///
/// assert_eq!(make_keypad(7).as_deref(), Some("7\u{fe0f}\u{20e3}"));
/// assert_eq!(make_keypad(10), None);
/// ```
pub fn make_keypad(num: i64) -> Option<String> {
    let digit = u8::try_from(num).ok().filter(|n| *n <= 9)?;
    let mut emoji = String::with_capacity(1 + KEYPAD_SUFFIX.len());
    emoji.push(char::from(b'0' + digit));
    emoji.push_str(KEYPAD_SUFFIX);
    Some(emoji)
}

/// Digit shown by a keycap emoji, or `None` if `emoji` is not exactly one.
///
/// # Example
///
/// ```
/// use umcp_util::parse_keypad;
///
/// assert_eq!(parse_keypad("3\u{fe0f}\u{20e3}"), Some(3));
/// assert_eq!(parse_keypad("3"), None);
/// ```
pub fn parse_keypad(emoji: &str) -> Option<u8> {
    let (&first, rest) = emoji.as_bytes().split_first()?;
    if rest != KEYPAD_UTF8 || !first.is_ascii_digit() {
        return None;
    }
    Some(first - b'0')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_constants_agree() {
        assert_eq!(KEYPAD_SUFFIX.as_bytes(), KEYPAD_UTF8);
    }

    #[test]
    fn test_rejects_longer_suffix() {
        let doubled = format!("1{}{}", KEYPAD_SUFFIX, KEYPAD_SUFFIX);
        assert_eq!(parse_keypad(&doubled), None);
    }
}
