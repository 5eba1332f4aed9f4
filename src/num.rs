//! Checks shared by every numeric decode
use crate::error::HexError;

/// Decodes a single ASCII hex digit into its nibble value
pub(crate) fn decode_nibble(d: u8) -> Option<u8> {
    match d {
        b'0'..=b'9' => Some(d - b'0'),
        b'a'..=b'f' => Some(d - b'a' + 10),
        b'A'..=b'F' => Some(d - b'A' + 10),
        _ => None,
    }
}

#[test]
fn test_decode_nibble() {
    assert_eq!(decode_nibble(b'f').unwrap(), 0xf);
    assert_eq!(decode_nibble(b'9').unwrap(), 0x9);
    assert_eq!(decode_nibble(b'F').unwrap(), 0xf);
    assert_eq!(decode_nibble(b'Z'), None);
    assert_eq!(decode_nibble(b'x'), None);
}

/// Whether `input` starts with `0x` or `0X`
pub(crate) fn has_0x_prefix(input: &str) -> bool {
    let b = input.as_bytes();
    b.len() >= 2 && b[0] == b'0' && (b[1] == b'x' || b[1] == b'X')
}

/// Strips the prefix off a quantity and returns its digits. The digits
/// themselves are not checked here; whoever parses them reports `Syntax`.
pub(crate) fn check_number(input: &str) -> Result<&str, HexError> {
    if input.is_empty() {
        return Err(HexError::EmptyString);
    }
    if !has_0x_prefix(input) {
        return Err(HexError::MissingPrefix);
    }

    let digits = &input[2..];
    if digits.is_empty() {
        return Err(HexError::EmptyNumber);
    }
    // only a lone "0" may start with 0
    if digits.len() > 1 && digits.as_bytes()[0] == b'0' {
        return Err(HexError::LeadingZero);
    }
    Ok(digits)
}

#[test]
fn test_has_0x_prefix() {
    assert!(has_0x_prefix("0x"));
    assert!(has_0x_prefix("0X1"));
    assert!(!has_0x_prefix("0"));
    assert!(!has_0x_prefix("x0"));
    assert!(!has_0x_prefix(""));
}

#[test]
fn test_check_number() {
    assert_eq!(check_number(""), Err(HexError::EmptyString));
    assert_eq!(check_number("abc"), Err(HexError::MissingPrefix));
    assert_eq!(check_number("0"), Err(HexError::MissingPrefix));
    assert_eq!(check_number("0x"), Err(HexError::EmptyNumber));
    assert_eq!(check_number("0x01"), Err(HexError::LeadingZero));
    assert_eq!(check_number("0x00"), Err(HexError::LeadingZero));
    assert_eq!(check_number("0x0"), Ok("0"));
    assert_eq!(check_number("0X1aF"), Ok("1aF"));
    // character validity is left to the caller
    assert_eq!(check_number("0xzz"), Ok("zz"));
}
