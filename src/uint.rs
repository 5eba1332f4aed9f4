//! Fixed-width unsigned quantities
use crate::error::HexError;
use crate::num;

/// Runs the shared quantity checks and refuses a sign, which
/// `from_str_radix` would otherwise let through.
fn unsigned_digits(input: &str) -> Result<&str, HexError> {
    let raw = num::check_number(input)?;
    if raw.starts_with('+') {
        return Err(HexError::Syntax);
    }
    Ok(raw)
}

/// Decodes a `0x` quantity into a u64
pub fn decode_uint64(input: &str) -> Result<u64, HexError> {
    let raw = unsigned_digits(input)?;
    u64::from_str_radix(raw, 16).map_err(|e| HexError::from_parse_int(&e, HexError::Uint64Range))
}

/// Like `decode_uint64`, but panics on invalid input
pub fn must_decode_uint64(input: &str) -> u64 {
    decode_uint64(input).unwrap_or_else(|err| panic!("{}", err))
}

/// Encodes `i` as a minimal-digit `0x` quantity
pub fn encode_uint64(i: u64) -> String {
    format!("{:#x}", i)
}

/// Decodes a `0x` quantity into a native-width usize
pub fn decode_uint(input: &str) -> Result<usize, HexError> {
    let raw = unsigned_digits(input)?;
    usize::from_str_radix(raw, 16).map_err(|e| HexError::from_parse_int(&e, HexError::UintRange))
}

/// Like `decode_uint`, but panics on invalid input
pub fn must_decode_uint(input: &str) -> usize {
    decode_uint(input).unwrap_or_else(|err| panic!("{}", err))
}

pub fn encode_uint(i: usize) -> String {
    format!("{:#x}", i)
}

#[test]
fn test_decode_uint64() {
    assert_eq!(decode_uint64("0x0").unwrap(), 0);
    assert_eq!(decode_uint64("0x1a").unwrap(), 26);
    assert_eq!(decode_uint64("0XfF").unwrap(), 255);
    assert_eq!(decode_uint64("0xffffffffffffffff").unwrap(), u64::MAX);
}

#[test]
fn test_decode_uint64_errors() {
    assert_eq!(decode_uint64(""), Err(HexError::EmptyString));
    assert_eq!(decode_uint64("12"), Err(HexError::MissingPrefix));
    assert_eq!(decode_uint64("0x"), Err(HexError::EmptyNumber));
    assert_eq!(decode_uint64("0x01"), Err(HexError::LeadingZero));
    assert_eq!(decode_uint64("0xg"), Err(HexError::Syntax));
    assert_eq!(decode_uint64("0x+1"), Err(HexError::Syntax));
    assert_eq!(decode_uint64("0x-1"), Err(HexError::Syntax));
    assert_eq!(
        decode_uint64("0x1ffffffffffffffff"),
        Err(HexError::Uint64Range)
    );
}

#[test]
fn test_encode_uint64() {
    assert_eq!(encode_uint64(0), "0x0");
    assert_eq!(encode_uint64(1), "0x1");
    assert_eq!(encode_uint64(0xff), "0xff");
    assert_eq!(encode_uint64(0x1122334455667788), "0x1122334455667788");
    assert_eq!(encode_uint64(u64::MAX), "0xffffffffffffffff");
}

#[test]
fn test_uint64_roundtrip() {
    for &i in &[0, 1, 0x10, 0xabcdef, 1 << 32, u64::MAX - 1] {
        assert_eq!(decode_uint64(&encode_uint64(i)).unwrap(), i);
    }
}

#[test]
fn test_decode_uint() {
    assert_eq!(decode_uint("0x1a").unwrap(), 26);
    assert_eq!(decode_uint(&encode_uint(usize::MAX)).unwrap(), usize::MAX);
    assert_eq!(decode_uint("0x01"), Err(HexError::LeadingZero));

    let too_wide = format!("0x1{}", "0".repeat(usize::BITS as usize / 4));
    assert_eq!(decode_uint(&too_wide), Err(HexError::UintRange));
}

#[test]
#[should_panic(expected = "hex number > 64 bits")]
fn test_must_decode_uint64_panics() {
    must_decode_uint64("0x10000000000000000");
}

#[test]
fn test_must_decode_uint() {
    assert_eq!(must_decode_uint("0x2a"), 42);
}
