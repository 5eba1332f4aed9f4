//! Errors produced while decoding `0x`-prefixed hex text
use std::num::{IntErrorKind, ParseIntError};

use thiserror::Error;

/// Every way a decode can fail. Each kind carries a fixed message and nothing
/// else; the cause from an underlying parser is folded into the kind.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexError {
    #[error("empty hex string")]
    EmptyString,

    /// Invalid hex character or malformed numeral
    #[error("invalid hex string")]
    Syntax,

    #[error("hex string without 0x prefix")]
    MissingPrefix,

    /// Byte string body has an odd digit count
    #[error("hex string of odd length")]
    OddLength,

    /// Nothing after the `0x`
    #[error("hex string \"0x\"")]
    EmptyNumber,

    /// Non-zero quantity starting with the digit `0`
    #[error("hex number with leading zero digits")]
    LeadingZero,

    #[error("hex number > 64 bits")]
    Uint64Range,

    /// Exceeds the native pointer width
    #[error("hex number > {} bits", usize::BITS)]
    UintRange,

    #[error("hex number > 256 bits")]
    Big256Range,
}

impl From<hex::FromHexError> for HexError {
    fn from(err: hex::FromHexError) -> Self {
        match err {
            hex::FromHexError::InvalidHexCharacter { .. } => HexError::Syntax,
            // OddLength, and InvalidStringLength which only fixed-size
            // targets produce
            _ => HexError::OddLength,
        }
    }
}

impl HexError {
    /// Translates an integer parse failure, reporting overflow as `range`.
    pub(crate) fn from_parse_int(err: &ParseIntError, range: HexError) -> HexError {
        match err.kind() {
            IntErrorKind::PosOverflow => range,
            _ => HexError::Syntax,
        }
    }
}

#[test]
fn test_error_display() {
    assert_eq!(HexError::EmptyNumber.to_string(), "hex string \"0x\"");
    assert_eq!(HexError::Big256Range.to_string(), "hex number > 256 bits");
    assert_eq!(
        HexError::UintRange.to_string(),
        format!("hex number > {} bits", usize::BITS)
    );
}

#[test]
fn test_from_hex_error() {
    assert_eq!(HexError::from(hex::FromHexError::OddLength), HexError::OddLength);
    assert_eq!(
        HexError::from(hex::FromHexError::InvalidHexCharacter { c: 'z', index: 0 }),
        HexError::Syntax
    );
}

#[test]
fn test_from_parse_int() {
    let overflow = u8::from_str_radix("1ff", 16).unwrap_err();
    assert_eq!(
        HexError::from_parse_int(&overflow, HexError::Uint64Range),
        HexError::Uint64Range
    );
    let bad = u8::from_str_radix("g", 16).unwrap_err();
    assert_eq!(
        HexError::from_parse_int(&bad, HexError::Uint64Range),
        HexError::Syntax
    );
}
