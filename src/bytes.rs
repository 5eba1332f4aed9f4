//! Byte strings as `0x`-prefixed, even-length hex
use crate::error::HexError;
use crate::num;

/// Decodes a `0x` byte string. The empty string `"0x"` is zero bytes.
pub fn decode_bytes(input: &str) -> Result<Vec<u8>, HexError> {
    if input.is_empty() {
        return Err(HexError::EmptyString);
    }
    if !num::has_0x_prefix(input) {
        return Err(HexError::MissingPrefix);
    }
    Ok(hex::decode(&input[2..])?)
}

/// Like `decode_bytes`, but panics on invalid input
pub fn must_decode_bytes(input: &str) -> Vec<u8> {
    decode_bytes(input).unwrap_or_else(|err| panic!("{}", err))
}

/// Encodes `b` as lowercase hex with a `0x` prefix
pub fn encode_bytes(b: &[u8]) -> String {
    let mut enc = String::with_capacity(b.len() * 2 + 2);
    enc.push_str("0x");
    enc.push_str(&hex::encode(b));
    enc
}

#[test]
fn test_decode_bytes() {
    assert_eq!(decode_bytes("0x").unwrap(), Vec::<u8>::new());
    assert_eq!(decode_bytes("0x00").unwrap(), vec![0x00]);
    assert_eq!(decode_bytes("0X0102").unwrap(), vec![0x01, 0x02]);
    assert_eq!(decode_bytes("0xA1b2").unwrap(), vec![0xa1, 0xb2]);
}

#[test]
fn test_decode_bytes_errors() {
    assert_eq!(decode_bytes(""), Err(HexError::EmptyString));
    assert_eq!(decode_bytes("0"), Err(HexError::MissingPrefix));
    assert_eq!(decode_bytes("abcd"), Err(HexError::MissingPrefix));
    assert_eq!(decode_bytes("0xabc"), Err(HexError::OddLength));
    assert_eq!(decode_bytes("0xzz"), Err(HexError::Syntax));
    assert_eq!(decode_bytes("0x0g"), Err(HexError::Syntax));
}

#[test]
fn test_encode_bytes() {
    assert_eq!(encode_bytes(&[]), "0x");
    assert_eq!(encode_bytes(&[0x00]), "0x00");
    assert_eq!(encode_bytes(&[0x01, 0xab, 0xff]), "0x01abff");
}

#[test]
#[should_panic(expected = "hex string of odd length")]
fn test_must_decode_bytes_panics() {
    must_decode_bytes("0x1");
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_bytes_survive_encoding(b in vec(any::<u8>(), 0..128)) {
            let text = encode_bytes(&b);
            prop_assert_eq!(text.len(), b.len() * 2 + 2);
            prop_assert_eq!(decode_bytes(&text).unwrap(), b);
        }
    }
}
