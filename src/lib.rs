//! Hex encoding with a `0x` prefix.
//!
//! Byte strings encode as two lowercase hex digits per byte, so they are
//! always of even length, and the empty byte string is `"0x"`.
//!
//! Quantities (integers) encode with the fewest digits possible: no leading
//! zero digits, so the length may be odd, and zero is `"0x0"`. Decoding is
//! strict about this and rejects anything that is not the canonical form,
//! apart from accepting either case for the digits and the `x`.
//!
//! ```
//! use hexutil::{decode_big, encode_big, encode_bytes, HexError};
//!
//! assert_eq!(encode_bytes(b"hi"), "0x6869");
//! let n = decode_big("0x1a")?;
//! assert_eq!(encode_big(&n), "0x1a");
//! assert_eq!(decode_big("0x01"), Err(HexError::LeadingZero));
//! # Ok::<(), HexError>(())
//! ```
#[macro_use]
extern crate log;

pub mod big;
pub mod bytes;
pub mod error;
mod num;
pub mod uint;

pub use big::{decode_big, encode_big, must_decode_big, BigInt, Sign, Word};
pub use bytes::{decode_bytes, encode_bytes, must_decode_bytes};
pub use error::HexError;
pub use uint::{
    decode_uint, decode_uint64, encode_uint, encode_uint64, must_decode_uint, must_decode_uint64,
};
