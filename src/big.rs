//! Arbitrary-precision quantities, up to 256 bits on the way in
use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use once_cell::sync::Lazy;

use crate::error::HexError;
use crate::num;

/// One digit of a `BigInt` magnitude. Native width, like a machine register.
pub type Word = usize;

/// 256 bits worth of hex digits
const MAX_DIGITS: usize = 64;

/// How many hex digits fit in one `Word`.
///
/// This is measured rather than derived from `Word::BITS`: a 9 digit value is
/// one nibble too wide for a 32-bit word, so it takes one word on 64-bit
/// targets and two on 32-bit ones. Anything else is a target we can't pack
/// for, and we refuse to go on.
pub static WORD_NIBBLES: Lazy<usize> = Lazy::new(|| {
    let probe = BigInt::from(0xf_ffff_ffffu64);
    let nibbles = match probe.words().len() {
        1 => 16,
        2 => 8,
        n => panic!("weird big word size: a 36-bit value took {} words", n),
    };
    debug!("big words hold {} nibbles", nibbles);
    nibbles
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Minus,
    NoSign,
    Plus,
}

/// A signed integer stored as a sign and a magnitude of `Word`s.
///
/// The magnitude is least significant word first and never has a zero most
/// significant word; zero is the empty magnitude with `Sign::NoSign`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    sign: Sign,
    words: Vec<Word>,
}

impl BigInt {
    /// Makes a BigInt from a sign and little-endian words, trimming high zero
    /// words. A zero magnitude always ends up as `NoSign`, and `NoSign` with a
    /// nonzero magnitude is taken to mean `Plus`.
    pub fn new(sign: Sign, mut words: Vec<Word>) -> BigInt {
        while let Some(&0) = words.last() {
            words.pop();
        }

        let sign = match (sign, words.is_empty()) {
            (_, true) => Sign::NoSign,
            (Sign::NoSign, false) => Sign::Plus,
            (sign, false) => sign,
        };
        BigInt { sign, words }
    }

    pub fn zero() -> BigInt {
        BigInt {
            sign: Sign::NoSign,
            words: Vec::new(),
        }
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// The magnitude, least significant word first
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn is_zero(&self) -> bool {
        self.sign == Sign::NoSign
    }

    /// Lowercase hex of the magnitude with no leading zero digits
    fn magnitude_hex(&self) -> String {
        let mut words = self.words.iter().rev();
        let mut out = match words.next() {
            Some(top) => format!("{:x}", top),
            None => return "0".to_owned(),
        };

        // everything below the top word is zero padded to full width
        let width = *WORD_NIBBLES;
        for w in words {
            out.push_str(&format!("{:0width$x}", w, width = width));
        }
        out
    }
}

impl From<u64> for BigInt {
    fn from(mut n: u64) -> Self {
        let mut words = Vec::new();
        while n != 0 {
            // truncation keeps the low word
            words.push(n as Word);
            n = n.checked_shr(Word::BITS).unwrap_or(0);
        }
        BigInt::new(Sign::Plus, words)
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        let sign = match self.sign {
            Sign::Minus => Sign::Plus,
            Sign::NoSign => Sign::NoSign,
            Sign::Plus => Sign::Minus,
        };
        BigInt { sign, ..self }
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad_integral(self.sign != Sign::Minus, "0x", &self.magnitude_hex())
    }
}

impl FromStr for BigInt {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode_big(s)
    }
}

/// Decodes a `0x` quantity of at most 256 bits.
///
/// Digits are packed from the least significant end, `WORD_NIBBLES` at a
/// time, so every word but the most significant one is full.
pub fn decode_big(input: &str) -> Result<BigInt, HexError> {
    let raw = num::check_number(input)?.as_bytes();
    if raw.len() > MAX_DIGITS {
        return Err(HexError::Big256Range);
    }

    let nibbles = *WORD_NIBBLES;
    // one spare word; normalisation in BigInt::new drops it again
    let mut words: Vec<Word> = vec![0; (raw.len() + nibbles - 1) / nibbles + 1];
    trace!("packing {} digits into {} words", raw.len(), words.len());

    let mut end = raw.len();
    for word in words.iter_mut() {
        let start = end.saturating_sub(nibbles);
        for &digit in &raw[start..end] {
            let nib = num::decode_nibble(digit).ok_or(HexError::Syntax)?;
            *word = *word << 4 | Word::from(nib);
        }
        end = start;
    }

    Ok(BigInt::new(Sign::Plus, words))
}

/// Like `decode_big`, but panics on invalid input
pub fn must_decode_big(input: &str) -> BigInt {
    decode_big(input).unwrap_or_else(|err| panic!("{}", err))
}

/// Encodes a BigInt as a `0x` quantity. Negative values come out as `-0x...`.
pub fn encode_big(bigint: &BigInt) -> String {
    match bigint.sign() {
        Sign::NoSign => "0x0".to_owned(),
        Sign::Plus => format!("0x{}", bigint.magnitude_hex()),
        Sign::Minus => format!("-0x{}", bigint.magnitude_hex()),
    }
}

#[test]
fn test_word_nibbles_matches_word_width() {
    assert_eq!(*WORD_NIBBLES * 4, Word::BITS as usize);
}

#[test]
fn test_new_normalizes() {
    let n = BigInt::new(Sign::Plus, vec![5, 0, 0]);
    assert_eq!(n.words(), &[5]);
    assert_eq!(n.sign(), Sign::Plus);

    let z = BigInt::new(Sign::Minus, vec![0, 0]);
    assert!(z.is_zero());
    assert_eq!(z, BigInt::zero());

    assert_eq!(BigInt::new(Sign::NoSign, vec![1]).sign(), Sign::Plus);
}

#[test]
fn test_from_u64() {
    assert_eq!(BigInt::from(0), BigInt::zero());
    assert_eq!(BigInt::from(26).words(), &[26]);

    let max = BigInt::from(u64::MAX);
    assert_eq!(max.words().len(), 64 / Word::BITS as usize);
    assert_eq!(encode_big(&max), "0xffffffffffffffff");
}

#[test]
fn test_decode_big() {
    assert_eq!(decode_big("0x1a").unwrap(), BigInt::from(26));
    assert_eq!(decode_big("0X1A").unwrap(), BigInt::from(26));
    assert_eq!(
        decode_big("0x123456789abcdef").unwrap(),
        BigInt::from(0x123456789abcdef)
    );

    let zero = decode_big("0x0").unwrap();
    assert!(zero.is_zero());
    assert!(zero.words().is_empty());
}

#[test]
fn test_decode_big_errors() {
    assert_eq!(decode_big(""), Err(HexError::EmptyString));
    assert_eq!(decode_big("abc"), Err(HexError::MissingPrefix));
    assert_eq!(decode_big("0x"), Err(HexError::EmptyNumber));
    assert_eq!(decode_big("0x01"), Err(HexError::LeadingZero));
    assert_eq!(decode_big("0xg"), Err(HexError::Syntax));
    assert_eq!(decode_big("0x1-"), Err(HexError::Syntax));
    // a bad digit in a high word still fails the whole decode
    assert_eq!(
        decode_big("0xz0000000000000000000000"),
        Err(HexError::Syntax)
    );
    assert_eq!(decode_big("0x1\u{e9}"), Err(HexError::Syntax));
}

#[test]
fn test_decode_big_range() {
    let max = format!("0x{}", "f".repeat(64));
    let decoded = decode_big(&max).unwrap();
    assert_eq!(decoded.words().len(), 64 / *WORD_NIBBLES);
    assert!(decoded.words().iter().all(|&w| w == Word::MAX));
    assert_eq!(encode_big(&decoded), max);

    let too_big = format!("0x1{}", "0".repeat(64));
    assert_eq!(decode_big(&too_big), Err(HexError::Big256Range));
}

#[test]
fn test_decode_big_word_boundaries() {
    let per_word = Word::BITS as usize;

    // 2^64: exactly one bit past the first 64 bits of magnitude
    let mut expected = vec![0; 64 / per_word];
    expected.push(1);
    let decoded = decode_big("0x10000000000000000").unwrap();
    assert_eq!(decoded.words(), &expected[..]);

    // digit count an exact multiple of the word width leaves a spare high
    // word that must not survive
    let digits = "8".repeat(*WORD_NIBBLES * 2);
    let decoded = decode_big(&format!("0x{}", digits)).unwrap();
    assert_eq!(decoded.words().len(), 2);
    assert_eq!(encode_big(&decoded), format!("0x{}", digits));
}

#[test]
fn test_encode_big() {
    assert_eq!(encode_big(&BigInt::zero()), "0x0");
    assert_eq!(encode_big(&BigInt::from(26)), "0x1a");
    assert_eq!(encode_big(&-BigInt::from(26)), "-0x1a");
    assert_eq!(encode_big(&-BigInt::zero()), "0x0");

    // low words keep their zero padding
    let n = decode_big("0x100000000000000000000000000000001").unwrap();
    assert_eq!(encode_big(&n), "0x100000000000000000000000000000001");
}

#[test]
fn test_lower_hex() {
    let n = BigInt::from(0xbeef);
    assert_eq!(format!("{:x}", n), "beef");
    assert_eq!(format!("{:#x}", n), encode_big(&n));
    assert_eq!(format!("{:#x}", -n.clone()), "-0xbeef");
    assert_eq!(format!("{:#x}", BigInt::zero()), "0x0");
}

#[test]
fn test_from_str() {
    let n: BigInt = "0xff".parse().unwrap();
    assert_eq!(n, BigInt::from(255));
    assert_eq!("ff".parse::<BigInt>(), Err(HexError::MissingPrefix));
}

#[test]
#[should_panic(expected = "invalid hex string")]
fn test_must_decode_big_panics() {
    must_decode_big("0xnope");
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::collection::vec;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_words_survive_encoding(words in vec(any::<Word>(), 0..=256 / Word::BITS as usize)) {
            let n = BigInt::new(Sign::Plus, words);
            let text = encode_big(&n);
            prop_assert!(!text.starts_with("0x0") || text == "0x0");
            prop_assert_eq!(decode_big(&text).unwrap(), n);
        }

        #[test]
        fn test_text_survives_decoding(ref s in "0x(0|[1-9a-f][0-9a-f]{0,63})") {
            prop_assert_eq!(&encode_big(&decode_big(s).unwrap()), s);
        }
    }
}
