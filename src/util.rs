use std::ascii;
use std::fmt;

/// Displays bytes that may contain invalid UTF-8 as an escaped byte string
/// literal, `b"..."`
pub struct ByteLiteral<'a>(pub &'a [u8]);

impl fmt::Display for ByteLiteral<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "b\"{}\"", to_bytes_literal(self.0))
    }
}

/// Escapes a byte string that may contain invalid UTF-8
pub(crate) fn to_bytes_literal(s: &[u8]) -> String {
    let mut res = String::new();
    for &c in s {
        res.extend(ascii::escape_default(c).map(|b| b as char));
    }
    res
}

#[test]
fn test_byte_literal() {
    assert_eq!(format!("{}", ByteLiteral(b"hi")), "b\"hi\"");
    assert_eq!(format!("{}", ByteLiteral(&[0x00, 0xff])), "b\"\\x00\\xff\"");
    assert_eq!(format!("{}", ByteLiteral(b"\"")), "b\"\\\"\"");
    assert_eq!(format!("{}", ByteLiteral(&[])), "b\"\"");
}
