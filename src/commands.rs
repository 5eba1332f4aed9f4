use anyhow::{Context, Result};
use std::io::Write;

use hexutil::big::WORD_NIBBLES;
use hexutil::encode_big;

use crate::args::OutputType;
use crate::util::ByteLiteral;

/// prints the bytes behind a 0x byte string as an escaped literal
pub fn decode_bytes(input: &str, out: &mut impl Write) -> Result<()> {
    let decoded = hexutil::decode_bytes(input)
        .with_context(|| format!("failed to decode {:?} as a byte string", input))?;
    debug!("decoded {} bytes", decoded.len());
    writeln!(out, "{}", ByteLiteral(&decoded))?;
    Ok(())
}

/// encodes the UTF-8 bytes of `text`
pub fn encode_bytes(text: &str, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", hexutil::encode_bytes(text.as_bytes()))?;
    Ok(())
}

/// prints a 0x quantity in decimal
pub fn decode_uint64(input: &str, out: &mut impl Write) -> Result<()> {
    let n = hexutil::decode_uint64(input)
        .with_context(|| format!("failed to decode {:?} as a 64-bit quantity", input))?;
    writeln!(out, "{}", n)?;
    Ok(())
}

pub fn encode_uint64(value: u64, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", hexutil::encode_uint64(value))?;
    Ok(())
}

/// decodes a big quantity and shows it in the requested form
pub fn decode_big(input: &str, output: OutputType, out: &mut impl Write) -> Result<()> {
    let n = hexutil::decode_big(input)
        .with_context(|| format!("failed to decode {:?} as a 256-bit quantity", input))?;
    debug!("decoded into {} words", n.words().len());

    match output {
        OutputType::Canonical => {
            writeln!(out, "{}", encode_big(&n))?;
        }
        OutputType::Words => {
            // zero has no words, so prints nothing
            let width = *WORD_NIBBLES + 2;
            for w in n.words() {
                writeln!(out, "{:#0width$x}", w, width = width)?;
            }
        }
        OutputType::Debug => {
            writeln!(out, "{:#?}", n)?;
        }
    }
    Ok(())
}

#[cfg(test)]
fn run_to_string(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> Result<String> {
    let mut out = Vec::new();
    f(&mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_decode_bytes_command() {
    let s = run_to_string(|out| decode_bytes("0x686900ff", out)).unwrap();
    assert_eq!(s, "b\"hi\\x00\\xff\"\n");

    let err = run_to_string(|out| decode_bytes("0x123", out)).unwrap_err();
    assert_eq!(
        format!("{:#}", err),
        "failed to decode \"0x123\" as a byte string: hex string of odd length"
    );
}

#[test]
fn test_encode_bytes_command() {
    let s = run_to_string(|out| encode_bytes("hi", out)).unwrap();
    assert_eq!(s, "0x6869\n");
    let s = run_to_string(|out| encode_bytes("", out)).unwrap();
    assert_eq!(s, "0x\n");
}

#[test]
fn test_uint64_commands() {
    let s = run_to_string(|out| decode_uint64("0xff", out)).unwrap();
    assert_eq!(s, "255\n");
    let s = run_to_string(|out| encode_uint64(255, out)).unwrap();
    assert_eq!(s, "0xff\n");
    assert!(run_to_string(|out| decode_uint64("0x00", out)).is_err());
}

#[test]
fn test_decode_big_command() {
    let s = run_to_string(|out| decode_big("0XABC", OutputType::Canonical, out)).unwrap();
    assert_eq!(s, "0xabc\n");

    let s = run_to_string(|out| decode_big("0x1a", OutputType::Words, out)).unwrap();
    assert_eq!(s, format!("0x{}1a\n", "0".repeat(*WORD_NIBBLES - 2)));

    let s = run_to_string(|out| decode_big("0x0", OutputType::Words, out)).unwrap();
    assert_eq!(s, "");

    let err = run_to_string(|out| decode_big("0x", OutputType::Debug, out)).unwrap_err();
    assert!(format!("{:#}", err).ends_with("hex string \"0x\""));
}
