use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(version, author = "lf", about = "0x-prefixed hex encoder and decoder")]
pub(crate) struct Opts {
    /// Log more. Repeat for even more (-vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub(crate) verbose: u8,

    /// Log nothing, not even errors
    #[arg(short, long, global = true)]
    pub(crate) quiet: bool,

    #[command(subcommand)]
    pub(crate) subcmd: SubCommand,
}

#[derive(Subcommand)]
pub(crate) enum SubCommand {
    /// 📦 prints the bytes behind a 0x byte string
    DecodeBytes(DecodeBytes),

    /// 📦 encodes the UTF-8 bytes of some text as a 0x byte string
    EncodeBytes(EncodeBytes),

    /// 🔢 decodes a 0x quantity into a 64-bit integer
    DecodeUint64(DecodeUint64),

    /// 🔢 encodes a 64-bit integer as a 0x quantity
    EncodeUint64(EncodeUint64),

    /// 🐘 decodes a 0x quantity of up to 256 bits
    DecodeBig(DecodeBig),
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputType {
    /// re-encoded in canonical form
    Canonical,
    /// one line per word, least significant first
    Words,
    Debug,
}

#[derive(Args)]
pub(crate) struct DecodeBytes {
    #[arg(index = 1)]
    pub(crate) input: String,
}

#[derive(Args)]
pub(crate) struct EncodeBytes {
    #[arg(index = 1)]
    pub(crate) text: String,
}

#[derive(Args)]
pub(crate) struct DecodeUint64 {
    #[arg(index = 1)]
    pub(crate) input: String,
}

#[derive(Args)]
pub(crate) struct EncodeUint64 {
    /// decimal value to encode
    #[arg(index = 1)]
    pub(crate) value: u64,
}

#[derive(Args)]
pub(crate) struct DecodeBig {
    #[arg(index = 1)]
    pub(crate) input: String,

    #[arg(long, short = 'o', value_enum, ignore_case = true, default_value_t = OutputType::Canonical)]
    pub(crate) output: OutputType,
}
