#[macro_use]
extern crate log;

mod args;
mod commands;
mod util;

use anyhow::Result;
use args::SubCommand;
use clap::Parser;
use std::io::{self, Write};
use std::process;

fn run(subcmd: SubCommand) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match subcmd {
        SubCommand::DecodeBytes(d) => commands::decode_bytes(&d.input, &mut out)?,
        SubCommand::EncodeBytes(e) => commands::encode_bytes(&e.text, &mut out)?,
        SubCommand::DecodeUint64(d) => commands::decode_uint64(&d.input, &mut out)?,
        SubCommand::EncodeUint64(e) => commands::encode_uint64(e.value, &mut out)?,
        SubCommand::DecodeBig(d) => commands::decode_big(&d.input, d.output, &mut out)?,
    }
    out.flush()?;
    Ok(())
}

fn main() {
    let opts = args::Opts::parse();

    stderrlog::new()
        .module(module_path!())
        .quiet(opts.quiet)
        .verbosity(opts.verbose as usize)
        .init()
        .expect("logger was already initialized");

    if let Err(e) = run(opts.subcmd) {
        if !opts.quiet {
            eprintln!("error: {:#}", e);
        }
        process::exit(1);
    }
}
