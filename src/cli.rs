use std::path::PathBuf;

use clap::{
    builder::{PathBufValueParser, TypedValueParser},
    ArgAction,
    Parser,
};
use dis65_core::{config::parse_address, disassembler::decoder::MAX_RAW_RUN_CAP};
use log::LevelFilter;

// -------------------------------------------------------------------------------------------------

/// Disassembles a flat 6502 program image into an address/hex/mnemonic listing.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Args {
    /// Program image to disassemble.
    #[arg(value_parser = PathBufValueParser::new().try_map(ensure_existing_file))]
    pub file: PathBuf,

    /// Address of the first byte of FILE, decimal or `0x`-prefixed hexadecimal.
    #[arg(short, long, default_value = "0x1000", value_parser = parse_address)]
    pub start_address: u16,

    /// JSON opcode table to use instead of the built-in 6502 instruction set.
    #[arg(long, value_parser = PathBufValueParser::new().try_map(ensure_existing_file))]
    pub opcodes: Option<PathBuf>,

    /// JSON addressing mode overrides. Requires --opcodes.
    #[arg(long, value_parser = PathBufValueParser::new().try_map(ensure_existing_file))]
    pub modes: Option<PathBuf>,

    /// File of `<label> <address>` lines naming addresses in the listing.
    #[arg(short, long, value_parser = PathBufValueParser::new().try_map(ensure_existing_file))]
    pub labels: Option<PathBuf>,

    /// Maximum number of undecodable bytes shown on one line.
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u64).range(1..=MAX_RAW_RUN_CAP as u64))]
    pub raw_run_limit: u64,

    /// Write the listing here instead of to standard output.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// More log output on stderr, repeatable.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

// -------------------------------------------------------------------------------------------------

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

pub fn ensure_existing_file(path: PathBuf) -> anyhow::Result<PathBuf> {
    if !path.exists() {
        anyhow::bail!("Path does not exist")
    } else if !path.is_file() {
        anyhow::bail!("Path is not a file")
    } else {
        Ok(path)
    }
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_and_verbosity() {
        let file = std::env::current_exe().unwrap();
        let file = file.to_str().unwrap();
        let args = Args::try_parse_from(["dis65", file]).unwrap();
        assert_eq!(args.start_address, 0x1000);
        assert_eq!(args.raw_run_limit, 4);
        assert_eq!(args.log_level(), LevelFilter::Warn);

        let args = Args::try_parse_from(["dis65", file, "-vv", "-s", "1536"]).unwrap();
        assert_eq!(args.start_address, 0x0600);
        assert_eq!(args.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn invalid_arguments() {
        let file = std::env::current_exe().unwrap();
        let file = file.to_str().unwrap();
        assert!(Args::try_parse_from(["dis65", file, "--start-address", "0x10000"]).is_err());
        assert!(Args::try_parse_from(["dis65", file, "--raw-run-limit", "0"]).is_err());
        assert!(Args::try_parse_from(["dis65", file, "--raw-run-limit", "65"]).is_err());
        assert!(Args::try_parse_from(["dis65", file, "--raw-run-limit", "100000"]).is_err());
        assert_eq!(Args::try_parse_from(["dis65", file, "--raw-run-limit", "64"]).unwrap().raw_run_limit, 64);
        assert!(Args::try_parse_from(["dis65", "/this/file/does/not/exist.bin"]).is_err());
    }
}
