mod cli;

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};
use clap::Parser;
use dis65_core::{
    config::{load_label_file, load_opcode_table, LabelFile},
    Disassembler,
    LabelTable,
    Listing,
};
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
};

use crate::cli::Args;

// -------------------------------------------------------------------------------------------------

fn init_logging(level: LevelFilter) -> Result<()> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {t} - {m}{n}")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(level))?;
    log4rs::init_config(config)?;
    Ok(())
}

fn load_labels(path: Option<&Path>) -> Result<LabelTable> {
    let Some(path) = path else {
        return Ok(LabelTable::new());
    };
    let LabelFile { labels, diagnostics } = load_label_file(path)?;
    for diagnostic in &diagnostics {
        log::warn!("{}: {diagnostic}", path.display());
    }
    Ok(labels)
}

fn write_listing(listing: &Listing, sink: impl Write) -> io::Result<()> {
    let mut sink = BufWriter::new(sink);
    listing.write_to(&mut sink)?;
    sink.flush()
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_level()).context("Failed to initialize log4rs")?;

    let opcodes = load_opcode_table(args.opcodes.as_deref(), args.modes.as_deref())?;
    let labels = load_labels(args.labels.as_deref())?;
    let disassembler = Disassembler::new(&opcodes)
        .with_start_address(args.start_address)
        .with_raw_run_cap(usize::try_from(args.raw_run_limit)?)?;

    let data = fs::read(&args.file).with_context(|| format!("Could not read {}", args.file.display()))?;
    let listing = disassembler.disassemble(&data, &labels);

    match &args.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("Could not create {}", path.display()))?;
            write_listing(&listing, file).with_context(|| format!("Could not write {}", path.display()))?;
            log::info!("Listing written to {}", path.display());
        }
        None => write_listing(&listing, io::stdout().lock()).context("Could not write to standard output")?,
    }
    Ok(())
}
