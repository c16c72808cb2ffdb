use std::{io, path::PathBuf};

use thiserror::Error;

use crate::disassembler::{addressing::AddressingMode, decoder::MAX_RAW_RUN_CAP};

// -------------------------------------------------------------------------------------------------

/// Fatal problems with the configuration of a run. All of them are raised before decoding starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to parse {0:?} as a number (expected decimal or `0x`-prefixed hexadecimal)")]
    InvalidNumber(String),
    #[error("An addressing mode override file was supplied without an opcode table file")]
    ModesWithoutOpcodes,
    #[error("Could not read {}:\n- {source}", path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed {what}:\n- {source}")]
    Json {
        what:   &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid override for addressing mode {mode}: {reason}")]
    InvalidMode { mode: AddressingMode, reason: &'static str },
    #[error("Invalid opcode id {0:?}")]
    InvalidOpcodeId(String),
    #[error("Invalid mnemonic {0:?} (expected exactly three ASCII letters)")]
    InvalidMnemonic(String),
    #[error("Opcode ${0:02x} is defined more than once")]
    DuplicateOpcode(u8),
    #[error("Raw run limit of {0} bytes is out of range (expected 1 to {max})", max = MAX_RAW_RUN_CAP)]
    RawRunCapOutOfRange(usize),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LabelError {
    #[error("Label {name:?} is already bound to ${existing:04x}")]
    NameTaken { name: String, existing: u16 },
}

/// Recoverable problems found while reading a label file. The offending line is skipped unless
/// stated otherwise.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LabelLineError {
    #[error("Unable to parse line {line}: expected `<label> <address>`")]
    MissingFields { line: usize },
    #[error("Unable to parse {text:?} as an address, on line {line}")]
    InvalidAddress { line: usize, text: String },
    #[error("Label {name:?} on line {line} is already bound to ${existing:04x}")]
    DuplicateName { line: usize, name: String, existing: u16 },
    /// The new label still replaces the old one.
    #[error("Address ${address:04x} on line {line} was already labelled {previous:?}")]
    Relabelled { line: usize, address: u16, previous: String },
}

// -------------------------------------------------------------------------------------------------

impl LabelLineError {
    pub fn line(&self) -> usize {
        use LabelLineError::*;
        match self {
            MissingFields { line } => *line,
            InvalidAddress { line, .. } | DuplicateName { line, .. } | Relabelled { line, .. } => *line,
        }
    }
}
