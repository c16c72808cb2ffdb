//! 6502 machine code disassembler.
//!
//! Decodes a flat program image into instructions and runs of undecodable bytes, names every
//! address that is both the start of a decoded token and the target of some operand, and renders
//! the result as an address/hex/mnemonic listing followed by a label index.

pub mod config;
pub mod disassembler;
pub mod error;

pub use crate::{
    disassembler::{
        addressing::{AddressingMode, ModeCatalog, ModeInfo, OperandKind},
        disassemble,
        labels::LabelTable,
        listing::Listing,
        opcodes::OpcodeTable,
        Disassembler,
    },
    error::{ConfigError, LabelError, LabelLineError},
};
