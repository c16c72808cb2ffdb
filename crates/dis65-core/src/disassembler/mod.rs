pub mod addressing;
pub mod decoder;
pub mod labels;
pub mod listing;
pub mod opcodes;
pub mod token;

use crate::{
    disassembler::{
        decoder::{Decoder, DEFAULT_RAW_RUN_CAP, DEFAULT_START_ADDRESS, MAX_RAW_RUN_CAP},
        labels::{resolve_labels, CrossReferences, LabelTable},
        listing::Listing,
        opcodes::OpcodeTable,
    },
    error::ConfigError,
};

// -------------------------------------------------------------------------------------------------

/// Disassembly settings shared by any number of runs.
#[derive(Copy, Clone, Debug)]
pub struct Disassembler<'a> {
    opcodes:       &'a OpcodeTable,
    start_address: u16,
    raw_run_cap:   usize,
}

// -------------------------------------------------------------------------------------------------

impl<'a> Disassembler<'a> {
    pub fn new(opcodes: &'a OpcodeTable) -> Self {
        Self { opcodes, start_address: DEFAULT_START_ADDRESS, raw_run_cap: DEFAULT_RAW_RUN_CAP }
    }

    /// Address of the first byte of the input.
    #[must_use]
    pub fn with_start_address(mut self, start_address: u16) -> Self {
        self.start_address = start_address;
        self
    }

    /// Maximum number of undecodable bytes grouped onto one line, from 1 to [`MAX_RAW_RUN_CAP`].
    pub fn with_raw_run_cap(mut self, raw_run_cap: usize) -> Result<Self, ConfigError> {
        if !(1..=MAX_RAW_RUN_CAP).contains(&raw_run_cap) {
            return Err(ConfigError::RawRunCapOutOfRange(raw_run_cap));
        }
        self.raw_run_cap = raw_run_cap;
        Ok(self)
    }

    pub fn start_address(&self) -> u16 {
        self.start_address
    }

    pub fn raw_run_cap(&self) -> usize {
        self.raw_run_cap
    }

    /// Decodes all of `data`, names every referenced token boundary that `user_labels` leaves
    /// unnamed and returns the formatted result.
    pub fn disassemble(&self, data: &[u8], user_labels: &LabelTable) -> Listing<'a> {
        log::info!("Disassembling {} bytes from ${:04x}", data.len(), self.start_address);

        let decoder = Decoder::new(data, self.opcodes, self.start_address).with_raw_run_cap(self.raw_run_cap);
        let modes = self.opcodes.modes();
        let mut tokens = Vec::with_capacity(decoder.size_hint().0);
        let mut xrefs = CrossReferences::default();
        for token in decoder {
            xrefs.record(&token, modes);
            tokens.push(token);
        }
        log::debug!(
            "Decoded {} tokens ({} raw runs), {} distinct targets",
            tokens.len(),
            tokens.iter().filter(|t| t.instruction().is_none()).count(),
            xrefs.targeted.len()
        );

        let labels = resolve_labels(&xrefs, user_labels);
        log::info!("Resolved {} labels", labels.len());

        Listing::new(tokens, xrefs, labels, modes, self.raw_run_cap)
    }
}

/// Disassembles `data` loaded at `start_address` with the default raw run limit.
pub fn disassemble<'a>(
    data: &[u8], start_address: u16, opcodes: &'a OpcodeTable, user_labels: &LabelTable,
) -> Listing<'a> {
    Disassembler::new(opcodes).with_start_address(start_address).disassemble(data, user_labels)
}

// -------------------------------------------------------------------------------------------------
