use smallvec::SmallVec;

use crate::disassembler::{
    opcodes::{OpcodeSpec, OpcodeTable},
    token::{Instruction, RawRun, Token},
};

// -------------------------------------------------------------------------------------------------

pub const DEFAULT_START_ADDRESS: u16 = 0x1000;
pub const DEFAULT_RAW_RUN_CAP: usize = 4;
pub const MAX_RAW_RUN_CAP: usize = 64;

/// Splits a byte buffer into instructions and raw runs, front to back.
///
/// The tokens partition the buffer: every byte belongs to exactly one token and tokens come out in
/// buffer order. A decoder cannot be rewound; decode again by creating a new one.
pub struct Decoder<'a> {
    data:        &'a [u8],
    opcodes:     &'a OpcodeTable,
    cursor:      usize,
    address:     u16,
    raw_run_cap: usize,
}

// -------------------------------------------------------------------------------------------------

impl<'a> Decoder<'a> {
    pub fn new(data: &'a [u8], opcodes: &'a OpcodeTable, start_address: u16) -> Self {
        Self { data, opcodes, cursor: 0, address: start_address, raw_run_cap: DEFAULT_RAW_RUN_CAP }
    }

    /// Sets the maximum number of bytes grouped into one raw run, clamped to
    /// `1..=MAX_RAW_RUN_CAP`.
    #[must_use]
    pub fn with_raw_run_cap(mut self, raw_run_cap: usize) -> Self {
        self.raw_run_cap = raw_run_cap.clamp(1, MAX_RAW_RUN_CAP);
        self
    }

    /// Address of the next byte to be decoded.
    pub fn address(&self) -> u16 {
        self.address
    }

    /// Offset into the buffer of the next byte to be decoded.
    pub fn offset(&self) -> usize {
        self.cursor
    }

    /// Returns the opcode at `offset` if a complete instruction starts there.
    fn decodable_at(&self, offset: usize) -> Option<&'a OpcodeSpec> {
        let opcodes: &'a OpcodeTable = self.opcodes;
        let spec = opcodes.get(*self.data.get(offset)?)?;
        let size = opcodes.mode_info(spec.mode).size as usize;
        (self.data.len() - offset >= size).then_some(spec)
    }

    fn decode_instruction(&mut self, spec: &OpcodeSpec) -> Instruction {
        let size = self.opcodes.mode_info(spec.mode).size as usize;
        let operands = self.data[self.cursor + 1..self.cursor + size].iter().copied().collect();
        let instruction = Instruction { address: self.address, opcode: *spec, operands };
        self.advance(size);
        instruction
    }

    fn decode_raw_run(&mut self) -> RawRun {
        let mut bytes = SmallVec::new();
        let address = self.address;
        let start = self.cursor;
        let mut end = start;
        while end < self.data.len() && bytes.len() < self.raw_run_cap {
            if end > start && self.decodable_at(end).is_some() {
                break;
            }
            bytes.push(self.data[end]);
            end += 1;
        }
        self.advance(end - start);
        RawRun { address, bytes }
    }

    fn advance(&mut self, size: usize) {
        self.cursor += size;
        self.address = self.address.wrapping_add(size as u16);
    }
}

impl Iterator for Decoder<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.data.len() {
            return None;
        }
        let token = match self.decodable_at(self.cursor) {
            Some(spec) => Token::Instruction(self.decode_instruction(spec)),
            None => Token::RawRun(self.decode_raw_run()),
        };
        log::trace!("{} at ${:04x}", token.type_name(), token.address());
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.data.len() - self.cursor;
        let widest = self.raw_run_cap.max(3);
        (remaining / widest + usize::from(remaining % widest != 0), Some(remaining))
    }
}

// -------------------------------------------------------------------------------------------------
