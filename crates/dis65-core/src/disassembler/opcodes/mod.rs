mod data;

use std::fmt;

pub use data::MOS6502_OPCODES;

use crate::{
    disassembler::addressing::{AddressingMode, ModeCatalog, ModeInfo},
    error::ConfigError,
};

// -------------------------------------------------------------------------------------------------

/// Three-letter instruction name, e.g. `LDA`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Mnemonic([u8; 3]);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct OpcodeSpec {
    pub id:       u8,
    pub mnemonic: Mnemonic,
    pub mode:     AddressingMode,
}

/// Maps opcode bytes to instructions. Bytes without an entry cannot be decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OpcodeTable {
    opcodes: [Option<OpcodeSpec>; 0x100],
    modes:   ModeCatalog,
}

// -------------------------------------------------------------------------------------------------

impl Mnemonic {
    pub fn as_str(&self) -> &str {
        // Only ASCII letters get in, see `TryFrom<&str>`.
        std::str::from_utf8(&self.0).unwrap_or("???")
    }
}

impl TryFrom<&str> for Mnemonic {
    type Error = ConfigError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        match name.as_bytes() {
            &[a, b, c] if name.bytes().all(|ch| ch.is_ascii_alphabetic()) => Ok(Self([a, b, c])),
            _ => Err(ConfigError::InvalidMnemonic(name.to_owned())),
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Debug for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl OpcodeSpec {
    pub const fn new(id: u8, mnemonic: [u8; 3], mode: AddressingMode) -> Self {
        Self { id, mnemonic: Mnemonic(mnemonic), mode }
    }
}

impl OpcodeTable {
    /// A table without any opcodes, using `modes` for instruction sizes and display.
    pub fn empty(modes: ModeCatalog) -> Self {
        Self { opcodes: [None; 0x100], modes }
    }

    /// The documented 6502 instruction set with the default addressing mode catalog.
    pub fn mos6502() -> Self {
        let mut table = Self::empty(ModeCatalog::default());
        for &spec in MOS6502_OPCODES {
            table.opcodes[spec.id as usize] = Some(spec);
        }
        table
    }

    pub fn from_specs(specs: impl IntoIterator<Item = OpcodeSpec>, modes: ModeCatalog) -> Result<Self, ConfigError> {
        let mut table = Self::empty(modes);
        for spec in specs {
            table.insert(spec)?;
        }
        Ok(table)
    }

    pub fn insert(&mut self, spec: OpcodeSpec) -> Result<(), ConfigError> {
        let slot = &mut self.opcodes[spec.id as usize];
        if slot.is_some() {
            return Err(ConfigError::DuplicateOpcode(spec.id));
        }
        *slot = Some(spec);
        Ok(())
    }

    #[inline]
    pub fn get(&self, id: u8) -> Option<&OpcodeSpec> {
        self.opcodes[id as usize].as_ref()
    }

    #[inline]
    pub fn modes(&self) -> &ModeCatalog {
        &self.modes
    }

    #[inline]
    pub fn mode_info(&self, mode: AddressingMode) -> &ModeInfo {
        self.modes.get(mode)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OpcodeSpec> + '_ {
        self.opcodes.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl Default for OpcodeTable {
    fn default() -> Self {
        Self::mos6502()
    }
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::disassembler::addressing::AddressingMode::*;

    #[test]
    fn mos6502_table_is_complete() {
        let table = OpcodeTable::mos6502();
        assert_eq!(table.len(), 151);
        assert_eq!(table.len(), MOS6502_OPCODES.len());
    }

    #[test]
    fn lookup() {
        let table = OpcodeTable::mos6502();
        let jmp = table.get(0x4C).unwrap();
        assert_eq!(jmp.mnemonic.as_str(), "JMP");
        assert_eq!(jmp.mode, Absolute);
        assert_eq!(table.get(0x6C).unwrap().mode, Indirect);
        assert_eq!(table.get(0xB6).unwrap().mode, ZeroPageY);
        assert!(table.get(0x02).is_none());
        assert!(table.get(0xFF).is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let specs = [OpcodeSpec::new(0xEA, *b"NOP", Implied), OpcodeSpec::new(0xEA, *b"NOP", Implied)];
        let err = OpcodeTable::from_specs(specs, ModeCatalog::default()).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateOpcode(0xEA)));
    }

    #[test]
    fn mnemonic_validation() {
        assert_eq!(Mnemonic::try_from("lda").unwrap().as_str(), "lda");
        assert!(Mnemonic::try_from("LD").is_err());
        assert!(Mnemonic::try_from("LDAX").is_err());
        assert!(Mnemonic::try_from("L1A").is_err());
        assert_eq!(format!("[{:<5}]", Mnemonic::try_from("BRK").unwrap()), "[BRK  ]");
    }
}
