use std::iter;

use smallvec::SmallVec;

use crate::disassembler::{
    addressing::{ModeCatalog, OperandKind},
    opcodes::OpcodeSpec,
};

// -------------------------------------------------------------------------------------------------

/// One segment of the decoded byte stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Instruction(Instruction),
    RawRun(RawRun),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    pub address:  u16,
    pub opcode:   OpcodeSpec,
    // Length is the mode's size minus the opcode byte.
    pub operands: SmallVec<[u8; 2]>,
}

/// Consecutive bytes that could not be decoded as an instruction where they start.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRun {
    pub address: u16,
    pub bytes:   SmallVec<[u8; 4]>,
}

/// An instruction operand, resolved but not yet formatted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    None,
    Value(u8),
    /// `width` is the number of operand bytes the address was assembled from.
    Address { address: u16, width: usize },
    Branch(u16),
}

// -------------------------------------------------------------------------------------------------

impl Token {
    pub fn address(&self) -> u16 {
        match self {
            Self::Instruction(i) => i.address,
            Self::RawRun(r) => r.address,
        }
    }

    /// Number of input bytes covered by this token.
    pub fn len(&self) -> usize {
        match self {
            Self::Instruction(i) => i.size(),
            Self::RawRun(r) => r.bytes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every input byte covered by this token, in order.
    pub fn bytes(&self) -> SmallVec<[u8; 4]> {
        match self {
            Self::Instruction(i) => i.bytes().collect(),
            Self::RawRun(r) => r.bytes.clone(),
        }
    }

    pub fn instruction(&self) -> Option<&Instruction> {
        match self {
            Self::Instruction(i) => Some(i),
            Self::RawRun(_) => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Instruction(_) => "Instruction",
            Self::RawRun(_) => "Raw run",
        }
    }
}

impl Instruction {
    #[inline]
    pub fn size(&self) -> usize {
        1 + self.operands.len()
    }

    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        iter::once(self.opcode.id).chain(self.operands.iter().copied())
    }

    pub fn operand(&self, modes: &ModeCatalog) -> Operand {
        let Some(&low) = self.operands.first() else {
            return Operand::None;
        };
        match modes.get(self.opcode.mode).operand {
            OperandKind::None => Operand::None,
            OperandKind::Value => Operand::Value(low),
            OperandKind::Address => {
                let high = self.operands.get(1).copied().unwrap_or(0);
                Operand::Address { address: u16::from_le_bytes([low, high]), width: self.operands.len() }
            }
            OperandKind::RelativeAddress => Operand::Branch(branch_target(self.address, low)),
        }
    }

    /// The address this instruction refers to, if its operand is an address or a branch.
    pub fn target(&self, modes: &ModeCatalog) -> Option<u16> {
        match self.operand(modes) {
            Operand::Address { address, .. } | Operand::Branch(address) => Some(address),
            Operand::None | Operand::Value(_) => None,
        }
    }
}

/// Resolves an 8-bit signed displacement against the address of the branch instruction itself.
/// The displacement counts from the end of the 2-byte instruction.
pub fn branch_target(origin: u16, offset: u8) -> u16 {
    // u8->i8 for the sign, i8->u16 sign-extends.
    origin.wrapping_add(2).wrapping_add(offset as i8 as u16)
}

// -------------------------------------------------------------------------------------------------
