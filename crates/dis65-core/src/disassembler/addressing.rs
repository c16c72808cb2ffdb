use std::{borrow::Cow, fmt};

use serde::{Deserialize, Serialize};
use AddressingMode::*;

use crate::error::ConfigError;

// -------------------------------------------------------------------------------------------------

/// Placeholder in a display template that receives the rendered operand.
pub const TEMPLATE_SLOT: &str = "{}";

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectX,
    IndirectY,
    Relative,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
}

/// How the operand bytes of an instruction are interpreted.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OperandKind {
    None,
    /// A literal byte.
    Value,
    /// A little-endian memory address.
    Address,
    /// A signed displacement from the instruction's own address.
    RelativeAddress,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModeInfo {
    /// Opcode byte plus operand bytes.
    pub size:     u8,
    pub operand:  OperandKind,
    pub template: Option<Cow<'static, str>>,
}

/// Per-mode size and display data, indexed by [`AddressingMode`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModeCatalog {
    modes: [ModeInfo; AddressingMode::COUNT],
}

// -------------------------------------------------------------------------------------------------

const fn mode(size: u8, operand: OperandKind, template: &'static str) -> ModeInfo {
    ModeInfo { size, operand, template: Some(Cow::Borrowed(template)) }
}

const fn no_operand() -> ModeInfo {
    ModeInfo { size: 1, operand: OperandKind::None, template: None }
}

/// Must stay in declaration order of [`AddressingMode`].
const DEFAULT_MODES: [ModeInfo; AddressingMode::COUNT] = [
    /* Implied     */ no_operand(),
    /* Accumulator */ no_operand(),
    /* Immediate   */ mode(2, OperandKind::Value, "#{}"),
    /* Absolute    */ mode(3, OperandKind::Address, "{}"),
    /* AbsoluteX   */ mode(3, OperandKind::Address, "{},X"),
    /* AbsoluteY   */ mode(3, OperandKind::Address, "{},Y"),
    /* Indirect    */ mode(3, OperandKind::Address, "({})"),
    /* IndirectX   */ mode(2, OperandKind::Address, "({},X)"),
    /* IndirectY   */ mode(2, OperandKind::Address, "({}),Y"),
    /* Relative    */ mode(2, OperandKind::RelativeAddress, "{}"),
    /* ZeroPage    */ mode(2, OperandKind::Address, "{}"),
    /* ZeroPageX   */ mode(2, OperandKind::Address, "{},X"),
    /* ZeroPageY   */ mode(2, OperandKind::Address, "{},Y"),
];

// -------------------------------------------------------------------------------------------------

impl AddressingMode {
    pub const COUNT: usize = 13;

    pub const ALL: [Self; Self::COUNT] = [
        Implied,
        Accumulator,
        Immediate,
        Absolute,
        AbsoluteX,
        AbsoluteY,
        Indirect,
        IndirectX,
        IndirectY,
        Relative,
        ZeroPage,
        ZeroPageX,
        ZeroPageY,
    ];

    /// The name used for this mode in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Implied => "implied",
            Accumulator => "accumulator",
            Immediate => "immediate",
            Absolute => "absolute",
            AbsoluteX => "absoluteX",
            AbsoluteY => "absoluteY",
            Indirect => "indirect",
            IndirectX => "indirectX",
            IndirectY => "indirectY",
            Relative => "relative",
            ZeroPage => "zeroPage",
            ZeroPageX => "zeroPageX",
            ZeroPageY => "zeroPageY",
        }
    }
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl ModeInfo {
    /// Checks the size, operand kind and template against each other. `mode` is only used for
    /// error reporting.
    pub fn validate(&self, mode: AddressingMode) -> Result<(), ConfigError> {
        let invalid = |reason| Err(ConfigError::InvalidMode { mode, reason });

        if !(1..=3).contains(&self.size) {
            return invalid("instruction size must be between 1 and 3 bytes");
        }
        match (self.operand, self.size) {
            (OperandKind::None, 1) => {}
            (OperandKind::None, _) => return invalid("a mode without an operand must have size 1"),
            (_, 1) => return invalid("a mode with an operand needs at least one operand byte"),
            (OperandKind::Value | OperandKind::RelativeAddress, 2) => {}
            (OperandKind::Value | OperandKind::RelativeAddress, _) => {
                return invalid("value and relative operands take exactly one byte")
            }
            (OperandKind::Address, _) => {}
        }
        match &self.template {
            Some(template) if template.matches(TEMPLATE_SLOT).count() != 1 => {
                invalid("the display template must contain exactly one `{}` slot")
            }
            None if self.operand != OperandKind::None => invalid("a mode with an operand needs a display template"),
            _ => Ok(()),
        }
    }

    #[inline]
    pub fn operands_size(&self) -> usize {
        self.size as usize - 1
    }

    /// Substitutes `operand` into the display template. Modes without a template render the
    /// operand as-is.
    pub fn render(&self, operand: &str) -> String {
        match &self.template {
            Some(template) => template.replacen(TEMPLATE_SLOT, operand, 1),
            None => operand.to_owned(),
        }
    }
}

impl ModeCatalog {
    #[inline]
    pub fn get(&self, mode: AddressingMode) -> &ModeInfo {
        &self.modes[mode as usize]
    }

    /// Replaces the entry for `mode` after validating it.
    pub fn set(&mut self, mode: AddressingMode, info: ModeInfo) -> Result<(), ConfigError> {
        info.validate(mode)?;
        self.modes[mode as usize] = info;
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = (AddressingMode, &ModeInfo)> + '_ {
        AddressingMode::ALL.into_iter().zip(self.modes.iter())
    }
}

impl Default for ModeCatalog {
    fn default() -> Self {
        Self { modes: DEFAULT_MODES }
    }
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_consistent() {
        let catalog = ModeCatalog::default();
        for (mode, info) in catalog.iter() {
            info.validate(mode).unwrap_or_else(|err| panic!("default entry for {mode} is invalid ({err})"));
        }
    }

    #[test]
    fn default_sizes_match_the_6502() {
        let catalog = ModeCatalog::default();
        let sizes = AddressingMode::ALL.map(|m| catalog.get(m).size);
        assert_eq!(sizes, [1, 1, 2, 3, 3, 3, 3, 2, 2, 2, 2, 2, 2]);
        assert_eq!(catalog.get(Relative).operand, OperandKind::RelativeAddress);
        assert_eq!(catalog.get(ZeroPageY).operand, OperandKind::Address);
        assert_eq!(catalog.get(Accumulator).operand, OperandKind::None);
    }

    #[test]
    fn templates_render_operand() {
        let catalog = ModeCatalog::default();
        assert_eq!(catalog.get(Immediate).render("$05"), "#$05");
        assert_eq!(catalog.get(IndirectY).render("$20"), "($20),Y");
        assert_eq!(catalog.get(Implied).render(""), "");
    }

    #[test]
    fn set_rejects_inconsistent_entries() {
        let mut catalog = ModeCatalog::default();
        let bad_size = ModeInfo { size: 2, operand: OperandKind::None, template: None };
        assert!(catalog.set(Implied, bad_size).is_err());

        let long_branch = ModeInfo { size: 3, operand: OperandKind::RelativeAddress, template: Some("{}".into()) };
        assert!(catalog.set(Relative, long_branch).is_err());

        let no_slot = ModeInfo { size: 3, operand: OperandKind::Address, template: Some("$nope".into()) };
        assert!(catalog.set(Absolute, no_slot).is_err());

        assert_eq!(catalog, ModeCatalog::default());
    }

    #[test]
    fn set_accepts_custom_template() {
        let mut catalog = ModeCatalog::default();
        let info = ModeInfo { size: 3, operand: OperandKind::Address, template: Some("{}, x".into()) };
        catalog.set(AbsoluteX, info).unwrap();
        assert_eq!(catalog.get(AbsoluteX).render("$1234"), "$1234, x");
    }

    #[test]
    fn mode_names_match_serde() {
        for mode in AddressingMode::ALL {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode.name()));
        }
    }
}
