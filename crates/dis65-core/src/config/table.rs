use std::{borrow::Cow, collections::BTreeMap, path::Path};

use serde::Deserialize;

use crate::{
    config::{number::parse_byte, read_text},
    disassembler::{
        addressing::{AddressingMode, ModeCatalog, ModeInfo, OperandKind},
        opcodes::{Mnemonic, OpcodeSpec, OpcodeTable},
    },
    error::ConfigError,
};

// -------------------------------------------------------------------------------------------------

/// Opcode ids may be written as JSON numbers or as `"0x4c"`-style strings.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
enum ByteJson {
    Number(u8),
    Text(String),
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OpcodeJson {
    id:       ByteJson,
    mnemonic: String,
    mode:     AddressingMode,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModeJson {
    size:     u8,
    operand:  OperandKind,
    #[serde(default)]
    template: Option<String>,
}

// -------------------------------------------------------------------------------------------------

impl TryFrom<ByteJson> for u8 {
    type Error = ConfigError;

    fn try_from(json: ByteJson) -> Result<Self, Self::Error> {
        match json {
            ByteJson::Number(id) => Ok(id),
            ByteJson::Text(text) => parse_byte(&text).map_err(|_| ConfigError::InvalidOpcodeId(text)),
        }
    }
}

impl TryFrom<OpcodeJson> for OpcodeSpec {
    type Error = ConfigError;

    fn try_from(json: OpcodeJson) -> Result<Self, Self::Error> {
        Ok(Self { id: json.id.try_into()?, mnemonic: Mnemonic::try_from(json.mnemonic.as_str())?, mode: json.mode })
    }
}

impl From<ModeJson> for ModeInfo {
    fn from(json: ModeJson) -> Self {
        Self { size: json.size, operand: json.operand, template: json.template.map(Cow::Owned) }
    }
}

// -------------------------------------------------------------------------------------------------

/// Builds an opcode table from a JSON array of `{ "id", "mnemonic", "mode" }` objects.
pub fn opcode_table_from_json(text: &str, modes: ModeCatalog) -> Result<OpcodeTable, ConfigError> {
    let entries = serde_json::from_str::<Vec<OpcodeJson>>(text)
        .map_err(|source| ConfigError::Json { what: "opcode table", source })?;
    let specs = entries.into_iter().map(OpcodeSpec::try_from).collect::<Result<Vec<_>, _>>()?;
    OpcodeTable::from_specs(specs, modes)
}

/// Replaces catalog entries with those in a JSON object keyed by mode name. Nothing is changed if
/// any entry is invalid.
pub fn apply_mode_overrides_from_json(text: &str, modes: &mut ModeCatalog) -> Result<(), ConfigError> {
    let overrides = serde_json::from_str::<BTreeMap<AddressingMode, ModeJson>>(text)
        .map_err(|source| ConfigError::Json { what: "addressing mode overrides", source })?;
    let mut updated = modes.clone();
    for (mode, json) in overrides {
        log::debug!("Overriding addressing mode {mode}");
        updated.set(mode, json.into())?;
    }
    *modes = updated;
    Ok(())
}

/// Loads the opcode table for a run. Without files the built-in 6502 table is used. Mode overrides
/// only apply to a table loaded from a file.
pub fn load_opcode_table(opcodes: Option<&Path>, modes: Option<&Path>) -> Result<OpcodeTable, ConfigError> {
    let Some(opcodes) = opcodes else {
        return match modes {
            Some(_) => Err(ConfigError::ModesWithoutOpcodes),
            None => Ok(OpcodeTable::mos6502()),
        };
    };

    let mut catalog = ModeCatalog::default();
    if let Some(modes) = modes {
        log::info!("Loading addressing mode overrides from {}", modes.display());
        apply_mode_overrides_from_json(&read_text(modes)?, &mut catalog)?;
    }
    log::info!("Loading opcode table from {}", opcodes.display());
    let table = opcode_table_from_json(&read_text(opcodes)?, catalog)?;
    log::debug!("Loaded {} opcodes", table.len());
    Ok(table)
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("dis65-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn opcode_entries() {
        let json = r#"[
            { "id": 234, "mnemonic": "NOP", "mode": "implied" },
            { "id": "0x4C", "mnemonic": "JMP", "mode": "absolute" },
            { "id": "0xb1", "mnemonic": "LDA", "mode": "indirectY" }
        ]"#;
        let table = opcode_table_from_json(json, ModeCatalog::default()).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.get(0xEA).unwrap().mnemonic.as_str(), "NOP");
        assert_eq!(table.get(0x4C).unwrap().mode, AddressingMode::Absolute);
        assert_eq!(table.get(0xB1).unwrap().mode, AddressingMode::IndirectY);
        assert!(table.get(0xA9).is_none());
    }

    #[test]
    fn invalid_opcode_entries() {
        let duplicate = r#"[{ "id": 1, "mnemonic": "AAA", "mode": "implied" },
                            { "id": "0x01", "mnemonic": "BBB", "mode": "implied" }]"#;
        assert!(matches!(
            opcode_table_from_json(duplicate, ModeCatalog::default()),
            Err(ConfigError::DuplicateOpcode(0x01))
        ));

        let bad_id = r#"[{ "id": "0x100", "mnemonic": "AAA", "mode": "implied" }]"#;
        assert!(matches!(
            opcode_table_from_json(bad_id, ModeCatalog::default()),
            Err(ConfigError::InvalidOpcodeId(id)) if id == "0x100"
        ));

        let bad_mnemonic = r#"[{ "id": 1, "mnemonic": "LDAX", "mode": "implied" }]"#;
        assert!(matches!(
            opcode_table_from_json(bad_mnemonic, ModeCatalog::default()),
            Err(ConfigError::InvalidMnemonic(_))
        ));

        let bad_mode = r#"[{ "id": 1, "mnemonic": "AAA", "mode": "longIndirect" }]"#;
        assert!(matches!(
            opcode_table_from_json(bad_mode, ModeCatalog::default()),
            Err(ConfigError::Json { .. })
        ));
    }

    #[test]
    fn mode_overrides() {
        let mut modes = ModeCatalog::default();
        let json = r##"{
            "immediate": { "size": 2, "operand": "value", "template": "#<{}>" },
            "zeroPage": { "size": 2, "operand": "address", "template": "<{}" }
        }"##;
        apply_mode_overrides_from_json(json, &mut modes).unwrap();
        assert_eq!(modes.get(AddressingMode::Immediate).render("$05"), "#<$05>");
        assert_eq!(modes.get(AddressingMode::ZeroPage).render("$80"), "<$80");
        assert_eq!(modes.get(AddressingMode::Absolute), ModeCatalog::default().get(AddressingMode::Absolute));
    }

    #[test]
    fn invalid_mode_overrides_change_nothing() {
        let mut modes = ModeCatalog::default();
        let json = r##"{
            "absolute": { "size": 3, "operand": "address", "template": "[{}]" },
            "immediate": { "size": 2, "operand": "value", "template": "#" }
        }"##;
        assert!(matches!(
            apply_mode_overrides_from_json(json, &mut modes),
            Err(ConfigError::InvalidMode { mode: AddressingMode::Immediate, .. })
        ));
        assert_eq!(modes, ModeCatalog::default());

        let unknown_field = r#"{ "implied": { "size": 1, "operand": "none", "width": 3 } }"#;
        assert!(matches!(apply_mode_overrides_from_json(unknown_field, &mut modes), Err(ConfigError::Json { .. })));
    }

    #[test]
    fn loading_files() {
        assert_eq!(load_opcode_table(None, None).unwrap(), OpcodeTable::mos6502());
        assert!(matches!(
            load_opcode_table(None, Some(Path::new("modes.json"))),
            Err(ConfigError::ModesWithoutOpcodes)
        ));

        let missing = std::env::temp_dir().join("dis65-this-file-does-not-exist.json");
        assert!(matches!(
            load_opcode_table(Some(&missing), None),
            Err(ConfigError::Io { path, .. }) if path == missing
        ));

        let opcodes = temp_file("opcodes.json", r#"[{ "id": "0xa9", "mnemonic": "LDA", "mode": "immediate" }]"#);
        let modes = temp_file("modes.json", r#"{ "immediate": { "size": 2, "operand": "value", "template": "={}" } }"#);
        let table = load_opcode_table(Some(&opcodes), Some(&modes)).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.mode_info(AddressingMode::Immediate).render("$05"), "=$05");
        fs::remove_file(opcodes).unwrap();
        fs::remove_file(modes).unwrap();
    }
}
