//! Loading of run settings from user-supplied text and files.

pub mod labels;
pub mod number;
pub mod table;

use std::{fs, path::Path};

pub use self::{
    labels::{load_label_file, parse_label_file, LabelFile},
    number::{parse_address, parse_byte, parse_number},
    table::{apply_mode_overrides_from_json, load_opcode_table, opcode_table_from_json},
};
use crate::error::ConfigError;

// -------------------------------------------------------------------------------------------------

pub(crate) fn read_text(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })
}
