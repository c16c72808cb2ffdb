use std::path::Path;

use crate::{
    config::{number::parse_address, read_text},
    disassembler::labels::LabelTable,
    error::{ConfigError, LabelError, LabelLineError},
};

// -------------------------------------------------------------------------------------------------

/// User labels read from a `<label> <address>` per line file, plus every line that was rejected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelFile {
    pub labels:      LabelTable,
    pub diagnostics: Vec<LabelLineError>,
}

// -------------------------------------------------------------------------------------------------

/// Never fails as a whole; malformed lines end up in `diagnostics`.
pub fn parse_label_file(text: &str) -> LabelFile {
    let mut file = LabelFile::default();
    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = if let Some(comment) = line.find(';') { &line[..comment] } else { line };
        let mut fields = line.split_whitespace();
        let (name, address) = match (fields.next(), fields.next()) {
            (None, _) => continue,
            (Some(_), None) => {
                file.diagnostics.push(LabelLineError::MissingFields { line: line_number });
                continue;
            }
            (Some(name), Some(address)) => (name, address),
        };

        let Ok(address) = parse_address(address) else {
            file.diagnostics.push(LabelLineError::InvalidAddress { line: line_number, text: address.to_owned() });
            continue;
        };
        match file.labels.insert(address, name) {
            Ok(Some(previous)) if previous != name => {
                file.diagnostics.push(LabelLineError::Relabelled { line: line_number, address, previous });
            }
            Ok(_) => {}
            Err(LabelError::NameTaken { name, existing }) => {
                file.diagnostics.push(LabelLineError::DuplicateName { line: line_number, name, existing });
            }
        }
    }
    log::debug!("Parsed {} labels, {} problems", file.labels.len(), file.diagnostics.len());
    file
}

pub fn load_label_file(path: &Path) -> Result<LabelFile, ConfigError> {
    log::info!("Loading labels from {}", path.display());
    Ok(parse_label_file(&read_text(path)?))
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_comments() {
        let file = parse_label_file(
            "; kernal entry points\n\
             CHROUT 0xFFD2\n\
             \n\
             screen   1024   ; default screen RAM\n\
             reset 0xfffc extra fields\n",
        );
        assert!(file.diagnostics.is_empty());
        assert_eq!(file.labels.iter().collect::<Vec<_>>(), [(0x0400, "screen"), (0xFFD2, "CHROUT"), (0xFFFC, "reset")]);
    }

    #[test]
    fn malformed_lines_are_reported_and_skipped() {
        let file = parse_label_file(
            "start 0x1000\n\
             lonely\n\
             bad $2000\n\
             start 0x3000\n\
             main 0x1000\n\
             start 0x4000 ; still taken\n",
        );
        assert_eq!(file.diagnostics, [
            LabelLineError::MissingFields { line: 2 },
            LabelLineError::InvalidAddress { line: 3, text: "$2000".into() },
            LabelLineError::DuplicateName { line: 4, name: "start".into(), existing: 0x1000 },
            LabelLineError::Relabelled { line: 5, address: 0x1000, previous: "start".into() },
        ]);
        // Relabelling $1000 on line 5 frees "start" for line 6.
        assert_eq!(file.labels.get(0x1000), Some("main"));
        assert_eq!(file.labels.address_of("start"), Some(0x4000));
        assert_eq!(file.labels.get(0x3000), None);
    }

    #[test]
    fn duplicate_names_keep_the_first_binding() {
        let file = parse_label_file("loop 0x1000\nloop 0x2000\nloop 0x1000\n");
        assert_eq!(file.diagnostics, [LabelLineError::DuplicateName {
            line:     2,
            name:     "loop".into(),
            existing: 0x1000,
        }]);
        assert_eq!(file.diagnostics[0].line(), 2);
        assert_eq!(file.labels.len(), 1);
    }

    #[test]
    fn missing_file() {
        let path = std::env::temp_dir().join("dis65-no-such-labels.txt");
        assert!(matches!(load_label_file(&path), Err(ConfigError::Io { .. })));
    }
}
