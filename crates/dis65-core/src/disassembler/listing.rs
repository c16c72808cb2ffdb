use std::{
    fmt::{self, Display, Formatter},
    io,
};

use itertools::Itertools;

use crate::disassembler::{
    addressing::ModeCatalog,
    decoder::MAX_RAW_RUN_CAP,
    labels::{CrossReferences, LabelTable},
    token::{Instruction, Operand, Token},
};

// -------------------------------------------------------------------------------------------------

pub const LABELS_HEADER: &str = "Labels:";

const MIN_LABEL_COLUMN: usize = 8;
const LABEL_INDEX_INDENT: &str = "      ";

/// The rendered result of one disassembly: decoded tokens, the addresses they reference and the
/// final label table.
#[derive(Clone, Debug)]
pub struct Listing<'m> {
    tokens: Vec<Token>,
    xrefs:  CrossReferences,
    labels: LabelTable,
    modes:  &'m ModeCatalog,

    label_column: usize,
    hex_column:   usize,
}

// -------------------------------------------------------------------------------------------------

impl<'m> Listing<'m> {
    pub fn new(
        tokens: Vec<Token>, xrefs: CrossReferences, labels: LabelTable, modes: &'m ModeCatalog, raw_run_cap: usize,
    ) -> Self {
        let label_column = (labels.longest_name() + 2).max(MIN_LABEL_COLUMN);
        // "xx " per byte, minus the trailing space. Three bytes is the longest 6502 instruction.
        let hex_column = raw_run_cap.clamp(3, MAX_RAW_RUN_CAP) * 3 - 1;
        Self { tokens, xrefs, labels, modes, label_column, hex_column }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn cross_references(&self) -> &CrossReferences {
        &self.xrefs
    }

    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    /// Every line of the report, without line terminators.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        let index = if self.labels.is_empty() {
            Vec::new()
        } else {
            let entries = self
                .labels
                .sorted_by_name()
                .into_iter()
                .map(|(name, address)| format!("{LABEL_INDEX_INDENT}{name}: ${address:04x}"));
            [String::new(), LABELS_HEADER.to_owned()].into_iter().chain(entries).collect()
        };
        self.tokens.iter().map(|token| self.token_line(token)).chain(index)
    }

    pub fn write_to<W: io::Write>(&self, mut sink: W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(sink, "{line}")?;
        }
        Ok(())
    }

    pub fn token_line(&self, token: &Token) -> String {
        let label = self.labels.get(token.address()).map(|name| format!("{name}:")).unwrap_or_default();
        let hex = token.bytes().iter().map(|byte| format!("{byte:02x}")).join(" ");
        let mut line = format!(
            "{label:<label_column$}{address:04x}: {hex:<hex_column$}",
            address = token.address(),
            label_column = self.label_column,
            hex_column = self.hex_column,
        );
        if let Token::Instruction(instruction) = token {
            line.push(' ');
            line.push_str(instruction.opcode.mnemonic.as_str());
            if let Some(operand) = self.operand_text(instruction) {
                line.push(' ');
                line.push_str(&operand);
            }
        }

        line.truncate(line.trim_end().len());
        line
    }

    /// Renders the operand through its mode's template, replacing addresses with labels where one
    /// exists.
    pub fn operand_text(&self, instruction: &Instruction) -> Option<String> {
        let text = match instruction.operand(self.modes) {
            Operand::None => return None,
            Operand::Value(value) => format!("${value:02x}"),
            Operand::Address { address, width } => match self.labels.get(address) {
                Some(name) => name.to_owned(),
                None if width == 1 => format!("${address:02x}"),
                None => format!("${address:04x}"),
            },
            Operand::Branch(address) => match self.labels.get(address) {
                Some(name) => name.to_owned(),
                None => format!("${address:04x}"),
            },
        };
        Some(self.modes.get(instruction.opcode.mode).render(&text))
    }
}

impl Display for Listing<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

// -------------------------------------------------------------------------------------------------
