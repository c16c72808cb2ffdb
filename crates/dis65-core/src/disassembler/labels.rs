use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::{
    disassembler::{addressing::ModeCatalog, token::Token},
    error::LabelError,
};

// -------------------------------------------------------------------------------------------------

/// Address to label bindings. Both addresses and names are unique within a table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelTable {
    by_address: BTreeMap<u16, String>,
    by_name:    HashMap<String, u16>,
}

/// Addresses collected from a complete token sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CrossReferences {
    /// Addresses where some token begins.
    pub targetable: BTreeSet<u16>,
    /// Addresses some instruction operand points at.
    pub targeted:   BTreeSet<u16>,
}

// -------------------------------------------------------------------------------------------------

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `address`, returning the label the address had before.
    ///
    /// Fails without changing the table if `name` is bound to a different address.
    pub fn insert(&mut self, address: u16, name: impl Into<String>) -> Result<Option<String>, LabelError> {
        let name = name.into();
        match self.by_name.get(&name) {
            Some(&existing) if existing == address => return Ok(Some(name)),
            Some(&existing) => return Err(LabelError::NameTaken { name, existing }),
            None => {}
        }
        let previous = self.by_address.insert(address, name.clone());
        if let Some(previous) = &previous {
            self.by_name.remove(previous);
        }
        self.by_name.insert(name, address);
        Ok(previous)
    }

    pub fn get(&self, address: u16) -> Option<&str> {
        self.by_address.get(&address).map(String::as_str)
    }

    pub fn address_of(&self, name: &str) -> Option<u16> {
        self.by_name.get(name).copied()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.by_address.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_address.is_empty()
    }

    /// Bindings in ascending address order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &str)> + '_ {
        self.by_address.iter().map(|(&address, name)| (address, name.as_str()))
    }

    /// Bindings in ascending name order.
    pub fn sorted_by_name(&self) -> Vec<(&str, u16)> {
        let mut labels = self.by_name.iter().map(|(name, &address)| (name.as_str(), address)).collect::<Vec<_>>();
        labels.sort_unstable();
        labels
    }

    /// Length of the longest label name, in characters.
    pub fn longest_name(&self) -> usize {
        self.by_name.keys().map(|name| name.chars().count()).max().unwrap_or(0)
    }
}

impl CrossReferences {
    /// Records where `token` starts and what its operand points at.
    pub fn record(&mut self, token: &Token, modes: &ModeCatalog) {
        self.targetable.insert(token.address());
        if let Some(target) = token.instruction().and_then(|i| i.target(modes)) {
            self.targeted.insert(target);
        }
    }

    pub fn collect<'t>(tokens: impl IntoIterator<Item = &'t Token>, modes: &ModeCatalog) -> Self {
        let mut xrefs = Self::default();
        for token in tokens {
            xrefs.record(token, modes);
        }
        xrefs
    }

    /// Addresses that are both a token boundary and an operand target, ascending.
    pub fn label_candidates(&self) -> impl Iterator<Item = u16> + '_ {
        self.targetable.intersection(&self.targeted).copied()
    }
}

// -------------------------------------------------------------------------------------------------

pub fn synthesized_name(counter: usize) -> String {
    format!("L{counter:04x}")
}

/// Returns the first synthesized name at or after `counter` that `labels` doesn't use yet, leaving
/// `counter` at that name's number.
pub fn next_free_name(counter: &mut usize, labels: &LabelTable) -> String {
    loop {
        let candidate = synthesized_name(*counter);
        if !labels.contains_name(&candidate) {
            return candidate;
        }
        *counter += 1;
    }
}

/// Names every candidate address that `labels` doesn't cover yet. Candidates must be ascending.
pub fn synthesize_labels(candidates: impl IntoIterator<Item = u16>, labels: &mut LabelTable) {
    let mut counter = 0;
    for address in candidates {
        if labels.get(address).is_some() {
            continue;
        }
        let name = next_free_name(&mut counter, labels);
        if let Err(e) = labels.insert(address, name) {
            // Unreachable, the name was checked above.
            log::error!("{e}");
        }
    }
}

/// Merges `user_labels` with synthesized labels for every targeted token boundary.
pub fn resolve_labels(xrefs: &CrossReferences, user_labels: &LabelTable) -> LabelTable {
    let mut labels = user_labels.clone();
    synthesize_labels(xrefs.label_candidates(), &mut labels);
    log::debug!("{} user labels, {} synthesized", user_labels.len(), labels.len() - user_labels.len());
    labels
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(u16, &str)]) -> LabelTable {
        let mut labels = LabelTable::new();
        for &(address, name) in entries {
            labels.insert(address, name).unwrap();
        }
        labels
    }

    #[test]
    fn insert_keeps_names_unique() {
        let mut labels = table(&[(0x1000, "start")]);
        assert_eq!(
            labels.insert(0x2000, "start"),
            Err(LabelError::NameTaken { name: "start".into(), existing: 0x1000 })
        );
        assert_eq!(labels.get(0x2000), None);

        assert_eq!(labels.insert(0x1000, "reset"), Ok(Some("start".into())));
        assert!(!labels.contains_name("start"));
        assert_eq!(labels.address_of("reset"), Some(0x1000));
        labels.insert(0x2000, "start").unwrap();
        assert_eq!(labels.len(), 2);
    }

    #[test]
    fn synthesized_names_are_zero_padded_hex() {
        assert_eq!(synthesized_name(0), "L0000");
        assert_eq!(synthesized_name(10), "L000a");
        assert_eq!(synthesized_name(0x1234), "L1234");
    }

    #[test]
    fn synthesis_counts_up_in_address_order() {
        let mut labels = LabelTable::new();
        synthesize_labels([0x1000, 0x1005, 0x2000], &mut labels);
        assert_eq!(labels.iter().collect::<Vec<_>>(), [(0x1000, "L0000"), (0x1005, "L0001"), (0x2000, "L0002")]);
    }

    #[test]
    fn synthesis_skips_user_names_and_addresses() {
        let mut labels = table(&[(0x1005, "loop"), (0x3000, "L0001")]);
        synthesize_labels([0x1000, 0x1005, 0x2000], &mut labels);
        assert_eq!(labels.get(0x1000), Some("L0000"));
        assert_eq!(labels.get(0x1005), Some("loop"));
        assert_eq!(labels.get(0x2000), Some("L0002"));
        assert_eq!(labels.get(0x3000), Some("L0001"));
    }

    #[test]
    fn next_free_name_does_not_reset() {
        let labels = table(&[(0x1000, "L0000"), (0x1001, "L0001")]);
        let mut counter = 0;
        assert_eq!(next_free_name(&mut counter, &labels), "L0002");
        assert_eq!(counter, 2);
    }

    #[test]
    fn candidates_are_the_intersection() {
        let xrefs = CrossReferences {
            targetable: [0x1000, 0x1002, 0x1005].into_iter().collect(),
            targeted:   [0x0200, 0x1005, 0x1000, 0x1003].into_iter().collect(),
        };
        assert_eq!(xrefs.label_candidates().collect::<Vec<_>>(), [0x1000, 0x1005]);

        let labels = resolve_labels(&xrefs, &table(&[(0xFFFC, "reset")]));
        assert_eq!(labels.len(), 3);
        assert_eq!(labels.get(0x0200), None);
        assert_eq!(labels.get(0x1003), None);
    }

    #[test]
    fn longest_name_counts_characters() {
        let labels = table(&[(0x1000, "début"), (0x2000, "loop")]);
        assert_eq!(labels.longest_name(), 5);
        assert_eq!(LabelTable::new().longest_name(), 0);
    }

    #[test]
    fn sorted_by_name() {
        let labels = table(&[(0x1000, "zeta"), (0x2000, "L0000"), (0x0010, "alpha")]);
        assert_eq!(labels.sorted_by_name(), [("L0000", 0x2000), ("alpha", 0x0010), ("zeta", 0x1000)]);
    }
}
