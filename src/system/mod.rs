//! System assembly.
//!
//! `System` bundles every table the host reads into one immutable value. It
//! is constructed exactly once, at startup, from the embedded definitions;
//! after `load` returns nothing is ever written, so sharing it across
//! threads needs no locking.

use anyhow::{bail, Result};
use std::collections::{HashMap, HashSet};

use crate::constants::{DEFAULT_DICTIONARIES, DICTIONARIES_ROOT, SYSTEM_NAME, UNDO_STROKE_STENO};
use crate::keymap_db::KeymapDb;
use crate::layout::{self, Groups, IMPLICIT_HYPHEN_KEYS, KEYS, NUMBER_KEY, SUFFIX_KEYS};
use crate::models::{Binding, DeviceKeymap, Orthography};
use crate::validator;

/// The assembled Velotype system definition.
///
/// Orthography rules are not part of this crate's data; the host injects the
/// rule set it wants applied when it calls [`System::load`], and reads it
/// back through [`System::orthography`].
#[derive(Debug, Clone)]
pub struct System {
    groups: Groups,
    keymaps: KeymapDb,
    orthography: Orthography,
    numbers: HashMap<&'static str, &'static str>,
    key_index: HashSet<&'static str>,
}

impl System {
    /// Assembles the system definition, validating every cross-table
    /// invariant before returning it. Fails if the embedded tables are
    /// inconsistent; this is a defect in the definition itself, not a
    /// condition the host can recover from.
    pub fn load(orthography: Orthography) -> Result<Self> {
        let keymaps = KeymapDb::load()?;

        let report = validator::validate(&keymaps);
        if !report.is_valid() {
            bail!(
                "system definition failed validation:\n{}",
                report.format_message()
            );
        }

        let numbers: HashMap<&'static str, &'static str> =
            layout::NUMBERS.iter().copied().collect();
        let key_index: HashSet<&'static str> = KEYS.iter().copied().collect();

        Ok(Self {
            groups: Groups::standard(),
            keymaps,
            orthography,
            numbers,
            key_index,
        })
    }

    /// The system's display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        SYSTEM_NAME
    }

    /// Canonical key identifiers in steno order.
    #[must_use]
    pub const fn keys(&self) -> &'static [&'static str] {
        KEYS
    }

    /// Returns true if `token` is a key identifier of this layout.
    #[must_use]
    pub fn is_key(&self, token: &str) -> bool {
        self.key_index.contains(token)
    }

    /// The numeral shift key.
    #[must_use]
    pub const fn number_key(&self) -> &'static str {
        NUMBER_KEY
    }

    /// Keys written without an explicit hyphen in stroke notation.
    #[must_use]
    pub const fn implicit_hyphen_keys(&self) -> &'static [&'static str] {
        IMPLICIT_HYPHEN_KEYS
    }

    /// Suffix keys (empty for Velotype).
    #[must_use]
    pub const fn suffix_keys(&self) -> &'static [&'static str] {
        SUFFIX_KEYS
    }

    /// The numeral-shift symbol table.
    #[must_use]
    pub const fn numbers(&self) -> &HashMap<&'static str, &'static str> {
        &self.numbers
    }

    /// The numeral-shift symbol for one key, if it has one.
    #[must_use]
    pub fn number_symbol(&self, key: &str) -> Option<&'static str> {
        self.numbers.get(key).copied()
    }

    /// The named key groups, including the load-time composites.
    #[must_use]
    pub const fn groups(&self) -> &Groups {
        &self.groups
    }

    /// The device keymap database.
    #[must_use]
    pub const fn keymaps(&self) -> &KeymapDb {
        &self.keymaps
    }

    /// The keymap for one device by name.
    #[must_use]
    pub fn keymap(&self, device: &str) -> Option<&DeviceKeymap> {
        self.keymaps.device(device)
    }

    /// The binding a device assigns to a key, if any.
    #[must_use]
    pub fn binding(&self, device: &str, key: &str) -> Option<&Binding> {
        self.keymaps.binding(device, key)
    }

    /// The injected orthography rule set.
    #[must_use]
    pub const fn orthography(&self) -> &Orthography {
        &self.orthography
    }

    /// The stroke the host interprets as "undo".
    #[must_use]
    pub const fn undo_stroke(&self) -> &'static str {
        UNDO_STROKE_STENO
    }

    /// Asset locator for the bundled dictionaries.
    #[must_use]
    pub const fn dictionaries_root(&self) -> &'static str {
        DICTIONARIES_ROOT
    }

    /// Default dictionary stack, highest priority first.
    #[must_use]
    pub const fn default_dictionaries(&self) -> &'static [&'static str] {
        DEFAULT_DICTIONARIES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_system() -> System {
        System::load(Orthography::empty()).expect("Failed to assemble system")
    }

    #[test]
    fn test_load_succeeds_with_empty_orthography() {
        let system = get_test_system();
        assert_eq!(system.name(), "Velotype");
        assert_eq!(system.keys().len(), 37);
    }

    #[test]
    fn test_key_membership_index() {
        let system = get_test_system();
        assert!(system.is_key("#"));
        assert!(system.is_key("´-"));
        assert!(system.is_key("-Z"));
        assert!(!system.is_key("Q-"));
        assert!(!system.is_key("arpeggiate"));
    }

    #[test]
    fn test_number_lookup_matches_table() {
        let system = get_test_system();
        assert_eq!(system.number_symbol("A"), Some("2"));
        assert_eq!(system.number_symbol("H-"), None);
        assert_eq!(system.numbers().len(), layout::NUMBERS.len());
    }

    #[test]
    fn test_orthography_passthrough() {
        let system = get_test_system();
        assert!(system.orthography().rules.is_empty());
        assert!(system.orthography().wordlist.is_none());
    }
}
