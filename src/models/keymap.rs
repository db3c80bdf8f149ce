//! Device keymap models.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Host action names that may appear in a device table alongside key
/// identifiers. These are consumed by the host's machine layer, not by the
/// layout itself.
pub const HOST_ACTIONS: &[&str] = &["arpeggiate", "no-op"];

/// Physical input(s) bound to one layout key on a concrete device.
///
/// Most keys bind to a single scan code or protocol key name; a few are
/// reachable through more than one physical input, in which case the
/// alternatives are listed in preference order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Binding {
    /// One physical input identifier.
    Single(String),
    /// Ordered alternative input identifiers.
    Alternatives(Vec<String>),
}

impl Binding {
    /// All physical inputs for this binding, preferred first.
    #[must_use]
    pub fn inputs(&self) -> &[String] {
        match self {
            Self::Single(input) => std::slice::from_ref(input),
            Self::Alternatives(inputs) => inputs,
        }
    }

    /// The preferred physical input, if the binding is non-empty.
    #[must_use]
    pub fn primary(&self) -> Option<&str> {
        self.inputs().first().map(String::as_str)
    }
}

/// One device's table from layout key identifiers (and host actions) to
/// physical input identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceKeymap {
    entries: HashMap<String, Binding>,
}

impl DeviceKeymap {
    /// Looks up the binding for a key identifier or host action.
    #[must_use]
    pub fn binding(&self, key: &str) -> Option<&Binding> {
        self.entries.get(key)
    }

    /// Returns true if the device binds the given key or action.
    #[must_use]
    pub fn binds(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over all entries in the table.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &Binding)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries, actions included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_single_inputs() {
        let binding = Binding::Single("S1-".to_string());
        assert_eq!(binding.inputs(), ["S1-".to_string()]);
        assert_eq!(binding.primary(), Some("S1-"));
    }

    #[test]
    fn test_binding_alternatives_keep_order() {
        let binding = Binding::Alternatives(vec!["q".to_string(), "a".to_string()]);
        assert_eq!(binding.primary(), Some("q"));
        assert_eq!(binding.inputs().len(), 2);
    }

    #[test]
    fn test_binding_deserializes_from_string_or_array() {
        let single: Binding = serde_json::from_str("\"space\"").unwrap();
        assert_eq!(single, Binding::Single("space".to_string()));

        let multi: Binding = serde_json::from_str("[\"x\", \"/\"]").unwrap();
        assert_eq!(
            multi,
            Binding::Alternatives(vec!["x".to_string(), "/".to_string()])
        );
    }
}
