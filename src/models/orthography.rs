//! Orthography rules handle.
//!
//! The Velotype system does not define its own orthography; the host injects
//! the rule set it wants applied (historically the English stenotype rules)
//! when the system is assembled. This crate treats the rules as opaque data
//! and passes them straight back to the host.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One suffix-folding rule: a match pattern and its replacement template.
/// Interpretation is entirely up to the host's orthography engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrthographyRule {
    /// Host-interpreted match pattern.
    pub pattern: String,
    /// Host-interpreted replacement template.
    pub replacement: String,
}

/// The orthography rule set injected by the host at assembly time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orthography {
    /// Suffix-folding rules, applied in order by the host.
    pub rules: Vec<OrthographyRule>,
    /// Suffix spelling aliases (e.g. alternate spellings of a suffix that
    /// share one canonical rule entry).
    pub aliases: HashMap<String, String>,
    /// Optional wordlist asset locator. Always `None` for Velotype.
    pub wordlist: Option<String>,
}

impl Orthography {
    /// An empty rule set, for hosts that apply no orthography correction.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}
