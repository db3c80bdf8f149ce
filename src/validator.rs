//! System definition validation.
//!
//! The host treats every table in this crate as trusted, read-only data, so
//! a malformed table corrupts behavior silently instead of failing. This
//! module checks the cross-table invariants once, during assembly, and
//! aborts the load on any error.

use crate::keymap_db::KeymapDb;
use crate::layout::{self, KEYS, NUMBERS};
use crate::models::HOST_ACTIONS;
use regex::Regex;
use std::collections::HashSet;

/// Key identifier token shape: `X-` (left hand), `-X` (right hand), or a
/// bare character (shared). `X` is any single non-hyphen character.
const KEY_TOKEN_PATTERN: &str = r"^(?:[^-]-|-[^-]|[^-])$";

/// Validation result with specific errors and warnings.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Invariant violations that make the definition unusable
    pub errors: Vec<ValidationError>,
    /// Non-critical warnings
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// Creates a new empty validation report.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Returns true if there are no errors (warnings are allowed).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Adds an error to the report.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Adds a warning to the report.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Formats the report as a user-friendly message.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut message = String::new();

        if !self.errors.is_empty() {
            message.push_str(&format!("{} validation errors:\n", self.errors.len()));
            for (idx, error) in self.errors.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, error));
            }
        }

        if !self.warnings.is_empty() {
            message.push_str(&format!("\n{} warnings:\n", self.warnings.len()));
            for (idx, warning) in self.warnings.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, warning));
            }
        }

        message
    }
}

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Type of validation error
    pub kind: ValidationErrorKind,
    /// Device table where the error occurred, if any
    pub device: Option<String>,
    /// Key identifier the error concerns, if any
    pub key: Option<String>,
    /// Human-readable error message
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            device: None,
            key: None,
            message: message.into(),
        }
    }

    /// Sets the device table context.
    #[must_use]
    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
        self
    }

    /// Sets the key context.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.device, &self.key) {
            (Some(device), Some(key)) => {
                write!(f, "[{} '{}'] {}: {}", device, key, self.kind, self.message)
            }
            (None, Some(key)) => write!(f, "['{}'] {}: {}", key, self.kind, self.message),
            _ => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

/// Types of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A table references a key identifier not present in the layout
    UnknownKey,
    /// The same key identifier appears more than once in the layout
    DuplicateKey,
    /// A key identifier does not match the hand-affinity token shape
    MalformedKey,
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownKey => write!(f, "Unknown Key"),
            Self::DuplicateKey => write!(f, "Duplicate Key"),
            Self::MalformedKey => write!(f, "Malformed Key"),
        }
    }
}

/// Validation warning (non-blocking).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Warning message
    pub message: String,
}

impl ValidationWarning {
    /// Creates a new validation warning.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Validates the layout tables and the device keymap database against the
/// canonical key list.
#[must_use]
pub fn validate(keymaps: &KeymapDb) -> ValidationReport {
    let mut report = ValidationReport::new();
    // The pattern is a literal; it cannot fail to compile.
    let token = Regex::new(KEY_TOKEN_PATTERN).unwrap();

    let mut seen: HashSet<&str> = HashSet::new();
    for &key in KEYS {
        if !seen.insert(key) {
            report.add_error(
                ValidationError::new(
                    ValidationErrorKind::DuplicateKey,
                    "key appears more than once in the layout",
                )
                .with_key(key),
            );
        }
        if !token.is_match(key) {
            report.add_error(
                ValidationError::new(
                    ValidationErrorKind::MalformedKey,
                    "key does not match the hand-affinity token shape",
                )
                .with_key(key),
            );
        }
    }

    let mut number_keys: HashSet<&str> = HashSet::new();
    for &(key, _symbol) in NUMBERS {
        if !seen.contains(key) {
            report.add_error(
                ValidationError::new(
                    ValidationErrorKind::UnknownKey,
                    "numeral table references a key missing from the layout",
                )
                .with_key(key),
            );
        }
        if !number_keys.insert(key) {
            report.add_error(
                ValidationError::new(
                    ValidationErrorKind::DuplicateKey,
                    "key has more than one numeral-shift symbol",
                )
                .with_key(key),
            );
        }
    }

    for (device, table) in keymaps.devices() {
        for (key, _binding) in table.entries() {
            if !seen.contains(key) && !HOST_ACTIONS.contains(&key) {
                report.add_error(
                    ValidationError::new(
                        ValidationErrorKind::UnknownKey,
                        "keymap entry is neither a layout key nor a host action",
                    )
                    .with_device(device)
                    .with_key(key),
                );
            }
        }
        for &key in KEYS {
            if !table.binds(key) {
                report.add_warning(ValidationWarning::new(format!(
                    "device '{}' leaves layout key '{}' unmapped",
                    device, key
                )));
            }
        }
    }

    // Groups reference keys by character rather than identifier, so the only
    // group-level check is that each meta marker stays off the key list.
    let groups = layout::Groups::standard();
    let metas = groups.prefix.meta.chars().chain(groups.all.meta.chars());
    for meta in metas {
        if seen.contains(meta.to_string().as_str()) {
            report.add_error(
                ValidationError::new(
                    ValidationErrorKind::DuplicateKey,
                    "meta-stroke marker collides with a layout key",
                )
                .with_key(meta.to_string()),
            );
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap_db::KeymapDb;

    #[test]
    fn test_shipped_definition_is_valid() {
        let db = KeymapDb::load().expect("Failed to load keymap database");
        let report = validate(&db);
        assert!(
            report.is_valid(),
            "shipped definition failed validation:\n{}",
            report.format_message()
        );
    }

    #[test]
    fn test_shipped_definition_has_no_unmapped_keys() {
        let db = KeymapDb::load().expect("Failed to load keymap database");
        let report = validate(&db);
        assert!(
            report.warnings.is_empty(),
            "unexpected warnings:\n{}",
            report.format_message()
        );
    }

    #[test]
    fn test_error_display_includes_context() {
        let error = ValidationError::new(ValidationErrorKind::UnknownKey, "missing")
            .with_device("Keyboard")
            .with_key("Q-");
        assert_eq!(error.to_string(), "[Keyboard 'Q-'] Unknown Key: missing");
    }

    #[test]
    fn test_report_counts_errors_and_warnings() {
        let mut report = ValidationReport::new();
        assert!(report.is_valid());

        report.add_warning(ValidationWarning::new("minor"));
        assert!(report.is_valid());

        report.add_error(ValidationError::new(
            ValidationErrorKind::DuplicateKey,
            "twice",
        ));
        assert!(!report.is_valid());

        let message = report.format_message();
        assert!(message.contains("1 validation errors"));
        assert!(message.contains("1 warnings"));
    }
}
