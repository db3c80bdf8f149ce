//! Named key-group values used by the stroke-splitting extension.

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// A named group of keys that are looked up together.
///
/// The `meta` marker tags split-stroke boundaries so the host never mistakes
/// them for literal strokes; `keys` is the group's members as a substring of
/// the canonical key order. Groups are built once when the system is
/// assembled and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VeloGroup {
    /// Meta-stroke marker string (e.g. `«` for initial consonants).
    pub meta: String,
    /// Member keys, in canonical steno order.
    pub keys: String,
    /// Group only exists on the left hand.
    pub lhs_only: bool,
    /// Group only exists on the right hand.
    pub rhs_only: bool,
}

impl VeloGroup {
    /// Creates a group usable on either hand.
    ///
    /// The caller is responsible for listing `keys` in canonical order; the
    /// stroke splitter downstream assumes it.
    pub fn new(meta: impl Into<String>, keys: impl Into<String>) -> Self {
        Self {
            meta: meta.into(),
            keys: keys.into(),
            lhs_only: false,
            rhs_only: false,
        }
    }

    /// Marks the group as left-hand only.
    #[must_use]
    pub fn with_lhs_only(mut self) -> Self {
        self.lhs_only = true;
        self
    }

    /// Marks the group as right-hand only.
    #[must_use]
    pub fn with_rhs_only(mut self) -> Self {
        self.rhs_only = true;
        self
    }

    /// Combines two groups into a larger region.
    ///
    /// Meta markers and key strings concatenate in argument order; the
    /// hand-exclusivity flags survive only when both operands carry them.
    #[must_use]
    pub fn combine(&self, other: &Self) -> Self {
        Self {
            meta: format!("{}{}", self.meta, other.meta),
            keys: format!("{}{}", self.keys, other.keys),
            lhs_only: self.lhs_only && other.lhs_only,
            rhs_only: self.rhs_only && other.rhs_only,
        }
    }

}

impl Add for VeloGroup {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.combine(&rhs)
    }
}

impl Add for &VeloGroup {
    type Output = VeloGroup;

    fn add(self, rhs: Self) -> VeloGroup {
        self.combine(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_concatenates_meta_and_keys() {
        let a = VeloGroup::new("«", "ZF").with_lhs_only();
        let b = VeloGroup::new("»", "-SZ").with_rhs_only();
        let combined = a.combine(&b);

        assert_eq!(combined.meta, "«»");
        assert_eq!(combined.keys, "ZF-SZ");
    }

    #[test]
    fn test_combine_ands_hand_flags() {
        let lhs = VeloGroup::new("«", "Z").with_lhs_only();
        let shared = VeloGroup::new("=", "UA");

        let both_lhs = lhs.combine(&lhs);
        assert!(both_lhs.lhs_only);
        assert!(!both_lhs.rhs_only);

        let mixed = lhs.combine(&shared);
        assert!(!mixed.lhs_only);
        assert!(!mixed.rhs_only);
    }

    #[test]
    fn test_add_operator_matches_combine() {
        let a = VeloGroup::new("<", "Y");
        let b = VeloGroup::new(">", "´'`");
        assert_eq!(a.clone() + b.clone(), a.combine(&b));
    }

    #[test]
    fn test_combine_is_associative_on_keys() {
        let a = VeloGroup::new("a", "AB");
        let b = VeloGroup::new("b", "CD");
        let c = VeloGroup::new("c", "EF");

        let left = a.combine(&b).combine(&c);
        let right = a.combine(&b.combine(&c));
        assert_eq!(left, right);
        assert_eq!(left.keys.len(), a.keys.len() + b.keys.len() + c.keys.len());
    }
}
