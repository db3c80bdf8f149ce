//! The Velotype key layout: canonical key order, key groups, and the
//! numeral-shift table.
//!
//! `KEYS` is a load-bearing contract, not cosmetic data: the host's
//! stroke-splitting logic assumes exactly this steno order (left-hand initial
//! consonants, thumb consonants and heel, thumb symbol, left vowels, shared
//! finger symbol, shared vowels, shared thumb vowel, right vowels, thumb
//! symbol and consonants, heel, right-hand final consonants). Reordering it
//! is a breaking change.
//!
//! Abbreviations used below: ic = initial consonants, fc = final consonants,
//! v = vowels, tv = thumb vowels, sym = symbols, acc = accented.

use crate::models::VeloGroup;

// _ ZFSPTCKJR LN H ´ IOE 'UAY OIE ` NL KJRPTCFSZ

/// Canonical key identifiers in steno order. A trailing hyphen marks a
/// left-hand key, a leading hyphen a right-hand key, no hyphen a shared key.
pub const KEYS: &[&str] = &[
    // shifts
    "#",
    // RHS heel
    "_-",
    // LHS consonants fingers
    "Z-", "F-", "S-", "P-", "T-", "C-", "K-", "J-", "R-",
    // LHS consonants thumb
    "L-", "N-",
    // LHS heel
    "H-",
    // LHS thumb syms
    "´-",
    // LHS vowels fingers
    "I-", "O-", "E-",
    // Finger syms
    "'",
    // Shared vowels fingers
    "U", "A",
    // Shared vowels thumb
    "Y",
    // RHS vowels fingers
    "-O", "-I", "-E",
    // RHS thumb syms
    "-`",
    // RHS consonants thumb
    "-N", "-L",
    // RHS consonants fingers
    "-K", "-J", "-R", "-P", "-T", "-C", "-F", "-S", "-Z",
];

/// The numeral shift key.
pub const NUMBER_KEY: &str = "#";

/// Keys that never take an explicit hyphen in stroke notation.
/// This is intentionally restricted to hyphen-less keys.
pub const IMPLICIT_HYPHEN_KEYS: &[&str] = &["'", "U", "A", "Y", "8", "5", "2", "0"];

/// Suffix keys. This is intentionally left empty.
pub const SUFFIX_KEYS: &[&str] = &[];

/// Symbols emitted while the numeral shift key is held, grouped by
/// hand-finger region for readability; order is irrelevant to lookup.
///
/// Several entries are compromises: the ideal symbol collides with a meta
/// character or an invalid stroke encoding. They are user-visible behavior
/// and must not be "fixed".
pub const NUMBERS: &[(&str, &str)] = &[
    ("P-", "%-"),
    ("K-", "&-"),
    ("I-", "7-"),
    ("'", "8"),
    ("-O", "-9"),
    ("-K", "-?"),
    ("-P", "-!"),

    ("F-", "£-"),
    ("T-", "s-"), // should be '/', but that is an invalid stroke
    ("J-", "*-"),
    ("O-", "4-"),
    ("U", "5"),
    ("-I", "-6"),
    ("-J", "-e"), // should be '=', but that is used as a meta character
    ("-T", "-;"),
    ("-F", "-'"),

    ("Z-", "@-"),
    ("S-", "$-"),
    ("C-", "(-"),
    ("R-", "p-"), // should be '+', but that is used as a meta character
    ("E-", "1-"),
    ("A", "2"),
    ("-E", "-3"),
    ("-R", "-d"), // should be '-', but that is an invalid stroke
    ("-C", "-)"),
    ("-S", "-:"),
    ("-Z", "-h"), // should be '#', but that is already a stroke

    ("L-", "€-"),
    ("N-", ",-"),
    ("Y", "0"),
    ("-N", "-."),
    ("-L", "-u"), // should be '_', but that is used by NoSpace

    ("´-", "~-"),
    ("-`", "-¨"),
];

/// The named key groups the stroke-splitting extension works with.
///
/// These MUST be in steno order because of assumptions made in the extension.
/// Meta-strokes (`+«<=>»`) tag and protect split strokes from being picked up
/// as literal strokes and must not be used to define regular strokes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Groups {
    /// Stroke prefix region (the RHS heel).
    pub prefix: VeloGroup,
    /// Initial consonants, left hand.
    pub ic: VeloGroup,
    /// Accented vowels and the symbol/vowel center region.
    pub acc_v: VeloGroup,
    /// Final consonants, right hand.
    pub fc: VeloGroup,
    /// Thumb vowel.
    pub tv: VeloGroup,
    /// Plain vowels.
    pub v: VeloGroup,
    /// Symbol keys.
    pub sym: VeloGroup,
    /// Left-hand combined region (`ic` + `acc_v`).
    pub l_comb: VeloGroup,
    /// Right-hand combined region (`acc_v` + `fc`).
    pub r_comb: VeloGroup,
    /// The full region (`ic` + `acc_v` + `fc`).
    pub all: VeloGroup,
}

impl Groups {
    /// Builds the standard Velotype groups. Called once during system
    /// assembly; the composites are derived from the primitives here and
    /// retained for the host's stroke splitter.
    #[must_use]
    pub fn standard() -> Self {
        let prefix = VeloGroup::new("+", "_");
        let ic = VeloGroup::new("«", "ZFSPTCKJRLNH").with_lhs_only();
        let acc_v = VeloGroup::new("<=>", "´IOE-'UAYOIE`");
        let fc = VeloGroup::new("»", "-NLKJRPTCFSZ").with_rhs_only();

        let tv = VeloGroup::new("<", "Y");
        let v = VeloGroup::new("=", "IOE-UAOIE");
        let sym = VeloGroup::new(">", "´'`");

        let l_comb = ic.combine(&acc_v);
        let r_comb = acc_v.combine(&fc);
        let all = ic.combine(&acc_v).combine(&fc);

        Self {
            prefix,
            ic,
            acc_v,
            fc,
            tv,
            v,
            sym,
            l_comb,
            r_comb,
            all,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_count_and_order_anchors() {
        assert_eq!(KEYS.len(), 37);
        assert_eq!(KEYS.first(), Some(&"#"));
        assert_eq!(KEYS[1], "_-");
        assert_eq!(KEYS.last(), Some(&"-Z"));
    }

    #[test]
    fn test_all_group_is_the_three_region_concatenation() {
        let groups = Groups::standard();
        let expected = format!(
            "{}{}{}",
            groups.ic.keys, groups.acc_v.keys, groups.fc.keys
        );
        assert_eq!(groups.all.keys, expected);
        assert_eq!(
            groups.all.keys.chars().count(),
            groups.ic.keys.chars().count()
                + groups.acc_v.keys.chars().count()
                + groups.fc.keys.chars().count()
        );
    }

    #[test]
    fn test_composites_drop_hand_exclusivity() {
        let groups = Groups::standard();
        assert!(groups.ic.lhs_only);
        assert!(groups.fc.rhs_only);
        assert!(!groups.l_comb.lhs_only && !groups.l_comb.rhs_only);
        assert!(!groups.r_comb.lhs_only && !groups.r_comb.rhs_only);
        assert!(!groups.all.lhs_only && !groups.all.rhs_only);
    }

    #[test]
    fn test_group_metas_concatenate() {
        let groups = Groups::standard();
        assert_eq!(groups.l_comb.meta, "«<=>");
        assert_eq!(groups.r_comb.meta, "<=>»");
        assert_eq!(groups.all.meta, "«<=>»");
    }

    #[test]
    fn test_numbers_cover_every_region() {
        // Heels and the shifts key have no numeral variant; everything the
        // fingers and thumbs reach does.
        for key in ["#", "_-", "H-"] {
            assert!(NUMBERS.iter().all(|(k, _)| *k != key));
        }
        assert_eq!(NUMBERS.len(), KEYS.len() - 3);
    }
}
