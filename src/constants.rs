//! System-wide constants.
//!
//! This module defines the constants the host reads by name: the system's
//! display name, the dictionary asset references, and the undo stroke.

/// The display name of the system, as shown in the host's system picker.
pub const SYSTEM_NAME: &str = "Velotype";

/// Asset locator the host resolves dictionary file names against.
pub const DICTIONARIES_ROOT: &str = "asset:velotype_system:assets";

/// Default dictionary stack, highest priority first. The user dictionary
/// shadows everything else; later entries are fallbacks.
pub const DEFAULT_DICTIONARIES: &[&str] = &[
    "velo_user.json",
    "velo_commands.json",
    "velo_english_basic.json",
    "velo_base.json",
];

/// The literal steno stroke the host interprets as "undo last stroke".
pub const UNDO_STROKE_STENO: &str = "SN-NS";
