//! Velotype System Definition
//!
//! This library defines the Velotype stenography system as passive
//! configuration for a chord-input host: the canonical key order, named key
//! groups for stroke splitting, the numeral-shift table, per-device keymaps,
//! and the default dictionary stack. The host assembles a [`system::System`]
//! once at startup and reads it for the life of the process; nothing in this
//! crate is mutated after assembly.

// Module declarations
pub mod constants;
pub mod keymap_db;
pub mod layout;
pub mod models;
pub mod system;
pub mod validator;

pub use models::{Binding, DeviceKeymap, Orthography, OrthographyRule, VeloGroup};
pub use system::System;
