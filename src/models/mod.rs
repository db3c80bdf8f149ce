//! Data models for the Velotype system definition.
//!
//! This module contains the value types the system tables are built from.
//! Models carry no behavior beyond construction and read access.

pub mod group;
pub mod keymap;
pub mod orthography;

// Re-export all model types
pub use group::VeloGroup;
pub use keymap::{Binding, DeviceKeymap, HOST_ACTIONS};
pub use orthography::{Orthography, OrthographyRule};
