//! Device keymap database.
//!
//! This module provides access to the embedded device keymap tables that
//! translate the layout's logical key identifiers into the physical
//! input-event identifiers of each supported input device.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{Binding, DeviceKeymap};

/// Database schema from keymaps.json.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct KeymapDatabase {
    version: String,
    devices: HashMap<String, DeviceKeymap>,
    aliases: HashMap<String, String>,
}

/// Device keymap database with per-device lookup.
///
/// The database is embedded in the binary at compile time and parsed once
/// during system assembly. Aliased devices receive a full copy of their
/// target's table: the host's keymap fallback drops any keys the base
/// machine layout lacks, so deriving one layout from another would silently
/// lose the extra keys. The copy is a deliberate workaround for that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeymapDb {
    devices: HashMap<String, DeviceKeymap>,
}

impl KeymapDb {
    /// Loads the keymap database from the embedded JSON file and resolves
    /// device aliases.
    pub fn load() -> Result<Self> {
        let json_data = include_str!("keymaps.json");
        let db: KeymapDatabase =
            serde_json::from_str(json_data).context("Failed to parse embedded keymaps.json")?;

        let mut devices = db.devices;
        for (alias, target) in &db.aliases {
            let table = devices
                .get(target)
                .cloned()
                .with_context(|| {
                    format!("Keymap alias '{alias}' points at unknown device '{target}'")
                })?;
            devices.insert(alias.clone(), table);
        }

        Ok(Self { devices })
    }

    /// Gets the keymap for a device by name.
    #[must_use]
    pub fn device(&self, name: &str) -> Option<&DeviceKeymap> {
        self.devices.get(name)
    }

    /// Gets the binding a device assigns to a key identifier or host action.
    #[must_use]
    pub fn binding(&self, device: &str, key: &str) -> Option<&Binding> {
        self.devices.get(device)?.binding(key)
    }

    /// All device names, sorted for stable iteration.
    #[must_use]
    pub fn device_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.devices.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Iterates over all device tables.
    pub fn devices(&self) -> impl Iterator<Item = (&str, &DeviceKeymap)> {
        self.devices.iter().map(|(name, map)| (name.as_str(), map))
    }

    /// Number of devices, aliases included.
    #[must_use]
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }
}
