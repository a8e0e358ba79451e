//! Flat-file persistence for the inventory.
//!
//! The state file is a pretty-printed JSON array of three-field records
//! (`name`, `price`, `quantity`), order-preserving and stable across
//! saves so it stays diff-friendly. Reading never fails: a missing or
//! unreadable file degrades to an empty inventory, discriminated so the
//! shell can tell the operator which case occurred.

use std::fs;
use std::path::Path;

use crate::core::error::InventoryError;
use crate::core::inventory::Inventory;

/// Fixed state-file name, resolved against the working directory.
pub const INVENTORY_FILE: &str = "inventory.json";

/// Discriminated result of reading the state file.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// File present and parsed.
    Loaded(Inventory),
    /// File absent: first run, start empty.
    Missing,
    /// File unreadable, unparseable, or inconsistent: corrupt data
    /// dropped, start empty. The original content is not backed up.
    Discarded,
}

impl LoadOutcome {
    pub fn into_inventory(self) -> Inventory {
        match self {
            LoadOutcome::Loaded(inventory) => inventory,
            LoadOutcome::Missing | LoadOutcome::Discarded => Inventory::new(),
        }
    }
}

/// Read the state file. Never fails and never prints; the caller renders
/// the status line for whichever outcome occurred.
pub fn load(path: &Path) -> LoadOutcome {
    if !path.exists() {
        return LoadOutcome::Missing;
    }
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return LoadOutcome::Discarded,
    };
    match serde_json::from_str::<Inventory>(&raw) {
        Ok(inventory) if inventory.is_consistent() => LoadOutcome::Loaded(inventory),
        _ => LoadOutcome::Discarded,
    }
}

/// Serialize the inventory to the state file, overwriting it. On failure
/// the in-memory collection is untouched and the caller reports the
/// error; the session continues.
pub fn save(path: &Path, inventory: &Inventory) -> Result<(), InventoryError> {
    let body = serde_json::to_string_pretty(inventory)?;
    fs::write(path, body)?;
    Ok(())
}
