//! File-backed inventory storage.
//!
//! The whole document is read and written on every call; nothing is cached in
//! memory between commands. Writes go to a sibling temp file that is renamed
//! over the target, so readers never observe a half-written document.

use super::models::Inventory;
use crate::error::{InventoryError, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, instrument};

#[derive(Debug, Clone)]
pub struct InventoryStore {
    path: PathBuf,
}

impl InventoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the persisted document.
    ///
    /// A missing file is replaced by the default document (six empty
    /// categories), which is written out before being returned.
    #[instrument(level = "debug", skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Inventory> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let inventory = Inventory::with_default_categories();
                self.save(&inventory)?;
                info!(path = %self.path.display(), "inventory_initialised");
                return Ok(inventory);
            }
            Err(e) => return Err(InventoryError::unavailable(&self.path, e)),
        };
        serde_json::from_str(&raw).map_err(|source| InventoryError::StorageCorrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrites the persisted document with `inventory`.
    #[instrument(level = "debug", skip(self, inventory), fields(path = %self.path.display()))]
    pub fn save(&self, inventory: &Inventory) -> Result<()> {
        let json = serde_json::to_string_pretty(inventory).map_err(|source| {
            InventoryError::StorageCorrupt {
                path: self.path.clone(),
                source,
            }
        })?;
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let unavailable = |e: io::Error| InventoryError::unavailable(&self.path, e);

        let mut tmp = NamedTempFile::new_in(dir).map_err(unavailable)?;
        tmp.write_all(json.as_bytes()).map_err(unavailable)?;
        tmp.as_file().sync_all().map_err(unavailable)?;
        tmp.persist(&self.path).map_err(|e| unavailable(e.error))?;

        debug!(
            categories = inventory.category_count(),
            items = inventory.total_items(),
            "inventory_saved"
        );
        Ok(())
    }
}
