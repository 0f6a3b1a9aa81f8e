//! Error kinds surfaced by the inventory store, its operations and the command gate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryError {
    /// The inventory file could not be read or written.
    #[error("inventory storage at {} is unavailable: {source}", .path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The inventory file exists but is not a category -> item list mapping.
    #[error("inventory storage at {} is corrupt: {source}", .path.display())]
    StorageCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("category '{0}' not found")]
    CategoryNotFound(String),

    #[error("item '{name}' not found in {category}")]
    ItemNotFound { category: String, name: String },

    #[error("administrator permission required")]
    PermissionDenied,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The guild's emoji list could not be fetched.
    #[error("server emojis unavailable: {0}")]
    EmojiUnavailable(String),

    /// A temporary file for an outgoing attachment could not be written.
    #[error("could not prepare attachment: {0}")]
    Attachment(#[source] io::Error),
}

impl InventoryError {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::StorageUnavailable {
            path: path.into(),
            source,
        }
    }

    /// True for the lookup failures a `remove` or `edit` can produce.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CategoryNotFound(_) | Self::ItemNotFound { .. })
    }

    /// True when the failure came from the backing file rather than the request.
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::StorageUnavailable { .. } | Self::StorageCorrupt { .. }
        )
    }
}

pub type Result<T, E = InventoryError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_not_found_names_both_parts() {
        let err = InventoryError::ItemNotFound {
            category: "gaming".into(),
            name: "Steam Key".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Steam Key"), "got: {msg}");
        assert!(msg.contains("gaming"), "got: {msg}");
        assert!(err.is_not_found());
        assert!(!err.is_storage());
    }

    #[test]
    fn storage_unavailable_is_storage() {
        let err = InventoryError::unavailable(
            "inventory.json",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.is_storage());
        assert!(err.to_string().contains("inventory.json"));
    }
}
