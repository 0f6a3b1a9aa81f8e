//! Routes an [`Invocation`] to its command, enforcing the administrator gate.

use super::invocation::Invocation;
use super::registry::CommandTable;
use crate::database::InventoryStore;
use crate::error::InventoryError;
use crate::ui::reply::Reply;
use crate::ui::style::EMOJI_ERR;
use std::sync::{Mutex, PoisonError};
use tracing::{debug, error, info, warn};

pub struct Dispatcher {
    store: InventoryStore,
    table: CommandTable,
    /// Serialises load-mutate-save cycles within this process.
    cycle: Mutex<()>,
}

impl Dispatcher {
    pub fn new(store: InventoryStore) -> Self {
        Self {
            store,
            table: CommandTable::standard(),
            cycle: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    /// Runs one command to completion. Every failure becomes a private reply.
    ///
    /// Blocking: store access is synchronous file I/O.
    pub fn dispatch(&self, invocation: &Invocation) -> Reply {
        let Some(spec) = self.table.get(&invocation.name) else {
            warn!(command = %invocation.name, "unknown_command");
            return Reply::private(format!(
                "{EMOJI_ERR} Unknown command `{}`.",
                invocation.name
            ));
        };
        debug!(
            command = spec.name,
            user = invocation.caller.user_id,
            admin = invocation.caller.is_admin,
            "dispatch"
        );
        if spec.admin_only && !invocation.caller.is_admin {
            info!(
                command = spec.name,
                user = invocation.caller.user_id,
                "permission_denied"
            );
            return error_reply(&InventoryError::PermissionDenied);
        }

        let _cycle = self.cycle.lock().unwrap_or_else(PoisonError::into_inner);
        match (spec.handler)(self, invocation) {
            Ok(reply) => reply,
            Err(e) => {
                if e.is_storage() {
                    error!(command = spec.name, error = %e, "storage_failure");
                } else {
                    debug!(command = spec.name, error = %e, "command_rejected");
                }
                error_reply(&e)
            }
        }
    }
}

/// The private message shown to the invoker for a failed command.
pub fn error_reply(err: &InventoryError) -> Reply {
    let text = match err {
        InventoryError::PermissionDenied => {
            "You need administrator permissions to use this command!".to_string()
        }
        InventoryError::CategoryNotFound(category) => format!("Category '{category}' not found!"),
        InventoryError::ItemNotFound { category, name } => {
            format!("Item '{name}' not found in {category}!")
        }
        InventoryError::InvalidArgument(why) => format!("Invalid input: {why}."),
        InventoryError::StorageUnavailable { .. } | InventoryError::StorageCorrupt { .. } => {
            "The inventory could not be read or written. Please try again later.".to_string()
        }
        InventoryError::EmojiUnavailable(_) => "Could not read server emojis.".to_string(),
        InventoryError::Attachment(_) => "Could not prepare the attachment.".to_string(),
    };
    Reply::private(format!("{EMOJI_ERR} {text}"))
}
