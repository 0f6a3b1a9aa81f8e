//! This module acts as a central hub for all inventory persistence logic.
//! It declares the specialized submodules so they can be accessed from
//! elsewhere in the application via their full path, e.g., `database::inventory::add_item`.

pub mod inventory;
pub mod models;
pub mod store;

pub use store::InventoryStore;
