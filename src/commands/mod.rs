// src/commands/mod.rs
// Declares the command modules and re-exports the dispatch entry points.

pub mod admin;
pub mod dispatcher;
pub mod emojis;
pub mod invocation;
pub mod registry;
pub mod view;

pub use dispatcher::Dispatcher;
pub use invocation::{ArgValue, Caller, GuildEmoji, Invocation};
pub use registry::CommandTable;
