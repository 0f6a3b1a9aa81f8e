//! Shared state handed to the Discord handler at startup.

use crate::commands::Dispatcher;
use std::sync::Arc;

/// Everything a command needs, constructed once in `main` and handed to the
/// event handler explicitly.
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
}

impl AppState {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }
}
