use crate::llm_client::Dispatcher;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// In-memory session store. State lives for the life of the process;
    /// there is deliberately no persistence behind it.
    pub sessions: SessionStore,
    /// Stateless prompt dispatcher, safely shared across sessions.
    pub dispatcher: Dispatcher,
}
