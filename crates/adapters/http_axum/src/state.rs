//! Shared application state for axum handlers.

use std::sync::Arc;

use inimock_app::ports::ScenarioRegistry;
use inimock_app::services::dispatcher::Dispatcher;

/// Application state shared across all axum handlers.
///
/// Generic over the registry type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the registry itself does not need to be `Clone`;
/// only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Method dispatcher owning the scenario registry.
    pub dispatcher: Arc<Dispatcher<R>>,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            dispatcher: Arc::clone(&self.dispatcher),
        }
    }
}

impl<R> AppState<R>
where
    R: ScenarioRegistry + Send + Sync + 'static,
{
    /// Create a new application state from a dispatcher.
    pub fn new(dispatcher: Dispatcher<R>) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// Create a new application state from a pre-wrapped dispatcher.
    ///
    /// Use this when the caller keeps its own handle, e.g. to inspect the
    /// registry from a test.
    pub fn from_arc(dispatcher: Arc<Dispatcher<R>>) -> Self {
        Self { dispatcher }
    }
}
