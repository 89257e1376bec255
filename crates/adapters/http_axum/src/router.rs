//! Axum router assembly.

use axum::Router;
use axum::routing::{any, get};
use tower_http::trace::TraceLayer;

use inimock_app::ports::ScenarioRegistry;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// The RPC endpoint answers on `/` for any HTTP method, and also serves as
/// the fallback so a client configured with a trailing path still reaches
/// it. Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: ScenarioRegistry + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/", any(crate::api::call::<R>))
        .fallback(crate::api::call::<R>)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
