//! The RPC endpoint.
//!
//! The vendor API multiplexes every call over one URL: the method and its
//! parameters travel as a JSON document in the `req` query parameter.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use serde::Deserialize;

use inimock_app::ports::ScenarioRegistry;
use inimock_domain::request::Request;
use inimock_domain::response::Envelope;

use crate::error::ApiError;
use crate::state::AppState;

/// Query string of an RPC call.
#[derive(Debug, Deserialize)]
pub struct RpcQuery {
    /// URL-decoded JSON envelope. Missing means empty, which fails to parse.
    #[serde(default)]
    pub req: String,
}

/// `ANY /?req=<json>`
///
/// # Errors
///
/// Returns a `400` [`ApiError`] for a malformed envelope, an unknown method,
/// or invalid method parameters.
pub async fn call<R>(
    State(state): State<AppState<R>>,
    query: Result<Query<RpcQuery>, QueryRejection>,
) -> Result<Json<Envelope>, ApiError>
where
    R: ScenarioRegistry + Send + Sync + 'static,
{
    let raw = match query {
        Ok(Query(query)) => query.req,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unreadable query string");
            String::new()
        }
    };

    let request = Request::from_json(&raw)?;
    tracing::info!(method = %request.method, "received request");

    let payload = state.dispatcher.dispatch(request).await?;
    Ok(Json(Envelope::ok(payload)))
}
