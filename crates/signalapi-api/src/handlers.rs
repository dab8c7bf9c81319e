//! REST API handlers.
//!
//! Each handler reads through the shared `SignalRepository` and returns
//! JSON, or an `ApiError` that the boundary maps to a status code.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::debug;

use signalapi_state::Signal;

use crate::ApiState;
use crate::error::ApiError;

/// Query string for `/signals/by-node-id`.
#[derive(Debug, Deserialize)]
pub struct NodeIdQuery {
    pub node_id: String,
}

/// GET /signals
pub async fn list_signals(State(state): State<ApiState>) -> Result<Json<Vec<Signal>>, ApiError> {
    let signals = state.repo.find_all()?;
    debug!(count = signals.len(), "listed signals");
    Ok(Json(signals))
}

/// GET /signals/by-node-id?node_id=<id>
pub async fn get_signal_by_node_id(
    State(state): State<ApiState>,
    query: Result<Query<NodeIdQuery>, QueryRejection>,
) -> Result<Json<Signal>, ApiError> {
    let Query(NodeIdQuery { node_id }) =
        query.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    state
        .repo
        .find_by_node_id(&node_id)?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("signal {node_id:?} not found")))
}

/// GET /signals/stats
///
/// 204 with no body when nothing is stored.
pub async fn signal_stats(State(state): State<ApiState>) -> Result<Response, ApiError> {
    let signals = state.repo.find_all()?;
    match signalapi_stats::compute(&signals) {
        Some(stats) => Ok(Json(stats).into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

/// Fallback for known paths hit with a method other than GET.
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed(format!("method {method} is not allowed on {}", uri.path()))
}

/// Fallback for unmatched routes.
pub async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("the requested endpoint does not exist: {uri}"))
}
