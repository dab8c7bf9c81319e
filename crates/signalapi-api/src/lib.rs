//! signalapi-api — REST API over the signal store.
//!
//! # API Routes
//!
//! | Method | Path | Description |
//! |---|---|---|
//! | GET | `/signals` | List all signals |
//! | GET | `/signals/by-node-id?node_id=<id>` | Get one signal, 404 if unknown |
//! | GET | `/signals/stats` | Aggregate statistics, 204 when the store is empty |
//!
//! Other methods on these paths get a JSON 405; unknown paths a JSON 404.

pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use signalapi_state::SignalRepository;

pub use error::ApiError;

/// Shared state for API handlers.
#[derive(Clone)]
pub struct ApiState {
    pub repo: Arc<dyn SignalRepository + Send + Sync>,
}

/// Build the API router over any signal repository.
pub fn build_router<R>(repo: R) -> Router
where
    R: SignalRepository + Send + Sync + 'static,
{
    let state = ApiState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/signals", get(handlers::list_signals))
        .route("/signals/by-node-id", get(handlers::get_signal_by_node_id))
        .route("/signals/stats", get(handlers::signal_stats))
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback(handlers::route_not_found)
        .with_state(state)
}
