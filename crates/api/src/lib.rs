//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes
//! - Error to HTTP response mapping
//! - CORS and request tracing layers

pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use cashpoint_core::WithdrawalService;
use cashpoint_shared::AppConfig;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Withdrawal service used by the breakdown routes.
    pub withdrawals: Arc<WithdrawalService>,
}

impl AppState {
    /// Builds the state from the loaded configuration.
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            withdrawals: Arc::new(WithdrawalService::new(
                config.dispenser.currency_symbol.clone(),
            )),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
