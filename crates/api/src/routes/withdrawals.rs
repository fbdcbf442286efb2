//! Withdrawal breakdown routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::QueryRejection},
    routing::get,
};
use cashpoint_shared::AppError;
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{info, warn};

use crate::{AppState, error::ApiError};
use cashpoint_shared::types::parse_amount;

/// Creates the withdrawal routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/withdrawals/breakdown", get(breakdown_by_query))
        .route("/withdrawals/breakdown/{amount}", get(breakdown_by_path))
}

/// Query parameters for the breakdown lookup.
#[derive(Debug, Deserialize)]
pub struct BreakdownQuery {
    /// Requested amount; blank counts as missing.
    pub amount: Option<String>,
}

/// GET `/withdrawals/breakdown/{amount}` - Bills to deliver for `amount`.
async fn breakdown_by_path(
    State(state): State<AppState>,
    Path(raw_amount): Path<String>,
) -> Result<Json<Vec<String>>, ApiError> {
    let amount = parse_raw_amount(&raw_amount)?;
    withdraw(&state, Some(amount))
}

/// GET `/withdrawals/breakdown?amount=` - Bills to deliver for `amount`.
async fn breakdown_by_query(
    State(state): State<AppState>,
    query: Result<Query<BreakdownQuery>, QueryRejection>,
) -> Result<Json<Vec<String>>, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Rejected malformed breakdown query");
        ApiError::from(AppError::Validation(rejection.body_text()))
    })?;
    let amount = query
        .amount
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .map(parse_raw_amount)
        .transpose()?;
    withdraw(&state, amount)
}

fn parse_raw_amount(raw: &str) -> Result<Decimal, ApiError> {
    parse_amount(raw).map_err(|e| {
        warn!(amount = %raw, error = %e, "Rejected unparseable withdrawal amount");
        ApiError::from(e)
    })
}

fn withdraw(state: &AppState, amount: Option<Decimal>) -> Result<Json<Vec<String>>, ApiError> {
    match state.withdrawals.withdraw(amount) {
        Ok(lines) => {
            info!(amount = ?amount, lines = lines.len(), "Computed withdrawal breakdown");
            Ok(Json(lines))
        }
        Err(e) => {
            warn!(amount = ?amount, code = e.error_code(), "Rejected withdrawal");
            Err(e.into())
        }
    }
}
