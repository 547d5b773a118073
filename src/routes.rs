use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use sea_orm::DatabaseConnection;

use crate::constraints::ListConstraints;
use crate::criteria::ListEntriesCriteria;
use crate::errors::ApiError;
use crate::models::ListEntriesParams;
use crate::normalize::normalize;
use crate::operations::list_entries;
use crate::response::ListEntriesResponse;
use crate::validate::validate;

/// Shared handler state: the connection plus the injected list limits.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub constraints: ListConstraints,
}

/// GET /entries - list journal entries with filtering, sorting, and
/// pagination.
///
/// Runs the whole pipeline in order: normalize, validate, freeze the
/// criteria, execute. No stage re-enters an earlier one.
///
/// # Errors
///
/// Returns 422 with a rejection code for inadmissible input, 500 for storage
/// failures.
pub async fn list_entries_handler(
    Query(params): Query<ListEntriesParams>,
    State(state): State<AppState>,
) -> Result<Json<ListEntriesResponse>, ApiError> {
    let normalized = normalize(&params, &state.constraints);
    let dates = validate(&normalized, &state.constraints)?;
    let criteria = ListEntriesCriteria::new(&normalized, dates);
    let page = list_entries(&state.db, &criteria)
        .await
        .map_err(ApiError::database)?;
    Ok(Json(page))
}

/// Builds the entries router with the given connection and limits.
#[must_use]
pub fn router(db: DatabaseConnection, constraints: ListConstraints) -> Router {
    Router::new()
        .route("/entries", get(list_entries_handler))
        .with_state(AppState { db, constraints })
}
