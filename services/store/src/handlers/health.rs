use axum::{extract::State, http::StatusCode};

use periph_core::health::readiness;

use crate::state::AppState;

/// 200 once the database answers a ping, 503 otherwise.
pub async fn readyz(State(state): State<AppState>) -> StatusCode {
    readiness(state.db.ping().await)
}
