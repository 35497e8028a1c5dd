use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of the `/health` probe.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

/// Liveness plus a database reachability check. Reports `degraded` instead
/// of failing outright when the database is down, so load balancers can tell
/// "process up, database gone" apart from "process gone".
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = leadbook_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Health route, mounted at the root rather than under the API prefix.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
