pub mod buyers;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /buyers                  list (GET), create (POST)
/// /buyers/{id}             get, update (PUT), delete
/// /buyers/{id}/history     recent audit entries (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/buyers", buyers::router())
}
