//! Route definitions for the buyer lead endpoints.
//!
//! Mounted at `/buyers` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::buyers;
use crate::state::AppState;

/// Buyer routes.
///
/// ```text
/// GET    /              -> list_buyers
/// POST   /              -> create_buyer
/// GET    /{id}          -> get_buyer
/// PUT    /{id}          -> update_buyer
/// DELETE /{id}          -> delete_buyer
/// GET    /{id}/history  -> list_history (?limit)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(buyers::list_buyers).post(buyers::create_buyer))
        .route(
            "/{id}",
            get(buyers::get_buyer)
                .put(buyers::update_buyer)
                .delete(buyers::delete_buyer),
        )
        .route("/{id}/history", get(buyers::list_history))
}
