//! Caller-identity extractor for Axum handlers.
//!
//! There is no authentication layer yet; the owner identity is injected as a
//! handler parameter so every mutation receives it explicitly instead of
//! reading process-wide state. A future auth layer replaces the extraction
//! source without touching the handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::state::AppState;

/// The identity performing a request, used for ownership checks and recorded
/// as `changed_by` in the audit trail.
///
/// Resolved from the `x-owner-id` request header when present, otherwise the
/// configured default owner:
///
/// ```ignore
/// async fn my_handler(caller: CallerIdentity) -> AppResult<Json<()>> {
///     tracing::info!(owner_id = %caller.owner_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CallerIdentity {
    pub owner_id: String,
}

impl FromRequestParts<AppState> for CallerIdentity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let owner_id = match parts.headers.get("x-owner-id") {
            Some(value) => value
                .to_str()
                .map_err(|_| {
                    AppError::BadRequest("x-owner-id header must be valid UTF-8".into())
                })?
                .to_string(),
            None => state.config.default_owner_id.clone(),
        };

        if owner_id.is_empty() {
            return Err(AppError::BadRequest(
                "x-owner-id header must not be empty".into(),
            ));
        }

        Ok(CallerIdentity { owner_id })
    }
}
