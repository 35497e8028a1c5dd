//! Handlers for the buyer lead endpoints.
//!
//! Each mutation follows the same shape: validate, check ownership, then let
//! the repository run the row mutation and its audit write in one
//! transaction. Handlers never write history themselves.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use leadbook_core::buyer::{
    validate_bhk, validate_budget_range, validate_budget_value, validate_city, validate_email,
    validate_full_name, validate_notes, validate_phone, validate_property_type, validate_purpose,
    validate_source, validate_status, validate_tag, validate_timeline,
};
use leadbook_core::error::CoreError;
use leadbook_core::types::BuyerId;
use leadbook_core::validation::FieldErrors;
use leadbook_db::models::buyer::{CreateBuyer, UpdateBuyer};
use leadbook_db::repositories::{BuyerHistoryRepo, BuyerRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::identity::CallerIdentity;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for listing history entries.
#[derive(Debug, serde::Deserialize)]
pub struct HistoryParams {
    pub limit: Option<i64>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /buyers
///
/// List all buyers, most recently modified first.
pub async fn list_buyers(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let buyers = BuyerRepo::list(&state.pool).await?;
    Ok(Json(buyers))
}

/// POST /buyers
///
/// Create a new buyer lead. The record and its `{created: ...}` history
/// entry commit in one transaction.
pub async fn create_buyer(
    caller: CallerIdentity,
    State(state): State<AppState>,
    Json(input): Json<CreateBuyer>,
) -> AppResult<impl IntoResponse> {
    validate_create(&input).map_err(AppError::Validation)?;

    let buyer = BuyerRepo::create(&state.pool, &caller.owner_id, &input).await?;

    tracing::info!(
        buyer_id = %buyer.id,
        owner_id = %caller.owner_id,
        "Buyer created"
    );

    Ok((StatusCode::CREATED, Json(buyer)))
}

/// GET /buyers/{id}
///
/// Get a single buyer by ID.
pub async fn get_buyer(
    State(state): State<AppState>,
    Path(id): Path<BuyerId>,
) -> AppResult<impl IntoResponse> {
    let buyer = BuyerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Buyer", id }))?;

    Ok(Json(buyer))
}

/// PUT /buyers/{id}
///
/// Partially update a buyer. Fetch and ownership check happen before any
/// write; the mutation and its diff history entry commit atomically.
pub async fn update_buyer(
    caller: CallerIdentity,
    State(state): State<AppState>,
    Path(id): Path<BuyerId>,
    Json(input): Json<UpdateBuyer>,
) -> AppResult<impl IntoResponse> {
    let existing = BuyerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Buyer", id }))?;

    if existing.owner_id != caller.owner_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not own this buyer".into(),
        )));
    }

    validate_update(&input).map_err(AppError::Validation)?;

    let buyer = BuyerRepo::update(&state.pool, &existing, &caller.owner_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Buyer", id }))?;

    tracing::info!(
        buyer_id = %buyer.id,
        owner_id = %caller.owner_id,
        "Buyer updated"
    );

    Ok(Json(buyer))
}

/// DELETE /buyers/{id}
///
/// Delete a buyer. The row deletion and its `{deleted: ...}` snapshot
/// history entry commit in one transaction; the history row keeps the
/// deleted id as a dangling reference.
pub async fn delete_buyer(
    caller: CallerIdentity,
    State(state): State<AppState>,
    Path(id): Path<BuyerId>,
) -> AppResult<impl IntoResponse> {
    let existing = BuyerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Buyer", id }))?;

    if existing.owner_id != caller.owner_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not own this buyer".into(),
        )));
    }

    let deleted = BuyerRepo::delete(&state.pool, &existing, &caller.owner_id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Buyer", id }));
    }

    tracing::info!(
        buyer_id = %id,
        owner_id = %caller.owner_id,
        "Buyer deleted"
    );

    Ok(Json(json!({ "message": "Buyer deleted" })))
}

/// GET /buyers/{id}/history?limit=
///
/// List recent audit entries for a buyer, newest first. Works for deleted
/// buyers too: history outlives the record, so there is no existence check.
pub async fn list_history(
    State(state): State<AppState>,
    Path(id): Path<BuyerId>,
    Query(params): Query<HistoryParams>,
) -> AppResult<impl IntoResponse> {
    let entries = BuyerHistoryRepo::list_by_buyer(&state.pool, id, params.limit).await?;
    Ok(Json(entries))
}

// ---------------------------------------------------------------------------
// Payload validation
// ---------------------------------------------------------------------------

/// Validate a full create payload. All required fields must pass; optional
/// fields are checked only when present. Collects every failure so the 422
/// response carries the complete field-message map.
fn validate_create(input: &CreateBuyer) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if let Err(msg) = validate_full_name(&input.full_name) {
        errors.push("fullName", msg);
    }
    if let Err(msg) = validate_phone(&input.phone) {
        errors.push("phone", msg);
    }
    if let Some(ref email) = input.email {
        if let Err(msg) = validate_email(email) {
            errors.push("email", msg);
        }
    }
    if let Err(msg) = validate_city(&input.city) {
        errors.push("city", msg);
    }
    if let Err(msg) = validate_property_type(&input.property_type) {
        errors.push("propertyType", msg);
    }
    if let Some(ref bhk) = input.bhk {
        if let Err(msg) = validate_bhk(bhk) {
            errors.push("bhk", msg);
        }
    }
    if let Err(msg) = validate_purpose(&input.purpose) {
        errors.push("purpose", msg);
    }
    if let Some(min) = input.budget_min {
        if let Err(msg) = validate_budget_value(min) {
            errors.push("budgetMin", msg);
        }
    }
    if let Some(max) = input.budget_max {
        if let Err(msg) = validate_budget_value(max) {
            errors.push("budgetMax", msg);
        }
    }
    if let Err(msg) = validate_budget_range(input.budget_min, input.budget_max) {
        errors.push("budgetMax", msg);
    }
    if let Err(msg) = validate_timeline(&input.timeline) {
        errors.push("timeline", msg);
    }
    if let Err(msg) = validate_source(&input.source) {
        errors.push("source", msg);
    }
    if let Some(ref notes) = input.notes {
        if let Err(msg) = validate_notes(notes) {
            errors.push("notes", msg);
        }
    }
    if let Some(ref tags) = input.tags {
        for tag in tags {
            if let Err(msg) = validate_tag(tag) {
                errors.push("tags", msg);
            }
        }
    }

    errors.into_result()
}

/// Validate a partial update payload: each present field against its
/// individual rule. The budget-range cross-check applies only when both
/// bounds arrive in the same payload.
fn validate_update(input: &UpdateBuyer) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if let Some(ref full_name) = input.full_name {
        if let Err(msg) = validate_full_name(full_name) {
            errors.push("fullName", msg);
        }
    }
    if let Some(ref phone) = input.phone {
        if let Err(msg) = validate_phone(phone) {
            errors.push("phone", msg);
        }
    }
    if let Some(ref email) = input.email {
        if let Err(msg) = validate_email(email) {
            errors.push("email", msg);
        }
    }
    if let Some(ref city) = input.city {
        if let Err(msg) = validate_city(city) {
            errors.push("city", msg);
        }
    }
    if let Some(ref property_type) = input.property_type {
        if let Err(msg) = validate_property_type(property_type) {
            errors.push("propertyType", msg);
        }
    }
    if let Some(ref bhk) = input.bhk {
        if let Err(msg) = validate_bhk(bhk) {
            errors.push("bhk", msg);
        }
    }
    if let Some(ref purpose) = input.purpose {
        if let Err(msg) = validate_purpose(purpose) {
            errors.push("purpose", msg);
        }
    }
    if let Some(min) = input.budget_min {
        if let Err(msg) = validate_budget_value(min) {
            errors.push("budgetMin", msg);
        }
    }
    if let Some(max) = input.budget_max {
        if let Err(msg) = validate_budget_value(max) {
            errors.push("budgetMax", msg);
        }
    }
    if let Err(msg) = validate_budget_range(input.budget_min, input.budget_max) {
        errors.push("budgetMax", msg);
    }
    if let Some(ref timeline) = input.timeline {
        if let Err(msg) = validate_timeline(timeline) {
            errors.push("timeline", msg);
        }
    }
    if let Some(ref source) = input.source {
        if let Err(msg) = validate_source(source) {
            errors.push("source", msg);
        }
    }
    if let Some(ref status) = input.status {
        if let Err(msg) = validate_status(status) {
            errors.push("status", msg);
        }
    }
    if let Some(ref notes) = input.notes {
        if let Err(msg) = validate_notes(notes) {
            errors.push("notes", msg);
        }
    }
    if let Some(ref tags) = input.tags {
        for tag in tags {
            if let Err(msg) = validate_tag(tag) {
                errors.push("tags", msg);
            }
        }
    }

    errors.into_result()
}
