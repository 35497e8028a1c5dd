//! Repository for the `buyers` table.
//!
//! Create, update, and delete each pair their row mutation with an audit
//! write in a single transaction, so a buyer change can never commit without
//! its history entry (and vice versa).

use sqlx::PgPool;

use leadbook_core::buyer::STATUS_NEW;
use leadbook_core::diff::{self, Diff};
use leadbook_core::tags::{stored_tags_for_create, stored_tags_for_update};
use leadbook_core::types::BuyerId;

use crate::models::buyer::{Buyer, CreateBuyer, UpdateBuyer};
use crate::repositories::BuyerHistoryRepo;

/// Column list for buyers queries.
const COLUMNS: &str = "id, full_name, email, phone, city, property_type, bhk, purpose, \
    budget_min, budget_max, timeline, source, status, notes, tags, owner_id, \
    created_at, updated_at";

/// Provides CRUD operations for buyers.
pub struct BuyerRepo;

impl BuyerRepo {
    /// List all buyers, most recently modified first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Buyer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM buyers ORDER BY updated_at DESC");
        sqlx::query_as::<_, Buyer>(&query).fetch_all(pool).await
    }

    /// Find a buyer by its ID.
    pub async fn find_by_id(pool: &PgPool, id: BuyerId) -> Result<Option<Buyer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM buyers WHERE id = $1");
        sqlx::query_as::<_, Buyer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new buyer and its `{created: ...}` history entry in one
    /// transaction. Status is fixed to `New`; tags are stored comma-joined
    /// (empty or absent input stores as the empty string).
    pub async fn create(
        pool: &PgPool,
        owner_id: &str,
        input: &CreateBuyer,
    ) -> Result<Buyer, sqlx::Error> {
        let tags = stored_tags_for_create(input.tags.as_deref());

        let mut tx = pool.begin().await?;

        let insert_query = format!(
            "INSERT INTO buyers
                (full_name, email, phone, city, property_type, bhk, purpose,
                 budget_min, budget_max, timeline, source, status, notes, tags, owner_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
             RETURNING {COLUMNS}"
        );
        let buyer = sqlx::query_as::<_, Buyer>(&insert_query)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.city)
            .bind(&input.property_type)
            .bind(&input.bhk)
            .bind(&input.purpose)
            .bind(input.budget_min)
            .bind(input.budget_max)
            .bind(&input.timeline)
            .bind(&input.source)
            .bind(STATUS_NEW)
            .bind(&input.notes)
            .bind(&tags)
            .bind(owner_id)
            .fetch_one(&mut *tx)
            .await?;

        BuyerHistoryRepo::insert(&mut tx, buyer.id, owner_id, diff::created_entry(&buyer))
            .await?;

        tx.commit().await?;
        Ok(buyer)
    }

    /// Apply a partial update and, when at least one field actually changed,
    /// record the field-level diff as a history entry -- both inside one
    /// transaction. Returns `None` if the row vanished since `existing` was
    /// fetched.
    ///
    /// Tags supplied but empty do not clear the stored tags: the bind falls
    /// back to the prior value via COALESCE.
    pub async fn update(
        pool: &PgPool,
        existing: &Buyer,
        changed_by: &str,
        input: &UpdateBuyer,
    ) -> Result<Option<Buyer>, sqlx::Error> {
        let tags = stored_tags_for_update(input.tags.as_deref());

        let mut tx = pool.begin().await?;

        let update_query = format!(
            "UPDATE buyers SET
                full_name = COALESCE($2, full_name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                city = COALESCE($5, city),
                property_type = COALESCE($6, property_type),
                bhk = COALESCE($7, bhk),
                purpose = COALESCE($8, purpose),
                budget_min = COALESCE($9, budget_min),
                budget_max = COALESCE($10, budget_max),
                timeline = COALESCE($11, timeline),
                source = COALESCE($12, source),
                status = COALESCE($13, status),
                notes = COALESCE($14, notes),
                tags = COALESCE($15, tags),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Buyer>(&update_query)
            .bind(existing.id)
            .bind(&input.full_name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.city)
            .bind(&input.property_type)
            .bind(&input.bhk)
            .bind(&input.purpose)
            .bind(input.budget_min)
            .bind(input.budget_max)
            .bind(&input.timeline)
            .bind(&input.source)
            .bind(&input.status)
            .bind(&input.notes)
            .bind(&tags)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(updated) = updated else {
            return Ok(None);
        };

        let changes = update_diff(existing, &updated, input);
        if !changes.is_empty() {
            BuyerHistoryRepo::insert(
                &mut tx,
                updated.id,
                changed_by,
                serde_json::Value::Object(changes),
            )
            .await?;
        }

        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Delete a buyer and archive its full snapshot as a `{deleted: ...}`
    /// history entry in one transaction. The history row keeps referencing
    /// the deleted id. Returns `false` if the row was already gone.
    pub async fn delete(
        pool: &PgPool,
        existing: &Buyer,
        changed_by: &str,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result = sqlx::query("DELETE FROM buyers WHERE id = $1")
            .bind(existing.id)
            .execute(&mut *tx)
            .await?;
        if result.rows_affected() == 0 {
            return Ok(false);
        }

        BuyerHistoryRepo::insert(
            &mut tx,
            existing.id,
            changed_by,
            diff::deleted_entry(existing),
        )
        .await?;

        tx.commit().await?;
        Ok(true)
    }
}

/// Field-by-field diff between the pre- and post-update snapshots, restricted
/// to the fields present in the payload. Absent payload fields are never
/// compared, so they cannot appear in the diff. New updatable columns must be
/// added to this list.
fn update_diff(existing: &Buyer, updated: &Buyer, input: &UpdateBuyer) -> Diff {
    let mut changes = Diff::new();
    if input.full_name.is_some() {
        diff::record_change(&mut changes, "fullName", &existing.full_name, &updated.full_name);
    }
    if input.email.is_some() {
        diff::record_change(&mut changes, "email", &existing.email, &updated.email);
    }
    if input.phone.is_some() {
        diff::record_change(&mut changes, "phone", &existing.phone, &updated.phone);
    }
    if input.city.is_some() {
        diff::record_change(&mut changes, "city", &existing.city, &updated.city);
    }
    if input.property_type.is_some() {
        diff::record_change(
            &mut changes,
            "propertyType",
            &existing.property_type,
            &updated.property_type,
        );
    }
    if input.bhk.is_some() {
        diff::record_change(&mut changes, "bhk", &existing.bhk, &updated.bhk);
    }
    if input.purpose.is_some() {
        diff::record_change(&mut changes, "purpose", &existing.purpose, &updated.purpose);
    }
    if input.budget_min.is_some() {
        diff::record_change(
            &mut changes,
            "budgetMin",
            &existing.budget_min,
            &updated.budget_min,
        );
    }
    if input.budget_max.is_some() {
        diff::record_change(
            &mut changes,
            "budgetMax",
            &existing.budget_max,
            &updated.budget_max,
        );
    }
    if input.timeline.is_some() {
        diff::record_change(&mut changes, "timeline", &existing.timeline, &updated.timeline);
    }
    if input.source.is_some() {
        diff::record_change(&mut changes, "source", &existing.source, &updated.source);
    }
    if input.status.is_some() {
        diff::record_change(&mut changes, "status", &existing.status, &updated.status);
    }
    if input.notes.is_some() {
        diff::record_change(&mut changes, "notes", &existing.notes, &updated.notes);
    }
    if input.tags.is_some() {
        // Compared on the stored comma-joined form: a supplied-but-empty tag
        // list keeps the prior stored value, so it diffs as unchanged.
        diff::record_change(&mut changes, "tags", &existing.tags, &updated.tags);
    }
    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_buyer() -> Buyer {
        let now = Utc::now();
        Buyer {
            id: Uuid::new_v4(),
            full_name: "A".to_string(),
            email: None,
            phone: "1234567890".to_string(),
            city: "Mohali".to_string(),
            property_type: "Apartment".to_string(),
            bhk: None,
            purpose: "Buy".to_string(),
            budget_min: None,
            budget_max: None,
            timeline: "Exploring".to_string(),
            source: "Website".to_string(),
            status: "New".to_string(),
            notes: None,
            tags: "urgent,investor".to_string(),
            owner_id: "demo-owner".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn empty_update() -> UpdateBuyer {
        UpdateBuyer {
            full_name: None,
            email: None,
            phone: None,
            city: None,
            property_type: None,
            bhk: None,
            purpose: None,
            budget_min: None,
            budget_max: None,
            timeline: None,
            source: None,
            status: None,
            notes: None,
            tags: None,
        }
    }

    #[test]
    fn diff_contains_only_changed_payload_fields() {
        let existing = sample_buyer();
        let mut updated = existing.clone();
        updated.city = "Chandigarh".to_string();
        // Changed in the row but absent from the payload: must not appear.
        updated.status = "Qualified".to_string();

        let input = UpdateBuyer {
            city: Some("Chandigarh".to_string()),
            ..empty_update()
        };

        let changes = update_diff(&existing, &updated, &input);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes["city"]["old"], "Mohali");
        assert_eq!(changes["city"]["new"], "Chandigarh");
    }

    #[test]
    fn diff_is_empty_when_payload_matches_current_values() {
        let existing = sample_buyer();
        let updated = existing.clone();

        let input = UpdateBuyer {
            city: Some("Mohali".to_string()),
            phone: Some("1234567890".to_string()),
            ..empty_update()
        };

        assert!(update_diff(&existing, &updated, &input).is_empty());
    }

    #[test]
    fn empty_tag_list_diffs_as_unchanged() {
        let existing = sample_buyer();
        // The COALESCE fallback keeps the stored tags when the payload tags
        // are empty, so both sides carry the same stored string.
        let updated = existing.clone();

        let input = UpdateBuyer {
            tags: Some(Vec::new()),
            ..empty_update()
        };

        assert!(update_diff(&existing, &updated, &input).is_empty());
    }

    #[test]
    fn replaced_tags_diff_on_stored_form() {
        let existing = sample_buyer();
        let mut updated = existing.clone();
        updated.tags = "vip".to_string();

        let input = UpdateBuyer {
            tags: Some(vec!["vip".to_string()]),
            ..empty_update()
        };

        let changes = update_diff(&existing, &updated, &input);
        assert_eq!(changes["tags"]["old"], "urgent,investor");
        assert_eq!(changes["tags"]["new"], "vip");
    }

    #[test]
    fn optional_field_set_from_null_is_recorded() {
        let existing = sample_buyer();
        let mut updated = existing.clone();
        updated.budget_min = Some(500_000);

        let input = UpdateBuyer {
            budget_min: Some(500_000),
            ..empty_update()
        };

        let changes = update_diff(&existing, &updated, &input);
        assert_eq!(changes["budgetMin"]["old"], serde_json::Value::Null);
        assert_eq!(changes["budgetMin"]["new"], 500_000);
    }
}
