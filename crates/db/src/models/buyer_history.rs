//! Buyer history model. Audit entries are append-only: there is no update
//! DTO and no `updated_at` column.

use serde::Serialize;
use sqlx::FromRow;

use leadbook_core::types::{BuyerId, Timestamp};

/// A row from the `buyer_history` table.
///
/// `buyer_id` is a reference, not ownership: the buyer may have been deleted
/// while its history persists. `diff` is one of `{created: record}`,
/// `{deleted: record}`, or `{field: {old, new}, ...}`.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct BuyerHistory {
    pub id: uuid::Uuid,
    pub buyer_id: BuyerId,
    pub changed_by: String,
    pub diff: serde_json::Value,
    pub changed_at: Timestamp,
}
