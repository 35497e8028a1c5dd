//! Repository for the `buyer_history` table.

use sqlx::{PgPool, Postgres, Transaction};

use leadbook_core::types::BuyerId;

use crate::models::buyer_history::BuyerHistory;

/// Column list for buyer_history queries.
const COLUMNS: &str = "id, buyer_id, changed_by, diff, changed_at";

/// Default number of history entries returned per buyer.
const DEFAULT_LIMIT: i64 = 10;

/// Upper bound on the history page size.
const MAX_LIMIT: i64 = 100;

/// Provides insert and query operations for the append-only audit trail.
/// There is no update or delete: history rows are immutable.
pub struct BuyerHistoryRepo;

impl BuyerHistoryRepo {
    /// Insert a history row inside an already-open transaction.
    ///
    /// Callers pass their transaction so the audit write commits or rolls
    /// back together with the mutation it records.
    pub async fn insert(
        tx: &mut Transaction<'_, Postgres>,
        buyer_id: BuyerId,
        changed_by: &str,
        diff: serde_json::Value,
    ) -> Result<BuyerHistory, sqlx::Error> {
        let query = format!(
            "INSERT INTO buyer_history (buyer_id, changed_by, diff)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BuyerHistory>(&query)
            .bind(buyer_id)
            .bind(changed_by)
            .bind(diff)
            .fetch_one(&mut **tx)
            .await
    }

    /// List history entries for a buyer id, newest first.
    ///
    /// Deliberately does not check that the buyer still exists: history
    /// outlives deleted records, and their entries stay readable.
    pub async fn list_by_buyer(
        pool: &PgPool,
        buyer_id: BuyerId,
        limit: Option<i64>,
    ) -> Result<Vec<BuyerHistory>, sqlx::Error> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let query = format!(
            "SELECT {COLUMNS} FROM buyer_history
             WHERE buyer_id = $1
             ORDER BY changed_at DESC, id DESC
             LIMIT $2"
        );
        sqlx::query_as::<_, BuyerHistory>(&query)
            .bind(buyer_id)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
