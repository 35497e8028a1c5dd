/// Buyer primary keys are UUIDs generated by the database.
pub type BuyerId = uuid::Uuid;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
