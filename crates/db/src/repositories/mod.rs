//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Mutations that write an
//! audit entry run both statements inside one transaction.

pub mod buyer_history_repo;
pub mod buyer_repo;

pub use buyer_history_repo::BuyerHistoryRepo;
pub use buyer_repo::BuyerRepo;
