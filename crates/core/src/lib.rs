//! Domain rules for buyer lead records.
//!
//! This crate has no database or HTTP dependencies so the same constants,
//! validation rules, and diff primitives can be used by the API layer and any
//! future import or CLI tooling.

pub mod buyer;
pub mod diff;
pub mod error;
pub mod tags;
pub mod types;
pub mod validation;
