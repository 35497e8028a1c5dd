//! Per-field validation error collection.
//!
//! Validation failures carry one message list per field so callers get every
//! problem in a single response rather than the first failure only.

use std::collections::BTreeMap;

use serde::Serialize;

/// Field name to list of validation messages. Serializes transparently as a
/// JSON object: `{"fullName": ["..."], "phone": ["..."]}`.
#[derive(Debug, Default, Serialize)]
pub struct FieldErrors(pub BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a validation message against a field.
    pub fn push(&mut self, field: &str, message: String) {
        self.0.entry(field.to_string()).or_default().push(message);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert into a `Result`: `Ok(())` when no errors were recorded.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_errors_convert_to_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }

    #[test]
    fn messages_accumulate_per_field() {
        let mut errors = FieldErrors::new();
        errors.push("phone", "too short".to_string());
        errors.push("phone", "not digits".to_string());
        errors.push("city", "unknown".to_string());

        let errors = errors.into_result().unwrap_err();
        assert_eq!(errors.0["phone"].len(), 2);
        assert_eq!(errors.0["city"].len(), 1);
    }

    #[test]
    fn serializes_as_flat_object() {
        let mut errors = FieldErrors::new();
        errors.push("fullName", "too short".to_string());

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["fullName"][0], "too short");
    }
}
