//! Buyer lead constants and per-field validation functions.
//!
//! Provides the enumerated value lists (cities, property types, timelines,
//! etc.) and one validation function per field, each returning a
//! human-readable message on failure. Handlers collect these into a
//! [`crate::validation::FieldErrors`] map for 422 responses.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Minimum length of a buyer's full name in characters.
pub const MIN_FULL_NAME_LENGTH: usize = 2;

/// Maximum length of a buyer's full name in characters.
pub const MAX_FULL_NAME_LENGTH: usize = 80;

/// Phone numbers are bare digit strings of this length range.
pub const MIN_PHONE_DIGITS: usize = 10;
pub const MAX_PHONE_DIGITS: usize = 15;

/// Maximum length of the freeform notes field in characters.
pub const MAX_NOTES_LENGTH: usize = 1000;

/// Maximum length of a single tag in characters.
pub const MAX_TAG_LENGTH: usize = 40;

/// Status assigned to every newly created buyer.
pub const STATUS_NEW: &str = "New";

/// All valid city values.
pub const VALID_CITIES: &[&str] = &["Chandigarh", "Mohali", "Zirakpur", "Panchkula", "Other"];

/// All valid property types.
pub const VALID_PROPERTY_TYPES: &[&str] = &["Apartment", "Villa", "Plot", "Office", "Retail"];

/// All valid bedroom-count categories.
pub const VALID_BHK_VALUES: &[&str] = &["1", "2", "3", "4", "Studio"];

/// All valid purchase purposes.
pub const VALID_PURPOSES: &[&str] = &["Buy", "Rent"];

/// All valid purchase timelines.
pub const VALID_TIMELINES: &[&str] = &["0-3m", "3-6m", ">6m", "Exploring"];

/// All valid lead sources.
pub const VALID_SOURCES: &[&str] = &["Website", "Referral", "Walk-in", "Call", "Other"];

/// All valid lead statuses.
pub const VALID_STATUSES: &[&str] = &[
    "New",
    "Qualified",
    "Contacted",
    "Visited",
    "Negotiation",
    "Converted",
    "Dropped",
];

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Validate a full name: 2 to 80 characters.
pub fn validate_full_name(full_name: &str) -> Result<(), String> {
    let len = full_name.chars().count();
    if len < MIN_FULL_NAME_LENGTH {
        return Err(format!(
            "fullName must be at least {MIN_FULL_NAME_LENGTH} characters"
        ));
    }
    if len > MAX_FULL_NAME_LENGTH {
        return Err(format!(
            "fullName must be at most {MAX_FULL_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a phone number: 10 to 15 ASCII digits, nothing else.
pub fn validate_phone(phone: &str) -> Result<(), String> {
    let digits_only = phone.chars().all(|c| c.is_ascii_digit());
    if !digits_only || phone.len() < MIN_PHONE_DIGITS || phone.len() > MAX_PHONE_DIGITS {
        return Err(format!(
            "phone must be {MIN_PHONE_DIGITS} to {MAX_PHONE_DIGITS} digits"
        ));
    }
    Ok(())
}

/// Validate an email address: a non-empty local part and a dotted domain.
pub fn validate_email(email: &str) -> Result<(), String> {
    let valid = email
        .split_once('@')
        .map(|(local, domain)| {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        })
        .unwrap_or(false);
    if valid {
        Ok(())
    } else {
        Err("email must be a valid email address".to_string())
    }
}

/// Validate that the city is one of the allowed values.
pub fn validate_city(city: &str) -> Result<(), String> {
    if VALID_CITIES.contains(&city) {
        Ok(())
    } else {
        Err(format!(
            "Invalid city '{city}'. Must be one of: {}",
            VALID_CITIES.join(", ")
        ))
    }
}

/// Validate that the property type is one of the allowed values.
pub fn validate_property_type(property_type: &str) -> Result<(), String> {
    if VALID_PROPERTY_TYPES.contains(&property_type) {
        Ok(())
    } else {
        Err(format!(
            "Invalid propertyType '{property_type}'. Must be one of: {}",
            VALID_PROPERTY_TYPES.join(", ")
        ))
    }
}

/// Validate that the bedroom-count category is one of the allowed values.
pub fn validate_bhk(bhk: &str) -> Result<(), String> {
    if VALID_BHK_VALUES.contains(&bhk) {
        Ok(())
    } else {
        Err(format!(
            "Invalid bhk '{bhk}'. Must be one of: {}",
            VALID_BHK_VALUES.join(", ")
        ))
    }
}

/// Validate that the purpose is one of the allowed values.
pub fn validate_purpose(purpose: &str) -> Result<(), String> {
    if VALID_PURPOSES.contains(&purpose) {
        Ok(())
    } else {
        Err(format!(
            "Invalid purpose '{purpose}'. Must be one of: {}",
            VALID_PURPOSES.join(", ")
        ))
    }
}

/// Validate that the timeline is one of the allowed values.
pub fn validate_timeline(timeline: &str) -> Result<(), String> {
    if VALID_TIMELINES.contains(&timeline) {
        Ok(())
    } else {
        Err(format!(
            "Invalid timeline '{timeline}'. Must be one of: {}",
            VALID_TIMELINES.join(", ")
        ))
    }
}

/// Validate that the lead source is one of the allowed values.
pub fn validate_source(source: &str) -> Result<(), String> {
    if VALID_SOURCES.contains(&source) {
        Ok(())
    } else {
        Err(format!(
            "Invalid source '{source}'. Must be one of: {}",
            VALID_SOURCES.join(", ")
        ))
    }
}

/// Validate that the status is one of the allowed values.
pub fn validate_status(status: &str) -> Result<(), String> {
    if VALID_STATUSES.contains(&status) {
        Ok(())
    } else {
        Err(format!(
            "Invalid status '{status}'. Must be one of: {}",
            VALID_STATUSES.join(", ")
        ))
    }
}

/// Validate a single budget bound: must be non-negative.
pub fn validate_budget_value(value: i64) -> Result<(), String> {
    if value < 0 {
        Err("budget must be non-negative".to_string())
    } else {
        Ok(())
    }
}

/// Validate the budget range. Only applies when both bounds are present:
/// `budget_max` must be greater than or equal to `budget_min`.
pub fn validate_budget_range(
    budget_min: Option<i64>,
    budget_max: Option<i64>,
) -> Result<(), String> {
    if let (Some(min), Some(max)) = (budget_min, budget_max) {
        if max < min {
            return Err("budgetMax must be greater than or equal to budgetMin".to_string());
        }
    }
    Ok(())
}

/// Validate the notes field: within the length limit.
pub fn validate_notes(notes: &str) -> Result<(), String> {
    if notes.chars().count() > MAX_NOTES_LENGTH {
        return Err(format!(
            "notes must be at most {MAX_NOTES_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a single tag: non-empty, within the length limit, and free of the
/// comma separator used by the stored form.
pub fn validate_tag(tag: &str) -> Result<(), String> {
    if tag.is_empty() {
        return Err("tags must not contain empty strings".to_string());
    }
    if tag.chars().count() > MAX_TAG_LENGTH {
        return Err(format!("tags must be at most {MAX_TAG_LENGTH} characters"));
    }
    if tag.contains(',') {
        return Err("tags must not contain commas".to_string());
    }
    Ok(())
}
