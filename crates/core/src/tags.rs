//! Tag storage helpers.
//!
//! Tags are persisted as a single comma-joined string on the buyer row and on
//! the wire; they only become a list again at the form UI boundary.

/// Join a tag list into its stored form. An empty list joins to `""`.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(",")
}

/// Split a stored tag string back into a list. `""` splits to an empty list.
pub fn split_tags(stored: &str) -> Vec<String> {
    if stored.is_empty() {
        Vec::new()
    } else {
        stored.split(',').map(String::from).collect()
    }
}

/// Stored tag value for the create path: absent or empty input stores as the
/// empty string, never null.
pub fn stored_tags_for_create(tags: Option<&[String]>) -> String {
    tags.map(join_tags).unwrap_or_default()
}

/// Stored tag value for the update path: `None` means "leave the stored tags
/// untouched". Tags supplied but empty also fall back to the prior stored
/// value rather than clearing them.
pub fn stored_tags_for_update(tags: Option<&[String]>) -> Option<String> {
    match tags {
        Some(t) if !t.is_empty() => Some(join_tags(t)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(tags: &[&str]) -> Vec<String> {
        tags.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn join_and_split_round_trip() {
        let tags = owned(&["urgent", "investor"]);
        let stored = join_tags(&tags);
        assert_eq!(stored, "urgent,investor");
        assert_eq!(split_tags(&stored), tags);
    }

    #[test]
    fn empty_list_stores_as_empty_string() {
        assert_eq!(join_tags(&[]), "");
        assert_eq!(split_tags(""), Vec::<String>::new());
    }

    #[test]
    fn create_path_never_stores_null() {
        assert_eq!(stored_tags_for_create(None), "");
        assert_eq!(stored_tags_for_create(Some(&[])), "");
        assert_eq!(
            stored_tags_for_create(Some(&owned(&["vip"]))),
            "vip".to_string()
        );
    }

    #[test]
    fn update_path_empty_tags_fall_back() {
        assert_eq!(stored_tags_for_update(None), None);
        // Supplied-but-empty does NOT clear the stored tags.
        assert_eq!(stored_tags_for_update(Some(&[])), None);
        assert_eq!(
            stored_tags_for_update(Some(&owned(&["urgent", "investor"]))),
            Some("urgent,investor".to_string())
        );
    }
}
