use crate::error::ApiError;

/// Trimmed value of a required text field, `None` when absent or blank
pub fn required(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Like [`required`] but returns the value untouched (passwords keep their whitespace)
pub fn required_secret(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Parse a numeric path identifier, rejecting anything else with 400
pub fn parse_id(raw: &str, entity: &str) -> Result<i32, ApiError> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::bad_request(format!("Invalid {entity} id: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_missing_and_blank() {
        assert_eq!(required(&None), None);
        assert_eq!(required(&Some("   ".to_string())), None);
        assert_eq!(required(&Some("  Eng ".to_string())), Some("Eng"));
    }

    #[test]
    fn secrets_are_not_trimmed() {
        assert_eq!(required_secret(&Some(" pw ".to_string())), Some(" pw "));
        assert_eq!(required_secret(&Some(String::new())), None);
    }

    #[test]
    fn parse_id_accepts_positive_integers_only() {
        assert_eq!(parse_id("42", "University").unwrap(), 42);
        assert!(parse_id("abc", "University").is_err());
        assert!(parse_id("-1", "University").is_err());

        let err = parse_id("x1", "Faculty").unwrap_err();
        assert_eq!(err.message(), "Invalid Faculty id: x1");
    }
}
