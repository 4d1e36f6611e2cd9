//! Input validation shared by the services.
//!
//! Every helper trims its input and returns the cleaned value, or
//! `AppError::BadRequest` naming the offending field.

use crate::server::{error::AppError, query::slug::is_valid_slug};

/// Longest accepted single-line text field.
pub const MAX_LINE_LEN: usize = 255;

/// Longest accepted body text (article content, messages).
pub const MAX_BODY_LEN: usize = 100_000;

/// Requires a non-blank value of at most `max_len` characters.
pub fn required_text(field: &str, value: &str, max_len: usize) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }
    if value.chars().count() > max_len {
        return Err(AppError::BadRequest(format!(
            "{} must be at most {} characters",
            field, max_len
        )));
    }
    Ok(value.to_string())
}

/// Trims an optional value, treating blank text as absent.
pub fn optional_text(
    field: &str,
    value: Option<String>,
    max_len: usize,
) -> Result<Option<String>, AppError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => required_text(field, v, max_len).map(Some),
    }
}

/// Validates a partial update of a nullable text column.
///
/// `None` leaves the column untouched, a blank string clears it (`Some(None)`) and
/// anything else replaces it.
pub fn clearable_text(
    field: &str,
    update: Option<String>,
    max_len: usize,
) -> Result<Option<Option<String>>, AppError> {
    update
        .map(|v| optional_text(field, Some(v), max_len))
        .transpose()
}

/// Validates a partial update of a required text column.
pub fn replacement_text(
    field: &str,
    update: Option<String>,
    max_len: usize,
) -> Result<Option<String>, AppError> {
    update
        .map(|v| required_text(field, &v, max_len))
        .transpose()
}

/// Validates an explicitly supplied slug.
pub fn slug(value: &str) -> Result<String, AppError> {
    let value = value.trim();
    if !is_valid_slug(value) {
        return Err(AppError::BadRequest(format!(
            "'{}' is not a valid slug (lowercase letters, digits and single dashes)",
            value
        )));
    }
    Ok(value.to_string())
}

/// Validates and normalizes an email address (trimmed, lowercased).
///
/// Accepts `local@domain.tld` without whitespace; deliverability is not checked.
pub fn email(value: &str) -> Result<String, AppError> {
    let value = value.trim().to_lowercase();
    let invalid = || AppError::BadRequest(format!("'{}' is not a valid email address", value));

    if value.is_empty() || value.len() > MAX_LINE_LEN || value.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let Some((local, domain)) = value.split_once('@') else {
        return Err(invalid());
    };

    let domain_ok = !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains("..");

    if local.is_empty() || !domain_ok {
        return Err(invalid());
    }

    Ok(value)
}

/// Validates an ISO 4217 style currency code and uppercases it.
pub fn currency(value: Option<&str>, default: &str) -> Result<String, AppError> {
    let code = value
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(default)
        .to_uppercase();

    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(AppError::BadRequest(format!(
            "'{}' is not a valid currency code",
            code
        )));
    }
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_trims_and_rejects_blank() {
        assert_eq!(required_text("name", "  Abebe ", 10).unwrap(), "Abebe");
        assert!(matches!(
            required_text("name", "   ", 10),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn required_text_counts_characters_not_bytes() {
        // Six characters, sixteen bytes
        assert!(required_text("title", "ሰላም ሰላ", 6).is_ok());
        assert!(required_text("title", "ሰላም ሰላም", 6).is_err());
    }

    #[test]
    fn clearable_text_keeps_clears_or_replaces() {
        assert_eq!(clearable_text("f", None, 10).unwrap(), None);
        assert_eq!(clearable_text("f", Some(" ".into()), 10).unwrap(), Some(None));
        assert_eq!(
            clearable_text("f", Some(" new ".into()), 10).unwrap(),
            Some(Some("new".to_string()))
        );
    }

    #[test]
    fn replacement_text_rejects_blank() {
        assert_eq!(replacement_text("title", None, 10).unwrap(), None);
        assert!(replacement_text("title", Some("".into()), 10).is_err());
    }

    #[test]
    fn slug_must_match_pattern() {
        assert_eq!(slug(" rule-of-law ").unwrap(), "rule-of-law");
        assert!(slug("Rule of Law").is_err());
        assert!(slug("double--dash").is_err());
    }

    #[test]
    fn accepts_and_normalizes_email() {
        assert_eq!(email(" Reader@Example.ORG ").unwrap(), "reader@example.org");
    }

    #[test]
    fn rejects_malformed_email() {
        for bad in ["", "plain", "@example.org", "a@b", "a@.org", "a b@example.org", "a@@b.org"] {
            assert!(email(bad).is_err(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn currency_defaults_and_uppercases() {
        assert_eq!(currency(None, "ETB").unwrap(), "ETB");
        assert_eq!(currency(Some("usd"), "ETB").unwrap(), "USD");
        assert!(currency(Some("dollars"), "ETB").is_err());
    }
}
