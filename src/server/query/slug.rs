//! URL slug generation and validation.

/// Maximum length of a generated slug.
const MAX_SLUG_LEN: usize = 80;

/// Derives a slug from free text.
///
/// ASCII letters and digits are kept (lowercased); every other run of characters becomes
/// a single `-`. Titles written only in non-Latin scripts produce an empty string.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }

        if slug.len() >= MAX_SLUG_LEN {
            break;
        }
    }

    slug.trim_end_matches('-').to_string()
}

/// Whether `slug` is lowercase ASCII words joined by single dashes.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= MAX_SLUG_LEN * 2
        && slug.split('-').all(|part| {
            !part.is_empty()
                && part
                    .bytes()
                    .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        })
}

/// Candidate used for the `attempt`-th try at a unique generated slug.
///
/// The first attempt is the base slug itself, later ones append `-2`, `-3`, ...
pub fn candidate(base: &str, attempt: u32) -> String {
    if attempt <= 1 {
        base.to_string()
    } else {
        format!("{}-{}", base, attempt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugifies_titles() {
        assert_eq!(slugify("Justice for All!"), "justice-for-all");
        assert_eq!(slugify("  --Hello,   World--  "), "hello-world");
        assert_eq!(slugify("Ethiopia 2030: A Vision"), "ethiopia-2030-a-vision");
    }

    #[test]
    fn non_latin_titles_produce_empty_slug() {
        assert_eq!(slugify("ፍትህ ለሁሉም"), "");
    }

    #[test]
    fn validates_slugs() {
        assert!(is_valid_slug("justice-for-all"));
        assert!(is_valid_slug("2030"));
        assert!(!is_valid_slug("Justice"));
        assert!(!is_valid_slug("double--dash"));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug(""));
    }

    #[test]
    fn numbers_candidates_after_the_first() {
        assert_eq!(candidate("essay", 1), "essay");
        assert_eq!(candidate("essay", 2), "essay-2");
        assert_eq!(candidate("essay", 3), "essay-3");
    }
}
