use std::sync::OnceLock;

use papers_parser::{AffiliationField, NOT_AVAILABLE};
use regex::Regex;

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9.-]+")
            .expect("Failed to compile email regex")
    })
}

/// Extract the first email address embedded in affiliation text
///
/// A list of affiliations is joined with single spaces before matching, so
/// the first address in byline order wins. Returns `"N/A"` when the field is
/// missing or contains no address. The domain is not validated beyond the
/// pattern, so a sentence-ending dot stays attached to the match.
///
/// # Example
///
/// ```
/// use papers_client::{AffiliationField, extract_email};
///
/// let field = AffiliationField::List(vec![
///     "Pfizer Inc.".to_string(),
///     "contact@pfizer.com".to_string(),
/// ]);
/// assert_eq!(extract_email(&field), "contact@pfizer.com");
/// assert_eq!(extract_email(&AffiliationField::Missing), "N/A");
/// ```
pub fn extract_email(field: &AffiliationField) -> String {
    let text = match field {
        AffiliationField::Text(text) => text.clone(),
        AffiliationField::List(items) => items.join(" "),
        AffiliationField::Missing => return NOT_AVAILABLE.to_string(),
    };

    email_regex()
        .find(&text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}
