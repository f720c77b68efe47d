use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Placeholder written into report columns that have no value
pub const NOT_AVAILABLE: &str = "N/A";

/// Affiliation data attached to an article
///
/// MEDLINE records list affiliations as repeated `AD` lines, while JSON
/// sources sometimes flatten them into a single string. Both shapes are kept
/// explicit here and converted to an ordered list with [`normalize`].
///
/// [`normalize`]: AffiliationField::normalize
///
/// # Example
///
/// ```
/// use papers_parser::AffiliationField;
///
/// let single = AffiliationField::Text("Pfizer Inc., New York".to_string());
/// assert_eq!(single.normalize(), vec!["Pfizer Inc., New York"]);
///
/// assert!(AffiliationField::Missing.normalize().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(untagged)]
pub enum AffiliationField {
    /// A single affiliation string
    Text(String),
    /// Ordered affiliation strings, one per `AD` line
    List(Vec<String>),
    /// No affiliation data, or data of an unsupported shape
    #[default]
    Missing,
}

impl AffiliationField {
    /// Ordered view of the affiliations (a bare string becomes one element)
    pub fn normalize(&self) -> Vec<&str> {
        match self {
            AffiliationField::Text(text) => vec![text.as_str()],
            AffiliationField::List(items) => items.iter().map(String::as_str).collect(),
            AffiliationField::Missing => Vec::new(),
        }
    }

    /// Returns true when there is no affiliation data at all
    pub fn is_missing(&self) -> bool {
        matches!(self, AffiliationField::Missing)
    }
}

impl From<Value> for AffiliationField {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => AffiliationField::Text(text),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(text) => Some(text),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map(AffiliationField::List)
                .unwrap_or(AffiliationField::Missing),
            _ => AffiliationField::Missing,
        }
    }
}

impl<'de> Deserialize<'de> for AffiliationField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(AffiliationField::from)
    }
}

/// Bibliographic metadata for a single PubMed article
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// PubMed ID (`PMID`)
    #[serde(default)]
    pub pmid: Option<String>,
    /// Article title (`TI`)
    #[serde(default)]
    pub title: Option<String>,
    /// Publication date as printed by PubMed (`DP`), e.g. "2023 Mar 14"
    #[serde(default)]
    pub publication_date: Option<String>,
    /// Full author names in byline order (`FAU`)
    #[serde(default)]
    pub authors: Vec<String>,
    /// Author affiliations (`AD`)
    #[serde(default)]
    pub affiliations: AffiliationField,
}

/// One row of the industry-author report
///
/// Serialized field names match the report's CSV column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRecord {
    #[serde(rename = "PMID")]
    pub pmid: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Publication Date")]
    pub publication_date: String,
    /// Non-academic author names joined with `", "`
    #[serde(rename = "Non-academic Authors")]
    pub non_academic_authors: String,
    /// Affiliations of those authors joined with `"; "`, in the same order
    #[serde(rename = "Company Affiliations")]
    pub company_affiliations: String,
    /// First email address found in the article's affiliations, or `"N/A"`
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_email: String,
}
