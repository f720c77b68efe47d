//! Validated PubMed identifiers

use crate::error::{PubMedError, Result};
use std::fmt;
use std::str::FromStr;

/// A validated PubMed ID (PMID)
///
/// ESearch returns PMIDs as strings; they are checked before being sent back
/// to EFetch so that a malformed id fails locally instead of producing an
/// empty or partial MEDLINE response.
///
/// # Examples
///
/// ```
/// use papers_client::PubMedId;
///
/// let pmid = PubMedId::parse("  31978945  ").unwrap();
/// assert_eq!(pmid.as_u32(), 31978945);
/// assert_eq!(pmid.to_string(), "31978945");
///
/// assert!(PubMedId::parse("").is_err());
/// assert!(PubMedId::parse("abc").is_err());
/// assert!(PubMedId::parse("0").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PubMedId {
    value: u32,
}

impl PubMedId {
    /// Parse a PMID from a string, trimming surrounding whitespace
    ///
    /// # Errors
    ///
    /// Returns `PubMedError::InvalidPmid` if the string is empty, is not a
    /// number that fits in a `u32`, or is zero.
    pub fn parse(s: &str) -> Result<Self> {
        let invalid = || PubMedError::InvalidPmid {
            pmid: s.to_string(),
        };

        let value = s.trim().parse::<u32>().map_err(|_| invalid())?;
        if value == 0 {
            return Err(invalid());
        }

        Ok(Self { value })
    }

    pub fn as_u32(&self) -> u32 {
        self.value
    }
}

impl fmt::Display for PubMedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for PubMedId {
    type Err = PubMedError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
