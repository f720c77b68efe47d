/// MEDLINE field tags read by the parser
///
/// Only the fields needed for the industry-author report are recognised;
/// every other tag in a record is skipped.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MedlineTag {
    /// PMID - PubMed unique identifier
    Pmid,
    /// TI - Title
    Title,
    /// DP - Date of publication
    PublicationDate,
    /// FAU - Full author name
    FullAuthor,
    /// AD - Affiliation
    Affiliation,
}

impl MedlineTag {
    /// Look up a tag by its MEDLINE label (surrounding whitespace ignored)
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "PMID" => Some(MedlineTag::Pmid),
            "TI" => Some(MedlineTag::Title),
            "DP" => Some(MedlineTag::PublicationDate),
            "FAU" => Some(MedlineTag::FullAuthor),
            "AD" => Some(MedlineTag::Affiliation),
            _ => None,
        }
    }
}
