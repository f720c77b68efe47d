//! Industry-affiliation filter
//!
//! Pure functions that decide which authors work outside academia and turn
//! the qualifying articles into report rows. Nothing here touches the
//! network.

pub mod assemble;
pub mod classify;
pub mod contact;

pub use assemble::{ClassifiedAuthor, assemble, classify_authors};
pub use classify::{ACADEMIC_KEYWORDS, is_non_academic};
pub use contact::extract_email;
