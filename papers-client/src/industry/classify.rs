/// Substrings that mark an affiliation as academic
pub const ACADEMIC_KEYWORDS: [&str; 7] = [
    "university",
    "college",
    "institute",
    "school",
    "hospital",
    "department",
    "lab",
];

/// Decide whether an affiliation looks non-academic
///
/// Returns `false` as soon as any of [`ACADEMIC_KEYWORDS`] occurs anywhere in
/// the lower-cased text, `true` otherwise. Matching is plain substring
/// containment: "Laboratories" counts as academic because it contains "lab".
/// Empty text carries no academic signal and is therefore non-academic.
///
/// # Example
///
/// ```
/// use papers_client::is_non_academic;
///
/// assert!(is_non_academic("Pfizer Inc., New York"));
/// assert!(!is_non_academic("Dept. of Biology, Harvard University"));
/// ```
pub fn is_non_academic(affiliation: &str) -> bool {
    let lowered = affiliation.to_lowercase();
    !ACADEMIC_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}
