//! In-text citation extraction.
//!
//! Scans raw document text for author/year citation mentions such as
//! `Smith (2020)`, `Smith 2020`, or `Smith, 2020`, and returns a
//! deduplicated list sorted by year.

use std::collections::HashSet;

use regex::Regex;

/// An author/year citation mention found in the source text.
///
/// `author_key` is the raw matched author phrase and may contain `and` or
/// `et al.` (e.g. `"Smith and Jones"`, `"Smith et al."`). It is not
/// normalized beyond what the pattern captures.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CitationMention {
    /// The matched author phrase
    pub author_key: String,
    /// The 4-digit year, as a string
    pub year: String,
}

/// Extracts all citation mentions from the given text.
///
/// The author phrase is one or more word tokens, optionally followed by
/// `and <word>` or `et al.`, immediately followed by one of three year
/// notations: `(YYYY)`, a bare `YYYY`, or `, YYYY`. Matching is
/// leftmost-first and non-overlapping.
///
/// Duplicate (author, year) pairs collapse to their first occurrence. The
/// result is sorted ascending by year string; mentions with equal years
/// keep their first-seen order.
///
/// # Examples
///
/// ```
/// use bibgen::extract_mentions;
///
/// let mentions = extract_mentions("Smith (2020) and Jones, 2019 agree.");
/// assert_eq!(mentions.len(), 2);
/// assert_eq!(mentions[0].author_key, "Jones");
/// assert_eq!(mentions[0].year, "2019");
/// assert_eq!(mentions[1].author_key, "Smith");
/// assert_eq!(mentions[1].year, "2020");
/// ```
pub fn extract_mentions(text: &str) -> Vec<CitationMention> {
    // Group 1: author phrase (required)
    // Group 2: year in parentheses
    // Group 3: bare year
    // Group 4: year after a comma
    let re = Regex::new(r"\b(\w+(?:\s+and\s+\w+)?(?:\s+et\s+al\.)?)\s*(?:\((\d{4})\)|(\d{4})|,\s*(\d{4}))")
        .unwrap();

    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut mentions: Vec<CitationMention> = Vec::new();

    for cap in re.captures_iter(text) {
        let author_key = cap.get(1).unwrap().as_str().to_string();
        // Exactly one of the three year alternatives matched
        let year = cap
            .get(2)
            .or_else(|| cap.get(3))
            .or_else(|| cap.get(4))
            .unwrap()
            .as_str()
            .to_string();

        if seen.insert((author_key.clone(), year.clone())) {
            mentions.push(CitationMention { author_key, year });
        }
    }

    // Case-insensitive comparison on an all-digit string is a no-op.
    // The sort is stable: equal years keep first-seen order.
    mentions.sort_by_key(|m| m.year.to_lowercase());

    mentions
}
