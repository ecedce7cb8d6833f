//! Bibliography entry construction.
//!
//! Normalizes an accepted search candidate into the record shape both
//! serializers consume.

use thiserror::Error;

use crate::search::{Candidate, Name};

/// Errors raised while building an entry from a resolved record.
///
/// Both variants mean the record is malformed for our purposes; the caller
/// skips the entry rather than aborting the run.
#[derive(Error, Debug)]
pub enum EntryError {
    #[error("resolved record has no authors")]
    MissingAuthor,

    #[error("resolved record has no year")]
    MissingYear,
}

/// A normalized, output-ready bibliography entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibliographyEntry {
    /// Citation key: `<last name of first author>_<year>`.
    ///
    /// Not guaranteed unique: two works by the same first author in the
    /// same year collide, and collisions are not disambiguated.
    pub id: String,
    /// Always `"article"`; no classification logic distinguishes books,
    /// conference papers, etc.
    pub entry_type: &'static str,
    /// Ordered author list
    pub author: Vec<Name>,
    /// Publication year
    pub year: String,
    /// Work title, if the record carried one
    pub title: Option<String>,
    /// DOI, if the record carried one
    pub doi: Option<String>,
}

/// Builds a [`BibliographyEntry`] from an accepted candidate.
///
/// Requires a non-empty author list and a year; `title` and `doi` pass
/// through unchanged.
///
/// # Examples
///
/// ```
/// use bibgen::{build_entry, Candidate, Name};
///
/// let candidate = Candidate {
///     author: Some(vec![Name::new("Ada", "Lovelace")]),
///     year: Some("1843".to_string()),
///     title: None,
///     doi: None,
/// };
/// let entry = build_entry(candidate).unwrap();
/// assert_eq!(entry.id, "Lovelace_1843");
/// assert_eq!(entry.entry_type, "article");
/// ```
pub fn build_entry(candidate: Candidate) -> Result<BibliographyEntry, EntryError> {
    let author = candidate
        .author
        .filter(|authors| !authors.is_empty())
        .ok_or(EntryError::MissingAuthor)?;
    let year = candidate.year.ok_or(EntryError::MissingYear)?;

    let id = format!("{}_{}", author[0].last, year);

    Ok(BibliographyEntry {
        id,
        entry_type: "article",
        author,
        year,
        title: candidate.title,
        doi: candidate.doi,
    })
}
