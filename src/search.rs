//! Bibliographic search capability.
//!
//! Defines the seam between the resolver and whatever scholarly search
//! service backs it: a provider turns a query string into a lazy stream of
//! candidate records. The concrete Crossref implementation lives in
//! [`crate::crossref`]; tests substitute an in-memory provider.

use thiserror::Error;

/// A single author name.
///
/// Either part may be empty when the provider omits it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Name {
    /// Given name(s)
    pub first: String,
    /// Family name
    pub last: String,
}

impl Name {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Name {
            first: first.into(),
            last: last.into(),
        }
    }
}

/// A candidate record returned by a search provider.
///
/// All fields are optional: a candidate is only *accepted* by the resolver
/// when it carries an author list and a year equal to the requested one.
/// Accepted candidates are never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Candidate {
    /// Ordered author list, if the record carries one
    pub author: Option<Vec<Name>>,
    /// Publication year as a 4-digit string, if known
    pub year: Option<String>,
    /// Work title, if known
    pub title: Option<String>,
    /// DOI, if known
    pub doi: Option<String>,
}

/// Errors raised while querying a provider or materializing a candidate.
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed candidate record: {0}")]
    MalformedCandidate(String),

    #[error("Unexpected response: {0}")]
    Api(String),
}

/// Lazy stream of candidates for one query.
///
/// Items are `Err` when a single candidate could not be materialized; the
/// consumer skips those and keeps pulling. The stream ends when the
/// provider has no further results.
pub type CandidateStream<'a> = Box<dyn Iterator<Item = Result<Candidate, SearchError>> + 'a>;

/// A bibliographic search service.
///
/// Implementations yield candidates in their own relevance order, lazily:
/// the consumer stops pulling as soon as it has accepted a match, and
/// providers should not materialize results beyond what is pulled.
pub trait SearchProvider {
    fn search(&self, query: &str) -> CandidateStream<'_>;
}
