//! Shared test helpers for integration tests.

use std::collections::HashMap;

use bibgen::{Candidate, CandidateStream, Name, SearchError, SearchProvider};

/// Deterministic in-memory search provider.
///
/// Answers each query from a fixed table, in table order; unknown queries
/// yield an empty stream. This is the substitution point the injected
/// `SearchProvider` capability exists for: integration tests never touch
/// the network.
pub struct StaticProvider {
    responses: HashMap<String, Vec<Candidate>>,
}

impl StaticProvider {
    pub fn new() -> Self {
        StaticProvider {
            responses: HashMap::new(),
        }
    }

    /// Registers the candidates served for `query`.
    pub fn with_response(mut self, query: &str, candidates: Vec<Candidate>) -> Self {
        self.responses.insert(query.to_string(), candidates);
        self
    }
}

impl SearchProvider for StaticProvider {
    fn search(&self, query: &str) -> CandidateStream<'_> {
        let results = self.responses.get(query).cloned().unwrap_or_default();
        Box::new(results.into_iter().map(Ok::<_, SearchError>))
    }
}

/// A fully populated candidate for the classic Turing 1950 paper.
pub fn turing_candidate() -> Candidate {
    Candidate {
        author: Some(vec![Name::new("Alan", "Turing")]),
        year: Some("1950".to_string()),
        title: Some("Computing Machinery and Intelligence".to_string()),
        doi: Some("10.1093/x".to_string()),
    }
}

/// A minimal candidate with the given single author and year.
pub fn candidate(first: &str, last: &str, year: &str) -> Candidate {
    Candidate {
        author: Some(vec![Name::new(first, last)]),
        year: Some(year.to_string()),
        title: None,
        doi: None,
    }
}
