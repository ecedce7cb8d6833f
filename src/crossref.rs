//! Crossref search provider.
//!
//! Implements [`SearchProvider`] against the public `api.crossref.org/works`
//! endpoint. Results are fetched one page at a time, on demand, so a
//! consumer that accepts an early candidate never pays for later pages.

use std::collections::VecDeque;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::search::{Candidate, CandidateStream, Name, SearchError, SearchProvider};

const API_URL: &str = "https://api.crossref.org/works";

/// Results fetched per request.
const PAGE_ROWS: usize = 20;

/// Blocking Crossref client.
pub struct CrossrefProvider {
    client: reqwest::blocking::Client,
}

impl CrossrefProvider {
    pub fn new() -> Self {
        CrossrefProvider {
            client: reqwest::blocking::Client::new(),
        }
    }

    fn fetch_page(&self, query: &str, offset: usize) -> Result<Vec<Value>, SearchError> {
        debug!(query, offset, "fetching page from crossref");
        let rows = PAGE_ROWS.to_string();
        let offset = offset.to_string();
        let response: WorksResponse = self
            .client
            .get(API_URL)
            .query(&[
                ("query", query),
                ("rows", rows.as_str()),
                ("offset", offset.as_str()),
            ])
            .send()?
            .error_for_status()?
            .json()?;
        Ok(response.message.items)
    }
}

impl Default for CrossrefProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchProvider for CrossrefProvider {
    fn search(&self, query: &str) -> CandidateStream<'_> {
        info!("searching for '{}' at api.crossref.org", query);
        Box::new(PageIter {
            provider: self,
            query: query.to_string(),
            offset: 0,
            buffer: VecDeque::new(),
            done: false,
        })
    }
}

#[derive(Deserialize)]
struct WorksResponse {
    message: WorksMessage,
}

#[derive(Deserialize)]
struct WorksMessage {
    #[serde(default)]
    items: Vec<Value>,
}

/// Iterator that pulls pages from Crossref as the consumer advances.
///
/// A page-level failure is surfaced as a single `Err` item and ends the
/// stream; a failure to map one item only affects that item.
struct PageIter<'a> {
    provider: &'a CrossrefProvider,
    query: String,
    offset: usize,
    buffer: VecDeque<Result<Candidate, SearchError>>,
    done: bool,
}

impl Iterator for PageIter<'_> {
    type Item = Result<Candidate, SearchError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.buffer.is_empty() && !self.done {
            match self.provider.fetch_page(&self.query, self.offset) {
                Ok(items) => {
                    if items.is_empty() {
                        self.done = true;
                    } else {
                        self.offset += items.len();
                        self.buffer.extend(items.iter().map(map_item));
                    }
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
        self.buffer.pop_front()
    }
}

/// Maps one Crossref work item to a [`Candidate`].
///
/// Absent fields stay absent; a field that is present but undecodable makes
/// the whole item malformed.
fn map_item(item: &Value) -> Result<Candidate, SearchError> {
    let obj = item
        .as_object()
        .ok_or_else(|| SearchError::MalformedCandidate("work item is not an object".into()))?;

    let author = match obj.get("author") {
        Some(Value::Array(entries)) => Some(
            entries
                .iter()
                .map(|entry| {
                    let name = entry.as_object().ok_or_else(|| {
                        SearchError::MalformedCandidate("author entry is not an object".into())
                    })?;
                    Ok(Name {
                        first: name
                            .get("given")
                            .and_then(Value::as_str)
                            .unwrap_or_default()
                            .to_string(),
                        last: name
                            .get("family")
                            .and_then(Value::as_str)
                            .unwrap_or_default()
                            .to_string(),
                    })
                })
                .collect::<Result<Vec<Name>, SearchError>>()?,
        ),
        Some(_) => {
            return Err(SearchError::MalformedCandidate(
                "author field is not an array".into(),
            ))
        }
        None => None,
    };

    // Crossref dates are nested arrays: issued.date-parts = [[year, month, day]]
    let year = obj
        .get("issued")
        .and_then(|issued| issued.get("date-parts"))
        .and_then(Value::as_array)
        .and_then(|parts| parts.first())
        .and_then(Value::as_array)
        .and_then(|parts| parts.first())
        .and_then(Value::as_i64)
        .map(|y| y.to_string());

    // Titles come as a one-element array
    let title = obj
        .get("title")
        .and_then(Value::as_array)
        .and_then(|titles| titles.first())
        .and_then(Value::as_str)
        .map(str::to_string);

    let doi = obj.get("DOI").and_then(Value::as_str).map(str::to_string);

    Ok(Candidate {
        author,
        year,
        title,
        doi,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_map_item_full_record() {
        // Given: a complete Crossref work item
        let item = json!({
            "author": [
                {"given": "Alan", "family": "Turing"},
                {"given": "Ada", "family": "Lovelace"}
            ],
            "issued": {"date-parts": [[1950, 10]]},
            "title": ["Computing Machinery and Intelligence"],
            "DOI": "10.1093/x"
        });

        // When: we map it to a candidate
        let candidate = map_item(&item).unwrap();

        // Then: every field is carried over
        let authors = candidate.author.unwrap();
        assert_eq!(authors.len(), 2);
        assert_eq!(authors[0], Name::new("Alan", "Turing"));
        assert_eq!(authors[1], Name::new("Ada", "Lovelace"));
        assert_eq!(candidate.year.as_deref(), Some("1950"));
        assert_eq!(
            candidate.title.as_deref(),
            Some("Computing Machinery and Intelligence")
        );
        assert_eq!(candidate.doi.as_deref(), Some("10.1093/x"));
    }

    #[test]
    fn test_map_item_missing_fields_stay_absent() {
        // Given: a bare work item
        let item = json!({"DOI": "10.5555/minimal"});

        // When: we map it
        let candidate = map_item(&item).unwrap();

        // Then: absent fields are None, not errors
        assert!(candidate.author.is_none());
        assert!(candidate.year.is_none());
        assert!(candidate.title.is_none());
        assert_eq!(candidate.doi.as_deref(), Some("10.5555/minimal"));
    }

    #[test]
    fn test_map_item_author_without_given_name() {
        // Given: an author entry with only a family name
        let item = json!({"author": [{"family": "Bourbaki"}]});

        // When: we map it
        let candidate = map_item(&item).unwrap();

        // Then: the missing given name becomes an empty string
        let authors = candidate.author.unwrap();
        assert_eq!(authors[0], Name::new("", "Bourbaki"));
    }

    #[test]
    fn test_map_item_rejects_non_object() {
        let result = map_item(&json!("just a string"));
        assert!(matches!(result, Err(SearchError::MalformedCandidate(_))));
    }

    #[test]
    fn test_map_item_rejects_malformed_author_field() {
        // Given: an author field that is not an array
        let item = json!({"author": "Turing, Alan"});

        // When: we map it
        let result = map_item(&item);

        // Then: the item is malformed (the caller skips it and moves on)
        assert!(matches!(result, Err(SearchError::MalformedCandidate(_))));
    }

    #[test]
    fn test_map_item_year_from_first_date_part() {
        // Given: issued with year-month-day parts
        let item = json!({"issued": {"date-parts": [[2019, 3, 14]]}});

        // When: we map it
        let candidate = map_item(&item).unwrap();

        // Then: only the year is kept, as a string
        assert_eq!(candidate.year.as_deref(), Some("2019"));
    }
}
