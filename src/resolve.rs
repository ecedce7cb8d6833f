//! Metadata resolution.
//!
//! Turns a citation mention into a concrete bibliographic record by querying
//! the search capability and accepting the first candidate whose year
//! matches exactly.

use tracing::{debug, warn};

use crate::search::{Candidate, SearchProvider};

/// Resolves an (author, year) mention against the given provider.
///
/// Issues the query `"<author_key> <year>"` and walks the candidate stream
/// in provider order. The first candidate that carries an author list and
/// whose year equals `year` exactly (string comparison, no normalization)
/// is accepted; nothing further is pulled from the stream after that.
///
/// A candidate that failed to materialize is logged and skipped; it never
/// aborts resolution of the mention. An exhausted stream yields `None`:
/// the mention simply contributes no bibliography entry.
pub fn resolve(
    provider: &dyn SearchProvider,
    author_key: &str,
    year: &str,
) -> Option<Candidate> {
    let query = format!("{} {}", author_key, year);

    for candidate in provider.search(&query) {
        match candidate {
            Ok(candidate) => {
                if candidate.author.is_some() && candidate.year.as_deref() == Some(year) {
                    return Some(candidate);
                }
                debug!(
                    "skipping candidate for '{}': year {:?} does not match {}",
                    query, candidate.year, year
                );
            }
            Err(e) => {
                warn!("error fetching candidate for '{}': {}", query, e);
            }
        }
    }

    None
}
