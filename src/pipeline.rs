//! The citation-to-bibliography pipeline.
//!
//! Extraction, resolution, and entry building run strictly sequentially:
//! one resolution call per mention, one at a time. Failures local to a
//! mention (no match, malformed record) skip that mention and never abort
//! the batch.

use tracing::{info, warn};

use crate::entry::{build_entry, BibliographyEntry};
use crate::extract::extract_mentions;
use crate::resolve::resolve;
use crate::search::SearchProvider;

/// Builds the bibliography for the given text.
///
/// Mentions are processed in extraction order (ascending by year), so the
/// returned collection is in resolution order. Mentions that resolve to
/// nothing contribute no entry; partial bibliographies are a normal
/// outcome, not an error.
pub fn build_bibliography(
    text: &str,
    provider: &dyn SearchProvider,
) -> Vec<BibliographyEntry> {
    let mentions = extract_mentions(text);
    info!("found {} citation mention(s)", mentions.len());

    let mut entries: Vec<BibliographyEntry> = Vec::new();

    for mention in &mentions {
        let Some(candidate) = resolve(provider, &mention.author_key, &mention.year) else {
            info!(
                "no match for '{} {}', skipping",
                mention.author_key, mention.year
            );
            continue;
        };

        match build_entry(candidate) {
            Ok(entry) => entries.push(entry),
            Err(e) => {
                warn!(
                    "dropping resolved record for '{} {}': {}",
                    mention.author_key, mention.year, e
                );
            }
        }
    }

    entries
}
