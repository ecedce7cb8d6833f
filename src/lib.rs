//! bibgen: harvest in-text citations and generate bibliographies.
//!
//! This library provides functionality to:
//! - Extract author/year citation mentions from document text
//! - Resolve mentions against a bibliographic search service (Crossref)
//! - Normalize resolved records into bibliography entries
//! - Serialize the bibliography as BibTeX and as a one-line-per-entry document

pub mod crossref;
pub mod document;
pub mod entry;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod resolve;
pub mod search;

pub use crossref::CrossrefProvider;
pub use document::{read_paragraphs, write_paragraphs};
pub use entry::{build_entry, BibliographyEntry, EntryError};
pub use extract::{extract_mentions, CitationMention};
pub use output::{render_bibtex, render_document_lines};
pub use pipeline::build_bibliography;
pub use resolve::resolve;
pub use search::{Candidate, CandidateStream, Name, SearchError, SearchProvider};
