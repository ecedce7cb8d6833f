//! Bibliography serializers.
//!
//! Renders a collection of entries in two encodings: a BibTeX database and
//! a human-readable document with one line per entry. Record order follows
//! collection order in both.

use crate::entry::BibliographyEntry;
use crate::search::Name;

/// Joins an author list with the literal `" and "`.
fn join_authors(authors: &[Name]) -> String {
    authors
        .iter()
        .map(|name| format!("{} {}", name.first, name.last))
        .collect::<Vec<String>>()
        .join(" and ")
}

/// Renders the collection as a BibTeX database.
///
/// Each entry becomes one `@article{<id>, ...}` record with `author`,
/// `title`, `year`, and `doi` fields as `key = {value}` pairs; `title` and
/// `doi` are omitted when absent. Field order within a record is stable but
/// carries no meaning.
pub fn render_bibtex(entries: &[BibliographyEntry]) -> String {
    let mut out = String::new();

    for entry in entries {
        out.push_str(&format!("@{}{{{},\n", entry.entry_type, entry.id));
        out.push_str(&format!(" author = {{{}}},\n", join_authors(&entry.author)));
        if let Some(ref title) = entry.title {
            out.push_str(&format!(" title = {{{}}},\n", title));
        }
        out.push_str(&format!(" year = {{{}}}", entry.year));
        if let Some(ref doi) = entry.doi {
            out.push_str(&format!(",\n doi = {{{}}}", doi));
        }
        out.push_str("\n}\n\n");
    }

    out
}

/// Renders each entry as one document line.
///
/// The line shape is `"<First1 Last1> and <First2 Last2>. (<year>).
/// <title>. DOI: <doi>"`. A missing `title` or `doi` renders as the empty
/// string rather than being omitted, matching the fixed line template.
pub fn render_document_lines(entries: &[BibliographyEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| {
            format!(
                "{}. ({}). {}. DOI: {}",
                join_authors(&entry.author),
                entry.year,
                entry.title.as_deref().unwrap_or_default(),
                entry.doi.as_deref().unwrap_or_default()
            )
        })
        .collect()
}
