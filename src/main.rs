//! CLI for bibgen - Harvest in-text citations and generate a bibliography.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use dialoguer::Input;
use tracing_subscriber::EnvFilter;

use bibgen::{
    build_bibliography, read_paragraphs, render_bibtex, render_document_lines,
    write_paragraphs, CrossrefProvider,
};

/// BibTeX database output, written to the current working directory.
const BIB_FILE: &str = "bibliography.bib";

/// Human-readable document output, one entry per line.
const DOC_FILE: &str = "bibliography.txt";

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// Harvest author/year citations from a document and generate a bibliography
#[derive(Parser)]
#[command(name = "bibgen")]
#[command(version)]
#[command(after_help = "\
Examples:
  bibgen paper.txt
  bibgen                      (prompts for the input path)
  RUST_LOG=debug bibgen paper.txt

Citations are matched as author/year mentions: Smith (2020), Smith 2020,
or Smith, 2020. Each mention is looked up on Crossref and accepted only
when the publication year matches exactly.")]
struct Cli {
    /// Input document (prompted for interactively when omitted)
    input: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// AppError — semantic exit codes
// ---------------------------------------------------------------------------

enum AppError {
    /// Exit 10 — no input path obtained from the prompt
    NoInputSelected,
    /// Exit 11 — input file not found / unreadable
    InputFile(String),
    /// Exit 12 — cannot write an output file
    OutputFile(String),
}

impl AppError {
    fn exit_code(&self) -> i32 {
        match self {
            AppError::NoInputSelected => 10,
            AppError::InputFile(_) => 11,
            AppError::OutputFile(_) => 12,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NoInputSelected => {
                write!(f, "no input file selected, nothing to do")
            }
            AppError::InputFile(msg) => {
                write!(f, "{}\n  hint: verify the file path is correct", msg)
            }
            AppError::OutputFile(msg) => {
                write!(
                    f,
                    "{}\n  hint: check that the current directory is writable",
                    msg
                )
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let input = obtain_input_path(cli.input)?;

    // 1. Read the document as a sequence of paragraphs
    let paragraphs = read_paragraphs(&input)
        .map_err(|e| AppError::InputFile(format!("'{}': {}", input.display(), e)))?;
    let text = paragraphs.join(" ");

    // 2. Extract, resolve, and build entries (one blocking lookup per mention)
    let provider = CrossrefProvider::new();
    let entries = build_bibliography(&text, &provider);

    // 3. Write the BibTeX database
    fs::write(BIB_FILE, render_bibtex(&entries))
        .map_err(|e| AppError::OutputFile(format!("'{}': {}", BIB_FILE, e)))?;
    println!("Bibliography created in '{}' file.", BIB_FILE);

    // 4. Write the document rendering
    let lines = render_document_lines(&entries);
    write_paragraphs(Path::new(DOC_FILE), &lines)
        .map_err(|e| AppError::OutputFile(format!("'{}': {}", DOC_FILE, e)))?;
    println!("Bibliography created in '{}' file.", DOC_FILE);

    Ok(())
}

// ---------------------------------------------------------------------------
// Input path acquisition
// ---------------------------------------------------------------------------

/// Obtains the input path from the argument or, when absent, interactively.
///
/// Both entry paths converge here; the rest of the run is identical
/// regardless of how the path was obtained.
fn obtain_input_path(arg: Option<PathBuf>) -> Result<PathBuf, AppError> {
    if let Some(path) = arg {
        return Ok(path);
    }

    let response: String = Input::new()
        .with_prompt("Select your input document")
        .allow_empty(true)
        .interact_text()
        .map_err(|_| AppError::NoInputSelected)?;

    let response = response.trim();
    if response.is_empty() {
        return Err(AppError::NoInputSelected);
    }

    Ok(PathBuf::from(response))
}
