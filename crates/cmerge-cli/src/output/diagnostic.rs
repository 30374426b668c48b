//! Miette diagnostic wrapper for definitions parse errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use cmerge::ParseError;
use miette::{Diagnostic, NamedSource, SourceSpan};
use std::path::Path;
use thiserror::Error;

/// A miette-compatible diagnostic for a fatal definitions error.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(cmerge::definitions))]
pub struct ParseDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("{label}")]
    span: SourceSpan,

    message: String,

    label: String,

    #[help]
    help: Option<String>,
}

impl ParseDiagnostic {
    /// Create a diagnostic pointing at the line that caused `err`.
    pub fn from_parse_error(path: &Path, content: &str, err: &ParseError) -> Self {
        let (label, help) = match err {
            ParseError::NestedHostBlock { open_host, .. } => (
                "new host block starts here".to_string(),
                Some(format!(
                    "terminate the block of '{open_host}' with a <--END--> line first"
                )),
            ),
            ParseError::DuplicateHostname { hostname, .. } => (
                "hostname already used".to_string(),
                Some(format!("every host block needs a unique name; '{hostname}' appears twice")),
            ),
            ParseError::Io(_) => ("here".to_string(), None),
        };

        // Sum of (line_length + 1) for lines before the error line.
        let line = err.line_number().unwrap_or(1);
        let offset = content
            .lines()
            .take(line.saturating_sub(1))
            .map(|l| l.len() + 1)
            .sum::<usize>();
        let length = content.lines().nth(line.saturating_sub(1)).map_or(1, str::len);

        // Clamp offset to content length to avoid miette panic on out-of-bounds
        let offset = offset.min(content.len());
        let length = length.min(content.len() - offset);

        ParseDiagnostic {
            src: NamedSource::new(path.display().to_string(), content.to_string()),
            span: (offset, length).into(),
            message: err.to_string(),
            label,
            help,
        }
    }
}
