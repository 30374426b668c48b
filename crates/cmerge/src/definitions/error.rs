//! Parse error and warning types for definitions documents.

use std::io;

use thiserror::Error;

/// A structural error that aborts parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A `<HOSTNAME>` line appeared before the open block was terminated.
    #[error(
        "line {line_number}: <HOSTNAME> found inside the variable block of '{open_host}': '{line}'"
    )]
    NestedHostBlock {
        line_number: usize,
        line: String,
        open_host: String,
    },

    /// The same hostname opened two blocks.
    #[error("line {line_number}: duplicate hostname '{hostname}'")]
    DuplicateHostname {
        line_number: usize,
        line: String,
        hostname: String,
    },

    /// Reading the document failed.
    #[error("failed to read definitions: {0}")]
    Io(#[from] io::Error),
}

impl ParseError {
    /// The 1-based line that caused the error, if any.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            ParseError::NestedHostBlock { line_number, .. }
            | ParseError::DuplicateHostname { line_number, .. } => Some(*line_number),
            ParseError::Io(_) => None,
        }
    }
}

/// A malformed line that was skipped while parsing.
///
/// `host` is the most recently opened host, which is usually the block the
/// author was editing when the mistake happened.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseWarning {
    /// The line has no `::` separator.
    #[error("line {line_number}{}: no '::' separator, line ignored: '{line}'", host_context(host))]
    MissingSeparator {
        line_number: usize,
        line: String,
        host: Option<String>,
    },

    /// A key/value line appeared outside of any host block.
    #[error("line {line_number}{}: not inside a host block, line ignored: '{line}'", host_context(host))]
    OutsideHostBlock {
        line_number: usize,
        line: String,
        host: Option<String>,
    },

    /// The value contains `::` itself. The line is split on the first
    /// separator and the rest is kept as part of the value.
    #[error("line {line_number} (host '{host}'): value of '{key}' contains '::': '{line}'")]
    SeparatorInValue {
        line_number: usize,
        line: String,
        host: String,
        key: String,
    },

    /// The document ended before the block was terminated.
    #[error("host '{host}': block is not terminated by <--END-->")]
    UnterminatedBlock { host: String },
}

impl ParseWarning {
    /// The 1-based line of the warning, if it refers to a single line.
    pub fn line_number(&self) -> Option<usize> {
        match self {
            ParseWarning::MissingSeparator { line_number, .. }
            | ParseWarning::OutsideHostBlock { line_number, .. }
            | ParseWarning::SeparatorInValue { line_number, .. } => Some(*line_number),
            ParseWarning::UnterminatedBlock { .. } => None,
        }
    }
}

fn host_context(host: &Option<String>) -> String {
    match host {
        Some(host) => format!(" (after host '{host}')"),
        None => String::new(),
    }
}
