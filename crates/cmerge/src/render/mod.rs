//! Substitution engine.
//!
//! Every template line is checked against each of a host's tokens. All
//! occurrences of a matching token are replaced by its value. A line that
//! matches a token whose value is empty is dropped entirely.

mod engine;
mod error;
mod generator;

pub use engine::{LineOutcome, RenderStats, render_host, render_str, substitute_line};
pub use error::RenderError;
pub use generator::{
    DEFAULT_EXTENSION, DEFAULT_OUTPUT_DIR, GeneratedFile, GenerationReport, Generator, generate,
};
