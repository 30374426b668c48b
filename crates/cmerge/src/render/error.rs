use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop configuration generation.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The output directory could not be created.
    #[error("failed to create output directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The hostname cannot be used as a file name inside the output directory.
    #[error("hostname '{hostname}' cannot be used as an output file name")]
    InvalidHostname { hostname: String },

    /// The template could not be read while rendering a host.
    #[error("failed to read the template for host '{hostname}': {source}")]
    Read {
        hostname: String,
        #[source]
        source: io::Error,
    },

    /// A host's file could not be written.
    #[error("failed to write '{path}' for host '{hostname}': {source}")]
    Write {
        hostname: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
