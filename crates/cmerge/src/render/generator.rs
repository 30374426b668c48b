//! Writing one output file per host.

use std::fs;
use std::io::{BufRead, Seek};
use std::path::{Path, PathBuf};

use bon::Builder;
use serde::Serialize;
use tracing::info;

use crate::definitions::{Definitions, HostVariables};
use crate::render::engine::{RenderStats, render_host};
use crate::render::error::RenderError;

/// Directory the files are written to unless configured otherwise.
pub const DEFAULT_OUTPUT_DIR: &str = "configs";

/// Extension of every generated file.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Output settings for configuration generation.
///
/// # Example
///
/// ```
/// use cmerge::Generator;
///
/// let generator = Generator::builder().output_dir("out").build();
/// assert_eq!(generator.output_path("r1"), std::path::Path::new("out").join("r1.txt"));
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(PathBuf, into), on(String, into))]
pub struct Generator {
    /// Created on demand, including missing parents.
    #[builder(default = PathBuf::from(DEFAULT_OUTPUT_DIR))]
    output_dir: PathBuf,

    /// File extension, without the leading dot.
    #[builder(default = DEFAULT_EXTENSION.to_string())]
    extension: String,
}

impl Default for Generator {
    fn default() -> Self {
        Generator::builder().build()
    }
}

/// One file written by [`Generator::generate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    pub hostname: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub stats: RenderStats,
}

/// Summary of a generation run, in host order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    pub files: Vec<GeneratedFile>,
}

impl GenerationReport {
    /// Lines dropped because of empty values, across all hosts.
    pub fn lines_suppressed(&self) -> usize {
        self.files.iter().map(|file| file.stats.lines_suppressed).sum()
    }
}

impl Generator {
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Path of the file generated for `hostname`.
    pub fn output_path(&self, hostname: &str) -> PathBuf {
        self.output_dir
            .join(format!("{hostname}.{}", self.extension))
    }

    /// Write one file per host, in the order the hosts were defined.
    ///
    /// Existing files are overwritten. The template is rewound before each
    /// host. Every hostname is checked before anything is written.
    pub fn generate<R: BufRead + Seek>(
        &self,
        definitions: &Definitions,
        template: &mut R,
    ) -> Result<GenerationReport, RenderError> {
        if let Some(hostname) = definitions
            .hostnames()
            .iter()
            .find(|hostname| !is_safe_file_stem(hostname))
        {
            return Err(RenderError::InvalidHostname {
                hostname: hostname.clone(),
            });
        }

        fs::create_dir_all(&self.output_dir).map_err(|source| RenderError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })?;

        let mut report = GenerationReport {
            output_dir: self.output_dir.clone(),
            files: Vec::with_capacity(definitions.len()),
        };
        for vars in definitions.hosts() {
            report.files.push(self.write_host(vars, template)?);
        }

        info!(
            count = report.files.len(),
            dir = %self.output_dir.display(),
            "configuration files exported"
        );
        Ok(report)
    }

    fn write_host<R: BufRead + Seek>(
        &self,
        vars: &HostVariables,
        template: &mut R,
    ) -> Result<GeneratedFile, RenderError> {
        let hostname = vars.hostname();

        // A failed template read must not leave a truncated file.
        let mut rendered = Vec::new();
        let stats =
            render_host(vars, template, &mut rendered).map_err(|source| RenderError::Read {
                hostname: hostname.to_string(),
                source,
            })?;

        let path = self.output_path(hostname);
        fs::write(&path, rendered).map_err(|source| RenderError::Write {
            hostname: hostname.to_string(),
            path: path.clone(),
            source,
        })?;

        info!(
            host = hostname,
            path = %path.display(),
            lines = stats.lines_written,
            suppressed = stats.lines_suppressed,
            "configuration written"
        );
        Ok(GeneratedFile {
            hostname: hostname.to_string(),
            path,
            stats,
        })
    }
}

/// Write one file per host into `output_dir` with the default extension.
pub fn generate<R: BufRead + Seek>(
    definitions: &Definitions,
    template: &mut R,
    output_dir: &Path,
) -> Result<GenerationReport, RenderError> {
    Generator::builder()
        .output_dir(output_dir)
        .build()
        .generate(definitions, template)
}

fn is_safe_file_stem(hostname: &str) -> bool {
    !hostname.is_empty()
        && hostname != "."
        && hostname != ".."
        && !hostname.contains(['/', '\\'])
}
