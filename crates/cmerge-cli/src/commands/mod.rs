//! CLI command implementations.

mod check;
mod hosts;
mod merge;

pub use check::{run_check, CheckArgs};
pub use hosts::{run_hosts, HostsArgs};
pub use merge::{run_merge, MergeArgs};

use std::fs::{read_to_string, File};
use std::io::BufReader;
use std::path::Path;

use cmerge::{check_consistency, extract_tokens, parse, Consistency, Definitions};
use miette::{miette, Report, Result};

use crate::output::ParseDiagnostic;

/// Open an input document for repeated line-oriented reads.
pub(crate) fn open_document(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| miette!("Cannot open {}: {}", path.display(), e))
}

/// Parse a definitions document, turning structural errors into diagnostics.
pub(crate) fn parse_definitions(path: &Path, doc: &mut BufReader<File>) -> Result<Definitions> {
    parse(doc).map_err(|err| match read_to_string(path) {
        Ok(content) => Report::from(ParseDiagnostic::from_parse_error(path, &content, &err)),
        Err(_) => miette!("{}: {}", path.display(), err),
    })
}

/// Compare the tokens of the variables and template documents.
pub(crate) fn compare_documents(
    variables_path: &Path,
    variables: &mut BufReader<File>,
    template_path: &Path,
    template: &mut BufReader<File>,
) -> Result<Consistency> {
    let variable_tokens = extract_tokens(variables)
        .map_err(|e| miette!("Cannot read {}: {}", variables_path.display(), e))?;
    let template_tokens = extract_tokens(template)
        .map_err(|e| miette!("Cannot read {}: {}", template_path.display(), e))?;

    Ok(check_consistency(
        &variables_path.display().to_string(),
        &template_path.display().to_string(),
        &variable_tokens,
        &template_tokens,
    ))
}
