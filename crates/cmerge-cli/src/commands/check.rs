//! Implementation of the `cmerge check` command.

use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use owo_colors::Style;

use crate::commands::{compare_documents, open_document};
use crate::output::table::format_mismatch_table;
use crate::output::Console;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Configuration template
    pub template: PathBuf,

    /// Variables file with one block per host
    pub variables: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the check command. Exits with `DATAERR` when the tokens differ.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let mut variables = open_document(&args.variables)?;
    let mut template = open_document(&args.template)?;
    let consistency =
        compare_documents(&args.variables, &mut variables, &args.template, &mut template)?;

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&consistency).into_diagnostic()?
        );
    } else if consistency.matches {
        println!(
            "{} all variables match between {} and {}",
            Console::new(false).paint(&"ok:", Style::new().green().bold()),
            consistency.source_a,
            consistency.source_b
        );
    } else {
        println!("{}", format_mismatch_table(&consistency));
    }

    if consistency.matches {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}
