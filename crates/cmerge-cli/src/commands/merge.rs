//! Implementation of the `cmerge merge` command.

use std::path::PathBuf;

use clap::Args;
use cmerge::render::{DEFAULT_EXTENSION, DEFAULT_OUTPUT_DIR};
use cmerge::{Decision, Definitions, Generator, Mode, Prompt};
use miette::{IntoDiagnostic, Result};
use owo_colors::Style;
use tracing::debug;

use crate::commands::{compare_documents, open_document, parse_definitions};
use crate::output::prompt::Prompter;
use crate::output::table::{
    format_hosts_table, format_mismatch_table, format_report_table, format_variables_table,
};
use crate::output::Console;

/// Arguments for the merge command.
#[derive(Debug, Args)]
pub struct MergeArgs {
    /// Configuration template
    pub template: PathBuf,

    /// Variables file with one block per host
    pub variables: PathBuf,

    /// Directory the configuration files are written to
    #[arg(short, long, env = "CMERGE_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,

    /// Extension of the generated files
    #[arg(long, env = "CMERGE_EXTENSION", default_value = DEFAULT_EXTENSION)]
    pub extension: String,

    /// Answer yes to every question
    #[arg(short = 'y', long)]
    pub assume_yes: bool,

    /// Print the generation report as JSON; everything else goes to stderr
    #[arg(long)]
    pub json: bool,
}

/// Run the merge command.
pub fn run_merge(args: MergeArgs, mode: Mode) -> Result<i32> {
    let mut variables = open_document(&args.variables)?;
    let mut template = open_document(&args.template)?;

    let definitions = parse_definitions(&args.variables, &mut variables)?;
    debug!(
        path = %args.variables.display(),
        hosts = definitions.len(),
        skipped = definitions.warnings().len(),
        "definitions parsed"
    );
    let consistency =
        compare_documents(&args.variables, &mut variables, &args.template, &mut template)?;
    drop(variables);

    let console = Console::new(args.json);
    let prompter = Prompter::new(mode, args.assume_yes, console);

    if consistency.matches {
        console.line(format_args!(
            "All variables match between {} and {}",
            consistency.source_a, consistency.source_b
        ));
    } else {
        console.line(console.paint(
            &"WARNING: variables differ",
            Style::new().yellow().bold(),
        ));
        console.line(format_mismatch_table(&consistency));
        if prompter.ask(Prompt::ContinueDespiteMismatch)? == Decision::Abort {
            console.line("Please modify your input files and try again.");
            return Ok(exitcode::DATAERR);
        }
    }

    if mode.shows_hosts() {
        console.line(format_args!(
            "Found settings for {} config files. They are:",
            definitions.len()
        ));
        console.line(format_hosts_table(&definitions));
    }
    if prompter.ask(Prompt::ConfirmHostList)? == Decision::Abort {
        console.line("Please modify your vars file and try again.");
        return Ok(exitcode::OK);
    }

    if prompter.ask(Prompt::ReviewVariables)? == Decision::ReviewRequested
        && review(&definitions, &prompter, console)? == Decision::Abort
    {
        console.line("Exiting due to user request.");
        return Ok(exitcode::OK);
    }

    if prompter.ask(Prompt::ExportConfigs)? == Decision::Abort {
        console.line("Configuration files have NOT been exported.");
        return Ok(exitcode::OK);
    }

    let generator = Generator::builder()
        .output_dir(args.output)
        .extension(args.extension)
        .build();
    let report = generator
        .generate(&definitions, &mut template)
        .into_diagnostic()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report).into_diagnostic()?);
    } else {
        if prompter.mode().shows_hosts() {
            println!("{}", format_report_table(&report));
        }
        println!(
            "{} configuration files exported to {}",
            report.files.len(),
            report.output_dir.display()
        );
    }

    Ok(exitcode::OK)
}

/// Print every host's variables, pausing after each host.
fn review(definitions: &Definitions, prompter: &Prompter, console: Console) -> Result<Decision> {
    for vars in definitions.hosts() {
        console.hline();
        console.line(format_args!(
            "Variables for device {}:",
            console.paint(&vars.hostname(), Style::new().bold())
        ));
        console.line(format_variables_table(vars));
        if prompter.ask(Prompt::ContinueReview)? == Decision::Abort {
            return Ok(Decision::Abort);
        }
    }
    console.hline();
    console.line("DONE");
    Ok(Decision::Proceed)
}
