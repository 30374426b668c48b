//! Implementation of the `cmerge hosts` command.

use std::path::PathBuf;

use clap::Args;
use miette::{IntoDiagnostic, Result};
use owo_colors::Style;
use serde::Serialize;

use crate::commands::{open_document, parse_definitions};
use crate::output::table::{format_hosts_table, format_variables_table};
use crate::output::Console;

/// Arguments for the hosts command.
#[derive(Debug, Args)]
pub struct HostsArgs {
    /// Variables file with one block per host
    pub variables: PathBuf,

    /// Also print each host's variables
    #[arg(long)]
    pub show_vars: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for one host.
#[derive(Debug, Serialize)]
struct HostJson<'a> {
    hostname: &'a str,
    variables: Vec<VariableJson<'a>>,
}

#[derive(Debug, Serialize)]
struct VariableJson<'a> {
    key: &'a str,
    value: &'a str,
}

/// Run the hosts command.
pub fn run_hosts(args: HostsArgs) -> Result<i32> {
    let mut variables = open_document(&args.variables)?;
    let definitions = parse_definitions(&args.variables, &mut variables)?;

    if args.json {
        let hosts: Vec<HostJson> = definitions
            .hosts()
            .map(|vars| HostJson {
                hostname: vars.hostname(),
                variables: vars
                    .iter()
                    .map(|(key, value)| VariableJson { key, value })
                    .collect(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&hosts).into_diagnostic()?);
        return Ok(exitcode::OK);
    }

    let console = Console::new(false);
    println!("{}", format_hosts_table(&definitions));
    if args.show_vars {
        for vars in definitions.hosts() {
            println!("\n{}:", console.paint(&vars.hostname(), Style::new().bold()));
            println!("{}", format_variables_table(vars));
        }
    }

    if definitions.warnings().is_empty() {
        Ok(exitcode::OK)
    } else {
        println!(
            "\n{} {} line(s) ignored",
            console.paint(&"warning:", Style::new().yellow().bold()),
            definitions.warnings().len()
        );
        Ok(exitcode::DATAERR)
    }
}
