//! Table formatting utilities for CLI output.

use cmerge::{Consistency, Definitions, GenerationReport, HostVariables};
use comfy_table::{presets, ContentArrangement, Table};

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

/// Numbered list of hosts with their variable counts.
pub fn format_hosts_table(definitions: &Definitions) -> Table {
    let mut table = new_table(vec!["#", "Host", "Variables"]);
    for (index, vars) in definitions.hosts().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            vars.hostname().to_string(),
            vars.len().to_string(),
        ]);
    }
    table
}

/// The variables of one host, in definition order.
pub fn format_variables_table(vars: &HostVariables) -> Table {
    let mut table = new_table(vec!["Key", "Value"]);
    for (key, value) in vars.iter() {
        table.add_row(vec![key, value]);
    }
    table
}

/// Tokens that only one of the two documents uses.
pub fn format_mismatch_table(consistency: &Consistency) -> Table {
    let mut table = new_table(vec!["Token", "Only in"]);
    for token in &consistency.only_in_a {
        table.add_row(vec![token.as_str(), consistency.source_a.as_str()]);
    }
    for token in &consistency.only_in_b {
        table.add_row(vec![token.as_str(), consistency.source_b.as_str()]);
    }
    table
}

/// Files written by a generation run.
pub fn format_report_table(report: &GenerationReport) -> Table {
    let mut table = new_table(vec!["Host", "File", "Lines", "Replaced", "Removed"]);
    for file in &report.files {
        table.add_row(vec![
            file.hostname.clone(),
            file.path.display().to_string(),
            file.stats.lines_written.to_string(),
            file.stats.replacements.to_string(),
            file.stats.lines_suppressed.to_string(),
        ]);
    }
    table
}
