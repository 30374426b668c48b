//! cmerge CLI entry point.
//!
//! - `cmerge merge` - Generate one configuration file per host
//! - `cmerge check` - Compare the tokens of a template and a variables file
//! - `cmerge hosts` - List the hosts of a variables file

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use cmerge::Mode;
use commands::{run_check, run_hosts, run_merge, CheckArgs, HostsArgs, MergeArgs};
use tracing_subscriber::EnvFilter;

/// Per-device configuration generator.
#[derive(Debug, Parser)]
#[command(name = "cmerge")]
#[command(
    about = "Generate a configuration file per device from a template and a variables file",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// More output; always review the parsed variables before exporting
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Minimal output; skip the host list and review questions
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate configuration files
    Merge(MergeArgs),
    /// Compare the tokens used by a template and a variables file
    Check(CheckArgs),
    /// List the hosts defined in a variables file
    Hosts(HostsArgs),
}

impl Cli {
    fn mode(&self) -> Mode {
        if self.verbose {
            Mode::Verbose
        } else if self.quiet {
            Mode::Quiet
        } else {
            Mode::Interactive
        }
    }
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Log to stderr. `RUST_LOG` takes precedence over the verbosity flags.
fn setup_logging(mode: Mode) {
    let default_level = match mode {
        Mode::Verbose => "debug",
        Mode::Interactive => "info",
        Mode::Quiet => "warn",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(stderr)
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    let mode = cli.mode();
    setup_colors(cli.color);
    setup_logging(mode);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Merge(args) => run_merge(args, mode),
        Commands::Check(args) => run_check(args),
        Commands::Hosts(args) => run_hosts(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::DATAERR);
        }
    }
}
