//! Terminal output helpers.

mod diagnostic;
pub mod prompt;
pub mod table;

pub use diagnostic::ParseDiagnostic;

use std::fmt::Display;
use std::io::{self, stderr, stdout, Write};

use owo_colors::{OwoColorize, Stream, Style};

/// Where human-readable output goes.
///
/// When stdout carries a JSON document, messages, tables and questions move
/// to stderr.
#[derive(Debug, Clone, Copy)]
pub struct Console {
    to_stderr: bool,
}

impl Console {
    pub fn new(json: bool) -> Self {
        Self { to_stderr: json }
    }

    fn stream(self) -> Stream {
        if self.to_stderr {
            Stream::Stderr
        } else {
            Stream::Stdout
        }
    }

    /// Print a line.
    pub fn line(&self, text: impl Display) {
        if self.to_stderr {
            eprintln!("{text}");
        } else {
            println!("{text}");
        }
    }

    /// Print a question without a newline.
    pub fn ask(&self, text: impl Display) -> io::Result<()> {
        if self.to_stderr {
            eprint!("{text} ");
            stderr().flush()
        } else {
            print!("{text} ");
            stdout().flush()
        }
    }

    /// Apply `style` when this console's stream supports color.
    pub fn paint<'a, T: Display>(&self, text: &'a T, style: Style) -> impl Display + 'a {
        text.if_supports_color(self.stream(), move |t| t.style(style))
    }

    /// Print a horizontal rule between sections.
    pub fn hline(&self) {
        self.line(self.paint(&"-".repeat(60), Style::new().dimmed()));
    }
}
