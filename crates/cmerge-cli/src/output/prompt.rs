//! Terminal questions for the merge flow.

use std::io::{stdin, BufRead};

use cmerge::{Decision, Mode, Prompt};
use miette::{IntoDiagnostic, Result};
use owo_colors::Style;

use crate::output::Console;

/// Answers prompts from the run mode, the `--assume-yes` flag, or stdin.
pub struct Prompter {
    mode: Mode,
    assume_yes: bool,
    console: Console,
}

impl Prompter {
    pub fn new(mode: Mode, assume_yes: bool, console: Console) -> Self {
        Self {
            mode,
            assume_yes,
            console,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Decide a prompt, asking on stdin only when nothing else decides it.
    ///
    /// Unrecognised answers are asked again. End of input aborts.
    pub fn ask(&self, prompt: Prompt) -> Result<Decision> {
        if let Some(decision) = self.mode.preset(prompt) {
            return Ok(decision);
        }
        if self.assume_yes {
            return Ok(Decision::affirmative(prompt));
        }

        let stdin = stdin();
        let mut input = stdin.lock();
        loop {
            let question = prompt.question();
            self.console
                .ask(self.console.paint(&question, Style::new().bold()))
                .into_diagnostic()?;

            let mut answer = String::new();
            if input.read_line(&mut answer).into_diagnostic()? == 0 {
                self.console.line("");
                return Ok(Decision::Abort);
            }
            match Decision::from_answer(prompt, &answer) {
                Some(decision) => return Ok(decision),
                None => self.console.line("I did not understand that response."),
            }
        }
    }
}
