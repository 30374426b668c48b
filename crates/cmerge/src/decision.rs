//! Confirmation flow between parsing and generation.
//!
//! The library never reads from a terminal. It names the questions a front
//! end may ask, interprets typed answers, and knows which answers a run mode
//! implies on its own.

/// A question asked before configuration files are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prompt {
    /// The template and definitions use different tokens.
    ContinueDespiteMismatch,
    /// The parsed host list has been shown.
    ConfirmHostList,
    /// Whether to walk through each host's variables.
    ReviewVariables,
    /// Pause after one host's variables during a review.
    ContinueReview,
    /// Whether to write the configuration files.
    ExportConfigs,
}

impl Prompt {
    /// Text shown to the user.
    pub fn question(self) -> &'static str {
        match self {
            Prompt::ContinueDespiteMismatch => "Would you like to continue with the merge anyway?",
            Prompt::ConfirmHostList => "Is this correct? (Type 'yes' to continue)",
            Prompt::ReviewVariables => {
                "Would you like to review the imported vars before generating configs?"
            }
            Prompt::ContinueReview => "Press ENTER to continue (q to quit)",
            Prompt::ExportConfigs => "Would you like to export the config files?",
        }
    }
}

/// What the flow should do after a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Move on to the next step.
    Proceed,
    /// Stop without writing anything.
    Abort,
    /// Show the parsed variables before moving on.
    ReviewRequested,
}

impl Decision {
    /// Interpret a typed answer. Returns `None` if the answer should be asked
    /// again.
    ///
    /// ```
    /// use cmerge::{Decision, Prompt};
    ///
    /// assert_eq!(Decision::from_answer(Prompt::ExportConfigs, "Y\n"), Some(Decision::Proceed));
    /// assert_eq!(Decision::from_answer(Prompt::ExportConfigs, "maybe"), None);
    /// ```
    pub fn from_answer(prompt: Prompt, answer: &str) -> Option<Decision> {
        let answer = answer.trim().to_lowercase();
        if prompt == Prompt::ContinueReview {
            return Some(if answer == "q" {
                Decision::Abort
            } else {
                Decision::Proceed
            });
        }

        let yes = match answer.as_str() {
            "yes" | "y" => true,
            "no" | "n" => false,
            _ => return None,
        };
        Some(match (prompt, yes) {
            (Prompt::ReviewVariables, true) => Decision::ReviewRequested,
            (Prompt::ReviewVariables, false) | (_, true) => Decision::Proceed,
            (_, false) => Decision::Abort,
        })
    }

    /// The decision a plain "yes" gives for a prompt.
    pub fn affirmative(prompt: Prompt) -> Decision {
        match prompt {
            Prompt::ReviewVariables => Decision::ReviewRequested,
            Prompt::ContinueDespiteMismatch
            | Prompt::ConfirmHostList
            | Prompt::ContinueReview
            | Prompt::ExportConfigs => Decision::Proceed,
        }
    }
}

/// How much of the confirmation flow runs unattended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Every prompt is asked.
    #[default]
    Interactive,
    /// The variables are always reviewed and the export is accepted.
    Verbose,
    /// Host list and review are skipped and the export is accepted.
    Quiet,
}

impl Mode {
    /// The decision this mode makes without asking, if any.
    ///
    /// A token mismatch is always left to the caller.
    pub fn preset(self, prompt: Prompt) -> Option<Decision> {
        match (self, prompt) {
            (Mode::Verbose, Prompt::ReviewVariables) => Some(Decision::ReviewRequested),
            (Mode::Verbose | Mode::Quiet, Prompt::ExportConfigs)
            | (Mode::Quiet, Prompt::ConfirmHostList | Prompt::ReviewVariables) => {
                Some(Decision::Proceed)
            }
            _ => None,
        }
    }

    /// Whether the host list and variable tables are printed.
    pub fn shows_hosts(self) -> bool {
        self != Mode::Quiet
    }
}
