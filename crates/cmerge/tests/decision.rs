//! Tests for the confirmation flow types.

use cmerge::{Decision, Mode, Prompt};

const ALL_PROMPTS: [Prompt; 5] = [
    Prompt::ContinueDespiteMismatch,
    Prompt::ConfirmHostList,
    Prompt::ReviewVariables,
    Prompt::ContinueReview,
    Prompt::ExportConfigs,
];

// =========================================================================
// Typed answers
// =========================================================================

#[test]
fn yes_and_no_are_case_insensitive() {
    for answer in ["yes", "Y", "YES\n", "  y  "] {
        assert_eq!(
            Decision::from_answer(Prompt::ExportConfigs, answer),
            Some(Decision::Proceed)
        );
    }
    for answer in ["no", "N", "No\r\n"] {
        assert_eq!(
            Decision::from_answer(Prompt::ConfirmHostList, answer),
            Some(Decision::Abort)
        );
    }
}

#[test]
fn unrecognised_answer_is_asked_again() {
    assert_eq!(Decision::from_answer(Prompt::ExportConfigs, ""), None);
    assert_eq!(Decision::from_answer(Prompt::ExportConfigs, "sure"), None);
}

#[test]
fn review_answers_map_to_review_or_skip() {
    assert_eq!(
        Decision::from_answer(Prompt::ReviewVariables, "y"),
        Some(Decision::ReviewRequested)
    );
    assert_eq!(
        Decision::from_answer(Prompt::ReviewVariables, "n"),
        Some(Decision::Proceed)
    );
}

#[test]
fn review_pause_only_stops_on_q() {
    assert_eq!(
        Decision::from_answer(Prompt::ContinueReview, "\n"),
        Some(Decision::Proceed)
    );
    assert_eq!(
        Decision::from_answer(Prompt::ContinueReview, "Q\n"),
        Some(Decision::Abort)
    );
}

#[test]
fn affirmative_matches_typed_yes() {
    for prompt in ALL_PROMPTS {
        if prompt != Prompt::ContinueReview {
            assert_eq!(
                Decision::from_answer(prompt, "yes"),
                Some(Decision::affirmative(prompt))
            );
        }
    }
}

// =========================================================================
// Mode presets
// =========================================================================

#[test]
fn interactive_mode_asks_everything() {
    for prompt in ALL_PROMPTS {
        assert_eq!(Mode::Interactive.preset(prompt), None);
    }
}

#[test]
fn verbose_mode_reviews_and_exports() {
    assert_eq!(
        Mode::Verbose.preset(Prompt::ReviewVariables),
        Some(Decision::ReviewRequested)
    );
    assert_eq!(
        Mode::Verbose.preset(Prompt::ExportConfigs),
        Some(Decision::Proceed)
    );
    assert_eq!(Mode::Verbose.preset(Prompt::ConfirmHostList), None);
}

#[test]
fn quiet_mode_goes_straight_to_export() {
    for prompt in [
        Prompt::ConfirmHostList,
        Prompt::ReviewVariables,
        Prompt::ExportConfigs,
    ] {
        assert_eq!(Mode::Quiet.preset(prompt), Some(Decision::Proceed));
    }
    assert!(!Mode::Quiet.shows_hosts());
}

#[test]
fn mismatch_is_never_decided_by_mode() {
    for mode in [Mode::Interactive, Mode::Verbose, Mode::Quiet] {
        assert_eq!(mode.preset(Prompt::ContinueDespiteMismatch), None);
    }
}
