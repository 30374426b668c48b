//! Token set comparison between two documents.

use serde::Serialize;
use tracing::{info, warn};

use crate::token::TokenSet;

/// Outcome of comparing the tokens of two documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Consistency {
    /// Name of the first document.
    pub source_a: String,
    /// Name of the second document.
    pub source_b: String,
    /// Both documents use exactly the same tokens.
    pub matches: bool,
    /// Tokens only found in the first document.
    pub only_in_a: TokenSet,
    /// Tokens only found in the second document.
    pub only_in_b: TokenSet,
}

/// Compare two token sets.
///
/// A mismatch is reported, not treated as an error: the caller decides
/// whether generation should go ahead.
pub fn check_consistency(
    source_a: &str,
    source_b: &str,
    tokens_a: &TokenSet,
    tokens_b: &TokenSet,
) -> Consistency {
    let common = tokens_a.intersection(tokens_b).count();
    let matches = common == tokens_a.len() && common == tokens_b.len();

    let (only_in_a, only_in_b) = if matches {
        (TokenSet::new(), TokenSet::new())
    } else {
        (
            tokens_a.difference(tokens_b).cloned().collect(),
            tokens_b.difference(tokens_a).cloned().collect(),
        )
    };

    if matches {
        info!("all variables match between {source_a} and {source_b}");
    } else {
        for (source, only) in [(source_a, &only_in_a), (source_b, &only_in_b)] {
            if !only.is_empty() {
                warn!(
                    "variables that only exist in {source}: {}",
                    only.iter().cloned().collect::<Vec<_>>().join(", ")
                );
            }
        }
    }

    Consistency {
        source_a: source_a.to_string(),
        source_b: source_b.to_string(),
        matches,
        only_in_a,
        only_in_b,
    }
}
