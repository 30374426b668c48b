//! Placeholder token extraction.
//!
//! A token is `<`, one or more non-whitespace characters, then `>`. The
//! first `>` closes the token, so `<A><B>` yields two tokens.

use std::collections::BTreeSet;
use std::io::{self, BufRead, Seek, SeekFrom};

use winnow::prelude::*;
use winnow::token::{any, take_till};

/// Marks the end of a host block. Never a substitution variable.
pub const END_TOKEN: &str = "<--END-->";

/// Reserved key whose value is the hostname of the enclosing block.
pub const HOSTNAME_TOKEN: &str = "<HOSTNAME>";

/// A set of distinct tokens, sorted for stable reporting.
pub type TokenSet = BTreeSet<String>;

/// Collect every distinct token in a document.
///
/// The document is rewound before scanning, so the same handle can be passed
/// to other passes before or after this one.
pub fn extract_tokens<R: BufRead + Seek>(doc: &mut R) -> io::Result<TokenSet> {
    doc.seek(SeekFrom::Start(0))?;
    let mut tokens = TokenSet::new();
    for line in doc.lines() {
        collect_tokens(&line?, &mut tokens);
    }
    Ok(tokens)
}

/// Collect every distinct token in an in-memory document.
pub fn extract_tokens_str(text: &str) -> TokenSet {
    let mut tokens = TokenSet::new();
    for line in text.lines() {
        collect_tokens(line, &mut tokens);
    }
    tokens
}

/// Return the tokens of a single line in the order they appear.
///
/// Unlike the extractors, this keeps duplicates and the terminator token.
pub fn tokens_in_line(line: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut rest = line;
    while let Some(start) = rest.find('<') {
        let mut input = &rest[start..];
        match token(&mut input) {
            Ok(matched) => {
                found.push(matched);
                rest = input;
            }
            Err(_) => rest = &rest[start + 1..],
        }
    }
    found
}

fn collect_tokens(line: &str, tokens: &mut TokenSet) {
    for matched in tokens_in_line(line) {
        if matched != END_TOKEN {
            tokens.insert(matched.to_string());
        }
    }
}

/// Parse one token: `<` + a non-whitespace char + anything up to the first `>`.
fn token<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        '<',
        any.verify(|c: &char| !c.is_whitespace()),
        take_till(0.., |c: char| c == '>' || c.is_whitespace()),
        '>',
    )
        .take()
        .parse_next(input)
}
