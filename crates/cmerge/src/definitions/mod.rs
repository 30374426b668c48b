//! Definitions document parser.
//!
//! The definitions document is a flat list of `<TOKEN>::value` lines grouped
//! into host blocks. Each block opens with a `<HOSTNAME>::name` line and
//! closes with a `<--END-->` line; lines starting with `#` are comments.

mod error;
mod host;
mod parser;

pub use error::{ParseError, ParseWarning};
pub use host::{Definitions, HostVariables};
pub use parser::{COMMENT_PREFIX, SEPARATOR, parse, parse_str};
