//! Generate per-device configuration files from a single template.
//!
//! A definitions document lists blocks of `<TOKEN>::value` lines, one block
//! per host. Every host gets its own copy of the template with each token
//! replaced by that host's value.
//!
//! ```
//! use cmerge::{check_consistency, extract_tokens_str, parse_str, render_str};
//!
//! let definitions = parse_str("<HOSTNAME>::core1\n<IP>::10.1.1.1\n<--END-->\n").unwrap();
//! let template = "hostname <HOSTNAME>\nip addr <IP>";
//!
//! let consistency = check_consistency(
//!     "template",
//!     "variables",
//!     &extract_tokens_str(template),
//!     &definitions.tokens(),
//! );
//! assert!(consistency.matches);
//!
//! let vars = definitions.host("core1").unwrap();
//! assert_eq!(render_str(vars, template).unwrap(), "hostname core1\nip addr 10.1.1.1");
//! ```

pub mod consistency;
pub mod decision;
pub mod definitions;
pub mod render;
pub mod token;

pub use consistency::{Consistency, check_consistency};
pub use decision::{Decision, Mode, Prompt};
pub use definitions::{Definitions, HostVariables, ParseError, ParseWarning, parse, parse_str};
pub use render::{
    GeneratedFile, GenerationReport, Generator, LineOutcome, RenderError, RenderStats, generate,
    render_host, render_str, substitute_line,
};
pub use token::{END_TOKEN, HOSTNAME_TOKEN, TokenSet, extract_tokens, extract_tokens_str};
