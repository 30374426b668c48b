//! Line classifier for definitions documents.

use std::collections::HashMap;
use std::io::{BufRead, Seek, SeekFrom};

use tracing::{debug, warn};

use crate::definitions::{Definitions, HostVariables, ParseError, ParseWarning};
use crate::token::{END_TOKEN, HOSTNAME_TOKEN};

/// Lines starting with this prefix are ignored.
pub const COMMENT_PREFIX: char = '#';

/// Separates a token from its value. Values cannot escape it.
pub const SEPARATOR: &str = "::";

/// Parse a definitions document.
///
/// The document is rewound first, so an already-scanned handle can be
/// passed in. Malformed lines are skipped and reported as warnings; nested
/// or duplicate `<HOSTNAME>` blocks abort with an error.
pub fn parse<R: BufRead + Seek>(doc: &mut R) -> Result<Definitions, ParseError> {
    doc.seek(SeekFrom::Start(0))?;
    let mut parser = BlockParser::default();
    for (index, line) in doc.lines().enumerate() {
        parser.feed(index + 1, &line?)?;
    }
    Ok(parser.finish())
}

/// Parse an in-memory definitions document.
pub fn parse_str(input: &str) -> Result<Definitions, ParseError> {
    let mut parser = BlockParser::default();
    for (index, line) in input.lines().enumerate() {
        parser.feed(index + 1, line)?;
    }
    Ok(parser.finish())
}

#[derive(Default)]
struct BlockParser {
    hostnames: Vec<String>,
    hosts: HashMap<String, HostVariables>,
    warnings: Vec<ParseWarning>,
    /// Set between a `<HOSTNAME>` line and the next terminator. The open
    /// block is always the last entry of `hostnames`.
    inside_block: bool,
}

impl BlockParser {
    fn feed(&mut self, line_number: usize, line: &str) -> Result<(), ParseError> {
        if line.starts_with(COMMENT_PREFIX) {
            return Ok(());
        }

        if line.contains(END_TOKEN) {
            self.inside_block = false;
            return Ok(());
        }

        let Some((key, value)) = line.split_once(SEPARATOR) else {
            let host = self.last_host();
            self.warn(ParseWarning::MissingSeparator {
                line_number,
                line: line.to_string(),
                host,
            });
            return Ok(());
        };

        if line.contains(HOSTNAME_TOKEN) {
            return self.open_block(line_number, line, value);
        }

        if !self.inside_block {
            let host = self.last_host();
            self.warn(ParseWarning::OutsideHostBlock {
                line_number,
                line: line.to_string(),
                host,
            });
            return Ok(());
        }

        let Some(host) = self.hostnames.last().cloned() else {
            return Ok(());
        };
        if value.contains(SEPARATOR) {
            self.warn(ParseWarning::SeparatorInValue {
                line_number,
                line: line.to_string(),
                host: host.clone(),
                key: key.to_string(),
            });
        }
        let value = value.trim_end();
        if let Some(vars) = self.hosts.get_mut(&host) {
            if let Some(previous) = vars.insert(key, value) {
                debug!(host = %host, key, previous = %previous, value, "variable redefined");
            }
        }
        Ok(())
    }

    fn open_block(&mut self, line_number: usize, line: &str, value: &str) -> Result<(), ParseError> {
        if self.inside_block {
            return Err(ParseError::NestedHostBlock {
                line_number,
                line: line.to_string(),
                open_host: self.last_host().unwrap_or_default(),
            });
        }

        let hostname = value.trim_end();
        if self.hosts.contains_key(hostname) {
            return Err(ParseError::DuplicateHostname {
                line_number,
                line: line.to_string(),
                hostname: hostname.to_string(),
            });
        }
        if hostname.contains(SEPARATOR) {
            self.warn(ParseWarning::SeparatorInValue {
                line_number,
                line: line.to_string(),
                host: hostname.to_string(),
                key: HOSTNAME_TOKEN.to_string(),
            });
        }

        debug!(line = line_number, hostname, "host block opened");
        self.inside_block = true;
        self.hostnames.push(hostname.to_string());
        self.hosts
            .insert(hostname.to_string(), HostVariables::new(hostname));
        Ok(())
    }

    fn last_host(&self) -> Option<String> {
        self.hostnames.last().cloned()
    }

    fn warn(&mut self, warning: ParseWarning) {
        warn!("{warning}");
        self.warnings.push(warning);
    }

    fn finish(mut self) -> Definitions {
        if self.inside_block {
            if let Some(host) = self.last_host() {
                self.warn(ParseWarning::UnterminatedBlock { host });
            }
        }
        Definitions::new(self.hostnames, self.hosts, self.warnings)
    }
}
