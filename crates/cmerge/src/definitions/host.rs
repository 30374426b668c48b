//! Parsed host variables.

use std::collections::HashMap;
use std::mem;

use crate::definitions::ParseWarning;
use crate::token::{HOSTNAME_TOKEN, TokenSet};

/// The token/value pairs of one host block.
///
/// Keys keep the order of their first definition. Redefining a key keeps
/// its position and replaces the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostVariables {
    hostname: String,
    entries: Vec<(String, String)>,
}

impl HostVariables {
    /// Create the variables of a new block, seeded with `<HOSTNAME>`.
    pub fn new(hostname: impl Into<String>) -> Self {
        let hostname = hostname.into();
        Self {
            entries: vec![(HOSTNAME_TOKEN.to_string(), hostname.clone())],
            hostname,
        }
    }

    /// The hostname this block belongs to.
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Set a variable, returning the previous value if the key was defined.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Look up a variable by its token.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    /// Iterate over `(token, value)` pairs in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The result of parsing a definitions document.
///
/// Holds the hostnames in first-seen order, the variables of every host, and
/// the warnings for lines that were skipped.
#[derive(Debug, Clone, Default)]
pub struct Definitions {
    hostnames: Vec<String>,
    hosts: HashMap<String, HostVariables>,
    warnings: Vec<ParseWarning>,
}

impl Definitions {
    pub(crate) fn new(
        hostnames: Vec<String>,
        hosts: HashMap<String, HostVariables>,
        warnings: Vec<ParseWarning>,
    ) -> Self {
        Self {
            hostnames,
            hosts,
            warnings,
        }
    }

    /// Hostnames in the order their blocks appear.
    pub fn hostnames(&self) -> &[String] {
        &self.hostnames
    }

    /// Variables of a single host.
    pub fn host(&self, hostname: &str) -> Option<&HostVariables> {
        self.hosts.get(hostname)
    }

    /// Iterate over every host's variables in block order.
    pub fn hosts(&self) -> impl Iterator<Item = &HostVariables> {
        self.hostnames
            .iter()
            .filter_map(|hostname| self.hosts.get(hostname))
    }

    /// Lines skipped while parsing.
    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    /// Every token defined by any host.
    pub fn tokens(&self) -> TokenSet {
        self.hosts()
            .flat_map(HostVariables::iter)
            .map(|(key, _)| key.to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.hostnames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hostnames.is_empty()
    }

    /// Split into the ordered hostname list and the host variable map.
    pub fn into_parts(self) -> (Vec<String>, HashMap<String, HostVariables>) {
        (self.hostnames, self.hosts)
    }
}
