//! Line substitution.

use std::io::{self, BufRead, Cursor, Seek, SeekFrom, Write};

use serde::Serialize;
use tracing::debug;

use crate::definitions::HostVariables;

/// What happens to one template line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// The line is written, with `replaced` tokens substituted.
    Written { text: String, replaced: Vec<String> },
    /// The line matched tokens with empty values and is dropped.
    Suppressed { empty: Vec<String> },
}

/// Counters for one rendered host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RenderStats {
    pub lines_written: usize,
    pub lines_suppressed: usize,
    pub replacements: usize,
}

/// Apply a host's variables to one line.
///
/// Keys are matched as plain substrings, in definition order, against the
/// line as rewritten so far. A key whose text is contained in another key
/// can therefore replace part of it.
pub fn substitute_line(vars: &HostVariables, line: &str) -> LineOutcome {
    let mut text = line.to_string();
    let mut replaced = Vec::new();
    let mut empty = Vec::new();

    for (key, value) in vars.iter() {
        if !text.contains(key) {
            continue;
        }
        if value.is_empty() {
            empty.push(key.to_string());
        } else {
            text = text.replace(key, value);
            replaced.push(key.to_string());
        }
    }

    if empty.is_empty() {
        LineOutcome::Written { text, replaced }
    } else {
        LineOutcome::Suppressed { empty }
    }
}

/// Render a template for one host into `out`.
///
/// The template is rewound before reading. Line terminators are copied as
/// they are, so the output mirrors the template line for line.
pub fn render_host<R, W>(vars: &HostVariables, template: &mut R, out: &mut W) -> io::Result<RenderStats>
where
    R: BufRead + Seek,
    W: Write,
{
    template.seek(SeekFrom::Start(0))?;
    let mut stats = RenderStats::default();
    let mut line = String::new();

    loop {
        line.clear();
        if template.read_line(&mut line)? == 0 {
            break;
        }

        match substitute_line(vars, &line) {
            LineOutcome::Written { text, replaced } => {
                for key in &replaced {
                    debug!(host = vars.hostname(), key = %key, "token replaced");
                }
                out.write_all(text.as_bytes())?;
                stats.lines_written += 1;
                stats.replacements += replaced.len();
            }
            LineOutcome::Suppressed { empty } => {
                debug!(
                    host = vars.hostname(),
                    keys = %empty.join(", "),
                    line = line.trim_end(),
                    "empty value, line removed"
                );
                stats.lines_suppressed += 1;
            }
        }
    }

    Ok(stats)
}

/// Render an in-memory template for one host.
pub fn render_str(vars: &HostVariables, template: &str) -> io::Result<String> {
    let mut cursor = Cursor::new(template.as_bytes());
    let mut out = Vec::new();
    render_host(vars, &mut cursor, &mut out)?;
    String::from_utf8(out).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
