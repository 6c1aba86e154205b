//! Line splitting and joining shared by every trim strategy.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LineSeparator {
    #[default]
    Lf,
    CrLf,
}

impl LineSeparator {
    pub fn as_str(self) -> &'static str {
        match self {
            LineSeparator::Lf => "\n",
            LineSeparator::CrLf => "\r\n",
        }
    }
}

impl fmt::Display for LineSeparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineSeparator::Lf => f.write_str("lf"),
            LineSeparator::CrLf => f.write_str("crlf"),
        }
    }
}

impl FromStr for LineSeparator {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lf" | "\n" | "unix" => Ok(LineSeparator::Lf),
            "crlf" | "\r\n" | "windows" => Ok(LineSeparator::CrLf),
            _ => Err(ConfigError::UnknownSeparator(s.to_string())),
        }
    }
}

/// Split `text` on `sep`. Purely positional; `""` yields a single empty line
/// and a trailing separator yields a trailing empty line.
pub fn split_lines(text: &str, sep: LineSeparator) -> Vec<&str> {
    text.split(sep.as_str()).collect()
}

/// Join lines with `sep` between them and none after the last.
pub fn join_lines<S: AsRef<str>>(lines: &[S], sep: LineSeparator) -> String {
    let sep = sep.as_str();
    let total = lines.iter().map(|l| l.as_ref().len()).sum::<usize>()
        + sep.len() * lines.len().saturating_sub(1);
    let mut out = String::with_capacity(total);
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        out.push_str(line.as_ref());
    }
    out
}

/// Drop the first `n` chars of `line`.
/// Returns `None` when the line holds fewer than `n` chars.
pub fn skip_chars(line: &str, n: usize) -> Option<&str> {
    let bytes = line.as_bytes();
    if n <= bytes.len() && bytes[..n].is_ascii() {
        // byte n-1 is ASCII, so n sits on a char boundary
        return Some(&line[n..]);
    }
    let mut seen = 0usize;
    for (idx, _) in line.char_indices() {
        if seen == n {
            return Some(&line[idx..]);
        }
        seen += 1;
    }
    if seen == n { Some("") } else { None }
}

/// Remove every leading and trailing `'\n'`.
///
/// This is the clean-up a rendering layer performs on a raw code block
/// before handing it to [`crate::trim`]; the trimmer never calls it itself.
pub fn strip_edge_newlines(text: &str) -> &str {
    text.trim_matches('\n')
}
