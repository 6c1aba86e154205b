use serde::{Deserialize, Serialize};

use crate::chunk;

/// Common indentation shared by the non-blank lines of a block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CommonPrefix {
    /// Number of leading chars to remove from every line.
    Columns(usize),
    /// No line qualified (every line was blank); rewriting empties every line.
    Unbounded,
}

impl CommonPrefix {
    pub fn columns(self) -> Option<usize> {
        match self {
            CommonPrefix::Columns(n) => Some(n),
            CommonPrefix::Unbounded => None,
        }
    }

    fn min_with(self, count: usize) -> Self {
        match self {
            CommonPrefix::Columns(n) if n <= count => self,
            _ => CommonPrefix::Columns(count),
        }
    }
}

pub trait PrefixScanner {
    /// Length of the run of `leading` at the start of `line`, in chars.
    fn leading_count(&self, line: &str, leading: char) -> usize;

    /// Minimum leading run over all non-blank lines.
    ///
    /// A line made only of `leading` (the empty line included) is blank and
    /// does not take part; if every line is blank the result is
    /// [`CommonPrefix::Unbounded`].
    fn scan(&self, lines: &[&str], leading: char) -> CommonPrefix {
        let mut min = CommonPrefix::Unbounded;
        for line in lines {
            let count = self.leading_count(line, leading);
            if count * leading.len_utf8() == line.len() {
                continue;
            }
            min = min.min_with(count);
            if min == CommonPrefix::Columns(0) {
                break;
            }
        }
        min
    }
}

/// One char at a time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarScanner;

impl PrefixScanner for ScalarScanner {
    fn leading_count(&self, line: &str, leading: char) -> usize {
        line.chars().take_while(|&c| c == leading).count()
    }
}

/// Compares [`chunk::CHUNK_WIDTH`] bytes per step.
///
/// Only an ASCII leading char maps one-to-one onto bytes; any other leading
/// char is counted by the scalar path, which gives the same answer.
#[derive(Debug, Clone, Copy, Default)]
pub struct VectorizedScanner;

impl PrefixScanner for VectorizedScanner {
    fn leading_count(&self, line: &str, leading: char) -> usize {
        if leading.is_ascii() {
            chunk::leading_run(line.as_bytes(), leading as u8)
        } else {
            ScalarScanner.leading_count(line, leading)
        }
    }
}
