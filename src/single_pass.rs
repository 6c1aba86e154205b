//! Baseline-driven trimming in one pass over the lines.
//!
//! Instead of scanning for a global minimum, the indentation of the first
//! content line becomes the baseline. A later line that is indented less
//! than the baseline and carries content makes the whole call a no-op.
use regex::Regex;
use std::sync::LazyLock;

use crate::lines::{LineSeparator, join_lines, skip_chars};

// Leading blank lines plus the newline before the first content line; the
// content line's own indentation is captured and put back.
static LEADING_BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\n(\s*)").expect("leading blank line pattern compiles")
});

/// Indentation of `line` counted in `leading` chars, or `None` for a line
/// that is whitespace only.
fn indentation(line: &str, leading: char) -> Option<usize> {
    if line.chars().all(char::is_whitespace) {
        return None;
    }
    Some(line.chars().take_while(|&c| c == leading).count())
}

/// Trim `text` against the indentation of its first content line.
///
/// Trailing whitespace is removed from the block and from every rewritten
/// line, and leading blank lines are dropped. If a content line is indented
/// less than the baseline, the block comes back with only that block-level
/// clean-up applied.
pub fn trim_single_pass(text: &str, leading: char, sep: LineSeparator) -> String {
    let cleaned = LEADING_BLANK_LINES.replacen(text.trim_end(), 1, "$1");
    let mut lines: Vec<&str> = cleaned.split(sep.as_str()).collect();
    let baseline = lines.first().and_then(|l| indentation(l, leading));

    let Some(baseline) = baseline else {
        // only reachable when the whole block was whitespace
        return lines.iter().map(|l| l.trim_end()).collect::<Vec<_>>().join(sep.as_str());
    };

    for line in lines.iter_mut() {
        let current: &str = *line;
        match indentation(current, leading) {
            None => *line = "",
            Some(n) if n >= baseline => {
                *line = skip_chars(current, baseline).unwrap_or("").trim_end();
            }
            Some(n) => {
                log::debug!(
                    "single-pass: line indented {} below baseline {}; leaving block untouched",
                    n,
                    baseline
                );
                return cleaned.to_string();
            }
        }
    }
    join_lines(&lines, sep)
}
