use crate::chunk;
use crate::lines::{LineSeparator, join_lines, skip_chars, split_lines};
use crate::scan::CommonPrefix;

pub trait LineRewriter {
    /// Remove `prefix` leading chars from every line of `text`.
    ///
    /// A line shorter than the prefix becomes empty; with
    /// [`CommonPrefix::Unbounded`] every line does.
    fn rewrite(&self, text: &str, prefix: CommonPrefix, sep: LineSeparator) -> String;
}

fn strip_prefix(line: &str, prefix: CommonPrefix) -> &str {
    match prefix {
        CommonPrefix::Columns(n) => skip_chars(line, n).unwrap_or(""),
        CommonPrefix::Unbounded => "",
    }
}

/// Builds one string per line and joins them.
#[derive(Debug, Clone, Copy, Default)]
pub struct JoinRewriter;

impl LineRewriter for JoinRewriter {
    fn rewrite(&self, text: &str, prefix: CommonPrefix, sep: LineSeparator) -> String {
        let lines: Vec<String> = split_lines(text, sep)
            .into_iter()
            .map(|line| strip_prefix(line, prefix).to_string())
            .collect();
        join_lines(&lines, sep)
    }
}

/// Writes every line straight into one output buffer sized for the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct BufferedRewriter;

impl BufferedRewriter {
    pub fn rewrite_into(&self, text: &str, prefix: CommonPrefix, sep: LineSeparator) -> String {
        let sep = sep.as_str();
        let mut buf = String::with_capacity(text.len());
        for (i, line) in text.split(sep).enumerate() {
            if i > 0 {
                buf.push_str(sep);
            }
            chunk::copy_chunked(strip_prefix(line, prefix), &mut buf);
        }
        debug_assert!(buf.len() <= text.len());
        buf
    }
}

impl LineRewriter for BufferedRewriter {
    fn rewrite(&self, text: &str, prefix: CommonPrefix, sep: LineSeparator) -> String {
        self.rewrite_into(text, prefix, sep)
    }
}
