use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::{ConfigError, TrimConfig};
use crate::lines::{LineSeparator, split_lines};
use crate::rewrite::{BufferedRewriter, JoinRewriter, LineRewriter};
use crate::scan::{CommonPrefix, PrefixScanner, ScalarScanner, VectorizedScanner};
use crate::single_pass::trim_single_pass;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Scalar scan, per-line strings joined.
    Scalar,
    /// Baseline from the first content line; gives up on inconsistent indentation.
    SinglePass,
    /// Chunked scan, per-line strings joined.
    #[default]
    Vectorized,
    /// Scalar scan, rewrite into one pre-sized buffer.
    Buffered,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Scalar,
        Strategy::SinglePass,
        Strategy::Vectorized,
        Strategy::Buffered,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Scalar => "scalar",
            Strategy::SinglePass => "single-pass",
            Strategy::Vectorized => "vectorized",
            Strategy::Buffered => "buffered",
        }
    }

    fn scanner(self) -> Option<&'static dyn PrefixScanner> {
        match self {
            Strategy::Scalar | Strategy::Buffered => Some(&ScalarScanner),
            Strategy::Vectorized => Some(&VectorizedScanner),
            Strategy::SinglePass => None,
        }
    }

    fn rewriter(self) -> &'static dyn LineRewriter {
        match self {
            Strategy::Buffered => &BufferedRewriter,
            _ => &JoinRewriter,
        }
    }

    pub fn trim(self, text: &str, leading: char, sep: LineSeparator) -> String {
        let Some(scanner) = self.scanner() else {
            log::debug!("trim: strategy={} bytes={}", self.name(), text.len());
            return trim_single_pass(text, leading, sep);
        };
        let prefix = scanner.scan(&split_lines(text, sep), leading);
        log::debug!(
            "trim: strategy={} bytes={} prefix={:?}",
            self.name(),
            text.len(),
            prefix
        );
        self.rewriter().rewrite(text, prefix, sep)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace('_', "-");
        Strategy::ALL
            .into_iter()
            .find(|st| st.name() == norm)
            .ok_or_else(|| ConfigError::UnknownStrategy(s.to_string()))
    }
}

/// Common prefix of `lines` as computed by `strategy`'s scanner.
///
/// `None` for the single-pass strategy, which trims against a baseline and
/// never computes a global prefix.
pub fn common_prefix(lines: &[&str], leading: char, strategy: Strategy) -> Option<CommonPrefix> {
    strategy.scanner().map(|scanner| scanner.scan(lines, leading))
}

/// Strip the indentation shared by every non-blank line of `text`.
pub fn trim(text: &str, leading: char) -> String {
    Strategy::default().trim(text, leading, LineSeparator::default())
}

pub fn trim_with(cfg: &TrimConfig, text: &str) -> String {
    cfg.strategy.trim(text, cfg.leading, cfg.separator)
}
