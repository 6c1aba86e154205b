use serde::{Deserialize, Serialize};

use crate::lines::{LineSeparator, split_lines};
use crate::scan::CommonPrefix;
use crate::trim::{Strategy, common_prefix};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StrategyResult {
    pub strategy: Strategy,
    /// Computed prefix; absent for the single-pass strategy, which has none.
    pub prefix: Option<CommonPrefix>,
    pub output: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CompareReport {
    pub leading: char,
    pub separator: LineSeparator,
    pub results: Vec<StrategyResult>,
    /// Scalar, vectorized and buffered produced identical output.
    pub equivalent: bool,
    /// Single-pass output matches the scalar output as well.
    pub single_pass_matches: bool,
}

/// Run every strategy over `text` and report where they agree.
pub fn compare_all(text: &str, leading: char, sep: LineSeparator) -> CompareReport {
    let lines = split_lines(text, sep);
    let results: Vec<StrategyResult> = Strategy::ALL
        .into_iter()
        .map(|strategy| StrategyResult {
            strategy,
            prefix: common_prefix(&lines, leading, strategy),
            output: strategy.trim(text, leading, sep),
        })
        .collect();

    let output_of = |st: Strategy| {
        results
            .iter()
            .find(|r| r.strategy == st)
            .map(|r| r.output.as_str())
    };
    let reference = output_of(Strategy::Scalar);
    let equivalent = [Strategy::Vectorized, Strategy::Buffered]
        .into_iter()
        .all(|st| output_of(st) == reference);
    let single_pass_matches = output_of(Strategy::SinglePass) == reference;
    if !equivalent {
        log::warn!("compare: prefix strategies disagree on {} bytes of input", text.len());
    }

    CompareReport {
        leading,
        separator: sep,
        results,
        equivalent,
        single_pass_matches,
    }
}
