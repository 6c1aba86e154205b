pub mod chunk;
pub mod compare;
pub mod config;
pub mod lines;
pub mod rewrite;
pub mod scan;
pub mod single_pass;
pub mod trim;

pub use compare::{CompareReport, StrategyResult, compare_all};
pub use config::{ConfigError, TrimConfig, parse_leading_char};
pub use lines::{LineSeparator, join_lines, split_lines, strip_edge_newlines};
pub use rewrite::{BufferedRewriter, JoinRewriter, LineRewriter};
pub use scan::{CommonPrefix, PrefixScanner, ScalarScanner, VectorizedScanner};
pub use single_pass::trim_single_pass;
pub use trim::{Strategy, common_prefix, trim, trim_with};
