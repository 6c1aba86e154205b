use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lines::LineSeparator;
use crate::trim::Strategy;

pub const ENV_STRATEGY: &str = "CODETRIM_STRATEGY";
pub const ENV_CHAR: &str = "CODETRIM_CHAR";
pub const ENV_SEPARATOR: &str = "CODETRIM_SEPARATOR";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown strategy: {0} (expected scalar|single-pass|vectorized|buffered)")]
    UnknownStrategy(String),
    #[error("unknown line separator: {0} (expected lf|crlf)")]
    UnknownSeparator(String),
    #[error("leading character must be exactly one char, got {0:?}")]
    InvalidLeadingChar(String),
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrimConfig {
    pub strategy: Strategy,
    pub leading: char,
    pub separator: LineSeparator,
}

impl Default for TrimConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            leading: ' ',
            separator: LineSeparator::default(),
        }
    }
}

/// Parse a leading-character argument.
///
/// Accepts a single char, or one of the names `\t`, `tab`, `\s` and `space`.
pub fn parse_leading_char(s: &str) -> Result<char, ConfigError> {
    match s {
        "\\t" | "tab" => return Ok('\t'),
        "\\s" | "space" => return Ok(' '),
        _ => {}
    }
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ConfigError::InvalidLeadingChar(s.to_string())),
    }
}

impl TrimConfig {
    /// Defaults overridden by `CODETRIM_*` environment variables.
    /// Unset or empty variables keep the default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let mut cfg = Self::default();
        if let Some(v) = get(ENV_STRATEGY) {
            cfg.strategy = v.parse()?;
        }
        if let Some(v) = get(ENV_CHAR) {
            cfg.leading = parse_leading_char(&v)?;
        }
        if let Some(v) = get(ENV_SEPARATOR) {
            cfg.separator = v.parse()?;
        }
        log::debug!(
            "config: strategy={} leading={:?} separator={}",
            cfg.strategy,
            cfg.leading,
            cfg.separator
        );
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use std::collections::HashMap;

    #[test]
    fn leading_char_forms() {
        assert_eq!(parse_leading_char(" "), Ok(' '));
        assert_eq!(parse_leading_char("\\t"), Ok('\t'));
        assert_eq!(parse_leading_char("tab"), Ok('\t'));
        assert_eq!(parse_leading_char("\\s"), Ok(' '));
        assert_eq!(parse_leading_char("space"), Ok(' '));
        assert_eq!(parse_leading_char("é"), Ok('é'));
        assert!(matches!(
            parse_leading_char("ab"),
            Err(ConfigError::InvalidLeadingChar(_))
        ));
        assert!(parse_leading_char("").is_err());
    }

    #[test]
    fn lookup_overrides_defaults() {
        let vars: HashMap<&str, &str> = [
            (ENV_STRATEGY, "buffered"),
            (ENV_CHAR, "\\t"),
            (ENV_SEPARATOR, ""),
        ]
        .into_iter()
        .collect();
        let cfg = TrimConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(cfg.strategy, Strategy::Buffered);
        assert_eq!(cfg.leading, '\t');
        assert_eq!(cfg.separator, LineSeparator::Lf);
    }

    #[test]
    fn lookup_reports_bad_values() {
        let err = TrimConfig::from_lookup(|k| (k == ENV_STRATEGY).then(|| "simd".to_string()))
            .unwrap_err();
        assert_eq!(err, ConfigError::UnknownStrategy("simd".into()));
        assert!(err.to_string().contains("simd"));
    }

    #[test]
    #[serial]
    fn from_env_reads_process_environment() {
        // SAFETY: tests touching the environment run serially
        unsafe {
            std::env::set_var(ENV_STRATEGY, "single-pass");
            std::env::set_var(ENV_SEPARATOR, "crlf");
            std::env::remove_var(ENV_CHAR);
        }
        let cfg = TrimConfig::from_env();
        unsafe {
            std::env::remove_var(ENV_STRATEGY);
            std::env::remove_var(ENV_SEPARATOR);
        }
        let cfg = cfg.unwrap();
        assert_eq!(cfg.strategy, Strategy::SinglePass);
        assert_eq!(cfg.separator, LineSeparator::CrLf);
        assert_eq!(cfg.leading, ' ');
    }
}
