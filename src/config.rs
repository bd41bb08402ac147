//! Run configuration parsed from `key=value` command-line tokens.
//!
//! One immutable [`RunConfig`] is built before the sweep starts and passed by
//! reference everywhere; nothing mutates it afterwards. Options are
//! order-independent and the last occurrence of a key wins. Tokens that do
//! not name a known option are ignored; a known option with a value that
//! fails to parse is a configuration error.

use std::fmt;

/// Default lanes per strategy invocation.
pub const DEFAULT_NUM_FLOATS: usize = 16 * 1024;
/// Default total lane budget per strategy per alignment.
pub const DEFAULT_TOTAL_FLOATS: usize = 65636 * DEFAULT_NUM_FLOATS;
/// Default fill/verification constant.
pub const DEFAULT_CHECK_VALUE: f32 = 1.0;
/// AVX strategies participate by default.
pub const DEFAULT_ENABLE_AVX: bool = true;
/// Chart rows are HTML-wrapped by default.
pub const DEFAULT_REPORT_HTML: bool = true;

/// Immutable benchmark configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    /// Lanes processed per strategy call (block size)
    pub num_floats: usize,
    /// Total lanes processed per strategy per alignment
    pub total_floats: usize,
    /// Constant used to fill sources and validate outputs
    pub check_value: f32,
    /// Gates the 8-lane and 32-byte-aligned strategies
    pub has_avx: bool,
    /// Wrap the chart rows in the HTML/JS preamble and postamble
    pub html: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            num_floats: DEFAULT_NUM_FLOATS,
            total_floats: DEFAULT_TOTAL_FLOATS,
            check_value: DEFAULT_CHECK_VALUE,
            has_avx: DEFAULT_ENABLE_AVX,
            html: DEFAULT_REPORT_HTML,
        }
    }
}

/// A known option whose value failed to parse.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigError {
    pub key: String,
    pub value: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value '{}' for option {}", self.value, self.key)
    }
}

impl std::error::Error for ConfigError {}

impl RunConfig {
    /// Parse `key=value` tokens on top of the defaults.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, ConfigError> {
        let mut cfg = Self::default();
        for arg in args {
            let arg = arg.as_ref();
            let Some((key, value)) = arg.split_once('=') else {
                continue;
            };
            match key {
                "num-floats" => cfg.num_floats = parse(key, value)?,
                "total-floats" => cfg.total_floats = parse(key, value)?,
                "check-value" => cfg.check_value = parse(key, value)?,
                "enable-avx" => cfg.has_avx = parse(key, value)?,
                "report-html" => cfg.html = parse(key, value)?,
                _ => {}
            }
        }
        Ok(cfg)
    }

    /// The total budget must cover at least one block.
    pub fn is_budget_valid(&self) -> bool {
        self.total_floats >= self.num_floats
    }
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = RunConfig::from_args::<&str>(&[]).unwrap();
        assert_eq!(cfg, RunConfig::default());
        assert_eq!(cfg.num_floats, 16 * 1024);
        assert!(cfg.has_avx);
        assert!(cfg.html);
    }

    #[test]
    fn test_parse_all_options() {
        let cfg = RunConfig::from_args(&[
            "num-floats=1024",
            "total-floats=1048576",
            "check-value=2.0",
            "enable-avx=false",
            "report-html=false",
        ])
        .unwrap();
        assert_eq!(cfg.num_floats, 1024);
        assert_eq!(cfg.total_floats, 1048576);
        assert_eq!(cfg.check_value, 2.0);
        assert!(!cfg.has_avx);
        assert!(!cfg.html);
    }

    #[test]
    fn test_last_occurrence_wins() {
        let cfg = RunConfig::from_args(&["num-floats=8", "num-floats=32"]).unwrap();
        assert_eq!(cfg.num_floats, 32);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let cfg = RunConfig::from_args(&["no-such-option=7", "copy"]).unwrap();
        assert_eq!(cfg, RunConfig::default());
    }

    #[test]
    fn test_bad_value_is_error() {
        let err = RunConfig::from_args(&["num-floats=many"]).unwrap_err();
        assert_eq!(err.key, "num-floats");
        assert_eq!(err.value, "many");

        assert!(RunConfig::from_args(&["enable-avx=yes"]).is_err());
        assert!(RunConfig::from_args(&["check-value=abc"]).is_err());
    }

    #[test]
    fn test_budget_validation() {
        let cfg = RunConfig::from_args(&["num-floats=64", "total-floats=16"]).unwrap();
        assert!(!cfg.is_budget_valid());
        let cfg = RunConfig::from_args(&["num-floats=64", "total-floats=64"]).unwrap();
        assert!(cfg.is_budget_valid());
    }
}
