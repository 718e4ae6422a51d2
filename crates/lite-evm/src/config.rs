//! VM configuration and runtime options

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lowest accepted verbosity
pub const MIN_VERBOSE: i8 = -1;
/// Highest accepted verbosity
pub const MAX_VERBOSE: i8 = 9;

/// Outcome of [`crate::Vm::set_option`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetOptionResult {
    /// Option applied
    Success,
    /// No option with this name
    InvalidName,
    /// Value rejected; the previous value is kept
    InvalidValue,
}

/// Configuration loading error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Verbosity outside the accepted range
    #[error("verbose must be within -1..=9, got {0}")]
    VerboseOutOfRange(i64),
}

/// VM configuration.
///
/// Only affects diagnostic output; two VMs with different configurations
/// produce identical execution results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VmConfig {
    /// Diagnostic level. 0 is silent, 1 logs execution start and end, 2 and
    /// above also trace every step. -1 is accepted and behaves like 0.
    pub verbose: i8,
}

impl VmConfig {
    /// Load configuration from a JSON document such as `{"verbose": 2}`
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        #[derive(Deserialize)]
        struct Raw {
            #[serde(default)]
            verbose: i64,
        }

        let raw: Raw = serde_json::from_str(json)?;
        let verbose =
            check_verbose(raw.verbose).ok_or(ConfigError::VerboseOutOfRange(raw.verbose))?;
        Ok(Self { verbose })
    }

    /// Apply a named option given as a string
    pub fn set_option(&mut self, name: &str, value: &str) -> SetOptionResult {
        match name {
            "verbose" => match parse_c_long(value).and_then(check_verbose) {
                Some(verbose) => {
                    self.verbose = verbose;
                    SetOptionResult::Success
                }
                None => SetOptionResult::InvalidValue,
            },
            _ => SetOptionResult::InvalidName,
        }
    }

    /// Whether execution start and end are logged
    pub fn logs_execution(&self) -> bool {
        self.verbose > 0
    }

    /// Whether every step is traced
    pub fn traces_steps(&self) -> bool {
        self.verbose > 1
    }
}

fn check_verbose(value: i64) -> Option<i8> {
    i8::try_from(value)
        .ok()
        .filter(|v| (MIN_VERBOSE..=MAX_VERBOSE).contains(v))
}

/// Parse an integer the way C `strtol(value, &end, 0)` does.
///
/// Leading whitespace and a sign are accepted; the base is 16 after `0x`, 8
/// after a leading `0`, 10 otherwise. The longest valid digit prefix is used
/// and trailing characters are ignored. Returns `None` when no digit is
/// consumed. Values beyond `i64` saturate.
pub fn parse_c_long(value: &str) -> Option<i64> {
    let s = value.trim_start_matches([' ', '\t', '\n', '\x0b', '\x0c', '\r']);
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let hex_body = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .filter(|rest| rest.starts_with(|c: char| c.is_ascii_hexdigit()));
    let (radix, digits) = match hex_body {
        Some(rest) => (16, rest),
        None if s.starts_with('0') => (8, s),
        None => (10, s),
    };

    let mut parsed: i64 = 0;
    let mut consumed = false;
    for digit in digits.chars().map_while(|c| c.to_digit(radix)) {
        consumed = true;
        parsed = parsed
            .saturating_mul(i64::from(radix))
            .saturating_add(i64::from(digit));
    }

    if !consumed {
        return None;
    }
    Some(if negative { parsed.saturating_neg() } else { parsed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_c_long_bases() {
        assert_eq!(parse_c_long("7"), Some(7));
        assert_eq!(parse_c_long("-1"), Some(-1));
        assert_eq!(parse_c_long("+3"), Some(3));
        assert_eq!(parse_c_long("0x9"), Some(9));
        assert_eq!(parse_c_long("0XA"), Some(10));
        assert_eq!(parse_c_long("010"), Some(8));
        assert_eq!(parse_c_long("0"), Some(0));
    }

    #[test]
    fn test_parse_c_long_prefixes() {
        assert_eq!(parse_c_long("  5"), Some(5));
        assert_eq!(parse_c_long("5abc"), Some(5));
        assert_eq!(parse_c_long("08"), Some(0));
        assert_eq!(parse_c_long("0x"), Some(0));
        assert_eq!(parse_c_long("0xg"), Some(0));
    }

    #[test]
    fn test_parse_c_long_rejects_non_numbers() {
        assert_eq!(parse_c_long(""), None);
        assert_eq!(parse_c_long("   "), None);
        assert_eq!(parse_c_long("abc"), None);
        assert_eq!(parse_c_long("-"), None);
        assert_eq!(parse_c_long("x1"), None);
    }

    #[test]
    fn test_parse_c_long_saturates() {
        assert_eq!(parse_c_long("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_c_long("-99999999999999999999999"), Some(-i64::MAX));
    }

    #[test]
    fn test_set_option_verbose() {
        let mut config = VmConfig::default();
        assert_eq!(config.set_option("verbose", "9"), SetOptionResult::Success);
        assert_eq!(config.verbose, 9);
        assert_eq!(config.set_option("verbose", "-1"), SetOptionResult::Success);
        assert_eq!(config.verbose, -1);
    }

    #[test]
    fn test_set_option_invalid_value_keeps_previous() {
        let mut config = VmConfig::default();
        config.set_option("verbose", "2");
        assert_eq!(config.set_option("verbose", "10"), SetOptionResult::InvalidValue);
        assert_eq!(config.set_option("verbose", "-2"), SetOptionResult::InvalidValue);
        assert_eq!(config.set_option("verbose", "loud"), SetOptionResult::InvalidValue);
        assert_eq!(config.set_option("verbose", ""), SetOptionResult::InvalidValue);
        assert_eq!(config.set_option("verbose", "1000000000000"), SetOptionResult::InvalidValue);
        assert_eq!(config.verbose, 2);
    }

    #[test]
    fn test_set_option_invalid_name() {
        let mut config = VmConfig::default();
        assert_eq!(config.set_option("debug", "1"), SetOptionResult::InvalidName);
        assert_eq!(config.set_option("Verbose", "1"), SetOptionResult::InvalidName);
        assert_eq!(config, VmConfig::default());
    }

    #[test]
    fn test_verbosity_levels() {
        let quiet = VmConfig { verbose: -1 };
        assert!(!quiet.logs_execution());
        let info = VmConfig { verbose: 1 };
        assert!(info.logs_execution());
        assert!(!info.traces_steps());
        let trace = VmConfig { verbose: 2 };
        assert!(trace.traces_steps());
    }

    #[test]
    fn test_from_json() {
        assert_eq!(VmConfig::from_json(r#"{"verbose": 3}"#).unwrap().verbose, 3);
        assert_eq!(VmConfig::from_json("{}").unwrap(), VmConfig::default());
        assert!(matches!(
            VmConfig::from_json(r#"{"verbose": 12}"#),
            Err(ConfigError::VerboseOutOfRange(12))
        ));
        assert!(matches!(VmConfig::from_json("not json"), Err(ConfigError::Json(_))));
    }

    proptest! {
        #[test]
        fn test_parse_c_long_matches_decimal(value in (i64::MIN + 1)..=i64::MAX) {
            prop_assert_eq!(parse_c_long(&value.to_string()), Some(value));
        }

        #[test]
        fn test_set_option_accepts_exactly_the_range(value in -100i64..100) {
            let mut config = VmConfig::default();
            let result = config.set_option("verbose", &value.to_string());
            if (-1..=9).contains(&value) {
                prop_assert_eq!(result, SetOptionResult::Success);
                prop_assert_eq!(i64::from(config.verbose), value);
            } else {
                prop_assert_eq!(result, SetOptionResult::InvalidValue);
                prop_assert_eq!(config, VmConfig::default());
            }
        }
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&VmConfig { verbose: 4 }).unwrap();
        assert_eq!(json, r#"{"verbose":4}"#);
    }
}
