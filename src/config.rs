//! Configuration of the case harness.
//!
//! Defaults can be overridden with environment variables:
//!
//! - `TWO_WAY_MAX_LEN`: largest input the two-way insertion sort is run on.
//! - `CASE_SAMPLE_LIMIT`: the sample is cut down to this many records, `none` keeps all of it.

use std::env;

use serde::Serialize;

use crate::error::ConfigError;

pub const TWO_WAY_MAX_LEN_VAR: &str = "TWO_WAY_MAX_LEN";
pub const CASE_SAMPLE_LIMIT_VAR: &str = "CASE_SAMPLE_LIMIT";

pub const DEFAULT_TWO_WAY_MAX_LEN: usize = 1000;
pub const DEFAULT_SAMPLE_LIMIT: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HarnessConfig {
    /// Inputs longer than this are not sorted with the two-way insertion sort, they are reported
    /// as skipped.
    pub two_way_max_len: usize,
    /// Only the first `sample_limit` records of the sample are used.
    pub sample_limit: Option<usize>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            two_way_max_len: DEFAULT_TWO_WAY_MAX_LEN,
            sample_limit: Some(DEFAULT_SAMPLE_LIMIT),
        }
    }
}

impl HarnessConfig {
    /// Defaults, overridden by the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(val) = env::var(TWO_WAY_MAX_LEN_VAR) {
            config.two_way_max_len = parse_len(TWO_WAY_MAX_LEN_VAR, &val)?;
        }

        if let Ok(val) = env::var(CASE_SAMPLE_LIMIT_VAR) {
            config.sample_limit = parse_limit(CASE_SAMPLE_LIMIT_VAR, &val)?;
        }

        Ok(config)
    }
}

pub fn parse_len(key: &str, value: &str) -> Result<usize, ConfigError> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::InvalidValue {
            key: key.into(),
            value: value.into(),
        })
}

/// Like [`parse_len`], `none` means no limit.
pub fn parse_limit(key: &str, value: &str) -> Result<Option<usize>, ConfigError> {
    if value.trim().eq_ignore_ascii_case("none") {
        Ok(None)
    } else {
        parse_len(key, value).map(Some)
    }
}
