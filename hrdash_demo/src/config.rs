// Copyright 2025 the hrdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Environment configuration for the report binary.

use std::env;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use hrdash_metrics::{DateParseError, parse_lenient};

const DEFAULT_OUTPUT: &str = "hrdash_report.html";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct DemoConfig {
    /// JSON snapshot to read; a generated sample is used when unset.
    pub(crate) snapshot: Option<PathBuf>,
    /// Where the HTML report is written.
    pub(crate) output: PathBuf,
    /// The day treated as "today".
    pub(crate) today: NaiveDate,
}

impl DemoConfig {
    /// Reads `HRDASH_SNAPSHOT`, `HRDASH_OUTPUT` and `HRDASH_TODAY`.
    pub(crate) fn from_env() -> Result<Self, DateParseError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DateParseError> {
        let today = match lookup("HRDASH_TODAY") {
            Some(raw) => parse_lenient(&raw)?,
            None => Local::now().date_naive(),
        };
        Ok(Self {
            snapshot: lookup("HRDASH_SNAPSHOT")
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            output: lookup("HRDASH_OUTPUT")
                .filter(|p| !p.is_empty())
                .map_or_else(|| PathBuf::from(DEFAULT_OUTPUT), PathBuf::from),
            today,
        })
    }
}
