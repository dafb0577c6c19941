// src/config/options.rs
use std::time::Duration;

use super::consts::*;

/// Where and how the country table is fetched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub url: String,
    pub timeout: Duration,
    /// Which `<table>` of the document to read (0 = first).
    pub table_index: usize,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            url: SOURCE_URL.to_string(),
            timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
            table_index: DEFAULT_TABLE_INDEX,
        }
    }
}
