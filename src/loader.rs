// src/loader.rs
//! Table loading: fetch a raw text table from some source, check its shape,
//! and type it into a `CountryTable`.
//!
//! Sources implement `TableSource` so the pipeline can run against the live
//! page (`HttpSource`), a saved document (`HtmlSource`) or rows built in
//! memory (`MemorySource`).

use std::time::Duration;

use crate::config::consts::*;
use crate::config::SourceOptions;
use crate::core::net;
use crate::core::sanitize::{normalize_ws, parse_number};
use crate::data::{CountryRecord, CountryTable, RawTable};
use crate::error::{ForecastError, Result};
use crate::specs::country_table;

pub trait TableSource {
    /// Short human-readable origin, for logs.
    fn describe(&self) -> String;

    /// Produce the raw text table. One read per call.
    fn fetch(&self) -> Result<RawTable>;
}

/// The live page, over HTTP(S).
#[derive(Clone, Debug)]
pub struct HttpSource {
    url: String,
    timeout: Duration,
    table_index: usize,
}

impl HttpSource {
    pub fn new(url: impl Into<String>, timeout: Duration, table_index: usize) -> Self {
        Self { url: url.into(), timeout, table_index }
    }

    pub fn from_options(opts: &SourceOptions) -> Self {
        Self::new(opts.url.clone(), opts.timeout, opts.table_index)
    }
}

impl Default for HttpSource {
    fn default() -> Self {
        Self::from_options(&SourceOptions::default())
    }
}

impl TableSource for HttpSource {
    fn describe(&self) -> String {
        format!("{} (table {})", self.url, self.table_index)
    }

    fn fetch(&self) -> Result<RawTable> {
        let doc = net::http_get(&self.url, self.timeout)?;
        logd!("Fetched {} bytes from {}", doc.len(), self.url);
        country_table::extract(&doc, self.table_index)
    }
}

/// An HTML document already in memory (saved page, test fixture).
#[derive(Clone, Debug)]
pub struct HtmlSource {
    html: String,
    table_index: usize,
}

impl HtmlSource {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into(), table_index: DEFAULT_TABLE_INDEX }
    }

    pub fn with_table_index(mut self, table_index: usize) -> Self {
        self.table_index = table_index;
        self
    }
}

impl TableSource for HtmlSource {
    fn describe(&self) -> String {
        format!("in-memory HTML, {} bytes (table {})", self.html.len(), self.table_index)
    }

    fn fetch(&self) -> Result<RawTable> {
        country_table::extract(&self.html, self.table_index)
    }
}

/// Raw rows handed over directly, in source column order.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    table: RawTable,
}

impl MemorySource {
    pub fn new(table: RawTable) -> Self {
        Self { table }
    }

    /// Build from string-ish rows, without headers.
    pub fn from_rows<R, S>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|r| r.into_iter().map(Into::into).collect())
            .collect();
        Self::new(RawTable::with(None, rows))
    }
}

impl TableSource for MemorySource {
    fn describe(&self) -> String {
        format!("in-memory table, {} rows", self.table.nrows())
    }

    fn fetch(&self) -> Result<RawTable> {
        Ok(self.table.clone())
    }
}

/// Fetch from `source`, validate the column shape and build the typed table.
pub fn load(source: &dyn TableSource) -> Result<CountryTable> {
    logf!("Loading country table from {}", source.describe());
    let raw = source.fetch()?;
    let table = to_country_table(&raw)?;

    let usable = table.usable().count();
    logf!("Loaded {} countries ({} with a defined pop_change)", table.len(), usable);
    Ok(table)
}

/// Shape check + typing. Every row must have exactly `EXPECTED_COLUMNS`
/// cells; nothing is remapped or padded.
pub fn to_country_table(raw: &RawTable) -> Result<CountryTable> {
    if let Some(h) = &raw.headers {
        if h.len() != EXPECTED_COLUMNS {
            return Err(ForecastError::unavailable(format!(
                "table has {} header columns, expected {} ({})",
                h.len(),
                EXPECTED_COLUMNS,
                RAW_COLUMNS.join(", ")
            )));
        }
    }
    if raw.rows.is_empty() {
        return Err(ForecastError::unavailable("table has no data rows"));
    }

    raw.rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            if row.len() != EXPECTED_COLUMNS {
                return Err(ForecastError::unavailable(format!(
                    "row {} has {} columns, expected {}",
                    i + 1,
                    row.len(),
                    EXPECTED_COLUMNS
                )));
            }
            Ok(CountryRecord::new(
                normalize_ws(&row[COL_COUNTRY]),
                normalize_ws(&row[COL_CONTINENT]),
                normalize_ws(&row[COL_REGION]),
                parse_number(&row[COL_POP_2022]),
                parse_number(&row[COL_POP_2023]),
            ))
        })
        .collect()
}
