// src/model/encoding.rs
use std::collections::BTreeSet;

use ndarray::Array2;

use crate::error::{ForecastError, Result};

/// One-hot encoding of continent names.
///
/// The column set is fixed when the encoding is built from the training rows
/// (sorted, deduplicated) and every later `encode_all` uses that same order.
/// Unknown continents are an error, never an all-zero row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContinentEncoding {
    columns: Vec<String>,
}

impl ContinentEncoding {
    pub fn fit<'a, I>(continents: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let set: BTreeSet<&str> = continents.into_iter().collect();
        Self { columns: set.into_iter().map(str::to_string).collect() }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn index_of(&self, continent: &str) -> Option<usize> {
        self.columns.binary_search_by(|c| c.as_str().cmp(continent)).ok()
    }

    /// Design matrix with one one-hot row per continent.
    pub fn encode_all<'a, I>(&self, continents: I) -> Result<Array2<f64>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let idx = continents
            .into_iter()
            .map(|c| {
                self.index_of(c)
                    .ok_or_else(|| ForecastError::ModelMismatch { continent: c.to_string() })
            })
            .collect::<Result<Vec<usize>>>()?;

        let mut x = Array2::zeros((idx.len(), self.width()));
        for (row, col) in idx.into_iter().enumerate() {
            x[[row, col]] = 1.0;
        }
        Ok(x)
    }
}
