// src/model/mod.rs
//! # Change model
//!
//! Linear regression of percentage population change on continent, with
//! continent one-hot encoded.
//!
//! ```text
//! CountryTable ──usable rows──▶ ContinentEncoding::fit ──▶ ols::fit ──▶ RegressionModel
//! ```
//!
//! - Only rows with a defined `pop_change` take part in fitting.
//! - The encoding built here travels inside the model; predictions for any
//!   other continent set go through it, so the column order can never drift.
//! - The model is immutable once built.

pub mod encoding;
pub mod ols;

pub use encoding::ContinentEncoding;

use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::data::CountryTable;
use crate::error::{ForecastError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct RegressionModel {
    encoding: ContinentEncoding,
    intercept: f64,
    coefficients: Array1<f64>,
}

/// Fit the change model on the rows of `table` that have a defined `pop_change`.
pub fn fit(table: &CountryTable) -> Result<RegressionModel> {
    let usable: Vec<_> = table.usable().collect();
    if usable.is_empty() {
        return Err(ForecastError::InsufficientData);
    }

    let encoding = ContinentEncoding::fit(usable.iter().map(|r| r.continent.as_str()));
    let x = encoding.encode_all(usable.iter().map(|r| r.continent.as_str()))?;
    let y: Array1<f64> = usable.iter().filter_map(|r| r.pop_change).collect();

    let params = ols::fit(x.view(), y.view()).ok_or(ForecastError::InsufficientData)?;

    let model = RegressionModel {
        encoding,
        intercept: params.intercept,
        coefficients: params.coefficients,
    };
    logd!(
        "Fitted on {} rows; columns {:?}; intercept {:.6}",
        usable.len(),
        model.encoding.columns(),
        model.intercept
    );
    Ok(model)
}

impl RegressionModel {
    pub fn encoding(&self) -> &ContinentEncoding {
        &self.encoding
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn coefficients(&self) -> ArrayView1<'_, f64> {
        self.coefficients.view()
    }

    /// Coefficients paired with their continent column.
    pub fn named_coefficients(&self) -> impl Iterator<Item = (&str, f64)> {
        self.encoding
            .columns()
            .iter()
            .map(String::as_str)
            .zip(self.coefficients.iter().copied())
    }

    /// Predict from an already-encoded design matrix. It must be as wide as
    /// the encoding.
    pub fn predict(&self, rows: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        if rows.ncols() != self.coefficients.len() {
            return Err(ForecastError::WidthMismatch {
                expected: self.coefficients.len(),
                actual: rows.ncols(),
            });
        }
        Ok(rows.dot(&self.coefficients) + self.intercept)
    }

    /// Encode `continent` with the fitted encoding and predict its change.
    pub fn predict_continent(&self, continent: &str) -> Result<f64> {
        let row = self.encoding.encode_all([continent])?;
        Ok(self.predict(row.view())?[0])
    }

    /// Coefficient of determination on the usable rows of `table`.
    /// `None` when there is nothing to score or the target has zero variance.
    /// Rows with continents outside the encoding are an error.
    pub fn r_squared(&self, table: &CountryTable) -> Result<Option<f64>> {
        let usable: Vec<_> = table.usable().collect();
        if usable.is_empty() {
            return Ok(None);
        }
        let y: Vec<f64> = usable.iter().filter_map(|r| r.pop_change).collect();
        let y_mean = y.iter().sum::<f64>() / y.len() as f64;

        let mut ss_res = 0.0;
        for (r, &yi) in usable.iter().zip(&y) {
            let e = yi - self.predict_continent(&r.continent)?;
            ss_res += e * e;
        }
        let ss_tot: f64 = y.iter().map(|v| (v - y_mean) * (v - y_mean)).sum();

        Ok((ss_tot > 0.0).then(|| 1.0 - ss_res / ss_tot))
    }
}
