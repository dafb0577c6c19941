// src/data.rs
//
// Pipeline data shapes.
//
// - RawTable: text cells exactly as extracted from the source (headers + rows).
// - CountryTable: typed country rows, in source order, with `pop_change` derived.
// - ContinentSummary: one row per continent, filled in by aggregate + forecast.
//
// Missing values are `None` everywhere; nothing is ever defaulted to zero.

/// Text table as read from a source, before any typing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawTable {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn with(headers: Option<Vec<String>>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }
}

/// `(pop_2023 / pop_2022 - 1) * 100`, missing if either side is missing or
/// `pop_2022` is zero.
pub fn pop_change(pop_2022: Option<f64>, pop_2023: Option<f64>) -> Option<f64> {
    match (pop_2022, pop_2023) {
        (Some(p22), Some(p23)) if p22 != 0.0 => {
            let change = (p23 / p22 - 1.0) * 100.0;
            change.is_finite().then_some(change)
        }
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CountryRecord {
    pub country: String,
    pub continent: String,
    pub region: String,
    pub pop_2022: Option<f64>,
    pub pop_2023: Option<f64>,
    pub pop_change: Option<f64>,
}

impl CountryRecord {
    /// Build a record and derive its `pop_change`.
    pub fn new(
        country: impl Into<String>,
        continent: impl Into<String>,
        region: impl Into<String>,
        pop_2022: Option<f64>,
        pop_2023: Option<f64>,
    ) -> Self {
        Self {
            country: country.into(),
            continent: continent.into(),
            region: region.into(),
            pop_2022,
            pop_2023,
            pop_change: pop_change(pop_2022, pop_2023),
        }
    }
}

/// Country rows in source order. The column set is fixed (see `COLUMNS`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CountryTable {
    rows: Vec<CountryRecord>,
}

impl CountryTable {
    pub const COLUMNS: [&'static str; 6] =
        ["country", "continent", "region", "pop_2022", "pop_2023", "pop_change"];

    pub fn new(rows: Vec<CountryRecord>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[CountryRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows whose `pop_change` is defined, i.e. the rows a model may be fitted on.
    pub fn usable(&self) -> impl Iterator<Item = &CountryRecord> {
        self.rows.iter().filter(|r| r.pop_change.is_some())
    }
}

impl FromIterator<CountryRecord> for CountryTable {
    fn from_iter<I: IntoIterator<Item = CountryRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Per-continent statistics. The two `predicted_*` fields stay `None` until
/// `forecast::forecast` fills them.
#[derive(Clone, Debug, PartialEq)]
pub struct ContinentSummary {
    pub continent: String,
    pub pop_2022_total: Option<f64>,
    pub pop_2023_total: Option<f64>,
    pub mean_pop_change: Option<f64>,
    pub predicted_pop_change: Option<f64>,
    pub predicted_pop_2024: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_change_formula() {
        assert_eq!(pop_change(Some(100.0), Some(110.0)).map(|v| (v * 1e9).round() / 1e9), Some(10.0));
        assert_eq!(pop_change(Some(200.0), Some(180.0)).map(|v| (v * 1e9).round() / 1e9), Some(-10.0));
    }

    #[test]
    fn pop_change_missing_cases() {
        assert_eq!(pop_change(None, Some(1.0)), None);
        assert_eq!(pop_change(Some(1.0), None), None);
        assert_eq!(pop_change(Some(0.0), Some(5.0)), None);
        assert_eq!(pop_change(Some(0.0), Some(0.0)), None);
    }

    #[test]
    fn usable_rows_skip_missing_change() {
        let table: CountryTable = vec![
            CountryRecord::new("A", "Asia", "East", Some(10.0), Some(11.0)),
            CountryRecord::new("B", "Asia", "East", Some(0.0), Some(11.0)),
            CountryRecord::new("C", "Europe", "West", None, Some(3.0)),
        ]
        .into_iter()
        .collect();
        assert_eq!(table.len(), 3);
        let usable: Vec<_> = table.usable().map(|r| r.country.as_str()).collect();
        assert_eq!(usable, vec!["A"]);
    }
}
