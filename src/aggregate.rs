// src/aggregate.rs
use std::collections::BTreeMap;

use crate::data::{ContinentSummary, CountryTable};

#[derive(Default)]
struct Acc {
    pop_2022: Option<f64>,
    pop_2023: Option<f64>,
    change_sum: f64,
    change_n: usize,
}

fn add(total: &mut Option<f64>, value: Option<f64>) {
    if let Some(v) = value {
        *total = Some(total.unwrap_or(0.0) + v);
    }
}

/// One row per distinct continent of the raw table, ordered by continent name.
///
/// Totals skip missing populations; a continent with no defined value at all
/// has a missing total. The mean change averages defined values only and is
/// missing when there are none. The `predicted_*` fields are left empty.
pub fn summarize(table: &CountryTable) -> Vec<ContinentSummary> {
    let mut by_continent: BTreeMap<&str, Acc> = BTreeMap::new();

    for r in table.rows() {
        let acc = by_continent.entry(r.continent.as_str()).or_default();
        add(&mut acc.pop_2022, r.pop_2022);
        add(&mut acc.pop_2023, r.pop_2023);
        if let Some(c) = r.pop_change {
            acc.change_sum += c;
            acc.change_n += 1;
        }
    }

    by_continent
        .into_iter()
        .map(|(continent, acc)| ContinentSummary {
            continent: continent.to_string(),
            pop_2022_total: acc.pop_2022,
            pop_2023_total: acc.pop_2023,
            mean_pop_change: (acc.change_n > 0).then(|| acc.change_sum / acc.change_n as f64),
            predicted_pop_change: None,
            predicted_pop_2024: None,
        })
        .collect()
}
