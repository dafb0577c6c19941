// src/forecast.rs
use crate::data::ContinentSummary;
use crate::error::Result;
use crate::model::RegressionModel;

/// Fill `predicted_pop_change` and `predicted_pop_2024` for every continent.
///
/// Continents are encoded with the model's own fitted encoding; one the model
/// never saw fails the whole call with `ModelMismatch`.
/// `predicted_pop_2024 = pop_2023_total * (1 + predicted_pop_change / 100)`,
/// missing when the 2023 total is missing.
pub fn forecast(summary: &[ContinentSummary], model: &RegressionModel) -> Result<Vec<ContinentSummary>> {
    let encoded = model
        .encoding()
        .encode_all(summary.iter().map(|s| s.continent.as_str()))?;
    let predicted = model.predict(encoded.view())?;

    Ok(summary
        .iter()
        .zip(predicted)
        .map(|(s, change)| ContinentSummary {
            predicted_pop_change: Some(change),
            predicted_pop_2024: s.pop_2023_total.map(|total| total * (1.0 + change / 100.0)),
            ..s.clone()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::summarize;
    use crate::data::{CountryRecord, CountryTable};
    use crate::error::ForecastError;
    use crate::model;

    fn sample() -> CountryTable {
        vec![
            CountryRecord::new("CountryA", "Asia", "", Some(100.0), Some(110.0)),
            CountryRecord::new("CountryB", "Asia", "", Some(200.0), Some(180.0)),
            CountryRecord::new("CountryC", "Europe", "", Some(50.0), Some(55.0)),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn predictions_and_totals() {
        let t = sample();
        let m = model::fit(&t).unwrap();
        let out = forecast(&summarize(&t), &m).unwrap();
        assert_eq!(out.len(), 2);
        assert!(out[0].predicted_pop_change.unwrap().abs() < 1e-9);
        assert!((out[0].predicted_pop_2024.unwrap() - 290.0).abs() < 1e-6);
        assert!((out[1].predicted_pop_change.unwrap() - 10.0).abs() < 1e-9);
        assert!((out[1].predicted_pop_2024.unwrap() - 60.5).abs() < 1e-6);
        assert_eq!(out[1].pop_2023_total, Some(55.0));
    }

    #[test]
    fn unseen_continent_is_rejected() {
        let m = model::fit(&sample()).unwrap();
        let with_africa: CountryTable = sample()
            .rows()
            .iter()
            .cloned()
            .chain([CountryRecord::new("CountryD", "Africa", "", Some(1.0), Some(2.0))])
            .collect();
        let err = forecast(&summarize(&with_africa), &m).unwrap_err();
        assert!(matches!(err, ForecastError::ModelMismatch { ref continent } if continent == "Africa"));
    }

    #[test]
    fn missing_total_gives_missing_prediction() {
        let t = sample();
        let m = model::fit(&t).unwrap();
        let s = vec![ContinentSummary {
            continent: "Europe".into(),
            pop_2022_total: None,
            pop_2023_total: None,
            mean_pop_change: None,
            predicted_pop_change: None,
            predicted_pop_2024: None,
        }];
        let out = forecast(&s, &m).unwrap();
        assert!(out[0].predicted_pop_change.is_some());
        assert_eq!(out[0].predicted_pop_2024, None);
    }
}
