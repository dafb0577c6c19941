// tests/pipeline_e2e.rs
//
// Whole pipeline against in-memory sources (no network).
//
use pop_forecast::data::ContinentSummary;
use pop_forecast::loader::{HtmlSource, MemorySource};
use pop_forecast::progress::{Progress, Stage};
use pop_forecast::{aggregate, forecast, loader, model, runner, ForecastError};

const EPS: f64 = 1e-9;

fn three_countries() -> MemorySource {
    // source column order: country, pop_2022, pop_2023, change, continent, region
    MemorySource::from_rows([
        ["CountryA", "100", "110", "", "Asia", "East"],
        ["CountryB", "200", "180", "", "Asia", "East"],
        ["CountryC", "50", "55", "", "Europe", "West"],
    ])
}

fn find<'a>(rows: &'a [ContinentSummary], name: &str) -> &'a ContinentSummary {
    rows.iter().find(|r| r.continent == name).unwrap()
}

#[test]
fn three_country_scenario() {
    let out = runner::run(&three_countries(), None).unwrap();

    let changes: Vec<f64> = out.table.rows().iter().map(|r| r.pop_change.unwrap()).collect();
    assert!((changes[0] - 10.0).abs() < EPS);
    assert!((changes[1] + 10.0).abs() < EPS);
    assert!((changes[2] - 10.0).abs() < EPS);

    assert_eq!(out.continents.len(), 2);
    let asia = find(&out.continents, "Asia");
    assert_eq!(asia.pop_2022_total, Some(300.0));
    assert_eq!(asia.pop_2023_total, Some(290.0));
    assert!(asia.mean_pop_change.unwrap().abs() < EPS);
    assert!(asia.predicted_pop_change.unwrap().abs() < EPS);
    assert!((asia.predicted_pop_2024.unwrap() - 290.0).abs() < 1e-6);

    let europe = find(&out.continents, "Europe");
    assert_eq!(europe.pop_2022_total, Some(50.0));
    assert_eq!(europe.pop_2023_total, Some(55.0));
    assert!((europe.mean_pop_change.unwrap() - 10.0).abs() < EPS);
    assert!((europe.predicted_pop_change.unwrap() - 10.0).abs() < EPS);
    assert!((europe.predicted_pop_2024.unwrap() - 60.5).abs() < 1e-6);
}

#[test]
fn same_scenario_from_html() {
    let doc = r#"
        <html><head><title>Countries</title></head><body>
        <table class="wikitable sortable">
          <thead><tr><th>Country</th><th>Population (1 July 2022)</th><th>Population (1 July 2023)</th>
                     <th>Change</th><th>Continent</th><th>Statistical subregion</th></tr></thead>
          <tbody>
            <tr><td><a href="/a">CountryA</a><sup>[a]</sup></td><td>100</td><td>110</td><td>+10.0%</td><td>Asia</td><td>East</td></tr>
            <tr><td>CountryB</td><td>200</td><td>180</td><td>−10.0%</td><td>Asia</td><td>East</td></tr>
            <tr><td>CountryC</td><td>50</td><td>55</td><td>+10.0%</td><td>Europe</td><td>West</td></tr>
          </tbody>
        </table>
        </body></html>"#;

    let out = runner::run(&HtmlSource::new(doc), None).unwrap();
    assert_eq!(out.table.rows()[0].country, "CountryA");
    let asia = find(&out.continents, "Asia");
    assert!((asia.predicted_pop_2024.unwrap() - 290.0).abs() < 1e-6);
    let europe = find(&out.continents, "Europe");
    assert!((europe.predicted_pop_2024.unwrap() - 60.5).abs() < 1e-6);
}

#[test]
fn td_header_row_never_becomes_a_country() {
    let doc = r#"<table>
        <thead><tr><td>Country</td><td>2022</td><td>2023</td><td>Change</td><td>Continent</td><td>Region</td></tr></thead>
        <tbody>
          <tr><td>CountryA</td><td>100</td><td>110</td><td>+10%</td><td>Asia</td><td>East</td></tr>
          <tr><td>CountryC</td><td>50</td><td>55</td><td>+10%</td><td>Europe</td><td>West</td></tr>
        </tbody>
    </table>"#;

    let out = runner::run(&HtmlSource::new(doc), None).unwrap();
    assert_eq!(out.table.len(), 2);
    assert_eq!(out.model.encoding().columns(), ["Asia", "Europe"]);
    assert_eq!(out.continents.len(), 2);
    assert!(out.continents.iter().all(|c| c.continent != "Continent"));
}

#[test]
fn zero_population_row_is_excluded_from_means_and_fit() {
    let src = MemorySource::from_rows([
        ["A", "100", "110", "", "Asia", "East"],
        ["Z", "0", "40", "", "Asia", "East"],
        ["C", "50", "55", "", "Europe", "West"],
    ]);
    let out = runner::run(&src, None).unwrap();

    assert_eq!(out.table.rows()[1].pop_change, None);
    let asia = find(&out.continents, "Asia");
    assert_eq!(asia.pop_2022_total, Some(100.0));
    assert_eq!(asia.pop_2023_total, Some(150.0));
    assert!((asia.mean_pop_change.unwrap() - 10.0).abs() < EPS);
    assert!((asia.predicted_pop_change.unwrap() - 10.0).abs() < EPS);
}

#[test]
fn totals_add_up_to_table_sums() {
    let src = MemorySource::from_rows([
        ["A", "1,000", "1,100", "", "Asia", "x"],
        ["B", "n/a", "300", "", "Asia", "x"],
        ["C", "250", "260", "", "Africa", "x"],
        ["D", "40", "", "", "Europe", "x"],
        ["E", "60", "66", "", "Europe", "x"],
    ]);
    let table = loader::load(&src).unwrap();
    let summary = aggregate::summarize(&table);

    let by_continent: f64 = summary.iter().filter_map(|s| s.pop_2022_total).sum();
    let by_country: f64 = table.rows().iter().filter_map(|r| r.pop_2022).sum();
    assert!((by_continent - by_country).abs() < EPS);
    assert_eq!(summary.len(), 3);
}

#[test]
fn continent_unseen_in_fit_is_rejected() {
    // Africa only has an unparsable population, so it never reaches the fit
    // but still shows up in the aggregate.
    let src = MemorySource::from_rows([
        ["A", "100", "110", "", "Asia", "x"],
        ["C", "50", "55", "", "Europe", "x"],
        ["D", "unknown", "70", "", "Africa", "x"],
    ]);
    let err = runner::run(&src, None).unwrap_err();
    assert!(matches!(err, ForecastError::ModelMismatch { ref continent } if continent == "Africa"));
}

#[test]
fn model_from_one_table_rejects_other_continents() {
    let fitted = model::fit(&loader::load(&three_countries()).unwrap()).unwrap();
    let other = loader::load(&MemorySource::from_rows([["X", "1", "2", "", "Africa", "x"]])).unwrap();
    let err = forecast::forecast(&aggregate::summarize(&other), &fitted).unwrap_err();
    assert!(matches!(err, ForecastError::ModelMismatch { .. }));
}

#[test]
fn no_usable_rows_is_insufficient_data() {
    let src = MemorySource::from_rows([
        ["A", "?", "110", "", "Asia", "x"],
        ["B", "0", "5", "", "Europe", "x"],
    ]);
    assert!(matches!(runner::run(&src, None), Err(ForecastError::InsufficientData)));
}

#[test]
fn fitting_twice_gives_identical_models() {
    let table = loader::load(&three_countries()).unwrap();
    let a = model::fit(&table).unwrap();
    let b = model::fit(&table).unwrap();
    assert_eq!(a.intercept(), b.intercept());
    assert_eq!(a.coefficients(), b.coefficients());
}

#[derive(Default)]
struct Recorder {
    total: usize,
    stages: Vec<Stage>,
    finished: bool,
}

impl Progress for Recorder {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn stage_done(&mut self, stage: Stage) {
        self.stages.push(stage);
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

#[test]
fn progress_sees_every_stage_in_order() {
    let mut rec = Recorder::default();
    runner::run(&three_countries(), Some(&mut rec)).unwrap();
    assert_eq!(rec.total, 4);
    assert_eq!(rec.stages, Stage::ALL.to_vec());
    assert!(rec.finished);
}
