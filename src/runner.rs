// src/runner.rs
use crate::{
    aggregate, forecast, loader,
    data::{ContinentSummary, CountryTable},
    error::Result,
    loader::TableSource,
    model::{self, RegressionModel},
    progress::{Progress, Stage},
};

/// Everything a run produced, stage by stage.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub table: CountryTable,
    pub model: RegressionModel,
    /// Final per-continent table with predictions filled in.
    pub continents: Vec<ContinentSummary>,
}

/// Top-level pipeline: load → fit → summarize → forecast, once, in order.
/// Any stage error aborts the run; nothing partial is returned.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    source: &dyn TableSource,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(Stage::ALL.len());
    }

    let table = loader::load(source)?;
    done(&mut progress, Stage::Load, &format!("{} countries loaded", table.len()));

    let model = model::fit(&table)?;
    for (continent, coef) in model.named_coefficients() {
        logd!("coefficient {continent}: {coef:.6}");
    }
    match model.r_squared(&table)? {
        Some(r2) => logf!("Model fitted on {} continents, R² = {r2:.4}", model.encoding().width()),
        None => logf!("Model fitted on {} continents", model.encoding().width()),
    }
    done(&mut progress, Stage::Fit, "model fitted");

    let summary = aggregate::summarize(&table);
    done(&mut progress, Stage::Summarize, &format!("{} continents", summary.len()));

    let continents = forecast::forecast(&summary, &model)?;
    logf!("Forecast ready for {} continents", continents.len());
    done(&mut progress, Stage::Forecast, "forecast ready");

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(RunSummary { table, model, continents })
}

fn done(progress: &mut Option<&mut dyn Progress>, stage: Stage, msg: &str) {
    if let Some(p) = progress.as_deref_mut() {
        p.log(msg);
        p.stage_done(stage);
    }
}
