// src/progress.rs
use std::fmt;

/// The four pipeline stages, in execution order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Load,
    Fit,
    Summarize,
    Forecast,
}

impl Stage {
    pub const ALL: [Stage; 4] = [Stage::Load, Stage::Fit, Stage::Summarize, Stage::Forecast];
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::Load => "load",
            Stage::Fit => "fit",
            Stage::Summarize => "summarize",
            Stage::Forecast => "forecast",
        })
    }
}

/// Lightweight progress reporting for a pipeline run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of stages.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one stage completes.
    fn stage_done(&mut self, _stage: Stage) {}

    /// Called at the end of a successful run.
    fn finish(&mut self) {}
}
