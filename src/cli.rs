// src/cli.rs
use std::env;
use std::io::{self, Write};

use crate::config::SourceOptions;
use crate::error::{ForecastError, Result};
use crate::loader::HttpSource;
use crate::progress::{Progress, Stage};
use crate::{report, runner};

const USAGE: &str = "\
Usage: pop_forecast

Fetches the country population table, fits a per-continent change model
and prints the predicted 2024 population for each continent.

Options:
  -h, --help    Print this help and exit";

enum Action {
    Run,
    Help,
}

/// Stage progress as debug log lines.
struct LogProgress;

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        logd!("Running {total} stages");
    }
    fn log(&mut self, msg: &str) {
        logd!("{msg}");
    }
    fn stage_done(&mut self, stage: Stage) {
        logd!("Stage {stage} done");
    }
}

pub fn run() -> Result<()> {
    match parse_args(env::args().skip(1))? {
        Action::Help => {
            eprintln!("{USAGE}");
            Ok(())
        }
        Action::Run => run_pipeline(),
    }
}

fn run_pipeline() -> Result<()> {
    let source = HttpSource::from_options(&SourceOptions::default());
    let summary = match runner::run(&source, Some(&mut LogProgress)) {
        Ok(s) => s,
        Err(e) => {
            loge!("{e}");
            return Err(e);
        }
    };

    let mut out = io::stdout().lock();
    report::write_table(&mut out, &summary.continents)?;
    out.flush()?;
    Ok(())
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Action> {
    let action = match args.next().as_deref() {
        None => Action::Run,
        Some("-h" | "--help") => Action::Help,
        Some(other) => {
            return Err(ForecastError::Usage(format!("unknown argument: {other}\n\n{USAGE}")));
        }
    };
    if let Some(extra) = args.next() {
        return Err(ForecastError::Usage(format!("unexpected argument: {extra}")));
    }
    Ok(action)
}
