// src/lib.rs

#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod aggregate;
pub mod data;
pub mod forecast;
pub mod loader;
pub mod model;
pub mod progress;
pub mod report;
pub mod runner;

pub mod cli;

pub use error::{ForecastError, Result};
