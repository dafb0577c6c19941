// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific knowledge of *where the data lives in the HTML* and how to
//! pull it out as a text grid. Each spec works on a document it is handed.
//!
//! ## What lives here
//! - **Pure HTML parsing** using `core::html` helpers (case-insensitive tag
//!   scanning, tag stripping, entity/whitespace normalization).
//! - **Light shaping** into `data::RawTable` (headers + rows).
//!
//! ## What does **not** live here
//! - **Networking** (`core::net`) and source selection (`loader`).
//! - **Typing and validation**: numbers, missing values and column counts are
//!   the loader's job.
//!
//! ## Typical call chain
//! ```text
//! runner → loader::load → TableSource::fetch → specs::country_table::extract
//!                       ↘ loader::to_country_table (shape check + typing)
//! ```
//!
//! ## Testing notes
//! - Specs are testable **offline** against inline HTML fixtures.
//! - Keep selectors resilient to whitespace, attribute order and case.
pub mod country_table;
