// src/config/consts.rs

// Net config
pub const SOURCE_URL: &str = "https://tinyurl.com/mry64ebh";
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
pub const USER_AGENT: &str = concat!("pop_forecast/", env!("CARGO_PKG_VERSION"));

// Source table
pub const DEFAULT_TABLE_INDEX: usize = 0;
pub const EXPECTED_COLUMNS: usize = 6;

// Raw column positions, in source order
pub const RAW_COLUMNS: [&str; EXPECTED_COLUMNS] =
    ["country", "pop_2022", "pop_2023", "pop_change", "continent", "region"];
pub const COL_COUNTRY: usize = 0;
pub const COL_POP_2022: usize = 1;
pub const COL_POP_2023: usize = 2;
pub const COL_CONTINENT: usize = 4;
pub const COL_REGION: usize = 5;
// Column 3 is the source's own change figure; it is recomputed, never read.
