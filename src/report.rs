// src/report.rs
// Plain-text rendering of the continent table: index column, header row,
// right-aligned values, `NaN` for missing.

use std::io::{self, Write};

use crate::data::ContinentSummary;

const HEADERS: [&str; 6] = [
    "continent",
    "pop_2022_total",
    "pop_2023_total",
    "mean_pop_change",
    "predicted_pop_change",
    "predicted_pop_2024",
];

fn fmt_value(v: Option<f64>, decimals: usize) -> String {
    match v {
        Some(x) => format!("{x:.decimals$}"),
        None => "NaN".to_string(),
    }
}

fn to_cells(s: &ContinentSummary) -> [String; 6] {
    [
        s.continent.clone(),
        fmt_value(s.pop_2022_total, 0),
        fmt_value(s.pop_2023_total, 0),
        fmt_value(s.mean_pop_change, 6),
        fmt_value(s.predicted_pop_change, 6),
        fmt_value(s.predicted_pop_2024, 1),
    ]
}

/// Write the table to any writer.
pub fn write_table<W: Write>(mut w: W, rows: &[ContinentSummary]) -> io::Result<()> {
    let body: Vec<[String; 6]> = rows.iter().map(to_cells).collect();

    let index_w = rows.len().saturating_sub(1).to_string().len();
    let mut widths = HEADERS.map(str::len);
    for cells in &body {
        for (width, c) in widths.iter_mut().zip(cells) {
            *width = (*width).max(c.chars().count());
        }
    }

    write!(w, "{:index_w$}", "")?;
    for (h, width) in HEADERS.iter().zip(widths) {
        write!(w, "  {h:>width$}")?;
    }
    writeln!(w)?;

    for (i, cells) in body.iter().enumerate() {
        write!(w, "{i:>index_w$}")?;
        for (c, width) in cells.iter().zip(widths) {
            write!(w, "  {c:>width$}")?;
        }
        writeln!(w)?;
    }
    Ok(())
}

/// The same table as `write_table`, collected into a `String`.
pub fn render(rows: &[ContinentSummary]) -> io::Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_table(&mut buf, rows)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
