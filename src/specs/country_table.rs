// src/specs/country_table.rs
//! Scraping *spec* for the country population table.
//!
//! Purpose:
//! - Locate the N-th `<table>` of a document (the source page puts the
//!   country list first).
//! - Turn it into a text grid: header row(s) from every row inside `<thead>`
//!   plus all-`<th>` rows seen before the first data row, data rows from
//!   everything else.
//! - Expand `colspan` / `rowspan` so every grid row has one cell per column,
//!   the way HTML table readers do.
//!
//! Cell text is cleaned (inline `<style>`/`<script>` dropped, tags stripped,
//! entities decoded, footnote brackets removed, whitespace collapsed).
//!
//! Non-Responsibilities:
//! - **No networking.** The caller hands in the document.
//! - **No column validation or typing.** The loader decides whether the
//!   shape is acceptable and coerces numbers.

use std::ops::Range;

use crate::core::html::{
    attr_value, element_span, find_close_tag, find_open_tag, nth_element_inner,
    remove_elements_ci, strip_tags, to_lower,
};
use crate::core::sanitize::{normalize_entities, strip_brackets};
use crate::data::RawTable;
use crate::error::{ForecastError, Result};

// Guards against absurd span attributes.
const MAX_SPAN: usize = 1_000;

/// Extract table number `table_index` (0-based) from an HTML document.
pub fn extract(doc: &str, table_index: usize) -> Result<RawTable> {
    let inner = nth_element_inner(doc, "table", table_index).ok_or_else(|| {
        ForecastError::unavailable(format!("no <table> at index {table_index} in document"))
    })?;

    let cleaned = remove_elements_ci(&remove_elements_ci(inner, "style"), "script");
    Ok(parse_grid(&cleaned))
}

struct Cell {
    text: String,
    is_header: bool,
    colspan: usize,
    rowspan: usize,
}

/// A cell carried down into following rows by `rowspan`.
#[derive(Clone)]
struct Carry {
    text: String,
    rows_left: usize,
}

fn parse_grid(table: &str) -> RawTable {
    let lc = to_lower(table);
    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut carried: Vec<Option<Carry>> = Vec::new();
    let thead = thead_range(&lc);

    let mut pos = 0usize;
    while let Some(tr_s) = find_open_tag(&lc, "tr", pos) {
        // Rows end at `</tr>` or at the next `<tr>`, whichever comes first.
        let Some(open_end) = lc[tr_s..].find('>').map(|g| tr_s + g + 1) else { break };
        let tr_e = [find_close_tag(&lc, "tr", open_end), find_open_tag(&lc, "tr", open_end)]
            .into_iter()
            .flatten()
            .min()
            .unwrap_or(lc.len());
        pos = tr_e.max(open_end);

        let cells = read_cells(&table[open_end..tr_e], &lc[open_end..tr_e]);
        if cells.is_empty() {
            continue;
        }
        let in_thead = thead.as_ref().is_some_and(|r| r.contains(&tr_s));
        let all_header = cells.iter().all(|c| c.is_header);
        let grid_row = expand_spans(cells, &mut carried);

        if in_thead || (all_header && rows.is_empty()) {
            headers = Some(grid_row);
        } else {
            rows.push(grid_row);
        }
    }

    RawTable::with(headers, rows)
}

/// Byte range of the first `<thead>` section. An unclosed `<thead>` ends at
/// the next `<tbody>`.
fn thead_range(lc: &str) -> Option<Range<usize>> {
    let start = find_open_tag(lc, "thead", 0)?;
    let (inner_s, inner_e, _) = element_span(lc, "thead", start)?;
    let end = find_open_tag(lc, "tbody", inner_s).map_or(inner_e, |b| b.min(inner_e));
    Some(inner_s..end)
}

fn next_cell_start(lc: &str, from: usize) -> Option<usize> {
    [find_open_tag(lc, "td", from), find_open_tag(lc, "th", from)]
        .into_iter()
        .flatten()
        .min()
}

fn read_cells(row: &str, row_lc: &str) -> Vec<Cell> {
    let mut cells = Vec::new();
    let mut pos = 0usize;

    while let Some(start) = next_cell_start(row_lc, pos) {
        let is_header = row_lc[start + 1..].starts_with("th");
        let tag = if is_header { "th" } else { "td" };

        let (inner_s, inner_e, end) = match element_span(row_lc, tag, start) {
            Some(span) => span,
            None => break,
        };
        // Unclosed cells stop at the next cell.
        let (inner_e, end) = match next_cell_start(row_lc, inner_s) {
            Some(next) if next < inner_e => (next, next),
            _ => (inner_e, end),
        };

        let open_tag = &row[start..inner_s];
        let span = |name: &str| {
            attr_value(open_tag, name)
                .and_then(|v| v.trim().parse::<usize>().ok())
                .map_or(1, |n| n.clamp(1, MAX_SPAN))
        };

        cells.push(Cell {
            text: clean_cell(&row[inner_s..inner_e]),
            is_header,
            colspan: span("colspan"),
            rowspan: span("rowspan"),
        });
        pos = end.max(inner_s);
    }
    cells
}

fn clean_cell(inner: &str) -> String {
    strip_brackets(&normalize_entities(&strip_tags(inner)))
}

/// Lay `cells` out on the grid, filling positions still covered by earlier
/// rowspans first.
fn expand_spans(cells: Vec<Cell>, carried: &mut Vec<Option<Carry>>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();

    for cell in cells {
        take_carried(&mut out, carried);
        for _ in 0..cell.colspan {
            let col = out.len();
            if carried.len() <= col {
                carried.resize(col + 1, None);
            }
            if cell.rowspan > 1 {
                carried[col] = Some(Carry { text: cell.text.clone(), rows_left: cell.rowspan - 1 });
            }
            out.push(cell.text.clone());
        }
    }
    take_carried(&mut out, carried);
    out
}

fn take_carried(out: &mut Vec<String>, carried: &mut [Option<Carry>]) {
    while let Some(Some(c)) = carried.get_mut(out.len()) {
        out.push(c.text.clone());
        c.rows_left -= 1;
        if c.rows_left == 0 {
            carried[out.len() - 1] = None;
        }
    }
}
