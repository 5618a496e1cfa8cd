// src/specs/enums.rs
//! Scraping spec for the enum pages.
//!
//! The docs render each enum as a table: `DLC | Value | Enumerator | Comment`.
//! We keep `(Value, Enumerator)` for every body row whose Value cell is a
//! plain decimal number, after stripping the kind's enumerator prefix
//! (e.g. `COLLECTIBLE_SAD_ONION` → `SAD_ONION`).
//!
//! Rows that don't fit (too few cells, non-numeric Value, empty name after
//! stripping) are skipped, not errors. The parser returns rows in document
//! order; `sort_pairs` puts them in ascending ID order for stable diffs.

use log::debug;
use scraper::{Html, Selector};

use crate::config::options::EnumKind;
use crate::core::net;
use crate::error::PoolError;

/// One `(id, enumerator-name)` entry of a pool.
pub type EnumPair = (u32, String);

/// Fetch one kind's page and extract its sorted pool.
pub fn fetch_pairs(kind: EnumKind) -> Result<Vec<EnumPair>, PoolError> {
    let doc = net::http_get(&kind.url())?;
    let mut pairs = parse_enum_table(&doc, kind.prefix());
    sort_pairs(&mut pairs);
    debug!("{kind}: kept {} rows", pairs.len());
    Ok(pairs)
}

/// Walk the body rows of the first table and extract `(value, name)` pairs
/// in document order. Malformed rows are skipped silently.
pub fn parse_enum_table(doc: &str, prefix: &str) -> Vec<EnumPair> {
    let html = Html::parse_document(doc);

    // Static selectors; parse can't fail.
    let table_sel = Selector::parse("table").unwrap();
    let row_sel = Selector::parse("tbody tr").unwrap();
    let cell_sel = Selector::parse("td").unwrap();

    let mut out: Vec<EnumPair> = Vec::new();

    let Some(table) = html.select(&table_sel).next() else {
        return out;
    };

    let full_prefix = format!("{prefix}_");

    for row in table.select(&row_sel) {
        let cells: Vec<String> = row
            .select(&cell_sel)
            .map(|td| td.text().collect::<String>().trim().to_string())
            .collect();
        if cells.len() < 3 {
            continue;
        }

        // Cell layout: DLC | Value | Enumerator | Comment
        let value_txt = &cells[1];
        if value_txt.is_empty() || !value_txt.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }
        let Ok(value) = value_txt.parse::<u32>() else {
            continue;
        };

        let raw_name = cells[2].as_str();
        let name = raw_name.strip_prefix(full_prefix.as_str()).unwrap_or(raw_name);
        if name.is_empty() {
            continue;
        }

        out.push((value, name.to_string()));
    }

    out
}

/// Stable ascending sort by ID. Idempotent; equal IDs keep document order.
pub fn sort_pairs(pairs: &mut [EnumPair]) {
    pairs.sort_by_key(|&(id, _)| id);
}
