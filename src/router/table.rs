// SPDX-License-Identifier: MIT

//! HTML table parsing for the diagnostics page
//!
//! Converts an HTML fragment containing a `<table>` into an ordered record
//! sequence and serializes it as JSON with a fixed 4-space indent. The JSON
//! string is the parser's return contract; callers re-parse it with
//! [`records_from_json`] before use.

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AppError, Result};

/// One parsed table row.
///
/// Tables with a header row produce `Keyed` records mapping lowercased,
/// trimmed header text to raw (untrimmed) cell text. Headerless tables
/// produce `Bare` records of trimmed cell texts. A single table only ever
/// yields one of the two shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Record {
    Keyed(Map<String, Value>),
    Bare(Vec<String>),
}

impl Record {
    /// Cell text for a header name; `None` for bare records or missing keys
    pub fn get(&self, key: &str) -> Option<&str> {
        match self {
            Record::Keyed(map) => map.get(key).and_then(Value::as_str),
            Record::Bare(_) => None,
        }
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| AppError::Parse(format!("bad selector '{css}': {e}")))
}

fn element_text(element: scraper::ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

/// Parses an HTML fragment containing a `<table>` into records.
///
/// A `<thead>` anywhere in the fragment switches on header mode, in which
/// all `<th>` texts in document order become the header names. A row with
/// fewer cells than headers is a fatal parse error; rows with no cells are
/// skipped.
pub fn parse_table(html: &str) -> Result<Vec<Record>> {
    let document = Html::parse_document(html);

    let headers: Vec<String> = if document.select(&selector("thead")?).next().is_some() {
        document
            .select(&selector("th")?)
            .map(|th| element_text(th).trim().to_lowercase())
            .collect()
    } else {
        Vec::new()
    };

    let row_selector = selector("tr")?;
    let cell_selector = selector("td")?;

    let mut records = Vec::new();
    for row in document.select(&row_selector) {
        let cells: Vec<_> = row.select(&cell_selector).collect();
        if cells.is_empty() {
            continue;
        }

        if headers.is_empty() {
            let items = cells
                .iter()
                .map(|cell| element_text(*cell).trim().to_string())
                .collect();
            records.push(Record::Bare(items));
        } else {
            let mut items = Map::new();
            for (index, header) in headers.iter().enumerate() {
                let cell = cells.get(index).ok_or_else(|| {
                    AppError::Parse(format!(
                        "row has {} cells but {} headers declared",
                        cells.len(),
                        headers.len()
                    ))
                })?;
                items.insert(header.clone(), Value::String(element_text(*cell)));
            }
            records.push(Record::Keyed(items));
        }
    }

    Ok(records)
}

/// Serializes records with the fixed 4-space indent of the wire contract.
pub fn to_json(records: &[Record]) -> Result<String> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    records.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(|e| AppError::Parse(e.to_string()))
}

/// Parses a table fragment and returns the records as an indented JSON
/// string.
pub fn table_to_json(html: &str) -> Result<String> {
    let records = parse_table(html)?;
    to_json(&records)
}

/// Re-parses the JSON string produced by [`table_to_json`].
pub fn records_from_json(json: &str) -> Result<Vec<Record>> {
    Ok(serde_json::from_str(json)?)
}
