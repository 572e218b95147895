//! JSON and CSV export of event lists.

use crate::models::Event;
use serde::{Deserialize, Serialize};

pub const CSV_HEADER: &str = "ID,Date,Name,Start Time,End Time,Description,Category";

/// Supported export file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
        }
    }
}

/// A rendered export ready to be handed to a download mechanism
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub contents: String,
}

/// `<prefix>-<year>-<month1based>.<ext>`, month not zero-padded
pub fn month_export_file_name(prefix: &str, year: i32, month0: u32, format: ExportFormat) -> String {
    format!("{}-{}-{}.{}", prefix, year, month0 + 1, format.extension())
}

/// Pretty-printed JSON array of full event records
pub fn to_json<'a, I>(events: I) -> Result<String, serde_json::Error>
where
    I: IntoIterator<Item = &'a Event>,
{
    let events: Vec<&Event> = events.into_iter().collect();
    serde_json::to_string_pretty(&events)
}

/// Header row plus one line per event, joined by `\n` without a trailing
/// newline
///
/// The description column is always quoted. Other columns are quoted only
/// when they contain a delimiter, quote or line break; embedded quotes are
/// doubled everywhere.
pub fn to_csv<'a, I>(events: I) -> String
where
    I: IntoIterator<Item = &'a Event>,
{
    let rows: Vec<String> = events
        .into_iter()
        .map(|event| {
            [
                escape_field(&event.id),
                escape_field(&event.date),
                escape_field(&event.name),
                escape_field(&event.start_time),
                escape_field(&event.end_time),
                quote_field(&event.description),
                escape_field(event.category.as_str()),
            ]
            .join(",")
        })
        .collect();

    format!("{}\n{}", CSV_HEADER, rows.join("\n"))
}

fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        quote_field(value)
    } else {
        value.to_string()
    }
}
