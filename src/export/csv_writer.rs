//! CSV rendering of entries
//!
//! Pure formatting: flags become the configured yes/no labels, dates become
//! ISO-8601 or an empty cell.

use std::io::Write;

use chrono::NaiveDate;

use crate::errors::{RegistryError, Result};
use crate::schemas::{Entry, ExportConfig};

/// Column headers, in output order
pub const HEADERS: [&str; 11] = [
    "Здание",
    "Раздел",
    "МТР",
    "Кол-во",
    "Работы",
    "Согласовано АН",
    "Согласовано ГИП",
    "Оплачено(дата)",
    "Сроки поставки/завершения",
    "Выполнено",
    "Ответственный",
];

fn flag(value: bool, config: &ExportConfig) -> &str {
    if value {
        &config.yes_label
    } else {
        &config.no_label
    }
}

fn date(value: Option<NaiveDate>) -> String {
    value.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

fn record(entry: &Entry, config: &ExportConfig) -> [String; 11] {
    [
        entry.building.clone(),
        entry.section.clone(),
        entry.mtr.clone(),
        entry.quantity.to_string(),
        entry.works.clone(),
        flag(entry.an.approved, config).to_string(),
        flag(entry.gip.approved, config).to_string(),
        date(entry.paid_date),
        date(entry.delivery_deadline),
        flag(entry.done, config).to_string(),
        entry.responsible.clone(),
    ]
}

/// Write a header row followed by one row per entry, in the order given.
pub fn write_csv<W: Write>(writer: W, entries: &[Entry], config: &ExportConfig) -> Result<()> {
    if !config.delimiter.is_ascii() {
        return Err(RegistryError::ConfigError(format!(
            "export.delimiter must be a single ASCII character, got {:?}",
            config.delimiter
        )));
    }
    let delimiter = config.delimiter as u8;

    let mut csv = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    csv.write_record(HEADERS)?;
    for entry in entries {
        csv.write_record(record(entry, config))?;
    }
    csv.flush()?;
    Ok(())
}
