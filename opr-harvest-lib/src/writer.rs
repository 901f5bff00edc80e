//! JSON and CSV output.
//!
//! Records are serialized through `serde_json::Value` so the CSV header is
//! exactly the key set of the first record, in field order, and every row is
//! written by header key.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::HarvestError;

/// Files produced for one record category.
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenFiles {
    pub json: PathBuf,
    /// `None` when there were no records (no header-less CSV is written)
    pub csv: Option<PathBuf>,
    pub records: usize,
}

/// Write `{stem}.json` and, if there are records, `{stem}.csv` into `dir`.
pub fn write_category<T: Serialize>(
    dir: &Path,
    stem: &str,
    records: &[T],
) -> Result<WrittenFiles, HarvestError> {
    fs::create_dir_all(dir)?;

    let json = dir.join(format!("{stem}.json"));
    write_json(&json, records)?;

    let csv_path = dir.join(format!("{stem}.csv"));
    let csv = if write_csv(&csv_path, records)? {
        Some(csv_path)
    } else {
        None
    };

    Ok(WrittenFiles {
        json,
        csv,
        records: records.len(),
    })
}

/// Write records as a pretty-printed JSON array (always, even when empty).
pub fn write_json<T: Serialize>(path: &Path, records: &[T]) -> Result<(), HarvestError> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, records)?;
    out.flush()?;
    Ok(())
}

/// Write records as CSV. Returns `false` without touching the file when
/// there are no records.
pub fn write_csv<T: Serialize>(path: &Path, records: &[T]) -> Result<bool, HarvestError> {
    let Some((header, rows)) = tabulate(records)? else {
        return Ok(false);
    };

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_path(path)?;
    writer.write_record(&header)?;
    for row in rows {
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(true)
}

/// Header and cell rows for a homogeneous record set, or `None` if empty.
pub fn tabulate<T: Serialize>(
    records: &[T],
) -> Result<Option<(Vec<String>, Vec<Vec<String>>)>, HarvestError> {
    let mut objects = Vec::with_capacity(records.len());
    for record in records {
        match serde_json::to_value(record)? {
            Value::Object(map) => objects.push(map),
            other => {
                return Err(HarvestError::shape(format!(
                    "expected a JSON object per record, got {other}"
                )));
            }
        }
    }

    let Some(first) = objects.first() else {
        return Ok(None);
    };
    let header: Vec<String> = first.keys().cloned().collect();

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(objects.len());
    for (i, object) in objects.iter().enumerate() {
        check_fields(i, object, &header)?;
        rows.push(header.iter().map(|key| render_cell(object.get(key))).collect());
    }

    Ok(Some((header, rows)))
}

fn check_fields(
    index: usize,
    object: &Map<String, Value>,
    header: &[String],
) -> Result<(), HarvestError> {
    match object.keys().find(|key| !header.contains(key)) {
        Some(extra) => Err(HarvestError::shape(format!(
            "record {index} has field '{extra}' not present in the first record"
        ))),
        None => Ok(()),
    }
}

/// Render one cell: strings verbatim, null as empty, everything else as
/// compact JSON.
fn render_cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
