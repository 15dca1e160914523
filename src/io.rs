use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::models::TestResult;
use crate::store::RecordStore;

/// Loads a dataset snapshot written by `save_store`.
pub fn load_store(path: &Path) -> Result<RecordStore> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("malformed dataset {}", path.display()))
}

/// Loads the snapshot if one exists, otherwise starts an empty store.
pub fn load_store_or_default(path: &Path) -> Result<RecordStore> {
    if path.exists() {
        load_store(path)
    } else {
        Ok(RecordStore::new())
    }
}

pub fn save_store(store: &RecordStore, path: &Path) -> Result<()> {
    let raw = serde_json::to_string_pretty(store).context("failed to encode dataset")?;
    fs::write(path, raw).with_context(|| format!("failed to write dataset {}", path.display()))
}

/// Appends test results from a CSV file to the store and reports how many
/// rows were inserted. Rows are taken as-is: no id uniqueness or trainee
/// reference check, matching the permissive store contract.
pub fn import_results_csv(store: &mut RecordStore, path: &Path) -> Result<usize> {
    #[derive(serde::Deserialize)]
    struct CsvRow {
        id: u32,
        trainee_id: u32,
        trainee_name: Option<String>,
        date: NaiveDate,
        grade: f64,
        subject: String,
    }

    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mut inserted = 0usize;

    for row in reader.deserialize::<CsvRow>() {
        let row = row.context("malformed CSV row")?;
        store.add_result(TestResult {
            id: row.id,
            trainee_id: row.trainee_id,
            trainee_name: row.trainee_name.filter(|name| !name.is_empty()),
            date: row.date,
            grade: row.grade,
            subject: row.subject,
        });
        inserted += 1;
    }

    Ok(inserted)
}

pub fn export_results_csv(results: &[TestResult], path: &Path) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    for result in results {
        writer.serialize(result)?;
    }
    writer.flush().context("failed to flush CSV output")?;
    Ok(results.len())
}
