//! CSV export of the normalized dataset.

use crate::meli::models::ListingRecord;
use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Writes normalized datasets as date-stamped CSV files.
pub struct Exporter {
    output_dir: PathBuf,
    file_name: String,
}

impl Exporter {
    /// Creates an exporter targeting `output_dir`.
    pub fn new(output_dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self { output_dir: output_dir.into(), file_name: file_name.into() }
    }

    /// Writes `records` to `<output_dir>/<YYYY_MM_DD>_<file_name>`.
    ///
    /// The date stamp is UTC. Returns the path written.
    pub fn export(&self, records: &[ListingRecord]) -> Result<PathBuf> {
        self.export_as(records, &dated_file_name(&self.file_name))
    }

    /// Writes `records` under an explicit file name, creating the output
    /// directory if needed. The header row is always written, even for an
    /// empty dataset, with the columns in schema order and `.` as the
    /// decimal separator for prices.
    pub fn export_as(&self, records: &[ListingRecord], file_name: &str) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("Failed to create output directory: {}", self.output_dir.display())
        })?;

        let path = self.output_dir.join(file_name);
        info!("Writing {} rows to {}", records.len(), path.display());

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&path)
            .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;

        writer.write_record(ListingRecord::COLUMNS)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush().context("Failed to flush CSV file")?;

        Ok(path)
    }
}

/// Prefixes a file name with today's UTC date stamp.
pub fn dated_file_name(file_name: &str) -> String {
    format!("{}_{}", Utc::now().format("%Y_%m_%d"), file_name)
}
