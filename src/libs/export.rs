//! Snapshot export for the scheduled and on-demand reports.
//!
//! Each export writes the current attendance snapshot to a file keyed by the
//! local calendar date (`attendance_YYYYMMDD.<ext>`), one row per known user
//! with the seven report columns. CSV is the canonical format; JSON and
//! Excel are available for spreadsheet-free analysis and richer presentation.
//!
//! Exports are delivery, not state: a failed write is reported through
//! [`DeliveryError`] and logged for the operator, and never rolls back the
//! store mutation that produced the snapshot.

use crate::libs::data_storage::DataStorage;
use crate::libs::report::{FormatRows, FormattedRow, ReportRow};
use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Column headers of the exported attendance table.
pub const EXPORT_HEADERS: [&str; 7] = [
    "Name",
    "User ID",
    "Total Work Hours",
    "Break Count",
    "Break Time",
    "Smoking Count",
    "Smoking Time",
];

/// Failure to deliver an exported report to its destination.
///
/// Delivery failures are operator-facing: the snapshot they were computed
/// from has already committed and is not rolled back.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to write CSV record: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to encode JSON export: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to build Excel workbook: {0}")]
    Excel(#[from] rust_xlsxwriter::XlsxError),
}

/// Supported export output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Comma-separated values, universally consumable.
    #[default]
    Csv,
    /// Pretty-printed JSON for programmatic processing.
    Json,
    /// Excel workbook with formatted headers.
    Excel,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// Writes attendance snapshots to date-keyed files.
#[derive(Debug, Clone)]
pub struct Exporter {
    format: ExportFormat,
    output_dir: PathBuf,
}

impl Exporter {
    /// Creates an exporter for `format`, writing into `output_dir` or the
    /// platform data directory when no directory is given.
    pub fn new(format: ExportFormat, output_dir: Option<PathBuf>) -> anyhow::Result<Self> {
        let output_dir = match output_dir {
            Some(dir) => dir,
            None => DataStorage::new().base_dir()?,
        };
        Ok(Self { format, output_dir })
    }

    /// The file an export for `date` will be written to.
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        let file_name = format!("attendance_{}.{}", date.format("%Y%m%d"), self.format.extension());
        self.output_dir.join(file_name)
    }

    /// Exports `rows` for `date` and returns the path written.
    pub fn export(&self, rows: &[ReportRow], date: NaiveDate) -> Result<PathBuf, DeliveryError> {
        let path = self.path_for(date);
        let formatted = rows.to_vec().format();

        match self.format {
            ExportFormat::Csv => self.export_csv(&path, &formatted)?,
            ExportFormat::Json => self.export_json(&path, &formatted)?,
            ExportFormat::Excel => self.export_excel(&path, &formatted)?,
        }

        Ok(path)
    }

    fn export_csv(&self, path: &PathBuf, rows: &[FormattedRow]) -> Result<(), DeliveryError> {
        let mut wtr = csv::Writer::from_path(path)?;
        wtr.write_record(EXPORT_HEADERS)?;
        for row in rows {
            wtr.write_record(&[
                row.name.clone(),
                row.user_id.to_string(),
                row.work_time.clone(),
                row.break_count.to_string(),
                row.break_time.clone(),
                row.smoking_count.to_string(),
                row.smoking_time.clone(),
            ])?;
        }
        wtr.flush().map_err(DeliveryError::Io)?;
        Ok(())
    }

    fn export_json(&self, path: &PathBuf, rows: &[FormattedRow]) -> Result<(), DeliveryError> {
        let json = serde_json::to_string_pretty(rows)?;
        File::create(path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, path: &PathBuf, rows: &[FormattedRow]) -> Result<(), DeliveryError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);
        for (col, header) in EXPORT_HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (index, row) in rows.iter().enumerate() {
            let r = (index + 1) as u32;
            worksheet.write_string(r, 0, &row.name)?;
            worksheet.write_number(r, 1, row.user_id as f64)?;
            worksheet.write_string(r, 2, &row.work_time)?;
            worksheet.write_number(r, 3, row.break_count as f64)?;
            worksheet.write_string(r, 4, &row.break_time)?;
            worksheet.write_number(r, 5, row.smoking_count as f64)?;
            worksheet.write_string(r, 6, &row.smoking_time)?;
        }

        worksheet.autofit();
        workbook.save(path)?;
        Ok(())
    }
}
