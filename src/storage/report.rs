//! Report output.
//!
//! Reports are staged in a sibling `.tmp` file and renamed into place, so a
//! failed run never leaves a half-written table behind.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use super::StorageError;
use crate::config::OutputFormat;
use crate::models::{HotColdRow, PointsRow};

/// Rows of a finished report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "report", content = "rows", rename_all = "kebab-case")]
pub enum ReportOutput {
    HotCold(Vec<HotColdRow>),
    Points(Vec<PointsRow>),
}

impl ReportOutput {
    pub fn len(&self) -> usize {
        match self {
            ReportOutput::HotCold(rows) => rows.len(),
            ReportOutput::Points(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn header(&self) -> &'static [&'static str] {
        match self {
            ReportOutput::HotCold(_) => &HotColdRow::HEADER,
            ReportOutput::Points(_) => &PointsRow::HEADER,
        }
    }

    fn records(&self) -> Vec<Vec<String>> {
        match self {
            ReportOutput::HotCold(rows) => rows.iter().map(HotColdRow::to_record).collect(),
            ReportOutput::Points(rows) => rows.iter().map(PointsRow::to_record).collect(),
        }
    }
}

/// Writes a report to a single output file.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    path: PathBuf,
    format: OutputFormat,
}

impl ReportWriter {
    pub fn new(path: PathBuf, format: OutputFormat) -> Self {
        Self { path, format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }

    /// Write the whole report, replacing any existing file.
    pub fn write(&self, report: &ReportOutput) -> Result<usize, StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError::io(parent, e))?;
        }

        let staging = self.staging_path();
        let result = match self.format {
            OutputFormat::Csv => write_csv(&staging, report),
            OutputFormat::Json => write_json(&staging, report),
        };

        if let Err(e) = result {
            let _ = fs::remove_file(&staging);
            return Err(e);
        }

        fs::rename(&staging, &self.path).map_err(|e| StorageError::io(&self.path, e))?;
        info!("Wrote {} rows to {:?}", report.len(), self.path);

        Ok(report.len())
    }
}

fn write_csv(path: &Path, report: &ReportOutput) -> Result<(), StorageError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| StorageError::csv(path, e))?;

    writer
        .write_record(report.header())
        .map_err(|e| StorageError::csv(path, e))?;
    for record in report.records() {
        writer
            .write_record(&record)
            .map_err(|e| StorageError::csv(path, e))?;
    }

    writer.flush().map_err(|e| StorageError::io(path, e))?;
    Ok(())
}

fn write_json(path: &Path, report: &ReportOutput) -> Result<(), StorageError> {
    let file = File::create(path).map_err(|e| StorageError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush().map_err(|e| StorageError::io(path, e))?;
    Ok(())
}
