//! Export of tasks to CSV or JSON.
//!
//! ```rust,no_run
//! use taskbox::libs::export::{ExportFormat, Exporter};
//!
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! let path = exporter.export(&[])?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::task::{Priority, Task};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Output format accepted by `taskbox export --format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// File extension without the dot, used for default output names.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// One exported record; dates are always written as `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ExportTask {
    pub section: String,
    pub name: String,
    pub priority: Priority,
    #[serde(serialize_with = "iso_date")]
    pub due_date: NaiveDate,
}

fn iso_date<S: serde::Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format("%Y-%m-%d"))
}

impl From<&(String, Task)> for ExportTask {
    fn from((section, task): &(String, Task)) -> Self {
        ExportTask {
            section: section.clone(),
            name: task.name.clone(),
            priority: task.priority,
            due_date: task.due_date,
        }
    }
}

/// Writes `(section, task)` entries to a file in one [`ExportFormat`].
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Without an explicit path the file is named `taskbox_export_<timestamp>.<ext>`
    /// in the current directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!("taskbox_export_{}.{}", Local::now().format("%Y%m%d_%H%M%S"), format.extension()))
        });

        Self { format, output_path }
    }

    /// Writes `entries` to the output file and returns its path.
    pub fn export(&self, entries: &[(String, Task)]) -> Result<PathBuf> {
        let file = File::create(&self.output_path)?;
        self.write(entries, file)?;
        Ok(self.output_path.clone())
    }

    /// Writes `entries` in the configured format to any writer.
    pub fn write<W: Write>(&self, entries: &[(String, Task)], writer: W) -> Result<()> {
        let records: Vec<ExportTask> = entries.iter().map(ExportTask::from).collect();

        match self.format {
            ExportFormat::Csv => {
                let mut wtr = csv::Writer::from_writer(writer);
                for record in &records {
                    wtr.serialize(record)?;
                }
                wtr.flush()?;
            }
            ExportFormat::Json => serde_json::to_writer_pretty(writer, &records)?,
        }
        Ok(())
    }
}
