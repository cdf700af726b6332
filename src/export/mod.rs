// src/export/mod.rs

mod fs_utils;
mod model;
mod writers;

pub use model::JournalExport;

use crate::errors::AppResult;
use crate::models::journal::JournalEntry;
use crate::ui::messages::{success, warning};
use clap::ValueEnum;
use std::path::Path;

/// Completion line shared by the export writers.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Write the scan journal to `file`.
pub fn export_journal(
    entries: &[JournalEntry],
    file: &str,
    format: ExportFormat,
    force: bool,
) -> AppResult<()> {
    let path = Path::new(file);
    fs_utils::ensure_writable(path, force)?;

    if entries.is_empty() {
        warning("No journal rows to export, writing an empty file.");
    }

    let rows: Vec<JournalExport> = entries.iter().map(JournalExport::from).collect();
    match format {
        ExportFormat::Csv => writers::export_csv(&rows, path),
        ExportFormat::Json => writers::export_json(&rows, path),
    }
}
