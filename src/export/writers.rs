use crate::errors::{AppError, AppResult};
use crate::export::{JournalExport, notify_export_success};
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

fn export_err(what: &str, e: impl std::fmt::Display) -> AppError {
    AppError::Export(format!("{what}: {e}"))
}

pub(crate) fn export_json(rows: &[JournalExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting scan journal to JSON: {}", path.display()));

    let json = serde_json::to_string_pretty(rows).map_err(|e| export_err("JSON serialization", e))?;
    fs::write(path, json)?;

    notify_export_success("JSON", path);
    Ok(())
}

/// CSV with the header row taken from `JournalExport`'s field names.
pub(crate) fn export_csv(rows: &[JournalExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting scan journal to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path).map_err(|e| export_err("CSV open", e))?;
    if rows.is_empty() {
        wtr.write_record([
            "id",
            "date",
            "qr_token",
            "participant",
            "day",
            "meal_type",
            "outcome",
            "message",
        ])
        .map_err(|e| export_err("CSV write", e))?;
    }
    for row in rows {
        wtr.serialize(row).map_err(|e| export_err("CSV write", e))?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
