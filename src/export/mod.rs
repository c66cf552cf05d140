mod csv;
pub(crate) mod fs_utils;
mod json;

use crate::core::predict;
use crate::db::records::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for export commands.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    /// Dump either the raw period entries or the derived cycle history.
    pub fn export(
        store: &RecordStore,
        format: &ExportFormat,
        file: &str,
        history: bool,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);
        fs_utils::ensure_writable(&path, force)?;

        let path_str = path
            .to_str()
            .ok_or_else(|| AppError::Export(format!("Invalid destination path: {}", file)))?;

        if history {
            let entries = store.get_period_entries();
            let cycles = predict::cycle_history(&entries);
            match format {
                ExportFormat::Csv => csv::write_history_csv(path_str, &cycles)?,
                ExportFormat::Json => json::write_json(path_str, &cycles)?,
            }
            notify_export_success("Cycle history", &path);
        } else {
            let entries = store.get_period_entries();
            match format {
                ExportFormat::Csv => csv::write_entries_csv(path_str, &entries)?,
                ExportFormat::Json => json::write_json(path_str, &entries)?,
            }
            notify_export_success("Period entries", &path);
        }

        Ok(())
    }
}
