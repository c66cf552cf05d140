use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tracker::{EntryPatch, TrackerLogic};
use crate::db::records::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::flow::FlowIntensity;
use crate::ui::messages::success;
use crate::utils::date;

/// Edit an existing period entry by id.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        start,
        end,
        flow,
        symptoms,
        notes,
        clear_notes,
    } = cmd
    {
        let mut patch = EntryPatch::default();

        if let Some(s) = start {
            patch.start_date =
                Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?);
        }
        if let Some(s) = end {
            patch.end_date =
                Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?);
        }
        if let Some(code) = flow {
            patch.flow = Some(FlowIntensity::from_code(code).ok_or_else(|| {
                AppError::InvalidFlow(format!(
                    "Invalid flow '{}'. Use L (light), M (medium) or H (heavy).",
                    code
                ))
            })?);
        }
        if !symptoms.is_empty() {
            patch.symptoms = Some(symptoms.clone());
        }
        if *clear_notes {
            patch.notes = Some(None);
        } else if let Some(text) = notes {
            patch.notes = Some(Some(text.clone()));
        }

        let store = RecordStore::open(&cfg.database)?;

        // Validate the resulting span against the stored entry
        let current = store
            .get_period_entries()
            .into_iter()
            .find(|e| e.id == *id)
            .ok_or_else(|| AppError::EntryNotFound(id.clone()))?;

        let new_start = patch.start_date.unwrap_or(current.start_date);
        let new_end = patch.end_date.unwrap_or(current.end_date);
        if new_end < new_start {
            return Err(AppError::Validation(format!(
                "End date {} is before start date {}",
                new_end, new_start
            )));
        }

        let updated = TrackerLogic::update_entry(&store, id, patch)?;

        success(format!(
            "Updated entry {}: {} → {} ({})",
            updated.id,
            updated.start_str(),
            updated.end_str(),
            updated.flow.label()
        ));
    }

    Ok(())
}
