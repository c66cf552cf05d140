use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tracker::TrackerLogic;
use crate::db::records::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::flow::FlowIntensity;
use crate::ui::messages::success;
use crate::utils::date;

/// Record a new period entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        start,
        end,
        flow,
        symptoms,
        notes,
    } = cmd
    {
        //
        // 1. Parse dates (mandatory)
        //
        let start_date =
            date::parse_date(start).ok_or_else(|| AppError::InvalidDate(start.to_string()))?;
        let end_date =
            date::parse_date(end).ok_or_else(|| AppError::InvalidDate(end.to_string()))?;

        //
        // 2. Validate the span before touching storage
        //
        if end_date < start_date {
            return Err(AppError::Validation(format!(
                "End date {} is before start date {}",
                end_date, start_date
            )));
        }

        //
        // 3. Parse flow intensity (config default when omitted)
        //
        let flow_code = flow.clone().unwrap_or_else(|| cfg.default_flow.clone());
        let flow_final = FlowIntensity::from_code(&flow_code).ok_or_else(|| {
            AppError::InvalidFlow(format!(
                "Invalid flow '{}'. Use L (light), M (medium) or H (heavy).",
                flow_code
            ))
        })?;

        //
        // 4. Persist
        //
        let store = RecordStore::open(&cfg.database)?;
        let entry = TrackerLogic::add_entry(
            &store,
            start_date,
            end_date,
            flow_final,
            symptoms.clone(),
            notes.clone(),
        )?;

        success(format!(
            "Recorded period {} → {} ({}), id {}",
            entry.start_str(),
            entry.end_str(),
            entry.flow.label(),
            entry.id
        ));
    }

    Ok(())
}
