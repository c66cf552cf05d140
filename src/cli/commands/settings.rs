use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::schedule::ScheduleLogic;
use crate::core::tracker::TrackerLogic;
use crate::db::records::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::settings::SettingsPatch;
use crate::notify::LocalDelivery;
use crate::ui::messages::success;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        cycle_length,
        period_length,
    } = cmd
    {
        let store = RecordStore::open(&cfg.database)?;
        let current = store.settings_or_default()?;

        // ---- SHOW ----
        if cycle_length.is_none() && period_length.is_none() {
            println!("\n=== Cycle settings ===");
            println!("Cycle length:  {} days", current.cycle_length);
            println!("Period length: {} days", current.period_length);
            if let Some(last) = current.last_period_start {
                println!("Last period start (cached): {}", last);
            }
            return Ok(());
        }

        // ---- EDIT ----
        if let Some(days) = cycle_length
            && *days < 1
        {
            return Err(AppError::Validation(format!(
                "Cycle length must be at least 1 day, got {}",
                days
            )));
        }
        if let Some(days) = period_length
            && *days < 1
        {
            return Err(AppError::Validation(format!(
                "Period length must be at least 1 day, got {}",
                days
            )));
        }

        // The settings-editing flow always saves with notifications on.
        let mut partner = current.partner_notifications.clone();
        partner.enabled = true;

        let patch = SettingsPatch {
            cycle_length: *cycle_length,
            period_length: *period_length,
            notifications_enabled: Some(true),
            partner_notifications: Some(partner),
            ..SettingsPatch::default()
        };

        let merged = TrackerLogic::update_settings(&store, patch)?;

        // Every settings save re-derives the reminder set.
        let delivery = LocalDelivery::open(&cfg.database)?;
        ScheduleLogic::schedule_partner_notifications(&store, &delivery, Local::now())?;

        success(format!(
            "Settings saved: cycle {} days, period {} days.",
            merged.cycle_length, merged.period_length
        ));
    }

    Ok(())
}
