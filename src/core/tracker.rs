//! Service-layer mutations over the record store.
//!
//! The store itself treats a delete/update of a missing id as a silent
//! no-op; this layer is where "not found" becomes an error for the user.

use crate::db::log::ctlog;
use crate::db::records::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::entry::PeriodEntry;
use crate::models::flow::FlowIntensity;
use crate::models::settings::{AppSettings, SettingsPatch};
use chrono::NaiveDate;

/// Partial update for an existing entry; absent fields keep prior values.
/// `id` and `created_at` are immutable.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub flow: Option<FlowIntensity>,
    pub symptoms: Option<Vec<String>>,
    pub notes: Option<Option<String>>,
}

pub struct TrackerLogic;

impl TrackerLogic {
    pub fn add_entry(
        store: &RecordStore,
        start_date: NaiveDate,
        end_date: NaiveDate,
        flow: FlowIntensity,
        symptoms: Vec<String>,
        notes: Option<String>,
    ) -> AppResult<PeriodEntry> {
        let entry = PeriodEntry::new(start_date, end_date, flow, symptoms, notes);
        store.save_period_entry(entry.clone())?;

        let _ = ctlog(
            store.conn(),
            "add",
            &entry.id,
            &format!("Recorded period {} → {}", entry.start_str(), entry.end_str()),
        );

        Ok(entry)
    }

    /// Fails with EntryNotFound when the id is absent; the collection is
    /// left untouched in that case.
    pub fn update_entry(store: &RecordStore, id: &str, patch: EntryPatch) -> AppResult<PeriodEntry> {
        let mut entries = store.get_period_entries();

        let Some(slot) = entries.iter_mut().find(|e| e.id == id) else {
            return Err(AppError::EntryNotFound(id.to_string()));
        };

        if let Some(v) = patch.start_date {
            slot.start_date = v;
        }
        if let Some(v) = patch.end_date {
            slot.end_date = v;
        }
        if let Some(v) = patch.flow {
            slot.flow = v;
        }
        if let Some(v) = patch.symptoms {
            slot.symptoms = v;
        }
        if let Some(v) = patch.notes {
            slot.notes = v;
        }

        let updated = slot.clone();
        store.save_period_entries(entries)?;

        let _ = ctlog(
            store.conn(),
            "edit",
            id,
            &format!(
                "Updated period {} → {}",
                updated.start_str(),
                updated.end_str()
            ),
        );

        Ok(updated)
    }

    /// Fails with EntryNotFound when the id is absent — unlike the store
    /// delete, which silently ignores unknown ids.
    pub fn delete_entry(store: &RecordStore, id: &str) -> AppResult<()> {
        let entries = store.get_period_entries();
        let before = entries.len();

        let filtered: Vec<PeriodEntry> = entries.into_iter().filter(|e| e.id != id).collect();
        if filtered.len() == before {
            return Err(AppError::EntryNotFound(id.to_string()));
        }

        store.save_period_entries(filtered)?;

        let _ = ctlog(store.conn(), "del", id, "Deleted period entry");

        Ok(())
    }

    /// Shallow-merge the patch over the current settings (defaults if none
    /// were ever saved) and overwrite the singleton.
    pub fn update_settings(store: &RecordStore, patch: SettingsPatch) -> AppResult<AppSettings> {
        let current = store.get_app_settings().unwrap_or_default();
        let merged = patch.apply(current);
        store.save_app_settings(&merged)?;

        let _ = ctlog(store.conn(), "settings", "", "Updated app settings");

        Ok(merged)
    }
}
