//! Record Store: the three fixed logical collections (period entries, app
//! settings, pending notifications) mapped onto the kv table.
//!
//! Reads are fail-soft: any storage or deserialization error is written to
//! the internal log and degrades to an empty/absent result, so callers can
//! never distinguish "no data" from "broken data" at this layer. Writes
//! always replace the whole collection.

use crate::db::pool::DbPool;
use crate::db::{kv, log};
use crate::errors::AppResult;
use crate::models::entry::PeriodEntry;
use crate::models::notification::NotificationData;
use crate::models::settings::AppSettings;
use rusqlite::Connection;
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const KEY_PERIOD_ENTRIES: &str = "period_entries";
pub const KEY_APP_SETTINGS: &str = "app_settings";
pub const KEY_NOTIFICATIONS: &str = "notifications";

pub struct RecordStore {
    pool: DbPool,
}

impl RecordStore {
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::new(path)?,
        })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    fn read_collection<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match kv::get(self.conn(), key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<T>>(&raw) {
                Ok(items) => items,
                Err(e) => {
                    let _ = log::ctlog(
                        self.conn(),
                        "storage_error",
                        key,
                        &format!("Deserialization failed: {}", e),
                    );
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                let _ = log::ctlog(
                    self.conn(),
                    "storage_error",
                    key,
                    &format!("Read failed: {}", e),
                );
                Vec::new()
            }
        }
    }

    fn write_collection<T: Serialize>(&self, key: &str, items: &[T]) -> AppResult<()> {
        let raw = serde_json::to_string(items)?;
        kv::set(self.conn(), key, &raw)
    }

    // ---------------------------
    // Period entries
    // ---------------------------

    /// All entries, ascending by start date; empty on missing or broken data.
    pub fn get_period_entries(&self) -> Vec<PeriodEntry> {
        self.read_collection(KEY_PERIOD_ENTRIES)
    }

    /// Upsert by id, then rewrite the whole collection sorted by start date.
    pub fn save_period_entry(&self, entry: PeriodEntry) -> AppResult<()> {
        let mut entries = self.get_period_entries();
        match entries.iter_mut().find(|e| e.id == entry.id) {
            Some(slot) => *slot = entry,
            None => entries.push(entry),
        }
        self.save_period_entries(entries)
    }

    /// Wholesale replace, sorted ascending by start date.
    pub fn save_period_entries(&self, mut entries: Vec<PeriodEntry>) -> AppResult<()> {
        entries.sort_by_key(|e| e.start_date);
        self.write_collection(KEY_PERIOD_ENTRIES, &entries)
    }

    /// Remove by id. Silently a no-op when the id is absent; the service
    /// layer is the one that raises NotFound.
    pub fn delete_period_entry(&self, id: &str) -> AppResult<()> {
        let mut entries = self.get_period_entries();
        entries.retain(|e| e.id != id);
        self.write_collection(KEY_PERIOD_ENTRIES, &entries)
    }

    // ---------------------------
    // App settings
    // ---------------------------

    pub fn get_app_settings(&self) -> Option<AppSettings> {
        match kv::get(self.conn(), KEY_APP_SETTINGS) {
            Ok(Some(raw)) => match serde_json::from_str::<AppSettings>(&raw) {
                Ok(settings) => Some(settings),
                Err(e) => {
                    let _ = log::ctlog(
                        self.conn(),
                        "storage_error",
                        KEY_APP_SETTINGS,
                        &format!("Deserialization failed: {}", e),
                    );
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                let _ = log::ctlog(
                    self.conn(),
                    "storage_error",
                    KEY_APP_SETTINGS,
                    &format!("Read failed: {}", e),
                );
                None
            }
        }
    }

    /// Wholesale overwrite of the settings singleton.
    pub fn save_app_settings(&self, settings: &AppSettings) -> AppResult<()> {
        let raw = serde_json::to_string(settings)?;
        kv::set(self.conn(), KEY_APP_SETTINGS, &raw)
    }

    /// Stored settings, or the defaults created and persisted on first
    /// access.
    pub fn settings_or_default(&self) -> AppResult<AppSettings> {
        match self.get_app_settings() {
            Some(settings) => Ok(settings),
            None => {
                let settings = AppSettings::default();
                self.save_app_settings(&settings)?;
                Ok(settings)
            }
        }
    }

    // ---------------------------
    // Notifications
    // ---------------------------

    pub fn get_notifications(&self) -> Vec<NotificationData> {
        self.read_collection(KEY_NOTIFICATIONS)
    }

    /// Upsert by id.
    pub fn save_notification(&self, notification: NotificationData) -> AppResult<()> {
        let mut notifications = self.get_notifications();
        match notifications.iter_mut().find(|n| n.id == notification.id) {
            Some(slot) => *slot = notification,
            None => notifications.push(notification),
        }
        self.write_collection(KEY_NOTIFICATIONS, &notifications)
    }

    pub fn delete_notification(&self, id: &str) -> AppResult<()> {
        let mut notifications = self.get_notifications();
        notifications.retain(|n| n.id != id);
        self.write_collection(KEY_NOTIFICATIONS, &notifications)
    }
}
