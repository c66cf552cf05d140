//! Partner-reminder scheduling.
//!
//! The protocol is full replace: every pass wipes the stored notification
//! set and the delivery registrations, then re-creates both from the
//! current predictions. Only trigger instants strictly in the future are
//! scheduled. Delivery failures are logged per notification and never
//! abort the pass; the record is still stored afterwards (best-effort,
//! not transactional).

use crate::core::predict;
use crate::db::log::ctlog;
use crate::db::records::RecordStore;
use crate::errors::AppResult;
use crate::models::notification::{NotificationData, NotificationKind};
use crate::models::settings::PartnerNotificationSettings;
use crate::notify::NotificationDelivery;
use chrono::{DateTime, Duration, Local, NaiveDate};

/// Reminders fire at 09:00 local time on their trigger date.
pub const REMINDER_HOUR: u32 = 9;

fn fire_instant(date: NaiveDate) -> DateTime<Local> {
    date.and_hms_opt(REMINDER_HOUR, 0, 0)
        .unwrap()
        .and_local_timezone(Local)
        .unwrap()
}

fn default_period_start_message(days_before: i64) -> &'static str {
    match days_before {
        3 => "Period starts in 3 days! Time to stock up on comfort foods and plan some relaxing activities. 🍫",
        2 => "Period starts in 2 days! Consider getting some flowers or planning a cozy night in. 🌹",
        1 => "Period starts tomorrow! Time to be extra supportive and understanding. 💕",
        0 => "Period starts today! Be extra patient and caring. 💖",
        _ => "Period reminder - time to be supportive! 💕",
    }
}

const DEFAULT_OVULATION_MESSAGE: &str =
    "Your partner is in their ovulation period. Time to be extra supportive! 💕";
const DEFAULT_PMS_MESSAGE: &str =
    "PMS period is starting. Time for extra patience and understanding! 🌸";

/// Custom override when non-empty, built-in default otherwise.
fn resolve_message(
    partner: &PartnerNotificationSettings,
    kind: NotificationKind,
    days_before: i64,
) -> String {
    let custom = partner.custom_messages.for_kind(kind);
    if !custom.is_empty() {
        return custom.to_string();
    }
    match kind {
        NotificationKind::PeriodStart => default_period_start_message(days_before).to_string(),
        NotificationKind::Ovulation => DEFAULT_OVULATION_MESSAGE.to_string(),
        NotificationKind::Pms => DEFAULT_PMS_MESSAGE.to_string(),
        _ => String::new(),
    }
}

pub struct ScheduleLogic;

impl ScheduleLogic {
    /// Re-derive the whole partner-notification set.
    ///
    /// No-op when partner notifications are disabled or no prediction
    /// exists. Returns the notifications that were stored.
    pub fn schedule_partner_notifications(
        store: &RecordStore,
        delivery: &dyn NotificationDelivery,
        now: DateTime<Local>,
    ) -> AppResult<Vec<NotificationData>> {
        let Some(settings) = store.get_app_settings() else {
            return Ok(Vec::new());
        };
        let partner = settings.partner_notifications.clone();
        if !partner.enabled {
            return Ok(Vec::new());
        }

        let entries = store.get_period_entries();
        let cycle_length = settings.cycle_length;

        let Some(next_period) = predict::next_period_date(&entries, cycle_length) else {
            return Ok(Vec::new());
        };
        let ovulation = predict::ovulation_date(&entries, cycle_length);
        let pms_start = predict::pms_start_date(&entries, cycle_length);

        Self::clear_all_notifications(store, delivery)?;

        let mut stored = Vec::new();

        // Period-start reminders: one per configured offset.
        if partner.notification_types.period_start {
            for days_before in &partner.reminder_days {
                let trigger = fire_instant(next_period - Duration::days(*days_before));
                if trigger > now {
                    let plural = if *days_before == 1 { "" } else { "s" };
                    let title = format!("Period Reminder - {} day{} to go", days_before, plural);
                    let message = resolve_message(&partner, NotificationKind::PeriodStart, *days_before);
                    stored.extend(Self::schedule_notification(
                        store,
                        delivery,
                        NotificationData::new(NotificationKind::PeriodStart, title, message, trigger),
                    ));
                }
            }
        }

        if partner.notification_types.ovulation
            && let Some(date) = ovulation
        {
            let trigger = fire_instant(date);
            if trigger > now {
                let message = resolve_message(&partner, NotificationKind::Ovulation, 0);
                stored.extend(Self::schedule_notification(
                    store,
                    delivery,
                    NotificationData::new(
                        NotificationKind::Ovulation,
                        "Ovulation Period".to_string(),
                        message,
                        trigger,
                    ),
                ));
            }
        }

        if partner.notification_types.pms
            && let Some(date) = pms_start
        {
            let trigger = fire_instant(date);
            if trigger > now {
                let message = resolve_message(&partner, NotificationKind::Pms, 0);
                stored.extend(Self::schedule_notification(
                    store,
                    delivery,
                    NotificationData::new(
                        NotificationKind::Pms,
                        "PMS Period Starting".to_string(),
                        message,
                        trigger,
                    ),
                ));
            }
        }

        Ok(stored)
    }

    /// Register with the delivery collaborator and store the record.
    /// Both halves are best-effort; a failure in either is logged and
    /// isolated to this one notification.
    fn schedule_notification(
        store: &RecordStore,
        delivery: &dyn NotificationDelivery,
        notification: NotificationData,
    ) -> Option<NotificationData> {
        if let Err(e) = delivery.schedule_at(
            &notification.title,
            &notification.message,
            notification.scheduled_date,
        ) {
            let _ = ctlog(
                store.conn(),
                "delivery_error",
                notification.kind.as_str(),
                &format!("Registration failed: {}", e),
            );
        }

        match store.save_notification(notification.clone()) {
            Ok(()) => Some(notification),
            Err(e) => {
                let _ = ctlog(
                    store.conn(),
                    "storage_error",
                    notification.kind.as_str(),
                    &format!("Notification not stored: {}", e),
                );
                None
            }
        }
    }

    /// Cancel every delivery registration and delete every stored record.
    pub fn clear_all_notifications(
        store: &RecordStore,
        delivery: &dyn NotificationDelivery,
    ) -> AppResult<()> {
        delivery.cancel_all()?;
        for notification in store.get_notifications() {
            store.delete_notification(&notification.id)?;
        }
        Ok(())
    }

    /// Stored notifications strictly after `now`, ascending by fire time.
    pub fn upcoming_notifications(store: &RecordStore, now: DateTime<Local>) -> Vec<NotificationData> {
        let mut upcoming: Vec<NotificationData> = store
            .get_notifications()
            .into_iter()
            .filter(|n| n.scheduled_date > now)
            .collect();
        upcoming.sort_by_key(|n| n.scheduled_date);
        upcoming
    }

    /// Manual bookkeeping only: nothing flips this automatically on
    /// delivery. Returns false when the id is unknown.
    pub fn mark_notification_as_sent(store: &RecordStore, id: &str) -> AppResult<bool> {
        let notifications = store.get_notifications();
        let Some(mut notification) = notifications.into_iter().find(|n| n.id == id) else {
            return Ok(false);
        };
        notification.is_sent = true;
        store.save_notification(notification)?;
        Ok(true)
    }

    /// Ad-hoc notification 5 seconds out, to verify delivery end to end.
    pub fn test_notification(
        store: &RecordStore,
        delivery: &dyn NotificationDelivery,
        now: DateTime<Local>,
    ) -> Option<NotificationData> {
        Self::schedule_notification(
            store,
            delivery,
            NotificationData::new(
                NotificationKind::Custom,
                "Test Notification".to_string(),
                "This is a test notification from cycletrack! 🔔".to_string(),
                now + Duration::seconds(5),
            ),
        )
    }
}
