use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::schedule::ScheduleLogic;
use crate::core::tracker::TrackerLogic;
use crate::db::records::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::notification::NotificationKind;
use crate::models::settings::{PronounChoice, SettingsPatch};
use crate::notify::LocalDelivery;
use crate::ui::messages::success;
use crate::utils::pronouns::get_pronouns;
use chrono::Local;

fn parse_kind(s: &str) -> AppResult<NotificationKind> {
    NotificationKind::from_str_opt(&s.to_lowercase().replace('-', "_")).ok_or_else(|| {
        AppError::InvalidNotificationKind(format!(
            "Unknown reminder type '{}'. Use period_start, period_end, ovulation or pms.",
            s
        ))
    })
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Partner {
        name,
        pronouns,
        custom_pronouns,
        toggle_day,
        enable_kind,
        disable_kind,
        message_kind,
        message,
    } = cmd
    {
        let store = RecordStore::open(&cfg.database)?;
        let current = store.settings_or_default()?;

        let editing = name.is_some()
            || pronouns.is_some()
            || custom_pronouns.is_some()
            || toggle_day.is_some()
            || enable_kind.is_some()
            || disable_kind.is_some()
            || message_kind.is_some();

        // ---- SHOW ----
        if !editing {
            let partner = &current.partner_notifications;
            let set = get_pronouns(partner);

            println!("\n=== Partner reminders ===");
            let display_name = if partner.partner_name.is_empty() {
                "(unnamed)"
            } else {
                partner.partner_name.as_str()
            };
            println!(
                "Partner:        {} ({}/{}/{}/{})",
                display_name, set.subject, set.object, set.possessive, set.reflexive
            );
            println!("Reminder days:  {:?} (days before period start)", partner.reminder_days);
            let toggles = &partner.notification_types;
            println!(
                "Types:          period_start={} period_end={} ovulation={} pms={}",
                toggles.period_start, toggles.period_end, toggles.ovulation, toggles.pms
            );
            return Ok(());
        }

        // ---- EDIT ----
        let mut partner = current.partner_notifications.clone();

        if let Some(n) = name {
            partner.partner_name = n.clone();
        }
        if let Some(p) = pronouns {
            partner.pronouns = PronounChoice::from_code(p).ok_or_else(|| {
                AppError::InvalidPronouns(format!(
                    "Unknown pronoun choice '{}'. Use they/them, she/her, he/him or custom.",
                    p
                ))
            })?;
        }
        if let Some(tuple) = custom_pronouns {
            partner.custom_pronouns = tuple.clone();
        }
        if let Some(day) = toggle_day {
            if *day < 0 {
                return Err(AppError::Validation(format!(
                    "Reminder offset must be zero or positive, got {}",
                    day
                )));
            }
            partner.toggle_reminder_day(*day);
        }
        if let Some(kind) = enable_kind {
            set_toggle(&mut partner.notification_types, parse_kind(kind)?, true)?;
        }
        if let Some(kind) = disable_kind {
            set_toggle(&mut partner.notification_types, parse_kind(kind)?, false)?;
        }
        if let (Some(kind), Some(text)) = (message_kind, message) {
            set_message(&mut partner.custom_messages, parse_kind(kind)?, text)?;
        }

        // The settings-editing flow always saves with notifications on.
        partner.enabled = true;

        let patch = SettingsPatch {
            notifications_enabled: Some(true),
            partner_notifications: Some(partner),
            ..SettingsPatch::default()
        };
        TrackerLogic::update_settings(&store, patch)?;

        // Every settings save re-derives the reminder set.
        let delivery = LocalDelivery::open(&cfg.database)?;
        ScheduleLogic::schedule_partner_notifications(&store, &delivery, Local::now())?;

        success("Partner settings saved.");
    }

    Ok(())
}

fn set_toggle(
    toggles: &mut crate::models::settings::NotificationToggles,
    kind: NotificationKind,
    value: bool,
) -> AppResult<()> {
    match kind {
        NotificationKind::PeriodStart => toggles.period_start = value,
        NotificationKind::PeriodEnd => toggles.period_end = value,
        NotificationKind::Ovulation => toggles.ovulation = value,
        NotificationKind::Pms => toggles.pms = value,
        NotificationKind::Custom => {
            return Err(AppError::InvalidNotificationKind(
                "The custom type cannot be toggled.".to_string(),
            ));
        }
    }
    Ok(())
}

fn set_message(
    messages: &mut crate::models::settings::CustomMessages,
    kind: NotificationKind,
    text: &str,
) -> AppResult<()> {
    match kind {
        NotificationKind::PeriodStart => messages.period_start = text.to_string(),
        NotificationKind::PeriodEnd => messages.period_end = text.to_string(),
        NotificationKind::Ovulation => messages.ovulation = text.to_string(),
        NotificationKind::Pms => messages.pms = text.to_string(),
        NotificationKind::Custom => {
            return Err(AppError::InvalidNotificationKind(
                "The custom type has no stored message.".to_string(),
            ));
        }
    }
    Ok(())
}
