use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::schedule::ScheduleLogic;
use crate::db::records::RecordStore;
use crate::errors::AppResult;
use crate::notify::{LocalDelivery, NotificationDelivery, Permission};
use crate::ui::messages::{info, success, warning};
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Notify {
        schedule,
        upcoming,
        mark_sent,
        test,
    } = cmd
    {
        let store = RecordStore::open(&cfg.database)?;

        //
        // 1) SCHEDULE
        //
        if *schedule {
            let delivery = LocalDelivery::open(&cfg.database)?;
            if delivery.request_permission()? == Permission::Denied {
                warning("Notification permission denied — nothing scheduled.");
                return Ok(());
            }
            let scheduled =
                ScheduleLogic::schedule_partner_notifications(&store, &delivery, Local::now())?;

            if scheduled.is_empty() {
                info("No reminders scheduled (partner notifications off or nothing to predict).");
            } else {
                success(format!("Scheduled {} reminder(s).", scheduled.len()));
            }
        }

        //
        // 2) UPCOMING
        //
        if *upcoming {
            let pending = ScheduleLogic::upcoming_notifications(&store, Local::now());

            if pending.is_empty() {
                println!("No upcoming reminders.");
            } else {
                for n in pending {
                    let state = if n.is_sent { "sent" } else { "pending" };
                    println!(
                        "{} | {} | {} [{}] ({})",
                        n.scheduled_date.format("%Y-%m-%d %H:%M"),
                        n.kind.as_str(),
                        n.title,
                        state,
                        n.id
                    );
                }
            }
        }

        //
        // 3) MARK SENT
        //
        if let Some(id) = mark_sent {
            if ScheduleLogic::mark_notification_as_sent(&store, id)? {
                success(format!("Reminder {} marked as sent.", id));
            } else {
                warning(format!("No reminder with id {}.", id));
            }
        }

        //
        // 4) TEST
        //
        if *test {
            let delivery = LocalDelivery::open(&cfg.database)?;
            match ScheduleLogic::test_notification(&store, &delivery, Local::now()) {
                Some(n) => success(format!(
                    "Test reminder scheduled for {}.",
                    n.scheduled_date.format("%H:%M:%S")
                )),
                None => warning("Test reminder could not be stored."),
            }
        }
    }

    Ok(())
}
