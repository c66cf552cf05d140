use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::predict;
use crate::db::records::RecordStore;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date;
use crate::utils::formatting::days_readable;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Predict = cmd {
        let store = RecordStore::open(&cfg.database)?;
        let settings = store.settings_or_default()?;
        let entries = store.get_period_entries();

        if entries.is_empty() {
            info("No period entries yet — nothing to predict. Record one with 'add'.");
            return Ok(());
        }

        let cycle_length = settings.cycle_length;
        let today = date::today();

        println!("\n=== Cycle predictions ===");

        if let Some(next) = predict::next_period_date(&entries, cycle_length) {
            println!("Next period:  {}", next);
        }
        if let Some(ovulation) = predict::ovulation_date(&entries, cycle_length) {
            println!("Ovulation:    {}", ovulation);
        }
        if let Some(pms) = predict::pms_start_date(&entries, cycle_length) {
            println!("PMS starts:   {}", pms);
        }

        if let Some(days) = predict::days_until_next_period(&entries, cycle_length, today) {
            println!("Days until next period: {}", days_readable(days));
        }
        if let Some(days) = predict::days_since_last_period(&entries, today) {
            println!("Days since last period: {}", days_readable(days));
        }

        let active = predict::is_period_active(&entries, today);
        println!("Period active today: {}", if active { "yes" } else { "no" });
    }

    Ok(())
}
