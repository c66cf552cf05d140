use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::predict;
use crate::db::records::RecordStore;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::pad_right;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History = cmd {
        let store = RecordStore::open(&cfg.database)?;
        let settings = store.settings_or_default()?;
        let entries = store.get_period_entries();

        let cycles = predict::cycle_history(&entries);
        if cycles.is_empty() {
            info("Need at least two recorded periods to show cycle history.");
            return Ok(());
        }

        println!(
            "{} {} {}",
            pad_right("Start", 10),
            pad_right("End", 10),
            "Length"
        );
        for cycle in &cycles {
            println!(
                "{} {} {} days",
                pad_right(&cycle.start_date.format("%Y-%m-%d").to_string(), 10),
                pad_right(&cycle.end_date.format("%Y-%m-%d").to_string(), 10),
                cycle.length
            );
        }

        println!(
            "\nAverage cycle length: {} days (configured: {} days)",
            predict::average_cycle_length(&entries),
            settings.cycle_length
        );

        if let Some(current) = predict::current_cycle(&entries, settings.cycle_length) {
            println!(
                "Current cycle: {} → {} (predicted)",
                current.start_date, current.end_date
            );
        }
    }

    Ok(())
}
