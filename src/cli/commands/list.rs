use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::records::RecordStore;
use crate::errors::AppResult;
use crate::utils::colors::{GREY, RESET};
use crate::utils::formatting::{describe_flow, pad_right};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { all, details } = cmd {
        let store = RecordStore::open(&cfg.database)?;
        let entries = store.get_period_entries();

        if entries.is_empty() {
            println!("No period entries recorded yet.");
            return Ok(());
        }

        let shown: Vec<_> = if *all || entries.len() <= cfg.list_limit {
            entries.iter().collect()
        } else {
            entries.iter().skip(entries.len() - cfg.list_limit).collect()
        };

        if shown.len() < entries.len() {
            println!(
                "{}(showing the {} most recent of {} entries — use --all){}",
                GREY,
                shown.len(),
                entries.len(),
                RESET
            );
        }

        println!(
            "{} {} {} {}",
            pad_right("ID", 36),
            pad_right("Start", 10),
            pad_right("End", 10),
            "Flow"
        );

        for entry in shown {
            let (label, color) = describe_flow(entry.flow.code());
            println!(
                "{} {} {} {}{}{}",
                pad_right(&entry.id, 36),
                pad_right(&entry.start_str(), 10),
                pad_right(&entry.end_str(), 10),
                color,
                label,
                RESET
            );

            if *details {
                println!("    duration: {} days", entry.duration_days());
                if !entry.symptoms.is_empty() {
                    println!("    symptoms: {}", entry.symptoms.join(", "));
                }
                if let Some(notes) = &entry.notes {
                    println!("    notes:    {}", notes);
                }
            }
        }
    }

    Ok(())
}
