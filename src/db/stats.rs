use crate::db::records::RecordStore;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(store: &RecordStore, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) COLLECTION COUNTS
    //
    let entries = store.get_period_entries();
    let notifications = store.get_notifications();
    let has_settings = store.get_app_settings().is_some();

    println!(
        "{}• Period entries:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        entries.len(),
        RESET
    );
    println!(
        "{}• Stored notifications:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        notifications.len(),
        RESET
    );
    println!(
        "{}• Settings:{} {}",
        CYAN,
        RESET,
        if has_settings { "present" } else { "defaults (not yet saved)" }
    );

    //
    // 3) DATE RANGE
    //
    let first = entries.first().map(|e| e.start_str());
    let last = entries.last().map(|e| e.start_str());

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Entry range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) LOG ROWS
    //
    let log_rows: i64 = store
        .conn()
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Internal log rows:{} {}", CYAN, RESET, log_rows);

    println!();
    Ok(())
}
