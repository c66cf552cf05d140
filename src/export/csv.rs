use crate::models::cycle::CycleData;
use crate::models::entry::PeriodEntry;
use csv::Writer;

/// Write the period entries as CSV.
pub fn write_entries_csv(path: &str, entries: &[PeriodEntry]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "id",
        "start_date",
        "end_date",
        "flow",
        "symptoms",
        "notes",
        "created_at",
    ])?;

    for entry in entries {
        wtr.write_record(&[
            entry.id.clone(),
            entry.start_str(),
            entry.end_str(),
            entry.flow.label().to_string(),
            entry.symptoms.join(";"),
            entry.notes.clone().unwrap_or_default(),
            entry.created_at.to_rfc3339(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the derived cycle history as CSV.
pub fn write_history_csv(path: &str, cycles: &[CycleData]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "start_date",
        "end_date",
        "length",
        "average_length",
        "is_predicted",
    ])?;

    for cycle in cycles {
        wtr.write_record(&[
            cycle.start_date.format("%Y-%m-%d").to_string(),
            cycle.end_date.format("%Y-%m-%d").to_string(),
            cycle.length.to_string(),
            cycle.average_length.to_string(),
            cycle.is_predicted.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
