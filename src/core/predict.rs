//! Pure cycle-derivation functions.
//!
//! Everything here is stateless: callers pass the current entry list, the
//! configured cycle length, and (where relevant) "today". Predictions are
//! always anchored to the chronologically latest entry's start date, never
//! to today, so out-of-order logging still yields a stable forecast.

use crate::models::cycle::CycleData;
use crate::models::entry::PeriodEntry;
use crate::utils::date::days_between;
use chrono::{Duration, NaiveDate};

pub const DEFAULT_CYCLE_LENGTH: i64 = 28;
/// Ovulation typically occurs 14 days before the next period.
pub const OVULATION_OFFSET_DAYS: i64 = 14;
/// PMS typically starts 5 days before the next period.
pub const PMS_OFFSET_DAYS: i64 = 5;

fn latest_entry(entries: &[PeriodEntry]) -> Option<&PeriodEntry> {
    entries.iter().max_by_key(|e| e.start_date)
}

fn sorted_by_start(entries: &[PeriodEntry]) -> Vec<&PeriodEntry> {
    let mut sorted: Vec<&PeriodEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.start_date);
    sorted
}

/// Predicted start of the next period, or None without entries.
pub fn next_period_date(entries: &[PeriodEntry], cycle_length: i64) -> Option<NaiveDate> {
    latest_entry(entries).map(|e| e.start_date + Duration::days(cycle_length))
}

pub fn ovulation_date(entries: &[PeriodEntry], cycle_length: i64) -> Option<NaiveDate> {
    next_period_date(entries, cycle_length).map(|d| d - Duration::days(OVULATION_OFFSET_DAYS))
}

pub fn pms_start_date(entries: &[PeriodEntry], cycle_length: i64) -> Option<NaiveDate> {
    next_period_date(entries, cycle_length).map(|d| d - Duration::days(PMS_OFFSET_DAYS))
}

/// Mean gap between consecutive start dates, rounded to the nearest day.
/// Fewer than 2 entries fall back to the 28-day default.
pub fn average_cycle_length(entries: &[PeriodEntry]) -> i64 {
    if entries.len() < 2 {
        return DEFAULT_CYCLE_LENGTH;
    }

    let sorted = sorted_by_start(entries);
    let mut total_days = 0i64;
    for pair in sorted.windows(2) {
        total_days += (pair[1].start_date - pair[0].start_date).num_days();
    }

    let cycle_count = (sorted.len() - 1) as f64;
    (total_days as f64 / cycle_count).round() as i64
}

/// The in-progress cycle: latest entry start through its predicted end.
pub fn current_cycle(entries: &[PeriodEntry], cycle_length: i64) -> Option<CycleData> {
    let last = latest_entry(entries)?;
    Some(CycleData {
        start_date: last.start_date,
        end_date: last.start_date + Duration::days(cycle_length),
        length: cycle_length,
        average_length: average_cycle_length(entries),
        is_predicted: true,
    })
}

/// One observed cycle per consecutive entry pair; empty below 2 entries.
pub fn cycle_history(entries: &[PeriodEntry]) -> Vec<CycleData> {
    if entries.len() < 2 {
        return Vec::new();
    }

    let average = average_cycle_length(entries);
    let sorted = sorted_by_start(entries);
    let mut cycles = Vec::new();

    for pair in sorted.windows(2) {
        let length = (pair[1].start_date - pair[0].start_date).num_days();
        cycles.push(CycleData {
            start_date: pair[0].start_date,
            end_date: pair[1].start_date,
            length,
            average_length: average,
            is_predicted: false,
        });
    }

    cycles
}

/// True iff `today` falls strictly between the latest entry's start and end
/// dates. Both boundary days count as not active.
pub fn is_period_active(entries: &[PeriodEntry], today: NaiveDate) -> bool {
    match latest_entry(entries) {
        Some(last) => today > last.start_date && today < last.end_date,
        None => false,
    }
}

/// Days from `today` to the predicted next period, clamped at 0.
pub fn days_until_next_period(
    entries: &[PeriodEntry],
    cycle_length: i64,
    today: NaiveDate,
) -> Option<i64> {
    next_period_date(entries, cycle_length).map(|next| days_between(today, next).max(0))
}

/// Days from the latest entry's start date to `today`. Negative when the
/// latest stored start date is in the future.
pub fn days_since_last_period(entries: &[PeriodEntry], today: NaiveDate) -> Option<i64> {
    latest_entry(entries).map(|last| days_between(last.start_date, today))
}
