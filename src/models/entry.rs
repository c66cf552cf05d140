use super::flow::FlowIntensity;
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One user-recorded period occurrence.
///
/// Date fields serialize as ISO text ("YYYY-MM-DD" / RFC 3339) inside the
/// stored JSON collection and are rehydrated to real date values on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodEntry {
    pub id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub flow: FlowIntensity,
    pub symptoms: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Local>,
}

impl PeriodEntry {
    /// High-level constructor for entries created from the CLI.
    /// - Assigns a fresh random id
    /// - Stamps `created_at` with now()
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        flow: FlowIntensity,
        symptoms: Vec<String>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            start_date,
            end_date,
            flow,
            symptoms,
            notes,
            created_at: Local::now(),
        }
    }

    pub fn start_str(&self) -> String {
        self.start_date.format("%Y-%m-%d").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end_date.format("%Y-%m-%d").to_string()
    }

    /// Number of bleeding days, inclusive of both bounds.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
