use chrono::NaiveDate;
use serde::Serialize;

/// Derived view of one cycle span. Constructed transiently per query,
/// never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct CycleData {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Configured nominal length for the current/predicted cycle,
    /// observed gap for historical cycles.
    pub length: i64,
    pub average_length: i64,
    /// True when `end_date` is a forecast rather than an observed boundary.
    pub is_predicted: bool,
}
