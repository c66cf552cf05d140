pub mod backup;
pub mod log;
pub mod predict;
pub mod schedule;
pub mod tracker;
