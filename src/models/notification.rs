use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    PeriodStart,
    PeriodEnd,
    Ovulation,
    Pms,
    Custom,
}

impl NotificationKind {
    /// Convert enum → stored string
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::PeriodStart => "period_start",
            NotificationKind::PeriodEnd => "period_end",
            NotificationKind::Ovulation => "ovulation",
            NotificationKind::Pms => "pms",
            NotificationKind::Custom => "custom",
        }
    }

    /// Convert stored string → enum
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s {
            "period_start" => Some(NotificationKind::PeriodStart),
            "period_end" => Some(NotificationKind::PeriodEnd),
            "ovulation" => Some(NotificationKind::Ovulation),
            "pms" => Some(NotificationKind::Pms),
            "custom" => Some(NotificationKind::Custom),
            _ => None,
        }
    }
}

/// One scheduled reminder.
///
/// State machine: pending (`is_sent = false`) → sent (`is_sent = true`),
/// flipped only by the explicit mark-as-sent operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationData {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub scheduled_date: DateTime<Local>,
    pub is_sent: bool,
    pub created_at: DateTime<Local>,
}

impl NotificationData {
    pub fn new(
        kind: NotificationKind,
        title: String,
        message: String,
        scheduled_date: DateTime<Local>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            title,
            message,
            scheduled_date,
            is_sent: false,
            created_at: Local::now(),
        }
    }
}
