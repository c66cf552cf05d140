use super::notification::NotificationKind;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Singleton configuration record, stored as one JSON blob in the kv table.
/// Created with defaults on first access if absent; overwritten wholesale on
/// every save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Nominal cycle length in days.
    pub cycle_length: i64,
    /// Nominal period length in days.
    pub period_length: i64,
    /// Cached convenience date; the entry collection stays authoritative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_period_start: Option<NaiveDate>,
    pub notifications_enabled: bool,
    pub partner_notifications: PartnerNotificationSettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            cycle_length: 28,
            period_length: 5,
            last_period_start: None,
            notifications_enabled: true,
            partner_notifications: PartnerNotificationSettings::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerNotificationSettings {
    pub enabled: bool,
    /// Days-before-period-start offsets, kept sorted descending.
    pub reminder_days: Vec<i64>,
    pub notification_types: NotificationToggles,
    pub custom_messages: CustomMessages,
    pub partner_name: String,
    pub pronouns: PronounChoice,
    /// `/`-delimited subject/object/possessive/reflexive tuple, only read
    /// when `pronouns` is `custom`.
    #[serde(default)]
    pub custom_pronouns: String,
}

impl Default for PartnerNotificationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            reminder_days: vec![3, 1],
            notification_types: NotificationToggles::default(),
            custom_messages: CustomMessages::default(),
            partner_name: String::new(),
            pronouns: PronounChoice::TheyThem,
            custom_pronouns: String::new(),
        }
    }
}

impl PartnerNotificationSettings {
    /// Toggle one reminder-day offset; the list stays sorted descending.
    pub fn toggle_reminder_day(&mut self, day: i64) {
        if let Some(pos) = self.reminder_days.iter().position(|d| *d == day) {
            self.reminder_days.remove(pos);
        } else {
            self.reminder_days.push(day);
            self.reminder_days.sort_by(|a, b| b.cmp(a));
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationToggles {
    pub period_start: bool,
    pub period_end: bool,
    pub ovulation: bool,
    pub pms: bool,
}

impl Default for NotificationToggles {
    fn default() -> Self {
        Self {
            period_start: true,
            period_end: false,
            ovulation: true,
            pms: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomMessages {
    #[serde(default)]
    pub period_start: String,
    #[serde(default)]
    pub period_end: String,
    #[serde(default)]
    pub ovulation: String,
    #[serde(default)]
    pub pms: String,
}

impl CustomMessages {
    /// Override text for a type; empty string means "use default message".
    pub fn for_kind(&self, kind: NotificationKind) -> &str {
        match kind {
            NotificationKind::PeriodStart => &self.period_start,
            NotificationKind::PeriodEnd => &self.period_end,
            NotificationKind::Ovulation => &self.ovulation,
            NotificationKind::Pms => &self.pms,
            NotificationKind::Custom => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PronounChoice {
    #[serde(rename = "they/them")]
    TheyThem,
    #[serde(rename = "she/her")]
    SheHer,
    #[serde(rename = "he/him")]
    HeHim,
    #[serde(rename = "custom")]
    Custom,
}

impl PronounChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            PronounChoice::TheyThem => "they/them",
            PronounChoice::SheHer => "she/her",
            PronounChoice::HeHim => "he/him",
            PronounChoice::Custom => "custom",
        }
    }

    /// Helper: convert input from CLI
    pub fn from_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "they/them" | "they" => Some(PronounChoice::TheyThem),
            "she/her" | "she" => Some(PronounChoice::SheHer),
            "he/him" | "he" => Some(PronounChoice::HeHim),
            "custom" => Some(PronounChoice::Custom),
            _ => None,
        }
    }
}

/// Partial update applied by the service-layer settings merge: present
/// fields replace, absent fields keep their prior values.
#[derive(Debug, Clone, Default)]
pub struct SettingsPatch {
    pub cycle_length: Option<i64>,
    pub period_length: Option<i64>,
    pub last_period_start: Option<NaiveDate>,
    pub notifications_enabled: Option<bool>,
    pub partner_notifications: Option<PartnerNotificationSettings>,
}

impl SettingsPatch {
    /// Shallow merge over `current`, field by field at the top level.
    pub fn apply(self, mut current: AppSettings) -> AppSettings {
        if let Some(v) = self.cycle_length {
            current.cycle_length = v;
        }
        if let Some(v) = self.period_length {
            current.period_length = v;
        }
        if let Some(v) = self.last_period_start {
            current.last_period_start = Some(v);
        }
        if let Some(v) = self.notifications_enabled {
            current.notifications_enabled = v;
        }
        if let Some(v) = self.partner_notifications {
            current.partner_notifications = v;
        }
        current
    }
}
