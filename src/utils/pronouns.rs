//! Pronoun resolution for partner-facing message templating.

use crate::models::settings::{PartnerNotificationSettings, PronounChoice};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PronounSet {
    pub subject: String,    // they, she, he, xe, ...
    pub object: String,     // them, her, him, xem, ...
    pub possessive: String, // their, her, his, xir, ...
    pub reflexive: String,  // themselves, herself, himself, xirself, ...
}

fn fixed(subject: &str, object: &str, possessive: &str, reflexive: &str) -> PronounSet {
    PronounSet {
        subject: subject.to_string(),
        object: object.to_string(),
        possessive: possessive.to_string(),
        reflexive: reflexive.to_string(),
    }
}

/// Resolve the configured pronoun choice into a concrete tuple.
///
/// A `custom` choice parses the `/`-delimited 4-tuple with per-position
/// they/them fallbacks; fixed choices ignore `custom_pronouns` entirely.
pub fn get_pronouns(settings: &PartnerNotificationSettings) -> PronounSet {
    if settings.pronouns == PronounChoice::Custom && !settings.custom_pronouns.is_empty() {
        let parts: Vec<&str> = settings.custom_pronouns.split('/').collect();
        let at = |i: usize, fallback: &str| -> String {
            match parts.get(i) {
                Some(p) if !p.is_empty() => p.to_string(),
                _ => fallback.to_string(),
            }
        };
        return PronounSet {
            subject: at(0, "they"),
            object: at(1, "them"),
            possessive: at(2, "their"),
            reflexive: at(3, "themselves"),
        };
    }

    match settings.pronouns {
        PronounChoice::SheHer => fixed("she", "her", "her", "herself"),
        PronounChoice::HeHim => fixed("he", "him", "his", "himself"),
        _ => fixed("they", "them", "their", "themselves"),
    }
}
