use cycletrack::models::settings::{PartnerNotificationSettings, PronounChoice};
use cycletrack::utils::pronouns::get_pronouns;

fn partner_with(choice: PronounChoice, custom: &str) -> PartnerNotificationSettings {
    PartnerNotificationSettings {
        pronouns: choice,
        custom_pronouns: custom.to_string(),
        ..PartnerNotificationSettings::default()
    }
}

#[test]
fn test_custom_pronouns_parse_full_tuple() {
    let partner = partner_with(PronounChoice::Custom, "xe/xem/xir/xirself");
    let set = get_pronouns(&partner);

    assert_eq!(set.subject, "xe");
    assert_eq!(set.object, "xem");
    assert_eq!(set.possessive, "xir");
    assert_eq!(set.reflexive, "xirself");
}

#[test]
fn test_custom_pronouns_fall_back_per_missing_position() {
    let partner = partner_with(PronounChoice::Custom, "ze/zir");
    let set = get_pronouns(&partner);

    assert_eq!(set.subject, "ze");
    assert_eq!(set.object, "zir");
    assert_eq!(set.possessive, "their");
    assert_eq!(set.reflexive, "themselves");
}

#[test]
fn test_empty_custom_tuple_degrades_to_they_them() {
    let partner = partner_with(PronounChoice::Custom, "");
    let set = get_pronouns(&partner);

    assert_eq!(set.subject, "they");
    assert_eq!(set.reflexive, "themselves");
}

#[test]
fn test_fixed_choices_ignore_custom_content() {
    let partner = partner_with(PronounChoice::SheHer, "xe/xem/xir/xirself");
    let set = get_pronouns(&partner);

    assert_eq!(set.subject, "she");
    assert_eq!(set.object, "her");
    assert_eq!(set.possessive, "her");
    assert_eq!(set.reflexive, "herself");

    let partner = partner_with(PronounChoice::HeHim, "whatever");
    let set = get_pronouns(&partner);
    assert_eq!(set.subject, "he");
    assert_eq!(set.object, "him");
    assert_eq!(set.possessive, "his");
    assert_eq!(set.reflexive, "himself");
}

#[test]
fn test_they_them_default_tuple() {
    let partner = partner_with(PronounChoice::TheyThem, "");
    let set = get_pronouns(&partner);

    assert_eq!(set.subject, "they");
    assert_eq!(set.object, "them");
    assert_eq!(set.possessive, "their");
    assert_eq!(set.reflexive, "themselves");
}
