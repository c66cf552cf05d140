use chrono::NaiveDate;
use cycletrack::db::initialize::init_db;
use cycletrack::db::records::{KEY_PERIOD_ENTRIES, RecordStore};
use cycletrack::models::entry::PeriodEntry;
use cycletrack::models::flow::FlowIntensity;
use cycletrack::models::notification::{NotificationData, NotificationKind};
use cycletrack::models::settings::AppSettings;

mod common;
use common::setup_test_db;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

fn open_store(name: &str) -> RecordStore {
    let path = setup_test_db(name);
    let store = RecordStore::open(&path).expect("open store");
    init_db(store.conn()).expect("init db");
    store
}

#[test]
fn test_entry_round_trip_preserves_fields() {
    let store = open_store("entry_round_trip");

    let entry = PeriodEntry::new(
        d("2025-07-01"),
        d("2025-07-05"),
        FlowIntensity::Heavy,
        vec!["cramps".to_string(), "headache".to_string()],
        Some("rough week".to_string()),
    );
    let id = entry.id.clone();
    let created_at = entry.created_at;

    store.save_period_entry(entry).expect("save");

    let loaded = store.get_period_entries();
    assert_eq!(loaded.len(), 1);

    let got = &loaded[0];
    assert_eq!(got.id, id);
    assert_eq!(got.start_date, d("2025-07-01"));
    assert_eq!(got.end_date, d("2025-07-05"));
    assert_eq!(got.flow, FlowIntensity::Heavy);
    assert_eq!(got.symptoms, vec!["cramps", "headache"]);
    assert_eq!(got.notes.as_deref(), Some("rough week"));
    // timestamps survive serialization as equivalent instants
    assert_eq!(got.created_at, created_at);
}

#[test]
fn test_save_is_an_upsert_by_id() {
    let store = open_store("entry_upsert");

    let mut entry = PeriodEntry::new(
        d("2025-07-01"),
        d("2025-07-05"),
        FlowIntensity::Light,
        vec![],
        None,
    );
    store.save_period_entry(entry.clone()).expect("save");

    entry.flow = FlowIntensity::Heavy;
    entry.notes = Some("edited".to_string());
    store.save_period_entry(entry.clone()).expect("re-save");

    let loaded = store.get_period_entries();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].flow, FlowIntensity::Heavy);
    assert_eq!(loaded[0].notes.as_deref(), Some("edited"));
}

#[test]
fn test_entries_are_sorted_by_start_date_on_save() {
    let store = open_store("entry_sort");

    for (start, end) in [
        ("2025-07-10", "2025-07-14"),
        ("2025-05-12", "2025-05-16"),
        ("2025-06-11", "2025-06-15"),
    ] {
        store
            .save_period_entry(PeriodEntry::new(
                d(start),
                d(end),
                FlowIntensity::Medium,
                vec![],
                None,
            ))
            .expect("save");
    }

    let loaded = store.get_period_entries();
    let starts: Vec<NaiveDate> = loaded.iter().map(|e| e.start_date).collect();
    assert_eq!(starts, vec![d("2025-05-12"), d("2025-06-11"), d("2025-07-10")]);
}

#[test]
fn test_store_delete_is_a_silent_noop_for_unknown_id() {
    let store = open_store("entry_delete_noop");

    store
        .save_period_entry(PeriodEntry::new(
            d("2025-07-01"),
            d("2025-07-05"),
            FlowIntensity::Medium,
            vec![],
            None,
        ))
        .expect("save");

    // Unknown id: no error, collection unchanged
    store.delete_period_entry("no-such-id").expect("no-op");
    assert_eq!(store.get_period_entries().len(), 1);

    // Known id: removed
    let id = store.get_period_entries()[0].id.clone();
    store.delete_period_entry(&id).expect("delete");
    assert!(store.get_period_entries().is_empty());
}

#[test]
fn test_settings_round_trip_and_first_access_defaults() {
    let store = open_store("settings_round_trip");

    // Nothing stored yet
    assert!(store.get_app_settings().is_none());

    // First access creates and persists the defaults
    let defaults = store.settings_or_default().expect("defaults");
    assert_eq!(defaults.cycle_length, 28);
    assert_eq!(defaults.period_length, 5);
    assert!(defaults.notifications_enabled);
    assert!(defaults.partner_notifications.enabled);
    assert_eq!(defaults.partner_notifications.reminder_days, vec![3, 1]);
    assert!(defaults.partner_notifications.notification_types.period_start);
    assert!(!defaults.partner_notifications.notification_types.period_end);

    assert!(store.get_app_settings().is_some());

    // Wholesale overwrite
    let mut edited = defaults.clone();
    edited.cycle_length = 31;
    edited.last_period_start = Some(d("2025-07-01"));
    edited.partner_notifications.partner_name = "Alex".to_string();
    store.save_app_settings(&edited).expect("save");

    let reloaded = store.get_app_settings().expect("settings");
    assert_eq!(reloaded, edited);
    assert_eq!(reloaded.last_period_start, Some(d("2025-07-01")));
}

#[test]
fn test_notification_upsert_and_delete() {
    let store = open_store("notification_store");

    let notification = NotificationData::new(
        NotificationKind::Ovulation,
        "Ovulation Period".to_string(),
        "msg".to_string(),
        chrono::Local::now(),
    );
    let id = notification.id.clone();

    store.save_notification(notification.clone()).expect("save");
    assert_eq!(store.get_notifications().len(), 1);

    let mut updated = notification;
    updated.is_sent = true;
    store.save_notification(updated).expect("upsert");

    let loaded = store.get_notifications();
    assert_eq!(loaded.len(), 1);
    assert!(loaded[0].is_sent);
    assert_eq!(loaded[0].kind, NotificationKind::Ovulation);

    store.delete_notification(&id).expect("delete");
    assert!(store.get_notifications().is_empty());
}

#[test]
fn test_broken_blob_degrades_to_empty_and_logs() {
    let store = open_store("broken_blob");

    store
        .save_period_entry(PeriodEntry::new(
            d("2025-07-01"),
            d("2025-07-05"),
            FlowIntensity::Medium,
            vec![],
            None,
        ))
        .expect("save");

    // Corrupt the stored collection behind the store's back
    cycletrack::db::kv::set(store.conn(), KEY_PERIOD_ENTRIES, "{not json").expect("corrupt");

    // Fail-soft: empty result, no error surfaced to the caller
    assert!(store.get_period_entries().is_empty());

    // ...but the failure is recorded in the internal log
    let logged: i64 = store
        .conn()
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'storage_error'",
            [],
            |row| row.get(0),
        )
        .expect("count");
    assert!(logged >= 1);
}

#[test]
fn test_settings_broken_blob_reads_as_absent() {
    let store = open_store("settings_broken");

    let defaults = AppSettings::default();
    store.save_app_settings(&defaults).expect("save");

    cycletrack::db::kv::set(
        store.conn(),
        cycletrack::db::records::KEY_APP_SETTINGS,
        "][",
    )
    .expect("corrupt");

    assert!(store.get_app_settings().is_none());
}
