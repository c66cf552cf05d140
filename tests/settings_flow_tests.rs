use chrono::{Duration, Local};
use predicates::str::contains;

mod common;
use common::{ct, init_db_with_data, setup_test_db};

use cycletrack::db::records::RecordStore;
use cycletrack::models::settings::AppSettings;

#[test]
fn test_settings_show_defaults() {
    let db_path = setup_test_db("settings_show");

    ct().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ct().args(["--db", &db_path, "--test", "settings"])
        .assert()
        .success()
        .stdout(contains("Cycle length:  28 days"))
        .stdout(contains("Period length: 5 days"));
}

#[test]
fn test_settings_edit_persists_values() {
    let db_path = setup_test_db("settings_edit");
    init_db_with_data(&db_path);

    ct().args([
        "--db",
        &db_path,
        "--test",
        "settings",
        "--cycle-length",
        "31",
        "--period-length",
        "6",
    ])
    .assert()
    .success()
    .stdout(contains("Settings saved"));

    let store = RecordStore::open(&db_path).expect("open store");
    let settings = store.get_app_settings().expect("settings");
    assert_eq!(settings.cycle_length, 31);
    assert_eq!(settings.period_length, 6);
}

#[test]
fn test_settings_save_forces_notification_flags_on() {
    let db_path = setup_test_db("settings_forced_on");
    init_db_with_data(&db_path);

    // Store a disabled state behind the CLI's back
    let store = RecordStore::open(&db_path).expect("open store");
    let mut settings = AppSettings::default();
    settings.notifications_enabled = false;
    settings.partner_notifications.enabled = false;
    store.save_app_settings(&settings).expect("save");

    // Any pass through the settings-editing flow flips both back on
    ct().args([
        "--db",
        &db_path,
        "--test",
        "settings",
        "--cycle-length",
        "29",
    ])
    .assert()
    .success();

    let reloaded = store.get_app_settings().expect("settings");
    assert!(reloaded.notifications_enabled);
    assert!(reloaded.partner_notifications.enabled);
    assert_eq!(reloaded.cycle_length, 29);
}

#[test]
fn test_settings_rejects_nonpositive_lengths() {
    let db_path = setup_test_db("settings_invalid");
    init_db_with_data(&db_path);

    ct().args([
        "--db",
        &db_path,
        "--test",
        "settings",
        "--cycle-length",
        "0",
    ])
    .assert()
    .failure()
    .stderr(contains("Validation failed"));
}

#[test]
fn test_partner_show_and_edit() {
    let db_path = setup_test_db("partner_edit");
    init_db_with_data(&db_path);

    ct().args([
        "--db",
        &db_path,
        "--test",
        "partner",
        "--name",
        "Alex",
        "--pronouns",
        "she/her",
    ])
    .assert()
    .success()
    .stdout(contains("Partner settings saved"));

    ct().args(["--db", &db_path, "--test", "partner"])
        .assert()
        .success()
        .stdout(contains("Alex (she/her/her/herself)"));
}

#[test]
fn test_partner_custom_pronouns_shown_resolved() {
    let db_path = setup_test_db("partner_custom_pronouns");
    init_db_with_data(&db_path);

    ct().args([
        "--db",
        &db_path,
        "--test",
        "partner",
        "--name",
        "Kai",
        "--pronouns",
        "custom",
        "--custom-pronouns",
        "xe/xem/xir/xirself",
    ])
    .assert()
    .success();

    ct().args(["--db", &db_path, "--test", "partner"])
        .assert()
        .success()
        .stdout(contains("Kai (xe/xem/xir/xirself)"));
}

#[test]
fn test_partner_rejects_unknown_pronoun_choice() {
    let db_path = setup_test_db("partner_bad_pronouns");
    init_db_with_data(&db_path);

    ct().args([
        "--db",
        &db_path,
        "--test",
        "partner",
        "--pronouns",
        "ze/zir",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid pronoun choice"));
}

#[test]
fn test_partner_toggle_reminder_day() {
    let db_path = setup_test_db("partner_toggle_day");
    init_db_with_data(&db_path);

    ct().args(["--db", &db_path, "--test", "partner", "--toggle-day", "2"])
        .assert()
        .success();

    let store = RecordStore::open(&db_path).expect("open store");
    let settings = store.get_app_settings().expect("settings");
    assert_eq!(
        settings.partner_notifications.reminder_days,
        vec![3, 2, 1]
    );

    // toggling again removes it
    ct().args(["--db", &db_path, "--test", "partner", "--toggle-day", "2"])
        .assert()
        .success();

    let settings = store.get_app_settings().expect("settings");
    assert_eq!(settings.partner_notifications.reminder_days, vec![3, 1]);
}

#[test]
fn test_partner_save_reschedules_reminders() {
    let db_path = setup_test_db("partner_reschedules");

    ct().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // entry placed so the next period lands 6 days from now
    let start = (Local::now().date_naive() - Duration::days(22))
        .format("%Y-%m-%d")
        .to_string();
    let end = (Local::now().date_naive() - Duration::days(18))
        .format("%Y-%m-%d")
        .to_string();
    ct().args(["--db", &db_path, "--test", "add", &start, &end])
        .assert()
        .success();

    ct().args(["--db", &db_path, "--test", "partner", "--name", "Sam"])
        .assert()
        .success();

    // the save already scheduled future reminders
    let store = RecordStore::open(&db_path).expect("open store");
    assert!(!store.get_notifications().is_empty());

    // ...and registered them in the delivery ledger
    let delivery = cycletrack::notify::LocalDelivery::open(&db_path).expect("open delivery");
    assert!(delivery.pending_count().expect("count") > 0);

    ct().args(["--db", &db_path, "--test", "notify", "--upcoming"])
        .assert()
        .success()
        .stdout(contains("period_start"));
}

#[test]
fn test_notify_schedule_and_mark_sent() {
    let db_path = setup_test_db("notify_mark_sent");

    ct().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let start = (Local::now().date_naive() - Duration::days(22))
        .format("%Y-%m-%d")
        .to_string();
    let end = (Local::now().date_naive() - Duration::days(18))
        .format("%Y-%m-%d")
        .to_string();
    ct().args(["--db", &db_path, "--test", "add", &start, &end])
        .assert()
        .success();

    // settings must exist before scheduling does anything
    ct().args(["--db", &db_path, "--test", "settings", "--cycle-length", "28"])
        .assert()
        .success();

    ct().args(["--db", &db_path, "--test", "notify", "--schedule"])
        .assert()
        .success()
        .stdout(contains("Scheduled"));

    let store = RecordStore::open(&db_path).expect("open store");
    let id = store.get_notifications()[0].id.clone();

    ct().args(["--db", &db_path, "--test", "notify", "--mark-sent", &id])
        .assert()
        .success()
        .stdout(contains("marked as sent"));

    assert!(
        store
            .get_notifications()
            .iter()
            .find(|n| n.id == id)
            .expect("notification")
            .is_sent
    );

    ct().args([
        "--db",
        &db_path,
        "--test",
        "notify",
        "--mark-sent",
        "missing-id",
    ])
    .assert()
    .success()
    .stdout(contains("No reminder with id"));
}

#[test]
fn test_notify_schedule_without_prediction() {
    let db_path = setup_test_db("notify_no_prediction");

    ct().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // settings exist, but there are no entries to predict from
    ct().args(["--db", &db_path, "--test", "settings", "--cycle-length", "28"])
        .assert()
        .success();

    ct().args(["--db", &db_path, "--test", "notify", "--schedule"])
        .assert()
        .success()
        .stdout(contains("No reminders scheduled"));
}

#[test]
fn test_notify_test_notification() {
    let db_path = setup_test_db("notify_test");

    ct().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    ct().args(["--db", &db_path, "--test", "notify", "--test"])
        .assert()
        .success()
        .stdout(contains("Test reminder scheduled"));

    let store = RecordStore::open(&db_path).expect("open store");
    let stored = store.get_notifications();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].title, "Test Notification");
}
