use chrono::Local;
use confkiosk::db::journal::{NewEntry, insert_entry, load_entries};
use confkiosk::db::migrate::applied_versions;
use confkiosk::db::pool::DbPool;
use confkiosk::export::{ExportFormat, export_journal};
use confkiosk::models::journal::Outcome;
use std::fs;

mod common;
use common::{setup_test_db, temp_out};

fn seed(pool: &DbPool) {
    insert_entry(
        pool,
        &NewEntry {
            qr_token: "QR-100",
            participant: "Asha",
            day: Some(1),
            meal_type: Some("lunch"),
            outcome: Outcome::Claimed,
            message: "LUNCH claimed successfully!",
        },
    )
    .expect("insert claimed");
    insert_entry(
        pool,
        &NewEntry {
            qr_token: "QR-404",
            participant: "",
            day: None,
            meal_type: None,
            outcome: Outcome::LookupFailed,
            message: "Participant not found",
        },
    )
    .expect("insert lookup failure");
}

#[test]
fn migrations_run_once_and_are_recorded() {
    let db_path = setup_test_db("journal_migrations");

    let first = DbPool::open_ready(&db_path).expect("open");
    let versions = applied_versions(&first.conn).expect("versions");
    assert_eq!(versions.len(), 3);
    drop(first);

    let again = DbPool::open_ready(&db_path).expect("reopen");
    assert_eq!(applied_versions(&again.conn).expect("versions"), versions);
}

#[test]
fn journal_rows_come_back_in_order() {
    let pool = DbPool::in_memory().expect("db");
    seed(&pool);

    let all = load_entries(&pool, None).expect("load");
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].participant, "Asha");
    assert_eq!(all[0].day, Some(1));
    assert_eq!(all[0].outcome, Outcome::Claimed);
    assert_eq!(all[1].outcome, Outcome::LookupFailed);
    assert_eq!(all[1].meal_type, None);

    let today = load_entries(&pool, Some(Local::now().date_naive())).expect("load today");
    assert_eq!(today.len(), 2);
    let yesterday = Local::now().date_naive().pred_opt().expect("yesterday");
    assert!(load_entries(&pool, Some(yesterday)).expect("load").is_empty());
}

#[test]
fn journal_rejects_unknown_meal() {
    let pool = DbPool::in_memory().expect("db");
    let res = insert_entry(
        &pool,
        &NewEntry {
            qr_token: "QR-100",
            participant: "Asha",
            day: Some(3),
            meal_type: Some("dinner"),
            outcome: Outcome::Claimed,
            message: "",
        },
    );
    assert!(res.is_err());
}

#[test]
fn export_csv_and_json() {
    let pool = DbPool::in_memory().expect("db");
    seed(&pool);
    let entries = load_entries(&pool, None).expect("load");

    let csv_path = temp_out("journal_export", "csv");
    export_journal(&entries, &csv_path, ExportFormat::Csv, true).expect("csv export");
    let csv = fs::read_to_string(&csv_path).expect("read csv");
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("id,date,qr_token,participant,day,meal_type,outcome,message")
    );
    assert!(csv.contains("QR-100,Asha,1,lunch,claimed"));
    assert!(csv.contains("lookup_failed,Participant not found"));

    let json_path = temp_out("journal_export", "json");
    export_journal(&entries, &json_path, ExportFormat::Json, true).expect("json export");
    let rows: serde_json::Value = serde_json::from_str(&fs::read_to_string(&json_path).expect("read json")).expect("json");
    assert_eq!(rows.as_array().map(|a| a.len()), Some(2));
    assert_eq!(rows[0]["outcome"], "claimed");
    assert_eq!(rows[1]["day"], "");
}

#[test]
fn empty_csv_export_still_has_header() {
    let csv_path = temp_out("journal_export_empty", "csv");
    export_journal(&[], &csv_path, ExportFormat::Csv, true).expect("csv export");
    let csv = fs::read_to_string(&csv_path).expect("read csv");
    assert_eq!(csv.trim(), "id,date,qr_token,participant,day,meal_type,outcome,message");
}
