use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::journal::{JournalEntry, Outcome};
use chrono::{Local, NaiveDate};
use rusqlite::{Row, params};

/// Fields of a new journal row; id and date are assigned on insert.
pub struct NewEntry<'a> {
    pub qr_token: &'a str,
    pub participant: &'a str,
    pub day: Option<u8>,
    pub meal_type: Option<&'a str>,
    pub outcome: Outcome,
    pub message: &'a str,
}

pub fn insert_entry(pool: &DbPool, entry: &NewEntry) -> AppResult<i64> {
    let now = Local::now().to_rfc3339();
    pool.conn.execute(
        "INSERT INTO scan_journal (date, qr_token, participant, day, meal_type, outcome, message)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            now,
            entry.qr_token,
            entry.participant,
            entry.day,
            entry.meal_type,
            entry.outcome.to_db_str(),
            entry.message
        ],
    )?;
    Ok(pool.conn.last_insert_rowid())
}

fn map_entry(row: &Row) -> rusqlite::Result<JournalEntry> {
    let outcome_raw: String = row.get(6)?;
    let outcome = Outcome::from_db_str(&outcome_raw).ok_or_else(|| {
        rusqlite::Error::InvalidColumnType(6, "outcome".into(), rusqlite::types::Type::Text)
    })?;

    Ok(JournalEntry {
        id: row.get(0)?,
        date: row.get(1)?,
        qr_token: row.get(2)?,
        participant: row.get(3)?,
        day: row.get(4)?,
        meal_type: row.get(5)?,
        outcome,
        message: row.get(7)?,
    })
}

/// Journal rows, oldest first. With `on` only the rows of that local date.
pub fn load_entries(pool: &DbPool, on: Option<NaiveDate>) -> AppResult<Vec<JournalEntry>> {
    let mut stmt = pool.conn.prepare(
        r#"
        SELECT id, date, qr_token, participant, day, meal_type, outcome, message
        FROM scan_journal
        WHERE ?1 IS NULL OR substr(date, 1, 10) = ?1
        ORDER BY id ASC
        "#,
    )?;

    let filter = on.map(|d| d.format("%Y-%m-%d").to_string());
    let rows = stmt.query_map([filter], map_entry)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
