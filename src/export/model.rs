use crate::models::journal::JournalEntry;
use serde::Serialize;

/// Flat journal row, one column per field so CSV headers stay stable.
#[derive(Debug, Serialize)]
pub struct JournalExport {
    pub id: i64,
    pub date: String,
    pub qr_token: String,
    pub participant: String,
    pub day: String,
    pub meal_type: String,
    pub outcome: String,
    pub message: String,
}

impl From<&JournalEntry> for JournalExport {
    fn from(e: &JournalEntry) -> Self {
        Self {
            id: e.id,
            date: e.date.clone(),
            qr_token: e.qr_token.clone(),
            participant: e.participant.clone(),
            day: e.day.map(|d| d.to_string()).unwrap_or_default(),
            meal_type: e.meal_type.clone().unwrap_or_default(),
            outcome: e.outcome.to_db_str().to_string(),
            message: e.message.clone(),
        }
    }
}
