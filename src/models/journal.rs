use serde::Serialize;

/// How a scan at this station ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Claimed,
    Duplicate,
    Rejected,
    LookupFailed,
}

impl Outcome {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Outcome::Claimed => "claimed",
            Outcome::Duplicate => "duplicate",
            Outcome::Rejected => "rejected",
            Outcome::LookupFailed => "lookup_failed",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "claimed" => Some(Outcome::Claimed),
            "duplicate" => Some(Outcome::Duplicate),
            "rejected" => Some(Outcome::Rejected),
            "lookup_failed" => Some(Outcome::LookupFailed),
            _ => None,
        }
    }
}

/// A row of the local `scan_journal` table.
#[derive(Debug, Clone, Serialize)]
pub struct JournalEntry {
    pub id: i64,
    pub date: String,       // ⇔ scan_journal.date (RFC3339, local)
    pub qr_token: String,   // ⇔ scan_journal.qr_token
    pub participant: String, // ⇔ scan_journal.participant (name, '' if unknown)
    pub day: Option<u8>,
    pub meal_type: Option<String>,
    pub outcome: Outcome,
    pub message: String,
}
