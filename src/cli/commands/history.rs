use crate::cli::parser::Commands;
use crate::core::session::SessionContext;
use crate::db::journal::load_entries;
use crate::errors::AppResult;
use crate::export::export_journal;
use crate::models::journal::Outcome;
use crate::utils::colors::{color_for_outcome, paint};
use crate::utils::date::{self, short_timestamp};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, session: &mut SessionContext) -> AppResult<()> {
    if let Commands::History {
        today,
        export,
        format,
        force,
    } = cmd
    {
        let filter = if *today { Some(date::today()) } else { None };
        let entries = load_entries(session.db(), filter)?;

        if let Some(file) = export {
            return export_journal(&entries, file, *format, *force);
        }

        if entries.is_empty() {
            println!("No scans recorded on this station.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ID", 3),
            Column::new("When", 16),
            Column::new("QR", 8),
            Column::new("Participant", 12),
            Column::new("Day", 3),
            Column::new("Meal", 9),
            Column::new("Outcome", 13),
            Column::new("Message", 10),
        ]);

        for e in &entries {
            table.add_row(vec![
                e.id.to_string(),
                short_timestamp(&e.date),
                e.qr_token.clone(),
                e.participant.clone(),
                e.day.map(|d| d.to_string()).unwrap_or_default(),
                e.meal_type.clone().unwrap_or_default(),
                e.outcome.to_db_str().to_string(),
                e.message.clone(),
            ]);
        }
        print!("{}", table.render());

        let claimed = entries.iter().filter(|e| e.outcome == Outcome::Claimed).count();
        println!(
            "\n{} scans, {} claimed",
            entries.len(),
            paint(color_for_outcome(Outcome::Claimed), &claimed.to_string())
        );
    }

    Ok(())
}
