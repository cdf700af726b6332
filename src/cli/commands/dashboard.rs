use crate::api::ConferenceApi;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::{SessionContext, protected_error};
use crate::errors::AppResult;
use crate::models::meal::MEAL_TYPES;
use crate::models::summary::DashboardSummary;
use crate::ui::messages::{header, info};
use crate::utils::colors::{CYAN, GREEN, paint};
use crate::utils::date::short_timestamp;
use crate::utils::formatting::{bar, pad_left, pad_right, percent};
use crate::utils::table::{Column, Table};

const BAR_WIDTH: usize = 30;

/// Admin dashboard. Protected: no session, no data.
pub fn handle(cmd: &Commands, cfg: &Config, session: &mut SessionContext) -> AppResult<()> {
    if let Commands::Dashboard { latest } = cmd {
        let current = session.require()?;
        let api = super::http_api(cfg, Some(&current))?;

        let summary = api.summary().map_err(protected_error)?;

        if let Some(email) = &current.email {
            info(format!("Logged in as {email}"));
        }
        print!("{}", render(&summary, *latest));
    }

    Ok(())
}

fn stat_line(label: &str, value: u64) -> String {
    format!("  {} {}\n", pad_right(label, 22), paint(GREEN, &pad_left(&value.to_string(), 6)))
}

fn bar_line(label: &str, value: u64, max: u64, total: u64) -> String {
    format!(
        "  {} {} {} {}\n",
        pad_right(label, 12),
        pad_left(&value.to_string(), 6),
        pad_right(&percent(value, total), 7),
        paint(CYAN, &bar(value, max, BAR_WIDTH))
    )
}

/// Dashboard as text: stats cards, meals per type, category split, latest claims.
pub fn render(summary: &DashboardSummary, latest: usize) -> String {
    header("Admin Dashboard");
    let mut out = String::new();

    out.push_str(&stat_line("Total Participants", summary.total_participants));
    out.push_str(&stat_line("Meals Day 1", summary.meals_day1));
    out.push_str(&stat_line("Meals Day 2", summary.meals_day2));
    out.push_str(&stat_line("Total Meals", summary.total_meals()));

    out.push_str("\nMeals by type\n");
    let by_type = &summary.meals_by_type;
    let max = MEAL_TYPES.iter().map(|m| by_type.count(*m)).max().unwrap_or(0);
    let total: u64 = MEAL_TYPES.iter().map(|m| by_type.count(*m)).sum();
    for meal in MEAL_TYPES {
        out.push_str(&bar_line(meal.label(), by_type.count(meal), max, total));
    }

    out.push_str("\nParticipants by category\n");
    let cats = &summary.category_breakdown;
    let cat_total = cats.presenters + cats.attendees;
    let cat_max = cats.presenters.max(cats.attendees);
    out.push_str(&bar_line("Presenters", cats.presenters, cat_max, cat_total));
    out.push_str(&bar_line("Attendees", cats.attendees, cat_max, cat_total));

    if latest > 0 && !summary.latest_claims.is_empty() {
        out.push_str("\nLatest claims\n");
        let mut table = Table::new(vec![
            Column::new("When", 16),
            Column::new("Participant", 12),
            Column::new("Day", 3),
            Column::new("Meal", 9),
        ]);
        for claim in summary.latest_claims.iter().take(latest) {
            table.add_row(vec![
                short_timestamp(&claim.claimed_at),
                claim.participant_id.clone(),
                claim.day.number().to_string(),
                claim.meal_type.label().to_string(),
            ]);
        }
        out.push_str(&table.render());
    }

    out
}
