use crate::api::ConferenceApi;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::ConferenceCalendar;
use crate::core::session::SessionContext;
use crate::core::station::{ScanStation, StationEvent};
use crate::core::workflow::State;
use crate::db::journal::{NewEntry, insert_entry};
use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::models::journal::Outcome;
use crate::models::meal::{ConferenceDay, MEAL_TYPES, MealType};
use crate::ui::messages::{header, info, inline_error, success, warning};
use std::io::{self, BufRead, Write};
use std::time::Instant;

/// Run the interactive scan station on stdin.
pub fn handle(cmd: &Commands, cfg: &Config, session: &mut SessionContext) -> AppResult<()> {
    if let Commands::Scan { meal } = cmd {
        let auto_meal = match meal {
            Some(code) => Some(MealType::from_code(code).ok_or_else(|| AppError::InvalidMealType(code.clone()))?),
            None => None,
        };

        let current = session.current()?;
        let api = super::http_api(cfg, current.as_ref())?;
        let calendar = cfg.calendar();

        let stdin = io::stdin();
        run_station(&api, &calendar, calendar.today(), cfg, session, auto_meal, stdin.lock())?;
    }

    Ok(())
}

fn prompt(text: &str) {
    print!("{text} > ");
    io::stdout().flush().ok();
}

fn meal_menu() -> String {
    MEAL_TYPES
        .iter()
        .map(|m| format!("[{}] {}", &m.as_str()[..1], m.label()))
        .collect::<Vec<_>>()
        .join("  ")
}

fn print_day_banner(calendar: &ConferenceCalendar, station_day: Option<ConferenceDay>) {
    header("Meal Scanning");
    match station_day {
        Some(day) => info(calendar.label(day)),
        None => warning(format!(
            "Conference dates are {}. Current date appears to be outside this range.",
            calendar.range_label()
        )),
    }
}

/// Station loop over any line source, so it can be driven from tests.
pub fn run_station<A: ConferenceApi + ?Sized, R: BufRead>(
    api: &A,
    calendar: &ConferenceCalendar,
    day: Option<ConferenceDay>,
    cfg: &Config,
    session: &SessionContext,
    auto_meal: Option<MealType>,
    input: R,
) -> AppResult<()> {
    let mut station = ScanStation::new(api, day, cfg.reset_delay());
    print_day_banner(calendar, station.day());
    if let Err(e) = station.start_camera() {
        warning(e);
    }
    println!("Scan a QR code or enter it manually. [r] reset  [q] quit");
    prompt("QR");

    for line in input.lines() {
        let line = line?;
        let text = line.trim();

        match text {
            "q" | "quit" => break,
            "r" | "reset" => {
                station.reset();
                info("Ready for the next scan.");
                prompt("QR");
                continue;
            }
            _ => {}
        }

        // a confirmation whose delay already ran out
        station.poll(Instant::now());

        if station.workflow().is_scannable() {
            let event = station.scan(text);
            record(session, &event, text);
            render(&event, calendar, &station);

            if let (StationEvent::Found(_), Some(meal)) = (&event, auto_meal) {
                claim_and_settle(&mut station, meal, session, calendar);
            }
        } else if matches!(station.state(), State::ReadyToClaim { .. }) {
            match MealType::from_code(text) {
                Some(meal) => claim_and_settle(&mut station, meal, session, calendar),
                None if text.is_empty() => {}
                None => inline_error(format!("Unknown meal '{text}'. {}", meal_menu())),
            }
        } else {
            // capture suspended: nothing reaches the backend
            warning("Still processing the previous scan, input ignored.");
        }

        prompt(if station.workflow().is_scannable() { "QR" } else { "Meal" });
    }

    println!();
    Ok(())
}

/// Submit a claim; on success wait out the confirmation and return to idle.
fn claim_and_settle<A: ConferenceApi + ?Sized>(
    station: &mut ScanStation<'_, A>,
    meal: MealType,
    session: &SessionContext,
    calendar: &ConferenceCalendar,
) {
    let token = match station.state() {
        State::ReadyToClaim { qr_token, .. } => qr_token.clone(),
        _ => String::new(),
    };

    let event = station.claim(meal, Instant::now());
    record(session, &event, &token);
    render(&event, calendar, station);

    if let Some(wait) = station.reset_in(Instant::now()) {
        std::thread::sleep(wait);
        if station.poll(Instant::now()) {
            info("Ready for the next scan.");
        }
    }
}

fn render<A: ConferenceApi + ?Sized>(event: &StationEvent, calendar: &ConferenceCalendar, station: &ScanStation<'_, A>) {
    match event {
        StationEvent::Ignored => {}
        StationEvent::Found(p) => {
            header("Participant Info");
            super::print_participant(p);
            match station.day() {
                Some(day) => {
                    println!("\n  Conference day: {}", calendar.label(day));
                    println!("  Select meal: {}   [r] scan another", meal_menu());
                }
                None => inline_error(format!(
                    "Cannot claim meal outside conference dates ({}).",
                    calendar.range_label()
                )),
            }
        }
        StationEvent::LookupFailed { message, .. } => {
            inline_error(format!("Invalid QR Code: {message}"));
            info("Try scanning again.");
        }
        StationEvent::Claimed { confirmation, .. } => {
            success(format!("✓ {confirmation}"));
        }
        StationEvent::Rejected {
            participant,
            message,
            duplicate,
            ..
        } => {
            if *duplicate {
                inline_error(format!("{message} ({})", participant.name));
            } else {
                inline_error(message);
            }
            println!("  Pick another meal or [r] to scan another QR code.");
        }
        StationEvent::Refused(guard) => inline_error(guard),
    }
}

/// Journal + audit trail for one station event. Best effort: a local write
/// failure never blocks the queue at the counter.
pub(crate) fn record(session: &SessionContext, event: &StationEvent, qr_token: &str) {
    let db = session.db();
    let entry = match event {
        StationEvent::LookupFailed { qr_token, message } => Some(NewEntry {
            qr_token,
            participant: "",
            day: None,
            meal_type: None,
            outcome: Outcome::LookupFailed,
            message,
        }),
        StationEvent::Claimed {
            participant,
            meal,
            day,
            confirmation,
        } => Some(NewEntry {
            qr_token,
            participant: &participant.name,
            day: Some(day.number()),
            meal_type: Some(meal.as_str()),
            outcome: Outcome::Claimed,
            message: confirmation,
        }),
        StationEvent::Rejected {
            participant,
            meal,
            day,
            message,
            duplicate,
        } => Some(NewEntry {
            qr_token,
            participant: &participant.name,
            day: Some(day.number()),
            meal_type: Some(meal.as_str()),
            outcome: if *duplicate {
                Outcome::Duplicate
            } else {
                Outcome::Rejected
            },
            message,
        }),
        _ => None,
    };

    if let Some(entry) = entry {
        if let Err(e) = insert_entry(db, &entry) {
            tracing::warn!(error = %e, "failed to write scan journal");
        }
        let op = match entry.outcome {
            Outcome::Claimed => "claim",
            Outcome::Duplicate => "duplicate",
            Outcome::Rejected => "claim_failed",
            Outcome::LookupFailed => "lookup_failed",
        };
        ttlog_quiet(&db.conn, op, entry.qr_token, entry.message);
    }
}
