use crate::api::error::{ApiError, ApiErrorKind};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionContext;
use crate::core::station::{ScanStation, StationEvent};
use crate::errors::{AppError, AppResult};
use crate::models::meal::MealType;
use crate::ui::messages::{header, success};
use crate::utils::date;
use std::time::Instant;

/// One-shot lookup + claim, for scripted stations.
pub fn handle(cmd: &Commands, cfg: &Config, session: &mut SessionContext) -> AppResult<()> {
    if let Commands::Claim {
        token,
        meal,
        date: date_arg,
    } = cmd
    {
        //
        // 1. Everything that can be refused locally is refused before the network
        //
        let meal = MealType::from_code(meal).ok_or_else(|| AppError::InvalidMealType(meal.clone()))?;
        let calendar = cfg.calendar();
        let on = date::resolve_date(date_arg.as_deref())?;
        let day = calendar
            .day_for(on)
            .ok_or_else(|| AppError::OutsideConference(calendar.range_label()))?;

        let current = session.current()?;
        let api = super::http_api(cfg, current.as_ref())?;
        let mut station = ScanStation::new(&api, Some(day), cfg.reset_delay());

        //
        // 2. Lookup
        //
        let event = station.scan(token);
        super::scan::record(session, &event, token.trim());
        match event {
            StationEvent::Found(p) => {
                header("Participant Info");
                super::print_participant(&p);
            }
            StationEvent::LookupFailed { message, .. } => {
                return Err(ApiError::new(ApiErrorKind::NotFound, format!("Invalid QR Code: {message}")).into());
            }
            _ => return Err(AppError::Other(format!("empty QR token '{token}'"))),
        }

        //
        // 3. Claim
        //
        let event = station.claim(meal, Instant::now());
        super::scan::record(session, &event, token.trim());
        match event {
            StationEvent::Claimed { confirmation, .. } => {
                success(format!("✓ {confirmation} ({})", calendar.label(day)));
                Ok(())
            }
            StationEvent::Rejected {
                message, duplicate, ..
            } => {
                let kind = if duplicate {
                    ApiErrorKind::Duplicate
                } else {
                    ApiErrorKind::Validation
                };
                Err(ApiError::new(kind, message).into())
            }
            StationEvent::Refused(guard) => Err(AppError::Other(guard.to_string())),
            _ => Ok(()),
        }
    } else {
        Ok(())
    }
}
