use crate::api::ConferenceApi;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionContext;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::models::participant::RegistrationPayload;
use crate::ui::messages::{header, success};

/// Register a participant on the spot.
pub fn handle(cmd: &Commands, cfg: &Config, session: &mut SessionContext) -> AppResult<()> {
    if let Commands::Register {
        name,
        email,
        phone,
        college,
        category,
    } = cmd
    {
        //
        // 1. Validate the form before anything leaves the station
        //
        let payload = RegistrationPayload::from_form(name, email, phone, college, category)?;

        //
        // 2. Send it
        //
        let current = session.current()?;
        let api = super::http_api(cfg, current.as_ref())?;
        let participant = api.register(&payload)?;

        ttlog_quiet(
            &session.db().conn,
            "register",
            &participant.qr_token,
            &format!("Registered {} <{}>", participant.name, participant.email),
        );

        //
        // 3. Show the badge data
        //
        success(format!("Registration successful! Welcome, {}", participant.name));
        header("Participant");
        super::print_participant(&participant);
    }

    Ok(())
}
