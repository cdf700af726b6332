use crate::api::ConferenceApi;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionContext;
use crate::errors::AppResult;
use crate::ui::messages::header;

pub fn handle(cmd: &Commands, cfg: &Config, session: &mut SessionContext) -> AppResult<()> {
    if let Commands::Lookup { token } = cmd {
        let current = session.current()?;
        let api = super::http_api(cfg, current.as_ref())?;

        let participant = api.lookup(token.trim())?;

        header("Participant Info");
        super::print_participant(&participant);
    }

    Ok(())
}
