use crate::cli::parser::Commands;
use crate::core::log::LogLogic;
use crate::core::session::SessionContext;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, session: &mut SessionContext) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        LogLogic::print_log(session.db())?;
    }

    Ok(())
}
