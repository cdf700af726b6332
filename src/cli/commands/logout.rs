use crate::core::session::SessionContext;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Clear the stored session, unconditionally.
pub fn handle(session: &mut SessionContext) -> AppResult<()> {
    match session.logout()? {
        Some(previous) => success(format!(
            "Logged out{}.",
            previous.email.map(|e| format!(" {e}")).unwrap_or_default()
        )),
        None => info("No active session, nothing to clear."),
    }
    info("Run `confkiosk login` to sign in again.");
    Ok(())
}
