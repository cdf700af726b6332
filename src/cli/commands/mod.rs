pub mod claim;
pub mod config;
pub mod countdown;
pub mod dashboard;
pub mod history;
pub mod init;
pub mod log;
pub mod login;
pub mod logout;
pub mod lookup;
pub mod register;
pub mod scan;

use crate::api::HttpApi;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::participant::Participant;
use crate::models::session::AdminSession;
use crate::utils::colors::colorize_optional;
use crate::utils::formatting::bold;

/// Backend client for this run, carrying the session token when there is one.
pub(crate) fn http_api(cfg: &Config, session: Option<&AdminSession>) -> AppResult<HttpApi> {
    let api = HttpApi::new(&cfg.api_base_url, cfg.request_timeout_secs)?;
    Ok(api.with_bearer(session.map(|s| s.token.clone())))
}

/// Participant card shown by lookup, register and the scan station.
pub(crate) fn print_participant(p: &Participant) {
    println!("  {:<10} {}", "Name", bold(&p.name));
    println!("  {:<10} {}", "Email", p.email);
    println!("  {:<10} {}", "Category", p.category.label());
    println!(
        "  {:<10} {}",
        "Phone",
        colorize_optional(p.phone.as_deref().unwrap_or(""))
    );
    println!(
        "  {:<10} {}",
        "College",
        colorize_optional(p.college.as_deref().unwrap_or(""))
    );
    println!("  {:<10} {}", "QR Code", p.qr_token);
}
