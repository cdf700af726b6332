use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionContext;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::date::short_timestamp;
use std::io::{self, BufRead, Write};

fn read_password() -> AppResult<String> {
    print!("Password: ");
    io::stdout().flush().ok();
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

pub fn handle(cmd: &Commands, cfg: &Config, session: &mut SessionContext) -> AppResult<()> {
    if let Commands::Login { email, password } = cmd {
        let email = email.trim();
        if email.is_empty() {
            return Err(AppError::Validation {
                field: "email",
                message: "Email is required".to_string(),
            });
        }
        let password = match password {
            Some(p) => p.clone(),
            None => read_password()?,
        };
        if password.is_empty() {
            return Err(AppError::Validation {
                field: "password",
                message: "Password is required".to_string(),
            });
        }

        let api = super::http_api(cfg, None)?;
        let logged = session.login(&api, email, &password)?;

        success("Login successful!");
        info(format!(
            "Role: {} → continue with `{}`",
            logged.role.label(),
            logged.role.destination().command()
        ));
    }

    Ok(())
}

/// Print the stored session without contacting the backend.
pub fn whoami(session: &mut SessionContext) -> AppResult<()> {
    match session.current()? {
        Some(s) => {
            println!("Email     : {}", s.email.as_deref().unwrap_or("-"));
            println!("Role      : {}", s.role.label());
            println!(
                "Logged in : {}",
                s.issued_at.as_deref().map(short_timestamp).unwrap_or_else(|| "-".to_string())
            );
            println!("Start     : {}", s.role.destination().command());
        }
        None => warning("Not logged in."),
    }
    Ok(())
}
