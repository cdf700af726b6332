//! confkiosk library root.
//! Exposes the CLI parser, the high-level run() function and internal modules.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::session::SessionContext;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use tracing_subscriber::EnvFilter;

/// Filter for diagnostics on stderr, e.g. `CONFKIOSK_LOG=confkiosk=debug`.
pub const ENV_LOG: &str = "CONFKIOSK_LOG";

/// Install the stderr diagnostics subscriber. Quiet (warnings only) unless
/// `CONFKIOSK_LOG` says otherwise.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, session: &mut SessionContext) -> AppResult<()> {
    use cli::commands;

    match &cli.command {
        Commands::Init => commands::init::handle(cli, cfg, session),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, session),
        Commands::Register { .. } => commands::register::handle(&cli.command, cfg, session),
        Commands::Lookup { .. } => commands::lookup::handle(&cli.command, cfg, session),
        Commands::Scan { .. } => commands::scan::handle(&cli.command, cfg, session),
        Commands::Claim { .. } => commands::claim::handle(&cli.command, cfg, session),
        Commands::Dashboard { .. } => commands::dashboard::handle(&cli.command, cfg, session),
        Commands::Login { .. } => commands::login::handle(&cli.command, cfg, session),
        Commands::Logout => commands::logout::handle(session),
        Commands::Whoami => commands::login::whoami(session),
        Commands::History { .. } => commands::history::handle(&cli.command, session),
        Commands::Countdown { .. } => commands::countdown::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line overrides
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(url) = &cli.api_url {
        cfg.api_base_url = url.clone();
        cfg.validate()?;
    }

    // 4️⃣ local store + session context, shared by every command
    let pool = if cli.test && cli.db.is_none() {
        DbPool::in_memory()?
    } else {
        DbPool::open_ready(&cfg.database)?
    };
    let mut session = SessionContext::new(pool);

    dispatch(&cli, &cfg, &mut session)
}
