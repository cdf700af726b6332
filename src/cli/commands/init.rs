use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::session::SessionContext;
use crate::db::log::ttlog;
use crate::db::migrate::applied_versions;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command.
///
/// The database was already opened and migrated by `run()`; this writes the
/// config file and reports what is in place.
pub fn handle(cli: &Cli, cfg: &Config, session: &mut SessionContext) -> AppResult<()> {
    println!("⚙️  Initializing confkiosk…");

    let path = cfg.init_all(cli.test)?;
    if cli.test {
        println!("📄 Config file : {} (not written in test mode)", path.display());
    } else {
        println!("📄 Config file : {}", path.display());
    }
    println!("🗄️  Database   : {}", cfg.database);
    println!("🌐 Backend    : {}", cfg.api_base_url);

    let conn = &session.db().conn;
    let versions = applied_versions(conn)?;
    println!("🧱 Migrations : {} applied", versions.len());
    for v in &versions {
        println!("   - {v}");
    }

    if let Err(e) = ttlog(conn, "init", &cfg.database, "Local database initialized") {
        warning(format!("Failed to write internal log: {e}"));
    }

    success("confkiosk initialization completed!");
    Ok(())
}
