use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::process::Command;

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

fn open_in(editor: &str, path: &std::path::Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *edit_config {
            if !path.exists() {
                return Err(AppError::Config(format!(
                    "{} does not exist, run `confkiosk init` first",
                    path.display()
                )));
            }

            let fallback = default_editor();
            let chosen = editor.clone().unwrap_or_else(|| fallback.clone());

            if open_in(&chosen, &path) {
                success(format!("Configuration file edited using '{chosen}'"));
            } else if chosen != fallback {
                warning(format!("Editor '{chosen}' not available, falling back to '{fallback}'"));
                if open_in(&fallback, &path) {
                    success(format!("Configuration file edited using '{fallback}'"));
                } else {
                    return Err(AppError::Config(format!("could not run editor '{fallback}'")));
                }
            } else {
                return Err(AppError::Config(format!("could not run editor '{chosen}'")));
            }

            Config::load()?;
        }
    }

    Ok(())
}
