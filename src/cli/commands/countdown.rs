use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::Countdown;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, success};
use chrono::Local;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

fn format_countdown(c: &Countdown) -> String {
    format!(
        "{:>3} DAYS  {:02} HOURS  {:02} MINUTES  {:02} SECONDS",
        c.days, c.hours, c.minutes, c.seconds
    )
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Countdown { watch } = cmd {
        let calendar = cfg.calendar();
        let target = calendar.opening(cfg.opening_time).ok_or_else(|| {
            AppError::Config(format!("opening time {} does not exist locally", cfg.opening_time))
        })?;

        header(format!(
            "Conference: {} & {}",
            calendar.day_one.format("%-d"),
            calendar.day_two.format("%-d %B, %Y")
        ));

        loop {
            let left = Countdown::until(Local::now(), target);
            if left.is_over() {
                success("The conference is open!");
                break;
            }
            if !*watch {
                println!("{}", format_countdown(&left));
                break;
            }

            print!("\r{}", format_countdown(&left));
            io::stdout().flush().ok();
            thread::sleep(Duration::from_secs(1));
        }
    }

    Ok(())
}
