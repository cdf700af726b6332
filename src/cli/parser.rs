use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for confkiosk
/// Conference desk kiosk: registration, QR lookup, meal claims, dashboard
#[derive(Parser)]
#[command(
    name = "confkiosk",
    version = env!("CARGO_PKG_VERSION"),
    about = "A conference desk kiosk: on-spot registration, QR lookup, meal-claim scanning and admin dashboard",
    long_about = None
)]
pub struct Cli {
    /// Override local database path (useful for tests or a second station)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the backend base URL (wins over config and CONFKIOSK_API_URL)
    #[arg(global = true, long = "api-url")]
    pub api_url: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the local database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Print the internal audit log
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Register a participant on the spot
    Register {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,

        #[arg(long)]
        college: String,

        /// presenter (p) or attendee (a)
        #[arg(long, default_value = "attendee")]
        category: String,
    },

    /// Look up a participant by QR token
    Lookup {
        /// QR token as printed on the badge
        token: String,
    },

    /// Run the interactive meal scan station
    ///
    /// Type or scan a QR token and press Enter. Then pick a meal:
    ///   b = breakfast, l = lunch, h = high tea
    /// Other inputs:
    ///   r = reset (scan another QR code), q = quit
    Scan {
        /// Claim this meal right after each successful lookup
        #[arg(long = "meal", short = 'm')]
        meal: Option<String>,
    },

    /// Look up a token and claim one meal in a single step
    Claim {
        /// QR token as printed on the badge
        token: String,

        /// breakfast, lunch or hitea
        #[arg(long = "meal", short = 'm')]
        meal: String,

        /// Date used to resolve the conference day (YYYY-MM-DD, default today)
        #[arg(long = "date")]
        date: Option<String>,
    },

    /// Show the admin dashboard (requires login)
    Dashboard {
        /// Number of latest claims to list
        #[arg(long = "latest", default_value_t = 10)]
        latest: usize,
    },

    /// Log in as committee member / admin
    Login {
        #[arg(long)]
        email: String,

        /// Password (prompted on stdin when omitted)
        #[arg(long)]
        password: Option<String>,
    },

    /// Clear the stored session
    Logout,

    /// Show the stored session
    Whoami,

    /// Show what this station scanned
    History {
        /// Only today's scans
        #[arg(long = "today")]
        today: bool,

        /// Export the journal to FILE instead of printing it
        #[arg(long = "export", value_name = "FILE")]
        export: Option<String>,

        /// Export format
        #[arg(long = "format", value_enum, default_value = "csv", requires = "export")]
        format: ExportFormat,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f', requires = "export")]
        force: bool,
    },

    /// Time left until the conference opens
    Countdown {
        /// Refresh every second until the doors open (Ctrl-C to stop)
        #[arg(long = "watch")]
        watch: bool,
    },
}
