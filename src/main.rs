//! confkiosk main entrypoint.

use confkiosk::ui::messages::error;
use confkiosk::{init_tracing, run};

fn main() {
    init_tracing();
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
