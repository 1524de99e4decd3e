//! Trunk entry point: reads the embedded config block and attaches the page
//! behaviors.

use log::LevelFilter;
use portfolio_behaviors::{logging, start, BehaviorConfig};

fn main() {
    // Set the panic hook to log detailed errors to the console
    console_error_panic_hook::set_once();
    // Provisional level so config problems are visible; `start` applies the configured one.
    logging::init(LevelFilter::Info);

    let config = BehaviorConfig::from_page();
    if let Err(e) = start(config) {
        log::error!("Page behaviors not started: {}", e);
    }
}
