mod config;
mod gui;
mod plotter;
mod util;

use clap::Parser;

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).
    let config = config::Config::parse();
    gui::run(config)
}
