// src/main.rs
use std::process::ExitCode;

use env_logger::Env;
use fastqc_summary::{app, cli};

fn main() -> ExitCode {
    let config = cli::load_config();

    env_logger::Builder::from_env(Env::default().default_filter_or(config.log_level.as_str()))
        .format_timestamp(None)
        .init();

    match app::run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
