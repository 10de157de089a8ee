mod cli;

use clap::Parser;
use cli::args::WordFrequencyArgs;
use cli::commands::execute_command;
use log::error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = WordFrequencyArgs::parse();

    // RUST_LOG wins over the verbosity flags when set
    let default_filter = match args.verbosity() {
        0 => "error",
        1 => "warn",
        2 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match execute_command(&args) {
        Ok(status) if status.is_success() => ExitCode::SUCCESS,
        Ok(status) if status.is_client_error() => ExitCode::from(2),
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            error!("Error handling command: {}", e);
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}
