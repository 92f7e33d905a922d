use std::process::ExitCode;

use clap::Parser;
use dropdown::{logging, App, AppError, Config, SampleSelect};

fn main() -> ExitCode {
    let config = Config::parse();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), AppError> {
    let log_path = logging::init(config)?;
    log::info!("sample-select {} logging to {}", env!("CARGO_PKG_VERSION"), log_path.display());

    App::new(SampleSelect::new())
        .reduced_motion(config.reduced_motion)
        .run()
}
