use std::process;

use clap::Parser;
use log::error;

use shortcode_tools::{
    app::{self, AppResult},
    cli::Cli,
    config::Config,
    errors::AppError,
    logging,
};

fn run() -> AppResult<String> {
    let cli = Cli::parse();

    // Load configuration, then bring up logging based on it
    let config = Config::load()?;
    logging::setup_logging(&config)?;

    app::run(cli, &config)
}

fn main() {
    match run() {
        Ok(output) => println!("{}", output),
        Err(err) => {
            // Startup failures happen before (or while) the logger comes up
            if !matches!(err, AppError::Config(_) | AppError::Logger(_)) {
                error!("{}", err);
            }
            // Always reaches stderr, whatever the log filter
            eprintln!("error: {}", err);
            process::exit(err.exit_code());
        }
    }
}
