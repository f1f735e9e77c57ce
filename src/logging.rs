use env_logger::Env;

use crate::{
    config::{Config, Environment},
    errors::AppError,
};

/// Filter used when `RUST_LOG` is not set in the process environment
pub fn default_filter(config: &Config) -> String {
    match config.app.environment {
        Environment::Development => config.app.log_level.clone(),
        Environment::Testing => "debug".to_string(),
        Environment::Production => "warn".to_string(),
    }
}

// Logs go to stderr so command output on stdout stays clean
pub fn setup_logging(config: &Config) -> Result<(), AppError> {
    let env = Env::default()
        .filter_or("RUST_LOG", default_filter(config))
        .write_style_or("RUST_LOG_STYLE", "auto");

    env_logger::Builder::from_env(env)
        .target(env_logger::Target::Stderr)
        .try_init()
        .map_err(|e| AppError::Logger(format!("Failed to initialize logger: {}", e)))
}
