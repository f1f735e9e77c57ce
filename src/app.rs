use log::{debug, info};
use serde_json::{json, Value};

use crate::{
    cli::{Cli, Commands},
    codec::base62,
    config::Config,
    crypto::AesCrypto,
    errors::AppError,
};

// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;

/// Runs one command and returns the text to print on stdout.
pub fn run(cli: Cli, config: &Config) -> AppResult<String> {
    info!("Running {} v{}", config.app.name, config.app.version);
    debug!("Command: {:?}", cli.command);

    let (input, output) = match &cli.command {
        Commands::Encode { num } => (json!(num), json!(base62::encode(*num))),
        Commands::Decode { code } => (json!(code), json!(base62::decode(code)?)),
        Commands::Encrypt { plaintext } => {
            let crypto = crypto_for(&cli, config)?;
            (json!(plaintext), json!(crypto.encrypt(plaintext.as_bytes())?))
        }
        Commands::Decrypt { ciphertext } => {
            let crypto = crypto_for(&cli, config)?;
            (json!(ciphertext), json!(crypto.decrypt_to_string(ciphertext)?))
        }
    };

    if cli.json {
        return Ok(serde_json::to_string(&json!({
            "input": input,
            "output": output,
        }))?);
    }

    Ok(match output {
        Value::String(text) => text,
        other => other.to_string(),
    })
}

// The --key flag wins over CRYPTO_KEY
fn crypto_for(cli: &Cli, config: &Config) -> AppResult<AesCrypto> {
    let key = cli
        .key
        .as_deref()
        .or(config.crypto.key.as_deref())
        .ok_or(AppError::MissingKey)?;

    Ok(AesCrypto::new(key.as_bytes())?)
}
