use thiserror::Error;

pub mod codec;
pub mod config;
pub mod crypto;

pub use codec::CodecError;
pub use config::ConfigError;
pub use crypto::CryptoError;

#[derive(Debug, Error)]
pub enum AppError {
    // Operation errors
    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),
    #[error("Crypto error: {0}")]
    Crypto(#[from] CryptoError),
    #[error("Missing key: set CRYPTO_KEY or pass --key")]
    MissingKey,
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
    // Startup errors
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Logger error: {0}")]
    Logger(String),
}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        AppError::Config(e.to_string())
    }
}

impl AppError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Config(_) => 2,
            AppError::Logger(_) => 3,
            AppError::Codec(_)
            | AppError::Crypto(_)
            | AppError::MissingKey
            | AppError::Output(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(AppError::Config("bad".into()).exit_code(), 2);
        assert_eq!(AppError::Logger("bad".into()).exit_code(), 3);
        assert_eq!(AppError::MissingKey.exit_code(), 1);
        assert_eq!(AppError::from(CodecError::Overflow).exit_code(), 1);
    }

    #[test]
    fn test_messages() {
        let err = AppError::from(CodecError::InvalidCharacter {
            character: '!',
            position: 1,
        });
        assert_eq!(err.to_string(), "Codec error: invalid character '!' at position 1");

        let err = AppError::from(ConfigError::Parse {
            key: "APP_ENVIRONMENT".into(),
            reason: "bad".into(),
        });
        assert_eq!(err.to_string(), "Configuration error: Could not parse APP_ENVIRONMENT: bad");

        assert_eq!(
            CryptoError::InvalidKeyLength(5).to_string(),
            "invalid key length: 5 bytes (expected 16, 24 or 32)"
        );
    }
}
