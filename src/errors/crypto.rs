use std::string::FromUtf8Error;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CryptoError {
    /// AES accepts 16, 24 or 32 byte keys only
    #[error("invalid key length: {0} bytes (expected 16, 24 or 32)")]
    InvalidKeyLength(usize),

    #[error("invalid base64 input: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Ciphertext is not a whole number of blocks, or the padding is wrong
    #[error("invalid ciphertext or padding")]
    Unpad,

    #[error("decrypted payload is not valid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),
}
