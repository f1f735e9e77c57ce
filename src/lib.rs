//! Base62 short codes for `u32` values and an AES-ECB helper for small
//! payloads.
//!
//! ```
//! use shortcode_tools::codec::base62;
//!
//! assert_eq!(base62::encode(4613355), "jm8X");
//! assert_eq!(base62::decode("jm8X").unwrap(), 4613355);
//! ```

pub mod app;
pub mod cli;
pub mod codec;
pub mod config;
pub mod crypto;
pub mod errors;
pub mod logging;

pub use codec::base62;
pub use crypto::AesCrypto;
pub use errors::{AppError, CodecError, CryptoError};
