pub mod cipher;

pub use cipher::{AesCrypto, AesVariant, BLOCK_LEN};
