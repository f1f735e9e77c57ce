//! AES-ECB payload encryption with PKCS#7 padding and standard base64 output.
//!
//! The wire format matches payloads produced by OpenSSL-style `AES-*-ECB`
//! helpers: the AES variant follows the key length and the ciphertext is
//! rendered with the padded standard base64 alphabet. Key management is the
//! caller's job.

use std::fmt;

use aes::{Aes128, Aes192, Aes256};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use ecb::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyInit};
use log::debug;

use crate::errors::CryptoError;

type Result<T> = std::result::Result<T, CryptoError>;

type Aes128EcbEnc = ecb::Encryptor<Aes128>;
type Aes192EcbEnc = ecb::Encryptor<Aes192>;
type Aes256EcbEnc = ecb::Encryptor<Aes256>;
type Aes128EcbDec = ecb::Decryptor<Aes128>;
type Aes192EcbDec = ecb::Decryptor<Aes192>;
type Aes256EcbDec = ecb::Decryptor<Aes256>;

/// AES block size in bytes.
pub const BLOCK_LEN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AesVariant {
    Aes128,
    Aes192,
    Aes256,
}

impl AesVariant {
    /// Picks the AES variant for a raw key length.
    pub fn from_key_len(len: usize) -> Result<Self> {
        match len {
            16 => Ok(AesVariant::Aes128),
            24 => Ok(AesVariant::Aes192),
            32 => Ok(AesVariant::Aes256),
            _ => Err(CryptoError::InvalidKeyLength(len)),
        }
    }
}

/// Encrypts and decrypts payloads under a fixed key.
#[derive(Clone)]
pub struct AesCrypto {
    key: Vec<u8>,
    variant: AesVariant,
}

impl AesCrypto {
    /// Creates a helper for `key`, which must be 16, 24 or 32 bytes long.
    pub fn new(key: impl Into<Vec<u8>>) -> Result<Self> {
        let key = key.into();
        let variant = AesVariant::from_key_len(key.len())?;
        Ok(Self { key, variant })
    }

    pub fn variant(&self) -> AesVariant {
        self.variant
    }

    /// Encrypts `plaintext` and returns the ciphertext as base64 text.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<String> {
        let key = self.key.as_slice();
        let ciphertext = match self.variant {
            AesVariant::Aes128 => Aes128EcbEnc::new_from_slice(key)
                .map_err(|_| CryptoError::InvalidKeyLength(key.len()))?
                .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
            AesVariant::Aes192 => Aes192EcbEnc::new_from_slice(key)
                .map_err(|_| CryptoError::InvalidKeyLength(key.len()))?
                .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
            AesVariant::Aes256 => Aes256EcbEnc::new_from_slice(key)
                .map_err(|_| CryptoError::InvalidKeyLength(key.len()))?
                .encrypt_padded_vec_mut::<Pkcs7>(plaintext),
        };

        Ok(STANDARD.encode(ciphertext))
    }

    /// Decodes base64 `text` and decrypts it back to the original bytes.
    pub fn decrypt(&self, text: &str) -> Result<Vec<u8>> {
        let ciphertext = STANDARD.decode(text).map_err(|e| {
            debug!("Rejected ciphertext with invalid base64: {}", e);
            CryptoError::from(e)
        })?;

        let key = self.key.as_slice();
        let plaintext = match self.variant {
            AesVariant::Aes128 => Aes128EcbDec::new_from_slice(key)
                .map_err(|_| CryptoError::InvalidKeyLength(key.len()))?
                .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext),
            AesVariant::Aes192 => Aes192EcbDec::new_from_slice(key)
                .map_err(|_| CryptoError::InvalidKeyLength(key.len()))?
                .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext),
            AesVariant::Aes256 => Aes256EcbDec::new_from_slice(key)
                .map_err(|_| CryptoError::InvalidKeyLength(key.len()))?
                .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext),
        };

        plaintext.map_err(|_| {
            debug!(
                "Rejected {} byte ciphertext: bad block alignment or padding",
                ciphertext.len()
            );
            CryptoError::Unpad
        })
    }

    /// Like [`AesCrypto::decrypt`], for payloads that are UTF-8 text.
    pub fn decrypt_to_string(&self, text: &str) -> Result<String> {
        let bytes = self.decrypt(text)?;
        Ok(String::from_utf8(bytes)?)
    }
}

impl fmt::Debug for AesCrypto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AesCrypto")
            .field("key", &"<redacted>")
            .field("variant", &self.variant)
            .finish()
    }
}
