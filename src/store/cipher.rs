use core::fmt;

use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use rand::RngCore;
use rand::rngs::OsRng;
use sha2::Sha256;

use crate::errors::AppError;

/// Application-wide PBKDF2 salt. Changing it makes every existing file unreadable.
pub const APP_SALT: [u8; 16] = [
    0x82, 0x7a, 0xaa, 0x7d, 0xa5, 0x03, 0xd2, 0xf0, 0x05, 0xda, 0xfd, 0x63, 0xbd, 0xe4, 0x3a, 0x13,
];
pub const KDF_ITERATIONS: u32 = 480_000;
pub const KEY_LEN: usize = 32;
pub const NONCE_LEN: usize = 12;

/// A password-derived key, held URL-safe base64 encoded.
#[derive(Clone, PartialEq, Eq)]
pub struct EncryptionKey(String);

impl EncryptionKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn to_bytes(&self) -> Result<Vec<u8>, AppError> {
        let raw = URL_SAFE.decode(self.0.as_bytes())?;
        if raw.len() != KEY_LEN {
            return Err(AppError::Crypto(format!(
                "expected a {KEY_LEN} byte key, got {}",
                raw.len()
            )));
        }
        Ok(raw)
    }
}

impl fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EncryptionKey(..)")
    }
}

pub fn derive_key(password: &str) -> EncryptionKey {
    derive_key_with_iterations(password, KDF_ITERATIONS)
}

pub fn derive_key_with_iterations(password: &str, iterations: u32) -> EncryptionKey {
    let mut raw = [0u8; KEY_LEN];
    pbkdf2::pbkdf2_hmac::<Sha256>(password.as_bytes(), &APP_SALT, iterations, &mut raw);
    EncryptionKey(URL_SAFE.encode(raw))
}

/// Authenticated encryption of whole snapshots. The blob layout is
/// `nonce || ciphertext || tag`.
pub struct Cipher {
    inner: Aes256Gcm,
}

impl Cipher {
    pub fn new(key: &EncryptionKey) -> Result<Self, AppError> {
        let raw = key.to_bytes()?;
        let inner = Aes256Gcm::new_from_slice(&raw)
            .map_err(|_| AppError::Crypto("invalid key length".to_string()))?;
        Ok(Self { inner })
    }

    pub fn from_password(password: &str) -> Result<Self, AppError> {
        Self::new(&derive_key(password))
    }

    pub fn encrypt_data(&self, raw_data: &[u8]) -> Result<Vec<u8>, AppError> {
        let mut nonce_bytes = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce_bytes);

        let ciphertext = self
            .inner
            .encrypt(Nonce::from_slice(&nonce_bytes), raw_data)
            .map_err(|_| AppError::Crypto("encryption failed".to_string()))?;

        let mut blob = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        blob.extend_from_slice(&nonce_bytes);
        blob.extend_from_slice(&ciphertext);
        Ok(blob)
    }

    /// Any authentication failure, including a truncated blob, is reported
    /// as [`AppError::WrongPassword`].
    pub fn decrypt_data(&self, blob: &[u8]) -> Result<Vec<u8>, AppError> {
        if blob.len() < NONCE_LEN {
            return Err(AppError::WrongPassword);
        }
        let (nonce, ciphertext) = blob.split_at(NONCE_LEN);

        self.inner
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| AppError::WrongPassword)
    }
}
