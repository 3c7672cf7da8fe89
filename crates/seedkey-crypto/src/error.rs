use crate::suri::SuriError;
use seedkey_types::{KeyPairType, TypesError};
use thiserror::Error;

/// Errors that can occur in cryptographic operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CryptoError {
    #[error("Invalid bip39 mnemonic specified")]
    InvalidMnemonic,

    #[error("Unsupported mnemonic word count: {0}")]
    InvalidWordCount(usize),

    #[error("Specified phrase is not a valid mnemonic and is invalid as a raw seed at {0} bytes (max 32)")]
    InvalidRawSeed(usize),

    #[error("Invalid seed length: expected 32, got {0}")]
    InvalidSeedLength(usize),

    #[error(transparent)]
    Suri(#[from] SuriError),

    #[error("Soft derivation paths are not allowed on {0}")]
    SoftJunctionUnsupported(KeyPairType),

    #[error("Invalid secret key: {0}")]
    InvalidSecretKey(String),

    #[error("Keystore error: {0}")]
    KeystoreError(String),

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Types(#[from] TypesError),
}

impl From<std::io::Error> for CryptoError {
    fn from(e: std::io::Error) -> Self {
        CryptoError::KeystoreError(e.to_string())
    }
}
