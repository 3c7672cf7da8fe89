use sp_core::crypto::PublicError;
use thiserror::Error;

/// Errors that can occur in type operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TypesError {
    #[error("Invalid address format: {0}")]
    InvalidAddressFormat(String),

    #[error("Invalid address length")]
    InvalidAddressLength,

    #[error("Invalid address checksum")]
    InvalidAddressChecksum,

    #[error("Unsupported SS58 prefix: {0}")]
    UnsupportedPrefix(u16),

    #[error("Invalid public key length: expected {expected}, got {actual}")]
    InvalidPublicKeyLength { expected: usize, actual: usize },

    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    #[error("Base58 error: {0}")]
    Base58Error(String),

    #[error("Unknown key pair type: {0}")]
    UnknownKeyPairType(String),

    #[error("Unknown seed kind: {0}")]
    UnknownSeedKind(String),
}

impl From<hex::FromHexError> for TypesError {
    fn from(e: hex::FromHexError) -> Self {
        TypesError::InvalidHex(e.to_string())
    }
}

impl From<PublicError> for TypesError {
    fn from(e: PublicError) -> Self {
        match e {
            PublicError::BadBase58 => TypesError::Base58Error(e.to_string()),
            PublicError::BadLength => TypesError::InvalidAddressLength,
            PublicError::InvalidChecksum => TypesError::InvalidAddressChecksum,
            other => TypesError::InvalidAddressFormat(other.to_string()),
        }
    }
}
