use seedkey_crypto::CryptoError;
use seedkey_types::{KeyPairType, SeedKind};
use thiserror::Error;

/// Why a derivation path cannot be used with a seed and key pair type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DerivationError {
    /// The combined seed and path does not parse; carries the parser message.
    #[error("{0}")]
    Syntax(String),

    /// The path contains a soft junction the key pair type cannot apply.
    #[error("Soft derivation paths are not allowed on {0}")]
    SoftJunction(KeyPairType),
}

/// Errors raised by the account creation flow.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AccountError {
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error("Seed kind '{0}' is only available in development mode")]
    SeedKindUnavailable(SeedKind),

    #[error("The {0} seed is read-only")]
    ReadOnlySeed(SeedKind),

    #[error("System clock error: {0}")]
    Clock(String),
}
