//! Seedkey Crypto - Key material handling for seedkey.
//!
//! This crate provides:
//! - BIP-39 mnemonic generation and validation
//! - Secret URI parsing (`phrase/soft//hard///password`)
//! - ed25519 and sr25519 key pairs with hierarchical derivation
//! - Address resolution from seeds
//! - Encrypted keystore
//!
//! The mnemonic service, derivation parser, address resolver and random source
//! are traits so callers can substitute their own implementations.

pub mod mnemonic;
pub mod suri;
pub mod pair;
pub mod keyring;
pub mod random;
#[cfg(feature = "serde")]
pub mod keystore;
pub mod error;

pub use mnemonic::{Bip39Mnemonic, MnemonicService};
pub use suri::{DeriveJunction, KeyDerivation, SecretUri, SuriError, SuriParser};
pub use pair::KeyPair;
pub use keyring::{is_hex_seed, AddressFromSeed, Keyring, DEV_PHRASE};
pub use random::{OsRandom, RandomBytes};
#[cfg(feature = "serde")]
pub use keystore::{
    check_keystore, decrypt_keystore, encrypt_keystore, read_keystore, write_keystore,
    KeystoreFile, KeystoreMeta,
};
pub use error::CryptoError;
