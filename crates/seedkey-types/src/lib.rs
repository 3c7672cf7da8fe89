//! Seedkey Types - Core type definitions shared by the seedkey crates.
//!
//! This crate provides:
//! - Addresses (32-byte public keys, SS58 encoded)
//! - Public keys
//! - Key pair types (ed25519, sr25519)
//! - Seed kinds (mnemonic, raw, development)

pub mod address;
pub mod public_key;
pub mod key_type;
pub mod seed_kind;
pub mod error;

mod serialization;

pub use address::Address;
pub use public_key::PublicKey;
pub use key_type::KeyPairType;
pub use seed_kind::SeedKind;
pub use error::TypesError;

