//! Seedkey Account - Seed validation and account creation.
//!
//! Resolves a seed, a seed kind, a derivation path and a key pair type into an
//! [`AddressState`], re-validating on every input change, and commits valid
//! states as encrypted keystore backups.

pub mod address_state;
pub mod create;
pub mod flow;
pub mod error;

pub use address_state::{
    generate_seed, raw_validate, update_address, AddressState, SeedResolver, MAX_RAW_SEED_LEN,
};
pub use create::{create_account, ActionStatus, CreateOptions, Status};
pub use flow::{seed_kind_options, CreateFlow, SUCCESS_MESSAGE};
pub use error::{AccountError, DerivationError};
