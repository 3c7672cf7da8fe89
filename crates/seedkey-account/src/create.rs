//! Account commit: encrypt the derived key and write its keystore backup.

use crate::error::AccountError;
use seedkey_crypto::{encrypt_keystore, write_keystore, KeystoreMeta, Keyring};
use seedkey_types::{Address, KeyPairType};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

/// Metadata attached to a new account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CreateOptions {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genesis_hash: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Outcome of an account action, reported to the caller instead of an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionStatus {
    pub action: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<Address>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup: Option<PathBuf>,
}

impl ActionStatus {
    pub const CREATE: &'static str = "create";

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

/// Derive the pair for `suri`, encrypt it with `password` and write the
/// keystore to `backup_dir/<address>.json`.
///
/// Failures are folded into an `Error` status carrying the error text.
pub fn create_account(
    keyring: &Keyring,
    suri: &str,
    key_type: KeyPairType,
    options: CreateOptions,
    password: &str,
    success_message: &str,
    backup_dir: &Path,
) -> ActionStatus {
    match try_create(keyring, suri, key_type, options, password, backup_dir) {
        Ok((address, path)) => {
            info!(%address, %key_type, backup = %path.display(), "account created");
            ActionStatus {
                action: ActionStatus::CREATE.to_string(),
                status: Status::Success,
                account: Some(address),
                message: success_message.to_string(),
                backup: Some(path),
            }
        }
        Err(e) => {
            warn!(error = %e, "account creation failed");
            ActionStatus {
                action: ActionStatus::CREATE.to_string(),
                status: Status::Error,
                account: None,
                message: e.to_string(),
                backup: None,
            }
        }
    }
}

fn try_create(
    keyring: &Keyring,
    suri: &str,
    key_type: KeyPairType,
    options: CreateOptions,
    password: &str,
    backup_dir: &Path,
) -> Result<(Address, PathBuf), AccountError> {
    let pair = keyring.pair_from_uri(suri, key_type)?;
    let address = keyring.address_of(&pair)?;

    let meta = KeystoreMeta {
        name: options.name,
        genesis_hash: options.genesis_hash,
        tags: options.tags,
        when_created: now_millis()?,
    };

    let keystore = encrypt_keystore(&pair, &address, password, meta)?;
    let path = write_keystore(&keystore, backup_dir)?;

    Ok((address, path))
}

fn now_millis() -> Result<u64, AccountError> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .map_err(|e| AccountError::Clock(e.to_string()))
}
