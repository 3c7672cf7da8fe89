//! Seed and derivation path validation.
//!
//! An [`AddressState`] ties together a seed, its kind, a derivation path and a
//! key pair type with the address they resolve to. It is never edited in
//! place: every input change produces a new state through
//! [`SeedResolver::generate_seed`] (seed kind changed, fresh seed) or
//! [`SeedResolver::update_address`] (anything else, re-validation only).

use crate::error::DerivationError;
use seedkey_crypto::{
    is_hex_seed, AddressFromSeed, Bip39Mnemonic, CryptoError, KeyDerivation, Keyring,
    MnemonicService, OsRandom, RandomBytes, SuriParser, DEV_PHRASE,
};
use seedkey_types::{Address, KeyPairType, SeedKind};
use std::fmt;
use tracing::{debug, warn};

/// Longest raw (non-hex) seed, in characters.
pub const MAX_RAW_SEED_LEN: usize = 32;

/// Validated snapshot of the seed inputs and the address they produce.
///
/// `address` is present iff there is no derivation error, the seed is valid
/// and the address computation succeeded.
#[derive(Clone, PartialEq, Eq)]
pub struct AddressState {
    seed: String,
    seed_kind: SeedKind,
    derivation_path: String,
    algorithm: KeyPairType,
    address: Option<Address>,
    is_seed_valid: bool,
    derivation_error: Option<DerivationError>,
}

impl AddressState {
    pub fn seed(&self) -> &str {
        &self.seed
    }

    pub fn seed_kind(&self) -> SeedKind {
        self.seed_kind
    }

    pub fn derivation_path(&self) -> &str {
        &self.derivation_path
    }

    pub fn algorithm(&self) -> KeyPairType {
        self.algorithm
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_seed_valid(&self) -> bool {
        self.is_seed_valid
    }

    pub fn derivation_error(&self) -> Option<&DerivationError> {
        self.derivation_error.as_ref()
    }

    /// Seed and derivation path as one secret URI.
    pub fn suri(&self) -> String {
        format!("{}{}", self.seed, self.derivation_path)
    }

    /// Ready to be committed: address resolved, no errors.
    pub fn is_complete(&self) -> bool {
        self.address.is_some() && self.derivation_error.is_none() && self.is_seed_valid
    }
}

// The seed is secret; keep it out of logs
impl fmt::Debug for AddressState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AddressState")
            .field("seed_kind", &self.seed_kind)
            .field("derivation_path", &self.derivation_path)
            .field("algorithm", &self.algorithm)
            .field("address", &self.address)
            .field("is_seed_valid", &self.is_seed_valid)
            .field("derivation_error", &self.derivation_error)
            .finish_non_exhaustive()
    }
}

/// Raw seeds are 1 to 32 characters of free text, or a 0x-prefixed 32-byte hex string.
pub fn raw_validate(seed: &str) -> bool {
    let len = seed.chars().count();
    (len > 0 && len <= MAX_RAW_SEED_LEN) || is_hex_seed(seed)
}

/// Produces and re-validates [`AddressState`]s using pluggable collaborators.
pub struct SeedResolver {
    mnemonic: Box<dyn MnemonicService>,
    derivation: Box<dyn KeyDerivation>,
    keyring: Box<dyn AddressFromSeed>,
    random: Box<dyn RandomBytes>,
}

impl SeedResolver {
    pub fn new(
        mnemonic: Box<dyn MnemonicService>,
        derivation: Box<dyn KeyDerivation>,
        keyring: Box<dyn AddressFromSeed>,
        random: Box<dyn RandomBytes>,
    ) -> Self {
        Self {
            mnemonic,
            derivation,
            keyring,
            random,
        }
    }

    /// Default collaborators, addresses rendered by `keyring`.
    pub fn with_keyring(keyring: Keyring) -> Self {
        Self::new(
            Box::new(Bip39Mnemonic::default()),
            Box::new(SuriParser),
            Box::new(keyring),
            Box::new(OsRandom),
        )
    }

    /// A fresh seed of the given kind.
    ///
    /// A non-empty supplied seed is kept for raw seeds; otherwise 32 random
    /// bytes are hex encoded.
    pub fn new_seed(&self, supplied: Option<&str>, seed_kind: SeedKind) -> Result<String, CryptoError> {
        match seed_kind {
            SeedKind::Mnemonic => self.mnemonic.generate(),
            SeedKind::Development => Ok(DEV_PHRASE.to_string()),
            SeedKind::Raw => match supplied {
                Some(seed) if !seed.is_empty() => Ok(seed.to_string()),
                _ => Ok(format!("0x{}", hex::encode(self.random.random_32()))),
            },
        }
    }

    /// State for a freshly generated seed.
    ///
    /// Address computation is expected to succeed for generated seeds. When it
    /// does not (a supplied raw seed, or a preserved path the key pair type
    /// rejects), the seed is kept and the state is re-validated instead, so the
    /// result still reports the reason.
    pub fn generate_seed(
        &self,
        supplied: Option<&str>,
        derivation_path: &str,
        seed_kind: SeedKind,
        algorithm: KeyPairType,
    ) -> AddressState {
        let seed = match self.new_seed(supplied, seed_kind) {
            Ok(seed) => seed,
            Err(e) => {
                warn!(error = %e, kind = %seed_kind, "seed generation failed");
                return AddressState {
                    seed: String::new(),
                    seed_kind,
                    derivation_path: derivation_path.to_string(),
                    algorithm,
                    address: None,
                    is_seed_valid: false,
                    derivation_error: None,
                };
            }
        };

        match self.keyring.address_from_seed(&seed, derivation_path, algorithm) {
            Ok(address) => {
                debug!(kind = %seed_kind, %algorithm, %address, "generated seed");
                AddressState {
                    seed,
                    seed_kind,
                    derivation_path: derivation_path.to_string(),
                    algorithm,
                    address: Some(address),
                    is_seed_valid: true,
                    derivation_error: None,
                }
            }
            Err(e) => {
                warn!(error = %e, kind = %seed_kind, "address computation failed for generated seed");
                self.update_address(&seed, derivation_path, seed_kind, algorithm)
            }
        }
    }

    /// Re-validate the inputs without generating anything.
    pub fn update_address(
        &self,
        seed: &str,
        derivation_path: &str,
        seed_kind: SeedKind,
        algorithm: KeyPairType,
    ) -> AddressState {
        let derivation_error = self
            .validate_derivation_path(seed, derivation_path, algorithm)
            .err();
        let mut is_seed_valid = self.is_seed_valid(seed, seed_kind);
        let mut address = None;

        if derivation_error.is_none() && is_seed_valid {
            match self.keyring.address_from_seed(seed, derivation_path, algorithm) {
                Ok(resolved) => address = Some(resolved),
                Err(e) => {
                    debug!(error = %e, "address computation rejected seed");
                    is_seed_valid = false;
                }
            }
        }

        debug!(
            kind = %seed_kind,
            %algorithm,
            is_seed_valid,
            derivation_error = ?derivation_error,
            "address updated"
        );

        AddressState {
            seed: seed.to_string(),
            seed_kind,
            derivation_path: derivation_path.to_string(),
            algorithm,
            address,
            is_seed_valid,
            derivation_error,
        }
    }

    /// Check that `seed + derivation_path` parses and that every junction is
    /// allowed under `algorithm`.
    pub fn validate_derivation_path(
        &self,
        seed: &str,
        derivation_path: &str,
        algorithm: KeyPairType,
    ) -> Result<(), DerivationError> {
        let uri = self
            .derivation
            .parse(&format!("{}{}", seed, derivation_path))
            .map_err(|e| DerivationError::Syntax(e.to_string()))?;

        if !algorithm.allows_soft_junctions() && uri.has_soft_junction() {
            return Err(DerivationError::SoftJunction(algorithm));
        }

        Ok(())
    }

    /// Kind-specific seed check.
    pub fn is_seed_valid(&self, seed: &str, seed_kind: SeedKind) -> bool {
        match seed_kind {
            SeedKind::Raw => raw_validate(seed),
            SeedKind::Mnemonic | SeedKind::Development => self.mnemonic.validate(seed),
        }
    }
}

impl Default for SeedResolver {
    fn default() -> Self {
        Self::with_keyring(Keyring::default())
    }
}

impl fmt::Debug for SeedResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedResolver").finish_non_exhaustive()
    }
}

/// [`SeedResolver::generate_seed`] with the default collaborators.
pub fn generate_seed(
    supplied: Option<&str>,
    derivation_path: &str,
    seed_kind: SeedKind,
    algorithm: KeyPairType,
) -> AddressState {
    SeedResolver::default().generate_seed(supplied, derivation_path, seed_kind, algorithm)
}

/// [`SeedResolver::update_address`] with the default collaborators.
pub fn update_address(
    seed: &str,
    derivation_path: &str,
    seed_kind: SeedKind,
    algorithm: KeyPairType,
) -> AddressState {
    SeedResolver::default().update_address(seed, derivation_path, seed_kind, algorithm)
}
