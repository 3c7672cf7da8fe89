//! Interactive account creation state.

use crate::address_state::{AddressState, SeedResolver};
use crate::create::{create_account, ActionStatus, CreateOptions};
use crate::error::AccountError;
use seedkey_crypto::Keyring;
use seedkey_types::{KeyPairType, SeedKind};
use std::fmt;
use std::path::Path;
use tracing::debug;
use zeroize::Zeroizing;

pub const SUCCESS_MESSAGE: &str = "created account";

/// Seed kinds offered to the user; development comes first when enabled.
pub fn seed_kind_options(is_development: bool) -> Vec<SeedKind> {
    let mut kinds = Vec::with_capacity(3);
    if is_development {
        kinds.push(SeedKind::Development);
    }
    kinds.extend([SeedKind::Mnemonic, SeedKind::Raw]);
    kinds
}

/// Name, password and seed inputs of one account creation.
pub struct CreateFlow {
    keyring: Keyring,
    resolver: SeedResolver,
    state: AddressState,
    name: String,
    is_name_valid: bool,
    password: Zeroizing<String>,
    is_pass_valid: bool,
    is_development: bool,
}

impl CreateFlow {
    pub fn new(supplied_seed: Option<String>, algorithm: Option<KeyPairType>, is_development: bool) -> Self {
        Self::with_keyring(Keyring::default(), supplied_seed, algorithm, is_development)
    }

    /// A flow seeded from `supplied_seed` (raw kind) or a fresh mnemonic.
    ///
    /// `keyring` renders the validated addresses and derives the committed
    /// account, so both use the same network prefix.
    pub fn with_keyring(
        keyring: Keyring,
        supplied_seed: Option<String>,
        algorithm: Option<KeyPairType>,
        is_development: bool,
    ) -> Self {
        Self::with_resolver(
            keyring,
            SeedResolver::with_keyring(keyring),
            supplied_seed,
            algorithm,
            is_development,
        )
    }

    // `resolver` must resolve addresses through `keyring`
    fn with_resolver(
        keyring: Keyring,
        resolver: SeedResolver,
        supplied_seed: Option<String>,
        algorithm: Option<KeyPairType>,
        is_development: bool,
    ) -> Self {
        let supplied = supplied_seed.filter(|seed| !seed.is_empty());
        let seed_kind = if supplied.is_some() {
            SeedKind::Raw
        } else {
            SeedKind::Mnemonic
        };
        let state = resolver.generate_seed(
            supplied.as_deref(),
            "",
            seed_kind,
            algorithm.unwrap_or_default(),
        );

        Self {
            keyring,
            resolver,
            state,
            name: String::new(),
            is_name_valid: false,
            password: Zeroizing::new(String::new()),
            is_pass_valid: false,
            is_development,
        }
    }

    pub fn state(&self) -> &AddressState {
        &self.state
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_name_valid(&self) -> bool {
        self.is_name_valid
    }

    pub fn is_pass_valid(&self) -> bool {
        self.is_pass_valid
    }

    pub fn is_development(&self) -> bool {
        self.is_development
    }

    pub fn keyring(&self) -> &Keyring {
        &self.keyring
    }

    pub fn on_change_name(&mut self, name: &str) {
        self.is_name_valid = !name.trim().is_empty();
        self.name = name.to_string();
    }

    pub fn on_change_password(&mut self, password: &str) {
        self.is_pass_valid = !password.is_empty();
        self.password = Zeroizing::new(password.to_string());
    }

    /// Replace the seed. The development seed cannot be edited.
    pub fn on_change_seed(&mut self, seed: &str) -> Result<(), AccountError> {
        let kind = self.state.seed_kind();
        if kind.is_read_only() {
            return Err(AccountError::ReadOnlySeed(kind));
        }
        self.revalidate(seed.to_string(), self.state.derivation_path().to_string(), self.state.algorithm());
        Ok(())
    }

    pub fn on_change_derivation_path(&mut self, derivation_path: &str) {
        self.revalidate(self.state.seed().to_string(), derivation_path.to_string(), self.state.algorithm());
    }

    pub fn on_change_algorithm(&mut self, algorithm: KeyPairType) {
        self.revalidate(self.state.seed().to_string(), self.state.derivation_path().to_string(), algorithm);
    }

    /// Switch seed kind, generating a fresh seed. Re-selecting the current
    /// kind keeps the existing seed.
    pub fn select_seed_kind(&mut self, seed_kind: SeedKind) -> Result<(), AccountError> {
        if seed_kind == SeedKind::Development && !self.is_development {
            return Err(AccountError::SeedKindUnavailable(seed_kind));
        }
        if seed_kind == self.state.seed_kind() {
            return Ok(());
        }

        debug!(from = %self.state.seed_kind(), to = %seed_kind, "seed kind changed");
        self.state = self.resolver.generate_seed(
            None,
            self.state.derivation_path(),
            seed_kind,
            self.state.algorithm(),
        );
        Ok(())
    }

    pub fn seed_kind_options(&self) -> Vec<SeedKind> {
        seed_kind_options(self.is_development)
    }

    pub fn is_valid(&self) -> bool {
        self.state.is_complete() && self.is_name_valid && self.is_pass_valid
    }

    pub fn suri(&self) -> String {
        self.state.suri()
    }

    /// Create the account if every input is valid.
    ///
    /// The genesis hash is dropped in development mode so the account is
    /// usable on any chain.
    pub fn commit(&self, genesis_hash: Option<&str>, backup_dir: &Path) -> Option<ActionStatus> {
        if !self.is_valid() {
            return None;
        }

        let options = CreateOptions {
            name: self.name.trim().to_string(),
            genesis_hash: if self.is_development {
                None
            } else {
                genesis_hash.map(str::to_string)
            },
            tags: Vec::new(),
        };

        Some(create_account(
            &self.keyring,
            &self.suri(),
            self.state.algorithm(),
            options,
            &self.password,
            SUCCESS_MESSAGE,
            backup_dir,
        ))
    }

    fn revalidate(&mut self, seed: String, derivation_path: String, algorithm: KeyPairType) {
        self.state = self
            .resolver
            .update_address(&seed, &derivation_path, self.state.seed_kind(), algorithm);
    }
}

impl fmt::Debug for CreateFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateFlow")
            .field("keyring", &self.keyring)
            .field("state", &self.state)
            .field("name", &self.name)
            .field("is_name_valid", &self.is_name_valid)
            .field("is_pass_valid", &self.is_pass_valid)
            .field("is_development", &self.is_development)
            .finish_non_exhaustive()
    }
}
