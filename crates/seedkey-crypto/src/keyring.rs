//! Address resolution from secret URIs.

use crate::error::CryptoError;
use crate::mnemonic::{mini_secret_from_phrase, WORD_COUNTS};
use crate::pair::KeyPair;
use crate::suri::SecretUri;
use seedkey_types::{Address, KeyPairType};
use zeroize::Zeroizing;

/// Well-known development phrase. Never holds real funds.
pub const DEV_PHRASE: &str = "bottom drive obey lake curtain smoke basket hold race lonely fit walk";

/// Computes the address of a seed phrase under a derivation path and scheme.
pub trait AddressFromSeed: Send + Sync {
    fn address_from_seed(
        &self,
        seed: &str,
        derivation_path: &str,
        key_type: KeyPairType,
    ) -> Result<Address, CryptoError>;
}

/// `0x` followed by exactly 64 hex digits.
pub fn is_hex_seed(seed: &str) -> bool {
    match seed.strip_prefix("0x") {
        Some(digits) => digits.len() == 64 && digits.bytes().all(|b| b.is_ascii_hexdigit()),
        None => false,
    }
}

/// Resolves secret URIs into key pairs and addresses.
#[derive(Debug, Clone, Copy)]
pub struct Keyring {
    ss58_prefix: u8,
}

impl Keyring {
    pub fn new() -> Self {
        Self {
            ss58_prefix: Address::DEFAULT_PREFIX,
        }
    }

    /// Keyring rendering addresses under `prefix`.
    pub fn with_prefix(prefix: u8) -> Result<Self, CryptoError> {
        if prefix > Address::MAX_SIMPLE_PREFIX {
            return Err(seedkey_types::TypesError::UnsupportedPrefix(prefix.into()).into());
        }
        Ok(Self { ss58_prefix: prefix })
    }

    pub fn ss58_prefix(&self) -> u8 {
        self.ss58_prefix
    }

    /// Build the key pair described by a full secret URI.
    pub fn pair_from_uri(&self, suri: &str, key_type: KeyPairType) -> Result<KeyPair, CryptoError> {
        let uri: SecretUri = suri.parse()?;
        let password = uri.password.as_deref().unwrap_or("");
        let seed = seed_from_phrase(&uri.phrase, password)?;

        KeyPair::from_seed(key_type, &seed).derive(uri.junctions)
    }

    pub fn address_of(&self, pair: &KeyPair) -> Result<Address, CryptoError> {
        pair.address(self.ss58_prefix)
    }
}

impl Default for Keyring {
    fn default() -> Self {
        Self::new()
    }
}

impl AddressFromSeed for Keyring {
    fn address_from_seed(
        &self,
        seed: &str,
        derivation_path: &str,
        key_type: KeyPairType,
    ) -> Result<Address, CryptoError> {
        let suri = format!("{}{}", seed.trim(), derivation_path);
        let pair = self.pair_from_uri(&suri, key_type)?;
        self.address_of(&pair)
    }
}

/// Hex seeds decode directly, phrases of mnemonic length go through BIP-39,
/// anything else is raw material padded with spaces to 32 bytes.
fn seed_from_phrase(phrase: &str, password: &str) -> Result<Zeroizing<[u8; 32]>, CryptoError> {
    if is_hex_seed(phrase) {
        let mut seed = Zeroizing::new([0u8; 32]);
        hex::decode_to_slice(&phrase[2..], &mut seed[..])
            .map_err(|e| CryptoError::InvalidSecretKey(e.to_string()))?;
        return Ok(seed);
    }

    if WORD_COUNTS.contains(&phrase.split(' ').count()) {
        return mini_secret_from_phrase(phrase, password);
    }

    let raw = phrase.as_bytes();
    if raw.len() > 32 {
        return Err(CryptoError::InvalidRawSeed(raw.len()));
    }

    let mut seed = Zeroizing::new([b' '; 32]);
    seed[..raw.len()].copy_from_slice(raw);
    Ok(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suri::SuriError;

    const ALICE_ED25519: &str = "5FA9nQDVg267DEd8m1ZypXLBnvN7SFxYwV7ndqSYGiN9TTpu";
    const BOB_SR25519: &str = "5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty";

    #[test]
    fn test_is_hex_seed() {
        assert!(is_hex_seed(&format!("0x{}", "00".repeat(32))));
        assert!(is_hex_seed(&format!("0x{}", "aF".repeat(32))));
        assert!(!is_hex_seed(&format!("0x{}", "00".repeat(31))));
        assert!(!is_hex_seed(&format!("0x{}", "00".repeat(33))));
        assert!(!is_hex_seed(&format!("0x{}", "zz".repeat(32))));
        assert!(!is_hex_seed(&"00".repeat(33)));
    }

    #[test]
    fn test_address_deterministic() {
        let keyring = Keyring::new();
        for key_type in KeyPairType::ALL {
            let a = keyring.address_from_seed(DEV_PHRASE, "//Alice", key_type).unwrap();
            let b = keyring.address_from_seed(DEV_PHRASE, "//Alice", key_type).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_dev_alice_address() {
        let keyring = Keyring::new();
        let alice = keyring
            .address_from_seed(DEV_PHRASE, "//Alice", KeyPairType::Sr25519)
            .unwrap();
        assert_eq!(alice.to_string(), "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY");
    }

    #[test]
    fn test_well_known_accounts() {
        let keyring = Keyring::new();
        let bob = keyring.address_from_seed(DEV_PHRASE, "//Bob", KeyPairType::Sr25519).unwrap();
        let alice_ed = keyring.address_from_seed(DEV_PHRASE, "//Alice", KeyPairType::Ed25519).unwrap();

        assert_eq!(bob.to_string(), BOB_SR25519);
        assert_eq!(alice_ed.to_string(), ALICE_ED25519);
    }

    #[test]
    fn test_matches_sp_core_pairs() {
        use sp_core::crypto::{Ss58AddressFormat, Ss58Codec};
        use sp_core::{sr25519, Pair};

        let keyring = Keyring::new();
        for path in ["", "//Alice", "//polkadot/0//stash", "/1/2"] {
            let suri = format!("{}{}", DEV_PHRASE, path);
            let expected = sr25519::Pair::from_string(&suri, None)
                .unwrap()
                .public()
                .to_ss58check_with_version(Ss58AddressFormat::custom(42));
            let actual = keyring.address_from_seed(DEV_PHRASE, path, KeyPairType::Sr25519).unwrap();
            assert_eq!(actual.to_string(), expected);
        }
    }

    #[test]
    fn test_seed_is_trimmed() {
        let keyring = Keyring::new();
        let padded = format!("  {}\n", DEV_PHRASE);
        assert_eq!(
            keyring.address_from_seed(&padded, "", KeyPairType::Sr25519).unwrap(),
            keyring.address_from_seed(DEV_PHRASE, "", KeyPairType::Sr25519).unwrap()
        );
    }

    #[test]
    fn test_path_and_password_change_address() {
        let keyring = Keyring::new();
        let root = keyring.address_from_seed(DEV_PHRASE, "", KeyPairType::Sr25519).unwrap();
        let child = keyring.address_from_seed(DEV_PHRASE, "//0", KeyPairType::Sr25519).unwrap();
        let soft = keyring.address_from_seed(DEV_PHRASE, "/0", KeyPairType::Sr25519).unwrap();
        let with_password = keyring
            .address_from_seed(DEV_PHRASE, "///secret", KeyPairType::Sr25519)
            .unwrap();

        assert_ne!(root, child);
        assert_ne!(child, soft);
        assert_ne!(root, with_password);
    }

    #[test]
    fn test_raw_and_hex_seeds() {
        let keyring = Keyring::new();
        let short = keyring.address_from_seed("Alice", "", KeyPairType::Ed25519).unwrap();
        let padded = keyring
            .address_from_seed(&format!("0x{}", hex::encode(format!("{:<32}", "Alice"))), "", KeyPairType::Ed25519)
            .unwrap();
        assert_eq!(short, padded);
    }

    #[test]
    fn test_failures() {
        let keyring = Keyring::new();

        // 12 words, but not a valid mnemonic
        let bogus = vec!["zzz"; 12].join(" ");
        assert_eq!(
            keyring.address_from_seed(&bogus, "", KeyPairType::Sr25519).unwrap_err(),
            CryptoError::InvalidMnemonic
        );

        let long = "a".repeat(33);
        assert_eq!(
            keyring.address_from_seed(&long, "", KeyPairType::Sr25519).unwrap_err(),
            CryptoError::InvalidRawSeed(33)
        );

        assert_eq!(
            keyring.address_from_seed(DEV_PHRASE, "/soft", KeyPairType::Ed25519).unwrap_err(),
            CryptoError::SoftJunctionUnsupported(KeyPairType::Ed25519)
        );

        assert_eq!(
            keyring.address_from_seed("", "//Alice", KeyPairType::Sr25519).unwrap_err(),
            CryptoError::Suri(SuriError::InvalidPhrase)
        );
        assert!(matches!(
            keyring.address_from_seed("bad-seed", "", KeyPairType::Sr25519).unwrap_err(),
            CryptoError::Suri(SuriError::Malformed(_))
        ));
    }

    #[test]
    fn test_prefix() {
        let generic = Keyring::new();
        let custom = Keyring::with_prefix(5).unwrap();
        let a = generic.address_from_seed(DEV_PHRASE, "", KeyPairType::Sr25519).unwrap();
        let b = custom.address_from_seed(DEV_PHRASE, "", KeyPairType::Sr25519).unwrap();

        assert_eq!(a.public_key(), b.public_key());
        assert_eq!(b.prefix(), 5);
        assert!(Keyring::with_prefix(64).is_err());
    }
}
