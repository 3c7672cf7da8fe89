//! BIP-39 mnemonic phrases.
//!
//! Phrases are turned into 32-byte "mini secrets" from their entropy rather
//! than the full BIP-39 seed, following `substrate-bip39`.

use crate::error::CryptoError;
use crate::random::{OsRandom, RandomBytes};
use bip39::{Language, Mnemonic};
use zeroize::Zeroizing;

/// Word counts accepted for generated phrases.
pub const WORD_COUNTS: [usize; 5] = [12, 15, 18, 21, 24];

/// Generates and validates mnemonic phrases.
pub trait MnemonicService: Send + Sync {
    /// A fresh random phrase.
    fn generate(&self) -> Result<String, CryptoError>;

    /// Whether `phrase` is a well-formed mnemonic with a valid checksum.
    fn validate(&self, phrase: &str) -> bool;
}

/// English BIP-39 word list.
pub struct Bip39Mnemonic {
    word_count: usize,
    random: Box<dyn RandomBytes>,
}

impl Bip39Mnemonic {
    pub fn new(word_count: usize) -> Result<Self, CryptoError> {
        Self::with_random(word_count, Box::new(OsRandom))
    }

    pub fn with_random(word_count: usize, random: Box<dyn RandomBytes>) -> Result<Self, CryptoError> {
        if !WORD_COUNTS.contains(&word_count) {
            return Err(CryptoError::InvalidWordCount(word_count));
        }
        Ok(Self { word_count, random })
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }
}

impl Default for Bip39Mnemonic {
    fn default() -> Self {
        Self {
            word_count: 12,
            random: Box::new(OsRandom),
        }
    }
}

impl std::fmt::Debug for Bip39Mnemonic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bip39Mnemonic")
            .field("word_count", &self.word_count)
            .finish()
    }
}

impl MnemonicService for Bip39Mnemonic {
    fn generate(&self) -> Result<String, CryptoError> {
        // 3 words per 4 bytes of entropy
        let entropy_len = self.word_count / 3 * 4;
        let mut entropy = Zeroizing::new([0u8; 32]);
        self.random.fill(&mut entropy[..entropy_len]);

        let mnemonic = Mnemonic::from_entropy_in(Language::English, &entropy[..entropy_len])
            .map_err(|_| CryptoError::InvalidWordCount(self.word_count))?;
        Ok(mnemonic.to_string())
    }

    fn validate(&self, phrase: &str) -> bool {
        Mnemonic::parse_in(Language::English, phrase).is_ok()
    }
}

/// 32-byte mini secret for a phrase and optional password.
pub fn mini_secret_from_phrase(phrase: &str, password: &str) -> Result<Zeroizing<[u8; 32]>, CryptoError> {
    let mnemonic =
        Mnemonic::parse_in(Language::English, phrase).map_err(|_| CryptoError::InvalidMnemonic)?;
    let entropy = Zeroizing::new(mnemonic.to_entropy());
    mini_secret_from_entropy(&entropy, password)
}

/// 32-byte mini secret from raw mnemonic entropy (16 to 32 bytes, multiple of 4).
pub fn mini_secret_from_entropy(entropy: &[u8], password: &str) -> Result<Zeroizing<[u8; 32]>, CryptoError> {
    let seed = substrate_bip39::seed_from_entropy(entropy, password)
        .map(Zeroizing::new)
        .map_err(|_| CryptoError::InvalidSeedLength(entropy.len()))?;

    let mut mini = Zeroizing::new([0u8; 32]);
    mini.copy_from_slice(&seed[..32]);
    Ok(mini)
}
