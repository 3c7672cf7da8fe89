//! Secret URI parsing.
//!
//! A secret URI is a seed phrase followed by an optional derivation path and an
//! optional password: `phrase/soft//hard///password`. Soft (`/x`) and hard
//! (`//x`) junctions may be repeated and mixed; the `///password` suffix occurs
//! at most once and runs to the end of the input.
//!
//! Grammar and junction chain codes are those of `sp_core::crypto::SecretUri`.

use sp_core::crypto::{ExposeSecret, SecretUri as SubstrateUri};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use sp_core::crypto::DeriveJunction;

/// Errors produced while parsing a secret URI.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SuriError {
    #[error("Unable to match provided value to a secret URI")]
    InvalidPhrase,

    #[error("Invalid secret URI: {0}")]
    Malformed(String),
}

/// A parsed secret URI.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretUri {
    pub phrase: String,
    pub junctions: Vec<DeriveJunction>,
    pub password: Option<String>,
}

impl SecretUri {
    pub fn has_soft_junction(&self) -> bool {
        self.junctions.iter().any(DeriveJunction::is_soft)
    }
}

// Secrets stay out of debug output
impl fmt::Debug for SecretUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretUri")
            .field("junctions", &self.junctions)
            .field("has_password", &self.password.is_some())
            .finish_non_exhaustive()
    }
}

impl FromStr for SecretUri {
    type Err = SuriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // sp-core substitutes the development phrase when none is given
        if s.is_empty() || s.starts_with('/') {
            return Err(SuriError::InvalidPhrase);
        }

        let uri = SubstrateUri::from_str(s).map_err(|e| SuriError::Malformed(e.to_string()))?;

        Ok(Self {
            phrase: uri.phrase.expose_secret().to_string(),
            junctions: uri.junctions,
            password: uri.password.map(|p| p.expose_secret().to_string()),
        })
    }
}

/// Parses a combined seed + derivation path into its components.
pub trait KeyDerivation: Send + Sync {
    fn parse(&self, suri: &str) -> Result<SecretUri, SuriError>;
}

/// Default `KeyDerivation` implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuriParser;

impl KeyDerivation for SuriParser {
    fn parse(&self, suri: &str) -> Result<SecretUri, SuriError> {
        suri.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASE: &str = "bottom drive obey lake curtain smoke basket hold race lonely fit walk";

    #[test]
    fn test_phrase_only() {
        let uri: SecretUri = PHRASE.parse().unwrap();
        assert_eq!(uri.phrase, PHRASE);
        assert!(uri.junctions.is_empty());
        assert_eq!(uri.password, None);
    }

    #[test]
    fn test_mixed_path_and_password() {
        let uri: SecretUri = format!("{}//polkadot/0//stash///secret/pass", PHRASE)
            .parse()
            .unwrap();

        assert_eq!(
            uri.junctions,
            vec![
                DeriveJunction::hard("polkadot"),
                DeriveJunction::soft(0u64),
                DeriveJunction::hard("stash"),
            ]
        );
        assert_eq!(uri.password.as_deref(), Some("secret/pass"));
        assert!(uri.has_soft_junction());
    }

    #[test]
    fn test_hex_phrase() {
        let seed = format!("0x{}", "ab".repeat(32));
        let uri: SecretUri = format!("{}//1", seed).parse().unwrap();
        assert_eq!(uri.phrase, seed);
        assert!(!uri.has_soft_junction());
    }

    #[test]
    fn test_missing_phrase_rejected() {
        assert_eq!("".parse::<SecretUri>(), Err(SuriError::InvalidPhrase));
        assert_eq!("//Alice".parse::<SecretUri>(), Err(SuriError::InvalidPhrase));
        assert_eq!("/0".parse::<SecretUri>(), Err(SuriError::InvalidPhrase));
    }

    #[test]
    fn test_malformed() {
        assert!(matches!("bad-char".parse::<SecretUri>(), Err(SuriError::Malformed(_))));
        assert!(matches!("seed//a//".parse::<SecretUri>(), Err(SuriError::Malformed(_))));
        assert!(matches!("seed/".parse::<SecretUri>(), Err(SuriError::Malformed(_))));
    }

    #[test]
    fn test_empty_password_allowed() {
        let uri: SecretUri = "seed//a///".parse().unwrap();
        assert_eq!(uri.password.as_deref(), Some(""));
        assert_eq!(uri.junctions.len(), 1);
    }

    #[test]
    fn test_numeric_chain_code() {
        let uri: SecretUri = "seed/1".parse().unwrap();
        let mut expected = [0u8; 32];
        expected[0] = 1;
        assert_eq!(uri.junctions[0].unwrap_inner(), expected);
    }

    #[test]
    fn test_string_chain_code() {
        let uri: SecretUri = "seed//Alice".parse().unwrap();
        let mut expected = [0u8; 32];
        // compact length prefix, then the label bytes
        expected[0] = 5 << 2;
        expected[1..6].copy_from_slice(b"Alice");

        assert!(uri.junctions[0].is_hard());
        assert_eq!(uri.junctions[0].unwrap_inner(), expected);
    }

    #[test]
    fn test_debug_hides_phrase() {
        let uri: SecretUri = format!("{}///hunter2", PHRASE).parse().unwrap();
        let debug = format!("{:?}", uri);
        assert!(!debug.contains("bottom"));
        assert!(!debug.contains("hunter2"));
    }

    proptest::proptest! {
        #[test]
        fn prop_junctions_follow_path(
            parts in proptest::collection::vec(("(/|//)", "[A-Za-z0-9_]{1,12}"), 0..6),
        ) {
            let path: String = parts.iter().map(|(sep, label)| format!("{}{}", sep, label)).collect();
            let uri: SecretUri = format!("{}{}", PHRASE, path).parse().unwrap();

            let expected: Vec<DeriveJunction> = parts
                .iter()
                .map(|(sep, label)| DeriveJunction::from(format!("{}{}", &sep[1..], label)))
                .collect();
            proptest::prop_assert_eq!(&uri.junctions, &expected);
            proptest::prop_assert_eq!(uri.has_soft_junction(), parts.iter().any(|(sep, _)| sep == "/"));
        }

        #[test]
        fn prop_numeric_chain_code(index in proptest::prelude::any::<u64>()) {
            let uri: SecretUri = format!("seed//{}", index).parse().unwrap();
            let code = uri.junctions[0].unwrap_inner();
            proptest::prop_assert_eq!(&code[..8], &index.to_le_bytes()[..]);
            proptest::prop_assert!(code[8..].iter().all(|b| *b == 0));
        }
    }
}
