use crate::error::CryptoError;
use crate::suri::DeriveJunction;
use seedkey_types::{Address, KeyPairType, PublicKey};
use sp_core::crypto::DeriveError;
use sp_core::{ed25519, sr25519, Pair as _};
use std::fmt;
use zeroize::Zeroizing;

/// A key pair under one of the supported schemes.
#[derive(Clone)]
pub enum KeyPair {
    Ed25519(ed25519::Pair),
    Sr25519(sr25519::Pair),
}

impl KeyPair {
    /// Create from a 32-byte seed (ed25519 secret / sr25519 mini secret)
    pub fn from_seed(key_type: KeyPairType, seed: &[u8; 32]) -> Self {
        match key_type {
            KeyPairType::Ed25519 => KeyPair::Ed25519(ed25519::Pair::from_seed(seed)),
            KeyPairType::Sr25519 => KeyPair::Sr25519(sr25519::Pair::from_seed(seed)),
        }
    }

    /// Restore from the bytes returned by [`KeyPair::secret_bytes`].
    pub fn from_secret_bytes(key_type: KeyPairType, bytes: &[u8]) -> Result<Self, CryptoError> {
        let invalid = |e: sp_core::crypto::SecretStringError| CryptoError::InvalidSecretKey(e.to_string());
        match key_type {
            KeyPairType::Ed25519 => Ok(KeyPair::Ed25519(
                ed25519::Pair::from_seed_slice(bytes).map_err(invalid)?,
            )),
            KeyPairType::Sr25519 => Ok(KeyPair::Sr25519(
                sr25519::Pair::from_seed_slice(bytes).map_err(invalid)?,
            )),
        }
    }

    /// Apply derivation junctions in order.
    pub fn derive<I>(self, junctions: I) -> Result<Self, CryptoError>
    where
        I: IntoIterator<Item = DeriveJunction>,
    {
        let key_type = self.key_type();
        let path = junctions.into_iter();
        let derived = match self {
            KeyPair::Ed25519(pair) => pair
                .derive(path, None)
                .map(|(derived, _)| KeyPair::Ed25519(derived)),
            KeyPair::Sr25519(pair) => pair
                .derive(path, None)
                .map(|(derived, _)| KeyPair::Sr25519(derived)),
        };
        derived.map_err(|e| match e {
            DeriveError::SoftKeyInPath => CryptoError::SoftJunctionUnsupported(key_type),
        })
    }

    pub fn key_type(&self) -> KeyPairType {
        match self {
            KeyPair::Ed25519(_) => KeyPairType::Ed25519,
            KeyPair::Sr25519(_) => KeyPairType::Sr25519,
        }
    }

    pub fn public_key(&self) -> PublicKey {
        match self {
            KeyPair::Ed25519(pair) => PublicKey::from_bytes(pair.public().into()),
            KeyPair::Sr25519(pair) => PublicKey::from_bytes(pair.public().into()),
        }
    }

    /// Address under the given network prefix.
    pub fn address(&self, prefix: u8) -> Result<Address, CryptoError> {
        Ok(Address::with_prefix(self.public_key(), prefix)?)
    }

    /// Export secret key bytes (CAUTION: sensitive).
    /// 32 bytes for ed25519, 64 for sr25519.
    pub fn secret_bytes(&self) -> Zeroizing<Vec<u8>> {
        match self {
            KeyPair::Ed25519(pair) => Zeroizing::new(pair.to_raw_vec()),
            KeyPair::Sr25519(pair) => Zeroizing::new(pair.to_raw_vec()),
        }
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyPair({}, {:x})", self.key_type(), self.public_key())
    }
}
