use crate::error::TypesError;
use crate::public_key::PublicKey;
use sp_core::crypto::{Ss58AddressFormat, Ss58Codec};
use sp_core::sr25519;
use std::fmt;
use std::str::FromStr;

/// Account address: a 32-byte public key tagged with a network prefix.
/// Display format: SS58.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address {
    public_key: PublicKey,
    prefix: u8,
}

impl Address {
    /// Generic substrate prefix, used when nothing else is configured.
    pub const DEFAULT_PREFIX: u8 = 42;
    /// Largest prefix that fits the single-byte form.
    pub const MAX_SIMPLE_PREFIX: u8 = 63;

    /// Create an address under the default prefix.
    pub fn from_public_key(public_key: PublicKey) -> Self {
        Self {
            public_key,
            prefix: Self::DEFAULT_PREFIX,
        }
    }

    /// Create an address under an explicit prefix.
    pub fn with_prefix(public_key: PublicKey, prefix: u8) -> Result<Self, TypesError> {
        if prefix > Self::MAX_SIMPLE_PREFIX {
            return Err(TypesError::UnsupportedPrefix(prefix.into()));
        }
        Ok(Self { public_key, prefix })
    }

    /// Same key, different network prefix.
    pub fn to_prefix(&self, prefix: u8) -> Result<Self, TypesError> {
        Self::with_prefix(self.public_key, prefix)
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Hex form of the public key, with 0x prefix
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.public_key.as_bytes()))
    }

    // SS58 only looks at the raw key bytes, so both schemes share one codec
    fn to_public(&self) -> sr25519::Public {
        sr25519::Public::from_raw(*self.public_key.as_bytes())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = Ss58AddressFormat::custom(self.prefix.into());
        f.write_str(&self.to_public().to_ss58check_with_version(format))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({}, prefix {})", self, self.prefix)
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Address {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Raw public keys ("0x...") land on the default prefix
        if s.starts_with("0x") || s.starts_with("0X") {
            let bytes = hex::decode(&s[2..])?;
            return Ok(Self::from_public_key(PublicKey::from_slice(&bytes)?));
        }

        let (public, format) = sr25519::Public::from_ss58check_with_version(s)?;
        let prefix = u16::from(format);
        let prefix = u8::try_from(prefix)
            .ok()
            .filter(|p| *p <= Self::MAX_SIMPLE_PREFIX)
            .ok_or(TypesError::UnsupportedPrefix(prefix))?;

        Ok(Self {
            public_key: PublicKey::from_slice(public.as_ref())?,
            prefix,
        })
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        self.public_key.as_bytes()
    }
}
