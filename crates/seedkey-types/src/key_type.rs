use crate::error::TypesError;
use std::fmt;
use std::str::FromStr;

/// Key pair cryptographic scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum KeyPairType {
    /// Edwards curve signatures. Only hard derivation junctions.
    Ed25519,
    /// Schnorrkel on Ristretto. Soft and hard junctions.
    #[default]
    Sr25519,
}

impl KeyPairType {
    pub const ALL: [KeyPairType; 2] = [KeyPairType::Ed25519, KeyPairType::Sr25519];

    /// Whether soft (non-hardened) junctions can be applied under this scheme.
    pub fn allows_soft_junctions(&self) -> bool {
        match self {
            KeyPairType::Ed25519 => false,
            KeyPairType::Sr25519 => true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KeyPairType::Ed25519 => "ed25519",
            KeyPairType::Sr25519 => "sr25519",
        }
    }

    /// Human-readable description for selectors.
    pub fn description(&self) -> &'static str {
        match self {
            KeyPairType::Ed25519 => "Edwards (ed25519)",
            KeyPairType::Sr25519 => "Schnorrkel (sr25519)",
        }
    }
}

impl fmt::Display for KeyPairType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyPairType {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ed25519" => Ok(KeyPairType::Ed25519),
            "sr25519" => Ok(KeyPairType::Sr25519),
            _ => Err(TypesError::UnknownKeyPairType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_sr25519() {
        assert_eq!(KeyPairType::default(), KeyPairType::Sr25519);
    }

    #[test]
    fn test_soft_junction_support() {
        assert!(!KeyPairType::Ed25519.allows_soft_junctions());
        assert!(KeyPairType::Sr25519.allows_soft_junctions());
    }

    #[test]
    fn test_parse_roundtrip() {
        for ty in KeyPairType::ALL {
            assert_eq!(ty.to_string().parse::<KeyPairType>().unwrap(), ty);
        }
        assert_eq!("ED25519".parse::<KeyPairType>().unwrap(), KeyPairType::Ed25519);
        assert!(matches!(
            "ecdsa".parse::<KeyPairType>(),
            Err(TypesError::UnknownKeyPairType(_))
        ));
    }
}
