//! Serde implementations for seedkey-types
//!
//! Every type serializes as its string form so that JSON and TOML stay readable.

#[cfg(feature = "serde")]
mod serde_impls {
    use crate::{Address, KeyPairType, PublicKey, SeedKind};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    // Address
    impl Serialize for Address {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            self.to_string().serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Address {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            Address::from_str(&s).map_err(serde::de::Error::custom)
        }
    }

    // PublicKey
    impl Serialize for PublicKey {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            format!("0x{}", hex::encode(self.as_bytes())).serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for PublicKey {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            let s = s.strip_prefix("0x").unwrap_or(&s);
            let bytes = hex::decode(s).map_err(serde::de::Error::custom)?;
            PublicKey::from_slice(&bytes).map_err(serde::de::Error::custom)
        }
    }

    // KeyPairType
    impl Serialize for KeyPairType {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de> Deserialize<'de> for KeyPairType {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            KeyPairType::from_str(&s).map_err(serde::de::Error::custom)
        }
    }

    // SeedKind
    impl Serialize for SeedKind {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }

    impl<'de> Deserialize<'de> for SeedKind {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            SeedKind::from_str(&s).map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use crate::{Address, KeyPairType, PublicKey, SeedKind};

    #[test]
    fn test_address_json() {
        let addr = Address::from_public_key(PublicKey::from_bytes([3u8; 32]));
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, format!("\"{}\"", addr));

        let back: Address = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }

    #[test]
    fn test_enum_tokens_json() {
        assert_eq!(serde_json::to_string(&SeedKind::Mnemonic).unwrap(), "\"bip\"");
        assert_eq!(serde_json::to_string(&KeyPairType::Ed25519).unwrap(), "\"ed25519\"");

        let kind: SeedKind = serde_json::from_str("\"dev\"").unwrap();
        assert_eq!(kind, SeedKind::Development);
        assert!(serde_json::from_str::<KeyPairType>("\"rsa\"").is_err());
    }

    #[test]
    fn test_public_key_json() {
        let key = PublicKey::from_bytes([0x11; 32]);
        let json = serde_json::to_string(&key).unwrap();
        assert!(json.starts_with("\"0x1111"));
        let back: PublicKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }
}
