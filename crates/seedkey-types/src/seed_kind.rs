use crate::error::TypesError;
use std::fmt;
use std::str::FromStr;

/// Where the secret seed comes from, and how it is validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SeedKind {
    /// BIP-39 mnemonic phrase
    #[default]
    Mnemonic,
    /// Raw seed: short string or 0x-prefixed 32-byte hex
    Raw,
    /// Fixed development phrase, not editable
    Development,
}

impl SeedKind {
    pub const ALL: [SeedKind; 3] = [SeedKind::Mnemonic, SeedKind::Raw, SeedKind::Development];

    /// Short token used in config files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            SeedKind::Mnemonic => "bip",
            SeedKind::Raw => "raw",
            SeedKind::Development => "dev",
        }
    }

    /// Text shown when offering the kind as a choice.
    pub fn label(&self) -> &'static str {
        match self {
            SeedKind::Mnemonic => "Mnemonic",
            SeedKind::Raw => "Raw seed",
            SeedKind::Development => "Development",
        }
    }

    /// Label of the seed input for this kind.
    pub fn field_label(&self) -> &'static str {
        match self {
            SeedKind::Mnemonic => "mnemonic seed",
            SeedKind::Raw => "seed (hex or string)",
            SeedKind::Development => "development seed",
        }
    }

    pub fn is_read_only(&self) -> bool {
        matches!(self, SeedKind::Development)
    }
}

impl fmt::Display for SeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeedKind {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bip" | "mnemonic" => Ok(SeedKind::Mnemonic),
            "raw" => Ok(SeedKind::Raw),
            "dev" | "development" => Ok(SeedKind::Development),
            _ => Err(TypesError::UnknownSeedKind(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens() {
        assert_eq!(SeedKind::Mnemonic.as_str(), "bip");
        assert_eq!(SeedKind::Raw.as_str(), "raw");
        assert_eq!(SeedKind::Development.as_str(), "dev");

        for kind in SeedKind::ALL {
            assert_eq!(kind.as_str().parse::<SeedKind>().unwrap(), kind);
        }
        assert_eq!("development".parse::<SeedKind>().unwrap(), SeedKind::Development);
        assert!("hex".parse::<SeedKind>().is_err());
    }

    #[test]
    fn test_only_development_is_read_only() {
        assert!(SeedKind::Development.is_read_only());
        assert!(!SeedKind::Mnemonic.is_read_only());
        assert!(!SeedKind::Raw.is_read_only());
    }
}
