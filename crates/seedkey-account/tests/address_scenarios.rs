//! End-to-end address resolution scenarios.

use seedkey_account::{generate_seed, raw_validate, update_address, DerivationError};
use seedkey_crypto::{AddressFromSeed, Keyring, DEV_PHRASE};
use seedkey_types::{KeyPairType, SeedKind};

#[test]
fn address_from_seed_is_deterministic() {
    let keyring = Keyring::new();
    for algorithm in KeyPairType::ALL {
        for path in ["", "//0", "//polkadot//stash"] {
            let first = keyring.address_from_seed(DEV_PHRASE, path, algorithm).unwrap();
            let second = keyring.address_from_seed(DEV_PHRASE, path, algorithm).unwrap();
            assert_eq!(first, second);
        }
    }
}

#[test]
fn raw_seed_boundaries() {
    assert!(!raw_validate(""));
    assert!(raw_validate(&"a".repeat(32)));
    assert!(!raw_validate(&"a".repeat(33)));
    assert!(raw_validate(&format!("0x{}", "00".repeat(32))));
    assert!(!raw_validate(&format!("0x{}", "00".repeat(31))));
}

#[test]
fn soft_junction_rejected_regardless_of_seed() {
    for (seed, kind) in [
        (DEV_PHRASE, SeedKind::Development),
        ("not a real phrase", SeedKind::Mnemonic),
        ("", SeedKind::Raw),
        ("Alice", SeedKind::Raw),
    ] {
        let state = update_address(seed, "//hard/soft", kind, KeyPairType::Ed25519);
        assert!(state.derivation_error().is_some(), "seed {:?}", seed);
        assert!(state.address().is_none());
    }
}

#[test]
fn development_kind_is_fixed() {
    for algorithm in KeyPairType::ALL {
        let first = generate_seed(None, "", SeedKind::Development, algorithm);
        let second = generate_seed(Some("ignored"), "", SeedKind::Development, algorithm);

        assert_eq!(first.seed(), DEV_PHRASE);
        assert_eq!(second.seed(), DEV_PHRASE);
        assert!(first.is_seed_valid());
        assert!(first.address().is_some());
        assert_eq!(first, second);
    }
}

#[test]
fn invalid_mnemonic_yields_no_address() {
    for algorithm in KeyPairType::ALL {
        let state = update_address("not a real phrase", "", SeedKind::Mnemonic, algorithm);
        assert!(!state.is_seed_valid());
        assert!(state.address().is_none());
        assert!(state.derivation_error().is_none());
    }
}

#[test]
fn revalidation_is_idempotent() {
    let generated = generate_seed(None, "//1", SeedKind::Mnemonic, KeyPairType::Sr25519);
    let seed = generated.seed();

    let first = update_address(seed, "//1", SeedKind::Mnemonic, KeyPairType::Sr25519);
    let second = update_address(seed, "//1", SeedKind::Mnemonic, KeyPairType::Sr25519);
    assert_eq!(first, second);
    assert_eq!(first, generated);
}

#[test]
fn switching_to_ed25519_with_hard_path() {
    let initial = generate_seed(None, "", SeedKind::Mnemonic, KeyPairType::Sr25519);
    assert!(initial.is_seed_valid());
    assert_eq!(initial.seed_kind(), SeedKind::Mnemonic);
    let original = *initial.address().unwrap();

    let updated = update_address(initial.seed(), "//hard", SeedKind::Mnemonic, KeyPairType::Ed25519);
    assert!(updated.derivation_error().is_none());
    assert!(updated.is_seed_valid());
    let recomputed = *updated.address().unwrap();
    assert_ne!(recomputed, original);
}

#[test]
fn switching_to_ed25519_with_soft_path() {
    let initial = generate_seed(None, "", SeedKind::Mnemonic, KeyPairType::Sr25519);

    let updated = update_address(initial.seed(), "/soft", SeedKind::Mnemonic, KeyPairType::Ed25519);
    assert_eq!(
        updated.derivation_error(),
        Some(&DerivationError::SoftJunction(KeyPairType::Ed25519))
    );
    assert!(updated
        .derivation_error()
        .unwrap()
        .to_string()
        .contains("Soft derivation paths are not allowed"));
    assert!(updated.address().is_none());
}

#[test]
fn malformed_path_reports_parser_message() {
    let state = update_address(DEV_PHRASE, "//a//", SeedKind::Development, KeyPairType::Sr25519);
    match state.derivation_error() {
        Some(DerivationError::Syntax(message)) => assert!(message.starts_with("Invalid secret URI")),
        other => panic!("unexpected {:?}", other),
    }
    assert!(state.address().is_none());
    // Seed validity is judged independently of the path
    assert!(state.is_seed_valid());
}

#[test]
fn hex_and_string_raw_seeds_resolve() {
    let hex = format!("0x{}", "ab".repeat(32));
    for seed in [hex.as_str(), "Alice", "x"] {
        let state = update_address(seed, "//0", SeedKind::Raw, KeyPairType::Ed25519);
        assert!(state.is_complete(), "seed {:?}", seed);
    }
}
