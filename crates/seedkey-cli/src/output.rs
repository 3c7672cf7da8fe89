//! Output formatting utilities.
//!
//! Pretty printing and JSON views for CLI commands.

use colored::Colorize;
use seedkey_account::{ActionStatus, AddressState};
use seedkey_types::{KeyPairType, SeedKind};
use serde_json::json;

/// JSON view of an address state. Includes the seed.
pub fn state_json(state: &AddressState) -> serde_json::Value {
    json!({
        "seed": state.seed(),
        "seed_kind": state.seed_kind(),
        "derivation_path": state.derivation_path(),
        "algorithm": state.algorithm(),
        "address": state.address(),
        "public_key": state.address().map(|a| a.to_hex()),
        "is_seed_valid": state.is_seed_valid(),
        "derivation_error": state.derivation_error().map(|e| e.to_string()),
    })
}

pub fn kinds_json(kinds: &[SeedKind]) -> serde_json::Value {
    serde_json::Value::Array(
        kinds
            .iter()
            .map(|kind| json!({ "value": kind, "text": kind.label() }))
            .collect(),
    )
}

pub fn algorithms_json(algorithms: &[KeyPairType]) -> serde_json::Value {
    serde_json::Value::Array(
        algorithms
            .iter()
            .map(|algorithm| json!({ "value": algorithm, "text": algorithm.description() }))
            .collect(),
    )
}

/// JSON view of a create status. `generated_seed` is added when the seed was
/// produced by the tool, so the caller can record it.
pub fn status_json(
    status: &ActionStatus,
    generated_seed: Option<&str>,
) -> Result<serde_json::Value, serde_json::Error> {
    let mut json = serde_json::to_value(status)?;
    if let (Some(seed), Some(object)) = (generated_seed, json.as_object_mut()) {
        if status.is_success() {
            object.insert("seed".to_string(), seed.into());
        }
    }
    Ok(json)
}

/// Print an address state.
pub fn print_state(state: &AddressState, show_seed: bool) {
    println!("{}", "Address".bold());
    println!("{}", "=".repeat(50));
    if show_seed {
        println!("Seed:         {}", state.seed().bright_yellow());
    }
    println!("Seed kind:    {}", state.seed_kind().label());
    println!(
        "Path:         {}",
        if state.derivation_path().is_empty() {
            "(none)".dimmed().to_string()
        } else {
            state.derivation_path().to_string()
        }
    );
    println!("Algorithm:    {}", state.algorithm().description().bright_cyan());

    let validity = if state.is_seed_valid() {
        "valid".green()
    } else {
        "invalid".red()
    };
    println!("Seed status:  {}", validity);

    if let Some(error) = state.derivation_error() {
        println!("Path error:   {}", error.to_string().red());
    }

    match state.address() {
        Some(address) => {
            println!("Address:      {}", address.to_string().bright_green());
            println!("Public key:   {}", address.to_hex());
        }
        None => println!("Address:      {}", "unavailable".red()),
    }
}

pub fn print_kinds(kinds: &[SeedKind]) {
    println!("{}", "Seed kinds".bold());
    for kind in kinds {
        println!("  • {:<4} {}", kind.to_string().bright_cyan(), kind.label());
    }
}

pub fn print_algorithms(algorithms: &[KeyPairType]) {
    println!("{}", "Key pair types".bold());
    for algorithm in algorithms {
        println!("  • {:<8} {}", algorithm.to_string().bright_cyan(), algorithm.description());
    }
}

pub fn print_status(status: &ActionStatus) {
    if status.is_success() {
        print_success(&status.message);
        if let Some(account) = &status.account {
            println!("Address: {}", account.to_string().bright_green());
        }
        if let Some(backup) = &status.backup {
            print_info(&format!("Keystore backup written to {}", backup.display()));
        }
    } else {
        print_error(&status.message);
    }
}

/// Print success message.
pub fn print_success(msg: &str) {
    println!("{}", format!("✓ {}", msg).green());
}

/// Print error message.
pub fn print_error(msg: &str) {
    eprintln!("{}", format!("✗ {}", msg).red());
}

/// Print warning message.
pub fn print_warning(msg: &str) {
    println!("{}", format!("⚠ {}", msg).yellow());
}

/// Print info message.
pub fn print_info(msg: &str) {
    println!("{}", format!("ℹ {}", msg).blue());
}
