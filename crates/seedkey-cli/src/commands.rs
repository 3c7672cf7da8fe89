//! CLI command implementations.

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Password;
use seedkey_account::{seed_kind_options, CreateFlow, SeedResolver};
use seedkey_crypto::Keyring;
use seedkey_types::{KeyPairType, SeedKind};
use std::path::PathBuf;
use tracing::debug;
use zeroize::Zeroizing;

use crate::config::CliConfig;
use crate::output::*;

/// Main CLI.
#[derive(Parser, Debug)]
#[command(name = "seedkey")]
#[command(about = "Generate, inspect and create sr25519/ed25519 accounts from seeds")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Configuration file (defaults to ~/.seedkey/config.toml)
    #[arg(short, long, global = true, env = "SEEDKEY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Log filter, e.g. "debug" or "seedkey_account=trace"
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Development mode: offers the well-known development seed
    #[arg(long, global = true)]
    pub dev: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a fresh seed and show its address
    Generate {
        /// Seed kind: bip, raw or dev
        #[arg(short, long, default_value = "bip")]
        kind: SeedKind,
        /// Raw seed to keep instead of generating one (raw kind only)
        #[arg(short, long)]
        seed: Option<String>,
        /// Derivation path, e.g. //polkadot//0
        #[arg(short, long, default_value = "")]
        path: String,
        /// Key pair type: ed25519 or sr25519
        #[arg(short, long)]
        algorithm: Option<KeyPairType>,
    },

    /// Validate a seed and derivation path
    Inspect {
        /// Seed phrase, raw seed or 0x-prefixed hex seed
        seed: String,
        #[arg(short, long, default_value = "bip")]
        kind: SeedKind,
        #[arg(short, long, default_value = "")]
        path: String,
        #[arg(short, long)]
        algorithm: Option<KeyPairType>,
    },

    /// Create an account and write its encrypted keystore backup
    Create {
        /// Account name
        #[arg(short, long)]
        name: String,
        #[arg(short, long)]
        kind: Option<SeedKind>,
        #[arg(short, long)]
        seed: Option<String>,
        #[arg(short, long, default_value = "")]
        path: String,
        #[arg(short, long)]
        algorithm: Option<KeyPairType>,
        /// Keystore password (prompted when omitted)
        #[arg(long, env = "SEEDKEY_PASSWORD", hide_env_values = true)]
        password: Option<String>,
        /// Keystore directory (overrides the configured one)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List the available seed kinds and key pair types
    Kinds,

    /// Configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Config commands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show configuration
    Show,
    /// Set a configuration value
    Set {
        key: String,
        value: String,
    },
    /// Print the configuration file path
    Path,
}

/// Settings shared by every command.
pub struct Session {
    pub config: CliConfig,
    pub config_path: PathBuf,
    pub json: bool,
    pub is_development: bool,
}

impl Session {
    pub fn new(cli: &Cli, config: CliConfig) -> anyhow::Result<Self> {
        let config_path = match &cli.config {
            Some(path) => path.clone(),
            None => CliConfig::config_path()?,
        };
        let is_development = cli.dev || config.is_development;
        Ok(Self {
            config,
            config_path,
            json: cli.json,
            is_development,
        })
    }

    fn keyring(&self) -> anyhow::Result<Keyring> {
        Keyring::with_prefix(self.config.ss58_prefix).context("invalid ss58 prefix")
    }

    fn algorithm(&self, algorithm: Option<KeyPairType>) -> KeyPairType {
        algorithm.unwrap_or(self.config.default_algorithm)
    }

    fn check_kind(&self, kind: SeedKind) -> anyhow::Result<()> {
        if kind == SeedKind::Development && !self.is_development {
            anyhow::bail!("The development seed is only available with --dev");
        }
        Ok(())
    }
}

pub fn execute(cmd: Commands, ctx: &mut Session) -> anyhow::Result<()> {
    match cmd {
        Commands::Generate {
            kind,
            seed,
            path,
            algorithm,
        } => execute_generate(ctx, kind, seed, &path, algorithm),
        Commands::Inspect {
            seed,
            kind,
            path,
            algorithm,
        } => execute_inspect(ctx, &seed, kind, &path, algorithm),
        Commands::Create {
            name,
            kind,
            seed,
            path,
            algorithm,
            password,
            out,
        } => execute_create(ctx, CreateArgs {
            name,
            kind,
            seed,
            path,
            algorithm,
            password: password.map(Zeroizing::new),
            out,
        }),
        Commands::Kinds => {
            let kinds = seed_kind_options(ctx.is_development);
            if ctx.json {
                let json = serde_json::json!({
                    "seed_kinds": kinds_json(&kinds),
                    "algorithms": algorithms_json(&KeyPairType::ALL),
                });
                println!("{}", serde_json::to_string_pretty(&json)?);
            } else {
                print_kinds(&kinds);
                print_algorithms(&KeyPairType::ALL);
            }
            Ok(())
        }
        Commands::Config(cmd) => execute_config(ctx, cmd),
    }
}

fn execute_generate(
    ctx: &Session,
    kind: SeedKind,
    seed: Option<String>,
    path: &str,
    algorithm: Option<KeyPairType>,
) -> anyhow::Result<()> {
    ctx.check_kind(kind)?;
    if seed.is_some() && kind != SeedKind::Raw {
        anyhow::bail!("--seed is only used with --kind raw");
    }

    let resolver = SeedResolver::with_keyring(ctx.keyring()?);
    let state = resolver.generate_seed(seed.as_deref(), path, kind, ctx.algorithm(algorithm));

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&state_json(&state))?);
    } else {
        print_state(&state, true);
        if state.address().is_some() {
            print_warning("Write the seed down and keep it safe. It is the only way to restore this account.");
        }
    }
    Ok(())
}

fn execute_inspect(
    ctx: &Session,
    seed: &str,
    kind: SeedKind,
    path: &str,
    algorithm: Option<KeyPairType>,
) -> anyhow::Result<()> {
    let resolver = SeedResolver::with_keyring(ctx.keyring()?);
    let state = resolver.update_address(seed, path, kind, ctx.algorithm(algorithm));

    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&state_json(&state))?);
    } else {
        print_state(&state, false);
    }
    Ok(())
}

struct CreateArgs {
    name: String,
    kind: Option<SeedKind>,
    seed: Option<String>,
    path: String,
    algorithm: Option<KeyPairType>,
    password: Option<Zeroizing<String>>,
    out: Option<PathBuf>,
}

fn execute_create(ctx: &Session, args: CreateArgs) -> anyhow::Result<()> {
    let mut flow = CreateFlow::with_keyring(
        ctx.keyring()?,
        None,
        Some(ctx.algorithm(args.algorithm)),
        ctx.is_development,
    );

    let kind = match (args.kind, &args.seed) {
        (Some(kind), _) => kind,
        (None, Some(_)) => SeedKind::Raw,
        (None, None) => SeedKind::Mnemonic,
    };
    flow.select_seed_kind(kind)?;
    if let Some(seed) = &args.seed {
        flow.on_change_seed(seed)?;
    }
    flow.on_change_derivation_path(&args.path);
    flow.on_change_name(&args.name);

    if !flow.is_name_valid() {
        anyhow::bail!("Account name must not be empty");
    }
    if !flow.state().is_complete() {
        if !ctx.json {
            print_state(flow.state(), false);
        }
        anyhow::bail!("{}", describe_invalid(&flow));
    }

    let password = match args.password {
        Some(password) => password,
        None => Zeroizing::new(
            Password::new()
                .with_prompt("Set password")
                .with_confirmation("Confirm password", "Passwords don't match")
                .interact()?,
        ),
    };
    flow.on_change_password(&password);
    if !flow.is_pass_valid() {
        anyhow::bail!("Password must not be empty");
    }

    let out = args.out.unwrap_or_else(|| ctx.config.keystore_dir.clone());
    debug!(dir = %out.display(), "committing account");

    let status = flow
        .commit(ctx.config.genesis_hash.as_deref(), &out)
        .context("account inputs are not valid")?;

    // A seed the user typed is never echoed back
    let generated_seed = args.seed.is_none().then(|| flow.state().seed());
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&status_json(&status, generated_seed)?)?);
    } else {
        print_status(&status);
        if status.is_success() && generated_seed.is_some() {
            println!("Seed:    {}", flow.state().seed().bright_yellow());
            print_warning("Write the seed down and keep it safe. It is the only way to restore this account.");
        }
    }

    if !status.is_success() {
        anyhow::bail!("{}", status.message);
    }
    Ok(())
}

/// Why the flow's address state cannot be committed.
fn describe_invalid(flow: &CreateFlow) -> String {
    let state = flow.state();
    if let Some(error) = state.derivation_error() {
        return error.to_string();
    }
    if !state.is_seed_valid() {
        return format!("Invalid {}", state.seed_kind().field_label());
    }
    "Unable to compute an address for this seed".to_string()
}

fn execute_config(ctx: &mut Session, cmd: ConfigCommands) -> anyhow::Result<()> {
    match cmd {
        ConfigCommands::Show => {
            if ctx.json {
                println!("{}", serde_json::to_string_pretty(&ctx.config)?);
                return Ok(());
            }
            let config = &ctx.config;
            println!("{}", "CLI Configuration".bold());
            println!("{}", "=".repeat(50));
            println!("SS58 prefix:  {}", config.ss58_prefix.to_string().bright_green());
            println!("Algorithm:    {}", config.default_algorithm.to_string().bright_cyan());
            println!("Keystore:     {}", config.keystore_dir.display());
            println!("Genesis hash: {}", config.genesis_hash.as_deref().unwrap_or("(none)"));
            println!("Development:  {}", config.is_development);
            println!("Log level:    {}", config.log_level);
            println!("JSON logs:    {}", config.json_logs);
        }

        ConfigCommands::Set { key, value } => {
            ctx.config.set(&key, &value)?;
            ctx.config.save(&ctx.config_path)?;
            print_success(&format!("Set {} = {}", key, value));
        }

        ConfigCommands::Path => {
            println!("{}", ctx.config_path.display());
        }
    }
    Ok(())
}
