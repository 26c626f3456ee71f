//! Minibank CLI - interactive banking menu
//!
//! Usage:
//! ```bash
//! minibank
//! minibank --max-accounts 10 --atm-debit requested
//! minibank --seed 42 --json
//! minibank --log-level debug
//! ```
//!
//! Environment: `MINIBANK_MAX_ACCOUNTS`, `MINIBANK_ACCOUNT_NUMBER_ATTEMPTS`,
//! `MINIBANK_ATM_DEBIT`, `RUST_LOG`. Flags win over the environment.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use minibank_business::{AtmDebitPolicy, BankConfig, BankOperations};
use minibank_core::{CredentialGenerator, RandomGenerator};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod menu;
mod prompt;
mod render;

use menu::Session;
use render::Renderer;

/// Minibank - an in-memory banking simulator
#[derive(Parser)]
#[command(name = "minibank")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Maximum number of open accounts
    #[arg(long)]
    pub max_accounts: Option<usize>,

    /// What an ATM withdrawal takes from the balance
    #[arg(long, value_enum)]
    pub atm_debit: Option<AtmDebitArg>,

    /// Seed for account numbers and PINs (reproducible sessions)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log filter, e.g. "info" or "minibank_business=debug" (overrides RUST_LOG)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum AtmDebitArg {
    Remainder,
    Requested,
}

impl AtmDebitArg {
    pub fn to_policy(self) -> AtmDebitPolicy {
        match self {
            AtmDebitArg::Remainder => AtmDebitPolicy::Remainder,
            AtmDebitArg::Requested => AtmDebitPolicy::Requested,
        }
    }
}

impl Cli {
    fn config(&self) -> BankConfig {
        let mut config = BankConfig::from_env();
        if let Some(max_accounts) = self.max_accounts {
            config = config.with_max_accounts(max_accounts);
        }
        if let Some(policy) = self.atm_debit {
            config = config.with_atm_debit_policy(policy.to_policy());
        }
        config
    }
}

fn init_tracing(log_level: Option<&str>) -> Result<()> {
    let filter = match log_level {
        Some(level) => EnvFilter::try_new(level)
            .with_context(|| format!("Invalid log level: {}", level))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    // Logs go to stderr so the menu on stdout stays clean
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn run_session<G: CredentialGenerator>(ops: BankOperations<G>, renderer: Renderer) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(ops, stdin.lock(), stdout.lock(), renderer);
    session.run().context("Console I/O failed")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;

    let config = cli.config();
    info!(
        max_accounts = config.max_accounts,
        atm_debit = %config.atm_debit_policy,
        seeded = cli.seed.is_some(),
        "Starting minibank"
    );

    let generator = match cli.seed {
        Some(seed) => RandomGenerator::seeded(seed),
        None => RandomGenerator::new(),
    };
    let ops = BankOperations::with_generator(config, generator);

    run_session(ops, Renderer::new(cli.json))
}
