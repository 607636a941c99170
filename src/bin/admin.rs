//! CLI administration tool for keyed-redirect.
//!
//! Operates on the store directly, without going through the HTTP API. The
//! same validation rules as the management API apply.
//!
//! # Usage
//!
//! ```bash
//! # List every mapping
//! cargo run --bin admin -- list
//!
//! # Create or update a mapping
//! cargo run --bin admin -- add docs https://docs.example.com
//! cargo run --bin admin -- update docs https://docs.example.org
//!
//! # Generate a value for API_KEY
//! cargo run --bin admin -- gen-key
//!
//! # Check the store connection
//! cargo run --bin admin -- check
//! ```
//!
//! # Environment Variables
//!
//! - `REDIS_URL` or `REDIS_HOST`/`REDIS_PORT`/`REDIS_PASSWORD`/`REDIS_DB`

use keyed_redirect::application::services::MappingService;
use keyed_redirect::config::{Config, mask_connection_string};
use keyed_redirect::infrastructure::store::RedisMappingStore;
use keyed_redirect::utils::validation::validate_url_syntax;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

/// CLI tool for managing keyed-redirect mappings.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all mappings
    List,

    /// Show the target of one key
    Get {
        /// Alphanumeric key
        key: String,
    },

    /// Create a new mapping
    Add {
        /// Alphanumeric key
        key: String,

        /// Target URL
        value: String,
    },

    /// Point an existing key at a new URL
    Update {
        /// Alphanumeric key
        key: String,

        /// New target URL
        value: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Generate a random value for API_KEY
    GenKey,

    /// Check the store connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::List => list_mappings(&connect().await?).await,
        Commands::Get { key } => get_mapping(&connect().await?, &key).await,
        Commands::Add { key, value } => add_mapping(&connect().await?, &key, &value).await,
        Commands::Update { key, value, yes } => {
            update_mapping(&connect().await?, &key, &value, yes).await
        }
        Commands::GenKey => {
            print_generated_key();
            Ok(())
        }
        Commands::Check => check_store().await,
    }
}

/// Connects to the store configured in the environment.
async fn connect() -> Result<MappingService> {
    let redis_url = Config::load_redis_url();
    let store = RedisMappingStore::connect(&redis_url)
        .await
        .with_context(|| format!("Failed to connect to {}", mask_connection_string(&redis_url)))?;

    Ok(MappingService::new(Arc::new(store)))
}

/// Lists all mappings sorted by key.
///
/// # Output Format
///
/// ```text
/// Mappings (2)
///
///   abc123   https://example.com
///   docs     https://docs.example.com
/// ```
async fn list_mappings(service: &MappingService) -> Result<()> {
    let all = service.list_all().await?;

    println!(
        "{}",
        format!("Mappings ({})", all.len()).bright_blue().bold()
    );
    println!();

    if all.is_empty() {
        println!("  {}", "No mappings found".yellow());
        return Ok(());
    }

    let width = all.keys().map(|k| k.len()).max().unwrap_or(0);
    for (key, value) in &all {
        println!("  {:<width$}   {}", key.cyan(), value, width = width);
    }
    println!();

    Ok(())
}

async fn get_mapping(service: &MappingService, key: &str) -> Result<()> {
    match service.resolve(key).await? {
        Some(value) => println!("{} -> {}", key.cyan(), value.bright_white()),
        None => println!("{}", format!("Key '{}' does not exist", key).yellow()),
    }

    Ok(())
}

async fn add_mapping(service: &MappingService, key: &str, value: &str) -> Result<()> {
    let mapping = service.create(Some(key), Some(value)).await?;

    println!(
        "{} {} -> {}",
        "Created".green().bold(),
        mapping.key.cyan(),
        mapping.value
    );

    Ok(())
}

/// Updates a mapping after showing the current target.
///
/// Fails before prompting if the key is absent or the new value is not a URL.
async fn update_mapping(
    service: &MappingService,
    key: &str,
    value: &str,
    skip_confirm: bool,
) -> Result<()> {
    let current = service
        .resolve(key)
        .await?
        .with_context(|| format!("Key '{}' does not exist", key))?;

    if !validate_url_syntax(value) {
        anyhow::bail!("Invalid URL format: {}", value);
    }

    println!("  Current: {}", current.bright_white());
    println!("  New:     {}", value.bright_yellow());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Update '{}'?", key))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let mapping = service.update(Some(key), Some(value)).await?;

    println!(
        "{} {} -> {}",
        "Updated".green().bold(),
        mapping.key.cyan(),
        mapping.value
    );

    Ok(())
}

async fn check_store() -> Result<()> {
    let redis_url = Config::load_redis_url();
    println!("  Store: {}", mask_connection_string(&redis_url));

    let service = connect().await?;
    if service.health_check().await {
        println!("  {}", "PING ok".green().bold());
        Ok(())
    } else {
        anyhow::bail!("Store did not answer PING")
    }
}

fn print_generated_key() {
    let key = generate_key();

    println!("{}", "Generated API key".bright_blue().bold());
    println!();
    println!("  {}", key.bright_yellow().bold());
    println!();
    println!("{}", "Add this to the service environment:".bright_white());
    println!("  API_KEY={}", key);
    println!();
    println!("{}", "Send it with management requests:".bright_white());
    println!(
        "  curl -H \"Authorization: {}\" http://localhost:3000/api/read_all",
        key
    );
}

/// Generates a cryptographically random API key.
///
/// # Format
///
/// - Length: 48 characters
/// - Character set: A-Z, a-z, 0-9
fn generate_key() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const KEY_LEN: usize = 48;

    let mut rng = rand::rng();

    (0..KEY_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
