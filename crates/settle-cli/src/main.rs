//! Settle CLI - exercise the batch executor and host helpers from a shell.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use settle_core::{deep_equal, host, ids, truncate_strings, Level as AccountLevel, Platform, VersionConfig};
use settle_runtime::{BatchExecutor, Settlement};

mod config;
mod simulate;

use config::Config;
use simulate::TaskSpec;

/// Settle CLI - timeout-bounded batches and host helpers
#[derive(Parser)]
#[command(name = "settle")]
#[command(about = "Run timeout-bounded task batches and host helper utilities", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run simulated tasks under one shared timeout
    Batch {
        /// Per-task timeout in milliseconds
        #[arg(short, long)]
        timeout_ms: Option<u64>,

        /// Tasks as DELAY_MS[:ok|fail|panic|hang]
        #[arg(required = true)]
        tasks: Vec<TaskSpec>,
    },

    /// Pack or unpack two numeric ids as a UUID
    Uuid {
        #[command(subcommand)]
        command: UuidCommand,
    },

    /// Compute an account level from badge counts
    Level {
        crown: u32,
        sun: u32,
        moon: u32,
        star: u32,
    },

    /// Show the host's version config
    #[command(name = "host-config")]
    HostConfig {
        /// Path to the host executable (used off Linux)
        #[arg(long)]
        exe: Option<PathBuf>,
    },

    /// Compare two JSON documents structurally
    Compare { left: String, right: String },

    /// Shorten long strings inside a JSON document
    Truncate {
        json: String,

        /// Maximum string length
        #[arg(short, long)]
        max_len: Option<usize>,
    },
}

#[derive(Subcommand)]
enum UuidCommand {
    /// Encode HIGH and LOW decimal ids
    Encode { high: String, low: String },

    /// Decode a UUID into its decimal ids
    Decode { uuid: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::default();

    match cli.command {
        Commands::Batch { timeout_ms, tasks } => {
            let executor = match timeout_ms {
                Some(ms) => BatchExecutor::from_millis(ms),
                None => BatchExecutor::new(config.batch_timeout()),
            };
            run_batch(executor, tasks).await;
        }
        Commands::Uuid { command } => match command {
            UuidCommand::Encode { high, low } => {
                println!("{}", ids::encode(&high, &low)?);
            }
            UuidCommand::Decode { uuid } => {
                println!("{}", serde_json::to_string_pretty(&ids::decode(&uuid)?)?);
            }
        },
        Commands::Level {
            crown,
            sun,
            moon,
            star,
        } => {
            println!("{}", AccountLevel::new(crown, sun, moon, star).score());
        }
        Commands::HostConfig { exe } => {
            show_host_config(exe.unwrap_or_default())?;
        }
        Commands::Compare { left, right } => {
            let left: Value = serde_json::from_str(&left)?;
            let right: Value = serde_json::from_str(&right)?;
            println!("{}", deep_equal(&left, &right));
        }
        Commands::Truncate { json, max_len } => {
            let mut value: Value = serde_json::from_str(&json)?;
            truncate_strings(&mut value, max_len.unwrap_or(config.truncate_len));
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}

async fn run_batch(executor: BatchExecutor, tasks: Vec<TaskSpec>) {
    info!(
        tasks = tasks.len(),
        timeout_ms = executor.timeout().as_millis() as u64,
        "Running batch"
    );

    let operations = tasks
        .iter()
        .enumerate()
        .map(|(index, spec)| spec.into_task(index));
    let settlements = executor.settle(operations).await;

    println!("{:<6}  {:<10}  {:<10}  {}", "INDEX", "DELAY_MS", "STATUS", "VALUE");
    println!("{}", "-".repeat(48));

    for (index, (spec, settlement)) in tasks.iter().zip(&settlements).enumerate() {
        let (status, value) = match settlement {
            Settlement::Fulfilled(value) => ("fulfilled".to_string(), value.as_str()),
            Settlement::Rejected(reason) => (reason.to_string(), "-"),
        };
        println!("{:<6}  {:<10}  {:<10}  {}", index, spec.delay_ms, status, value);
    }

    let survivors: Vec<String> = settlements
        .into_iter()
        .filter_map(Settlement::fulfilled)
        .collect();
    println!();
    println!("Results ({}): {}", survivors.len(), survivors.join(", "));
}

fn show_host_config(exe: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let platform = Platform::current();
    let path = host::version_config_path(&exe, platform);

    let config = match &path {
        Some(path) => host::load_version_config(path)?,
        None => {
            info!(?platform, "No version config found, using platform default");
            VersionConfig::default_for(platform)
        }
    };

    let output = json!({
        "path": path.map(|p| p.display().to_string()),
        "config": config,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_batch_command() {
        let cli = Cli::try_parse_from(["settle", "batch", "-t", "50", "10", "200:fail", "5:hang"]).unwrap();
        match cli.command {
            Commands::Batch { timeout_ms, tasks } => {
                assert_eq!(timeout_ms, Some(50));
                assert_eq!(tasks.len(), 3);
                assert_eq!(tasks[1].delay_ms, 200);
            }
            _ => panic!("Expected Batch"),
        }
    }

    #[test]
    fn test_batch_requires_tasks() {
        assert!(Cli::try_parse_from(["settle", "batch"]).is_err());
        assert!(Cli::try_parse_from(["settle", "batch", "ten"]).is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_simulated_batch_keeps_fast_tasks() {
        let specs: Vec<TaskSpec> = ["10", "200", "10:fail", "5"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let operations = specs
            .iter()
            .enumerate()
            .map(|(index, spec)| spec.into_task(index));

        let results = BatchExecutor::from_millis(50).run(operations).await;
        assert_eq!(results, vec!["task-0".to_string(), "task-3".to_string()]);
    }
}
