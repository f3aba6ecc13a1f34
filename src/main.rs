//! # standup CLI
//!
//! Weekday standup reminders for chat rooms: register a time, get a
//! warning 10 minutes ahead and the call at the minute itself.
//!
//! Usage:
//!   standup create room1 09:30    # Remind room1 every weekday at 09:30
//!   standup list room1            # Standups for one room
//!   standup list --all            # Standups in every room
//!   standup delete room1 09:30    # Delete one standup
//!   standup delete room1 --all    # Delete every standup for the room
//!   standup run                   # Start the scheduler daemon
//!   standup config show           # Show configuration

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

use standup_channels::{ConsoleMessenger, WebhookMessenger};
use standup_core::traits::Messenger;
use standup_core::{StandupConfig, StandupError};
use standup_scheduler::{Dispatcher, MessageSets, StandupScheduler, StandupStore, run_scheduler};

#[derive(Parser)]
#[command(
    name = "standup",
    version,
    about = "Weekday standup reminders for chat rooms"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a standup for a room at hh:mm, every weekday
    Create {
        /// Destination room identifier
        room: String,
        /// Time of day, hh:mm (host-local clock)
        time: String,
    },

    /// List standups
    List {
        /// Room to list; omit with --all for every room
        room: Option<String>,

        /// List standups in every room
        #[arg(short, long)]
        all: bool,
    },

    /// Delete standups for a room
    Delete {
        /// Destination room identifier
        room: String,

        /// Time of the standup to delete, hh:mm
        time: Option<String>,

        /// Delete every standup for the room
        #[arg(short, long)]
        all: bool,
    },

    /// Run the scheduler daemon
    Run,

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the active configuration
    Show,
    /// Write a default config file
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    let config = match &cli.config {
        Some(path) => StandupConfig::load_from(Path::new(path))?,
        None => StandupConfig::load()?,
    };

    match cli.command {
        Commands::Create { room, time } => {
            let mut scheduler = build_scheduler(&config, Arc::new(ConsoleMessenger))?;
            match scheduler.create(&room, &time) {
                Ok(standup) => println!(
                    "Ok, I'll remind {} to do a standup every weekday at {}.",
                    standup.room, standup.time
                ),
                Err(StandupError::InvalidTime(input)) => {
                    eprintln!("'{input}' is not a valid time. Use hh:mm, e.g. 09:30.");
                    std::process::exit(1);
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::List { room, all } => {
            let scheduler = build_scheduler(&config, Arc::new(ConsoleMessenger))?;
            if all {
                let standups = scheduler.list_all();
                if standups.is_empty() {
                    println!("No standups registered anywhere.");
                } else {
                    println!("Standups in every room:");
                    for standup in standups {
                        println!("  {} at {}", standup.room, standup.time);
                    }
                }
            } else {
                let room = room.ok_or_else(|| anyhow::anyhow!("give a room, or use --all"))?;
                let standups = scheduler.list(&room);
                if standups.is_empty() {
                    println!("No standups set for {room}.");
                } else {
                    println!("Standups for {room}:");
                    for standup in standups {
                        println!("  {}", standup.time);
                    }
                }
            }
        }

        Commands::Delete { room, time, all } => {
            let mut scheduler = build_scheduler(&config, Arc::new(ConsoleMessenger))?;
            let removed = if all {
                scheduler.delete_all(&room)?
            } else {
                let time = time.ok_or_else(|| anyhow::anyhow!("give a time, or use --all"))?;
                match scheduler.delete_one(&room, &time) {
                    Ok(0) => {
                        println!("{room} has no standup at {time}.");
                        return Ok(());
                    }
                    Ok(n) => n,
                    Err(StandupError::InvalidTime(input)) => {
                        eprintln!("'{input}' is not a valid time. Use hh:mm, e.g. 09:30.");
                        std::process::exit(1);
                    }
                    Err(e) => return Err(e.into()),
                }
            };
            println!(
                "Deleted {removed} standup{}.",
                if removed == 1 { "" } else { "s" }
            );
        }

        Commands::Run => {
            let messenger = delivery_channel(&config);
            tracing::info!("🚀 Delivering via {}", messenger.name());
            let scheduler = Arc::new(Mutex::new(build_scheduler(&config, messenger)?));
            run_scheduler(scheduler).await;
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                println!("{}", toml::to_string_pretty(&config)?);
            }
            ConfigAction::Init => {
                let config = StandupConfig::default();
                config.save()?;
                println!("Wrote {}", StandupConfig::default_path().display());
            }
        },
    }

    Ok(())
}

fn build_scheduler(
    config: &StandupConfig,
    messenger: Arc<dyn Messenger>,
) -> Result<StandupScheduler> {
    let store = StandupStore::open(Path::new(&config.scheduler.store_dir))?;
    let dispatcher = Dispatcher::new(messenger, MessageSets::from_config(&config.messages));
    Ok(StandupScheduler::new(
        store,
        dispatcher,
        config.scheduler.warning_minutes,
    ))
}

/// Webhook when configured and enabled, console otherwise.
fn delivery_channel(config: &StandupConfig) -> Arc<dyn Messenger> {
    match &config.channel.webhook {
        Some(webhook) if webhook.enabled => Arc::new(WebhookMessenger::new(webhook.clone())),
        _ => Arc::new(ConsoleMessenger),
    }
}
