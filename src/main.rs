//! Mergington - Extracurricular activity signup service
//!
//! Main entry point for the Mergington CLI and server.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mergington_api::{ApiConfig, ApiServer, AppState};
use mergington_config::{Config, ConfigError, ConfigLoader};
use mergington_core::{default_activities, ActivityRegistry};

/// Mergington CLI.
#[derive(Parser)]
#[command(name = "mergington")]
#[command(about = "Extracurricular activity signup service for Mergington High School")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the server in foreground (default)
    Run {
        /// Server host, overrides the config file
        #[arg(long)]
        host: Option<String>,

        /// Server port, overrides the config file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the activity catalog
    Activities {
        /// Output format (table, json)
        #[arg(long, default_value = "table")]
        format: String,
    },
}

/// Initialize tracing with console output.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .init();
}

/// Load configuration, falling back to defaults when the file is absent.
fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let config = ConfigLoader::load(path)?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    } else {
        Ok(Config::default())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    config.validate()?;

    match cli.command {
        None => run_server(config, None, None).await,
        Some(Commands::Run { host, port }) => run_server(config, host, port).await,
        Some(Commands::Activities { format }) => activities_list(&format).await,
    }
}

/// Run the server in foreground.
async fn run_server(
    config: Config,
    host: Option<String>,
    port: Option<u16>,
) -> Result<(), Box<dyn std::error::Error>> {
    let host = host.unwrap_or(config.server.host);
    let port = port.unwrap_or(config.server.port);

    info!(
        "Starting Mergington activity service v{}",
        env!("CARGO_PKG_VERSION")
    );

    let registry = Arc::new(
        ActivityRegistry::new(default_activities())
            .with_capacity_enforcement(config.registry.enforce_capacity),
    );
    info!("Registry seeded with {} activities", registry.len().await);
    if config.registry.enforce_capacity {
        info!("Capacity enforcement enabled");
    }

    let state = Arc::new(AppState::new(registry));
    let server = ApiServer::new(ApiConfig::new(&host, port), state);

    info!("Activity service ready:");
    info!("  Web client:  http://{}:{}/", host, port);
    info!("");
    info!("API Endpoints:");
    info!("  GET    /activities                    - List activities");
    info!("  POST   /activities/{{name}}/signup     - Sign up a student");
    info!("  DELETE /activities/{{name}}/unregister - Remove a student");
    info!("  GET    /health                        - Health check");

    server.run().await?;

    info!("Shutting down...");
    Ok(())
}

/// Print the activity catalog.
async fn activities_list(format: &str) -> Result<(), Box<dyn std::error::Error>> {
    let registry = ActivityRegistry::new(default_activities());
    let activities = registry.list().await;

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&activities)?;
            println!("{}", json);
        }
        _ => {
            // Table format
            let mut names: Vec<_> = activities.keys().cloned().collect();
            names.sort();

            println!("{:<15} {:<45} {}", "ACTIVITY", "SCHEDULE", "ENROLLED");
            println!("{}", "-".repeat(72));
            for name in names {
                let activity = &activities[&name];
                println!(
                    "{:<15} {:<45} {}/{}",
                    name,
                    activity.schedule,
                    activity.participants.len(),
                    activity.max_participants
                );
            }
        }
    }

    Ok(())
}
