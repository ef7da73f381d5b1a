use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use configuration::Settings;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod console;

/// Gate-access registry: which license plates may enter, and who they belong to.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(long, default_value = "config.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server.
    Serve {
        /// The address to listen on.
        #[arg(long, default_value = "0.0.0.0:8080")]
        addr: SocketAddr,
    },
    /// Manage the registry interactively from the terminal.
    Console,
}

/// The main entry point for the Gatekeeper application.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A local .env can supply GATEKEEPER__* configuration overrides.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // First-run gate: a missing config file writes a blank template and
    // aborts with instructions; a present but broken one is equally fatal.
    let settings = configuration::load_settings(&cli.config)?;
    let _guard = init_tracing(&settings);

    let pool = database::connect(&settings.database)
        .await
        .context("cannot connect to the database")?;
    database::init_schema(&pool)
        .await
        .context("cannot initialize the database schema")?;
    tracing::debug!(database = %settings.database.database, "Database schema is in place.");

    match cli.command {
        Commands::Serve { addr } => web_server::run_server(addr, pool).await,
        Commands::Console => console::run(database::VisitorRegistry::new(pool)).await,
    }
}

/// Sets up logging to stdout and to `trace.log`.
///
/// Debug lines are gated by the `global.debug` config flag; `RUST_LOG`
/// overrides the filter entirely when set.
fn init_tracing(settings: &Settings) -> tracing_appender::non_blocking::WorkerGuard {
    let file_appender = tracing_appender::rolling::never(".", "trace.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let default_level = if settings.global.debug { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    guard
}
