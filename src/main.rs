use anyhow::Result;
use clap::{Parser, Subcommand};
use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::SqlitePoolOptions;

/// voltedge - marketing site and lead capture
#[derive(Parser)]
#[command(name = "voltedge")]
#[command(about = "Voltedge Engineering marketing site", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = voltedge::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    voltedge::observability::init_observability(
        "voltedge",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
        Commands::Migrate => migrate_command(config).await,
        Commands::Reset => reset_command(config).await,
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: voltedge::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting voltedge server...");

    let host = host_override.unwrap_or_else(|| config.server.host.clone());
    let port = port_override.unwrap_or(config.server.port);

    voltedge::server::serve(config, host, port).await
}

#[tracing::instrument(skip(config))]
async fn migrate_command(config: voltedge::Config) -> Result<()> {
    tracing::info!("Running database migrations...");

    if !sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::info!("Database does not exist, creating: {}", config.database.url);
        sqlx::Sqlite::create_database(&config.database.url).await?;
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(&config.database.url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

#[tracing::instrument(skip(config))]
async fn reset_command(config: voltedge::Config) -> Result<()> {
    tracing::info!("Resetting database...");

    if sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::warn!("Dropping existing database: {}", config.database.url);
        sqlx::Sqlite::drop_database(&config.database.url).await?;
        tracing::info!("Database dropped successfully");
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate_command(config).await?;

    tracing::info!("Database reset completed successfully");

    Ok(())
}
