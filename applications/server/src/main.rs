/// User Registry Server - username verification API
use clap::{Parser, Subcommand};
use registry_core::{RegistryError, Username};
use registry_server::{config::ServerConfig, create_router, state::AppState};
use registry_storage::UserStore;
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "registry-server")]
#[command(about = "User registry and verification server", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./config.toml when present)
    #[arg(short, long, global = true, env = "REGISTRY_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve,
    /// Register a new user
    AddUser {
        /// Username
        #[arg(short, long)]
        username: String,
    },
    /// List all users
    ListUsers,
    /// Check whether a user exists; exits non-zero when it does not
    Verify {
        /// Username
        #[arg(short, long)]
        username: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "registry_server=info,registry_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(&config).await?,
        Commands::AddUser { username } => add_user(&config, username).await?,
        Commands::ListUsers => list_users(&config).await?,
        Commands::Verify { username } => verify_user(&config, &username).await?,
    }

    Ok(())
}

/// Build the store and run the schema step
async fn open_store(config: &ServerConfig) -> anyhow::Result<UserStore> {
    let store = UserStore::new(&config.storage.database_url)?
        .with_busy_timeout(config.busy_timeout());
    let seeded = store.ensure_schema().await?;

    tracing::info!(
        database_url = %config.storage.database_url,
        seeded,
        "Database initialized"
    );
    Ok(store)
}

async fn serve(config: &ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting User Registry Server");

    // Schema must exist before the first request is accepted
    let store = Arc::new(open_store(config).await?);

    let app = create_router(AppState::new(store));

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn add_user(config: &ServerConfig, username: String) -> anyhow::Result<()> {
    let store = open_store(config).await?;

    let username = Username::parse(username)?;
    let user = store.insert(&username).await?.into_result(&username)?;

    println!("Added user {} (id {})", user.username, user.id);
    Ok(())
}

async fn list_users(config: &ServerConfig) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let users = store.list().await?;

    println!("Users ({}):", users.len());
    for user in users {
        println!("  {} - {} ({})", user.id, user.username, user.created_at);
    }

    Ok(())
}

async fn verify_user(config: &ServerConfig, username: &str) -> anyhow::Result<()> {
    let store = open_store(config).await?;

    match store.find_by_username(username).await? {
        Some(user) => {
            println!("User {} exists (id {})", user.username, user.id);
            Ok(())
        }
        None => Err(RegistryError::UserNotFound(username.to_string()).into()),
    }
}
