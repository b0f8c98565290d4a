use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use modkit_bootstrap::{AppConfig, init_logging, shutdown_token};
use name_resolution_gw::NameResolutionGateway;
use name_resolution_sdk::{Metadata, NameResolverGatewayClient, ResolveRequest};
use static_nr_plugin::StaticNrPlugin;
use tokio_util::sync::CancellationToken;

/// Name resolution host - registers this instance and resolves peers
#[derive(Parser)]
#[command(name = "nr-host")]
#[command(about = "Name resolution host - registers this instance and resolves peers")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print effective configuration (JSON) and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Register this instance and keep its entry until shutdown
    Run {
        /// App id of this instance
        #[arg(long)]
        name: String,

        /// Address peers use to reach this instance
        #[arg(long)]
        address: String,

        /// Port peers use to reach this instance
        #[arg(long)]
        port: String,

        /// Entry directory (overrides the plugin config)
        #[arg(long)]
        directory: Option<PathBuf>,
    },
    /// Resolve an app id and print its address
    Resolve {
        /// App id to resolve
        id: String,

        /// Port used by resolvers that do not store one
        #[arg(long, default_value_t = 3500)]
        port: u16,
    },
    /// Validate configuration and exit
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match cli.config.as_deref() {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    match cli.verbose {
        0 => {}
        1 => "debug".clone_into(&mut config.logging.level),
        _ => "trace".clone_into(&mut config.logging.level),
    }
    init_logging(&config.logging)?;

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Check) {
        Commands::Run {
            name,
            address,
            port,
            directory,
        } => {
            let mut metadata = Metadata::new()
                .with_property(Metadata::INSTANCE_NAME, name)
                .with_property(Metadata::INSTANCE_ADDRESS, address)
                .with_property(Metadata::INSTANCE_PORT, port);
            if let Some(dir) = directory {
                metadata = metadata
                    .with_property(Metadata::INSTANCE_CONFIGURATION, dir.to_string_lossy());
            }
            run(&config, &metadata).await
        }
        Commands::Resolve { id, port } => resolve(&config, &ResolveRequest::new(id, port)).await,
        Commands::Check => check_config(&config),
    }
}

/// Gateway with the built-in plugins registered.
fn build_gateway(
    config: &AppConfig,
    shutdown: CancellationToken,
) -> Result<Arc<dyn NameResolverGatewayClient>> {
    let gateway = NameResolutionGateway::default();
    gateway.register_plugin(Arc::new(localhost_nr_plugin::Service));
    gateway.register_plugin(StaticNrPlugin::default().init(config, shutdown)?);
    gateway.init(config)
}

async fn run(config: &AppConfig, metadata: &Metadata) -> Result<()> {
    let shutdown = shutdown_token();
    let client = build_gateway(config, shutdown.clone())?;

    client
        .init(metadata)
        .await
        .context("failed to register instance")?;
    tracing::info!("Instance registered, waiting for shutdown signal");

    shutdown.cancelled().await;
    // Dropping the last client handle releases the entry file
    drop(client);
    tracing::info!("Name resolution host stopped");
    Ok(())
}

async fn resolve(config: &AppConfig, request: &ResolveRequest) -> Result<()> {
    let client = build_gateway(config, CancellationToken::new())?;
    let address = client
        .resolve_id(request)
        .await
        .with_context(|| format!("failed to resolve app id '{}'", request.id))?;
    println!("{address}");
    Ok(())
}

fn check_config(config: &AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");
    // Building the modules decodes every section they own.
    build_gateway(config, CancellationToken::new())?;
    println!("Configuration is valid");
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
