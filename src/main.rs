use anyhow::Context;
use clap::{Parser, Subcommand};
use directlink::config::file::ProfileFile;
use directlink::domain::gateway::GatewayType;
use directlink::utils::logger;
use directlink::{BearerAuth, ClientConfig, DirectLink, ListPortsOptions, NoAuth};
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "directlink")]
#[command(about = "Inspect IBM Cloud Direct Link resources")]
struct Cli {
    /// TOML profile file; falls back to DIRECTLINK_* env variables.
    #[arg(long)]
    config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List all gateways
    Gateways,
    /// Show one gateway
    Gateway { id: String },
    /// List provider ports, following pagination
    Ports {
        #[arg(long)]
        location: Option<String>,
    },
    /// List locations for an offering type (dedicated or connect)
    Locations { offering_type: String },
    /// List speeds for an offering type (dedicated or connect)
    Speeds { offering_type: String },
}

fn parse_offering_type(raw: &str) -> anyhow::Result<GatewayType> {
    match raw {
        "dedicated" => Ok(GatewayType::Dedicated),
        "connect" => Ok(GatewayType::Connect),
        other => anyhow::bail!("unknown offering type '{}', expected dedicated or connect", other),
    }
}

fn build_client(cli: &Cli) -> anyhow::Result<DirectLink> {
    let (config, token) = match &cli.config {
        Some(path) => {
            let profile = ProfileFile::from_file(path)
                .with_context(|| format!("loading profile from {}", path))?;
            (profile.directlink.client, profile.directlink.token)
        }
        None => (
            ClientConfig::from_env().context("reading DIRECTLINK_* environment")?,
            std::env::var("DIRECTLINK_TOKEN").ok(),
        ),
    };

    let client = match token {
        Some(token) => {
            DirectLink::with_authenticator(config, Arc::new(BearerAuth::new(token)))?
        }
        None => DirectLink::with_authenticator(config, Arc::new(NoAuth))?,
    };
    Ok(client)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let client = build_client(&cli)?;

    match &cli.command {
        Command::Gateways => {
            let collection = client.list_gateways().await?;
            tracing::info!("Fetched {} gateways", collection.gateways.len());
            print_json(&collection.gateways)?;
        }
        Command::Gateway { id } => {
            let gateway = client.get_gateway(id).await?;
            print_json(&gateway)?;
        }
        Command::Ports { location } => {
            let pager = client.ports_pager(ListPortsOptions {
                location_name: location.clone(),
                ..Default::default()
            });
            let ports = pager.all().await?;
            tracing::info!("Fetched {} ports", ports.len());
            print_json(&ports)?;
        }
        Command::Locations { offering_type } => {
            let offering_type = parse_offering_type(offering_type)?;
            let collection = client.list_offering_type_locations(offering_type).await?;
            print_json(&collection.locations)?;
        }
        Command::Speeds { offering_type } => {
            let offering_type = parse_offering_type(offering_type)?;
            let collection = client.list_offering_type_speeds(offering_type).await?;
            print_json(&collection.speeds)?;
        }
    }

    Ok(())
}
