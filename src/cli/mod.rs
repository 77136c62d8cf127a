pub mod commands;
pub mod utils;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::api::ApiClient;
use crate::feedback::{LoaderService, ToastService};
use crate::session::{FileStorage, Navigator, SessionStore};

#[derive(Parser)]
#[command(name = "opsdeck")]
#[command(about = "Opsdeck CLI - Command-line interface for the commerce operations API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Authentication and session management")]
    Auth {
        #[command(subcommand)]
        cmd: commands::auth::AuthCommands,
    },

    #[command(about = "Product catalog operations")]
    Products {
        #[command(subcommand)]
        cmd: commands::products::ProductCommands,
    },

    #[command(about = "Order operations")]
    Orders {
        #[command(subcommand)]
        cmd: commands::orders::OrderCommands,
    },

    #[command(about = "Inventory, vendor, and purchase order operations")]
    Inventory {
        #[command(subcommand)]
        cmd: commands::inventory::InventoryCommands,
    },

    #[command(about = "Marketplace connections and order sync")]
    Marketplace {
        #[command(subcommand)]
        cmd: commands::marketplace::MarketplaceCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Navigator for a terminal session. There is no router to redirect, so an
/// auth eviction just tells the user to log in again.
struct CliNavigator;

impl Navigator for CliNavigator {
    fn navigate(&self, path: &str) {
        eprintln!("Session expired. Run `opsdeck auth login` to sign in again. ({})", path);
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    let storage = FileStorage::open_default()?;
    let session = Arc::new(SessionStore::new(Arc::new(storage)));
    let loader = Arc::new(LoaderService::new());
    let toasts = Arc::new(ToastService::new());
    let client = ApiClient::new(session, loader, toasts, Arc::new(CliNavigator))?;

    let result = match cli.command {
        Commands::Auth { cmd } => commands::auth::handle(cmd, &client, &output_format).await,
        Commands::Products { cmd } => commands::products::handle(cmd, &client, &output_format).await,
        Commands::Orders { cmd } => commands::orders::handle(cmd, &client, &output_format).await,
        Commands::Inventory { cmd } => commands::inventory::handle(cmd, &client, &output_format).await,
        Commands::Marketplace { cmd } => commands::marketplace::handle(cmd, &client, &output_format).await,
    };

    utils::flush_toasts(client.toasts(), &output_format);
    result
}
