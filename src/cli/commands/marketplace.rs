use chrono::{DateTime, NaiveDate, Utc};
use clap::Subcommand;

use crate::api::ApiClient;
use crate::cli::utils::{output_data, output_success};
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum MarketplaceCommands {
    #[command(about = "List marketplace connections")]
    Connections,

    #[command(about = "Sync the product catalog to a marketplace")]
    Sync {
        #[arg(help = "Connection id")]
        connection_id: String,
    },

    #[command(about = "Import the marketplace's listings into the catalog")]
    Import {
        #[arg(help = "Connection id")]
        connection_id: String,
    },

    #[command(about = "Search marketplace orders in a date window")]
    SearchOrders {
        #[arg(help = "Connection id")]
        connection_id: String,
        #[arg(long, help = "Start date (YYYY-MM-DD)")]
        from: String,
        #[arg(long, help = "End date (YYYY-MM-DD)")]
        to: String,
    },

    #[command(about = "Generate a shipping label for a shipment")]
    Label {
        #[arg(help = "Connection id")]
        connection_id: String,
        #[arg(help = "Shipment id")]
        shipment_id: String,
    },

    #[command(about = "Dispatch a shipment on the marketplace")]
    Dispatch {
        #[arg(help = "Connection id")]
        connection_id: String,
        #[arg(help = "Shipment id")]
        shipment_id: String,
    },
}

pub async fn handle(
    cmd: MarketplaceCommands,
    client: &ApiClient,
    output_format: &OutputFormat,
) -> anyhow::Result<()> {
    match cmd {
        MarketplaceCommands::Connections => {
            let connections = client.marketplace_connections().await?;
            output_data(output_format, &connections)
        }
        MarketplaceCommands::Sync { connection_id } => {
            client.sync_marketplace(&connection_id).await?;
            output_success(output_format, "Product sync started", None)
        }
        MarketplaceCommands::Import { connection_id } => {
            let imported = client.import_marketplace_products(&connection_id).await?;
            output_data(output_format, &imported)
        }
        MarketplaceCommands::SearchOrders {
            connection_id,
            from,
            to,
        } => {
            let results = client
                .search_marketplace_orders(&connection_id, day_start(&from)?, day_start(&to)?)
                .await?;
            output_data(output_format, &results)
        }
        MarketplaceCommands::Label {
            connection_id,
            shipment_id,
        } => {
            let label = client.generate_label(&connection_id, &shipment_id).await?;
            output_data(output_format, &label)
        }
        MarketplaceCommands::Dispatch {
            connection_id,
            shipment_id,
        } => {
            client
                .dispatch_shipment(&connection_id, &shipment_id)
                .await?;
            output_success(
                output_format,
                &format!("Dispatched shipment {}", shipment_id),
                None,
            )
        }
    }
}

fn day_start(date: &str) -> anyhow::Result<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")?;
    Ok(date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| anyhow::anyhow!("invalid date: {date}"))?
        .and_utc())
}
