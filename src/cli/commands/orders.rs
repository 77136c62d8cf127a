use clap::Subcommand;
use serde_json::Value;

use crate::api::ApiClient;
use crate::cli::utils::{output_data, output_success};
use crate::cli::OutputFormat;
use crate::models::fulfillment::ShipmentStatus;

#[derive(Subcommand)]
pub enum OrderCommands {
    #[command(about = "List all orders")]
    List,

    #[command(about = "Show one order")]
    Get {
        #[arg(help = "Order id")]
        id: String,
    },

    #[command(about = "Create an order from a JSON document")]
    Create {
        #[arg(help = "Order JSON")]
        body: String,
    },

    #[command(about = "Update an order from a JSON document")]
    Update {
        #[arg(help = "Order id")]
        id: String,
        #[arg(help = "Updated order JSON")]
        body: String,
    },

    #[command(about = "Delete an order")]
    Delete {
        #[arg(help = "Order id")]
        id: String,
    },

    #[command(about = "List shipments")]
    Shipments,

    #[command(about = "Update a shipment's status")]
    ShipmentStatus {
        #[arg(help = "Shipment id")]
        id: String,
        #[arg(help = "New status")]
        status: String,
    },
}

pub async fn handle(
    cmd: OrderCommands,
    client: &ApiClient,
    output_format: &OutputFormat,
) -> anyhow::Result<()> {
    match cmd {
        OrderCommands::List => {
            let orders = client.orders().await?;
            output_data(output_format, &orders)
        }
        OrderCommands::Get { id } => {
            let order = client.order(&id).await?;
            output_data(output_format, &order)
        }
        OrderCommands::Create { body } => {
            let body: Value = serde_json::from_str(&body)?;
            let id = client.create_order(&body).await?;
            output_success(output_format, &format!("Created order {}", id), None)
        }
        OrderCommands::Update { id, body } => {
            let body: Value = serde_json::from_str(&body)?;
            client.update_order(&id, &body).await?;
            output_success(output_format, &format!("Updated order {}", id), None)
        }
        OrderCommands::Delete { id } => {
            client.delete_order(&id).await?;
            output_success(output_format, &format!("Deleted order {}", id), None)
        }
        OrderCommands::Shipments => {
            let shipments = client.shipments().await?;
            output_data(output_format, &shipments)
        }
        OrderCommands::ShipmentStatus { id, status } => {
            let parsed: ShipmentStatus = serde_json::from_value(Value::String(status.clone()))?;
            client.update_shipment_status(&id, parsed).await?;
            output_success(
                output_format,
                &format!("Shipment {} marked {}", id, status),
                None,
            )
        }
    }
}
