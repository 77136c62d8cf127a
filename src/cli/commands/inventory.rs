use clap::Subcommand;
use serde_json::Value;

use crate::api::ApiClient;
use crate::cli::utils::{output_data, output_success};
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum InventoryCommands {
    #[command(about = "List inventory levels")]
    List,

    #[command(about = "Adjust stock for a product at a warehouse")]
    Adjust {
        #[arg(help = "Product id")]
        product_id: String,
        #[arg(help = "Warehouse id")]
        warehouse_id: String,
        #[arg(help = "Signed quantity delta", allow_hyphen_values = true)]
        adjustment: i64,
    },

    #[command(about = "List vendors")]
    Vendors,

    #[command(about = "Create a vendor from a JSON document")]
    CreateVendor {
        #[arg(help = "Vendor JSON")]
        body: String,
    },

    #[command(about = "List purchase orders")]
    PurchaseOrders,

    #[command(about = "Show one purchase order")]
    PurchaseOrder {
        #[arg(help = "Purchase order id")]
        id: String,
    },

    #[command(about = "Create a purchase order from a JSON document")]
    CreatePurchaseOrder {
        #[arg(help = "Purchase order JSON")]
        body: String,
    },

    #[command(about = "Record received line items against a purchase order")]
    Receive {
        #[arg(help = "Purchase order id")]
        id: String,
        #[arg(help = "Received items JSON array")]
        items: String,
    },
}

pub async fn handle(
    cmd: InventoryCommands,
    client: &ApiClient,
    output_format: &OutputFormat,
) -> anyhow::Result<()> {
    match cmd {
        InventoryCommands::List => {
            let inventory = client.inventory().await?;
            output_data(output_format, &inventory)
        }
        InventoryCommands::Adjust {
            product_id,
            warehouse_id,
            adjustment,
        } => {
            client
                .adjust_inventory(&product_id, &warehouse_id, adjustment)
                .await?;
            output_success(
                output_format,
                &format!("Adjusted product {} by {}", product_id, adjustment),
                None,
            )
        }
        InventoryCommands::Vendors => {
            let vendors = client.vendors().await?;
            output_data(output_format, &vendors)
        }
        InventoryCommands::CreateVendor { body } => {
            let body: Value = serde_json::from_str(&body)?;
            let id = client.create_vendor(&body).await?;
            output_success(output_format, &format!("Created vendor {}", id), None)
        }
        InventoryCommands::PurchaseOrders => {
            let orders = client.purchase_orders().await?;
            output_data(output_format, &orders)
        }
        InventoryCommands::PurchaseOrder { id } => {
            let order = client.purchase_order(&id).await?;
            output_data(output_format, &order)
        }
        InventoryCommands::CreatePurchaseOrder { body } => {
            let body: Value = serde_json::from_str(&body)?;
            let id = client.create_purchase_order(&body).await?;
            output_success(
                output_format,
                &format!("Created purchase order {}", id),
                None,
            )
        }
        InventoryCommands::Receive { id, items } => {
            let items: Value = serde_json::from_str(&items)?;
            client.receive_purchase_order(&id, &items).await?;
            output_success(
                output_format,
                &format!("Received items on purchase order {}", id),
                None,
            )
        }
    }
}
