use clap::Subcommand;
use serde_json::Value;

use crate::api::ApiClient;
use crate::cli::utils::{output_data, output_success};
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum ProductCommands {
    #[command(about = "List all products")]
    List,

    #[command(about = "Show one product")]
    Get {
        #[arg(help = "Product id")]
        id: String,
    },

    #[command(about = "Create a product from a JSON document")]
    Create {
        #[arg(help = "Product JSON")]
        body: String,
    },

    #[command(about = "Update a product from a JSON document")]
    Update {
        #[arg(help = "Product id")]
        id: String,
        #[arg(help = "Updated product JSON")]
        body: String,
    },

    #[command(about = "Delete a product")]
    Delete {
        #[arg(help = "Product id")]
        id: String,
    },
}

pub async fn handle(
    cmd: ProductCommands,
    client: &ApiClient,
    output_format: &OutputFormat,
) -> anyhow::Result<()> {
    match cmd {
        ProductCommands::List => {
            let products = client.products().await?;
            output_data(output_format, &products)
        }
        ProductCommands::Get { id } => {
            let product = client.product(&id).await?;
            output_data(output_format, &product)
        }
        ProductCommands::Create { body } => {
            let body: Value = serde_json::from_str(&body)?;
            let id = client.create_product(&body).await?;
            output_success(output_format, &format!("Created product {}", id), None)
        }
        ProductCommands::Update { id, body } => {
            let body: Value = serde_json::from_str(&body)?;
            client.update_product(&id, &body).await?;
            output_success(output_format, &format!("Updated product {}", id), None)
        }
        ProductCommands::Delete { id } => {
            client.delete_product(&id).await?;
            output_success(output_format, &format!("Deleted product {}", id), None)
        }
    }
}
