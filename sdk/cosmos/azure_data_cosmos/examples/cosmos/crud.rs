// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use std::error::Error;

use azure_data_cosmos::{
    clients::{ContainerClientMethods, DatabaseClientMethods},
    CosmosClient, CosmosClientMethods, ItemOptions,
};
use clap::{Args, Subcommand};

/// Create, read, upsert or delete a single item.
#[derive(Clone, Args)]
pub struct ItemCommand {
    /// The database containing the item.
    #[arg(long, short)]
    database: String,

    /// The container containing the item.
    #[arg(long, short)]
    container: String,

    /// The partition key of the item.
    #[arg(long, short)]
    partition_key: String,

    #[command(subcommand)]
    subcommand: Subcommands,
}

#[derive(Clone, Subcommand)]
enum Subcommands {
    /// Create a new item from a JSON document.
    Create {
        /// The item, as JSON.
        json: String,
    },
    /// Read an item by id.
    Read {
        /// The id of the item.
        item_id: String,
    },
    /// Create or replace an item from a JSON document.
    Upsert {
        /// The item, as JSON.
        json: String,
    },
    /// Delete an item by id.
    Delete {
        /// The id of the item.
        item_id: String,
    },
}

impl ItemCommand {
    pub async fn run(self, client: CosmosClient) -> Result<(), Box<dyn Error>> {
        let container_client = client
            .database_client(&self.database)
            .container_client(&self.container);
        let pk = self.partition_key;
        let echo = Some(ItemOptions {
            enable_content_response_on_write: true,
            ..Default::default()
        });

        match self.subcommand {
            Subcommands::Create { json } => {
                let item: serde_json::Value = serde_json::from_str(&json)?;
                let created = container_client
                    .create_item(pk, item, echo)
                    .await?
                    .into_body().await?;
                println!("Created item:");
                println!("{:#?}", created);
            }
            Subcommands::Read { item_id } => {
                let response = container_client
                    .read_item::<serde_json::Value>(pk, &item_id, None)
                    .await;
                match response {
                    Ok(response) => {
                        println!("Found item:");
                        println!("{:#?}", response.into_body().await?);
                    }
                    Err(e) if e.http_status() == Some(azure_core::http::StatusCode::NotFound) => {
                        println!("Item not found!");
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            Subcommands::Upsert { json } => {
                let item: serde_json::Value = serde_json::from_str(&json)?;
                let upserted = container_client
                    .upsert_item(pk, item, echo)
                    .await?
                    .into_body().await?;
                println!("Upserted item:");
                println!("{:#?}", upserted);
            }
            Subcommands::Delete { item_id } => {
                container_client.delete_item(pk, &item_id, None).await?;
                println!("Item deleted");
            }
        }
        Ok(())
    }
}
