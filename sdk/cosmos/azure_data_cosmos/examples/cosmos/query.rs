// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use std::error::Error;

use azure_data_cosmos::{
    clients::{ContainerClientMethods, DatabaseClientMethods},
    CosmosClient, CosmosClientMethods, FeedPage, FeedPager, PartitionKey, QueryOptions,
    QueryPartitionStrategy,
};
use clap::{Args, Subcommand};
use futures::TryStreamExt;
use serde::de::DeserializeOwned;
use std::fmt::Debug;

/// Run a query against databases, containers, or the items of a container.
#[derive(Clone, Args)]
pub struct QueryCommand {
    #[command(subcommand)]
    subcommand: Subcommands,
}

#[derive(Clone, Subcommand)]
enum Subcommands {
    Items {
        /// The database to query.
        database: String,

        /// The container to query.
        container: String,

        /// The query to execute.
        query: String,

        /// The partition key to scope the query to. Omit it to run a cross-partition query on the gateway.
        #[arg(long, short)]
        partition_key: Option<String>,

        /// The maximum number of items per page.
        #[arg(long)]
        max_item_count: Option<u32>,
    },
    Databases {
        /// The query to execute.
        query: String,
    },
    Containers {
        /// The database to query.
        database: String,

        /// The query to execute.
        query: String,
    },
}

impl QueryCommand {
    pub async fn run(self, client: CosmosClient) -> Result<(), Box<dyn Error>> {
        match self.subcommand {
            Subcommands::Items {
                database,
                container,
                query,
                partition_key,
                max_item_count,
            } => {
                let container_client = client
                    .database_client(&database)
                    .container_client(&container);

                let strategy = match partition_key {
                    Some(pk) => QueryPartitionStrategy::SinglePartition(PartitionKey::from(pk)),
                    None => QueryPartitionStrategy::CrossPartition,
                };
                let options = QueryOptions {
                    max_item_count,
                    ..Default::default()
                };
                let pages = container_client.query_items::<serde_json::Value>(
                    query,
                    strategy,
                    Some(options),
                )?;
                print_pages("Items", pages).await
            }
            Subcommands::Databases { query } => {
                print_pages("Databases", client.query_databases(query, None)?).await
            }
            Subcommands::Containers { database, query } => {
                let db_client = client.database_client(&database);
                print_pages("Containers", db_client.query_containers(query, None)?).await
            }
        }
    }
}

async fn print_pages<T: Debug + DeserializeOwned + Send + Sync + 'static>(
    label: &str,
    mut pages: FeedPager<T>,
) -> Result<(), Box<dyn Error>> {
    while let Some(page) = pages.try_next().await? {
        println!(
            "Results Page ({} RU)",
            FeedPage::<T>::request_charge(page.headers()).unwrap_or_default()
        );
        println!("  {label}:");
        for item in page.into_body().await?.into_items() {
            println!("    * {:#?}", item);
        }
    }
    Ok(())
}
