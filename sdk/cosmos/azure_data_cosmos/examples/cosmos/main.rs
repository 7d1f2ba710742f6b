// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use std::error::Error;

use azure_data_cosmos::{AuthorizationToken, CosmosClient, CosmosClientOptions};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod crud;
mod query;

/// A small command-line tool for poking at a Cosmos DB account.
#[derive(Parser)]
pub struct ProgramArgs {
    /// The Cosmos DB endpoint to connect to, e.g. `https://myaccount.documents.azure.com/`.
    #[arg(long, short, env = "AZURE_COSMOS_ENDPOINT", conflicts_with = "connection_string")]
    endpoint: Option<String>,

    /// The account key to authenticate with.
    #[arg(long, short, env = "AZURE_COSMOS_KEY", requires = "endpoint")]
    key: Option<String>,

    /// An account connection string, used instead of `--endpoint` and `--key`.
    #[arg(long, env = "AZURE_COSMOS_CONNECTION_STRING")]
    connection_string: Option<String>,

    #[command(subcommand)]
    subcommand: Subcommands,
}

#[derive(Subcommand)]
enum Subcommands {
    Query(query::QueryCommand),
    Item(crud::ItemCommand),
}

#[tokio::main]
pub async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = ProgramArgs::parse();
    let client = create_client(&args)?;

    match args.subcommand {
        Subcommands::Query(cmd) => cmd.run(client).await,
        Subcommands::Item(cmd) => cmd.run(client).await,
    }
}

fn create_client(args: &ProgramArgs) -> Result<CosmosClient, Box<dyn Error>> {
    let options = Some(CosmosClientOptions::default());
    if let Some(connection_string) = args.connection_string.as_deref() {
        return Ok(CosmosClient::with_connection_string(connection_string, options)?);
    }
    match (args.endpoint.as_deref(), args.key.as_deref()) {
        (Some(endpoint), Some(key)) => Ok(CosmosClient::new(
            endpoint,
            AuthorizationToken::primary_key(key)?,
            options,
        )?),
        _ => Err("either --connection-string or both --endpoint and --key are required".into()),
    }
}
