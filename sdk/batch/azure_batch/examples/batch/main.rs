// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use std::error::Error;

use azure_batch::{BatchClient, BatchCredentials, BatchPager, ListOptions};
use clap::{Parser, Subcommand};
use futures::TryStreamExt;
use serde::de::DeserializeOwned;
use tracing_subscriber::EnvFilter;

/// Lists the pools, jobs or tasks of a Batch account.
#[derive(Parser)]
struct ProgramArgs {
    /// The account URL, e.g. `https://myaccount.westus.batch.azure.com`.
    #[arg(long, short, env = "BATCH_ACCOUNT_ENDPOINT")]
    endpoint: String,

    #[arg(long, short, env = "BATCH_ACCOUNT_NAME", requires = "key")]
    account_name: Option<String>,

    #[arg(long, short, env = "BATCH_ACCOUNT_KEY")]
    key: Option<String>,

    /// A Microsoft Entra access token, used instead of the account key.
    #[arg(long, env = "BATCH_ACCESS_TOKEN", conflicts_with = "key")]
    token: Option<String>,

    /// An OData filter, e.g. `state eq 'active'`.
    #[arg(long)]
    filter: Option<String>,

    #[command(subcommand)]
    subcommand: Subcommands,
}

#[derive(Subcommand)]
enum Subcommands {
    Pools,
    Jobs,
    Tasks { job_id: String },
    Nodes { pool_id: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = ProgramArgs::parse();
    let credentials = match (args.account_name, args.key, args.token) {
        (Some(account_name), Some(key), _) => BatchCredentials::shared_key(account_name, key)?,
        (_, _, Some(token)) => BatchCredentials::token(token),
        _ => return Err("either --account-name and --key, or --token, are required".into()),
    };
    let client = BatchClient::new(&args.endpoint, credentials, None)?;
    let options = Some(ListOptions {
        filter: args.filter,
        ..Default::default()
    });

    match args.subcommand {
        Subcommands::Pools => {
            print_each(client.pools().list(options), |pool| {
                println!(
                    "{}\t{:?}\t{}/{} nodes",
                    pool.id.unwrap_or_default(),
                    pool.allocation_state,
                    pool.current_dedicated_nodes.unwrap_or_default(),
                    pool.target_dedicated_nodes.unwrap_or_default()
                )
            })
            .await?;
        }
        Subcommands::Jobs => {
            print_each(client.jobs().list(options), |job| {
                println!("{}\t{:?}", job.id.unwrap_or_default(), job.state)
            })
            .await?;
        }
        Subcommands::Tasks { job_id } => {
            print_each(client.tasks().list(&job_id, options), |task| {
                println!(
                    "{}\t{:?}\texit code {:?}",
                    task.id.unwrap_or_default(),
                    task.state,
                    task.execution_info.and_then(|info| info.exit_code)
                )
            })
            .await?;
        }
        Subcommands::Nodes { pool_id } => {
            print_each(client.compute_nodes().list(&pool_id, options), |node| {
                println!("{}\t{:?}", node.id.unwrap_or_default(), node.state)
            })
            .await?;
        }
    }

    Ok(())
}

async fn print_each<T: DeserializeOwned + Send + Sync + 'static>(
    mut pager: BatchPager<T>,
    print: impl Fn(T),
) -> azure_core::Result<()> {
    while let Some(page) = pager.try_next().await? {
        page.into_body().await?.into_items().into_iter().for_each(&print);
    }
    Ok(())
}
