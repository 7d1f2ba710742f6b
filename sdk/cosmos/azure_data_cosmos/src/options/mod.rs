// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use azure_core::http::{
    headers::{Header, HeaderName, HeaderValue},
    ClientMethodOptions, ClientOptions,
};

use crate::{constants, models::ThroughputProperties};

mod throughput_options;

pub use throughput_options::*;

/// Options used when creating a [`CosmosClient`](crate::CosmosClient).
#[derive(Clone, Debug, Default)]
pub struct CosmosClientOptions {
    pub client_options: ClientOptions,

    /// Requests a weaker consistency level than the account default for every request.
    pub consistency_level: Option<ConsistencyLevel>,
}

/// The consistency levels Cosmos DB accounts support.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsistencyLevel {
    Strong,
    BoundedStaleness,
    Session,
    ConsistentPrefix,
    Eventual,
}

impl ConsistencyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsistencyLevel::Strong => "Strong",
            ConsistencyLevel::BoundedStaleness => "BoundedStaleness",
            ConsistencyLevel::Session => "Session",
            ConsistencyLevel::ConsistentPrefix => "ConsistentPrefix",
            ConsistencyLevel::Eventual => "Eventual",
        }
    }
}

impl Header for ConsistencyLevel {
    fn name(&self) -> HeaderName {
        constants::CONSISTENCY_LEVEL
    }

    fn value(&self) -> HeaderValue {
        HeaderValue::from_static(self.as_str())
    }
}

/// Whether a written item is added to the container's indexes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexingDirective {
    Default,
    Include,
    Exclude,
}

impl Header for IndexingDirective {
    fn name(&self) -> HeaderName {
        constants::INDEXING_DIRECTIVE
    }

    fn value(&self) -> HeaderValue {
        HeaderValue::from_static(match self {
            IndexingDirective::Default => "Default",
            IndexingDirective::Include => "Include",
            IndexingDirective::Exclude => "Exclude",
        })
    }
}

/// Options to be passed to [`CosmosClient::create_database()`](crate::CosmosClient::create_database()).
#[derive(Clone, Debug, Default)]
pub struct CreateDatabaseOptions<'a> {
    pub method_options: ClientMethodOptions<'a>,
    /// Provisions shared throughput for the containers of the new database.
    pub throughput: Option<ThroughputProperties>,
}

/// Options to be passed to [`DatabaseClient::read()`](crate::clients::DatabaseClient::read()).
#[derive(Clone, Debug, Default)]
pub struct ReadDatabaseOptions<'a> {
    pub method_options: ClientMethodOptions<'a>,
}

/// Options to be passed to [`DatabaseClient::delete()`](crate::clients::DatabaseClient::delete()).
#[derive(Clone, Debug, Default)]
pub struct DeleteDatabaseOptions<'a> {
    pub method_options: ClientMethodOptions<'a>,
}

/// Options to be passed to [`CosmosClient::query_databases()`](crate::CosmosClient::query_databases()).
#[derive(Clone, Debug, Default)]
pub struct QueryDatabasesOptions<'a> {
    pub method_options: ClientMethodOptions<'a>,
    pub max_item_count: Option<u32>,
    /// Resumes a query from the continuation of an earlier page.
    pub continuation: Option<String>,
}

/// Options to be passed to [`DatabaseClient::create_container()`](crate::clients::DatabaseClient::create_container()).
#[derive(Clone, Debug, Default)]
pub struct CreateContainerOptions<'a> {
    pub method_options: ClientMethodOptions<'a>,
    /// Provisions dedicated throughput for the new container.
    pub throughput: Option<ThroughputProperties>,
}

/// Options to be passed to [`ContainerClient::read()`](crate::clients::ContainerClient::read()).
#[derive(Clone, Debug, Default)]
pub struct ReadContainerOptions<'a> {
    pub method_options: ClientMethodOptions<'a>,
}

/// Options to be passed to [`ContainerClient::replace()`](crate::clients::ContainerClient::replace()).
#[derive(Clone, Debug, Default)]
pub struct ReplaceContainerOptions<'a> {
    pub method_options: ClientMethodOptions<'a>,
}

/// Options to be passed to [`ContainerClient::delete()`](crate::clients::ContainerClient::delete()).
#[derive(Clone, Debug, Default)]
pub struct DeleteContainerOptions<'a> {
    pub method_options: ClientMethodOptions<'a>,
}

/// Options to be passed to [`DatabaseClient::query_containers()`](crate::clients::DatabaseClient::query_containers()).
#[derive(Clone, Debug, Default)]
pub struct QueryContainersOptions<'a> {
    pub method_options: ClientMethodOptions<'a>,
    pub max_item_count: Option<u32>,
    pub continuation: Option<String>,
}

/// Options to be passed to APIs that manipulate items.
#[derive(Clone, Debug, Default)]
pub struct ItemOptions<'a> {
    pub method_options: ClientMethodOptions<'a>,

    /// Fails the operation with `412 Precondition Failed` unless the item's current ETag matches.
    pub if_match_etag: Option<String>,

    /// Overrides the session token this client would otherwise send.
    pub session_token: Option<String>,

    /// When `false` (the default), write operations ask the service to omit the item from the
    /// response body, sending `Prefer: return=minimal`.
    ///
    /// Set to `true` to deserialize the written item from the response.
    pub enable_content_response_on_write: bool,

    pub indexing_directive: Option<IndexingDirective>,
}

/// Options to be passed to [`ContainerClient::query_items()`](crate::clients::ContainerClient::query_items())
/// and [`ContainerClient::read_all_items()`](crate::clients::ContainerClient::read_all_items()).
#[derive(Clone, Debug, Default)]
pub struct QueryOptions<'a> {
    pub method_options: ClientMethodOptions<'a>,

    /// The maximum number of items per page. The service picks a page size when unset.
    pub max_item_count: Option<u32>,

    /// Resumes from the continuation of an earlier page.
    pub continuation: Option<String>,

    pub session_token: Option<String>,
}

/// Options to be passed to stored procedure management APIs.
#[derive(Clone, Debug, Default)]
pub struct StoredProcedureOptions<'a> {
    pub method_options: ClientMethodOptions<'a>,
}

/// Options to be passed to [`ContainerClient::execute_stored_procedure()`](crate::clients::ContainerClient::execute_stored_procedure()).
#[derive(Clone, Debug, Default)]
pub struct ExecuteStoredProcedureOptions<'a> {
    pub method_options: ClientMethodOptions<'a>,
    pub session_token: Option<String>,
}
