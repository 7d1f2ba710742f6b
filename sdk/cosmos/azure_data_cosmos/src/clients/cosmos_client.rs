// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use crate::{
    clients::DatabaseClient,
    models::DatabaseProperties,
    pipeline::{AuthorizationPolicy, CosmosPipeline},
    resource_context::{ResourceLink, ResourceType},
    AuthorizationToken, ConnectionString, CosmosClientOptions, CreateDatabaseOptions, FeedPager,
    Query, QueryDatabasesOptions,
};
use azure_core::{
    error::{Error, ErrorKind},
    http::{Method, Request, Response},
};
use serde::Serialize;
use url::Url;

/// Defines the methods provided by a [`CosmosClient`]
///
/// This trait is intended to allow you to mock out the `CosmosClient` when testing your application.
/// Rather than depending on `CosmosClient`, you can depend on a generic parameter constrained by this trait, or an `impl CosmosClientMethods` type.
pub trait CosmosClientMethods {
    /// Gets a [`DatabaseClient`] that can be used to access the database with the specified ID.
    ///
    /// # Arguments
    /// * `id` - The ID of the database.
    fn database_client(&self, id: impl AsRef<str>) -> DatabaseClient;

    /// Gets the endpoint of the database account this client is connected to.
    fn endpoint(&self) -> &Url;

    /// Creates a new database.
    ///
    /// # Arguments
    /// * `id` - The ID of the new database.
    /// * `options` - Optional parameters for the request.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn doc() -> azure_core::Result<()> {
    /// # use azure_data_cosmos::{CosmosClient, clients::CosmosClientMethods};
    /// # let client: CosmosClient = panic!("this is a non-running example");
    /// let database = client.create_database("SalesDB", None).await?.into_body().await?;
    /// println!("created {} ({:?})", database.id, database.system_properties.resource_id);
    /// # Ok(()) }
    /// ```
    #[allow(async_fn_in_trait)] // REASON: See https://github.com/Azure/azure-sdk-for-rust/issues/1796 for detailed justification
    async fn create_database(
        &self,
        id: &str,
        options: Option<CreateDatabaseOptions>,
    ) -> azure_core::Result<Response<DatabaseProperties>>;

    /// Executes a query against databases in the account.
    ///
    /// # Arguments
    ///
    /// * `query` - The query to execute.
    /// * `options` - Optional parameters for the request.
    ///
    /// # Examples
    ///
    /// The `query` parameter accepts anything that can be transformed [`Into`] a [`Query`].
    /// This allows simple queries without parameters to be expressed easily:
    ///
    /// ```rust,no_run
    /// # async fn doc() -> azure_core::Result<()> {
    /// # use azure_data_cosmos::{CosmosClient, clients::CosmosClientMethods};
    /// # let client: CosmosClient = panic!("this is a non-running example");
    /// let dbs = client.query_databases("SELECT * FROM dbs", None)?;
    /// # Ok(()) }
    /// ```
    ///
    /// See [`Query`] for more information on how to specify a query.
    fn query_databases(
        &self,
        query: impl Into<Query>,
        options: Option<QueryDatabasesOptions>,
    ) -> azure_core::Result<FeedPager<DatabaseProperties>>;
}

/// Client for Azure Cosmos DB.
#[derive(Debug, Clone)]
pub struct CosmosClient {
    databases_link: ResourceLink,
    pipeline: CosmosPipeline,
}

impl CosmosClient {
    /// Creates a new CosmosClient, using key authentication.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The full URL of the Cosmos DB account, for example `https://myaccount.documents.azure.com/`.
    /// * `token` - The credential to sign requests with. See [`AuthorizationToken`].
    /// * `options` - Optional configuration for the client.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use azure_data_cosmos::{AuthorizationToken, CosmosClient};
    ///
    /// let key = AuthorizationToken::primary_key("bXkga2V5").unwrap();
    /// let client = CosmosClient::new("https://myaccount.documents.azure.com/", key, None).unwrap();
    /// ```
    pub fn new(
        endpoint: impl AsRef<str>,
        token: AuthorizationToken,
        options: Option<CosmosClientOptions>,
    ) -> azure_core::Result<Self> {
        let options = options.unwrap_or_default();
        let endpoint = Url::parse(endpoint.as_ref()).map_err(|error| {
            Error::full(
                ErrorKind::DataConversion,
                error,
                format!("invalid account endpoint '{}'", endpoint.as_ref()),
            )
        })?;
        Ok(Self {
            databases_link: ResourceLink::root(ResourceType::Databases),
            pipeline: CosmosPipeline::new(
                endpoint,
                AuthorizationPolicy::new(token),
                options.client_options,
                options.consistency_level,
            ),
        })
    }

    /// Creates a new CosmosClient from a connection string such as the ones the Azure portal shows.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use azure_data_cosmos::CosmosClient;
    ///
    /// let client = CosmosClient::with_connection_string(
    ///     "AccountEndpoint=https://myaccount.documents.azure.com:443/;AccountKey=bXkga2V5;",
    ///     None,
    /// )
    /// .unwrap();
    /// ```
    pub fn with_connection_string(
        connection_string: impl AsRef<str>,
        options: Option<CosmosClientOptions>,
    ) -> azure_core::Result<Self> {
        let connection_string: ConnectionString = connection_string.as_ref().parse()?;
        let token = AuthorizationToken::primary_key(connection_string.account_key)?;
        Self::new(connection_string.account_endpoint, token, options)
    }
}

impl CosmosClientMethods for CosmosClient {
    fn database_client(&self, id: impl AsRef<str>) -> DatabaseClient {
        DatabaseClient::new(self.pipeline.clone(), id.as_ref())
    }

    fn endpoint(&self) -> &Url {
        &self.pipeline.endpoint
    }

    async fn create_database(
        &self,
        id: &str,
        options: Option<CreateDatabaseOptions<'_>>,
    ) -> azure_core::Result<Response<DatabaseProperties>> {
        #[derive(Serialize)]
        struct RequestBody<'a> {
            id: &'a str,
        }

        let options = options.unwrap_or_default();
        let mut req = Request::new(self.pipeline.url(&self.databases_link), Method::Post);
        if let Some(throughput) = &options.throughput {
            throughput.add_create_headers(&mut req)?;
        }
        req.set_json(&RequestBody { id })?;

        self.pipeline
            .send(
                options.method_options.context,
                &mut req,
                self.databases_link.clone(),
            )
            .await
    }

    fn query_databases(
        &self,
        query: impl Into<Query>,
        options: Option<QueryDatabasesOptions>,
    ) -> azure_core::Result<FeedPager<DatabaseProperties>> {
        let options = options.unwrap_or_default();
        let mut req = Request::new(self.pipeline.url(&self.databases_link), Method::Post);
        if let Some(max_item_count) = options.max_item_count {
            req.insert_header(crate::constants::MAX_ITEM_COUNT, max_item_count.to_string());
        }

        self.pipeline.send_query_request(
            options.method_options.context,
            query.into(),
            req,
            self.databases_link.clone(),
            options.continuation,
        )
    }
}
