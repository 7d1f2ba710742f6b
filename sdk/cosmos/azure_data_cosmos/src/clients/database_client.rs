// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use crate::{
    clients::{offers, ContainerClient},
    models::{ContainerProperties, DatabaseProperties, ThroughputProperties},
    pipeline::CosmosPipeline,
    resource_context::{ResourceLink, ResourceType},
    CreateContainerOptions, DeleteDatabaseOptions, FeedPager, Query, QueryContainersOptions,
    ReadDatabaseOptions, ThroughputOptions,
};

use azure_core::http::{Method, Request, Response};

#[cfg(doc)]
use crate::CosmosClientMethods;

/// Defines the methods provided by a [`DatabaseClient`]
///
/// This trait is intended to allow you to mock out the `DatabaseClient` when testing your application.
/// Rather than depending on `DatabaseClient`, you can depend on a generic parameter constrained by this trait, or an `impl DatabaseClientMethods` type.
pub trait DatabaseClientMethods {
    /// Reads the properties of the database.
    ///
    /// # Arguments
    ///
    /// * `options` - Optional parameters for the request.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn doc() {
    /// # use azure_data_cosmos::clients::{DatabaseClient, DatabaseClientMethods};
    /// # let database_client: DatabaseClient = panic!("this is a non-running example");
    /// let response = database_client.read(None)
    ///     .await.unwrap()
    ///     .into_body()
    ///     .await
    ///     .unwrap();
    /// # }
    /// ```
    #[allow(async_fn_in_trait)] // REASON: See https://github.com/Azure/azure-sdk-for-rust/issues/1796 for detailed justification
    async fn read(
        &self,
        options: Option<ReadDatabaseOptions>,
    ) -> azure_core::Result<Response<DatabaseProperties>>;

    /// Deletes the database and everything in it.
    #[allow(async_fn_in_trait)] // REASON: See https://github.com/Azure/azure-sdk-for-rust/issues/1796 for detailed justification
    async fn delete(
        &self,
        options: Option<DeleteDatabaseOptions>,
    ) -> azure_core::Result<Response>;

    /// Gets a [`ContainerClient`] that can be used to access the collection with the specified name.
    ///
    /// # Arguments
    /// * `name` - The name of the container.
    fn container_client(&self, name: impl AsRef<str>) -> ContainerClient;

    /// Returns the identifier of the Cosmos database.
    fn id(&self) -> &str;

    /// Creates a new container.
    ///
    /// # Arguments
    /// * `properties` - A [`ContainerProperties`] describing the new container.
    /// * `options` - Optional parameters for the request.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn doc() -> azure_core::Result<()> {
    /// # use azure_data_cosmos::clients::{DatabaseClient, DatabaseClientMethods};
    /// # use azure_data_cosmos::models::ContainerProperties;
    /// # let db_client: DatabaseClient = panic!("this is a non-running example");
    /// let properties = ContainerProperties {
    ///     id: "Products".into(),
    ///     partition_key: "/category".into(),
    ///     ..Default::default()
    /// };
    /// db_client.create_container(properties, None).await?;
    /// # Ok(()) }
    /// ```
    #[allow(async_fn_in_trait)] // REASON: See https://github.com/Azure/azure-sdk-for-rust/issues/1796 for detailed justification
    async fn create_container(
        &self,
        properties: ContainerProperties,
        options: Option<CreateContainerOptions>,
    ) -> azure_core::Result<Response<ContainerProperties>>;

    /// Executes a query against containers in the database.
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
    /// # async fn doc() {
    /// # use azure_data_cosmos::clients::{DatabaseClient, DatabaseClientMethods};
    /// # let db_client: DatabaseClient = panic!("this is a non-running example");
    /// let containers = db_client.query_containers(
    ///     "SELECT * FROM dbs",
    ///     None).unwrap();
    /// # }
    /// ```
    ///
    /// See [`Query`] for more information on how to specify a query.
    fn query_containers(
        &self,
        query: impl Into<Query>,
        options: Option<QueryContainersOptions>,
    ) -> azure_core::Result<FeedPager<ContainerProperties>>;

    /// Reads the throughput provisioned for the database, if it has shared throughput.
    #[allow(async_fn_in_trait)] // REASON: See https://github.com/Azure/azure-sdk-for-rust/issues/1796 for detailed justification
    async fn read_throughput(
        &self,
        options: Option<ThroughputOptions>,
    ) -> azure_core::Result<Option<Response<ThroughputProperties>>>;

    /// Replaces the throughput provisioned for the database.
    ///
    /// Fails if the database has no shared throughput.
    #[allow(async_fn_in_trait)] // REASON: See https://github.com/Azure/azure-sdk-for-rust/issues/1796 for detailed justification
    async fn replace_throughput(
        &self,
        throughput: ThroughputProperties,
        options: Option<ThroughputOptions>,
    ) -> azure_core::Result<Response<ThroughputProperties>>;
}

/// A client for working with a specific database in a Cosmos DB account.
///
/// You can get a `DatabaseClient` by calling [`CosmosClient::database_client()`](crate::CosmosClient::database_client()).
#[derive(Debug, Clone)]
pub struct DatabaseClient {
    link: ResourceLink,
    containers_link: ResourceLink,
    database_id: String,
    pipeline: CosmosPipeline,
}

impl DatabaseClient {
    pub(crate) fn new(pipeline: CosmosPipeline, database_id: &str) -> Self {
        let database_id = database_id.to_string();
        let link = ResourceLink::root(ResourceType::Databases).item(&database_id);
        let containers_link = link.feed(ResourceType::Containers);

        Self {
            link,
            containers_link,
            database_id,
            pipeline,
        }
    }

    async fn resource_id(&self, options: &ThroughputOptions<'_>) -> azure_core::Result<String> {
        let db = self
            .read(Some(ReadDatabaseOptions {
                method_options: options.method_options.clone(),
            }))
            .await?
            .into_body()
            .await?;
        offers::require_resource_id(db.system_properties.resource_id, "database")
    }
}

impl DatabaseClientMethods for DatabaseClient {
    async fn read(
        &self,
        options: Option<ReadDatabaseOptions<'_>>,
    ) -> azure_core::Result<Response<DatabaseProperties>> {
        let options = options.unwrap_or_default();
        let mut req = Request::new(self.pipeline.url(&self.link), Method::Get);
        self.pipeline
            .send(options.method_options.context, &mut req, self.link.clone())
            .await
    }

    async fn delete(
        &self,
        options: Option<DeleteDatabaseOptions<'_>>,
    ) -> azure_core::Result<Response> {
        let options = options.unwrap_or_default();
        let mut req = Request::new(self.pipeline.url(&self.link), Method::Delete);
        self.pipeline
            .send(options.method_options.context, &mut req, self.link.clone())
            .await
    }

    fn container_client(&self, name: impl AsRef<str>) -> ContainerClient {
        ContainerClient::new(self.pipeline.clone(), &self.link, name.as_ref())
    }

    fn id(&self) -> &str {
        &self.database_id
    }

    async fn create_container(
        &self,
        properties: ContainerProperties,
        options: Option<CreateContainerOptions<'_>>,
    ) -> azure_core::Result<Response<ContainerProperties>> {
        let options = options.unwrap_or_default();
        let mut req = Request::new(self.pipeline.url(&self.containers_link), Method::Post);
        if let Some(throughput) = &options.throughput {
            throughput.add_create_headers(&mut req)?;
        }
        req.set_json(&properties)?;

        self.pipeline
            .send(
                options.method_options.context,
                &mut req,
                self.containers_link.clone(),
            )
            .await
    }

    fn query_containers(
        &self,
        query: impl Into<Query>,
        options: Option<QueryContainersOptions>,
    ) -> azure_core::Result<FeedPager<ContainerProperties>> {
        let options = options.unwrap_or_default();
        let mut req = Request::new(self.pipeline.url(&self.containers_link), Method::Post);
        if let Some(max_item_count) = options.max_item_count {
            req.insert_header(crate::constants::MAX_ITEM_COUNT, max_item_count.to_string());
        }

        self.pipeline.send_query_request(
            options.method_options.context,
            query.into(),
            req,
            self.containers_link.clone(),
            options.continuation,
        )
    }

    async fn read_throughput(
        &self,
        options: Option<ThroughputOptions<'_>>,
    ) -> azure_core::Result<Option<Response<ThroughputProperties>>> {
        let options = options.unwrap_or_default();
        let rid = self.resource_id(&options).await?;
        offers::read_offer(&self.pipeline, &options.method_options.context, &rid).await
    }

    async fn replace_throughput(
        &self,
        throughput: ThroughputProperties,
        options: Option<ThroughputOptions<'_>>,
    ) -> azure_core::Result<Response<ThroughputProperties>> {
        let options = options.unwrap_or_default();
        let rid = self.resource_id(&options).await?;
        offers::replace_offer(
            &self.pipeline,
            &options.method_options.context,
            &rid,
            throughput,
        )
        .await
    }
}
