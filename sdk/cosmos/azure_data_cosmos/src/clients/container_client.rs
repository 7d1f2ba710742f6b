// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use crate::{
    clients::offers,
    constants,
    models::{
        ContainerProperties, PartitionKeyRange, StoredProcedureProperties, ThroughputProperties,
    },
    pipeline::CosmosPipeline,
    resource_context::{ResourceLink, ResourceType},
    DeleteContainerOptions, ExecuteStoredProcedureOptions, FeedPager, ItemOptions, PartitionKey,
    Query, QueryOptions, QueryPartitionStrategy, ReadContainerOptions, ReplaceContainerOptions,
    StoredProcedureOptions, ThroughputOptions,
};

use azure_core::http::{headers, Method, Request, Response};
use serde::{de::DeserializeOwned, Serialize};

/// Defines the methods provided by a [`ContainerClient`]
///
/// This trait is intended to allow you to mock out the `ContainerClient` when testing your application.
/// Rather than depending on `ContainerClient`, you can depend on a generic parameter constrained by this trait, or an `impl ContainerClientMethods` type.
pub trait ContainerClientMethods {
    /// Returns the identifier of the container.
    fn id(&self) -> &str;

    /// Reads the properties of the container.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn doc() {
    /// # use azure_data_cosmos::clients::{ContainerClient, ContainerClientMethods};
    /// # let container_client: ContainerClient = panic!("this is a non-running example");
    /// let response = container_client.read(None)
    ///     .await.unwrap()
    ///     .into_body()
    ///     .await
    ///     .unwrap();
    /// # }
    /// ```
    #[allow(async_fn_in_trait)] // REASON: See https://github.com/Azure/azure-sdk-for-rust/issues/1796 for detailed justification
    async fn read(
        &self,
        options: Option<ReadContainerOptions>,
    ) -> azure_core::Result<Response<ContainerProperties>>;

    /// Replaces the properties of the container, such as its indexing policy or default TTL.
    ///
    /// The partition key definition of a container cannot change.
    #[allow(async_fn_in_trait)] // REASON: See https://github.com/Azure/azure-sdk-for-rust/issues/1796 for detailed justification
    async fn replace(
        &self,
        properties: ContainerProperties,
        options: Option<ReplaceContainerOptions>,
    ) -> azure_core::Result<Response<ContainerProperties>>;

    /// Deletes the container and every item in it.
    #[allow(async_fn_in_trait)] // REASON: See https://github.com/Azure/azure-sdk-for-rust/issues/1796 for detailed justification
    async fn delete(
        &self,
        options: Option<DeleteContainerOptions>,
    ) -> azure_core::Result<Response>;

    /// Creates a new item in the container.
    ///
    /// # Arguments
    /// * `partition_key` - The partition key of the new item.
    /// * `item` - The item to create. The type must implement [`Serialize`] and have an `id` property.
    /// * `options` - Optional parameters for the request
    ///
    /// The response body is only populated when [`ItemOptions::enable_content_response_on_write`] is set.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use serde::{Deserialize, Serialize};
    /// # async fn doc() -> azure_core::Result<()> {
    /// # use azure_data_cosmos::clients::{ContainerClient, ContainerClientMethods};
    /// # let container_client: ContainerClient = panic!("this is a non-running example");
    ///
    /// #[derive(Debug, Deserialize, Serialize)]
    /// pub struct Product {
    ///     id: String,
    ///     category_id: String,
    ///     product_name: String,
    /// }
    ///
    /// let p = Product {
    ///     id: "product1".to_string(),
    ///     category_id: "category1".to_string(),
    ///     product_name: "Product #1".to_string(),
    /// };
    /// container_client.create_item("category1", p, None).await?;
    /// # Ok(()) }
    /// ```
    #[allow(async_fn_in_trait)] // REASON: See https://github.com/Azure/azure-sdk-for-rust/issues/1796 for detailed justification
    async fn create_item<T: Serialize>(
        &self,
        partition_key: impl Into<PartitionKey>,
        item: T,
        options: Option<ItemOptions>,
    ) -> azure_core::Result<Response<T>>;

    /// Creates or replaces an item in the container.
    ///
    /// If an item with the same `id` exists in the partition, it is replaced. Otherwise it is created.
    #[allow(async_fn_in_trait)] // REASON: See https://github.com/Azure/azure-sdk-for-rust/issues/1796 for detailed justification
    async fn upsert_item<T: Serialize>(
        &self,
        partition_key: impl Into<PartitionKey>,
        item: T,
        options: Option<ItemOptions>,
    ) -> azure_core::Result<Response<T>>;

    /// Replaces an existing item in the container.
    ///
    /// Set [`ItemOptions::if_match_etag`] to only replace the item if it has not changed since it was read.
    /// A mismatch fails with an `HttpResponse` error of status `412`.
    #[allow(async_fn_in_trait)] // REASON: See https://github.com/Azure/azure-sdk-for-rust/issues/1796 for detailed justification
    async fn replace_item<T: Serialize>(
        &self,
        partition_key: impl Into<PartitionKey>,
        item_id: &str,
        item: T,
        options: Option<ItemOptions>,
    ) -> azure_core::Result<Response<T>>;

    /// Reads a specific item from the container.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use serde::{Deserialize, Serialize};
    /// # async fn doc() -> azure_core::Result<()> {
    /// # use azure_data_cosmos::clients::{ContainerClient, ContainerClientMethods};
    /// # let container_client: ContainerClient = panic!("this is a non-running example");
    ///
    /// #[derive(Debug, Deserialize, Serialize)]
    /// pub struct Product {
    ///     id: String,
    ///     category_id: String,
    ///     product_name: String,
    /// }
    ///
    /// impl azure_core::http::Model for Product {
    ///     async fn from_response_body(
    ///         body: azure_core::http::response::ResponseBody,
    ///     ) -> azure_core::Result<Self> {
    ///         body.json().await
    ///     }
    /// }
    ///
    /// let item: Product = container_client
    ///     .read_item("partition1", "item1", None)
    ///     .await?
    ///     .into_body()
    ///     .await?;
    /// println!("Read Item: {:#?}", item);
    /// # Ok(()) }
    /// ```
    #[allow(async_fn_in_trait)] // REASON: See https://github.com/Azure/azure-sdk-for-rust/issues/1796 for detailed justification
    async fn read_item<T: DeserializeOwned>(
        &self,
        partition_key: impl Into<PartitionKey>,
        item_id: &str,
        options: Option<ItemOptions>,
    ) -> azure_core::Result<Response<T>>;

    /// Deletes an item from the container.
    #[allow(async_fn_in_trait)] // REASON: See https://github.com/Azure/azure-sdk-for-rust/issues/1796 for detailed justification
    async fn delete_item(
        &self,
        partition_key: impl Into<PartitionKey>,
        item_id: &str,
        options: Option<ItemOptions>,
    ) -> azure_core::Result<Response>;

    /// Executes a query against items in the container.
    ///
    /// # Arguments
    ///
    /// * `query` - The query to execute.
    /// * `partition_strategy` - The partition key to scope the query to, or [`QueryPartitionStrategy::CrossPartition`].
    /// * `options` - Optional parameters for the request.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use serde::Deserialize;
    /// # use azure_data_cosmos::Query;
    /// # async fn doc() -> azure_core::Result<()> {
    /// # use azure_data_cosmos::clients::{ContainerClient, ContainerClientMethods};
    /// # use futures::TryStreamExt;
    /// # let container_client: ContainerClient = panic!("this is a non-running example");
    /// #[derive(Deserialize)]
    /// struct Customer {
    ///     id: u64,
    ///     name: String,
    /// }
    ///
    /// let query = Query::from("SELECT * FROM c WHERE c.id = @customer_id")
    ///     .with_parameter("@customer_id", 42)?;
    /// let mut pages = container_client.query_items::<Customer>(query, "some_partition_key", None)?;
    /// while let Some(page) = pages.try_next().await? {
    ///     for customer in page.into_body().await?.into_items() {
    ///         println!("{}", customer.name);
    ///     }
    /// }
    /// # Ok(()) }
    /// ```
    ///
    /// Cross-partition queries are run by the gateway, which does not support every query shape
    /// (for example `ORDER BY` or aggregates across partitions).
    fn query_items<T: DeserializeOwned + Send + 'static>(
        &self,
        query: impl Into<Query>,
        partition_strategy: impl Into<QueryPartitionStrategy>,
        options: Option<QueryOptions>,
    ) -> azure_core::Result<FeedPager<T>>;

    /// Reads every item in the container, or in one partition, a page at a time.
    fn read_all_items<T: DeserializeOwned + Send + 'static>(
        &self,
        partition_key: Option<PartitionKey>,
        options: Option<QueryOptions>,
    ) -> FeedPager<T>;

    /// Reads the partition key ranges of the container, a page at a time.
    ///
    /// Each range is served by one physical partition. Ranges split as the container grows,
    /// so the set is only a snapshot.
    fn read_partition_key_ranges(
        &self,
        options: Option<QueryOptions>,
    ) -> FeedPager<PartitionKeyRange>;

    /// Creates a stored procedure in the container.
    #[allow(async_fn_in_trait)] // REASON: See https://github.com/Azure/azure-sdk-for-rust/issues/1796 for detailed justification
    async fn create_stored_procedure(
        &self,
        properties: StoredProcedureProperties,
        options: Option<StoredProcedureOptions>,
    ) -> azure_core::Result<Response<StoredProcedureProperties>>;

    /// Deletes a stored procedure from the container.
    #[allow(async_fn_in_trait)] // REASON: See https://github.com/Azure/azure-sdk-for-rust/issues/1796 for detailed justification
    async fn delete_stored_procedure(
        &self,
        stored_procedure_id: &str,
        options: Option<StoredProcedureOptions>,
    ) -> azure_core::Result<Response>;

    /// Executes a stored procedure within one logical partition.
    ///
    /// `parameters` must serialize to a JSON array; its elements become the procedure's arguments.
    /// The response body is whatever the procedure passed to `getContext().getResponse().setBody()`.
    #[allow(async_fn_in_trait)] // REASON: See https://github.com/Azure/azure-sdk-for-rust/issues/1796 for detailed justification
    async fn execute_stored_procedure<T: DeserializeOwned>(
        &self,
        stored_procedure_id: &str,
        partition_key: impl Into<PartitionKey>,
        parameters: impl Serialize,
        options: Option<ExecuteStoredProcedureOptions>,
    ) -> azure_core::Result<Response<T>>;

    /// Reads the throughput provisioned for the container, if it has dedicated throughput.
    #[allow(async_fn_in_trait)] // REASON: See https://github.com/Azure/azure-sdk-for-rust/issues/1796 for detailed justification
    async fn read_throughput(
        &self,
        options: Option<ThroughputOptions>,
    ) -> azure_core::Result<Option<Response<ThroughputProperties>>>;

    /// Replaces the throughput provisioned for the container.
    ///
    /// Fails if the container has no dedicated throughput.
    #[allow(async_fn_in_trait)] // REASON: See https://github.com/Azure/azure-sdk-for-rust/issues/1796 for detailed justification
    async fn replace_throughput(
        &self,
        throughput: ThroughputProperties,
        options: Option<ThroughputOptions>,
    ) -> azure_core::Result<Response<ThroughputProperties>>;
}

/// A client for working with a specific container in a Cosmos DB account.
///
/// You can get a `ContainerClient` by calling [`DatabaseClient::container_client()`](crate::clients::DatabaseClient::container_client()).
#[derive(Debug, Clone)]
pub struct ContainerClient {
    link: ResourceLink,
    items_link: ResourceLink,
    sprocs_link: ResourceLink,
    pkranges_link: ResourceLink,
    container_id: String,
    pipeline: CosmosPipeline,
}

impl ContainerClient {
    pub(crate) fn new(pipeline: CosmosPipeline, database_link: &ResourceLink, container_id: &str) -> Self {
        let container_id = container_id.to_string();
        let link = database_link
            .feed(ResourceType::Containers)
            .item(&container_id);
        let items_link = link.feed(ResourceType::Items);
        let sprocs_link = link.feed(ResourceType::StoredProcedures);
        let pkranges_link = link.feed(ResourceType::PartitionKeyRanges);

        Self {
            link,
            items_link,
            sprocs_link,
            pkranges_link,
            container_id,
            pipeline,
        }
    }

    async fn write_item<T: Serialize>(
        &self,
        method: Method,
        link: ResourceLink,
        partition_key: PartitionKey,
        item: T,
        upsert: bool,
        options: Option<ItemOptions<'_>>,
    ) -> azure_core::Result<Response<T>> {
        let options = options.unwrap_or_default();
        let mut req = Request::new(self.pipeline.url(&link), method);
        req.insert_header(constants::PARTITION_KEY, partition_key.to_header_value());
        if upsert {
            req.insert_header(constants::IS_UPSERT, "True");
        }
        apply_item_options(&mut req, &options, true);
        req.set_json(&item)?;

        self.pipeline
            .send(options.method_options.context, &mut req, link)
            .await
    }

    async fn resource_id(&self, options: &ThroughputOptions<'_>) -> azure_core::Result<String> {
        let container = self
            .read(Some(ReadContainerOptions {
                method_options: options.method_options.clone(),
            }))
            .await?
            .into_body()
            .await?;
        offers::require_resource_id(container.system_properties.resource_id, "container")
    }
}

fn apply_item_options(req: &mut Request, options: &ItemOptions, is_write: bool) {
    if let Some(etag) = &options.if_match_etag {
        req.insert_header(headers::IF_MATCH, etag.clone());
    }
    if let Some(session_token) = &options.session_token {
        req.insert_header(constants::SESSION_TOKEN, session_token.clone());
    }
    req.add_optional_header(&options.indexing_directive);
    if is_write && !options.enable_content_response_on_write {
        req.insert_header(constants::PREFER, constants::PREFER_MINIMAL);
    }
}

impl ContainerClientMethods for ContainerClient {
    fn id(&self) -> &str {
        &self.container_id
    }

    async fn read(
        &self,
        options: Option<ReadContainerOptions<'_>>,
    ) -> azure_core::Result<Response<ContainerProperties>> {
        let options = options.unwrap_or_default();
        let mut req = Request::new(self.pipeline.url(&self.link), Method::Get);
        self.pipeline
            .send(options.method_options.context, &mut req, self.link.clone())
            .await
    }

    async fn replace(
        &self,
        properties: ContainerProperties,
        options: Option<ReplaceContainerOptions<'_>>,
    ) -> azure_core::Result<Response<ContainerProperties>> {
        let options = options.unwrap_or_default();
        let mut req = Request::new(self.pipeline.url(&self.link), Method::Put);
        req.set_json(&properties)?;
        self.pipeline
            .send(options.method_options.context, &mut req, self.link.clone())
            .await
    }

    async fn delete(
        &self,
        options: Option<DeleteContainerOptions<'_>>,
    ) -> azure_core::Result<Response> {
        let options = options.unwrap_or_default();
        let mut req = Request::new(self.pipeline.url(&self.link), Method::Delete);
        let response = self
            .pipeline
            .send(options.method_options.context, &mut req, self.link.clone())
            .await?;
        self.pipeline.clear_session(&self.link.path());
        Ok(response)
    }

    async fn create_item<T: Serialize>(
        &self,
        partition_key: impl Into<PartitionKey>,
        item: T,
        options: Option<ItemOptions<'_>>,
    ) -> azure_core::Result<Response<T>> {
        self.write_item(
            Method::Post,
            self.items_link.clone(),
            partition_key.into(),
            item,
            false,
            options,
        )
        .await
    }

    async fn upsert_item<T: Serialize>(
        &self,
        partition_key: impl Into<PartitionKey>,
        item: T,
        options: Option<ItemOptions<'_>>,
    ) -> azure_core::Result<Response<T>> {
        self.write_item(
            Method::Post,
            self.items_link.clone(),
            partition_key.into(),
            item,
            true,
            options,
        )
        .await
    }

    async fn replace_item<T: Serialize>(
        &self,
        partition_key: impl Into<PartitionKey>,
        item_id: &str,
        item: T,
        options: Option<ItemOptions<'_>>,
    ) -> azure_core::Result<Response<T>> {
        self.write_item(
            Method::Put,
            self.items_link.item(item_id),
            partition_key.into(),
            item,
            false,
            options,
        )
        .await
    }

    async fn read_item<T: DeserializeOwned>(
        &self,
        partition_key: impl Into<PartitionKey>,
        item_id: &str,
        options: Option<ItemOptions<'_>>,
    ) -> azure_core::Result<Response<T>> {
        let options = options.unwrap_or_default();
        let link = self.items_link.item(item_id);
        let mut req = Request::new(self.pipeline.url(&link), Method::Get);
        req.insert_header(constants::PARTITION_KEY, partition_key.into().to_header_value());
        apply_item_options(&mut req, &options, false);
        self.pipeline
            .send(options.method_options.context, &mut req, link)
            .await
    }

    async fn delete_item(
        &self,
        partition_key: impl Into<PartitionKey>,
        item_id: &str,
        options: Option<ItemOptions<'_>>,
    ) -> azure_core::Result<Response> {
        let options = options.unwrap_or_default();
        let link = self.items_link.item(item_id);
        let mut req = Request::new(self.pipeline.url(&link), Method::Delete);
        req.insert_header(constants::PARTITION_KEY, partition_key.into().to_header_value());
        apply_item_options(&mut req, &options, false);
        self.pipeline
            .send(options.method_options.context, &mut req, link)
            .await
    }

    fn query_items<T: DeserializeOwned + Send + 'static>(
        &self,
        query: impl Into<Query>,
        partition_strategy: impl Into<QueryPartitionStrategy>,
        options: Option<QueryOptions>,
    ) -> azure_core::Result<FeedPager<T>> {
        let options = options.unwrap_or_default();
        let mut req = Request::new(self.pipeline.url(&self.items_link), Method::Post);
        match partition_strategy.into() {
            QueryPartitionStrategy::SinglePartition(partition_key) => {
                req.insert_header(constants::PARTITION_KEY, partition_key.to_header_value());
            }
            QueryPartitionStrategy::CrossPartition => {
                req.insert_header(constants::QUERY_ENABLE_CROSS_PARTITION, "True");
            }
        }
        apply_query_options(&mut req, &options);

        self.pipeline.send_query_request(
            options.method_options.context,
            query.into(),
            req,
            self.items_link.clone(),
            options.continuation,
        )
    }

    fn read_all_items<T: DeserializeOwned + Send + 'static>(
        &self,
        partition_key: Option<PartitionKey>,
        options: Option<QueryOptions>,
    ) -> FeedPager<T> {
        let options = options.unwrap_or_default();
        let mut req = Request::new(self.pipeline.url(&self.items_link), Method::Get);
        match partition_key {
            Some(partition_key) => {
                req.insert_header(constants::PARTITION_KEY, partition_key.to_header_value());
            }
            None => req.insert_header(constants::QUERY_ENABLE_CROSS_PARTITION, "True"),
        }
        apply_query_options(&mut req, &options);

        self.pipeline.send_feed_request(
            options.method_options.context,
            req,
            self.items_link.clone(),
            options.continuation,
        )
    }

    fn read_partition_key_ranges(
        &self,
        options: Option<QueryOptions>,
    ) -> FeedPager<PartitionKeyRange> {
        let options = options.unwrap_or_default();
        let mut req = Request::new(self.pipeline.url(&self.pkranges_link), Method::Get);
        apply_query_options(&mut req, &options);

        self.pipeline.send_feed_request(
            options.method_options.context,
            req,
            self.pkranges_link.clone(),
            options.continuation,
        )
    }

    async fn create_stored_procedure(
        &self,
        properties: StoredProcedureProperties,
        options: Option<StoredProcedureOptions<'_>>,
    ) -> azure_core::Result<Response<StoredProcedureProperties>> {
        let options = options.unwrap_or_default();
        let mut req = Request::new(self.pipeline.url(&self.sprocs_link), Method::Post);
        req.set_json(&properties)?;
        self.pipeline
            .send(
                options.method_options.context,
                &mut req,
                self.sprocs_link.clone(),
            )
            .await
    }

    async fn delete_stored_procedure(
        &self,
        stored_procedure_id: &str,
        options: Option<StoredProcedureOptions<'_>>,
    ) -> azure_core::Result<Response> {
        let options = options.unwrap_or_default();
        let link = self.sprocs_link.item(stored_procedure_id);
        let mut req = Request::new(self.pipeline.url(&link), Method::Delete);
        self.pipeline
            .send(options.method_options.context, &mut req, link)
            .await
    }

    async fn execute_stored_procedure<T: DeserializeOwned>(
        &self,
        stored_procedure_id: &str,
        partition_key: impl Into<PartitionKey>,
        parameters: impl Serialize,
        options: Option<ExecuteStoredProcedureOptions<'_>>,
    ) -> azure_core::Result<Response<T>> {
        let options = options.unwrap_or_default();
        let link = self.sprocs_link.item(stored_procedure_id);
        let mut req = Request::new(self.pipeline.url(&link), Method::Post);
        req.insert_header(constants::PARTITION_KEY, partition_key.into().to_header_value());
        if let Some(session_token) = options.session_token {
            req.insert_header(constants::SESSION_TOKEN, session_token);
        }
        req.set_json(&parameters)?;
        self.pipeline
            .send(options.method_options.context, &mut req, link)
            .await
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

fn apply_query_options(req: &mut Request, options: &QueryOptions) {
    if let Some(max_item_count) = options.max_item_count {
        req.insert_header(constants::MAX_ITEM_COUNT, max_item_count.to_string());
    }
    if let Some(session_token) = &options.session_token {
        req.insert_header(constants::SESSION_TOKEN, session_token.clone());
    }
}
