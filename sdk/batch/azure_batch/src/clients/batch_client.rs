// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use azure_core::error::{Error, ErrorKind};
use url::Url;

use crate::{
    clients::{
        AccountClient, ApplicationsClient, ComputeNodesClient, JobsClient, PoolsClient,
        TasksClient,
    },
    pipeline::{AuthorizationPolicy, BatchPipeline},
    BatchClientOptions, BatchCredentials,
};

/// Client for an Azure Batch account.
///
/// Cloning is cheap; clones share the same pipeline and transport.
#[derive(Debug, Clone)]
pub struct BatchClient {
    pipeline: BatchPipeline,
}

impl BatchClient {
    /// Creates a new BatchClient.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The account endpoint, for example `https://myaccount.westus.batch.azure.com`.
    /// * `credentials` - The credential to authorize requests with. See [`BatchCredentials`].
    /// * `options` - Optional configuration for the client.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use azure_batch::{BatchClient, BatchCredentials};
    ///
    /// let credentials = BatchCredentials::shared_key("myaccount", "bXkga2V5").unwrap();
    /// let client = BatchClient::new("https://myaccount.westus.batch.azure.com", credentials, None).unwrap();
    /// ```
    pub fn new(
        endpoint: impl AsRef<str>,
        credentials: BatchCredentials,
        options: Option<BatchClientOptions>,
    ) -> azure_core::Result<Self> {
        let options = options.unwrap_or_default();
        let endpoint = Url::parse(endpoint.as_ref()).map_err(|error| {
            Error::full(
                ErrorKind::DataConversion,
                error,
                format!("'{}' is not a valid endpoint", endpoint.as_ref()),
            )
        })?;
        if endpoint.cannot_be_a_base() || !matches!(endpoint.scheme(), "http" | "https") {
            return Err(Error::message(
                ErrorKind::DataConversion,
                format!("'{endpoint}' is not an HTTP(S) endpoint"),
            ));
        }

        Ok(Self {
            pipeline: BatchPipeline::new(
                endpoint,
                AuthorizationPolicy::new(credentials),
                options.client_options,
                options.api_version,
            ),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.pipeline.endpoint
    }

    /// Operations on the account: supported images and node counts.
    pub fn account(&self) -> AccountClient {
        AccountClient::new(self.pipeline.clone())
    }

    pub fn applications(&self) -> ApplicationsClient {
        ApplicationsClient::new(self.pipeline.clone())
    }

    pub fn jobs(&self) -> JobsClient {
        JobsClient::new(self.pipeline.clone())
    }

    pub fn tasks(&self) -> TasksClient {
        TasksClient::new(self.pipeline.clone())
    }

    pub fn pools(&self) -> PoolsClient {
        PoolsClient::new(self.pipeline.clone())
    }

    pub fn compute_nodes(&self) -> ComputeNodesClient {
        ComputeNodesClient::new(self.pipeline.clone())
    }
}
