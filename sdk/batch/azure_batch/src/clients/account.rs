// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use azure_core::http::Method;

use crate::{
    models::{ImageInformation, PoolNodeCounts},
    pipeline::BatchPipeline,
    BatchPager, ListOptions,
};

/// Account-wide queries.
#[derive(Debug, Clone)]
pub struct AccountClient {
    pipeline: BatchPipeline,
}

impl AccountClient {
    pub(crate) fn new(pipeline: BatchPipeline) -> Self {
        Self { pipeline }
    }

    /// Lists the Marketplace images the Batch service supports.
    ///
    /// Supports a `$filter` such as `osType eq 'linux'` and `maxresults`.
    pub fn list_supported_images(
        &self,
        options: Option<ListOptions<'_>>,
    ) -> BatchPager<ImageInformation> {
        let options = options.unwrap_or_default();
        let mut req = self.pipeline.request(Method::Get, ["supportedimages"]);
        options.apply(&mut req);
        self.pipeline.send_paged(req, options.request)
    }

    /// Lists the number of compute nodes in each state, grouped by pool.
    pub fn list_pool_node_counts(
        &self,
        options: Option<ListOptions<'_>>,
    ) -> BatchPager<PoolNodeCounts> {
        let options = options.unwrap_or_default();
        let mut req = self.pipeline.request(Method::Get, ["nodecounts"]);
        options.apply(&mut req);
        self.pipeline.send_paged(req, options.request)
    }
}
