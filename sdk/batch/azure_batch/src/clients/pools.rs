// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use azure_core::http::{Method, Response, StatusCode};

use crate::{
    models::{
        CloudPool, PoolAddParameter, PoolEnableAutoScaleParameter, PoolPatchParameter,
        PoolResizeParameter,
    },
    pipeline::BatchPipeline,
    BatchPager, BatchRequestOptions, GetOptions, ListOptions,
};

/// Operations on pools.
#[derive(Debug, Clone)]
pub struct PoolsClient {
    pipeline: BatchPipeline,
}

impl PoolsClient {
    pub(crate) fn new(pipeline: BatchPipeline) -> Self {
        Self { pipeline }
    }

    /// Adds a pool to the account. Nodes are allocated in the background.
    pub async fn add(
        &self,
        pool: PoolAddParameter,
        options: Option<BatchRequestOptions<'_>>,
    ) -> azure_core::Result<Response> {
        let options = options.unwrap_or_default();
        let mut req = self.pipeline.request(Method::Post, ["pools"]);
        options.apply(&mut req);
        self.pipeline
            .send_json(&options.method_options.context, &mut req, &pool)
            .await
    }

    pub async fn get(
        &self,
        pool_id: &str,
        options: Option<GetOptions<'_>>,
    ) -> azure_core::Result<Response<CloudPool>> {
        let options = options.unwrap_or_default();
        let mut req = self.pipeline.request(Method::Get, ["pools", pool_id]);
        options.apply(&mut req);
        self.pipeline
            .send(&options.request.method_options.context, &mut req)
            .await
    }

    /// Whether a pool with the given id exists.
    ///
    /// A `404 Not Found` is `Ok(false)`; any other failure is an error.
    pub async fn exists(
        &self,
        pool_id: &str,
        options: Option<BatchRequestOptions<'_>>,
    ) -> azure_core::Result<bool> {
        let options = options.unwrap_or_default();
        let mut req = self.pipeline.request(Method::Head, ["pools", pool_id]);
        options.apply(&mut req);
        let result: azure_core::Result<Response> = self
            .pipeline
            .send(&options.method_options.context, &mut req)
            .await;
        match result {
            Ok(_) => Ok(true),
            Err(err) if err.http_status() == Some(StatusCode::NotFound) => Ok(false),
            Err(err) => Err(err),
        }
    }

    pub fn list(&self, options: Option<ListOptions<'_>>) -> BatchPager<CloudPool> {
        let options = options.unwrap_or_default();
        let mut req = self.pipeline.request(Method::Get, ["pools"]);
        options.apply(&mut req);
        self.pipeline.send_paged(req, options.request)
    }

    /// Changes the properties set in `pool`, leaving the others unchanged.
    pub async fn patch(
        &self,
        pool_id: &str,
        pool: PoolPatchParameter,
        options: Option<BatchRequestOptions<'_>>,
    ) -> azure_core::Result<Response> {
        let options = options.unwrap_or_default();
        let mut req = self.pipeline.request(Method::Patch, ["pools", pool_id]);
        options.apply(&mut req);
        self.pipeline
            .send_json(&options.method_options.context, &mut req, &pool)
            .await
    }

    /// Starts deleting a pool. Its nodes are released in the background.
    pub async fn delete(
        &self,
        pool_id: &str,
        options: Option<BatchRequestOptions<'_>>,
    ) -> azure_core::Result<Response> {
        let options = options.unwrap_or_default();
        let mut req = self.pipeline.request(Method::Delete, ["pools", pool_id]);
        options.apply(&mut req);
        self.pipeline
            .send(&options.method_options.context, &mut req)
            .await
    }

    /// Changes the target node counts of a pool. Fails while automatic scaling is on.
    pub async fn resize(
        &self,
        pool_id: &str,
        resize: PoolResizeParameter,
        options: Option<BatchRequestOptions<'_>>,
    ) -> azure_core::Result<Response> {
        let options = options.unwrap_or_default();
        let mut req = self
            .pipeline
            .request(Method::Post, ["pools", pool_id, "resize"]);
        options.apply(&mut req);
        self.pipeline
            .send_json(&options.method_options.context, &mut req, &resize)
            .await
    }

    /// Stops an ongoing resize. The pool keeps the nodes it has at that point.
    pub async fn stop_resize(
        &self,
        pool_id: &str,
        options: Option<BatchRequestOptions<'_>>,
    ) -> azure_core::Result<Response> {
        let options = options.unwrap_or_default();
        let mut req = self
            .pipeline
            .request(Method::Post, ["pools", pool_id, "stopresize"]);
        options.apply(&mut req);
        self.pipeline
            .send(&options.method_options.context, &mut req)
            .await
    }

    pub async fn enable_auto_scale(
        &self,
        pool_id: &str,
        auto_scale: PoolEnableAutoScaleParameter,
        options: Option<BatchRequestOptions<'_>>,
    ) -> azure_core::Result<Response> {
        let options = options.unwrap_or_default();
        let mut req = self
            .pipeline
            .request(Method::Post, ["pools", pool_id, "enableautoscale"]);
        options.apply(&mut req);
        self.pipeline
            .send_json(&options.method_options.context, &mut req, &auto_scale)
            .await
    }

    pub async fn disable_auto_scale(
        &self,
        pool_id: &str,
        options: Option<BatchRequestOptions<'_>>,
    ) -> azure_core::Result<Response> {
        let options = options.unwrap_or_default();
        let mut req = self
            .pipeline
            .request(Method::Post, ["pools", pool_id, "disableautoscale"]);
        options.apply(&mut req);
        self.pipeline
            .send(&options.method_options.context, &mut req)
            .await
    }
}
