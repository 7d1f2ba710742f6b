// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use azure_core::http::{Method, Response};

use crate::{
    models::ApplicationSummary, pipeline::BatchPipeline, BatchPager, BatchRequestOptions,
    ListOptions,
};

/// The application packages available to the account's compute nodes.
#[derive(Debug, Clone)]
pub struct ApplicationsClient {
    pipeline: BatchPipeline,
}

impl ApplicationsClient {
    pub(crate) fn new(pipeline: BatchPipeline) -> Self {
        Self { pipeline }
    }

    pub fn list(&self, options: Option<ListOptions<'_>>) -> BatchPager<ApplicationSummary> {
        let options = options.unwrap_or_default();
        let mut req = self.pipeline.request(Method::Get, ["applications"]);
        options.apply(&mut req);
        self.pipeline.send_paged(req, options.request)
    }

    pub async fn get(
        &self,
        application_id: &str,
        options: Option<BatchRequestOptions<'_>>,
    ) -> azure_core::Result<Response<ApplicationSummary>> {
        let options = options.unwrap_or_default();
        let mut req = self
            .pipeline
            .request(Method::Get, ["applications", application_id]);
        options.apply(&mut req);
        self.pipeline
            .send(&options.method_options.context, &mut req)
            .await
    }
}
