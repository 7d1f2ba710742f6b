// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use async_trait::async_trait;
use azure_core::http::{
    policies::{Policy, PolicyResult},
    Context, Request, Response,
};
use std::sync::Arc;
use tracing::debug;

use crate::BatchError;

/// Turns failed responses carrying a Batch error body into errors that keep the body.
///
/// Responses without one pass through, and the core pipeline reports them by status alone.
#[derive(Debug, Default)]
pub(crate) struct BatchErrorPolicy;

#[async_trait]
impl Policy for BatchErrorPolicy {
    async fn send(
        &self,
        ctx: &Context,
        request: &mut Request,
        next: &[Arc<dyn Policy>],
    ) -> PolicyResult {
        let response = next[0].send(ctx, request, &next[1..]).await?;
        if response.status().is_success() {
            return Ok(response);
        }

        let (status, headers, body) = response.deconstruct();
        let body = body.collect().await?;
        match azure_core::json::from_json::<_, BatchError>(&body) {
            Ok(error) => {
                debug!(code = error.code.as_deref(), "request failed");
                Err(error.into_error(status))
            }
            Err(_) => Ok(Response::from_bytes(status, headers, body)),
        }
    }
}
