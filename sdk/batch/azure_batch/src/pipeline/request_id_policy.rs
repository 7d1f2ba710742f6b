// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use async_trait::async_trait;
use azure_core::http::{
    policies::{Policy, PolicyResult},
    Context, Request,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::constants;

/// Stamps a random `client-request-id` on requests that do not carry one.
#[derive(Debug, Default)]
pub(crate) struct RequestIdPolicy;

#[async_trait]
impl Policy for RequestIdPolicy {
    async fn send(
        &self,
        ctx: &Context,
        request: &mut Request,
        next: &[Arc<dyn Policy>],
    ) -> PolicyResult {
        if request
            .headers()
            .get_optional_str(&constants::CLIENT_REQUEST_ID)
            .is_none()
        {
            request.insert_header(constants::CLIENT_REQUEST_ID, Uuid::new_v4().to_string());
        }
        next[0].send(ctx, request, &next[1..]).await
    }
}
