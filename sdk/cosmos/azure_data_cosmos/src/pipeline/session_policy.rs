// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use async_trait::async_trait;
use azure_core::http::{
    policies::{Policy, PolicyResult},
    Context, Request,
};
use std::sync::Arc;
use tracing::warn;

use crate::{constants, resource_context::ResourceLink, session::SessionContainer};

/// Echoes the session token of a container on every request to it, and records the tokens
/// the service returns, including on failed responses.
#[derive(Debug)]
pub(crate) struct SessionPolicy {
    sessions: Arc<SessionContainer>,
}

impl SessionPolicy {
    pub fn new(sessions: Arc<SessionContainer>) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl Policy for SessionPolicy {
    async fn send(
        &self,
        ctx: &Context,
        request: &mut Request,
        next: &[Arc<dyn Policy>],
    ) -> PolicyResult {
        let Some(container_link) = ctx
            .value::<ResourceLink>()
            .and_then(ResourceLink::container_link)
        else {
            return next[0].send(ctx, request, &next[1..]).await;
        };

        if request
            .headers()
            .get_optional_str(&constants::SESSION_TOKEN)
            .is_none()
        {
            if let Some(token) = self.sessions.get_session_token(&container_link) {
                request.insert_header(constants::SESSION_TOKEN, token);
            }
        }

        let response = next[0].send(ctx, request, &next[1..]).await?;
        if let Some(token) = response
            .headers()
            .get_optional_str(&constants::SESSION_TOKEN)
        {
            if let Err(error) = self.sessions.set_session_token(&container_link, token) {
                warn!(%error, "ignoring session token the service returned");
            }
        }
        Ok(response)
    }
}
