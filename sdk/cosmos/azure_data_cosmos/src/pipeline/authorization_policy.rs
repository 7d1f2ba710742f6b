// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

//! Defines Cosmos DB's key-based authorization.
//!
//! Every request is signed with a header of the form
//! `type=master&ver=1.0&sig={base64 HMAC-SHA256 of the request}`, URL-encoded.
//! The signature covers the verb, the resource type, the resource link and the `x-ms-date` header.

use async_trait::async_trait;
use azure_core::{
    credentials::Secret,
    error::{Error, ErrorKind},
    hmac::hmac_sha256,
    http::{
        headers,
        policies::{Policy, PolicyResult},
        Context, Method, Request,
    },
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::{fmt, sync::Arc};
use time::OffsetDateTime;
use tracing::trace;
use url::form_urlencoded;

use crate::{resource_context::ResourceLink, utils};

const AZURE_VERSION: &str = "1.0";
const MASTER_TOKEN: &str = "master";
const RESOURCE_TOKEN: &str = "resource";

/// The credential used to authorize requests.
#[derive(Clone)]
pub enum AuthorizationToken {
    /// An account key, base64-encoded as shown in the Azure portal.
    PrimaryKey(Secret),
    /// A resource token issued for a specific user and resource.
    Resource(String),
}

impl AuthorizationToken {
    /// Creates a key credential, failing if `key` is not valid base64.
    pub fn primary_key(key: impl Into<String>) -> azure_core::Result<Self> {
        let key = key.into();
        if key.is_empty() || STANDARD.decode(&key).is_err() {
            return Err(Error::message(
                ErrorKind::Credential,
                "the account key is not valid base64",
            ));
        }
        Ok(AuthorizationToken::PrimaryKey(Secret::new(key)))
    }

    pub fn resource(token: impl Into<String>) -> Self {
        AuthorizationToken::Resource(token.into())
    }
}

impl fmt::Debug for AuthorizationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthorizationToken::PrimaryKey(_) => f.write_str("PrimaryKey(<REDACTED>)"),
            AuthorizationToken::Resource(_) => f.write_str("Resource(<REDACTED>)"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthorizationPolicy {
    token: AuthorizationToken,
}

impl AuthorizationPolicy {
    pub(crate) fn new(token: AuthorizationToken) -> Self {
        Self { token }
    }
}

#[async_trait]
impl Policy for AuthorizationPolicy {
    async fn send(
        &self,
        ctx: &Context,
        request: &mut Request,
        next: &[Arc<dyn Policy>],
    ) -> PolicyResult {
        let resource_link = ctx.value::<ResourceLink>().ok_or_else(|| {
            Error::message(
                ErrorKind::Other,
                "no resource link was provided for the request",
            )
        })?;

        let date_string = utils::to_rfc7231(&OffsetDateTime::now_utc()).to_lowercase();
        let auth = generate_authorization(
            &self.token,
            &request.method(),
            resource_link,
            &date_string,
        )?;
        trace!(?resource_link, "signed request");

        request.insert_header(headers::MS_DATE, date_string);
        request.insert_header(headers::AUTHORIZATION, auth);

        next[0].send(ctx, request, &next[1..]).await
    }
}

/// Generates the value of the `Authorization` header for a request.
///
/// `date_string` must be the lowercase value sent in `x-ms-date`.
fn generate_authorization(
    token: &AuthorizationToken,
    method: &Method,
    resource_link: &ResourceLink,
    date_string: &str,
) -> azure_core::Result<String> {
    let token = match token {
        AuthorizationToken::PrimaryKey(key) => {
            let string_to_sign = string_to_sign(method, resource_link, date_string);
            let signature = hmac_sha256(&string_to_sign, key)?;
            format!("type={MASTER_TOKEN}&ver={AZURE_VERSION}&sig={signature}")
        }
        AuthorizationToken::Resource(token) => {
            if token.starts_with("type=") {
                token.clone()
            } else {
                format!("type={RESOURCE_TOKEN}&ver={AZURE_VERSION}&sig={token}")
            }
        }
    };

    Ok(form_urlencoded::byte_serialize(token.as_bytes()).collect())
}

fn verb(method: &Method) -> &'static str {
    match method {
        Method::Get => "get",
        Method::Head => "head",
        Method::Post => "post",
        Method::Put => "put",
        Method::Patch => "patch",
        Method::Delete => "delete",
        _ => "",
    }
}

fn string_to_sign(method: &Method, resource_link: &ResourceLink, date_string: &str) -> String {
    format!(
        "{}\n{}\n{}\n{}\n\n",
        verb(method),
        resource_link.resource_type().path_segment(),
        resource_link.resource_link(),
        date_string.to_lowercase(),
    )
}
