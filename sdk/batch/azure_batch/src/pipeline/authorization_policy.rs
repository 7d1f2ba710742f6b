// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

//! Batch request authorization.
//!
//! Shared-key requests carry `Authorization: SharedKey {account}:{signature}`, where the signature is
//! an HMAC-SHA256 over the verb, the standard headers, every `ocp-*` header and the canonicalized
//! resource (account, path and sorted query parameters).

use async_trait::async_trait;
use azure_core::{
    hmac::hmac_sha256,
    http::{
        headers::{self, HeaderName},
        policies::{Policy, PolicyResult},
        Context, Method, Request,
    },
};
use std::{collections::BTreeMap, sync::Arc};
use time::OffsetDateTime;
use tracing::trace;

use crate::{constants, utils, BatchCredentials, BatchSharedKeyCredentials};

#[derive(Debug, Clone)]
pub struct AuthorizationPolicy {
    credentials: BatchCredentials,
}

impl AuthorizationPolicy {
    pub(crate) fn new(credentials: BatchCredentials) -> Self {
        Self { credentials }
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
        let auth = match &self.credentials {
            BatchCredentials::SharedKey(credentials) => {
                if request
                    .headers()
                    .get_optional_str(&constants::OCP_DATE)
                    .is_none()
                {
                    request.insert_header(
                        constants::OCP_DATE,
                        utils::to_rfc7231(&OffsetDateTime::now_utc()),
                    );
                }
                let auth = shared_key_authorization(credentials, request)?;
                trace!(account = credentials.account_name(), "signed request");
                auth
            }
            BatchCredentials::Token(token) => format!("Bearer {token}"),
        };
        request.insert_header(headers::AUTHORIZATION, auth);

        next[0].send(ctx, request, &next[1..]).await
    }
}

fn shared_key_authorization(
    credentials: &BatchSharedKeyCredentials,
    request: &Request,
) -> azure_core::Result<String> {
    let string_to_sign = string_to_sign(credentials.account_name(), request);
    let signature = hmac_sha256(&string_to_sign, credentials.key())?;
    Ok(format!(
        "SharedKey {}:{}",
        credentials.account_name(),
        signature
    ))
}

fn string_to_sign(account_name: &str, request: &Request) -> String {
    let content_length = match request.body().len() {
        0 => String::new(),
        len => len.to_string(),
    };

    let mut s = String::new();
    s.push_str(verb(&request.method()));
    s.push('\n');
    for value in [
        header_value(request, &headers::CONTENT_ENCODING),
        header_value(request, &headers::CONTENT_LANGUAGE),
        content_length.as_str(),
        header_value(request, &headers::CONTENT_MD5),
        header_value(request, &headers::CONTENT_TYPE),
        header_value(request, &headers::DATE),
        header_value(request, &headers::IF_MODIFIED_SINCE),
        header_value(request, &headers::IF_MATCH),
        header_value(request, &headers::IF_NONE_MATCH),
        header_value(request, &headers::IF_UNMODIFIED_SINCE),
        header_value(request, &headers::RANGE),
    ] {
        s.push_str(value);
        s.push('\n');
    }
    s.push_str(&canonicalized_headers(request));
    s.push_str(&canonicalized_resource(account_name, request));
    s
}

fn verb(method: &Method) -> &'static str {
    match method {
        Method::Get => "GET",
        Method::Head => "HEAD",
        Method::Post => "POST",
        Method::Put => "PUT",
        Method::Patch => "PATCH",
        Method::Delete => "DELETE",
        _ => "",
    }
}

fn header_value<'a>(request: &'a Request, name: &HeaderName) -> &'a str {
    request.headers().get_optional_str(name).unwrap_or_default()
}

fn canonicalized_headers(request: &Request) -> String {
    let mut ocp: Vec<_> = request
        .headers()
        .iter()
        .filter(|(name, _)| name.as_str().starts_with("ocp-"))
        .collect();
    ocp.sort_by(|a, b| a.0.cmp(b.0));

    ocp.into_iter()
        .map(|(name, value)| format!("{}:{}\n", name.as_str(), value.as_str().trim()))
        .collect()
}

fn canonicalized_resource(account_name: &str, request: &Request) -> String {
    let mut resource = format!("/{}{}", account_name, request.url().path());

    let mut params: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in request.url().query_pairs() {
        params
            .entry(name.to_lowercase())
            .or_default()
            .push(value.into_owned());
    }
    for (name, values) in params {
        resource.push('\n');
        resource.push_str(&name);
        resource.push(':');
        resource.push_str(&values.join(","));
    }
    resource
}
