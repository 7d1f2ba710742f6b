// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

//! Shared helpers for tests that run a [`CosmosClient`] against a scripted transport.

#![allow(dead_code)]

use std::{
    fmt,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use azure_core::{
    error::ErrorKind,
    http::{
        headers::{HeaderName, Headers},
        Body, ClientOptions, HttpClient, Request, Response, StatusCode, TransportOptions,
    },
};
use azure_data_cosmos::{AuthorizationToken, CosmosClient, CosmosClientOptions, FeedPager};
use futures::TryStreamExt;
use serde::de::DeserializeOwned;

pub const ENDPOINT: &str = "https://test-account.documents.azure.com/";
const KEY: &str = "c3VwZXItc2VjcmV0LWtleQ==";

type Handler = dyn Fn(&Request) -> Response + Send + Sync;

/// Answers every request with a handler and records it.
struct ScriptedTransport {
    handler: Box<Handler>,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl fmt::Debug for ScriptedTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptedTransport").finish_non_exhaustive()
    }
}

#[async_trait]
impl HttpClient for ScriptedTransport {
    async fn execute_request(&self, request: &Request) -> azure_core::Result<Response> {
        let response = (self.handler)(request);
        self.requests.lock().unwrap().push(request.clone());
        Ok(response)
    }
}

/// A client whose requests are answered by a handler and recorded for inspection.
pub struct TestAccount {
    pub client: CosmosClient,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl TestAccount {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&Request) -> Response + Send + Sync + 'static,
    {
        Self::with_options(handler, CosmosClientOptions::default())
    }

    pub fn with_options<F>(handler: F, options: CosmosClientOptions) -> Self
    where
        F: Fn(&Request) -> Response + Send + Sync + 'static,
    {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let transport = ScriptedTransport {
            handler: Box::new(handler),
            requests: requests.clone(),
        };

        let options = CosmosClientOptions {
            client_options: ClientOptions {
                transport: Some(TransportOptions::new(Arc::new(transport))),
                ..options.client_options
            },
            ..options
        };
        let client = CosmosClient::new(
            ENDPOINT,
            AuthorizationToken::primary_key(KEY).unwrap(),
            Some(options),
        )
        .unwrap();

        Self { client, requests }
    }

    /// Every request sent so far, in order.
    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Request {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

pub fn json_response(status: StatusCode, body: serde_json::Value) -> Response {
    json_response_with_headers(status, Headers::new(), body)
}

pub fn json_response_with_headers(
    status: StatusCode,
    headers: Headers,
    body: serde_json::Value,
) -> Response {
    Response::from_bytes(status, headers, body.to_string())
}

pub fn empty_response(status: StatusCode) -> Response {
    Response::from_bytes(status, Headers::new(), "")
}

/// The path of a request URL, e.g. `/dbs/db1`.
pub fn path(request: &Request) -> &str {
    request.url().path()
}

pub fn header<'a>(request: &'a Request, name: &HeaderName) -> Option<&'a str> {
    request.headers().get_optional_str(name)
}

pub fn body_json(request: &Request) -> serde_json::Value {
    match request.body() {
        Body::Bytes(bytes) => serde_json::from_slice(bytes).unwrap(),
        #[allow(unreachable_patterns)]
        _ => panic!("request body is not buffered"),
    }
}

/// The service error code of a failed request, e.g. `Conflict`.
pub fn error_code(error: &azure_core::Error) -> Option<&str> {
    match error.kind() {
        ErrorKind::HttpResponse { error_code, .. } => error_code.as_deref(),
        _ => None,
    }
}

/// Drains a pager, page by page, into one vector.
pub async fn collect_items<T: DeserializeOwned + Send + Sync + 'static>(
    mut pager: FeedPager<T>,
) -> azure_core::Result<Vec<T>> {
    let mut items = Vec::new();
    while let Some(page) = pager.try_next().await? {
        items.extend(page.into_body().await?.into_items());
    }
    Ok(items)
}
