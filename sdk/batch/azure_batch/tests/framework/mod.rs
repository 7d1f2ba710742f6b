// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

//! Shared helpers for tests that run a [`BatchClient`] against a scripted transport.

#![allow(dead_code)]

use std::{
    fmt,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use azure_batch::{BatchClient, BatchClientOptions, BatchCredentials, BatchPager};
use azure_core::{
    error::ErrorKind,
    http::{
        headers::{HeaderName, Headers},
        Body, ClientOptions, HttpClient, Request, Response, StatusCode, TransportOptions,
    },
};
use futures::TryStreamExt;
use serde::de::DeserializeOwned;

pub const ENDPOINT: &str = "https://testaccount.westus.batch.azure.com/";
pub const ACCOUNT: &str = "testaccount";
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
    pub client: BatchClient,
    requests: Arc<Mutex<Vec<Request>>>,
}

impl TestAccount {
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(&Request) -> Response + Send + Sync + 'static,
    {
        Self::with_credentials(
            handler,
            BatchCredentials::shared_key(ACCOUNT, KEY).unwrap(),
        )
    }

    pub fn with_credentials<F>(handler: F, credentials: BatchCredentials) -> Self
    where
        F: Fn(&Request) -> Response + Send + Sync + 'static,
    {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let transport = ScriptedTransport {
            handler: Box::new(handler),
            requests: requests.clone(),
        };

        let options = BatchClientOptions {
            client_options: ClientOptions {
                transport: Some(TransportOptions::new(Arc::new(transport))),
                ..Default::default()
            },
            ..Default::default()
        };
        let client = BatchClient::new(ENDPOINT, credentials, Some(options)).unwrap();

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
    Response::from_bytes(status, Headers::new(), body.to_string())
}

pub fn empty_response(status: StatusCode) -> Response {
    Response::from_bytes(status, Headers::new(), "")
}

/// A Batch error body, as the service returns it with a failure status.
pub fn error_response(status: StatusCode, code: &str, message: &str) -> Response {
    json_response(
        status,
        serde_json::json!({
            "odata.metadata": "https://testaccount.westus.batch.azure.com/$metadata#Microsoft.Azure.Batch.Protocol.Entities.Container.errors/@Element",
            "code": code,
            "message": { "lang": "en-US", "value": message },
        }),
    )
}

pub fn path(request: &Request) -> &str {
    request.url().path()
}

/// The value of a query parameter of a request URL.
pub fn query(request: &Request, name: &str) -> Option<String> {
    request
        .url()
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
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

/// The service error code of a failed request, e.g. `JobNotFound`.
pub fn error_code(error: &azure_core::Error) -> Option<&str> {
    match error.kind() {
        ErrorKind::HttpResponse { error_code, .. } => error_code.as_deref(),
        _ => None,
    }
}

/// Drains a pager, page by page, into one vector.
pub async fn collect_items<T: DeserializeOwned + Send + Sync + 'static>(
    mut pager: BatchPager<T>,
) -> azure_core::Result<Vec<T>> {
    let mut items = Vec::new();
    while let Some(page) = pager.try_next().await? {
        items.extend(page.into_body().await?.into_items());
    }
    Ok(items)
}
