// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use azure_core::http::{headers, ClientMethodOptions, ClientOptions, Request};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
    constants,
    utils::{append_query_pair, to_rfc7231},
};

/// Options used when creating a [`BatchClient`](crate::BatchClient).
#[derive(Clone, Debug)]
pub struct BatchClientOptions {
    pub client_options: ClientOptions,
    /// The REST API version. Defaults to [`DEFAULT_API_VERSION`](crate::constants::DEFAULT_API_VERSION).
    pub api_version: String,
}

impl Default for BatchClientOptions {
    fn default() -> Self {
        Self {
            client_options: ClientOptions::default(),
            api_version: constants::DEFAULT_API_VERSION.to_string(),
        }
    }
}

/// Options accepted by every Batch operation.
#[derive(Clone, Debug, Default)]
pub struct BatchRequestOptions<'a> {
    pub method_options: ClientMethodOptions<'a>,

    /// The maximum time the server may spend processing the request, in seconds.
    ///
    /// The service defaults to 30 seconds. This is sent as the `timeout` query parameter; the client
    /// itself never times out or retries.
    pub timeout: Option<u32>,

    /// The caller-generated request identity. A random one is generated when not set.
    pub client_request_id: Option<Uuid>,

    /// Whether the server should echo `client-request-id` in the response.
    pub return_client_request_id: Option<bool>,

    /// The time the request was issued. Defaults to the current time.
    pub ocp_date: Option<OffsetDateTime>,

    /// Conditions for operations on a single resource.
    pub access_conditions: AccessConditions,
}

impl BatchRequestOptions<'_> {
    /// Detaches these options from the caller's borrows, so a pager can keep them.
    pub(crate) fn into_owned(self) -> BatchRequestOptions<'static> {
        BatchRequestOptions {
            method_options: ClientMethodOptions {
                context: self.method_options.context.into_owned(),
            },
            timeout: self.timeout,
            client_request_id: self.client_request_id,
            return_client_request_id: self.return_client_request_id,
            ocp_date: self.ocp_date,
            access_conditions: self.access_conditions,
        }
    }

    pub(crate) fn apply(&self, request: &mut Request) {
        if let Some(timeout) = self.timeout {
            append_query_pair(request, constants::TIMEOUT, &timeout.to_string());
        }
        self.apply_headers(request);
    }

    /// Applies everything except query parameters, for requests to a URL the service handed back.
    pub(crate) fn apply_headers(&self, request: &mut Request) {
        if let Some(id) = self.client_request_id {
            request.insert_header(constants::CLIENT_REQUEST_ID, id.to_string());
        }
        if let Some(return_id) = self.return_client_request_id {
            request.insert_header(constants::RETURN_CLIENT_REQUEST_ID, return_id.to_string());
        }
        let ocp_date = self.ocp_date.unwrap_or_else(OffsetDateTime::now_utc);
        request.insert_header(constants::OCP_DATE, to_rfc7231(&ocp_date));
        self.access_conditions.apply(request);
    }
}

/// ETag and modification-time preconditions.
///
/// The service answers `412 Precondition Failed` when a condition is not met, or `304 Not Modified`
/// for a `GET` whose `If-None-Match` matches.
#[derive(Clone, Debug, Default)]
pub struct AccessConditions {
    pub if_match: Option<String>,
    pub if_none_match: Option<String>,
    pub if_modified_since: Option<OffsetDateTime>,
    pub if_unmodified_since: Option<OffsetDateTime>,
}

impl AccessConditions {
    fn apply(&self, request: &mut Request) {
        if let Some(etag) = &self.if_match {
            request.insert_header(headers::IF_MATCH, etag.clone());
        }
        if let Some(etag) = &self.if_none_match {
            request.insert_header(headers::IF_NONE_MATCH, etag.clone());
        }
        if let Some(since) = &self.if_modified_since {
            request.insert_header(headers::IF_MODIFIED_SINCE, to_rfc7231(since));
        }
        if let Some(since) = &self.if_unmodified_since {
            request.insert_header(headers::IF_UNMODIFIED_SINCE, to_rfc7231(since));
        }
    }
}

/// Options for operations that read a single resource.
#[derive(Clone, Debug, Default)]
pub struct GetOptions<'a> {
    pub request: BatchRequestOptions<'a>,
    /// An OData `$select` clause, e.g. `id,state`.
    pub select: Option<String>,
    /// An OData `$expand` clause, e.g. `stats`.
    pub expand: Option<String>,
}

impl GetOptions<'_> {
    pub(crate) fn apply(&self, request: &mut Request) {
        self.request.apply(request);
        append_optional(request, constants::SELECT, self.select.as_deref());
        append_optional(request, constants::EXPAND, self.expand.as_deref());
    }
}

/// Options for list operations.
#[derive(Clone, Debug, Default)]
pub struct ListOptions<'a> {
    pub request: BatchRequestOptions<'a>,
    /// An OData `$filter` clause, e.g. `state eq 'active'`.
    pub filter: Option<String>,
    pub select: Option<String>,
    pub expand: Option<String>,
    /// The maximum number of items per page. The service allows at most 1000.
    pub max_results: Option<u32>,
}

impl ListOptions<'_> {
    pub(crate) fn apply(&self, request: &mut Request) {
        self.request.apply(request);
        append_optional(request, constants::FILTER, self.filter.as_deref());
        append_optional(request, constants::SELECT, self.select.as_deref());
        append_optional(request, constants::EXPAND, self.expand.as_deref());
        if let Some(max_results) = self.max_results {
            append_query_pair(request, constants::MAX_RESULTS, &max_results.to_string());
        }
    }
}

fn append_optional(request: &mut Request, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        append_query_pair(request, name, value);
    }
}
