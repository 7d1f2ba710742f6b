// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

//! Constants defining HTTP headers and other values relevant to Azure Cosmos DB APIs.

use azure_core::http::{
    headers::{HeaderName, HeaderValue},
    request::options::ContentType,
};

/// The REST API version this crate speaks.
pub const API_VERSION: HeaderValue = HeaderValue::from_static("2020-07-15");

pub const VERSION: HeaderName = HeaderName::from_static("x-ms-version");
pub const ACTIVITY_ID: HeaderName = HeaderName::from_static("x-ms-activity-id");
pub const CONSISTENCY_LEVEL: HeaderName = HeaderName::from_static("x-ms-consistency-level");
pub const CONTINUATION: HeaderName = HeaderName::from_static("x-ms-continuation");
pub const INDEXING_DIRECTIVE: HeaderName = HeaderName::from_static("x-ms-indexing-directive");
pub const IS_UPSERT: HeaderName = HeaderName::from_static("x-ms-documentdb-is-upsert");
pub const ITEM_COUNT: HeaderName = HeaderName::from_static("x-ms-item-count");
pub const MAX_ITEM_COUNT: HeaderName = HeaderName::from_static("x-ms-max-item-count");
pub const OFFER_AUTOPILOT_SETTINGS: HeaderName =
    HeaderName::from_static("x-ms-cosmos-offer-autopilot-settings");
pub const OFFER_THROUGHPUT: HeaderName = HeaderName::from_static("x-ms-offer-throughput");
pub const PREFER: HeaderName = HeaderName::from_static("prefer");
pub const PARTITION_KEY: HeaderName = HeaderName::from_static("x-ms-documentdb-partitionkey");
pub const QUERY: HeaderName = HeaderName::from_static("x-ms-documentdb-isquery");
pub const QUERY_ENABLE_CROSS_PARTITION: HeaderName =
    HeaderName::from_static("x-ms-documentdb-query-enablecrosspartition");
pub const REQUEST_CHARGE: HeaderName = HeaderName::from_static("x-ms-request-charge");
pub const SESSION_TOKEN: HeaderName = HeaderName::from_static("x-ms-session-token");
pub const SUB_STATUS: HeaderName = HeaderName::from_static("x-ms-substatus");

/// `Prefer` value that asks the service to omit the resource from write responses.
pub const PREFER_MINIMAL: HeaderValue = HeaderValue::from_static("return=minimal");

/// The `Content-Type` of query requests.
pub const QUERY_CONTENT_TYPE: ContentType = ContentType::from_static("application/query+json");
