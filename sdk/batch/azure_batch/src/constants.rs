// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

//! Header names, query parameters and other values used by the Batch REST API.

use azure_core::http::{headers::HeaderName, request::options::ContentType};

/// The REST API version sent with every request unless overridden in [`BatchClientOptions`](crate::BatchClientOptions).
pub const DEFAULT_API_VERSION: &str = "2024-07-01.20.0";

pub const API_VERSION: &str = "api-version";
pub const TIMEOUT: &str = "timeout";
pub const FILTER: &str = "$filter";
pub const SELECT: &str = "$select";
pub const EXPAND: &str = "$expand";
pub const MAX_RESULTS: &str = "maxresults";

pub const CLIENT_REQUEST_ID: HeaderName = HeaderName::from_static("client-request-id");
pub const REQUEST_ID: HeaderName = HeaderName::from_static("request-id");
pub const RETURN_CLIENT_REQUEST_ID: HeaderName =
    HeaderName::from_static("return-client-request-id");
pub const OCP_DATE: HeaderName = HeaderName::from_static("ocp-date");
pub const DATA_SERVICE_ID: HeaderName = HeaderName::from_static("dataserviceid");

/// The content type of every JSON request body.
pub const ODATA_JSON: ContentType =
    ContentType::from_static("application/json; odata=minimalmetadata");
