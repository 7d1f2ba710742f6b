// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use azure_core::http::headers::{self, Headers};
use time::OffsetDateTime;

use crate::{constants, utils};

/// The headers the Batch service returns with most responses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchResponseHeaders {
    pub etag: Option<String>,
    pub last_modified: Option<OffsetDateTime>,
    /// The server-assigned identity of the request, useful when contacting support.
    pub request_id: Option<String>,
    /// Echoed only when `return-client-request-id` was `true`.
    pub client_request_id: Option<String>,
    /// The OData id of a resource the request created or updated.
    pub data_service_id: Option<String>,
}

impl BatchResponseHeaders {
    /// Fails if `Last-Modified` is present but not an RFC 7231 date.
    pub fn from_headers(headers: &Headers) -> azure_core::Result<Self> {
        let last_modified = headers
            .get_optional_str(&headers::LAST_MODIFIED)
            .map(utils::parse_rfc7231)
            .transpose()?;

        Ok(Self {
            etag: headers.get_optional_string(&headers::ETAG),
            last_modified,
            request_id: headers.get_optional_string(&constants::REQUEST_ID),
            client_request_id: headers.get_optional_string(&constants::CLIENT_REQUEST_ID),
            data_service_id: headers.get_optional_string(&constants::DATA_SERVICE_ID),
        })
    }
}
