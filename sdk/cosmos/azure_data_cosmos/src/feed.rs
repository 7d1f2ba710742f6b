// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use azure_core::http::{headers::Headers, Pager, Response};
use serde::{de::DeserializeOwned, Deserialize};

use crate::constants;

/// A single page of results from a query or feed read.
///
/// The page body only holds the items. The continuation and request charge are response headers,
/// see [`FeedPage::continuation`] and [`FeedPage::request_charge`].
#[derive(Debug, Deserialize)]
pub struct FeedPage<T> {
    // The array's name depends on the resource type.
    #[serde(
        rename = "Documents",
        alias = "Databases",
        alias = "DocumentCollections",
        alias = "Offers",
        alias = "StoredProcedures",
        alias = "PartitionKeyRanges",
        default = "Vec::new"
    )]
    items: Vec<T>,
}

impl<T: DeserializeOwned + Send + Sync> azure_core::http::Model for FeedPage<T> {
    async fn from_response_body(
        body: azure_core::http::response::ResponseBody,
    ) -> azure_core::Result<Self> {
        body.json().await
    }
}

impl<T> FeedPage<T> {
    /// Gets the items in this page of results.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consumes the page and returns a vector of the items.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Gets the continuation token the service returned for the next page, if any.
    pub fn continuation(headers: &Headers) -> Option<String> {
        headers
            .get_optional_string(&constants::CONTINUATION)
            .filter(|c| !c.is_empty())
    }

    /// The request units consumed by a page, from `x-ms-request-charge`.
    pub fn request_charge(headers: &Headers) -> Option<f64> {
        headers
            .get_optional_str(&constants::REQUEST_CHARGE)
            .and_then(|charge| charge.parse().ok())
    }

    pub(crate) fn continuation_of(response: &Response<FeedPage<T>>) -> Option<String> {
        Self::continuation(response.headers())
    }
}

/// A stream of [`FeedPage`] responses from a query or feed read.
///
/// Each item is the [`Response`] for one page, so its headers stay available.
pub type FeedPager<T> = Pager<FeedPage<T>>;
