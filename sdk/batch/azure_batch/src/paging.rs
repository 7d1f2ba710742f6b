// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use azure_core::http::Pager;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// One page of a Batch list operation.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct PagedList<T> {
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,

    /// The URL of the next page, or `None` on the last page.
    #[serde(rename = "odata.nextLink", default, skip_serializing_if = "Option::is_none")]
    pub next_link: Option<String>,
}

impl<T: DeserializeOwned + Send + Sync> azure_core::http::Model for PagedList<T> {
    async fn from_response_body(
        body: azure_core::http::response::ResponseBody,
    ) -> azure_core::Result<Self> {
        body.json().await
    }
}

impl<T> PagedList<T> {
    pub fn items(&self) -> &[T] {
        &self.value
    }

    pub fn into_items(self) -> Vec<T> {
        self.value
    }

    pub fn next_link(&self) -> Option<&str> {
        self.next_link.as_deref().filter(|link| !link.is_empty())
    }
}

/// A stream of pages from a Batch list operation.
///
/// Each page is a response whose body deserializes to a [`PagedList`].
pub type BatchPager<T> = Pager<PagedList<T>>;
