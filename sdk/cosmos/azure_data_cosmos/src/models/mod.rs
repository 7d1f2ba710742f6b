// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

//! Model types sent to and received from the Cosmos DB API.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

mod container_properties;
mod indexing_policy;
mod throughput_properties;

pub use container_properties::*;
pub use indexing_policy::*;
pub use throughput_properties::*;

/// Common system properties returned for most Cosmos DB resources.
#[derive(Clone, Default, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct SystemProperties {
    /// The entity tag associated with the resource.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "_etag")]
    pub etag: Option<String>,

    /// The self-link associated with the resource.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "_self")]
    pub self_link: Option<String>,

    /// The system-generated unique identifier associated with the resource.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "_rid")]
    pub resource_id: Option<String>,

    /// A [`OffsetDateTime`] representing the last modified time of the resource.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(rename = "_ts")]
    #[serde(with = "time::serde::timestamp::option")]
    pub last_modified: Option<OffsetDateTime>,
}

/// Properties of a Cosmos DB database.
///
/// Returned by [`DatabaseClient::read()`](crate::clients::DatabaseClient::read()).
#[derive(Clone, Default, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct DatabaseProperties {
    /// The ID of the database.
    pub id: String,

    /// A [`SystemProperties`] object containing common system properties for the database.
    #[serde(flatten)]
    pub system_properties: SystemProperties,
}

/// A stored procedure: server-side JavaScript that runs in a transaction scoped to one partition.
#[derive(Clone, Default, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct StoredProcedureProperties {
    pub id: String,

    /// The JavaScript source, e.g. `function () { getContext().getResponse().setBody("hi"); }`.
    pub body: String,

    #[serde(flatten)]
    pub system_properties: SystemProperties,
}

impl StoredProcedureProperties {
    pub fn new(id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            body: body.into(),
            system_properties: SystemProperties::default(),
        }
    }
}

/// A range of hashed partition key values served by one physical partition.
///
/// Returned by [`ContainerClient::read_partition_key_ranges()`](crate::clients::ContainerClient::read_partition_key_ranges()).
#[derive(Clone, Default, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PartitionKeyRange {
    /// The range id, as used in session tokens.
    pub id: String,

    /// The lowest effective partition key in the range, as a hex string.
    pub min_inclusive: String,

    /// The effective partition key just past the range. `"FF"` for the last range.
    pub max_exclusive: String,

    /// The ids of the ranges this one was split or merged from.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parents: Vec<String>,

    #[serde(flatten)]
    pub system_properties: SystemProperties,
}

impl PartitionKeyRange {
    pub fn range_id(&self) -> crate::PartitionKeyRangeId {
        crate::PartitionKeyRangeId::new(self.id.clone())
    }
}

// `Response::into_body` needs `Model`; these bodies are JSON.
macro_rules! json_model {
    ($($ty:ty),* $(,)?) => {$(
        impl azure_core::http::Model for $ty {
            async fn from_response_body(
                body: azure_core::http::response::ResponseBody,
            ) -> azure_core::Result<Self> {
                body.json().await
            }
        }
    )*};
}

json_model!(
    ContainerProperties,
    DatabaseProperties,
    PartitionKeyRange,
    StoredProcedureProperties,
    ThroughputProperties,
);
