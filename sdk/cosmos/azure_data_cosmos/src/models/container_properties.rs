// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use serde::{Deserialize, Serialize};

use crate::models::{IndexingPolicy, SystemProperties};

/// Properties of a Cosmos DB container.
///
/// # Constructing a new [`ContainerProperties`]
///
/// ```rust
/// # use azure_data_cosmos::models::{ContainerProperties, PartitionKeyDefinition};
/// let properties = ContainerProperties {
///     id: "NewContainer".to_string(),
///     partition_key: PartitionKeyDefinition::from("/partitionKey"),
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Default, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ContainerProperties {
    /// The ID of the container.
    pub id: String,

    /// The definition of the partition key for the container.
    pub partition_key: PartitionKeyDefinition,

    /// The indexing policy for the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indexing_policy: Option<IndexingPolicy>,

    /// The time-to-live for items in the container, in seconds.
    ///
    /// `-1` means items never expire unless they set their own `ttl`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_ttl: Option<i64>,

    /// A [`SystemProperties`] object containing common system properties for the container.
    #[serde(flatten)]
    pub system_properties: SystemProperties,
}

/// The kind of partitioning a container uses.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub enum PartitionKeyKind {
    #[default]
    Hash,
    MultiHash,
}

/// Describes the partition key paths of a container.
///
/// A single path converts into a definition directly; hierarchical keys are built from a list of paths.
///
/// ```rust
/// # use azure_data_cosmos::models::{PartitionKeyDefinition, PartitionKeyKind};
/// let single = PartitionKeyDefinition::from("/tenantId");
/// assert_eq!(single.kind, PartitionKeyKind::Hash);
///
/// let hierarchical = PartitionKeyDefinition::from(vec!["/tenantId", "/userId"]);
/// assert_eq!(hierarchical.kind, PartitionKeyKind::MultiHash);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PartitionKeyDefinition {
    pub paths: Vec<String>,
    #[serde(default)]
    pub kind: PartitionKeyKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,
}

impl Default for PartitionKeyDefinition {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            kind: PartitionKeyKind::Hash,
            version: Some(2),
        }
    }
}

impl PartitionKeyDefinition {
    pub fn new(paths: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let paths: Vec<String> = paths.into_iter().map(Into::into).collect();
        let kind = if paths.len() > 1 {
            PartitionKeyKind::MultiHash
        } else {
            PartitionKeyKind::Hash
        };
        Self {
            paths,
            kind,
            version: Some(2),
        }
    }
}

impl From<&str> for PartitionKeyDefinition {
    fn from(path: &str) -> Self {
        PartitionKeyDefinition::new([path])
    }
}

impl From<String> for PartitionKeyDefinition {
    fn from(path: String) -> Self {
        PartitionKeyDefinition::new([path])
    }
}

impl<S: Into<String>> From<Vec<S>> for PartitionKeyDefinition {
    fn from(paths: Vec<S>) -> Self {
        PartitionKeyDefinition::new(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_new_container() {
        let properties = ContainerProperties {
            id: "c1".into(),
            partition_key: "/pk".into(),
            default_ttl: Some(-1),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&properties).unwrap(),
            serde_json::json!({
                "id": "c1",
                "partitionKey": { "paths": ["/pk"], "kind": "Hash", "version": 2 },
                "defaultTtl": -1,
            })
        );
    }

    #[test]
    fn deserialize_service_response() {
        let properties: ContainerProperties = serde_json::from_str(
            r#"{
                "id": "c1",
                "indexingPolicy": {
                    "indexingMode": "consistent",
                    "automatic": true,
                    "includedPaths": [{ "path": "/*" }],
                    "excludedPaths": [{ "path": "/\"_etag\"/?" }]
                },
                "partitionKey": { "paths": ["/a", "/b"], "kind": "MultiHash", "version": 2 },
                "_rid": "hDwmAM7ViQQ=",
                "_ts": 1700000000,
                "_self": "dbs/hDwmAA==/colls/hDwmAM7ViQQ=/",
                "_etag": "\"00000000-0000-0000-0000-000000000000\"",
                "_docs": "docs/"
            }"#,
        )
        .unwrap();
        assert_eq!(properties.partition_key.kind, PartitionKeyKind::MultiHash);
        assert_eq!(properties.partition_key.paths, vec!["/a", "/b"]);
        let indexing = properties.indexing_policy.unwrap();
        assert_eq!(indexing.included_paths[0].path, "/*");
        assert_eq!(
            properties.system_properties.resource_id.as_deref(),
            Some("hDwmAM7ViQQ=")
        );
    }
}
