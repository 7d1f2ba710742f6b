// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{ImageReference, OsType};

/// A Marketplace image the Batch service supports, and the node agent to use with it.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageInformation {
    #[serde(rename = "nodeAgentSKUId")]
    pub node_agent_sku_id: String,
    pub image_reference: ImageReference,
    pub os_type: OsType,
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub batch_support_end_of_life: Option<OffsetDateTime>,
    pub verification_type: VerificationType,
}

/// Whether an image has been verified to work with the Batch node agent.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VerificationType {
    Verified,
    Unverified,
    #[serde(untagged)]
    UnknownValue(String),
}

/// The number of compute nodes in each state, for one pool.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PoolNodeCounts {
    pub pool_id: String,
    pub dedicated: Option<NodeCounts>,
    pub low_priority: Option<NodeCounts>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct NodeCounts {
    pub creating: i32,
    pub idle: i32,
    pub offline: i32,
    pub preempted: i32,
    pub rebooting: i32,
    pub reimaging: i32,
    pub running: i32,
    pub starting: i32,
    pub start_task_failed: i32,
    pub leaving_pool: i32,
    pub unknown: i32,
    pub unusable: i32,
    pub waiting_for_start_task: i32,
    #[serde(rename = "upgradingOS")]
    pub upgrading_os: i32,
    pub total: i32,
}
