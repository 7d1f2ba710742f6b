// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{MetadataItem, StartTask, VirtualMachineConfiguration};

/// A pool of compute nodes.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CloudPool {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub url: Option<String>,
    pub e_tag: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_modified: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub creation_time: Option<OffsetDateTime>,
    pub state: Option<PoolState>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub state_transition_time: Option<OffsetDateTime>,
    pub allocation_state: Option<AllocationState>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub allocation_state_transition_time: Option<OffsetDateTime>,
    pub vm_size: Option<String>,
    pub virtual_machine_configuration: Option<VirtualMachineConfiguration>,
    pub resize_timeout: Option<String>,
    pub current_dedicated_nodes: Option<i32>,
    pub current_low_priority_nodes: Option<i32>,
    pub target_dedicated_nodes: Option<i32>,
    pub target_low_priority_nodes: Option<i32>,
    pub enable_auto_scale: Option<bool>,
    pub auto_scale_formula: Option<String>,
    pub auto_scale_evaluation_interval: Option<String>,
    pub task_slots_per_node: Option<i32>,
    pub start_task: Option<StartTask>,
    #[serde(default)]
    pub metadata: Vec<MetadataItem>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PoolState {
    Active,
    Deleting,
    #[serde(untagged)]
    UnknownValue(String),
}

/// Whether a pool is resizing.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AllocationState {
    Steady,
    Resizing,
    Stopping,
    #[serde(untagged)]
    UnknownValue(String),
}

/// The body of a request to add a pool.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PoolAddParameter {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// e.g. `standard_d2s_v3`.
    pub vm_size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_machine_configuration: Option<VirtualMachineConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize_timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_dedicated_nodes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_low_priority_nodes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_auto_scale: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scale_formula: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scale_evaluation_interval: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_slots_per_node: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_task: Option<StartTask>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<MetadataItem>,
}

impl PoolAddParameter {
    pub fn new(
        id: impl Into<String>,
        vm_size: impl Into<String>,
        virtual_machine_configuration: VirtualMachineConfiguration,
    ) -> Self {
        Self {
            id: id.into(),
            vm_size: vm_size.into(),
            virtual_machine_configuration: Some(virtual_machine_configuration),
            ..Default::default()
        }
    }
}

/// The body of a request to change some properties of a pool.
///
/// Properties left unset keep their current values.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PoolPatchParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_task: Option<StartTask>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<MetadataItem>>,
}

/// The body of a request to change the number of nodes in a pool.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PoolResizeParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_dedicated_nodes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_low_priority_nodes: Option<i32>,
    /// Defaults to 15 minutes on the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resize_timeout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_deallocation_option: Option<ComputeNodeDeallocationOption>,
}

/// What to do with the tasks of a node being removed from a pool.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ComputeNodeDeallocationOption {
    Requeue,
    Terminate,
    TaskCompletion,
    RetainedData,
    #[serde(untagged)]
    UnknownValue(String),
}

/// The body of a request to turn on automatic scaling for a pool.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PoolEnableAutoScaleParameter {
    /// e.g. `$TargetDedicatedNodes = min(10, $PendingTasks.GetSample(1));`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scale_formula: Option<String>,
    /// Between 5 minutes and 168 hours, e.g. `PT15M`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scale_evaluation_interval: Option<String>,
}
