// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A virtual machine in a pool.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComputeNode {
    pub id: Option<String>,
    pub url: Option<String>,
    pub state: Option<ComputeNodeState>,
    pub scheduling_state: Option<SchedulingState>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub state_transition_time: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_boot_time: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub allocation_time: Option<OffsetDateTime>,
    pub ip_address: Option<String>,
    pub vm_size: Option<String>,
    pub total_tasks_run: Option<i32>,
    pub running_tasks_count: Option<i32>,
    pub running_task_slots_count: Option<i32>,
    pub total_tasks_succeeded: Option<i32>,
    pub is_dedicated: Option<bool>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ComputeNodeState {
    Idle,
    Rebooting,
    Reimaging,
    Running,
    Unusable,
    Creating,
    Starting,
    WaitingForStartTask,
    StartTaskFailed,
    Unknown,
    LeavingPool,
    Offline,
    Preempted,
    UpgradingOs,
    #[serde(untagged)]
    UnknownValue(String),
}

/// Whether new tasks may be scheduled on a node.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SchedulingState {
    Enabled,
    Disabled,
    #[serde(untagged)]
    UnknownValue(String),
}

/// A local user account on a compute node.
#[derive(Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComputeNodeUser {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    /// Defaults to one day from now.
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiry_time: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// OpenSSH public key, Linux nodes only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_public_key: Option<String>,
}

impl ComputeNodeUser {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl std::fmt::Debug for ComputeNodeUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComputeNodeUser")
            .field("name", &self.name)
            .field("is_admin", &self.is_admin)
            .field("expiry_time", &self.expiry_time)
            .field("password", &self.password.as_ref().map(|_| "<REDACTED>"))
            .field("ssh_public_key", &self.ssh_public_key)
            .finish()
    }
}

/// The body of a request to update a user account on a node.
///
/// Replaces every updatable property: unset properties are reset.
#[derive(Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NodeUpdateUserParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub expiry_time: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssh_public_key: Option<String>,
}

impl std::fmt::Debug for NodeUpdateUserParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeUpdateUserParameter")
            .field("password", &self.password.as_ref().map(|_| "<REDACTED>"))
            .field("expiry_time", &self.expiry_time)
            .field("ssh_public_key", &self.ssh_public_key)
            .finish()
    }
}

/// What to do with running tasks when a node restarts, is reimaged, or stops taking tasks.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ComputeNodeRebootOption {
    Requeue,
    Terminate,
    TaskCompletion,
    RetainedData,
    #[serde(untagged)]
    UnknownValue(String),
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NodeRebootParameter {
    /// Defaults to `requeue` on the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_reboot_option: Option<ComputeNodeRebootOption>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NodeReimageParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_reimage_option: Option<ComputeNodeRebootOption>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DisableComputeNodeSchedulingOption {
    Requeue,
    Terminate,
    TaskCompletion,
    #[serde(untagged)]
    UnknownValue(String),
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NodeDisableSchedulingParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_disable_scheduling_option: Option<DisableComputeNodeSchedulingOption>,
}

/// How to reach a node over RDP or SSH.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComputeNodeGetRemoteLoginSettingsResult {
    #[serde(rename = "remoteLoginIPAddress")]
    pub remote_login_ip_address: String,
    pub remote_login_port: i32,
}
