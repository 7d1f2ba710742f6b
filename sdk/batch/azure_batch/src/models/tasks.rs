// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{EnvironmentSetting, ResourceFile};

/// A task: a command line run once on a compute node.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CloudTask {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub url: Option<String>,
    pub e_tag: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_modified: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub creation_time: Option<OffsetDateTime>,
    pub state: Option<TaskState>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub state_transition_time: Option<OffsetDateTime>,
    pub previous_state: Option<TaskState>,
    pub command_line: Option<String>,
    #[serde(default)]
    pub resource_files: Vec<ResourceFile>,
    #[serde(default)]
    pub environment_settings: Vec<EnvironmentSetting>,
    pub constraints: Option<TaskConstraints>,
    pub required_slots: Option<i32>,
    pub execution_info: Option<TaskExecutionInformation>,
    pub node_info: Option<ComputeNodeInformation>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    Active,
    Preparing,
    Running,
    Completed,
    #[serde(untagged)]
    UnknownValue(String),
}

/// Execution limits of a task. Durations are ISO 8601, e.g. `PT30M`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskConstraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_wall_clock_time: Option<String>,
    /// How long the task directory is kept on the node after the task completes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retention_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_task_retry_count: Option<i32>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskExecutionInformation {
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub start_time: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_time: Option<OffsetDateTime>,
    pub exit_code: Option<i32>,
    #[serde(default)]
    pub retry_count: i32,
    #[serde(default)]
    pub requeue_count: i32,
    pub result: Option<TaskExecutionResult>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskExecutionResult {
    Success,
    Failure,
    #[serde(untagged)]
    UnknownValue(String),
}

/// Where a task ran.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComputeNodeInformation {
    pub pool_id: Option<String>,
    pub node_id: Option<String>,
    pub node_url: Option<String>,
    pub task_root_directory: Option<String>,
}

/// The body of a request to add a task to a job.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskAddParameter {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Run without a shell; use e.g. `/bin/sh -c "..."` for shell features.
    pub command_line: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resource_files: Vec<ResourceFile>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub environment_settings: Vec<EnvironmentSetting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<TaskConstraints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_slots: Option<i32>,
}

impl TaskAddParameter {
    pub fn new(id: impl Into<String>, command_line: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            command_line: command_line.into(),
            ..Default::default()
        }
    }
}

/// The body of a request to update a task. Only the constraints can change.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdateParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<TaskConstraints>,
}
