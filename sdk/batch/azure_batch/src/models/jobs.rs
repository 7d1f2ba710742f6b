// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{MetadataItem, VirtualMachineConfiguration};

/// A job in a Batch account: a collection of tasks run on one pool.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CloudJob {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub uses_task_dependencies: Option<bool>,
    pub url: Option<String>,
    pub e_tag: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_modified: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub creation_time: Option<OffsetDateTime>,
    pub state: Option<JobState>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub state_transition_time: Option<OffsetDateTime>,
    pub previous_state: Option<JobState>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub previous_state_transition_time: Option<OffsetDateTime>,
    pub priority: Option<i32>,
    pub allow_task_preemption: Option<bool>,
    pub max_parallel_tasks: Option<i32>,
    pub constraints: Option<JobConstraints>,
    pub pool_info: Option<PoolInformation>,
    pub on_all_tasks_complete: Option<OnAllTasksComplete>,
    pub on_task_failure: Option<OnTaskFailure>,
    #[serde(default)]
    pub metadata: Vec<MetadataItem>,
    pub execution_info: Option<JobExecutionInformation>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JobState {
    Active,
    Disabling,
    Disabled,
    Enabling,
    Terminating,
    Completed,
    Deleting,
    #[serde(untagged)]
    UnknownValue(String),
}

/// What the service does when every task of a job has completed.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OnAllTasksComplete {
    NoAction,
    TerminateJob,
    #[serde(untagged)]
    UnknownValue(String),
}

/// What the service does when a task of a job fails.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OnTaskFailure {
    NoAction,
    PerformExitOptionsJobAction,
    #[serde(untagged)]
    UnknownValue(String),
}

/// Execution limits of a job. Durations are ISO 8601, e.g. `PT2H`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobConstraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_wall_clock_time: Option<String>,
    /// `-1` retries without limit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_task_retry_count: Option<i32>,
}

/// The pool a job runs on: an existing pool, or one the service creates for the job.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PoolInformation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_pool_specification: Option<AutoPoolSpecification>,
}

impl PoolInformation {
    pub fn pool_id(pool_id: impl Into<String>) -> Self {
        Self {
            pool_id: Some(pool_id.into()),
            auto_pool_specification: None,
        }
    }
}

/// A pool the service creates for a job, or for each job of a schedule.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AutoPoolSpecification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_pool_id_prefix: Option<String>,
    /// Required by the service.
    pub pool_lifetime_option: PoolLifetimeOption,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool: Option<PoolSpecification>,
}

impl AutoPoolSpecification {
    pub fn new(pool_lifetime_option: PoolLifetimeOption, pool: PoolSpecification) -> Self {
        Self {
            auto_pool_id_prefix: None,
            pool_lifetime_option,
            keep_alive: None,
            pool: Some(pool),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PoolLifetimeOption {
    JobSchedule,
    Job,
    #[serde(untagged)]
    UnknownValue(String),
}

/// The pool an auto pool is created with.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PoolSpecification {
    pub vm_size: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_machine_configuration: Option<VirtualMachineConfiguration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_dedicated_nodes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_low_priority_nodes: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_slots_per_node: Option<i32>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JobExecutionInformation {
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub start_time: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_time: Option<OffsetDateTime>,
    pub pool_id: Option<String>,
    /// e.g. `UserTerminate`, `MaxWallClockTimeExpiry` or the reason passed to terminate.
    pub terminate_reason: Option<String>,
}

/// The body of a request to add a job.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobAddParameter {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// From -1000 (lowest) to 1000 (highest).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_parallel_tasks: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_task_preemption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<JobConstraints>,
    pub pool_info: PoolInformation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_all_tasks_complete: Option<OnAllTasksComplete>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_task_failure: Option<OnTaskFailure>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<MetadataItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uses_task_dependencies: Option<bool>,
}

impl JobAddParameter {
    pub fn new(id: impl Into<String>, pool_info: PoolInformation) -> Self {
        Self {
            id: id.into(),
            pool_info,
            ..Default::default()
        }
    }
}

/// The body of a request to replace the properties of a job.
///
/// Properties left unset are reset to their defaults.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobUpdateParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_parallel_tasks: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_task_preemption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<JobConstraints>,
    pub pool_info: PoolInformation,
    #[serde(default)]
    pub metadata: Vec<MetadataItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_all_tasks_complete: Option<OnAllTasksComplete>,
}

/// The body of a request to change some properties of a job.
///
/// Properties left unset keep their current values.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct JobPatchParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_parallel_tasks: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_task_preemption: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_all_tasks_complete: Option<OnAllTasksComplete>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<JobConstraints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pool_info: Option<PoolInformation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<MetadataItem>>,
}

/// What to do with the active tasks of a job being disabled.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DisableJobOption {
    /// Terminate running tasks and requeue them.
    Requeue,
    /// Terminate running tasks and mark them completed.
    Terminate,
    /// Let running tasks finish.
    Wait,
    #[serde(untagged)]
    UnknownValue(String),
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct JobDisableParameter {
    pub disable_tasks: DisableJobOption,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct JobTerminateParameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminate_reason: Option<String>,
}

/// Task counts of a job, by state.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskCounts {
    pub active: i32,
    pub running: i32,
    pub completed: i32,
    pub succeeded: i32,
    pub failed: i32,
}

/// Task counts and task slot counts of a job.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskCountsResult {
    pub task_counts: TaskCounts,
    pub task_slot_counts: TaskCounts,
}
