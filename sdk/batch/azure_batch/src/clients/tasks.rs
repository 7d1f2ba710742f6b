// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use azure_core::http::{Method, Response};

use crate::{
    models::{CloudTask, TaskAddParameter, TaskUpdateParameter},
    pipeline::BatchPipeline,
    BatchPager, BatchRequestOptions, GetOptions, ListOptions,
};

/// Operations on the tasks of a job.
#[derive(Debug, Clone)]
pub struct TasksClient {
    pipeline: BatchPipeline,
}

impl TasksClient {
    pub(crate) fn new(pipeline: BatchPipeline) -> Self {
        Self { pipeline }
    }

    pub async fn add(
        &self,
        job_id: &str,
        task: TaskAddParameter,
        options: Option<BatchRequestOptions<'_>>,
    ) -> azure_core::Result<Response> {
        let options = options.unwrap_or_default();
        let mut req = self
            .pipeline
            .request(Method::Post, ["jobs", job_id, "tasks"]);
        options.apply(&mut req);
        self.pipeline
            .send_json(&options.method_options.context, &mut req, &task)
            .await
    }

    pub async fn get(
        &self,
        job_id: &str,
        task_id: &str,
        options: Option<GetOptions<'_>>,
    ) -> azure_core::Result<Response<CloudTask>> {
        let options = options.unwrap_or_default();
        let mut req = self
            .pipeline
            .request(Method::Get, ["jobs", job_id, "tasks", task_id]);
        options.apply(&mut req);
        self.pipeline
            .send(&options.request.method_options.context, &mut req)
            .await
    }

    pub fn list(&self, job_id: &str, options: Option<ListOptions<'_>>) -> BatchPager<CloudTask> {
        let options = options.unwrap_or_default();
        let mut req = self
            .pipeline
            .request(Method::Get, ["jobs", job_id, "tasks"]);
        options.apply(&mut req);
        self.pipeline.send_paged(req, options.request)
    }

    /// Replaces the constraints of a task.
    pub async fn update(
        &self,
        job_id: &str,
        task_id: &str,
        task: TaskUpdateParameter,
        options: Option<BatchRequestOptions<'_>>,
    ) -> azure_core::Result<Response> {
        let options = options.unwrap_or_default();
        let mut req = self
            .pipeline
            .request(Method::Put, ["jobs", job_id, "tasks", task_id]);
        options.apply(&mut req);
        self.pipeline
            .send_json(&options.method_options.context, &mut req, &task)
            .await
    }

    /// Deletes a task. A running task is terminated first.
    pub async fn delete(
        &self,
        job_id: &str,
        task_id: &str,
        options: Option<BatchRequestOptions<'_>>,
    ) -> azure_core::Result<Response> {
        let options = options.unwrap_or_default();
        let mut req = self
            .pipeline
            .request(Method::Delete, ["jobs", job_id, "tasks", task_id]);
        options.apply(&mut req);
        self.pipeline
            .send(&options.method_options.context, &mut req)
            .await
    }

    pub async fn terminate(
        &self,
        job_id: &str,
        task_id: &str,
        options: Option<BatchRequestOptions<'_>>,
    ) -> azure_core::Result<Response> {
        let options = options.unwrap_or_default();
        let mut req = self
            .pipeline
            .request(Method::Post, ["jobs", job_id, "tasks", task_id, "terminate"]);
        options.apply(&mut req);
        self.pipeline
            .send(&options.method_options.context, &mut req)
            .await
    }

    /// Makes a completed, failed task eligible to run again, resetting its retry count.
    pub async fn reactivate(
        &self,
        job_id: &str,
        task_id: &str,
        options: Option<BatchRequestOptions<'_>>,
    ) -> azure_core::Result<Response> {
        let options = options.unwrap_or_default();
        let mut req = self
            .pipeline
            .request(Method::Post, ["jobs", job_id, "tasks", task_id, "reactivate"]);
        options.apply(&mut req);
        self.pipeline
            .send(&options.method_options.context, &mut req)
            .await
    }
}
