// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use azure_core::http::{Method, Response};

use crate::{
    models::{
        CloudJob, DisableJobOption, JobAddParameter, JobDisableParameter, JobPatchParameter,
        JobTerminateParameter, JobUpdateParameter, TaskCountsResult,
    },
    pipeline::BatchPipeline,
    BatchPager, BatchRequestOptions, GetOptions, ListOptions,
};

/// Operations on jobs.
///
/// Operations that change a job return no body; read the new ETag with
/// [`BatchResponseHeaders::from_headers`](crate::BatchResponseHeaders::from_headers).
#[derive(Debug, Clone)]
pub struct JobsClient {
    pipeline: BatchPipeline,
}

impl JobsClient {
    pub(crate) fn new(pipeline: BatchPipeline) -> Self {
        Self { pipeline }
    }

    /// Adds a job to the account.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn doc() -> azure_core::Result<()> {
    /// use azure_batch::models::{JobAddParameter, PoolInformation};
    /// # let client: azure_batch::BatchClient = panic!("this is a non-running example");
    ///
    /// let job = JobAddParameter::new("render-frames", PoolInformation::pool_id("render-pool"));
    /// client.jobs().add(job, None).await?;
    /// # Ok(()) }
    /// ```
    pub async fn add(
        &self,
        job: JobAddParameter,
        options: Option<BatchRequestOptions<'_>>,
    ) -> azure_core::Result<Response> {
        let options = options.unwrap_or_default();
        let mut req = self.pipeline.request(Method::Post, ["jobs"]);
        options.apply(&mut req);
        self.pipeline
            .send_json(&options.method_options.context, &mut req, &job)
            .await
    }

    pub async fn get(
        &self,
        job_id: &str,
        options: Option<GetOptions<'_>>,
    ) -> azure_core::Result<Response<CloudJob>> {
        let options = options.unwrap_or_default();
        let mut req = self.pipeline.request(Method::Get, ["jobs", job_id]);
        options.apply(&mut req);
        self.pipeline
            .send(&options.request.method_options.context, &mut req)
            .await
    }

    /// Lists the jobs in the account.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # async fn doc() -> azure_core::Result<()> {
    /// use azure_batch::ListOptions;
    /// use futures::TryStreamExt;
    /// # let client: azure_batch::BatchClient = panic!("this is a non-running example");
    ///
    /// let options = ListOptions {
    ///     filter: Some("state eq 'active'".into()),
    ///     ..Default::default()
    /// };
    /// let mut pages = client.jobs().list(Some(options));
    /// while let Some(page) = pages.try_next().await? {
    ///     for job in page.into_body().await?.into_items() {
    ///         println!("{:?}", job.id);
    ///     }
    /// }
    /// # Ok(()) }
    /// ```
    pub fn list(&self, options: Option<ListOptions<'_>>) -> BatchPager<CloudJob> {
        let options = options.unwrap_or_default();
        let mut req = self.pipeline.request(Method::Get, ["jobs"]);
        options.apply(&mut req);
        self.pipeline.send_paged(req, options.request)
    }

    /// Lists the jobs created under a job schedule.
    pub fn list_from_job_schedule(
        &self,
        job_schedule_id: &str,
        options: Option<ListOptions<'_>>,
    ) -> BatchPager<CloudJob> {
        let options = options.unwrap_or_default();
        let mut req = self
            .pipeline
            .request(Method::Get, ["jobschedules", job_schedule_id, "jobs"]);
        options.apply(&mut req);
        self.pipeline.send_paged(req, options.request)
    }

    /// Replaces the updatable properties of a job. Properties not set in `job` are reset.
    pub async fn update(
        &self,
        job_id: &str,
        job: JobUpdateParameter,
        options: Option<BatchRequestOptions<'_>>,
    ) -> azure_core::Result<Response> {
        let options = options.unwrap_or_default();
        let mut req = self.pipeline.request(Method::Put, ["jobs", job_id]);
        options.apply(&mut req);
        self.pipeline
            .send_json(&options.method_options.context, &mut req, &job)
            .await
    }

    /// Changes the properties set in `job`, leaving the others unchanged.
    pub async fn patch(
        &self,
        job_id: &str,
        job: JobPatchParameter,
        options: Option<BatchRequestOptions<'_>>,
    ) -> azure_core::Result<Response> {
        let options = options.unwrap_or_default();
        let mut req = self.pipeline.request(Method::Patch, ["jobs", job_id]);
        options.apply(&mut req);
        self.pipeline
            .send_json(&options.method_options.context, &mut req, &job)
            .await
    }

    /// Starts deleting a job and its tasks. The job is in the `deleting` state until the service is done.
    pub async fn delete(
        &self,
        job_id: &str,
        options: Option<BatchRequestOptions<'_>>,
    ) -> azure_core::Result<Response> {
        let options = options.unwrap_or_default();
        let mut req = self.pipeline.request(Method::Delete, ["jobs", job_id]);
        options.apply(&mut req);
        self.pipeline
            .send(&options.method_options.context, &mut req)
            .await
    }

    /// Stops scheduling new tasks of the job. `disable_tasks` says what happens to running tasks.
    pub async fn disable(
        &self,
        job_id: &str,
        disable_tasks: DisableJobOption,
        options: Option<BatchRequestOptions<'_>>,
    ) -> azure_core::Result<Response> {
        let options = options.unwrap_or_default();
        let mut req = self
            .pipeline
            .request(Method::Post, ["jobs", job_id, "disable"]);
        options.apply(&mut req);
        self.pipeline
            .send_json(
                &options.method_options.context,
                &mut req,
                &JobDisableParameter { disable_tasks },
            )
            .await
    }

    pub async fn enable(
        &self,
        job_id: &str,
        options: Option<BatchRequestOptions<'_>>,
    ) -> azure_core::Result<Response> {
        let options = options.unwrap_or_default();
        let mut req = self
            .pipeline
            .request(Method::Post, ["jobs", job_id, "enable"]);
        options.apply(&mut req);
        self.pipeline
            .send(&options.method_options.context, &mut req)
            .await
    }

    /// Terminates a job, marking it completed. Running tasks are terminated.
    pub async fn terminate(
        &self,
        job_id: &str,
        terminate_reason: Option<String>,
        options: Option<BatchRequestOptions<'_>>,
    ) -> azure_core::Result<Response> {
        let options = options.unwrap_or_default();
        let mut req = self
            .pipeline
            .request(Method::Post, ["jobs", job_id, "terminate"]);
        options.apply(&mut req);
        self.pipeline
            .send_json(
                &options.method_options.context,
                &mut req,
                &JobTerminateParameter { terminate_reason },
            )
            .await
    }

    /// Counts the tasks of a job by state. The counts may lag by a few seconds.
    pub async fn get_task_counts(
        &self,
        job_id: &str,
        options: Option<BatchRequestOptions<'_>>,
    ) -> azure_core::Result<Response<TaskCountsResult>> {
        let options = options.unwrap_or_default();
        let mut req = self
            .pipeline
            .request(Method::Get, ["jobs", job_id, "taskcounts"]);
        options.apply(&mut req);
        self.pipeline
            .send(&options.method_options.context, &mut req)
            .await
    }
}
