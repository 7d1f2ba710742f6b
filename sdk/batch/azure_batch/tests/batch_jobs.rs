// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

mod framework;

use azure_batch::{
    constants,
    models::{CloudJob, DisableJobOption, JobAddParameter, JobState, PoolInformation},
    AccessConditions, BatchError, BatchRequestOptions, BatchResponseHeaders, GetOptions,
    ListOptions, PagedList,
};
use azure_core::{
    error::ErrorKind,
    http::{
        headers::{self, Headers},
        Method, Response, StatusCode,
    },
};
use framework::{
    body_json, collect_items, empty_response, error_code, error_response, header, json_response,
    path, query, TestAccount, ACCOUNT,
};
use futures::TryStreamExt;
use serde_json::json;

#[tokio::test]
async fn add_job_sends_odata_json() {
    let account = TestAccount::new(|_| empty_response(StatusCode::Created));

    let response = account
        .client
        .jobs()
        .add(
            JobAddParameter::new("job-1", PoolInformation::pool_id("pool-1")),
            None,
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::Created);

    let request = account.last_request();
    assert_eq!(*request.method(), Method::Post);
    assert_eq!(path(&request), "/jobs");
    assert_eq!(
        query(&request, "api-version").as_deref(),
        Some(constants::DEFAULT_API_VERSION)
    );
    assert_eq!(
        header(&request, &headers::CONTENT_TYPE),
        Some("application/json; odata=minimalmetadata")
    );
    assert_eq!(
        body_json(&request),
        json!({ "id": "job-1", "poolInfo": { "poolId": "pool-1" } })
    );
    assert!(header(&request, &headers::AUTHORIZATION)
        .unwrap()
        .starts_with(&format!("SharedKey {ACCOUNT}:")));
    assert!(header(&request, &constants::OCP_DATE).is_some());
    assert!(header(&request, &constants::CLIENT_REQUEST_ID).is_some());
}

#[tokio::test]
async fn get_job_with_select() {
    let account = TestAccount::new(|_| {
        let mut response_headers = Headers::new();
        response_headers.insert("etag", "0x8DC3C5E2B6C1A40");
        response_headers.insert("request-id", "4a5f9cd9-0f53-4c9e-b4f2-bd1a8a6e1a1e");
        let body = json!({
            "id": "job-1",
            "state": "active",
            "eTag": "0x8DC3C5E2B6C1A40",
            "creationTime": "2024-03-05T08:07:09.1234567Z",
            "poolInfo": { "poolId": "pool-1" },
            "someNewProperty": true,
        });
        Response::from_bytes(StatusCode::Ok, response_headers, body.to_string())
    });

    let response = account
        .client
        .jobs()
        .get(
            "job-1",
            Some(GetOptions {
                select: Some("id,state".into()),
                ..Default::default()
            }),
        )
        .await
        .unwrap();

    let service_headers = BatchResponseHeaders::from_headers(response.headers()).unwrap();
    assert_eq!(service_headers.etag.as_deref(), Some("0x8DC3C5E2B6C1A40"));
    assert_eq!(
        service_headers.request_id.as_deref(),
        Some("4a5f9cd9-0f53-4c9e-b4f2-bd1a8a6e1a1e")
    );

    let job: CloudJob = response.into_body().await.unwrap();
    assert_eq!(job.id.as_deref(), Some("job-1"));
    assert_eq!(job.state, Some(JobState::Active));
    assert_eq!(job.pool_info.unwrap().pool_id.as_deref(), Some("pool-1"));

    let request = account.last_request();
    assert_eq!(path(&request), "/jobs/job-1");
    assert_eq!(query(&request, "$select").as_deref(), Some("id,state"));
}

#[tokio::test]
async fn missing_job_maps_service_error() {
    let account = TestAccount::new(|_| {
        error_response(
            StatusCode::NotFound,
            "JobNotFound",
            "The specified job does not exist.",
        )
    });

    let err = account.client.jobs().get("nope", None).await.unwrap_err();
    assert!(matches!(
        err.kind(),
        ErrorKind::HttpResponse { status: StatusCode::NotFound, .. }
    ));
    assert_eq!(error_code(&err), Some("JobNotFound"));

    let batch_error = BatchError::from_error(&err).unwrap();
    assert_eq!(batch_error.code.as_deref(), Some("JobNotFound"));
    assert_eq!(
        batch_error.message.and_then(|m| m.value).as_deref(),
        Some("The specified job does not exist.")
    );
}

#[tokio::test]
async fn list_jobs_follows_next_link() {
    let account = TestAccount::new(|request| {
        if query(request, "$skiptoken").is_none() {
            json_response(
                StatusCode::Ok,
                json!({
                    "value": [{ "id": "job-1" }, { "id": "job-2" }],
                    "odata.nextLink": "https://testaccount.westus.batch.azure.com/jobs?api-version=2024-07-01.20.0&$skiptoken=abc&maxresults=2",
                }),
            )
        } else {
            json_response(StatusCode::Ok, json!({ "value": [{ "id": "job-3" }] }))
        }
    });

    let pager = account.client.jobs().list(Some(ListOptions {
        filter: Some("state eq 'active'".into()),
        max_results: Some(2),
        ..Default::default()
    }));
    let jobs: Vec<CloudJob> = collect_items(pager).await.unwrap();
    let ids: Vec<_> = jobs.iter().filter_map(|job| job.id.as_deref()).collect();
    assert_eq!(ids, vec!["job-1", "job-2", "job-3"]);

    let requests = account.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        query(&requests[0], "$filter").as_deref(),
        Some("state eq 'active'")
    );
    assert_eq!(query(&requests[0], "maxresults").as_deref(), Some("2"));
    assert_eq!(query(&requests[1], "$skiptoken").as_deref(), Some("abc"));
    for request in &requests {
        assert_eq!(*request.method(), Method::Get);
        assert!(header(request, &headers::AUTHORIZATION).is_some());
        assert!(header(request, &constants::OCP_DATE).is_some());
    }
}

#[tokio::test]
async fn list_from_job_schedule() {
    let account = TestAccount::new(|_| json_response(StatusCode::Ok, json!({ "value": [] })));

    let pages: Vec<Response<PagedList<CloudJob>>> = account
        .client
        .jobs()
        .list_from_job_schedule("nightly", None)
        .try_collect()
        .await
        .unwrap();
    assert_eq!(pages.len(), 1);
    let page = pages.into_iter().next().unwrap().into_body().await.unwrap();
    assert!(page.items().is_empty());
    assert_eq!(page.next_link(), None);
    assert_eq!(path(&account.last_request()), "/jobschedules/nightly/jobs");
}

#[tokio::test]
async fn delete_job_with_stale_etag_fails() {
    let account = TestAccount::new(|request| {
        if header(request, &headers::IF_MATCH) == Some("0x1") {
            error_response(
                StatusCode::PreconditionFailed,
                "ConditionNotMet",
                "The condition specified using HTTP conditional header(s) is not met.",
            )
        } else {
            empty_response(StatusCode::Accepted)
        }
    });

    let stale = BatchRequestOptions {
        access_conditions: AccessConditions {
            if_match: Some("0x1".into()),
            ..Default::default()
        },
        ..Default::default()
    };
    let err = account
        .client
        .jobs()
        .delete("job-1", Some(stale))
        .await
        .unwrap_err();
    assert_eq!(err.http_status(), Some(StatusCode::PreconditionFailed));
    assert_eq!(error_code(&err), Some("ConditionNotMet"));

    let response = account.client.jobs().delete("job-1", None).await.unwrap();
    assert_eq!(response.status(), StatusCode::Accepted);
    let request = account.last_request();
    assert_eq!(*request.method(), Method::Delete);
    assert_eq!(header(&request, &headers::IF_MATCH), None);
}

#[tokio::test]
async fn disable_enable_and_terminate() {
    let account = TestAccount::new(|_| empty_response(StatusCode::Accepted));
    let jobs = account.client.jobs();

    jobs.disable("job-1", DisableJobOption::Requeue, None)
        .await
        .unwrap();
    jobs.enable("job-1", None).await.unwrap();
    jobs.terminate("job-1", Some("done for today".into()), None)
        .await
        .unwrap();
    jobs.terminate("job-2", None, None).await.unwrap();

    let requests = account.requests();
    assert_eq!(path(&requests[0]), "/jobs/job-1/disable");
    assert_eq!(body_json(&requests[0]), json!({ "disableTasks": "requeue" }));
    assert_eq!(path(&requests[1]), "/jobs/job-1/enable");
    assert_eq!(requests[1].body().len(), 0);
    assert_eq!(path(&requests[2]), "/jobs/job-1/terminate");
    assert_eq!(
        body_json(&requests[2]),
        json!({ "terminateReason": "done for today" })
    );
    assert_eq!(path(&requests[3]), "/jobs/job-2/terminate");
    for request in &requests {
        assert_eq!(*request.method(), Method::Post);
    }
}

#[tokio::test]
async fn task_counts() {
    let account = TestAccount::new(|_| {
        json_response(
            StatusCode::Ok,
            json!({
                "taskCounts": { "active": 3, "running": 2, "completed": 10, "succeeded": 9, "failed": 1 },
                "taskSlotCounts": { "active": 3, "running": 2, "completed": 10, "succeeded": 9, "failed": 1 },
            }),
        )
    });

    let counts = account
        .client
        .jobs()
        .get_task_counts("job-1", Some(BatchRequestOptions {
            timeout: Some(30),
            ..Default::default()
        }))
        .await
        .unwrap()
        .into_body()
        .await
        .unwrap();
    assert_eq!(counts.task_counts.active, 3);
    assert_eq!(counts.task_counts.failed, 1);

    let request = account.last_request();
    assert_eq!(path(&request), "/jobs/job-1/taskcounts");
    assert_eq!(query(&request, "timeout").as_deref(), Some("30"));
}
