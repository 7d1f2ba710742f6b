// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

mod framework;

use azure_batch::{
    models::{
        AllocationState, CloudPool, ComputeNodeDeallocationOption, ImageReference, MetadataItem,
        PoolAddParameter, PoolEnableAutoScaleParameter, PoolPatchParameter, PoolResizeParameter,
        PoolState, VirtualMachineConfiguration,
    },
    BatchCredentials, BatchError,
};
use azure_core::http::{headers, Method, StatusCode};
use framework::{
    body_json, empty_response, error_code, error_response, header, json_response, path,
    TestAccount,
};
use serde_json::json;

fn ubuntu() -> VirtualMachineConfiguration {
    VirtualMachineConfiguration {
        image_reference: ImageReference::marketplace(
            "canonical",
            "0001-com-ubuntu-server-jammy",
            "22_04-lts",
        ),
        node_agent_sku_id: "batch.node.ubuntu 22.04".into(),
    }
}

#[tokio::test]
async fn add_pool() {
    let account = TestAccount::new(|_| empty_response(StatusCode::Created));

    let mut pool = PoolAddParameter::new("pool-1", "standard_d2s_v3", ubuntu());
    pool.target_dedicated_nodes = Some(2);
    account.client.pools().add(pool, None).await.unwrap();

    let request = account.last_request();
    assert_eq!(*request.method(), Method::Post);
    assert_eq!(path(&request), "/pools");
    assert_eq!(
        body_json(&request),
        json!({
            "id": "pool-1",
            "vmSize": "standard_d2s_v3",
            "virtualMachineConfiguration": {
                "imageReference": {
                    "publisher": "canonical",
                    "offer": "0001-com-ubuntu-server-jammy",
                    "sku": "22_04-lts",
                    "version": "latest",
                },
                "nodeAgentSKUId": "batch.node.ubuntu 22.04",
            },
            "targetDedicatedNodes": 2,
        })
    );
}

#[tokio::test]
async fn get_pool() {
    let account = TestAccount::new(|_| {
        json_response(
            StatusCode::Ok,
            json!({
                "id": "pool-1",
                "state": "active",
                "allocationState": "resizing",
                "vmSize": "standard_d2s_v3",
                "currentDedicatedNodes": 1,
                "targetDedicatedNodes": 2,
            }),
        )
    });

    let pool: CloudPool = account
        .client
        .pools()
        .get("pool-1", None)
        .await
        .unwrap()
        .into_body()
        .await
        .unwrap();
    assert_eq!(pool.state, Some(PoolState::Active));
    assert_eq!(pool.allocation_state, Some(AllocationState::Resizing));
    assert_eq!(pool.current_dedicated_nodes, Some(1));
}

#[tokio::test]
async fn exists_is_true_for_a_pool() {
    let account = TestAccount::new(|_| empty_response(StatusCode::Ok));

    assert!(account.client.pools().exists("pool-1", None).await.unwrap());
    let request = account.last_request();
    assert_eq!(*request.method(), Method::Head);
    assert_eq!(path(&request), "/pools/pool-1");
}

#[tokio::test]
async fn exists_is_false_for_not_found() {
    let account = TestAccount::new(|_| empty_response(StatusCode::NotFound));

    assert!(!account.client.pools().exists("nope", None).await.unwrap());
}

#[tokio::test]
async fn exists_propagates_other_failures() {
    let account = TestAccount::new(|_| {
        error_response(
            StatusCode::Forbidden,
            "AuthenticationFailed",
            "Server failed to authenticate the request.",
        )
    });

    let err = account
        .client
        .pools()
        .exists("pool-1", None)
        .await
        .unwrap_err();
    assert_eq!(err.http_status(), Some(StatusCode::Forbidden));
}

#[tokio::test]
async fn resize_and_stop_resize() {
    let account = TestAccount::new(|_| empty_response(StatusCode::Accepted));
    let pools = account.client.pools();

    pools
        .resize(
            "pool-1",
            PoolResizeParameter {
                target_dedicated_nodes: Some(5),
                node_deallocation_option: Some(ComputeNodeDeallocationOption::TaskCompletion),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();
    pools.stop_resize("pool-1", None).await.unwrap();

    let requests = account.requests();
    assert_eq!(path(&requests[0]), "/pools/pool-1/resize");
    assert_eq!(
        body_json(&requests[0]),
        json!({ "targetDedicatedNodes": 5, "nodeDeallocationOption": "taskcompletion" })
    );
    assert_eq!(path(&requests[1]), "/pools/pool-1/stopresize");
    assert_eq!(requests[1].body().len(), 0);
}

#[tokio::test]
async fn auto_scale_while_resizing_is_rejected() {
    let account = TestAccount::new(|request| {
        if path(request).ends_with("/enableautoscale") {
            error_response(
                StatusCode::Conflict,
                "PoolIsResizing",
                "The specified pool is resizing.",
            )
        } else {
            empty_response(StatusCode::Ok)
        }
    });
    let pools = account.client.pools();

    let err = pools
        .enable_auto_scale(
            "pool-1",
            PoolEnableAutoScaleParameter {
                auto_scale_formula: Some("$TargetDedicatedNodes = 1;".into()),
                auto_scale_evaluation_interval: Some("PT5M".into()),
            },
            None,
        )
        .await
        .unwrap_err();
    assert_eq!(error_code(&err), Some("PoolIsResizing"));
    assert_eq!(
        BatchError::from_error(&err).unwrap().to_string(),
        "PoolIsResizing: The specified pool is resizing."
    );
    assert_eq!(
        body_json(&account.last_request()),
        json!({
            "autoScaleFormula": "$TargetDedicatedNodes = 1;",
            "autoScaleEvaluationInterval": "PT5M",
        })
    );

    pools.disable_auto_scale("pool-1", None).await.unwrap();
    assert_eq!(
        path(&account.last_request()),
        "/pools/pool-1/disableautoscale"
    );
}

#[tokio::test]
async fn patch_and_delete() {
    let account = TestAccount::new(|_| empty_response(StatusCode::Ok));
    let pools = account.client.pools();

    pools
        .patch(
            "pool-1",
            PoolPatchParameter {
                metadata: Some(vec![MetadataItem::new("owner", "render-team")]),
                ..Default::default()
            },
            None,
        )
        .await
        .unwrap();
    let request = account.last_request();
    assert_eq!(*request.method(), Method::Patch);
    assert_eq!(
        body_json(&request),
        json!({ "metadata": [{ "name": "owner", "value": "render-team" }] })
    );

    pools.delete("pool-1", None).await.unwrap();
    assert_eq!(*account.last_request().method(), Method::Delete);
}

#[tokio::test]
async fn token_credentials_send_bearer_token() {
    let account = TestAccount::with_credentials(
        |_| json_response(StatusCode::Ok, json!({ "id": "pool-1" })),
        BatchCredentials::token("eyJ0eXAi"),
    );

    account.client.pools().get("pool-1", None).await.unwrap();
    assert_eq!(
        header(&account.last_request(), &headers::AUTHORIZATION),
        Some("Bearer eyJ0eXAi")
    );
}
