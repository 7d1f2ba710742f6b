// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use azure_core::http::{Method, Response};

use crate::{
    models::{
        ComputeNode, ComputeNodeGetRemoteLoginSettingsResult, ComputeNodeUser,
        NodeDisableSchedulingParameter, NodeRebootParameter, NodeReimageParameter,
        NodeUpdateUserParameter,
    },
    pipeline::BatchPipeline,
    BatchPager, BatchRequestOptions, GetOptions, ListOptions,
};

/// Operations on the compute nodes of a pool.
#[derive(Debug, Clone)]
pub struct ComputeNodesClient {
    pipeline: BatchPipeline,
}

impl ComputeNodesClient {
    pub(crate) fn new(pipeline: BatchPipeline) -> Self {
        Self { pipeline }
    }

    pub async fn get(
        &self,
        pool_id: &str,
        node_id: &str,
        options: Option<GetOptions<'_>>,
    ) -> azure_core::Result<Response<ComputeNode>> {
        let options = options.unwrap_or_default();
        let mut req = self
            .pipeline
            .request(Method::Get, ["pools", pool_id, "nodes", node_id]);
        options.apply(&mut req);
        self.pipeline
            .send(&options.request.method_options.context, &mut req)
            .await
    }

    pub fn list(&self, pool_id: &str, options: Option<ListOptions<'_>>) -> BatchPager<ComputeNode> {
        let options = options.unwrap_or_default();
        let mut req = self
            .pipeline
            .request(Method::Get, ["pools", pool_id, "nodes"]);
        options.apply(&mut req);
        self.pipeline.send_paged(req, options.request)
    }

    /// Adds a local user account to a node, for remote login.
    pub async fn add_user(
        &self,
        pool_id: &str,
        node_id: &str,
        user: ComputeNodeUser,
        options: Option<BatchRequestOptions<'_>>,
    ) -> azure_core::Result<Response> {
        let options = options.unwrap_or_default();
        let mut req = self
            .pipeline
            .request(Method::Post, ["pools", pool_id, "nodes", node_id, "users"]);
        options.apply(&mut req);
        self.pipeline
            .send_json(&options.method_options.context, &mut req, &user)
            .await
    }

    pub async fn update_user(
        &self,
        pool_id: &str,
        node_id: &str,
        user_name: &str,
        user: NodeUpdateUserParameter,
        options: Option<BatchRequestOptions<'_>>,
    ) -> azure_core::Result<Response> {
        let options = options.unwrap_or_default();
        let mut req = self.pipeline.request(
            Method::Put,
            ["pools", pool_id, "nodes", node_id, "users", user_name],
        );
        options.apply(&mut req);
        self.pipeline
            .send_json(&options.method_options.context, &mut req, &user)
            .await
    }

    pub async fn delete_user(
        &self,
        pool_id: &str,
        node_id: &str,
        user_name: &str,
        options: Option<BatchRequestOptions<'_>>,
    ) -> azure_core::Result<Response> {
        let options = options.unwrap_or_default();
        let mut req = self.pipeline.request(
            Method::Delete,
            ["pools", pool_id, "nodes", node_id, "users", user_name],
        );
        options.apply(&mut req);
        self.pipeline
            .send(&options.method_options.context, &mut req)
            .await
    }

    /// Restarts a node. Only nodes that are idle or running can be rebooted.
    pub async fn reboot(
        &self,
        pool_id: &str,
        node_id: &str,
        parameters: NodeRebootParameter,
        options: Option<BatchRequestOptions<'_>>,
    ) -> azure_core::Result<Response> {
        let options = options.unwrap_or_default();
        let mut req = self
            .pipeline
            .request(Method::Post, ["pools", pool_id, "nodes", node_id, "reboot"]);
        options.apply(&mut req);
        self.pipeline
            .send_json(&options.method_options.context, &mut req, &parameters)
            .await
    }

    /// Reinstalls the operating system of a node.
    pub async fn reimage(
        &self,
        pool_id: &str,
        node_id: &str,
        parameters: NodeReimageParameter,
        options: Option<BatchRequestOptions<'_>>,
    ) -> azure_core::Result<Response> {
        let options = options.unwrap_or_default();
        let mut req = self
            .pipeline
            .request(Method::Post, ["pools", pool_id, "nodes", node_id, "reimage"]);
        options.apply(&mut req);
        self.pipeline
            .send_json(&options.method_options.context, &mut req, &parameters)
            .await
    }

    /// Stops scheduling new tasks on a node.
    pub async fn disable_scheduling(
        &self,
        pool_id: &str,
        node_id: &str,
        parameters: NodeDisableSchedulingParameter,
        options: Option<BatchRequestOptions<'_>>,
    ) -> azure_core::Result<Response> {
        let options = options.unwrap_or_default();
        let mut req = self.pipeline.request(
            Method::Post,
            ["pools", pool_id, "nodes", node_id, "disablescheduling"],
        );
        options.apply(&mut req);
        self.pipeline
            .send_json(&options.method_options.context, &mut req, &parameters)
            .await
    }

    pub async fn enable_scheduling(
        &self,
        pool_id: &str,
        node_id: &str,
        options: Option<BatchRequestOptions<'_>>,
    ) -> azure_core::Result<Response> {
        let options = options.unwrap_or_default();
        let mut req = self.pipeline.request(
            Method::Post,
            ["pools", pool_id, "nodes", node_id, "enablescheduling"],
        );
        options.apply(&mut req);
        self.pipeline
            .send(&options.method_options.context, &mut req)
            .await
    }

    /// The IP address and port to use for RDP or SSH to a node.
    pub async fn get_remote_login_settings(
        &self,
        pool_id: &str,
        node_id: &str,
        options: Option<BatchRequestOptions<'_>>,
    ) -> azure_core::Result<Response<ComputeNodeGetRemoteLoginSettingsResult>> {
        let options = options.unwrap_or_default();
        let mut req = self.pipeline.request(
            Method::Get,
            ["pools", pool_id, "nodes", node_id, "remoteloginsettings"],
        );
        options.apply(&mut req);
        self.pipeline
            .send(&options.method_options.context, &mut req)
            .await
    }
}
