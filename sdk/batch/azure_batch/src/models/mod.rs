// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

//! Model types sent to and received from the Batch service.
//!
//! Enumerations are open: a value this crate does not know deserializes into the `UnknownValue`
//! variant instead of failing, and serializes back unchanged.

mod account;
mod applications;
mod common;
mod jobs;
mod nodes;
mod pools;
mod tasks;

pub use account::*;
pub use applications::*;
pub use common::*;
pub use jobs::*;
pub use nodes::*;
pub use pools::*;
pub use tasks::*;

// `Response::into_body` needs `Model`; these bodies are JSON.
macro_rules! json_model {
    ($($ty:ty),* $(,)?) => {$(
        impl azure_core::http::Model for $ty {
            async fn from_response_body(
                body: azure_core::http::response::ResponseBody,
            ) -> azure_core::Result<Self> {
                body.json().await
            }
        }
    )*};
}

json_model!(
    ApplicationSummary,
    CloudJob,
    CloudPool,
    CloudTask,
    ComputeNode,
    ComputeNodeGetRemoteLoginSettingsResult,
    TaskCountsResult,
);
