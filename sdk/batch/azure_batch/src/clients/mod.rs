// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

//! Clients for the Batch operation groups.
//!
//! Get a [`BatchClient`] first; the other clients come from its accessor methods.

mod account;
mod applications;
mod batch_client;
mod compute_nodes;
mod jobs;
mod pools;
mod tasks;

pub use account::AccountClient;
pub use applications::ApplicationsClient;
pub use batch_client::BatchClient;
pub use compute_nodes::ComputeNodesClient;
pub use jobs::JobsClient;
pub use pools::PoolsClient;
pub use tasks::TasksClient;
