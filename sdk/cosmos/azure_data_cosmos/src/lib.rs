// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod clients;
mod connection_string;
pub mod constants;
mod feed;
mod options;
mod partition_key;
pub(crate) mod pipeline;
mod query;
pub(crate) mod resource_context;
mod session;
mod utils;

pub mod models;

#[doc(inline)]
pub use clients::{CosmosClient, CosmosClientMethods};

pub use connection_string::*;
pub use options::*;
pub use partition_key::*;
pub use pipeline::AuthorizationToken;
pub use query::{Query, QueryParameter, QueryPartitionStrategy};
pub use session::SessionTokenError;

pub use feed::{FeedPage, FeedPager};

/// An identifier for a partition key range, as it appears in session tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PartitionKeyRangeId(String);

impl PartitionKeyRangeId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}
