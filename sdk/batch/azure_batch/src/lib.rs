// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod clients;
pub mod constants;
mod credentials;
mod error;
pub mod models;
mod options;
mod paging;
pub(crate) mod pipeline;
mod response_headers;
mod utils;

#[doc(inline)]
pub use clients::BatchClient;
pub use credentials::{BatchCredentials, BatchSharedKeyCredentials};
pub use error::{BatchError, BatchErrorDetail, BatchErrorMessage};
pub use options::*;
pub use paging::{BatchPager, PagedList};
pub use response_headers::BatchResponseHeaders;
