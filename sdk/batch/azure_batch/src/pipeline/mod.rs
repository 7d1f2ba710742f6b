// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

mod authorization_policy;
mod error_policy;
mod request_id_policy;

pub(crate) use authorization_policy::AuthorizationPolicy;

use std::sync::Arc;

use azure_core::{
    error::{Error, ErrorKind},
    http::{
        ClientOptions, Context, Method, Pager, PagerResult, Request, Response, RetryOptions,
    },
    Result,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;

use crate::{constants, utils::AppendPathSegments, BatchPager, BatchRequestOptions, PagedList};
use error_policy::BatchErrorPolicy;
use request_id_policy::RequestIdPolicy;

/// Wraps a core pipeline with the Batch authorization policy and the `api-version` of the client.
#[derive(Debug, Clone)]
pub struct BatchPipeline {
    pub endpoint: Url,
    api_version: String,
    pipeline: azure_core::http::Pipeline,
}

impl BatchPipeline {
    pub fn new(
        endpoint: Url,
        auth_policy: AuthorizationPolicy,
        mut client_options: ClientOptions,
        api_version: String,
    ) -> Self {
        // One attempt per call unless the caller configures retries.
        if client_options.retry.is_none() {
            client_options.retry = Some(RetryOptions::none());
        }
        BatchPipeline {
            endpoint,
            api_version,
            pipeline: azure_core::http::Pipeline::new(
                option_env!("CARGO_PKG_NAME"),
                option_env!("CARGO_PKG_VERSION"),
                client_options,
                Vec::new(),
                vec![
                    Arc::new(RequestIdPolicy),
                    Arc::new(auth_policy),
                    Arc::new(BatchErrorPolicy),
                ],
            ),
        }
    }

    /// Creates a request for the resource at `segments` below the endpoint, with the `api-version` set.
    pub fn request<I>(&self, method: Method, segments: I) -> Request
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.endpoint.with_path_segments(segments);
        url.query_pairs_mut()
            .append_pair(constants::API_VERSION, &self.api_version);
        Request::new(url, method)
    }

    #[tracing::instrument(skip_all, fields(path = %request.url().path()))]
    pub async fn send<T>(&self, ctx: &Context<'_>, request: &mut Request) -> Result<Response<T>> {
        self.pipeline.send(ctx, request).await
    }

    /// Sends `body` as the OData JSON body of `request`.
    pub async fn send_json<T, B: Serialize>(
        &self,
        ctx: &Context<'_>,
        request: &mut Request,
        body: &B,
    ) -> Result<Response<T>> {
        request.set_json(body)?;
        request.add_mandatory_header(&constants::ODATA_JSON);
        self.send(ctx, request).await
    }

    /// Pages through a list operation.
    ///
    /// The first page is `first_request`. Every following page is a `GET` of the `odata.nextLink` the
    /// service returned. The headers of `options` are applied to each page as it is fetched.
    pub fn send_paged<T>(
        &self,
        first_request: Request,
        options: BatchRequestOptions<'_>,
    ) -> BatchPager<T>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let pipeline = self.clone();
        let options = options.into_owned();
        Pager::from_callback(move |next_link: Option<String>| {
            let pipeline = pipeline.clone();
            let options = options.clone();
            let first_request = first_request.clone();
            async move {
                let mut req = match next_link {
                    None => first_request,
                    Some(link) => {
                        let url = Url::parse(&link).map_err(|error| {
                            Error::full(
                                ErrorKind::DataConversion,
                                error,
                                format!("'{link}' is not a valid next link"),
                            )
                        })?;
                        Request::new(url, Method::Get)
                    }
                };
                options.apply_headers(&mut req);

                let response: Response = pipeline
                    .send(&options.method_options.context, &mut req)
                    .await?;
                let (status, headers, body) = response.deconstruct();
                let body = body.collect().await?;
                let link: NextLink = azure_core::json::from_json(&body)?;
                let response: Response<PagedList<T>> = Response::from_bytes(status, headers, body);
                Ok(match link.next_link.filter(|link| !link.is_empty()) {
                    Some(continuation) => PagerResult::Continue {
                        response,
                        continuation,
                    },
                    None => PagerResult::Complete { response },
                })
            }
        })
    }
}

#[derive(Deserialize)]
struct NextLink {
    #[serde(rename = "odata.nextLink", default)]
    next_link: Option<String>,
}
