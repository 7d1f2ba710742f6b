// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

mod authorization_policy;
mod session_policy;

pub use authorization_policy::AuthorizationToken;
pub(crate) use authorization_policy::AuthorizationPolicy;

use std::sync::Arc;

use azure_core::http::{
    ClientOptions, Context, Pager, PagerResult, Request, Response, RetryOptions,
};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    constants, resource_context::ResourceLink, session::SessionContainer, ConsistencyLevel,
    FeedPage, FeedPager, Query,
};
use session_policy::SessionPolicy;

/// Newtype that wraps an Azure Core pipeline to provide a Cosmos-specific pipeline which configures our authorization policy and enforces that a [`ResourceLink`] is set on the context.
#[derive(Debug, Clone)]
pub struct CosmosPipeline {
    pub endpoint: Url,
    pipeline: azure_core::http::Pipeline,
    sessions: Arc<SessionContainer>,
    consistency_level: Option<ConsistencyLevel>,
}

impl CosmosPipeline {
    pub fn new(
        endpoint: Url,
        auth_policy: AuthorizationPolicy,
        mut client_options: ClientOptions,
        consistency_level: Option<ConsistencyLevel>,
    ) -> Self {
        // One attempt per call unless the caller configures retries.
        if client_options.retry.is_none() {
            client_options.retry = Some(RetryOptions::none());
        }
        let sessions = Arc::new(SessionContainer::new());
        CosmosPipeline {
            endpoint,
            pipeline: azure_core::http::Pipeline::new(
                option_env!("CARGO_PKG_NAME"),
                option_env!("CARGO_PKG_VERSION"),
                client_options,
                Vec::new(),
                vec![
                    Arc::new(auth_policy),
                    Arc::new(SessionPolicy::new(sessions.clone())),
                ],
            ),
            sessions,
            consistency_level,
        }
    }

    /// Creates a [`Url`] out of the provided [`ResourceLink`]
    pub fn url(&self, link: &ResourceLink) -> Url {
        link.url(&self.endpoint)
    }

    #[tracing::instrument(skip_all, fields(link = %resource_link.path()))]
    pub async fn send<T>(
        &self,
        ctx: Context<'_>,
        request: &mut Request,
        resource_link: ResourceLink,
    ) -> azure_core::Result<Response<T>> {
        request.insert_header(constants::VERSION, constants::API_VERSION);
        if let Some(level) = &self.consistency_level {
            if request
                .headers()
                .get_optional_str(&constants::CONSISTENCY_LEVEL)
                .is_none()
            {
                request.add_mandatory_header(level);
            }
        }

        let ctx = ctx.with_value(resource_link);
        self.pipeline.send(&ctx, request).await
    }

    /// Forgets the session tokens of a deleted container.
    pub fn clear_session(&self, container_link: &str) {
        self.sessions.clear(container_link);
    }

    /// Pages through the results of `query`, POSTed to the feed `resource_link` identifies.
    ///
    /// `base_request` carries any per-operation headers; it is re-sent for every page.
    pub fn send_query_request<T: DeserializeOwned + Send + 'static>(
        &self,
        ctx: Context<'_>,
        query: Query,
        mut base_request: Request,
        resource_link: ResourceLink,
        continuation: Option<String>,
    ) -> azure_core::Result<FeedPager<T>> {
        base_request.insert_header(constants::QUERY, "True");
        base_request.set_json(&query)?;
        base_request.add_mandatory_header(&constants::QUERY_CONTENT_TYPE);
        Ok(self.feed_pager(ctx, base_request, resource_link, continuation))
    }

    /// Pages through a feed with `GET`, such as every item of a container.
    pub fn send_feed_request<T: DeserializeOwned + Send + 'static>(
        &self,
        ctx: Context<'_>,
        base_request: Request,
        resource_link: ResourceLink,
        continuation: Option<String>,
    ) -> FeedPager<T> {
        self.feed_pager(ctx, base_request, resource_link, continuation)
    }

    fn feed_pager<T: DeserializeOwned + Send + 'static>(
        &self,
        ctx: Context<'_>,
        base_request: Request,
        resource_link: ResourceLink,
        continuation: Option<String>,
    ) -> FeedPager<T> {
        // The pager owns everything it needs, so it can outlive the client that created it.
        let pipeline = self.clone();
        let ctx = ctx.into_owned();
        Pager::from_callback(move |next: Option<String>| {
            let pipeline = pipeline.clone();
            let ctx = ctx.clone();
            let resource_link = resource_link.clone();
            let mut req = base_request.clone();
            let continuation = next.or_else(|| continuation.clone());
            async move {
                if let Some(continuation) = continuation {
                    req.insert_header(constants::CONTINUATION, continuation);
                }
                let response: Response<FeedPage<T>> =
                    pipeline.send(ctx, &mut req, resource_link).await?;
                Ok(match FeedPage::<T>::continuation_of(&response) {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource_context::ResourceType;
    use async_trait::async_trait;
    use azure_core::http::{
        headers::{self, Headers},
        Body, HttpClient, Method, StatusCode, TransportOptions,
    };
    use futures::TryStreamExt;
    use std::{fmt, sync::Mutex};

    const KEY: &str = "c3VwZXItc2VjcmV0LWtleQ==";

    type Handler = dyn Fn(&Request) -> Response + Send + Sync;

    struct MockTransport(Box<Handler>);

    impl fmt::Debug for MockTransport {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("MockTransport")
        }
    }

    #[async_trait]
    impl HttpClient for MockTransport {
        async fn execute_request(&self, request: &Request) -> azure_core::Result<Response> {
            Ok((self.0)(request))
        }
    }

    fn pipeline(
        handler: impl Fn(&Request) -> Response + Send + Sync + 'static,
        consistency_level: Option<ConsistencyLevel>,
    ) -> CosmosPipeline {
        CosmosPipeline::new(
            "https://account.documents.azure.com/".parse().unwrap(),
            AuthorizationPolicy::new(AuthorizationToken::primary_key(KEY).unwrap()),
            ClientOptions {
                transport: Some(TransportOptions::new(Arc::new(MockTransport(Box::new(
                    handler,
                ))))),
                ..Default::default()
            },
            consistency_level,
        )
    }

    fn items_link() -> ResourceLink {
        ResourceLink::root(ResourceType::Databases)
            .item("db1")
            .feed(ResourceType::Containers)
            .item("c1")
            .feed(ResourceType::Items)
    }

    #[tokio::test]
    async fn stamps_cosmos_headers() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let captured = seen.clone();
        let pipeline = pipeline(
            move |req| {
                captured.lock().unwrap().push(req.clone());
                Response::from_bytes(StatusCode::Ok, Headers::new(), "{}")
            },
            Some(ConsistencyLevel::Eventual),
        );

        let link = items_link().item("doc1");
        let mut req = Request::new(pipeline.url(&link), Method::Get);
        pipeline
            .send::<()>(Context::new(), &mut req, link)
            .await
            .unwrap();

        let sent = seen.lock().unwrap().pop().unwrap();
        assert_eq!(
            sent.url().as_str(),
            "https://account.documents.azure.com/dbs/db1/colls/c1/docs/doc1"
        );
        let headers = sent.headers();
        assert_eq!(
            headers.get_optional_str(&constants::VERSION),
            Some("2020-07-15")
        );
        assert_eq!(
            headers.get_optional_str(&constants::CONSISTENCY_LEVEL),
            Some("Eventual")
        );
        assert!(headers
            .get_optional_str(&headers::AUTHORIZATION)
            .unwrap()
            .starts_with("type%3Dmaster%26ver%3D1.0%26sig%3D"));
        let date = headers.get_optional_str(&headers::MS_DATE).unwrap();
        assert!(date.ends_with(" gmt"));
    }

    #[tokio::test]
    async fn echoes_session_tokens_per_container() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let captured = seen.clone();
        let pipeline = pipeline(
            move |req| {
                captured
                    .lock()
                    .unwrap()
                    .push(req.headers().get_optional_string(&constants::SESSION_TOKEN));
                let mut headers = Headers::new();
                headers.insert(constants::SESSION_TOKEN, "0:1#42");
                Response::from_bytes(StatusCode::Created, headers, "{}")
            },
            None,
        );

        for _ in 0..2 {
            let link = items_link();
            let mut req = Request::new(pipeline.url(&link), Method::Post);
            pipeline
                .send::<()>(Context::new(), &mut req, link)
                .await
                .unwrap();
        }
        let link = ResourceLink::root(ResourceType::Databases).item("db1");
        let mut req = Request::new(pipeline.url(&link), Method::Get);
        pipeline
            .send::<()>(Context::new(), &mut req, link)
            .await
            .unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![None, Some("0:1#42".to_string()), None]
        );
    }

    #[tokio::test]
    async fn records_session_tokens_of_failed_requests() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let captured = seen.clone();
        let pipeline = pipeline(
            move |req| {
                let mut sent = captured.lock().unwrap();
                sent.push(req.headers().get_optional_string(&constants::SESSION_TOKEN));
                let mut headers = Headers::new();
                headers.insert(constants::SESSION_TOKEN, "0:1#7");
                if sent.len() == 1 {
                    Response::from_bytes(
                        StatusCode::NotFound,
                        headers,
                        r#"{"code":"NotFound","message":"missing"}"#,
                    )
                } else {
                    Response::from_bytes(StatusCode::Ok, headers, "{}")
                }
            },
            None,
        );

        let link = items_link().item("missing");
        let mut req = Request::new(pipeline.url(&link), Method::Get);
        let err = pipeline
            .send::<()>(Context::new(), &mut req, link)
            .await
            .unwrap_err();
        assert_eq!(err.http_status(), Some(StatusCode::NotFound));

        let link = items_link().item("doc1");
        let mut req = Request::new(pipeline.url(&link), Method::Get);
        pipeline
            .send::<()>(Context::new(), &mut req, link)
            .await
            .unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![None, Some("0:1#7".to_string())]
        );
    }

    #[tokio::test]
    async fn query_pages_follow_continuation() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let captured = seen.clone();
        let pipeline = pipeline(
            move |req| {
                let continuation = req.headers().get_optional_string(&constants::CONTINUATION);
                let body = match req.body() {
                    Body::Bytes(bytes) => String::from_utf8(bytes.to_vec()).unwrap(),
                    _ => panic!("queries are sent as bytes"),
                };
                captured.lock().unwrap().push((
                    continuation.clone(),
                    req.headers().get_optional_string(&constants::QUERY),
                    req.headers().get_optional_string(&headers::CONTENT_TYPE),
                    body,
                ));
                let mut headers = Headers::new();
                let body = match continuation.as_deref() {
                    None => {
                        headers.insert(constants::CONTINUATION, "page-2");
                        r#"{"Documents":[1,2],"_count":2}"#
                    }
                    Some("page-2") => r#"{"Documents":[3],"_count":1}"#,
                    Some(other) => panic!("unexpected continuation {other}"),
                };
                Response::from_bytes(StatusCode::Ok, headers, body)
            },
            None,
        );

        let link = items_link();
        let mut pager: FeedPager<u32> = pipeline
            .send_query_request(
                Context::new(),
                Query::from("SELECT VALUE c.n FROM c"),
                Request::new(pipeline.url(&link), Method::Post),
                link,
                None,
            )
            .unwrap();
        let mut items = Vec::new();
        while let Some(page) = pager.try_next().await.unwrap() {
            items.extend(page.into_body().await.unwrap().into_items());
        }
        assert_eq!(items, vec![1, 2, 3]);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1].0.as_deref(), Some("page-2"));
        for (_, is_query, content_type, body) in seen.iter() {
            assert_eq!(is_query.as_deref(), Some("True"));
            assert_eq!(content_type.as_deref(), Some("application/query+json"));
            assert_eq!(
                body,
                r#"{"query":"SELECT VALUE c.n FROM c","parameters":[]}"#
            );
        }
    }
}
