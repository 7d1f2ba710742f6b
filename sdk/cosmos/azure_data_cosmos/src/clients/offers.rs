// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

//! Throughput is stored in "offers", a root feed linked to databases and containers by `_rid`.

use azure_core::{
    error::{Error, ErrorKind},
    http::{Context, Method, Request, Response},
};
use futures::TryStreamExt;

use crate::{
    models::ThroughputProperties,
    pipeline::CosmosPipeline,
    resource_context::{ResourceLink, ResourceType},
    FeedPager, Query,
};

/// Reads the offer of the resource with the given `_rid`, or `None` if it has no dedicated throughput.
pub(crate) async fn read_offer(
    pipeline: &CosmosPipeline,
    ctx: &Context<'_>,
    resource_id: &str,
) -> azure_core::Result<Option<Response<ThroughputProperties>>> {
    let query = Query::from("SELECT * FROM c WHERE c.offerResourceId = @rid")
        .with_parameter("@rid", resource_id)?;
    let offers_link = ResourceLink::root(ResourceType::Offers);
    let mut pager: FeedPager<ThroughputProperties> = pipeline.send_query_request(
        ctx.clone(),
        query,
        Request::new(pipeline.url(&offers_link), Method::Post),
        offers_link,
        None,
    )?;

    let Some(page) = pager.try_next().await? else {
        return Ok(None);
    };
    let Some(offer) = page.into_body().await?.into_items().into_iter().next() else {
        return Ok(None);
    };

    let offer_rid = offer
        .system_properties
        .resource_id
        .as_deref()
        .unwrap_or(&offer.offer_id);
    let offer_link = ResourceLink::root(ResourceType::Offers).item_by_rid(offer_rid);
    let mut req = Request::new(pipeline.url(&offer_link), Method::Get);
    pipeline
        .send(ctx.clone(), &mut req, offer_link)
        .await
        .map(Some)
}

/// Replaces the throughput settings of the offer of the resource with the given `_rid`.
pub(crate) async fn replace_offer(
    pipeline: &CosmosPipeline,
    ctx: &Context<'_>,
    resource_id: &str,
    throughput: ThroughputProperties,
) -> azure_core::Result<Response<ThroughputProperties>> {
    let current = read_offer(pipeline, ctx, resource_id)
        .await?
        .ok_or_else(|| {
            Error::message(
                ErrorKind::Other,
                format!("resource '{resource_id}' has no dedicated throughput to replace"),
            )
        })?
        .into_body()
        .await?;

    let offer_rid = current
        .system_properties
        .resource_id
        .as_deref()
        .unwrap_or(&current.offer_id);
    let offer_link = ResourceLink::root(ResourceType::Offers).item_by_rid(offer_rid);
    let mut req = Request::new(pipeline.url(&offer_link), Method::Put);
    req.set_json(&current.with_settings_of(&throughput))?;
    pipeline.send(ctx.clone(), &mut req, offer_link).await
}

/// The `_rid` of a resource read by the caller, which the service always returns.
pub(crate) fn require_resource_id(
    resource_id: Option<String>,
    what: &str,
) -> azure_core::Result<String> {
    resource_id.ok_or_else(|| {
        Error::message(
            ErrorKind::DataConversion,
            format!("the service returned a {what} without a '_rid'"),
        )
    })
}
