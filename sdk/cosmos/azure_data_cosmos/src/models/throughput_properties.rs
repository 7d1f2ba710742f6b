// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use azure_core::{
    error::{Error, ErrorKind},
    http::Request,
};
use serde::{Deserialize, Serialize};

use crate::{constants, models::SystemProperties};

const OFFER_VERSION_2: &str = "V2";

/// The throughput provisioned for a database or container, stored by the service as an "offer".
///
/// Use [`ThroughputProperties::manual()`] or [`ThroughputProperties::autoscale()`] to describe new
/// throughput, e.g. when creating a container or calling
/// [`DatabaseClient::replace_throughput()`](crate::clients::DatabaseClient::replace_throughput()).
#[derive(Clone, Default, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ThroughputProperties {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    resource: String,
    #[serde(rename = "content")]
    offer: Offer,
    #[serde(rename = "id", default, skip_serializing_if = "String::is_empty")]
    pub(crate) offer_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub(crate) offer_resource_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    offer_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    offer_version: String,
    #[serde(flatten)]
    pub(crate) system_properties: SystemProperties,
}

#[derive(Clone, Default, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct Offer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_throughput: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_autopilot_settings: Option<AutoscaleSettings>,
}

#[derive(Clone, Default, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct AutoscaleSettings {
    pub max_throughput: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_upgrade_policy: Option<AutoscaleAutoUpgradePolicy>,
}

#[derive(Clone, Default, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct AutoscaleAutoUpgradePolicy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throughput_policy: Option<AutoscaleThroughputPolicy>,
}

#[derive(Clone, Default, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
struct AutoscaleThroughputPolicy {
    pub increment_percent: usize,
}

impl ThroughputProperties {
    /// Fixed throughput, in request units per second.
    pub fn manual(throughput: usize) -> Self {
        Self {
            offer_version: OFFER_VERSION_2.to_string(),
            offer: Offer {
                offer_throughput: Some(throughput),
                offer_autopilot_settings: None,
            },
            ..Default::default()
        }
    }

    /// Throughput that scales between 10% of `max_throughput` and `max_throughput`.
    ///
    /// If `increment_percent` is set, the maximum itself grows by that percentage when usage demands it.
    pub fn autoscale(max_throughput: usize, increment_percent: Option<usize>) -> Self {
        Self {
            offer_version: OFFER_VERSION_2.to_string(),
            offer: Offer {
                offer_throughput: None,
                offer_autopilot_settings: Some(AutoscaleSettings {
                    max_throughput,
                    auto_upgrade_policy: increment_percent.map(|increment_percent| {
                        AutoscaleAutoUpgradePolicy {
                            throughput_policy: Some(AutoscaleThroughputPolicy { increment_percent }),
                        }
                    }),
                }),
            },
            ..Default::default()
        }
    }

    /// The current throughput, in request units per second.
    pub fn throughput(&self) -> Option<usize> {
        self.offer.offer_throughput
    }

    /// The autoscale maximum, if this is autoscale throughput.
    pub fn autoscale_maximum(&self) -> Option<usize> {
        self.offer
            .offer_autopilot_settings
            .as_ref()
            .map(|s| s.max_throughput)
    }

    /// The autoscale increment percentage, if one is configured.
    pub fn autoscale_increment(&self) -> Option<usize> {
        self.offer
            .offer_autopilot_settings
            .as_ref()
            .and_then(|s| s.auto_upgrade_policy.as_ref())
            .and_then(|p| p.throughput_policy.as_ref())
            .map(|p| p.increment_percent)
    }

    /// The resource id (`_rid`) of the database or container this offer belongs to.
    pub fn offer_resource_id(&self) -> &str {
        &self.offer_resource_id
    }

    /// Returns a copy of this offer with its throughput settings replaced by those of `other`.
    pub(crate) fn with_settings_of(&self, other: &ThroughputProperties) -> Self {
        Self {
            offer: other.offer.clone(),
            ..self.clone()
        }
    }

    /// Adds the headers that provision this throughput on a create request.
    pub(crate) fn add_create_headers(&self, request: &mut Request) -> azure_core::Result<()> {
        if let Some(settings) = &self.offer.offer_autopilot_settings {
            request.insert_header(
                constants::OFFER_AUTOPILOT_SETTINGS,
                serde_json::to_string(settings).map_err(|error| {
                    Error::full(
                        ErrorKind::DataConversion,
                        error,
                        "failed to serialize autoscale settings",
                    )
                })?,
            );
        } else if let Some(throughput) = self.offer.offer_throughput {
            request.insert_header(constants::OFFER_THROUGHPUT, throughput.to_string());
        }
        Ok(())
    }
}
