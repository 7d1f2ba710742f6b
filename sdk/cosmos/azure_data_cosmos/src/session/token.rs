// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use super::SessionTokenError;
use crate::PartitionKeyRangeId;
use std::{cmp, collections::BTreeMap, fmt, str::FromStr};

/// The progress of one partition key range: `{version}#{globalLsn}[#{regionId}={regionLsn}]*`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VectorSessionToken {
    pub version: u64,
    pub global_lsn: u64,
    pub regional_lsns: BTreeMap<u32, u64>,
}

fn parse_digits<T: FromStr>(s: &str) -> Option<T> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl FromStr for VectorSessionToken {
    type Err = SessionTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(SessionTokenError::EmptyInput);
        }

        let mut parts = s.split('#');
        let version_str = parts.next().unwrap_or_default();
        let global_lsn_str = parts.next().ok_or(SessionTokenError::MissingComponents)?;

        let version = parse_digits(version_str)
            .ok_or_else(|| SessionTokenError::InvalidVersion(version_str.to_string()))?;
        if global_lsn_str.is_empty() {
            return Err(SessionTokenError::MissingComponents);
        }
        let global_lsn = parse_digits(global_lsn_str)
            .ok_or_else(|| SessionTokenError::InvalidGlobalLsn(global_lsn_str.to_string()))?;

        let mut regional_lsns = BTreeMap::new();
        for component in parts {
            let (region, lsn) = component
                .split_once('=')
                .filter(|(region, lsn)| !region.is_empty() && !lsn.is_empty())
                .ok_or_else(|| {
                    SessionTokenError::MalformedRegionalComponent(component.to_string())
                })?;
            let region = parse_digits(region)
                .ok_or_else(|| SessionTokenError::InvalidRegionId(region.to_string()))?;
            let lsn = parse_digits(lsn)
                .ok_or_else(|| SessionTokenError::InvalidRegionLsn(lsn.to_string()))?;
            regional_lsns.insert(region, lsn);
        }

        Ok(Self {
            version,
            global_lsn,
            regional_lsns,
        })
    }
}

impl VectorSessionToken {
    /// Combines two tokens for the same range into one covering the progress of both.
    ///
    /// The higher version wins; regional LSNs it shares with the other token take the maximum.
    /// Equal versions merge every component by maximum.
    pub fn merge(self, other: VectorSessionToken) -> VectorSessionToken {
        let (mut newer, older) = if self.version >= other.version {
            (self, other)
        } else {
            (other, self)
        };

        if newer.version == older.version {
            newer.global_lsn = cmp::max(newer.global_lsn, older.global_lsn);
            for (region, lsn) in older.regional_lsns {
                let entry = newer.regional_lsns.entry(region).or_insert(lsn);
                *entry = cmp::max(*entry, lsn);
            }
        } else {
            for (region, lsn) in older.regional_lsns {
                if let Some(entry) = newer.regional_lsns.get_mut(&region) {
                    *entry = cmp::max(*entry, lsn);
                }
            }
        }
        newer
    }
}

impl fmt::Display for VectorSessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.version, self.global_lsn)?;
        for (region, lsn) in &self.regional_lsns {
            write!(f, "#{}={}", region, lsn)?;
        }
        Ok(())
    }
}

/// A session token scoped to one partition key range: `{pkRangeId}:{vector token}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PartitionSessionToken {
    pub pkrange_id: PartitionKeyRangeId,
    pub vector_token: VectorSessionToken,
}

impl FromStr for PartitionSessionToken {
    type Err = SessionTokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(SessionTokenError::EmptyInput);
        }
        let (range, vector) = s
            .split_once(':')
            .filter(|(range, vector)| !range.is_empty() && !vector.is_empty())
            .ok_or(SessionTokenError::MissingComponents)?;
        Ok(Self {
            pkrange_id: PartitionKeyRangeId::new(range),
            vector_token: vector.parse()?,
        })
    }
}

impl fmt::Display for PartitionSessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.pkrange_id.value(), self.vector_token)
    }
}
