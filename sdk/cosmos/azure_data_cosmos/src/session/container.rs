// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use super::{PartitionSessionToken, SessionTokenError};
use crate::PartitionKeyRangeId;
use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

type PartitionTokens = HashMap<PartitionKeyRangeId, PartitionSessionToken>;

/// The session tokens seen by a client, per container and partition key range.
///
/// Containers are keyed by their link (`dbs/{db}/colls/{coll}`).
#[derive(Debug, Default)]
pub(crate) struct SessionContainer {
    containers: RwLock<HashMap<String, PartitionTokens>>,
}

impl SessionContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a container session token: a comma-separated list of partition session tokens,
    /// such as `"0:1#123#4=500,1:1#124"`.
    ///
    /// Each range keeps the merge of what it already had and the new token. Nothing is recorded if
    /// any part fails to parse.
    pub fn set_session_token(
        &self,
        container_link: &str,
        token: &str,
    ) -> Result<(), SessionTokenError> {
        if token.trim().is_empty() {
            return Err(SessionTokenError::EmptyInput);
        }
        let parsed = token
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::parse::<PartitionSessionToken>)
            .collect::<Result<Vec<_>, _>>()?;

        let mut containers = self
            .containers
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let ranges = containers.entry(container_link.to_string()).or_default();
        for token in parsed {
            let merged = match ranges.remove(&token.pkrange_id) {
                Some(existing) => PartitionSessionToken {
                    pkrange_id: token.pkrange_id,
                    vector_token: existing.vector_token.merge(token.vector_token),
                },
                None => token,
            };
            ranges.insert(merged.pkrange_id.clone(), merged);
        }
        Ok(())
    }

    /// The container session token to send with requests to the container, if any was seen.
    pub fn get_session_token(&self, container_link: &str) -> Option<String> {
        let containers = self
            .containers
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let ranges = containers.get(container_link).filter(|r| !r.is_empty())?;
        let mut tokens: Vec<&PartitionSessionToken> = ranges.values().collect();
        tokens.sort_by(|a, b| a.pkrange_id.cmp(&b.pkrange_id));
        Some(
            tokens
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(","),
        )
    }

    /// Forgets the tokens of a container, e.g. after it was deleted.
    pub fn clear(&self, container_link: &str) {
        self.containers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(container_link);
    }
}
