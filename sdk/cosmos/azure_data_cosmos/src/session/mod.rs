// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

//! Session consistency tracking.
//!
//! Every response from a container carries an `x-ms-session-token` header listing, per partition key
//! range, the logical sequence number (LSN) the write or read was served at. Echoing the newest token
//! back on later requests gives read-your-writes consistency for this client.

mod container;
mod token;

pub(crate) use container::SessionContainer;
use token::PartitionSessionToken;

/// Errors raised when a session token cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionTokenError {
    #[error("session token is empty")]
    EmptyInput,
    #[error("session token is missing required components")]
    MissingComponents,
    #[error("invalid session token version: '{0}'")]
    InvalidVersion(String),
    #[error("invalid session token global LSN: '{0}'")]
    InvalidGlobalLsn(String),
    #[error("invalid session token region id: '{0}'")]
    InvalidRegionId(String),
    #[error("invalid session token region LSN: '{0}'")]
    InvalidRegionLsn(String),
    #[error("malformed regional session token component: '{0}'")]
    MalformedRegionalComponent(String),
}

impl From<SessionTokenError> for azure_core::Error {
    fn from(error: SessionTokenError) -> Self {
        azure_core::Error::full(
            azure_core::error::ErrorKind::DataConversion,
            error,
            "session token invalid",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use azure_core::error::ErrorKind;

    #[test]
    fn converts_to_core_error() {
        let error: azure_core::Error = SessionTokenError::EmptyInput.into();
        assert!(matches!(error.kind(), ErrorKind::DataConversion));
        assert_eq!(error.to_string(), "session token invalid");
    }
}
