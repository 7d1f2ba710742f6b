// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use azure_core::error::{Error, ErrorKind};
use std::str::FromStr;

/// A Cosmos DB connection string, as shown in the Azure portal.
///
/// The format is `AccountEndpoint=https://<account>.documents.azure.com:443/;AccountKey=<key>;`.
/// Keys are matched case-insensitively and unknown keys are ignored.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionString {
    pub account_endpoint: String,
    pub account_key: String,
}

impl std::fmt::Debug for ConnectionString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionString")
            .field("account_endpoint", &self.account_endpoint)
            .finish_non_exhaustive()
    }
}

impl FromStr for ConnectionString {
    type Err = Error;

    fn from_str(connection_string: &str) -> Result<Self, Self::Err> {
        let mut account_endpoint = None;
        let mut account_key = None;

        for part in connection_string.split(';').map(str::trim) {
            if part.is_empty() {
                continue;
            }
            // Keys are base64 and may themselves end in '=', so split on the first one only.
            let Some((key, value)) = part.split_once('=') else {
                return Err(Error::message(
                    ErrorKind::DataConversion,
                    format!("invalid connection string segment '{part}'"),
                ));
            };
            match key.trim().to_ascii_lowercase().as_str() {
                "accountendpoint" => account_endpoint = Some(value.trim().to_string()),
                "accountkey" => account_key = Some(value.trim().to_string()),
                _ => {}
            }
        }

        match (account_endpoint, account_key) {
            (Some(account_endpoint), Some(account_key)) => Ok(Self {
                account_endpoint,
                account_key,
            }),
            (None, _) => Err(Error::message(
                ErrorKind::DataConversion,
                "connection string is missing 'AccountEndpoint'",
            )),
            (_, None) => Err(Error::message(
                ErrorKind::DataConversion,
                "connection string is missing 'AccountKey'",
            )),
        }
    }
}
