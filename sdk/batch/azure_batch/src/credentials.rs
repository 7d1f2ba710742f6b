// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use azure_core::{
    credentials::Secret,
    error::{Error, ErrorKind},
};
use std::fmt;

/// The credential used to authorize requests to a Batch account.
#[derive(Clone)]
pub enum BatchCredentials {
    /// The account name and one of its access keys.
    SharedKey(BatchSharedKeyCredentials),
    /// A Microsoft Entra access token, sent as a bearer token.
    Token(String),
}

impl BatchCredentials {
    pub fn shared_key(
        account_name: impl Into<String>,
        key: impl Into<String>,
    ) -> azure_core::Result<Self> {
        BatchSharedKeyCredentials::new(account_name, key).map(BatchCredentials::SharedKey)
    }

    pub fn token(token: impl Into<String>) -> Self {
        BatchCredentials::Token(token.into())
    }
}

impl fmt::Debug for BatchCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchCredentials::SharedKey(key) => f.debug_tuple("SharedKey").field(key).finish(),
            BatchCredentials::Token(_) => f.write_str("Token(<REDACTED>)"),
        }
    }
}

impl From<BatchSharedKeyCredentials> for BatchCredentials {
    fn from(credentials: BatchSharedKeyCredentials) -> Self {
        BatchCredentials::SharedKey(credentials)
    }
}

/// An account name and base64-encoded access key, as shown on the account's "Keys" page.
#[derive(Clone)]
pub struct BatchSharedKeyCredentials {
    account_name: String,
    key: Secret,
}

impl BatchSharedKeyCredentials {
    /// Fails with [`ErrorKind::Credential`] if either value is empty.
    pub fn new(
        account_name: impl Into<String>,
        key: impl Into<String>,
    ) -> azure_core::Result<Self> {
        let account_name = account_name.into();
        let key = key.into();
        if account_name.is_empty() {
            return Err(Error::message(
                ErrorKind::Credential,
                "the account name must not be empty",
            ));
        }
        if key.is_empty() {
            return Err(Error::message(
                ErrorKind::Credential,
                "the account key must not be empty",
            ));
        }
        Ok(Self {
            account_name,
            key: Secret::new(key),
        })
    }

    pub fn account_name(&self) -> &str {
        &self.account_name
    }

    pub(crate) fn key(&self) -> &Secret {
        &self.key
    }
}

impl fmt::Debug for BatchSharedKeyCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchSharedKeyCredentials")
            .field("account_name", &self.account_name)
            .field("key", &"<REDACTED>")
            .finish()
    }
}
