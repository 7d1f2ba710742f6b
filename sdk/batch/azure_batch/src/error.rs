// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use azure_core::{
    error::{Error, ErrorKind},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The error body the Batch service returns with a failed request.
///
/// The service error code also appears in the [`ErrorKind::HttpResponse`] of the returned
/// [`Error`]; use [`BatchError::from_error`] for the message and details.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BatchError {
    pub code: Option<String>,
    pub message: Option<BatchErrorMessage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<BatchErrorDetail>,
}

/// A localized error message.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct BatchErrorMessage {
    pub lang: Option<String>,
    pub value: Option<String>,
}

/// Additional detail about an error, such as the reason a property was rejected.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct BatchErrorDetail {
    pub key: Option<String>,
    pub value: Option<String>,
}

impl BatchError {
    /// Reads the Batch error body out of a failed request's error.
    ///
    /// Returns `None` if the error is not an HTTP error or the body is not a Batch error.
    pub fn from_error(error: &Error) -> Option<Self> {
        error.downcast_ref::<BatchError>().cloned()
    }

    /// Wraps this body in the error returned for a response with `status`.
    pub(crate) fn into_error(self, status: StatusCode) -> Error {
        let message = self.to_string();
        Error::full(
            ErrorKind::http_response(status, self.code.clone()),
            self,
            message,
        )
    }

    /// The value of the detail with the given key, e.g. `Reason`.
    pub fn detail(&self, key: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|detail| detail.key.as_deref() == Some(key))
            .and_then(|detail| detail.value.as_deref())
    }
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code.as_deref().unwrap_or("UnknownError"))?;
        if let Some(message) = self.message.as_ref().and_then(|m| m.value.as_deref()) {
            write!(f, ": {message}")?;
        }
        for detail in &self.values {
            write!(
                f,
                "\n\t{}: {}",
                detail.key.as_deref().unwrap_or_default(),
                detail.value.as_deref().unwrap_or_default()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for BatchError {}
