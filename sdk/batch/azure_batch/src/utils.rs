// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use azure_core::{
    error::{Error, ErrorKind},
    http::Request,
};
use time::{
    format_description::BorrowedFormatItem, macros::format_description, OffsetDateTime,
    PrimitiveDateTime, UtcOffset,
};
use url::Url;

pub trait AppendPathSegments {
    /// Appends path segments, percent-encoding each one.
    fn append_path_segments<I>(&mut self, segments: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>;

    /// Returns a copy of this URL with the path segments appended.
    fn with_path_segments<I>(&self, segments: I) -> Url
    where
        I: IntoIterator,
        I::Item: AsRef<str>;
}

impl AppendPathSegments for Url {
    fn append_path_segments<I>(&mut self, segments: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        // Endpoints are validated as base URLs when the client is created.
        if let Ok(mut path) = self.path_segments_mut() {
            path.pop_if_empty();
            for segment in segments {
                path.push(segment.as_ref());
            }
        }
    }

    fn with_path_segments<I>(&self, segments: I) -> Url
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut url = self.clone();
        url.append_path_segments(segments);
        url
    }
}

pub fn append_query_pair(request: &mut Request, name: &str, value: &str) {
    request.url_mut().query_pairs_mut().append_pair(name, value);
}

// e.g. "Tue, 05 Mar 2024 08:07:09 GMT"
const RFC7231_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

pub fn to_rfc7231(date: &OffsetDateTime) -> String {
    date.to_offset(UtcOffset::UTC)
        .format(RFC7231_FORMAT)
        .unwrap_or_default()
}

pub fn parse_rfc7231(value: &str) -> azure_core::Result<OffsetDateTime> {
    PrimitiveDateTime::parse(value, RFC7231_FORMAT)
        .map(PrimitiveDateTime::assume_utc)
        .map_err(|error| {
            Error::full(
                ErrorKind::DataConversion,
                error,
                format!("'{value}' is not an RFC 7231 date"),
            )
        })
}
