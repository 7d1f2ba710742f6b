// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use azure_core::{
    error::{Error, ErrorKind},
    http::headers::HeaderValue,
};
use serde_json::Value;

/// A partition key value used to route a request to a single logical partition.
///
/// Converts from strings, integers, booleans and `Option`s of those (with `None` meaning a JSON `null`).
/// Floating-point values go through [`PartitionKeyValue::try_from`], since NaN and infinities have no JSON form.
/// Tuples of up to three values address hierarchical partition keys.
///
/// ```rust
/// use azure_data_cosmos::PartitionKey;
///
/// let pk = PartitionKey::from("customer-42");
/// assert_eq!(pk.to_header_value().as_str(), r#"["customer-42"]"#);
///
/// let hierarchical = PartitionKey::from(("tenant", 7));
/// assert_eq!(hierarchical.to_header_value().as_str(), r#"["tenant",7]"#);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PartitionKey(Vec<PartitionKeyValue>);

/// One component of a [`PartitionKey`].
#[derive(Clone, Debug, PartialEq)]
pub enum PartitionKeyValue {
    String(String),
    Number(serde_json::Number),
    Bool(bool),
    Null,
    /// The item has no value at the partition key path.
    Undefined,
}

impl PartitionKey {
    /// The partition key of items whose partition key property is `null`.
    pub const NULL: PartitionKey = PartitionKey(Vec::new());

    /// The partition key of items that lack the partition key property altogether.
    pub fn undefined() -> Self {
        Self(vec![PartitionKeyValue::Undefined])
    }

    pub fn values(&self) -> &[PartitionKeyValue] {
        &self.0
    }

    /// Formats the key for the `x-ms-documentdb-partitionkey` header.
    ///
    /// The value is a JSON array. Characters outside ASCII are written as `\uXXXX` escapes,
    /// since header values must be ASCII.
    pub fn to_header_value(&self) -> HeaderValue {
        let values: Vec<Value> = if self.0.is_empty() {
            vec![Value::Null]
        } else {
            self.0.iter().map(PartitionKeyValue::to_json).collect()
        };
        let json = Value::Array(values).to_string();
        escape_non_ascii(&json).into()
    }
}

impl PartitionKeyValue {
    fn to_json(&self) -> Value {
        match self {
            PartitionKeyValue::String(s) => Value::String(s.clone()),
            PartitionKeyValue::Number(n) => Value::Number(n.clone()),
            PartitionKeyValue::Bool(b) => Value::Bool(*b),
            PartitionKeyValue::Null => Value::Null,
            PartitionKeyValue::Undefined => Value::Object(Default::default()),
        }
    }
}

fn escape_non_ascii(json: &str) -> String {
    let mut escaped = String::with_capacity(json.len());
    for c in json.chars() {
        if c.is_ascii() {
            escaped.push(c);
        } else {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                escaped.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    escaped
}

impl From<&str> for PartitionKeyValue {
    fn from(value: &str) -> Self {
        PartitionKeyValue::String(value.to_string())
    }
}

impl From<String> for PartitionKeyValue {
    fn from(value: String) -> Self {
        PartitionKeyValue::String(value)
    }
}

impl From<&String> for PartitionKeyValue {
    fn from(value: &String) -> Self {
        PartitionKeyValue::String(value.clone())
    }
}

impl From<bool> for PartitionKeyValue {
    fn from(value: bool) -> Self {
        PartitionKeyValue::Bool(value)
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for PartitionKeyValue {
                fn from(value: $t) -> Self {
                    PartitionKeyValue::Number(value.into())
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl TryFrom<f64> for PartitionKeyValue {
    type Error = Error;

    /// Fails for NaN and infinite values.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        serde_json::Number::from_f64(value)
            .map(PartitionKeyValue::Number)
            .ok_or_else(|| {
                Error::message(
                    ErrorKind::DataConversion,
                    format!("{value} is not a valid partition key value"),
                )
            })
    }
}

impl<T: Into<PartitionKeyValue>> From<Option<T>> for PartitionKeyValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(PartitionKeyValue::Null)
    }
}

impl<T: Into<PartitionKeyValue>> From<T> for PartitionKey {
    fn from(value: T) -> Self {
        PartitionKey(vec![value.into()])
    }
}

impl<A, B> From<(A, B)> for PartitionKey
where
    A: Into<PartitionKeyValue>,
    B: Into<PartitionKeyValue>,
{
    fn from((a, b): (A, B)) -> Self {
        PartitionKey(vec![a.into(), b.into()])
    }
}

impl<A, B, C> From<(A, B, C)> for PartitionKey
where
    A: Into<PartitionKeyValue>,
    B: Into<PartitionKeyValue>,
    C: Into<PartitionKeyValue>,
{
    fn from((a, b, c): (A, B, C)) -> Self {
        PartitionKey(vec![a.into(), b.into(), c.into()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(pk: impl Into<PartitionKey>) -> String {
        pk.into().to_header_value().as_str().to_string()
    }

    #[test]
    fn scalar_keys() {
        assert_eq!(header("abc"), r#"["abc"]"#);
        assert_eq!(header(43u32), "[43]");
        assert_eq!(header(-1i64), "[-1]");
        assert_eq!(
            header(PartitionKeyValue::try_from(1.5f64).unwrap()),
            "[1.5]"
        );
        assert_eq!(header(true), "[true]");
        assert_eq!(header(None::<String>), "[null]");
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = PartitionKeyValue::try_from(value).unwrap_err();
            assert!(matches!(err.kind(), ErrorKind::DataConversion));
        }
    }

    #[test]
    fn null_and_undefined() {
        assert_eq!(PartitionKey::NULL.to_header_value().as_str(), "[null]");
        assert_eq!(PartitionKey::undefined().to_header_value().as_str(), "[{}]");
    }

    #[test]
    fn escapes_quotes_and_non_ascii() {
        assert_eq!(header("a\"b"), r#"["a\"b"]"#);
        assert_eq!(header("café"), r#"["caf\u00e9"]"#);
        assert_eq!(header("🚀"), r#"["\ud83d\ude80"]"#);
    }

    #[test]
    fn hierarchical_keys() {
        assert_eq!(header(("tenant", "user", 3)), r#"["tenant","user",3]"#);
    }
}
