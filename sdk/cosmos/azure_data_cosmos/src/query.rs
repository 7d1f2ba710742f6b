// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use crate::PartitionKey;
use azure_core::error::{Error, ErrorKind};
use serde::Serialize;

/// A Cosmos DB SQL query, with optional named parameters.
///
/// Plain strings convert into a [`Query`], so simple queries need no ceremony:
///
/// ```rust
/// # use azure_data_cosmos::Query;
/// let query = Query::from("SELECT * FROM c");
/// ```
///
/// Parameters are referenced in the text as `@name` and supplied with [`Query::with_parameter`]:
///
/// ```rust
/// # use azure_data_cosmos::Query;
/// let query = Query::from("SELECT * FROM c WHERE c.age > @min_age")
///     .with_parameter("@min_age", 42)?;
/// # Ok::<(), azure_core::Error>(())
/// ```
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Query {
    #[serde(rename = "query")]
    text: String,
    parameters: Vec<QueryParameter>,
}

/// A named value referenced from a [`Query`].
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct QueryParameter {
    name: String,
    value: serde_json::Value,
}

impl QueryParameter {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &serde_json::Value {
        &self.value
    }
}

impl Query {
    /// Adds a parameter, replacing any earlier parameter of the same name.
    ///
    /// Fails if `name` does not start with `@` or `value` cannot be serialized to JSON.
    pub fn with_parameter(
        mut self,
        name: impl Into<String>,
        value: impl Serialize,
    ) -> azure_core::Result<Self> {
        let name = name.into();
        if !name.starts_with('@') || name.len() < 2 {
            return Err(Error::message(
                ErrorKind::DataConversion,
                format!("query parameter names must start with '@', got '{name}'"),
            ));
        }
        let value = serde_json::to_value(value)?;
        self.parameters.retain(|p| p.name != name);
        self.parameters.push(QueryParameter { name, value });
        Ok(self)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn parameters(&self) -> &[QueryParameter] {
        &self.parameters
    }
}

impl<T: Into<String>> From<T> for Query {
    fn from(text: T) -> Self {
        Self {
            text: text.into(),
            parameters: Vec::new(),
        }
    }
}

/// Which partitions a query over items runs against.
#[derive(Clone, Debug)]
pub enum QueryPartitionStrategy {
    /// Only items in this logical partition.
    SinglePartition(PartitionKey),
    /// Every partition; the gateway fans the query out.
    ///
    /// Queries the gateway cannot serve this way (such as `ORDER BY` or aggregates spanning
    /// partitions) fail with a service error.
    CrossPartition,
}

impl<T: Into<PartitionKey>> From<T> for QueryPartitionStrategy {
    fn from(partition_key: T) -> Self {
        QueryPartitionStrategy::SinglePartition(partition_key.into())
    }
}
