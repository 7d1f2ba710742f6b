// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use azure_core::http::{ClientMethodOptions, Context};

/// Options to be passed to operations that read or replace throughput offers.
#[derive(Clone, Debug, Default)]
pub struct ThroughputOptions<'a> {
    pub method_options: ClientMethodOptions<'a>,
}

impl<'a> ThroughputOptions<'a> {
    /// Creates a new [`ThroughputOptionsBuilder`] that can be used to construct a [`ThroughputOptions`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// let options = azure_data_cosmos::ThroughputOptions::builder().build();
    /// ```
    pub fn builder() -> ThroughputOptionsBuilder<'a> {
        ThroughputOptionsBuilder::default()
    }
}

/// Builder used to construct a [`ThroughputOptions`].
///
/// Obtain a [`ThroughputOptionsBuilder`] by calling [`ThroughputOptions::builder()`]
#[derive(Default)]
pub struct ThroughputOptionsBuilder<'a>(ThroughputOptions<'a>);

impl<'a> ThroughputOptionsBuilder<'a> {
    /// Sets the [`Context`] passed to every policy for the operation.
    pub fn with_context(&mut self, context: Context<'a>) -> &mut Self {
        self.0.method_options.context = context;
        self
    }

    /// Builds a [`ThroughputOptions`] from the builder.
    ///
    /// This does not consume the builder, and can be called multiple times.
    pub fn build(&self) -> ThroughputOptions<'a> {
        self.0.clone()
    }
}
