// Copyright (c) Microsoft Corporation. All rights reserved.
// Licensed under the MIT License.

use url::Url;

use crate::utils::AppendPathSegments;

/// The kind of resource a request targets, as used in the authorization signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceType {
    Databases,
    Containers,
    Items,
    StoredProcedures,
    Offers,
    PartitionKeyRanges,
}

impl ResourceType {
    pub fn path_segment(self) -> &'static str {
        match self {
            ResourceType::Databases => "dbs",
            ResourceType::Containers => "colls",
            ResourceType::Items => "docs",
            ResourceType::StoredProcedures => "sprocs",
            ResourceType::Offers => "offers",
            ResourceType::PartitionKeyRanges => "pkranges",
        }
    }
}

/// Identifies a resource, or a feed of resources, in a Cosmos DB account.
///
/// A link knows both the URL path to send a request to and the link used to sign it.
/// For a feed (e.g. `dbs/db1/colls`) the signing link is the parent's (`dbs/db1`);
/// for an item it is the item's own path, or its lowercase resource id when addressed by id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourceLink {
    resource_type: ResourceType,
    segments: Vec<String>,
    link: String,
}

impl ResourceLink {
    /// A feed at the root of the account, such as `dbs` or `offers`.
    pub fn root(resource_type: ResourceType) -> Self {
        Self {
            resource_type,
            segments: vec![resource_type.path_segment().to_string()],
            link: String::new(),
        }
    }

    /// The feed of `resource_type` children under this item.
    pub fn feed(&self, resource_type: ResourceType) -> Self {
        let mut segments = self.segments.clone();
        segments.push(resource_type.path_segment().to_string());
        Self {
            resource_type,
            segments,
            link: self.link.clone(),
        }
    }

    /// The item with the given id in this feed.
    pub fn item(&self, id: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(id.to_string());
        let link = segments.join("/");
        Self {
            resource_type: self.resource_type,
            segments,
            link,
        }
    }

    /// The item with the given resource id (`_rid`) in this feed.
    pub fn item_by_rid(&self, rid: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(rid.to_string());
        Self {
            resource_type: self.resource_type,
            segments,
            link: rid.to_lowercase(),
        }
    }

    pub fn resource_type(&self) -> ResourceType {
        self.resource_type
    }

    /// The link used when signing requests for this resource.
    pub fn resource_link(&self) -> &str {
        &self.link
    }

    /// The path of this resource relative to the account endpoint.
    pub fn path(&self) -> String {
        self.segments.join("/")
    }

    /// The link of the container this resource belongs to, if any.
    pub fn container_link(&self) -> Option<String> {
        match self.segments.as_slice() {
            [dbs, _, colls, _, ..] if dbs == "dbs" && colls == "colls" => {
                Some(self.segments[..4].join("/"))
            }
            _ => None,
        }
    }

    pub fn url(&self, endpoint: &Url) -> Url {
        endpoint.with_path_segments(&self.segments)
    }
}
