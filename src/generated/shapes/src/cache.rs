// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Shapes of the Cache service.
//!
//! The service uses XML documents, timestamps are RFC 3339 strings.

use chrono::{DateTime, SecondsFormat, Utc};
use gax::Result;
use gaxi::xml::{FromXml, ToXml, XmlNode};

/// A cache node included in a snapshot.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct NodeSnapshot {
    /// The identifier of the node in the source cluster.
    pub cache_node_id: Option<String>,
    /// The size of the cache on the node.
    pub cache_size: Option<String>,
    pub cache_node_create_time: Option<DateTime<Utc>>,
    /// When the node was snapshotted.
    pub snapshot_create_time: Option<DateTime<Utc>>,
}

impl NodeSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [cache_node_id][Self::cache_node_id].
    pub fn set_cache_node_id<T: Into<String>>(mut self, v: T) -> Self {
        self.cache_node_id = Some(v.into());
        self
    }

    /// Sets the value of [cache_size][Self::cache_size].
    pub fn set_cache_size<T: Into<String>>(mut self, v: T) -> Self {
        self.cache_size = Some(v.into());
        self
    }

    /// Sets the value of [cache_node_create_time][Self::cache_node_create_time].
    pub fn set_cache_node_create_time<T: Into<DateTime<Utc>>>(mut self, v: T) -> Self {
        self.cache_node_create_time = Some(v.into());
        self
    }

    /// Sets the value of [snapshot_create_time][Self::snapshot_create_time].
    pub fn set_snapshot_create_time<T: Into<DateTime<Utc>>>(mut self, v: T) -> Self {
        self.snapshot_create_time = Some(v.into());
        self
    }
}

impl FromXml for NodeSnapshot {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(Self {
            cache_node_id: node.child_text("CacheNodeId").map(str::to_string),
            cache_size: node.child_text("CacheSize").map(str::to_string),
            cache_node_create_time: date_child(node, "CacheNodeCreateTime")?,
            snapshot_create_time: date_child(node, "SnapshotCreateTime")?,
        })
    }
}

impl ToXml for NodeSnapshot {
    fn to_xml(&self, name: &str) -> XmlNode {
        let node = XmlNode::new(name)
            .with_text_child("CacheNodeId", self.cache_node_id.as_ref())
            .with_text_child("CacheSize", self.cache_size.as_ref());
        let node = with_date_child(
            node,
            "CacheNodeCreateTime",
            self.cache_node_create_time.as_ref(),
        );
        with_date_child(node, "SnapshotCreateTime", self.snapshot_create_time.as_ref())
    }
}

fn date_child(node: &XmlNode, name: &str) -> Result<Option<DateTime<Utc>>> {
    node.child_text(name)
        .map(|t| {
            DateTime::parse_from_rfc3339(t)
                .map(|d| d.with_timezone(&Utc))
                .map_err(gax::error::Error::deser)
        })
        .transpose()
}

fn with_date_child(node: XmlNode, name: &str, value: Option<&DateTime<Utc>>) -> XmlNode {
    let value = value.map(|d| d.to_rfc3339_opts(SecondsFormat::Millis, true));
    node.with_text_child(name, value.as_ref())
}
