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

//! The request, response, and shared shapes of the Storage service.
//!
//! The service uses XML documents. Each shape converts to and from an
//! [XmlNode], reading the elements that are present and writing the fields
//! that are set.

use chrono::{DateTime, SecondsFormat, Utc};
use gax::Result;
use gaxi::xml::{FromXml, ToXml, XmlNode};
use std::convert::Infallible;
use std::str::FromStr;

/// The namespace of the documents sent to the service.
pub(crate) const XMLNS: &str = "http://storage.nimbusapis.com/doc/2006-03-01/";

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

/// Whether a lifecycle rule is applied.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExpirationStatus {
    Enabled,
    Disabled,
    /// A value not known to this version of the library.
    UnknownValue(String),
}

impl ExpirationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Enabled => "Enabled",
            Self::Disabled => "Disabled",
            Self::UnknownValue(v) => v,
        }
    }
}

impl FromStr for ExpirationStatus {
    type Err = Infallible;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "Enabled" => Self::Enabled,
            "Disabled" => Self::Disabled,
            v => Self::UnknownValue(v.to_string()),
        })
    }
}

impl std::fmt::Display for ExpirationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The storage class objects move to in a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageClass {
    Glacier,
    StandardIa,
    /// A value not known to this version of the library.
    UnknownValue(String),
}

impl StorageClass {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Glacier => "GLACIER",
            Self::StandardIa => "STANDARD_IA",
            Self::UnknownValue(v) => v,
        }
    }
}

impl FromStr for StorageClass {
    type Err = Infallible;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "GLACIER" => Self::Glacier,
            "STANDARD_IA" => Self::StandardIa,
            v => Self::UnknownValue(v.to_string()),
        })
    }
}

impl std::fmt::Display for StorageClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When objects expire.
///
/// Set one of `date`, `days`, or `expired_object_delete_marker`.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct LifecycleExpiration {
    /// Objects expire at this time, which must be midnight UTC.
    pub date: Option<DateTime<Utc>>,
    /// Objects expire this many days after they are created.
    pub days: Option<i32>,
    /// Remove delete markers that have no noncurrent versions.
    pub expired_object_delete_marker: Option<bool>,
}

impl LifecycleExpiration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [date][Self::date].
    pub fn set_date<T: Into<DateTime<Utc>>>(mut self, v: T) -> Self {
        self.date = Some(v.into());
        self
    }

    /// Sets the value of [days][Self::days].
    pub fn set_days<T: Into<i32>>(mut self, v: T) -> Self {
        self.days = Some(v.into());
        self
    }

    /// Sets the value of [expired_object_delete_marker][Self::expired_object_delete_marker].
    pub fn set_expired_object_delete_marker<T: Into<bool>>(mut self, v: T) -> Self {
        self.expired_object_delete_marker = Some(v.into());
        self
    }
}

impl FromXml for LifecycleExpiration {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(Self {
            date: date_child(node, "Date")?,
            days: node.parse_child("Days")?,
            expired_object_delete_marker: node.parse_child("ExpiredObjectDeleteMarker")?,
        })
    }
}

impl ToXml for LifecycleExpiration {
    fn to_xml(&self, name: &str) -> XmlNode {
        let node = with_date_child(XmlNode::new(name), "Date", self.date.as_ref());
        node.with_text_child("Days", self.days.as_ref())
            .with_text_child(
                "ExpiredObjectDeleteMarker",
                self.expired_object_delete_marker.as_ref(),
            )
    }
}

/// Moves objects to a different storage class.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct Transition {
    pub date: Option<DateTime<Utc>>,
    /// The number of days after creation.
    pub days: Option<i32>,
    pub storage_class: Option<StorageClass>,
}

impl Transition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [date][Self::date].
    pub fn set_date<T: Into<DateTime<Utc>>>(mut self, v: T) -> Self {
        self.date = Some(v.into());
        self
    }

    /// Sets the value of [days][Self::days].
    pub fn set_days<T: Into<i32>>(mut self, v: T) -> Self {
        self.days = Some(v.into());
        self
    }

    /// Sets the value of [storage_class][Self::storage_class].
    pub fn set_storage_class<T: Into<StorageClass>>(mut self, v: T) -> Self {
        self.storage_class = Some(v.into());
        self
    }
}

impl FromXml for Transition {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(Self {
            date: date_child(node, "Date")?,
            days: node.parse_child("Days")?,
            storage_class: node.parse_child("StorageClass")?,
        })
    }
}

impl ToXml for Transition {
    fn to_xml(&self, name: &str) -> XmlNode {
        let node = with_date_child(XmlNode::new(name), "Date", self.date.as_ref());
        node.with_text_child("Days", self.days.as_ref())
            .with_text_child("StorageClass", self.storage_class.as_ref())
    }
}

/// Moves noncurrent object versions to a different storage class.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct NoncurrentVersionTransition {
    /// The number of days after the version becomes noncurrent.
    pub noncurrent_days: Option<i32>,
    pub storage_class: Option<StorageClass>,
}

impl NoncurrentVersionTransition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [noncurrent_days][Self::noncurrent_days].
    pub fn set_noncurrent_days<T: Into<i32>>(mut self, v: T) -> Self {
        self.noncurrent_days = Some(v.into());
        self
    }

    /// Sets the value of [storage_class][Self::storage_class].
    pub fn set_storage_class<T: Into<StorageClass>>(mut self, v: T) -> Self {
        self.storage_class = Some(v.into());
        self
    }
}

impl FromXml for NoncurrentVersionTransition {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(Self {
            noncurrent_days: node.parse_child("NoncurrentDays")?,
            storage_class: node.parse_child("StorageClass")?,
        })
    }
}

impl ToXml for NoncurrentVersionTransition {
    fn to_xml(&self, name: &str) -> XmlNode {
        XmlNode::new(name)
            .with_text_child("NoncurrentDays", self.noncurrent_days.as_ref())
            .with_text_child("StorageClass", self.storage_class.as_ref())
    }
}

/// Deletes noncurrent object versions.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct NoncurrentVersionExpiration {
    /// The number of days after the version becomes noncurrent.
    pub noncurrent_days: Option<i32>,
}

impl NoncurrentVersionExpiration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [noncurrent_days][Self::noncurrent_days].
    pub fn set_noncurrent_days<T: Into<i32>>(mut self, v: T) -> Self {
        self.noncurrent_days = Some(v.into());
        self
    }
}

impl FromXml for NoncurrentVersionExpiration {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(Self {
            noncurrent_days: node.parse_child("NoncurrentDays")?,
        })
    }
}

impl ToXml for NoncurrentVersionExpiration {
    fn to_xml(&self, name: &str) -> XmlNode {
        XmlNode::new(name).with_text_child("NoncurrentDays", self.noncurrent_days.as_ref())
    }
}

/// A rule in the lifecycle configuration of a bucket.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct LifecycleRule {
    pub expiration: Option<LifecycleExpiration>,
    /// A unique identifier for the rule, up to 255 characters.
    pub id: Option<String>,
    /// The rule applies to the objects whose key starts with this prefix.
    pub prefix: Option<String>,
    pub status: Option<ExpirationStatus>,
    pub transitions: Vec<Transition>,
    pub noncurrent_version_transitions: Vec<NoncurrentVersionTransition>,
    pub noncurrent_version_expiration: Option<NoncurrentVersionExpiration>,
}

impl LifecycleRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [expiration][Self::expiration].
    pub fn set_expiration<T: Into<LifecycleExpiration>>(mut self, v: T) -> Self {
        self.expiration = Some(v.into());
        self
    }

    /// Sets the value of [id][Self::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    /// Sets the value of [prefix][Self::prefix].
    pub fn set_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.prefix = Some(v.into());
        self
    }

    /// Sets the value of [status][Self::status].
    pub fn set_status<T: Into<ExpirationStatus>>(mut self, v: T) -> Self {
        self.status = Some(v.into());
        self
    }

    /// Sets the value of [transitions][Self::transitions].
    pub fn set_transitions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Transition>,
    {
        self.transitions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [noncurrent_version_transitions][Self::noncurrent_version_transitions].
    pub fn set_noncurrent_version_transitions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<NoncurrentVersionTransition>,
    {
        self.noncurrent_version_transitions = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [noncurrent_version_expiration][Self::noncurrent_version_expiration].
    pub fn set_noncurrent_version_expiration<T: Into<NoncurrentVersionExpiration>>(
        mut self,
        v: T,
    ) -> Self {
        self.noncurrent_version_expiration = Some(v.into());
        self
    }
}

impl FromXml for LifecycleRule {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(Self {
            expiration: node.decode_child("Expiration")?,
            id: node.child_text("ID").map(str::to_string),
            prefix: node.child_text("Prefix").map(str::to_string),
            status: node.parse_child("Status")?,
            transitions: node.decode_children("Transition")?,
            noncurrent_version_transitions: node.decode_children("NoncurrentVersionTransition")?,
            noncurrent_version_expiration: node.decode_child("NoncurrentVersionExpiration")?,
        })
    }
}

impl ToXml for LifecycleRule {
    fn to_xml(&self, name: &str) -> XmlNode {
        XmlNode::new(name)
            .with_optional_child("Expiration", self.expiration.as_ref())
            .with_text_child("ID", self.id.as_ref())
            .with_text_child("Prefix", self.prefix.as_ref())
            .with_text_child("Status", self.status.as_ref())
            .with_children("Transition", &self.transitions)
            .with_children(
                "NoncurrentVersionTransition",
                &self.noncurrent_version_transitions,
            )
            .with_optional_child(
                "NoncurrentVersionExpiration",
                self.noncurrent_version_expiration.as_ref(),
            )
    }
}

/// The lifecycle rules of a bucket.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct BucketLifecycleConfiguration {
    pub rules: Vec<LifecycleRule>,
}

impl BucketLifecycleConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [rules][Self::rules].
    pub fn set_rules<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<LifecycleRule>,
    {
        self.rules = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl FromXml for BucketLifecycleConfiguration {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(Self {
            rules: node.decode_children("Rule")?,
        })
    }
}

impl ToXml for BucketLifecycleConfiguration {
    fn to_xml(&self, name: &str) -> XmlNode {
        XmlNode::new(name)
            .with_attribute("xmlns", XMLNS)
            .with_children("Rule", &self.rules)
    }
}

/// The request for [Storage::get_bucket_lifecycle_configuration][crate::client::Storage::get_bucket_lifecycle_configuration].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetBucketLifecycleConfigurationRequest {
    pub bucket: Option<String>,
}

impl GetBucketLifecycleConfigurationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [bucket][Self::bucket].
    pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.bucket = Some(v.into());
        self
    }
}

/// The response for [Storage::get_bucket_lifecycle_configuration][crate::client::Storage::get_bucket_lifecycle_configuration].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetBucketLifecycleConfigurationResponse {
    pub rules: Vec<LifecycleRule>,
}

impl FromXml for GetBucketLifecycleConfigurationResponse {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        let BucketLifecycleConfiguration { rules } = BucketLifecycleConfiguration::from_xml(node)?;
        Ok(Self { rules })
    }
}

/// The request for [Storage::put_bucket_lifecycle_configuration][crate::client::Storage::put_bucket_lifecycle_configuration].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct PutBucketLifecycleConfigurationRequest {
    pub bucket: Option<String>,
    /// The new configuration, replacing any existing configuration.
    pub lifecycle_configuration: Option<BucketLifecycleConfiguration>,
}

impl PutBucketLifecycleConfigurationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [bucket][Self::bucket].
    pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.bucket = Some(v.into());
        self
    }

    /// Sets the value of [lifecycle_configuration][Self::lifecycle_configuration].
    pub fn set_lifecycle_configuration<T: Into<BucketLifecycleConfiguration>>(
        mut self,
        v: T,
    ) -> Self {
        self.lifecycle_configuration = Some(v.into());
        self
    }
}

/// The request for [Storage::delete_bucket_lifecycle][crate::client::Storage::delete_bucket_lifecycle].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct DeleteBucketLifecycleRequest {
    pub bucket: Option<String>,
}

impl DeleteBucketLifecycleRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [bucket][Self::bucket].
    pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.bucket = Some(v.into());
        self
    }
}

/// The request for [Storage::head_bucket][crate::client::Storage::head_bucket].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct HeadBucketRequest {
    pub bucket: Option<String>,
}

impl HeadBucketRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [bucket][Self::bucket].
    pub fn set_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.bucket = Some(v.into());
        self
    }
}
