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

//! The request, response, and shared shapes of the DNS service.

use chrono::{DateTime, Utc};
use gax::Result;
use gaxi::xml::{FromXml, XmlNode};

/// The result of the latest health check from one checker.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct StatusReport {
    /// A description of the result, for example
    /// `Success: HTTP Status Code: 200, OK`.
    pub status: Option<String>,
    pub checked_time: Option<DateTime<Utc>>,
}

impl FromXml for StatusReport {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        let checked_time = node
            .child_text("CheckedTime")
            .map(|t| {
                DateTime::parse_from_rfc3339(t)
                    .map(|d| d.with_timezone(&Utc))
                    .map_err(gax::error::Error::deser)
            })
            .transpose()?;
        Ok(Self {
            status: node.child_text("Status").map(str::to_string),
            checked_time,
        })
    }
}

/// The status of a health check, as seen by one of the health checkers.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct HealthCheckObservation {
    /// The address of the health checker.
    pub ip_address: Option<String>,
    pub status_report: Option<StatusReport>,
}

impl FromXml for HealthCheckObservation {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(Self {
            ip_address: node.child_text("IPAddress").map(str::to_string),
            status_report: node.decode_child("StatusReport")?,
        })
    }
}

fn observations(node: &XmlNode) -> Result<Vec<HealthCheckObservation>> {
    match node.child("HealthCheckObservations") {
        None => Ok(Vec::new()),
        Some(list) => list.decode_children("HealthCheckObservation"),
    }
}

/// The request for [Dns::get_health_check_status][crate::client::Dns::get_health_check_status].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetHealthCheckStatusRequest {
    pub health_check_id: Option<String>,
}

impl GetHealthCheckStatusRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [health_check_id][Self::health_check_id].
    pub fn set_health_check_id<T: Into<String>>(mut self, v: T) -> Self {
        self.health_check_id = Some(v.into());
        self
    }
}

/// The response for [Dns::get_health_check_status][crate::client::Dns::get_health_check_status].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetHealthCheckStatusResponse {
    /// One observation for each health checker.
    pub health_check_observations: Vec<HealthCheckObservation>,
}

impl FromXml for GetHealthCheckStatusResponse {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(Self {
            health_check_observations: observations(node)?,
        })
    }
}

/// The request for [Dns::get_health_check_last_failure_reason][crate::client::Dns::get_health_check_last_failure_reason].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetHealthCheckLastFailureReasonRequest {
    pub health_check_id: Option<String>,
}

impl GetHealthCheckLastFailureReasonRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [health_check_id][Self::health_check_id].
    pub fn set_health_check_id<T: Into<String>>(mut self, v: T) -> Self {
        self.health_check_id = Some(v.into());
        self
    }
}

/// The response for [Dns::get_health_check_last_failure_reason][crate::client::Dns::get_health_check_last_failure_reason].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetHealthCheckLastFailureReasonResponse {
    /// The last failure seen by each health checker.
    pub health_check_observations: Vec<HealthCheckObservation>,
}

impl FromXml for GetHealthCheckLastFailureReasonResponse {
    fn from_xml(node: &XmlNode) -> Result<Self> {
        Ok(Self {
            health_check_observations: observations(node)?,
        })
    }
}
