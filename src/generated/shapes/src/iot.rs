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

//! Shapes of the IoT service.
//!
//! The service uses JSON documents. Timestamps are seconds since the Unix
//! epoch, with fractional seconds.

/// Describes a rule in the list of topic rules.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TopicRuleListItem {
    pub rule_arn: Option<String>,
    pub rule_name: Option<String>,
    /// The pattern of the topics the rule listens to.
    pub topic_pattern: Option<String>,
    pub created_at: Option<f64>,
    pub rule_disabled: Option<bool>,
}

impl TopicRuleListItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [rule_arn][Self::rule_arn].
    pub fn set_rule_arn<T: Into<String>>(mut self, v: T) -> Self {
        self.rule_arn = Some(v.into());
        self
    }

    /// Sets the value of [rule_name][Self::rule_name].
    pub fn set_rule_name<T: Into<String>>(mut self, v: T) -> Self {
        self.rule_name = Some(v.into());
        self
    }

    /// Sets the value of [topic_pattern][Self::topic_pattern].
    pub fn set_topic_pattern<T: Into<String>>(mut self, v: T) -> Self {
        self.topic_pattern = Some(v.into());
        self
    }

    /// Sets the value of [created_at][Self::created_at].
    pub fn set_created_at<T: Into<f64>>(mut self, v: T) -> Self {
        self.created_at = Some(v.into());
        self
    }

    /// Sets the value of [rule_disabled][Self::rule_disabled].
    pub fn set_rule_disabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.rule_disabled = Some(v.into());
        self
    }
}
