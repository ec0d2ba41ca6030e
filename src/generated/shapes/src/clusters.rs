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

//! Shapes of the Clusters service.
//!
//! The service uses JSON documents with `PascalCase` field names.
//! Timestamps are seconds since the Unix epoch, with fractional seconds.

/// The lifecycle timestamps of an instance group.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "PascalCase")]
#[non_exhaustive]
pub struct InstanceGroupTimeline {
    pub creation_date_time: Option<f64>,
    /// When the instance group became ready to run jobs.
    pub ready_date_time: Option<f64>,
    /// When the instance group terminated.
    pub end_date_time: Option<f64>,
}

impl InstanceGroupTimeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [creation_date_time][Self::creation_date_time].
    pub fn set_creation_date_time<T: Into<f64>>(mut self, v: T) -> Self {
        self.creation_date_time = Some(v.into());
        self
    }

    /// Sets the value of [ready_date_time][Self::ready_date_time].
    pub fn set_ready_date_time<T: Into<f64>>(mut self, v: T) -> Self {
        self.ready_date_time = Some(v.into());
        self
    }

    /// Sets the value of [end_date_time][Self::end_date_time].
    pub fn set_end_date_time<T: Into<f64>>(mut self, v: T) -> Self {
        self.end_date_time = Some(v.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn round_trip() -> anyhow::Result<()> {
        let input = json!({
            "CreationDateTime": 1_446_137_358.328,
            "ReadyDateTime": 1_446_137_600.0,
        });
        let got = serde_json::from_value::<InstanceGroupTimeline>(input.clone())?;
        let want = InstanceGroupTimeline::new()
            .set_creation_date_time(1_446_137_358.328)
            .set_ready_date_time(1_446_137_600.0);
        assert_eq!(got, want);
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn empty() -> anyhow::Result<()> {
        let got = serde_json::from_str::<InstanceGroupTimeline>("{}")?;
        assert_eq!(got, InstanceGroupTimeline::default());
        assert_eq!(serde_json::to_value(&got)?, json!({}));
        Ok(())
    }
}
