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

//! The request, response, and shared shapes of the Pipeline service.
//!
//! Timestamps are seconds since the Unix epoch, with fractional seconds.

/// The status of the latest execution of an action.
#[derive(Clone, Debug, PartialEq, Eq, serde_with::DeserializeFromStr, serde_with::SerializeDisplay)]
#[non_exhaustive]
pub enum ActionExecutionStatus {
    InProgress,
    Succeeded,
    Failed,
    /// A value not known to this version of the library.
    ///
    /// The value is sent back to the service unchanged.
    UnknownValue(String),
}

impl ActionExecutionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::InProgress => "InProgress",
            Self::Succeeded => "Succeeded",
            Self::Failed => "Failed",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::str::FromStr for ActionExecutionStatus {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "InProgress" => Self::InProgress,
            "Succeeded" => Self::Succeeded,
            "Failed" => Self::Failed,
            v => Self::UnknownValue(v.to_string()),
        })
    }
}

impl std::fmt::Display for ActionExecutionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Describes why an action execution failed.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ErrorDetails {
    pub code: Option<String>,
    pub message: Option<String>,
}

/// The latest execution of an action.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ActionExecution {
    pub status: Option<ActionExecutionStatus>,

    /// A summary of the run, as reported by the action.
    pub summary: Option<String>,

    pub last_status_change: Option<f64>,

    /// The identifier of the run in the system that executes the action.
    pub external_execution_id: Option<String>,

    /// A link to the run in the system that executes the action.
    pub external_execution_url: Option<String>,

    pub percent_complete: Option<i32>,

    /// Present only if the execution failed.
    pub error_details: Option<ErrorDetails>,
}

/// The revision of the artifact an action is working on.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ActionRevision {
    pub revision_id: Option<String>,
    pub revision_change_id: Option<String>,
    pub created: Option<f64>,
}

/// The state of a single action in a stage.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ActionState {
    pub action_name: Option<String>,
    pub current_revision: Option<ActionRevision>,
    pub latest_execution: Option<ActionExecution>,
    pub entity_url: Option<String>,
    pub revision_url: Option<String>,
}

/// Whether artifacts may flow into a stage.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TransitionState {
    pub enabled: Option<bool>,
    pub last_changed_by: Option<String>,
    pub last_changed_at: Option<f64>,
    pub disabled_reason: Option<String>,
}

/// The latest pipeline execution that reached a stage.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StageExecution {
    pub pipeline_execution_id: Option<String>,
    pub status: Option<String>,
}

/// The state of a stage and its actions.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StageState {
    pub stage_name: Option<String>,
    pub inbound_transition_state: Option<TransitionState>,
    pub action_states: Option<Vec<ActionState>>,
    pub latest_execution: Option<StageExecution>,
}

/// The request for [Pipeline::get_pipeline_state][crate::client::Pipeline::get_pipeline_state].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetPipelineStateRequest {
    /// The name of the pipeline.
    pub name: Option<String>,
}

impl GetPipelineStateRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [name][Self::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }
}

/// The state of a pipeline and each of its stages.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetPipelineStateResponse {
    pub pipeline_name: Option<String>,

    /// Starts at 1 and increases every time the pipeline is updated.
    pub pipeline_version: Option<i32>,

    pub stage_states: Option<Vec<StageState>>,

    pub created: Option<f64>,

    pub updated: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn request() -> anyhow::Result<()> {
        let request = GetPipelineStateRequest::new().set_name("deploy");
        assert_eq!(serde_json::to_value(&request)?, json!({"name": "deploy"}));
        assert_eq!(serde_json::to_value(GetPipelineStateRequest::new())?, json!({}));
        Ok(())
    }

    #[test]
    fn action_execution() -> anyhow::Result<()> {
        let input = json!({
            "status": "Failed",
            "summary": "build failed",
            "lastStatusChange": 1446137358.328,
            "percentComplete": 100,
            "errorDetails": {"code": "JobFailed", "message": "exit status 1"}
        });
        let got = serde_json::from_value::<ActionExecution>(input)?;
        assert_eq!(got.status, Some(ActionExecutionStatus::Failed));
        assert_eq!(got.last_status_change, Some(1446137358.328));
        assert_eq!(got.percent_complete, Some(100));
        assert_eq!(got.external_execution_id, None);
        let details = got.error_details.unwrap_or_default();
        assert_eq!(details.code.as_deref(), Some("JobFailed"));
        Ok(())
    }

    #[test]
    fn unknown_status_round_trips() -> anyhow::Result<()> {
        let input = json!({"status": "Abandoned"});
        let got = serde_json::from_value::<ActionExecution>(input.clone())?;
        assert_eq!(
            got.status,
            Some(ActionExecutionStatus::UnknownValue("Abandoned".into()))
        );
        assert_eq!(serde_json::to_value(&got)?, input);
        Ok(())
    }

    #[test]
    fn empty_stage_list_round_trips() -> anyhow::Result<()> {
        let input = json!({"pipelineName": "deploy", "stageStates": []});
        let got = serde_json::from_value::<GetPipelineStateResponse>(input.clone())?;
        assert_eq!(got.stage_states, Some(Vec::new()));
        assert_eq!(serde_json::to_value(&got)?, input);
        let got = serde_json::from_value::<GetPipelineStateResponse>(json!({}))?;
        assert_eq!(got.stage_states, None);
        Ok(())
    }

    #[test]
    fn absent_and_zero_differ() -> anyhow::Result<()> {
        let got = serde_json::from_value::<ActionExecution>(json!({"percentComplete": 0}))?;
        assert_eq!(got.percent_complete, Some(0));
        let got = serde_json::from_value::<ActionExecution>(json!({}))?;
        assert_eq!(got.percent_complete, None);
        Ok(())
    }
}
