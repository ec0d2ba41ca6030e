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

//! Verify the Pipeline client sends the right requests and decodes the
//! responses.

#[cfg(test)]
mod tests {
    use gax::exponential_backoff::ExponentialBackoffBuilder;
    use gax::retry_throttler::CircuitBreaker;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use nimbus_pipeline::client::Pipeline;
    use nimbus_pipeline::model::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::mpsc;
    use std::time::Duration;

    type Result<T> = anyhow::Result<T>;

    const CONTENT_TYPE: &str = "application/x-nimbus-json-1.1";

    async fn test_client(server: &Server) -> Result<Pipeline> {
        let client = Pipeline::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_credentials(auth::credentials::anonymous::Builder::new().build())
            .with_backoff_policy(
                ExponentialBackoffBuilder::new()
                    .with_initial_delay(Duration::from_millis(1))
                    .with_maximum_delay(Duration::from_millis(1))
                    .clamp(),
            )
            .with_retry_throttler(CircuitBreaker::default())
            .build()
            .await?;
        Ok(client)
    }

    fn state() -> serde_json::Value {
        json!({
            "pipelineName": "deploy",
            "pipelineVersion": 3,
            "created": 1446137312.204,
            "updated": 1446137358.328,
            "stageStates": [
                {
                    "stageName": "Source",
                    "inboundTransitionState": {"enabled": true},
                    "actionStates": [{
                        "actionName": "Checkout",
                        "currentRevision": {"revisionId": "abc123"},
                        "latestExecution": {"status": "Succeeded", "lastStatusChange": 1446137358.328}
                    }],
                    "latestExecution": {"pipelineExecutionId": "exec-1", "status": "Succeeded"}
                },
                {
                    "stageName": "Prod",
                    "inboundTransitionState": {
                        "enabled": false,
                        "lastChangedBy": "alice",
                        "disabledReason": "freeze"
                    },
                    "actionStates": [{
                        "actionName": "Deploy",
                        "latestExecution": {
                            "status": "Failed",
                            "errorDetails": {"code": "JobFailed", "message": "timeout"}
                        }
                    }]
                }
            ]
        })
    }

    fn expect_get_pipeline_state(server: &Server) {
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/"),
                request::headers(contains((
                    "x-nimbus-target",
                    "Pipeline_20150709.GetPipelineState"
                ))),
                request::body(json_decoded(eq(json!({"name": "deploy"})))),
            ])
            .respond_with(
                status_code(200)
                    .append_header("content-type", CONTENT_TYPE)
                    .body(state().to_string()),
            ),
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_pipeline_state() -> Result<()> {
        let server = Server::run();
        expect_get_pipeline_state(&server);
        let client = test_client(&server).await?;
        let state = client
            .get_pipeline_state(GetPipelineStateRequest::new().set_name("deploy"))
            .send()
            .await?;
        assert_eq!(state.pipeline_name.as_deref(), Some("deploy"));
        assert_eq!(state.pipeline_version, Some(3));
        assert_eq!(state.updated, Some(1446137358.328));
        let stages = state.stage_states.clone().unwrap_or_default();
        assert_eq!(stages.len(), 2);

        let source = &stages[0];
        let actions = source.action_states.as_deref().unwrap_or_default();
        assert_eq!(actions.len(), 1);
        let checkout = &actions[0];
        assert_eq!(checkout.action_name.as_deref(), Some("Checkout"));
        let execution = checkout.latest_execution.clone().unwrap_or_default();
        assert_eq!(execution.status, Some(ActionExecutionStatus::Succeeded));
        assert_eq!(execution.error_details, None);

        let prod = &stages[1];
        let transition = prod.inbound_transition_state.clone().unwrap_or_default();
        assert_eq!(transition.enabled, Some(false));
        assert_eq!(transition.disabled_reason.as_deref(), Some("freeze"));
        assert_eq!(prod.latest_execution, None);
        let deploy = prod.action_states.as_deref().unwrap_or_default()[0]
            .latest_execution
            .clone()
            .unwrap_or_default();
        assert_eq!(deploy.status, Some(ActionExecutionStatus::Failed));
        let details = deploy.error_details.unwrap_or_default();
        assert_eq!(details.message.as_deref(), Some("timeout"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn callback() -> Result<()> {
        let server = Server::run();
        expect_get_pipeline_state(&server);
        let client = test_client(&server).await?;
        let (tx, rx) = mpsc::channel();
        client
            .get_pipeline_state(GetPipelineStateRequest::new().set_name("deploy"))
            .send_with_callback("ctx-1", move |_client, request, result, context| {
                let version = result.ok().and_then(|s| s.pipeline_version);
                let _ = tx.send((request.name.clone(), version, context));
            });
        let got =
            tokio::task::spawn_blocking(move || rx.recv_timeout(Duration::from_secs(10))).await??;
        assert_eq!(got, (Some("deploy".to_string()), Some(3), "ctx-1"));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn not_found() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("POST", "/")).respond_with(
                status_code(400)
                    .append_header("content-type", CONTENT_TYPE)
                    .body(r#"{"__type": "PipelineNotFoundException", "message": "no such pipeline"}"#),
            ),
        );
        let client = test_client(&server).await?;
        let err = client
            .get_pipeline_state(GetPipelineStateRequest::new().set_name("missing"))
            .send()
            .await
            .unwrap_err();
        let svc = err.service_error().expect("a service error");
        assert_eq!(svc.error_code(), "PipelineNotFoundException");
        assert!(!svc.is_retryable(), "{svc:?}");
        Ok(())
    }
}
