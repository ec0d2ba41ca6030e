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

//! Verify the Logs client sends the right requests and decodes the responses.

#[cfg(test)]
mod tests {
    use gax::exponential_backoff::ExponentialBackoffBuilder;
    use gax::options::RequestOptionsBuilder;
    use gax::retry_policy::NeverRetry;
    use gax::retry_throttler::CircuitBreaker;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use nimbus_logs::client::Logs;
    use nimbus_logs::model::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::time::Duration;

    type Result<T> = anyhow::Result<T>;

    const CONTENT_TYPE: &str = "application/x-nimbus-json-1.1";

    async fn test_client(server: &Server) -> Result<Logs> {
        let client = Logs::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_region("us-west-2")
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

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn create_log_group() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/"),
                request::headers(contains(("x-nimbus-target", "Logs_20140328.CreateLogGroup"))),
                request::headers(contains(("content-type", CONTENT_TYPE))),
                request::body(json_decoded(eq(json!({"logGroupName": "my-app"})))),
            ])
            .respond_with(status_code(200)),
        );
        let client = test_client(&server).await?;
        client
            .create_log_group(CreateLogGroupRequest::new().set_log_group_name("my-app"))
            .send()
            .await?;
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn describe_log_groups() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/"),
                request::headers(contains(("x-nimbus-target", "Logs_20140328.DescribeLogGroups"))),
                request::headers(contains(("content-type", CONTENT_TYPE))),
                request::body(json_decoded(eq(json!({"logGroupNamePrefix": "prod-", "limit": 2})))),
            ])
            .respond_with(
                status_code(200)
                    .append_header("content-type", CONTENT_TYPE)
                    .body(
                        json!({
                            "logGroups": [
                                {"logGroupName": "prod-api", "creationTime": 1_700_000_000_000_i64, "storedBytes": 1024},
                                {"logGroupName": "prod-web", "retentionInDays": 7, "newField": true}
                            ],
                            "nextToken": "abc"
                        })
                        .to_string(),
                    ),
            ),
        );
        let client = test_client(&server).await?;
        let response = client
            .describe_log_groups(
                DescribeLogGroupsRequest::new()
                    .set_log_group_name_prefix("prod-")
                    .set_limit(2),
            )
            .send()
            .await?;
        assert_eq!(response.next_token.as_deref(), Some("abc"));
        let groups = response.log_groups.unwrap_or_default();
        let names = groups
            .iter()
            .map(|g| g.log_group_name.as_deref().unwrap_or_default())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["prod-api", "prod-web"]);
        assert_eq!(groups[0].stored_bytes, Some(1024));
        assert_eq!(groups[0].retention_in_days, None);
        assert_eq!(groups[1].retention_in_days, Some(7));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn put_log_events() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/"),
                request::headers(contains(("x-nimbus-target", "Logs_20140328.PutLogEvents"))),
                request::headers(contains(("content-type", CONTENT_TYPE))),
                request::body(json_decoded(eq(json!({
                    "logGroupName": "my-app",
                    "logStreamName": "instance-1",
                    "logEvents": [{"timestamp": 1000, "message": "started"}]
                })))),
            ])
            .respond_with(
                status_code(200)
                    .append_header("content-type", CONTENT_TYPE)
                    .body(r#"{"nextSequenceToken": "seq-2"}"#),
            ),
        );
        let client = test_client(&server).await?;
        let response = client
            .put_log_events(
                PutLogEventsRequest::new()
                    .set_log_group_name("my-app")
                    .set_log_stream_name("instance-1")
                    .set_log_events([InputLogEvent::new()
                        .set_timestamp(1000_i64)
                        .set_message("started")]),
            )
            .send()
            .await?;
        assert_eq!(response.next_sequence_token.as_deref(), Some("seq-2"));
        assert_eq!(response.rejected_log_events_info, None);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn service_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/"),
                request::headers(contains(("x-nimbus-target", "Logs_20140328.DeleteLogGroup"))),
                request::headers(contains(("content-type", CONTENT_TYPE))),
            ])
            .respond_with(
                status_code(400)
                    .append_header("content-type", CONTENT_TYPE)
                    .append_header("x-nimbus-request-id", "req-42")
                    .body(
                        r#"{"__type": "com.nimbus.logs#ResourceNotFoundException", "message": "The specified log group does not exist."}"#,
                    ),
            ),
        );
        let client = test_client(&server).await?;
        let err = client
            .delete_log_group(DeleteLogGroupRequest::new().set_log_group_name("missing"))
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(400));
        let svc = err.service_error().expect("a service error");
        assert_eq!(svc.error_code(), "ResourceNotFoundException");
        assert_eq!(svc.message(), "The specified log group does not exist.");
        assert_eq!(svc.request_id(), Some("req-42"));
        assert!(!svc.is_retryable(), "{svc:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn read_only_operations_are_retried() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/"),
                request::headers(contains(("x-nimbus-target", "Logs_20140328.GetLogEvents"))),
                request::headers(contains(("content-type", CONTENT_TYPE))),
            ])
            .times(2)
            .respond_with(cycle(vec![
                Box::new(status_code(503).body("unavailable")) as Box<dyn Responder>,
                Box::new(
                    status_code(200)
                        .append_header("content-type", CONTENT_TYPE)
                        .body(r#"{"events": [{"timestamp": 1, "message": "m", "ingestionTime": 2}]}"#),
                ),
            ])),
        );
        let client = test_client(&server).await?;
        let response = client
            .get_log_events(
                GetLogEventsRequest::new()
                    .set_log_group_name("my-app")
                    .set_log_stream_name("instance-1"),
            )
            .send_with_response()
            .await?;
        assert_eq!(response.retry_count(), 1);
        let events = response.body().events.as_deref().unwrap_or_default();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].message.as_deref(), Some("m"));
        assert_eq!(events[0].ingestion_time, Some(2));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn per_request_retry_policy() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/"),
                request::headers(contains(("x-nimbus-target", "Logs_20140328.DescribeLogStreams"))),
                request::headers(contains(("content-type", CONTENT_TYPE))),
            ])
            .times(1)
            .respond_with(status_code(503).body("unavailable")),
        );
        let client = test_client(&server).await?;
        let err = client
            .describe_log_streams(DescribeLogStreamsRequest::new().set_log_group_name("my-app"))
            .with_retry_policy(NeverRetry)
            .send()
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(503));
        assert_eq!(err.retry_count(), 0);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn spawn() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/"),
                request::headers(contains(("x-nimbus-target", "Logs_20140328.TestMetricFilter"))),
                request::headers(contains(("content-type", CONTENT_TYPE))),
            ])
            .respond_with(
                status_code(200)
                    .append_header("content-type", CONTENT_TYPE)
                    .body(r#"{"matches": [{"eventNumber": 1, "eventMessage": "ERROR x", "extractedValues": {"$.level": "ERROR"}}]}"#),
            ),
        );
        let client = test_client(&server).await?;
        let pending = client
            .test_metric_filter(
                TestMetricFilterRequest::new()
                    .set_filter_pattern("ERROR")
                    .set_log_event_messages(["ERROR x", "INFO y"]),
            )
            .spawn();
        let response = pending.await?;
        let matches = response.matches.unwrap_or_default();
        assert_eq!(matches.len(), 1);
        let m = &matches[0];
        assert_eq!(m.event_number, Some(1));
        let values = m.extracted_values.clone().unwrap_or_default();
        assert_eq!(values.get("$.level").map(String::as_str), Some("ERROR"));
        Ok(())
    }
}
