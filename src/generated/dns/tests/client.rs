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

//! Verify the DNS client sends the right requests and decodes the responses.

#[cfg(test)]
mod tests {
    use gax::exponential_backoff::ExponentialBackoffBuilder;
    use gax::retry_throttler::CircuitBreaker;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use nimbus_dns::client::Dns;
    use nimbus_dns::model::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    type Result<T> = anyhow::Result<T>;

    const OBSERVATIONS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<GetHealthCheckStatusResponse xmlns="https://dns.nimbusapis.com/doc/2013-04-01/">
  <HealthCheckObservations>
    <HealthCheckObservation>
      <IPAddress>192.0.2.10</IPAddress>
      <StatusReport>
        <Status>Failure: Connection timed out.</Status>
        <CheckedTime>2016-01-02T03:04:05.000Z</CheckedTime>
      </StatusReport>
    </HealthCheckObservation>
  </HealthCheckObservations>
</GetHealthCheckStatusResponse>"#;

    async fn test_client(server: &Server) -> Result<Dns> {
        let client = Dns::builder()
            .with_endpoint(format!("http://{}", server.addr()))
            .with_region("eu-west-1")
            .with_credentials(
                auth::credentials::static_key::Builder::new("key", "secret").build(),
            )
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
    async fn get_health_check_status() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/2013-04-01/healthcheck/abc-123/status"),
                // Signed for the global signing region, not the client region.
                request::headers(contains((
                    "authorization",
                    matches("/us-east-1/dns/")
                ))),
            ])
            .respond_with(
                status_code(200)
                    .append_header("content-type", "text/xml")
                    .body(OBSERVATIONS),
            ),
        );
        let client = test_client(&server).await?;
        let response = client
            .get_health_check_status(
                GetHealthCheckStatusRequest::new().set_health_check_id("abc-123"),
            )
            .send()
            .await?;
        assert_eq!(response.health_check_observations.len(), 1);
        let o = &response.health_check_observations[0];
        assert_eq!(o.ip_address.as_deref(), Some("192.0.2.10"));
        let report = o.status_report.clone().unwrap_or_default();
        assert_eq!(report.status.as_deref(), Some("Failure: Connection timed out."));
        assert!(report.checked_time.is_some(), "{report:?}");
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn get_health_check_last_failure_reason() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/2013-04-01/healthcheck/abc-123/lastfailurereason",
            ))
            .respond_with(status_code(200).body(OBSERVATIONS)),
        );
        let client = test_client(&server).await?;
        let response = client
            .get_health_check_last_failure_reason(
                GetHealthCheckLastFailureReasonRequest::new().set_health_check_id("abc-123"),
            )
            .send()
            .await?;
        assert_eq!(response.health_check_observations.len(), 1);
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn missing_health_check_id() -> Result<()> {
        let server = Server::run();
        let client = test_client(&server).await?;
        let err = client
            .get_health_check_status(GetHealthCheckStatusRequest::new())
            .send()
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        Ok(())
    }
}
