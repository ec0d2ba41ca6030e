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

//! Contains the [Dns] client and related types.

use crate::builder;
use crate::model;
use gaxi::dispatcher::Dispatcher;
use gaxi::envelope::HttpMethod;
use gaxi::operation::{Operation, PathParams};
use gaxi::request_builder::RequestBuilder;
use gaxi::service::{Protocol, ServiceInfo};
use std::sync::Arc;

/// The service has a single global endpoint, and requests are always signed
/// for `us-east-1`, whatever the region configured in the client.
const SERVICE: ServiceInfo = ServiceInfo {
    signing_name: "dns",
    endpoint_prefix: "dns",
    protocol: Protocol::RestXml,
    global_endpoint: Some("https://dns.nimbusapis.com"),
    signing_region: Some("us-east-1"),
};

/// Implements a client for the Nimbus DNS service.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use nimbus_dns::client::Dns;
/// let client = Dns::builder().build().await?;
/// // use `client` to make requests to the DNS service.
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// To configure `Dns` use the `with_*` methods in the type returned by
/// [builder()][Dns::builder]. The default configuration should work for most
/// applications. Common configuration changes include:
///
/// * [with_credentials()]: by default the client reads credentials from the
///   environment.
///
/// # Pooling and Cloning
///
/// `Dns` holds a connection pool and a worker pool internally, it is advised
/// to create one and then reuse it. You do not need to wrap `Dns` in an
/// [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
///
/// [with_credentials()]: ClientBuilder::with_credentials
#[derive(Clone, Debug)]
pub struct Dns {
    inner: Arc<Dispatcher>,
}

/// A builder for [Dns].
///
/// ```no_run
/// # tokio_test::block_on(async {
/// # use nimbus_dns::client::Dns;
/// let client = Dns::builder()
///     .with_tracing()
///     .build()
///     .await?;
/// # anyhow::Result::<()>::Ok(()) });
/// ```
pub type ClientBuilder =
    gax::client_builder::ClientBuilder<client_builder::Factory, auth::credentials::Credentials>;

pub(crate) mod client_builder {
    use super::Dns;
    pub struct Factory;
    impl gax::client_builder::internal::ClientFactory for Factory {
        type Client = Dns;
        type Credentials = auth::credentials::Credentials;
        async fn build(
            self,
            config: gaxi::options::ClientConfig,
        ) -> gax::client_builder::Result<Self::Client> {
            Self::Client::build(config).await
        }
    }
}

impl Dns {
    /// Returns a builder for [Dns].
    pub fn builder() -> ClientBuilder {
        gax::client_builder::internal::new_builder(client_builder::Factory)
    }

    /// Creates a client with the default configuration.
    pub async fn new() -> gax::client_builder::Result<Self> {
        Self::builder().build().await
    }

    async fn build(config: gaxi::options::ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = Dispatcher::new(config, SERVICE).await?;
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    fn request<Req, Res>(
        &self,
        operation: Operation<Req, Res>,
        request: Req,
    ) -> RequestBuilder<Self, Req, Res>
    where
        Req: Default + Send + Sync + 'static,
        Res: Send + 'static,
    {
        RequestBuilder::new(self.clone(), self.inner.clone(), operation).with_request(request)
    }

    /// Returns the latest status of a health check, as seen by each health
    /// checker.
    ///
    /// # Example
    /// ```no_run
    /// # use nimbus_dns::client::Dns;
    /// # use nimbus_dns::model::GetHealthCheckStatusRequest;
    /// async fn sample(client: &Dns) -> nimbus_dns::Result<()> {
    ///     let request = GetHealthCheckStatusRequest::new().set_health_check_id("abc-123");
    ///     let response = client.get_health_check_status(request).send().await?;
    ///     for o in response.health_check_observations {
    ///         println!("{:?} {:?}", o.ip_address, o.status_report);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn get_health_check_status(
        &self,
        request: model::GetHealthCheckStatusRequest,
    ) -> builder::GetHealthCheckStatus {
        let operation = Operation::rest_xml(
            "GetHealthCheckStatus",
            HttpMethod::Get,
            "/2013-04-01/healthcheck/{HealthCheckId}/status",
        )
        .with_path_params(health_check_id);
        self.request(operation, request)
    }

    /// Returns the reason for the latest failure of a health check, as seen by
    /// each health checker.
    pub fn get_health_check_last_failure_reason(
        &self,
        request: model::GetHealthCheckLastFailureReasonRequest,
    ) -> builder::GetHealthCheckLastFailureReason {
        let operation = Operation::rest_xml(
            "GetHealthCheckLastFailureReason",
            HttpMethod::Get,
            "/2013-04-01/healthcheck/{HealthCheckId}/lastfailurereason",
        )
        .with_path_params(health_check_id);
        self.request(operation, request)
    }
}

fn health_check_id<R>(request: &R) -> PathParams
where
    R: HealthCheckRequest,
{
    vec![("HealthCheckId", request.health_check_id())]
}

trait HealthCheckRequest {
    fn health_check_id(&self) -> Option<String>;
}

impl HealthCheckRequest for model::GetHealthCheckStatusRequest {
    fn health_check_id(&self) -> Option<String> {
        self.health_check_id.clone()
    }
}

impl HealthCheckRequest for model::GetHealthCheckLastFailureReasonRequest {
    fn health_check_id(&self) -> Option<String> {
        self.health_check_id.clone()
    }
}
