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

//! Contains the [Pipeline] client and related types.

use crate::builder;
use crate::model;
use gaxi::dispatcher::Dispatcher;
use gaxi::operation::Operation;
use gaxi::request_builder::RequestBuilder;
use gaxi::service::{Protocol, ServiceInfo};
use std::sync::Arc;

const SERVICE: ServiceInfo = ServiceInfo {
    signing_name: "pipeline",
    endpoint_prefix: "pipeline",
    protocol: Protocol::Json {
        target_prefix: "Pipeline_20150709",
    },
    global_endpoint: None,
    signing_region: None,
};

/// Implements a client for the Nimbus Pipeline service.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use nimbus_pipeline::client::Pipeline;
/// let client = Pipeline::builder().build().await?;
/// // use `client` to make requests to the Pipeline service.
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// To configure `Pipeline` use the `with_*` methods in the type returned by
/// [builder()][Pipeline::builder]. The default configuration should work for most
/// applications. Common configuration changes include:
///
/// * [with_region()]: by default the client uses the region in the
///   `NIMBUS_REGION` environment variable, or `us-east-1`.
/// * [with_credentials()]: by default the client reads credentials from the
///   environment.
///
/// # Pooling and Cloning
///
/// `Pipeline` holds a connection pool and a worker pool internally, it is advised
/// to create one and then reuse it. You do not need to wrap `Pipeline` in an
/// [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
///
/// [with_region()]: ClientBuilder::with_region
/// [with_credentials()]: ClientBuilder::with_credentials
#[derive(Clone, Debug)]
pub struct Pipeline {
    inner: Arc<Dispatcher>,
}

/// A builder for [Pipeline].
///
/// ```no_run
/// # tokio_test::block_on(async {
/// # use nimbus_pipeline::client::Pipeline;
/// let client = Pipeline::builder()
///     .with_region("eu-west-1")
///     .with_tracing()
///     .build()
///     .await?;
/// # anyhow::Result::<()>::Ok(()) });
/// ```
pub type ClientBuilder =
    gax::client_builder::ClientBuilder<client_builder::Factory, auth::credentials::Credentials>;

pub(crate) mod client_builder {
    use super::Pipeline;
    pub struct Factory;
    impl gax::client_builder::internal::ClientFactory for Factory {
        type Client = Pipeline;
        type Credentials = auth::credentials::Credentials;
        async fn build(
            self,
            config: gaxi::options::ClientConfig,
        ) -> gax::client_builder::Result<Self::Client> {
            Self::Client::build(config).await
        }
    }
}

impl Pipeline {
    /// Returns a builder for [Pipeline].
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

    /// Returns the state of a pipeline, including its stages and actions.
    ///
    /// # Example
    /// ```no_run
    /// # use nimbus_pipeline::client::Pipeline;
    /// # use nimbus_pipeline::model::GetPipelineStateRequest;
    /// async fn sample(client: &Pipeline) -> nimbus_pipeline::Result<()> {
    ///     let request = GetPipelineStateRequest::new().set_name("deploy");
    ///     let state = client.get_pipeline_state(request).send().await?;
    ///     for stage in state.stage_states.unwrap_or_default() {
    ///         println!("{:?}: {:?}", stage.stage_name, stage.latest_execution);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn get_pipeline_state(
        &self,
        request: model::GetPipelineStateRequest,
    ) -> builder::GetPipelineState {
        let operation = Operation::json("GetPipelineState").with_idempotency(true);
        self.request(operation, request)
    }
}
