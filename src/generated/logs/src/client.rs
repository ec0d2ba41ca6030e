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

//! Contains the [Logs] client and related types.

use crate::builder;
use crate::model;
use gaxi::dispatcher::Dispatcher;
use gaxi::operation::{Operation, decode_empty};
use gaxi::request_builder::RequestBuilder;
use gaxi::service::{Protocol, ServiceInfo};
use std::sync::Arc;

const SERVICE: ServiceInfo = ServiceInfo {
    signing_name: "logs",
    endpoint_prefix: "logs",
    protocol: Protocol::Json {
        target_prefix: "Logs_20140328",
    },
    global_endpoint: None,
    signing_region: None,
};

/// Implements a client for the Nimbus Logs service.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use nimbus_logs::client::Logs;
/// let client = Logs::builder().build().await?;
/// // use `client` to make requests to the Logs service.
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Configuration
///
/// To configure `Logs` use the `with_*` methods in the type returned by
/// [builder()][Logs::builder]. The default configuration should work for most
/// applications. Common configuration changes include:
///
/// * [with_region()]: by default the client uses the region in the
///   `NIMBUS_REGION` environment variable, or `us-east-1`.
/// * [with_credentials()]: by default the client reads credentials from the
///   environment.
///
/// # Pooling and Cloning
///
/// `Logs` holds a connection pool and a worker pool internally, it is advised
/// to create one and then reuse it. You do not need to wrap `Logs` in an
/// [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
///
/// [with_region()]: ClientBuilder::with_region
/// [with_credentials()]: ClientBuilder::with_credentials
#[derive(Clone, Debug)]
pub struct Logs {
    inner: Arc<Dispatcher>,
}

/// A builder for [Logs].
///
/// ```no_run
/// # tokio_test::block_on(async {
/// # use nimbus_logs::client::Logs;
/// let client = Logs::builder()
///     .with_region("eu-west-1")
///     .with_tracing()
///     .build()
///     .await?;
/// # anyhow::Result::<()>::Ok(()) });
/// ```
pub type ClientBuilder =
    gax::client_builder::ClientBuilder<client_builder::Factory, auth::credentials::Credentials>;

pub(crate) mod client_builder {
    use super::Logs;
    pub struct Factory;
    impl gax::client_builder::internal::ClientFactory for Factory {
        type Client = Logs;
        type Credentials = auth::credentials::Credentials;
        async fn build(
            self,
            config: gaxi::options::ClientConfig,
        ) -> gax::client_builder::Result<Self::Client> {
            Self::Client::build(config).await
        }
    }
}

impl Logs {
    /// Returns a builder for [Logs].
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

    /// Cancels an export task in the `PENDING` or `RUNNING` state.
    pub fn cancel_export_task(
        &self,
        request: model::CancelExportTaskRequest,
    ) -> builder::CancelExportTask {
        let operation = Operation::json("CancelExportTask").with_decode(decode_empty);
        self.request(operation, request)
    }

    /// Starts exporting the events of a log group to a storage bucket.
    ///
    /// Each account can only have one active export task at a time.
    pub fn create_export_task(
        &self,
        request: model::CreateExportTaskRequest,
    ) -> builder::CreateExportTask {
        let operation = Operation::json("CreateExportTask");
        self.request(operation, request)
    }

    /// Creates a log group.
    ///
    /// # Example
    /// ```no_run
    /// # use nimbus_logs::client::Logs;
    /// # use nimbus_logs::model::CreateLogGroupRequest;
    /// async fn sample(client: &Logs) -> nimbus_logs::Result<()> {
    ///     let request = CreateLogGroupRequest::new().set_log_group_name("my-app");
    ///     client.create_log_group(request).send().await
    /// }
    /// ```
    pub fn create_log_group(
        &self,
        request: model::CreateLogGroupRequest,
    ) -> builder::CreateLogGroup {
        let operation = Operation::json("CreateLogGroup").with_decode(decode_empty);
        self.request(operation, request)
    }

    /// Creates a log stream in an existing log group.
    pub fn create_log_stream(
        &self,
        request: model::CreateLogStreamRequest,
    ) -> builder::CreateLogStream {
        let operation = Operation::json("CreateLogStream").with_decode(decode_empty);
        self.request(operation, request)
    }

    /// Deletes a destination, and the subscription filters that use it.
    pub fn delete_destination(
        &self,
        request: model::DeleteDestinationRequest,
    ) -> builder::DeleteDestination {
        let operation = Operation::json("DeleteDestination").with_decode(decode_empty);
        self.request(operation, request)
    }

    /// Deletes a log group, including all its streams and events.
    pub fn delete_log_group(
        &self,
        request: model::DeleteLogGroupRequest,
    ) -> builder::DeleteLogGroup {
        let operation = Operation::json("DeleteLogGroup").with_decode(decode_empty);
        self.request(operation, request)
    }

    /// Deletes a log stream and its events.
    pub fn delete_log_stream(
        &self,
        request: model::DeleteLogStreamRequest,
    ) -> builder::DeleteLogStream {
        let operation = Operation::json("DeleteLogStream").with_decode(decode_empty);
        self.request(operation, request)
    }

    /// Deletes a metric filter.
    pub fn delete_metric_filter(
        &self,
        request: model::DeleteMetricFilterRequest,
    ) -> builder::DeleteMetricFilter {
        let operation = Operation::json("DeleteMetricFilter").with_decode(decode_empty);
        self.request(operation, request)
    }

    /// Deletes the retention policy of a log group.
    pub fn delete_retention_policy(
        &self,
        request: model::DeleteRetentionPolicyRequest,
    ) -> builder::DeleteRetentionPolicy {
        let operation = Operation::json("DeleteRetentionPolicy").with_decode(decode_empty);
        self.request(operation, request)
    }

    /// Deletes a subscription filter.
    pub fn delete_subscription_filter(
        &self,
        request: model::DeleteSubscriptionFilterRequest,
    ) -> builder::DeleteSubscriptionFilter {
        let operation = Operation::json("DeleteSubscriptionFilter").with_decode(decode_empty);
        self.request(operation, request)
    }

    /// Lists the destinations in the account.
    pub fn describe_destinations(
        &self,
        request: model::DescribeDestinationsRequest,
    ) -> builder::DescribeDestinations {
        let operation = Operation::json("DescribeDestinations").with_idempotency(true);
        self.request(operation, request)
    }

    /// Lists the export tasks in the account.
    pub fn describe_export_tasks(
        &self,
        request: model::DescribeExportTasksRequest,
    ) -> builder::DescribeExportTasks {
        let operation = Operation::json("DescribeExportTasks").with_idempotency(true);
        self.request(operation, request)
    }

    /// Lists the log groups in the account.
    ///
    /// # Example
    /// ```no_run
    /// # use nimbus_logs::client::Logs;
    /// # use nimbus_logs::model::DescribeLogGroupsRequest;
    /// async fn sample(client: &Logs) -> nimbus_logs::Result<()> {
    ///     let mut request = DescribeLogGroupsRequest::new().set_log_group_name_prefix("prod-");
    ///     loop {
    ///         let response = client.describe_log_groups(request.clone()).send().await?;
    ///         for group in response.log_groups.unwrap_or_default() {
    ///             println!("{group:?}");
    ///         }
    ///         match response.next_token {
    ///             None => break,
    ///             Some(token) => request = request.set_next_token(token),
    ///         }
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn describe_log_groups(
        &self,
        request: model::DescribeLogGroupsRequest,
    ) -> builder::DescribeLogGroups {
        let operation = Operation::json("DescribeLogGroups").with_idempotency(true);
        self.request(operation, request)
    }

    /// Lists the log streams in a log group.
    pub fn describe_log_streams(
        &self,
        request: model::DescribeLogStreamsRequest,
    ) -> builder::DescribeLogStreams {
        let operation = Operation::json("DescribeLogStreams").with_idempotency(true);
        self.request(operation, request)
    }

    /// Lists the metric filters of a log group.
    pub fn describe_metric_filters(
        &self,
        request: model::DescribeMetricFiltersRequest,
    ) -> builder::DescribeMetricFilters {
        let operation = Operation::json("DescribeMetricFilters").with_idempotency(true);
        self.request(operation, request)
    }

    /// Lists the subscription filters of a log group.
    pub fn describe_subscription_filters(
        &self,
        request: model::DescribeSubscriptionFiltersRequest,
    ) -> builder::DescribeSubscriptionFilters {
        let operation = Operation::json("DescribeSubscriptionFilters").with_idempotency(true);
        self.request(operation, request)
    }

    /// Searches the events of a log group, optionally across a subset of its streams.
    pub fn filter_log_events(
        &self,
        request: model::FilterLogEventsRequest,
    ) -> builder::FilterLogEvents {
        let operation = Operation::json("FilterLogEvents").with_idempotency(true);
        self.request(operation, request)
    }

    /// Reads the events of a log stream.
    pub fn get_log_events(&self, request: model::GetLogEventsRequest) -> builder::GetLogEvents {
        let operation = Operation::json("GetLogEvents").with_idempotency(true);
        self.request(operation, request)
    }

    /// Creates or updates a destination.
    pub fn put_destination(
        &self,
        request: model::PutDestinationRequest,
    ) -> builder::PutDestination {
        let operation = Operation::json("PutDestination");
        self.request(operation, request)
    }

    /// Sets the access policy of a destination.
    pub fn put_destination_policy(
        &self,
        request: model::PutDestinationPolicyRequest,
    ) -> builder::PutDestinationPolicy {
        let operation = Operation::json("PutDestinationPolicy").with_decode(decode_empty);
        self.request(operation, request)
    }

    /// Uploads a batch of log events.
    ///
    /// # Example
    /// ```no_run
    /// # use nimbus_logs::client::Logs;
    /// # use nimbus_logs::model::{InputLogEvent, PutLogEventsRequest};
    /// async fn sample(client: &Logs, token: Option<String>) -> nimbus_logs::Result<Option<String>> {
    ///     let mut request = PutLogEventsRequest::new()
    ///         .set_log_group_name("my-app")
    ///         .set_log_stream_name("instance-1")
    ///         .set_log_events([InputLogEvent::new()
    ///             .set_timestamp(1_700_000_000_000_i64)
    ///             .set_message("started")]);
    ///     request.sequence_token = token;
    ///     let response = client.put_log_events(request).send().await?;
    ///     Ok(response.next_sequence_token)
    /// }
    /// ```
    pub fn put_log_events(&self, request: model::PutLogEventsRequest) -> builder::PutLogEvents {
        let operation = Operation::json("PutLogEvents");
        self.request(operation, request)
    }

    /// Creates or updates a metric filter.
    pub fn put_metric_filter(
        &self,
        request: model::PutMetricFilterRequest,
    ) -> builder::PutMetricFilter {
        let operation = Operation::json("PutMetricFilter").with_decode(decode_empty);
        self.request(operation, request)
    }

    /// Sets the retention policy of a log group.
    pub fn put_retention_policy(
        &self,
        request: model::PutRetentionPolicyRequest,
    ) -> builder::PutRetentionPolicy {
        let operation = Operation::json("PutRetentionPolicy").with_decode(decode_empty);
        self.request(operation, request)
    }

    /// Creates or updates a subscription filter.
    pub fn put_subscription_filter(
        &self,
        request: model::PutSubscriptionFilterRequest,
    ) -> builder::PutSubscriptionFilter {
        let operation = Operation::json("PutSubscriptionFilter").with_decode(decode_empty);
        self.request(operation, request)
    }

    /// Tests a filter pattern against a list of messages.
    ///
    /// This operation does not change any resources.
    pub fn test_metric_filter(
        &self,
        request: model::TestMetricFilterRequest,
    ) -> builder::TestMetricFilter {
        let operation = Operation::json("TestMetricFilter").with_idempotency(true);
        self.request(operation, request)
    }
}
