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


//! Request builders for each operation in [Logs][crate::client::Logs].
//!
//! Each builder holds the request and its options. Use the
//! [RequestOptionsBuilder][gax::options::RequestOptionsBuilder] methods to
//! override the client configuration for a single request, and then one of
//! `send()`, `send_with_response()`, `spawn()`, or `send_with_callback()` to
//! execute it.

use crate::client::Logs;
use crate::model;

/// The request builder for [Logs::cancel_export_task][crate::client::Logs::cancel_export_task].
pub type CancelExportTask =
    gaxi::request_builder::RequestBuilder<Logs, model::CancelExportTaskRequest, ()>;

/// The request builder for [Logs::create_export_task][crate::client::Logs::create_export_task].
pub type CreateExportTask = gaxi::request_builder::RequestBuilder<
    Logs,
    model::CreateExportTaskRequest,
    model::CreateExportTaskResponse,
>;

/// The request builder for [Logs::create_log_group][crate::client::Logs::create_log_group].
pub type CreateLogGroup =
    gaxi::request_builder::RequestBuilder<Logs, model::CreateLogGroupRequest, ()>;

/// The request builder for [Logs::create_log_stream][crate::client::Logs::create_log_stream].
pub type CreateLogStream =
    gaxi::request_builder::RequestBuilder<Logs, model::CreateLogStreamRequest, ()>;

/// The request builder for [Logs::delete_destination][crate::client::Logs::delete_destination].
pub type DeleteDestination =
    gaxi::request_builder::RequestBuilder<Logs, model::DeleteDestinationRequest, ()>;

/// The request builder for [Logs::delete_log_group][crate::client::Logs::delete_log_group].
pub type DeleteLogGroup =
    gaxi::request_builder::RequestBuilder<Logs, model::DeleteLogGroupRequest, ()>;

/// The request builder for [Logs::delete_log_stream][crate::client::Logs::delete_log_stream].
pub type DeleteLogStream =
    gaxi::request_builder::RequestBuilder<Logs, model::DeleteLogStreamRequest, ()>;

/// The request builder for [Logs::delete_metric_filter][crate::client::Logs::delete_metric_filter].
pub type DeleteMetricFilter =
    gaxi::request_builder::RequestBuilder<Logs, model::DeleteMetricFilterRequest, ()>;

/// The request builder for [Logs::delete_retention_policy][crate::client::Logs::delete_retention_policy].
pub type DeleteRetentionPolicy =
    gaxi::request_builder::RequestBuilder<Logs, model::DeleteRetentionPolicyRequest, ()>;

/// The request builder for [Logs::delete_subscription_filter][crate::client::Logs::delete_subscription_filter].
pub type DeleteSubscriptionFilter =
    gaxi::request_builder::RequestBuilder<Logs, model::DeleteSubscriptionFilterRequest, ()>;

/// The request builder for [Logs::describe_destinations][crate::client::Logs::describe_destinations].
pub type DescribeDestinations = gaxi::request_builder::RequestBuilder<
    Logs,
    model::DescribeDestinationsRequest,
    model::DescribeDestinationsResponse,
>;

/// The request builder for [Logs::describe_export_tasks][crate::client::Logs::describe_export_tasks].
pub type DescribeExportTasks = gaxi::request_builder::RequestBuilder<
    Logs,
    model::DescribeExportTasksRequest,
    model::DescribeExportTasksResponse,
>;

/// The request builder for [Logs::describe_log_groups][crate::client::Logs::describe_log_groups].
pub type DescribeLogGroups = gaxi::request_builder::RequestBuilder<
    Logs,
    model::DescribeLogGroupsRequest,
    model::DescribeLogGroupsResponse,
>;

/// The request builder for [Logs::describe_log_streams][crate::client::Logs::describe_log_streams].
pub type DescribeLogStreams = gaxi::request_builder::RequestBuilder<
    Logs,
    model::DescribeLogStreamsRequest,
    model::DescribeLogStreamsResponse,
>;

/// The request builder for [Logs::describe_metric_filters][crate::client::Logs::describe_metric_filters].
pub type DescribeMetricFilters = gaxi::request_builder::RequestBuilder<
    Logs,
    model::DescribeMetricFiltersRequest,
    model::DescribeMetricFiltersResponse,
>;

/// The request builder for [Logs::describe_subscription_filters][crate::client::Logs::describe_subscription_filters].
pub type DescribeSubscriptionFilters = gaxi::request_builder::RequestBuilder<
    Logs,
    model::DescribeSubscriptionFiltersRequest,
    model::DescribeSubscriptionFiltersResponse,
>;

/// The request builder for [Logs::filter_log_events][crate::client::Logs::filter_log_events].
pub type FilterLogEvents = gaxi::request_builder::RequestBuilder<
    Logs,
    model::FilterLogEventsRequest,
    model::FilterLogEventsResponse,
>;

/// The request builder for [Logs::get_log_events][crate::client::Logs::get_log_events].
pub type GetLogEvents = gaxi::request_builder::RequestBuilder<
    Logs,
    model::GetLogEventsRequest,
    model::GetLogEventsResponse,
>;

/// The request builder for [Logs::put_destination][crate::client::Logs::put_destination].
pub type PutDestination = gaxi::request_builder::RequestBuilder<
    Logs,
    model::PutDestinationRequest,
    model::PutDestinationResponse,
>;

/// The request builder for [Logs::put_destination_policy][crate::client::Logs::put_destination_policy].
pub type PutDestinationPolicy =
    gaxi::request_builder::RequestBuilder<Logs, model::PutDestinationPolicyRequest, ()>;

/// The request builder for [Logs::put_log_events][crate::client::Logs::put_log_events].
pub type PutLogEvents = gaxi::request_builder::RequestBuilder<
    Logs,
    model::PutLogEventsRequest,
    model::PutLogEventsResponse,
>;

/// The request builder for [Logs::put_metric_filter][crate::client::Logs::put_metric_filter].
pub type PutMetricFilter =
    gaxi::request_builder::RequestBuilder<Logs, model::PutMetricFilterRequest, ()>;

/// The request builder for [Logs::put_retention_policy][crate::client::Logs::put_retention_policy].
pub type PutRetentionPolicy =
    gaxi::request_builder::RequestBuilder<Logs, model::PutRetentionPolicyRequest, ()>;

/// The request builder for [Logs::put_subscription_filter][crate::client::Logs::put_subscription_filter].
pub type PutSubscriptionFilter =
    gaxi::request_builder::RequestBuilder<Logs, model::PutSubscriptionFilterRequest, ()>;

/// The request builder for [Logs::test_metric_filter][crate::client::Logs::test_metric_filter].
pub type TestMetricFilter = gaxi::request_builder::RequestBuilder<
    Logs,
    model::TestMetricFilterRequest,
    model::TestMetricFilterResponse,
>;
