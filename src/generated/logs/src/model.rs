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

//! The request, response, and shared shapes of the Logs service.
//!
//! All fields are optional. Fields that are not set are omitted from the
//! request, and the service applies its own defaults. Timestamps are
//! milliseconds since the Unix epoch.

/// A log group and its configuration.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogGroup {
    pub log_group_name: Option<String>,

    pub creation_time: Option<i64>,

    /// The number of days to retain events, absent if events never expire.
    pub retention_in_days: Option<i32>,

    pub metric_filter_count: Option<i32>,

    pub arn: Option<String>,

    pub stored_bytes: Option<i64>,
}

/// A sequence of log events from a single source.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LogStream {
    pub log_stream_name: Option<String>,

    pub creation_time: Option<i64>,

    pub first_event_timestamp: Option<i64>,

    pub last_event_timestamp: Option<i64>,

    pub last_ingestion_time: Option<i64>,

    /// The token to use in the next [PutLogEventsRequest] for this stream.
    pub upload_sequence_token: Option<String>,

    pub arn: Option<String>,

    pub stored_bytes: Option<i64>,
}

/// A log event to upload.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InputLogEvent {
    pub timestamp: Option<i64>,
    pub message: Option<String>,
}

impl InputLogEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [timestamp][Self::timestamp].
    pub fn set_timestamp<T: Into<i64>>(mut self, v: T) -> Self {
        self.timestamp = Some(v.into());
        self
    }

    /// Sets the value of [message][Self::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = Some(v.into());
        self
    }
}

/// A log event returned by [GetLogEventsRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OutputLogEvent {
    pub timestamp: Option<i64>,
    pub message: Option<String>,
    pub ingestion_time: Option<i64>,
}

/// A log event matching a [FilterLogEventsRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FilteredLogEvent {
    pub log_stream_name: Option<String>,
    pub timestamp: Option<i64>,
    pub message: Option<String>,
    pub ingestion_time: Option<i64>,
    pub event_id: Option<String>,
}

/// The search progress for one log stream.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SearchedLogStream {
    pub log_stream_name: Option<String>,

    /// True if all the events in the stream were searched.
    pub searched_completely: Option<bool>,
}

/// Describes the log events rejected by [PutLogEventsRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RejectedLogEventsInfo {
    pub too_new_log_event_start_index: Option<i32>,
    pub too_old_log_event_end_index: Option<i32>,
    pub expired_log_event_end_index: Option<i32>,
}

/// Describes how to publish a metric from matching log events.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MetricTransformation {
    pub metric_name: Option<String>,

    pub metric_namespace: Option<String>,

    /// The value published for each match, either a number or a field
    /// reference such as `$.latency`.
    pub metric_value: Option<String>,
}

impl MetricTransformation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [metric_name][Self::metric_name].
    pub fn set_metric_name<T: Into<String>>(mut self, v: T) -> Self {
        self.metric_name = Some(v.into());
        self
    }

    /// Sets the value of [metric_namespace][Self::metric_namespace].
    pub fn set_metric_namespace<T: Into<String>>(mut self, v: T) -> Self {
        self.metric_namespace = Some(v.into());
        self
    }

    /// Sets the value of [metric_value][Self::metric_value].
    pub fn set_metric_value<T: Into<String>>(mut self, v: T) -> Self {
        self.metric_value = Some(v.into());
        self
    }
}

/// A metric filter attached to a log group.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MetricFilter {
    pub filter_name: Option<String>,
    pub filter_pattern: Option<String>,
    pub metric_transformations: Option<Vec<MetricTransformation>>,
    pub creation_time: Option<i64>,
}

/// The result of matching one message in [TestMetricFilterRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct MetricFilterMatchRecord {
    pub event_number: Option<i64>,
    pub event_message: Option<String>,
    pub extracted_values: Option<std::collections::HashMap<String, String>>,
}

/// A subscription filter attached to a log group.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SubscriptionFilter {
    pub filter_name: Option<String>,
    pub log_group_name: Option<String>,
    pub filter_pattern: Option<String>,
    pub destination_arn: Option<String>,
    pub role_arn: Option<String>,
    pub creation_time: Option<i64>,
}

/// A cross-account destination for subscription filters.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Destination {
    pub destination_name: Option<String>,

    pub target_arn: Option<String>,

    pub role_arn: Option<String>,

    /// The IAM policy document that governs which accounts can subscribe.
    pub access_policy: Option<String>,

    pub arn: Option<String>,

    pub creation_time: Option<i64>,
}

/// The state of an export task.
#[derive(Clone, Debug, PartialEq, Eq, serde_with::DeserializeFromStr, serde_with::SerializeDisplay)]
#[non_exhaustive]
pub enum ExportTaskStatusCode {
    Cancelled,
    Completed,
    Failed,
    Pending,
    PendingCancel,
    Running,
    /// A value not known to this version of the library.
    UnknownValue(String),
}

impl ExportTaskStatusCode {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Cancelled => "CANCELLED",
            Self::Completed => "COMPLETED",
            Self::Failed => "FAILED",
            Self::Pending => "PENDING",
            Self::PendingCancel => "PENDING_CANCEL",
            Self::Running => "RUNNING",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::str::FromStr for ExportTaskStatusCode {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "CANCELLED" => Self::Cancelled,
            "COMPLETED" => Self::Completed,
            "FAILED" => Self::Failed,
            "PENDING" => Self::Pending,
            "PENDING_CANCEL" => Self::PendingCancel,
            "RUNNING" => Self::Running,
            v => Self::UnknownValue(v.to_string()),
        })
    }
}

impl std::fmt::Display for ExportTaskStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The status of an export task.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExportTaskStatus {
    pub code: Option<ExportTaskStatusCode>,
    pub message: Option<String>,
}

/// When an export task was created and completed.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExportTaskExecutionInfo {
    pub creation_time: Option<i64>,
    pub completion_time: Option<i64>,
}

/// An export of log data to a storage bucket.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ExportTask {
    pub task_id: Option<String>,

    pub task_name: Option<String>,

    pub log_group_name: Option<String>,

    /// The start of the exported range, inclusive.
    pub from: Option<i64>,

    /// The end of the exported range, exclusive.
    pub to: Option<i64>,

    pub destination: Option<String>,

    pub destination_prefix: Option<String>,

    pub status: Option<ExportTaskStatus>,

    pub execution_info: Option<ExportTaskExecutionInfo>,
}

/// How [DescribeLogStreamsRequest] sorts the results.
#[derive(Clone, Debug, PartialEq, Eq, serde_with::DeserializeFromStr, serde_with::SerializeDisplay)]
#[non_exhaustive]
pub enum OrderBy {
    LogStreamName,
    LastEventTime,
    /// A value not known to this version of the library.
    UnknownValue(String),
}

impl OrderBy {
    pub fn as_str(&self) -> &str {
        match self {
            Self::LogStreamName => "LogStreamName",
            Self::LastEventTime => "LastEventTime",
            Self::UnknownValue(v) => v,
        }
    }
}

impl std::str::FromStr for OrderBy {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "LogStreamName" => Self::LogStreamName,
            "LastEventTime" => Self::LastEventTime,
            v => Self::UnknownValue(v.to_string()),
        })
    }
}

impl std::fmt::Display for OrderBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cancels a pending or running export task.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CancelExportTaskRequest {
    pub task_id: Option<String>,
}

impl CancelExportTaskRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [task_id][Self::task_id].
    pub fn set_task_id<T: Into<String>>(mut self, v: T) -> Self {
        self.task_id = Some(v.into());
        self
    }
}

/// Exports the events of a log group to a storage bucket.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateExportTaskRequest {
    pub task_name: Option<String>,

    pub log_group_name: Option<String>,

    /// Only export streams with this prefix.
    pub log_stream_name_prefix: Option<String>,

    pub from: Option<i64>,

    pub to: Option<i64>,

    /// The name of the destination bucket.
    pub destination: Option<String>,

    pub destination_prefix: Option<String>,
}

impl CreateExportTaskRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [task_name][Self::task_name].
    pub fn set_task_name<T: Into<String>>(mut self, v: T) -> Self {
        self.task_name = Some(v.into());
        self
    }

    /// Sets the value of [log_group_name][Self::log_group_name].
    pub fn set_log_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_group_name = Some(v.into());
        self
    }

    /// Sets the value of [log_stream_name_prefix][Self::log_stream_name_prefix].
    pub fn set_log_stream_name_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.log_stream_name_prefix = Some(v.into());
        self
    }

    /// Sets the value of [from][Self::from].
    pub fn set_from<T: Into<i64>>(mut self, v: T) -> Self {
        self.from = Some(v.into());
        self
    }

    /// Sets the value of [to][Self::to].
    pub fn set_to<T: Into<i64>>(mut self, v: T) -> Self {
        self.to = Some(v.into());
        self
    }

    /// Sets the value of [destination][Self::destination].
    pub fn set_destination<T: Into<String>>(mut self, v: T) -> Self {
        self.destination = Some(v.into());
        self
    }

    /// Sets the value of [destination_prefix][Self::destination_prefix].
    pub fn set_destination_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.destination_prefix = Some(v.into());
        self
    }
}

/// The result of [CreateExportTaskRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateExportTaskResponse {
    pub task_id: Option<String>,
}

/// Creates a log group.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateLogGroupRequest {
    pub log_group_name: Option<String>,
}

impl CreateLogGroupRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [log_group_name][Self::log_group_name].
    pub fn set_log_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_group_name = Some(v.into());
        self
    }
}

/// Creates a log stream in a log group.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateLogStreamRequest {
    pub log_group_name: Option<String>,
    pub log_stream_name: Option<String>,
}

impl CreateLogStreamRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [log_group_name][Self::log_group_name].
    pub fn set_log_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_group_name = Some(v.into());
        self
    }

    /// Sets the value of [log_stream_name][Self::log_stream_name].
    pub fn set_log_stream_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_stream_name = Some(v.into());
        self
    }
}

/// Deletes a destination and its subscription filters.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteDestinationRequest {
    pub destination_name: Option<String>,
}

impl DeleteDestinationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [destination_name][Self::destination_name].
    pub fn set_destination_name<T: Into<String>>(mut self, v: T) -> Self {
        self.destination_name = Some(v.into());
        self
    }
}

/// Deletes a log group and all its log streams.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteLogGroupRequest {
    pub log_group_name: Option<String>,
}

impl DeleteLogGroupRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [log_group_name][Self::log_group_name].
    pub fn set_log_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_group_name = Some(v.into());
        self
    }
}

/// Deletes a log stream and its events.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteLogStreamRequest {
    pub log_group_name: Option<String>,
    pub log_stream_name: Option<String>,
}

impl DeleteLogStreamRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [log_group_name][Self::log_group_name].
    pub fn set_log_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_group_name = Some(v.into());
        self
    }

    /// Sets the value of [log_stream_name][Self::log_stream_name].
    pub fn set_log_stream_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_stream_name = Some(v.into());
        self
    }
}

/// Deletes a metric filter.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteMetricFilterRequest {
    pub log_group_name: Option<String>,
    pub filter_name: Option<String>,
}

impl DeleteMetricFilterRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [log_group_name][Self::log_group_name].
    pub fn set_log_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_group_name = Some(v.into());
        self
    }

    /// Sets the value of [filter_name][Self::filter_name].
    pub fn set_filter_name<T: Into<String>>(mut self, v: T) -> Self {
        self.filter_name = Some(v.into());
        self
    }
}

/// Removes the retention policy of a log group, its events never expire.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteRetentionPolicyRequest {
    pub log_group_name: Option<String>,
}

impl DeleteRetentionPolicyRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [log_group_name][Self::log_group_name].
    pub fn set_log_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_group_name = Some(v.into());
        self
    }
}

/// Deletes a subscription filter.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteSubscriptionFilterRequest {
    pub log_group_name: Option<String>,
    pub filter_name: Option<String>,
}

impl DeleteSubscriptionFilterRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [log_group_name][Self::log_group_name].
    pub fn set_log_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_group_name = Some(v.into());
        self
    }

    /// Sets the value of [filter_name][Self::filter_name].
    pub fn set_filter_name<T: Into<String>>(mut self, v: T) -> Self {
        self.filter_name = Some(v.into());
        self
    }
}

/// Lists the destinations, in name order.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DescribeDestinationsRequest {
    /// The service expects this field name capitalized.
    #[serde(rename = "DestinationNamePrefix")]
    pub destination_name_prefix: Option<String>,

    pub next_token: Option<String>,

    pub limit: Option<i32>,
}

impl DescribeDestinationsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [destination_name_prefix][Self::destination_name_prefix].
    pub fn set_destination_name_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.destination_name_prefix = Some(v.into());
        self
    }

    /// Sets the value of [next_token][Self::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }

    /// Sets the value of [limit][Self::limit].
    pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
        self.limit = Some(v.into());
        self
    }
}

/// The result of [DescribeDestinationsRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DescribeDestinationsResponse {
    pub destinations: Option<Vec<Destination>>,
    pub next_token: Option<String>,
}

/// Lists the export tasks, optionally filtered by id or status.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DescribeExportTasksRequest {
    pub task_id: Option<String>,
    pub status_code: Option<ExportTaskStatusCode>,
    pub next_token: Option<String>,
    pub limit: Option<i32>,
}

impl DescribeExportTasksRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [task_id][Self::task_id].
    pub fn set_task_id<T: Into<String>>(mut self, v: T) -> Self {
        self.task_id = Some(v.into());
        self
    }

    /// Sets the value of [status_code][Self::status_code].
    pub fn set_status_code<T: Into<ExportTaskStatusCode>>(mut self, v: T) -> Self {
        self.status_code = Some(v.into());
        self
    }

    /// Sets the value of [next_token][Self::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }

    /// Sets the value of [limit][Self::limit].
    pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
        self.limit = Some(v.into());
        self
    }
}

/// The result of [DescribeExportTasksRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DescribeExportTasksResponse {
    pub export_tasks: Option<Vec<ExportTask>>,
    pub next_token: Option<String>,
}

/// Lists the log groups, in name order.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DescribeLogGroupsRequest {
    pub log_group_name_prefix: Option<String>,
    pub next_token: Option<String>,
    pub limit: Option<i32>,
}

impl DescribeLogGroupsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [log_group_name_prefix][Self::log_group_name_prefix].
    pub fn set_log_group_name_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.log_group_name_prefix = Some(v.into());
        self
    }

    /// Sets the value of [next_token][Self::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }

    /// Sets the value of [limit][Self::limit].
    pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
        self.limit = Some(v.into());
        self
    }
}

/// The result of [DescribeLogGroupsRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DescribeLogGroupsResponse {
    pub log_groups: Option<Vec<LogGroup>>,
    pub next_token: Option<String>,
}

/// Lists the log streams in a log group.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DescribeLogStreamsRequest {
    pub log_group_name: Option<String>,

    /// Cannot be used when ordering by [OrderBy::LastEventTime].
    pub log_stream_name_prefix: Option<String>,

    pub order_by: Option<OrderBy>,

    pub descending: Option<bool>,

    pub next_token: Option<String>,

    pub limit: Option<i32>,
}

impl DescribeLogStreamsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [log_group_name][Self::log_group_name].
    pub fn set_log_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_group_name = Some(v.into());
        self
    }

    /// Sets the value of [log_stream_name_prefix][Self::log_stream_name_prefix].
    pub fn set_log_stream_name_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.log_stream_name_prefix = Some(v.into());
        self
    }

    /// Sets the value of [order_by][Self::order_by].
    pub fn set_order_by<T: Into<OrderBy>>(mut self, v: T) -> Self {
        self.order_by = Some(v.into());
        self
    }

    /// Sets the value of [descending][Self::descending].
    pub fn set_descending<T: Into<bool>>(mut self, v: T) -> Self {
        self.descending = Some(v.into());
        self
    }

    /// Sets the value of [next_token][Self::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }

    /// Sets the value of [limit][Self::limit].
    pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
        self.limit = Some(v.into());
        self
    }
}

/// The result of [DescribeLogStreamsRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DescribeLogStreamsResponse {
    pub log_streams: Option<Vec<LogStream>>,
    pub next_token: Option<String>,
}

/// Lists the metric filters of a log group.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DescribeMetricFiltersRequest {
    pub log_group_name: Option<String>,
    pub filter_name_prefix: Option<String>,
    pub next_token: Option<String>,
    pub limit: Option<i32>,
}

impl DescribeMetricFiltersRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [log_group_name][Self::log_group_name].
    pub fn set_log_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_group_name = Some(v.into());
        self
    }

    /// Sets the value of [filter_name_prefix][Self::filter_name_prefix].
    pub fn set_filter_name_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.filter_name_prefix = Some(v.into());
        self
    }

    /// Sets the value of [next_token][Self::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }

    /// Sets the value of [limit][Self::limit].
    pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
        self.limit = Some(v.into());
        self
    }
}

/// The result of [DescribeMetricFiltersRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DescribeMetricFiltersResponse {
    pub metric_filters: Option<Vec<MetricFilter>>,
    pub next_token: Option<String>,
}

/// Lists the subscription filters of a log group.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DescribeSubscriptionFiltersRequest {
    pub log_group_name: Option<String>,
    pub filter_name_prefix: Option<String>,
    pub next_token: Option<String>,
    pub limit: Option<i32>,
}

impl DescribeSubscriptionFiltersRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [log_group_name][Self::log_group_name].
    pub fn set_log_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_group_name = Some(v.into());
        self
    }

    /// Sets the value of [filter_name_prefix][Self::filter_name_prefix].
    pub fn set_filter_name_prefix<T: Into<String>>(mut self, v: T) -> Self {
        self.filter_name_prefix = Some(v.into());
        self
    }

    /// Sets the value of [next_token][Self::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }

    /// Sets the value of [limit][Self::limit].
    pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
        self.limit = Some(v.into());
        self
    }
}

/// The result of [DescribeSubscriptionFiltersRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DescribeSubscriptionFiltersResponse {
    pub subscription_filters: Option<Vec<SubscriptionFilter>>,
    pub next_token: Option<String>,
}

/// Searches the log events of a log group.
///
/// The search may stop before all the streams are searched, use
/// `next_token` to continue it.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FilterLogEventsRequest {
    pub log_group_name: Option<String>,

    /// Search only these streams, all the streams if absent.
    pub log_stream_names: Option<Vec<String>>,

    pub start_time: Option<i64>,

    pub end_time: Option<i64>,

    pub filter_pattern: Option<String>,

    pub next_token: Option<String>,

    pub limit: Option<i32>,

    /// Interleave the events from all the streams.
    pub interleaved: Option<bool>,
}

impl FilterLogEventsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [log_group_name][Self::log_group_name].
    pub fn set_log_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_group_name = Some(v.into());
        self
    }

    /// Sets the value of [log_stream_names][Self::log_stream_names].
    pub fn set_log_stream_names<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.log_stream_names = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [start_time][Self::start_time].
    pub fn set_start_time<T: Into<i64>>(mut self, v: T) -> Self {
        self.start_time = Some(v.into());
        self
    }

    /// Sets the value of [end_time][Self::end_time].
    pub fn set_end_time<T: Into<i64>>(mut self, v: T) -> Self {
        self.end_time = Some(v.into());
        self
    }

    /// Sets the value of [filter_pattern][Self::filter_pattern].
    pub fn set_filter_pattern<T: Into<String>>(mut self, v: T) -> Self {
        self.filter_pattern = Some(v.into());
        self
    }

    /// Sets the value of [next_token][Self::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }

    /// Sets the value of [limit][Self::limit].
    pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
        self.limit = Some(v.into());
        self
    }

    /// Sets the value of [interleaved][Self::interleaved].
    pub fn set_interleaved<T: Into<bool>>(mut self, v: T) -> Self {
        self.interleaved = Some(v.into());
        self
    }
}

/// The result of [FilterLogEventsRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FilterLogEventsResponse {
    pub events: Option<Vec<FilteredLogEvent>>,
    pub searched_log_streams: Option<Vec<SearchedLogStream>>,
    pub next_token: Option<String>,
}

/// Reads the log events of a single log stream.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetLogEventsRequest {
    pub log_group_name: Option<String>,

    pub log_stream_name: Option<String>,

    pub start_time: Option<i64>,

    pub end_time: Option<i64>,

    pub next_token: Option<String>,

    pub limit: Option<i32>,

    /// Return the oldest events first.
    pub start_from_head: Option<bool>,
}

impl GetLogEventsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [log_group_name][Self::log_group_name].
    pub fn set_log_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_group_name = Some(v.into());
        self
    }

    /// Sets the value of [log_stream_name][Self::log_stream_name].
    pub fn set_log_stream_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_stream_name = Some(v.into());
        self
    }

    /// Sets the value of [start_time][Self::start_time].
    pub fn set_start_time<T: Into<i64>>(mut self, v: T) -> Self {
        self.start_time = Some(v.into());
        self
    }

    /// Sets the value of [end_time][Self::end_time].
    pub fn set_end_time<T: Into<i64>>(mut self, v: T) -> Self {
        self.end_time = Some(v.into());
        self
    }

    /// Sets the value of [next_token][Self::next_token].
    pub fn set_next_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_token = Some(v.into());
        self
    }

    /// Sets the value of [limit][Self::limit].
    pub fn set_limit<T: Into<i32>>(mut self, v: T) -> Self {
        self.limit = Some(v.into());
        self
    }

    /// Sets the value of [start_from_head][Self::start_from_head].
    pub fn set_start_from_head<T: Into<bool>>(mut self, v: T) -> Self {
        self.start_from_head = Some(v.into());
        self
    }
}

/// The result of [GetLogEventsRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetLogEventsResponse {
    pub events: Option<Vec<OutputLogEvent>>,
    pub next_forward_token: Option<String>,
    pub next_backward_token: Option<String>,
}

/// Creates or updates a destination.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PutDestinationRequest {
    pub destination_name: Option<String>,
    pub target_arn: Option<String>,
    pub role_arn: Option<String>,
}

impl PutDestinationRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [destination_name][Self::destination_name].
    pub fn set_destination_name<T: Into<String>>(mut self, v: T) -> Self {
        self.destination_name = Some(v.into());
        self
    }

    /// Sets the value of [target_arn][Self::target_arn].
    pub fn set_target_arn<T: Into<String>>(mut self, v: T) -> Self {
        self.target_arn = Some(v.into());
        self
    }

    /// Sets the value of [role_arn][Self::role_arn].
    pub fn set_role_arn<T: Into<String>>(mut self, v: T) -> Self {
        self.role_arn = Some(v.into());
        self
    }
}

/// The result of [PutDestinationRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PutDestinationResponse {
    pub destination: Option<Destination>,
}

/// Sets the access policy of a destination.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PutDestinationPolicyRequest {
    pub destination_name: Option<String>,
    pub access_policy: Option<String>,
}

impl PutDestinationPolicyRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [destination_name][Self::destination_name].
    pub fn set_destination_name<T: Into<String>>(mut self, v: T) -> Self {
        self.destination_name = Some(v.into());
        self
    }

    /// Sets the value of [access_policy][Self::access_policy].
    pub fn set_access_policy<T: Into<String>>(mut self, v: T) -> Self {
        self.access_policy = Some(v.into());
        self
    }
}

/// Uploads a batch of log events to a log stream.
///
/// The events must be in chronological order. Each call, except the first one
/// for a new stream, must include the `sequence_token` returned by the previous
/// call.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PutLogEventsRequest {
    pub log_group_name: Option<String>,
    pub log_stream_name: Option<String>,
    pub log_events: Option<Vec<InputLogEvent>>,
    pub sequence_token: Option<String>,
}

impl PutLogEventsRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [log_group_name][Self::log_group_name].
    pub fn set_log_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_group_name = Some(v.into());
        self
    }

    /// Sets the value of [log_stream_name][Self::log_stream_name].
    pub fn set_log_stream_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_stream_name = Some(v.into());
        self
    }

    /// Sets the value of [log_events][Self::log_events].
    pub fn set_log_events<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<InputLogEvent>,
    {
        self.log_events = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }

    /// Sets the value of [sequence_token][Self::sequence_token].
    pub fn set_sequence_token<T: Into<String>>(mut self, v: T) -> Self {
        self.sequence_token = Some(v.into());
        self
    }
}

/// The result of [PutLogEventsRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PutLogEventsResponse {
    pub next_sequence_token: Option<String>,
    pub rejected_log_events_info: Option<RejectedLogEventsInfo>,
}

/// Creates or updates a metric filter.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PutMetricFilterRequest {
    pub log_group_name: Option<String>,
    pub filter_name: Option<String>,
    pub filter_pattern: Option<String>,
    pub metric_transformations: Option<Vec<MetricTransformation>>,
}

impl PutMetricFilterRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [log_group_name][Self::log_group_name].
    pub fn set_log_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_group_name = Some(v.into());
        self
    }

    /// Sets the value of [filter_name][Self::filter_name].
    pub fn set_filter_name<T: Into<String>>(mut self, v: T) -> Self {
        self.filter_name = Some(v.into());
        self
    }

    /// Sets the value of [filter_pattern][Self::filter_pattern].
    pub fn set_filter_pattern<T: Into<String>>(mut self, v: T) -> Self {
        self.filter_pattern = Some(v.into());
        self
    }

    /// Sets the value of [metric_transformations][Self::metric_transformations].
    pub fn set_metric_transformations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<MetricTransformation>,
    {
        self.metric_transformations = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// Sets the number of days to retain the events of a log group.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PutRetentionPolicyRequest {
    pub log_group_name: Option<String>,
    pub retention_in_days: Option<i32>,
}

impl PutRetentionPolicyRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [log_group_name][Self::log_group_name].
    pub fn set_log_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_group_name = Some(v.into());
        self
    }

    /// Sets the value of [retention_in_days][Self::retention_in_days].
    pub fn set_retention_in_days<T: Into<i32>>(mut self, v: T) -> Self {
        self.retention_in_days = Some(v.into());
        self
    }
}

/// Creates or updates a subscription filter.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PutSubscriptionFilterRequest {
    pub log_group_name: Option<String>,

    pub filter_name: Option<String>,

    pub filter_pattern: Option<String>,

    pub destination_arn: Option<String>,

    /// Not used for cross-account destinations.
    pub role_arn: Option<String>,
}

impl PutSubscriptionFilterRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [log_group_name][Self::log_group_name].
    pub fn set_log_group_name<T: Into<String>>(mut self, v: T) -> Self {
        self.log_group_name = Some(v.into());
        self
    }

    /// Sets the value of [filter_name][Self::filter_name].
    pub fn set_filter_name<T: Into<String>>(mut self, v: T) -> Self {
        self.filter_name = Some(v.into());
        self
    }

    /// Sets the value of [filter_pattern][Self::filter_pattern].
    pub fn set_filter_pattern<T: Into<String>>(mut self, v: T) -> Self {
        self.filter_pattern = Some(v.into());
        self
    }

    /// Sets the value of [destination_arn][Self::destination_arn].
    pub fn set_destination_arn<T: Into<String>>(mut self, v: T) -> Self {
        self.destination_arn = Some(v.into());
        self
    }

    /// Sets the value of [role_arn][Self::role_arn].
    pub fn set_role_arn<T: Into<String>>(mut self, v: T) -> Self {
        self.role_arn = Some(v.into());
        self
    }
}

/// Tests a filter pattern against sample messages.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TestMetricFilterRequest {
    pub filter_pattern: Option<String>,
    pub log_event_messages: Option<Vec<String>>,
}

impl TestMetricFilterRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the value of [filter_pattern][Self::filter_pattern].
    pub fn set_filter_pattern<T: Into<String>>(mut self, v: T) -> Self {
        self.filter_pattern = Some(v.into());
        self
    }

    /// Sets the value of [log_event_messages][Self::log_event_messages].
    pub fn set_log_event_messages<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.log_event_messages = Some(v.into_iter().map(|i| i.into()).collect());
        self
    }
}

/// The result of [TestMetricFilterRequest].
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TestMetricFilterResponse {
    pub matches: Option<Vec<MetricFilterMatchRecord>>,
}
