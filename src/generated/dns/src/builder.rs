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


//! Request builders for each operation in [Dns][crate::client::Dns].

use crate::client::Dns;
use crate::model;

/// The request builder for [Dns::get_health_check_status][crate::client::Dns::get_health_check_status].
pub type GetHealthCheckStatus = gaxi::request_builder::RequestBuilder<
    Dns,
    model::GetHealthCheckStatusRequest,
    model::GetHealthCheckStatusResponse,
>;

/// The request builder for [Dns::get_health_check_last_failure_reason][crate::client::Dns::get_health_check_last_failure_reason].
pub type GetHealthCheckLastFailureReason = gaxi::request_builder::RequestBuilder<
    Dns,
    model::GetHealthCheckLastFailureReasonRequest,
    model::GetHealthCheckLastFailureReasonResponse,
>;
