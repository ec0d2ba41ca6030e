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

//! Tracing spans for requests.
//!
//! Every call runs inside a `dispatch` span. When tracing is enabled in the
//! client configuration, each attempt also runs inside an `http_request` span,
//! with attributes following the OpenTelemetry semantic conventions for HTTP
//! client spans.

use tracing::{Span, field};

pub(crate) fn dispatch_span(service: &'static str, operation: &'static str) -> Span {
    tracing::info_span!("dispatch", service, operation)
}

pub(crate) fn http_request_span(method: &http::Method, url: &url::Url, resend_count: u32) -> Span {
    tracing::info_span!(
        "http_request",
        http.request.method = method.as_str(),
        url.full = url.as_str(),
        server.address = url.host_str().unwrap_or_default(),
        http.request.resend_count = resend_count,
        http.response.status_code = field::Empty,
    )
}

pub(crate) fn record_status(span: &Span, status: u16) {
    span.record("http.response.status_code", status);
}
