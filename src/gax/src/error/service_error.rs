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

/// The error details reported by a service.
///
/// Services report errors using a structured body with an error code and a
/// human-readable message. The client library classifies each error code, and
/// each HTTP status, as retryable or not, and as throttling or not, using the
/// client's [ErrorTable][crate::error_table::ErrorTable].
///
/// When the response body does not contain a structured error, for example,
/// because the error was generated by a proxy, the client library synthesizes
/// a `ServiceError` from the HTTP status line.
///
/// # Example
/// ```
/// # use nimbus_gax::error::ServiceError;
/// let error = ServiceError::new()
///     .set_error_code("ThrottlingException")
///     .set_message("Rate exceeded")
///     .set_http_status(400)
///     .set_retryable(true)
///     .set_throttling(true);
/// assert!(error.is_retryable());
/// assert!(error.is_throttling());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct ServiceError {
    error_code: String,
    message: String,
    http_status: u16,
    retryable: bool,
    throttling: bool,
    request_id: Option<String>,
}

impl ServiceError {
    pub fn new() -> Self {
        Self::default()
    }

    /// The error code, e.g., `ResourceNotFoundException` or `NoSuchBucket`.
    pub fn error_code(&self) -> &str {
        &self.error_code
    }

    /// Sets the value of [error_code][ServiceError::error_code].
    pub fn set_error_code<T: Into<String>>(mut self, v: T) -> Self {
        self.error_code = v.into();
        self
    }

    /// A developer-facing description of the error.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Sets the value of [message][ServiceError::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }

    /// The HTTP status code of the response.
    pub fn http_status(&self) -> u16 {
        self.http_status
    }

    /// Sets the value of [http_status][ServiceError::http_status].
    pub fn set_http_status(mut self, v: u16) -> Self {
        self.http_status = v;
        self
    }

    /// If true, the request may succeed if retried.
    pub fn is_retryable(&self) -> bool {
        self.retryable
    }

    /// Sets the value of [retryable][ServiceError::is_retryable].
    pub fn set_retryable(mut self, v: bool) -> Self {
        self.retryable = v;
        self
    }

    /// If true, the service rejected the request because the caller exceeded
    /// some rate or quota.
    pub fn is_throttling(&self) -> bool {
        self.throttling
    }

    /// Sets the value of [throttling][ServiceError::is_throttling].
    pub fn set_throttling(mut self, v: bool) -> Self {
        self.throttling = v;
        self
    }

    /// The request id assigned by the service, useful when contacting support.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Sets the value of [request_id][ServiceError::request_id].
    pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request_id = Some(v.into());
        self
    }

    /// Sets or clears the value of [request_id][ServiceError::request_id].
    pub fn set_or_clear_request_id<T: Into<String>>(mut self, v: Option<T>) -> Self {
        self.request_id = v.map(Into::into);
        self
    }
}
