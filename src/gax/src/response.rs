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

//! Successful responses with their HTTP metadata.
//!
//! `send()` returns only the decoded body. `send_with_response()` returns a
//! [Response], which also carries the status, the headers, and the number of
//! retries the call needed.
//!
//! # Example
//! ```
//! # use nimbus_gax::response::{Parts, Response};
//! #[derive(Debug, Default)]
//! struct LogGroup { name: String }
//!
//! // A canned response, as a mock client would return it.
//! let response = Response::from_parts(
//!     Parts::new().set_retry_count(1),
//!     LogGroup { name: "app".into() },
//! );
//! assert_eq!(response.retry_count(), 1);
//! assert_eq!(response.into_body().name, "app");
//! ```

use http::{HeaderMap, HeaderValue};

const REQUEST_ID_HEADERS: [&str; 2] = ["x-nimbus-request-id", "x-request-id"];

/// A decoded response body and its metadata.
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Wraps `body` with a 200 status, no headers, and no retries.
    pub fn from(body: T) -> Self {
        Self::from_parts(Parts::default(), body)
    }

    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    pub fn status(&self) -> u16 {
        self.parts.status
    }

    pub fn headers(&self) -> &HeaderMap<HeaderValue> {
        &self.parts.headers
    }

    /// The id the service assigned to this request, for support cases.
    ///
    /// ```
    /// # use nimbus_gax::response::{Parts, Response};
    /// let mut headers = http::HeaderMap::new();
    /// headers.insert("x-nimbus-request-id", http::HeaderValue::from_static("req-42"));
    /// let response = Response::from_parts(Parts::new().set_headers(headers), ());
    /// assert_eq!(response.request_id(), Some("req-42"));
    /// ```
    pub fn request_id(&self) -> Option<&str> {
        REQUEST_ID_HEADERS
            .iter()
            .find_map(|name| self.parts.headers.get(*name))
            .and_then(|v| v.to_str().ok())
    }

    /// Resends before the call succeeded. Zero if the first attempt did.
    pub fn retry_count(&self) -> u32 {
        self.parts.retry_count
    }

    pub fn body(&self) -> &T {
        &self.body
    }

    pub fn into_body(self) -> T {
        self.body
    }

    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }

    /// Replaces the body with `f(body)`, keeping the metadata.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Response<U> {
        let (parts, body) = self.into_parts();
        Response::from_parts(parts, f(body))
    }
}

/// The metadata of a [Response].
#[derive(Clone, Debug)]
#[non_exhaustive]
pub struct Parts {
    pub status: u16,
    pub headers: HeaderMap<HeaderValue>,
    pub retry_count: u32,
}

impl Default for Parts {
    fn default() -> Self {
        Self {
            status: 200,
            headers: HeaderMap::new(),
            retry_count: 0,
        }
    }
}

impl Parts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(mut self, v: u16) -> Self {
        self.status = v;
        self
    }

    pub fn set_headers<V: Into<HeaderMap>>(mut self, v: V) -> Self {
        self.headers = v.into();
        self
    }

    pub fn set_retry_count(mut self, v: u32) -> Self {
        self.retry_count = v;
        self
    }
}
