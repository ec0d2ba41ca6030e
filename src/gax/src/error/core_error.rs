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

use super::CredentialsError;
use super::ServiceError;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The failure side of every client call.
///
/// A call can fail before anything is sent (the request cannot be bound,
/// serialized, or signed), while talking to the service (transport errors and
/// timeouts), because the service rejected it (a [ServiceError]), or because
/// the successful response could not be decoded. When retries are involved
/// the retry policy may give up, the last failure is then the
/// [source][std::error::Error::source] of an [exhausted][Error::is_exhausted]
/// error.
///
/// Use the `is_*()` predicates to branch on the failure category, and
/// [service_error][Error::service_error] to read the code, message, and
/// request id the service returned.
///
/// # Example
/// ```
/// use nimbus_gax::error::{Error, ServiceError};
/// fn describe(result: Result<(), Error>) -> String {
///     match result {
///         Ok(()) => "ok".into(),
///         Err(e) if e.is_timeout() => "timed out".into(),
///         Err(e) => match e.service_error() {
///             Some(s) if s.is_throttling() => format!("slow down: {}", s.error_code()),
///             Some(s) => format!("rejected: {}", s.error_code()),
///             None => format!("failed: {e}"),
///         },
///     }
/// }
/// let throttled = ServiceError::new()
///     .set_error_code("ThrottlingException")
///     .set_http_status(400)
///     .set_throttling(true);
/// assert_eq!(describe(Err(Error::service(throttled))), "slow down: ThrottlingException");
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
    retry_count: u32,
}

impl Error {
    fn with_source<T: Into<BoxError>>(kind: ErrorKind, source: T) -> Self {
        Self {
            kind,
            source: Some(source.into()),
            retry_count: 0,
        }
    }

    fn from_details(details: ServiceDetails) -> Self {
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
            retry_count: 0,
        }
    }

    /// Wraps an error reported by the service.
    ///
    /// ```
    /// use nimbus_gax::error::{Error, ServiceError};
    /// let denied = ServiceError::new().set_error_code("AccessDenied").set_http_status(403);
    /// let error = Error::service(denied.clone());
    /// assert_eq!(error.service_error(), Some(&denied));
    /// assert_eq!(error.http_status_code(), Some(403));
    /// ```
    pub fn service(error: ServiceError) -> Self {
        Self::from_details(ServiceDetails {
            error,
            headers: None,
            payload: None,
        })
    }

    /// Wraps an error reported by the service, keeping the raw response
    /// headers and body.
    #[doc(hidden)]
    pub fn service_with_http_metadata(
        error: ServiceError,
        headers: Option<HeaderMap>,
        payload: Option<bytes::Bytes>,
    ) -> Self {
        Self::from_details(ServiceDetails {
            error,
            headers,
            payload,
        })
    }

    /// The error reported by the service, if the service rejected the request.
    ///
    /// Responses without a parseable error body still produce a
    /// [ServiceError], its code is derived from the HTTP status line.
    pub fn service_error(&self) -> Option<&ServiceError> {
        self.details().map(|d| &d.error)
    }

    /// The attempt, or the whole call, ran out of time.
    ///
    /// The service may or may not have processed the request.
    ///
    /// ```
    /// use nimbus_gax::error::Error;
    /// use std::error::Error as _;
    /// let error = Error::timeout("attempt timeout of 2s");
    /// assert!(error.is_timeout() && error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Timeout, source)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// The retry policy gave up. The source is the last failure.
    ///
    /// ```
    /// use nimbus_gax::error::Error;
    /// use std::error::Error as _;
    /// let error = Error::exhausted(Error::io("connection reset"));
    /// let last = error.source().and_then(|e| e.downcast_ref::<Error>());
    /// assert!(last.is_some_and(Error::is_transport));
    /// ```
    pub fn exhausted<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Exhausted, source)
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind, ErrorKind::Exhausted)
    }

    #[doc(hidden)]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Deserialization, source)
    }

    /// The service accepted the request, but its response could not be
    /// decoded. Retrying does not help.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    #[doc(hidden)]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Serialization, source)
    }

    /// The request could not be encoded. Nothing was sent.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    #[doc(hidden)]
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Binding, source)
    }

    /// A field that belongs in the request path, such as a bucket name, is
    /// missing or empty. Nothing was sent.
    pub fn is_binding(&self) -> bool {
        matches!(self.kind, ErrorKind::Binding)
    }

    #[doc(hidden)]
    pub fn authentication(source: CredentialsError) -> Self {
        Self::with_source(ErrorKind::Authentication, source)
    }

    /// The credentials could not be loaded, or the request could not be
    /// signed. Nothing was sent, and the call is not retried.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    #[doc(hidden)]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Transport, source)
    }

    /// The connection failed before a response status arrived. These failures
    /// are retryable.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind, ErrorKind::Transport)
    }

    /// Failures outside the other categories, for example a worker pool that
    /// shut down with the request still queued.
    #[doc(hidden)]
    pub fn other<T: Into<BoxError>>(source: T) -> Self {
        Self::with_source(ErrorKind::Other, source)
    }

    /// The HTTP status of the service response.
    pub fn http_status_code(&self) -> Option<u16> {
        self.service_error().map(ServiceError::http_status)
    }

    /// The headers of the service response.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        self.details().and_then(|d| d.headers.as_ref())
    }

    /// The body of the service response.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        self.details().and_then(|d| d.payload.as_ref())
    }

    /// How many times the request was resent before this error. Zero when the
    /// first attempt failed, or when nothing was sent.
    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    #[doc(hidden)]
    pub fn with_retry_count(mut self, v: u32) -> Self {
        self.retry_count = v;
        self
    }

    fn details(&self) -> Option<&ServiceDetails> {
        match &self.kind {
            ErrorKind::Service(d) => Some(d),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(e) = self.service_error() {
            return write!(
                f,
                "service error {} (HTTP {}): {}",
                e.error_code(),
                e.http_status(),
                e.message()
            );
        }
        let what = match self.kind {
            ErrorKind::Binding => "missing path parameter",
            ErrorKind::Serialization => "cannot encode the request",
            ErrorKind::Deserialization => "cannot decode the response",
            ErrorKind::Authentication => "cannot sign the request",
            ErrorKind::Timeout => "deadline exceeded",
            ErrorKind::Exhausted => "retry policy exhausted",
            ErrorKind::Transport => "transport error",
            ErrorKind::Service(_) | ErrorKind::Other => "request failed",
        };
        match &self.source {
            Some(e) => write!(f, "{what}: {e}"),
            None => f.write_str(what),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn StdError + 'static))
    }
}

#[derive(Debug)]
enum ErrorKind {
    Binding,
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Exhausted,
    Transport,
    Service(Box<ServiceDetails>),
    Other,
}

#[derive(Debug)]
struct ServiceDetails {
    error: ServiceError,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}
