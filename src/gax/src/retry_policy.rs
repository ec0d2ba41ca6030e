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

//! Defines traits for retry policies and some common implementations.
//!
//! The client libraries automatically retry requests when they fail due to
//! transient errors. The default policy retries transport errors, timeouts,
//! and service errors classified as retryable by the client's
//! [ErrorTable][crate::error_table::ErrorTable], up to three attempts in
//! total.
//!
//! Applications may override the default behavior, for example, to allow more
//! attempts, to limit the total time spent in the retry loop, or to disable
//! retries.
//!
//! # Example
//! ```
//! # use nimbus_gax::retry_policy::*;
//! use std::time::Duration;
//! let policy = StandardRetry
//!     .with_attempt_limit(5)
//!     .with_time_limit(Duration::from_secs(30));
//! ```

use crate::error::Error;
use crate::retry_result::RetryResult;
use crate::retry_result::ThrottleResult;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// The number of attempts, including the initial attempt, in the default
/// retry policy.
pub const DEFAULT_ATTEMPT_LIMIT: u32 = 3;

/// Determines how errors are handled in the retry loop.
///
/// Implementations of this trait determine if errors are retryable, and for
/// how long the retry loop may continue.
pub trait RetryPolicy: Send + Sync + std::fmt::Debug {
    /// Query the retry policy after an error.
    ///
    /// # Parameters
    /// * `loop_start` - when the retry loop started.
    /// * `attempt_count` - the number of attempts. This includes the initial
    ///   attempt. This method called after the first attempt, so the
    ///   value is always non-zero.
    /// * `idempotent` - if `true` assume the operation is idempotent.
    /// * `error` - the last error when attempting the request.
    fn on_error(
        &self,
        loop_start: Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult;

    /// Query the retry policy after a retry attempt is throttled.
    ///
    /// Retry attempts may be throttled before they are even sent out. The retry
    /// policy may choose to treat these as normal errors for the purposes of
    /// limiting the number of attempts, or the total time in the loop.
    fn on_throttle(
        &self,
        _loop_start: Instant,
        _attempt_count: u32,
        error: Error,
    ) -> ThrottleResult {
        ThrottleResult::Continue(error)
    }

    /// The remaining time in the retry policy.
    ///
    /// For policies based on time, this returns the remaining time in the
    /// policy. The retry loop can use this value to adjust the next attempt
    /// timeout. For policies that are not time based this returns `None`.
    fn remaining_time(&self, _loop_start: Instant, _attempt_count: u32) -> Option<Duration> {
        None
    }
}

/// A helper type to use [RetryPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct RetryPolicyArg(Arc<dyn RetryPolicy>);

impl<T> std::convert::From<T> for RetryPolicyArg
where
    T: RetryPolicy + 'static,
{
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl std::convert::From<Arc<dyn RetryPolicy>> for RetryPolicyArg {
    fn from(value: Arc<dyn RetryPolicy>) -> Self {
        Self(value)
    }
}

impl From<RetryPolicyArg> for Arc<dyn RetryPolicy> {
    fn from(value: RetryPolicyArg) -> Arc<dyn RetryPolicy> {
        value.0
    }
}

/// Extension trait for [`RetryPolicy`]
pub trait RetryPolicyExt: RetryPolicy + Sized {
    /// Decorate a [`RetryPolicy`] to limit the total elapsed time in the retry
    /// loop.
    ///
    /// While the time spent in the retry loop (including time in backoff) is
    /// less than the prescribed duration the `on_error()` method returns the
    /// results of the inner policy. After that time it returns
    /// [Exhausted][RetryResult::Exhausted] if the inner policy returns
    /// [Continue][RetryResult::Continue].
    ///
    /// # Example
    /// ```
    /// # use nimbus_gax::retry_policy::*;
    /// use std::time::{Duration, Instant};
    /// let policy = StandardRetry.with_time_limit(Duration::from_secs(10));
    /// let start = Instant::now() - Duration::from_secs(20);
    /// assert!(policy.on_error(start, 1, true, transient_error()).is_exhausted());
    ///
    /// use nimbus_gax::error::Error;
    /// fn transient_error() -> Error { Error::io("simulated") }
    /// ```
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Decorate a [RetryPolicy] to limit the number of attempts.
    ///
    /// The limit counts all the attempts, including the initial attempt. With
    /// a limit of `N` the retry loop sends at most `N` requests.
    ///
    /// # Example
    /// ```
    /// # use nimbus_gax::retry_policy::*;
    /// use std::time::Instant;
    /// let policy = StandardRetry.with_attempt_limit(3);
    /// assert!(policy.on_error(Instant::now(), 1, true, transient_error()).is_continue());
    /// assert!(policy.on_error(Instant::now(), 2, true, transient_error()).is_continue());
    /// assert!(policy.on_error(Instant::now(), 3, true, transient_error()).is_exhausted());
    ///
    /// use nimbus_gax::error::Error;
    /// fn transient_error() -> Error { Error::io("simulated") }
    /// ```
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: RetryPolicy> RetryPolicyExt for T {}

/// The default classifier for errors in the retry loop.
///
/// This policy retries:
/// * transport errors, such as connection refused, or a connection closed
///   before the response completed,
/// * timeouts,
/// * service errors classified as retryable, that is, 5xx errors, throttling
///   errors, and well-known transient error codes.
///
/// All other errors are permanent. This includes errors signing the request,
/// errors serializing the request, and errors parsing a successful response.
///
/// This policy does not limit the number of attempts, it should be decorated
/// with [RetryPolicyExt::with_attempt_limit] or
/// [RetryPolicyExt::with_time_limit].
///
/// # Example
/// ```
/// # use nimbus_gax::retry_policy::*;
/// # use nimbus_gax::error::{Error, ServiceError};
/// use std::time::Instant;
/// let policy = StandardRetry;
/// assert!(policy.on_error(Instant::now(), 1, true, Error::io("simulated")).is_continue());
/// let denied = Error::service(ServiceError::new().set_error_code("AccessDenied").set_http_status(403));
/// assert!(policy.on_error(Instant::now(), 1, true, denied).is_permanent());
/// ```
#[derive(Clone, Debug)]
pub struct StandardRetry;

impl RetryPolicy for StandardRetry {
    fn on_error(
        &self,
        _loop_start: Instant,
        _attempt_count: u32,
        _idempotent: bool,
        error: Error,
    ) -> RetryResult {
        if error.is_transport() || error.is_timeout() {
            return RetryResult::Continue(error);
        }
        match error.service_error() {
            Some(e) if e.is_retryable() => RetryResult::Continue(error),
            _ => RetryResult::Permanent(error),
        }
    }
}

/// A retry policy that never retries.
///
/// Each request is attempted once, and the first error is returned to the
/// application.
///
/// # Example
/// ```
/// # use nimbus_gax::retry_policy::*;
/// # use nimbus_gax::error::Error;
/// use std::time::Instant;
/// let policy = NeverRetry;
/// assert!(policy.on_error(Instant::now(), 1, true, Error::io("simulated")).is_exhausted());
/// ```
#[derive(Clone, Debug)]
pub struct NeverRetry;

impl RetryPolicy for NeverRetry {
    fn on_error(
        &self,
        _loop_start: Instant,
        _attempt_count: u32,
        _idempotent: bool,
        error: Error,
    ) -> RetryResult {
        RetryResult::Exhausted(error)
    }
}

/// A retry policy that retries all errors.
///
/// This policy must be decorated to limit the number of retry attempts or the
/// duration of the retry loop. It is mostly useful in tests, and for
/// applications that classify errors themselves.
#[derive(Clone, Debug)]
pub struct AlwaysRetry;

impl RetryPolicy for AlwaysRetry {
    fn on_error(
        &self,
        _loop_start: Instant,
        _attempt_count: u32,
        _idempotent: bool,
        error: Error,
    ) -> RetryResult {
        RetryResult::Continue(error)
    }
}

/// A retry policy decorator that limits the total time in the retry loop.
///
/// This policy decorates an inner policy and limits the duration of retry
/// loops. While the time spent in the retry loop (including time in backoff)
/// is less than the prescribed duration the `on_error()` method returns the
/// results of the inner policy. After that time it returns
/// [Exhausted][RetryResult::Exhausted] if the inner policy returns
/// [Continue][RetryResult::Continue].
///
/// The `remaining_time()` function returns the remaining time. This is always
/// [Duration::ZERO] once or after the policy's expiration time is reached.
///
/// # Parameters
/// * `P` - the inner retry policy, defaults to [StandardRetry].
#[derive(Debug)]
pub struct LimitedElapsedTime<P = StandardRetry>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_duration: Duration,
}

impl LimitedElapsedTime {
    /// Creates a new instance, with the default inner policy.
    pub fn new(maximum_duration: Duration) -> Self {
        Self {
            inner: StandardRetry,
            maximum_duration,
        }
    }
}

impl<P> LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }

    fn error_if_exhausted(&self, loop_start: Instant, error: Error) -> ThrottleResult {
        let deadline = loop_start + self.maximum_duration;
        let now = tokio::time::Instant::now().into_std();
        if now < deadline {
            ThrottleResult::Continue(error)
        } else {
            ThrottleResult::Exhausted(Error::exhausted(error))
        }
    }
}

impl<P> RetryPolicy for LimitedElapsedTime<P>
where
    P: RetryPolicy + 'static,
{
    fn on_error(
        &self,
        loop_start: Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        match self
            .inner
            .on_error(loop_start, attempt_count, idempotent, error)
        {
            RetryResult::Permanent(e) => RetryResult::Permanent(e),
            RetryResult::Exhausted(e) => RetryResult::Exhausted(e),
            RetryResult::Continue(e) => {
                if tokio::time::Instant::now().into_std() >= loop_start + self.maximum_duration {
                    RetryResult::Exhausted(e)
                } else {
                    RetryResult::Continue(e)
                }
            }
        }
    }

    fn on_throttle(&self, loop_start: Instant, attempt_count: u32, error: Error) -> ThrottleResult {
        match self.inner.on_throttle(loop_start, attempt_count, error) {
            ThrottleResult::Continue(e) => self.error_if_exhausted(loop_start, e),
            ThrottleResult::Exhausted(e) => ThrottleResult::Exhausted(e),
        }
    }

    fn remaining_time(&self, loop_start: Instant, attempt_count: u32) -> Option<Duration> {
        let deadline = loop_start + self.maximum_duration;
        let remaining = deadline.saturating_duration_since(tokio::time::Instant::now().into_std());
        if let Some(inner) = self.inner.remaining_time(loop_start, attempt_count) {
            return Some(std::cmp::min(remaining, inner));
        }
        Some(remaining)
    }
}

/// A retry policy decorator that limits the number of attempts.
///
/// This policy decorates an inner policy and limits the total number of
/// attempts. Note that `on_error()` is not called before the initial
/// (non-retry) attempt. Therefore, setting the maximum number of attempts to 0
/// or 1 results in no retry attempts.
///
/// The policy passes through the results from the inner policy as long as
/// `attempt_count < maximum_attempts`. Once the maximum number of attempts is
/// reached, the policy returns [Exhausted][RetryResult::Exhausted] if the
/// inner policy returns [Continue][RetryResult::Continue].
///
/// # Parameters
/// * `P` - the inner retry policy, defaults to [StandardRetry].
#[derive(Debug)]
pub struct LimitedAttemptCount<P = StandardRetry>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    /// Creates a new instance, with the default inner policy.
    pub fn new(maximum_attempts: u32) -> Self {
        Self {
            inner: StandardRetry,
            maximum_attempts,
        }
    }
}

impl<P> LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P> RetryPolicy for LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    fn on_error(
        &self,
        loop_start: Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        match self
            .inner
            .on_error(loop_start, attempt_count, idempotent, error)
        {
            RetryResult::Permanent(e) => RetryResult::Permanent(e),
            RetryResult::Exhausted(e) => RetryResult::Exhausted(e),
            RetryResult::Continue(e) => {
                if attempt_count >= self.maximum_attempts {
                    RetryResult::Exhausted(e)
                } else {
                    RetryResult::Continue(e)
                }
            }
        }
    }

    fn on_throttle(&self, loop_start: Instant, attempt_count: u32, error: Error) -> ThrottleResult {
        if attempt_count >= self.maximum_attempts {
            return ThrottleResult::Exhausted(Error::exhausted(error));
        }
        self.inner.on_throttle(loop_start, attempt_count, error)
    }

    fn remaining_time(&self, loop_start: Instant, attempt_count: u32) -> Option<Duration> {
        self.inner.remaining_time(loop_start, attempt_count)
    }
}
