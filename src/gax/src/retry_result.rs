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

//! Decisions returned by retry policies.
//!
//! Only applications that write their own
//! [RetryPolicy][crate::retry_policy::RetryPolicy] need these types. Every
//! variant carries the error, so a policy that wraps another can inspect the
//! inner decision and still return the original error.

use crate::error::Error;

/// What the retry loop does after a failed attempt.
///
/// # Example
/// ```
/// # use nimbus_gax::error::Error;
/// # use nimbus_gax::retry_policy::RetryPolicy;
/// # use nimbus_gax::retry_result::RetryResult;
/// use std::time::Instant;
///
/// /// Retries throttling errors only, up to 10 attempts.
/// #[derive(Debug)]
/// struct ThrottlingOnly;
/// impl RetryPolicy for ThrottlingOnly {
///     fn on_error(&self, _: Instant, attempts: u32, _: bool, error: Error) -> RetryResult {
///         let throttled = error.service_error().is_some_and(|e| e.is_throttling());
///         match (throttled, attempts) {
///             (false, _) => RetryResult::Permanent(error),
///             (true, n) if n >= 10 => RetryResult::Exhausted(error),
///             (true, _) => RetryResult::Continue(error),
///         }
///     }
/// }
/// ```
#[derive(Debug)]
pub enum RetryResult {
    /// The error cannot be fixed by retrying. The loop returns it.
    Permanent(Error),
    /// The error could be retried, but the policy ran out of attempts or time.
    Exhausted(Error),
    /// Try again after the backoff delay.
    Continue(Error),
}

impl RetryResult {
    pub fn is_permanent(&self) -> bool {
        matches!(self, Self::Permanent(_))
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted(_))
    }

    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }

    /// The error that triggered this decision.
    pub fn error(&self) -> &Error {
        match self {
            Self::Permanent(e) | Self::Exhausted(e) | Self::Continue(e) => e,
        }
    }

    /// Consumes the decision and returns its error.
    pub fn into_error(self) -> Error {
        match self {
            Self::Permanent(e) | Self::Exhausted(e) | Self::Continue(e) => e,
        }
    }
}

/// What the retry loop does when the
/// [RetryThrottler][crate::retry_throttler::RetryThrottler] skips an attempt.
///
/// A skipped attempt is not sent. The policy decides whether the loop waits
/// for another chance or gives up with the last error.
#[derive(Debug)]
pub enum ThrottleResult {
    /// Give up and return the error.
    Exhausted(Error),
    /// Back off and consult the throttler again.
    Continue(Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;

    fn denied() -> Error {
        Error::service(
            ServiceError::new()
                .set_error_code("AccessDeniedException")
                .set_http_status(403),
        )
    }

    fn throttled() -> Error {
        Error::service(
            ServiceError::new()
                .set_error_code("ThrottlingException")
                .set_http_status(400)
                .set_retryable(true)
                .set_throttling(true),
        )
    }

    #[test]
    fn predicates() {
        let flow = RetryResult::Permanent(denied());
        assert!(flow.is_permanent() && !flow.is_exhausted() && !flow.is_continue());
        let flow = RetryResult::Exhausted(throttled());
        assert!(!flow.is_permanent() && flow.is_exhausted() && !flow.is_continue());
        let flow = RetryResult::Continue(throttled());
        assert!(!flow.is_permanent() && !flow.is_exhausted() && flow.is_continue());
    }

    #[test]
    fn error_accessors() {
        let flow = RetryResult::Continue(throttled());
        let code = flow
            .error()
            .service_error()
            .map(|e| e.error_code().to_string());
        assert_eq!(code.as_deref(), Some("ThrottlingException"));

        let error = RetryResult::Permanent(denied()).into_error();
        assert_eq!(error.http_status_code(), Some(403));
    }
}
