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

//! Not part of the public API, subject to change without notice.
//!
//! The retry loop shared by all the service clients.

use crate::Result;
use crate::backoff_policy::BackoffPolicy;
use crate::error::Error;
use crate::options::RequestOptions;
use crate::retry_policy::RetryPolicy;
use crate::retry_result::{RetryResult, ThrottleResult};
use crate::retry_throttler::{RetryThrottler, SharedRetryThrottler};
use std::sync::{Arc, MutexGuard, PoisonError};
use std::time::Duration;

/// Runs [retry_loop_with_callback] without a callback.
pub async fn retry_loop<F, S, T>(
    inner: F,
    sleep: S,
    idempotent: bool,
    retry_throttler: SharedRetryThrottler,
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
) -> Result<T>
where
    F: AsyncFnMut(Option<Duration>) -> Result<T> + Send,
    S: AsyncFn(Duration) -> () + Send,
{
    retry_loop_with_callback(
        inner,
        sleep,
        idempotent,
        retry_throttler,
        retry_policy,
        backoff_policy,
        |_, _, _| {},
    )
    .await
}

/// Calls `inner` until it succeeds or the retry policy gives up.
///
/// Each call receives the time left in the retry policy, if the policy has a
/// deadline. After a retryable error the loop sleeps for the backoff delay,
/// then asks the throttler for permission to send the next attempt. A refused
/// attempt is reported to [RetryPolicy::on_throttle], and if the policy
/// allows it the loop backs off and asks again.
///
/// The loop does not start a sleep that would end past the policy deadline.
/// It returns an [exhausted][Error::is_exhausted] error wrapping the last
/// failure instead.
///
/// `on_retry` receives the number of attempts so far, the last error, and the
/// delay, right before each sleep.
pub async fn retry_loop_with_callback<F, S, OnRetry, T>(
    mut inner: F,
    sleep: S,
    idempotent: bool,
    retry_throttler: SharedRetryThrottler,
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
    mut on_retry: OnRetry,
) -> Result<T>
where
    F: AsyncFnMut(Option<Duration>) -> Result<T> + Send,
    S: AsyncFn(Duration) -> () + Send,
    OnRetry: FnMut(u32, &Error, Duration) + Send,
{
    let loop_start = tokio::time::Instant::now().into_std();
    let mut attempts = 0_u32;
    loop {
        let remaining = retry_policy.remaining_time(loop_start, attempts);
        attempts += 1;
        let error = match inner(remaining).await {
            Ok(response) => {
                lock(&retry_throttler).on_success();
                return Ok(response);
            }
            Err(e) => e,
        };

        let decision = retry_policy.on_error(loop_start, attempts, idempotent, error);
        lock(&retry_throttler).on_retry_failure(&decision);
        let mut error = match decision {
            RetryResult::Continue(e) => e,
            RetryResult::Permanent(e) | RetryResult::Exhausted(e) => return Err(e),
        };

        loop {
            let delay = backoff_policy.on_failure(loop_start, attempts);
            let remaining = retry_policy.remaining_time(loop_start, attempts);
            if remaining.is_some_and(|r| r < delay) {
                return Err(Error::exhausted(error));
            }
            on_retry(attempts, &error, delay);
            sleep(delay).await;
            if !lock(&retry_throttler).throttle_retry_attempt() {
                break;
            }
            error = match retry_policy.on_throttle(loop_start, attempts, error) {
                ThrottleResult::Continue(e) => e,
                ThrottleResult::Exhausted(e) => return Err(e),
            };
        }
    }
}

// A poisoned throttler still holds usable counters.
fn lock(throttler: &SharedRetryThrottler) -> MutexGuard<'_, dyn RetryThrottler + 'static> {
    throttler.lock().unwrap_or_else(PoisonError::into_inner)
}

/// The timeout for the next attempt: the shorter of the per-attempt timeout
/// and the time left in the retry policy.
pub fn effective_timeout(
    options: &RequestOptions,
    remaining_time: Option<Duration>,
) -> Option<Duration> {
    [options.attempt_timeout(), remaining_time]
        .into_iter()
        .flatten()
        .min()
}
