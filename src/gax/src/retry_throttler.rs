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

//! Client-wide limits on retries.
//!
//! A retry policy looks at one call. When a service is overloaded every call
//! sees retryable errors, and retrying all of them multiplies the load. A
//! [RetryThrottler] sees all the calls made through a client (or several
//! clients, see [SharedRetryThrottler]) and may veto individual retries. A
//! vetoed retry is reported to the retry policy through
//! [on_throttle][crate::retry_policy::RetryPolicy::on_throttle].
//!
//! First attempts are never throttled.
//!
//! # Example
//! ```
//! # use nimbus_gax::retry_throttler::*;
//! use std::sync::{Arc, Mutex};
//! let shared: SharedRetryThrottler = Arc::new(Mutex::new(CircuitBreaker::new(500, 100, 5)?));
//! let adaptive = AdaptiveThrottler::new(1.5)?;
//! # Ok::<(), Error>(())
//! ```

use crate::retry_result::RetryResult;
use std::sync::{Arc, Mutex};

/// Invalid throttler parameters.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("the adaptive throttler factor must be >= 0.0, got {0}")]
    ScalingOutOfRange(f64),
    #[error("the circuit breaker threshold {min} exceeds its capacity {initial}")]
    TooFewMinTokens { min: u64, initial: u64 },
}

/// Decides whether retry attempts may be sent.
pub trait RetryThrottler: Send + Sync + std::fmt::Debug {
    /// Returns `true` to veto the next retry attempt.
    fn throttle_retry_attempt(&self) -> bool;

    /// Records an attempt that failed, with the retry policy's decision.
    fn on_retry_failure(&mut self, flow: &RetryResult);

    /// Records an attempt that succeeded.
    fn on_success(&mut self);
}

/// A throttler shared by reference, possibly between clients.
pub type SharedRetryThrottler = Arc<Mutex<dyn RetryThrottler>>;

/// Accepts a [RetryThrottler] or a [SharedRetryThrottler] in client and
/// request options.
#[derive(Clone, Debug)]
pub struct RetryThrottlerArg(SharedRetryThrottler);

impl<T> From<T> for RetryThrottlerArg
where
    T: RetryThrottler + 'static,
{
    fn from(value: T) -> Self {
        let shared: SharedRetryThrottler = Arc::new(Mutex::new(value));
        Self(shared)
    }
}

impl From<SharedRetryThrottler> for RetryThrottlerArg {
    fn from(value: SharedRetryThrottler) -> Self {
        Self(value)
    }
}

impl From<RetryThrottlerArg> for SharedRetryThrottler {
    fn from(value: RetryThrottlerArg) -> Self {
        value.0
    }
}

/// Vetoes retries at random, more often as the service rejects more work.
///
/// The veto probability is
///
/// ```norust
/// max(0, (requests - factor * accepts) / (requests + 1))
/// ```
///
/// where `requests` counts every completed attempt and `accepts` counts the
/// attempts the service processed, successfully or with a permanent error.
/// A smaller factor vetoes more retries. The default factor is `2.0`.
#[derive(Clone, Debug)]
pub struct AdaptiveThrottler {
    requests: f64,
    accepts: f64,
    factor: f64,
}

impl AdaptiveThrottler {
    /// Fails if `factor` is negative.
    pub fn new(factor: f64) -> Result<Self, Error> {
        if factor < 0.0 {
            return Err(Error::ScalingOutOfRange(factor));
        }
        Ok(Self::clamp(factor))
    }

    /// Treats a negative `factor` as zero.
    pub fn clamp(factor: f64) -> Self {
        Self {
            requests: 0.0,
            accepts: 0.0,
            factor: factor.max(0.0),
        }
    }

    fn veto_probability(&self) -> f64 {
        let excess = self.requests - self.factor * self.accepts;
        (excess / (self.requests + 1.0)).max(0.0)
    }

    // `sample` is drawn uniformly from `[0.0, 1.0]`.
    fn throttle(&self, sample: f64) -> bool {
        sample <= self.veto_probability()
    }
}

impl Default for AdaptiveThrottler {
    fn default() -> Self {
        Self::clamp(2.0)
    }
}

impl RetryThrottler for AdaptiveThrottler {
    fn throttle_retry_attempt(&self) -> bool {
        use rand::Rng;
        self.throttle(rand::rng().random_range(0.0..=1.0))
    }

    fn on_retry_failure(&mut self, flow: &RetryResult) {
        self.requests += 1.0;
        if flow.is_permanent() {
            self.accepts += 1.0;
        }
    }

    fn on_success(&mut self) {
        self.requests += 1.0;
        self.accepts += 1.0;
    }
}

/// Stops all retries while too many attempts fail.
///
/// The breaker holds a token balance, starting full. A retryable failure
/// withdraws `error_cost` tokens, and a timeout withdraws twice that. Each
/// attempt the service processed, successfully or with a permanent error,
/// deposits one token back, up to the capacity. Retries are vetoed while the
/// balance is at or below `min_tokens`.
///
/// The default capacity is 100, the threshold 50, and the error cost 10.
#[derive(Clone, Debug)]
pub struct CircuitBreaker {
    capacity: u64,
    min_tokens: u64,
    balance: u64,
    error_cost: u64,
}

impl CircuitBreaker {
    /// Fails if `min_tokens` exceeds `tokens`.
    pub fn new(tokens: u64, min_tokens: u64, error_cost: u64) -> Result<Self, Error> {
        if min_tokens > tokens {
            return Err(Error::TooFewMinTokens {
                min: min_tokens,
                initial: tokens,
            });
        }
        Ok(Self::clamp(tokens, min_tokens, error_cost))
    }

    /// Lowers `min_tokens` to `tokens` if needed.
    pub fn clamp(tokens: u64, min_tokens: u64, error_cost: u64) -> Self {
        Self {
            capacity: tokens,
            min_tokens: min_tokens.min(tokens),
            balance: tokens,
            error_cost,
        }
    }

    fn deposit(&mut self) {
        self.balance = self.balance.saturating_add(1).min(self.capacity);
    }

    fn withdraw(&mut self, amount: u64) {
        self.balance = self.balance.saturating_sub(amount);
    }
}

impl Default for CircuitBreaker {
    fn default() -> Self {
        Self::clamp(100, 50, 10)
    }
}

impl RetryThrottler for CircuitBreaker {
    fn throttle_retry_attempt(&self) -> bool {
        self.balance <= self.min_tokens
    }

    fn on_retry_failure(&mut self, flow: &RetryResult) {
        match flow {
            RetryResult::Permanent(_) => self.deposit(),
            f if f.error().is_timeout() => self.withdraw(self.error_cost.saturating_mul(2)),
            _ => self.withdraw(self.error_cost),
        }
    }

    fn on_success(&mut self) {
        self.deposit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error as CoreError, ServiceError};

    fn throttled() -> CoreError {
        CoreError::service(
            ServiceError::new()
                .set_error_code("ThrottlingException")
                .set_http_status(400)
                .set_retryable(true)
                .set_throttling(true),
        )
    }

    #[test]
    fn arg_conversions() {
        let shared: SharedRetryThrottler = Arc::new(Mutex::new(CircuitBreaker::default()));
        let back: SharedRetryThrottler = RetryThrottlerArg::from(shared.clone()).into();
        assert!(Arc::ptr_eq(&shared, &back));

        let owned: SharedRetryThrottler =
            RetryThrottlerArg::from(AdaptiveThrottler::default()).into();
        assert!(format!("{owned:?}").contains("AdaptiveThrottler"), "{owned:?}");
    }

    #[test]
    fn adaptive_parameters() {
        let got = AdaptiveThrottler::new(-0.5);
        assert!(matches!(got, Err(Error::ScalingOutOfRange(f)) if f == -0.5), "{got:?}");
        assert!(AdaptiveThrottler::new(0.0).is_ok());
        assert_eq!(AdaptiveThrottler::clamp(-3.0).factor, 0.0);
        assert_eq!(AdaptiveThrottler::default().factor, 2.0);
    }

    #[test]
    fn adaptive_accounting() {
        let mut throttler = AdaptiveThrottler::default();
        throttler.on_retry_failure(&RetryResult::Continue(throttled()));
        throttler.on_retry_failure(&RetryResult::Exhausted(throttled()));
        throttler.on_retry_failure(&RetryResult::Permanent(throttled()));
        throttler.on_success();
        assert_eq!((throttler.requests, throttler.accepts), (4.0, 2.0));
    }

    #[test]
    fn adaptive_veto() {
        let mut throttler = AdaptiveThrottler::default();
        assert_eq!(throttler.veto_probability(), 0.0);
        assert!(!throttler.throttle_retry_attempt(), "{throttler:?}");

        throttler.on_retry_failure(&RetryResult::Continue(throttled()));
        assert_eq!(throttler.veto_probability(), 0.5);
        assert!(throttler.throttle(0.0), "{throttler:?}");
        assert!(throttler.throttle(0.5), "{throttler:?}");
        assert!(!throttler.throttle(0.75), "{throttler:?}");

        let mut lenient = AdaptiveThrottler::clamp(100.0);
        lenient.on_success();
        lenient.on_retry_failure(&RetryResult::Continue(throttled()));
        assert_eq!(lenient.veto_probability(), 0.0);
    }

    #[test]
    fn breaker_parameters() {
        let got = CircuitBreaker::new(100, 200, 1);
        assert!(
            matches!(got, Err(Error::TooFewMinTokens { min: 200, initial: 100 })),
            "{got:?}"
        );
        assert_eq!(CircuitBreaker::clamp(100, 200, 1).min_tokens, 100);
    }

    #[test]
    fn breaker_opens_and_recovers() {
        let mut breaker = CircuitBreaker::default();
        for _ in 0..4 {
            breaker.on_retry_failure(&RetryResult::Continue(throttled()));
        }
        assert_eq!(breaker.balance, 60);
        assert!(!breaker.throttle_retry_attempt(), "{breaker:?}");

        breaker.on_retry_failure(&RetryResult::Exhausted(throttled()));
        assert_eq!(breaker.balance, 50);
        assert!(breaker.throttle_retry_attempt(), "{breaker:?}");

        breaker.on_success();
        assert!(!breaker.throttle_retry_attempt(), "{breaker:?}");
        breaker.on_retry_failure(&RetryResult::Permanent(throttled()));
        assert_eq!(breaker.balance, 52);

        for _ in 0..200 {
            breaker.on_success();
        }
        assert_eq!(breaker.balance, breaker.capacity);
    }

    #[test]
    fn timeouts_cost_double() {
        let mut breaker = CircuitBreaker::default();
        breaker.on_retry_failure(&RetryResult::Continue(CoreError::timeout("attempt")));
        assert_eq!(breaker.balance, 80);
        let mut drained = CircuitBreaker::clamp(10, 0, u64::MAX);
        drained.on_retry_failure(&RetryResult::Continue(CoreError::timeout("attempt")));
        assert_eq!(drained.balance, 0);
        assert!(drained.throttle_retry_attempt(), "{drained:?}");
    }
}
