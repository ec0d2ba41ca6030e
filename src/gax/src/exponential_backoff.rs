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

//! Truncated exponential backoff.
//!
//! The delay before retry attempt `n` is `initial * scaling^(n-1)`, capped at
//! the maximum delay. A [Jitter] mode then randomizes the delay, so clients
//! that failed at the same time do not all retry at the same time.
//!
//! Without any configuration the policy waits up to 100ms before the first
//! retry, doubles that bound on each attempt, and never waits more than 20
//! seconds.
//!
//! # Example
//! ```
//! # use nimbus_gax::exponential_backoff::*;
//! use std::time::Duration;
//! let backoff = ExponentialBackoffBuilder::new()
//!     .with_initial_delay(Duration::from_millis(25))
//!     .with_maximum_delay(Duration::from_secs(2))
//!     .with_jitter(Jitter::Equal)
//!     .build()?;
//! # Ok::<(), Error>(())
//! ```

use std::time::{Duration, Instant};

const DEFAULT_INITIAL_DELAY: Duration = Duration::from_millis(100);
const DEFAULT_MAXIMUM_DELAY: Duration = Duration::from_secs(20);
const DEFAULT_SCALING: f64 = 2.0;

const MIN_CLAMPED_DELAY: Duration = Duration::from_millis(1);
const MAX_CLAMPED_DELAY: Duration = Duration::from_secs(60 * 60);
const MAX_CLAMPED_SCALING: f64 = 16.0;

/// Errors rejected by [ExponentialBackoffBuilder::build].
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The scaling factor is below 1.0 or not a number.
    #[error("backoff scaling must be a number >= 1.0, got {0}")]
    InvalidScalingFactor(f64),
    /// The initial delay is zero.
    #[error("backoff initial delay must be positive, got {0:?}")]
    InvalidInitialDelay(Duration),
    /// The maximum delay is shorter than the initial delay.
    #[error("backoff maximum delay {maximum:?} is shorter than the initial delay {initial:?}")]
    EmptyRange { maximum: Duration, initial: Duration },
}

/// How the computed delay is randomized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum Jitter {
    /// Wait a random time between zero and the computed delay.
    #[default]
    Full,
    /// Wait half the computed delay, plus a random time up to the other half.
    Equal,
    /// Wait exactly the computed delay.
    None,
}

impl Jitter {
    // `sample` is drawn uniformly from `[0.0, 1.0]`.
    fn apply(self, delay: Duration, sample: f64) -> Duration {
        let sample = sample.clamp(0.0, 1.0);
        match self {
            Jitter::Full => delay.mul_f64(sample),
            Jitter::Equal => {
                let half = delay / 2;
                half + (delay - half).mul_f64(sample)
            }
            Jitter::None => delay,
        }
    }
}

/// Configures an [ExponentialBackoff].
#[derive(Clone, Debug)]
pub struct ExponentialBackoffBuilder {
    initial_delay: Duration,
    maximum_delay: Duration,
    scaling: f64,
    jitter: Jitter,
}

impl ExponentialBackoffBuilder {
    /// Starts from the default parameters: 100ms, 20s, a scaling factor of
    /// 2.0, and full jitter.
    pub fn new() -> Self {
        Self {
            initial_delay: DEFAULT_INITIAL_DELAY,
            maximum_delay: DEFAULT_MAXIMUM_DELAY,
            scaling: DEFAULT_SCALING,
            jitter: Jitter::Full,
        }
    }

    /// Sets the delay bound before the first retry.
    pub fn with_initial_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.initial_delay = v.into();
        self
    }

    /// Sets the cap on the delay bound.
    pub fn with_maximum_delay<V: Into<Duration>>(mut self, v: V) -> Self {
        self.maximum_delay = v.into();
        self
    }

    /// Sets the growth factor between consecutive attempts.
    pub fn with_scaling<V: Into<f64>>(mut self, v: V) -> Self {
        self.scaling = v.into();
        self
    }

    /// Sets the jitter mode.
    pub fn with_jitter(mut self, v: Jitter) -> Self {
        self.jitter = v;
        self
    }

    /// Validates the parameters and creates the policy.
    ///
    /// # Example
    /// ```
    /// # use nimbus_gax::exponential_backoff::*;
    /// # use nimbus_gax::backoff_policy::BackoffPolicy;
    /// use std::time::{Duration, Instant};
    /// let backoff = ExponentialBackoffBuilder::new()
    ///     .with_initial_delay(Duration::from_secs(5))
    ///     .with_maximum_delay(Duration::from_secs(50))
    ///     .build()?;
    /// assert!(backoff.on_failure(Instant::now(), 2) <= Duration::from_secs(10));
    ///
    /// let invalid = ExponentialBackoffBuilder::new()
    ///     .with_initial_delay(Duration::from_secs(5))
    ///     .with_maximum_delay(Duration::from_secs(1))
    ///     .build();
    /// assert!(matches!(invalid, Err(Error::EmptyRange { .. })));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn build(self) -> Result<ExponentialBackoff, Error> {
        if self.scaling.is_nan() || self.scaling < 1.0 {
            return Err(Error::InvalidScalingFactor(self.scaling));
        }
        if self.initial_delay.is_zero() {
            return Err(Error::InvalidInitialDelay(self.initial_delay));
        }
        if self.maximum_delay < self.initial_delay {
            return Err(Error::EmptyRange {
                maximum: self.maximum_delay,
                initial: self.initial_delay,
            });
        }
        Ok(self.into_policy())
    }

    /// Creates the policy, forcing each parameter into a usable range.
    ///
    /// The maximum delay is forced into `[1ms, 1h]`, then the initial delay
    /// into `[1ms, maximum]`. The scaling factor is forced into `[1.0, 16.0]`,
    /// with NaN treated as `1.0`.
    ///
    /// # Example
    /// ```
    /// # use nimbus_gax::exponential_backoff::*;
    /// # use nimbus_gax::backoff_policy::BackoffPolicy;
    /// use std::time::{Duration, Instant};
    /// let backoff = ExponentialBackoffBuilder::new()
    ///     .with_initial_delay(Duration::ZERO)
    ///     .with_maximum_delay(Duration::ZERO)
    ///     .clamp();
    /// assert!(backoff.on_failure(Instant::now(), 1) <= Duration::from_millis(1));
    /// ```
    pub fn clamp(mut self) -> ExponentialBackoff {
        self.maximum_delay = self
            .maximum_delay
            .clamp(MIN_CLAMPED_DELAY, MAX_CLAMPED_DELAY);
        self.initial_delay = self
            .initial_delay
            .clamp(MIN_CLAMPED_DELAY, self.maximum_delay);
        self.scaling = if self.scaling.is_nan() {
            1.0
        } else {
            self.scaling.clamp(1.0, MAX_CLAMPED_SCALING)
        };
        self.into_policy()
    }

    fn into_policy(self) -> ExponentialBackoff {
        ExponentialBackoff {
            initial_delay: self.initial_delay,
            maximum_delay: self.maximum_delay,
            scaling: self.scaling,
            jitter: self.jitter,
        }
    }
}

impl Default for ExponentialBackoffBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A [BackoffPolicy][crate::backoff_policy::BackoffPolicy] with exponentially
/// growing, randomized delays.
#[derive(Clone, Debug)]
pub struct ExponentialBackoff {
    initial_delay: Duration,
    maximum_delay: Duration,
    scaling: f64,
    jitter: Jitter,
}

impl ExponentialBackoff {
    /// The delay bound after `attempt_count` attempts, before any jitter.
    fn bound(&self, attempt_count: u32) -> Duration {
        let exponent = i32::try_from(attempt_count.saturating_sub(1)).unwrap_or(i32::MAX);
        let growth = self.scaling.powi(exponent);
        // Compare ratios first, `mul_f64` panics on overflow.
        let ceiling = self.maximum_delay.div_duration_f64(self.initial_delay);
        if growth.is_finite() && growth < ceiling {
            self.initial_delay.mul_f64(growth)
        } else {
            self.maximum_delay
        }
    }

    fn delay(&self, attempt_count: u32, sample: f64) -> Duration {
        self.jitter.apply(self.bound(attempt_count), sample)
    }
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        ExponentialBackoffBuilder::new().into_policy()
    }
}

impl crate::backoff_policy::BackoffPolicy for ExponentialBackoff {
    fn on_failure(&self, _loop_start: Instant, attempt_count: u32) -> Duration {
        use rand::Rng;
        let sample = rand::rng().random_range(0.0..=1.0);
        self.delay(attempt_count, sample)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backoff_policy::BackoffPolicy;
    use test_case::test_case;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test_case(Duration::ZERO, secs(5), 2.0; "zero initial delay")]
    #[test_case(secs(1), secs(5), 0.5; "shrinking")]
    #[test_case(secs(1), secs(5), f64::NAN; "nan scaling")]
    #[test_case(secs(10), secs(5), 2.0; "inverted range")]
    fn build_rejects(initial: Duration, maximum: Duration, scaling: f64) {
        let got = ExponentialBackoffBuilder::new()
            .with_initial_delay(initial)
            .with_maximum_delay(maximum)
            .with_scaling(scaling)
            .build();
        assert!(got.is_err(), "{got:?}");
    }

    #[test]
    fn build_error_kinds() {
        let got = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::ZERO)
            .build();
        assert!(matches!(got, Err(Error::InvalidInitialDelay(_))), "{got:?}");
        let got = ExponentialBackoffBuilder::new().with_scaling(0.0).build();
        assert!(matches!(got, Err(Error::InvalidScalingFactor(_))), "{got:?}");
        let got = ExponentialBackoffBuilder::new()
            .with_maximum_delay(Duration::from_millis(10))
            .build();
        assert!(
            matches!(got, Err(Error::EmptyRange { maximum, initial })
                if maximum == Duration::from_millis(10) && initial == DEFAULT_INITIAL_DELAY),
            "{got:?}"
        );
    }

    #[test]
    fn build_accepts_extremes() {
        let got = ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_nanos(1))
            .with_maximum_delay(Duration::MAX)
            .with_scaling(1.0)
            .build();
        assert!(got.is_ok(), "{got:?}");
        let got = ExponentialBackoffBuilder::default().build();
        assert!(got.is_ok(), "{got:?}");
    }

    #[test_case(secs(1), Duration::MAX, 1_000.0; "large")]
    #[test_case(Duration::ZERO, Duration::ZERO, 0.0; "zeros")]
    #[test_case(secs(30), secs(10), f64::NAN; "inverted with nan")]
    fn clamp_ranges(initial: Duration, maximum: Duration, scaling: f64) {
        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(initial)
            .with_maximum_delay(maximum)
            .with_scaling(scaling)
            .clamp();
        assert!((1.0..=MAX_CLAMPED_SCALING).contains(&b.scaling), "{b:?}");
        assert!(
            (MIN_CLAMPED_DELAY..=MAX_CLAMPED_DELAY).contains(&b.maximum_delay),
            "{b:?}"
        );
        assert!(
            (MIN_CLAMPED_DELAY..=b.maximum_delay).contains(&b.initial_delay),
            "{b:?}"
        );
    }

    #[test]
    fn bound_grows_then_caps() {
        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(secs(1))
            .with_maximum_delay(secs(5))
            .build()
            .expect("valid parameters");
        let got: Vec<_> = (1..=5).map(|n| b.bound(n)).collect();
        assert_eq!(got, vec![secs(1), secs(2), secs(4), secs(5), secs(5)]);
        assert_eq!(b.bound(0), secs(1));
        assert_eq!(b.bound(u32::MAX), secs(5));
    }

    #[test]
    fn default_parameters() {
        let b = ExponentialBackoff::default();
        assert_eq!(b.jitter, Jitter::Full);
        assert_eq!(b.bound(1), Duration::from_millis(100));
        assert_eq!(b.bound(3), Duration::from_millis(400));
        assert_eq!(b.bound(30), secs(20));
    }

    #[test_case(Jitter::Full, 0.0, Duration::ZERO)]
    #[test_case(Jitter::Full, 0.5, secs(4))]
    #[test_case(Jitter::Full, 1.0, secs(8))]
    #[test_case(Jitter::Equal, 0.0, secs(4))]
    #[test_case(Jitter::Equal, 0.5, secs(6))]
    #[test_case(Jitter::Equal, 1.0, secs(8))]
    #[test_case(Jitter::None, 0.25, secs(8))]
    #[test_case(Jitter::Full, 7.0, secs(8); "sample above range")]
    fn jitter(mode: Jitter, sample: f64, want: Duration) {
        assert_eq!(mode.apply(secs(8), sample), want);
    }

    #[test]
    fn delay_applies_jitter_to_bound() {
        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(secs(2))
            .with_maximum_delay(secs(60))
            .with_jitter(Jitter::Equal)
            .build()
            .expect("valid parameters");
        assert_eq!(b.delay(3, 0.0), secs(4));
        assert_eq!(b.delay(3, 1.0), secs(8));
    }

    #[test]
    fn on_failure_stays_within_bound() {
        let b = ExponentialBackoffBuilder::new()
            .with_initial_delay(secs(1))
            .with_maximum_delay(secs(4))
            .build()
            .expect("valid parameters");
        let now = Instant::now();
        for attempt in 1..=6 {
            let d = b.on_failure(now, attempt);
            assert!(d <= b.bound(attempt), "attempt={attempt} {d:?}");
        }
    }
}
