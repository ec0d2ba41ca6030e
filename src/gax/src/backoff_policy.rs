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

//! How long the retry loop waits between attempts.
//!
//! Retrying a failed request right away rarely helps: a throttled or
//! overloaded service needs time to recover. The retry loop asks a
//! [BackoffPolicy] for a delay after each failed attempt, and sleeps that long
//! before the next one. [ExponentialBackoff] is the default.
//!
//! # Example
//! ```
//! # use nimbus_gax::backoff_policy::BackoffPolicyArg;
//! # use nimbus_gax::exponential_backoff::{Error, ExponentialBackoffBuilder};
//! use std::time::Duration;
//! let arg: BackoffPolicyArg = ExponentialBackoffBuilder::new()
//!     .with_initial_delay(Duration::from_millis(50))
//!     .with_maximum_delay(Duration::from_secs(10))
//!     .build()?
//!     .into();
//! # Ok::<(), Error>(())
//! ```
//!
//! [ExponentialBackoff]: crate::exponential_backoff::ExponentialBackoff

use std::sync::Arc;
use std::time::{Duration, Instant};

/// Computes the delay before the next attempt of a request.
pub trait BackoffPolicy: Send + Sync + std::fmt::Debug {
    /// Returns how long to wait after `attempt_count` failed attempts.
    ///
    /// `loop_start` is when the first attempt started. `attempt_count` is at
    /// least 1.
    fn on_failure(&self, loop_start: Instant, attempt_count: u32) -> Duration;
}

/// Accepts any [BackoffPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct BackoffPolicyArg(Arc<dyn BackoffPolicy>);

impl<T> From<T> for BackoffPolicyArg
where
    T: BackoffPolicy + 'static,
{
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl From<Arc<dyn BackoffPolicy>> for BackoffPolicyArg {
    fn from(value: Arc<dyn BackoffPolicy>) -> Self {
        Self(value)
    }
}

impl From<BackoffPolicyArg> for Arc<dyn BackoffPolicy> {
    fn from(value: BackoffPolicyArg) -> Self {
        value.0
    }
}
