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

//! Per-request overrides of the client configuration.
//!
//! A client applies the settings from its [ClientBuilder] to every request.
//! The request builders returned by the client methods implement
//! [RequestOptionsBuilder], so a single call can replace some of them.
//! Overrides that are not set fall back to the client configuration.
//!
//! # Example
//! ```
//! # use nimbus_gax::options::RequestOptionsBuilder;
//! use nimbus_gax::retry_policy::NeverRetry;
//! use std::time::Duration;
//! /// Fail fast for interactive requests.
//! fn interactive<B: RequestOptionsBuilder>(builder: B) -> B {
//!     builder
//!         .with_attempt_timeout(Duration::from_secs(2))
//!         .with_retry_policy(NeverRetry)
//! }
//! ```
//!
//! [ClientBuilder]: crate::client_builder::ClientBuilder

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use crate::retry_throttler::{RetryThrottlerArg, SharedRetryThrottler};
use std::sync::Arc;
use std::time::Duration;

/// The overrides for one request. `None` means "use the client setting".
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    idempotent: Option<bool>,
    user_agent: Option<String>,
    attempt_timeout: Option<Duration>,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    retry_throttler: Option<SharedRetryThrottler>,
}

impl RequestOptions {
    /// Whether the request may be safely sent more than once.
    ///
    /// Every operation has a default, read-only operations are idempotent.
    /// Retry policies may use this value to decide which errors to retry.
    pub fn idempotent(&self) -> Option<bool> {
        self.idempotent
    }

    pub fn set_idempotency(&mut self, value: bool) {
        self.idempotent = Some(value);
    }

    /// A prefix for the `user-agent` header, replacing the client's prefix.
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }

    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// The limit for each attempt. The retry loop as a whole is bounded by the
    /// retry policy.
    pub fn attempt_timeout(&self) -> Option<Duration> {
        self.attempt_timeout
    }

    pub fn set_attempt_timeout<T: Into<Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    pub fn retry_policy(&self) -> Option<&Arc<dyn RetryPolicy>> {
        self.retry_policy.as_ref()
    }

    pub fn set_retry_policy<V: Into<RetryPolicyArg>>(&mut self, v: V) {
        self.retry_policy = Some(v.into().into());
    }

    pub fn backoff_policy(&self) -> Option<&Arc<dyn BackoffPolicy>> {
        self.backoff_policy.as_ref()
    }

    pub fn set_backoff_policy<V: Into<BackoffPolicyArg>>(&mut self, v: V) {
        self.backoff_policy = Some(v.into().into());
    }

    pub fn retry_throttler(&self) -> Option<&SharedRetryThrottler> {
        self.retry_throttler.as_ref()
    }

    pub fn set_retry_throttler<V: Into<RetryThrottlerArg>>(&mut self, v: V) {
        self.retry_throttler = Some(v.into().into());
    }
}

/// Setters for [RequestOptions], available on every request builder.
pub trait RequestOptionsBuilder: internal::RequestBuilder + Sized {
    /// Overrides the operation's default idempotency.
    fn with_idempotency(self, v: bool) -> Self {
        self.update_options(|o| o.set_idempotency(v))
    }

    /// Overrides the client's user agent prefix.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self {
        self.update_options(|o| o.set_user_agent(v))
    }

    /// Overrides the client's per-attempt timeout.
    fn with_attempt_timeout<V: Into<Duration>>(self, v: V) -> Self {
        self.update_options(|o| o.set_attempt_timeout(v))
    }

    /// Overrides the client's retry policy.
    fn with_retry_policy<V: Into<RetryPolicyArg>>(self, v: V) -> Self {
        self.update_options(|o| o.set_retry_policy(v))
    }

    /// Overrides the client's backoff policy.
    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(self, v: V) -> Self {
        self.update_options(|o| o.set_backoff_policy(v))
    }

    /// Overrides the client's retry throttler.
    fn with_retry_throttler<V: Into<RetryThrottlerArg>>(self, v: V) -> Self {
        self.update_options(|o| o.set_retry_throttler(v))
    }
}

impl<T: internal::RequestBuilder> RequestOptionsBuilder for T {}

#[doc(hidden)]
pub mod internal {
    //! Used by the request builders. Not part of the public API.
    use super::RequestOptions;

    pub trait RequestBuilder: Sized {
        fn request_options(&mut self) -> &mut RequestOptions;

        fn update_options<F: FnOnce(&mut RequestOptions)>(mut self, f: F) -> Self {
            f(self.request_options());
            self
        }
    }

    /// Sets the idempotency unless the application already did.
    pub fn set_default_idempotency(mut options: RequestOptions, default: bool) -> RequestOptions {
        options.idempotent.get_or_insert(default);
        options
    }
}

#[cfg(test)]
mod tests {
    use super::internal::*;
    use super::*;
    use crate::exponential_backoff::ExponentialBackoff;
    use crate::retry_policy::{NeverRetry, StandardRetry};
    use crate::retry_throttler::CircuitBreaker;
    use test_case::test_case;

    #[derive(Default)]
    struct FakeBuilder(RequestOptions);

    impl RequestBuilder for FakeBuilder {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0
        }
    }

    #[test]
    fn unset_by_default() {
        let opts = RequestOptions::default();
        assert_eq!(opts.idempotent(), None);
        assert_eq!(opts.user_agent(), None);
        assert_eq!(opts.attempt_timeout(), None);
        assert!(opts.retry_policy().is_none());
        assert!(opts.backoff_policy().is_none());
        assert!(opts.retry_throttler().is_none());
    }

    #[test]
    fn builder_sets_every_override() {
        let FakeBuilder(opts) = FakeBuilder::default()
            .with_idempotency(false)
            .with_user_agent("batch-export/3")
            .with_attempt_timeout(Duration::from_millis(750))
            .with_retry_policy(NeverRetry)
            .with_backoff_policy(ExponentialBackoff::default())
            .with_retry_throttler(CircuitBreaker::default());
        assert_eq!(opts.idempotent(), Some(false));
        assert_eq!(opts.user_agent(), Some("batch-export/3"));
        assert_eq!(opts.attempt_timeout(), Some(Duration::from_millis(750)));
        assert!(format!("{:?}", opts.retry_policy()).contains("NeverRetry"));
        assert!(opts.backoff_policy().is_some(), "{opts:?}");
        assert!(opts.retry_throttler().is_some(), "{opts:?}");
    }

    #[test]
    fn last_setter_wins() {
        let FakeBuilder(opts) = FakeBuilder::default()
            .with_retry_policy(NeverRetry)
            .with_retry_policy(StandardRetry)
            .with_user_agent("a")
            .with_user_agent("b");
        assert!(format!("{:?}", opts.retry_policy()).contains("StandardRetry"));
        assert_eq!(opts.user_agent(), Some("b"));
    }

    #[test_case(None, true, Some(true))]
    #[test_case(None, false, Some(false))]
    #[test_case(Some(false), true, Some(false))]
    #[test_case(Some(true), false, Some(true))]
    fn default_idempotency(explicit: Option<bool>, default: bool, want: Option<bool>) {
        let mut opts = RequestOptions::default();
        if let Some(v) = explicit {
            opts.set_idempotency(v);
        }
        let opts = set_default_idempotency(opts, default);
        assert_eq!(opts.idempotent(), want);
    }
}
