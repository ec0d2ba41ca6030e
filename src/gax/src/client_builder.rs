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

//! The generic builder behind every service client.
//!
//! Each service crate exposes a `builder()` function on its client type. The
//! builder collects endpoint, region, credentials, retry, and worker pool
//! settings into a [ClientConfig][internal::ClientConfig], and the service
//! crate turns that configuration into a client. Settings left alone take
//! their defaults when the client is built:
//!
//! | Setting          | Default                                              |
//! | ---------------- | ---------------------------------------------------- |
//! | endpoint         | derived from the service and the region              |
//! | region           | `NIMBUS_REGION`, or `us-east-1`                      |
//! | credentials      | `NIMBUS_ACCESS_KEY_ID` and `NIMBUS_SECRET_ACCESS_KEY` |
//! | retry policy     | at most 3 attempts of retryable errors               |
//! | backoff policy   | [ExponentialBackoff] starting at 100ms, capped at 20s |
//! | retry throttler  | [AdaptiveThrottler]                                  |
//! | worker pool      | a new pool owned by the client                       |
//!
//! # Example
//! ```
//! # use nimbus_gax::client_builder::examples::{Client, credentials};
//! # use nimbus_gax::client_builder::Result;
//! use nimbus_gax::retry_policy::{RetryPolicyExt, StandardRetry};
//! use nimbus_gax::retry_throttler::CircuitBreaker;
//! use std::time::Duration;
//! # tokio_test::block_on(async {
//! let client = Client::builder()
//!     .with_region("eu-west-1")
//!     .with_credentials(credentials::static_key::Builder::new("AKIDEXAMPLE", "secret").build())
//!     .with_retry_policy(StandardRetry.with_attempt_limit(5))
//!     .with_retry_throttler(CircuitBreaker::default())
//!     .with_attempt_timeout(Duration::from_secs(10))
//!     .build()
//!     .await?;
//! # Result::<()>::Ok(()) });
//! ```
//!
//! [AdaptiveThrottler]: crate::retry_throttler::AdaptiveThrottler
//! [ExponentialBackoff]: crate::exponential_backoff::ExponentialBackoff

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::error_table::ErrorTable;
use crate::executor::{Executor, ExecutorArg};
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use crate::retry_throttler::{RetryThrottlerArg, SharedRetryThrottler};
use std::sync::Arc;
use std::time::Duration;

/// Results of [ClientBuilder::build].
pub type Result<T> = std::result::Result<T, Error>;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A client could not be built.
///
/// Building a client does not contact the service, these errors come from
/// local resources: credentials from the environment, the HTTP transport, or
/// the worker pool threads.
///
/// # Example
/// ```no_run
/// # use nimbus_gax::client_builder::examples::Client;
/// use nimbus_gax::client_builder::Error;
/// # tokio_test::block_on(async {
/// match Client::builder().build().await {
///     Ok(_client) => { /* send requests */ }
///     Err(e) if e.is_default_credentials() => {
///         eprintln!("export NIMBUS_ACCESS_KEY_ID and NIMBUS_SECRET_ACCESS_KEY: {e}");
///     }
///     Err(e) => return Err(e),
/// }
/// # Ok::<(), Error>(()) });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(Kind);

#[derive(thiserror::Error, Debug)]
enum Kind {
    #[error("cannot load credentials from the environment")]
    DefaultCredentials(#[source] BoxError),
    #[error("cannot create the HTTP transport")]
    Transport(#[source] BoxError),
    #[error("cannot start the worker pool")]
    WorkerPool(#[source] BoxError),
}

impl Error {
    /// No credentials were configured, and none could be loaded from the
    /// environment.
    pub fn is_default_credentials(&self) -> bool {
        matches!(self.0, Kind::DefaultCredentials(_))
    }

    /// The HTTP transport could not be created.
    pub fn is_transport(&self) -> bool {
        matches!(self.0, Kind::Transport(_))
    }

    /// The worker pool threads could not be started.
    pub fn is_worker_pool(&self) -> bool {
        matches!(self.0, Kind::WorkerPool(_))
    }

    #[doc(hidden)]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(Kind::DefaultCredentials(source.into()))
    }

    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(Kind::Transport(source.into()))
    }

    #[doc(hidden)]
    pub fn worker_pool<T: Into<BoxError>>(source: T) -> Self {
        Self(Kind::WorkerPool(source.into()))
    }
}

/// Configures and builds a service client.
///
/// `F` is the service crate's factory, and `Cr` its credentials type.
/// Applications get a builder from the client's `builder()` function and do
/// not name these parameters.
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Cr> {
    factory: F,
    config: internal::ClientConfig<Cr>,
}

impl<F, Cr> ClientBuilder<F, Cr> {
    /// Builds the client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Credentials = Cr>,
    {
        let Self { factory, config } = self;
        factory.build(config).await
    }

    /// Sends requests to this endpoint instead of the regional default, for
    /// example `http://localhost:4566`.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// The region used for the default endpoint and for signing.
    ///
    /// Services with a single global endpoint sign for their own region and
    /// ignore this value.
    pub fn with_region<V: Into<String>>(mut self, v: V) -> Self {
        self.config.region = Some(v.into());
        self
    }

    /// Adds a tracing span around each attempt, nested in the per-call span.
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// The credentials used to sign requests.
    pub fn with_credentials<T: Into<Cr>>(mut self, v: T) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Decides which failures are retried, and when to give up.
    pub fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.config.retry_policy = Some(v.into().into());
        self
    }

    /// Decides how long to wait before each retry.
    pub fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.config.backoff_policy = Some(v.into().into());
        self
    }

    /// Limits retries across all the requests sent through this client.
    pub fn with_retry_throttler<V: Into<RetryThrottlerArg>>(mut self, v: V) -> Self {
        self.config.retry_throttler = v.into().into();
        self
    }

    /// Replaces the table that classifies service error codes.
    ///
    /// ```
    /// # use nimbus_gax::client_builder::examples::Client;
    /// use nimbus_gax::error_table::ErrorTable;
    /// # tokio_test::block_on(async {
    /// let table = ErrorTable::default().with_throttling_code("SlowDown");
    /// let client = Client::builder().with_error_table(table).build().await?;
    /// # nimbus_gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn with_error_table(mut self, v: ErrorTable) -> Self {
        self.config.error_table = v;
        self
    }

    /// Runs `spawn()` and `send_with_callback()` work on this worker pool.
    ///
    /// Clients that share a [WorkerPool] share its threads. Only dedicated
    /// pools are accepted, so callbacks never run on the calling thread.
    ///
    /// ```
    /// # use nimbus_gax::client_builder::examples::Client;
    /// use nimbus_gax::executor::WorkerPool;
    /// use std::sync::Arc;
    /// # tokio_test::block_on(async {
    /// let pool = Arc::new(WorkerPool::builder().with_threads(2).build()?);
    /// let first = Client::builder().with_worker_pool(pool.clone()).build().await?;
    /// let second = Client::builder().with_worker_pool(pool).build().await?;
    /// # anyhow::Ok(()) });
    /// ```
    ///
    /// [WorkerPool]: crate::executor::WorkerPool
    pub fn with_worker_pool<V: Into<ExecutorArg>>(mut self, v: V) -> Self {
        self.config.executor = Some(v.into().into());
        self
    }

    /// Bounds each attempt. The retry policy may still try again.
    pub fn with_attempt_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.config.attempt_timeout = Some(v.into());
        self
    }

    /// Bounds the time to open a connection.
    pub fn with_connect_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.config.connect_timeout = Some(v.into());
        self
    }

    /// Prefixed to the `user-agent` header of every request.
    pub fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.config.user_agent = Some(v.into());
        self
    }
}

#[doc(hidden)]
pub mod internal {
    use super::*;

    /// Implemented by each service crate to turn a configuration into a
    /// client.
    pub trait ClientFactory {
        type Client;
        type Credentials;
        fn build(
            self,
            config: ClientConfig<Self::Credentials>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, Cr, C>(factory: F) -> ClientBuilder<F, Cr>
    where
        F: ClientFactory<Client = C, Credentials = Cr>,
    {
        ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// Everything a [ClientBuilder] collected. `None` means "use the default".
    #[derive(Clone, Debug)]
    pub struct ClientConfig<Cr> {
        pub endpoint: Option<String>,
        pub region: Option<String>,
        pub cred: Option<Cr>,
        pub tracing: bool,
        pub retry_policy: Option<Arc<dyn RetryPolicy>>,
        pub backoff_policy: Option<Arc<dyn BackoffPolicy>>,
        pub retry_throttler: SharedRetryThrottler,
        pub error_table: ErrorTable,
        pub executor: Option<Arc<dyn Executor>>,
        pub attempt_timeout: Option<Duration>,
        pub connect_timeout: Option<Duration>,
        pub user_agent: Option<String>,
    }

    impl<Cr> Default for ClientConfig<Cr> {
        fn default() -> Self {
            let throttler = crate::retry_throttler::AdaptiveThrottler::default();
            Self {
                endpoint: None,
                region: None,
                cred: None,
                tracing: false,
                retry_policy: None,
                backoff_policy: None,
                retry_throttler: Arc::new(std::sync::Mutex::new(throttler)),
                error_table: ErrorTable::default(),
                executor: None,
                attempt_timeout: None,
                connect_timeout: None,
                user_agent: None,
            }
        }
    }
}

/// Stand-ins for a service crate, used in the documentation.
#[doc(hidden)]
pub mod examples {
    use super::internal::{ClientConfig, ClientFactory, new_builder};

    /// A client that only keeps its configuration.
    pub struct Client(pub ClientConfig<Credentials>);

    impl Client {
        pub fn builder() -> super::ClientBuilder<Factory, Credentials> {
            new_builder(Factory)
        }
    }

    pub struct Factory;

    impl ClientFactory for Factory {
        type Client = Client;
        type Credentials = Credentials;
        async fn build(self, config: ClientConfig<Credentials>) -> super::Result<Client> {
            Ok(Client(config))
        }
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Credentials {
        pub access_key_id: String,
    }

    pub mod credentials {
        pub mod static_key {
            use super::super::Credentials;

            pub struct Builder(Credentials);

            impl Builder {
                pub fn new<K: Into<String>, S: Into<String>>(key: K, _secret: S) -> Self {
                    Self(Credentials {
                        access_key_id: key.into(),
                    })
                }

                pub fn build(self) -> Credentials {
                    self.0
                }
            }
        }
    }
}
