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

//! The dispatch engine shared by all the service clients.
//!
//! The [Dispatcher] turns an [Operation] and its request into a single
//! outcome. Each attempt signs the request, sends it, and decodes the
//! response. Failed attempts are retried as prescribed by the retry, backoff,
//! and throttling policies.

use crate::document::Document;
use crate::envelope::RequestEnvelope;
use crate::errors::to_service_error;
use crate::observability::{dispatch_span, http_request_span, record_status};
use crate::operation::{DecodedResponse, Operation};
use crate::options::{ClientConfig, resolve_region};
use crate::service::ServiceInfo;
use auth::credentials::{Credentials, SignableRequest};
use chrono::{DateTime, TimeDelta, Utc};
use gax::Result;
use gax::backoff_policy::BackoffPolicy;
use gax::client_builder::Error as BuilderError;
use gax::error::Error;
use gax::error_table::{Classification, ErrorTable};
use gax::executor::{Executor, WorkerPool};
use gax::exponential_backoff::ExponentialBackoff;
use gax::options::RequestOptions;
use gax::response::{Parts, Response};
use gax::retry_policy::{DEFAULT_ATTEMPT_LIMIT, RetryPolicy, RetryPolicyExt, StandardRetry};
use gax::retry_throttler::SharedRetryThrottler;
use http::HeaderMap;
use http::header::{DATE, HeaderValue, USER_AGENT};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU32, Ordering};
use std::time::Duration;
use tracing::Instrument;

const DEFAULT_USER_AGENT: &str = concat!("nimbus-rust/", env!("CARGO_PKG_VERSION"));

/// Executes operations for one service client.
///
/// The dispatcher holds the client configuration. It is cheap to clone, and
/// clones share the configuration, the HTTP connection pool, and the worker
/// pool.
#[derive(Clone, Debug)]
pub struct Dispatcher {
    inner: reqwest::Client,
    cred: Credentials,
    service: ServiceInfo,
    endpoint: String,
    signing_region: String,
    tracing: bool,
    retry_policy: Arc<dyn RetryPolicy>,
    backoff_policy: Arc<dyn BackoffPolicy>,
    retry_throttler: SharedRetryThrottler,
    error_table: Arc<ErrorTable>,
    executor: Arc<dyn Executor>,
    attempt_timeout: Option<Duration>,
    user_agent: Option<String>,
    // The difference between the service clock and the local clock, in
    // milliseconds. Updated when the service rejects a request due to skew.
    clock_offset: Arc<AtomicI64>,
}

impl Dispatcher {
    pub async fn new(
        config: ClientConfig,
        service: ServiceInfo,
    ) -> gax::client_builder::Result<Self> {
        let cred = Self::make_credentials(&config)?;
        let region = resolve_region(config.region.as_deref());
        let endpoint = config
            .endpoint
            .unwrap_or_else(|| service.endpoint(&region));
        let signing_region = service.signing_region(&region).to_string();
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let inner = builder.build().map_err(BuilderError::transport)?;
        let executor = match config.executor {
            Some(e) => e,
            None => Arc::new(WorkerPool::new().map_err(BuilderError::worker_pool)?),
        };
        Ok(Self {
            inner,
            cred,
            service,
            endpoint,
            signing_region,
            tracing: config.tracing,
            retry_policy: config.retry_policy.unwrap_or_else(|| {
                Arc::new(StandardRetry.with_attempt_limit(DEFAULT_ATTEMPT_LIMIT))
            }),
            backoff_policy: config
                .backoff_policy
                .unwrap_or_else(|| Arc::new(ExponentialBackoff::default())),
            retry_throttler: config.retry_throttler,
            error_table: Arc::new(config.error_table),
            executor,
            attempt_timeout: config.attempt_timeout,
            user_agent: config.user_agent,
            clock_offset: Arc::new(AtomicI64::new(0)),
        })
    }

    fn make_credentials(config: &ClientConfig) -> gax::client_builder::Result<Credentials> {
        if let Some(c) = config.cred.clone() {
            return Ok(c);
        }
        auth::credentials::Builder::default()
            .build()
            .map_err(BuilderError::cred)
    }

    /// The worker pool used to run background requests.
    pub fn executor(&self) -> &dyn Executor {
        self.executor.as_ref()
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn signing_region(&self) -> &str {
        &self.signing_region
    }

    /// Executes `operation` with the given request.
    ///
    /// Returns the decoded response and its metadata, or the error from the
    /// last attempt. In both cases the number of retries is available to the
    /// caller.
    pub async fn execute<Req, Res>(
        &self,
        operation: Operation<Req, Res>,
        request: &Req,
        options: RequestOptions,
    ) -> Result<Response<Res>> {
        self.execute_inner(operation, request, options)
            .instrument(dispatch_span(self.service.signing_name, operation.name))
            .await
    }

    async fn execute_inner<Req, Res>(
        &self,
        operation: Operation<Req, Res>,
        request: &Req,
        options: RequestOptions,
    ) -> Result<Response<Res>> {
        let envelope = operation.envelope(&self.service, request)?;
        let options = self.effective_options(options, operation.idempotent);
        let idempotent = options.idempotent().unwrap_or(operation.idempotent);
        let throttler = self.get_retry_throttler(&options);
        let retry_policy = self.get_retry_policy(&options);
        let backoff = self.get_backoff_policy(&options);
        let attempts = Arc::new(AtomicU32::new(0));
        let counter = attempts.clone();
        let skew_corrected = AtomicBool::new(false);
        let this = self.clone();
        let inner = async move |remaining_time| {
            let resend_count = counter.fetch_add(1, Ordering::SeqCst);
            this.request_attempt(
                &envelope,
                &options,
                remaining_time,
                resend_count,
                &skew_corrected,
            )
            .await
        };
        let sleep = async |d| tokio::time::sleep(d).await;
        let on_retry = |attempt: u32, error: &Error, delay: Duration| {
            tracing::debug!(attempt, ?delay, error = %error, "retrying request");
        };
        let result = gax::retry_loop_internal::retry_loop_with_callback(
            inner,
            sleep,
            idempotent,
            throttler,
            retry_policy,
            backoff,
            on_retry,
        )
        .await;
        let retry_count = attempts.load(Ordering::SeqCst).saturating_sub(1);
        let response = result.map_err(|e| e.with_retry_count(retry_count))?;
        let parts = Parts::new()
            .set_status(response.status())
            .set_headers(response.headers().clone())
            .set_retry_count(retry_count);
        let body = (operation.decode)(response).map_err(|e| e.with_retry_count(retry_count))?;
        Ok(Response::from_parts(parts, body))
    }

    async fn request_attempt(
        &self,
        envelope: &RequestEnvelope,
        options: &RequestOptions,
        remaining_time: Option<Duration>,
        resend_count: u32,
        skew_corrected: &AtomicBool,
    ) -> Result<DecodedResponse> {
        let url = url::Url::parse(&format!("{}{}", self.endpoint, envelope.path()))
            .map_err(Error::binding)?;
        let method = http::Method::from(envelope.method());
        let mut headers = envelope.headers().clone();
        headers.insert(USER_AGENT, self.user_agent(options)?);
        let body = envelope.body().cloned().unwrap_or_default();

        let signing_time =
            Utc::now() + TimeDelta::milliseconds(self.clock_offset.load(Ordering::SeqCst));
        let signable = SignableRequest::new(&method, &url, &headers, &body)
            .with_scope(&self.signing_region, self.service.signing_name)
            .with_time(signing_time);
        let auth_headers = self
            .cred
            .headers(signable)
            .await
            .map_err(Error::authentication)?;
        headers.extend(auth_headers);

        let mut builder = self
            .inner
            .request(method.clone(), url.clone())
            .headers(headers)
            .body(body);
        if let Some(timeout) =
            gax::retry_loop_internal::effective_timeout(options, remaining_time)
        {
            builder = builder.timeout(timeout);
        }

        if !self.tracing {
            return self.send(builder, skew_corrected).await;
        }
        let span = http_request_span(&method, &url, resend_count);
        let result = self
            .send(builder, skew_corrected)
            .instrument(span.clone())
            .await;
        match &result {
            Ok(r) => record_status(&span, r.status()),
            Err(e) => {
                if let Some(status) = e.http_status_code() {
                    record_status(&span, status);
                }
            }
        }
        result
    }

    async fn send(
        &self,
        builder: reqwest::RequestBuilder,
        skew_corrected: &AtomicBool,
    ) -> Result<DecodedResponse> {
        let response = builder.send().await.map_err(map_send_error)?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(map_send_error)?;
        if status.is_success() {
            let document = Document::parse(self.service.protocol, &body)?;
            return Ok(DecodedResponse::new(status.as_u16(), headers, document));
        }

        let (mut error, classification) =
            to_service_error(status, &headers, &body, &self.error_table);
        // Only one correction per call, a second rejection is final.
        if let Some(offset) = skew_offset(&classification, &headers, Utc::now()) {
            if !skew_corrected.swap(true, Ordering::SeqCst) {
                tracing::warn!(
                    offset_ms = offset.num_milliseconds(),
                    code = error.error_code(),
                    "correcting clock skew"
                );
                self.clock_offset
                    .store(offset.num_milliseconds(), Ordering::SeqCst);
                error = error.set_retryable(true);
            }
        }
        Err(Error::service_with_http_metadata(
            error,
            Some(headers),
            Some(body),
        ))
    }

    fn user_agent(&self, options: &RequestOptions) -> Result<HeaderValue> {
        let value = match options.user_agent().or(self.user_agent.as_deref()) {
            Some(prefix) => format!("{prefix} {DEFAULT_USER_AGENT}"),
            None => DEFAULT_USER_AGENT.to_string(),
        };
        HeaderValue::from_str(&value).map_err(Error::ser)
    }

    fn effective_options(&self, options: RequestOptions, idempotent: bool) -> RequestOptions {
        let mut options = gax::options::internal::set_default_idempotency(options, idempotent);
        if let (None, Some(timeout)) = (options.attempt_timeout(), self.attempt_timeout) {
            options.set_attempt_timeout(timeout);
        }
        options
    }

    fn get_retry_policy(&self, options: &RequestOptions) -> Arc<dyn RetryPolicy> {
        options
            .retry_policy()
            .cloned()
            .unwrap_or_else(|| self.retry_policy.clone())
    }

    fn get_backoff_policy(&self, options: &RequestOptions) -> Arc<dyn BackoffPolicy> {
        options
            .backoff_policy()
            .cloned()
            .unwrap_or_else(|| self.backoff_policy.clone())
    }

    fn get_retry_throttler(&self, options: &RequestOptions) -> SharedRetryThrottler {
        options
            .retry_throttler()
            .cloned()
            .unwrap_or_else(|| self.retry_throttler.clone())
    }
}

fn map_send_error(err: reqwest::Error) -> Error {
    match err {
        e if e.is_timeout() => Error::timeout(e),
        e => Error::io(e),
    }
}

/// The offset to apply to the local clock after a clock-skew rejection.
///
/// Returns `None` unless the error is classified as clock skew and the
/// response carries a valid `Date` header.
fn skew_offset(
    classification: &Classification,
    headers: &HeaderMap,
    now: DateTime<Utc>,
) -> Option<TimeDelta> {
    if !classification.clock_skew {
        return None;
    }
    server_time(headers).map(|server| server - now)
}

fn server_time(headers: &HeaderMap) -> Option<DateTime<Utc>> {
    let date = headers.get(DATE)?.to_str().ok()?;
    DateTime::parse_from_rfc2822(date)
        .ok()
        .map(|d| d.with_timezone(&Utc))
}
