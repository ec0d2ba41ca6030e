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

pub mod anonymous;
pub mod static_key;

use crate::Result;
use crate::build_errors::Error as BuilderError;
use chrono::{DateTime, Utc};
use http::{HeaderMap, Method};
use std::future::Future;
use std::sync::Arc;

/// The environment variable holding the access key id.
pub const ACCESS_KEY_ID_VAR: &str = "NIMBUS_ACCESS_KEY_ID";
/// The environment variable holding the secret access key.
pub const SECRET_ACCESS_KEY_VAR: &str = "NIMBUS_SECRET_ACCESS_KEY";
/// The environment variable holding the (optional) session token.
pub const SESSION_TOKEN_VAR: &str = "NIMBUS_SESSION_TOKEN";

/// The result type for credentials builders.
pub type BuildResult<T> = std::result::Result<T, BuilderError>;

/// An implementation of [CredentialsProvider].
///
/// Represents a [Credentials] used to sign requests sent to Nimbus services.
/// The client libraries call [headers()][Credentials::headers] before every
/// attempt, and add the returned headers to the request.
///
/// This is a lightweight handle, clones share the same underlying provider.
#[derive(Clone, Debug)]
pub struct Credentials {
    // We use an `Arc` to hold the inner implementation.
    //
    // Credentials may be shared across threads (`Send + Sync`), so an `Rc`
    // will not do.
    //
    // They also need to derive `Clone`, as the service clients need to hold
    // them and each client is clonable.
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Returns the headers that sign `request`.
    pub async fn headers(&self, request: SignableRequest<'_>) -> Result<HeaderMap> {
        self.inner.headers(request).await
    }
}

/// The parts of a request covered by its signature.
///
/// The service clients create one of these for each attempt, after the request
/// is fully formed, and just before it is sent.
#[derive(Clone, Debug)]
pub struct SignableRequest<'a> {
    method: &'a Method,
    url: &'a url::Url,
    headers: &'a HeaderMap,
    body: &'a [u8],
    region: &'a str,
    service: &'a str,
    time: DateTime<Utc>,
}

impl<'a> SignableRequest<'a> {
    /// Creates a request signed at the current time, without a signing scope.
    pub fn new(
        method: &'a Method,
        url: &'a url::Url,
        headers: &'a HeaderMap,
        body: &'a [u8],
    ) -> Self {
        Self {
            method,
            url,
            headers,
            body,
            region: "",
            service: "",
            time: Utc::now(),
        }
    }

    /// Sets the region and service name the signature is scoped to.
    pub fn with_scope(mut self, region: &'a str, service: &'a str) -> Self {
        self.region = region;
        self.service = service;
        self
    }

    /// Sets the signing time.
    ///
    /// The client libraries use this to correct for clock skew between the
    /// local host and the service.
    pub fn with_time(mut self, time: DateTime<Utc>) -> Self {
        self.time = time;
        self
    }

    pub fn method(&self) -> &Method {
        self.method
    }

    pub fn url(&self) -> &url::Url {
        self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        self.headers
    }

    pub fn body(&self) -> &[u8] {
        self.body
    }

    pub fn region(&self) -> &str {
        self.region
    }

    pub fn service(&self) -> &str {
        self.service
    }

    pub fn time(&self) -> DateTime<Utc> {
        self.time
    }
}

/// Represents a [Credentials] used to sign requests.
///
/// # Notes
///
/// Application developers who directly use the Auth SDK can use this trait,
/// along with [Credentials::from()] to mock the credentials. Application
/// developers who use the client libraries should mock the client libraries
/// instead.
pub trait CredentialsProvider: std::fmt::Debug {
    /// Asynchronously constructs the headers that sign `request`.
    ///
    /// The returned headers are added to the request, replacing any headers
    /// with the same name.
    fn headers(
        &self,
        request: SignableRequest<'_>,
    ) -> impl Future<Output = Result<HeaderMap>> + Send;
}

pub(crate) mod dynamic {
    use super::{HeaderMap, Result, SignableRequest};

    /// A dyn-compatible, crate-private version of `CredentialsProvider`.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        async fn headers(&self, request: SignableRequest<'_>) -> Result<HeaderMap>;
    }

    /// The public CredentialsProvider implements the dyn-compatible CredentialsProvider.
    #[async_trait::async_trait]
    impl<T> CredentialsProvider for T
    where
        T: super::CredentialsProvider + Send + Sync,
    {
        async fn headers(&self, request: SignableRequest<'_>) -> Result<HeaderMap> {
            T::headers(self, request).await
        }
    }
}

/// A builder for the default credentials.
///
/// The default credentials are loaded from the environment:
///
/// * `NIMBUS_ACCESS_KEY_ID` is the access key id, it is required.
/// * `NIMBUS_SECRET_ACCESS_KEY` is the secret access key, it is required.
/// * `NIMBUS_SESSION_TOKEN` is the session token of temporary credentials, it
///   is optional.
///
/// # Example
/// ```
/// # use nimbus_auth::credentials::Builder;
/// match Builder::default().build() {
///     Ok(credentials) => println!("found default credentials {credentials:?}"),
///     Err(e) => println!("cannot load default credentials: {e}"),
/// }
/// ```
#[derive(Debug, Default)]
pub struct Builder {}

impl Builder {
    /// Returns a [Credentials] instance, using the values in the environment.
    ///
    /// Fails if the access key id or the secret access key are not set, or
    /// if they are empty.
    pub fn build(self) -> BuildResult<Credentials> {
        let key = required_var(ACCESS_KEY_ID_VAR)?;
        let secret = required_var(SECRET_ACCESS_KEY_VAR)?;
        let builder = static_key::Builder::new(key, secret);
        let builder = match optional_var(SESSION_TOKEN_VAR)? {
            Some(token) => builder.with_session_token(token),
            None => builder,
        };
        Ok(builder.build())
    }
}

fn required_var(name: &'static str) -> BuildResult<String> {
    optional_var(name)?.ok_or_else(|| BuilderError::missing_variable(name))
}

fn optional_var(name: &'static str) -> BuildResult<Option<String>> {
    match std::env::var(name) {
        Ok(v) if v.is_empty() => Ok(None),
        Ok(v) => Ok(Some(v)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(BuilderError::invalid_variable(name, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signing::{DATE_HEADER, SECURITY_TOKEN_HEADER};
    use http::header::{AUTHORIZATION, HeaderValue};
    use scoped_env::ScopedEnv;
    use serial_test::serial;

    #[derive(Debug)]
    struct FakeProvider;

    impl CredentialsProvider for FakeProvider {
        async fn headers(&self, request: SignableRequest<'_>) -> Result<HeaderMap> {
            let mut headers = HeaderMap::new();
            let value = HeaderValue::from_str(request.service())
                .map_err(|e| gax::error::CredentialsError::from_source(false, e))?;
            headers.insert("x-test-service", value);
            Ok(headers)
        }
    }

    fn test_url() -> url::Url {
        url::Url::parse("https://logs.us-east-1.nimbusapis.com/").expect("valid test URL")
    }

    #[tokio::test]
    async fn from_provider() -> anyhow::Result<()> {
        let credentials = Credentials::from(FakeProvider);
        let url = test_url();
        let headers = HeaderMap::new();
        let request = SignableRequest::new(&Method::POST, &url, &headers, b"")
            .with_scope("us-east-1", "logs");
        let got = credentials.clone().headers(request).await?;
        assert_eq!(
            got.get("x-test-service"),
            Some(&HeaderValue::from_static("logs"))
        );
        Ok(())
    }

    #[test]
    fn signable_request_accessors() {
        let url = test_url();
        let headers = HeaderMap::new();
        let time = Utc::now();
        let request = SignableRequest::new(&Method::GET, &url, &headers, b"body")
            .with_scope("eu-west-1", "dns")
            .with_time(time);
        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.url(), &url);
        assert!(request.headers().is_empty());
        assert_eq!(request.body(), b"body");
        assert_eq!(request.region(), "eu-west-1");
        assert_eq!(request.service(), "dns");
        assert_eq!(request.time(), time);
    }

    #[tokio::test]
    #[serial]
    async fn default_from_env() -> anyhow::Result<()> {
        let _k = ScopedEnv::set(ACCESS_KEY_ID_VAR, "env-access-key");
        let _s = ScopedEnv::set(SECRET_ACCESS_KEY_VAR, "env-secret");
        let _t = ScopedEnv::remove(SESSION_TOKEN_VAR);
        let credentials = Builder::default().build()?;

        let url = test_url();
        let headers = HeaderMap::new();
        let request = SignableRequest::new(&Method::POST, &url, &headers, b"")
            .with_scope("us-east-1", "logs");
        let got = credentials.headers(request).await?;
        let authorization = got
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(
            authorization.contains("Credential=env-access-key/"),
            "{authorization}"
        );
        assert!(got.get(DATE_HEADER).is_some(), "{got:?}");
        assert!(got.get(SECURITY_TOKEN_HEADER).is_none(), "{got:?}");
        Ok(())
    }

    #[tokio::test]
    #[serial]
    async fn default_with_session_token() -> anyhow::Result<()> {
        let _k = ScopedEnv::set(ACCESS_KEY_ID_VAR, "env-access-key");
        let _s = ScopedEnv::set(SECRET_ACCESS_KEY_VAR, "env-secret");
        let _t = ScopedEnv::set(SESSION_TOKEN_VAR, "env-session-token");
        let credentials = Builder::default().build()?;

        let url = test_url();
        let headers = HeaderMap::new();
        let request = SignableRequest::new(&Method::POST, &url, &headers, b"")
            .with_scope("us-east-1", "logs");
        let got = credentials.headers(request).await?;
        assert_eq!(
            got.get(SECURITY_TOKEN_HEADER),
            Some(&HeaderValue::from_static("env-session-token"))
        );
        Ok(())
    }

    #[test]
    #[serial]
    fn default_missing_key() {
        let _k = ScopedEnv::remove(ACCESS_KEY_ID_VAR);
        let _s = ScopedEnv::set(SECRET_ACCESS_KEY_VAR, "env-secret");
        let err = Builder::default().build().unwrap_err();
        assert!(err.is_missing_variable(), "{err:?}");
        assert!(err.to_string().contains(ACCESS_KEY_ID_VAR), "{err}");
    }

    #[test]
    #[serial]
    fn default_empty_secret() {
        let _k = ScopedEnv::set(ACCESS_KEY_ID_VAR, "env-access-key");
        let _s = ScopedEnv::set(SECRET_ACCESS_KEY_VAR, "");
        let err = Builder::default().build().unwrap_err();
        assert!(err.is_missing_variable(), "{err:?}");
        assert!(err.to_string().contains(SECRET_ACCESS_KEY_VAR), "{err}");
    }
}
