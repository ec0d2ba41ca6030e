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

//! Credentials based on a static access key.
//!
//! A static access key is a pair of an access key id and a secret access key.
//! Temporary credentials also include a session token. These credentials sign
//! each request using [HMAC-SHA256][crate::signing].

use crate::Result;
use crate::credentials::{Credentials, CredentialsProvider, SignableRequest};
use crate::signing::{SigningKey, sign};
use http::HeaderMap;

struct StaticKeyCredentials {
    access_key_id: String,
    secret_access_key: String,
    session_token: Option<String>,
}

impl std::fmt::Debug for StaticKeyCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticKeyCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[censored]")
            .field("session_token", &self.session_token.as_ref().map(|_| "[censored]"))
            .finish()
    }
}

impl CredentialsProvider for StaticKeyCredentials {
    async fn headers(&self, request: SignableRequest<'_>) -> Result<HeaderMap> {
        let key = SigningKey {
            access_key_id: &self.access_key_id,
            secret_access_key: &self.secret_access_key,
            session_token: self.session_token.as_deref(),
        };
        sign(&request, key)
    }
}

/// A builder for credentials using a static access key.
///
/// # Example
/// ```
/// # use nimbus_auth::credentials::static_key::Builder;
/// let credentials = Builder::new("my-access-key-id", "my-secret-access-key")
///     .with_session_token("my-session-token")
///     .build();
/// // The secret values are never printed.
/// let debug = format!("{credentials:?}");
/// assert!(!debug.contains("my-secret-access-key"));
/// ```
#[derive(Clone)]
pub struct Builder {
    access_key_id: String,
    secret_access_key: String,
    session_token: Option<String>,
}

impl std::fmt::Debug for Builder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Builder")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[censored]")
            .field("session_token", &self.session_token.as_ref().map(|_| "[censored]"))
            .finish()
    }
}

impl Builder {
    /// Creates a new builder with the given access key id and secret.
    pub fn new<K: Into<String>, S: Into<String>>(access_key_id: K, secret_access_key: S) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
        }
    }

    /// Sets the session token, used with temporary credentials.
    pub fn with_session_token<T: Into<String>>(mut self, v: T) -> Self {
        self.session_token = Some(v.into());
        self
    }

    /// Returns a [Credentials] instance.
    pub fn build(self) -> Credentials {
        Credentials::from(StaticKeyCredentials {
            access_key_id: self.access_key_id,
            secret_access_key: self.secret_access_key,
            session_token: self.session_token,
        })
    }
}
