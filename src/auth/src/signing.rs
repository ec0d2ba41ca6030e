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

//! Computes request signatures.
//!
//! Requests are signed with an HMAC-SHA256 signature over a canonical form of
//! the request. The canonical request includes the method, the URI path, the
//! sorted query parameters, a subset of the headers, and the SHA-256 hash of
//! the body. The signing key is derived from the secret access key, scoped to
//! a date, a region, and a service.

use crate::Result;
use crate::credentials::SignableRequest;
use gax::error::CredentialsError;
use hmac::{Hmac, Mac};
use http::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// The name of the signing algorithm, included in the `authorization` header.
pub const ALGORITHM: &str = "NIMBUS-HMAC-SHA256";

/// The header carrying the signing timestamp.
pub const DATE_HEADER: &str = "x-nimbus-date";

/// The header carrying the hex-encoded SHA-256 hash of the body.
pub const CONTENT_SHA256_HEADER: &str = "x-nimbus-content-sha256";

/// The header carrying the session token of temporary credentials.
pub const SECURITY_TOKEN_HEADER: &str = "x-nimbus-security-token";

const SCOPE_TERMINATOR: &str = "nimbus_request";
const KEY_PREFIX: &str = "NIMBUS";
const SIGNED_HEADER_PREFIX: &str = "x-nimbus-";
const TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";
const DATE_FORMAT: &str = "%Y%m%d";

// RFC 3986 unreserved characters are not encoded.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// The secret material used to sign a request.
#[derive(Clone, Copy)]
pub struct SigningKey<'a> {
    pub access_key_id: &'a str,
    pub secret_access_key: &'a str,
    pub session_token: Option<&'a str>,
}

impl std::fmt::Debug for SigningKey<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"[censored]")
            .field("session_token", &self.session_token.map(|_| "[censored]"))
            .finish()
    }
}

/// Signs `request`, returning the headers to add to it.
///
/// The returned headers always include `authorization`, the signing timestamp,
/// and the body hash. They include the session token when `key` has one.
pub fn sign(request: &SignableRequest<'_>, key: SigningKey<'_>) -> Result<HeaderMap> {
    let timestamp = request.time().format(TIMESTAMP_FORMAT).to_string();
    let date = request.time().format(DATE_FORMAT).to_string();
    let payload_hash = hex_sha256(request.body());

    let mut added = HeaderMap::new();
    added.insert(HeaderName::from_static(DATE_HEADER), header_value(&timestamp)?);
    added.insert(
        HeaderName::from_static(CONTENT_SHA256_HEADER),
        header_value(&payload_hash)?,
    );
    if let Some(token) = key.session_token {
        added.insert(
            HeaderName::from_static(SECURITY_TOKEN_HEADER),
            header_value(token)?,
        );
    }

    let headers = canonical_headers(request, &added);
    let signed_headers = headers.keys().map(String::as_str).collect::<Vec<_>>().join(";");
    let canonical = canonical_request(request, &headers, &signed_headers, &payload_hash);
    let scope = format!(
        "{date}/{}/{}/{SCOPE_TERMINATOR}",
        request.region(),
        request.service()
    );
    let string_to_sign = format!(
        "{ALGORITHM}\n{timestamp}\n{scope}\n{}",
        hex_sha256(canonical.as_bytes())
    );
    let signing_key = signing_key(
        key.secret_access_key,
        &date,
        request.region(),
        request.service(),
    )?;
    let signature = hex::encode(hmac_sha256(&signing_key, string_to_sign.as_bytes())?);

    let authorization = format!(
        "{ALGORITHM} Credential={}/{scope}, SignedHeaders={signed_headers}, Signature={signature}",
        key.access_key_id
    );
    let mut authorization = header_value(&authorization)?;
    authorization.set_sensitive(true);
    added.insert(AUTHORIZATION, authorization);
    Ok(added)
}

/// Derives the signing key for a given date, region, and service.
pub fn signing_key(secret: &str, date: &str, region: &str, service: &str) -> Result<Vec<u8>> {
    let k_date = hmac_sha256(format!("{KEY_PREFIX}{secret}").as_bytes(), date.as_bytes())?;
    let k_region = hmac_sha256(&k_date, region.as_bytes())?;
    let k_service = hmac_sha256(&k_region, service.as_bytes())?;
    hmac_sha256(&k_service, SCOPE_TERMINATOR.as_bytes())
}

fn canonical_request(
    request: &SignableRequest<'_>,
    headers: &BTreeMap<String, String>,
    signed_headers: &str,
    payload_hash: &str,
) -> String {
    let headers = headers
        .iter()
        .map(|(k, v)| format!("{k}:{v}\n"))
        .collect::<String>();
    format!(
        "{}\n{}\n{}\n{headers}\n{signed_headers}\n{payload_hash}",
        request.method().as_str(),
        canonical_uri(request.url()),
        canonical_query(request.url()),
    )
}

fn canonical_uri(url: &url::Url) -> &str {
    match url.path() {
        "" => "/",
        p => p,
    }
}

fn canonical_query(url: &url::Url) -> String {
    let mut pairs = url
        .query_pairs()
        .map(|(k, v)| {
            (
                utf8_percent_encode(&k, UNRESERVED).to_string(),
                utf8_percent_encode(&v, UNRESERVED).to_string(),
            )
        })
        .collect::<Vec<_>>();
    pairs.sort();
    pairs
        .into_iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

// Returns the signed headers, sorted by their lower-cased name.
fn canonical_headers(request: &SignableRequest<'_>, added: &HeaderMap) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    if let Some(host) = request.url().host_str() {
        let host = match request.url().port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };
        headers.insert("host".to_string(), host);
    }
    let signed = request
        .headers()
        .iter()
        .chain(added.iter())
        .filter(|(name, _)| {
            *name == CONTENT_TYPE || name.as_str().starts_with(SIGNED_HEADER_PREFIX)
        });
    for (name, value) in signed {
        let value = String::from_utf8_lossy(value.as_bytes()).trim().to_string();
        headers
            .entry(name.as_str().to_string())
            .and_modify(|v: &mut String| {
                v.push(',');
                v.push_str(&value);
            })
            .or_insert(value);
    }
    headers
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| CredentialsError::from_source(false, e))
}

fn hex_sha256(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let mut mac = Hmac::<Sha256>::new_from_slice(key)
        .map_err(|e| CredentialsError::from_msg(false, format!("invalid signing key: {e}")))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}
