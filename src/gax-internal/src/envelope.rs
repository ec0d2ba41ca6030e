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

//! The wire-ready representation of a request, before it is signed.

use crate::document::Document;
use bytes::Bytes;
use gax::Result;
use http::{HeaderMap, HeaderName, HeaderValue};

pub const JSON_CONTENT_TYPE: &str = "application/x-nimbus-json-1.1";
pub const XML_CONTENT_TYPE: &str = "application/xml";
pub const TARGET_HEADER: &str = "x-nimbus-target";

/// The HTTP methods used by the services.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Head,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
        }
    }

    /// Returns true for the methods that are idempotent in HTTP.
    pub fn is_idempotent(&self) -> bool {
        !matches!(self, HttpMethod::Post)
    }
}

impl From<HttpMethod> for http::Method {
    fn from(value: HttpMethod) -> Self {
        match value {
            HttpMethod::Get => http::Method::GET,
            HttpMethod::Post => http::Method::POST,
            HttpMethod::Put => http::Method::PUT,
            HttpMethod::Delete => http::Method::DELETE,
            HttpMethod::Head => http::Method::HEAD,
        }
    }
}

/// A request ready to be signed and sent.
///
/// The envelope is built once per call. Each attempt signs a copy of it, the
/// envelope itself is never modified after it is built.
///
/// The envelope never holds the `host` or `content-length` headers. The
/// signer derives `host` from the endpoint URL, and the HTTP transport sets
/// both headers from the URL and the body when the request is sent.
#[derive(Clone, Debug)]
pub struct RequestEnvelope {
    method: HttpMethod,
    path: String,
    headers: HeaderMap,
    body: Option<Bytes>,
}

impl RequestEnvelope {
    /// Creates an envelope, `path` includes the query string, if any.
    pub fn new<P: Into<String>>(method: HttpMethod, path: P) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Serializes `body` into the envelope.
    pub fn with_body(mut self, body: &Document) -> Result<Self> {
        self.body = body.to_bytes()?;
        Ok(self)
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::XmlNode;
    use http::header::CONTENT_TYPE;
    use test_case::test_case;

    #[test_case(HttpMethod::Get, http::Method::GET, true)]
    #[test_case(HttpMethod::Post, http::Method::POST, false)]
    #[test_case(HttpMethod::Put, http::Method::PUT, true)]
    #[test_case(HttpMethod::Delete, http::Method::DELETE, true)]
    #[test_case(HttpMethod::Head, http::Method::HEAD, true)]
    fn methods(input: HttpMethod, want: http::Method, idempotent: bool) {
        assert_eq!(input.as_str(), want.as_str());
        assert_eq!(http::Method::from(input), want);
        assert_eq!(input.is_idempotent(), idempotent);
    }

    #[test]
    fn build() -> anyhow::Result<()> {
        let body = Document::Xml(XmlNode::new("Root").with_text("x"));
        let envelope = RequestEnvelope::new(HttpMethod::Put, "/b?lifecycle")
            .with_header(CONTENT_TYPE, HeaderValue::from_static(XML_CONTENT_TYPE))
            .with_body(&body)?;
        assert_eq!(envelope.method(), HttpMethod::Put);
        assert_eq!(envelope.path(), "/b?lifecycle");
        assert_eq!(
            envelope.headers().get(CONTENT_TYPE),
            Some(&HeaderValue::from_static(XML_CONTENT_TYPE))
        );
        let got = envelope
            .body()
            .map(|b| String::from_utf8_lossy(b).to_string())
            .unwrap_or_default();
        assert!(got.ends_with("<Root>x</Root>"), "{got}");
        Ok(())
    }

    #[test]
    fn empty_body() -> anyhow::Result<()> {
        let envelope = RequestEnvelope::new(HttpMethod::Get, "/").with_body(&Document::Empty)?;
        assert!(envelope.body().is_none(), "{envelope:?}");
        assert!(envelope.headers().is_empty(), "{envelope:?}");
        Ok(())
    }
}
