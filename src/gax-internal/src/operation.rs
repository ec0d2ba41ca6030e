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

//! Describes each service operation.
//!
//! Every operation of every service is an instance of [Operation]: a name, an
//! HTTP method, a path template, and the functions to convert the request and
//! response. The [Dispatcher][crate::dispatcher::Dispatcher] executes any of
//! them in the same way.

use crate::document::Document;
use crate::envelope::{
    HttpMethod, JSON_CONTENT_TYPE, RequestEnvelope, TARGET_HEADER, XML_CONTENT_TYPE,
};
use crate::path_template;
use crate::service::{Protocol, ServiceInfo};
use crate::xml::FromXml;
use gax::Result;
use gax::error::Error;
use http::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

pub type PathParams = Vec<(&'static str, Option<String>)>;

/// A successful response, with its body parsed into a [Document].
#[derive(Clone, Debug)]
pub struct DecodedResponse {
    status: u16,
    headers: HeaderMap,
    document: Document,
}

impl DecodedResponse {
    pub fn new(status: u16, headers: HeaderMap, document: Document) -> Self {
        Self {
            status,
            headers,
            document,
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}

/// The descriptor for a single operation.
pub struct Operation<Req, Res> {
    pub name: &'static str,
    pub method: HttpMethod,
    /// The request path, `{Name}` placeholders are replaced by `path_params`.
    pub path_template: &'static str,
    pub path_params: fn(&Req) -> PathParams,
    /// Converts the request into its body, if any.
    pub encode: fn(&Req) -> Result<Option<Document>>,
    pub decode: fn(DecodedResponse) -> Result<Res>,
    pub idempotent: bool,
}

// The derived implementations would require `Req: Clone` and `Res: Clone`.
impl<Req, Res> Clone for Operation<Req, Res> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Req, Res> Copy for Operation<Req, Res> {}

impl<Req, Res> std::fmt::Debug for Operation<Req, Res> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Operation")
            .field("name", &self.name)
            .field("method", &self.method)
            .field("path_template", &self.path_template)
            .field("idempotent", &self.idempotent)
            .finish()
    }
}

impl<Req, Res> Operation<Req, Res>
where
    Req: serde::Serialize,
    Res: serde::de::DeserializeOwned + Default,
{
    /// An operation in a JSON-protocol service.
    ///
    /// These are always `POST /`, the request is the body.
    pub fn json(name: &'static str) -> Self {
        Self {
            name,
            method: HttpMethod::Post,
            path_template: "/",
            path_params: no_path_params::<Req>,
            encode: encode_json::<Req>,
            decode: decode_json::<Res>,
            idempotent: false,
        }
    }
}

impl<Req, Res> Operation<Req, Res>
where
    Res: FromXml + Default,
{
    /// An operation in a REST-XML service.
    ///
    /// The operation has no body and no path parameters, use the `with_*()`
    /// functions to add them.
    pub fn rest_xml(name: &'static str, method: HttpMethod, path_template: &'static str) -> Self {
        Self {
            name,
            method,
            path_template,
            path_params: no_path_params::<Req>,
            encode: no_body::<Req>,
            decode: decode_xml::<Res>,
            idempotent: method.is_idempotent(),
        }
    }
}

impl<Req, Res> Operation<Req, Res> {
    pub fn with_path_params(mut self, v: fn(&Req) -> PathParams) -> Self {
        self.path_params = v;
        self
    }

    pub fn with_encode(mut self, v: fn(&Req) -> Result<Option<Document>>) -> Self {
        self.encode = v;
        self
    }

    pub fn with_decode(mut self, v: fn(DecodedResponse) -> Result<Res>) -> Self {
        self.decode = v;
        self
    }

    pub fn with_idempotency(mut self, v: bool) -> Self {
        self.idempotent = v;
        self
    }

    /// Builds the envelope for `request`.
    ///
    /// Fails if a path parameter is missing or the request cannot be
    /// serialized. No other validation is performed, fields the service
    /// requires are sent as absent, and the service rejects the request.
    ///
    /// The envelope does not include `host` or `content-length`, the HTTP
    /// transport adds them.
    pub fn envelope(&self, service: &ServiceInfo, request: &Req) -> Result<RequestEnvelope> {
        let path = path_template::expand(self.path_template, &(self.path_params)(request))?;
        let body = (self.encode)(request)?;
        let envelope = RequestEnvelope::new(self.method, path);
        match service.protocol {
            Protocol::Json { target_prefix } => {
                let target = HeaderValue::from_str(&format!("{target_prefix}.{}", self.name))
                    .map_err(Error::ser)?;
                // Requests without any fields are sent as an empty object.
                let body = body.unwrap_or_else(|| Document::Json(serde_json::json!({})));
                envelope
                    .with_header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
                    .with_header(HeaderName::from_static(TARGET_HEADER), target)
                    .with_body(&body)
            }
            Protocol::RestXml => match body {
                Some(b) if !b.is_empty() => envelope
                    .with_header(CONTENT_TYPE, HeaderValue::from_static(XML_CONTENT_TYPE))
                    .with_body(&b),
                _ => Ok(envelope),
            },
        }
    }
}

pub fn no_path_params<Req>(_: &Req) -> PathParams {
    Vec::new()
}

pub fn no_body<Req>(_: &Req) -> Result<Option<Document>> {
    Ok(None)
}

pub fn encode_json<Req: serde::Serialize>(request: &Req) -> Result<Option<Document>> {
    Document::from_json(request).map(Some)
}

pub fn decode_json<Res>(response: DecodedResponse) -> Result<Res>
where
    Res: serde::de::DeserializeOwned + Default,
{
    response.into_document().into_json()
}

pub fn decode_xml<Res: FromXml + Default>(response: DecodedResponse) -> Result<Res> {
    response.into_document().into_xml()
}

/// Discards the response body, for operations without a result.
pub fn decode_empty(_: DecodedResponse) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::{ToXml, XmlNode};
    use pretty_assertions::assert_eq;

    const JSON_SERVICE: ServiceInfo = ServiceInfo {
        signing_name: "logs",
        endpoint_prefix: "logs",
        protocol: Protocol::Json {
            target_prefix: "Logs_20140328",
        },
        global_endpoint: None,
        signing_region: None,
    };

    const XML_SERVICE: ServiceInfo = ServiceInfo {
        signing_name: "storage",
        endpoint_prefix: "storage",
        protocol: Protocol::RestXml,
        global_endpoint: None,
        signing_region: None,
    };

    #[derive(Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    struct JsonRequest {
        #[serde(skip_serializing_if = "Option::is_none")]
        log_group_name: Option<String>,
    }

    #[derive(Debug, Default, PartialEq)]
    struct XmlRequest {
        bucket: Option<String>,
        status: Option<String>,
    }

    #[derive(Debug, Default, PartialEq)]
    struct XmlResponse {
        status: Option<String>,
    }

    impl FromXml for XmlResponse {
        fn from_xml(node: &XmlNode) -> Result<Self> {
            Ok(Self {
                status: node.child_text("Status").map(str::to_string),
            })
        }
    }

    impl ToXml for XmlRequest {
        fn to_xml(&self, name: &str) -> XmlNode {
            XmlNode::new(name).with_text_child("Status", self.status.as_ref())
        }
    }

    fn xml_operation() -> Operation<XmlRequest, XmlResponse> {
        Operation::rest_xml("PutThing", HttpMethod::Put, "/{Bucket}?thing")
            .with_path_params(|r: &XmlRequest| vec![("Bucket", r.bucket.clone())])
            .with_encode(|r: &XmlRequest| {
                Ok(r.status.as_ref().map(|_| Document::from_xml("Thing", r)))
            })
    }

    #[test]
    fn json_envelope() -> anyhow::Result<()> {
        let operation = Operation::<JsonRequest, serde_json::Value>::json("DescribeLogGroups");
        assert_eq!(operation.method, HttpMethod::Post);
        assert!(!operation.idempotent, "{operation:?}");

        let envelope = operation.envelope(&JSON_SERVICE, &JsonRequest::default())?;
        assert_eq!(envelope.path(), "/");
        assert_eq!(
            envelope.headers().get(CONTENT_TYPE),
            Some(&HeaderValue::from_static(JSON_CONTENT_TYPE))
        );
        assert_eq!(
            envelope.headers().get(TARGET_HEADER),
            Some(&HeaderValue::from_static("Logs_20140328.DescribeLogGroups"))
        );
        assert_eq!(envelope.body().map(|b| b.as_ref()), Some(b"{}".as_slice()));
        assert!(envelope.headers().get(http::header::HOST).is_none(), "{envelope:?}");
        assert!(
            envelope.headers().get(http::header::CONTENT_LENGTH).is_none(),
            "{envelope:?}"
        );

        let request = JsonRequest {
            log_group_name: Some("my-group".into()),
        };
        let envelope = operation.envelope(&JSON_SERVICE, &request)?;
        assert_eq!(
            envelope.body().map(|b| b.as_ref()),
            Some(br#"{"logGroupName":"my-group"}"#.as_slice())
        );
        Ok(())
    }

    #[test]
    fn xml_envelope() -> anyhow::Result<()> {
        let operation = xml_operation();
        assert!(operation.idempotent, "{operation:?}");
        let request = XmlRequest {
            bucket: Some("my-bucket".into()),
            status: Some("Enabled".into()),
        };
        let envelope = operation.envelope(&XML_SERVICE, &request)?;
        assert_eq!(envelope.method(), HttpMethod::Put);
        assert_eq!(envelope.path(), "/my-bucket?thing");
        assert_eq!(
            envelope.headers().get(CONTENT_TYPE),
            Some(&HeaderValue::from_static(XML_CONTENT_TYPE))
        );
        let body = envelope
            .body()
            .map(|b| String::from_utf8_lossy(b).to_string())
            .unwrap_or_default();
        assert!(body.ends_with("<Thing><Status>Enabled</Status></Thing>"), "{body}");
        Ok(())
    }

    #[test]
    fn xml_envelope_without_body() -> anyhow::Result<()> {
        let request = XmlRequest {
            bucket: Some("my-bucket".into()),
            status: None,
        };
        let envelope = xml_operation().envelope(&XML_SERVICE, &request)?;
        assert!(envelope.body().is_none(), "{envelope:?}");
        assert!(envelope.headers().get(CONTENT_TYPE).is_none(), "{envelope:?}");
        Ok(())
    }

    #[test]
    fn missing_path_parameter() {
        let err = xml_operation()
            .envelope(&XML_SERVICE, &XmlRequest::default())
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
    }

    #[test]
    fn decoders() -> anyhow::Result<()> {
        let response = DecodedResponse::new(200, HeaderMap::new(), Document::Empty);
        let got = (xml_operation().decode)(response)?;
        assert_eq!(got, XmlResponse::default());

        let document =
            Document::Xml(XmlNode::new("R").with_child(XmlNode::new("Status").with_text("Ok")));
        let response = DecodedResponse::new(200, HeaderMap::new(), document);
        assert_eq!(response.status(), 200);
        assert!(response.headers().is_empty());
        let got = decode_xml::<XmlResponse>(response)?;
        assert_eq!(got.status.as_deref(), Some("Ok"));

        let response = DecodedResponse::new(
            200,
            HeaderMap::new(),
            Document::Json(serde_json::json!({"logGroupName": "g"})),
        );
        let got = decode_json::<JsonRequest>(response)?;
        assert_eq!(got.log_group_name.as_deref(), Some("g"));

        let response = DecodedResponse::new(
            200,
            HeaderMap::new(),
            Document::Json(serde_json::json!({"ignored": true})),
        );
        decode_empty(response)?;
        Ok(())
    }
}
