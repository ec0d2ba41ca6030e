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

//! Converts error responses into [ServiceError].

use crate::xml::XmlNode;
use gax::error::ServiceError;
use gax::error_table::{Classification, ErrorTable};
use http::{HeaderMap, StatusCode};

const REQUEST_ID_HEADERS: [&str; 2] = ["x-nimbus-request-id", "x-request-id"];

/// Decodes an error response and classifies it using `table`.
///
/// The body is parsed as a structured error when the content type is JSON or
/// XML. Without a content type the first character of the body picks the
/// format. Otherwise, or if the body does not parse, the error is synthesized
/// from the status line.
pub(crate) fn to_service_error(
    status: StatusCode,
    headers: &HeaderMap,
    body: &[u8],
    table: &ErrorTable,
) -> (ServiceError, Classification) {
    let content_type = headers
        .get(http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_ascii_lowercase();
    let structured = if content_type.contains("json") {
        from_json(body)
    } else if content_type.contains("xml") {
        from_xml(body)
    } else if content_type.is_empty() {
        match body.trim_ascii_start().first() {
            Some(b'{') => from_json(body),
            Some(b'<') => from_xml(body),
            _ => None,
        }
    } else {
        None
    };
    let (code, message, body_request_id) =
        structured.unwrap_or_else(|| from_status_line(status, body));
    let request_id = REQUEST_ID_HEADERS
        .iter()
        .find_map(|h| headers.get(*h).and_then(|v| v.to_str().ok()))
        .map(str::to_string)
        .or(body_request_id);
    let classification = table.classify(status.as_u16(), &code);
    let error = ServiceError::new()
        .set_error_code(code)
        .set_message(message)
        .set_http_status(status.as_u16())
        .set_retryable(classification.retryable)
        .set_throttling(classification.throttling)
        .set_or_clear_request_id(request_id);
    (error, classification)
}

type Decoded = (String, String, Option<String>);

fn from_json(body: &[u8]) -> Option<Decoded> {
    let value = serde_json::from_slice::<serde_json::Value>(body).ok()?;
    let field = |name: &str| value.get(name).and_then(|v| v.as_str());
    let code = field("__type")
        .map(|t| t.rsplit_once('#').map(|(_, c)| c).unwrap_or(t))
        .or_else(|| field("code"))
        .or_else(|| field("Code"))?;
    let message = field("message").or_else(|| field("Message")).unwrap_or_default();
    Some((code.to_string(), message.to_string(), None))
}

fn from_xml(body: &[u8]) -> Option<Decoded> {
    let root = XmlNode::parse(body).ok()?;
    let error = match root.name() {
        "Error" => &root,
        "ErrorResponse" => root.child("Error")?,
        _ => return None,
    };
    let code = error.child_text("Code")?;
    let message = error.child_text("Message").unwrap_or_default();
    let request_id = error
        .child_text("RequestId")
        .or_else(|| root.child_text("RequestId"))
        .map(str::to_string);
    Some((code.to_string(), message.to_string(), request_id))
}

fn from_status_line(status: StatusCode, body: &[u8]) -> Decoded {
    let reason = status.canonical_reason().unwrap_or("Unknown");
    let code = reason.replace(' ', "");
    let text = String::from_utf8_lossy(body);
    let message = match text.trim() {
        "" => reason.to_string(),
        t => t.to_string(),
    };
    (code, message, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use http::header::CONTENT_TYPE;
    use test_case::test_case;

    fn headers(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test_case(r#"{"__type": "com.nimbus.logs#ResourceNotFoundException", "message": "not here"}"#, "ResourceNotFoundException", "not here")]
    #[test_case(r#"{"__type": "ThrottlingException", "Message": "slow down"}"#, "ThrottlingException", "slow down")]
    #[test_case(r#"{"code": "InvalidParameterException", "message": "bad"}"#, "InvalidParameterException", "bad")]
    #[test_case(r#"{"__type": "AccessDenied"}"#, "AccessDenied", "")]
    fn json(body: &str, code: &str, message: &str) {
        let (error, _) = to_service_error(
            StatusCode::BAD_REQUEST,
            &headers("application/x-nimbus-json-1.1"),
            body.as_bytes(),
            &ErrorTable::default(),
        );
        assert_eq!(error.error_code(), code);
        assert_eq!(error.message(), message);
        assert_eq!(error.http_status(), 400);
    }

    #[test]
    fn xml() {
        let body = r#"<?xml version="1.0" encoding="UTF-8"?>
            <Error>
              <Code>NoSuchBucket</Code>
              <Message>The specified bucket does not exist</Message>
              <RequestId>req-123</RequestId>
            </Error>"#;
        let (error, classification) = to_service_error(
            StatusCode::NOT_FOUND,
            &headers("application/xml"),
            body.as_bytes(),
            &ErrorTable::default(),
        );
        assert_eq!(error.error_code(), "NoSuchBucket");
        assert_eq!(error.message(), "The specified bucket does not exist");
        assert_eq!(error.request_id(), Some("req-123"));
        assert!(!error.is_retryable(), "{error:?}");
        assert!(!classification.clock_skew, "{classification:?}");
    }

    #[test]
    fn xml_error_response() {
        let body = r#"<ErrorResponse>
              <Error><Code>Throttling</Code><Message>Rate exceeded</Message></Error>
              <RequestId>req-456</RequestId>
            </ErrorResponse>"#;
        let mut headers = headers("text/xml");
        headers.insert("x-nimbus-request-id", HeaderValue::from_static("hdr-789"));
        let (error, _) = to_service_error(
            StatusCode::BAD_REQUEST,
            &headers,
            body.as_bytes(),
            &ErrorTable::default(),
        );
        assert_eq!(error.error_code(), "Throttling");
        assert!(error.is_throttling(), "{error:?}");
        assert!(error.is_retryable(), "{error:?}");
        // The header takes precedence over the body.
        assert_eq!(error.request_id(), Some("hdr-789"));
    }

    #[test_case(StatusCode::SERVICE_UNAVAILABLE, "", "ServiceUnavailable", "Service Unavailable", true)]
    #[test_case(StatusCode::INTERNAL_SERVER_ERROR, "oops", "InternalServerError", "oops", true)]
    #[test_case(StatusCode::NOT_FOUND, "", "NotFound", "Not Found", false)]
    #[test_case(StatusCode::TOO_MANY_REQUESTS, "", "TooManyRequests", "Too Many Requests", true)]
    fn status_line(status: StatusCode, body: &str, code: &str, message: &str, retryable: bool) {
        let (error, _) = to_service_error(
            status,
            &headers("text/plain"),
            body.as_bytes(),
            &ErrorTable::default(),
        );
        assert_eq!(error.error_code(), code);
        assert_eq!(error.message(), message);
        assert_eq!(error.is_retryable(), retryable, "{error:?}");
        assert_eq!(error.request_id(), None);
    }

    #[test_case("application/json", "not json"; "bad json")]
    #[test_case("application/json", r#"{"message": "no code"}"#; "json without code")]
    #[test_case("application/xml", "<Other/>"; "unexpected xml root")]
    #[test_case("application/xml", "<Error"; "bad xml")]
    fn unparseable_body_uses_status_line(content_type: &'static str, body: &str) {
        let (error, _) = to_service_error(
            StatusCode::BAD_GATEWAY,
            &headers(content_type),
            body.as_bytes(),
            &ErrorTable::default(),
        );
        assert_eq!(error.error_code(), "BadGateway");
        assert_eq!(error.message(), body);
        assert!(error.is_retryable(), "{error:?}");
    }

    #[test_case(r#" {"__type": "ValidationException", "message": "bad"}"#; "json")]
    #[test_case("<Error><Code>ValidationException</Code><Message>bad</Message></Error>"; "xml")]
    fn missing_content_type(body: &str) {
        let (error, _) = to_service_error(
            StatusCode::BAD_REQUEST,
            &HeaderMap::new(),
            body.as_bytes(),
            &ErrorTable::default(),
        );
        assert_eq!(error.error_code(), "ValidationException");
        assert_eq!(error.message(), "bad");
    }

    #[test]
    fn clock_skew() {
        let (error, classification) = to_service_error(
            StatusCode::FORBIDDEN,
            &headers("application/json"),
            br#"{"__type": "InvalidSignatureException", "message": "Signature expired"}"#,
            &ErrorTable::default(),
        );
        assert!(classification.clock_skew, "{classification:?}");
        assert!(!error.is_retryable(), "{error:?}");
    }

    #[test]
    fn request_id_header() {
        let mut headers = headers("text/plain");
        headers.insert("x-request-id", HeaderValue::from_static("fallback-id"));
        let (error, _) = to_service_error(
            StatusCode::BAD_REQUEST,
            &headers,
            b"",
            &ErrorTable::default(),
        );
        assert_eq!(error.request_id(), Some("fallback-id"));
    }
}
