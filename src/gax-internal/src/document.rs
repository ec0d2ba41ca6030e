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

//! Request and response documents.

use crate::service::Protocol;
use crate::xml::{FromXml, ToXml, XmlNode};
use bytes::Bytes;
use gax::Result;
use gax::error::Error;

/// The body of a request or a response, in the service's wire format.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Document {
    /// No body. Successful responses without a body decode to this.
    #[default]
    Empty,
    Json(serde_json::Value),
    Xml(XmlNode),
}

impl Document {
    /// Converts a JSON model into a document.
    ///
    /// Fields that are not set are skipped by the model's serializer.
    pub fn from_json<T: serde::Serialize>(value: &T) -> Result<Self> {
        serde_json::to_value(value)
            .map(Document::Json)
            .map_err(Error::ser)
    }

    /// Converts an XML model into a document with the given root element.
    pub fn from_xml<T: ToXml>(name: &str, value: &T) -> Self {
        Document::Xml(value.to_xml(name))
    }

    /// Parses a response body.
    ///
    /// Bodies that are empty, or only contain whitespace, are
    /// [Document::Empty].
    pub fn parse(protocol: Protocol, body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Document::Empty);
        }
        match protocol {
            Protocol::Json { .. } => serde_json::from_slice(body)
                .map(Document::Json)
                .map_err(Error::deser),
            Protocol::RestXml => XmlNode::parse(body).map(Document::Xml),
        }
    }

    /// Serializes the document, returns `None` for [Document::Empty].
    pub fn to_bytes(&self) -> Result<Option<Bytes>> {
        match self {
            Document::Empty => Ok(None),
            Document::Json(v) => serde_json::to_vec(v)
                .map(|b| Some(Bytes::from(b)))
                .map_err(Error::ser),
            Document::Xml(n) => n.to_bytes().map(|b| Some(Bytes::from(b))),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Document::Empty)
    }

    /// Converts the document into a JSON model.
    ///
    /// An empty document produces the default value, that is, a model with
    /// all its fields unset.
    pub fn into_json<T>(self) -> Result<T>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        match self {
            Document::Empty => Ok(T::default()),
            Document::Json(v) => serde_json::from_value(v).map_err(Error::deser),
            Document::Xml(n) => Err(Error::deser(format!(
                "expected a JSON document, got an XML element <{}>",
                n.name()
            ))),
        }
    }

    /// Converts the document into an XML model.
    ///
    /// An empty document produces the default value, that is, a model with
    /// all its fields unset.
    pub fn into_xml<T>(self) -> Result<T>
    where
        T: FromXml + Default,
    {
        match self {
            Document::Empty => Ok(T::default()),
            Document::Xml(n) => T::from_xml(&n),
            Document::Json(_) => Err(Error::deser("expected an XML document, got JSON")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    const JSON: Protocol = Protocol::Json {
        target_prefix: "Test_20240101",
    };

    #[derive(Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
    #[serde(default, rename_all = "camelCase")]
    struct Model {
        #[serde(skip_serializing_if = "Option::is_none")]
        log_group_name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<i32>,
    }

    #[derive(Debug, Default, PartialEq)]
    struct XmlModel {
        status: Option<String>,
    }

    impl FromXml for XmlModel {
        fn from_xml(node: &XmlNode) -> Result<Self> {
            Ok(Self {
                status: node.child_text("Status").map(str::to_string),
            })
        }
    }

    impl ToXml for XmlModel {
        fn to_xml(&self, name: &str) -> XmlNode {
            XmlNode::new(name).with_text_child("Status", self.status.as_ref())
        }
    }

    #[test_case(JSON, b""; "json empty")]
    #[test_case(JSON, b" \n"; "json whitespace")]
    #[test_case(Protocol::RestXml, b""; "xml empty")]
    fn parse_empty(protocol: Protocol, body: &[u8]) -> anyhow::Result<()> {
        let got = Document::parse(protocol, body)?;
        assert!(got.is_empty(), "{got:?}");
        let model = got.into_json::<Model>()?;
        assert_eq!(model, Model::default());
        Ok(())
    }

    #[test]
    fn json_absent_and_set() -> anyhow::Result<()> {
        let model = Model {
            log_group_name: None,
            limit: Some(0),
        };
        let document = Document::from_json(&model)?;
        assert_eq!(document, Document::Json(json!({"limit": 0})));
        let bytes = document.to_bytes()?;
        assert_eq!(bytes, Some(Bytes::from_static(br#"{"limit":0}"#)));
        Ok(())
    }

    #[test]
    fn json_ignores_unknown_fields() -> anyhow::Result<()> {
        let document = Document::parse(JSON, br#"{"logGroupName": "g", "unknownField": [1, 2]}"#)?;
        let got = document.into_json::<Model>()?;
        assert_eq!(
            got,
            Model {
                log_group_name: Some("g".into()),
                limit: None,
            }
        );
        Ok(())
    }

    #[test]
    fn xml_round_trip() -> anyhow::Result<()> {
        let model = XmlModel {
            status: Some("Healthy".into()),
        };
        let document = Document::from_xml("Root", &model);
        let bytes = document
            .to_bytes()?
            .ok_or_else(|| anyhow::anyhow!("missing body"))?;
        let got = Document::parse(Protocol::RestXml, &bytes)?.into_xml::<XmlModel>()?;
        assert_eq!(got, model);
        Ok(())
    }

    #[test]
    fn parse_errors() {
        let err = Document::parse(JSON, b"{not json").unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        let err = Document::parse(Protocol::RestXml, b"<a>").unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
    }

    #[test]
    fn format_mismatch() {
        let err = Document::Xml(XmlNode::new("Root"))
            .into_json::<Model>()
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        let err = Document::Json(json!({}))
            .into_xml::<XmlModel>()
            .unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
    }

    #[test]
    fn empty_has_no_bytes() -> anyhow::Result<()> {
        assert_eq!(Document::Empty.to_bytes()?, None);
        Ok(())
    }
}
