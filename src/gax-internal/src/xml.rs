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

//! A minimal XML document model.
//!
//! REST-XML services send and receive XML documents. The models for these
//! services convert to and from [XmlNode], and this module converts
//! [XmlNode] to and from bytes using `quick-xml`.

use gax::Result;
use gax::error::Error;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};
use std::str::FromStr;

/// An XML element, with its attributes, text, and child elements.
///
/// Namespace prefixes are removed from element names when parsing. Mixed
/// content is not preserved: all the text in an element is concatenated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct XmlNode {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<XmlNode>,
}

/// Implemented by models that can be created from an XML element.
///
/// Implementations read the child elements that are present, and leave any
/// other fields unset. Unknown elements are ignored.
pub trait FromXml: Sized {
    fn from_xml(node: &XmlNode) -> Result<Self>;
}

impl FromXml for () {
    fn from_xml(_: &XmlNode) -> Result<Self> {
        Ok(())
    }
}

/// Implemented by models that can be written as an XML element.
///
/// Implementations only emit the fields that are set. The element name is
/// chosen by the caller, as the same shape may appear under different names.
pub trait ToXml {
    fn to_xml(&self, name: &str) -> XmlNode;
}

impl XmlNode {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_attribute<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn with_text<T: Into<String>>(mut self, v: T) -> Self {
        self.text = v.into();
        self
    }

    pub fn with_child(mut self, child: XmlNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn push_child(&mut self, child: XmlNode) {
        self.children.push(child);
    }

    /// Adds `<name>{value}</name>` if `value` is set.
    pub fn with_text_child<T: ToString>(self, name: &str, value: Option<&T>) -> Self {
        match value {
            None => self,
            Some(v) => self.with_child(XmlNode::new(name).with_text(v.to_string())),
        }
    }

    /// Adds the element for `value` if it is set.
    pub fn with_optional_child<T: ToXml>(self, name: &str, value: Option<&T>) -> Self {
        match value {
            None => self,
            Some(v) => self.with_child(v.to_xml(name)),
        }
    }

    /// Adds one element for each item in `values`.
    pub fn with_children<'a, I, T>(mut self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        T: ToXml + 'a,
    {
        self.children
            .extend(values.into_iter().map(|v| v.to_xml(name)));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// The first child element named `name`.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).map(XmlNode::text)
    }

    /// Parses the text of the child element `name`, if present.
    pub fn parse_child<T>(&self, name: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.child_text(name)
            .map(|t| t.parse::<T>().map_err(Error::deser))
            .transpose()
    }

    /// Decodes the child element `name`, if present.
    pub fn decode_child<T: FromXml>(&self, name: &str) -> Result<Option<T>> {
        self.child(name).map(T::from_xml).transpose()
    }

    /// Decodes all the child elements named `name`.
    pub fn decode_children<T: FromXml>(&self, name: &str) -> Result<Vec<T>> {
        self.children_named(name).map(T::from_xml).collect()
    }

    /// Parses a complete XML document, returning its root element.
    pub fn parse(input: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(input);
        reader.config_mut().trim_text(true);
        let mut buf = Vec::new();
        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root = None;
        loop {
            match reader.read_event_into(&mut buf).map_err(Error::deser)? {
                Event::Start(e) => stack.push(start_node(&e)?),
                Event::Empty(e) => close_node(&mut stack, &mut root, start_node(&e)?)?,
                Event::End(_) => {
                    let node = stack
                        .pop()
                        .ok_or_else(|| Error::deser("unbalanced closing tag"))?;
                    close_node(&mut stack, &mut root, node)?;
                }
                Event::Text(t) => {
                    let text = t.unescape().map_err(Error::deser)?;
                    append_text(&mut stack, &text);
                }
                Event::CData(c) => {
                    let text = String::from_utf8_lossy(&c.into_inner()).into_owned();
                    append_text(&mut stack, &text);
                }
                Event::Eof => break,
                _ => {}
            }
            buf.clear();
        }
        if !stack.is_empty() {
            return Err(Error::deser("unterminated XML element"));
        }
        root.ok_or_else(|| Error::deser("missing XML root element"))
    }

    /// Writes this element as a complete XML document.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = Writer::new(Vec::new());
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(Error::ser)?;
        write_node(&mut writer, self)?;
        Ok(writer.into_inner())
    }
}

fn start_node(e: &BytesStart<'_>) -> Result<XmlNode> {
    let mut node = XmlNode::new(String::from_utf8_lossy(e.local_name().as_ref()));
    for attr in e.attributes() {
        let attr = attr.map_err(Error::deser)?;
        let value = attr.unescape_value().map_err(Error::deser)?;
        node.attributes.push((
            String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
            value.into_owned(),
        ));
    }
    Ok(node)
}

fn close_node(stack: &mut [XmlNode], root: &mut Option<XmlNode>, node: XmlNode) -> Result<()> {
    match (stack.last_mut(), root.is_some()) {
        (Some(parent), _) => parent.children.push(node),
        (None, false) => *root = Some(node),
        (None, true) => return Err(Error::deser("multiple XML root elements")),
    }
    Ok(())
}

fn append_text(stack: &mut [XmlNode], text: &str) {
    if text.trim().is_empty() {
        return;
    }
    if let Some(node) = stack.last_mut() {
        node.text.push_str(text);
    }
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &XmlNode) -> Result<()> {
    let mut start = BytesStart::new(node.name.as_str());
    for (k, v) in &node.attributes {
        start.push_attribute((k.as_str(), v.as_str()));
    }
    if node.text.is_empty() && node.children.is_empty() {
        return writer.write_event(Event::Empty(start)).map_err(Error::ser);
    }
    writer.write_event(Event::Start(start)).map_err(Error::ser)?;
    if !node.text.is_empty() {
        writer
            .write_event(Event::Text(BytesText::new(&node.text)))
            .map_err(Error::ser)?;
    }
    for child in &node.children {
        write_node(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(node.name.as_str())))
        .map_err(Error::ser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_nested() -> anyhow::Result<()> {
        let input = r#"<?xml version="1.0" encoding="UTF-8"?>
            <LifecycleConfiguration xmlns="http://storage.nimbusapis.com/doc/2006-03-01/">
                <Rule>
                    <ID>archive</ID>
                    <Prefix>logs/</Prefix>
                    <Status>Enabled</Status>
                    <Transition><Days>30</Days><StorageClass>GLACIER</StorageClass></Transition>
                    <Transition><Days>90</Days></Transition>
                </Rule>
                <Rule><ID>other</ID><Prefix/></Rule>
            </LifecycleConfiguration>"#;
        let root = XmlNode::parse(input.as_bytes())?;
        assert_eq!(root.name(), "LifecycleConfiguration");
        assert_eq!(
            root.attribute("xmlns"),
            Some("http://storage.nimbusapis.com/doc/2006-03-01/")
        );
        assert_eq!(root.children().len(), 2);
        let rule = root.child("Rule").ok_or_else(|| anyhow::anyhow!("missing Rule"))?;
        assert_eq!(rule.child_text("ID"), Some("archive"));
        assert_eq!(rule.children_named("Transition").count(), 2);
        assert_eq!(rule.text(), "");
        let days = rule
            .child("Transition")
            .map(|t| t.parse_child::<i32>("Days"))
            .transpose()?
            .flatten();
        assert_eq!(days, Some(30));

        let other = root.children_named("Rule").nth(1);
        assert_eq!(other.and_then(|r| r.child_text("Prefix")), Some(""));
        assert_eq!(other.and_then(|r| r.child_text("Status")), None);
        Ok(())
    }

    #[test]
    fn entities() -> anyhow::Result<()> {
        let node = XmlNode::new("Message")
            .with_attribute("note", "a \"quoted\" value")
            .with_text("1 < 2 & 3 > 2");
        let bytes = node.to_bytes()?;
        let text = String::from_utf8(bytes.clone())?;
        assert!(text.contains("1 &lt; 2 &amp; 3 &gt; 2"), "{text}");
        let got = XmlNode::parse(&bytes)?;
        assert_eq!(got, node);
        Ok(())
    }

    #[test]
    fn cdata() -> anyhow::Result<()> {
        let got = XmlNode::parse(b"<Message><![CDATA[a <b> c]]></Message>")?;
        assert_eq!(got.text(), "a <b> c");
        Ok(())
    }

    #[test]
    fn namespace_prefix() -> anyhow::Result<()> {
        let got = XmlNode::parse(b"<s:Error xmlns:s=\"urn:test\"><s:Code>X</s:Code></s:Error>")?;
        assert_eq!(got.name(), "Error");
        assert_eq!(got.child_text("Code"), Some("X"));
        Ok(())
    }

    #[test]
    fn write_empty_and_nested() -> anyhow::Result<()> {
        let node = XmlNode::new("Root")
            .with_child(XmlNode::new("Empty"))
            .with_text_child("Count", Some(&42))
            .with_text_child::<String>("Missing", None);
        let text = String::from_utf8(node.to_bytes()?)?;
        assert_eq!(
            text,
            r#"<?xml version="1.0" encoding="UTF-8"?><Root><Empty/><Count>42</Count></Root>"#
        );
        Ok(())
    }

    #[test]
    fn parse_errors() {
        let inputs: [&[u8]; 5] = [
            b"",
            b"<a><b></a>",
            b"<a>",
            b"<a/><b/>",
            b"<a x=1/>",
        ];
        for input in inputs {
            let err = XmlNode::parse(input).unwrap_err();
            assert!(err.is_deserialization(), "{err:?}");
        }
    }

    #[test]
    fn parse_child_errors() -> anyhow::Result<()> {
        let node = XmlNode::parse(b"<a><Days>not-a-number</Days></a>")?;
        let err = node.parse_child::<i32>("Days").unwrap_err();
        assert!(err.is_deserialization(), "{err:?}");
        assert_eq!(node.parse_child::<i32>("Missing")?, None);
        Ok(())
    }
}
