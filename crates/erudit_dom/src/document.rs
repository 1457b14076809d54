/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Owned element tree and the lookup primitives used by the accessors.

use crate::query::Query;
use thiserror::Error;

/// Errors raised while reading a document.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("document is not well-formed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("document is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
}

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with its local name, attributes in document order and
/// mixed content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Builder used by tests and by callers assembling synthetic trees.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.push_text(text.into());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    fn push_text(&mut self, text: String) {
        if let Some(Node::Text(last)) = self.children.last_mut() {
            last.push_str(&text);
        } else {
            self.children.push(Node::Text(text));
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// Direct children with the given name, in document order.
    pub fn children_named<'a, 'n>(&'a self, name: &'n str) -> impl Iterator<Item = &'a Element> + 'n
    where
        'a: 'n,
    {
        self.child_elements().filter(move |child| child.name == name)
    }

    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children_named(name).next()
    }

    /// Text that precedes the first child element, like `lxml`'s `.text`.
    pub fn text(&self) -> Option<&str> {
        match self.children.first() {
            Some(Node::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Text of this element and all its descendants, concatenated.
    pub fn itertext(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for node in &self.children {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => element.collect_text(out),
            }
        }
    }

    /// True when the element has no text and no child elements.
    pub fn is_empty(&self) -> bool {
        self.text().map_or(true, str::is_empty) && self.child_elements().next().is_none()
    }

    /// True when the element carries no visible text anywhere below it.
    pub fn is_blank(&self) -> bool {
        self.itertext()
            .chars()
            .all(|c| matches!(c, ' ' | '\t' | '\n' | '\r'))
    }

    /// Every descendant in document order, excluding `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.child_elements().collect::<Vec<_>>().into_iter().rev().collect(),
        }
    }

    /// First descendant matching `path`.
    pub fn find(&self, path: &str) -> Option<&Element> {
        Query::parse(path)?.first(self)
    }

    /// All descendants matching `path`, in document order.
    pub fn find_all(&self, path: &str) -> Vec<&Element> {
        Query::parse(path)
            .map(|query| query.select(self))
            .unwrap_or_default()
    }

    /// `self` when its name is `name`, otherwise the first descendant named `name`.
    pub fn find_self_or(&self, name: &str) -> Option<&Element> {
        if self.name == name {
            Some(self)
        } else {
            self.find(name)
        }
    }

    /// `.text` of the first match for `path`.
    pub fn get_text(&self, path: &str) -> Option<String> {
        self.find(path).and_then(Element::text).map(str::to_string)
    }

    /// Concatenated text of the first match for `path`.
    pub fn get_itertext(&self, path: &str) -> Option<String> {
        self.find(path).map(Element::itertext)
    }

    /// First non-empty `.text` among several candidate paths.
    pub fn get_text_from_tags(&self, paths: &[&str]) -> Option<String> {
        paths
            .iter()
            .filter_map(|path| self.get_text(path))
            .find(|text| !text.is_empty())
    }
}

/// Pre-order iterator over the descendants of an element.
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        let children: Vec<&Element> = element.child_elements().collect();
        self.stack.extend(children.into_iter().rev());
        Some(element)
    }
}

/// A parsed document. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Parse a UTF-8 XML string. Namespaces are dropped: every element and
    /// attribute keeps only its local name.
    pub fn parse(xml: &str) -> Result<Self, ParseError> {
        let options = roxmltree::ParsingOptions {
            allow_dtd: true,
            ..Default::default()
        };
        let parsed = roxmltree::Document::parse_with_options(xml, options)?;
        let root = convert(parsed.root_element());
        tracing::trace!(root = root.name(), "parsed document");
        Ok(Self { root })
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        let xml = std::str::from_utf8(bytes)?;
        Self::parse(xml.strip_prefix('\u{feff}').unwrap_or(xml))
    }

    pub fn from_root(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn find(&self, path: &str) -> Option<&Element> {
        self.root.find(path)
    }

    pub fn find_all(&self, path: &str) -> Vec<&Element> {
        self.root.find_all(path)
    }

    pub fn get_text(&self, path: &str) -> Option<String> {
        self.root.get_text(path)
    }
}

fn convert(node: roxmltree::Node<'_, '_>) -> Element {
    let mut element = Element::new(node.tag_name().name());
    for attribute in node.attributes() {
        element
            .attributes
            .push((attribute.name().to_string(), attribute.value().to_string()));
    }
    for child in node.children() {
        if child.is_element() {
            element.children.push(Node::Element(convert(child)));
        } else if child.is_text() {
            if let Some(text) = child.text() {
                element.push_text(text.to_string());
            }
        }
    }
    element
}
