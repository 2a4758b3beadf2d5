//! In-memory XML tree and its serialization.
//!
//! [`XmlElement`] is a minimal ordered tree: attributes and children keep
//! insertion order, so serializing the same tree always yields the same bytes.
//! [`XmlDocument`] wraps a root element and writes it with `quick-xml`,
//! prefixed by a UTF-8 XML declaration.
//!
//! Text and attribute values are escaped on output. Characters outside the
//! XML 1.0 `Char` production, such as most C0 controls, cannot be escaped at
//! all, so serialization rejects them with
//! [`GenerateError::InvalidCharacter`].

use crate::error::GenerateError;
use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;

/// A single XML element with optional text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: String,
    text: Option<String>,
    attributes: Vec<(String, String)>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Declares a namespace on this element.
    ///
    /// `None` declares the default namespace (`xmlns`), `Some(prefix)` declares `xmlns:prefix`.
    pub fn declare_namespace(&mut self, prefix: Option<&str>, uri: &str) -> &mut Self {
        let name = match prefix {
            Some(prefix) => format!("xmlns:{prefix}"),
            None => "xmlns".to_string(),
        };
        self.add_attribute(name, uri)
    }

    /// Appends an attribute. Values are escaped on serialization.
    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Appends an empty child element and returns it.
    pub fn add_child(&mut self, name: impl Into<String>) -> &mut XmlElement {
        self.children.push(XmlElement::new(name));
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Appends a child element holding `text` and returns it.
    pub fn add_text_child(
        &mut self,
        name: impl Into<String>,
        text: impl Into<String>,
    ) -> &mut XmlElement {
        let child = self.add_child(name);
        child.text = Some(text.into());
        child
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// First child with the given qualified name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.name == name)
    }

    fn write<W: Write>(&self, writer: &mut Writer<W>) -> Result<(), GenerateError> {
        let mut start = BytesStart::new(self.name.as_str());
        for (key, value) in &self.attributes {
            ensure_xml_chars(&self.name, value)?;
            start.push_attribute((key.as_str(), value.as_str()));
        }

        if self.text.is_none() && self.children.is_empty() {
            return write_event(writer, Event::Empty(start));
        }

        write_event(writer, Event::Start(start))?;
        if let Some(text) = &self.text {
            ensure_xml_chars(&self.name, text)?;
            write_event(
                writer,
                Event::Text(BytesText::from_escaped(partial_escape(text.as_str()))),
            )?;
        }
        for child in &self.children {
            child.write(writer)?;
        }
        write_event(writer, Event::End(BytesEnd::new(self.name.as_str())))
    }
}

/// A complete XML document ready to be serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    root: XmlElement,
}

impl XmlDocument {
    pub fn new(root: XmlElement) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    pub fn into_root(self) -> XmlElement {
        self.root
    }

    /// Writes the document to `out`.
    ///
    /// With `indent` set, nested elements are placed on their own lines and
    /// indented by that many spaces per level; otherwise the body is compact.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::Write`] if the underlying writer fails and
    /// [`GenerateError::InvalidCharacter`] if a value cannot be represented in XML.
    pub fn write_to<W: Write>(&self, out: W, indent: Option<usize>) -> Result<(), GenerateError> {
        let indent = indent.filter(|size| *size > 0);
        let mut writer = match indent {
            Some(size) => Writer::new_with_indent(out, b' ', size),
            None => Writer::new(out),
        };

        write_event(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
        )?;
        // the indenting writer breaks the line before the root on its own
        if indent.is_none() {
            writer
                .get_mut()
                .write_all(b"\n")
                .map_err(|e| GenerateError::Write(e.to_string()))?;
        }

        self.root.write(&mut writer)?;

        writer
            .get_mut()
            .write_all(b"\n")
            .map_err(|e| GenerateError::Write(e.to_string()))
    }

    /// Serializes the document to a compact string.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if serialization fails.
    pub fn to_xml_string(&self) -> Result<String, GenerateError> {
        self.to_xml_string_with_indent(None)
    }

    /// Serializes the document to a string, optionally indented.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if serialization fails.
    pub fn to_xml_string_with_indent(&self, indent: Option<usize>) -> Result<String, GenerateError> {
        let mut buffer = Vec::new();
        self.write_to(&mut buffer, indent)?;
        Ok(String::from_utf8(buffer)?)
    }
}

/// Whether `c` matches the XML 1.0 `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\u{9}' | '\u{A}' | '\u{D}'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

fn ensure_xml_chars(element: &str, value: &str) -> Result<(), GenerateError> {
    match value.chars().find(|c| !is_xml_char(*c)) {
        Some(character) => Err(GenerateError::InvalidCharacter {
            element: element.to_string(),
            character,
        }),
        None => Ok(()),
    }
}

fn write_event<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<(), GenerateError> {
    writer
        .write_event(event)
        .map_err(|e| GenerateError::Write(e.to_string()))
}
