//! Generic XML document tree.
//!
//! The API is consumed as schema-less XML: every response body is parsed
//! into an `Element` tree that mirrors the input exactly — tag names,
//! attribute order, child order and text content — and the endpoint
//! result types are thin views over that tree.

use quick_xml::escape::unescape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::{BggError, Result};

/// One XML element: tag name, ordered attributes, ordered children and
/// the accumulated text content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: String,
}

impl Element {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of the first attribute with the given name.
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

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Child elements with the given tag name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    pub fn first_child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Text content directly inside this element, entities unescaped.
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Parse an XML body into its `Element` tree.
///
/// No schema is applied: any well-formed document with a single root
/// parses; anything else is `MalformedXml`.
pub fn parse(body: &str) -> Result<Element> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                stack.push(open_element(&start)?);
            }
            Ok(Event::Empty(start)) => {
                let element = open_element(&start)?;
                close_element(&mut stack, &mut root, element)?;
            }
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| BggError::MalformedXml("unexpected closing tag".to_string()))?;
                close_element(&mut stack, &mut root, element)?;
            }
            Ok(Event::Text(text)) => {
                if let Some(parent) = stack.last_mut() {
                    let raw = String::from_utf8_lossy(&text).into_owned();
                    let value =
                        unescape(&raw).map_err(|e| BggError::MalformedXml(e.to_string()))?;
                    parent.text.push_str(&value);
                }
            }
            Ok(Event::CData(data)) => {
                if let Some(parent) = stack.last_mut() {
                    parent.text.push_str(&String::from_utf8_lossy(&data));
                }
            }
            // Entity references inside text arrive as their own events.
            Ok(Event::GeneralRef(entity)) => {
                if let Some(parent) = stack.last_mut() {
                    let name = String::from_utf8_lossy(&entity).into_owned();
                    parent.text.push_str(&resolve_entity(&name));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(BggError::MalformedXml(format!(
                    "error at position {}: {e}",
                    reader.error_position()
                )));
            }
            // Declarations, comments, doctypes and processing
            // instructions carry no response data.
            Ok(_) => {}
        }
    }

    if !stack.is_empty() {
        return Err(BggError::MalformedXml("unclosed element".to_string()));
    }
    root.ok_or_else(|| BggError::MalformedXml("no root element".to_string()))
}

// Predefined XML entities plus numeric character references. An entity
// this client cannot resolve is kept verbatim rather than dropped.
fn resolve_entity(name: &str) -> String {
    match name {
        "lt" => "<".to_string(),
        "gt" => ">".to_string(),
        "amp" => "&".to_string(),
        "apos" => "'".to_string(),
        "quot" => "\"".to_string(),
        _ => {
            let code = name
                .strip_prefix("#x")
                .or_else(|| name.strip_prefix("#X"))
                .and_then(|hex| u32::from_str_radix(hex, 16).ok())
                .or_else(|| name.strip_prefix('#').and_then(|dec| dec.parse().ok()));
            match code.and_then(char::from_u32) {
                Some(c) => c.to_string(),
                None => format!("&{name};"),
            }
        }
    }
}

fn open_element(start: &BytesStart<'_>) -> Result<Element> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| BggError::MalformedXml(e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| BggError::MalformedXml(e.to_string()))?
            .into_owned();
        attributes.push((key, value));
    }
    Ok(Element {
        name,
        attributes,
        children: Vec::new(),
        text: String::new(),
    })
}

// A finished element either becomes a child of the element below it on
// the stack, or the document root. A second root is trailing garbage.
fn close_element(
    stack: &mut Vec<Element>,
    root: &mut Option<Element>,
    element: Element,
) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    } else if root.is_some() {
        return Err(BggError::MalformedXml(
            "content after document root".to_string(),
        ));
    } else {
        *root = Some(element);
    }
    Ok(())
}
