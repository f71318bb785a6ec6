//! Build an [`Element`] tree from XML text with the quick-xml event reader.

use crate::doxygen::tree::{Element, Node};
use crate::error::ScrapeError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fmt::Display;

/// Deepest element nesting accepted. Tree walks recurse per level, so
/// anything deeper is rejected before it is built.
pub const MAX_DEPTH: usize = 256;

/// Parse a complete XML document and return its root element.
///
/// The whole document is read before anything is returned, so a malformed
/// file never yields a partial tree.
pub fn parse(input: &str) -> Result<Element, ScrapeError> {
    let mut reader = Reader::from_str(input);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if stack.len() >= MAX_DEPTH {
                    return Err(ScrapeError::TooDeep(MAX_DEPTH));
                }
                stack.push(open(&reader, &e)?);
            }
            Ok(Event::Empty(e)) => {
                let element = open(&reader, &e)?;
                attach(&reader, &mut stack, &mut root, element)?;
            }
            Ok(Event::End(_)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| xml_error(&reader, "unexpected closing tag"))?;
                attach(&reader, &mut stack, &mut root, element)?;
            }
            Ok(Event::Text(t)) => {
                let text = t.unescape().map_err(|e| xml_error(&reader, e))?;
                match stack.last_mut() {
                    Some(parent) => parent.push_text(&text),
                    // Whitespace between top-level nodes has no parent
                    None if text.trim().is_empty() => {}
                    None => return Err(xml_error(&reader, "text outside root element")),
                }
            }
            Ok(Event::CData(c)) => match stack.last_mut() {
                Some(parent) => parent.push_text(&String::from_utf8_lossy(&c.into_inner())),
                None => return Err(xml_error(&reader, "CDATA outside root element")),
            },
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(xml_error(&reader, e)),
        }
    }

    if let Some(unclosed) = stack.pop() {
        return Err(ScrapeError::Unclosed(unclosed.name));
    }
    root.ok_or(ScrapeError::NoRoot)
}

fn open(reader: &Reader<&[u8]>, start: &BytesStart<'_>) -> Result<Element, ScrapeError> {
    let mut element = Element::new(String::from_utf8_lossy(start.local_name().as_ref()));
    for attr in start.attributes() {
        let attr = attr.map_err(|e| xml_error(reader, e))?;
        let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| xml_error(reader, e))?
            .into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn attach(
    reader: &Reader<&[u8]>,
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), ScrapeError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(Node::Element(element)),
        None if root.is_none() => *root = Some(element),
        None => return Err(xml_error(reader, "multiple root elements")),
    }
    Ok(())
}

fn xml_error(reader: &Reader<&[u8]>, err: impl Display) -> ScrapeError {
    ScrapeError::Xml {
        position: reader.buffer_position() as u64,
        message: err.to_string(),
    }
}
