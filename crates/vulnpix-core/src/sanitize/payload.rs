// SPDX-License-Identifier: Apache-2.0

//! Restricted parsing for structured search payloads.
//!
//! XML goes through an event scan that rejects any document type
//! declaration before content is processed; custom entities are never
//! defined, undefined entity references fail unescaping, and no
//! external resource is ever fetched. YAML goes through typed serde
//! deserialization into a fixed plain-data shape, so type-constructor
//! tags cannot instantiate anything.

use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Deserialize;

use crate::error::VulnpixError;

/// Wire format of an inbound search payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadFormat {
    /// XML body with a `<query>` element.
    Xml,
    /// YAML body with a `query` key.
    Yaml,
}

/// Plain-data shape accepted from YAML payloads.
#[derive(Debug, Deserialize)]
struct SearchDocument {
    query: Option<String>,
}

/// Extracts the search query from a structured payload.
///
/// Returns `Ok(None)` when the document parses but carries no query
/// value. Callers decide what a missing query means; the search
/// handlers treat it as an empty result set.
///
/// # Errors
///
/// Returns [`VulnpixError::XmlParse`] or [`VulnpixError::YamlParse`]
/// on malformed input, and for XML on any `<!DOCTYPE>` declaration.
pub fn parse_structured_payload(
    input: &str,
    format: PayloadFormat,
) -> Result<Option<String>, VulnpixError> {
    match format {
        PayloadFormat::Xml => parse_xml_query(input),
        PayloadFormat::Yaml => parse_yaml_query(input),
    }
}

/// Scans XML events for the first `<query>` element's text.
///
/// `Event::DocType` is rejected outright, which covers inline
/// `<!ENTITY>` declarations as well: they only occur inside a
/// document type declaration's internal subset.
fn parse_xml_query(input: &str) -> Result<Option<String>, VulnpixError> {
    let mut reader = Reader::from_str(input);
    let mut query: Option<String> = None;
    let mut in_query = false;
    let mut seen_query = false;
    let mut saw_element = false;

    loop {
        match reader.read_event() {
            Ok(Event::DocType(_)) => {
                return Err(VulnpixError::xml_parse(
                    "document type declarations are not allowed",
                ));
            }
            Ok(Event::Start(e)) => {
                saw_element = true;
                if !seen_query && e.local_name().as_ref() == b"query" {
                    seen_query = true;
                    in_query = true;
                    query = Some(String::new());
                }
            }
            Ok(Event::Empty(e)) => {
                saw_element = true;
                if !seen_query && e.local_name().as_ref() == b"query" {
                    seen_query = true;
                    query = Some(String::new());
                }
            }
            Ok(Event::End(e)) => {
                if in_query && e.local_name().as_ref() == b"query" {
                    in_query = false;
                }
            }
            Ok(Event::Text(t)) if in_query => {
                let text = t
                    .unescape()
                    .map_err(|e| VulnpixError::xml_parse(e.to_string()))?;
                if let Some(q) = query.as_mut() {
                    q.push_str(&text);
                }
            }
            Ok(Event::CData(t)) if in_query => {
                let text = std::str::from_utf8(&t)
                    .map_err(|e| VulnpixError::xml_parse(e.to_string()))?;
                if let Some(q) = query.as_mut() {
                    q.push_str(text);
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(VulnpixError::xml_parse(e.to_string())),
        }
    }

    if !saw_element {
        return Err(VulnpixError::xml_parse("no element found"));
    }
    Ok(query)
}

/// Deserializes a YAML document into [`SearchDocument`].
fn parse_yaml_query(input: &str) -> Result<Option<String>, VulnpixError> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    let document: SearchDocument = serde_saphyr::from_str(input)
        .map_err(|e| VulnpixError::yaml_parse(e.to_string()))?;
    Ok(document.query)
}
