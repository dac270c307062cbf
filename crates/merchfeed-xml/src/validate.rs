//! Post-render well-formedness validation.
//!
//! Escaping is best-effort at the text level and cannot anticipate every
//! reference a double-encoded input decays into, so the rendered text is
//! parsed back before it leaves the library. This gate is authoritative and
//! runs on every render even though it duplicates work.

use quick_xml::Reader;
use quick_xml::escape::resolve_xml_entity;
use quick_xml::events::Event;

use crate::error::XmlError;

/// Re-parse a rendered document and confirm it is well-formed XML.
///
/// Structural errors propagate the underlying parser message. Character
/// references are checked against what XML itself defines: numeric
/// references must decode to a character, and XML predefines only the
/// `amp`, `lt`, `gt`, `apos` and `quot` named entities, so any other named
/// reference fails with an error naming the entity.
///
/// # Errors
///
/// Returns [`XmlError::UndefinedEntity`] for a dangling named reference,
/// [`XmlError::Malformed`] for a bare ampersand or invalid numeric
/// reference, or [`XmlError::QuickXml`] for structural parse failures.
pub fn validate_document(xml: &str) -> Result<(), XmlError> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event()? {
            Event::Text(text) => {
                let raw = text
                    .decode()
                    .map_err(|err| XmlError::Malformed(err.to_string()))?;
                check_references(&raw)?;
            }
            Event::GeneralRef(reference) => {
                let name = std::str::from_utf8(&reference)
                    .map_err(|err| XmlError::Malformed(err.to_string()))?;
                check_reference_name(name)?;
            }
            Event::Eof => return Ok(()),
            _ => {}
        }
    }
}

/// Check every character reference left inline in one run of text content.
fn check_references(text: &str) -> Result<(), XmlError> {
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        let tail = &rest[pos + 1..];
        let Some(end) = tail.find(';') else {
            return Err(XmlError::Malformed(
                "unescaped '&' in text content".to_owned(),
            ));
        };
        check_reference_name(&tail[..end])?;
        rest = &tail[end + 1..];
    }
    Ok(())
}

/// Check one reference name (the text between `&` and `;`).
fn check_reference_name(name: &str) -> Result<(), XmlError> {
    if let Some(num) = name.strip_prefix('#') {
        let decoded = if let Some(hex) = num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
            u32::from_str_radix(hex, 16).ok().and_then(char::from_u32)
        } else {
            num.parse::<u32>().ok().and_then(char::from_u32)
        };
        if decoded.is_none() {
            return Err(XmlError::Malformed(format!(
                "invalid character reference '&{name};'"
            )));
        }
        Ok(())
    } else if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
        Err(XmlError::Malformed(
            "unescaped '&' in text content".to_owned(),
        ))
    } else if resolve_xml_entity(name).is_none() {
        Err(XmlError::UndefinedEntity(name.to_owned()))
    } else {
        Ok(())
    }
}
