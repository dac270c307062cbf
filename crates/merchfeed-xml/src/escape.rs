//! Value escaping for feed text content.
//!
//! Free text entering the document goes through two passes:
//!
//! 1. *Resolution*: human-authored named character references (`&bull;`)
//!    are resolved against the HTML named-entity table into literal
//!    characters, and numeric references are decoded. References that do
//!    not resolve are passed through verbatim.
//! 2. *Encoding*: `<` and `>` become `&lt;`/`&gt;`, and a bare `&` becomes
//!    `&amp;`. An `&` that begins a reference-shaped run (`&name;`,
//!    `&#10;`, `&#x2022;`) is left intact, so text that decayed out of a
//!    double-encoded reference (`&amp;bull;` resolving to literal
//!    `&bull;`) survives into the document and is rejected by the
//!    well-formedness gate rather than silently re-encoded.
//!
//! Resolution happens in a single pass; characters produced by it are not
//! rescanned.

use std::borrow::Cow;

use quick_xml::escape::resolve_html5_entity;

use merchfeed_model::AttributeValue;

/// Escape a scalar attribute value into write-ready text.
///
/// Booleans render lowercase, numbers through `Display` (`.` separator, no
/// locale formatting), dates stay in lexical form, null is empty, and list
/// entries are escaped individually and joined with a space (the document
/// serializer instead emits one value element per entry).
#[must_use]
pub fn escape(value: &AttributeValue) -> String {
    match value {
        AttributeValue::Bool(true) => "true".to_owned(),
        AttributeValue::Bool(false) => "false".to_owned(),
        AttributeValue::Int(n) => n.to_string(),
        AttributeValue::Decimal(d) => d.to_string(),
        AttributeValue::Text(s) => escape_text(s).into_owned(),
        AttributeValue::List(entries) => entries
            .iter()
            .map(|entry| escape_text(entry))
            .collect::<Vec<_>>()
            .join(" "),
        AttributeValue::Null => String::new(),
    }
}

/// Escape a raw text field into write-ready XML text (both passes).
#[must_use]
pub fn escape_text(text: &str) -> Cow<'_, str> {
    match resolve_character_references(text) {
        Cow::Borrowed(resolved) => encode_text(resolved),
        Cow::Owned(resolved) => Cow::Owned(encode_text(&resolved).into_owned()),
    }
}

/// Resolve named and numeric character references into literal characters.
///
/// Unresolvable references are kept verbatim; they become dangling
/// references in the document and fail the well-formedness gate.
#[must_use]
pub fn resolve_character_references(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];
        match reference_end(tail) {
            Some(end) => {
                let name = &tail[..end];
                match resolve_reference(name) {
                    Some(resolved) => out.push_str(&resolved),
                    None => {
                        out.push('&');
                        out.push_str(name);
                        out.push(';');
                    }
                }
                rest = &tail[end + 1..];
            }
            None => {
                out.push('&');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Encode resolved text for embedding in XML character data.
fn encode_text(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    let mut rest = text;
    while let Some(pos) = rest.find(['&', '<', '>']) {
        out.push_str(&rest[..pos]);
        match &rest[pos..pos + 1] {
            "<" => {
                out.push_str("&lt;");
                rest = &rest[pos + 1..];
            }
            ">" => {
                out.push_str("&gt;");
                rest = &rest[pos + 1..];
            }
            _ => {
                let tail = &rest[pos + 1..];
                if let Some(end) = reference_end(tail) {
                    // reference-shaped; keep for the gate to judge
                    out.push('&');
                    out.push_str(&tail[..=end]);
                    rest = &tail[end + 1..];
                } else {
                    out.push_str("&amp;");
                    rest = tail;
                }
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Byte offset of the `;` closing a reference starting right after an `&`,
/// or `None` if the run is not reference-shaped.
fn reference_end(tail: &str) -> Option<usize> {
    for (i, c) in tail.char_indices() {
        if c == ';' {
            return if i == 0 { None } else { Some(i) };
        }
        if !(c.is_ascii_alphanumeric() || c == '#') {
            return None;
        }
    }
    None
}

/// Resolve one reference name (the text between `&` and `;`).
fn resolve_reference(name: &str) -> Option<Cow<'static, str>> {
    if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        u32::from_str_radix(hex, 16)
            .ok()
            .and_then(char::from_u32)
            .map(|c| Cow::Owned(c.to_string()))
    } else if let Some(dec) = name.strip_prefix('#') {
        dec.parse::<u32>()
            .ok()
            .and_then(char::from_u32)
            .map(|c| Cow::Owned(c.to_string()))
    } else {
        resolve_html5_entity(name).map(Cow::Borrowed)
    }
}
