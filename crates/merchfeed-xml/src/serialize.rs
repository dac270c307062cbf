//! Feed XML serialization: converting feed types to the export document.
//!
//! This module provides the [`FeedSerialize`] trait and implementations for
//! all feed types that appear in the export document. Conventions:
//!
//! - Namespace: `http://merchfeed.dev/doc/feed/v1/`
//! - Booleans: lowercase `true`/`false`
//! - Dates: original lexical form, verbatim
//! - XML declaration: `<?xml version="1.0" encoding="UTF-8"?>`
//!
//! Custom attribute values flow through type inference and escaping: every
//! `Attribute` element carries a `type` attribute from
//! `{BOOLEAN, DECIMAL, INTEGER, DATE, STRING}`, and free text is written
//! pre-escaped. [`to_xml`] re-parses the rendered text before returning it;
//! see [`crate::validate`].

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesText, Event};

use merchfeed_model::{
    Assets, AttributeGroup, AttributeValue, Dimensions, Feed, FeedDate, Item, Logistics, Pricing,
    VariantMetaDataAttribute, Weight,
};

use crate::error::XmlError;
use crate::escape::{escape, escape_text};
use crate::infer::attribute_type;
use crate::validate::validate_document;

/// The feed document namespace.
pub const FEED_NAMESPACE: &str = "http://merchfeed.dev/doc/feed/v1/";

/// Trait for serializing feed types to XML.
///
/// Implementors write their content as child elements inside the current
/// XML context. The root element and namespace are handled by the
/// top-level [`to_xml`] function.
///
/// Uses `io::Result` because `quick_xml::Writer` closures require
/// `io::Result<()>`.
pub trait FeedSerialize {
    /// Serialize this value as XML child elements into the given writer.
    ///
    /// # Errors
    ///
    /// Returns `io::Error` if writing to the underlying writer fails.
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()>;
}

/// Render the complete export document for a feed.
///
/// Produces the XML declaration, the namespaced `ProductFeed` root, the
/// generation timestamp and every item in insertion order, then re-parses
/// the produced text as the well-formedness gate before returning it.
/// Rendering the same unmutated feed twice yields byte-identical output.
///
/// # Errors
///
/// Returns [`XmlError`] if serialization fails or the rendered text does
/// not parse back as well-formed XML (e.g. a dangling entity reference
/// left behind by double-encoded input).
pub fn to_xml(feed: &Feed) -> Result<String, XmlError> {
    tracing::debug!(items = feed.items().len(), "rendering product feed");

    let mut buf = Vec::with_capacity(4096);
    let mut writer = Writer::new(&mut buf);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    writer
        .create_element("ProductFeed")
        .with_attribute(("xmlns", FEED_NAMESPACE))
        .write_inner_content(|w| feed.serialize_xml(w))?;

    let text = String::from_utf8(buf).map_err(|e| XmlError::Malformed(e.to_string()))?;
    validate_document(&text)?;
    Ok(text)
}

/// Render a feed and write it to `path` as UTF-8 XML.
///
/// The document passes the well-formedness gate before anything touches the
/// filesystem; on failure nothing is written and no partial file is left
/// behind. The file handle is released on every exit path.
///
/// # Errors
///
/// Returns [`XmlError`] if rendering or validation fails, or if the write
/// itself fails.
pub fn save(feed: &Feed, path: impl AsRef<Path>) -> Result<(), XmlError> {
    let path = path.as_ref();
    let xml = match to_xml(feed) {
        Ok(xml) => xml,
        Err(e) => {
            tracing::error!(error = %e, "refusing to write malformed feed document");
            return Err(e);
        }
    };
    fs::write(path, xml.as_bytes())?;
    tracing::debug!(path = %path.display(), bytes = xml.len(), "feed document written");
    Ok(())
}

// ---------------------------------------------------------------------------
// Helper functions for writing common XML patterns
// ---------------------------------------------------------------------------

/// Write a simple `<tag>text</tag>` element.
fn write_text_element<W: Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> io::Result<()> {
    writer
        .create_element(tag)
        .write_text_content(BytesText::new(text))?;
    Ok(())
}

/// Write `<tag>text</tag>` with the text run through the escape pipeline.
fn write_escaped_element<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    text: &str,
) -> io::Result<()> {
    writer
        .create_element(tag)
        .write_text_content(BytesText::from_escaped(escape_text(text)))?;
    Ok(())
}

/// Write an escaped `<tag>text</tag>` only if the value is `Some`.
fn write_optional_escaped<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&str>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_escaped_element(writer, tag, v)?;
    }
    Ok(())
}

/// Write `<tag>value</tag>` for an f64.
fn write_f64_element<W: Write>(writer: &mut Writer<W>, tag: &str, value: f64) -> io::Result<()> {
    write_text_element(writer, tag, &value.to_string())
}

/// Write `<tag>value</tag>` for an optional f64.
fn write_optional_f64<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<f64>,
) -> io::Result<()> {
    if let Some(v) = value {
        write_f64_element(writer, tag, v)?;
    }
    Ok(())
}

/// Write `<tag>date</tag>` for an optional date, verbatim.
fn write_optional_date<W: Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: Option<&FeedDate>,
) -> io::Result<()> {
    if let Some(date) = value {
        write_text_element(writer, tag, date.as_str())?;
    }
    Ok(())
}

/// Write one `<Value>` element with pre-escaped text.
fn write_value<W: Write>(writer: &mut Writer<W>, text: &str) -> io::Result<()> {
    writer
        .create_element("Value")
        .write_text_content(BytesText::from_escaped(text))?;
    Ok(())
}

/// Write one typed `<Attribute>` element.
///
/// The value's semantic type is inferred and carried as the `type`
/// attribute; null renders as an empty element (no value child), lists as
/// repeated `<Value>` elements, everything else as a single `<Value>`.
fn write_attribute<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    value: &AttributeValue,
) -> io::Result<()> {
    let ty = attribute_type(value);
    let element = writer
        .create_element("Attribute")
        .with_attribute(("name", name))
        .with_attribute(("type", ty.as_str()));
    match value {
        AttributeValue::Null => {
            element.write_empty()?;
        }
        AttributeValue::List(entries) => {
            element.write_inner_content(|w| {
                for entry in entries {
                    write_value(w, &escape_text(entry))?;
                }
                Ok(())
            })?;
        }
        scalar => {
            element.write_inner_content(|w| write_value(w, &escape(scalar)))?;
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// FeedSerialize implementations
// ---------------------------------------------------------------------------

impl FeedSerialize for VariantMetaDataAttribute {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("Attribute")
            .with_attribute(("name", self.name()))
            .with_attribute(("role", self.role().as_str()))
            .write_inner_content(|w| write_value(w, &escape_text(self.value())))?;
        Ok(())
    }
}

impl FeedSerialize for AttributeGroup {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("AttributeGroup")
            .with_attribute(("name", self.name()))
            .write_inner_content(|w| {
                for (name, value) in self.entries() {
                    write_attribute(w, name, value)?;
                }
                Ok(())
            })?;
        Ok(())
    }
}

impl FeedSerialize for Dimensions {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("Dimensions")
            .with_attribute(("unit", self.unit.as_str()))
            .write_inner_content(|w| {
                write_f64_element(w, "Length", self.length)?;
                write_f64_element(w, "Width", self.width)?;
                write_f64_element(w, "Height", self.height)?;
                Ok(())
            })?;
        Ok(())
    }
}

impl FeedSerialize for Weight {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("Weight")
            .with_attribute(("unit", self.unit.as_str()))
            .write_text_content(BytesText::new(&self.value.to_string()))?;
        Ok(())
    }
}

impl FeedSerialize for Pricing {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer.create_element("Pricing").write_inner_content(|w| {
            write_f64_element(w, "ListPrice", self.list_price())?;
            write_f64_element(w, "SalePrice", self.sale_price())?;
            write_f64_element(w, "CostPrice", self.cost_price())?;
            write_text_element(w, "EffectiveDate", self.effective().as_str())?;
            Ok(())
        })?;
        Ok(())
    }
}

impl FeedSerialize for Assets {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("Assets")
            .with_attribute(("baseUrl", self.base_url.as_str()))
            .write_inner_content(|w| {
                for file in &self.files {
                    write_escaped_element(w, "Asset", file)?;
                }
                Ok(())
            })?;
        Ok(())
    }
}

impl FeedSerialize for Logistics {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer
            .create_element("Logistics")
            .write_inner_content(|w| {
                write_text_element(w, "SupplierNumber", &self.supplier_number.to_string())?;
                write_text_element(w, "WarehouseCode", &self.warehouse_code.to_string())?;
                write_text_element(w, "CommodityCode", &self.commodity_code.to_string())?;
                Ok(())
            })?;
        Ok(())
    }
}

impl FeedSerialize for Item {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        writer.create_element("Item").write_inner_content(|w| {
            write_escaped_element(w, "Sku", self.sku())?;
            write_escaped_element(w, "Barcode", self.barcode())?;
            write_optional_escaped(w, "Title", self.title())?;
            write_optional_escaped(w, "Brand", self.brand())?;
            write_optional_escaped(w, "ShortDescription", self.short_description())?;
            write_optional_escaped(w, "LongDescription", self.long_description())?;
            write_optional_f64(w, "TaxCode", self.tax_code())?;
            write_optional_date(w, "EffectiveFrom", self.effective_from())?;
            write_optional_date(w, "EffectiveTo", self.effective_to())?;
            if let Some(status) = self.publish_status() {
                write_text_element(w, "PublishStatus", status.as_str())?;
            }
            if let Some(status) = self.lifecycle_status() {
                write_text_element(w, "LifecycleStatus", status.as_str())?;
            }
            if let Some(dimensions) = self.dimensions() {
                dimensions.serialize_xml(w)?;
            }
            if let Some(weight) = self.weight() {
                weight.serialize_xml(w)?;
            }
            if let Some(pricing) = self.pricing() {
                pricing.serialize_xml(w)?;
            }
            for group in self.attribute_groups() {
                group.serialize_xml(w)?;
            }
            if !self.variant_meta_data().is_empty() {
                w.create_element("VariantMetaData").write_inner_content(|w2| {
                    for attribute in self.variant_meta_data() {
                        attribute.serialize_xml(w2)?;
                    }
                    Ok(())
                })?;
            }
            if let Some(assets) = self.assets() {
                assets.serialize_xml(w)?;
            }
            if let Some(logistics) = self.logistics() {
                logistics.serialize_xml(w)?;
            }
            Ok(())
        })?;
        Ok(())
    }
}

impl FeedSerialize for Feed {
    fn serialize_xml<W: Write>(&self, writer: &mut Writer<W>) -> io::Result<()> {
        write_text_element(writer, "GeneratedAt", self.generated_at().as_str())?;
        writer.create_element("Items").write_inner_content(|w| {
            for item in self.items() {
                item.serialize_xml(w)?;
            }
            Ok(())
        })?;
        Ok(())
    }
}
