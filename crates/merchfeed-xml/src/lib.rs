//! XML serialization and validation for merchfeed catalog exports.
//!
//! This crate turns a [`merchfeed_model::Feed`] into the export document
//! consumed by the downstream catalog system.
//!
//! # Key components
//!
//! - [`FeedSerialize`] trait and [`to_xml`] function for rendering a feed
//!   to the export document
//! - [`attribute_type`] for inferring the semantic XML type of an
//!   attribute value
//! - [`escape`]/[`escape_text`] for resolving named character references
//!   and producing XML-safe text
//! - [`validate_document`], the render-then-reparse well-formedness gate
//! - [`save`] for persisting a rendered feed to disk
//!
//! # Document conventions
//!
//! - Namespace: `http://merchfeed.dev/doc/feed/v1/`
//! - Booleans: lowercase `true`/`false`
//! - Dates: original lexical form, verbatim
//! - XML declaration: `<?xml version="1.0" encoding="UTF-8"?>`

pub mod error;
pub mod escape;
pub mod infer;
pub mod serialize;
pub mod validate;

pub use error::XmlError;
pub use escape::{escape, escape_text};
pub use infer::attribute_type;
pub use serialize::{FEED_NAMESPACE, FeedSerialize, save, to_xml};
pub use validate::validate_document;
