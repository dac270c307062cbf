//! XML layer error types.

use std::io;

/// Errors that can occur while rendering, validating or persisting a feed
/// document.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// An I/O error during XML writing or file persistence.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// An error from the underlying quick-xml library, raised while
    /// re-parsing the rendered document.
    #[error("XML processing error: {0}")]
    QuickXml(#[from] quick_xml::Error),

    /// The rendered document contains a named entity reference outside the
    /// five XML predefined entities.
    #[error("Entity '{0}' not defined")]
    UndefinedEntity(String),

    /// The rendered document failed well-formedness validation for another
    /// reason.
    #[error("malformed document: {0}")]
    Malformed(String),
}
