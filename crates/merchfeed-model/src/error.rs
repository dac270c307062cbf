//! Feed model error types.
//!
//! Defines [`FeedError`], the single validation error taxonomy for the
//! model layer. Every setter and smart constructor fails through this type,
//! with the offending value embedded in the message.

use std::convert::Infallible;

/// Errors raised while populating feed model types.
///
/// All variants are raised synchronously at the point of detection; a
/// failed call leaves the target unchanged.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// A publish status outside the closed vocabulary.
    #[error("Invalid publish status \"{0}\"")]
    InvalidPublishStatus(String),

    /// A lifecycle status outside the closed vocabulary.
    #[error("Invalid lifecycle status \"{0}\"")]
    InvalidLifecycleStatus(String),

    /// A dimension unit outside the closed vocabulary.
    #[error("Invalid dimension unit \"{0}\"")]
    InvalidDimensionUnit(String),

    /// A weight unit outside the closed vocabulary.
    #[error("Invalid weight unit \"{0}\"")]
    InvalidWeightUnit(String),

    /// A variant role outside the closed vocabulary.
    #[error("Invalid variant role \"{0}\"")]
    InvalidVariantRole(String),

    /// A date that does not match any accepted ISO form.
    #[error("Invalid date \"{0}\"")]
    InvalidDate(String),

    /// A negative list price.
    #[error("List price must not be negative, got {0}")]
    NegativeListPrice(f64),

    /// A negative tax code.
    #[error("Tax code must not be negative, got {0}")]
    NegativeTaxCode(f64),

    /// Something other than a variant metadata attribute was attached as
    /// variant metadata.
    #[error("Variant Meta Data must be an instance of VariantMetaDataAttribute")]
    VariantMetaDataType,
}

impl From<Infallible> for FeedError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
