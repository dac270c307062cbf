//! Data model for merchfeed catalog exports.
//!
//! This crate holds the typed building blocks of a product feed: the
//! [`Item`] aggregate with its validated setters, the [`Feed`] collection,
//! closed vocabulary enums (publish/lifecycle status, units, variant
//! roles), and the [`AttributeValue`] scalar type flowing through the
//! custom attribute pipeline.
//!
//! Validation happens at mutation time: every vocabulary is a closed enum
//! with a fallible `FromStr`, so an invalid state is rejected the moment a
//! caller tries to set it, not at render time.

pub mod error;
pub mod feed;
pub mod item;
pub mod types;

pub use error::FeedError;
pub use feed::Feed;
pub use item::Item;
pub use types::{
    Assets, AttributeGroup, AttributeType, AttributeValue, Dimensions, FeedDate, LifecycleStatus,
    Logistics, Pricing, PublishStatus, VariantMetaDataAttribute, VariantRole, Weight,
};
