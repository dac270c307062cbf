//! Shared vocabulary and field types for the feed model.
//!
//! The enumerations in this module are closed: construction goes through
//! [`FromStr`], which rejects any token outside the vocabulary with a
//! [`FeedError`] naming the offending value. Once a value exists it cannot
//! be invalid.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::FeedError;

/// Publish state of an item within the downstream catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PublishStatus {
    /// Visible in the downstream catalog.
    #[serde(rename = "PUBLISHED")]
    Published,
    /// Withheld from the downstream catalog.
    #[serde(rename = "UNPUBLISHED")]
    Unpublished,
    /// Staged for publication.
    #[serde(rename = "READY_TO_PUBLISH")]
    ReadyToPublish,
}

impl PublishStatus {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Published => "PUBLISHED",
            Self::Unpublished => "UNPUBLISHED",
            Self::ReadyToPublish => "READY_TO_PUBLISH",
        }
    }
}

impl fmt::Display for PublishStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PublishStatus {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PUBLISHED" => Ok(Self::Published),
            "UNPUBLISHED" => Ok(Self::Unpublished),
            "READY_TO_PUBLISH" => Ok(Self::ReadyToPublish),
            other => Err(FeedError::InvalidPublishStatus(other.to_owned())),
        }
    }
}

/// Lifecycle state of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleStatus {
    /// In the current assortment.
    #[serde(rename = "ACTIVE")]
    Active,
    /// Kept for reference only.
    #[serde(rename = "ARCHIVED")]
    Archived,
    /// Removed from sale.
    #[serde(rename = "RETIRED")]
    Retired,
}

impl LifecycleStatus {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Archived => "ARCHIVED",
            Self::Retired => "RETIRED",
        }
    }
}

impl fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LifecycleStatus {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(Self::Active),
            "ARCHIVED" => Ok(Self::Archived),
            "RETIRED" => Ok(Self::Retired),
            other => Err(FeedError::InvalidLifecycleStatus(other.to_owned())),
        }
    }
}

/// Unit token for physical dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DimensionUnit {
    /// Centimetres.
    #[serde(rename = "CM")]
    Cm,
    /// Millimetres.
    #[serde(rename = "MM")]
    Mm,
    /// Metres.
    #[serde(rename = "M")]
    M,
    /// Inches.
    #[serde(rename = "IN")]
    In,
    /// Feet.
    #[serde(rename = "FT")]
    Ft,
}

impl DimensionUnit {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cm => "CM",
            Self::Mm => "MM",
            Self::M => "M",
            Self::In => "IN",
            Self::Ft => "FT",
        }
    }
}

impl fmt::Display for DimensionUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DimensionUnit {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CM" => Ok(Self::Cm),
            "MM" => Ok(Self::Mm),
            "M" => Ok(Self::M),
            "IN" => Ok(Self::In),
            "FT" => Ok(Self::Ft),
            other => Err(FeedError::InvalidDimensionUnit(other.to_owned())),
        }
    }
}

/// Unit token for weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightUnit {
    /// Grams.
    #[serde(rename = "G")]
    G,
    /// Kilograms.
    #[serde(rename = "KG")]
    Kg,
    /// Ounces.
    #[serde(rename = "OZ")]
    Oz,
    /// Pounds.
    #[serde(rename = "LB")]
    Lb,
}

impl WeightUnit {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::G => "G",
            Self::Kg => "KG",
            Self::Oz => "OZ",
            Self::Lb => "LB",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightUnit {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "G" => Ok(Self::G),
            "KG" => Ok(Self::Kg),
            "OZ" => Ok(Self::Oz),
            "LB" => Ok(Self::Lb),
            other => Err(FeedError::InvalidWeightUnit(other.to_owned())),
        }
    }
}

/// Role of a variant metadata attribute within its variation axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VariantRole {
    /// Locates the variant in pickers and search.
    #[serde(rename = "LOCATOR")]
    Locator,
    /// Preselected variant of its axis.
    #[serde(rename = "DEFAULT")]
    Default,
    /// Descriptive only.
    #[serde(rename = "DESCRIPTION")]
    Description,
}

impl VariantRole {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Locator => "LOCATOR",
            Self::Default => "DEFAULT",
            Self::Description => "DESCRIPTION",
        }
    }
}

impl fmt::Display for VariantRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VariantRole {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LOCATOR" => Ok(Self::Locator),
            "DEFAULT" => Ok(Self::Default),
            "DESCRIPTION" => Ok(Self::Description),
            other => Err(FeedError::InvalidVariantRole(other.to_owned())),
        }
    }
}

/// Semantic XML type of an attribute value in the export document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttributeType {
    /// Lowercase `true`/`false`.
    #[serde(rename = "BOOLEAN")]
    Boolean,
    /// Number carrying a decimal point.
    #[serde(rename = "DECIMAL")]
    Decimal,
    /// Whole number.
    #[serde(rename = "INTEGER")]
    Integer,
    /// ISO calendar date, with or without time.
    #[serde(rename = "DATE")]
    Date,
    /// Anything else.
    #[serde(rename = "STRING")]
    String,
}

impl AttributeType {
    /// Returns the string value of this enum variant.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "BOOLEAN",
            Self::Decimal => "DECIMAL",
            Self::Integer => "INTEGER",
            Self::Date => "DATE",
            Self::String => "STRING",
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A calendar date or timestamp kept in its original lexical form.
///
/// Construction validates the text against the ISO forms the feed accepts
/// (`YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS`); the
/// original text is preserved and emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedDate(String);

impl FeedDate {
    /// Returns the original lexical form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the text matches one of the accepted ISO forms.
    #[must_use]
    pub fn matches(text: &str) -> bool {
        NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok()
            || NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S").is_ok()
            || NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S").is_ok()
    }
}

impl fmt::Display for FeedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for FeedDate {
    type Err = FeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::matches(s) {
            Ok(Self(s.to_owned()))
        } else {
            Err(FeedError::InvalidDate(s.to_owned()))
        }
    }
}

/// A scalar attribute value.
///
/// Exactly the shapes the export schema can express. `Null` and the empty
/// string are distinct values and both survive to the output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Boolean flag, rendered lowercase.
    Bool(bool),
    /// Whole number.
    Int(i64),
    /// Number carrying a decimal point.
    Decimal(f64),
    /// Free text (dates included; they stay in lexical form).
    Text(String),
    /// Ordered list of text entries, rendered as repeated values.
    List(Vec<String>),
    /// Explicit absence of a value.
    Null,
}

impl AttributeValue {
    /// Returns `true` if this is the null value.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the text if this is a `Text` value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<Vec<&str>> for AttributeValue {
    fn from(values: Vec<&str>) -> Self {
        Self::List(values.into_iter().map(str::to_owned).collect())
    }
}

impl<T: Into<AttributeValue>> From<Option<T>> for AttributeValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// A named, ordered collection of custom attributes attached to an item.
///
/// Groups are kept as an ordered sequence on the item: two groups may share
/// a name, and entries are never merged or deduplicated across groups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeGroup {
    name: String,
    entries: Vec<(String, AttributeValue)>,
}

impl AttributeGroup {
    /// Create a group from its name and ordered entries.
    pub fn new<N, E, K, V>(name: N, entries: E) -> Self
    where
        N: Into<String>,
        E: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        Self {
            name: name.into(),
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// The group name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The ordered attribute entries.
    #[must_use]
    pub fn entries(&self) -> &[(String, AttributeValue)] {
        &self.entries
    }
}

/// A single variant-defining dimension of an item, e.g. `colour=red`.
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariantMetaDataAttribute {
    name: String,
    value: String,
    role: VariantRole,
}

impl VariantMetaDataAttribute {
    /// Create a variant metadata attribute.
    pub fn new(name: impl Into<String>, value: impl Into<String>, role: VariantRole) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            role,
        }
    }

    /// The variation axis name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value along the axis.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The role of this attribute.
    #[must_use]
    pub fn role(&self) -> VariantRole {
        self.role
    }
}

impl TryFrom<AttributeValue> for VariantMetaDataAttribute {
    type Error = FeedError;

    /// Bare scalar values cannot stand in for variant metadata; loosely
    /// typed ingest paths fail here instead of silently coercing.
    fn try_from(_: AttributeValue) -> Result<Self, Self::Error> {
        Err(FeedError::VariantMetaDataType)
    }
}

/// Physical dimensions of an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Length in `unit`.
    pub length: f64,
    /// Width in `unit`.
    pub width: f64,
    /// Height in `unit`.
    pub height: f64,
    /// Unit the three measurements share.
    pub unit: DimensionUnit,
}

/// Weight of an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weight {
    /// Weight in `unit`.
    pub value: f64,
    /// Unit of the measurement.
    pub unit: WeightUnit,
}

/// Item pricing.
///
/// The list price must not be negative; the effective date accompanies the
/// sale price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    list_price: f64,
    sale_price: f64,
    cost_price: f64,
    effective: FeedDate,
}

impl Pricing {
    /// Create a pricing block.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::NegativeListPrice`] if `list_price < 0`.
    pub fn new(
        list_price: f64,
        sale_price: f64,
        cost_price: f64,
        effective: FeedDate,
    ) -> Result<Self, FeedError> {
        if list_price < 0.0 {
            return Err(FeedError::NegativeListPrice(list_price));
        }
        Ok(Self {
            list_price,
            sale_price,
            cost_price,
            effective,
        })
    }

    /// The list price.
    #[must_use]
    pub fn list_price(&self) -> f64 {
        self.list_price
    }

    /// The sale price.
    #[must_use]
    pub fn sale_price(&self) -> f64 {
        self.sale_price
    }

    /// The cost price.
    #[must_use]
    pub fn cost_price(&self) -> f64 {
        self.cost_price
    }

    /// The date the sale price takes effect.
    #[must_use]
    pub fn effective(&self) -> &FeedDate {
        &self.effective
    }
}

/// Ordered image assets of an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assets {
    /// Base URL the filenames are resolved against.
    pub base_url: String,
    /// Ordered image filenames.
    pub files: Vec<String>,
}

/// Logistics codes of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Logistics {
    /// Supplier number.
    pub supplier_number: i64,
    /// Warehouse alignment code.
    pub warehouse_code: i64,
    /// Commodity code.
    pub commodity_code: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_parse_publish_status_tokens() {
        assert_eq!(
            "PUBLISHED".parse::<PublishStatus>().expect("valid token"),
            PublishStatus::Published
        );
        assert_eq!(PublishStatus::Unpublished.as_str(), "UNPUBLISHED");
    }

    #[test]
    fn test_should_reject_unknown_publish_status() {
        let err = "FOOBAR".parse::<PublishStatus>().expect_err("invalid token");
        assert_eq!(err.to_string(), "Invalid publish status \"FOOBAR\"");
    }

    #[test]
    fn test_should_reject_unknown_lifecycle_status() {
        let err = "FOOBAR"
            .parse::<LifecycleStatus>()
            .expect_err("invalid token");
        assert_eq!(err.to_string(), "Invalid lifecycle status \"FOOBAR\"");
    }

    #[test]
    fn test_should_reject_unknown_units() {
        let err = "XX".parse::<DimensionUnit>().expect_err("invalid token");
        assert_eq!(err.to_string(), "Invalid dimension unit \"XX\"");

        let err = "STONE".parse::<WeightUnit>().expect_err("invalid token");
        assert_eq!(err.to_string(), "Invalid weight unit \"STONE\"");
    }

    #[test]
    fn test_should_parse_variant_roles() {
        assert_eq!(
            "LOCATOR".parse::<VariantRole>().expect("valid token"),
            VariantRole::Locator
        );
        let err = "PRIMARY".parse::<VariantRole>().expect_err("invalid token");
        assert_eq!(err.to_string(), "Invalid variant role \"PRIMARY\"");
    }

    #[test]
    fn test_should_accept_iso_date_forms() {
        assert!("2015-01-01".parse::<FeedDate>().is_ok());
        assert!("2015-01-01 12:34:56".parse::<FeedDate>().is_ok());
        assert!("2015-01-01T12:34:56".parse::<FeedDate>().is_ok());
    }

    #[test]
    fn test_should_reject_non_dates() {
        let err = "not-a-date".parse::<FeedDate>().expect_err("invalid date");
        assert_eq!(err.to_string(), "Invalid date \"not-a-date\"");

        assert!("2015-13-40".parse::<FeedDate>().is_err());
    }

    #[test]
    fn test_should_keep_date_lexical_form() {
        let date = "2015-01-01 12:34:56".parse::<FeedDate>().expect("valid");
        assert_eq!(date.as_str(), "2015-01-01 12:34:56");
    }

    #[test]
    fn test_should_convert_scalars_into_attribute_values() {
        assert_eq!(AttributeValue::from(true), AttributeValue::Bool(true));
        assert_eq!(AttributeValue::from(42), AttributeValue::Int(42));
        assert_eq!(AttributeValue::from(12.34), AttributeValue::Decimal(12.34));
        assert_eq!(
            AttributeValue::from("red"),
            AttributeValue::Text("red".to_owned())
        );
        assert_eq!(AttributeValue::from(None::<&str>), AttributeValue::Null);
    }

    #[test]
    fn test_should_keep_group_entry_order() {
        let group = AttributeGroup::new("Product", [("b", 1), ("a", 2)]);
        assert_eq!(group.name(), "Product");
        assert_eq!(group.entries()[0].0, "b");
        assert_eq!(group.entries()[1].0, "a");
    }

    #[test]
    fn test_should_reject_scalar_as_variant_meta_data() {
        let err = VariantMetaDataAttribute::try_from(AttributeValue::from("red"))
            .expect_err("scalars are not variant metadata");
        assert_eq!(
            err.to_string(),
            "Variant Meta Data must be an instance of VariantMetaDataAttribute"
        );
    }

    #[test]
    fn test_should_reject_negative_list_price() {
        let effective = "2015-01-01".parse::<FeedDate>().expect("valid date");
        let err = Pricing::new(-0.01, 0.0, 0.0, effective).expect_err("negative list price");
        assert_eq!(err.to_string(), "List price must not be negative, got -0.01");
    }
}
