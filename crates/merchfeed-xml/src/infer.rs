//! Semantic XML type inference for attribute values.

use merchfeed_model::{AttributeType, AttributeValue, FeedDate};

/// Infer the semantic XML type of an attribute value.
///
/// Pure and stable: the same input always yields the same type. Precedence,
/// first match wins: boolean, decimal, integer, date-shaped text, string.
/// Null and list values are expanded by the attribute-serialization step
/// rather than the inferencer and classify as STRING.
///
/// A value constructed as [`AttributeValue::Decimal`] is DECIMAL even when
/// its fractional part is zero (it carried a decimal point); an
/// [`AttributeValue::Int`] is always INTEGER.
#[must_use]
pub fn attribute_type(value: &AttributeValue) -> AttributeType {
    match value {
        AttributeValue::Bool(_) => AttributeType::Boolean,
        AttributeValue::Decimal(_) => AttributeType::Decimal,
        AttributeValue::Int(_) => AttributeType::Integer,
        AttributeValue::Text(text) if FeedDate::matches(text) => AttributeType::Date,
        AttributeValue::Text(_) | AttributeValue::List(_) | AttributeValue::Null => {
            AttributeType::String
        }
    }
}
