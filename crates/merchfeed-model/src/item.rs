//! The item aggregate: one product record of the feed.
//!
//! An [`Item`] is populated through setters that each enforce their own
//! invariant synchronously: a failed call returns a [`FeedError`] and
//! leaves the item exactly as it was. Closed vocabularies (status tokens,
//! units) are parsed up front so an item never holds an invalid state.

use serde::{Deserialize, Serialize};

use crate::error::FeedError;
use crate::types::{
    Assets, AttributeGroup, AttributeValue, Dimensions, FeedDate, LifecycleStatus, Logistics,
    Pricing, PublishStatus, VariantMetaDataAttribute, Weight,
};

/// One product record: identity, descriptive fields, lifecycle state,
/// physical data, pricing, assets, logistics, custom attribute groups and
/// variant metadata.
///
/// Items stay mutable after being added to a feed; a render borrows them
/// immutably and leaves them untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    sku: String,
    barcode: String,
    title: Option<String>,
    brand: Option<String>,
    short_description: Option<String>,
    long_description: Option<String>,
    tax_code: Option<f64>,
    effective_from: Option<FeedDate>,
    effective_to: Option<FeedDate>,
    publish_status: Option<PublishStatus>,
    lifecycle_status: Option<LifecycleStatus>,
    dimensions: Option<Dimensions>,
    weight: Option<Weight>,
    pricing: Option<Pricing>,
    assets: Option<Assets>,
    logistics: Option<Logistics>,
    attribute_groups: Vec<AttributeGroup>,
    variant_meta_data: Vec<VariantMetaDataAttribute>,
}

impl Item {
    /// Create an item from its identity fields.
    pub fn new(sku: impl Into<String>, barcode: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            barcode: barcode.into(),
            title: None,
            brand: None,
            short_description: None,
            long_description: None,
            tax_code: None,
            effective_from: None,
            effective_to: None,
            publish_status: None,
            lifecycle_status: None,
            dimensions: None,
            weight: None,
            pricing: None,
            assets: None,
            logistics: None,
            attribute_groups: Vec::new(),
            variant_meta_data: Vec::new(),
        }
    }

    /// Set the display title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    /// Set the brand name.
    pub fn set_brand(&mut self, brand: impl Into<String>) {
        self.brand = Some(brand.into());
    }

    /// Set the short and long descriptions.
    pub fn set_descriptions(&mut self, short: impl Into<String>, long: impl Into<String>) {
        self.short_description = Some(short.into());
        self.long_description = Some(long.into());
    }

    /// Set the tax code.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::NegativeTaxCode`] if `tax_code < 0`.
    pub fn set_tax_code(&mut self, tax_code: f64) -> Result<(), FeedError> {
        if tax_code < 0.0 {
            return Err(FeedError::NegativeTaxCode(tax_code));
        }
        self.tax_code = Some(tax_code);
        Ok(())
    }

    /// Set the validity date range.
    ///
    /// Both bounds are parsed before either is assigned, so a bad second
    /// bound does not leave a half-set range behind.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidDate`] if either bound does not match an
    /// accepted ISO form.
    pub fn set_dates(&mut self, from: &str, to: &str) -> Result<(), FeedError> {
        let from = from.parse::<FeedDate>()?;
        let to = to.parse::<FeedDate>()?;
        self.effective_from = Some(from);
        self.effective_to = Some(to);
        Ok(())
    }

    /// Set the publish status from its wire token.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidPublishStatus`] for a token outside the
    /// closed vocabulary.
    pub fn set_publish_status(&mut self, status: &str) -> Result<(), FeedError> {
        self.publish_status = Some(status.parse()?);
        Ok(())
    }

    /// Set the lifecycle status from its wire token.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidLifecycleStatus`] for a token outside
    /// the closed vocabulary.
    pub fn set_lifecycle_status(&mut self, status: &str) -> Result<(), FeedError> {
        self.lifecycle_status = Some(status.parse()?);
        Ok(())
    }

    /// Set the physical dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidDimensionUnit`] for an unknown unit
    /// token.
    pub fn set_dimensions(
        &mut self,
        length: f64,
        width: f64,
        height: f64,
        unit: &str,
    ) -> Result<(), FeedError> {
        let unit = unit.parse()?;
        self.dimensions = Some(Dimensions {
            length,
            width,
            height,
            unit,
        });
        Ok(())
    }

    /// Set the weight.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::InvalidWeightUnit`] for an unknown unit token.
    pub fn set_weight(&mut self, value: f64, unit: &str) -> Result<(), FeedError> {
        let unit = unit.parse()?;
        self.weight = Some(Weight { value, unit });
        Ok(())
    }

    /// Set the pricing block.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::NegativeListPrice`] if the list price is
    /// negative, or [`FeedError::InvalidDate`] if the effective date does
    /// not parse.
    pub fn set_pricing(
        &mut self,
        list_price: f64,
        sale_price: f64,
        cost_price: f64,
        effective: &str,
    ) -> Result<(), FeedError> {
        let effective = effective.parse::<FeedDate>()?;
        self.pricing = Some(Pricing::new(list_price, sale_price, cost_price, effective)?);
        Ok(())
    }

    /// Set the ordered image assets.
    pub fn set_assets<I, S>(&mut self, files: I, base_url: impl Into<String>)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assets = Some(Assets {
            base_url: base_url.into(),
            files: files.into_iter().map(Into::into).collect(),
        });
    }

    /// Set the logistics codes.
    pub fn set_logistics(
        &mut self,
        supplier_number: i64,
        warehouse_code: i64,
        commodity_code: i64,
    ) {
        self.logistics = Some(Logistics {
            supplier_number,
            warehouse_code,
            commodity_code,
        });
    }

    /// Append a new attribute group.
    ///
    /// Every call appends a distinct group, even when the name repeats;
    /// entries are never merged across groups.
    pub fn add_attributes<N, E, K, V>(&mut self, group_name: N, entries: E)
    where
        N: Into<String>,
        E: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttributeValue>,
    {
        self.attribute_groups
            .push(AttributeGroup::new(group_name, entries));
    }

    /// Append variant metadata attributes.
    ///
    /// Accepts an ordered collection of anything fallibly convertible to
    /// [`VariantMetaDataAttribute`]; a single attribute is passed as a
    /// one-element array. Conversion completes for every element before any
    /// element is appended, so a failed call leaves the variant list
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`FeedError::VariantMetaDataType`] if an element is not a
    /// variant metadata attribute.
    pub fn add_variant_meta_data<I, T>(&mut self, attributes: I) -> Result<(), FeedError>
    where
        I: IntoIterator<Item = T>,
        T: TryInto<VariantMetaDataAttribute>,
        <T as TryInto<VariantMetaDataAttribute>>::Error: Into<FeedError>,
    {
        let attributes = attributes
            .into_iter()
            .map(|attr| attr.try_into().map_err(Into::into))
            .collect::<Result<Vec<_>, FeedError>>()?;
        self.variant_meta_data.extend(attributes);
        Ok(())
    }

    /// The stock keeping unit.
    #[must_use]
    pub fn sku(&self) -> &str {
        &self.sku
    }

    /// The barcode.
    #[must_use]
    pub fn barcode(&self) -> &str {
        &self.barcode
    }

    /// The display title, if set.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The brand name, if set.
    #[must_use]
    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    /// The short description, if set.
    #[must_use]
    pub fn short_description(&self) -> Option<&str> {
        self.short_description.as_deref()
    }

    /// The long description, if set.
    #[must_use]
    pub fn long_description(&self) -> Option<&str> {
        self.long_description.as_deref()
    }

    /// The tax code, if set.
    #[must_use]
    pub fn tax_code(&self) -> Option<f64> {
        self.tax_code
    }

    /// Start of the validity range, if set.
    #[must_use]
    pub fn effective_from(&self) -> Option<&FeedDate> {
        self.effective_from.as_ref()
    }

    /// End of the validity range, if set.
    #[must_use]
    pub fn effective_to(&self) -> Option<&FeedDate> {
        self.effective_to.as_ref()
    }

    /// The publish status, if set.
    #[must_use]
    pub fn publish_status(&self) -> Option<PublishStatus> {
        self.publish_status
    }

    /// The lifecycle status, if set.
    #[must_use]
    pub fn lifecycle_status(&self) -> Option<LifecycleStatus> {
        self.lifecycle_status
    }

    /// The physical dimensions, if set.
    #[must_use]
    pub fn dimensions(&self) -> Option<&Dimensions> {
        self.dimensions.as_ref()
    }

    /// The weight, if set.
    #[must_use]
    pub fn weight(&self) -> Option<&Weight> {
        self.weight.as_ref()
    }

    /// The pricing block, if set.
    #[must_use]
    pub fn pricing(&self) -> Option<&Pricing> {
        self.pricing.as_ref()
    }

    /// The image assets, if set.
    #[must_use]
    pub fn assets(&self) -> Option<&Assets> {
        self.assets.as_ref()
    }

    /// The logistics codes, if set.
    #[must_use]
    pub fn logistics(&self) -> Option<&Logistics> {
        self.logistics.as_ref()
    }

    /// The ordered attribute groups.
    #[must_use]
    pub fn attribute_groups(&self) -> &[AttributeGroup] {
        &self.attribute_groups
    }

    /// The ordered variant metadata attributes.
    #[must_use]
    pub fn variant_meta_data(&self) -> &[VariantMetaDataAttribute] {
        &self.variant_meta_data
    }
}
