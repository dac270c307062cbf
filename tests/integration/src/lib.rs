//! Integration tests for the merchfeed export pipeline.
//!
//! These tests exercise the whole path a caller takes: build an item,
//! attach attribute groups and variant metadata, collect it into a feed,
//! render the export document and persist it.

use std::sync::Once;

use merchfeed_model::{AttributeValue, Feed, Item, VariantMetaDataAttribute, VariantRole};

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Build the fully-populated reference item used across the tests.
#[must_use]
pub fn sample_item() -> Item {
    init_tracing();

    let mut item = Item::new("SKU123", "5000000000123");
    item.set_title("Sample item");
    item.set_brand("Brandtastic");
    item.set_descriptions("Short description", "Longer description about the item...");
    item.set_tax_code(20.0).expect("tax code is non-negative");
    item.set_dates("2015-01-01", "2025-01-01")
        .expect("dates are ISO");
    item.set_publish_status("UNPUBLISHED")
        .expect("status is in the vocabulary");
    item.set_lifecycle_status("ACTIVE")
        .expect("status is in the vocabulary");
    item.set_dimensions(50.0, 1.5, 74.67, "CM")
        .expect("unit is known");
    item.set_weight(0.5, "G").expect("unit is known");
    item.set_pricing(14.99, 9.99, 12.49, "2015-01-01")
        .expect("pricing is valid");

    item.add_attributes(
        "Product",
        [
            ("availability_flag", AttributeValue::from(true)),
            ("catalog_id", AttributeValue::from("TestCatalog")),
            (
                "barcode_list",
                AttributeValue::from(vec!["5000000000123", "5000000000456"]),
            ),
            ("online_from", AttributeValue::from("2015-01-01 12:34:56")),
            ("stock_quantity", AttributeValue::from(123)),
            ("profit_margin", AttributeValue::from(12.34)),
            ("export_excluded", AttributeValue::Null),
            ("export_include", AttributeValue::from("")),
        ],
    );

    item.add_variant_meta_data([
        VariantMetaDataAttribute::new("colour", "red", VariantRole::Locator),
        VariantMetaDataAttribute::new("colour", "orange", VariantRole::Locator),
        VariantMetaDataAttribute::new("colour", "yellow", VariantRole::Locator),
        VariantMetaDataAttribute::new("colour", "green", VariantRole::Locator),
        VariantMetaDataAttribute::new("colour", "blue", VariantRole::Locator),
        VariantMetaDataAttribute::new("colour", "indigo", VariantRole::Locator),
        VariantMetaDataAttribute::new("colour", "violet", VariantRole::Locator),
    ])
    .expect("typed variant attributes");

    item.add_variant_meta_data([
        VariantMetaDataAttribute::new("size", "XS", VariantRole::Default),
        VariantMetaDataAttribute::new("size", "S", VariantRole::Default),
        VariantMetaDataAttribute::new("size", "M", VariantRole::Default),
        VariantMetaDataAttribute::new("size", "L", VariantRole::Default),
        VariantMetaDataAttribute::new("size", "XL", VariantRole::Default),
        VariantMetaDataAttribute::new("size", "XXL", VariantRole::Default),
    ])
    .expect("typed variant attributes");

    item.add_attributes("Compliance", [("over_18_age", AttributeValue::from(true))]);

    // common attributes duplicated in two groups, with an addition in the second
    let common = [
        ("sku", AttributeValue::from("SKU12345")),
        ("is_international", AttributeValue::from(true)),
    ];
    item.add_attributes("MarketInProduct", common.clone());
    item.add_attributes(
        "MarketInOffer",
        [("addition", AttributeValue::from(true))]
            .into_iter()
            .chain(common),
    );

    item.add_attributes("Offer", [("pre_order", AttributeValue::from(true))]);

    item.set_assets(["1.png", "2.png", "3.png"], "http://example.com/image");
    item.set_logistics(12345, 12_345_678, 123_456);

    item
}

/// Build a feed holding the reference item.
#[must_use]
pub fn sample_feed() -> Feed {
    let mut feed = Feed::new("2015-01-01 12:34:56".parse().expect("timestamp is ISO"));
    feed.add_item(sample_item());
    feed
}

mod test_feed;
mod test_save;
