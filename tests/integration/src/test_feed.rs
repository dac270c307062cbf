//! End-to-end rendering tests over the fully-populated reference feed.

#[cfg(test)]
mod tests {
    use merchfeed_model::AttributeValue;
    use merchfeed_xml::{to_xml, validate_document};

    use crate::{sample_feed, sample_item};

    #[test]
    fn test_should_render_complete_feed() {
        let xml = to_xml(&sample_feed()).expect("rendering should succeed");

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<GeneratedAt>2015-01-01 12:34:56</GeneratedAt>"));
        assert!(xml.contains("<Sku>SKU123</Sku>"));
        assert!(xml.contains("<Barcode>5000000000123</Barcode>"));
        assert!(xml.contains("<Brand>Brandtastic</Brand>"));
        assert!(xml.contains("<EffectiveFrom>2015-01-01</EffectiveFrom>"));
        assert!(xml.contains("<EffectiveTo>2025-01-01</EffectiveTo>"));
    }

    #[test]
    fn test_should_pass_its_own_well_formedness_gate() {
        let xml = to_xml(&sample_feed()).expect("rendering should succeed");
        validate_document(&xml).expect("rendered document is well-formed");
    }

    #[test]
    fn test_should_type_every_attribute_shape() {
        let xml = to_xml(&sample_feed()).expect("rendering should succeed");

        assert!(xml.contains("name=\"availability_flag\" type=\"BOOLEAN\""));
        assert!(xml.contains("name=\"catalog_id\" type=\"STRING\""));
        assert!(xml.contains("name=\"online_from\" type=\"DATE\""));
        assert!(xml.contains("name=\"stock_quantity\" type=\"INTEGER\""));
        assert!(xml.contains("name=\"profit_margin\" type=\"DECIMAL\""));
    }

    #[test]
    fn test_should_round_trip_null_and_empty_attributes() {
        let xml = to_xml(&sample_feed()).expect("rendering should succeed");

        assert!(xml.contains("<Attribute name=\"export_excluded\" type=\"STRING\"/>"));
        assert!(xml.contains(
            "<Attribute name=\"export_include\" type=\"STRING\"><Value></Value></Attribute>"
        ));
    }

    #[test]
    fn test_should_serialize_duplicated_groups_with_full_entry_sets() {
        let xml = to_xml(&sample_feed()).expect("rendering should succeed");

        let product = xml
            .split("<AttributeGroup name=\"MarketInProduct\">")
            .nth(1)
            .and_then(|s| s.split("</AttributeGroup>").next())
            .expect("MarketInProduct group present");
        let offer = xml
            .split("<AttributeGroup name=\"MarketInOffer\">")
            .nth(1)
            .and_then(|s| s.split("</AttributeGroup>").next())
            .expect("MarketInOffer group present");

        for group in [product, offer] {
            assert!(group.contains("name=\"sku\""));
            assert!(group.contains("name=\"is_international\""));
        }
        assert!(offer.contains("name=\"addition\""));
        assert!(!product.contains("name=\"addition\""));
    }

    #[test]
    fn test_should_keep_variant_batches_in_insertion_order() {
        let xml = to_xml(&sample_feed()).expect("rendering should succeed");

        let red = xml.find("<Value>red</Value>").expect("red present");
        let violet = xml.find("<Value>violet</Value>").expect("violet present");
        let xs = xml.find("<Value>XS</Value>").expect("XS present");
        let xxl = xml.find("<Value>XXL</Value>").expect("XXL present");

        assert!(red < violet, "colours keep insertion order");
        assert!(violet < xs, "first batch precedes second");
        assert!(xs < xxl, "sizes keep insertion order");
    }

    #[test]
    fn test_should_render_identically_twice() {
        let feed = sample_feed();
        let first = to_xml(&feed).expect("rendering should succeed");
        let second = to_xml(&feed).expect("rendering should succeed");

        assert_eq!(first, second, "render is idempotent without mutation");
    }

    #[test]
    fn test_should_reflect_mutation_between_renders() {
        let mut feed = sample_feed();
        let before = to_xml(&feed).expect("rendering should succeed");

        feed.items_mut()[0].set_title("Renamed item");
        let after = to_xml(&feed).expect("rendering should succeed");

        assert_ne!(before, after);
        assert!(after.contains("<Title>Renamed item</Title>"));
    }

    #[test]
    fn test_should_fail_rendering_on_dangling_entity() {
        let mut feed = sample_feed();
        feed.items_mut()[0].set_descriptions("&amp;bull;", "fine");

        let err = to_xml(&feed).expect_err("decayed reference must fail the gate");
        assert_eq!(err.to_string(), "Entity 'bull' not defined");
    }

    #[test]
    fn test_should_reject_scalar_variant_meta_data_end_to_end() {
        let mut item = sample_item();
        let before = item.variant_meta_data().len();

        let err = item
            .add_variant_meta_data([AttributeValue::from("red")])
            .expect_err("scalars are not variant metadata");

        assert_eq!(
            err.to_string(),
            "Variant Meta Data must be an instance of VariantMetaDataAttribute"
        );
        assert_eq!(item.variant_meta_data().len(), before);
    }
}
