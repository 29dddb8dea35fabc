//! Option derivation
//!
//! Turns the catalog into the de-duplicated list of choices for one
//! attribute type, in the order they are first seen.

use crate::catalog::{Attribute, Catalog};
use crate::types::{AttributeType, AttributeValue};

/// Collect the distinct options of `attr_type` across the catalog.
///
/// Attributes are scanned variant by variant. Two attributes are the same
/// option when their values are equal; the first one seen wins, so a later
/// duplicate with a different label is dropped. Attributes without a value
/// or label are skipped.
pub fn derive_options(catalog: &Catalog, attr_type: AttributeType) -> Vec<Attribute> {
    let mut options: Vec<Attribute> = Vec::new();

    for attr in catalog
        .iter()
        .flat_map(|variant| variant.attributes.iter())
        .filter(|a| a.attr_type == attr_type && a.is_well_formed())
    {
        if !options.iter().any(|o| o.value == attr.value) {
            options.push(attr.clone());
        }
    }

    options
}

/// Position of `value` in a derived option list
pub fn option_index(options: &[Attribute], value: &AttributeValue) -> Option<usize> {
    options.iter().position(|o| o.value.as_ref() == Some(value))
}

/// Turn user-typed text into an option value.
///
/// Matches an option's value text exactly first, then its label ignoring
/// case. Unknown text is kept as a text value so it can still be selected
/// (and simply fail to resolve).
pub fn value_from_text(options: &[Attribute], text: &str) -> AttributeValue {
    let by_value = options.iter().find_map(|o| {
        o.value
            .as_ref()
            .filter(|v| v.to_string() == text)
            .cloned()
    });
    let by_label = || {
        options
            .iter()
            .find(|o| o.label.as_deref().is_some_and(|l| l.eq_ignore_ascii_case(text)))
            .and_then(|o| o.value.clone())
    };

    by_value
        .or_else(by_label)
        .unwrap_or_else(|| AttributeValue::from(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductVariant;

    #[test]
    fn test_value_from_text() {
        let mut pages = Attribute::new("p", AttributeType::PageCount, 100u32, "Hundred");
        pages.attr_type = AttributeType::CoverColour;
        let options = vec![colour("red", "Sunset"), pages];

        assert_eq!(value_from_text(&options, "red"), AttributeValue::from("red"));
        assert_eq!(value_from_text(&options, "sunset"), AttributeValue::from("red"));
        assert_eq!(value_from_text(&options, "100"), AttributeValue::from(100u32));
        assert_eq!(value_from_text(&options, "teal"), AttributeValue::from("teal"));
    }

    fn variant(id: &str, attributes: Vec<Attribute>) -> ProductVariant {
        ProductVariant {
            id: id.to_string(),
            product_label: "Hardcover Notebook".to_string(),
            product_id: "hcn".to_string(),
            attributes,
            price: 10.0,
        }
    }

    fn colour(value: &str, label: &str) -> Attribute {
        Attribute::new(format!("c-{}", value), AttributeType::CoverColour, value, label)
    }

    fn layout(value: &str, label: &str) -> Attribute {
        Attribute::new(format!("l-{}", value), AttributeType::PaperType, value, label)
    }

    #[test]
    fn test_keeps_first_seen_order() {
        let catalog = Catalog::new(vec![
            variant("1", vec![colour("red", "Sunset"), layout("lined", "Lined")]),
            variant("2", vec![colour("blue", "Ocean"), layout("dotted", "Dotted")]),
            variant("3", vec![colour("red", "Sunset"), layout("dotted", "Dotted")]),
        ]);

        let colours = derive_options(&catalog, AttributeType::CoverColour);
        let values: Vec<String> = colours.iter().map(|a| a.value.as_ref().unwrap().to_string()).collect();
        assert_eq!(values, vec!["red", "blue"]);

        let layouts = derive_options(&catalog, AttributeType::PaperType);
        let values: Vec<String> = layouts.iter().map(|a| a.value.as_ref().unwrap().to_string()).collect();
        assert_eq!(values, vec!["lined", "dotted"]);
    }

    #[test]
    fn test_duplicate_value_keeps_first_label() {
        let catalog = Catalog::new(vec![
            variant("1", vec![colour("blue", "Ocean")]),
            variant("2", vec![colour("blue", "Navy")]),
        ]);

        let colours = derive_options(&catalog, AttributeType::CoverColour);
        assert_eq!(colours.len(), 1);
        assert_eq!(colours[0].label.as_deref(), Some("Ocean"));
    }

    #[test]
    fn test_malformed_attributes_are_skipped() {
        let mut no_label = colour("green", "Forest");
        no_label.label = None;
        let mut no_value = colour("black", "Midnight");
        no_value.value = None;

        let catalog = Catalog::new(vec![variant("1", vec![no_label, no_value, colour("red", "Sunset")])]);
        let colours = derive_options(&catalog, AttributeType::CoverColour);
        assert_eq!(colours.len(), 1);
        assert_eq!(colours[0].label.as_deref(), Some("Sunset"));
    }

    #[test]
    fn test_empty_catalog_has_no_options() {
        assert!(derive_options(&Catalog::default(), AttributeType::CoverColour).is_empty());
    }

    #[test]
    fn test_option_index() {
        let options = vec![colour("red", "Sunset"), colour("blue", "Ocean")];
        assert_eq!(option_index(&options, &AttributeValue::from("blue")), Some(1));
        assert_eq!(option_index(&options, &AttributeValue::from("green")), None);
    }
}
