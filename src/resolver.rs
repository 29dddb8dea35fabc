//! Selection resolution
//!
//! Maps a chosen colour and layout back to a single catalog variant.

use crate::catalog::{Catalog, ProductVariant};
use crate::types::{AttributeType, AttributeValue};

/// Price and page count read from a resolved variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub price: f64,
    /// `None` when the variant has no usable `page-count` attribute
    pub pages: Option<u32>,
}

impl From<&ProductVariant> for Resolution {
    fn from(variant: &ProductVariant) -> Self {
        Self {
            price: variant.price,
            pages: variant.page_count(),
        }
    }
}

/// Find the first variant with this exact cover colour and paper type.
///
/// Catalog order breaks ties. `None` tells the caller to keep whatever
/// price and page count it is already showing.
pub fn resolve<'a>(
    catalog: &'a Catalog,
    colour: &AttributeValue,
    layout: &AttributeValue,
) -> Option<&'a ProductVariant> {
    catalog.iter().find(|variant| {
        variant.has_attribute(AttributeType::CoverColour, colour)
            && variant.has_attribute(AttributeType::PaperType, layout)
    })
}
