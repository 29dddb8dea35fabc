//! Product catalog model and loader
//!
//! The catalog is a JSON document with a `products` array of variants. It is
//! loaded exactly once at startup and never mutated afterwards.
//!
//! Loading through [`CatalogLoader`] is fail-soft: an unreadable or malformed
//! document yields an empty catalog and a warning, never an error. Strict
//! parsing is available through [`Catalog::from_json_str`] for validation.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::error::{ConfiguratorError, Result};
use crate::types::{AttributeType, AttributeValue};

/// Default catalog shipped inside the binary
const EMBEDDED_CATALOG: &str = include_str!("../data/products.json");

fn default_selectable() -> bool {
    true
}

/// Read an optional field, treating a value of the wrong JSON type as absent
fn deserialize_lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(raw).ok())
}

/// One typed facet of a product variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub attr_type: AttributeType,
    /// Missing or mistyped values are tolerated on load but never offered as options
    #[serde(
        default,
        deserialize_with = "deserialize_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<AttributeValue>,
    /// Display name for option chips
    #[serde(
        default,
        deserialize_with = "deserialize_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub label: Option<String>,
    #[serde(default = "default_selectable")]
    pub selectable: bool,
}

impl Attribute {
    /// Create a well-formed attribute
    pub fn new(
        id: impl Into<String>,
        attr_type: AttributeType,
        value: impl Into<AttributeValue>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            attr_type,
            value: Some(value.into()),
            label: Some(label.into()),
            selectable: true,
        }
    }

    /// Whether both a value and a label are present
    pub fn is_well_formed(&self) -> bool {
        self.value.is_some() && self.label.is_some()
    }

    /// Check type and value in one go
    pub fn matches(&self, attr_type: AttributeType, value: &AttributeValue) -> bool {
        self.attr_type == attr_type && self.value.as_ref() == Some(value)
    }
}

/// One buyable configuration of the product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "product-label", alias = "productLabel", default)]
    pub product_label: String,
    #[serde(rename = "product-id", alias = "productId", default)]
    pub product_id: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    pub price: f64,
}

impl ProductVariant {
    /// First attribute of the given type, if any
    pub fn attribute(&self, attr_type: AttributeType) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.attr_type == attr_type)
    }

    /// Whether the variant carries `value` for `attr_type`
    pub fn has_attribute(&self, attr_type: AttributeType, value: &AttributeValue) -> bool {
        self.attributes.iter().any(|a| a.matches(attr_type, value))
    }

    /// Page count from the `page-count` attribute
    pub fn page_count(&self) -> Option<u32> {
        self.attribute(AttributeType::PageCount)
            .and_then(|a| a.value.as_ref())
            .and_then(AttributeValue::as_page_count)
    }

    fn has_valid_price(&self) -> bool {
        self.price.is_finite() && self.price >= 0.0
    }
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    products: Vec<ProductVariant>,
}

/// Document shape for lossy parsing; variants are decoded one at a time
#[derive(Debug, Deserialize)]
struct RawCatalogDocument {
    products: Vec<serde_json::Value>,
}

/// Ordered, immutable list of product variants
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    variants: Vec<ProductVariant>,
}

impl Catalog {
    /// Build a catalog from already-parsed variants
    pub fn new(variants: Vec<ProductVariant>) -> Self {
        Self { variants }
    }

    /// Parse a catalog document strictly.
    ///
    /// Fails on malformed JSON, a missing `products` field, or a variant
    /// whose price is negative or not finite.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        if let Some(bad) = doc.products.iter().find(|v| !v.has_valid_price()) {
            return Err(ConfiguratorError::catalog(format!(
                "variant '{}' has invalid price {}",
                bad.id, bad.price
            )));
        }
        Ok(Self::new(doc.products))
    }

    /// Parse a catalog document, degrading to an empty catalog on failure.
    ///
    /// Variants that fail to decode or carry an invalid price are dropped
    /// individually.
    pub fn from_json_str_lossy(json: &str) -> Self {
        let doc: RawCatalogDocument = match serde_json::from_str(json) {
            Ok(doc) => doc,
            Err(e) => {
                warn!("Catalog document is malformed, using empty catalog: {}", e);
                return Self::default();
            }
        };

        let variants = doc
            .products
            .into_iter()
            .enumerate()
            .filter_map(|(index, raw)| match serde_json::from_value::<ProductVariant>(raw) {
                Ok(variant) => Some(variant),
                Err(e) => {
                    warn!("Dropping malformed variant at index {}: {}", index, e);
                    None
                }
            })
            .filter(|v| {
                let ok = v.has_valid_price();
                if !ok {
                    warn!("Dropping variant '{}' with invalid price {}", v.id, v.price);
                }
                ok
            })
            .collect();
        Self::new(variants)
    }

    /// Load a catalog file strictly
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        Self::from_json_str(&content)
    }

    pub fn variants(&self) -> &[ProductVariant] {
        &self.variants
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProductVariant> {
        self.variants.iter()
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Check the catalog against the invariants selection relies on.
    ///
    /// None of these are fatal at runtime; they explain surprising
    /// behavior such as a combination that can never be priced.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        let mut seen: Vec<(&AttributeValue, &AttributeValue, &str)> = Vec::new();

        for variant in &self.variants {
            for attr_type in [
                AttributeType::CoverColour,
                AttributeType::PaperType,
                AttributeType::PageCount,
            ] {
                let count = variant
                    .attributes
                    .iter()
                    .filter(|a| a.attr_type == attr_type)
                    .count();
                if count == 0 {
                    issues.push(CatalogIssue::MissingAttribute {
                        variant: variant.id.clone(),
                        attr_type,
                    });
                } else if count > 1 {
                    issues.push(CatalogIssue::RepeatedAttribute {
                        variant: variant.id.clone(),
                        attr_type,
                    });
                }
            }

            for attr in variant.attributes.iter().filter(|a| !a.is_well_formed()) {
                issues.push(CatalogIssue::MalformedAttribute {
                    variant: variant.id.clone(),
                    attribute: attr.id.clone(),
                });
            }

            let colour = variant
                .attribute(AttributeType::CoverColour)
                .and_then(|a| a.value.as_ref());
            let layout = variant
                .attribute(AttributeType::PaperType)
                .and_then(|a| a.value.as_ref());
            if let (Some(colour), Some(layout)) = (colour, layout) {
                if let Some((_, _, first)) =
                    seen.iter().find(|(c, l, _)| *c == colour && *l == layout)
                {
                    issues.push(CatalogIssue::DuplicateCombination {
                        first: first.to_string(),
                        duplicate: variant.id.clone(),
                        colour: colour.to_string(),
                        layout: layout.to_string(),
                    });
                } else {
                    seen.push((colour, layout, &variant.id));
                }
            }
        }

        issues
    }
}

/// A catalog invariant that does not hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    /// Two variants share a colour/layout pair; only the first can be picked
    DuplicateCombination {
        first: String,
        duplicate: String,
        colour: String,
        layout: String,
    },
    MissingAttribute {
        variant: String,
        attr_type: AttributeType,
    },
    RepeatedAttribute {
        variant: String,
        attr_type: AttributeType,
    },
    /// Attribute without a value or label
    MalformedAttribute { variant: String, attribute: String },
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCombination {
                first,
                duplicate,
                colour,
                layout,
            } => write!(
                f,
                "variant '{}' repeats {}/{} from '{}' and can never be selected",
                duplicate, colour, layout, first
            ),
            Self::MissingAttribute { variant, attr_type } => {
                write!(f, "variant '{}' has no {} attribute", variant, attr_type)
            }
            Self::RepeatedAttribute { variant, attr_type } => {
                write!(f, "variant '{}' has more than one {} attribute", variant, attr_type)
            }
            Self::MalformedAttribute { variant, attribute } => write!(
                f,
                "attribute '{}' on variant '{}' is missing a value or label",
                attribute, variant
            ),
        }
    }
}

/// Where the catalog comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// The catalog compiled into the binary
    Embedded,
    File(PathBuf),
    Inline(String),
}

impl CatalogSource {
    /// Use the file when given, otherwise the embedded catalog
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(Self::Embedded, Self::File)
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => f.write_str("embedded catalog"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Inline(_) => f.write_str("inline catalog"),
        }
    }
}

/// One-shot catalog loader.
///
/// [`CatalogLoader::load`] consumes the loader, so a catalog can only be
/// fetched once per loader.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    source: CatalogSource,
}

impl CatalogLoader {
    pub fn new(source: CatalogSource) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    /// Load the catalog, falling back to an empty one on any failure
    pub fn load(self) -> Catalog {
        debug!("Loading catalog from {}", self.source);
        let catalog = match &self.source {
            CatalogSource::Embedded => Catalog::from_json_str_lossy(EMBEDDED_CATALOG),
            CatalogSource::Inline(json) => Catalog::from_json_str_lossy(json),
            CatalogSource::File(path) => match fs::read_to_string(path) {
                Ok(content) => Catalog::from_json_str_lossy(&content),
                Err(e) => {
                    warn!("Failed to read catalog {}: {}", path.display(), e);
                    Catalog::default()
                }
            },
        };
        info!("Loaded {} product variants from {}", catalog.len(), self.source);
        catalog
    }
}
