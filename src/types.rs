//! Type-safe catalog value types
//!
//! Attribute types are a closed enum instead of free-form strings, and
//! attribute values keep the string/number distinction of the catalog
//! document so that matching stays strict.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumIter, EnumString};

/// The facet an attribute describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum AttributeType {
    #[serde(rename = "cover-colour")]
    #[strum(serialize = "cover-colour")]
    CoverColour,
    #[serde(rename = "paper-type")]
    #[strum(serialize = "paper-type")]
    PaperType,
    #[serde(rename = "page-count")]
    #[strum(serialize = "page-count")]
    PageCount,
    /// Anything the configurator does not select on
    #[default]
    #[serde(rename = "other", other)]
    #[strum(serialize = "other")]
    Other,
}

impl AttributeType {
    /// Check if this type takes part in variant matching or summary display
    pub fn is_matching_relevant(&self) -> bool {
        !matches!(self, Self::Other)
    }
}

/// An attribute value as it appears in the catalog: text or number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Text(String),
    Number(f64),
}

impl AttributeValue {
    /// Whether the value counts as "set" for display purposes.
    ///
    /// Empty text and zero are treated as unset, matching how the summary
    /// and heading fall back to placeholders.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty(),
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
        }
    }

    /// Interpret the value as a page count.
    ///
    /// Numbers must be non-negative whole numbers; text must parse as one.
    pub fn as_page_count(&self) -> Option<u32> {
        match self {
            Self::Number(n) => {
                if n.is_finite() && *n >= 0.0 && n.fract() == 0.0 && *n <= f64::from(u32::MAX) {
                    Some(*n as u32)
                } else {
                    None
                }
            }
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_attribute_type_parses_catalog_names() {
        let ty: AttributeType = serde_json::from_str("\"cover-colour\"").unwrap();
        assert_eq!(ty, AttributeType::CoverColour);
        let ty: AttributeType = serde_json::from_str("\"paper-type\"").unwrap();
        assert_eq!(ty, AttributeType::PaperType);
        let ty: AttributeType = serde_json::from_str("\"page-count\"").unwrap();
        assert_eq!(ty, AttributeType::PageCount);
    }

    #[test]
    fn test_unknown_attribute_type_becomes_other() {
        let ty: AttributeType = serde_json::from_str("\"binding\"").unwrap();
        assert_eq!(ty, AttributeType::Other);
    }

    #[test]
    fn test_attribute_type_display_matches_serde_name() {
        for ty in AttributeType::iter() {
            let json = serde_json::to_string(&ty).unwrap();
            assert_eq!(json, format!("\"{}\"", ty));
        }
    }

    #[test]
    fn test_value_equality_is_strict() {
        assert_ne!(AttributeValue::from("1"), AttributeValue::from(1.0));
        assert_eq!(AttributeValue::from("red"), AttributeValue::from("red"));
    }

    #[test]
    fn test_value_deserializes_text_and_numbers() {
        let v: AttributeValue = serde_json::from_str("\"red\"").unwrap();
        assert_eq!(v, AttributeValue::Text("red".into()));
        let v: AttributeValue = serde_json::from_str("100").unwrap();
        assert_eq!(v, AttributeValue::Number(100.0));
    }

    #[test]
    fn test_value_display() {
        assert_eq!(AttributeValue::from(100u32).to_string(), "100");
        assert_eq!(AttributeValue::from(11.5).to_string(), "11.5");
        assert_eq!(AttributeValue::from("dotted").to_string(), "dotted");
    }

    #[test]
    fn test_truthiness() {
        assert!(AttributeValue::from("red").is_truthy());
        assert!(!AttributeValue::from("").is_truthy());
        assert!(!AttributeValue::from(0.0).is_truthy());
        assert!(AttributeValue::from(3.0).is_truthy());
    }

    #[test]
    fn test_page_count_interpretation() {
        assert_eq!(AttributeValue::from(100u32).as_page_count(), Some(100));
        assert_eq!(AttributeValue::from("192").as_page_count(), Some(192));
        assert_eq!(AttributeValue::from(-4.0).as_page_count(), None);
        assert_eq!(AttributeValue::from(12.5).as_page_count(), None);
        assert_eq!(AttributeValue::from("many").as_page_count(), None);
    }
}
