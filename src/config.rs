//! Settings file handling
//!
//! Display settings for the configurator screen. Every field has a default,
//! so a partial (or empty) JSON object is a valid settings file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::configurator::DEFAULT_PRODUCT_LABEL;
use crate::summary::DEFAULT_CURRENCY_SYMBOL;

/// Product shot shown next to the configurator
pub const DEFAULT_IMAGE_URL: &str =
    "https://github.com/moo-print/frontend-tech-test-data/blob/main/ProductShot.jpeg?raw=true";

const DEFAULT_DESCRIPTION: &str =
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Fusce id quam quam.";

/// Configurator settings that can be saved/loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base of the heading, e.g. "Hardcover Notebook"
    pub product_label: String,
    pub description: String,
    pub image_url: String,
    pub currency_symbol: String,
    /// Catalog used when `--catalog` is not given; embedded catalog if unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            product_label: DEFAULT_PRODUCT_LABEL.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            catalog_path: None,
        }
    }
}

impl Settings {
    /// Save settings to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize settings to JSON")?;

        fs::write(&path, json)
            .with_context(|| format!("Failed to write settings to {:?}", path.as_ref()))?;

        Ok(())
    }

    /// Load settings from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings from {:?}", path.as_ref()))?;

        let settings: Self =
            serde_json::from_str(&content).context("Failed to parse settings JSON")?;

        Ok(settings)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let settings = Self::load_from_file(path)?;
                settings.validate()?;
                Ok(settings)
            }
            None => Ok(Self::default()),
        }
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.product_label.trim().is_empty() {
            anyhow::bail!("Product label must not be empty");
        }
        if self.currency_symbol.trim().is_empty() {
            anyhow::bail!("Currency symbol must not be empty");
        }
        Ok(())
    }
}
