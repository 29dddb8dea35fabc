//! Notebook Configurator Library
//!
//! Core of the notebook configurator: the product catalog, option
//! derivation, selection resolution, the configurator state machine and the
//! summary presenter, plus the terminal UI built on top of them.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
pub mod configurator;
pub mod error;
pub mod options;
pub mod resolver;
pub mod summary;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, AppMode, AppState, Focus, OptionChip};
pub use catalog::{Attribute, Catalog, CatalogIssue, CatalogLoader, CatalogSource, ProductVariant};
pub use config::Settings;
pub use configurator::{Configurator, Phase, SelectionOutcome, SelectionState};
pub use error::{ConfiguratorError, Result};
pub use options::derive_options;
pub use resolver::{resolve, Resolution};
pub use summary::{SummaryCell, SummaryField, SummaryView};
pub use types::{AttributeType, AttributeValue};
