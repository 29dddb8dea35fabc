//! Configurator state machine
//!
//! Owns the catalog, the derived options and the current selection.
//!
//! # State Transitions
//!
//! ```text
//! Loading --catalog_loaded--> Ready
//! ```
//!
//! `Ready` is terminal. Selection events received while `Loading` are
//! ignored. Every selection event is followed synchronously by a resolve
//! step; the resolved price and page count only change when that resolve
//! finds a variant.

use strum::Display;
use tracing::{debug, info, warn};

use crate::catalog::{Attribute, Catalog};
use crate::options::derive_options;
use crate::resolver::{resolve, Resolution};
use crate::summary::SummaryView;
use crate::types::{AttributeType, AttributeValue};

/// Heading used when no product label is configured
pub const DEFAULT_PRODUCT_LABEL: &str = "Hardcover Notebook";

/// Lifecycle phase of the configurator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Phase {
    Loading,
    Ready,
}

/// Current choices and the values resolved from them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    pub selected_color: Option<AttributeValue>,
    pub selected_layout: Option<AttributeValue>,
    pub resolved_price: f64,
    pub resolved_pages: u32,
}

/// What a selection event did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionOutcome {
    /// The catalog has not loaded yet
    Ignored,
    /// The other dimension is still unselected
    Incomplete,
    /// No variant has this pair; previous price and pages are kept
    Unmatched,
    Resolved { price: f64, pages: Option<u32> },
}

/// The configurator itself
#[derive(Debug, Clone)]
pub struct Configurator {
    phase: Phase,
    product_label: String,
    catalog: Catalog,
    colour_options: Vec<Attribute>,
    layout_options: Vec<Attribute>,
    selection: SelectionState,
}

impl Default for Configurator {
    fn default() -> Self {
        Self::new(DEFAULT_PRODUCT_LABEL)
    }
}

impl Configurator {
    /// Create a configurator waiting for its catalog
    pub fn new(product_label: impl Into<String>) -> Self {
        Self {
            phase: Phase::Loading,
            product_label: product_label.into(),
            catalog: Catalog::default(),
            colour_options: Vec::new(),
            layout_options: Vec::new(),
            selection: SelectionState::default(),
        }
    }

    /// Create a configurator that is already ready
    pub fn with_catalog(product_label: impl Into<String>, catalog: Catalog) -> Self {
        let mut configurator = Self::new(product_label);
        configurator.catalog_loaded(catalog);
        configurator
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Hand over the catalog. Only the first call has any effect.
    pub fn catalog_loaded(&mut self, catalog: Catalog) {
        if self.phase == Phase::Ready {
            warn!("Catalog already loaded, ignoring second catalog");
            return;
        }

        self.colour_options = derive_options(&catalog, AttributeType::CoverColour);
        self.layout_options = derive_options(&catalog, AttributeType::PaperType);
        self.catalog = catalog;
        self.phase = Phase::Ready;
        info!(
            "Configurator ready: {} variants, {} colours, {} layouts",
            self.catalog.len(),
            self.colour_options.len(),
            self.layout_options.len()
        );
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn colour_options(&self) -> &[Attribute] {
        &self.colour_options
    }

    pub fn layout_options(&self) -> &[Attribute] {
        &self.layout_options
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn product_label(&self) -> &str {
        &self.product_label
    }

    /// Whether there is any product to configure
    pub fn has_product(&self) -> bool {
        !self.catalog.is_empty()
    }

    /// Choose a cover colour
    pub fn select_color(&mut self, value: AttributeValue) -> SelectionOutcome {
        if self.is_loading() {
            debug!("Ignoring colour selection while loading");
            return SelectionOutcome::Ignored;
        }
        debug!("Colour selected: {}", value);
        self.selection.selected_color = Some(value);
        self.update_resolution()
    }

    /// Choose a page layout
    pub fn select_layout(&mut self, value: AttributeValue) -> SelectionOutcome {
        if self.is_loading() {
            debug!("Ignoring layout selection while loading");
            return SelectionOutcome::Ignored;
        }
        debug!("Layout selected: {}", value);
        self.selection.selected_layout = Some(value);
        self.update_resolution()
    }

    fn update_resolution(&mut self) -> SelectionOutcome {
        let (Some(colour), Some(layout)) = (
            self.selection.selected_color.as_ref(),
            self.selection.selected_layout.as_ref(),
        ) else {
            return SelectionOutcome::Incomplete;
        };

        match resolve(&self.catalog, colour, layout) {
            Some(variant) => {
                let resolution = Resolution::from(variant);
                debug!("Resolved {}/{} to variant '{}'", colour, layout, variant.id);
                self.selection.resolved_price = resolution.price;
                if let Some(pages) = resolution.pages {
                    self.selection.resolved_pages = pages;
                }
                SelectionOutcome::Resolved {
                    price: resolution.price,
                    pages: resolution.pages,
                }
            }
            None => {
                info!("No variant for {}/{}, keeping previous price", colour, layout);
                SelectionOutcome::Unmatched
            }
        }
    }

    /// Heading text: label, then ` - <colour>`, then `(<layout>)`
    pub fn heading(&self) -> String {
        let mut heading = self.product_label.clone();
        if let Some(colour) = self.selection.selected_color.as_ref().filter(|v| v.is_truthy()) {
            heading.push_str(&format!(" - {}", colour));
        }
        if let Some(layout) = self.selection.selected_layout.as_ref().filter(|v| v.is_truthy()) {
            heading.push_str(&format!("({})", layout));
        }
        heading
    }

    /// Summary view of the current selection
    pub fn summary(&self, currency_symbol: &str) -> SummaryView {
        SummaryView::present(
            self.selection.selected_color.as_ref(),
            self.selection.selected_layout.as_ref(),
            self.selection.resolved_price,
            self.selection.resolved_pages,
            currency_symbol,
        )
    }
}
