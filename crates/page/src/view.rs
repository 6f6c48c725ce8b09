//! What the renderer sees.
//!
//! A [`PageView`] is rebuilt from base state on every request; none of its
//! derived fields are stored on the page.

use data_loader::{LoadError, Perk, PerkCollection};
use pipeline::{FilterCriteria, FilterPipeline, MerchantOption, Summary, merchant_options};
use serde::Serialize;
use std::sync::Arc;

/// Snapshot of a listing page for rendering.
#[derive(Debug, Clone)]
pub enum PageView {
    /// Never mounted, or torn down
    Unmounted,
    /// The fetch for the current activation has not resolved yet
    Loading,
    /// The fetch failed; there is no collection to list
    Failed(Arc<LoadError>),
    /// The collection loaded; filtering applies
    Ready(Listing),
}

impl PageView {
    pub fn is_loading(&self) -> bool {
        matches!(self, PageView::Loading)
    }

    pub fn error(&self) -> Option<&LoadError> {
        match self {
            PageView::Failed(err) => Some(err.as_ref()),
            _ => None,
        }
    }

    pub fn listing(&self) -> Option<&Listing> {
        match self {
            PageView::Ready(listing) => Some(listing),
            _ => None,
        }
    }

    /// Summary line, only present once the collection is loaded.
    pub fn summary(&self) -> Option<String> {
        self.listing().map(|listing| listing.summary.to_string())
    }
}

/// The derived listing of a loaded page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    /// Perks passing the current criteria, in collection order
    pub visible: Vec<Perk>,
    pub total: usize,
    pub summary: Summary,
    /// Dropdown entries derived from the full collection
    pub merchant_options: Vec<MerchantOption>,
    /// Criteria this listing was derived from
    pub criteria: FilterCriteria,
}

impl Listing {
    /// Derive a listing from base state.
    pub fn derive(
        collection: &PerkCollection,
        criteria: &FilterCriteria,
        pipeline: &FilterPipeline,
    ) -> Self {
        let visible = pipeline.visible_subset(collection.as_slice(), criteria);
        let summary = Summary::new(visible.len(), collection.len());

        Self {
            visible,
            total: collection.len(),
            summary,
            merchant_options: merchant_options(collection.as_slice()),
            criteria: criteria.clone(),
        }
    }
}
