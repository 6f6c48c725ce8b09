//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::criteria::FilterCriteria;
use crate::filters::{MerchantFilter, NameQueryFilter};
use crate::traits::Filter;
use data_loader::Perk;

/// Chains multiple filters together into a processing pipeline.
///
/// A perk survives the pipeline only if every active filter accepts it.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(NameQueryFilter)
///     .add_filter(MerchantFilter);
///
/// let visible = pipeline.visible_subset(collection.as_slice(), &criteria);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The pipeline used by the listing page: title query, then merchant.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(NameQueryFilter)
            .add_filter(MerchantFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Names of the configured filters, in application order.
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence to the perks.
    ///
    /// ## Algorithm
    /// 1. Start with the input perks
    /// 2. For each filter in order:
    ///    a. Skip it if the criteria leave it inactive
    ///    b. Apply the filter, logging input and output counts
    /// 3. Return the survivors in their original relative order
    pub fn apply(&self, perks: Vec<Perk>, criteria: &FilterCriteria) -> Vec<Perk> {
        let mut current = perks;
        for filter in &self.filters {
            if !filter.is_active(criteria) {
                continue;
            }
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current, criteria);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }

    /// Derive the visible subset of a loaded collection without consuming it.
    pub fn visible_subset(&self, perks: &[Perk], criteria: &FilterCriteria) -> Vec<Perk> {
        if perks.is_empty() {
            return Vec::new();
        }
        self.apply(perks.to_vec(), criteria)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::standard()
    }
}
