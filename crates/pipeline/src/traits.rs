//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a perk collection.

use crate::criteria::FilterCriteria;
use data_loader::Perk;
use rayon::prelude::*;

/// Collections at least this large are filtered on the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 4096;

/// Core trait for filtering perks.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` so `matches` can run on rayon workers
/// - Filters only decide per perk; `apply` keeps the survivors in their
///   original relative order
/// - Filtering cannot fail, so there is no `Result` here
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether the criteria restrict anything this filter looks at.
    /// Inactive filters are skipped by the pipeline.
    fn is_active(&self, criteria: &FilterCriteria) -> bool;

    /// Whether a single perk passes this filter.
    fn matches(&self, perk: &Perk, criteria: &FilterCriteria) -> bool;

    /// Apply this filter to a set of perks, preserving order.
    fn apply(&self, perks: Vec<Perk>, criteria: &FilterCriteria) -> Vec<Perk> {
        if perks.len() >= PARALLEL_THRESHOLD {
            // Collecting into a Vec keeps the input order.
            perks
                .into_par_iter()
                .filter(|perk| self.matches(perk, criteria))
                .collect()
        } else {
            perks
                .into_iter()
                .filter(|perk| self.matches(perk, criteria))
                .collect()
        }
    }
}
