//! Filter perks by a free-text title query.
//!
//! Matching is a case-insensitive substring test, so "coffee" finds
//! "Coffee Deal" and "Iced COFFEE".

use crate::criteria::FilterCriteria;
use crate::traits::Filter;
use data_loader::Perk;

/// Keeps perks whose title contains `criteria.name_query`, ignoring case.
///
/// ## Algorithm
/// Lowercases the title per perk and checks `contains`. An empty
/// query makes the filter inactive.
pub struct NameQueryFilter;

impl Filter for NameQueryFilter {
    fn name(&self) -> &str {
        "NameQueryFilter"
    }

    fn is_active(&self, criteria: &FilterCriteria) -> bool {
        !criteria.name_query.is_empty()
    }

    fn matches(&self, perk: &Perk, criteria: &FilterCriteria) -> bool {
        if criteria.name_query.is_empty() {
            return true;
        }
        title_contains(&perk.title, &criteria.name_query)
    }
}

fn title_contains(title: &str, query: &str) -> bool {
    title.to_lowercase().contains(&query.to_lowercase())
}
