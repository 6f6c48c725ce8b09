//! Filter implementations for the listing pipeline.
//!
//! This module contains the concrete filters that can be composed
//! into a FilterPipeline.

pub mod merchant;
pub mod name_query;

// Re-export for convenience
pub use merchant::MerchantFilter;
pub use name_query::NameQueryFilter;
