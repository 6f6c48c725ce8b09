//! Pipeline for filtering and summarizing a perk listing.
//!
//! This crate provides:
//! - FilterCriteria describing what the user asked for
//! - Filter trait and implementations (title query, merchant)
//! - FilterPipeline for composing filters
//! - Summary and merchant option derivation
//!
//! ## Architecture
//! Everything here is a pure function of (collection, criteria):
//! 1. Filters remove perks the criteria exclude, keeping the original order
//! 2. Summary counts the survivors against the full collection
//! 3. Merchant options are derived from the full collection
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterCriteria, FilterPipeline, Summary, merchant_options};
//!
//! let criteria = FilterCriteria::new().with_name_query("coffee");
//! let visible = FilterPipeline::standard().visible_subset(collection.as_slice(), &criteria);
//!
//! println!("{}", Summary::new(visible.len(), collection.len()));
//! let options = merchant_options(collection.as_slice());
//! ```

pub mod criteria;
pub mod filter_pipeline;
pub mod filters;
pub mod options;
pub mod summary;
pub mod traits;

// Re-export main types
pub use criteria::{ANY_MERCHANT_VALUE, FilterCriteria, MerchantSelection};
pub use filter_pipeline::FilterPipeline;
pub use options::{MerchantOption, distinct_merchants, merchant_counts, merchant_options};
pub use summary::{Summary, format_summary};
pub use traits::Filter;
