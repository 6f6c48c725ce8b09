//! Page crate for the perk directory.
//!
//! This crate contains the listing page that ties a perk source to the
//! filter pipeline and hands renderers a derived view.

pub mod page;
pub mod view;

pub use page::{Activation, ListingPage};
pub use view::{Listing, PageView};
