//! Human-readable count line for a filtered listing.

use serde::Serialize;
use std::fmt;

/// How many perks are visible out of how many were loaded.
///
/// Displays as `Showing {visible} of {total} perks`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub visible: usize,
    pub total: usize,
}

impl Summary {
    pub fn new(visible: usize, total: usize) -> Self {
        Self { visible, total }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} of {} perks", self.visible, self.total)
    }
}

/// Format the summary line directly.
pub fn format_summary(visible: usize, total: usize) -> String {
    Summary::new(visible, total).to_string()
}
