//! Filter perks by issuing merchant.

use crate::criteria::{FilterCriteria, MerchantSelection};
use crate::traits::Filter;
use data_loader::Perk;

/// Keeps perks whose merchant equals the selected one exactly.
///
/// Comparison is case-sensitive: merchant names come from the same
/// collection the dropdown options are built from, so they match verbatim.
/// `MerchantSelection::Any` keeps everything.
pub struct MerchantFilter;

impl Filter for MerchantFilter {
    fn name(&self) -> &str {
        "MerchantFilter"
    }

    fn is_active(&self, criteria: &FilterCriteria) -> bool {
        !criteria.merchant.is_any()
    }

    fn matches(&self, perk: &Perk, criteria: &FilterCriteria) -> bool {
        match &criteria.merchant {
            MerchantSelection::Any => true,
            MerchantSelection::Merchant(merchant) => perk.merchant == *merchant,
        }
    }
}
