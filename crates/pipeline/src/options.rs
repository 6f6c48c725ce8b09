//! Merchant dropdown options.
//!
//! Options come from the full loaded collection, never from the filtered
//! subset, so picking a merchant cannot hide the other choices.

use crate::criteria::{ANY_MERCHANT_VALUE, MerchantSelection};
use data_loader::Perk;
use serde::Serialize;
use std::collections::BTreeMap;

/// Label shown for the unrestricted entry
pub const ANY_MERCHANT_LABEL: &str = "All merchants";

/// One selectable entry of the merchant dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MerchantOption {
    /// Value submitted when the entry is chosen
    pub value: String,
    pub label: String,
    pub selection: MerchantSelection,
    /// Perks in the full collection this entry would show
    pub count: usize,
}

impl MerchantOption {
    pub fn any(total: usize) -> Self {
        Self {
            value: ANY_MERCHANT_VALUE.to_string(),
            label: ANY_MERCHANT_LABEL.to_string(),
            selection: MerchantSelection::Any,
            count: total,
        }
    }

    pub fn merchant(name: &str, count: usize) -> Self {
        Self {
            value: name.to_string(),
            label: name.to_string(),
            selection: MerchantSelection::Merchant(name.to_string()),
            count,
        }
    }

    /// The selection this option stands for.
    pub fn selection(&self) -> MerchantSelection {
        self.selection.clone()
    }
}

/// Perk count per merchant over the full collection, sorted by name.
///
/// Perks without a merchant are not counted.
pub fn merchant_counts(perks: &[Perk]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for perk in perks {
        if perk.merchant.is_empty() {
            continue;
        }
        *counts.entry(perk.merchant.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Distinct merchants of the collection, sorted.
pub fn distinct_merchants(perks: &[Perk]) -> Vec<&str> {
    merchant_counts(perks).into_keys().collect()
}

/// The full option list: the "any" entry followed by every merchant once.
pub fn merchant_options(perks: &[Perk]) -> Vec<MerchantOption> {
    std::iter::once(MerchantOption::any(perks.len()))
        .chain(
            merchant_counts(perks)
                .into_iter()
                .map(|(name, count)| MerchantOption::merchant(name, count)),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_merchant_once_and_sorted() {
        let perks = vec![
            Perk::new(1u64, "Coffee Deal", "CafeCo"),
            Perk::new(2u64, "Gym Pass", "FitCo"),
            Perk::new(3u64, "Bagel Combo", "CafeCo"),
            Perk::new(4u64, "Book Club", "BookNook"),
        ];

        assert_eq!(distinct_merchants(&perks), vec!["BookNook", "CafeCo", "FitCo"]);
    }

    #[test]
    fn test_counts_cover_full_collection() {
        let perks = vec![
            Perk::new(1u64, "Coffee Deal", "CafeCo"),
            Perk::new(2u64, "Gym Pass", "FitCo"),
            Perk::new(3u64, "Bagel Combo", "CafeCo"),
        ];
        let options = merchant_options(&perks);

        assert_eq!(
            options,
            vec![
                MerchantOption::any(3),
                MerchantOption::merchant("CafeCo", 2),
                MerchantOption::merchant("FitCo", 1),
            ]
        );
    }

    #[test]
    fn test_any_entry_comes_first() {
        let perks = vec![Perk::new(1u64, "Coffee Deal", "CafeCo")];
        let options = merchant_options(&perks);

        assert_eq!(options.len(), 2);
        assert_eq!(options[0], MerchantOption::any(1));
        assert_eq!(options[0].selection(), MerchantSelection::Any);
        assert_eq!(
            options[1].selection(),
            MerchantSelection::Merchant("CafeCo".to_string())
        );
    }

    #[test]
    fn test_merchant_named_any_is_its_own_option() {
        let perks = vec![
            Perk::new(1u64, "Coffee Deal", "CafeCo"),
            Perk::new(2u64, "Mystery Box", "any"),
        ];
        let options = merchant_options(&perks);

        let values: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["", "CafeCo", "any"]);
        assert_eq!(
            options[2].selection(),
            MerchantSelection::Merchant("any".to_string())
        );
    }

    #[test]
    fn test_whitespace_merchant_is_listed() {
        let perks = vec![Perk::new(1u64, "Odd One", " ")];
        assert_eq!(
            merchant_options(&perks),
            vec![MerchantOption::any(1), MerchantOption::merchant(" ", 1)]
        );
    }

    #[test]
    fn test_empty_merchant_skipped() {
        let perks = vec![Perk::new(1u64, "Mystery", "")];
        assert_eq!(merchant_options(&perks), vec![MerchantOption::any(1)]);
    }

    #[test]
    fn test_empty_collection_has_only_any() {
        assert_eq!(merchant_options(&[]), vec![MerchantOption::any(0)]);
    }
}
