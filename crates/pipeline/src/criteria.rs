//! Filter criteria chosen by the user.

use serde::Serialize;

/// Option value carried by the "any merchant" entry of the merchant dropdown.
/// Perks without a merchant never get an option, so this cannot collide.
pub const ANY_MERCHANT_VALUE: &str = "";

/// Which merchant the user has picked, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub enum MerchantSelection {
    /// No merchant restriction
    #[default]
    Any,
    /// Only perks issued by exactly this merchant
    Merchant(String),
}

impl MerchantSelection {
    /// Interpret a dropdown value. Any non-empty value names a merchant,
    /// including a merchant literally called "any".
    pub fn from_option_value(value: &str) -> Self {
        if value == ANY_MERCHANT_VALUE {
            MerchantSelection::Any
        } else {
            MerchantSelection::Merchant(value.to_string())
        }
    }

    /// The dropdown value that selects this entry.
    pub fn option_value(&self) -> &str {
        match self {
            MerchantSelection::Any => ANY_MERCHANT_VALUE,
            MerchantSelection::Merchant(name) => name,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, MerchantSelection::Any)
    }
}

/// Current filter state of a listing.
///
/// Defaults to an empty name query and no merchant restriction, which
/// leaves the collection unfiltered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against perk titles
    pub name_query: String,
    pub merchant: MerchantSelection,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name_query(mut self, query: impl Into<String>) -> Self {
        self.name_query = query.into();
        self
    }

    pub fn with_merchant(mut self, merchant: impl Into<String>) -> Self {
        self.merchant = MerchantSelection::Merchant(merchant.into());
        self
    }

    /// True when no criterion restricts the collection.
    pub fn is_unfiltered(&self) -> bool {
        self.name_query.is_empty() && self.merchant.is_any()
    }
}
