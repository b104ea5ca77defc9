//! Client master data, customer classification and selling prices

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Customer categories, used for pricing defaults and pending-bill alerts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum CustomerType {
    #[default]
    WalkIn,
    Hotel,
    Wholesale,
}

impl CustomerType {
    pub const ALL: [CustomerType; 3] = [
        CustomerType::WalkIn,
        CustomerType::Hotel,
        CustomerType::Wholesale,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerType::WalkIn => "Walk-in",
            CustomerType::Hotel => "Hotel",
            CustomerType::Wholesale => "Wholesale",
        }
    }
}

impl std::fmt::Display for CustomerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a client name into a customer category.
///
/// Case-insensitive substring match, first match wins: "walk", then "hotel",
/// then "wholesale"; anything else is a walk-in. This is a default suggestion
/// for new records only: stored sales carry their own explicit category and
/// are never reclassified.
pub fn detect_customer_type(client_name: &str) -> CustomerType {
    let name = client_name.to_lowercase();
    if name.contains("walk") {
        CustomerType::WalkIn
    } else if name.contains("hotel") {
        CustomerType::Hotel
    } else if name.contains("wholesale") {
        CustomerType::Wholesale
    } else {
        CustomerType::WalkIn
    }
}

/// A known client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub category: CustomerType,
}

/// Selling price for a fish type: one flat price, or one price per category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum SellingPrice {
    Uniform(Decimal),
    ByCategory(HashMap<CustomerType, Decimal>),
}

impl SellingPrice {
    /// Price for the given category: the category-specific value if present,
    /// else the default (walk-in) value, else absent.
    pub fn resolve(&self, category: CustomerType) -> Option<Decimal> {
        match self {
            SellingPrice::Uniform(price) => Some(*price),
            SellingPrice::ByCategory(prices) => prices
                .get(&category)
                .or_else(|| prices.get(&CustomerType::default()))
                .copied(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walk_keyword_wins_over_hotel() {
        assert_eq!(detect_customer_type("walk hotel"), CustomerType::WalkIn);
    }

    #[test]
    fn hotel_keyword_wins_over_wholesale() {
        assert_eq!(detect_customer_type("hotel wholesale"), CustomerType::Hotel);
    }

    #[test]
    fn wholesale_is_detected() {
        assert_eq!(
            detect_customer_type("wholesale only"),
            CustomerType::Wholesale
        );
    }

    #[test]
    fn empty_name_defaults_to_walk_in() {
        assert_eq!(detect_customer_type(""), CustomerType::WalkIn);
    }

    #[test]
    fn detection_is_case_insensitive() {
        assert_eq!(
            detect_customer_type("Local Market Hotel"),
            CustomerType::Hotel
        );
    }

    #[test]
    fn uniform_price_applies_to_every_category() {
        let price = SellingPrice::Uniform(Decimal::from(120));
        assert_eq!(
            price.resolve(CustomerType::Wholesale),
            Some(Decimal::from(120))
        );
    }

    #[test]
    fn by_category_falls_back_to_walk_in() {
        let mut prices = HashMap::new();
        prices.insert(CustomerType::WalkIn, Decimal::from(150));
        prices.insert(CustomerType::Hotel, Decimal::from(140));
        let price = SellingPrice::ByCategory(prices);

        assert_eq!(price.resolve(CustomerType::Hotel), Some(Decimal::from(140)));
        // No wholesale price set, so the walk-in price applies
        assert_eq!(
            price.resolve(CustomerType::Wholesale),
            Some(Decimal::from(150))
        );
    }

    #[test]
    fn by_category_without_default_reports_absent() {
        let mut prices = HashMap::new();
        prices.insert(CustomerType::Hotel, Decimal::from(140));
        let price = SellingPrice::ByCategory(prices);
        assert_eq!(price.resolve(CustomerType::Wholesale), None);
    }
}
