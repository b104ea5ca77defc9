//! Shipment models and landed-cost resolution

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single fish lot inside a shipment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentItem {
    pub id: Uuid,
    /// Fish type name, e.g. "Mathi"
    pub name: String,
    /// Weight in kg
    pub weight: Decimal,
    /// Purchase cost for the whole lot, not per kg
    pub cost: Decimal,
}

impl ShipmentItem {
    /// Raw purchase cost per kg. A zero-weight lot contributes nothing per kg.
    pub fn raw_cost_per_kg(&self) -> Decimal {
        if self.weight > Decimal::ZERO {
            self.cost / self.weight
        } else {
            Decimal::ZERO
        }
    }
}

/// A direct expense shared across every item of a shipment (transport, ice, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentExpense {
    pub id: Uuid,
    pub kind: String,
    pub amount: Decimal,
}

/// An incoming shipment from a supplier
///
/// Only finalized shipments enter inventory; drafts are inert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shipment {
    pub id: Uuid,
    pub supplier: String,
    pub date: NaiveDate,
    pub items: Vec<ShipmentItem>,
    pub expenses: Vec<ShipmentExpense>,
    pub is_finalized: bool,
}

impl Shipment {
    /// Total weight of the shipment (sum of item weights)
    pub fn total_weight(&self) -> Decimal {
        self.items.iter().map(|item| item.weight).sum()
    }

    /// Total direct expenses of the shipment (sum of expense amounts)
    pub fn total_expenses(&self) -> Decimal {
        self.expenses.iter().map(|exp| exp.amount).sum()
    }

    /// Shared expense per kg: pooled direct expenses spread over the whole
    /// shipment. Every item in the same shipment carries the same share.
    pub fn shared_expense_per_kg(&self) -> Decimal {
        let weight = self.total_weight();
        if weight > Decimal::ZERO {
            self.total_expenses() / weight
        } else {
            Decimal::ZERO
        }
    }

    /// Landed-cost breakdown per item at the given store overhead rate
    pub fn item_costs(&self, overhead_per_kg: Decimal) -> Vec<ItemCost> {
        let shared_per_kg = self.shared_expense_per_kg();
        self.items
            .iter()
            .map(|item| {
                let raw_per_kg = item.raw_cost_per_kg();
                ItemCost {
                    item_id: item.id,
                    name: item.name.clone(),
                    raw_cost_per_kg: raw_per_kg,
                    shared_expense_per_kg: shared_per_kg,
                    effective_cost_per_kg: raw_per_kg + shared_per_kg + overhead_per_kg,
                }
            })
            .collect()
    }
}

/// Per-kg cost breakdown for one shipment item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCost {
    pub item_id: Uuid,
    pub name: String,
    pub raw_cost_per_kg: Decimal,
    pub shared_expense_per_kg: Decimal,
    /// raw + shared + store overhead
    pub effective_cost_per_kg: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, weight: i64, cost: i64) -> ShipmentItem {
        ShipmentItem {
            id: Uuid::new_v4(),
            name: name.to_string(),
            weight: Decimal::from(weight),
            cost: Decimal::from(cost),
        }
    }

    fn expense(amount: i64) -> ShipmentExpense {
        ShipmentExpense {
            id: Uuid::new_v4(),
            kind: "Transport".to_string(),
            amount: Decimal::from(amount),
        }
    }

    fn shipment(items: Vec<ShipmentItem>, expenses: Vec<ShipmentExpense>) -> Shipment {
        Shipment {
            id: Uuid::new_v4(),
            supplier: "Harbour Fresh Catch".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 10, 24).unwrap(),
            items,
            expenses,
            is_finalized: true,
        }
    }

    #[test]
    fn shared_expense_pools_over_total_weight() {
        let s = shipment(
            vec![item("Mathi", 100, 12000), item("Ayila", 50, 11000)],
            vec![expense(2500), expense(1000)],
        );
        assert_eq!(s.total_weight(), Decimal::from(150));
        assert_eq!(s.total_expenses(), Decimal::from(3500));
        assert_eq!(
            s.shared_expense_per_kg(),
            Decimal::from(3500) / Decimal::from(150)
        );
    }

    #[test]
    fn zero_weight_shipment_has_zero_shared_expense() {
        let s = shipment(vec![], vec![expense(500)]);
        assert_eq!(s.shared_expense_per_kg(), Decimal::ZERO);
    }

    #[test]
    fn zero_weight_item_has_zero_raw_cost() {
        let i = item("Mathi", 0, 1000);
        assert_eq!(i.raw_cost_per_kg(), Decimal::ZERO);
    }

    #[test]
    fn every_item_shares_the_same_expense_rate() {
        let s = shipment(
            vec![item("Mathi", 100, 10000), item("Chembali", 30, 10500)],
            vec![expense(1300)],
        );
        let costs = s.item_costs(Decimal::from(2));
        let shared = s.shared_expense_per_kg();
        assert!(costs.iter().all(|c| c.shared_expense_per_kg == shared));
        for c in &costs {
            assert_eq!(
                c.effective_cost_per_kg,
                c.raw_cost_per_kg + shared + Decimal::from(2)
            );
        }
    }
}
