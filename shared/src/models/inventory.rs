//! Weighted-average-cost inventory ledger

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{calculate_payment_status, Payment, PaymentStatus, Sale, Shipment};

/// Running stock snapshot for one fish type
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InventoryEntry {
    /// Kg on hand; goes negative when sales outrun recorded shipments.
    /// Deliberately unclamped so overselling stays visible; display layers
    /// show `max(0, weight)`.
    pub weight: Decimal,
    pub total_value: Decimal,
    /// Weighted-average cost per kg: total_value / weight
    pub avg_cost: Decimal,
    /// Most recent raw + shared cost per kg, informational only
    pub direct_cost: Decimal,
    pub sold_weight: Decimal,
    pub sold_value: Decimal,
    /// Outstanding receivable from not-fully-paid sales of this fish type
    pub pending_value: Decimal,
}

/// Fold finalized shipments and sales into a per-fish-type snapshot.
///
/// Full recompute, never incremental: shipments accumulate weight and value
/// at effective cost (raw + shared expense + store overhead) and refresh the
/// weighted-average cost; the average is then frozen for the sales pass, so
/// sales only move magnitude and never reprice the stock. Both passes are
/// commutative within themselves, so shipment and sale ordering does not
/// affect the snapshot.
pub fn compute_inventory(
    shipments: &[Shipment],
    sales: &[Sale],
    payments: &[Payment],
    overhead_per_kg: Decimal,
) -> BTreeMap<String, InventoryEntry> {
    let mut stock: BTreeMap<String, InventoryEntry> = BTreeMap::new();

    for shipment in shipments.iter().filter(|s| s.is_finalized) {
        let shared_per_kg = shipment.shared_expense_per_kg();
        for item in &shipment.items {
            let raw_per_kg = item.raw_cost_per_kg();
            let effective_per_kg = raw_per_kg + shared_per_kg + overhead_per_kg;

            let entry = stock.entry(item.name.clone()).or_default();
            entry.total_value += item.weight * effective_per_kg;
            entry.weight += item.weight;
            entry.avg_cost = if entry.weight > Decimal::ZERO {
                entry.total_value / entry.weight
            } else {
                Decimal::ZERO
            };
            entry.direct_cost = raw_per_kg + shared_per_kg;
        }
    }

    for sale in sales {
        let Some(entry) = stock.get_mut(&sale.item_name) else {
            // Sales against fish types no shipment ever delivered are skipped
            continue;
        };
        let breakdown = calculate_payment_status(sale.id, sale.final_amount, payments);

        entry.weight -= sale.weight;
        entry.total_value -= sale.weight * entry.avg_cost;
        entry.sold_weight += sale.weight;
        entry.sold_value += sale.final_amount;
        if breakdown.status != PaymentStatus::Paid {
            entry.pending_value += breakdown.amount_pending;
        }
    }

    stock
}
