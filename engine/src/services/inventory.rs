//! Inventory queries over the recomputed snapshot

use std::collections::BTreeMap;
use std::rc::Rc;

use rust_decimal::Decimal;
use serde::Serialize;

use shared::InventoryEntry;

use crate::config::EngineConfig;
use crate::error::{AppError, AppResult};
use crate::store::SharedStore;

/// Inventory service: read-only views over the ledger snapshot
#[derive(Clone)]
pub struct InventoryService {
    store: SharedStore,
    config: Rc<EngineConfig>,
}

/// A fish type whose stock has fallen below the low-stock threshold
#[derive(Debug, Clone, Serialize)]
pub struct LowStockItem {
    pub name: String,
    pub weight: Decimal,
}

impl InventoryService {
    /// Create a new InventoryService instance
    pub fn new(store: SharedStore, config: Rc<EngineConfig>) -> Self {
        Self { store, config }
    }

    /// Full inventory snapshot, recomputed from the current collections
    pub fn snapshot(&self) -> BTreeMap<String, InventoryEntry> {
        self.store.borrow().inventory()
    }

    /// Snapshot entry for one fish type
    pub fn entry(&self, name: &str) -> AppResult<InventoryEntry> {
        self.snapshot()
            .remove(name)
            .ok_or_else(|| AppError::NotFound("Fish type".to_string()))
    }

    /// Kg on hand for one fish type; unknown types have nothing on hand
    pub fn available_weight(&self, name: &str) -> Decimal {
        self.snapshot()
            .get(name)
            .map(|entry| entry.weight)
            .unwrap_or(Decimal::ZERO)
    }

    /// Fish types at or below the configured low-stock threshold
    pub fn low_stock(&self) -> Vec<LowStockItem> {
        self.snapshot()
            .into_iter()
            .filter(|(_, entry)| entry.weight < self.config.stock.low_stock_kg)
            .map(|(name, entry)| LowStockItem {
                name,
                weight: entry.weight,
            })
            .collect()
    }

    /// Total kg on hand across all fish types, clamped at zero for display
    pub fn total_stock_weight(&self) -> Decimal {
        self.snapshot()
            .values()
            .map(|entry| entry.weight.max(Decimal::ZERO))
            .sum()
    }

    /// Total stock value across all fish types, clamped at zero for display
    pub fn total_stock_value(&self) -> Decimal {
        self.snapshot()
            .values()
            .map(|entry| entry.total_value.max(Decimal::ZERO))
            .sum()
    }
}
