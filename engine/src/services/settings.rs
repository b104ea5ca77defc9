//! Store configuration service: fixed costs, capacity and overhead

use rust_decimal::Decimal;
use serde::Deserialize;

use shared::StoreSettings;

use crate::error::{AppError, AppResult};
use crate::store::SharedStore;

/// Settings service for the store's fixed-cost and turnover parameters
#[derive(Clone)]
pub struct SettingsService {
    store: SharedStore,
}

/// Input for updating store settings; absent fields keep their current value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSettingsInput {
    pub monthly_rent: Option<Decimal>,
    pub avg_daily_stock: Option<Decimal>,
    pub avg_turnaround_days: Option<Decimal>,
}

impl SettingsService {
    /// Create a new SettingsService instance
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Current store settings
    pub fn get(&self) -> StoreSettings {
        self.store.borrow().settings.clone()
    }

    /// Update store settings; every derived cost figure shifts with them
    pub fn update_settings(&self, input: UpdateSettingsInput) -> AppResult<StoreSettings> {
        let mut store = self.store.borrow_mut();
        let settings = &store.settings;

        let monthly_rent = input.monthly_rent.unwrap_or(settings.monthly_rent);
        let avg_daily_stock = input.avg_daily_stock.unwrap_or(settings.avg_daily_stock);
        let avg_turnaround_days = input
            .avg_turnaround_days
            .unwrap_or(settings.avg_turnaround_days);

        for (field, value) in [
            ("monthly_rent", monthly_rent),
            ("avg_daily_stock", avg_daily_stock),
            ("avg_turnaround_days", avg_turnaround_days),
        ] {
            if value < Decimal::ZERO {
                return Err(AppError::Validation {
                    field: field.to_string(),
                    message: "Value cannot be negative".to_string(),
                });
            }
        }

        store.settings = StoreSettings {
            monthly_rent,
            avg_daily_stock,
            avg_turnaround_days,
        };
        tracing::info!(
            rent = %monthly_rent,
            stock = %avg_daily_stock,
            turnaround = %avg_turnaround_days,
            "store settings updated"
        );
        Ok(store.settings.clone())
    }

    /// Total monthly wages across the payroll
    pub fn total_monthly_wages(&self) -> Decimal {
        self.store.borrow().total_monthly_wages()
    }

    /// Rent plus wages, the total fixed monthly outgoing
    pub fn total_monthly_fixed(&self) -> Decimal {
        let store = self.store.borrow();
        store.settings.monthly_rent + store.total_monthly_wages()
    }

    /// Current store overhead per kg at the configured turnover
    pub fn overhead_per_kg(&self) -> Decimal {
        self.store.borrow().overhead_per_kg()
    }
}
