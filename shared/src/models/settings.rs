//! Store settings and overhead allocation

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed-cost and turnover parameters of the store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreSettings {
    pub monthly_rent: Decimal,
    /// Average weight of stock held in the store, kg
    pub avg_daily_stock: Decimal,
    /// How many days stock usually sits before it sells
    pub avg_turnaround_days: Decimal,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            monthly_rent: Decimal::from(15000),
            avg_daily_stock: Decimal::from(500),
            avg_turnaround_days: Decimal::from(5),
        }
    }
}

/// Store overhead absorbed per kg during its dwell time in inventory.
///
/// Fixed monthly costs (rent + wages) are spread over a 30-day month and the
/// average kg of stock held, then multiplied by the turnaround days. The
/// 30-day month is a deliberate simplification; changing it would shift every
/// derived cost figure. A zero-capacity store yields zero overhead.
pub fn compute_store_overhead_per_kg(
    settings: &StoreSettings,
    total_monthly_wages: Decimal,
) -> Decimal {
    let total_monthly_fixed = settings.monthly_rent + total_monthly_wages;
    let daily_fixed_cost = total_monthly_fixed / Decimal::from(30);
    if settings.avg_daily_stock > Decimal::ZERO {
        daily_fixed_cost / settings.avg_daily_stock * settings.avg_turnaround_days
    } else {
        Decimal::ZERO
    }
}
