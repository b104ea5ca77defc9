//! Dashboard aggregates and pending-bill alerts
//!
//! Everything here is a derived, read-only view over the ledger; the only
//! writes are the daily cash controls feeding the balance summary.

use std::rc::Rc;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use shared::{calculate_payment_status, CustomerType, PaymentStatus, StaffTransactionKind};

use crate::config::EngineConfig;
use crate::error::{AppError, AppResult};
use crate::store::SharedStore;

/// Reporting service: dashboard summary figures and alerts
#[derive(Clone)]
pub struct ReportingService {
    store: SharedStore,
    config: Rc<EngineConfig>,
}

/// Aggregate figures for the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    /// Kg on hand across all fish types, clamped at zero
    pub total_stock_weight: Decimal,
    /// Stock value across all fish types, clamped at zero
    pub total_stock_value: Decimal,
    pub overhead_per_kg: Decimal,
    /// Sum of final sale amounts
    pub total_revenue: Decimal,
    pub total_sold_weight: Decimal,
    pub total_received: Decimal,
    pub total_pending: Decimal,
    pub salary_paid: Decimal,
    pub advance_given: Decimal,
    pub petty_cash: Decimal,
    pub daily_expenses: Decimal,
    /// revenue + petty cash - expenses - pending bills
    pub balance_amount: Decimal,
}

/// A sale whose bill has been pending past its category threshold
#[derive(Debug, Clone, Serialize)]
pub struct PendingBillAlert {
    pub sale_id: Uuid,
    pub client_name: String,
    pub customer_type: CustomerType,
    pub item_name: String,
    pub amount_pending: Decimal,
    pub hours_pending: i64,
}

impl ReportingService {
    /// Create a new ReportingService instance
    pub fn new(store: SharedStore, config: Rc<EngineConfig>) -> Self {
        Self { store, config }
    }

    /// One-shot dashboard summary over the whole ledger
    pub fn dashboard_summary(&self) -> DashboardSummary {
        let store = self.store.borrow();
        let inventory = store.inventory();

        let total_stock_weight = inventory
            .values()
            .map(|entry| entry.weight.max(Decimal::ZERO))
            .sum();
        let total_stock_value = inventory
            .values()
            .map(|entry| entry.total_value.max(Decimal::ZERO))
            .sum();

        let mut total_revenue = Decimal::ZERO;
        let mut total_sold_weight = Decimal::ZERO;
        let mut total_pending = Decimal::ZERO;
        for sale in &store.sales {
            let breakdown = calculate_payment_status(sale.id, sale.final_amount, &store.payments);
            total_revenue += sale.final_amount;
            total_sold_weight += sale.weight;
            total_pending += breakdown.amount_pending;
        }
        let total_received = total_revenue - total_pending;

        let paid_of = |kind: StaffTransactionKind| -> Decimal {
            store
                .staff_transactions
                .iter()
                .filter(|t| t.kind == kind)
                .map(|t| t.amount)
                .sum()
        };

        let balance_amount =
            total_revenue + store.petty_cash - store.daily_expenses - total_pending;

        DashboardSummary {
            total_stock_weight,
            total_stock_value,
            overhead_per_kg: store.overhead_per_kg(),
            total_revenue,
            total_sold_weight,
            total_received,
            total_pending,
            salary_paid: paid_of(StaffTransactionKind::Salary),
            advance_given: paid_of(StaffTransactionKind::Advance),
            petty_cash: store.petty_cash,
            daily_expenses: store.daily_expenses,
            balance_amount,
        }
    }

    /// Bills still fully pending past their category threshold at `now`.
    ///
    /// Walk-in bills alert after 5 hours, hotel bills after 48 (both
    /// configurable); wholesale accounts never alert.
    pub fn pending_bill_alerts(&self, now: DateTime<Utc>) -> Vec<PendingBillAlert> {
        let store = self.store.borrow();
        let mut alerts = Vec::new();

        for sale in &store.sales {
            let breakdown = calculate_payment_status(sale.id, sale.final_amount, &store.payments);
            if breakdown.status != PaymentStatus::Pending {
                continue;
            }

            let threshold_hours = match sale.customer_type {
                CustomerType::WalkIn => self.config.alerts.walk_in_hours,
                CustomerType::Hotel => self.config.alerts.hotel_hours,
                CustomerType::Wholesale => continue,
            };

            let hours_pending = (now - sale.created_at).num_hours();
            if hours_pending >= threshold_hours {
                alerts.push(PendingBillAlert {
                    sale_id: sale.id,
                    client_name: sale.client_name.clone(),
                    customer_type: sale.customer_type,
                    item_name: sale.item_name.clone(),
                    amount_pending: breakdown.amount_pending,
                    hours_pending,
                });
            }
        }

        alerts
    }

    /// Set today's petty cash figure
    pub fn set_petty_cash(&self, amount: Decimal) -> AppResult<()> {
        if amount < Decimal::ZERO {
            return Err(AppError::Validation {
                field: "petty_cash".to_string(),
                message: "Petty cash cannot be negative".to_string(),
            });
        }
        self.store.borrow_mut().petty_cash = amount;
        Ok(())
    }

    /// Set today's non-shipment expenses figure
    pub fn set_daily_expenses(&self, amount: Decimal) -> AppResult<()> {
        if amount < Decimal::ZERO {
            return Err(AppError::Validation {
                field: "daily_expenses".to_string(),
                message: "Daily expenses cannot be negative".to_string(),
            });
        }
        self.store.borrow_mut().daily_expenses = amount;
        Ok(())
    }
}
