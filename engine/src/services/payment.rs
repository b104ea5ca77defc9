//! Payment tracking service: the write paths over the payment log
//!
//! The log is the source of truth for settlement state; these methods only
//! append, edit or remove entries and enforce the "never pay past the final
//! amount" rule at write time.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use shared::{
    calculate_payment_status, validate_payment_amount, Payment, PaymentBreakdown, PaymentMode,
};

use crate::error::{AppError, AppResult};
use crate::store::SharedStore;

/// Payment service for recording installments against sales
#[derive(Clone)]
pub struct PaymentService {
    store: SharedStore,
}

/// Input for recording a payment
#[derive(Debug, Clone, Deserialize)]
pub struct RecordPaymentInput {
    pub sale_id: Uuid,
    pub amount: Decimal,
    pub mode: PaymentMode,
    pub note: Option<String>,
}

/// Input for editing a payment; absent fields keep their current value
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePaymentInput {
    pub amount: Option<Decimal>,
    pub mode: Option<PaymentMode>,
    pub note: Option<String>,
}

impl PaymentService {
    /// Create a new PaymentService instance
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Record a payment against a sale.
    ///
    /// Rejected when the amount would push the paid total past the sale's
    /// final amount, validated against the pending amount re-derived from the
    /// log at this moment.
    pub fn add_payment(&self, input: RecordPaymentInput) -> AppResult<Payment> {
        validate_payment_amount(input.amount).map_err(|message| AppError::Validation {
            field: "amount".to_string(),
            message: message.to_string(),
        })?;

        let mut store = self.store.borrow_mut();
        let final_amount = store
            .sales
            .iter()
            .find(|s| s.id == input.sale_id)
            .map(|s| s.final_amount)
            .ok_or_else(|| AppError::NotFound("Sale".to_string()))?;

        let breakdown = calculate_payment_status(input.sale_id, final_amount, &store.payments);
        if input.amount > breakdown.amount_pending {
            tracing::warn!(
                sale = %input.sale_id,
                pending = %breakdown.amount_pending,
                attempted = %input.amount,
                "payment rejected: exceeds pending amount"
            );
            return Err(AppError::PaymentExceedsPending {
                pending: breakdown.amount_pending,
            });
        }

        let payment = Payment {
            id: Uuid::new_v4(),
            sale_id: input.sale_id,
            date: Utc::now().date_naive(),
            amount: input.amount,
            mode: input.mode,
            note: input.note,
        };
        store.payments.push(payment.clone());
        tracing::info!(
            payment = %payment.id,
            sale = %payment.sale_id,
            amount = %payment.amount,
            "payment recorded"
        );
        Ok(payment)
    }

    /// Edit a payment; an amount increase must not exceed the sale's pending
    /// amount
    pub fn update_payment(
        &self,
        payment_id: Uuid,
        input: UpdatePaymentInput,
    ) -> AppResult<Payment> {
        let mut store = self.store.borrow_mut();
        let position = store
            .payments
            .iter()
            .position(|p| p.id == payment_id)
            .ok_or_else(|| AppError::NotFound("Payment".to_string()))?;

        let sale_id = store.payments[position].sale_id;
        let old_amount = store.payments[position].amount;
        let new_amount = input.amount.unwrap_or(old_amount);
        validate_payment_amount(new_amount).map_err(|message| AppError::Validation {
            field: "amount".to_string(),
            message: message.to_string(),
        })?;

        let final_amount = store
            .sales
            .iter()
            .find(|s| s.id == sale_id)
            .map(|s| s.final_amount)
            .ok_or_else(|| AppError::NotFound("Sale".to_string()))?;

        let breakdown = calculate_payment_status(sale_id, final_amount, &store.payments);
        if new_amount - old_amount > breakdown.amount_pending {
            tracing::warn!(
                payment = %payment_id,
                pending = %breakdown.amount_pending,
                "payment edit rejected: increase exceeds pending amount"
            );
            return Err(AppError::PaymentExceedsPending {
                pending: breakdown.amount_pending,
            });
        }

        let payment = &mut store.payments[position];
        payment.amount = new_amount;
        if let Some(mode) = input.mode {
            payment.mode = mode;
        }
        if input.note.is_some() {
            payment.note = input.note;
        }
        tracing::info!(payment = %payment.id, "payment updated");
        Ok(payment.clone())
    }

    /// Delete a payment entry; the sale's pending amount grows back on the
    /// next derivation
    pub fn delete_payment(&self, payment_id: Uuid) -> AppResult<()> {
        let mut store = self.store.borrow_mut();
        let before = store.payments.len();
        store.payments.retain(|p| p.id != payment_id);
        if store.payments.len() == before {
            return Err(AppError::NotFound("Payment".to_string()));
        }
        tracing::info!(payment = %payment_id, "payment deleted");
        Ok(())
    }

    /// Payment history for one sale
    pub fn payments_for_sale(&self, sale_id: Uuid) -> Vec<Payment> {
        self.store
            .borrow()
            .payments
            .iter()
            .filter(|p| p.sale_id == sale_id)
            .cloned()
            .collect()
    }

    /// Derived settlement state for a sale
    pub fn status_for_sale(&self, sale_id: Uuid) -> AppResult<PaymentBreakdown> {
        let store = self.store.borrow();
        let final_amount = store
            .sales
            .iter()
            .find(|s| s.id == sale_id)
            .map(|s| s.final_amount)
            .ok_or_else(|| AppError::NotFound("Sale".to_string()))?;
        Ok(calculate_payment_status(
            sale_id,
            final_amount,
            &store.payments,
        ))
    }
}
