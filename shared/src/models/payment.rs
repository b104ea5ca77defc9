//! Payment log models and payment-status derivation

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a payment was made
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMode {
    #[default]
    Cash,
    Electronic,
    Other,
}

impl PaymentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMode::Cash => "cash",
            PaymentMode::Electronic => "electronic",
            PaymentMode::Other => "other",
        }
    }
}

/// Settlement state of a sale, derived from the payment log
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Paid,
    Partial,
    Pending,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Paid => write!(f, "Paid"),
            PaymentStatus::Partial => write!(f, "Partial"),
            PaymentStatus::Pending => write!(f, "Pending"),
        }
    }
}

/// One payment recorded against a sale
///
/// Multiple payments may exist per sale; the log is the source of truth for
/// how much of a sale has been settled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: Uuid,
    pub sale_id: Uuid,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub mode: PaymentMode,
    pub note: Option<String>,
}

/// Derived payment state for one sale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PaymentBreakdown {
    pub status: PaymentStatus,
    pub amount_paid: Decimal,
    pub amount_pending: Decimal,
}

/// Derive a sale's payment state from the payment log.
///
/// Pure function of the log: payments for other sales are ignored, and no
/// stored running total is consulted.
pub fn calculate_payment_status(
    sale_id: Uuid,
    final_amount: Decimal,
    payments: &[Payment],
) -> PaymentBreakdown {
    let amount_paid: Decimal = payments
        .iter()
        .filter(|p| p.sale_id == sale_id)
        .map(|p| p.amount)
        .sum();

    if amount_paid >= final_amount {
        PaymentBreakdown {
            status: PaymentStatus::Paid,
            amount_paid,
            amount_pending: Decimal::ZERO,
        }
    } else if amount_paid > Decimal::ZERO {
        PaymentBreakdown {
            status: PaymentStatus::Partial,
            amount_paid,
            amount_pending: final_amount - amount_paid,
        }
    } else {
        PaymentBreakdown {
            status: PaymentStatus::Pending,
            amount_paid: Decimal::ZERO,
            amount_pending: final_amount,
        }
    }
}
