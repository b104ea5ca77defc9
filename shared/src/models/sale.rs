//! Sale models, amount calculation, filtering and customer grouping

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CustomerType, PaymentBreakdown, PaymentStatus};

/// A recorded sale
///
/// The financial terms are fixed at creation; the settlement state
/// (paid/pending amounts and status) is always re-derived from the payment
/// log and exposed through [`SaleView`], never stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: Uuid,
    pub client_name: String,
    /// Explicit category persisted at creation time; historical sales are
    /// never reclassified when a client is renamed.
    pub customer_type: CustomerType,
    /// Fish type name sold
    pub item_name: String,
    /// Weight sold, kg
    pub weight: Decimal,
    pub price_per_kg: Decimal,
    pub original_amount: Decimal,
    pub discount_amount: Decimal,
    pub discount_percent: Decimal,
    pub final_amount: Decimal,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// Discount entry for a sale; one of the two fields is authoritative per
/// entry path (an explicit amount wins over a percent)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DiscountInput {
    /// Percent of the original amount, 0-100
    pub percent: Option<Decimal>,
    /// Absolute discount amount
    pub amount: Option<Decimal>,
}

/// Original, discount and final amounts for a sale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SaleAmounts {
    pub original_amount: Decimal,
    pub discount_amount: Decimal,
    /// Recomputed from the clamped discount, never trusted from the caller
    pub discount_percent: Decimal,
    pub final_amount: Decimal,
}

/// Compute original, discount and final amounts for a sale.
///
/// A positive explicit amount wins over a percent; the discount is clamped
/// to `[0, original]`, so the final amount is never negative, and the
/// returned percent always agrees with the clamped amount.
pub fn compute_sale_amounts(
    weight: Decimal,
    price_per_kg: Decimal,
    discount: DiscountInput,
) -> SaleAmounts {
    let original_amount = weight * price_per_kg;

    let mut discount_amount = discount.amount.unwrap_or(Decimal::ZERO);
    let percent = discount.percent.unwrap_or(Decimal::ZERO);
    if percent > Decimal::ZERO && discount_amount <= Decimal::ZERO {
        discount_amount = original_amount * percent / Decimal::ONE_HUNDRED;
    }
    let discount_amount = discount_amount.min(original_amount).max(Decimal::ZERO);

    let final_amount = original_amount - discount_amount;
    let discount_percent = if original_amount > Decimal::ZERO {
        discount_amount / original_amount * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    SaleAmounts {
        original_amount,
        discount_amount,
        discount_percent,
        final_amount,
    }
}

/// Discount amount from a percent of the original (percent clamped to 0-100)
pub fn discount_amount_from_percent(original_amount: Decimal, percent: Decimal) -> Decimal {
    let percent = percent.min(Decimal::ONE_HUNDRED).max(Decimal::ZERO);
    original_amount * percent / Decimal::ONE_HUNDRED
}

/// Discount percent from an absolute amount (clamped to 0-100)
pub fn discount_percent_from_amount(original_amount: Decimal, amount: Decimal) -> Decimal {
    if original_amount <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    (amount / original_amount * Decimal::ONE_HUNDRED)
        .min(Decimal::ONE_HUNDRED)
        .max(Decimal::ZERO)
}

/// A sale joined with its log-derived payment state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleView {
    pub sale: Sale,
    pub payment: PaymentBreakdown,
}

/// Filter over sale views; `None` means "all"
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SaleFilter {
    pub status: Option<PaymentStatus>,
    pub customer_type: Option<CustomerType>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Filter sales by settlement status, customer type and date range
pub fn filter_sales(views: &[SaleView], filter: &SaleFilter) -> Vec<SaleView> {
    views
        .iter()
        .filter(|view| {
            if let Some(status) = filter.status {
                if view.payment.status != status {
                    return false;
                }
            }
            if let Some(customer_type) = filter.customer_type {
                if view.sale.customer_type != customer_type {
                    return false;
                }
            }
            if let Some(from) = filter.from {
                if view.sale.date < from {
                    return false;
                }
            }
            if let Some(to) = filter.to {
                if view.sale.date > to {
                    return false;
                }
            }
            true
        })
        .cloned()
        .collect()
}

/// Sales of one client, with group totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerSalesGroup {
    pub client_name: String,
    pub customer_type: CustomerType,
    pub sales: Vec<SaleView>,
    pub total_amount: Decimal,
    pub total_pending: Decimal,
}

/// Partition sales by client name, preserving first-sale order.
///
/// Every sale lands in exactly one group; group totals are the sums of the
/// member sales' final and pending amounts.
pub fn group_sales_by_customer(views: &[SaleView]) -> Vec<CustomerSalesGroup> {
    let mut groups: Vec<CustomerSalesGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for view in views {
        let key = if view.sale.client_name.is_empty() {
            "Unknown".to_string()
        } else {
            view.sale.client_name.clone()
        };
        let position = *index.entry(key.clone()).or_insert_with(|| {
            groups.push(CustomerSalesGroup {
                client_name: key,
                customer_type: view.sale.customer_type,
                sales: Vec::new(),
                total_amount: Decimal::ZERO,
                total_pending: Decimal::ZERO,
            });
            groups.len() - 1
        });

        let group = &mut groups[position];
        group.total_amount += view.sale.final_amount;
        group.total_pending += view.payment.amount_pending;
        group.sales.push(view.clone());
    }

    groups
}
