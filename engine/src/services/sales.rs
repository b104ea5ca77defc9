//! Sales entry service: recording sales against stock, filtering and grouping

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use shared::{
    calculate_payment_status, compute_inventory, compute_sale_amounts, detect_customer_type,
    filter_sales, group_sales_by_customer, validate_discount, validate_sale_quantities,
    CustomerSalesGroup, CustomerType, DiscountInput, Payment, PaymentMode, Sale, SaleFilter,
    SaleView,
};

use crate::error::{AppError, AppResult};
use crate::store::SharedStore;

/// Sales service: records sales against inventory and derives sale views
/// (sale + log-derived payment state) for display
#[derive(Clone)]
pub struct SalesService {
    store: SharedStore,
}

/// Input for recording a sale
#[derive(Debug, Clone, Deserialize)]
pub struct RecordSaleInput {
    pub client_name: String,
    /// Explicit category; when absent the classifier suggests one from the
    /// client name. The chosen category is persisted with the sale.
    pub customer_type: Option<CustomerType>,
    pub item_name: String,
    /// Weight sold, kg
    pub weight: Decimal,
    /// Explicit price per kg; when absent the selling-price list resolves one
    /// for the customer category
    pub price_per_kg: Option<Decimal>,
    pub discount: DiscountInput,
    /// Settle the full amount immediately, on the same timestamp basis as the
    /// sale record itself
    pub paid_in_full: bool,
    pub payment_mode: PaymentMode,
}

impl SalesService {
    /// Create a new SalesService instance
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Record a sale.
    ///
    /// The stock check and the insert happen inside the same store borrow, so
    /// no second sale can validate against the same pre-deduction figure.
    pub fn record_sale(&self, input: RecordSaleInput) -> AppResult<SaleView> {
        let mut store = self.store.borrow_mut();

        if input.client_name.trim().is_empty() {
            return Err(AppError::Validation {
                field: "client_name".to_string(),
                message: "Client is required".to_string(),
            });
        }
        if input.item_name.trim().is_empty() {
            return Err(AppError::Validation {
                field: "item_name".to_string(),
                message: "Item is required".to_string(),
            });
        }

        let customer_type = input
            .customer_type
            .unwrap_or_else(|| detect_customer_type(&input.client_name));

        let price_per_kg = match input.price_per_kg {
            Some(price) => price,
            None => store
                .selling_prices
                .get(&input.item_name)
                .and_then(|price| price.resolve(customer_type))
                .ok_or_else(|| AppError::Validation {
                    field: "price_per_kg".to_string(),
                    message: "No selling price resolved for this item".to_string(),
                })?,
        };

        validate_sale_quantities(input.weight, price_per_kg).map_err(|message| {
            AppError::Validation {
                field: "sale".to_string(),
                message: message.to_string(),
            }
        })?;

        let original_amount = input.weight * price_per_kg;
        validate_discount(
            original_amount,
            input.discount.amount.unwrap_or(Decimal::ZERO),
            input.discount.percent.unwrap_or(Decimal::ZERO),
        )
        .map_err(|message| AppError::Validation {
            field: "discount".to_string(),
            message: message.to_string(),
        })?;

        let available = store
            .inventory()
            .get(&input.item_name)
            .map(|entry| entry.weight)
            .unwrap_or(Decimal::ZERO);
        if input.weight > available {
            tracing::warn!(
                item = %input.item_name,
                %available,
                requested = %input.weight,
                "sale rejected: insufficient stock"
            );
            return Err(AppError::InsufficientStock(format!(
                "{} has {} kg on hand, requested {}",
                input.item_name, available, input.weight
            )));
        }

        let amounts = compute_sale_amounts(input.weight, price_per_kg, input.discount);
        let created_at = Utc::now();
        let sale = Sale {
            id: Uuid::new_v4(),
            client_name: input.client_name,
            customer_type,
            item_name: input.item_name,
            weight: input.weight,
            price_per_kg,
            original_amount: amounts.original_amount,
            discount_amount: amounts.discount_amount,
            discount_percent: amounts.discount_percent,
            final_amount: amounts.final_amount,
            date: created_at.date_naive(),
            created_at,
        };

        // An immediate settlement shares the sale's timestamp basis so the
        // tracker's re-derivation matches the creation-time snapshot.
        if input.paid_in_full {
            store.payments.push(Payment {
                id: Uuid::new_v4(),
                sale_id: sale.id,
                date: created_at.date_naive(),
                amount: sale.final_amount,
                mode: input.payment_mode,
                note: Some("Initial payment".to_string()),
            });
        }

        store.sales.push(sale.clone());
        let payment = calculate_payment_status(sale.id, sale.final_amount, &store.payments);
        tracing::info!(
            sale = %sale.id,
            client = %sale.client_name,
            item = %sale.item_name,
            amount = %sale.final_amount,
            "sale recorded"
        );
        Ok(SaleView { sale, payment })
    }

    /// Replace a sale's terms wholesale, keeping its identity and timestamps.
    ///
    /// Already-recorded payments stay in the log; the new final amount must
    /// still cover them.
    pub fn update_sale(&self, sale_id: Uuid, input: RecordSaleInput) -> AppResult<SaleView> {
        let mut store = self.store.borrow_mut();
        let position = store
            .sales
            .iter()
            .position(|s| s.id == sale_id)
            .ok_or_else(|| AppError::NotFound("Sale".to_string()))?;

        if input.client_name.trim().is_empty() {
            return Err(AppError::Validation {
                field: "client_name".to_string(),
                message: "Client is required".to_string(),
            });
        }
        if input.item_name.trim().is_empty() {
            return Err(AppError::Validation {
                field: "item_name".to_string(),
                message: "Item is required".to_string(),
            });
        }

        let customer_type = input
            .customer_type
            .unwrap_or_else(|| detect_customer_type(&input.client_name));
        let price_per_kg = match input.price_per_kg {
            Some(price) => price,
            None => store
                .selling_prices
                .get(&input.item_name)
                .and_then(|price| price.resolve(customer_type))
                .ok_or_else(|| AppError::Validation {
                    field: "price_per_kg".to_string(),
                    message: "No selling price resolved for this item".to_string(),
                })?,
        };
        validate_sale_quantities(input.weight, price_per_kg).map_err(|message| {
            AppError::Validation {
                field: "sale".to_string(),
                message: message.to_string(),
            }
        })?;

        let original_amount = input.weight * price_per_kg;
        validate_discount(
            original_amount,
            input.discount.amount.unwrap_or(Decimal::ZERO),
            input.discount.percent.unwrap_or(Decimal::ZERO),
        )
        .map_err(|message| AppError::Validation {
            field: "discount".to_string(),
            message: message.to_string(),
        })?;

        // Stock check against the snapshot with this sale taken out
        let other_sales: Vec<Sale> = store
            .sales
            .iter()
            .filter(|s| s.id != sale_id)
            .cloned()
            .collect();
        let available = compute_inventory(
            &store.shipments,
            &other_sales,
            &store.payments,
            store.overhead_per_kg(),
        )
        .get(&input.item_name)
        .map(|entry| entry.weight)
        .unwrap_or(Decimal::ZERO);
        if input.weight > available {
            return Err(AppError::InsufficientStock(format!(
                "{} has {} kg on hand, requested {}",
                input.item_name, available, input.weight
            )));
        }

        let amounts = compute_sale_amounts(input.weight, price_per_kg, input.discount);
        let already_paid = calculate_payment_status(sale_id, amounts.final_amount, &store.payments)
            .amount_paid;
        if already_paid > amounts.final_amount {
            return Err(AppError::Validation {
                field: "final_amount".to_string(),
                message: "Recorded payments exceed the new final amount".to_string(),
            });
        }

        let sale = &mut store.sales[position];
        sale.client_name = input.client_name;
        sale.customer_type = customer_type;
        sale.item_name = input.item_name;
        sale.weight = input.weight;
        sale.price_per_kg = price_per_kg;
        sale.original_amount = amounts.original_amount;
        sale.discount_amount = amounts.discount_amount;
        sale.discount_percent = amounts.discount_percent;
        sale.final_amount = amounts.final_amount;
        let sale = sale.clone();

        let payment = calculate_payment_status(sale.id, sale.final_amount, &store.payments);
        tracing::info!(sale = %sale.id, "sale replaced");
        Ok(SaleView { sale, payment })
    }

    /// Delete a sale together with its payment log entries
    pub fn delete_sale(&self, sale_id: Uuid) -> AppResult<()> {
        let mut store = self.store.borrow_mut();
        let before = store.sales.len();
        store.sales.retain(|s| s.id != sale_id);
        if store.sales.len() == before {
            return Err(AppError::NotFound("Sale".to_string()));
        }
        // The sale's payments leave the log with it
        store.payments.retain(|p| p.sale_id != sale_id);
        tracing::info!(sale = %sale_id, "sale deleted");
        Ok(())
    }

    /// Get one sale with its derived payment state
    pub fn get(&self, sale_id: Uuid) -> AppResult<SaleView> {
        let store = self.store.borrow();
        store
            .sales
            .iter()
            .find(|s| s.id == sale_id)
            .map(|sale| SaleView {
                sale: sale.clone(),
                payment: calculate_payment_status(sale.id, sale.final_amount, &store.payments),
            })
            .ok_or_else(|| AppError::NotFound("Sale".to_string()))
    }

    /// All sales joined with their log-derived payment state
    pub fn sales_with_status(&self) -> Vec<SaleView> {
        let store = self.store.borrow();
        store
            .sales
            .iter()
            .map(|sale| SaleView {
                sale: sale.clone(),
                payment: calculate_payment_status(sale.id, sale.final_amount, &store.payments),
            })
            .collect()
    }

    /// Sales filtered by status, customer type and date range
    pub fn filter(&self, filter: &SaleFilter) -> Vec<SaleView> {
        filter_sales(&self.sales_with_status(), filter)
    }

    /// Filtered sales partitioned by client, with per-client totals
    pub fn group_by_customer(&self, filter: &SaleFilter) -> Vec<CustomerSalesGroup> {
        group_sales_by_customer(&self.filter(filter))
    }
}
