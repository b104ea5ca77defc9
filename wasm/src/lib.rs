//! WebAssembly module for the Fish Ledger
//!
//! Provides client-side computation for:
//! - Wage totals and store overhead
//! - Inventory snapshots from shipments, sales and payments
//! - Payment status and sale amount calculations
//! - Customer classification

use rust_decimal::Decimal;
use uuid::Uuid;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&"fish-ledger wasm initialized".into());
}

fn decimal_from_f64(value: f64) -> Decimal {
    Decimal::try_from(value).unwrap_or(Decimal::ZERO)
}

fn decimal_to_f64(value: Decimal) -> f64 {
    value.to_string().parse().unwrap_or(0.0)
}

/// Total monthly wages from a staff list JSON array
#[wasm_bindgen]
pub fn total_monthly_wages(staff_json: &str) -> Result<f64, JsValue> {
    let staff: Vec<StaffMember> = serde_json::from_str(staff_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid staff JSON: {}", e)))?;

    Ok(decimal_to_f64(compute_total_monthly_wages(&staff)))
}

/// Store overhead per kg from settings JSON and the monthly wage total
#[wasm_bindgen]
pub fn store_overhead_per_kg(settings_json: &str, monthly_wages: f64) -> Result<f64, JsValue> {
    let settings: StoreSettings = serde_json::from_str(settings_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid settings JSON: {}", e)))?;

    Ok(decimal_to_f64(compute_store_overhead_per_kg(
        &settings,
        decimal_from_f64(monthly_wages),
    )))
}

/// Inventory snapshot as a JSON map keyed by fish type
#[wasm_bindgen]
pub fn inventory_json(
    shipments_json: &str,
    sales_json: &str,
    payments_json: &str,
    overhead_per_kg: f64,
) -> Result<String, JsValue> {
    let shipments: Vec<Shipment> = serde_json::from_str(shipments_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid shipments JSON: {}", e)))?;
    let sales: Vec<Sale> = serde_json::from_str(sales_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid sales JSON: {}", e)))?;
    let payments: Vec<Payment> = serde_json::from_str(payments_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid payments JSON: {}", e)))?;

    let stock = compute_inventory(
        &shipments,
        &sales,
        &payments,
        decimal_from_f64(overhead_per_kg),
    );
    serde_json::to_string(&stock).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Payment status for a sale as JSON: status, amount paid, amount pending
#[wasm_bindgen]
pub fn payment_status_json(
    sale_id: &str,
    final_amount: f64,
    payments_json: &str,
) -> Result<String, JsValue> {
    let sale_id = Uuid::parse_str(sale_id)
        .map_err(|e| JsValue::from_str(&format!("Invalid sale id: {}", e)))?;
    let payments: Vec<Payment> = serde_json::from_str(payments_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid payments JSON: {}", e)))?;

    let breakdown =
        calculate_payment_status(sale_id, decimal_from_f64(final_amount), &payments);
    serde_json::to_string(&breakdown).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Original, discount and final amounts for a sale as JSON.
///
/// Pass zero for whichever discount field is not in use; a positive amount
/// wins over a percent.
#[wasm_bindgen]
pub fn sale_amounts_json(
    weight: f64,
    price_per_kg: f64,
    discount_percent: f64,
    discount_amount: f64,
) -> Result<String, JsValue> {
    let amounts = compute_sale_amounts(
        decimal_from_f64(weight),
        decimal_from_f64(price_per_kg),
        DiscountInput {
            percent: Some(decimal_from_f64(discount_percent)),
            amount: Some(decimal_from_f64(discount_amount)),
        },
    );
    serde_json::to_string(&amounts).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Classify a client name into a customer category
#[wasm_bindgen]
pub fn classify_customer(client_name: &str) -> String {
    detect_customer_type(client_name).to_string()
}

/// Shared (pooled) expense per kg for a shipment JSON object
#[wasm_bindgen]
pub fn shipment_shared_expense_per_kg(shipment_json: &str) -> Result<f64, JsValue> {
    let shipment: Shipment = serde_json::from_str(shipment_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid shipment JSON: {}", e)))?;

    Ok(decimal_to_f64(shipment.shared_expense_per_kg()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_customer() {
        assert_eq!(classify_customer("walk hotel"), "Walk-in");
        assert_eq!(classify_customer("hotel wholesale"), "Hotel");
        assert_eq!(classify_customer("wholesale only"), "Wholesale");
        assert_eq!(classify_customer(""), "Walk-in");
    }

    #[test]
    fn test_total_monthly_wages() {
        let staff_json = r#"[
            {"id": "a7f1f9f0-1111-4f7a-9e1a-000000000001", "name": "Ramesh", "role": "Helper", "salary": "12000", "phone": null},
            {"id": "a7f1f9f0-1111-4f7a-9e1a-000000000002", "name": "Suresh", "role": "Cleaner", "salary": "8000", "phone": null}
        ]"#;
        let total = total_monthly_wages(staff_json).unwrap();
        assert!((total - 20000.0).abs() < 0.001);
    }

    #[test]
    fn test_store_overhead_per_kg() {
        let settings_json = r#"{"monthly_rent": "15000", "avg_daily_stock": "500", "avg_turnaround_days": "5"}"#;
        let overhead = store_overhead_per_kg(settings_json, 35000.0).unwrap();
        let expected = 50000.0 / 30.0 / 500.0 * 5.0;
        assert!((overhead - expected).abs() < 0.001);
    }

    #[test]
    fn test_store_overhead_zero_capacity() {
        let settings_json = r#"{"monthly_rent": "10000", "avg_daily_stock": "0", "avg_turnaround_days": "5"}"#;
        let overhead = store_overhead_per_kg(settings_json, 0.0).unwrap();
        assert_eq!(overhead, 0.0);
    }

    #[test]
    fn test_sale_amounts_clamps_discount() {
        let json = sale_amounts_json(10.0, 100.0, 0.0, 1500.0).unwrap();
        let amounts: SaleAmounts = serde_json::from_str(&json).unwrap();
        assert_eq!(amounts.discount_amount, Decimal::from(1000));
        assert_eq!(amounts.final_amount, Decimal::ZERO);
    }

    #[test]
    fn test_payment_status_json() {
        let sale_id = "a7f1f9f0-2222-4f7a-9e1a-000000000001";
        let payments_json = format!(
            r#"[{{"id": "a7f1f9f0-3333-4f7a-9e1a-000000000001", "sale_id": "{}", "date": "2023-10-25", "amount": "40", "mode": "cash", "note": null}}]"#,
            sale_id
        );
        let json = payment_status_json(sale_id, 100.0, &payments_json).unwrap();
        let breakdown: PaymentBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(breakdown.status, PaymentStatus::Partial);
        assert_eq!(breakdown.amount_paid, Decimal::from(40));
        assert_eq!(breakdown.amount_pending, Decimal::from(60));
    }
}
