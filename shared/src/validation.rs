//! Validation helpers for the Fish Ledger
//!
//! Pure checks used by the engine services before accepting a mutation.

use rust_decimal::Decimal;

// ============================================================================
// Discount Validations
// ============================================================================

/// Validate a discount entry: percent in 0-100, amount within the original
pub fn validate_discount(
    original_amount: Decimal,
    discount_amount: Decimal,
    discount_percent: Decimal,
) -> Result<(), &'static str> {
    if discount_percent < Decimal::ZERO || discount_percent > Decimal::ONE_HUNDRED {
        return Err("Discount percent must be between 0 and 100");
    }
    if discount_amount < Decimal::ZERO {
        return Err("Discount amount cannot be negative");
    }
    if discount_amount > original_amount {
        return Err("Discount amount cannot exceed the original amount");
    }
    Ok(())
}

// ============================================================================
// Quantity Validations
// ============================================================================

/// Validate the weight and price of a sale entry
pub fn validate_sale_quantities(weight: Decimal, price_per_kg: Decimal) -> Result<(), &'static str> {
    if weight <= Decimal::ZERO {
        return Err("Weight must be positive");
    }
    if price_per_kg <= Decimal::ZERO {
        return Err("Price per kg must be positive");
    }
    Ok(())
}

/// Validate a shipment item entry; zero weight is legal but never negative
pub fn validate_shipment_item(weight: Decimal, cost: Decimal) -> Result<(), &'static str> {
    if weight < Decimal::ZERO {
        return Err("Item weight cannot be negative");
    }
    if cost < Decimal::ZERO {
        return Err("Item cost cannot be negative");
    }
    Ok(())
}

/// Validate a payment entry amount
pub fn validate_payment_amount(amount: Decimal) -> Result<(), &'static str> {
    if amount <= Decimal::ZERO {
        return Err("Payment amount must be positive");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    #[test]
    fn valid_discount_passes() {
        assert!(validate_discount(dec(1000), dec(100), dec(10)).is_ok());
        assert!(validate_discount(dec(500), Decimal::ZERO, Decimal::ZERO).is_ok());
    }

    #[test]
    fn percent_outside_range_is_rejected() {
        assert!(validate_discount(dec(100), Decimal::ZERO, dec(-1)).is_err());
        assert!(validate_discount(dec(100), Decimal::ZERO, dec(101)).is_err());
    }

    #[test]
    fn amount_exceeding_original_is_rejected() {
        assert!(validate_discount(dec(100), dec(150), Decimal::ZERO).is_err());
    }

    #[test]
    fn negative_amount_is_rejected() {
        assert!(validate_discount(dec(100), dec(-10), Decimal::ZERO).is_err());
    }

    #[test]
    fn sale_quantities_must_be_positive() {
        assert!(validate_sale_quantities(dec(10), dec(120)).is_ok());
        assert!(validate_sale_quantities(Decimal::ZERO, dec(120)).is_err());
        assert!(validate_sale_quantities(dec(10), Decimal::ZERO).is_err());
    }

    #[test]
    fn shipment_items_allow_zero_but_not_negative() {
        assert!(validate_shipment_item(Decimal::ZERO, Decimal::ZERO).is_ok());
        assert!(validate_shipment_item(dec(-1), dec(100)).is_err());
        assert!(validate_shipment_item(dec(10), dec(-100)).is_err());
    }

    #[test]
    fn payment_amounts_must_be_positive() {
        assert!(validate_payment_amount(dec(50)).is_ok());
        assert!(validate_payment_amount(Decimal::ZERO).is_err());
        assert!(validate_payment_amount(dec(-5)).is_err());
    }
}
