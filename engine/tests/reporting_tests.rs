//! Dashboard summary and pending-bill alert tests

use std::str::FromStr;

use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use fish_ledger_engine::services::payment::RecordPaymentInput;
use fish_ledger_engine::services::sales::RecordSaleInput;
use fish_ledger_engine::{AppError, EngineConfig, Ledger};
use shared::{CustomerType, DiscountInput, PaymentMode};

/// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn ledger() -> Ledger {
    Ledger::with_sample_data(EngineConfig::default())
}

fn sale_input(client: &str, item: &str, weight: &str, price: &str) -> RecordSaleInput {
    RecordSaleInput {
        client_name: client.to_string(),
        customer_type: None,
        item_name: item.to_string(),
        weight: dec(weight),
        price_per_kg: Some(dec(price)),
        discount: DiscountInput::default(),
        paid_in_full: false,
        payment_mode: PaymentMode::Cash,
    }
}

mod summary {
    use super::*;

    #[test]
    fn revenue_splits_into_received_and_pending() {
        let ledger = ledger();
        let sale = ledger
            .sales()
            .record_sale(sale_input("Walk-in Customer", "Mathi", "30", "120"))
            .unwrap();
        ledger
            .payments()
            .add_payment(RecordPaymentInput {
                sale_id: sale.sale.id,
                amount: dec("1000"),
                mode: PaymentMode::Cash,
                note: None,
            })
            .unwrap();
        ledger
            .sales()
            .record_sale(RecordSaleInput {
                paid_in_full: true,
                ..sale_input("Local Market Hotel", "Ayila", "10", "240")
            })
            .unwrap();

        let summary = ledger.reporting().dashboard_summary();
        assert_eq!(summary.total_revenue, dec("6000"));
        assert_eq!(summary.total_sold_weight, dec("40"));
        assert_eq!(summary.total_pending, dec("2600"));
        assert_eq!(summary.total_received, dec("3400"));
        // From the sample payout history
        assert_eq!(summary.salary_paid, dec("12000"));
        assert_eq!(summary.advance_given, dec("2000"));
    }

    #[test]
    fn balance_folds_in_the_daily_cash_controls() {
        let ledger = ledger();
        ledger
            .sales()
            .record_sale(sale_input("Walk-in Customer", "Mathi", "30", "120"))
            .unwrap();

        ledger.reporting().set_petty_cash(dec("500")).unwrap();
        ledger.reporting().set_daily_expenses(dec("200")).unwrap();

        let summary = ledger.reporting().dashboard_summary();
        // revenue + petty cash - expenses - pending
        assert_eq!(
            summary.balance_amount,
            dec("3600") + dec("500") - dec("200") - dec("3600")
        );
    }

    #[test]
    fn stock_figures_match_the_inventory_view() {
        let ledger = ledger();
        let summary = ledger.reporting().dashboard_summary();
        assert_eq!(
            summary.total_stock_weight,
            ledger.inventory().total_stock_weight()
        );
        assert_eq!(
            summary.total_stock_value,
            ledger.inventory().total_stock_value()
        );
        assert_eq!(summary.overhead_per_kg, ledger.settings().overhead_per_kg());
    }

    #[test]
    fn negative_cash_controls_are_rejected() {
        let ledger = ledger();
        assert!(matches!(
            ledger.reporting().set_petty_cash(dec("-1")),
            Err(AppError::Validation { .. })
        ));
        assert!(matches!(
            ledger.reporting().set_daily_expenses(dec("-1")),
            Err(AppError::Validation { .. })
        ));
    }
}

mod alerts {
    use super::*;

    #[test]
    fn walk_in_bills_alert_after_five_hours() {
        let ledger = ledger();
        let sale = ledger
            .sales()
            .record_sale(sale_input("Walk-in Customer", "Mathi", "10", "120"))
            .unwrap();

        let early = ledger
            .reporting()
            .pending_bill_alerts(Utc::now() + Duration::hours(4));
        assert!(early.is_empty());

        let late = ledger
            .reporting()
            .pending_bill_alerts(Utc::now() + Duration::hours(6));
        assert_eq!(late.len(), 1);
        assert_eq!(late[0].sale_id, sale.sale.id);
        assert_eq!(late[0].customer_type, CustomerType::WalkIn);
        assert_eq!(late[0].amount_pending, dec("1200"));
    }

    #[test]
    fn hotel_bills_alert_after_two_days() {
        let ledger = ledger();
        ledger
            .sales()
            .record_sale(sale_input("Local Market Hotel", "Ayila", "5", "240"))
            .unwrap();

        let early = ledger
            .reporting()
            .pending_bill_alerts(Utc::now() + Duration::hours(47));
        assert!(early.is_empty());

        let late = ledger
            .reporting()
            .pending_bill_alerts(Utc::now() + Duration::hours(49));
        assert_eq!(late.len(), 1);
        assert_eq!(late[0].customer_type, CustomerType::Hotel);
    }

    #[test]
    fn wholesale_accounts_never_alert() {
        let ledger = ledger();
        ledger
            .sales()
            .record_sale(RecordSaleInput {
                customer_type: Some(CustomerType::Wholesale),
                ..sale_input("Seafront Traders", "Mathi", "10", "110")
            })
            .unwrap();

        let alerts = ledger
            .reporting()
            .pending_bill_alerts(Utc::now() + Duration::hours(1000));
        assert!(alerts.is_empty());
    }

    #[test]
    fn partially_paid_bills_do_not_alert() {
        let ledger = ledger();
        let sale = ledger
            .sales()
            .record_sale(sale_input("Walk-in Customer", "Mathi", "10", "120"))
            .unwrap();
        ledger
            .payments()
            .add_payment(RecordPaymentInput {
                sale_id: sale.sale.id,
                amount: dec("100"),
                mode: PaymentMode::Cash,
                note: None,
            })
            .unwrap();

        let alerts = ledger
            .reporting()
            .pending_bill_alerts(Utc::now() + Duration::hours(6));
        assert!(alerts.is_empty());
    }
}
