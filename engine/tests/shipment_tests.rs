//! Shipment entry tests
//!
//! Drafts stay out of inventory until finalized; landed costs pool the
//! shipment's direct expenses over its total weight.

use std::str::FromStr;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use fish_ledger_engine::services::shipment::{NewExpenseInput, NewItemInput, NewShipmentInput};
use fish_ledger_engine::{AppError, EngineConfig, Ledger};

/// Helper to create Decimal from string
fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn ledger() -> Ledger {
    Ledger::with_sample_data(EngineConfig::default())
}

fn item(name: &str, weight: &str, cost: &str) -> NewItemInput {
    NewItemInput {
        name: name.to_string(),
        weight: dec(weight),
        cost: dec(cost),
    }
}

fn expense(kind: &str, amount: &str) -> NewExpenseInput {
    NewExpenseInput {
        kind: kind.to_string(),
        amount: dec(amount),
    }
}

#[test]
fn draft_shipments_stay_out_of_inventory() {
    let ledger = ledger();
    let before = ledger.inventory().entry("Mathi").unwrap();

    ledger
        .shipments()
        .create_shipment(NewShipmentInput {
            supplier: "Second Boat".to_string(),
            items: vec![item("Mathi", "40", "5000")],
            ..NewShipmentInput::default()
        })
        .unwrap();

    assert_eq!(ledger.inventory().entry("Mathi").unwrap(), before);
}

#[test]
fn finalizing_a_draft_commits_it_to_inventory() {
    let ledger = ledger();
    let draft = ledger
        .shipments()
        .create_shipment(NewShipmentInput {
            supplier: "Second Boat".to_string(),
            ..NewShipmentInput::default()
        })
        .unwrap();

    ledger
        .shipments()
        .add_item(draft.id, item("Mathi", "40", "5000"))
        .unwrap();
    ledger
        .shipments()
        .add_expense(draft.id, expense("Ice & Box", "400"))
        .unwrap();
    ledger.shipments().finalize_shipment(draft.id).unwrap();

    // 100 kg from the sample shipment plus the new 40
    assert_eq!(
        ledger.inventory().entry("Mathi").unwrap().weight,
        dec("140")
    );
}

#[test]
fn finalizing_an_empty_shipment_is_rejected() {
    let ledger = ledger();
    let draft = ledger
        .shipments()
        .create_shipment(NewShipmentInput {
            supplier: "Empty Boat".to_string(),
            ..NewShipmentInput::default()
        })
        .unwrap();

    let result = ledger.shipments().finalize_shipment(draft.id);
    assert!(matches!(result, Err(AppError::Validation { .. })));
}

#[test]
fn blank_supplier_gets_a_date_based_name() {
    let ledger = ledger();
    let shipment = ledger
        .shipments()
        .create_shipment(NewShipmentInput {
            supplier: "   ".to_string(),
            items: vec![item("Mathi", "10", "1200")],
            finalize: true,
            ..NewShipmentInput::default()
        })
        .unwrap();

    let expected = Utc::now().date_naive().format("%d-%B-%y").to_string();
    assert_eq!(shipment.supplier, expected);
}

#[test]
fn negative_item_weight_is_rejected() {
    let ledger = ledger();
    let result = ledger.shipments().create_shipment(NewShipmentInput {
        supplier: "Bad Entry".to_string(),
        items: vec![item("Mathi", "-5", "1000")],
        ..NewShipmentInput::default()
    });
    assert!(matches!(result, Err(AppError::Validation { .. })));
}

#[test]
fn negative_expense_is_rejected() {
    let ledger = ledger();
    let result = ledger.shipments().create_shipment(NewShipmentInput {
        supplier: "Bad Entry".to_string(),
        items: vec![item("Mathi", "5", "1000")],
        expenses: vec![expense("Ice", "-100")],
        ..NewShipmentInput::default()
    });
    assert!(matches!(result, Err(AppError::Validation { .. })));
}

#[test]
fn adding_to_a_finalized_shipment_is_rejected() {
    let ledger = ledger();
    let shipment = ledger
        .shipments()
        .create_shipment(NewShipmentInput {
            supplier: "Second Boat".to_string(),
            items: vec![item("Mathi", "10", "1200")],
            finalize: true,
            ..NewShipmentInput::default()
        })
        .unwrap();

    let result = ledger
        .shipments()
        .add_item(shipment.id, item("Ayila", "5", "1100"));
    assert!(matches!(result, Err(AppError::Validation { .. })));
}

#[test]
fn item_costs_share_one_expense_rate() {
    let ledger = Ledger::new(EngineConfig::default());
    let shipment = ledger
        .shipments()
        .create_shipment(NewShipmentInput {
            supplier: "Harbour Fresh Catch".to_string(),
            items: vec![item("Mathi", "100", "12000"), item("Ayila", "50", "11000")],
            expenses: vec![expense("Driver/Tempo", "2500"), expense("Ice & Box", "500")],
            finalize: true,
            ..NewShipmentInput::default()
        })
        .unwrap();

    let costs = ledger.shipments().item_costs(shipment.id).unwrap();
    let shared_rate = dec("3000") / dec("150");
    // Empty store: no staff, so the overhead rate comes from rent alone
    let overhead = ledger.settings().overhead_per_kg();

    assert_eq!(costs.len(), 2);
    for cost in &costs {
        assert_eq!(cost.shared_expense_per_kg, shared_rate);
        assert_eq!(
            cost.effective_cost_per_kg,
            cost.raw_cost_per_kg + shared_rate + overhead
        );
    }
    assert_eq!(costs[0].raw_cost_per_kg, dec("120"));
    assert_eq!(costs[1].raw_cost_per_kg, dec("220"));
}

#[test]
fn deleting_a_shipment_removes_its_stock() {
    let ledger = ledger();
    let sample_id = ledger.shipments().list()[0].id;

    ledger.shipments().delete_shipment(sample_id).unwrap();
    assert!(ledger.inventory().snapshot().is_empty());

    let again = ledger.shipments().delete_shipment(sample_id);
    assert!(matches!(again, Err(AppError::NotFound(_))));
}

#[test]
fn unknown_shipment_queries_are_not_found() {
    let ledger = ledger();
    assert!(matches!(
        ledger.shipments().item_costs(Uuid::new_v4()),
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        ledger.shipments().get(Uuid::new_v4()),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn fish_type_catalog_rejects_duplicates() {
    let ledger = ledger();
    ledger.shipments().add_fish_type("Choora").unwrap();
    let result = ledger.shipments().add_fish_type("Choora");
    assert!(matches!(result, Err(AppError::DuplicateEntry(_))));
}
