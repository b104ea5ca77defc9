//! In-memory application state for the ledger
//!
//! The store owns every collection the calculations read from and lives for
//! the lifetime of the hosting process (a browser tab). It is the single
//! serialization point of the system: one logical writer, no suspension
//! points, so a shared `Rc<RefCell<_>>` handle is all the coordination the
//! services need. Derived figures (wages, overhead, inventory) are fully
//! recomputed from the collections on every read; no incremental deltas are
//! maintained anywhere.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use shared::{
    compute_inventory, compute_store_overhead_per_kg, compute_total_monthly_wages,
    detect_customer_type, Client, InventoryEntry, Payment, Sale, SellingPrice, Shipment,
    ShipmentExpense, ShipmentItem, StaffMember, StaffTransaction, StaffTransactionKind,
    StoreSettings,
};

/// Shared handle to the ledger store; cloned into every service
pub type SharedStore = Rc<RefCell<LedgerStore>>;

/// Single-tenant ledger state: master data, shipments, sales and the payment
/// log. Mutations go through the services; reads are free.
#[derive(Debug, Default)]
pub struct LedgerStore {
    pub(crate) settings: StoreSettings,
    pub(crate) fish_types: Vec<String>,
    pub(crate) clients: Vec<Client>,
    pub(crate) staff: Vec<StaffMember>,
    pub(crate) staff_transactions: Vec<StaffTransaction>,
    pub(crate) shipments: Vec<Shipment>,
    pub(crate) sales: Vec<Sale>,
    pub(crate) payments: Vec<Payment>,
    pub(crate) selling_prices: HashMap<String, SellingPrice>,
    /// Quick entry for extra cash added today
    pub(crate) petty_cash: Decimal,
    /// Non-shipment daily expenses
    pub(crate) daily_expenses: Decimal,
}

impl LedgerStore {
    /// Empty store with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the sample master data and one delivered shipment
    pub fn with_sample_data() -> Self {
        let ramesh = Uuid::new_v4();
        let suresh = Uuid::new_v4();

        let staff = vec![
            sample_staff(ramesh, "Ramesh", "Helper", 12000, "9876543210"),
            sample_staff(suresh, "Suresh", "Cleaner", 8000, "9876543211"),
            sample_staff(Uuid::new_v4(), "Manager", "Admin", 15000, "9876543212"),
        ];

        let staff_transactions = vec![
            StaffTransaction {
                id: Uuid::new_v4(),
                staff_id: ramesh,
                date: NaiveDate::from_ymd_opt(2023, 10, 1).expect("valid date"),
                kind: StaffTransactionKind::Salary,
                amount: Decimal::from(12000),
                note: Some("October Salary".to_string()),
            },
            StaffTransaction {
                id: Uuid::new_v4(),
                staff_id: suresh,
                date: NaiveDate::from_ymd_opt(2023, 10, 15).expect("valid date"),
                kind: StaffTransactionKind::Advance,
                amount: Decimal::from(2000),
                note: Some("Festival Advance".to_string()),
            },
        ];

        let clients = ["Local Market Hotel", "Catering Service A", "Walk-in Customer"]
            .into_iter()
            .map(|name| Client {
                id: Uuid::new_v4(),
                name: name.to_string(),
                category: detect_customer_type(name),
            })
            .collect();

        let shipment = Shipment {
            id: Uuid::new_v4(),
            supplier: "Harbour Fresh Catch".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 10, 24).expect("valid date"),
            items: vec![
                sample_item("Mathi", 100, 12000),
                sample_item("Ayila", 50, 11000),
                sample_item("Chembali", 30, 10500),
                sample_item("Ayikora", 20, 14000),
            ],
            expenses: vec![
                sample_expense("Driver/Tempo", 2500),
                sample_expense("Ice & Box", 1000),
                sample_expense("Unloading Wages", 500),
            ],
            is_finalized: true,
        };

        Self {
            settings: StoreSettings::default(),
            fish_types: ["Mathi", "Ayila", "Chembali", "Ayikora"]
                .into_iter()
                .map(String::from)
                .collect(),
            clients,
            staff,
            staff_transactions,
            shipments: vec![shipment],
            ..Self::default()
        }
    }

    /// Wrap the store in the shared single-writer handle
    pub fn into_shared(self) -> SharedStore {
        Rc::new(RefCell::new(self))
    }

    pub fn settings(&self) -> &StoreSettings {
        &self.settings
    }

    pub fn fish_types(&self) -> &[String] {
        &self.fish_types
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    pub fn staff(&self) -> &[StaffMember] {
        &self.staff
    }

    pub fn staff_transactions(&self) -> &[StaffTransaction] {
        &self.staff_transactions
    }

    pub fn shipments(&self) -> &[Shipment] {
        &self.shipments
    }

    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }

    pub fn selling_prices(&self) -> &HashMap<String, SellingPrice> {
        &self.selling_prices
    }

    pub fn petty_cash(&self) -> Decimal {
        self.petty_cash
    }

    pub fn daily_expenses(&self) -> Decimal {
        self.daily_expenses
    }

    /// Total monthly wages across the staff list
    pub fn total_monthly_wages(&self) -> Decimal {
        compute_total_monthly_wages(&self.staff)
    }

    /// Store overhead per kg at the current settings and payroll
    pub fn overhead_per_kg(&self) -> Decimal {
        compute_store_overhead_per_kg(&self.settings, self.total_monthly_wages())
    }

    /// Inventory snapshot, recomputed from shipments, sales and payments
    pub fn inventory(&self) -> BTreeMap<String, InventoryEntry> {
        compute_inventory(
            &self.shipments,
            &self.sales,
            &self.payments,
            self.overhead_per_kg(),
        )
    }
}

fn sample_staff(id: Uuid, name: &str, role: &str, salary: i64, phone: &str) -> StaffMember {
    StaffMember {
        id,
        name: name.to_string(),
        role: role.to_string(),
        salary: Some(Decimal::from(salary)),
        phone: Some(phone.to_string()),
    }
}

fn sample_item(name: &str, weight: i64, cost: i64) -> ShipmentItem {
    ShipmentItem {
        id: Uuid::new_v4(),
        name: name.to_string(),
        weight: Decimal::from(weight),
        cost: Decimal::from(cost),
    }
}

fn sample_expense(kind: &str, amount: i64) -> ShipmentExpense {
    ShipmentExpense {
        id: Uuid::new_v4(),
        kind: kind.to_string(),
        amount: Decimal::from(amount),
    }
}
