//! Shipment entry service: drafts, finalization and landed costs

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use shared::{validate_shipment_item, ItemCost, Shipment, ShipmentExpense, ShipmentItem};

use crate::error::{AppError, AppResult};
use crate::store::SharedStore;

/// Shipment service managing the fish type catalog, shipment drafts,
/// finalization and landed-cost queries
#[derive(Clone)]
pub struct ShipmentService {
    store: SharedStore,
}

/// Input for one shipment item
#[derive(Debug, Clone, Deserialize)]
pub struct NewItemInput {
    pub name: String,
    pub weight: Decimal,
    pub cost: Decimal,
}

/// Input for one shared expense
#[derive(Debug, Clone, Deserialize)]
pub struct NewExpenseInput {
    pub kind: String,
    pub amount: Decimal,
}

/// Input for recording a shipment
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewShipmentInput {
    /// Blank supplier names get a date-based auto name
    pub supplier: String,
    pub date: Option<NaiveDate>,
    pub items: Vec<NewItemInput>,
    pub expenses: Vec<NewExpenseInput>,
    /// Commit to inventory immediately instead of keeping a draft
    pub finalize: bool,
}

impl ShipmentService {
    /// Create a new ShipmentService instance
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Record a shipment; only finalized shipments affect inventory
    pub fn create_shipment(&self, input: NewShipmentInput) -> AppResult<Shipment> {
        self.validate_shipment_input(&input)?;

        let supplier = if input.supplier.trim().is_empty() {
            auto_shipment_name(Utc::now().date_naive())
        } else {
            input.supplier.clone()
        };

        let shipment = Shipment {
            id: Uuid::new_v4(),
            supplier,
            date: input.date.unwrap_or_else(|| Utc::now().date_naive()),
            items: input.items.into_iter().map(new_item).collect(),
            expenses: input.expenses.into_iter().map(new_expense).collect(),
            is_finalized: input.finalize,
        };

        tracing::info!(
            shipment = %shipment.id,
            supplier = %shipment.supplier,
            finalized = shipment.is_finalized,
            "shipment recorded"
        );
        self.store.borrow_mut().shipments.push(shipment.clone());
        Ok(shipment)
    }

    /// Append an item to a draft shipment
    pub fn add_item(&self, shipment_id: Uuid, input: NewItemInput) -> AppResult<ShipmentItem> {
        validate_shipment_item(input.weight, input.cost).map_err(|message| {
            AppError::Validation {
                field: "items".to_string(),
                message: message.to_string(),
            }
        })?;

        let mut store = self.store.borrow_mut();
        let shipment = find_draft(&mut store.shipments, shipment_id)?;
        let item = new_item(input);
        shipment.items.push(item.clone());
        Ok(item)
    }

    /// Append a shared expense to a draft shipment
    pub fn add_expense(
        &self,
        shipment_id: Uuid,
        input: NewExpenseInput,
    ) -> AppResult<ShipmentExpense> {
        if input.amount < Decimal::ZERO {
            return Err(AppError::Validation {
                field: "expenses".to_string(),
                message: "Expense amount cannot be negative".to_string(),
            });
        }

        let mut store = self.store.borrow_mut();
        let shipment = find_draft(&mut store.shipments, shipment_id)?;
        let expense = new_expense(input);
        shipment.expenses.push(expense.clone());
        Ok(expense)
    }

    /// Commit a draft shipment to inventory
    pub fn finalize_shipment(&self, shipment_id: Uuid) -> AppResult<Shipment> {
        let mut store = self.store.borrow_mut();
        let shipment = store
            .shipments
            .iter_mut()
            .find(|s| s.id == shipment_id)
            .ok_or_else(|| AppError::NotFound("Shipment".to_string()))?;

        if shipment.items.is_empty() {
            return Err(AppError::Validation {
                field: "items".to_string(),
                message: "Cannot finalize a shipment without items".to_string(),
            });
        }

        shipment.is_finalized = true;
        tracing::info!(shipment = %shipment.id, "shipment finalized");
        Ok(shipment.clone())
    }

    /// Replace a shipment record wholesale
    pub fn update_shipment(&self, shipment_id: Uuid, input: NewShipmentInput) -> AppResult<Shipment> {
        self.validate_shipment_input(&input)?;

        let mut store = self.store.borrow_mut();
        let shipment = store
            .shipments
            .iter_mut()
            .find(|s| s.id == shipment_id)
            .ok_or_else(|| AppError::NotFound("Shipment".to_string()))?;

        if !input.supplier.trim().is_empty() {
            shipment.supplier = input.supplier.clone();
        }
        if let Some(date) = input.date {
            shipment.date = date;
        }
        shipment.items = input.items.into_iter().map(new_item).collect();
        shipment.expenses = input.expenses.into_iter().map(new_expense).collect();
        shipment.is_finalized = input.finalize;

        tracing::info!(shipment = %shipment.id, "shipment replaced");
        Ok(shipment.clone())
    }

    /// Delete a shipment; inventory reflects the removal on the next read
    pub fn delete_shipment(&self, shipment_id: Uuid) -> AppResult<()> {
        let mut store = self.store.borrow_mut();
        let before = store.shipments.len();
        store.shipments.retain(|s| s.id != shipment_id);
        if store.shipments.len() == before {
            return Err(AppError::NotFound("Shipment".to_string()));
        }
        tracing::info!(shipment = %shipment_id, "shipment deleted");
        Ok(())
    }

    /// Get a shipment by id
    pub fn get(&self, shipment_id: Uuid) -> AppResult<Shipment> {
        self.store
            .borrow()
            .shipments
            .iter()
            .find(|s| s.id == shipment_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Shipment".to_string()))
    }

    /// List all shipments
    pub fn list(&self) -> Vec<Shipment> {
        self.store.borrow().shipments.clone()
    }

    /// Landed-cost breakdown of a shipment at the current overhead rate
    pub fn item_costs(&self, shipment_id: Uuid) -> AppResult<Vec<ItemCost>> {
        let store = self.store.borrow();
        let shipment = store
            .shipments
            .iter()
            .find(|s| s.id == shipment_id)
            .ok_or_else(|| AppError::NotFound("Shipment".to_string()))?;
        Ok(shipment.item_costs(store.overhead_per_kg()))
    }

    /// Register a new fish type in the catalog
    pub fn add_fish_type(&self, name: &str) -> AppResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation {
                field: "name".to_string(),
                message: "Fish type name is required".to_string(),
            });
        }

        let mut store = self.store.borrow_mut();
        if store.fish_types.iter().any(|t| t == name) {
            return Err(AppError::DuplicateEntry("fish type".to_string()));
        }
        store.fish_types.push(name.to_string());
        Ok(name.to_string())
    }

    /// Known fish types
    pub fn fish_types(&self) -> Vec<String> {
        self.store.borrow().fish_types.clone()
    }

    /// Validate shipment input fields
    fn validate_shipment_input(&self, input: &NewShipmentInput) -> AppResult<()> {
        for item in &input.items {
            validate_shipment_item(item.weight, item.cost).map_err(|message| {
                AppError::Validation {
                    field: "items".to_string(),
                    message: message.to_string(),
                }
            })?;
        }

        for expense in &input.expenses {
            if expense.amount < Decimal::ZERO {
                return Err(AppError::Validation {
                    field: "expenses".to_string(),
                    message: "Expense amount cannot be negative".to_string(),
                });
            }
        }

        if input.finalize && input.items.is_empty() {
            return Err(AppError::Validation {
                field: "items".to_string(),
                message: "Cannot finalize a shipment without items".to_string(),
            });
        }

        Ok(())
    }
}

/// Date-based auto name for unnamed shipments, e.g. "24-October-23"
fn auto_shipment_name(date: NaiveDate) -> String {
    date.format("%d-%B-%y").to_string()
}

fn find_draft(shipments: &mut [Shipment], shipment_id: Uuid) -> AppResult<&mut Shipment> {
    let shipment = shipments
        .iter_mut()
        .find(|s| s.id == shipment_id)
        .ok_or_else(|| AppError::NotFound("Shipment".to_string()))?;
    if shipment.is_finalized {
        return Err(AppError::Validation {
            field: "shipment_id".to_string(),
            message: "Shipment is already finalized".to_string(),
        });
    }
    Ok(shipment)
}

fn new_item(input: NewItemInput) -> ShipmentItem {
    ShipmentItem {
        id: Uuid::new_v4(),
        name: input.name,
        weight: input.weight,
        cost: input.cost,
    }
}

fn new_expense(input: NewExpenseInput) -> ShipmentExpense {
    ShipmentExpense {
        id: Uuid::new_v4(),
        kind: input.kind,
        amount: input.amount,
    }
}
