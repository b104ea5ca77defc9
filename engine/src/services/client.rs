//! Client master data and selling-price management

use rust_decimal::Decimal;
use uuid::Uuid;

use shared::{detect_customer_type, Client, CustomerType, SellingPrice};

use crate::error::{AppError, AppResult};
use crate::store::SharedStore;

/// Client service: the client list and per-item selling prices
#[derive(Clone)]
pub struct ClientService {
    store: SharedStore,
}

impl ClientService {
    /// Create a new ClientService instance
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Add a client; when no category is given the classifier suggests one
    /// from the name. The category is fixed at creation; renaming a client
    /// later never reclassifies it.
    pub fn add_client(&self, name: &str, category: Option<CustomerType>) -> AppResult<Client> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation {
                field: "name".to_string(),
                message: "Client name is required".to_string(),
            });
        }

        let mut store = self.store.borrow_mut();
        if store.clients.iter().any(|c| c.name == name) {
            return Err(AppError::DuplicateEntry("client name".to_string()));
        }

        let client = Client {
            id: Uuid::new_v4(),
            name: name.to_string(),
            category: category.unwrap_or_else(|| detect_customer_type(name)),
        };
        tracing::info!(client = %client.id, name = %client.name, "client added");
        store.clients.push(client.clone());
        Ok(client)
    }

    /// List all clients
    pub fn list_clients(&self) -> Vec<Client> {
        self.store.borrow().clients.clone()
    }

    /// Look a client up by exact name
    pub fn find_by_name(&self, name: &str) -> Option<Client> {
        self.store
            .borrow()
            .clients
            .iter()
            .find(|c| c.name == name)
            .cloned()
    }

    /// Set the selling price for a fish type, flat or per category
    pub fn set_selling_price(&self, item_name: &str, price: SellingPrice) -> AppResult<()> {
        let mut store = self.store.borrow_mut();
        if !store.fish_types.iter().any(|t| t == item_name) {
            return Err(AppError::NotFound("Fish type".to_string()));
        }
        store.selling_prices.insert(item_name.to_string(), price);
        Ok(())
    }

    /// Resolve the selling price for a fish type and customer category:
    /// the category price if set, else the default-category price, else none
    pub fn resolve_selling_price(
        &self,
        item_name: &str,
        category: CustomerType,
    ) -> Option<Decimal> {
        self.store
            .borrow()
            .selling_prices
            .get(item_name)
            .and_then(|price| price.resolve(category))
    }
}
