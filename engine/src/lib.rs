//! Fish Ledger engine
//!
//! The stateful half of the ledger: an in-memory store with controlled
//! mutation services for a single-counter fish retail operation. Shipments
//! with shared expenses build a weighted-average-cost inventory, sales draw
//! it down, and an append-only payment log drives receivables. Everything is
//! single-threaded and synchronous: state lives for the lifetime of the
//! hosting process and every operation completes before its caller returns.

pub mod config;
pub mod error;
pub mod services;
pub mod store;

use std::rc::Rc;

pub use config::EngineConfig;
pub use error::{AppError, AppResult};
pub use store::{LedgerStore, SharedStore};

use services::{
    ClientService, InventoryService, PaymentService, ReportingService, SalesService,
    SettingsService, ShipmentService, StaffService,
};

/// Application state bundling the shared store and engine configuration.
///
/// Hands out services over the same underlying store; constructing a service
/// is as cheap as cloning the store handle.
#[derive(Clone)]
pub struct Ledger {
    store: SharedStore,
    config: Rc<EngineConfig>,
}

impl Ledger {
    /// Ledger over an empty store with default settings
    pub fn new(config: EngineConfig) -> Self {
        Self::with_store(LedgerStore::new(), config)
    }

    /// Ledger seeded with the sample master data
    pub fn with_sample_data(config: EngineConfig) -> Self {
        Self::with_store(LedgerStore::with_sample_data(), config)
    }

    /// Ledger over an explicit store
    pub fn with_store(store: LedgerStore, config: EngineConfig) -> Self {
        Self {
            store: store.into_shared(),
            config: Rc::new(config),
        }
    }

    /// The shared store handle
    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub fn shipments(&self) -> ShipmentService {
        ShipmentService::new(self.store.clone())
    }

    pub fn sales(&self) -> SalesService {
        SalesService::new(self.store.clone())
    }

    pub fn payments(&self) -> PaymentService {
        PaymentService::new(self.store.clone())
    }

    pub fn staff(&self) -> StaffService {
        StaffService::new(self.store.clone())
    }

    pub fn clients(&self) -> ClientService {
        ClientService::new(self.store.clone())
    }

    pub fn settings(&self) -> SettingsService {
        SettingsService::new(self.store.clone())
    }

    pub fn inventory(&self) -> InventoryService {
        InventoryService::new(self.store.clone(), self.config.clone())
    }

    pub fn reporting(&self) -> ReportingService {
        ReportingService::new(self.store.clone(), self.config.clone())
    }
}
