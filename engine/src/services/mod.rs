//! Business logic services for the Fish Ledger

pub mod client;
pub mod inventory;
pub mod payment;
pub mod reporting;
pub mod sales;
pub mod settings;
pub mod shipment;
pub mod staff;

pub use client::ClientService;
pub use inventory::InventoryService;
pub use payment::PaymentService;
pub use reporting::ReportingService;
pub use sales::SalesService;
pub use settings::SettingsService;
pub use shipment::ShipmentService;
pub use staff::StaffService;
