//! Staff management service: payroll master data and payouts

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use shared::{StaffMember, StaffTransaction, StaffTransactionKind};

use crate::error::{AppError, AppResult};
use crate::store::SharedStore;

/// Staff service managing the payroll list and payout transactions
#[derive(Clone)]
pub struct StaffService {
    store: SharedStore,
}

/// Input for adding a staff member
#[derive(Debug, Clone, Deserialize)]
pub struct NewStaffInput {
    pub name: String,
    pub role: String,
    pub salary: Option<Decimal>,
    pub phone: Option<String>,
}

/// Input for recording a payout to a staff member
#[derive(Debug, Clone, Deserialize)]
pub struct RecordStaffTransactionInput {
    pub staff_id: Uuid,
    pub kind: StaffTransactionKind,
    pub amount: Decimal,
    pub note: Option<String>,
}

impl StaffService {
    /// Create a new StaffService instance
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    /// Add a staff member to the payroll
    pub fn add_staff(&self, input: NewStaffInput) -> AppResult<StaffMember> {
        if input.name.trim().is_empty() {
            return Err(AppError::Validation {
                field: "name".to_string(),
                message: "Staff name is required".to_string(),
            });
        }
        if let Some(salary) = input.salary {
            if salary < Decimal::ZERO {
                return Err(AppError::Validation {
                    field: "salary".to_string(),
                    message: "Salary cannot be negative".to_string(),
                });
            }
        }

        let member = StaffMember {
            id: Uuid::new_v4(),
            name: input.name,
            role: input.role,
            salary: input.salary,
            phone: input.phone,
        };
        tracing::info!(staff = %member.id, name = %member.name, "staff member added");
        self.store.borrow_mut().staff.push(member.clone());
        Ok(member)
    }

    /// Remove a staff member; recorded payouts stay in the history
    pub fn remove_staff(&self, staff_id: Uuid) -> AppResult<()> {
        let mut store = self.store.borrow_mut();
        let before = store.staff.len();
        store.staff.retain(|s| s.id != staff_id);
        if store.staff.len() == before {
            return Err(AppError::NotFound("Staff member".to_string()));
        }
        tracing::info!(staff = %staff_id, "staff member removed");
        Ok(())
    }

    /// List the payroll
    pub fn list_staff(&self) -> Vec<StaffMember> {
        self.store.borrow().staff.clone()
    }

    /// Record a salary, advance or bonus payout
    pub fn record_transaction(
        &self,
        input: RecordStaffTransactionInput,
    ) -> AppResult<StaffTransaction> {
        if input.amount <= Decimal::ZERO {
            return Err(AppError::Validation {
                field: "amount".to_string(),
                message: "Amount must be positive".to_string(),
            });
        }

        let mut store = self.store.borrow_mut();
        if !store.staff.iter().any(|s| s.id == input.staff_id) {
            return Err(AppError::NotFound("Staff member".to_string()));
        }

        let transaction = StaffTransaction {
            id: Uuid::new_v4(),
            staff_id: input.staff_id,
            date: Utc::now().date_naive(),
            kind: input.kind,
            amount: input.amount,
            note: input.note,
        };
        store.staff_transactions.push(transaction.clone());
        tracing::info!(
            staff = %transaction.staff_id,
            kind = ?transaction.kind,
            amount = %transaction.amount,
            "staff payout recorded"
        );
        Ok(transaction)
    }

    /// Payout history, newest last
    pub fn transactions(&self) -> Vec<StaffTransaction> {
        self.store.borrow().staff_transactions.clone()
    }

    /// Total monthly wages across the payroll
    pub fn total_monthly_wages(&self) -> Decimal {
        self.store.borrow().total_monthly_wages()
    }

    /// Total paid out for one kind of transaction
    pub fn total_paid(&self, kind: StaffTransactionKind) -> Decimal {
        self.store
            .borrow()
            .staff_transactions
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.amount)
            .sum()
    }
}
