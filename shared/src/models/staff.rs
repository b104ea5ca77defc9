//! Staff records, wage transactions and wage aggregation

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A staff member on the monthly payroll
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: Uuid,
    pub name: String,
    pub role: String,
    /// Monthly salary; a missing salary counts as zero in wage totals
    pub salary: Option<Decimal>,
    pub phone: Option<String>,
}

/// Kinds of payouts recorded against staff
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StaffTransactionKind {
    Advance,
    Salary,
    Bonus,
}

/// A payout made to a staff member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffTransaction {
    pub id: Uuid,
    pub staff_id: Uuid,
    pub date: NaiveDate,
    pub kind: StaffTransactionKind,
    pub amount: Decimal,
    pub note: Option<String>,
}

/// Total monthly wages across the staff list
pub fn compute_total_monthly_wages(staff: &[StaffMember]) -> Decimal {
    staff
        .iter()
        .map(|member| member.salary.unwrap_or(Decimal::ZERO))
        .sum()
}
