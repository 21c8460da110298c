use chrono::NaiveDateTime;
use diesel::prelude::*;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{DEPOSIT_TYPE_PREFIXES, WITHDRAWAL_TYPE_PREFIXES};

/// A single cash ledger entry for an account. Append-only historical fact;
/// the engine only ever reads these.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashEntry {
    pub id: String,
    pub account_id: String,
    pub entry_date: NaiveDateTime,
    pub amount: Decimal,
    pub entry_type: String,
    pub reference: Option<String>,
}

/// How an entry type participates in the contribution buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CashEntryKind {
    DepositLike,
    WithdrawalLike,
    Other,
}

impl CashEntry {
    /// Classifies the entry by case-insensitive prefix match on its type.
    /// Unclassified types count toward neither contribution bucket but still
    /// contribute to the cash balance.
    pub fn kind(&self) -> CashEntryKind {
        let entry_type = self.entry_type.to_lowercase();
        if DEPOSIT_TYPE_PREFIXES.iter().any(|p| entry_type.starts_with(p)) {
            CashEntryKind::DepositLike
        } else if WITHDRAWAL_TYPE_PREFIXES.iter().any(|p| entry_type.starts_with(p)) {
            CashEntryKind::WithdrawalLike
        } else {
            CashEntryKind::Other
        }
    }
}

/// Aggregated cash position over a set of entries.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashSummary {
    pub cash_balance: Decimal,
    pub deposits: Decimal,
    pub withdrawals: Decimal,
}

impl CashSummary {
    pub fn from_entries(entries: &[CashEntry]) -> Self {
        let mut summary = CashSummary::default();
        for entry in entries {
            summary.cash_balance += entry.amount;
            match entry.kind() {
                CashEntryKind::DepositLike => summary.deposits += entry.amount,
                CashEntryKind::WithdrawalLike => summary.withdrawals += entry.amount,
                CashEntryKind::Other => {}
            }
        }
        summary
    }

    pub fn net_contribution(&self) -> Decimal {
        self.deposits - self.withdrawals
    }
}

/// Database model for cash ledger rows
#[derive(Queryable, Identifiable, Insertable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::cash_entries)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CashEntryDB {
    pub id: String,
    pub account_id: String,
    pub entry_date: NaiveDateTime,
    pub amount: f64,
    pub entry_type: String,
    pub reference: Option<String>,
}

impl From<CashEntryDB> for CashEntry {
    fn from(db: CashEntryDB) -> Self {
        Self {
            id: db.id,
            account_id: db.account_id,
            entry_date: db.entry_date,
            amount: Decimal::from_f64_retain(db.amount).unwrap_or_default(),
            entry_type: db.entry_type,
            reference: db.reference,
        }
    }
}

impl From<&CashEntry> for CashEntryDB {
    fn from(entry: &CashEntry) -> Self {
        Self {
            id: entry.id.clone(),
            account_id: entry.account_id.clone(),
            entry_date: entry.entry_date,
            amount: entry.amount.to_f64().unwrap_or_default(),
            entry_type: entry.entry_type.clone(),
            reference: entry.reference.clone(),
        }
    }
}
