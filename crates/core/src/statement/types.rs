//! Statement data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Root aggregate for one rendering request.
///
/// The totals are derived once at parse time and equal the sum of the
/// corresponding per-account balances. The model is immutable once parsing
/// completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementModel {
    /// First calendar day of the statement period (informational).
    pub start_date: NaiveDate,
    /// Last calendar day of the statement period (informational).
    pub end_date: NaiveDate,
    /// Accounts in input order. Order matters only for total accumulation.
    pub accounts: Vec<Account>,
    /// Sum of all account opening balances, derived at parse time.
    #[serde(default)]
    pub total_opening_balance: Decimal,
    /// Sum of all account closing balances, derived at parse time.
    #[serde(default)]
    pub total_closing_balance: Decimal,
}

/// One financial account and its transaction history within a statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Display name of the account. Opaque to the pipeline.
    #[serde(default)]
    pub account_name: String,
    /// Transit number. Opaque to the pipeline.
    #[serde(default)]
    pub transit_number: String,
    /// Account number. Opaque to the pipeline.
    #[serde(default)]
    pub account_number: String,
    /// Account type label. Opaque to the pipeline.
    #[serde(default)]
    pub account_type: String,
    /// Derived balance before the first chronological transaction.
    /// Any caller-supplied value is overwritten during parse.
    #[serde(default)]
    pub opening_balance: Decimal,
    /// Derived balance after the last chronological transaction.
    /// Any caller-supplied value is overwritten during parse.
    #[serde(default)]
    pub closing_balance: Decimal,
    /// Transactions, re-sorted during parse ascending by
    /// `(action_date, value_date)`.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

/// One dated financial movement with a post-transaction running balance.
///
/// All fields are supplied by the caller; this entity carries no derived
/// fields and is read-only once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Date the transaction was actioned (`yyyy-MM-dd` on the wire).
    pub action_date: NaiveDate,
    /// Value date (`yyyy-MM-dd` on the wire). Tie-breaker in ordering.
    pub value_date: NaiveDate,
    /// Transaction type label. Opaque to the pipeline.
    #[serde(default)]
    pub transaction_type: String,
    /// Free-text description. Opaque to the pipeline.
    #[serde(default)]
    pub description: String,
    /// Credit amount. At most one of credit/debit is populated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_amount: Option<Decimal>,
    /// Debit amount. At most one of credit/debit is populated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debit_amount: Option<Decimal>,
    /// Running balance of the account immediately *after* this transaction
    /// is applied. Required input, never derived.
    pub balance: Decimal,
}

impl Transaction {
    /// Signed amount of this transaction: `+credit`, `-debit`, or zero when
    /// neither side is populated (a zero-amount entry is legal).
    #[must_use]
    pub fn signed_amount(&self) -> Decimal {
        if let Some(credit) = self.credit_amount {
            credit
        } else if let Some(debit) = self.debit_amount {
            -debit
        } else {
            Decimal::ZERO
        }
    }

    /// Chronological sort key: action date first, value date breaks ties.
    #[must_use]
    pub fn sort_key(&self) -> (NaiveDate, NaiveDate) {
        (self.action_date, self.value_date)
    }
}
