//! Statement parsing and balance derivation.

use rust_decimal::Decimal;
use tracing::debug;

use crate::report::ReportError;

use super::types::{Account, StatementModel};

/// Parses raw statement JSON into a [`StatementModel`] and derives all
/// computed balances.
///
/// Per account: transactions are stable-sorted ascending by
/// `(action_date, value_date)`; the opening balance is the first
/// transaction's stated balance minus its signed amount (the stated running
/// balance already reflects that transaction's effect); the closing balance
/// is the last transaction's stated balance. Accounts without transactions
/// get exactly zero for both. Statement totals are the exact decimal sums of
/// the per-account balances, in account order.
///
/// # Errors
///
/// Returns [`ReportError::MalformedInput`] if the byte stream is not
/// well-formed JSON matching the statement schema.
pub fn parse_statement(input: &[u8]) -> Result<StatementModel, ReportError> {
    let mut statement: StatementModel = serde_json::from_slice(input)
        .map_err(|e| ReportError::MalformedInput(e.to_string()))?;

    for account in &mut statement.accounts {
        derive_account_balances(account);
    }

    statement.total_opening_balance = statement
        .accounts
        .iter()
        .map(|a| a.opening_balance)
        .sum::<Decimal>();
    statement.total_closing_balance = statement
        .accounts
        .iter()
        .map(|a| a.closing_balance)
        .sum::<Decimal>();

    debug!(
        accounts = statement.accounts.len(),
        "statement parsed successfully"
    );
    Ok(statement)
}

/// Sorts an account's transactions chronologically and derives its opening
/// and closing balances.
fn derive_account_balances(account: &mut Account) {
    if account.transactions.is_empty() {
        account.opening_balance = Decimal::ZERO;
        account.closing_balance = Decimal::ZERO;
        return;
    }

    // Stable sort: equal (action_date, value_date) pairs keep input order.
    account.transactions.sort_by_key(super::Transaction::sort_key);

    let first = &account.transactions[0];
    account.opening_balance = first.balance - first.signed_amount();

    // Sorted and non-empty, so last() always exists.
    if let Some(last) = account.transactions.last() {
        account.closing_balance = last.balance;
    }

    debug!(
        account = %account.account_number,
        opening = %account.opening_balance,
        closing = %account.closing_balance,
        "derived account balances"
    );
}
