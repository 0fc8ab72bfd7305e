//! Tests for statement parsing and balance derivation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::json;

use crate::report::ReportError;

use super::parse::parse_statement;
use super::types::{StatementModel, Transaction};

fn transaction(
    action_date: &str,
    value_date: &str,
    credit: Option<&str>,
    debit: Option<&str>,
    balance: &str,
    description: &str,
) -> serde_json::Value {
    let mut txn = json!({
        "actionDate": action_date,
        "valueDate": value_date,
        "transactionType": "MISC",
        "description": description,
        "balance": balance
    });
    if let Some(amount) = credit {
        txn["creditAmount"] = json!(amount);
    }
    if let Some(amount) = debit {
        txn["debitAmount"] = json!(amount);
    }
    txn
}

fn statement_with(transactions: Vec<serde_json::Value>) -> Vec<u8> {
    json!({
        "startDate": "2024-01-01",
        "endDate": "2024-01-31",
        "accounts": [{
            "accountName": "Chequing",
            "transitNumber": "00123",
            "accountNumber": "1234567",
            "accountType": "chequing",
            "transactions": transactions
        }]
    })
    .to_string()
    .into_bytes()
}

#[test]
fn test_derives_balances_for_credit_then_debit() {
    let input = statement_with(vec![
        transaction("2024-01-02", "2024-01-02", Some("100"), None, "100", "deposit"),
        transaction("2024-01-05", "2024-01-05", None, Some("30"), "70", "withdrawal"),
    ]);

    let model = parse_statement(&input).unwrap();
    let account = &model.accounts[0];

    assert_eq!(account.opening_balance, dec!(0));
    assert_eq!(account.closing_balance, dec!(70));
    assert_eq!(model.total_opening_balance, dec!(0));
    assert_eq!(model.total_closing_balance, dec!(70));
}

#[test]
fn test_nonzero_opening_balance_is_reconstructed() {
    // 250 before the first transaction: 250 + 50 = 300.
    let input = statement_with(vec![transaction(
        "2024-01-10",
        "2024-01-10",
        Some("50"),
        None,
        "300",
        "deposit",
    )]);

    let model = parse_statement(&input).unwrap();
    assert_eq!(model.accounts[0].opening_balance, dec!(250));
    assert_eq!(model.accounts[0].closing_balance, dec!(300));
}

#[test]
fn test_account_without_transactions_has_zero_balances() {
    let input = statement_with(vec![]);
    let model = parse_statement(&input).unwrap();

    assert_eq!(model.accounts[0].opening_balance, dec!(0));
    assert_eq!(model.accounts[0].closing_balance, dec!(0));
    assert_eq!(model.total_opening_balance, dec!(0));
    assert_eq!(model.total_closing_balance, dec!(0));
}

#[test]
fn test_first_transaction_without_amount_keeps_its_balance_as_opening() {
    let input = statement_with(vec![transaction(
        "2024-01-03",
        "2024-01-03",
        None,
        None,
        "500",
        "memo",
    )]);

    let model = parse_statement(&input).unwrap();
    assert_eq!(model.accounts[0].opening_balance, dec!(500));
    assert_eq!(model.accounts[0].closing_balance, dec!(500));
}

#[test]
fn test_transactions_are_ordered_by_action_then_value_date() {
    let input = statement_with(vec![
        transaction("2024-01-20", "2024-01-21", None, Some("10"), "90", "third"),
        transaction("2024-01-05", "2024-01-06", Some("100"), None, "100", "first"),
        transaction("2024-01-20", "2024-01-20", None, None, "100", "second"),
    ]);

    let model = parse_statement(&input).unwrap();
    let descriptions: Vec<_> = model.accounts[0]
        .transactions
        .iter()
        .map(|t| t.description.as_str())
        .collect();
    assert_eq!(descriptions, vec!["first", "second", "third"]);

    // Balances derive from the sorted order.
    assert_eq!(model.accounts[0].opening_balance, dec!(0));
    assert_eq!(model.accounts[0].closing_balance, dec!(90));
}

#[test]
fn test_equal_sort_keys_preserve_input_order() {
    let input = statement_with(vec![
        transaction("2024-01-10", "2024-01-10", Some("10"), None, "10", "a"),
        transaction("2024-01-10", "2024-01-10", Some("10"), None, "20", "b"),
        transaction("2024-01-10", "2024-01-10", Some("10"), None, "30", "c"),
    ]);

    let model = parse_statement(&input).unwrap();
    let descriptions: Vec<_> = model.accounts[0]
        .transactions
        .iter()
        .map(|t| t.description.as_str())
        .collect();
    assert_eq!(descriptions, vec!["a", "b", "c"]);
}

#[test]
fn test_totals_sum_across_accounts() {
    let input = json!({
        "startDate": "2024-01-01",
        "endDate": "2024-01-31",
        "accounts": [
            {
                "accountNumber": "1",
                "transactions": [
                    transaction("2024-01-02", "2024-01-02", Some("100"), None, "100", "x")
                ]
            },
            {
                "accountNumber": "2",
                "transactions": [
                    transaction("2024-01-03", "2024-01-03", None, Some("25"), "175", "y")
                ]
            }
        ]
    })
    .to_string()
    .into_bytes();

    let model = parse_statement(&input).unwrap();
    assert_eq!(model.total_opening_balance, dec!(0) + dec!(200));
    assert_eq!(model.total_closing_balance, dec!(100) + dec!(175));
}

#[test]
fn test_malformed_json_is_rejected() {
    let err = parse_statement(b"{not json").unwrap_err();
    assert!(matches!(err, ReportError::MalformedInput(_)));
}

#[test]
fn test_missing_required_date_is_rejected() {
    let err = parse_statement(br#"{"endDate": "2024-01-31", "accounts": []}"#).unwrap_err();
    assert!(matches!(err, ReportError::MalformedInput(_)));
}

#[test]
fn test_signed_amount_prefers_credit() {
    let txn: Transaction = serde_json::from_value(transaction(
        "2024-01-02",
        "2024-01-02",
        Some("40"),
        None,
        "40",
        "credit",
    ))
    .unwrap();
    assert_eq!(txn.signed_amount(), dec!(40));

    let txn: Transaction = serde_json::from_value(transaction(
        "2024-01-02",
        "2024-01-02",
        None,
        Some("15"),
        "25",
        "debit",
    ))
    .unwrap();
    assert_eq!(txn.signed_amount(), dec!(-15));
}

// ============================================================================
// Properties
// ============================================================================

/// Cent amounts keep arithmetic exact and readable in failures.
fn cents() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..1_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

fn arb_transactions() -> impl Strategy<Value = Vec<(u32, u32, Decimal, Decimal)>> {
    // (action day offset, value day offset, signed amount, running balance)
    prop::collection::vec((0u32..28, 0u32..28, cents(), cents()), 0..20)
}

fn statement_json(rows: &[(u32, u32, Decimal, Decimal)]) -> Vec<u8> {
    let transactions: Vec<_> = rows
        .iter()
        .map(|(action, value, amount, balance)| {
            let (credit, debit) = if amount.is_sign_negative() {
                (None, Some((-amount).to_string()))
            } else {
                (Some(amount.to_string()), None)
            };
            transaction(
                &format!("2024-01-{:02}", action + 1),
                &format!("2024-01-{:02}", value + 1),
                credit.as_deref(),
                debit.as_deref(),
                &balance.to_string(),
                "generated",
            )
        })
        .collect();
    statement_with(transactions)
}

proptest! {
    #[test]
    fn prop_closing_balance_is_last_sorted_balance(rows in arb_transactions()) {
        let model = parse_statement(&statement_json(&rows)).unwrap();
        let account = &model.accounts[0];

        match account.transactions.last() {
            Some(last) => prop_assert_eq!(account.closing_balance, last.balance),
            None => prop_assert_eq!(account.closing_balance, Decimal::ZERO),
        }
    }

    #[test]
    fn prop_opening_balance_backs_out_first_amount(rows in arb_transactions()) {
        let model = parse_statement(&statement_json(&rows)).unwrap();
        let account = &model.accounts[0];

        match account.transactions.first() {
            Some(first) => {
                prop_assert_eq!(account.opening_balance, first.balance - first.signed_amount());
            }
            None => prop_assert_eq!(account.opening_balance, Decimal::ZERO),
        }
    }

    #[test]
    fn prop_totals_equal_account_sums(rows in arb_transactions()) {
        let model = parse_statement(&statement_json(&rows)).unwrap();

        let opening: Decimal = model.accounts.iter().map(|a| a.opening_balance).sum();
        let closing: Decimal = model.accounts.iter().map(|a| a.closing_balance).sum();
        prop_assert_eq!(model.total_opening_balance, opening);
        prop_assert_eq!(model.total_closing_balance, closing);
    }

    #[test]
    fn prop_transactions_are_sorted(rows in arb_transactions()) {
        let model = parse_statement(&statement_json(&rows)).unwrap();
        let keys: Vec<_> = model.accounts[0]
            .transactions
            .iter()
            .map(Transaction::sort_key)
            .collect();
        prop_assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn prop_derivation_is_idempotent(rows in arb_transactions()) {
        let once = parse_statement(&statement_json(&rows)).unwrap();
        let again: StatementModel = serde_json::from_slice(
            &serde_json::to_vec(&once).unwrap()
        ).unwrap();
        let reparsed = parse_statement(&serde_json::to_vec(&again).unwrap()).unwrap();

        prop_assert_eq!(&once, &reparsed);
    }
}
