// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketbook::models::{EntryKind, Transaction};
use pocketbook::stats;

fn tx(amount: i64, category: &str, kind: EntryKind, date: &str) -> Transaction {
    let occurred_at = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
    Transaction {
        id: 0,
        owner_key: "aaaaaaaa11111111".to_string(),
        amount,
        category: category.to_string(),
        kind,
        occurred_at,
        created_at: occurred_at.and_hms_opt(12, 0, 0).unwrap(),
    }
}

#[test]
fn balance_is_income_minus_expense() {
    let txs = vec![
        tx(3000, "salary", EntryKind::Income, "2026-02-01"),
        tx(1200, "food", EntryKind::Expense, "2026-02-08"),
        tx(300, "transit", EntryKind::Expense, "2026-02-10"),
    ];
    let s = stats::summarize(&txs);
    assert_eq!(s.income, 3000);
    assert_eq!(s.expense, 1500);
    assert_eq!(s.balance, 1500);
}

#[test]
fn income_only_set_has_zero_expense() {
    let txs = vec![
        tx(100, "salary", EntryKind::Income, "2026-02-01"),
        tx(250, "bonus", EntryKind::Income, "2026-02-02"),
    ];
    let s = stats::summarize(&txs);
    assert_eq!(s.expense, 0);
    assert_eq!(s.balance, s.income);
    assert_eq!(s.income, 350);
}

#[test]
fn empty_set_summarizes_to_zeros() {
    assert_eq!(stats::summarize(&[]), stats::MonthSummary::default());
}

#[test]
fn month_filter_matches_year_month_prefix() {
    let txs = vec![
        tx(1200, "food", EntryKind::Expense, "2026-02-08"),
        tx(500, "food", EntryKind::Expense, "2026-03-08"),
        tx(900, "food", EntryKind::Expense, "2025-02-08"),
    ];
    let feb = stats::for_month(&txs, "2026-02");
    assert_eq!(feb.len(), 1);
    let s = stats::summarize(&feb);
    assert_eq!((s.income, s.expense, s.balance), (0, 1200, -1200));
}

#[test]
fn goal_with_zero_target_never_progresses() {
    let g = stats::goal_progress(50_000, 0);
    assert_eq!(g.ratio, 0.0);
    assert_eq!(g.percent, 0);
    assert!(!g.achieved);
    assert_eq!(g.remaining, 0);
}

#[test]
fn goal_ratio_clamps_but_achievement_uses_raw_current() {
    let g = stats::goal_progress(150, 100);
    assert_eq!(g.ratio, 1.0);
    assert_eq!(g.percent, 100);
    assert!(g.achieved);
    assert_eq!(g.remaining, 0);
}

#[test]
fn goal_partial_progress() {
    let g = stats::goal_progress(30, 100);
    assert!((g.ratio - 0.3).abs() < 1e-12);
    assert_eq!(g.percent, 30);
    assert_eq!(g.remaining, 70);
    assert!(!g.achieved);
}

#[test]
fn goal_negative_current_clamps_to_zero() {
    let g = stats::goal_progress(-10, 100);
    assert_eq!(g.ratio, 0.0);
    assert_eq!(g.percent, 0);
    assert_eq!(g.remaining, 110);
    assert!(!g.achieved);
}

#[test]
fn repayment_scenario_tracks_remaining_debt() {
    let debt_total = 100_000;
    let mut txs = vec![
        tx(20_000, "loan repayment", EntryKind::Expense, "2026-01-10"),
        tx(10_000, "card repayment", EntryKind::Expense, "2026-02-10"),
        // income and unrelated expenses never count
        tx(50_000, "repayment refund", EntryKind::Income, "2026-02-11"),
        tx(5_000, "food", EntryKind::Expense, "2026-02-12"),
    ];
    let repaid = stats::repayment_total(&txs);
    assert_eq!(repaid, 30_000);
    assert_eq!(stats::remaining_debt(debt_total, repaid), 70_000);
    assert!(!stats::goal_progress(repaid, debt_total).achieved);

    txs.push(tx(70_000, "final repayment", EntryKind::Expense, "2026-03-01"));
    let repaid = stats::repayment_total(&txs);
    assert_eq!(stats::remaining_debt(debt_total, repaid), 0);
    assert!(stats::goal_progress(repaid, debt_total).achieved);
}

#[test]
fn repayment_overshoot_floors_at_zero() {
    assert_eq!(stats::remaining_debt(100, 250), 0);
}

#[test]
fn pie_groups_preserve_first_seen_order() {
    let txs = vec![
        tx(100, "food", EntryKind::Expense, "2026-02-01"),
        tx(50, "transit", EntryKind::Expense, "2026-02-02"),
        tx(25, "food", EntryKind::Expense, "2026-02-03"),
        tx(10, "games", EntryKind::Expense, "2026-02-04"),
    ];
    let groups = stats::by_category(&txs);
    let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
    assert_eq!(labels, vec!["food", "transit", "games"]);
    assert_eq!(groups[0].value, 125);
    let total: i64 = groups.iter().map(|g| g.value).sum();
    assert_eq!(total, 185);
}

#[test]
fn share_never_divides_by_zero() {
    assert_eq!(stats::share(0, 0), 0.0);
    assert_eq!(stats::share(-5, 0), 0.0);
    assert_eq!(stats::share(-5, -10), 0.0);
    assert!((stats::share(25, 100) - 0.25).abs() < 1e-12);
}
