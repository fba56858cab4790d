// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived figures over a fetched transaction set. Everything here is a
//! pure function of its inputs; nothing is persisted or cached.

use crate::models::{EntryKind, Transaction};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MonthSummary {
    pub income: i64,
    pub expense: i64,
    pub balance: i64,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub current: i64,
    pub target: i64,
    pub ratio: f64,
    pub percent: u32,
    pub remaining: i64,
    pub achieved: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieDatum {
    pub label: String,
    pub value: i64,
}

/// Expense categories containing this marker count toward debt repayment.
/// Free-text convention, matched literally.
pub const REPAYMENT_MARKER: &str = "repayment";

pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

pub fn for_month(txs: &[Transaction], month: &str) -> Vec<Transaction> {
    txs.iter()
        .filter(|t| month_key(t.occurred_at) == month)
        .cloned()
        .collect()
}

pub fn summarize(txs: &[Transaction]) -> MonthSummary {
    let mut income = 0i64;
    let mut expense = 0i64;
    for t in txs {
        match t.kind {
            EntryKind::Income => income += t.amount,
            EntryKind::Expense => expense += t.amount,
        }
    }
    MonthSummary {
        income,
        expense,
        balance: income - expense,
    }
}

/// `achieved` is judged on the raw current value, so overshooting the
/// target still reads as achieved while the displayed ratio stays capped.
pub fn goal_progress(current: i64, target: i64) -> GoalProgress {
    let ratio = if target > 0 {
        let r = current as f64 / target as f64;
        if r.is_finite() { r.clamp(0.0, 1.0) } else { 0.0 }
    } else {
        0.0
    };
    GoalProgress {
        current,
        target,
        ratio,
        percent: (ratio * 100.0).round() as u32,
        remaining: (target - current).max(0),
        achieved: target > 0 && current >= target,
    }
}

pub fn repayment_total(txs: &[Transaction]) -> i64 {
    txs.iter()
        .filter(|t| t.kind == EntryKind::Expense && t.category.contains(REPAYMENT_MARKER))
        .map(|t| t.amount)
        .sum()
}

pub fn remaining_debt(debt_total: i64, repaid: i64) -> i64 {
    (debt_total - repaid).max(0)
}

/// Group amounts by category, preserving first-seen order.
pub fn by_category(txs: &[Transaction]) -> Vec<PieDatum> {
    let mut groups: Vec<PieDatum> = Vec::new();
    for t in txs {
        match groups.iter_mut().find(|g| g.label == t.category) {
            Some(g) => g.value += t.amount,
            None => groups.push(PieDatum {
                label: t.category.clone(),
                value: t.amount,
            }),
        }
    }
    groups
}

/// A group's slice of the whole. The denominator is floored at one so a
/// zero or negative total never divides by zero.
pub fn share(value: i64, total: i64) -> f64 {
    value.max(0) as f64 / total.max(1) as f64
}
