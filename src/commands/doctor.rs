// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::identity::{MAX_KEY_LEN, MIN_KEY_LEN};
use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::{Connection, params};

/// Collect every row that violates an invariant the API normally enforces.
/// Each finding is an (issue, detail) pair.
pub fn findings(conn: &Connection) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();

    // 1) Amounts must be strictly positive
    let mut stmt = conn.prepare("SELECT id, amount FROM transactions WHERE amount <= 0")?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let amount: i64 = r.get(1)?;
        rows.push(vec!["non_positive_amount".into(), format!("row {} ({})", id, amount)]);
    }

    // 2) Kind must be one of the two known values
    let mut stmt2 =
        conn.prepare("SELECT id, kind FROM transactions WHERE kind NOT IN ('income','expense')")?;
    let mut cur2 = stmt2.query([])?;
    while let Some(r) = cur2.next()? {
        let id: i64 = r.get(0)?;
        let kind: String = r.get(1)?;
        rows.push(vec!["unknown_kind".into(), format!("row {} ('{}')", id, kind)]);
    }

    // 3) Event dates must parse as YYYY-MM-DD
    let mut stmt3 = conn.prepare("SELECT id, occurred_at FROM transactions")?;
    let mut cur3 = stmt3.query([])?;
    while let Some(r) = cur3.next()? {
        let id: i64 = r.get(0)?;
        let date: String = r.get(1)?;
        if chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
            rows.push(vec!["malformed_date".into(), format!("row {} ('{}')", id, date)]);
        }
    }

    // 4) Owner keys must be within the accepted length bound
    let mut stmt4 = conn.prepare(
        "SELECT id, length(owner_key) FROM transactions
         WHERE length(owner_key) < ?1 OR length(owner_key) > ?2",
    )?;
    let mut cur4 = stmt4.query(params![MIN_KEY_LEN as i64, MAX_KEY_LEN as i64])?;
    while let Some(r) = cur4.next()? {
        let id: i64 = r.get(0)?;
        let len: i64 = r.get(1)?;
        rows.push(vec!["bad_owner_key".into(), format!("row {} (length {})", id, len)]);
    }

    // 5) Goal targets are never negative
    let mut stmt5 = conn.prepare(
        "SELECT owner_key FROM owner_settings WHERE savings_target < 0 OR debt_total < 0",
    )?;
    let mut cur5 = stmt5.query([])?;
    while let Some(r) = cur5.next()? {
        let owner: String = r.get(0)?;
        rows.push(vec!["negative_target".into(), format!("owner {}", owner)]);
    }

    Ok(rows)
}

pub fn handle(conn: &Connection) -> Result<()> {
    let rows = findings(conn)?;
    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
