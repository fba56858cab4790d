// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{EntryKind, Transaction};
use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, params};

/// A validated entry ready to be written. Amount is whole units, strictly
/// positive; category is trimmed and non-empty.
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub amount: i64,
    pub category: String,
    pub kind: EntryKind,
    pub occurred_at: NaiveDate,
}

type RowParts = (i64, String, i64, String, String, NaiveDate, NaiveDateTime);

fn from_parts(parts: RowParts) -> Result<Transaction> {
    let (id, owner_key, amount, category, kind, occurred_at, created_at) = parts;
    let kind = EntryKind::parse(&kind)
        .with_context(|| format!("Unknown kind '{}' on row {}", kind, id))?;
    Ok(Transaction {
        id,
        owner_key,
        amount,
        category,
        kind,
        occurred_at,
        created_at,
    })
}

fn read_parts(r: &rusqlite::Row) -> rusqlite::Result<RowParts> {
    Ok((
        r.get(0)?,
        r.get(1)?,
        r.get(2)?,
        r.get(3)?,
        r.get(4)?,
        r.get(5)?,
        r.get(6)?,
    ))
}

const COLUMNS: &str = "id, owner_key, amount, category, kind, occurred_at, created_at";

pub fn list(conn: &Connection, owner: &str) -> Result<Vec<Transaction>> {
    let sql = format!(
        "SELECT {} FROM transactions WHERE owner_key=?1
         ORDER BY occurred_at DESC, created_at DESC, id DESC",
        COLUMNS
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![owner], read_parts)?;
    let mut out = Vec::new();
    for row in rows {
        out.push(from_parts(row?)?);
    }
    Ok(out)
}

pub fn get(conn: &Connection, owner: &str, id: i64) -> Result<Option<Transaction>> {
    let sql = format!(
        "SELECT {} FROM transactions WHERE id=?1 AND owner_key=?2",
        COLUMNS
    );
    let parts = conn
        .query_row(&sql, params![id, owner], read_parts)
        .optional()?;
    parts.map(from_parts).transpose()
}

pub fn insert(conn: &Connection, owner: &str, entry: &NewEntry) -> Result<Transaction> {
    conn.execute(
        "INSERT INTO transactions(owner_key, amount, category, kind, occurred_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            owner,
            entry.amount,
            entry.category,
            entry.kind.as_str(),
            entry.occurred_at.to_string()
        ],
    )?;
    let id = conn.last_insert_rowid();
    get(conn, owner, id)?.context("Inserted row not readable")
}

/// Mutate a row matched jointly on id and owner. A row owned by someone
/// else behaves exactly like a missing row.
pub fn update(
    conn: &Connection,
    owner: &str,
    id: i64,
    entry: &NewEntry,
) -> Result<Option<Transaction>> {
    let changed = conn.execute(
        "UPDATE transactions SET amount=?1, category=?2, kind=?3, occurred_at=?4
         WHERE id=?5 AND owner_key=?6",
        params![
            entry.amount,
            entry.category,
            entry.kind.as_str(),
            entry.occurred_at.to_string(),
            id,
            owner
        ],
    )?;
    if changed == 0 {
        return Ok(None);
    }
    get(conn, owner, id)
}

pub fn delete(conn: &Connection, owner: &str, id: i64) -> Result<bool> {
    let deleted = conn.execute(
        "DELETE FROM transactions WHERE id=?1 AND owner_key=?2",
        params![id, owner],
    )?;
    Ok(deleted > 0)
}
