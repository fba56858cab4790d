// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::OwnerSettings;
use anyhow::Result;
use rusqlite::{Connection, OptionalExtension, params};

pub fn load(conn: &Connection, owner: &str) -> Result<OwnerSettings> {
    let row = conn
        .query_row(
            "SELECT savings_target, debt_total FROM owner_settings WHERE owner_key=?1",
            params![owner],
            |r| {
                Ok(OwnerSettings {
                    savings_target: r.get(0)?,
                    debt_total: r.get(1)?,
                })
            },
        )
        .optional()?;
    Ok(row.unwrap_or_default())
}

pub fn save(conn: &Connection, owner: &str, s: &OwnerSettings) -> Result<()> {
    conn.execute(
        "INSERT INTO owner_settings(owner_key, savings_target, debt_total, updated_at)
         VALUES (?1, ?2, ?3, datetime('now'))
         ON CONFLICT(owner_key) DO UPDATE SET
             savings_target=excluded.savings_target,
             debt_total=excluded.debt_total,
             updated_at=excluded.updated_at",
        params![owner, s.savings_target, s.debt_total],
    )?;
    Ok(())
}
