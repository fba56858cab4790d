// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, bail};
use rusqlite::{Connection, params};
use serde_json::json;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let owner = m.get_one::<String>("owner").unwrap();
    let fmt = m.get_one::<String>("format").unwrap().to_lowercase();
    let out = m.get_one::<String>("out").unwrap();

    let mut stmt = conn.prepare(
        "SELECT id, occurred_at, amount, category, kind, created_at
         FROM transactions WHERE owner_key=?1
         ORDER BY occurred_at, id",
    )?;
    let rows = stmt.query_map(params![owner], |r| {
        Ok((
            r.get::<_, i64>(0)?,
            r.get::<_, String>(1)?,
            r.get::<_, i64>(2)?,
            r.get::<_, String>(3)?,
            r.get::<_, String>(4)?,
            r.get::<_, String>(5)?,
        ))
    })?;

    let mut count = 0usize;
    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "date", "amount", "category", "type", "created_at"])?;
            for row in rows {
                let (id, date, amount, category, kind, created_at) = row?;
                wtr.write_record([
                    id.to_string(),
                    date,
                    amount.to_string(),
                    category,
                    kind,
                    created_at,
                ])?;
                count += 1;
            }
            wtr.flush()?;
        }
        "json" => {
            let mut items = Vec::new();
            for row in rows {
                let (id, date, amount, category, kind, created_at) = row?;
                items.push(json!({
                    "id": id, "date": date, "amount": amount,
                    "category": category, "type": kind, "createdAt": created_at
                }));
                count += 1;
            }
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => bail!("Unknown format: {} (use csv|json)", fmt),
    }
    println!("Exported {} rows for {} to {}", count, owner, out);
    Ok(())
}
