// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

static SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,，_\s]+").expect("separator regex"));

/// Normalize a user-entered amount string to plain ASCII digits: full-width
/// digits and punctuation become their ASCII equivalents, thousands
/// separators and whitespace are stripped.
pub fn normalize_amount(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '０'..='９' => {
                let digit = (c as u32 - '０' as u32) as u8;
                out.push(char::from(b'0' + digit));
            }
            '．' => out.push('.'),
            '－' => out.push('-'),
            _ => out.push(c),
        }
    }
    SEPARATORS.replace_all(out.trim(), "").into_owned()
}

/// Parse an amount from its wire form (JSON number or string) into whole
/// currency units. Fractions are truncated; anything non-finite, or whose
/// whole part is not strictly positive, is rejected.
pub fn parse_amount(raw: &serde_json::Value) -> Result<i64> {
    match raw {
        serde_json::Value::Number(n) => {
            let v = n.as_f64().context("Invalid amount")?;
            if !v.is_finite() {
                bail!("Invalid amount '{}'", n);
            }
            let whole = v.trunc() as i64;
            if whole <= 0 {
                bail!("Invalid amount '{}'", n);
            }
            Ok(whole)
        }
        serde_json::Value::String(s) => {
            let cleaned = normalize_amount(s);
            let d = cleaned
                .parse::<Decimal>()
                .ok()
                .with_context(|| format!("Invalid amount '{}'", s))?;
            let whole = d
                .trunc()
                .to_i64()
                .with_context(|| format!("Invalid amount '{}'", s))?;
            if whole <= 0 {
                bail!("Invalid amount '{}'", s);
            }
            Ok(whole)
        }
        other => bail!("Invalid amount '{}'", other),
    }
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_month(s: &str) -> Result<String> {
    chrono::NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}', expected YYYY-MM", s))?;
    Ok(s.to_string())
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}
