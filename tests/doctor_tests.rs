// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pocketbook::commands::doctor;
use pocketbook::db;
use rusqlite::Connection;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    conn
}

#[test]
fn clean_database_has_no_findings() {
    let conn = setup();
    conn.execute(
        "INSERT INTO transactions(owner_key, amount, category, kind, occurred_at)
         VALUES ('aaaaaaaa11111111', 1200, 'food', 'expense', '2026-02-08')",
        [],
    )
    .unwrap();
    assert!(doctor::findings(&conn).unwrap().is_empty());
}

#[test]
fn each_violation_kind_is_reported() {
    let conn = setup();
    conn.execute_batch(
        r#"
        INSERT INTO transactions(owner_key, amount, category, kind, occurred_at)
            VALUES ('aaaaaaaa11111111', 0, 'food', 'expense', '2026-02-08');
        INSERT INTO transactions(owner_key, amount, category, kind, occurred_at)
            VALUES ('aaaaaaaa11111111', 100, 'food', 'transfer', '2026-02-08');
        INSERT INTO transactions(owner_key, amount, category, kind, occurred_at)
            VALUES ('aaaaaaaa11111111', 100, 'food', 'expense', 'not-a-date');
        INSERT INTO transactions(owner_key, amount, category, kind, occurred_at)
            VALUES ('short', 100, 'food', 'expense', '2026-02-08');
        INSERT INTO owner_settings(owner_key, savings_target, debt_total)
            VALUES ('bbbbbbbb22222222', -5, 0);
        "#,
    )
    .unwrap();

    let rows = doctor::findings(&conn).unwrap();
    let issues: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
    assert!(issues.contains(&"non_positive_amount"));
    assert!(issues.contains(&"unknown_kind"));
    assert!(issues.contains(&"malformed_date"));
    assert!(issues.contains(&"bad_owner_key"));
    assert!(issues.contains(&"negative_target"));
    assert_eq!(rows.len(), 5);
}
