// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rand::RngCore;
use rand::rngs::OsRng;
use std::fmt::Write as _;

/// Cookie carrying the owner key. A single name is the source of truth for
/// identity; any holder of the value has full access to that owner's rows.
pub const OWNER_COOKIE: &str = "pb_owner";

pub const MIN_KEY_LEN: usize = 8;
pub const MAX_KEY_LEN: usize = 64;

const KEY_BYTES: usize = 16;

// Two years, in seconds.
const COOKIE_MAX_AGE: u64 = 63_072_000;

pub fn generate_key() -> String {
    let mut buf = [0u8; KEY_BYTES];
    OsRng.fill_bytes(&mut buf);
    let mut out = String::with_capacity(KEY_BYTES * 2);
    for b in buf {
        let _ = write!(out, "{:02x}", b);
    }
    out
}

pub fn is_valid_key(key: &str) -> bool {
    (MIN_KEY_LEN..=MAX_KEY_LEN).contains(&key.len())
}

/// Extract a valid owner key from a raw `Cookie` header value, if present.
pub fn cookie_key(header: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == OWNER_COOKIE)
        .map(|(_, value)| value.to_string())
        .filter(|value| is_valid_key(value))
}

pub fn issue_cookie(key: &str) -> String {
    format!(
        "{}={}; Path=/; Max-Age={}; SameSite=Lax; HttpOnly",
        OWNER_COOKIE, key, COOKIE_MAX_AGE
    )
}
