// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pocketbook::identity::{self, OWNER_COOKIE};

#[test]
fn generated_keys_are_lowercase_hex_and_valid() {
    let key = identity::generate_key();
    assert_eq!(key.len(), 32);
    assert!(key.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    assert!(identity::is_valid_key(&key));
}

#[test]
fn generated_keys_differ() {
    assert_ne!(identity::generate_key(), identity::generate_key());
}

#[test]
fn key_length_bounds() {
    assert!(!identity::is_valid_key(""));
    assert!(!identity::is_valid_key("1234567"));
    assert!(identity::is_valid_key("12345678"));
    assert!(identity::is_valid_key(&"a".repeat(64)));
    assert!(!identity::is_valid_key(&"a".repeat(65)));
}

#[test]
fn cookie_key_extraction() {
    let header = format!("theme=dark; {}=aabbccdd11223344; lang=en", OWNER_COOKIE);
    assert_eq!(
        identity::cookie_key(&header).as_deref(),
        Some("aabbccdd11223344")
    );
    // too short a value is treated as absent
    let header = format!("{}=short", OWNER_COOKIE);
    assert_eq!(identity::cookie_key(&header), None);
    assert_eq!(identity::cookie_key("theme=dark"), None);
    assert_eq!(identity::cookie_key(""), None);
}

#[test]
fn issued_cookie_is_long_lived_and_http_only() {
    let cookie = identity::issue_cookie("aabbccdd11223344");
    assert!(cookie.starts_with(&format!("{}=aabbccdd11223344", OWNER_COOKIE)));
    assert!(cookie.contains("Max-Age="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Path=/"));
}
