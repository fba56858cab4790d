// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::api::{ApiError, AppState};
use crate::ledger::{self, NewEntry};
use crate::models::{EntryKind, OwnerSettings, Transaction};
use crate::utils::{parse_amount, parse_date};
use crate::{identity, settings};
use axum::Json;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, header};
use axum::response::{AppendHeaders, IntoResponse, Response};
use serde::Deserialize;
use serde_json::json;

const OWNER_HEADER: &str = "x-owner-key";

fn require_owner(headers: &HeaderMap) -> Result<String, ApiError> {
    headers
        .get(OWNER_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|k| identity::is_valid_key(k))
        .map(str::to_string)
        .ok_or(ApiError::BadOwnerKey)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPayload {
    #[serde(default)]
    amount: Option<serde_json::Value>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    occurred_at: Option<String>,
}

/// Field checks run in a fixed order and stop at the first failure, so the
/// caller always sees a single message for the earliest problem.
fn validate(payload: &EntryPayload, date_required: bool) -> Result<NewEntry, ApiError> {
    let amount = payload
        .amount
        .as_ref()
        .and_then(|v| parse_amount(v).ok())
        .ok_or_else(|| ApiError::Validation("Invalid amount".into()))?;

    let category = payload.category.as_deref().unwrap_or("").trim().to_string();
    if category.is_empty() {
        return Err(ApiError::Validation("Category is required".into()));
    }

    let kind = payload
        .kind
        .as_deref()
        .and_then(EntryKind::parse)
        .ok_or_else(|| ApiError::Validation("Invalid type".into()))?;

    let occurred_at = match payload.occurred_at.as_deref() {
        Some(raw) => parse_date(raw).map_err(|_| ApiError::Validation("Invalid date".into()))?,
        None if date_required => return Err(ApiError::Validation("Invalid date".into())),
        None => chrono::Local::now().date_naive(),
    };

    Ok(NewEntry {
        amount,
        category,
        kind,
        occurred_at,
    })
}

#[derive(Debug, Deserialize)]
pub struct IdQuery {
    #[serde(default)]
    id: Option<i64>,
}

fn require_id(query: Option<Query<IdQuery>>) -> Result<i64, ApiError> {
    query
        .and_then(|Query(q)| q.id)
        .ok_or_else(|| ApiError::Validation("Invalid id".into()))
}

fn require_body<T>(body: Option<Json<T>>) -> Result<T, ApiError> {
    body.map(|Json(v)| v)
        .ok_or_else(|| ApiError::Validation("Invalid request body".into()))
}

pub async fn list_transactions(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let owner = require_owner(&headers)?;
    let conn = state.conn()?;
    Ok(Json(ledger::list(&conn, &owner)?))
}

pub async fn create_transaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Option<Json<EntryPayload>>,
) -> Result<Json<Transaction>, ApiError> {
    let owner = require_owner(&headers)?;
    let payload = require_body(body)?;
    let entry = validate(&payload, false)?;
    let conn = state.conn()?;
    Ok(Json(ledger::insert(&conn, &owner, &entry)?))
}

pub async fn update_transaction(
    State(state): State<AppState>,
    query: Option<Query<IdQuery>>,
    headers: HeaderMap,
    body: Option<Json<EntryPayload>>,
) -> Result<Json<Transaction>, ApiError> {
    let owner = require_owner(&headers)?;
    let id = require_id(query)?;
    let payload = require_body(body)?;
    let entry = validate(&payload, true)?;
    let conn = state.conn()?;
    match ledger::update(&conn, &owner, id, &entry)? {
        Some(updated) => Ok(Json(updated)),
        None => Err(ApiError::NotFound),
    }
}

pub async fn delete_transaction(
    State(state): State<AppState>,
    query: Option<Query<IdQuery>>,
    headers: HeaderMap,
) -> Result<Json<serde_json::Value>, ApiError> {
    let owner = require_owner(&headers)?;
    let id = require_id(query)?;
    let conn = state.conn()?;
    if ledger::delete(&conn, &owner, id)? {
        Ok(Json(json!({ "ok": true })))
    } else {
        Err(ApiError::NotFound)
    }
}

#[derive(Debug, Deserialize)]
pub struct PeekQuery {
    #[serde(default)]
    peek: Option<String>,
}

/// Returns the caller's owner key, issuing and setting one when absent.
/// With `peek=1` this is read-only and reports `null` instead of issuing.
pub async fn issue_identity(Query(query): Query<PeekQuery>, headers: HeaderMap) -> Response {
    let existing = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(identity::cookie_key);

    if query.peek.as_deref() == Some("1") {
        return Json(json!({ "userKey": existing })).into_response();
    }

    match existing {
        Some(key) => Json(json!({ "userKey": key })).into_response(),
        None => {
            let key = identity::generate_key();
            let set_cookie = AppendHeaders([(header::SET_COOKIE, identity::issue_cookie(&key))]);
            (set_cookie, Json(json!({ "userKey": key }))).into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsPayload {
    #[serde(default)]
    savings_target: Option<i64>,
    #[serde(default)]
    debt_total: Option<i64>,
}

pub async fn get_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<OwnerSettings>, ApiError> {
    let owner = require_owner(&headers)?;
    let conn = state.conn()?;
    Ok(Json(settings::load(&conn, &owner)?))
}

pub async fn put_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Option<Json<SettingsPayload>>,
) -> Result<Json<OwnerSettings>, ApiError> {
    let owner = require_owner(&headers)?;
    let payload = require_body(body)?;
    let savings_target = payload
        .savings_target
        .filter(|v| *v >= 0)
        .ok_or_else(|| ApiError::Validation("Invalid savings target".into()))?;
    let debt_total = payload
        .debt_total
        .filter(|v| *v >= 0)
        .ok_or_else(|| ApiError::Validation("Invalid debt total".into()))?;
    let record = OwnerSettings {
        savings_target,
        debt_total,
    };
    let conn = state.conn()?;
    settings::save(&conn, &owner, &record)?;
    Ok(Json(record))
}
