// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod error;
mod handlers;

pub use error::ApiError;

use anyhow::Result;
use axum::Router;
use axum::routing::get;
use rusqlite::Connection;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Connection>>,
}

impl AppState {
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, ApiError> {
        self.db
            .lock()
            .map_err(|_| ApiError::Internal(anyhow::anyhow!("database lock poisoned")))
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/transactions",
            get(handlers::list_transactions)
                .post(handlers::create_transaction)
                .patch(handlers::update_transaction)
                .delete(handlers::delete_transaction),
        )
        .route("/identity", get(handlers::issue_identity))
        .route(
            "/settings",
            get(handlers::get_settings).put(handlers::put_settings),
        )
        .with_state(state)
}

pub async fn run_server(addr: SocketAddr, conn: Connection) -> Result<()> {
    let app = router(AppState::new(conn));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
