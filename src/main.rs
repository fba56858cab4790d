// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use pocketbook::{api, cli, commands, db};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pocketbook=info".into()),
        )
        .init();

    let matches = cli::build_cli().get_matches();

    match matches.subcommand() {
        Some(("serve", sub)) => {
            let conn = open_db(sub)?;
            let addr: SocketAddr = sub.get_one::<String>("addr").unwrap().parse()?;
            api::run_server(addr, conn).await?;
        }
        Some(("init", sub)) => {
            let path = db_location(sub)?;
            db::open_at(&path)?;
            println!("Database initialized at {}", path.display());
        }
        Some(("doctor", sub)) => commands::doctor::handle(&open_db(sub)?)?,
        Some(("export", sub)) => commands::export::handle(&open_db(sub)?, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

fn db_location(sub: &clap::ArgMatches) -> Result<PathBuf> {
    match sub.get_one::<String>("db") {
        Some(p) => Ok(PathBuf::from(p)),
        None => db::db_path(),
    }
}

fn open_db(sub: &clap::ArgMatches) -> Result<Connection> {
    match sub.get_one::<String>("db") {
        Some(p) => db::open_at(Path::new(p)),
        None => db::open_or_init(),
    }
}
