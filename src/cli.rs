// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, Command};

fn db_arg() -> Arg {
    Arg::new("db")
        .long("db")
        .value_name("PATH")
        .help("Database file (defaults to the platform data dir)")
}

pub fn build_cli() -> Command {
    Command::new("pocketbook")
        .version(clap::crate_version!())
        .about("Anonymous per-device budget ledger with goal tracking")
        .subcommand(
            Command::new("serve")
                .about("Run the HTTP server")
                .arg(
                    Arg::new("addr")
                        .long("addr")
                        .value_name("HOST:PORT")
                        .default_value("127.0.0.1:3000"),
                )
                .arg(db_arg()),
        )
        .subcommand(
            Command::new("init")
                .about("Create the database and print its location")
                .arg(db_arg()),
        )
        .subcommand(
            Command::new("doctor")
                .about("Scan the database for rows violating ledger invariants")
                .arg(db_arg()),
        )
        .subcommand(
            Command::new("export")
                .about("Export one owner's ledger")
                .arg(
                    Arg::new("owner")
                        .long("owner")
                        .value_name("KEY")
                        .required(true),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_name("FMT")
                        .default_value("csv"),
                )
                .arg(Arg::new("out").long("out").value_name("PATH").required(true))
                .arg(db_arg()),
        )
}
