// Copyright (c) 2025 Findash Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};

use findash::models::Role;
use findash::store::TransactionStore;
use findash::{cli, commands};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let role_raw = matches.get_one::<String>("role").unwrap();
    let role = match Role::parse(role_raw) {
        Some(r) => r,
        None => bail!("Invalid role '{}', expected admin, user, or read-only", role_raw),
    };

    // Everything lives in process memory and is reseeded per invocation;
    // there is no persistence layer behind this dashboard.
    let mut store = TransactionStore::seeded();

    match matches.subcommand() {
        Some(("tx", sub)) => commands::transactions::handle(&mut store, role, sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&store, sub)?,
        Some(("category", sub)) => commands::categories::handle(sub)?,
        Some(("export", sub)) => commands::exporter::handle(&store, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
