// Copyright (c) 2025 Findash Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};

use crate::models::{categories_for, Kind};
use crate::utils::pretty_table;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let kinds: Vec<Kind> = match sub.get_one::<String>("kind") {
                Some(raw) => match Kind::parse(raw) {
                    Some(k) => vec![k],
                    None => bail!("Invalid kind '{}', expected income or expense", raw),
                },
                None => vec![Kind::Income, Kind::Expense],
            };
            let mut data = Vec::new();
            for kind in kinds {
                for name in categories_for(kind) {
                    data.push(vec![kind.to_string(), name.to_string()]);
                }
            }
            println!("{}", pretty_table(&["Kind", "Category"], data));
        }
        _ => {}
    }
    Ok(())
}
