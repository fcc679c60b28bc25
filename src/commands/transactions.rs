// Copyright (c) 2025 Findash Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{categories_for, Kind, Notification, Role, Transaction, TransactionDraft};
use crate::permissions::{self, Action};
use crate::store::TransactionStore;
use crate::utils::{format_currency, format_date, maybe_print_json, parse_date, parse_decimal, pretty_table};

pub fn handle(store: &mut TransactionStore, role: Role, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(store, role, sub)?,
        Some(("edit", sub)) => edit(store, role, sub)?,
        Some(("rm", sub)) => rm(store, role, sub)?,
        Some(("list", sub)) => list(store, sub)?,
        _ => {}
    }
    Ok(())
}

/// Boundary validation for the add/edit forms: parse the kind, require a
/// non-negative amount, require a category from the vocabulary for that kind,
/// default the date to today. The store itself validates none of this.
pub fn parse_draft(sub: &clap::ArgMatches) -> Result<TransactionDraft> {
    let kind_raw = sub.get_one::<String>("kind").unwrap();
    let kind = match Kind::parse(kind_raw) {
        Some(k) => k,
        None => bail!("Invalid kind '{}', expected income or expense", kind_raw),
    };
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    if amount < Decimal::ZERO {
        bail!("Amount must be non-negative; use --kind expense for outgoing money");
    }
    let category = sub.get_one::<String>("category").unwrap().trim().to_string();
    if category.is_empty() {
        bail!("Category must not be empty");
    }
    if !categories_for(kind).contains(&category.as_str()) {
        bail!(
            "Unknown {} category '{}' (expected one of: {})",
            kind,
            category,
            categories_for(kind).join(", ")
        );
    }
    let date = match sub.get_one::<String>("date") {
        Some(d) => parse_date(d)?,
        None => chrono::Local::now().date_naive(),
    };
    let description = sub
        .get_one::<String>("description")
        .map(|s| s.to_string())
        .unwrap_or_default();
    Ok(TransactionDraft {
        kind,
        amount,
        category,
        description,
        date,
    })
}

fn add(store: &mut TransactionStore, role: Role, sub: &clap::ArgMatches) -> Result<()> {
    if let Err(denied) = permissions::check(role, Action::Add) {
        eprintln!("{}", denied.notification());
        return Ok(());
    }
    let draft = parse_draft(sub)?;
    let tx = store.add(draft);
    println!(
        "{}",
        Notification::success("Transaction Added", "The transaction has been successfully added.")
    );
    println!(
        "Recorded {} {} '{}' on {} (id: {})",
        tx.kind,
        format_currency(&tx.amount),
        tx.category,
        tx.date,
        tx.id
    );
    Ok(())
}

fn edit(store: &mut TransactionStore, role: Role, sub: &clap::ArgMatches) -> Result<()> {
    if let Err(denied) = permissions::check(role, Action::Edit) {
        eprintln!("{}", denied.notification());
        return Ok(());
    }
    let id = sub.get_one::<String>("id").unwrap();
    let draft = parse_draft(sub)?;
    let tx = store.update(id, draft)?;
    println!(
        "{}",
        Notification::success(
            "Transaction Updated",
            "The transaction has been successfully updated."
        )
    );
    println!(
        "Now {} {} '{}' on {} (id: {})",
        tx.kind,
        format_currency(&tx.amount),
        tx.category,
        tx.date,
        tx.id
    );
    Ok(())
}

fn rm(store: &mut TransactionStore, role: Role, sub: &clap::ArgMatches) -> Result<()> {
    if let Err(denied) = permissions::check(role, Action::Delete) {
        eprintln!("{}", denied.notification());
        return Ok(());
    }
    let id = sub.get_one::<String>("id").unwrap();
    if store.remove(id) {
        println!(
            "{}",
            Notification::success(
                "Transaction Deleted",
                "The transaction has been successfully deleted."
            )
        );
    } else {
        // Deletion is idempotent; an absent id is not an error.
        println!("No transaction with id '{}'; nothing to delete", id);
    }
    Ok(())
}

fn list(store: &TransactionStore, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    r.date.clone(),
                    r.kind.clone(),
                    r.category.clone(),
                    r.description.clone(),
                    r.amount.clone(),
                ]
            })
            .collect();
        println!("{} transactions", data.len());
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Kind", "Category", "Description", "Amount"],
                rows,
            )
        );
    }
    Ok(())
}

#[derive(Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub kind: String,
    pub category: String,
    pub description: String,
    pub amount: String,
}

fn matches_filters(
    t: &Transaction,
    search: Option<&str>,
    kind: Option<Kind>,
    category: Option<&str>,
) -> bool {
    if let Some(term) = search {
        let term = term.to_lowercase();
        let hit = t.description.to_lowercase().contains(&term)
            || t.category.to_lowercase().contains(&term);
        if !hit {
            return false;
        }
    }
    if let Some(k) = kind {
        if t.kind != k {
            return false;
        }
    }
    if let Some(c) = category {
        if t.category != c {
            return false;
        }
    }
    true
}

/// Applies the list filters to the store snapshot and renders display rows.
/// Income amounts are prefixed `+`, expenses `-`; the stored amounts stay
/// non-negative.
pub fn query_rows(store: &TransactionStore, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let search = sub.get_one::<String>("search").map(|s| s.as_str());
    let kind = match sub.get_one::<String>("kind") {
        Some(raw) => match Kind::parse(raw) {
            Some(k) => Some(k),
            None => bail!("Invalid kind '{}', expected income or expense", raw),
        },
        None => None,
    };
    let category = sub.get_one::<String>("category").map(|s| s.as_str());
    let limit = sub.get_one::<usize>("limit").copied();

    let mut data = Vec::new();
    for t in store
        .list()
        .iter()
        .filter(|t| matches_filters(t, search, kind, category))
    {
        data.push(TransactionRow {
            id: t.id.clone(),
            date: format_date(&t.date),
            kind: t.kind.to_string(),
            category: t.category.clone(),
            description: t.description.clone(),
            amount: match t.kind {
                Kind::Income => format!("+{}", format_currency(&t.amount)),
                Kind::Expense => format!("-{}", format_currency(&t.amount)),
            },
        });
        if let Some(n) = limit {
            if data.len() == n {
                break;
            }
        }
    }
    Ok(data)
}
