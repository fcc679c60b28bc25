// Copyright (c) 2025 Findash Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use findash::store::TransactionStore;
use findash::{cli, commands::transactions};

fn list_matches(args: &[&str]) -> clap::ArgMatches {
    let mut full = vec!["findash", "tx", "list"];
    full.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(full);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", list_m)) = tx_m.subcommand() {
            return list_m.clone();
        }
        panic!("no list subcommand");
    }
    panic!("no tx subcommand");
}

#[test]
fn list_limit_respected() {
    let store = TransactionStore::seeded();
    let rows = transactions::query_rows(&store, &list_matches(&["--limit", "2"])).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, "1");
    assert_eq!(rows[1].id, "2");
}

#[test]
fn list_search_matches_description_and_category_case_insensitively() {
    let store = TransactionStore::seeded();

    // "grocery" hits the Food entry's description.
    let rows = transactions::query_rows(&store, &list_matches(&["--search", "GROCERY"])).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].category, "Food");

    // "trans" hits the Transport entry's category.
    let rows = transactions::query_rows(&store, &list_matches(&["--search", "trans"])).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].category, "Transport");
}

#[test]
fn list_kind_and_category_filters() {
    let store = TransactionStore::seeded();

    let rows = transactions::query_rows(&store, &list_matches(&["--kind", "expense"])).unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|r| r.kind == "expense"));

    let rows =
        transactions::query_rows(&store, &list_matches(&["--category", "Entertainment"])).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, "4");
}

#[test]
fn list_rows_render_signed_currency_and_medium_dates() {
    let store = TransactionStore::seeded();
    let rows = transactions::query_rows(&store, &list_matches(&[])).unwrap();
    assert_eq!(rows[0].amount, "+$5,000.00");
    assert_eq!(rows[0].date, "Jan 15, 2024");
    assert_eq!(rows[1].amount, "-$120.00");
}

#[test]
fn list_rejects_unknown_kind_filter() {
    let store = TransactionStore::seeded();
    assert!(transactions::query_rows(&store, &list_matches(&["--kind", "transfer"])).is_err());
}

#[test]
fn read_only_role_blocks_mutation_before_it_reaches_the_store() {
    let mut store = TransactionStore::seeded();
    let matches = cli::build_cli().get_matches_from(["findash", "tx", "rm", "2"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        // Denial is a notification, not a failure; the store is untouched.
        transactions::handle(&mut store, findash::models::Role::ReadOnly, tx_m).unwrap();
    } else {
        panic!("no tx subcommand");
    }
    assert_eq!(store.len(), 4);
    assert!(store.get("2").is_some());
}

#[test]
fn user_role_deletes_through_the_command_layer() {
    let mut store = TransactionStore::seeded();
    let matches = cli::build_cli().get_matches_from(["findash", "tx", "rm", "2"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        transactions::handle(&mut store, findash::models::Role::User, tx_m).unwrap();
    } else {
        panic!("no tx subcommand");
    }
    assert_eq!(store.len(), 3);
    assert!(store.get("2").is_none());
}

fn add_matches(args: &[&str]) -> clap::ArgMatches {
    let mut full = vec!["findash", "tx", "add"];
    full.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(full);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("add", add_m)) = tx_m.subcommand() {
            return add_m.clone();
        }
        panic!("no add subcommand");
    }
    panic!("no tx subcommand");
}

#[test]
fn draft_parsing_accepts_a_well_formed_form() {
    let m = add_matches(&[
        "--kind",
        "income",
        "--amount",
        "250.75",
        "--category",
        "Freelance",
        "--date",
        "2024-02-10",
        "--description",
        "Logo work",
    ]);
    let draft = transactions::parse_draft(&m).unwrap();
    assert_eq!(draft.category, "Freelance");
    assert_eq!(draft.amount.to_string(), "250.75");
    assert_eq!(draft.date.to_string(), "2024-02-10");
}

#[test]
fn draft_parsing_rejects_negative_amounts() {
    let m = add_matches(&["--amount=-5", "--category", "Food"]);
    assert!(transactions::parse_draft(&m).is_err());
}

#[test]
fn draft_parsing_rejects_categories_outside_the_vocabulary() {
    // "Salary" is an income category; the default kind here is expense.
    let m = add_matches(&["--amount", "10", "--category", "Salary"]);
    assert!(transactions::parse_draft(&m).is_err());
}

#[test]
fn draft_parsing_rejects_malformed_dates() {
    let m = add_matches(&["--amount", "10", "--category", "Food", "--date", "02/10/2024"]);
    assert!(transactions::parse_draft(&m).is_err());
}
