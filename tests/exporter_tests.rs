// Copyright (c) 2025 Findash Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde_json::json;
use tempfile::tempdir;

use findash::store::TransactionStore;
use findash::{cli, commands::exporter};

fn export_matches(format: &str, out: &str) -> clap::ArgMatches {
    let matches = cli::build_cli().get_matches_from([
        "findash",
        "export",
        "transactions",
        "--format",
        format,
        "--out",
        out,
    ]);
    if let Some(("export", export_m)) = matches.subcommand() {
        export_m.clone()
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn export_transactions_writes_csv_snapshot() {
    let store = TransactionStore::seeded();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();

    exporter::handle(&store, &export_matches("csv", &out_str)).unwrap();

    let mut rdr = csv::Reader::from_path(&out_path).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers,
        csv::StringRecord::from(vec!["id", "kind", "amount", "category", "description", "date"])
    );
    let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(records.len(), 4);
    assert_eq!(&records[0][0], "1");
    assert_eq!(&records[0][1], "income");
    assert_eq!(&records[0][2], "5000");
    assert_eq!(&records[3][3], "Entertainment");
    assert_eq!(&records[3][5], "2024-01-12");
}

#[test]
fn export_transactions_writes_pretty_json() {
    let mut store = TransactionStore::new();
    store.add(findash::models::TransactionDraft {
        kind: findash::models::Kind::Expense,
        amount: "12.34".parse().unwrap(),
        category: "Food".to_string(),
        description: "Weekly run".to_string(),
        date: chrono::NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
    });

    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    let out_str = out_path.to_string_lossy().to_string();

    exporter::handle(&store, &export_matches("json", &out_str)).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(
        parsed,
        json!([
            {
                "id": "1",
                "kind": "expense",
                "amount": "12.34",
                "category": "Food",
                "description": "Weekly run",
                "date": "2025-01-02"
            }
        ])
    );
}

#[test]
fn export_transactions_rejects_unknown_format() {
    let store = TransactionStore::seeded();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    let out_str = out_path.to_string_lossy().to_string();

    assert!(exporter::handle(&store, &export_matches("xml", &out_str)).is_err());
    assert!(!out_path.exists());
}
