// Copyright (c) 2025 Findash Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde_json::json;

use crate::stats::{category_breakdown, compute_stats, demo_trend};
use crate::store::TransactionStore;
use crate::utils::{format_currency, format_percent, maybe_print_json, parse_decimal, pretty_table};

pub fn handle(store: &TransactionStore, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    // Month-over-month change has no source inside the transaction list; it
    // arrives from outside, defaulting to the demo figure.
    let monthly_change = parse_decimal(m.get_one::<String>("monthly-change").unwrap())?;

    let stats = compute_stats(store.list(), monthly_change);
    let breakdown = category_breakdown(store.list());
    let trend = demo_trend();

    if maybe_print_json(
        json_flag,
        jsonl_flag,
        &json!({
            "stats": stats,
            "expenses_by_category": breakdown,
            "trend": trend,
        }),
    )? {
        return Ok(());
    }

    println!(
        "{}",
        pretty_table(
            &["Total Balance", "Total Income", "Total Expenses", "Savings Rate", "Monthly Change"],
            vec![vec![
                format_currency(&stats.balance),
                format_currency(&stats.total_income),
                format_currency(&stats.total_expenses),
                format_percent(&stats.savings_rate),
                format!("{}%", stats.monthly_change),
            ]],
        )
    );

    let breakdown_rows: Vec<Vec<String>> = breakdown
        .iter()
        .map(|r| vec![r.category.clone(), format_currency(&r.amount)])
        .collect();
    println!("{}", pretty_table(&["Category", "Spent"], breakdown_rows));

    let trend_rows: Vec<Vec<String>> = trend
        .iter()
        .map(|p| {
            vec![
                p.month.clone(),
                format_currency(&p.income),
                format_currency(&p.expenses),
                format_currency(&p.balance),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Month", "Income", "Expenses", "Balance"], trend_rows)
    );
    Ok(())
}
