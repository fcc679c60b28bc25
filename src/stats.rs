// Copyright (c) 2025 Findash Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::models::{CategoryTotal, DashboardStats, Kind, Transaction, TrendPoint};

/// Sums income and expenses by kind and derives balance and savings rate.
/// Pure over the snapshot: same list in, same stats out. When total income is
/// zero the savings rate is defined as zero rather than falling through to a
/// division error.
///
/// `monthly_change` is carried through untouched; it comes from outside this
/// core (see the dashboard command for the demo default).
pub fn compute_stats(transactions: &[Transaction], monthly_change: Decimal) -> DashboardStats {
    let mut total_income = Decimal::ZERO;
    let mut total_expenses = Decimal::ZERO;
    for t in transactions {
        match t.kind {
            Kind::Income => total_income += t.amount,
            Kind::Expense => total_expenses += t.amount,
        }
    }
    let balance = total_income - total_expenses;
    let savings_rate = if total_income > Decimal::ZERO {
        balance / total_income
    } else {
        Decimal::ZERO
    };
    DashboardStats {
        total_income,
        total_expenses,
        balance,
        savings_rate,
        monthly_change,
    }
}

/// Per-category expense sums, one row per distinct category, in the order
/// categories are first encountered. Income entries are ignored and absent
/// categories are not zero-filled. Row order is a convention, not a contract.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut rows: Vec<CategoryTotal> = Vec::new();
    for t in transactions.iter().filter(|t| t.kind == Kind::Expense) {
        match rows.iter_mut().find(|r| r.category == t.category) {
            Some(row) => row.amount += t.amount,
            None => rows.push(CategoryTotal {
                category: t.category.clone(),
                amount: t.amount,
            }),
        }
    }
    rows
}

/// Six months of demo trend data. There is no real source for a trend series
/// in this core, so the dashboard ships the same fixed series the demo UI did.
pub fn demo_trend() -> Vec<TrendPoint> {
    fn point(month: &str, income: i64, expenses: i64) -> TrendPoint {
        TrendPoint {
            month: month.to_string(),
            income: Decimal::from(income),
            expenses: Decimal::from(expenses),
            balance: Decimal::from(income - expenses),
        }
    }
    vec![
        point("Jan", 5000, 3200),
        point("Feb", 5200, 2900),
        point("Mar", 4800, 3100),
        point("Apr", 5500, 3400),
        point("May", 5000, 2800),
        point("Jun", 5300, 3000),
    ]
}
