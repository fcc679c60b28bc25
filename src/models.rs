// Copyright (c) 2025 Findash Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a transaction. The sign of a balance contribution comes from
/// the kind, never from a negative amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Income,
    Expense,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Income => "income",
            Kind::Expense => "expense",
        }
    }

    pub fn parse(s: &str) -> Option<Kind> {
        match s.to_lowercase().as_str() {
            "income" => Some(Kind::Income),
            "expense" => Some(Kind::Expense),
            _ => None,
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded income or expense event. Identifiers are assigned by the store
/// at creation time and never change. `amount` is always non-negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub kind: Kind,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

/// Everything a transaction carries except its identity. Used for both create
/// and edit so every mutable field is replaced explicitly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub kind: Kind,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

/// Who is driving the dashboard. Supplied per invocation; there is no session
/// system behind this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Admin,
    User,
    ReadOnly,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
            Role::ReadOnly => "read-only",
        }
    }

    pub fn parse(s: &str) -> Option<Role> {
        match s.to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "user" => Some(Role::User),
            "read-only" | "readonly" => Some(Role::ReadOnly),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived dashboard figures, recomputed from the full transaction list on
/// every query. `monthly_change` is an external input (a percentage), not
/// derivable from the transactions themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
    pub savings_rate: Decimal,
    pub monthly_change: Decimal,
}

/// One row of the expense-by-category breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Decimal,
}

/// One month of the income/expense trend series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
    pub balance: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

/// User-facing outcome of an operation. Severity picks the rendering; there
/// is no acknowledgment or retry protocol behind these.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl Notification {
    pub fn success(title: &str, message: &str) -> Self {
        Notification {
            title: title.to_string(),
            message: message.to_string(),
            severity: Severity::Success,
        }
    }

    pub fn error(title: &str, message: &str) -> Self {
        Notification {
            title: title.to_string(),
            message: message.to_string(),
            severity: Severity::Error,
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

/// Category vocabulary offered when entering an income transaction. Enforced
/// at entry time only; stored transactions keep whatever label they were
/// created with.
pub static INCOME_CATEGORIES: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec!["Salary", "Freelance", "Investments", "Business", "Other Income"]);

/// Category vocabulary offered when entering an expense transaction.
pub static EXPENSE_CATEGORIES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "Food",
        "Transport",
        "Entertainment",
        "Shopping",
        "Bills",
        "Healthcare",
        "Education",
        "Other Expense",
    ]
});

pub fn categories_for(kind: Kind) -> &'static [&'static str] {
    match kind {
        Kind::Income => INCOME_CATEGORIES.as_slice(),
        Kind::Expense => EXPENSE_CATEGORIES.as_slice(),
    }
}
