// Copyright (c) 2025 Findash Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{Kind, Transaction, TransactionDraft};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("No transaction with id '{id}'")]
    NotFound { id: String },
}

/// Owns the transaction list. All mutation goes through `add` / `update` /
/// `remove`; nothing else touches the collection. Newest entries are
/// prepended, so `list` yields most recent operations first by convention —
/// callers must not read anything stronger into the order.
///
/// Single-threaded by contract. Reusing this behind multiple actors requires
/// the caller to add mutual exclusion around the mutating operations.
#[derive(Debug, Default)]
pub struct TransactionStore {
    items: Vec<Transaction>,
    next_id: u64,
}

impl TransactionStore {
    pub fn new() -> Self {
        TransactionStore {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Store pre-loaded with the demo dataset: one salary payment and three
    /// expenses. Ids `1`..`4` are taken; new entries continue from `5`.
    pub fn seeded() -> Self {
        fn tx(
            id: u64,
            kind: Kind,
            amount: i64,
            category: &str,
            description: &str,
            day: u32,
        ) -> Transaction {
            Transaction {
                id: id.to_string(),
                kind,
                amount: Decimal::from(amount),
                category: category.to_string(),
                description: description.to_string(),
                date: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            }
        }
        TransactionStore {
            items: vec![
                tx(1, Kind::Income, 5000, "Salary", "Monthly salary", 15),
                tx(2, Kind::Expense, 120, "Food", "Grocery shopping", 14),
                tx(3, Kind::Expense, 80, "Transport", "Gas and parking", 13),
                tx(4, Kind::Expense, 200, "Entertainment", "Concert tickets", 12),
            ],
            next_id: 5,
        }
    }

    /// Current contents, most recent operations first by convention.
    pub fn list(&self) -> &[Transaction] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&Transaction> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Allocates a fresh identifier, prepends the new transaction, and returns
    /// it. Never fails for well-formed input; boundary validation (non-empty
    /// category, non-negative amount) happens before this is called.
    pub fn add(&mut self, draft: TransactionDraft) -> &Transaction {
        let id = self.next_id.to_string();
        self.next_id += 1;
        self.items.insert(
            0,
            Transaction {
                id,
                kind: draft.kind,
                amount: draft.amount,
                category: draft.category,
                description: draft.description,
                date: draft.date,
            },
        );
        &self.items[0]
    }

    /// Replaces every field of the matching entry except its identifier.
    pub fn update(&mut self, id: &str, draft: TransactionDraft) -> Result<&Transaction, StoreError> {
        let pos = self
            .items
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        let entry = &mut self.items[pos];
        entry.kind = draft.kind;
        entry.amount = draft.amount;
        entry.category = draft.category;
        entry.description = draft.description;
        entry.date = draft.date;
        Ok(&self.items[pos])
    }

    /// Removes the matching entry. Deletion is idempotent: removing an id
    /// that is not present is a no-op, and the return value reports whether
    /// an entry was actually removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() < before
    }
}
