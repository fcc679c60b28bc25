// Copyright (c) 2025 Findash Maintainers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

use crate::models::{Notification, Role};

/// Mutating intents that require a permission check. Listing and aggregation
/// are open to every role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Edit,
    Delete,
}

impl Action {
    fn denial_message(&self) -> &'static str {
        match self {
            Action::Add => "Read-only users cannot add transactions.",
            Action::Edit => "Read-only users cannot edit transactions.",
            Action::Delete => "Read-only users cannot delete transactions.",
        }
    }
}

/// A denied mutating action. The message is fixed per action and surfaced to
/// the user verbatim.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct PermissionError {
    pub action: Action,
    pub message: &'static str,
}

impl PermissionError {
    pub fn notification(&self) -> Notification {
        Notification::error("Access Denied", self.message)
    }
}

/// Decides whether `role` may perform `action`. Read-only denies every
/// mutating action; `User` and `Admin` currently carry identical permissions
/// and both allow everything.
///
/// This gate is advisory at the data layer: the store itself is role-agnostic
/// and callers must check before invoking a mutating store operation.
pub fn check(role: Role, action: Action) -> Result<(), PermissionError> {
    match role {
        Role::ReadOnly => Err(PermissionError {
            action,
            message: action.denial_message(),
        }),
        Role::User | Role::Admin => Ok(()),
    }
}
