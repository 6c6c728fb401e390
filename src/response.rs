//! Plain-text confirmations returned by mutating routes.

use crate::model::Entity;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Added,
    Updated,
    Deleted,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Added => "ADDED",
            Action::Updated => "UPDATED",
            Action::Deleted => "DELETED",
        })
    }
}

/// `USER ADDED`, `ORDER UPDATED`, `OFFER DELETED`.
pub fn confirmation<E: Entity>(action: Action) -> String {
    format!("{} {}", E::LABEL, action)
}
