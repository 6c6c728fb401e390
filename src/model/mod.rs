//! Row types for the three tables and the trait that lets the repository and
//! handlers treat them uniformly.

mod offer;
mod order;
mod user;

pub use offer::{Offer, OfferChanges};
pub use order::{Order, OrderChanges};
pub use user::{User, UserChanges};

use serde::{de::DeserializeOwned, Serialize};
use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteRow};
use sqlx::FromRow;

/// An untyped SQLite query whose placeholders are filled positionally.
pub type SqliteQuery<'q> = sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;

/// A request body. `REQUIRED` keys must be present before deserialization is attempted.
pub trait Payload: DeserializeOwned + Send + Sync + 'static {
    const REQUIRED: &'static [&'static str];
}

/// A stored row. The entity itself doubles as its create payload, since create
/// takes the caller's id together with every other field.
pub trait Entity: Payload + Serialize + for<'r> FromRow<'r, SqliteRow> + Unpin {
    /// Table name; also used to describe the entity in error messages.
    const TABLE: &'static str;
    /// Prefix of the plain-text confirmations, e.g. `USER` in `USER ADDED`.
    const LABEL: &'static str;
    /// Every column, `id` first. Bind order of [`Entity::bind_all`].
    const COLUMNS: &'static [&'static str];
    /// Columns overwritten by update. Bind order of [`Entity::bind_changes`].
    const UPDATABLE: &'static [&'static str];

    type Changes: Payload;

    fn id(&self) -> i64;

    fn bind_all<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;

    fn bind_changes<'q>(changes: &'q Self::Changes, query: SqliteQuery<'q>) -> SqliteQuery<'q>;

    /// `user 7`, `order 99`.
    fn describe(id: i64) -> String {
        format!("{} {}", Self::TABLE, id)
    }
}
