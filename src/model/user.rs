use super::{Entity, Payload, SqliteQuery};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

const COLUMNS: &[&str] = &["id", "first_name", "last_name", "age", "email", "role", "phone"];
const UPDATABLE: &[&str] = &["first_name", "last_name", "age", "role", "phone"];

/// A customer or executor account. `email` is fixed at creation and never updated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub email: String,
    pub role: String,
    pub phone: String,
}

/// Update body for a user. An `email` key in the request is ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct UserChanges {
    pub first_name: String,
    pub last_name: String,
    pub age: i64,
    pub role: String,
    pub phone: String,
}

impl Payload for User {
    const REQUIRED: &'static [&'static str] = COLUMNS;
}

impl Payload for UserChanges {
    const REQUIRED: &'static [&'static str] = UPDATABLE;
}

impl Entity for User {
    const TABLE: &'static str = "user";
    const LABEL: &'static str = "USER";
    const COLUMNS: &'static [&'static str] = COLUMNS;
    const UPDATABLE: &'static [&'static str] = UPDATABLE;

    type Changes = UserChanges;

    fn id(&self) -> i64 {
        self.id
    }

    fn bind_all<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.id)
            .bind(&self.first_name)
            .bind(&self.last_name)
            .bind(self.age)
            .bind(&self.email)
            .bind(&self.role)
            .bind(&self.phone)
    }

    fn bind_changes<'q>(changes: &'q UserChanges, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(&changes.first_name)
            .bind(&changes.last_name)
            .bind(changes.age)
            .bind(&changes.role)
            .bind(&changes.phone)
    }
}
