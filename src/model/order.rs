use super::{Entity, Payload, SqliteQuery};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

const COLUMNS: &[&str] = &[
    "id",
    "name",
    "description",
    "start_date",
    "end_date",
    "address",
    "price",
    "customer_id",
    "executor_id",
];
const UPDATABLE: &[&str] = &[
    "name",
    "description",
    "start_date",
    "end_date",
    "address",
    "price",
    "customer_id",
    "executor_id",
];

/// A job posted by a customer. Dates are kept as the strings the client sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub address: String,
    pub price: i64,
    pub customer_id: i64,
    pub executor_id: i64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct OrderChanges {
    pub name: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
    pub address: String,
    pub price: i64,
    pub customer_id: i64,
    pub executor_id: i64,
}

impl Payload for Order {
    const REQUIRED: &'static [&'static str] = COLUMNS;
}

impl Payload for OrderChanges {
    const REQUIRED: &'static [&'static str] = UPDATABLE;
}

impl Entity for Order {
    const TABLE: &'static str = "order";
    const LABEL: &'static str = "ORDER";
    const COLUMNS: &'static [&'static str] = COLUMNS;
    const UPDATABLE: &'static [&'static str] = UPDATABLE;

    type Changes = OrderChanges;

    fn id(&self) -> i64 {
        self.id
    }

    fn bind_all<'q>(&'q self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.id)
            .bind(&self.name)
            .bind(&self.description)
            .bind(&self.start_date)
            .bind(&self.end_date)
            .bind(&self.address)
            .bind(self.price)
            .bind(self.customer_id)
            .bind(self.executor_id)
    }

    fn bind_changes<'q>(changes: &'q OrderChanges, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(&changes.name)
            .bind(&changes.description)
            .bind(&changes.start_date)
            .bind(&changes.end_date)
            .bind(&changes.address)
            .bind(changes.price)
            .bind(changes.customer_id)
            .bind(changes.executor_id)
    }
}
